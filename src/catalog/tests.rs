use std::convert::TryFrom;

use crate::catalog::catalog::{normalize_lookup_name, EmojiCatalog};
use crate::catalog::errors::CatalogError;
use crate::catalog::prototype::EmojiRecordPrototype;
use crate::catalog::validation::{validate, ValidationError};
use crate::records::record::EmojiRecord;
use crate::records::sprite::{Frame, SheetDimensions, SpriteFrame, SpriteSet, SpriteSize};

/// Builds the five size variants for a glyph at the given grid cell, using
/// the same sheet geometry as the bundled catalog (36x36 grid, 18px base).
fn sprite_set(column: u32, row: u32) -> SpriteSet {
    fn variant(column: u32, row: u32, factor: u32) -> SpriteFrame {
        let side = 18 * factor;
        SpriteFrame {
            source: format!("emojis_{}px.png", side),
            source_dimensions: SheetDimensions {
                x: 36 * side,
                y: 36 * side,
            },
            frame: Frame {
                x: column * side,
                y: row * side,
                w: side,
                h: side,
            },
        }
    }
    SpriteSet {
        small: variant(column, row, 1),
        normal: variant(column, row, 2),
        large: variant(column, row, 4),
        massive: variant(column, row, 8),
        biggest: variant(column, row, 16),
    }
}

fn record(number: &str, sequence: Vec<u32>, name: &str) -> EmojiRecord {
    EmojiRecord {
        number: number.to_string(),
        sequence,
        short_name: name.to_string(),
        keywords: vec![],
        main_category: String::from("Smileys & Emotion"),
        sub_category: String::from("face-smiling"),
        sprites: sprite_set(0, 0),
    }
}

#[test]
fn bundled_catalog_loads() {
    let catalog = EmojiCatalog::bundled();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.iter().count(), catalog.len());
}

#[test]
fn grinning_face_anchor_record() {
    let catalog = EmojiCatalog::bundled();
    let grinning = catalog.get_by_name("grinning face").unwrap();

    assert_eq!(grinning.sequence, vec![0x1f600]);
    assert_eq!(grinning.main_category, "Smileys & Emotion");

    let small = &grinning.sprites.small;
    assert_eq!(
        small.frame,
        Frame {
            x: 180,
            y: 450,
            w: 18,
            h: 18
        }
    );
    assert!(small.frame.fits_within(&small.source_dimensions));
}

#[test]
fn bundled_catalog_satisfies_all_invariants() {
    // Squareness, scale ratios, bounds, unique decimal numbers
    assert_eq!(validate(&EmojiCatalog::bundled().iter().cloned().collect::<Vec<_>>()), vec![]);
}

#[test]
fn frame_sides_scale_one_two_four_eight_sixteen() {
    for record in EmojiCatalog::bundled().iter() {
        let small_side = record.sprites.small.frame.w;
        for (size, sprite) in record.sprites.iter() {
            assert_eq!(
                sprite.frame.w,
                small_side * size.factor(),
                "record {} size {}",
                record.number,
                size
            );
            assert_eq!(sprite.frame.w, sprite.frame.h);
        }
    }
}

#[test]
fn sequences_are_non_empty() {
    for record in EmojiCatalog::bundled().iter() {
        assert!(!record.sequence.is_empty(), "record {}", record.number);
    }
}

#[test]
fn json_round_trip_is_idempotent() {
    let catalog = EmojiCatalog::bundled();
    let json = catalog.to_json_string().unwrap();
    let reparsed = EmojiCatalog::from_json_str(&json).unwrap();

    assert_eq!(reparsed.len(), catalog.len());
    for (original, round_tripped) in catalog.iter().zip(reparsed.iter()) {
        // Compare the full wire form, not just the sequence identity
        assert_eq!(
            EmojiRecordPrototype::from(original),
            EmojiRecordPrototype::from(round_tripped)
        );
    }

    // A second round trip serializes to the identical string
    assert_eq!(json, reparsed.to_json_string().unwrap());
}

#[test]
fn lookup_by_number_and_sequence_agree() {
    let catalog = EmojiCatalog::bundled();
    for record in catalog.iter() {
        let by_number = catalog.get_by_number(&record.number).unwrap();
        let by_sequence = catalog.get_by_sequence(&record.sequence).unwrap();
        assert_eq!(by_number.number, record.number);
        assert_eq!(by_sequence.number, record.number);
    }
    assert!(catalog.get_by_number("999999").is_none());
    assert!(catalog.get_by_sequence(&[0xffffd]).is_none());
}

#[test]
fn name_lookup_folds_case_and_delimiters() {
    let catalog = EmojiCatalog::bundled();

    let woman = catalog
        .get_by_name("woman: medium skin tone, white hair")
        .unwrap();
    assert_eq!(
        woman.sequence,
        vec![0x1f469, 0x1f3fd, 0x200d, 0x1f9b3]
    );
    assert_eq!(
        catalog.get_by_name("Woman Medium-Skin-Tone White_Hair").unwrap().number,
        woman.number
    );
}

#[test]
fn name_lookup_accepts_the_emoji_itself() {
    let catalog = EmojiCatalog::bundled();
    assert_eq!(catalog.get_by_name("😀").unwrap().short_name, "grinning face");
    assert_eq!(catalog.get_by_name("🏳️‍🌈").unwrap().short_name, "rainbow flag");
}

#[test]
fn search_matches_names_and_keywords_in_catalog_order() {
    let catalog = EmojiCatalog::bundled();

    let grins = catalog.search("grin");
    assert!(grins.len() >= 3);
    assert_eq!(grins[0].short_name, "grinning face");

    // Keyword-only match: "rofl" appears in keywords, not in any name
    let rofl = catalog.search("ROFL");
    assert_eq!(rofl.len(), 1);
    assert_eq!(rofl[0].short_name, "rolling on the floor laughing");

    assert!(catalog.search("").is_empty());
    assert!(catalog.search("qqqqxyzzy").is_empty());
}

#[test]
fn grouping_preserves_catalog_order() {
    let catalog = EmojiCatalog::bundled();
    let groups = catalog.group_by_category();

    assert_eq!(groups[0].main_category, "Smileys & Emotion");
    assert_eq!(groups[0].sub_groups[0].sub_category, "face-smiling");
    assert_eq!(
        groups[0].sub_groups[0].records[0].short_name,
        "grinning face"
    );

    // Every record lands in exactly one group
    let total: usize = groups
        .iter()
        .flat_map(|group| group.sub_groups.iter())
        .map(|sub_group| sub_group.records.len())
        .sum();
    assert_eq!(total, catalog.len());

    // Members keep catalog order within their sub group
    for group in &groups {
        for sub_group in &group.sub_groups {
            let numbers: Vec<usize> = sub_group
                .records
                .iter()
                .map(|record| {
                    catalog
                        .iter()
                        .position(|other| other.number == record.number)
                        .unwrap()
                })
                .collect();
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            assert_eq!(numbers, sorted);
        }
    }
}

#[test]
fn clip_resolves_sheet_and_frame() {
    let catalog = EmojiCatalog::bundled();
    let clip = catalog.clip("1", SpriteSize::Normal).unwrap();

    assert_eq!(clip.source, "emojis_36px.png");
    assert_eq!((clip.sheet_width, clip.sheet_height), (1296, 1296));
    assert_eq!((clip.x, clip.y, clip.w, clip.h), (360, 900, 36, 36));

    assert!(catalog.clip("999999", SpriteSize::Small).is_none());
}

#[test]
fn duplicate_numbers_are_rejected() {
    let records = vec![
        record("1", vec![0x1f600], "grinning face"),
        record("1", vec![0x1f603], "grinning face with big eyes"),
    ];
    match EmojiCatalog::from_records(records) {
        Err(CatalogError::Validation(errors)) => assert_eq!(
            errors,
            vec![ValidationError::DuplicateNumber {
                number: String::from("1")
            }]
        ),
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn out_of_bounds_frames_are_rejected() {
    let mut broken = record("1", vec![0x1f600], "grinning face");
    broken.sprites.large.frame.x = broken.sprites.large.source_dimensions.x;
    match EmojiCatalog::from_records(vec![broken]) {
        Err(CatalogError::Validation(errors)) => assert_eq!(
            errors,
            vec![ValidationError::FrameOutOfBounds {
                number: String::from("1"),
                size: SpriteSize::Large
            }]
        ),
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn extreme_frame_coordinates_are_flagged_as_out_of_bounds() {
    // Coordinates near u32::MAX must surface as validation errors, not
    // overflow in the bounds arithmetic
    let mut broken = record("1", vec![0x1f600], "grinning face");
    broken.sprites.small.frame.x = u32::MAX;
    match EmojiCatalog::from_records(vec![broken]) {
        Err(CatalogError::Validation(errors)) => assert_eq!(
            errors,
            vec![ValidationError::FrameOutOfBounds {
                number: String::from("1"),
                size: SpriteSize::Small
            }]
        ),
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn huge_glyph_sides_are_flagged_as_misscaled() {
    // A small side this large cannot have a 16x variant within u32, so the
    // scale check must flag it instead of overflowing
    fn resize(sprite: &mut SpriteFrame, side: u32) {
        sprite.frame = Frame {
            x: 0,
            y: 0,
            w: side,
            h: side,
        };
        sprite.source_dimensions = SheetDimensions {
            x: u32::MAX,
            y: u32::MAX,
        };
    }

    let mut broken = record("1", vec![0x1f600], "grinning face");
    let side = 0x2000_0000;
    resize(&mut broken.sprites.small, side);
    resize(&mut broken.sprites.normal, side * 2);
    resize(&mut broken.sprites.large, side * 4);
    resize(&mut broken.sprites.massive, side * 4);
    resize(&mut broken.sprites.biggest, side * 4);

    let errors = validate(&[broken]);
    assert_eq!(
        errors,
        vec![
            ValidationError::MisscaledFrame {
                number: String::from("1"),
                size: SpriteSize::Massive
            },
            ValidationError::MisscaledFrame {
                number: String::from("1"),
                size: SpriteSize::Biggest
            },
        ]
    );
}

#[test]
fn misscaled_and_non_square_frames_are_rejected() {
    let mut broken = record("1", vec![0x1f600], "grinning face");
    // Breaks both squareness and the 1:2:4:8:16 ratio for "normal"
    broken.sprites.normal.frame.w = 35;
    match EmojiCatalog::from_records(vec![broken]) {
        Err(CatalogError::Validation(errors)) => {
            assert!(errors.contains(&ValidationError::NonSquareFrame {
                number: String::from("1"),
                size: SpriteSize::Normal
            }));
            assert!(errors.contains(&ValidationError::MisscaledFrame {
                number: String::from("1"),
                size: SpriteSize::Normal
            }));
        }
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn non_decimal_numbers_are_rejected() {
    let broken = record("1a", vec![0x1f600], "grinning face");
    match EmojiCatalog::from_records(vec![broken]) {
        Err(CatalogError::Validation(errors)) => assert_eq!(
            errors,
            vec![ValidationError::NonDecimalNumber {
                number: String::from("1a")
            }]
        ),
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn empty_sequences_are_rejected() {
    let broken = record("1", vec![], "grinning face");
    let errors = validate(&[broken]);
    assert_eq!(
        errors,
        vec![ValidationError::EmptySequence {
            number: String::from("1")
        }]
    );
}

#[test]
fn malformed_json_sequences_fail_at_parse_time() {
    let json = r#"[{
        "number": "1",
        "code": ["zzz"],
        "shortName": "broken",
        "keywords": [],
        "mainCategory": "Smileys & Emotion",
        "subCategory": "face-smiling",
        "small": {"source": "s.png", "sourceDimensions": {"x": 18, "y": 18}, "frame": {"x": 0, "y": 0, "w": 18, "h": 18}},
        "normal": {"source": "n.png", "sourceDimensions": {"x": 36, "y": 36}, "frame": {"x": 0, "y": 0, "w": 36, "h": 36}},
        "large": {"source": "l.png", "sourceDimensions": {"x": 72, "y": 72}, "frame": {"x": 0, "y": 0, "w": 72, "h": 72}},
        "massive": {"source": "m.png", "sourceDimensions": {"x": 144, "y": 144}, "frame": {"x": 0, "y": 0, "w": 144, "h": 144}},
        "biggest": {"source": "b.png", "sourceDimensions": {"x": 288, "y": 288}, "frame": {"x": 0, "y": 0, "w": 288, "h": 288}}
    }]"#;
    match EmojiCatalog::from_json_str(json) {
        Err(CatalogError::MalformedSequence { number, code }) => {
            assert_eq!(number, "1");
            assert_eq!(code, "zzz");
        }
        other => panic!("expected MalformedSequence, got {:?}", other),
    }
}

#[test]
fn missing_fields_fail_as_json_errors() {
    // No "massive" variant
    let json = r#"[{
        "number": "1",
        "code": ["1f600"],
        "shortName": "grinning face",
        "keywords": [],
        "mainCategory": "Smileys & Emotion",
        "subCategory": "face-smiling",
        "small": {"source": "s.png", "sourceDimensions": {"x": 18, "y": 18}, "frame": {"x": 0, "y": 0, "w": 18, "h": 18}}
    }]"#;
    match EmojiCatalog::from_json_str(json) {
        Err(CatalogError::Json(_)) => {}
        other => panic!("expected a JSON error, got {:?}", other),
    }
}

#[test]
fn first_record_wins_for_duplicate_sequences() {
    let records = vec![
        record("1", vec![0x1f600], "grinning face"),
        record("2", vec![0x1f600], "grinning face again"),
    ];
    let catalog = EmojiCatalog::from_records(records).unwrap();

    // Sequence lookup resolves to the earlier record, like the name index
    assert_eq!(catalog.get_by_sequence(&[0x1f600]).unwrap().number, "1");

    // The later record is still present and reachable by number
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get_by_number("2").unwrap().short_name,
        "grinning face again"
    );
}

#[test]
fn first_record_wins_for_duplicate_display_names() {
    let records = vec![
        record("1", vec![0x1f600], "grinning face"),
        record("2", vec![0x1f603], "grinning face"),
    ];
    let catalog = EmojiCatalog::from_records(records).unwrap();
    assert_eq!(catalog.get_by_name("grinning face").unwrap().number, "1");
}

#[test]
fn normalize_folds_delimiters_and_strips_punctuation() {
    assert_eq!(
        normalize_lookup_name("Woman: Medium-Skin-Tone, White_Hair"),
        "woman medium skin tone white hair"
    );
    assert_eq!(normalize_lookup_name("thinkin'"), "thinkin");
    assert_eq!(normalize_lookup_name(""), "");
}

#[test]
fn prototype_round_trip_through_typed_record() {
    let original = record("21", vec![0x1f914], "thinking face");
    let prototype = EmojiRecordPrototype::from(&original);
    assert_eq!(prototype.code, vec!["1f914"]);
    let back = EmojiRecord::try_from(prototype).unwrap();
    assert_eq!(back.sequence, original.sequence);
    assert_eq!(back.short_name, original.short_name);
    assert_eq!(back.sprites, original.sprites);
}
