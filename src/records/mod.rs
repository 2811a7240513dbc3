/// The data struct for single catalog entries
pub mod record;
/// Sprite sheet geometry (sizes, frames, clips)
pub mod sprite;
