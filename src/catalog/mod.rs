/// The catalog container itself, with lookup, search and grouping
pub mod catalog;
pub mod errors;
pub mod prototype;
pub mod validation;
#[cfg(test)]
mod tests;
