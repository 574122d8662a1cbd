//! Prelude module for birth_date crate.
//!
//! Re-exports commonly used derive macros from derive_more.

#[allow(unused_imports)]
pub use derive_more::Display;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Display)]
    #[display(fmt = "{}", _0)]
    struct Label(&'static str);

    #[test]
    fn test_display_derive_is_reexported() {
        assert_eq!(Label("dd.MM.yyyy").to_string(), "dd.MM.yyyy");
    }
}
