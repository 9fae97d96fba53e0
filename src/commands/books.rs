//! Books command
//!
//! Builds the catalog a session would start with, modifiers included.

use crate::books::Library;
use crate::error::GameError;

/// The standard library with `(name or slug, bonus)` modifiers attached
///
/// # Errors
///
/// Returns `GameError::UnknownBook` when a modifier names no book.
pub fn build_catalog(modifiers: &[(String, f64)]) -> Result<Library, GameError> {
    let mut library = Library::standard();
    for (name, bonus) in modifiers {
        library.attach_named_modifier(name, *bonus)?;
    }
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog() {
        let library = build_catalog(&[]).unwrap();
        assert_eq!(library.len(), 5);
        assert!(library.iter().all(|book| book.modifiers().is_empty()));
    }

    #[test]
    fn catalog_with_modifier() {
        let library = build_catalog(&[("spot-vowel".to_string(), -0.1)]).unwrap();
        let book = library.find("spot-vowel").unwrap();
        assert_eq!(book.modifiers().len(), 1);
        assert!((book.trigger_chance(0.0) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn unknown_modifier_target() {
        assert_eq!(
            build_catalog(&[("grimoire".to_string(), 0.1)]).err(),
            Some(GameError::UnknownBook("grimoire".to_string()))
        );
    }
}
