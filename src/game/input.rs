//! Parsing raw input lines into game decisions

use crate::error::GameError;

/// Anything starting with `y` (case-insensitive) is a yes
#[must_use]
pub fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().chars().next(), Some('y' | 'Y'))
}

/// Turn a 1-based selection into a 0-based index below `available`
///
/// # Errors
///
/// - `GameError::NotANumber` for non-numeric input (re-prompt)
/// - `GameError::SelectionOutOfRange` for numbers outside `1..=available`
///
/// # Examples
/// ```
/// use wordbook::game::parse_selection;
///
/// assert_eq!(parse_selection("2", 3), Ok(1));
/// assert!(parse_selection("4", 3).is_err());
/// ```
pub fn parse_selection(input: &str, available: usize) -> Result<usize, GameError> {
    let trimmed = input.trim();
    let selection: usize = trimmed
        .parse()
        .map_err(|_| GameError::NotANumber(trimmed.to_string()))?;

    if selection == 0 || selection > available {
        return Err(GameError::SelectionOutOfRange {
            selection,
            available,
        });
    }

    Ok(selection - 1)
}
