//! Display-name assembly for staff-facing listings.

/// Joins first and last name the way the scheduling surfaces display them.
/// Middle names are not part of the display form.
#[must_use]
pub fn display_name(first: &str, last: &str) -> String {
    let first = first.trim();
    let last = last.trim();
    match (first.is_empty(), last.is_empty()) {
        (true, true) => String::new(),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (false, false) => format!("{first} {last}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        assert_eq!(display_name("Ann", "Lee"), "Ann Lee");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(display_name(" Ann ", " Lee "), "Ann Lee");
    }

    #[test]
    fn test_missing_last() {
        assert_eq!(display_name("Ann", ""), "Ann");
    }

    #[test]
    fn test_missing_first() {
        assert_eq!(display_name("", "Lee"), "Lee");
    }

    #[test]
    fn test_empty() {
        assert_eq!(display_name("", ""), "");
    }
}
