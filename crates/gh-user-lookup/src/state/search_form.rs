//! Search Form State
//!
//! Holds the username exactly as typed. The text is never trimmed or
//! normalized and survives a search.

/// State of the username input field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFormState {
    pub query: String,
}

impl SearchFormState {
    /// Replace the text with the raw input
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// The search action is enabled only for a non-empty field
    pub fn can_search(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_cannot_search() {
        let form = SearchFormState::default();
        assert!(!form.can_search());
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let mut form = SearchFormState::default();
        form.set_query("  octocat ");
        assert_eq!(form.query, "  octocat ");
        assert!(form.can_search());
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut form = SearchFormState::default();
        form.backspace();
        assert_eq!(form.query, "");
    }

    #[test]
    fn test_backspace_removes_multibyte_char() {
        let mut form = SearchFormState::default();
        form.push_char('ö');
        form.push_char('x');
        form.backspace();
        assert_eq!(form.query, "ö");
    }
}
