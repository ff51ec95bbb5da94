//! Mutable cursor over the raw tokens of one dispatch.

use crate::command_definitions::OptionDefinition;

/// The remaining raw tokens for the current resolution step.
///
/// The cursor shrinks monotonically: tokens leave it when an option match
/// extracts them, when an argument consumes the front, or when the
/// dispatcher descends into a child group. Whatever is left at the end of
/// parsing is excess input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    tokens: Vec<String>,
}

impl CommandInput {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Cursor over the process argument vector, program name stripped.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1).collect())
    }

    pub fn peek(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Consumes and returns the leading token.
    pub fn advance(&mut self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.remove(0))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn remaining(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_remaining(self) -> Vec<String> {
        self.tokens
    }

    /// Extracts the value of `option` from anywhere in the cursor.
    ///
    /// Matches the long form (`--name value`, `--name=value`) and, when a
    /// short alias is declared, the short form (`-x value`, `-x=value`).
    /// Matched tokens are removed. A key with no value available is not a
    /// match and stays in place, where it later surfaces as excess input.
    /// Defaults are not applied here.
    pub fn extract_option(&mut self, option: &OptionDefinition) -> Option<String> {
        let long_key = format!("--{}", option.name);
        let short_key = option.short.map(|alias| format!("-{alias}"));

        let matches_key =
            |token: &str| token == long_key || short_key.as_deref() == Some(token);

        for index in 0..self.tokens.len() {
            let token = &self.tokens[index];

            if matches_key(token) {
                if index + 1 < self.tokens.len() {
                    let value = self.tokens.remove(index + 1);
                    self.tokens.remove(index);
                    return Some(value);
                }
                continue;
            }

            for key in [Some(&long_key), short_key.as_ref()].into_iter().flatten() {
                if let Some(value) = token.strip_prefix(key.as_str()) {
                    if let Some(value) = value.strip_prefix('=') {
                        let value = value.to_string();
                        self.tokens.remove(index);
                        return Some(value);
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> CommandInput {
        CommandInput::new(raw.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_extract_long_form_with_space() {
        let mut input = tokens(&["hello", "--bar", "world"]);
        let option = OptionDefinition::new("bar");

        assert_eq!(input.extract_option(&option), Some("world".to_string()));
        assert_eq!(input.remaining(), ["hello"]);
    }

    #[test]
    fn test_extract_long_form_with_equals() {
        let mut input = tokens(&["hello", "--bar=world"]);
        let option = OptionDefinition::new("bar");

        assert_eq!(input.extract_option(&option), Some("world".to_string()));
        assert_eq!(input.remaining(), ["hello"]);
    }

    #[test]
    fn test_extract_short_form() {
        let mut input = tokens(&["-b", "world", "hello"]);
        let option = OptionDefinition::new("bar").short('b');

        assert_eq!(input.extract_option(&option), Some("world".to_string()));
        assert_eq!(input.remaining(), ["hello"]);
    }

    #[test]
    fn test_extract_short_form_with_equals() {
        let mut input = tokens(&["hello", "-b=world"]);
        let option = OptionDefinition::new("bar").short('b');

        assert_eq!(input.extract_option(&option), Some("world".to_string()));
        assert_eq!(input.remaining(), ["hello"]);
    }

    #[test]
    fn test_long_and_short_forms_extract_identical_values() {
        let option = OptionDefinition::new("bar").short('b');

        for raw in [
            vec!["--bar", "world"],
            vec!["--bar=world"],
            vec!["-b", "world"],
            vec!["-b=world"],
        ] {
            let mut input = tokens(&raw);
            assert_eq!(
                input.extract_option(&option),
                Some("world".to_string()),
                "form {raw:?}"
            );
            assert!(input.is_empty());
        }
    }

    #[test]
    fn test_undeclared_short_alias_does_not_match() {
        let mut input = tokens(&["-b", "world"]);
        let option = OptionDefinition::new("bar");

        assert_eq!(input.extract_option(&option), None);
        assert_eq!(input.remaining(), ["-b", "world"]);
    }

    #[test]
    fn test_dangling_key_without_value_stays_in_place() {
        let mut input = tokens(&["hello", "--bar"]);
        let option = OptionDefinition::new("bar");

        assert_eq!(input.extract_option(&option), None);
        assert_eq!(input.remaining(), ["hello", "--bar"]);
    }

    #[test]
    fn test_similar_prefix_is_not_a_match() {
        let mut input = tokens(&["--barricade", "value"]);
        let option = OptionDefinition::new("bar");

        assert_eq!(input.extract_option(&option), None);
        assert_eq!(input.remaining(), ["--barricade", "value"]);
    }

    #[test]
    fn test_advance_consumes_from_the_front() {
        let mut input = tokens(&["a", "b"]);

        assert_eq!(input.peek(), Some("a"));
        assert_eq!(input.advance(), Some("a".to_string()));
        assert_eq!(input.advance(), Some("b".to_string()));
        assert_eq!(input.advance(), None);
        assert!(input.is_empty());
    }
}
