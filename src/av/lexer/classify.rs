//! Lexeme classification
//!
//! Classification runs in two phases:
//!
//! 1. A provisional category from the reserved lexeme table, falling back to
//!    [`TokenType::Identifier`] when the lexeme has identifier shape.
//! 2. Positional reclassification of identifiers. The complete rule set is:
//!    - inside `[ ... ]` an identifier is a [`TokenType::State`];
//!    - right after `START` or `->` an identifier is a [`TokenType::State`].
//!
//! The grammar only ever needs a state *reference* in those two positions, so this is
//! enough to tell references from declaration names without a semantic pass.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::TokenType;

static IDENTIFIER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier pattern is valid"));

/// Context the lexer tracks for reclassification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyContext {
    /// Set by a literal `[`, cleared by a literal `]`.
    pub in_brackets: bool,
    /// Category of the token emitted just before this one.
    pub previous: Option<TokenType>,
}

impl ClassifyContext {
    /// Update the bracket flag for the lexeme about to be classified.
    pub fn observe(&mut self, lexeme: &str) {
        match lexeme {
            "[" => self.in_brackets = true,
            "]" => self.in_brackets = false,
            _ => {}
        }
    }

    /// Record the category of the token just emitted.
    pub fn advance(&mut self, kind: TokenType) {
        self.previous = Some(kind);
    }
}

/// Exact-match lookup in the reserved lexeme table.
pub fn lookup(lexeme: &str) -> Option<TokenType> {
    let kind = match lexeme {
        "BEGIN" => TokenType::Begin,
        "END" => TokenType::End,
        "def" => TokenType::DefGraph,
        "{" => TokenType::LeftBrace,
        "}" => TokenType::RightBrace,
        "START" => TokenType::Start,
        "ACCEPT" => TokenType::Accept,
        "->" => TokenType::Arrow,
        "STATE" | "STATE_DEF" => TokenType::StateDef,
        "SELF" => TokenType::SelfLoop,
        ";" => TokenType::Semicolon,
        "," => TokenType::Comma,
        "(" => TokenType::LeftBracket,
        ")" => TokenType::RightBracket,
        "[" => TokenType::LeftSquareBracket,
        "]" => TokenType::RightSquareBracket,
        _ => return None,
    };
    Some(kind)
}

/// Letters, digits and underscores only, at least one character.
pub fn is_identifier_shape(lexeme: &str) -> bool {
    IDENTIFIER_SHAPE.is_match(lexeme)
}

/// Classify a lexeme in context. `None` means the lexeme is not a valid token.
pub fn classify(lexeme: &str, context: &ClassifyContext) -> Option<TokenType> {
    let provisional = match lookup(lexeme) {
        Some(kind) => kind,
        None if is_identifier_shape(lexeme) => TokenType::Identifier,
        None => return None,
    };
    Some(reclassify(provisional, context))
}

fn reclassify(kind: TokenType, context: &ClassifyContext) -> TokenType {
    if kind != TokenType::Identifier {
        return kind;
    }
    let after_reference_marker = matches!(
        context.previous,
        Some(TokenType::Start) | Some(TokenType::Arrow)
    );
    if context.in_brackets || after_reference_marker {
        TokenType::State
    } else {
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(previous: TokenType) -> ClassifyContext {
        ClassifyContext {
            in_brackets: false,
            previous: Some(previous),
        }
    }

    #[test]
    fn test_lookup_reserved_table() {
        assert_eq!(lookup("def"), Some(TokenType::DefGraph));
        assert_eq!(lookup("STATE"), Some(TokenType::StateDef));
        assert_eq!(lookup("STATE_DEF"), Some(TokenType::StateDef));
        assert_eq!(lookup("SELF"), Some(TokenType::SelfLoop));
        assert_eq!(lookup("("), Some(TokenType::LeftBracket));
        assert_eq!(lookup("]"), Some(TokenType::RightSquareBracket));
        assert_eq!(lookup("Def"), None);
        assert_eq!(lookup("state"), None);
    }

    #[test]
    fn test_identifier_shape() {
        assert!(is_identifier_shape("q0"));
        assert!(is_identifier_shape("_"));
        assert!(is_identifier_shape("7"));
        assert!(!is_identifier_shape(""));
        assert!(!is_identifier_shape("@"));
        assert!(!is_identifier_shape("é"));
    }

    #[test]
    fn test_plain_identifier() {
        let context = ClassifyContext::default();
        assert_eq!(classify("foo", &context), Some(TokenType::Identifier));
    }

    #[test]
    fn test_reclassified_after_start_and_arrow() {
        assert_eq!(classify("foo", &after(TokenType::Start)), Some(TokenType::State));
        assert_eq!(classify("foo", &after(TokenType::Arrow)), Some(TokenType::State));
        assert_eq!(
            classify("foo", &after(TokenType::DefGraph)),
            Some(TokenType::Identifier)
        );
        assert_eq!(
            classify("foo", &after(TokenType::StateDef)),
            Some(TokenType::Identifier)
        );
    }

    #[test]
    fn test_reclassified_inside_brackets() {
        let mut context = ClassifyContext::default();
        context.observe("[");
        assert_eq!(classify("a", &context), Some(TokenType::State));
        context.observe("]");
        assert_eq!(classify("a", &context), Some(TokenType::Identifier));
    }

    #[test]
    fn test_keywords_are_never_reclassified() {
        let mut context = after(TokenType::Arrow);
        context.observe("[");
        assert_eq!(classify("SELF", &context), Some(TokenType::SelfLoop));
        assert_eq!(classify("END", &context), Some(TokenType::End));
    }

    #[test]
    fn test_invalid_lexeme() {
        assert_eq!(classify("#", &ClassifyContext::default()), None);
    }
}
