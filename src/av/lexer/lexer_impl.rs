//! Implementation of the av lexer
//!
//! Scanning is handled by logos; this module walks the lexemes, attaches positions and
//! runs classification with the bracket/previous-token context.

use logos::Logos;

use crate::av::error::LexError;
use crate::av::lexer::classify::{classify, ClassifyContext};
use crate::av::lexer::location::SourceLocation;
use crate::av::lexer::tokens::{Lexeme, Token};

/// Tokenize a source string. Fails on the first invalid lexeme; no partial output.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let location = SourceLocation::new(source);
    let mut lexer = Lexeme::lexer(source);
    let mut context = ClassifyContext::default();
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let position = location.byte_to_position(lexer.span().start);
        let unexpected = || LexError {
            value: slice.to_string(),
            row: position.row,
            col: position.col,
        };

        result.map_err(|()| unexpected())?;
        context.observe(slice);
        let kind = classify(slice, &context).ok_or_else(unexpected)?;

        tokens.push(Token::new(kind, slice, position.row, position.col));
        context.advance(kind);
    }

    tracing::debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::av::lexer::tokens::TokenType;

    fn kinds(source: &str) -> Vec<TokenType> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("  \n\t").unwrap(), vec![]);
    }

    #[test]
    fn test_start_statement() {
        assert_eq!(
            kinds("START -> foo ;"),
            vec![
                TokenType::Start,
                TokenType::Arrow,
                TokenType::State,
                TokenType::Semicolon
            ]
        );
    }

    #[test]
    fn test_machine_name_is_identifier() {
        assert_eq!(
            kinds("def foo { }"),
            vec![
                TokenType::DefGraph,
                TokenType::Identifier,
                TokenType::LeftBrace,
                TokenType::RightBrace
            ]
        );
    }

    #[test]
    fn test_accept_list_entries_are_states() {
        assert_eq!(
            kinds("ACCEPT -> [a, b] ;"),
            vec![
                TokenType::Accept,
                TokenType::Arrow,
                TokenType::LeftSquareBracket,
                TokenType::State,
                TokenType::Comma,
                TokenType::State,
                TokenType::RightSquareBracket,
                TokenType::Semicolon
            ]
        );
    }

    #[test]
    fn test_transition_label_stays_identifier() {
        assert_eq!(
            kinds("STATE s -> { x -> [SELF] ; } ;"),
            vec![
                TokenType::StateDef,
                TokenType::Identifier,
                TokenType::Arrow,
                TokenType::LeftBrace,
                TokenType::Identifier,
                TokenType::Arrow,
                TokenType::LeftSquareBracket,
                TokenType::SelfLoop,
                TokenType::RightSquareBracket,
                TokenType::Semicolon,
                TokenType::RightBrace,
                TokenType::Semicolon
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("def M {\n  START -> a ;\n} ;").unwrap();
        let positions: Vec<(&str, usize, usize)> = tokens
            .iter()
            .map(|t| (t.value.as_str(), t.row, t.col))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("def", 1, 1),
                ("M", 1, 5),
                ("{", 1, 7),
                ("START", 2, 3),
                ("->", 2, 9),
                ("a", 2, 12),
                (";", 2, 14),
                ("}", 3, 1),
                (";", 3, 3),
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("def M {\n  @ }").unwrap_err();
        assert_eq!(
            err,
            LexError {
                value: "@".to_string(),
                row: 2,
                col: 3
            }
        );
    }

    #[test]
    fn test_non_ascii_letter_is_rejected() {
        let err = tokenize("def é").unwrap_err();
        assert_eq!(err.value, "é");
        assert_eq!((err.row, err.col), (1, 5));
    }

    #[test]
    fn test_digits_are_single_identifiers() {
        let tokens = tokenize("12").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == TokenType::Identifier));
    }
}
