//! Token definitions for the av language
//!
//! Scanning and classification are separate steps. [`Lexeme`] is the logos-derived
//! scanner: it only knows lexeme *shapes* (arrow, braces, identifier runs, any other
//! single character). [`TokenType`] is the closed set of categories a lexeme is
//! classified into, which for identifier runs depends on where the lexeme sits
//! (see [`classify`](super::classify)).
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Raw lexeme shapes recognised by the scanner.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    #[token("->")]
    Arrow,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    // Identifier-shaped run; must beat `Other` on a single letter
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 3)]
    Word,

    // Any other single non-whitespace character (punctuation, digits, junk)
    #[regex(r"[^\s]", priority = 1)]
    Other,
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Begin,
    End,
    /// The machine-definition keyword `def`
    DefGraph,
    Start,
    Accept,
    /// The state-declaration keyword `STATE`
    StateDef,
    LeftBrace,
    RightBrace,
    LeftSquareBracket,
    RightSquareBracket,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,
    Arrow,
    /// A name in state-reference position
    State,
    /// A name anywhere else (declaration names, transition labels)
    Identifier,
    /// The reserved self-loop marker `SELF`
    #[serde(rename = "SELF")]
    SelfLoop,
}

impl TokenType {
    /// Lowercase dash-separated name, used by the simple token format.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Begin => "begin",
            TokenType::End => "end",
            TokenType::DefGraph => "def-graph",
            TokenType::Start => "start",
            TokenType::Accept => "accept",
            TokenType::StateDef => "state-def",
            TokenType::LeftBrace => "left-brace",
            TokenType::RightBrace => "right-brace",
            TokenType::LeftSquareBracket => "left-square-bracket",
            TokenType::RightSquareBracket => "right-square-bracket",
            TokenType::LeftBracket => "left-bracket",
            TokenType::RightBracket => "right-bracket",
            TokenType::Semicolon => "semicolon",
            TokenType::Comma => "comma",
            TokenType::Arrow => "arrow",
            TokenType::State => "state",
            TokenType::Identifier => "identifier",
            TokenType::SelfLoop => "self",
        }
    }

    /// Check if this category carries a user-chosen name
    pub fn is_name(&self) -> bool {
        matches!(self, TokenType::State | TokenType::Identifier)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

/// A classified, positioned lexeme. Never mutated after the lexer creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub value: String,
    /// 1-based row of the first character
    pub row: usize,
    /// 1-based column of the first character, counted in characters
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            row,
            col,
        }
    }

    /// Column immediately after the last character of this token.
    pub fn end_col(&self) -> usize {
        self.col + self.value.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_name() {
            write!(f, "<{}:{}>", self.kind.name(), self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
