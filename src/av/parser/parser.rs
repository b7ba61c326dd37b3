//! Recursive-descent parser for av
//!
//! Grammar (terminals are token categories):
//!
//! ```text
//! program      := statement*
//! statement    := BEGIN | defStmt | stateDefStmt | startStmt | acceptStmt | END
//! defStmt      := DEF_GRAPH IDENTIFIER "{" statement* "}" ";"
//! stateDefStmt := STATE_DEF IDENTIFIER ARROW "{" stateBody* "}" ";"
//! stateBody    := IDENTIFIER ARROW "[" targetList "]" ";"
//!               | statement
//! startStmt    := START ARROW STATE ";"
//! acceptStmt   := ACCEPT ARROW "[" stateList "]" ";"
//! stateList    := STATE ("," STATE)*
//! targetList   := (STATE | SELF) ("," (STATE | SELF))*
//! ```
//!
//! One token of lookahead, no backtracking and no recovery: the first mismatch is
//! returned as a [`SyntaxError`] and nothing else.
//!
//! A state body falls back to the generic `statement` rule, so `START`, `ACCEPT`,
//! `def` etc. are accepted there.
//!
//! Block bodies (`def` and `STATE`) may nest at most [`MAX_NESTING_DEPTH`] levels. The
//! first `{` past that limit is reported as a syntax error.

use crate::av::error::SyntaxError;
use crate::av::lexer::{Token, TokenType};
use crate::av::parser::ast::Statement;

/// Deepest block nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

const STATE_ONLY: &[TokenType] = &[TokenType::State];
const STATE_OR_SELF: &[TokenType] = &[TokenType::State, TokenType::SelfLoop];

pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parse the whole token sequence into top-level statements.
    pub fn parse(mut self) -> Result<Vec<Statement>, SyntaxError> {
        let mut statements = Vec::new();
        while self.peek().is_some() {
            statements.push(self.statement()?);
        }
        tracing::debug!(count = statements.len(), "parsed top-level statements");
        Ok(statements)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn next_is(&self, kind: TokenType) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    fn consume(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consume the next token if it has the given category.
    fn matches(&mut self, kind: TokenType) -> bool {
        if self.next_is(kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenType, message: &str) -> Result<(), SyntaxError> {
        if self.matches(kind) {
            Ok(())
        } else {
            Err(self.error_here(message))
        }
    }

    /// Consume the next token, failing at its position unless it is one of `accepted`.
    fn expect_one_of(
        &mut self,
        accepted: &[TokenType],
        message: &str,
    ) -> Result<&'a Token, SyntaxError> {
        match self.consume() {
            Some(token) if accepted.contains(&token.kind) => Ok(token),
            Some(token) => Err(error_at(message, token)),
            None => Err(self.error_here(message)),
        }
    }

    /// Consume the `{` opening a block body and enter one nesting level.
    fn open_block(&mut self, message: &str) -> Result<(), SyntaxError> {
        let brace = self.expect_one_of(&[TokenType::LeftBrace], message)?;
        if self.depth >= MAX_NESTING_DEPTH {
            let message = format!("Blocks nested deeper than {} levels", MAX_NESTING_DEPTH);
            return Err(error_at(&message, brace));
        }
        self.depth += 1;
        Ok(())
    }

    /// Error at the next token, or just past the last token when the input is exhausted.
    fn error_here(&self, message: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => error_at(message, token),
            None => {
                let (row, col) = self
                    .tokens
                    .last()
                    .map(|last| (last.row, last.end_col()))
                    .unwrap_or((1, 1));
                SyntaxError::new(message, None, row, col)
            }
        }
    }

    fn statement(&mut self) -> Result<Statement, SyntaxError> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.error_here("Unexpected end of input")),
        };

        let statement = match token.kind {
            TokenType::Begin => {
                self.position += 1;
                Statement::Begin
            }
            TokenType::DefGraph => {
                self.position += 1;
                self.def_statement()?
            }
            TokenType::StateDef => {
                self.position += 1;
                self.state_def_statement()?
            }
            TokenType::Start => {
                self.position += 1;
                self.start_statement()?
            }
            TokenType::Accept => {
                self.position += 1;
                self.accept_statement()?
            }
            TokenType::End => {
                self.position += 1;
                Statement::End
            }
            _ => {
                return Err(error_at(&format!("Unexpected token {}", token.value), token));
            }
        };

        tracing::trace!(node = statement.node_type(), "parsed statement");
        Ok(statement)
    }

    fn start_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenType::Arrow, "Expected -> after START")?;
        let state = self.expect_one_of(STATE_ONLY, "Expected state after ->")?;
        self.expect(TokenType::Semicolon, "Expected ; at the end of statement")?;
        Ok(Statement::Start {
            state: state.value.clone(),
        })
    }

    fn def_statement(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.expect_one_of(&[TokenType::Identifier], "Expected identifier after def")?;
        self.open_block("Expected { after identifier")?;

        let mut body = Vec::new();
        while !self.matches(TokenType::RightBrace) {
            body.push(self.statement()?);
        }
        self.depth -= 1;

        self.expect(TokenType::Semicolon, "Expected ; at the end of def block")?;
        Ok(Statement::DefMachine {
            name: name.value.clone(),
            body,
        })
    }

    fn state_def_statement(&mut self) -> Result<Statement, SyntaxError> {
        let name =
            self.expect_one_of(&[TokenType::Identifier], "Expected identifier after STATE")?;
        self.expect(TokenType::Arrow, "Expected -> after identifier")?;
        self.open_block("Expected { after ->")?;

        let mut transitions = Vec::new();
        while !self.matches(TokenType::RightBrace) {
            let statement = match self.peek() {
                Some(label) if label.kind == TokenType::Identifier => {
                    self.position += 1;
                    self.transition_statement(&label.value)?
                }
                _ => self.statement()?,
            };
            transitions.push(statement);
        }
        self.depth -= 1;

        self.expect(TokenType::Semicolon, "Expected ; at the end of state block")?;
        Ok(Statement::StateDef {
            name: name.value.clone(),
            transitions,
        })
    }

    fn transition_statement(&mut self, label: &str) -> Result<Statement, SyntaxError> {
        self.expect(TokenType::Arrow, "Expected -> after identifier")?;
        self.expect(TokenType::LeftSquareBracket, "Expected [ after transition")?;
        let targets = self.state_list(STATE_OR_SELF)?;
        self.expect(TokenType::Semicolon, "Expected ; at the end of transition")?;
        Ok(Statement::Transition {
            label: label.to_string(),
            targets,
        })
    }

    fn accept_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenType::Arrow, "Expected -> after ACCEPT")?;
        self.expect(TokenType::LeftSquareBracket, "Expected [ after ->")?;
        let states = self.state_list(STATE_ONLY)?;
        self.expect(TokenType::Semicolon, "Expected ; at the end of ACCEPT statement")?;
        Ok(Statement::Accept { states })
    }

    /// Elements up to and including the closing `]`. The opening `[` is already consumed.
    ///
    /// The closing bracket is checked before each element, so `[]` and a trailing comma
    /// are both accepted.
    fn state_list(&mut self, accepted: &[TokenType]) -> Result<Vec<String>, SyntaxError> {
        let mut states = Vec::new();
        while !self.matches(TokenType::RightSquareBracket) {
            let state = self.expect_one_of(accepted, "Expected state inside []")?;
            states.push(state.value.clone());
            if !self.matches(TokenType::Comma) && !self.next_is(TokenType::RightSquareBracket) {
                return Err(self.error_here("Expected , or ] after state"));
            }
        }
        Ok(states)
    }
}

fn error_at(message: &str, token: &Token) -> SyntaxError {
    SyntaxError::new(message, Some(token.value.clone()), token.row, token.col)
}
