//! AST definitions for the av language
//!
//! A program is an ordered list of top-level [`Statement`]s. Each variant carries only
//! the fields meaningful to it. Names are kept exactly as written: the self-loop
//! marker `SELF` stays literal in [`Statement::Transition`] targets and is resolved by
//! consumers, never by the parser.

use serde::Serialize;

/// Literal text of the reserved self-loop marker.
pub const SELF_MARKER: &str = "SELF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Statement {
    /// Top-level `BEGIN` marker
    Begin,
    /// `def <name> { ... } ;`
    DefMachine { name: String, body: Vec<Statement> },
    /// `START -> <state> ;`
    Start { state: String },
    /// `ACCEPT -> [ ... ] ;` in declaration order, duplicates kept
    Accept { states: Vec<String> },
    /// `STATE <name> -> { ... } ;`
    ///
    /// Mostly transitions, but the grammar accepts any statement in a state body.
    StateDef {
        name: String,
        transitions: Vec<Statement>,
    },
    /// `<label> -> [ ... ] ;` inside a state body
    Transition { label: String, targets: Vec<String> },
    /// `END` marker
    End,
}

impl Statement {
    /// Lowercase dash-separated variant name
    pub fn node_type(&self) -> &'static str {
        match self {
            Statement::Begin => "begin",
            Statement::DefMachine { .. } => "def-machine",
            Statement::Start { .. } => "start",
            Statement::Accept { .. } => "accept",
            Statement::StateDef { .. } => "state-def",
            Statement::Transition { .. } => "transition",
            Statement::End => "end",
        }
    }

    /// One-line summary of the statement's own data (children excluded)
    pub fn display_label(&self) -> String {
        match self {
            Statement::Begin | Statement::End => String::new(),
            Statement::DefMachine { name, .. } | Statement::StateDef { name, .. } => name.clone(),
            Statement::Start { state } => state.clone(),
            Statement::Accept { states } => format!("[{}]", states.join(", ")),
            Statement::Transition { label, targets } => {
                format!("{} -> [{}]", label, targets.join(", "))
            }
        }
    }

    /// Nested statements, for the two block forms
    pub fn children(&self) -> &[Statement] {
        match self {
            Statement::DefMachine { body, .. } => body,
            Statement::StateDef { transitions, .. } => transitions,
            _ => &[],
        }
    }
}

/// Check whether a transition target is the self-loop marker
pub fn is_self_marker(target: &str) -> bool {
    target == SELF_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(Statement::Begin.display_label(), "");
        assert_eq!(
            Statement::Accept {
                states: vec!["a".into(), "b".into()]
            }
            .display_label(),
            "[a, b]"
        );
        assert_eq!(
            Statement::Transition {
                label: "go".into(),
                targets: vec!["b".into(), SELF_MARKER.into()]
            }
            .display_label(),
            "go -> [b, SELF]"
        );
    }

    #[test]
    fn test_children() {
        let state = Statement::StateDef {
            name: "s".into(),
            transitions: vec![Statement::End],
        };
        assert_eq!(state.children(), &[Statement::End]);
        assert!(Statement::Start { state: "a".into() }.children().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Statement::Start { state: "a".into() }).unwrap();
        assert_eq!(json, r#"{"type":"start","state":"a"}"#);

        let json = serde_json::to_string(&Statement::Begin).unwrap();
        assert_eq!(json, r#"{"type":"begin"}"#);

        let json = serde_json::to_string(&Statement::DefMachine {
            name: "M".into(),
            body: vec![],
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"defMachine","name":"M","body":[]}"#);
    }
}
