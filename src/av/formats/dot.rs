//! Graphviz DOT generation
//!
//! Every top-level `def` block becomes one `digraph`. Other top-level statements
//! produce no output. Lines are emitted in traversal order (statements, then
//! transitions, then targets, all as declared) so identical input always gives
//! byte-identical output.
//!
//! ## Example
//!
//! ```text
//! digraph "M" {
//! rankdir=LR;
//! size="8,5"
//! initial [shape=point];
//! initial -> "a"
//! "b" [shape=doublecircle];
//! "a" -> "b" [label="go"]
//! }
//! ```
//!
//! No validation happens here: a transition to a state that was never declared still
//! gets its edge.

use super::registry::{FormatError, Formatter};
use crate::av::config::GraphConfig;
use crate::av::parser::ast::{is_self_marker, Statement};

/// Generate DOT with the default layout
pub fn to_dot(program: &[Statement]) -> String {
    DotFormatter::default().generate(program)
}

#[derive(Debug, Clone, Default)]
pub struct DotFormatter {
    config: GraphConfig,
}

impl DotFormatter {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, program: &[Statement]) -> String {
        let mut output = String::new();
        for statement in program {
            if let Statement::DefMachine { name, body } = statement {
                self.generate_machine(name, body, &mut output);
            }
        }
        output
    }

    fn generate_machine(&self, name: &str, body: &[Statement], output: &mut String) {
        output.push_str(&format!("digraph \"{}\" {{\n", name));
        output.push_str(&format!("rankdir={};\n", self.config.rankdir));
        output.push_str(&format!("size=\"{}\"\n", self.config.size));

        let initial = &self.config.initial_node;
        for statement in body {
            match statement {
                Statement::Start { state } => {
                    output.push_str(&format!("{} [shape=point];\n", initial));
                    output.push_str(&format!("{} -> \"{}\"\n", initial, state));
                }
                Statement::Accept { states } => {
                    for state in states {
                        output.push_str(&format!("\"{}\" [shape=doublecircle];\n", state));
                    }
                }
                Statement::StateDef { name, transitions } => {
                    generate_edges(name, transitions, output);
                }
                _ => {}
            }
        }

        output.push_str("}\n");
    }
}

fn generate_edges(from: &str, transitions: &[Statement], output: &mut String) {
    for statement in transitions {
        let Statement::Transition { label, targets } = statement else {
            continue;
        };
        let label = if label.is_empty() {
            String::new()
        } else {
            format!(" [label=\"{}\"]", label)
        };
        for target in targets {
            let to: &str = if is_self_marker(target) { from } else { target };
            output.push_str(&format!("\"{}\" -> \"{}\"{}\n", from, to, label));
        }
    }
}

impl Formatter for DotFormatter {
    fn name(&self) -> &str {
        "dot"
    }

    fn serialize(&self, program: &[Statement]) -> Result<String, FormatError> {
        Ok(self.generate(program))
    }

    fn description(&self) -> &str {
        "Graphviz digraph of each machine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(body: Vec<Statement>) -> Vec<Statement> {
        vec![Statement::DefMachine {
            name: "M".into(),
            body,
        }]
    }

    fn transition(label: &str, targets: &[&str]) -> Statement {
        Statement::Transition {
            label: label.into(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_begin_and_end_emit_nothing() {
        assert_eq!(to_dot(&[Statement::Begin, Statement::End]), "");
    }

    #[test]
    fn test_header_and_layout() {
        assert_eq!(
            to_dot(&machine(vec![])),
            "digraph \"M\" {\nrankdir=LR;\nsize=\"8,5\"\n}\n"
        );
    }

    #[test]
    fn test_self_loop_resolves_to_enclosing_state() {
        let program = machine(vec![Statement::StateDef {
            name: "s".into(),
            transitions: vec![transition("x", &["SELF"])],
        }]);
        assert!(to_dot(&program).contains("\"s\" -> \"s\" [label=\"x\"]\n"));
    }

    #[test]
    fn test_one_edge_per_target_in_order() {
        let program = machine(vec![Statement::StateDef {
            name: "a".into(),
            transitions: vec![transition("e", &["c", "b", "SELF"])],
        }]);
        let out = to_dot(&program);
        let edges: Vec<&str> = out.lines().filter(|l| l.contains(" -> ")).collect();
        assert_eq!(
            edges,
            vec![
                "\"a\" -> \"c\" [label=\"e\"]",
                "\"a\" -> \"b\" [label=\"e\"]",
                "\"a\" -> \"a\" [label=\"e\"]",
            ]
        );
    }

    #[test]
    fn test_empty_label_is_omitted() {
        let program = machine(vec![Statement::StateDef {
            name: "a".into(),
            transitions: vec![transition("", &["b"])],
        }]);
        assert!(to_dot(&program).contains("\"a\" -> \"b\"\n"));
    }

    #[test]
    fn test_every_start_gets_a_marker() {
        let program = machine(vec![
            Statement::Start { state: "a".into() },
            Statement::Start { state: "b".into() },
        ]);
        let out = to_dot(&program);
        assert_eq!(out.matches("initial [shape=point];").count(), 2);
        assert!(out.contains("initial -> \"b\"\n"));
    }

    #[test]
    fn test_non_transitions_in_state_body_are_skipped() {
        let program = machine(vec![Statement::StateDef {
            name: "a".into(),
            transitions: vec![
                Statement::Accept {
                    states: vec!["z".into()],
                },
                transition("t", &["b"]),
            ],
        }]);
        let out = to_dot(&program);
        assert!(!out.contains("\"z\""));
        assert!(out.contains("\"a\" -> \"b\" [label=\"t\"]"));
    }

    #[test]
    fn test_custom_layout() {
        let formatter = DotFormatter::new(GraphConfig {
            rankdir: "TB".into(),
            size: "4,4".into(),
            initial_node: "entry".into(),
        });
        let out = formatter.generate(&machine(vec![Statement::Start { state: "a".into() }]));
        assert_eq!(
            out,
            "digraph \"M\" {\nrankdir=TB;\nsize=\"4,4\"\nentry [shape=point];\nentry -> \"a\"\n}\n"
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let program = machine(vec![
            Statement::Start { state: "a".into() },
            Statement::StateDef {
                name: "a".into(),
                transitions: vec![transition("x", &["a"])],
            },
        ]);
        assert_eq!(to_dot(&program), to_dot(&program));
    }
}
