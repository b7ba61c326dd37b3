//! Treeviz formatter for programs

use super::registry::{FormatError, Formatter};
use crate::av::parser::Statement;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(program: &[Statement]) -> String {
    let mut result = String::new();
    append_children(&mut result, program, "");
    result
}

fn append_statement(result: &mut String, statement: &Statement, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&statement.display_label(), 30);

    if label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, statement.node_type()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            statement.node_type(),
            label
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, statement.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[Statement], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_statement(result, child, prefix, is_last);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, program: &[Statement]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(program))
    }

    fn description(&self) -> &str {
        "Box-drawing tree of the statements"
    }
}
