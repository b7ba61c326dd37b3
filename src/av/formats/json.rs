//! JSON serialization of programs

use super::registry::{FormatError, Formatter};
use crate::av::parser::Statement;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &[Statement]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(program)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON of the statements"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_serde_value() {
        let program = vec![Statement::Accept {
            states: vec!["a".into(), "b".into()],
        }];
        let json = JsonFormatter.serialize(&program).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["type"], "accept");
        assert_eq!(value[0]["states"][1], "b");
    }
}
