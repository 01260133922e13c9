//! `declare_id!` literal scanning.
//!
//! The match decision is a plain substring search; this scanner only recovers
//! the literal a program currently declares so a mismatch report can show it.

use serde::Serialize;

use crate::errors::ProgidResult;
use crate::program_id::ProgramId;

const MACRO: &str = "declare_id!";

/// A `declare_id!("...")` literal and the 1-based line it sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredId {
    pub value: String,
    pub line: usize,
}

impl DeclaredId {
    pub fn program_id(&self) -> ProgidResult<ProgramId> {
        self.value.parse()
    }
}

/// Collect every `declare_id!("<literal>")` in `text`, in source order.
pub fn find_declared_ids(text: &str) -> Vec<DeclaredId> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let mut rest = line;
        while let Some(pos) = rest.find(MACRO) {
            rest = &rest[pos + MACRO.len()..];
            if let Some(value) = parse_literal(rest) {
                out.push(DeclaredId { value: value.to_string(), line: idx + 1 });
            }
        }
    }
    out
}

// Accepts `  ( "value" )` with optional whitespace.
fn parse_literal(s: &str) -> Option<&str> {
    let s = s.trim_start().strip_prefix('(')?.trim_start().strip_prefix('"')?;
    let end = s.find('"')?;
    let tail = s[end + 1..].trim_start();
    if tail.starts_with(')') {
        Some(&s[..end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_anchor_declaration() {
        let src = "use anchor_lang::prelude::*;\n\ndeclare_id!(\"F2LhVGUa9yLbYVYujYMPyckqWmsokHE9wym7ceGHWUMZ\");\n";
        let ids = find_declared_ids(src);
        assert_eq!(
            ids,
            vec![DeclaredId {
                value: "F2LhVGUa9yLbYVYujYMPyckqWmsokHE9wym7ceGHWUMZ".to_string(),
                line: 3,
            }]
        );
        assert!(ids[0].program_id().is_ok());
    }

    #[test]
    fn tolerates_whitespace() {
        let ids = find_declared_ids("declare_id! ( \"abc\" );");
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].value, "abc");
        assert!(ids[0].program_id().is_err());
    }

    #[test]
    fn ignores_non_literal_arguments() {
        assert!(find_declared_ids("declare_id!(PROGRAM_ID);").is_empty());
        assert!(find_declared_ids("declare_id!(\"unterminated").is_empty());
        assert!(find_declared_ids("declare_id!(\"a\" \"b\")").is_empty());
    }

    #[test]
    fn keeps_source_order() {
        let src = "declare_id!(\"one\");\n// old: declare_id!(\"two\"); declare_id!(\"three\")\n";
        let values: Vec<_> = find_declared_ids(src).into_iter().map(|d| (d.value, d.line)).collect();
        assert_eq!(
            values,
            vec![("one".to_string(), 1), ("two".to_string(), 2), ("three".to_string(), 2)]
        );
    }
}
