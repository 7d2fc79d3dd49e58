/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Chemical formula parser
//!
//! Accepts element symbols with optional (possibly fractional) counts and
//! parenthesized groups with an optional multiplier, nested to any depth:
//! `H2O`, `Pt0.5MgO`, `Ca3(PO4)2`, `K4(Fe(CN)6)`.
//!
//! The parser only reads text. It does not know which symbols are real
//! elements; that lookup belongs to the data service.

use super::errors::{AtomError, Result};

/// Parses a formula into `(symbol, count)` pairs in order of appearance
///
/// Groups are expanded in place, so a symbol may appear more than once.
pub fn parse_formula_counts(formula: &str) -> Result<Vec<(String, f64)>> {
    let text = formula.trim();
    if text.is_empty() {
        return Err(AtomError::InvalidFormula("empty formula".to_string()));
    }

    let mut parser = FormulaParser {
        text,
        bytes: text.as_bytes(),
        pos: 0,
    };
    let counts = parser.parse_sequence(0)?;

    if parser.pos != parser.bytes.len() {
        return Err(parser.error("unmatched ')'"));
    }
    Ok(counts)
}

struct FormulaParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl FormulaParser<'_> {
    fn parse_sequence(&mut self, depth: usize) -> Result<Vec<(String, f64)>> {
        let mut counts = Vec::new();

        while let Some(&byte) = self.bytes.get(self.pos) {
            match byte {
                b'(' => {
                    self.pos += 1;
                    let group = self.parse_sequence(depth + 1)?;
                    if self.bytes.get(self.pos) != Some(&b')') {
                        return Err(self.error("unbalanced '('"));
                    }
                    if group.is_empty() {
                        return Err(self.error("empty group"));
                    }
                    self.pos += 1;
                    let multiplier = self.parse_count()?;
                    counts.extend(
                        group
                            .into_iter()
                            .map(|(symbol, count)| (symbol, count * multiplier)),
                    );
                }
                b')' if depth > 0 => return Ok(counts),
                b')' => return Err(self.error("unmatched ')'")),
                b'A'..=b'Z' => {
                    let start = self.pos;
                    self.pos += 1;
                    while self
                        .bytes
                        .get(self.pos)
                        .is_some_and(|b| b.is_ascii_lowercase())
                    {
                        self.pos += 1;
                    }
                    let symbol = self.text[start..self.pos].to_string();
                    let count = self.parse_count()?;
                    counts.push((symbol, count));
                }
                _ => return Err(self.error("unexpected character")),
            }
        }

        Ok(counts)
    }

    /// Reads an optional count; a missing count means one
    fn parse_count(&mut self) -> Result<f64> {
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(1.0);
        }

        let literal = &self.text[start..self.pos];
        let count: f64 = literal
            .parse()
            .map_err(|_| self.error(&format!("bad count '{}'", literal)))?;
        if count <= 0.0 {
            return Err(self.error(&format!("non-positive count '{}'", literal)));
        }
        Ok(count)
    }

    fn error(&self, reason: &str) -> AtomError {
        AtomError::InvalidFormula(format!(
            "{} at position {} in '{}'",
            reason, self.pos, self.text
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(formula: &str) -> Vec<(String, f64)> {
        parse_formula_counts(formula).unwrap()
    }

    #[test]
    fn test_simple_formulas() {
        assert_eq!(counts("Fe"), vec![("Fe".to_string(), 1.0)]);
        assert_eq!(
            counts("Fe2O3"),
            vec![("Fe".to_string(), 2.0), ("O".to_string(), 3.0)]
        );
        assert_eq!(
            counts("Pt0.5MgO"),
            vec![
                ("Pt".to_string(), 0.5),
                ("Mg".to_string(), 1.0),
                ("O".to_string(), 1.0)
            ]
        );
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(
            counts("K4(Fe(CN)6)"),
            vec![
                ("K".to_string(), 4.0),
                ("Fe".to_string(), 1.0),
                ("C".to_string(), 6.0),
                ("N".to_string(), 6.0)
            ]
        );
        assert_eq!(
            counts("Ca3(PO4)2"),
            vec![
                ("Ca".to_string(), 3.0),
                ("P".to_string(), 2.0),
                ("O".to_string(), 8.0)
            ]
        );
    }

    #[test]
    fn test_formatted_counts() {
        assert_eq!(
            counts("Fe2.000000O3.000000Fe1.500000"),
            vec![
                ("Fe".to_string(), 2.0),
                ("O".to_string(), 3.0),
                ("Fe".to_string(), 1.5)
            ]
        );
    }

    #[test]
    fn test_invalid_formulas() {
        for bad in ["", "   ", "fe", "Fe2O3)", "(Fe2O3", "()", "Fe 2", "Fe0", "Fe1..2", "Fe-1"] {
            let err = parse_formula_counts(bad).unwrap_err();
            assert!(
                matches!(err, AtomError::InvalidFormula(_)),
                "expected InvalidFormula for {:?}",
                bad
            );
        }
    }
}
