//! Formula parser
//!
//! Formulas are a single function call: `NAME(arg, ...)`. Arguments are split on commas
//! outside double-quoted text; `""` inside quotes is an escaped quote.

use tabula_core::cell::is_reference;
use tabula_core::CellAddress;

use crate::ast::{ColumnRange, Criterion, Formula};
use crate::error::{FormulaError, FormulaResult};

/// Parse formula text into a [`Formula`]
///
/// The leading `=` is optional and function names are case-insensitive.
///
/// # Example
/// ```rust
/// use tabula_formula::{parse_formula, ColumnRange, Formula};
///
/// let formula = parse_formula("=sum(B1:D1)").unwrap();
/// assert_eq!(formula, Formula::Sum(ColumnRange::new(2, 4)));
/// ```
pub fn parse_formula(text: &str) -> FormulaResult<Formula> {
    let body = text.trim();
    let body = body.strip_prefix('=').unwrap_or(body).trim_start();

    let open = body
        .find('(')
        .ok_or_else(|| FormulaError::NotImplemented(body.to_string()))?;
    let name = body[..open].trim().to_ascii_uppercase();
    let args_text = body[open + 1..]
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| FormulaError::Parse(format!("missing closing ')' in '{}'", text)))?;
    let args = split_arguments(args_text)?;

    match name.as_str() {
        "COUNTIF" => {
            expect_arity(&name, &args, 2)?;
            Ok(Formula::CountIf(
                ColumnRange::parse(args[0])?,
                parse_criterion(args[1])?,
            ))
        }
        "COUNT" => Ok(Formula::Count(single_range(&name, &args)?)),
        "MEDIAN" => Ok(Formula::Median(single_range(&name, &args)?)),
        "SUM" => Ok(Formula::Sum(single_range(&name, &args)?)),
        _ => Err(FormulaError::NotImplemented(name)),
    }
}

fn single_range(name: &str, args: &[&str]) -> FormulaResult<ColumnRange> {
    expect_arity(name, args, 1)?;
    ColumnRange::parse(args[0])
}

fn expect_arity(name: &str, args: &[&str], expected: usize) -> FormulaResult<()> {
    if args.len() != expected {
        return Err(FormulaError::Parse(format!(
            "{} expects {} argument(s), got {}",
            name,
            expected,
            args.len()
        )));
    }
    Ok(())
}

/// Split the text between the outer parentheses into trimmed arguments
fn split_arguments(text: &str) -> FormulaResult<Vec<&str>> {
    let mut args = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut in_quotes = false;

    for (i, c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| FormulaError::Parse(format!("unbalanced ')' in '{}'", text)))?;
            }
            ',' if !in_quotes && depth == 0 => {
                args.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if in_quotes {
        return Err(FormulaError::Parse(format!(
            "unterminated string in '{}'",
            text
        )));
    }
    if depth != 0 {
        return Err(FormulaError::Parse(format!("unbalanced '(' in '{}'", text)));
    }

    let last = text[start..].trim();
    if !(args.is_empty() && last.is_empty()) {
        args.push(last);
    }
    Ok(args)
}

fn parse_criterion(token: &str) -> FormulaResult<Criterion> {
    if let Some(quoted) = token.strip_prefix('"') {
        let inner = quoted
            .strip_suffix('"')
            .ok_or_else(|| FormulaError::Parse(format!("malformed text '{}'", token)))?;
        return Ok(Criterion::Literal(inner.replace("\"\"", "\"")));
    }

    if is_reference(token) {
        let address = CellAddress::parse(token)
            .map_err(|e| FormulaError::InvalidFormat(format!("bad criterion '{}': {}", token, e)))?;
        return Ok(Criterion::Reference(address));
    }

    Ok(Criterion::Literal(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range(from: u32, to: u32) -> ColumnRange {
        ColumnRange::new(from, to)
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(parse_formula("SUM(B1:D1)").unwrap(), Formula::Sum(range(2, 4)));
        assert_eq!(parse_formula("=COUNT(A2:C2)").unwrap(), Formula::Count(range(1, 3)));
        assert_eq!(parse_formula(" =median( C1:A1 ) ").unwrap(), Formula::Median(range(1, 3)));
    }

    #[test]
    fn test_parse_countif_criteria() {
        assert_eq!(
            parse_formula("COUNTIF(B1:D1,\"car\")").unwrap(),
            Formula::CountIf(range(2, 4), Criterion::Literal("car".into()))
        );
        assert_eq!(
            parse_formula("COUNTIF(B1:D1, E1)").unwrap(),
            Formula::CountIf(range(2, 4), Criterion::Reference(CellAddress::parse("E1").unwrap()))
        );
        assert_eq!(
            parse_formula("COUNTIF(B1:D1,car)").unwrap(),
            Formula::CountIf(range(2, 4), Criterion::Literal("car".into()))
        );
        assert_eq!(
            parse_formula("COUNTIF(B1:D1,\"a,\"\"b\"\"\")").unwrap(),
            Formula::CountIf(range(2, 4), Criterion::Literal("a,\"b\"".into()))
        );
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for text in ["SUM(B:D)", "COUNT(A:A)", "COUNTIF(B:D,\"x\"\"y\")", "COUNTIF(A:B,C7)"] {
            let formula = parse_formula(text).unwrap();
            assert_eq!(formula.to_string(), text);
        }
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            parse_formula("AVERAGE(B1:D1)"),
            Err(FormulaError::NotImplemented("AVERAGE".into()))
        );
        assert!(matches!(
            parse_formula("B1+C1"),
            Err(FormulaError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_formula("SUM(B1:D1"), Err(FormulaError::Parse(_))));
        assert!(matches!(parse_formula("SUM(B1:D1))"), Err(FormulaError::Parse(_))));
        assert!(matches!(parse_formula("SUM()"), Err(FormulaError::Parse(_))));
        assert!(matches!(
            parse_formula("SUM(B1:C1,D1:E1)"),
            Err(FormulaError::Parse(_))
        ));
        assert!(matches!(
            parse_formula("COUNTIF(B1:D1)"),
            Err(FormulaError::Parse(_))
        ));
        assert!(matches!(
            parse_formula("COUNTIF(B1:D1,\"open)"),
            Err(FormulaError::Parse(_))
        ));
        assert!(matches!(
            parse_formula("SUM(1:2)"),
            Err(FormulaError::InvalidFormat(_))
        ));
    }
}
