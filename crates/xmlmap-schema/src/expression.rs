//! Type expression parser
//!
//! Accepts the docblock-style notation used to declare property types:
//! `string`, `int`, `float`, `bool`, class names, `T[]`, `array<T>`,
//! untyped `array`, nullable `?T` and unions `A|B`.

use crate::model::{PrimitiveKind, TypeDescriptor};
use crate::{Error, Result};

/// Parse an expression into its non-null candidates, in declaration order
///
/// `null` members of a union are dropped, so `null` alone yields an empty
/// list.
pub fn parse_candidates(expression: &str) -> Result<Vec<TypeDescriptor>> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_type(expression, "empty expression"));
    }

    let body = trimmed.strip_prefix('?').unwrap_or(trimmed);
    let mut candidates = Vec::new();

    for member in split_union(body) {
        let member = member.trim();
        if member.is_empty() {
            return Err(Error::invalid_type(expression, "empty union member"));
        }
        if member.eq_ignore_ascii_case("null") {
            continue;
        }
        candidates.push(parse_term(member, expression)?);
    }

    Ok(candidates)
}

/// Split on `|` outside of angle brackets
fn split_union(body: &str) -> Vec<&str> {
    let mut members = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in body.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                members.push(&body[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    members.push(&body[start..]);
    members
}

fn parse_term(term: &str, expression: &str) -> Result<TypeDescriptor> {
    if let Some(inner) = term.strip_suffix("[]") {
        let element = parse_term(inner.trim(), expression)?;
        return Ok(TypeDescriptor::collection_of(element));
    }

    if let Some(open) = term.find('<') {
        let Some(inner) = term[open + 1..].strip_suffix('>') else {
            return Err(Error::invalid_type(expression, "unbalanced '<'"));
        };
        let outer = term[..open].trim();
        if !is_collection_keyword(outer) {
            return Err(Error::invalid_type(
                expression,
                format!("'{outer}' does not take type parameters"),
            ));
        }
        // array<K, V> declares the value type last
        let value_type = split_generic_args(inner)
            .pop()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .ok_or_else(|| Error::invalid_type(expression, "missing element type"))?;
        let element = parse_candidates(value_type)
            .map_err(|_| Error::invalid_type(expression, format!("bad element '{value_type}'")))?
            .into_iter()
            .next();
        return Ok(TypeDescriptor::Collection(element.map(Box::new)));
    }

    if let Some(kind) = primitive_keyword(term) {
        return Ok(TypeDescriptor::Primitive(kind));
    }

    if is_collection_keyword(term) {
        return Ok(TypeDescriptor::untyped_collection());
    }

    if is_class_identifier(term) {
        return Ok(TypeDescriptor::object(term.trim_start_matches('\\')));
    }

    Err(Error::invalid_type(
        expression,
        format!("'{term}' is not a type name"),
    ))
}

fn split_generic_args(inner: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(&inner[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    args.push(&inner[start..]);
    args
}

fn primitive_keyword(term: &str) -> Option<PrimitiveKind> {
    match term.to_ascii_lowercase().as_str() {
        "string" | "str" => Some(PrimitiveKind::String),
        "int" | "integer" => Some(PrimitiveKind::Integer),
        "float" | "double" => Some(PrimitiveKind::Float),
        "bool" | "boolean" => Some(PrimitiveKind::Boolean),
        _ => None,
    }
}

fn is_collection_keyword(term: &str) -> bool {
    matches!(
        term.to_ascii_lowercase().as_str(),
        "array" | "list" | "iterable"
    )
}

fn is_class_identifier(term: &str) -> bool {
    let name = term.trim_start_matches('\\');
    let Some(first) = name.chars().next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '\\' | ':' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(expression: &str) -> TypeDescriptor {
        let mut candidates = parse_candidates(expression).unwrap();
        assert_eq!(candidates.len(), 1, "expected one candidate for {expression}");
        candidates.remove(0)
    }

    #[test]
    fn test_primitive_keywords() {
        assert_eq!(parse_one("string"), TypeDescriptor::string());
        assert_eq!(parse_one("integer"), TypeDescriptor::integer());
        assert_eq!(parse_one("int"), TypeDescriptor::integer());
        assert_eq!(parse_one("double"), TypeDescriptor::float());
        assert_eq!(parse_one("Boolean"), TypeDescriptor::boolean());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(parse_one("Manufacturer"), TypeDescriptor::object("Manufacturer"));
        assert_eq!(parse_one("\\DateTime"), TypeDescriptor::object("DateTime"));
        assert_eq!(
            parse_one("chrono::NaiveDateTime"),
            TypeDescriptor::object("chrono::NaiveDateTime")
        );
    }

    #[test]
    fn test_collections() {
        assert_eq!(parse_one("array"), TypeDescriptor::untyped_collection());
        assert_eq!(
            parse_one("Option[]"),
            TypeDescriptor::collection_of(TypeDescriptor::object("Option"))
        );
        assert_eq!(
            parse_one("list<int>"),
            TypeDescriptor::collection_of(TypeDescriptor::integer())
        );
        assert_eq!(
            parse_one("array<string, Option>"),
            TypeDescriptor::collection_of(TypeDescriptor::object("Option"))
        );
        assert_eq!(
            parse_one("string[][]"),
            TypeDescriptor::collection_of(TypeDescriptor::collection_of(TypeDescriptor::string()))
        );
    }

    #[test]
    fn test_nullable_and_unions() {
        assert_eq!(parse_candidates("?int").unwrap(), vec![TypeDescriptor::integer()]);
        assert_eq!(
            parse_candidates("null|Option[]|string").unwrap(),
            vec![
                TypeDescriptor::collection_of(TypeDescriptor::object("Option")),
                TypeDescriptor::string()
            ]
        );
        assert!(parse_candidates("null").unwrap().is_empty());
    }

    #[test]
    fn test_union_inside_generic_is_not_split() {
        assert_eq!(
            parse_one("array<int|string>"),
            TypeDescriptor::collection_of(TypeDescriptor::integer())
        );
    }

    #[test]
    fn test_invalid_expressions() {
        for expression in ["", "   ", "int|", "9lives", "Car<int>", "array<int", "array<>"] {
            assert!(
                parse_candidates(expression).is_err(),
                "expected failure for '{expression}'"
            );
        }
    }
}
