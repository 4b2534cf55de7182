//! Metadata utilities.
//!
//! Metadata is an annotation wrapper in the raw tree: `^m v` parses to
//! `Metadata(v, m)`. These helpers attach, read, strip, and merge such
//! wrappers without interpreting the annotations themselves.

use crate::value::Value;

/// Returns the metadata of `value`, when it carries one.
///
/// Only the outermost wrapper is consulted: in `^a ^b x` the answer is
/// `a`.
pub fn get_metadata(value: &Value) -> Option<&Value> {
    match value {
        Value::Metadata(_, meta) => Some(meta),
        _ => None,
    }
}

/// Wraps `value` with `meta`.
pub fn with_metadata(value: Value, meta: Value) -> Value {
    Value::Metadata(Box::new(value), Box::new(meta))
}

/// Recursively removes every metadata wrapper from `value`, descending
/// into containers. Idempotent.
pub fn strip_metadata(value: Value) -> Value {
    match value {
        Value::Metadata(target, _) => strip_metadata(*target),
        Value::List(items) => Value::List(strip_all(items)),
        Value::Vector(items) => Value::Vector(strip_all(items)),
        Value::Set(items) => Value::Set(strip_all(items)),
        Value::Map(pairs) => Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (strip_metadata(k), strip_metadata(v)))
                .collect(),
        ),
        Value::Tagged(tag, inner) => Value::Tagged(tag, Box::new(strip_metadata(*inner))),
        Value::Discard(inner) => Value::Discard(Box::new(strip_metadata(*inner))),
        other => other,
    }
}

fn strip_all(items: Vec<Value>) -> Vec<Value> {
    items.into_iter().map(strip_metadata).collect()
}

/// Merges `new_meta` into the metadata of `value`.
///
/// When `value` already carries metadata, both annotations are folded
/// into map form and their pair lists concatenated in (existing, new)
/// order. Otherwise this is [`with_metadata`]. The result always has a
/// metadata wrapper outermost.
pub fn merge_metadata(value: Value, new_meta: Value) -> Value {
    match value {
        Value::Metadata(target, existing) => {
            let mut pairs = meta_pairs(*existing);
            pairs.extend(meta_pairs(new_meta));
            Value::Metadata(target, Box::new(Value::Map(pairs)))
        },
        other => with_metadata(other, new_meta),
    }
}

/// Folds an annotation into map form.
///
/// Keywords become `{kw true}`, strings `{:tag s}`, maps stay
/// themselves, and anything else becomes `{:value x}`.
fn meta_pairs(meta: Value) -> Vec<(Value, Value)> {
    match meta {
        Value::Map(pairs) => pairs,
        kw @ (Value::Keyword(_) | Value::KeywordNil) => vec![(kw, Value::Bool(true))],
        Value::String(s) => vec![(Value::keyword("tag"), Value::String(s))],
        other => vec![(Value::keyword("value"), other)],
    }
}
