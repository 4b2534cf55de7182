//! The EDN value tree.
//!
//! A parsed document is a tree of [`Value`] nodes. Every source-level
//! distinction survives parsing: vectors stay distinct from lists, sets
//! from both, keywords from symbols, rationals from integers, and
//! metadata wrappers and discarded forms remain in the tree. Containers
//! own their children exclusively; the tree has no cycles and needs no
//! reference counting.

use num_bigint::BigInt;

use ednr_lex::Rational;

/// The non-finite float sentinels `##Inf`, `##-Inf`, and `##NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    /// `##Inf`
    PosInf,
    /// `##-Inf`
    NegInf,
    /// `##NaN`
    NaN,
}

/// A node of the parsed EDN tree.
///
/// Equality is structural and variant-discriminating:
/// `Vector([1])` ≠ `List([1])` and [`Value::KeywordNil`] ≠ [`Value::Nil`].
/// Map and set entries keep their source order; the parser enforces no
/// uniqueness (the normalizer does, later).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The literal `nil`.
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// An integer of any source base, arbitrary precision.
    Integer(BigInt),
    /// A floating-point number.
    Float(f64),
    /// An exact fraction, never reduced.
    Rational(Rational),
    /// A non-finite float sentinel.
    SpecialFloat(Special),
    /// A single Unicode scalar value.
    Char(char),
    /// A UTF-8 string.
    String(String),
    /// A keyword, without its leading `:`.
    Keyword(String),
    /// The keyword spelled `:nil`, kept apart from [`Value::Nil`] so the
    /// printer can re-emit it verbatim.
    KeywordNil,
    /// A symbol.
    Symbol(String),
    /// `(…)`
    List(Vec<Value>),
    /// `[…]`
    Vector(Vec<Value>),
    /// `#{…}` — insertion order preserved, duplicates preserved.
    Set(Vec<Value>),
    /// `{…}` — insertion-ordered key/value pairs, no dangling key.
    Map(Vec<(Value, Value)>),
    /// `#tag value`
    Tagged(String, Box<Value>),
    /// `#_ value` — the discarded form, preserved so downstream
    /// consumers may choose whether to honour it.
    Discard(Box<Value>),
    /// `^meta target`, as `Metadata(target, meta)`.
    Metadata(Box<Value>, Box<Value>),
}

impl Value {
    /// Builds an integer value.
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Value::Integer(n.into())
    }

    /// Builds a keyword value. `keyword("nil")` yields the dedicated
    /// [`Value::KeywordNil`] variant, the only path that may produce it
    /// besides the parser.
    pub fn keyword(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "nil" {
            Value::KeywordNil
        } else {
            Value::Keyword(name)
        }
    }

    /// Builds a symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Builds a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Builds a tagged value.
    pub fn tagged(tag: impl Into<String>, value: Value) -> Self {
        Value::Tagged(tag.into(), Box::new(value))
    }

    /// The namespace part of a keyword, symbol, or tag — the text before
    /// the first `/`, when there is one.
    ///
    /// Purely lexical; nothing is resolved.
    pub fn namespace(&self) -> Option<&str> {
        let name = self.qualified_name()?;
        name.split_once('/').map(|(ns, _)| ns)
    }

    /// The name part of a keyword, symbol, or tag — the text after the
    /// first `/`, or the whole name when unqualified.
    pub fn name(&self) -> Option<&str> {
        let name = self.qualified_name()?;
        Some(name.split_once('/').map_or(name, |(_, n)| n))
    }

    fn qualified_name(&self) -> Option<&str> {
        match self {
            Value::Keyword(name) | Value::Symbol(name) | Value::Tagged(name, _) => Some(name),
            Value::KeywordNil => Some("nil"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_discrimination() {
        let one = Value::integer(1);
        assert_ne!(Value::List(vec![one.clone()]), Value::Vector(vec![one]));
        assert_ne!(Value::KeywordNil, Value::Nil);
        assert_ne!(Value::keyword("a"), Value::symbol("a"));
    }

    #[test]
    fn test_keyword_nil_constructor() {
        assert_eq!(Value::keyword("nil"), Value::KeywordNil);
        assert_eq!(Value::keyword("nils"), Value::Keyword("nils".to_string()));
    }

    #[test]
    fn test_integer_and_rational_distinct() {
        let rational = Value::Rational(Rational::new(4.into(), 2.into()));
        assert_ne!(rational, Value::integer(2));
    }

    #[test]
    fn test_namespace_split() {
        let kw = Value::keyword("my.ns/foo");
        assert_eq!(kw.namespace(), Some("my.ns"));
        assert_eq!(kw.name(), Some("foo"));

        let sym = Value::symbol("bare");
        assert_eq!(sym.namespace(), None);
        assert_eq!(sym.name(), Some("bare"));

        assert_eq!(Value::integer(3).name(), None);
    }

    #[test]
    fn test_tagged_namespace() {
        let tagged = Value::tagged("myapp/Person", Value::Nil);
        assert_eq!(tagged.namespace(), Some("myapp"));
        assert_eq!(tagged.name(), Some("Person"));
    }
}
