//! The normalized host value.

use std::hash::{Hash, Hasher};
use std::mem;

use indexmap::{IndexMap, IndexSet};
use num_bigint::BigInt;

use ednr_par::Rational;

/// A value after normalization.
///
/// Lists and vectors collapse into [`HostValue::Seq`]; sets gain
/// uniqueness; maps become associative lookups. Both keep insertion
/// order. The non-finite sentinels of the raw tree land in
/// [`HostValue::Float`] as the host's own ±∞ and NaN.
///
/// Equality and hashing are structural, with floats compared by bit
/// pattern so any value can serve as a set member or map key — NaN
/// included.
#[derive(Debug, Clone)]
pub enum HostValue {
    /// Nil, also produced by the `:nil` keyword form.
    Nil,
    /// A boolean.
    Bool(bool),
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// A float; carries ±∞ and NaN for the sentinel forms.
    Float(f64),
    /// An exact fraction, still unreduced.
    Rational(Rational),
    /// A string; character values normalize to one-character strings.
    String(String),
    /// A keyword, kept as an atomic identifier.
    Keyword(String),
    /// A symbol, preserved as-is.
    Symbol(String),
    /// An ordered sequence; lists and vectors both land here.
    Seq(Vec<HostValue>),
    /// A set with uniqueness enforced, insertion-ordered.
    Set(IndexSet<HostValue>),
    /// An associative map, insertion-ordered.
    Map(IndexMap<HostValue, HostValue>),
    /// A metadata attachment, `Meta(value, meta)`.
    Meta(Box<HostValue>, Box<HostValue>),
}

impl HostValue {
    /// Builds an integer host value.
    pub fn integer(n: impl Into<BigInt>) -> Self {
        HostValue::Integer(n.into())
    }

    /// Builds a keyword host value.
    pub fn keyword(name: impl Into<String>) -> Self {
        HostValue::Keyword(name.into())
    }

    /// Builds a string host value.
    pub fn string(s: impl Into<String>) -> Self {
        HostValue::String(s.into())
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        use HostValue::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Rational(a), Rational(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Keyword(a), Keyword(b)) => a == b,
            (Symbol(a), Symbol(b)) => a == b,
            (Seq(a), Seq(b)) => a == b,
            (Set(a), Set(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            (Meta(v1, m1), Meta(v2, m2)) => v1 == v2 && m1 == m2,
            _ => false,
        }
    }
}

impl Eq for HostValue {}

impl Hash for HostValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            HostValue::Nil => {},
            HostValue::Bool(b) => b.hash(state),
            HostValue::Integer(n) => n.hash(state),
            HostValue::Float(x) => x.to_bits().hash(state),
            HostValue::Rational(r) => r.hash(state),
            HostValue::String(s) => s.hash(state),
            HostValue::Keyword(name) => name.hash(state),
            HostValue::Symbol(name) => name.hash(state),
            HostValue::Seq(items) => items.hash(state),
            // sets and maps compare order-insensitively, so only their
            // size can safely contribute to the hash
            HostValue::Set(set) => set.len().hash(state),
            HostValue::Map(map) => map.len().hash(state),
            HostValue::Meta(value, meta) => {
                value.hash(state);
                meta.hash(state);
            },
        }
    }
}
