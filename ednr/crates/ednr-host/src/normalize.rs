//! The tree normalizer and its tag-handler registry.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use thiserror::Error;

use ednr_par::{Special, Value};

use crate::value::HostValue;

/// A tag interpreter.
///
/// Receives the tag name, the already-normalized payload, and the full
/// registry so composite handlers can delegate.
pub type TagHandler =
    Box<dyn Fn(&str, HostValue, &Handlers) -> Result<HostValue, NormalizeError>>;

/// What the normalizer does with a `#_` form.
///
/// The raw tree preserves discarded values; whether they should survive
/// normalization is left to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscardBehavior {
    /// Normalize and substitute the wrapped value.
    #[default]
    Propagate,
    /// Fail with [`NormalizeError::DiscardedValue`].
    Reject,
}

/// A normalization failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A tagged value had no registered handler and no fallback.
    #[error("no handler registered for tag `{0}`")]
    HandlerNotFound(String),

    /// A `#_` form was reached under [`DiscardBehavior::Reject`].
    #[error("discarded form reached the normalizer")]
    DiscardedValue,

    /// A handler rejected its payload.
    #[error("handler for tag `{tag}` failed: {message}")]
    Handler {
        /// The tag whose handler failed.
        tag: String,
        /// The handler's own description of the failure.
        message: String,
    },
}

impl NormalizeError {
    /// Builds a handler-failure error; for use inside tag handlers.
    pub fn handler(tag: impl Into<String>, message: impl Into<String>) -> Self {
        NormalizeError::Handler {
            tag: tag.into(),
            message: message.into(),
        }
    }
}

/// The tag-handler registry.
///
/// Dispatch is by exact tag name. An optional fallback catches every
/// unregistered tag; without one, unregistered tags are an error.
///
/// # Example
///
/// ```
/// use ednr_host::{normalize, Handlers, HostValue};
/// use ednr_par::Value;
///
/// let mut handlers = Handlers::new();
/// handlers.register("upper", |_, payload, _| match payload {
///     HostValue::String(s) => Ok(HostValue::String(s.to_uppercase())),
///     other => Ok(other),
/// });
///
/// let raw = Value::tagged("upper", Value::string("abc"));
/// assert_eq!(
///     normalize(&raw, &handlers).unwrap(),
///     HostValue::string("ABC")
/// );
/// ```
#[derive(Default)]
pub struct Handlers {
    handlers: FxHashMap<String, TagHandler>,
    fallback: Option<TagHandler>,
    discard: DiscardBehavior,
}

impl Handlers {
    /// Creates an empty registry with default discard behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `tag`, replacing any previous one.
    pub fn register<F>(&mut self, tag: impl Into<String>, handler: F)
    where
        F: Fn(&str, HostValue, &Handlers) -> Result<HostValue, NormalizeError> + 'static,
    {
        self.handlers.insert(tag.into(), Box::new(handler));
    }

    /// Installs a fallback invoked for every unregistered tag.
    pub fn set_fallback<F>(&mut self, handler: F)
    where
        F: Fn(&str, HostValue, &Handlers) -> Result<HostValue, NormalizeError> + 'static,
    {
        self.fallback = Some(Box::new(handler));
    }

    /// Sets the treatment of `#_` forms.
    pub fn set_discard(&mut self, behavior: DiscardBehavior) {
        self.discard = behavior;
    }

    fn lookup(&self, tag: &str) -> Option<&TagHandler> {
        self.handlers.get(tag).or(self.fallback.as_ref())
    }
}

/// Rewrites a raw tree into host containers.
///
/// Scalars pass through; characters become one-character strings; the
/// `:nil` keyword form collapses to nil; lists and vectors lose their
/// distinction; sets deduplicate; maps become associative. Tagged values
/// dispatch through `handlers`. The result is deterministic for
/// identical inputs.
pub fn normalize(value: &Value, handlers: &Handlers) -> Result<HostValue, NormalizeError> {
    match value {
        Value::Nil | Value::KeywordNil => Ok(HostValue::Nil),
        Value::Bool(b) => Ok(HostValue::Bool(*b)),
        Value::Integer(n) => Ok(HostValue::Integer(n.clone())),
        Value::Float(x) => Ok(HostValue::Float(*x)),
        Value::Rational(r) => Ok(HostValue::Rational(r.clone())),
        Value::SpecialFloat(Special::PosInf) => Ok(HostValue::Float(f64::INFINITY)),
        Value::SpecialFloat(Special::NegInf) => Ok(HostValue::Float(f64::NEG_INFINITY)),
        Value::SpecialFloat(Special::NaN) => Ok(HostValue::Float(f64::NAN)),
        Value::Char(c) => Ok(HostValue::String(c.to_string())),
        Value::String(s) => Ok(HostValue::String(s.clone())),
        Value::Keyword(name) => Ok(HostValue::Keyword(name.clone())),
        Value::Symbol(name) => Ok(HostValue::Symbol(name.clone())),
        Value::List(items) | Value::Vector(items) => {
            let seq = items
                .iter()
                .map(|item| normalize(item, handlers))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HostValue::Seq(seq))
        },
        Value::Set(items) => {
            let mut set = IndexSet::with_capacity(items.len());
            for item in items {
                set.insert(normalize(item, handlers)?);
            }
            Ok(HostValue::Set(set))
        },
        Value::Map(pairs) => {
            let mut map = IndexMap::with_capacity(pairs.len());
            for (key, val) in pairs {
                map.insert(normalize(key, handlers)?, normalize(val, handlers)?);
            }
            Ok(HostValue::Map(map))
        },
        Value::Tagged(tag, inner) => {
            let payload = normalize(inner, handlers)?;
            match handlers.lookup(tag) {
                Some(handler) => handler(tag, payload, handlers),
                None => Err(NormalizeError::HandlerNotFound(tag.clone())),
            }
        },
        Value::Discard(inner) => match handlers.discard {
            DiscardBehavior::Propagate => normalize(inner, handlers),
            DiscardBehavior::Reject => Err(NormalizeError::DiscardedValue),
        },
        Value::Metadata(target, meta) => Ok(HostValue::Meta(
            Box::new(normalize(target, handlers)?),
            Box::new(normalize(meta, handlers)?),
        )),
    }
}
