//! ednr-host - Normalization of raw EDN trees into host containers.
//!
//! The parser's [`Value`](ednr_par::Value) tree preserves every
//! source-level distinction. This crate folds that tree into the
//! containers a program actually wants to work with: one sequence type
//! for lists and vectors, an insertion-ordered set with uniqueness
//! enforced, an insertion-ordered map, and plain scalars.
//!
//! Tagged literals are the extension point: a [`Handlers`] registry maps
//! tag names to interpreter functions, each handed the already-normalized
//! payload. A tag without a handler (and without a registered fallback)
//! fails with [`NormalizeError::HandlerNotFound`].
//!
//! # Example
//!
//! ```
//! use ednr_host::{normalize, Handlers, HostValue};
//! use ednr_par::Value;
//!
//! let raw = Value::Set(vec![Value::integer(1), Value::integer(1)]);
//! let host = normalize(&raw, &Handlers::new()).unwrap();
//! match host {
//!     HostValue::Set(set) => assert_eq!(set.len(), 1),
//!     other => panic!("expected a set, got {other:?}"),
//! }
//! ```

pub mod normalize;
pub mod value;

pub use normalize::{normalize, DiscardBehavior, Handlers, NormalizeError, TagHandler};
pub use value::HostValue;
