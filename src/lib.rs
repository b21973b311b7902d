//! This crate provides fluent, chainable checks over range sets and a
//! handful of other collection shapes, built around [`RangeSet`], a set
//! of disjoint [`Interval`]s over any ordered domain.
//!
//! Every check either passes, returns a
//! [`CheckError::Violation`] holding a diagnostic of what was expected
//! and what was found, or returns a [`CheckError::InvalidInvocation`]
//! when the check was given arguments it cannot evaluate.
//!
//! ## Example
//!
//! ```rust
//! use collassert::interval::{ee, ie, ii};
//! use collassert::{RangeSet, RangeSetAssert};
//!
//! let actual = RangeSet::from_iter([ii(0, 100), ii(200, 300), ii(500, 600)]);
//!
//! let outcome = RangeSetAssert::new(&actual)
//! 	.contains([50, 270, 550])
//! 	.and_then(|a| a.intersects_all([ie(100, 200)]))
//! 	.and_then(|a| a.does_not_intersect_any([ee(100, 200)]));
//! assert!(outcome.is_ok());
//!
//! let error = RangeSetAssert::new(&actual)
//! 	.contains([50, 270, 650])
//! 	.unwrap_err();
//! assert_eq!(
//! 	error.to_string(),
//! 	"expecting range set:\n  [[0..100], [200..300], [500..600]]\n\
//! 	 to contain:\n  [50, 270, 650]\n\
//! 	 but could not find:\n  [650]"
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Continuous-ness
//!
//! Intervals are treated as continuous: `[0, 5)` and `(5, 9]` do not
//! touch since the point `5` lies between them, whereas `[0, 5)` and
//! `[5, 9]` touch and are merged when put in the same [`RangeSet`].
//!
//! ### Invalid Intervals
//!
//! An interval is invalid when its lower endpoint lies after its upper
//! endpoint, or when both endpoints are equal and excluded. Invalid
//! intervals can't be constructed. `[a, a)` and `(a, a]` are valid but
//! empty, and empty intervals are dropped from range sets.
//!
//! | interval     | valid | empty |
//! | ------------ | ----- | ----- |
//! | `[0, 0]`     | YES   | NO    |
//! | `[0, 0)`     | YES   | YES   |
//! | `(0, 0)`     | NO    |       |
//! | `[9, 8]`     | NO    |       |
//! | `(3, 4)`     | YES   | NO    |
//! | `(-∞, +∞)`   | YES   | NO    |
//!
//! ### Intersection
//!
//! Two intervals intersect if there exists a point that is contained
//! within both of them. `[0, 10]` intersects `[10, 20)` but not
//! `(10, 20)`.
//!
//! ### Enclosure
//!
//! A range set encloses an interval when one of its member intervals
//! does. Being covered by the union of several members is not enough,
//! though members that touch are always merged into one.
//!
//! ### Empty Queries
//!
//! A multi-element check given an empty query passes if the range set
//! is empty too and is an invalid invocation otherwise. An absent query,
//! written as `None`, is always an invalid invocation.
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Interval`]
//!   and [`RangeSet`].
//!
//! ## Logging
//!
//! Checks emit [`tracing`] events: `trace` when a range-set relation is
//! evaluated and `debug` whenever a check fails or is rejected. No
//! subscriber is installed by this crate.

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub(crate) mod bound_ord;

pub mod error;
pub mod interval;
pub mod query;
pub mod range_set;

pub mod oracle;

pub mod interval_assert;
pub mod multimap_assert;
pub mod multiset_assert;
pub mod option_assert;
pub mod range_set_assert;
pub mod table_assert;

pub use crate::error::{CheckError, InvalidIntervalError, InvalidInvocation};
pub use crate::interval::{BoundType, Interval};
pub use crate::interval_assert::{IntervalAssert, IntervalViolation};
pub use crate::multimap_assert::{Multimap, MultimapAssert, MultimapViolation};
pub use crate::multiset_assert::{Multiset, MultisetAssert, MultisetViolation};
pub use crate::option_assert::{OptionAssert, OptionViolation};
pub use crate::oracle::{Mismatch, RangeSetViolation, Relation};
pub use crate::query::{IntoQuery, Query, QueryKind};
pub use crate::range_set::RangeSet;
pub use crate::range_set_assert::RangeSetAssert;
pub use crate::table_assert::{Table, TableAssert, TableViolation};
