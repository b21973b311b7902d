//! A module containing the error types shared by every check.

use core::fmt;
use core::ops::Bound;

use thiserror::Error;

use crate::query::QueryKind;

/// The error returned when a check is invoked with arguments it cannot
/// evaluate. This is a usage error, distinct from a failed expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInvocation {
	/// The query argument was absent.
	#[error("the {0} to look for should not be null")]
	ArgumentNull(QueryKind),
	/// The query argument was empty while the actual value was not.
	#[error("the {0} to look for should not be empty")]
	ArgumentEmpty(QueryKind),
}

/// The outcome of a failed check.
///
/// `V` is the violation type of the assertion family that produced the
/// error, such as [`RangeSetViolation`](crate::RangeSetViolation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError<V> {
	/// The check could not be evaluated, see [`InvalidInvocation`].
	InvalidInvocation(InvalidInvocation),
	/// The check was evaluated and the expectation did not hold.
	Violation(V),
}

impl<V> CheckError<V> {
	/// Returns `true` if this is an [`CheckError::InvalidInvocation`].
	pub fn is_invalid_invocation(&self) -> bool {
		matches!(self, CheckError::InvalidInvocation(_))
	}

	/// Returns the violation, or `None` for an invalid invocation.
	pub fn violation(&self) -> Option<&V> {
		match self {
			CheckError::Violation(violation) => Some(violation),
			CheckError::InvalidInvocation(_) => None,
		}
	}
}

impl<V> From<InvalidInvocation> for CheckError<V> {
	fn from(invalid: InvalidInvocation) -> Self {
		CheckError::InvalidInvocation(invalid)
	}
}

impl<V> fmt::Display for CheckError<V>
where
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CheckError::InvalidInvocation(invalid) => {
				write!(f, "invalid invocation: {invalid}")
			}
			CheckError::Violation(violation) => fmt::Display::fmt(violation, f),
		}
	}
}

impl<V> std::error::Error for CheckError<V> where V: fmt::Debug + fmt::Display {}

/// The error returned by [`Interval::new()`](crate::Interval::new) when
/// the given bounds do not describe a valid interval. Contains the bounds
/// that were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIntervalError<T> {
	/// The rejected lower bound.
	pub lower: Bound<T>,
	/// The rejected upper bound.
	pub upper: Bound<T>,
}

impl<T> fmt::Display for InvalidIntervalError<T>
where
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"invalid interval bounds {:?} and {:?}: the lower endpoint lies after the upper endpoint",
			self.lower, self.upper
		)
	}
}

impl<T> std::error::Error for InvalidIntervalError<T> where T: fmt::Debug {}
