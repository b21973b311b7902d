//! A module containing the [`Multiset`] trait and [`MultisetAssert`].

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

use crate::error::CheckError;

/// A collection that counts how many times each element occurs.
///
/// Implemented for maps from elements to their counts, where an element
/// that is not a key occurs zero times.
pub trait Multiset<T> {
	/// The number of occurrences of `element`.
	fn count(&self, element: &T) -> usize;
}

impl<T, S> Multiset<T> for HashMap<T, usize, S>
where
	T: Eq + Hash,
	S: BuildHasher,
{
	fn count(&self, element: &T) -> usize {
		self.get(element).copied().unwrap_or(0)
	}
}

impl<T> Multiset<T> for BTreeMap<T, usize>
where
	T: Ord,
{
	fn count(&self, element: &T) -> usize {
		self.get(element).copied().unwrap_or(0)
	}
}

/// The violation type of every [`MultisetAssert`] check. Each variant
/// holds the element, the count it was checked against and the count
/// it actually has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultisetViolation<T> {
	/// The element did not occur exactly `expected` times.
	Exactly {
		/// The element that was looked for.
		element: T,
		/// The expected count.
		expected: usize,
		/// The actual count.
		actual: usize,
	},
	/// The element occurred fewer than `minimum` times.
	AtLeast {
		/// The element that was looked for.
		element: T,
		/// The minimum count.
		minimum: usize,
		/// The actual count.
		actual: usize,
	},
	/// The element occurred more than `maximum` times.
	AtMost {
		/// The element that was looked for.
		element: T,
		/// The maximum count.
		maximum: usize,
		/// The actual count.
		actual: usize,
	},
}

impl<T> fmt::Display for MultisetViolation<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (element, bound, count, actual) = match self {
			MultisetViolation::Exactly {
				element,
				expected,
				actual,
			} => (element, "exactly", expected, actual),
			MultisetViolation::AtLeast {
				element,
				minimum,
				actual,
			} => (element, "at least", minimum, actual),
			MultisetViolation::AtMost {
				element,
				maximum,
				actual,
			} => (element, "at most", maximum, actual),
		};
		write!(
			f,
			"expecting multiset to contain:\n  {element}\n{bound} {count} times but was found {actual} times"
		)
	}
}

/// A chainable set of checks over a borrowed [`Multiset`].
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use collassert::MultisetAssert;
///
/// let actual = HashMap::from([("shoe", 2_usize), ("hat", 1)]);
///
/// assert!(MultisetAssert::new(&actual)
/// 	.contains(2, "shoe")
/// 	.and_then(|a| a.contains_at_least(1, "hat"))
/// 	.and_then(|a| a.contains_at_most(0, "glove"))
/// 	.is_ok());
/// ```
#[derive(Debug)]
pub struct MultisetAssert<'a, M: ?Sized> {
	actual: &'a M,
}

impl<M: ?Sized> Clone for MultisetAssert<'_, M> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<M: ?Sized> Copy for MultisetAssert<'_, M> {}

impl<'a, M> MultisetAssert<'a, M>
where
	M: ?Sized,
{
	/// Makes a new assertion over `actual`.
	pub fn new(actual: &'a M) -> Self {
		MultisetAssert { actual }
	}

	/// Returns the multiset under test.
	pub fn actual(&self) -> &'a M {
		self.actual
	}

	/// Checks that `element` occurs exactly `expected` times.
	pub fn contains<T>(
		self,
		expected: usize,
		element: T,
	) -> Result<Self, CheckError<MultisetViolation<T>>>
	where
		M: Multiset<T>,
	{
		let actual = self.actual.count(&element);
		if actual != expected {
			return Err(fail(MultisetViolation::Exactly {
				element,
				expected,
				actual,
			}));
		}
		Ok(self)
	}

	/// Checks that `element` occurs at least `minimum` times.
	pub fn contains_at_least<T>(
		self,
		minimum: usize,
		element: T,
	) -> Result<Self, CheckError<MultisetViolation<T>>>
	where
		M: Multiset<T>,
	{
		let actual = self.actual.count(&element);
		if actual < minimum {
			return Err(fail(MultisetViolation::AtLeast {
				element,
				minimum,
				actual,
			}));
		}
		Ok(self)
	}

	/// Checks that `element` occurs at most `maximum` times.
	pub fn contains_at_most<T>(
		self,
		maximum: usize,
		element: T,
	) -> Result<Self, CheckError<MultisetViolation<T>>>
	where
		M: Multiset<T>,
	{
		let actual = self.actual.count(&element);
		if actual > maximum {
			return Err(fail(MultisetViolation::AtMost {
				element,
				maximum,
				actual,
			}));
		}
		Ok(self)
	}
}

fn fail<T>(violation: MultisetViolation<T>) -> CheckError<MultisetViolation<T>> {
	tracing::debug!("multiset check failed");
	CheckError::Violation(violation)
}
