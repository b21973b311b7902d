//! A module containing [`IntervalAssert`], the checks over a single
//! [`Interval`].

use core::fmt;

use crate::error::CheckError;
use crate::interval::BoundType;
use crate::query::{required_elements, write_list, IntoQuery, QueryKind};
use crate::Interval;

/// The violation type of every [`IntervalAssert`] check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalViolation<T> {
	/// The lower endpoint differed from the expected one or was
	/// unbounded.
	LowerEndpoint {
		/// The actual interval.
		actual: Interval<T>,
		/// The expected lower endpoint.
		expected: T,
	},
	/// The upper endpoint differed from the expected one or was
	/// unbounded.
	UpperEndpoint {
		/// The actual interval.
		actual: Interval<T>,
		/// The expected upper endpoint.
		expected: T,
	},
	/// The lower bound was not of the expected type.
	LowerBoundType {
		/// The actual interval.
		actual: Interval<T>,
		/// The expected bound type.
		expected: BoundType,
	},
	/// The upper bound was not of the expected type.
	UpperBoundType {
		/// The actual interval.
		actual: Interval<T>,
		/// The expected bound type.
		expected: BoundType,
	},
	/// The interval was expected to be empty.
	ShouldBeEmpty(Interval<T>),
	/// The interval was expected not to be empty.
	ShouldNotBeEmpty(Interval<T>),
	/// Some values were not inside the interval.
	ShouldContain {
		/// The actual interval.
		actual: Interval<T>,
		/// The values as given.
		values: Vec<T>,
		/// The values outside the interval, in the order given.
		not_found: Vec<T>,
	},
	/// Some values were inside the interval.
	ShouldNotContain {
		/// The actual interval.
		actual: Interval<T>,
		/// The values as given.
		values: Vec<T>,
		/// The values inside the interval, in the order given.
		found: Vec<T>,
	},
}

impl<T> fmt::Display for IntervalViolation<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IntervalViolation::LowerEndpoint { actual, expected } => match actual
				.lower_endpoint()
			{
				Some(endpoint) => write!(
					f,
					"expecting:\n  {actual}\nto have lower endpoint equal to:\n  {expected}\nbut was:\n  {endpoint}"
				),
				None => write!(
					f,
					"expecting:\n  {actual}\nto have lower endpoint equal to:\n  {expected}\nbut it has none"
				),
			},
			IntervalViolation::UpperEndpoint { actual, expected } => match actual
				.upper_endpoint()
			{
				Some(endpoint) => write!(
					f,
					"expecting:\n  {actual}\nto have upper endpoint equal to:\n  {expected}\nbut was:\n  {endpoint}"
				),
				None => write!(
					f,
					"expecting:\n  {actual}\nto have upper endpoint equal to:\n  {expected}\nbut it has none"
				),
			},
			IntervalViolation::LowerBoundType { actual, expected } => {
				write!(f, "expecting:\n  {actual}\nto have {expected} lower bound")
			}
			IntervalViolation::UpperBoundType { actual, expected } => {
				write!(f, "expecting:\n  {actual}\nto have {expected} upper bound")
			}
			IntervalViolation::ShouldBeEmpty(actual) => {
				write!(f, "expecting:\n  {actual}\nto be empty")
			}
			IntervalViolation::ShouldNotBeEmpty(actual) => {
				write!(f, "expecting:\n  {actual}\nnot to be empty")
			}
			IntervalViolation::ShouldContain {
				actual,
				values,
				not_found,
			} => {
				write!(f, "expecting:\n  {actual}\nto contain:\n  ")?;
				write_list(f, values)?;
				f.write_str("\nbut could not find:\n  ")?;
				write_list(f, not_found)
			}
			IntervalViolation::ShouldNotContain {
				actual,
				values,
				found,
			} => {
				write!(f, "expecting:\n  {actual}\nnot to contain:\n  ")?;
				write_list(f, values)?;
				f.write_str("\nbut found:\n  ")?;
				write_list(f, found)
			}
		}
	}
}

/// A chainable set of checks over a borrowed [`Interval`].
///
/// # Examples
/// ```
/// use collassert::interval::ie;
/// use collassert::IntervalAssert;
///
/// let actual = ie(1, 10);
///
/// assert!(IntervalAssert::new(&actual)
/// 	.has_lower_endpoint_equal_to(1)
/// 	.and_then(|a| a.has_closed_lower_bound())
/// 	.and_then(|a| a.has_opened_upper_bound())
/// 	.and_then(|a| a.contains([1, 9]))
/// 	.and_then(|a| a.does_not_contain([10]))
/// 	.is_ok());
/// ```
#[derive(Debug)]
pub struct IntervalAssert<'a, T> {
	actual: &'a Interval<T>,
}

impl<T> Clone for IntervalAssert<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for IntervalAssert<'_, T> {}

type AssertResult<'a, T> = Result<IntervalAssert<'a, T>, CheckError<IntervalViolation<T>>>;

impl<'a, T> IntervalAssert<'a, T>
where
	T: Ord + Clone,
{
	/// Makes a new assertion over `actual`.
	pub fn new(actual: &'a Interval<T>) -> Self {
		IntervalAssert { actual }
	}

	/// Returns the interval under test.
	pub fn actual(&self) -> &'a Interval<T> {
		self.actual
	}

	/// Checks that the lower endpoint is bounded and equal to `expected`.
	pub fn has_lower_endpoint_equal_to(self, expected: T) -> AssertResult<'a, T> {
		if self.actual.lower_endpoint() != Some(&expected) {
			return Err(fail(IntervalViolation::LowerEndpoint {
				actual: self.actual.clone(),
				expected,
			}));
		}
		Ok(self)
	}

	/// Checks that the upper endpoint is bounded and equal to `expected`.
	pub fn has_upper_endpoint_equal_to(self, expected: T) -> AssertResult<'a, T> {
		if self.actual.upper_endpoint() != Some(&expected) {
			return Err(fail(IntervalViolation::UpperEndpoint {
				actual: self.actual.clone(),
				expected,
			}));
		}
		Ok(self)
	}

	/// Checks that the lower bound is included.
	pub fn has_closed_lower_bound(self) -> AssertResult<'a, T> {
		self.lower_bound_type_is(BoundType::Closed)
	}

	/// Checks that the lower bound is excluded.
	pub fn has_opened_lower_bound(self) -> AssertResult<'a, T> {
		self.lower_bound_type_is(BoundType::Open)
	}

	/// Checks that the upper bound is included.
	pub fn has_closed_upper_bound(self) -> AssertResult<'a, T> {
		self.upper_bound_type_is(BoundType::Closed)
	}

	/// Checks that the upper bound is excluded.
	pub fn has_opened_upper_bound(self) -> AssertResult<'a, T> {
		self.upper_bound_type_is(BoundType::Open)
	}

	/// Checks that the interval holds no point, like `[5, 5)`.
	pub fn is_empty(self) -> AssertResult<'a, T> {
		if !self.actual.is_empty() {
			return Err(fail(IntervalViolation::ShouldBeEmpty(self.actual.clone())));
		}
		Ok(self)
	}

	/// Checks that the interval holds at least one point.
	pub fn is_not_empty(self) -> AssertResult<'a, T> {
		if self.actual.is_empty() {
			return Err(fail(IntervalViolation::ShouldNotBeEmpty(
				self.actual.clone(),
			)));
		}
		Ok(self)
	}

	/// Checks that every value lies inside the interval.
	///
	/// An absent or empty list of values is an
	/// [`InvalidInvocation`](crate::InvalidInvocation).
	pub fn contains<Q>(self, values: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<T>,
	{
		let values = required_elements(values, QueryKind::Values)?;
		let not_found: Vec<T> = values
			.iter()
			.filter(|&value| !self.actual.contains(value))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(IntervalViolation::ShouldContain {
				actual: self.actual.clone(),
				values,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that no value lies inside the interval.
	///
	/// An absent or empty list of values is an
	/// [`InvalidInvocation`](crate::InvalidInvocation).
	pub fn does_not_contain<Q>(self, values: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<T>,
	{
		let values = required_elements(values, QueryKind::Values)?;
		let found: Vec<T> = values
			.iter()
			.filter(|&value| self.actual.contains(value))
			.cloned()
			.collect();
		if !found.is_empty() {
			return Err(fail(IntervalViolation::ShouldNotContain {
				actual: self.actual.clone(),
				values,
				found,
			}));
		}
		Ok(self)
	}

	fn lower_bound_type_is(self, expected: BoundType) -> AssertResult<'a, T> {
		if self.actual.lower_bound_type() != Some(expected) {
			return Err(fail(IntervalViolation::LowerBoundType {
				actual: self.actual.clone(),
				expected,
			}));
		}
		Ok(self)
	}

	fn upper_bound_type_is(self, expected: BoundType) -> AssertResult<'a, T> {
		if self.actual.upper_bound_type() != Some(expected) {
			return Err(fail(IntervalViolation::UpperBoundType {
				actual: self.actual.clone(),
				expected,
			}));
		}
		Ok(self)
	}
}

fn fail<T>(violation: IntervalViolation<T>) -> CheckError<IntervalViolation<T>> {
	tracing::debug!("interval check failed");
	CheckError::Violation(violation)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::error::InvalidInvocation;
	use crate::interval::{ee, ei, ie, ii, iu, ue, uu};

	#[test]
	fn endpoint_tests() {
		let actual = ie(1, 10);
		assert!(IntervalAssert::new(&actual)
			.has_lower_endpoint_equal_to(1)
			.and_then(|a| a.has_upper_endpoint_equal_to(10))
			.is_ok());
		assert_eq!(
			IntervalAssert::new(&actual)
				.has_upper_endpoint_equal_to(9)
				.map(|_| ()),
			Err(CheckError::Violation(IntervalViolation::UpperEndpoint {
				actual: ie(1, 10),
				expected: 9,
			}))
		);

		let unbounded = iu(1);
		assert_eq!(
			IntervalAssert::new(&unbounded)
				.has_upper_endpoint_equal_to(1)
				.map(|_| ()),
			Err(CheckError::Violation(IntervalViolation::UpperEndpoint {
				actual: iu(1),
				expected: 1,
			}))
		);
	}

	#[test]
	fn bound_type_tests() {
		let actual = ei(1, 10);
		assert!(IntervalAssert::new(&actual)
			.has_opened_lower_bound()
			.and_then(|a| a.has_closed_upper_bound())
			.is_ok());
		assert_eq!(
			IntervalAssert::new(&actual)
				.has_closed_lower_bound()
				.map(|_| ()),
			Err(CheckError::Violation(IntervalViolation::LowerBoundType {
				actual: ei(1, 10),
				expected: BoundType::Closed,
			}))
		);

		//an unbounded side has neither bound type
		let unbounded = ue(3);
		assert!(IntervalAssert::new(&unbounded)
			.has_opened_lower_bound()
			.is_err());
		assert!(IntervalAssert::new(&unbounded)
			.has_closed_lower_bound()
			.is_err());
		assert!(IntervalAssert::new(&unbounded)
			.has_opened_upper_bound()
			.is_ok());
	}

	#[test]
	fn emptiness_tests() {
		let empty = ie(5, 5);
		let full = uu::<i32>();
		assert!(IntervalAssert::new(&empty).is_empty().is_ok());
		assert!(IntervalAssert::new(&full).is_not_empty().is_ok());
		assert_eq!(
			IntervalAssert::new(&empty).is_not_empty().map(|_| ()),
			Err(CheckError::Violation(IntervalViolation::ShouldNotBeEmpty(ie(
				5, 5
			))))
		);
	}

	#[test]
	fn contains_tests() {
		let actual = ee(0, 10);
		assert!(IntervalAssert::new(&actual).contains([1, 9]).is_ok());
		assert_eq!(
			IntervalAssert::new(&actual)
				.contains([10, 5, 0])
				.map(|_| ()),
			Err(CheckError::Violation(IntervalViolation::ShouldContain {
				actual: ee(0, 10),
				values: vec![10, 5, 0],
				not_found: vec![10, 0],
			}))
		);
		assert_eq!(
			IntervalAssert::new(&actual)
				.does_not_contain(vec![0, 5])
				.map(|_| ()),
			Err(CheckError::Violation(IntervalViolation::ShouldNotContain {
				actual: ee(0, 10),
				values: vec![0, 5],
				found: vec![5],
			}))
		);
	}

	#[test]
	fn contains_preconditions() {
		let actual = ii(0, 10);
		assert_eq!(
			IntervalAssert::new(&actual).contains(Vec::new()).map(|_| ()),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentEmpty(
				QueryKind::Values
			)))
		);
		assert_eq!(
			IntervalAssert::new(&actual)
				.does_not_contain(None::<Vec<i32>>)
				.map(|_| ()),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentNull(
				QueryKind::Values
			)))
		);
	}

	#[test]
	fn display_tests() {
		let actual = iu(1);
		let error = IntervalAssert::new(&actual)
			.has_upper_endpoint_equal_to(4)
			.unwrap_err();
		assert_eq!(
			error.to_string(),
			"expecting:\n  [1..+∞)\nto have upper endpoint equal to:\n  4\nbut it has none"
		);

		let actual = ie(1, 4);
		let error = IntervalAssert::new(&actual)
			.has_closed_upper_bound()
			.unwrap_err();
		assert_eq!(
			error.to_string(),
			"expecting:\n  [1..4)\nto have a closed upper bound"
		);
	}
	fn render<T>(violation: &IntervalViolation<T>) -> String
	where
		T: fmt::Display,
	{
		violation.to_string()
	}

	#[test]
	fn display_only_needs_displayable_endpoints() {
		assert_eq!(
			render(&IntervalViolation::LowerEndpoint {
				actual: ei(2, 8),
				expected: 1,
			}),
			"expecting:\n  (2..8]\nto have lower endpoint equal to:\n  1\nbut was:\n  2"
		);
		assert_eq!(
			render(&IntervalViolation::UpperEndpoint {
				actual: ue(5),
				expected: 1,
			}),
			"expecting:\n  (-∞..5)\nto have upper endpoint equal to:\n  1\nbut was:\n  5"
		);
	}
}
