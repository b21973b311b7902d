//! A module containing [`OptionAssert`].

use core::fmt;

use crate::error::CheckError;

/// The violation type of every [`OptionAssert`] check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionViolation<T> {
	/// A value was expected but the option was `None`.
	ShouldBePresent,
	/// No value was expected but the option held one.
	ShouldBeAbsent(T),
	/// The option did not hold the expected value.
	ShouldBePresentWithValue {
		/// The expected value.
		expected: T,
		/// The actual option.
		actual: Option<T>,
	},
}

impl<T> fmt::Display for OptionViolation<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OptionViolation::ShouldBePresent => {
				f.write_str("expecting option to be present but was absent")
			}
			OptionViolation::ShouldBeAbsent(actual) => {
				write!(f, "expecting option to be absent but held:\n  {actual}")
			}
			OptionViolation::ShouldBePresentWithValue {
				expected,
				actual: Some(actual),
			} => write!(
				f,
				"expecting option to hold:\n  {expected}\nbut held:\n  {actual}"
			),
			OptionViolation::ShouldBePresentWithValue {
				expected,
				actual: None,
			} => write!(f, "expecting option to hold:\n  {expected}\nbut was absent"),
		}
	}
}

/// A chainable set of checks over a borrowed [`Option`].
///
/// # Examples
/// ```
/// use collassert::OptionAssert;
///
/// let actual = Some("something");
///
/// assert!(OptionAssert::new(&actual)
/// 	.is_present()
/// 	.and_then(|a| a.contains("something"))
/// 	.is_ok());
/// assert!(OptionAssert::new(&actual).is_absent().is_err());
/// ```
#[derive(Debug)]
pub struct OptionAssert<'a, T> {
	actual: &'a Option<T>,
}

impl<T> Clone for OptionAssert<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for OptionAssert<'_, T> {}

type AssertResult<'a, T> = Result<OptionAssert<'a, T>, CheckError<OptionViolation<T>>>;

impl<'a, T> OptionAssert<'a, T>
where
	T: Clone + PartialEq,
{
	/// Makes a new assertion over `actual`.
	pub fn new(actual: &'a Option<T>) -> Self {
		OptionAssert { actual }
	}

	/// Returns the option under test.
	pub fn actual(&self) -> &'a Option<T> {
		self.actual
	}

	/// Checks that the option holds a value.
	pub fn is_present(self) -> AssertResult<'a, T> {
		if self.actual.is_none() {
			return Err(fail(OptionViolation::ShouldBePresent));
		}
		Ok(self)
	}

	/// Checks that the option holds no value.
	pub fn is_absent(self) -> AssertResult<'a, T> {
		if let Some(value) = self.actual {
			return Err(fail(OptionViolation::ShouldBeAbsent(value.clone())));
		}
		Ok(self)
	}

	/// Checks that the option holds `expected`.
	pub fn contains(self, expected: T) -> AssertResult<'a, T> {
		if self.actual.as_ref() != Some(&expected) {
			return Err(fail(OptionViolation::ShouldBePresentWithValue {
				expected,
				actual: self.actual.clone(),
			}));
		}
		Ok(self)
	}

	/// Checks that the option equals `expected`, telling apart a missing
	/// value, an unexpected value and a different value.
	pub fn is_equal_to(self, expected: &Option<T>) -> AssertResult<'a, T> {
		match (self.actual, expected) {
			(Some(actual), None) => Err(fail(OptionViolation::ShouldBeAbsent(actual.clone()))),
			(None, Some(_)) => Err(fail(OptionViolation::ShouldBePresent)),
			(Some(actual), Some(expected)) if actual != expected => {
				Err(fail(OptionViolation::ShouldBePresentWithValue {
					expected: expected.clone(),
					actual: Some(actual.clone()),
				}))
			}
			_ => Ok(self),
		}
	}
}

fn fail<T>(violation: OptionViolation<T>) -> CheckError<OptionViolation<T>> {
	tracing::debug!("option check failed");
	CheckError::Violation(violation)
}
