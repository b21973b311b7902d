//! A module containing [`RangeSetAssert`].

use crate::error::CheckError;
use crate::oracle::{self, RangeSetViolation};
use crate::query::IntoQuery;
use crate::{Interval, RangeSet};

/// A chainable set of checks over a borrowed [`RangeSet`].
///
/// Every method returns the assertion back on success so that checks can
/// be chained with `?`.
///
/// # Examples
/// ```
/// use collassert::interval::{ee, ii};
/// use collassert::{CheckError, RangeSet, RangeSetAssert, RangeSetViolation};
///
/// fn check(actual: &RangeSet<i32>) -> Result<(), CheckError<RangeSetViolation<i32>>> {
/// 	RangeSetAssert::new(actual)
/// 		.is_not_empty()?
/// 		.contains([5, 250])?
/// 		.encloses_all([ii(210, 290)])?
/// 		.does_not_intersect_any([ee(100, 200)])?;
/// 	return Ok(());
/// }
///
/// let actual = RangeSet::from_iter([ii(0, 100), ii(200, 300)]);
/// assert_eq!(check(&actual), Ok(()));
/// ```
#[derive(Debug)]
pub struct RangeSetAssert<'a, T> {
	actual: &'a RangeSet<T>,
}

impl<T> Clone for RangeSetAssert<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for RangeSetAssert<'_, T> {}

type AssertResult<'a, T> = Result<RangeSetAssert<'a, T>, CheckError<RangeSetViolation<T>>>;

impl<'a, T> RangeSetAssert<'a, T>
where
	T: Ord + Clone,
{
	/// Makes a new assertion over `actual`.
	pub fn new(actual: &'a RangeSet<T>) -> Self {
		RangeSetAssert { actual }
	}

	/// Returns the range set under test.
	pub fn actual(&self) -> &'a RangeSet<T> {
		self.actual
	}

	/// See [`oracle::has_size()`] for more details.
	pub fn has_size(self, size: usize) -> AssertResult<'a, T> {
		oracle::has_size(self.actual, size)?;
		Ok(self)
	}

	/// See [`oracle::is_empty()`] for more details.
	pub fn is_empty(self) -> AssertResult<'a, T> {
		oracle::is_empty(self.actual)?;
		Ok(self)
	}

	/// See [`oracle::is_not_empty()`] for more details.
	pub fn is_not_empty(self) -> AssertResult<'a, T> {
		oracle::is_not_empty(self.actual)?;
		Ok(self)
	}

	/// See [`oracle::contains_all()`] for more details.
	pub fn contains<Q>(self, values: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<T>,
	{
		oracle::contains_all(self.actual, values)?;
		Ok(self)
	}

	/// See [`oracle::contains_any()`] for more details.
	pub fn contains_any_of<Q>(self, values: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<T>,
	{
		oracle::contains_any(self.actual, values)?;
		Ok(self)
	}

	/// See [`oracle::does_not_contain()`] for more details.
	pub fn does_not_contain<Q>(self, values: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<T>,
	{
		oracle::does_not_contain(self.actual, values)?;
		Ok(self)
	}

	/// See [`oracle::intersects_all()`] for more details.
	pub fn intersects_all<Q>(self, ranges: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<Interval<T>>,
	{
		oracle::intersects_all(self.actual, ranges)?;
		Ok(self)
	}

	/// See [`oracle::intersects_any()`] for more details.
	pub fn intersects_any_of<Q>(self, ranges: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<Interval<T>>,
	{
		oracle::intersects_any(self.actual, ranges)?;
		Ok(self)
	}

	/// See [`oracle::does_not_intersect_any()`] for more details.
	pub fn does_not_intersect_any<Q>(self, ranges: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<Interval<T>>,
	{
		oracle::does_not_intersect_any(self.actual, ranges)?;
		Ok(self)
	}

	/// See [`oracle::encloses_all()`] for more details.
	pub fn encloses_all<Q>(self, ranges: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<Interval<T>>,
	{
		oracle::encloses_all(self.actual, ranges)?;
		Ok(self)
	}

	/// See [`oracle::encloses_any()`] for more details.
	pub fn encloses_any_of<Q>(self, ranges: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<Interval<T>>,
	{
		oracle::encloses_any(self.actual, ranges)?;
		Ok(self)
	}

	/// See [`oracle::does_not_enclose_any()`] for more details.
	pub fn does_not_enclose_any<Q>(self, ranges: Q) -> AssertResult<'a, T>
	where
		Q: IntoQuery<Interval<T>>,
	{
		oracle::does_not_enclose_any(self.actual, ranges)?;
		Ok(self)
	}
}
