//! A module containing [`Interval`] and it's various constructor functions.
//!
//! The short constructors are named after the kind of their two bounds:
//! `i` for included (closed), `e` for excluded (open) and `u` for
//! unbounded, so [`ie(1, 4)`](ie) is `[1, 4)` and [`eu(3)`](eu) is
//! `(3, +∞)`.

use core::cmp::{max, min};
use core::fmt;
use core::ops::{Bound, RangeBounds};

use crate::bound_ord::BoundOrd;
use crate::error::InvalidIntervalError;

/// Whether a finite bound includes its endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
	/// The endpoint is part of the interval.
	Closed,
	/// The endpoint is not part of the interval.
	Open,
}

impl fmt::Display for BoundType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BoundType::Closed => f.write_str("a closed"),
			BoundType::Open => f.write_str("an opened"),
		}
	}
}

/// A convex set of points of an ordered domain, described by a lower
/// and an upper [`Bound`].
///
/// Intervals are immutable once built and are always valid: the lower
/// endpoint never lies after the upper endpoint and `(a, a)` is
/// rejected. `[a, a)` and `(a, a]` are accepted and are empty.
///
/// # Examples
/// ```
/// use collassert::interval::{ee, ie, ii};
///
/// assert_eq!(ii(0, 10).intersects(&ie(10, 20)), true);
/// assert_eq!(ee(0, 10).intersects(&ie(10, 20)), false);
/// assert_eq!(ii(0, 10).encloses(&ee(2, 5)), true);
/// assert_eq!(ie(3, 3).is_empty(), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
	lower: Bound<T>,
	upper: Bound<T>,
}

impl<T> Interval<T>
where
	T: Ord,
{
	/// Creates a new interval from its two bounds.
	///
	/// Returns an [`InvalidIntervalError`] holding the bounds when the
	/// lower endpoint is greater than the upper endpoint, or when both
	/// endpoints are equal and excluded.
	///
	/// # Examples
	/// ```
	/// use std::ops::Bound;
	///
	/// use collassert::Interval;
	///
	/// assert!(Interval::new(Bound::Included(1), Bound::Excluded(4)).is_ok());
	/// assert!(Interval::new(Bound::Included(1), Bound::Excluded(1)).is_ok());
	/// assert!(Interval::new(Bound::Excluded(1), Bound::Excluded(1)).is_err());
	/// assert!(Interval::new(Bound::Included(4), Bound::Included(1)).is_err());
	/// ```
	pub fn new(
		lower: Bound<T>,
		upper: Bound<T>,
	) -> Result<Self, InvalidIntervalError<T>> {
		let valid = match (&lower, &upper) {
			(Bound::Excluded(start), Bound::Excluded(end)) => start < end,
			(
				Bound::Included(start) | Bound::Excluded(start),
				Bound::Included(end) | Bound::Excluded(end),
			) => start <= end,
			_ => true,
		};

		if !valid {
			return Err(InvalidIntervalError { lower, upper });
		}

		Ok(Interval { lower, upper })
	}

	/// The interval containing every point of the domain.
	pub fn all() -> Self {
		Interval {
			lower: Bound::Unbounded,
			upper: Bound::Unbounded,
		}
	}

	/// The interval containing only `point`.
	pub fn singleton(point: T) -> Self
	where
		T: Clone,
	{
		Interval {
			lower: Bound::Included(point.clone()),
			upper: Bound::Included(point),
		}
	}

	pub(crate) fn start_ord(&self) -> BoundOrd<&T> {
		BoundOrd::start(self.lower.as_ref())
	}
	pub(crate) fn end_ord(&self) -> BoundOrd<&T> {
		BoundOrd::end(self.upper.as_ref())
	}

	/// Returns `true` if the interval contains no point at all, such as
	/// `[3, 3)`.
	pub fn is_empty(&self) -> bool {
		self.start_ord() > self.end_ord()
	}

	/// Returns `true` if `point` lies within the interval.
	///
	/// # Examples
	/// ```
	/// use collassert::interval::{ei, iu};
	///
	/// assert_eq!(ei(0, 10).contains(&10), true);
	/// assert_eq!(ei(0, 10).contains(&0), false);
	/// assert_eq!(iu(5).contains(&i32::MAX), true);
	/// ```
	pub fn contains(&self, point: &T) -> bool {
		let point = BoundOrd::Included(point);

		self.start_ord() <= point && point <= self.end_ord()
	}

	/// Returns `true` if every point of `other` is also a point of
	/// `self`.
	pub fn encloses(&self, other: &Interval<T>) -> bool {
		self.start_ord() <= other.start_ord() && other.end_ord() <= self.end_ord()
	}

	/// Returns `true` if the two intervals share at least one point.
	///
	/// Open and closed endpoints are respected exactly: `(0, 10]` and
	/// `[10, 20)` share `10`, `(0, 10)` and `[10, 20)` share nothing.
	pub fn intersects(&self, other: &Interval<T>) -> bool {
		max(self.start_ord(), other.start_ord())
			<= min(self.end_ord(), other.end_ord())
	}

	/// Returns `true` if the intervals do not intersect but no point lies
	/// between them, such as `[0, 5)` and `[5, 9]`.
	pub fn touches(&self, other: &Interval<T>) -> bool {
		if self.intersects(other) {
			return false;
		}

		adjacent(self.upper_bound(), other.lower_bound())
			|| adjacent(other.upper_bound(), self.lower_bound())
	}

	/// Returns `true` if the union of the two intervals is itself an
	/// interval.
	pub fn is_connected(&self, other: &Interval<T>) -> bool {
		self.intersects(other) || self.touches(other)
	}

	/// Returns the points shared by both intervals, or `None` if there
	/// are none.
	pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>>
	where
		T: Clone,
	{
		if !self.intersects(other) {
			return None;
		}

		Some(Interval {
			lower: Bound::from(max(self.start_ord(), other.start_ord())).cloned(),
			upper: Bound::from(min(self.end_ord(), other.end_ord())).cloned(),
		})
	}

	/// Returns the smallest interval enclosing both intervals.
	pub fn span(&self, other: &Interval<T>) -> Interval<T>
	where
		T: Clone,
	{
		Interval {
			lower: Bound::from(min(self.start_ord(), other.start_ord())).cloned(),
			upper: Bound::from(max(self.end_ord(), other.end_ord())).cloned(),
		}
	}
}

impl<T> Interval<T> {
	/// The lower bound of the interval.
	pub fn lower_bound(&self) -> Bound<&T> {
		self.lower.as_ref()
	}
	/// The upper bound of the interval.
	pub fn upper_bound(&self) -> Bound<&T> {
		self.upper.as_ref()
	}

	/// The lower endpoint, or `None` if the interval is unbounded below.
	pub fn lower_endpoint(&self) -> Option<&T> {
		endpoint(&self.lower)
	}
	/// The upper endpoint, or `None` if the interval is unbounded above.
	pub fn upper_endpoint(&self) -> Option<&T> {
		endpoint(&self.upper)
	}

	/// The type of the lower bound, or `None` if it is unbounded.
	pub fn lower_bound_type(&self) -> Option<BoundType> {
		bound_type(&self.lower)
	}
	/// The type of the upper bound, or `None` if it is unbounded.
	pub fn upper_bound_type(&self) -> Option<BoundType> {
		bound_type(&self.upper)
	}
}

fn endpoint<T>(bound: &Bound<T>) -> Option<&T> {
	match bound {
		Bound::Included(point) | Bound::Excluded(point) => Some(point),
		Bound::Unbounded => None,
	}
}

fn bound_type<T>(bound: &Bound<T>) -> Option<BoundType> {
	match bound {
		Bound::Included(_) => Some(BoundType::Closed),
		Bound::Excluded(_) => Some(BoundType::Open),
		Bound::Unbounded => None,
	}
}

//end must be the upper bound of the interval that comes first
fn adjacent<T>(end: Bound<&T>, start: Bound<&T>) -> bool
where
	T: Ord,
{
	match (end, start) {
		(Bound::Included(point1), Bound::Excluded(point2)) => point1 == point2,
		(Bound::Excluded(point1), Bound::Included(point2)) => point1 == point2,
		_ => false,
	}
}

impl<T> RangeBounds<T> for Interval<T> {
	fn start_bound(&self) -> Bound<&T> {
		self.lower.as_ref()
	}

	fn end_bound(&self) -> Bound<&T> {
		self.upper.as_ref()
	}
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.lower {
			Bound::Included(point) => write!(f, "[{point}")?,
			Bound::Excluded(point) => write!(f, "({point}")?,
			Bound::Unbounded => write!(f, "(-∞")?,
		}
		write!(f, "..")?;
		match &self.upper {
			Bound::Included(point) => write!(f, "{point}]"),
			Bound::Excluded(point) => write!(f, "{point})"),
			Bound::Unbounded => write!(f, "+∞)"),
		}
	}
}

fn checked<T>(lower: Bound<T>, upper: Bound<T>) -> Interval<T>
where
	T: Ord,
{
	match Interval::new(lower, upper) {
		Ok(interval) => interval,
		Err(_) => panic!(
			"invalid interval: the lower endpoint must not lie after the upper endpoint"
		),
	}
}

/// An unbounded-unbounded interval
pub fn uu<T>() -> Interval<T>
where
	T: Ord,
{
	Interval::all()
}
/// An unbounded-included interval
pub fn ui<T>(x: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Unbounded, Bound::Included(x))
}
/// An unbounded-excluded interval
pub fn ue<T>(x: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Unbounded, Bound::Excluded(x))
}
/// An included-unbounded interval
pub fn iu<T>(x: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Included(x), Bound::Unbounded)
}
/// An excluded-unbounded interval
pub fn eu<T>(x: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Excluded(x), Bound::Unbounded)
}
/// An included-included interval
///
/// # Panics
///
/// Panics if `x1` is greater than `x2`.
pub fn ii<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Included(x1), Bound::Included(x2))
}
/// An included-excluded interval
///
/// # Panics
///
/// Panics if `x1` is greater than `x2`.
pub fn ie<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Included(x1), Bound::Excluded(x2))
}
/// An excluded-included interval
///
/// # Panics
///
/// Panics if `x1` is greater than `x2`.
pub fn ei<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Excluded(x1), Bound::Included(x2))
}
/// An excluded-excluded interval
///
/// # Panics
///
/// Panics if `x1` is not less than `x2`.
pub fn ee<T>(x1: T, x2: T) -> Interval<T>
where
	T: Ord,
{
	checked(Bound::Excluded(x1), Bound::Excluded(x2))
}

#[cfg(feature = "serde")]
mod serde {
	use core::ops::Bound;

	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::Interval;

	impl<T> Serialize for Interval<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			(&self.lower, &self.upper).serialize(serializer)
		}
	}

	impl<'de, T> Deserialize<'de> for Interval<T>
	where
		T: Ord + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let (lower, upper) =
				<(Bound<T>, Bound<T>)>::deserialize(deserializer)?;

			Interval::new(lower, upper)
				.map_err(|_| serde::de::Error::custom("invalid interval"))
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn new_tests() {
		assert_eq!(
			Interval::new(Bound::Included(5), Bound::Included(1)),
			Err(InvalidIntervalError {
				lower: Bound::Included(5),
				upper: Bound::Included(1),
			})
		);
		assert!(Interval::new(Bound::Excluded(1), Bound::Excluded(1)).is_err());
		assert!(Interval::new(Bound::Excluded(1), Bound::Included(1)).is_ok());
		assert!(Interval::new(Bound::Unbounded, Bound::Included(1)).is_ok());
		assert_eq!(Interval::singleton(3), ii(3, 3));
	}

	#[test]
	#[should_panic]
	fn reversed_short_constructor_panics() {
		ii(4, 1);
	}

	#[test]
	fn is_empty_tests() {
		assert_eq!(ii(3, 3).is_empty(), false);
		assert_eq!(ie(3, 3).is_empty(), true);
		assert_eq!(ei(3, 3).is_empty(), true);
		assert_eq!(ee(3, 4).is_empty(), false);
		assert_eq!(uu::<i8>().is_empty(), false);
	}

	#[test]
	fn contains_tests() {
		assert_eq!(ii(0, 10).contains(&0), true);
		assert_eq!(ii(0, 10).contains(&10), true);
		assert_eq!(ee(0, 10).contains(&0), false);
		assert_eq!(ee(0, 10).contains(&10), false);
		assert_eq!(ui(0).contains(&i8::MIN), true);
		assert_eq!(ue(0).contains(&0), false);
		assert_eq!(eu(0).contains(&1), true);
		assert_eq!(ie(3, 3).contains(&3), false);
	}

	#[test]
	fn intersects_tests() {
		assert_eq!(ei(0, 10).intersects(&ie(10, 20)), true);
		assert_eq!(ee(0, 10).intersects(&ie(10, 20)), false);
		assert_eq!(ii(0, 10).intersects(&ee(10, 20)), false);
		assert_eq!(ii(0, 10).intersects(&ie(10, 20)), true);
		assert_eq!(ii(0, 10).intersects(&ii(2, 3)), true);
		assert_eq!(ui(0).intersects(&iu(0)), true);
		assert_eq!(ue(0).intersects(&iu(0)), false);
		//empty intervals intersect nothing
		assert_eq!(ii(0, 10).intersects(&ie(5, 5)), false);
	}

	#[test]
	fn encloses_tests() {
		assert_eq!(ee(1, 10).encloses(&ii(2, 5)), true);
		assert_eq!(ee(1, 10).encloses(&ii(4, 12)), false);
		assert_eq!(ee(1, 10).encloses(&ii(1, 5)), false);
		assert_eq!(ii(1, 10).encloses(&ee(1, 10)), true);
		assert_eq!(uu().encloses(&ii(1, 10)), true);
		assert_eq!(ii(1, 10).encloses(&iu(1)), false);
		assert_eq!(ii(1, 10).encloses(&ii(1, 10)), true);
	}

	#[test]
	fn touches_tests() {
		assert_eq!(ie(0, 5).touches(&ii(5, 9)), true);
		assert_eq!(ii(5, 9).touches(&ie(0, 5)), true);
		assert_eq!(ee(0, 5).touches(&ee(5, 9)), false);
		assert_eq!(ii(0, 5).touches(&ii(5, 9)), false);
		assert_eq!(ii(0, 5).is_connected(&ii(5, 9)), true);
		assert_eq!(ee(0, 5).is_connected(&ee(5, 9)), false);
	}

	#[test]
	fn intersection_and_span_tests() {
		assert_eq!(ii(0, 10).intersection(&ee(5, 20)), Some(ei(5, 10)));
		assert_eq!(ee(0, 10).intersection(&ie(10, 20)), None);
		assert_eq!(ui(3).intersection(&eu(1)), Some(ei(1, 3)));
		assert_eq!(ii(0, 2).span(&ee(5, 20)), ie(0, 20));
		assert_eq!(ue(0).span(&ii(5, 9)), ui(9));
	}

	#[test]
	fn accessor_tests() {
		let interval = ei(1, 4);
		assert_eq!(interval.lower_endpoint(), Some(&1));
		assert_eq!(interval.upper_endpoint(), Some(&4));
		assert_eq!(interval.lower_bound_type(), Some(BoundType::Open));
		assert_eq!(interval.upper_bound_type(), Some(BoundType::Closed));
		assert_eq!(iu(1).upper_endpoint(), None);
		assert_eq!(iu(1).upper_bound_type(), None);
		assert_eq!(interval.start_bound(), Bound::Excluded(&1));
	}

	fn endpoints<T>(interval: &Interval<T>) -> (Option<&T>, Option<&T>) {
		(interval.lower_endpoint(), interval.upper_endpoint())
	}

	#[test]
	fn accessors_need_no_ordering() {
		assert_eq!(endpoints(&ei(1, 4)), (Some(&1), Some(&4)));
		assert_eq!(endpoints(&ue(5)), (None, Some(&5)));
	}

	#[test]
	fn display_tests() {
		assert_eq!(ii(1, 10).to_string(), "[1..10]");
		assert_eq!(ee(1, 10).to_string(), "(1..10)");
		assert_eq!(ue(5).to_string(), "(-∞..5)");
		assert_eq!(iu(3).to_string(), "[3..+∞)");
	}
}
