//! A module containing [`BoundOrd`], the total order used for every
//! interval comparison in this crate.

use core::cmp::Ordering;
use core::ops::Bound;

/// A version of [`Bound`] that knows which side of an interval it
/// belongs to, so that it can implement [`Ord`].
///
/// Start and end bounds order differently when their points are equal:
/// an excluded end sits just below the point, an included bound sits
/// on the point, and an excluded start sits just above it. An interval
/// is non-empty exactly when its start is less than or equal to its end.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BoundOrd<T> {
	/// [`Bound::Included`], on either side.
	Included(T),
	/// [`Bound::Excluded`] specific to Start bounds.
	StartExcluded(T),
	/// [`Bound::Unbounded`] specific to Start bounds.
	StartUnbounded,
	/// [`Bound::Excluded`] specific to End bounds.
	EndExcluded(T),
	/// [`Bound::Unbounded`] specific to End bounds.
	EndUnbounded,
}

impl<T> BoundOrd<T> {
	pub(crate) fn start(bound: Bound<T>) -> Self {
		match bound {
			Bound::Included(point) => BoundOrd::Included(point),
			Bound::Excluded(point) => BoundOrd::StartExcluded(point),
			Bound::Unbounded => BoundOrd::StartUnbounded,
		}
	}
	pub(crate) fn end(bound: Bound<T>) -> Self {
		match bound {
			Bound::Included(point) => BoundOrd::Included(point),
			Bound::Excluded(point) => BoundOrd::EndExcluded(point),
			Bound::Unbounded => BoundOrd::EndUnbounded,
		}
	}

	/// Which side of the finite points the bound lies on: `-1` below
	/// every point, `1` above every point and `0` at its own point.
	fn tier(&self) -> i8 {
		match self {
			BoundOrd::StartUnbounded => -1,
			BoundOrd::EndUnbounded => 1,
			_ => 0,
		}
	}

	/// Where the bound lies around its point, used to break ties
	/// between bounds on the same point.
	fn nudge(&self) -> i8 {
		match self {
			BoundOrd::EndExcluded(_) => -1,
			BoundOrd::StartExcluded(_) => 1,
			_ => 0,
		}
	}

	fn point(&self) -> Option<&T> {
		match self {
			BoundOrd::Included(point)
			| BoundOrd::StartExcluded(point)
			| BoundOrd::EndExcluded(point) => Some(point),
			BoundOrd::StartUnbounded | BoundOrd::EndUnbounded => None,
		}
	}
}

impl<T> Ord for BoundOrd<T>
where
	T: Ord,
{
	fn cmp(&self, other: &Self) -> Ordering {
		return self
			.tier()
			.cmp(&other.tier())
			.then_with(|| self.point().cmp(&other.point()))
			.then_with(|| self.nudge().cmp(&other.nudge()));
	}
}

impl<T> PartialOrd for BoundOrd<T>
where
	T: Ord,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> PartialEq for BoundOrd<T>
where
	T: Ord,
{
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}

impl<T> Eq for BoundOrd<T> where T: Ord {}

impl<T> From<BoundOrd<T>> for Bound<T> {
	fn from(bound_ord: BoundOrd<T>) -> Bound<T> {
		match bound_ord {
			BoundOrd::Included(point) => Bound::Included(point),
			BoundOrd::StartExcluded(point) => Bound::Excluded(point),
			BoundOrd::StartUnbounded => Bound::Unbounded,
			BoundOrd::EndExcluded(point) => Bound::Excluded(point),
			BoundOrd::EndUnbounded => Bound::Unbounded,
		}
	}
}
