//! A module containing [`RangeSet`].

use core::fmt;

use smallvec::SmallVec;

use crate::bound_ord::BoundOrd;
use crate::query::write_list;
use crate::Interval;

/// An ordered set of disjoint, non-touching, non-empty [`Interval`]s.
///
/// Intervals are merged as they are inserted: overlapping or touching
/// intervals become one interval and empty intervals are dropped, so
/// the members are always in canonical form, sorted ascending.
///
/// # Examples
/// ```
/// use collassert::interval::{ee, ie, ii};
/// use collassert::RangeSet;
///
/// let set = RangeSet::from_iter([ie(0, 5), ii(5, 9), ee(20, 30), ie(3, 3)]);
///
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(0, 9), &ee(20, 30)]);
/// assert_eq!(set.contains(&9), true);
/// assert_eq!(set.contains(&20), false);
/// assert_eq!(set.encloses(&ii(2, 8)), true);
/// assert_eq!(set.intersects(&ii(9, 20)), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSet<T> {
	inner: SmallVec<[Interval<T>; 4]>,
}

impl<T> RangeSet<T>
where
	T: Ord,
{
	/// Adds an interval to the set, merging it with every member it
	/// overlaps or touches. Empty intervals are ignored.
	///
	/// # Examples
	/// ```
	/// use collassert::interval::{ee, ii};
	/// use collassert::RangeSet;
	///
	/// let mut set = RangeSet::from_iter([ee(0, 5), ee(5, 10)]);
	/// assert_eq!(set.len(), 2);
	///
	/// set.insert(ii(5, 5));
	/// assert_eq!(set.iter().collect::<Vec<_>>(), [&ee(0, 10)]);
	/// ```
	pub fn insert(&mut self, interval: Interval<T>)
	where
		T: Clone,
	{
		if interval.is_empty() {
			return;
		}

		let lo = self.inner.partition_point(|member| {
			member.end_ord() < interval.start_ord() && !member.touches(&interval)
		});
		let hi = self.inner.partition_point(|member| {
			member.start_ord() <= interval.end_ord() || member.touches(&interval)
		});

		let merged = match (self.inner[lo..hi].first(), self.inner[lo..hi].last()) {
			(Some(first), Some(last)) => first.span(last).span(&interval),
			_ => interval,
		};

		self.inner.drain(lo..hi);
		self.inner.insert(lo, merged);
	}

	/// Returns `true` if some member interval contains `point`.
	pub fn contains(&self, point: &T) -> bool {
		self.interval_containing(point).is_some()
	}

	/// Returns the member interval containing `point`, if there is one.
	///
	/// # Examples
	/// ```
	/// use collassert::interval::ii;
	/// use collassert::RangeSet;
	///
	/// let set = RangeSet::from_iter([ii(0, 100), ii(200, 300)]);
	///
	/// assert_eq!(set.interval_containing(&250), Some(&ii(200, 300)));
	/// assert_eq!(set.interval_containing(&150), None);
	/// ```
	pub fn interval_containing(&self, point: &T) -> Option<&Interval<T>> {
		let index = self
			.inner
			.partition_point(|member| member.start_ord() <= BoundOrd::Included(point));

		index
			.checked_sub(1)
			.map(|index| &self.inner[index])
			.filter(|member| member.contains(point))
	}

	/// Returns `true` if `interval` shares at least one point with some
	/// member interval.
	pub fn intersects(&self, interval: &Interval<T>) -> bool {
		// members are disjoint, so their ends are sorted too
		let index = self
			.inner
			.partition_point(|member| member.end_ord() < interval.start_ord());

		self.inner
			.get(index)
			.is_some_and(|member| member.intersects(interval))
	}

	/// Returns `true` if a single member interval encloses `interval`.
	///
	/// Being covered by the union of several members is not enough, but
	/// since touching members are always merged that can only happen
	/// when a point is missing between them.
	pub fn encloses(&self, interval: &Interval<T>) -> bool {
		let index = self
			.inner
			.partition_point(|member| member.start_ord() <= interval.start_ord());

		index
			.checked_sub(1)
			.is_some_and(|index| self.inner[index].encloses(interval))
	}

	/// Returns `true` if every member of `other` is enclosed by `self`.
	pub fn encloses_all(&self, other: &RangeSet<T>) -> bool {
		other.iter().all(|interval| self.encloses(interval))
	}

	/// Returns the smallest interval enclosing every member, or `None`
	/// if the set is empty.
	pub fn span(&self) -> Option<Interval<T>>
	where
		T: Clone,
	{
		match (self.inner.first(), self.inner.last()) {
			(Some(first), Some(last)) => Some(first.span(last)),
			_ => None,
		}
	}
}

impl<T> RangeSet<T> {
	/// Makes a new, empty `RangeSet`.
	pub fn new() -> Self {
		RangeSet {
			inner: SmallVec::new(),
		}
	}
	/// Returns the number of member intervals in the set.
	pub fn len(&self) -> usize {
		self.inner.len()
	}
	/// Returns `true` if the set contains no interval.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
	/// Returns an iterator over the member intervals in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Interval<T>> {
		self.inner.iter()
	}
	/// Returns the first member interval, if any.
	pub fn first(&self) -> Option<&Interval<T>> {
		self.inner.first()
	}
	/// Returns the last member interval, if any.
	pub fn last(&self) -> Option<&Interval<T>> {
		self.inner.last()
	}
}

// Trait Impls ==========================

impl<T> Default for RangeSet<T> {
	fn default() -> Self {
		RangeSet::new()
	}
}

impl<T> FromIterator<Interval<T>> for RangeSet<T>
where
	T: Ord + Clone,
{
	fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
		let mut set = RangeSet::new();
		set.extend(iter);
		return set;
	}
}

impl<T> Extend<Interval<T>> for RangeSet<T>
where
	T: Ord + Clone,
{
	fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
		for interval in iter {
			self.insert(interval);
		}
	}
}

impl<T> IntoIterator for RangeSet<T> {
	type Item = Interval<T>;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}
/// An owning iterator over the member intervals of a [`RangeSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`RangeSet`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
	inner: smallvec::IntoIter<[Interval<T>; 4]>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

impl<T> fmt::Display for RangeSet<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_list(f, &self.inner)
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::RangeSet;

	impl<T> Serialize for RangeSet<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for interval in self.iter() {
				seq.serialize_element(interval)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for RangeSet<T>
	where
		T: Ord + Clone + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(RangeSetVisitor { t: PhantomData })
		}
	}

	struct RangeSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for RangeSetVisitor<T>
	where
		T: Ord + Clone + Deserialize<'de>,
	{
		type Value = RangeSet<T>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("a RangeSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = RangeSet::new();
			while let Some(interval) = access.next_element()? {
				set.insert(interval);
			}
			Ok(set)
		}
	}
}
