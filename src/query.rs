//! A module containing [`Query`], the right-hand side of every
//! multi-element check, and the [`IntoQuery`] conversions into it.

use core::fmt;

use crate::error::InvalidInvocation;
use crate::{Interval, RangeSet};

/// What kind of argument a [`Query`] was built from. Used to word
/// invalid-invocation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
	/// A single element or an explicit list of elements.
	Values,
	/// The member intervals of another [`RangeSet`].
	RangeSet,
	/// Keys of a multimap.
	Keys,
	/// Key-value entries of a multimap.
	Entries,
	/// Another multimap to compare with.
	Multimap,
	/// Row keys of a table.
	Rows,
	/// Column keys of a table.
	Columns,
}

impl fmt::Display for QueryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			QueryKind::Values => f.write_str("values"),
			QueryKind::RangeSet => f.write_str("range set"),
			QueryKind::Keys => f.write_str("keys"),
			QueryKind::Entries => f.write_str("entries"),
			QueryKind::Multimap => f.write_str("multimap"),
			QueryKind::Rows => f.write_str("rows"),
			QueryKind::Columns => f.write_str("columns"),
		}
	}
}

/// The elements a check is evaluated against, in the order they were
/// given.
///
/// `E` is a point type for the membership checks and an
/// [`Interval`] for the intersection and enclosure checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<E> {
	/// A single element.
	Single(E),
	/// An explicit list of elements.
	List(Vec<E>),
	/// The member intervals of another range set, in ascending order.
	RangeSet(Vec<E>),
}

impl<E> Query<E> {
	/// The kind of argument the query was built from.
	pub fn kind(&self) -> QueryKind {
		match self {
			Query::Single(_) | Query::List(_) => QueryKind::Values,
			Query::RangeSet(_) => QueryKind::RangeSet,
		}
	}

	/// The elements of the query, in order.
	pub fn elements(&self) -> &[E] {
		match self {
			Query::Single(element) => core::slice::from_ref(element),
			Query::List(elements) | Query::RangeSet(elements) => elements,
		}
	}

	/// Returns `true` if the query holds no element.
	pub fn is_empty(&self) -> bool {
		self.elements().is_empty()
	}

	/// Consumes the query, returning its elements in order.
	pub fn into_elements(self) -> Vec<E> {
		match self {
			Query::Single(element) => vec![element],
			Query::List(elements) | Query::RangeSet(elements) => elements,
		}
	}
}

impl<E> fmt::Display for Query<E>
where
	E: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Query::Single(element) => fmt::Display::fmt(element, f),
			Query::List(elements) | Query::RangeSet(elements) => {
				write_list(f, elements)
			}
		}
	}
}

pub(crate) fn write_list<E>(f: &mut fmt::Formatter<'_>, elements: &[E]) -> fmt::Result
where
	E: fmt::Display,
{
	use itertools::Itertools;

	write!(f, "[{}]", elements.iter().format(", "))
}

/// Converts `elements` into a non-empty list for the checks that always
/// require one, worded after `kind` when it is absent or empty.
pub(crate) fn required_elements<E, Q>(
	elements: Q,
	kind: QueryKind,
) -> Result<Vec<E>, InvalidInvocation>
where
	Q: IntoQuery<E>,
{
	let Some(query) = elements.into_query() else {
		tracing::debug!(%kind, "rejected an absent argument");
		return Err(InvalidInvocation::ArgumentNull(kind));
	};
	if query.is_empty() {
		tracing::debug!(%kind, "rejected an empty argument");
		return Err(InvalidInvocation::ArgumentEmpty(kind));
	}
	Ok(query.into_elements())
}

/// Conversion into an optional [`Query`], where `None` stands for an
/// absent argument.
///
/// Implemented for arrays, [`Vec`]s, slices, single [`Interval`]s,
/// [`RangeSet`]s, [`Query`] itself and [`Option`]s of any of those.
pub trait IntoQuery<E> {
	/// The kind of argument this type stands for, used when the
	/// converted query turns out to be absent.
	const KIND: QueryKind = QueryKind::Values;

	/// Performs the conversion.
	fn into_query(self) -> Option<Query<E>>;
}

impl<E> IntoQuery<E> for Query<E> {
	fn into_query(self) -> Option<Query<E>> {
		Some(self)
	}
}
impl<E> IntoQuery<E> for Vec<E> {
	fn into_query(self) -> Option<Query<E>> {
		Some(Query::List(self))
	}
}
impl<E, const N: usize> IntoQuery<E> for [E; N] {
	fn into_query(self) -> Option<Query<E>> {
		Some(Query::List(Vec::from(self)))
	}
}
impl<E> IntoQuery<E> for &[E]
where
	E: Clone,
{
	fn into_query(self) -> Option<Query<E>> {
		Some(Query::List(self.to_vec()))
	}
}
impl<T> IntoQuery<Interval<T>> for Interval<T> {
	fn into_query(self) -> Option<Query<Interval<T>>> {
		Some(Query::Single(self))
	}
}
impl<T> IntoQuery<Interval<T>> for RangeSet<T> {
	const KIND: QueryKind = QueryKind::RangeSet;

	fn into_query(self) -> Option<Query<Interval<T>>> {
		Some(Query::RangeSet(self.into_iter().collect()))
	}
}
impl<T> IntoQuery<Interval<T>> for &RangeSet<T>
where
	T: Clone,
{
	const KIND: QueryKind = QueryKind::RangeSet;

	fn into_query(self) -> Option<Query<Interval<T>>> {
		Some(Query::RangeSet(self.iter().cloned().collect()))
	}
}
impl<E, Q> IntoQuery<E> for Option<Q>
where
	Q: IntoQuery<E>,
{
	const KIND: QueryKind = Q::KIND;

	fn into_query(self) -> Option<Query<E>> {
		self.and_then(IntoQuery::into_query)
	}
}
