//! A module containing the range-set checks.
//!
//! Every check is a stateless, single pass over an immutable
//! [`RangeSet`] and a [`Query`]. On failure the whole actual set, the
//! query as given and the ordered sub-list of query elements that broke
//! the expectation are returned in a [`RangeSetViolation`].
//!
//! Every multi-element check shares the same preconditions: an absent
//! query is an [`InvalidInvocation::ArgumentNull`], and an empty query
//! is an [`InvalidInvocation::ArgumentEmpty`] unless the actual set is
//! empty too, in which case the check passes.
//!
//! # Examples
//! ```
//! use collassert::interval::{ee, ii};
//! use collassert::{oracle, RangeSet};
//!
//! let actual = RangeSet::from_iter([ii(0, 100), ii(200, 300), ii(500, 600)]);
//!
//! assert!(oracle::contains_all(&actual, [50, 270, 550]).is_ok());
//!
//! let error = oracle::contains_all(&actual, [50, 270, 650]).unwrap_err();
//! assert_eq!(error.violation().unwrap().offending_values(), Some(&[650][..]));
//!
//! assert!(oracle::does_not_intersect_any(&actual, [ee(100, 200)]).is_ok());
//! ```

use core::fmt;

use crate::error::{CheckError, InvalidInvocation};
use crate::query::{write_list, IntoQuery, Query, QueryKind};
use crate::{Interval, RangeSet};

/// The relationship a multi-element check asserts between the actual
/// range set and each element of its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
	/// Every value is a member of some interval.
	ContainsAll,
	/// At least one value is a member of some interval.
	ContainsAny,
	/// No value is a member of any interval.
	DoesNotContain,
	/// Every interval shares a point with the set.
	IntersectsAll,
	/// At least one interval shares a point with the set.
	IntersectsAny,
	/// No interval shares a point with the set.
	DoesNotIntersect,
	/// Every interval is enclosed by a single member.
	EnclosesAll,
	/// At least one interval is enclosed by a single member.
	EnclosesAny,
	/// No interval is enclosed by a single member.
	DoesNotEnclose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
	All,
	Any,
	NoneOf,
}

impl Relation {
	fn quantifier(self) -> Quantifier {
		match self {
			Relation::ContainsAll | Relation::IntersectsAll | Relation::EnclosesAll => {
				Quantifier::All
			}
			Relation::ContainsAny | Relation::IntersectsAny | Relation::EnclosesAny => {
				Quantifier::Any
			}
			Relation::DoesNotContain
			| Relation::DoesNotIntersect
			| Relation::DoesNotEnclose => Quantifier::NoneOf,
		}
	}
}

impl fmt::Display for Relation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Relation::ContainsAll => "to contain",
			Relation::ContainsAny => "to contain at least one of",
			Relation::DoesNotContain => "not to contain",
			Relation::IntersectsAll => "to intersect",
			Relation::IntersectsAny => "to intersect at least one of",
			Relation::DoesNotIntersect => "not to intersect",
			Relation::EnclosesAll => "to enclose",
			Relation::EnclosesAny => "to enclose at least one of",
			Relation::DoesNotEnclose => "not to enclose",
		})
	}
}

/// The diagnostic of a failed multi-element check.
///
/// For the "all" relations `offending` holds the elements the relation
/// did not hold for, for the "any" relations it holds the whole query,
/// and for the "not" relations it holds the elements the relation did
/// hold for. Elements keep their query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch<T, E> {
	/// The relation that was checked.
	pub relation: Relation,
	/// The actual range set.
	pub actual: RangeSet<T>,
	/// The query as it was given.
	pub query: Query<E>,
	/// The query elements that caused the failure.
	pub offending: Vec<E>,
}

/// The violation type of every range-set check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSetViolation<T> {
	/// The set did not have the expected number of member intervals.
	Size {
		/// The actual range set.
		actual: RangeSet<T>,
		/// The expected number of member intervals.
		expected: usize,
	},
	/// The set was expected to be empty.
	ShouldBeEmpty(RangeSet<T>),
	/// The set was expected not to be empty.
	ShouldNotBeEmpty,
	/// A point membership check failed.
	Values(Mismatch<T, T>),
	/// An intersection or enclosure check failed.
	Intervals(Mismatch<T, Interval<T>>),
}

impl<T> RangeSetViolation<T> {
	/// The offending values of a failed membership check.
	pub fn offending_values(&self) -> Option<&[T]> {
		match self {
			RangeSetViolation::Values(mismatch) => Some(&mismatch.offending),
			_ => None,
		}
	}

	/// The offending intervals of a failed intersection or enclosure
	/// check.
	pub fn offending_intervals(&self) -> Option<&[Interval<T>]> {
		match self {
			RangeSetViolation::Intervals(mismatch) => Some(&mismatch.offending),
			_ => None,
		}
	}
}

impl<T> fmt::Display for RangeSetViolation<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RangeSetViolation::Size { actual, expected } => write!(
				f,
				"expecting range set:\n  {actual}\nto have {expected} ranges but had {}",
				actual.len()
			),
			RangeSetViolation::ShouldBeEmpty(actual) => {
				write!(f, "expecting range set:\n  {actual}\nto be empty")
			}
			RangeSetViolation::ShouldNotBeEmpty => {
				f.write_str("expecting range set not to be empty")
			}
			RangeSetViolation::Values(mismatch) => fmt::Display::fmt(mismatch, f),
			RangeSetViolation::Intervals(mismatch) => fmt::Display::fmt(mismatch, f),
		}
	}
}

impl<T, E> fmt::Display for Mismatch<T, E>
where
	T: fmt::Display,
	E: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"expecting range set:\n  {}\n{}:\n  {}\n",
			self.actual, self.relation, self.query
		)?;
		match self.relation.quantifier() {
			Quantifier::All => f.write_str("but could not find:\n  ")?,
			Quantifier::Any => f.write_str("but none of them matched:\n  ")?,
			Quantifier::NoneOf => f.write_str("but found:\n  ")?,
		}
		write_list(f, &self.offending)
	}
}

type CheckResult<T> = Result<(), CheckError<RangeSetViolation<T>>>;

/// Checks that the set has exactly `size` member intervals.
pub fn has_size<T>(actual: &RangeSet<T>, size: usize) -> CheckResult<T>
where
	T: Clone,
{
	if actual.len() != size {
		return Err(fail(RangeSetViolation::Size {
			actual: actual.clone(),
			expected: size,
		}));
	}
	Ok(())
}

/// Checks that the set has no member interval.
pub fn is_empty<T>(actual: &RangeSet<T>) -> CheckResult<T>
where
	T: Clone,
{
	if !actual.is_empty() {
		return Err(fail(RangeSetViolation::ShouldBeEmpty(actual.clone())));
	}
	Ok(())
}

/// Checks that the set has at least one member interval.
pub fn is_not_empty<T>(actual: &RangeSet<T>) -> CheckResult<T> {
	if actual.is_empty() {
		return Err(fail(RangeSetViolation::ShouldNotBeEmpty));
	}
	Ok(())
}

/// Checks that every value is a member of some interval of the set.
///
/// The violation lists the values that are not covered.
pub fn contains_all<T, Q>(actual: &RangeSet<T>, values: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<T>,
{
	evaluate(
		actual,
		Relation::ContainsAll,
		Q::KIND,
		values.into_query(),
		RangeSet::contains,
		RangeSetViolation::Values,
	)
}

/// Checks that at least one value is a member of some interval of the
/// set.
pub fn contains_any<T, Q>(actual: &RangeSet<T>, values: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<T>,
{
	evaluate(
		actual,
		Relation::ContainsAny,
		Q::KIND,
		values.into_query(),
		RangeSet::contains,
		RangeSetViolation::Values,
	)
}

/// Checks that no value is a member of any interval of the set.
///
/// The violation lists the values that are covered.
pub fn does_not_contain<T, Q>(actual: &RangeSet<T>, values: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<T>,
{
	evaluate(
		actual,
		Relation::DoesNotContain,
		Q::KIND,
		values.into_query(),
		RangeSet::contains,
		RangeSetViolation::Values,
	)
}

/// Checks that every given interval shares at least one point with the
/// set.
///
/// The violation lists the intervals that do not.
pub fn intersects_all<T, Q>(actual: &RangeSet<T>, ranges: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<Interval<T>>,
{
	evaluate(
		actual,
		Relation::IntersectsAll,
		Q::KIND,
		ranges.into_query(),
		RangeSet::intersects,
		RangeSetViolation::Intervals,
	)
}

/// Checks that at least one given interval shares a point with the set.
pub fn intersects_any<T, Q>(actual: &RangeSet<T>, ranges: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<Interval<T>>,
{
	evaluate(
		actual,
		Relation::IntersectsAny,
		Q::KIND,
		ranges.into_query(),
		RangeSet::intersects,
		RangeSetViolation::Intervals,
	)
}

/// Checks that none of the given intervals shares a point with the set.
///
/// The violation lists the intervals that do.
///
/// # Examples
/// ```
/// use collassert::interval::{ee, ie, ii};
/// use collassert::{oracle, RangeSet};
///
/// let actual = RangeSet::from_iter([ii(0, 10)]);
///
/// assert!(oracle::does_not_intersect_any(&actual, [ee(10, 20)]).is_ok());
/// assert!(oracle::does_not_intersect_any(&actual, [ie(10, 20)]).is_err());
/// ```
pub fn does_not_intersect_any<T, Q>(actual: &RangeSet<T>, ranges: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<Interval<T>>,
{
	evaluate(
		actual,
		Relation::DoesNotIntersect,
		Q::KIND,
		ranges.into_query(),
		RangeSet::intersects,
		RangeSetViolation::Intervals,
	)
}

/// Checks that every given interval is enclosed by a single member
/// interval of the set.
///
/// The violation lists the intervals that are not.
pub fn encloses_all<T, Q>(actual: &RangeSet<T>, ranges: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<Interval<T>>,
{
	evaluate(
		actual,
		Relation::EnclosesAll,
		Q::KIND,
		ranges.into_query(),
		RangeSet::encloses,
		RangeSetViolation::Intervals,
	)
}

/// Checks that at least one given interval is enclosed by a single
/// member interval of the set.
pub fn encloses_any<T, Q>(actual: &RangeSet<T>, ranges: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<Interval<T>>,
{
	evaluate(
		actual,
		Relation::EnclosesAny,
		Q::KIND,
		ranges.into_query(),
		RangeSet::encloses,
		RangeSetViolation::Intervals,
	)
}

/// Checks that none of the given intervals is enclosed by a member
/// interval of the set.
///
/// The violation lists the intervals that are.
pub fn does_not_enclose_any<T, Q>(actual: &RangeSet<T>, ranges: Q) -> CheckResult<T>
where
	T: Ord + Clone,
	Q: IntoQuery<Interval<T>>,
{
	evaluate(
		actual,
		Relation::DoesNotEnclose,
		Q::KIND,
		ranges.into_query(),
		RangeSet::encloses,
		RangeSetViolation::Intervals,
	)
}

fn evaluate<T, E, P, W>(
	actual: &RangeSet<T>,
	relation: Relation,
	kind: QueryKind,
	query: Option<Query<E>>,
	holds: P,
	wrap: W,
) -> CheckResult<T>
where
	T: Clone,
	E: Clone,
	P: Fn(&RangeSet<T>, &E) -> bool,
	W: FnOnce(Mismatch<T, E>) -> RangeSetViolation<T>,
{
	tracing::trace!(%relation, "evaluating range set relation");

	let Some(query) = query else {
		return Err(reject(InvalidInvocation::ArgumentNull(kind)));
	};

	if query.is_empty() {
		if actual.is_empty() {
			return Ok(());
		}
		return Err(reject(InvalidInvocation::ArgumentEmpty(query.kind())));
	}

	let elements = query.elements();
	let offending: Vec<E> = match relation.quantifier() {
		Quantifier::All => elements
			.iter()
			.filter(|&element| !holds(actual, element))
			.cloned()
			.collect(),
		Quantifier::Any => match elements.iter().any(|element| holds(actual, element)) {
			true => Vec::new(),
			false => elements.to_vec(),
		},
		Quantifier::NoneOf => elements
			.iter()
			.filter(|&element| holds(actual, element))
			.cloned()
			.collect(),
	};

	if offending.is_empty() {
		return Ok(());
	}

	tracing::debug!(%relation, offending = offending.len(), "range set check failed");

	Err(CheckError::Violation(wrap(Mismatch {
		relation,
		actual: actual.clone(),
		query,
		offending,
	})))
}

fn reject<T>(invalid: InvalidInvocation) -> CheckError<RangeSetViolation<T>> {
	tracing::debug!(%invalid, "range set check rejected");
	CheckError::InvalidInvocation(invalid)
}

fn fail<T>(violation: RangeSetViolation<T>) -> CheckError<RangeSetViolation<T>> {
	tracing::debug!("range set check failed");
	CheckError::Violation(violation)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ee, ei, ie, ii, iu, ui};

	fn three() -> RangeSet<i32> {
		RangeSet::from_iter([ii(0, 100), ii(200, 300), ii(500, 600)])
	}

	fn values_mismatch(
		relation: Relation,
		actual: RangeSet<i32>,
		query: Vec<i32>,
		offending: Vec<i32>,
	) -> CheckResult<i32> {
		Err(CheckError::Violation(RangeSetViolation::Values(Mismatch {
			relation,
			actual,
			query: Query::List(query),
			offending,
		})))
	}

	fn intervals_mismatch(
		relation: Relation,
		actual: RangeSet<i32>,
		query: Query<Interval<i32>>,
		offending: Vec<Interval<i32>>,
	) -> CheckResult<i32> {
		Err(CheckError::Violation(RangeSetViolation::Intervals(Mismatch {
			relation,
			actual,
			query,
			offending,
		})))
	}

	#[test]
	fn size_and_emptiness_tests() {
		assert_eq!(has_size(&three(), 3), Ok(()));
		assert_eq!(
			has_size(&three(), 2),
			Err(CheckError::Violation(RangeSetViolation::Size {
				actual: three(),
				expected: 2,
			}))
		);
		assert_eq!(is_empty(&RangeSet::<i32>::new()), Ok(()));
		assert_eq!(
			is_empty(&three()),
			Err(CheckError::Violation(RangeSetViolation::ShouldBeEmpty(three())))
		);
		assert_eq!(is_not_empty(&three()), Ok(()));
		assert_eq!(
			is_not_empty(&RangeSet::<i32>::new()),
			Err(CheckError::Violation(RangeSetViolation::ShouldNotBeEmpty))
		);
	}

	#[test]
	fn contains_all_tests() {
		assert_eq!(contains_all(&three(), [50, 270, 550]), Ok(()));
		assert_eq!(
			contains_all(&three(), [50, 270, 650]),
			values_mismatch(
				Relation::ContainsAll,
				three(),
				vec![50, 270, 650],
				vec![650]
			)
		);
		//order of the query is kept
		assert_eq!(
			contains_all(&three(), [700, 150, 50]),
			values_mismatch(
				Relation::ContainsAll,
				three(),
				vec![700, 150, 50],
				vec![700, 150]
			)
		);
	}

	#[test]
	fn preconditions() {
		assert_eq!(
			contains_all(&three(), None::<Vec<i32>>),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentNull(
				QueryKind::Values
			)))
		);
		assert_eq!(
			encloses_all(&three(), None::<RangeSet<i32>>),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentNull(
				QueryKind::RangeSet
			)))
		);
		assert_eq!(
			contains_all(&three(), Vec::new()),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentEmpty(
				QueryKind::Values
			)))
		);
		assert_eq!(
			does_not_enclose_any(&three(), RangeSet::new()),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentEmpty(
				QueryKind::RangeSet
			)))
		);
		//nothing contains nothing
		assert_eq!(contains_all(&RangeSet::<i32>::new(), Vec::new()), Ok(()));
		assert_eq!(intersects_any(&RangeSet::<i32>::new(), Vec::new()), Ok(()));
		//an empty actual set is no excuse for an absent query
		assert!(contains_all(&RangeSet::<i32>::new(), None::<Vec<i32>>)
			.is_err_and(|error| error.is_invalid_invocation()));
	}

	#[test]
	fn contains_any_and_does_not_contain_tests() {
		assert_eq!(contains_any(&three(), [700, 250]), Ok(()));
		assert_eq!(
			contains_any(&three(), [700, 150]),
			values_mismatch(
				Relation::ContainsAny,
				three(),
				vec![700, 150],
				vec![700, 150]
			)
		);
		assert_eq!(does_not_contain(&three(), [700, 150]), Ok(()));
		assert_eq!(
			does_not_contain(&three(), [700, 100, 150, 500]),
			values_mismatch(
				Relation::DoesNotContain,
				three(),
				vec![700, 100, 150, 500],
				vec![100, 500]
			)
		);
	}

	#[test]
	fn intersects_tests() {
		let actual = RangeSet::from_iter([ii(0, 10)]);
		assert_eq!(intersects_all(&actual, [ie(10, 20), ui(0)]), Ok(()));
		assert_eq!(
			intersects_all(&actual, [ei(10, 20), ie(5, 6), ee(10, 20)]),
			intervals_mismatch(
				Relation::IntersectsAll,
				actual.clone(),
				Query::List(vec![ei(10, 20), ie(5, 6), ee(10, 20)]),
				vec![ei(10, 20), ee(10, 20)]
			)
		);
		assert_eq!(intersects_any(&actual, [ee(10, 20), ii(10, 20)]), Ok(()));
		assert_eq!(
			intersects_any(&actual, ee(10, 20)),
			intervals_mismatch(
				Relation::IntersectsAny,
				actual.clone(),
				Query::Single(ee(10, 20)),
				vec![ee(10, 20)]
			)
		);
	}

	#[test]
	fn does_not_intersect_tests() {
		let actual = RangeSet::from_iter([ii(0, 10)]);
		assert_eq!(does_not_intersect_any(&actual, [ee(10, 20)]), Ok(()));
		assert_eq!(
			does_not_intersect_any(&actual, [ee(10, 20), ie(10, 20)]),
			intervals_mismatch(
				Relation::DoesNotIntersect,
				actual.clone(),
				Query::List(vec![ee(10, 20), ie(10, 20)]),
				vec![ie(10, 20)]
			)
		);
	}

	#[test]
	fn encloses_tests() {
		let actual = RangeSet::from_iter([ee(1, 10)]);
		assert_eq!(
			encloses_all(&actual, [ii(2, 5), ii(4, 12)]),
			intervals_mismatch(
				Relation::EnclosesAll,
				actual.clone(),
				Query::List(vec![ii(2, 5), ii(4, 12)]),
				vec![ii(4, 12)]
			)
		);
		assert_eq!(
			encloses_all(&actual, [ii(2, 5), ii(4, 12), ii(0, 3)])
				.unwrap_err()
				.violation()
				.and_then(RangeSetViolation::offending_intervals),
			Some(&[ii(4, 12), ii(0, 3)][..])
		);
		assert_eq!(encloses_any(&actual, [ii(2, 5), ii(4, 12)]), Ok(()));
		assert_eq!(
			encloses_any(&actual, [ii(1, 5), iu(4)]),
			intervals_mismatch(
				Relation::EnclosesAny,
				actual.clone(),
				Query::List(vec![ii(1, 5), iu(4)]),
				vec![ii(1, 5), iu(4)]
			)
		);
	}

	#[test]
	fn does_not_enclose_tests() {
		let actual = RangeSet::from_iter([ee(1, 10)]);
		assert_eq!(
			does_not_enclose_any(&actual, [ii(1, 5), ii(5, 12), ii(14, 17)]),
			Ok(())
		);

		let actual = RangeSet::from_iter([ii(1, 10)]);
		let query = RangeSet::from_iter([ii(1, 5), ii(6, 12), ii(14, 17)]);
		assert_eq!(
			does_not_enclose_any(&actual, &query),
			intervals_mismatch(
				Relation::DoesNotEnclose,
				actual.clone(),
				Query::RangeSet(vec![ii(1, 5), ii(6, 12), ii(14, 17)]),
				vec![ii(1, 5)]
			)
		);
	}

	#[test]
	fn idempotent() {
		let actual = three();
		let first = encloses_all(&actual, [ii(10, 20), ii(90, 210), ii(550, 700)]);
		let second = encloses_all(&actual, [ii(10, 20), ii(90, 210), ii(550, 700)]);
		assert_eq!(first, second);
	}

	#[test]
	fn display_tests() {
		let error = contains_all(&three(), [50, 650]).unwrap_err();
		assert_eq!(
			error.to_string(),
			"expecting range set:\n  [[0..100], [200..300], [500..600]]\nto contain:\n  [50, 650]\nbut could not find:\n  [650]"
		);

		let error = contains_all(&three(), Vec::new()).unwrap_err();
		assert_eq!(
			error.to_string(),
			"invalid invocation: the values to look for should not be empty"
		);

		let error = has_size(&three(), 1).unwrap_err();
		assert_eq!(
			error.to_string(),
			"expecting range set:\n  [[0..100], [200..300], [500..600]]\nto have 1 ranges but had 3"
		);
	}
}
