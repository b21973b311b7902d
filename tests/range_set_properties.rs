//! Property tests for range-set membership and the relation checks.

use std::ops::Bound;

use collassert::interval::{ie, ii};
use collassert::{oracle, Interval, RangeSet};
use proptest::prelude::*;

// Endpoints are even so that every odd point lies strictly between two
// endpoints, so open and closed bounds can be told apart.
fn points() -> std::ops::RangeInclusive<i32> {
	-2..=42
}

fn bound(point: i32, kind: u8) -> Bound<i32> {
	match kind {
		0 => Bound::Included(point),
		1 => Bound::Excluded(point),
		_ => Bound::Unbounded,
	}
}

fn interval() -> impl Strategy<Value = Interval<i32>> {
	(0..=20i32, 0..=20i32, 0..3u8, 0..3u8).prop_filter_map(
		"lower endpoint after upper endpoint",
		|(a, b, lower, upper)| {
			let (a, b) = (a.min(b) * 2, a.max(b) * 2);
			Interval::new(bound(a, lower), bound(b, upper)).ok()
		},
	)
}

fn non_empty_interval() -> impl Strategy<Value = Interval<i32>> {
	interval().prop_filter("empty interval", |interval| !interval.is_empty())
}

fn intervals() -> impl Strategy<Value = Vec<Interval<i32>>> {
	prop::collection::vec(interval(), 0..6)
}

fn covered(inputs: &[Interval<i32>], point: i32) -> bool {
	inputs.iter().any(|interval| interval.contains(&point))
}

proptest! {
	#[test]
	fn membership_matches_the_union_of_inputs(inputs in intervals()) {
		let set = RangeSet::from_iter(inputs.clone());
		for point in points() {
			prop_assert_eq!(set.contains(&point), covered(&inputs, point));
		}
	}

	#[test]
	fn members_are_sorted_and_disjoint(inputs in intervals()) {
		let set = RangeSet::from_iter(inputs);
		let members: Vec<&Interval<i32>> = set.iter().collect();
		for member in &members {
			prop_assert!(!member.is_empty());
		}
		for pair in members.windows(2) {
			prop_assert!(!pair[0].is_connected(pair[1]));
			prop_assert!(pair[0].upper_bound() != Bound::Unbounded);
			prop_assert!(pair[0].span(pair[1]).lower_bound() == pair[0].lower_bound());
		}
	}

	#[test]
	fn contains_all_reports_uncovered_values(
		inputs in intervals(),
		values in prop::collection::vec(points(), 1..8),
	) {
		let set = RangeSet::from_iter(inputs.clone());
		let uncovered: Vec<i32> = values
			.iter()
			.copied()
			.filter(|&value| !covered(&inputs, value))
			.collect();
		match oracle::contains_all(&set, values.clone()) {
			Ok(()) => {
				prop_assert!(uncovered.is_empty());
			}
			Err(error) => {
				prop_assert_eq!(
					error.violation().and_then(|violation| violation.offending_values()),
					Some(&uncovered[..])
				);
			}
		}
	}

	#[test]
	fn empty_queries_only_pass_on_empty_sets(inputs in intervals()) {
		let set = RangeSet::from_iter(inputs);
		let outcome = oracle::intersects_all(&set, Vec::new());
		prop_assert_eq!(outcome.is_ok(), set.is_empty());
		if let Err(error) = outcome {
			prop_assert!(error.is_invalid_invocation());
		}
	}

	#[test]
	fn intersection_means_a_shared_point(
		inputs in intervals(),
		query in interval(),
	) {
		let set = RangeSet::from_iter(inputs.clone());
		let shared = points().any(|point| covered(&inputs, point) && query.contains(&point));
		prop_assert_eq!(set.intersects(&query), shared);
		prop_assert_eq!(oracle::intersects_all(&set, query.clone()).is_ok(), shared);
		prop_assert_eq!(oracle::intersects_any(&set, query.clone()).is_ok(), shared);
		prop_assert_eq!(oracle::does_not_intersect_any(&set, query).is_ok(), !shared);
	}

	#[test]
	fn intersection_is_symmetric(a in interval(), b in interval()) {
		prop_assert_eq!(a.intersects(&b), b.intersects(&a));
	}

	#[test]
	fn enclosure_implies_intersection(
		inputs in intervals(),
		query in non_empty_interval(),
	) {
		let set = RangeSet::from_iter(inputs);
		if oracle::encloses_all(&set, query.clone()).is_ok() {
			prop_assert!(oracle::intersects_all(&set, query).is_ok());
		}
	}

	#[test]
	fn intersection_does_not_imply_enclosure(a in 0..20i32, overlap in 1..10i32, extra in 1..10i32) {
		let (b, c) = (a + overlap, a + overlap + extra);
		let set = RangeSet::from_iter([ii(a, b)]);
		let query = ii(b - overlap / 2, c);
		prop_assert!(oracle::intersects_all(&set, query.clone()).is_ok());
		prop_assert!(oracle::encloses_all(&set, query.clone()).is_err());
		prop_assert!(oracle::does_not_enclose_any(&set, query).is_ok());
	}

	#[test]
	fn checks_are_idempotent(
		inputs in intervals(),
		queries in prop::collection::vec(interval(), 1..4),
	) {
		let set = RangeSet::from_iter(inputs);
		let before = set.clone();
		let first = oracle::does_not_enclose_any(&set, queries.clone());
		let second = oracle::does_not_enclose_any(&set, queries);
		prop_assert_eq!(first, second);
		prop_assert_eq!(set, before);
	}

	#[test]
	fn a_gap_of_one_point_breaks_enclosure(a in 0..10i32, gap in 1..10i32, b in 1..10i32) {
		let (a, m, b) = (a * 2, (a + gap) * 2, (a + gap + b) * 2);
		let split = RangeSet::from_iter([
			ie(a, m),
			Interval::new(Bound::Excluded(m), Bound::Included(b)).unwrap(),
		]);
		prop_assert_eq!(split.len(), 2);
		prop_assert!(split.encloses(&ii(a, m - 1)));
		prop_assert!(!split.encloses(&ii(a, b)));
		prop_assert!(oracle::encloses_all(&split, ii(a, b)).is_err());

		let joined = RangeSet::from_iter([ie(a, m), ii(m, b)]);
		prop_assert_eq!(joined.len(), 1);
		prop_assert!(joined.encloses(&ii(a, b)));
	}
}
