//! A module containing the [`Multimap`] trait and [`MultimapAssert`].
//!
//! A multimap maps each key to a collection of values and is viewed as
//! the flat list of its key-value entries. Keys whose collection is
//! empty are not part of the multimap.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

use crate::error::{CheckError, InvalidInvocation};
use crate::query::{required_elements, write_list, IntoQuery, QueryKind};

/// A map from keys to collections of values.
///
/// Implemented for [`HashMap`] and [`BTreeMap`] whose values are any
/// collection iterable by reference, such as [`Vec`] or
/// [`BTreeSet`](std::collections::BTreeSet).
pub trait Multimap {
	/// The key type.
	type Key;
	/// The type of the individual values.
	type Value;

	/// The number of key-value entries.
	fn entry_count(&self) -> usize;

	/// Returns `true` if at least one entry has the given key.
	fn has_key(&self, key: &Self::Key) -> bool;

	/// Every key-value entry, grouped by key.
	fn entries(&self) -> Vec<(&Self::Key, &Self::Value)>;
}

impl<K, C, S> Multimap for HashMap<K, C, S>
where
	K: Eq + Hash,
	S: BuildHasher,
	C: IntoIterator,
	for<'c> &'c C: IntoIterator<Item = &'c C::Item>,
{
	type Key = K;
	type Value = C::Item;

	fn entry_count(&self) -> usize {
		self.values().map(|values| values.into_iter().count()).sum()
	}

	fn has_key(&self, key: &K) -> bool {
		self.get(key)
			.is_some_and(|values| values.into_iter().next().is_some())
	}

	fn entries(&self) -> Vec<(&K, &C::Item)> {
		self.iter()
			.flat_map(|(key, values)| values.into_iter().map(move |value| (key, value)))
			.collect()
	}
}

impl<K, C> Multimap for BTreeMap<K, C>
where
	K: Ord,
	C: IntoIterator,
	for<'c> &'c C: IntoIterator<Item = &'c C::Item>,
{
	type Key = K;
	type Value = C::Item;

	fn entry_count(&self) -> usize {
		self.values().map(|values| values.into_iter().count()).sum()
	}

	fn has_key(&self, key: &K) -> bool {
		self.get(key)
			.is_some_and(|values| values.into_iter().next().is_some())
	}

	fn entries(&self) -> Vec<(&K, &C::Item)> {
		self.iter()
			.flat_map(|(key, values)| values.into_iter().map(move |value| (key, value)))
			.collect()
	}
}

/// The violation type of every [`MultimapAssert`] check.
///
/// `actual` always holds the entries of the multimap under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultimapViolation<K, V> {
	/// The multimap did not have the expected number of entries.
	Size {
		/// The actual entries.
		actual: Vec<(K, V)>,
		/// The expected number of entries.
		expected: usize,
	},
	/// The multimap was expected to be empty.
	ShouldBeEmpty(Vec<(K, V)>),
	/// The multimap was expected not to be empty.
	ShouldNotBeEmpty,
	/// Some keys were missing.
	ShouldContainKeys {
		/// The actual entries.
		actual: Vec<(K, V)>,
		/// The keys as given.
		keys: Vec<K>,
		/// The missing keys, in the order given.
		not_found: Vec<K>,
	},
	/// Some values were missing.
	ShouldContainValues {
		/// The actual entries.
		actual: Vec<(K, V)>,
		/// The values as given.
		values: Vec<V>,
		/// The missing values, in the order given.
		not_found: Vec<V>,
	},
	/// Some entries were missing.
	ShouldContainEntries {
		/// The actual entries.
		actual: Vec<(K, V)>,
		/// The entries as given.
		entries: Vec<(K, V)>,
		/// The missing entries, in the order given.
		not_found: Vec<(K, V)>,
	},
	/// The two multimaps did not hold the same entries.
	ShouldHaveSameEntries {
		/// The actual entries.
		actual: Vec<(K, V)>,
		/// The entries of the multimap compared with.
		expected: Vec<(K, V)>,
		/// Expected entries missing from the actual multimap.
		not_found: Vec<(K, V)>,
		/// Actual entries missing from the expected multimap.
		not_expected: Vec<(K, V)>,
	},
}

struct Entries<'a, K, V>(&'a [(K, V)]);

impl<K, V> fmt::Display for Entries<'_, K, V>
where
	K: fmt::Display,
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use itertools::Itertools;

		write!(
			f,
			"[{}]",
			self.0.iter().format_with(", ", |(key, value), f| {
				f(&format_args!("{key}={value}"))
			})
		)
	}
}

impl<K, V> fmt::Display for MultimapViolation<K, V>
where
	K: fmt::Display,
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MultimapViolation::Size { actual, expected } => write!(
				f,
				"expecting:\n  {}\nto have {expected} entries but had {}",
				Entries(actual),
				actual.len()
			),
			MultimapViolation::ShouldBeEmpty(actual) => {
				write!(f, "expecting:\n  {}\nto be empty", Entries(actual))
			}
			MultimapViolation::ShouldNotBeEmpty => {
				f.write_str("expecting multimap not to be empty")
			}
			MultimapViolation::ShouldContainKeys {
				actual,
				keys,
				not_found,
			} => {
				write!(f, "expecting:\n  {}\nto contain keys:\n  ", Entries(actual))?;
				write_list(f, keys)?;
				f.write_str("\nbut could not find:\n  ")?;
				write_list(f, not_found)
			}
			MultimapViolation::ShouldContainValues {
				actual,
				values,
				not_found,
			} => {
				write!(f, "expecting:\n  {}\nto contain values:\n  ", Entries(actual))?;
				write_list(f, values)?;
				f.write_str("\nbut could not find:\n  ")?;
				write_list(f, not_found)
			}
			MultimapViolation::ShouldContainEntries {
				actual,
				entries,
				not_found,
			} => write!(
				f,
				"expecting:\n  {}\nto contain entries:\n  {}\nbut could not find:\n  {}",
				Entries(actual),
				Entries(entries),
				Entries(not_found)
			),
			MultimapViolation::ShouldHaveSameEntries {
				actual,
				expected,
				not_found,
				not_expected,
			} => {
				write!(
					f,
					"expecting:\n  {}\nto contain only:\n  {}\n",
					Entries(actual),
					Entries(expected)
				)?;
				if not_expected.is_empty() {
					return write!(
						f,
						"but could not find the following elements:\n  {}",
						Entries(not_found)
					);
				}
				write!(
					f,
					"elements not found:\n  {}\nand elements not expected:\n  {}",
					Entries(not_found),
					Entries(not_expected)
				)
			}
		}
	}
}

/// A chainable set of checks over a borrowed [`Multimap`].
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
///
/// use collassert::MultimapAssert;
///
/// let actual = BTreeMap::from([
/// 	("Lakers", vec!["Kobe Bryant", "Magic Johnson"]),
/// 	("Bulls", vec!["Michael Jordan"]),
/// ]);
///
/// assert!(MultimapAssert::new(&actual)
/// 	.has_size(3)
/// 	.and_then(|a| a.contains_keys(["Lakers"]))
/// 	.and_then(|a| a.contains_entries([("Bulls", "Michael Jordan")]))
/// 	.is_ok());
/// ```
#[derive(Debug)]
pub struct MultimapAssert<'a, M: ?Sized> {
	actual: &'a M,
}

impl<M: ?Sized> Clone for MultimapAssert<'_, M> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<M: ?Sized> Copy for MultimapAssert<'_, M> {}

impl<'a, M> MultimapAssert<'a, M>
where
	M: Multimap + ?Sized,
	M::Key: Clone + PartialEq,
	M::Value: Clone + PartialEq,
{
	/// Makes a new assertion over `actual`.
	pub fn new(actual: &'a M) -> Self {
		MultimapAssert { actual }
	}

	/// Returns the multimap under test.
	pub fn actual(&self) -> &'a M {
		self.actual
	}

	/// Checks that the multimap has exactly `size` key-value entries.
	pub fn has_size(
		self,
		size: usize,
	) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>> {
		if self.actual.entry_count() != size {
			return Err(fail(MultimapViolation::Size {
				actual: self.owned_entries(),
				expected: size,
			}));
		}
		Ok(self)
	}

	/// Checks that the multimap has no entry.
	pub fn is_empty(self) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>> {
		if self.actual.entry_count() != 0 {
			return Err(fail(MultimapViolation::ShouldBeEmpty(
				self.owned_entries(),
			)));
		}
		Ok(self)
	}

	/// Checks that the multimap has at least one entry.
	pub fn is_not_empty(
		self,
	) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>> {
		if self.actual.entry_count() == 0 {
			return Err(fail(MultimapViolation::ShouldNotBeEmpty));
		}
		Ok(self)
	}

	/// Checks that every key has at least one entry.
	///
	/// An absent or empty list of keys is an [`InvalidInvocation`].
	pub fn contains_keys<Q>(
		self,
		keys: Q,
	) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>>
	where
		Q: IntoQuery<M::Key>,
	{
		let keys = required_elements(keys, QueryKind::Keys)?;
		let not_found: Vec<M::Key> = keys
			.iter()
			.filter(|&key| !self.actual.has_key(key))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(MultimapViolation::ShouldContainKeys {
				actual: self.owned_entries(),
				keys,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that every value appears in at least one entry.
	///
	/// An absent or empty list of values is an [`InvalidInvocation`].
	pub fn contains_values<Q>(
		self,
		values: Q,
	) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>>
	where
		Q: IntoQuery<M::Value>,
	{
		let values = required_elements(values, QueryKind::Values)?;
		let entries = self.actual.entries();
		let not_found: Vec<M::Value> = values
			.iter()
			.filter(|&value| !entries.iter().any(|(_, v)| *v == value))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(MultimapViolation::ShouldContainValues {
				actual: self.owned_entries(),
				values,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that every key-value pair is an entry of the multimap.
	///
	/// An absent or empty list of entries is an [`InvalidInvocation`].
	pub fn contains_entries<Q>(
		self,
		entries: Q,
	) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>>
	where
		Q: IntoQuery<(M::Key, M::Value)>,
	{
		let entries = required_elements(entries, QueryKind::Entries)?;
		let actual = self.actual.entries();
		let not_found: Vec<(M::Key, M::Value)> = entries
			.iter()
			.filter(|&(key, value)| !actual.iter().any(|(k, v)| *k == key && *v == value))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(MultimapViolation::ShouldContainEntries {
				actual: self.owned_entries(),
				entries,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that the multimap holds exactly the entries of `other`,
	/// whatever the concrete multimap types.
	///
	/// An absent `other` is an [`InvalidInvocation`].
	///
	/// # Examples
	/// ```
	/// use std::collections::{BTreeMap, BTreeSet, HashMap};
	///
	/// use collassert::MultimapAssert;
	///
	/// let actual = HashMap::from([("Spurs", vec!["Tim Duncan", "Tony Parker"])]);
	/// let other = BTreeMap::from([("Spurs", BTreeSet::from(["Tony Parker", "Tim Duncan"]))]);
	///
	/// assert!(MultimapAssert::new(&actual).has_same_entries_as(&other).is_ok());
	/// assert!(MultimapAssert::new(&actual)
	/// 	.has_same_entries_as(None::<&BTreeMap<&str, Vec<&str>>>)
	/// 	.is_err_and(|error| error.is_invalid_invocation()));
	/// ```
	pub fn has_same_entries_as<'b, O, A>(
		self,
		other: A,
	) -> Result<Self, CheckError<MultimapViolation<M::Key, M::Value>>>
	where
		A: Into<Option<&'b O>>,
		O: Multimap<Key = M::Key, Value = M::Value> + ?Sized + 'b,
	{
		let Some(other) = other.into() else {
			tracing::debug!("multimap comparison rejected an absent multimap");
			return Err(InvalidInvocation::ArgumentNull(QueryKind::Multimap).into());
		};
		let actual = self.actual.entries();
		let expected = other.entries();
		let not_found = missing_from(&expected, &actual);
		let not_expected = missing_from(&actual, &expected);
		if !not_found.is_empty() || !not_expected.is_empty() {
			return Err(fail(MultimapViolation::ShouldHaveSameEntries {
				actual: owned(&actual),
				expected: owned(&expected),
				not_found,
				not_expected,
			}));
		}
		Ok(self)
	}

	fn owned_entries(&self) -> Vec<(M::Key, M::Value)> {
		owned(&self.actual.entries())
	}
}

fn owned<K, V>(entries: &[(&K, &V)]) -> Vec<(K, V)>
where
	K: Clone,
	V: Clone,
{
	entries
		.iter()
		.map(|&(key, value)| (key.clone(), value.clone()))
		.collect()
}

/// The entries of `from` that are not in `to`, in order.
fn missing_from<K, V>(from: &[(&K, &V)], to: &[(&K, &V)]) -> Vec<(K, V)>
where
	K: Clone + PartialEq,
	V: Clone + PartialEq,
{
	let missing: Vec<(&K, &V)> = from
		.iter()
		.filter(|&entry| !to.contains(entry))
		.copied()
		.collect();
	owned(&missing)
}

fn fail<K, V>(violation: MultimapViolation<K, V>) -> CheckError<MultimapViolation<K, V>> {
	tracing::debug!("multimap check failed");
	CheckError::Violation(violation)
}
