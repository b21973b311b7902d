//! A module containing the [`Table`] trait and [`TableAssert`].

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::CheckError;
use crate::query::{required_elements, write_list, IntoQuery, QueryKind};

/// A two-dimensional map where every value sits at a row key and a
/// column key.
///
/// Implemented for nested [`HashMap`]s and nested [`BTreeMap`]s keyed by
/// row and then by column. A row without any cell is not part of the
/// table.
pub trait Table {
	/// The row key type.
	type Row;
	/// The column key type.
	type Column;
	/// The cell value type.
	type Value;

	/// The number of rows holding at least one cell.
	fn row_count(&self) -> usize;

	/// The number of distinct columns across every row.
	fn column_count(&self) -> usize;

	/// Returns `true` if the row holds at least one cell.
	fn has_row(&self, row: &Self::Row) -> bool;

	/// Returns `true` if any row holds a cell in the column.
	fn has_column(&self, column: &Self::Column) -> bool;

	/// The value at the given row and column.
	fn cell(&self, row: &Self::Row, column: &Self::Column) -> Option<&Self::Value>;

	/// Every cell, grouped by row.
	fn cells(&self) -> Vec<(&Self::Row, &Self::Column, &Self::Value)>;
}

impl<R, C, V, S, T> Table for HashMap<R, HashMap<C, V, T>, S>
where
	R: Eq + Hash,
	C: Eq + Hash,
	S: BuildHasher,
	T: BuildHasher,
{
	type Row = R;
	type Column = C;
	type Value = V;

	fn row_count(&self) -> usize {
		self.values().filter(|columns| !columns.is_empty()).count()
	}

	fn column_count(&self) -> usize {
		self.values()
			.flat_map(|columns| columns.keys())
			.collect::<HashSet<&C>>()
			.len()
	}

	fn has_row(&self, row: &R) -> bool {
		self.get(row).is_some_and(|columns| !columns.is_empty())
	}

	fn has_column(&self, column: &C) -> bool {
		self.values().any(|columns| columns.contains_key(column))
	}

	fn cell(&self, row: &R, column: &C) -> Option<&V> {
		self.get(row).and_then(|columns| columns.get(column))
	}

	fn cells(&self) -> Vec<(&R, &C, &V)> {
		self.iter()
			.flat_map(|(row, columns)| {
				columns.iter().map(move |(column, value)| (row, column, value))
			})
			.collect()
	}
}

impl<R, C, V> Table for BTreeMap<R, BTreeMap<C, V>>
where
	R: Ord,
	C: Ord,
{
	type Row = R;
	type Column = C;
	type Value = V;

	fn row_count(&self) -> usize {
		self.values().filter(|columns| !columns.is_empty()).count()
	}

	fn column_count(&self) -> usize {
		self.values()
			.flat_map(|columns| columns.keys())
			.collect::<BTreeSet<&C>>()
			.len()
	}

	fn has_row(&self, row: &R) -> bool {
		self.get(row).is_some_and(|columns| !columns.is_empty())
	}

	fn has_column(&self, column: &C) -> bool {
		self.values().any(|columns| columns.contains_key(column))
	}

	fn cell(&self, row: &R, column: &C) -> Option<&V> {
		self.get(row).and_then(|columns| columns.get(column))
	}

	fn cells(&self) -> Vec<(&R, &C, &V)> {
		self.iter()
			.flat_map(|(row, columns)| {
				columns.iter().map(move |(column, value)| (row, column, value))
			})
			.collect()
	}
}

/// The violation type of every [`TableAssert`] check.
///
/// `actual` always holds the cells of the table under test as
/// `(row, column, value)` triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableViolation<R, C, V> {
	/// The table did not have the expected number of rows.
	RowCount {
		/// The actual cells.
		actual: Vec<(R, C, V)>,
		/// The expected number of rows.
		expected: usize,
		/// The actual number of rows.
		found: usize,
	},
	/// The table did not have the expected number of columns.
	ColumnCount {
		/// The actual cells.
		actual: Vec<(R, C, V)>,
		/// The expected number of columns.
		expected: usize,
		/// The actual number of columns.
		found: usize,
	},
	/// Some rows were missing.
	ShouldContainRows {
		/// The actual cells.
		actual: Vec<(R, C, V)>,
		/// The rows as given.
		rows: Vec<R>,
		/// The missing rows, in the order given.
		not_found: Vec<R>,
	},
	/// Some columns were missing.
	ShouldContainColumns {
		/// The actual cells.
		actual: Vec<(R, C, V)>,
		/// The columns as given.
		columns: Vec<C>,
		/// The missing columns, in the order given.
		not_found: Vec<C>,
	},
	/// Some values were missing.
	ShouldContainValues {
		/// The actual cells.
		actual: Vec<(R, C, V)>,
		/// The values as given.
		values: Vec<V>,
		/// The missing values, in the order given.
		not_found: Vec<V>,
	},
	/// A cell did not hold the expected value.
	ShouldContainCell {
		/// The actual cells.
		actual: Vec<(R, C, V)>,
		/// The row of the cell.
		row: R,
		/// The column of the cell.
		column: C,
		/// The expected value.
		expected: V,
		/// The value the cell held, if any.
		found: Option<V>,
	},
	/// The table was expected to be empty.
	ShouldBeEmpty(Vec<(R, C, V)>),
}

struct Cells<'a, R, C, V>(&'a [(R, C, V)]);

impl<R, C, V> fmt::Display for Cells<'_, R, C, V>
where
	R: fmt::Display,
	C: fmt::Display,
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use itertools::Itertools;

		write!(
			f,
			"[{}]",
			self.0.iter().format_with(", ", |(row, column, value), f| {
				f(&format_args!("({row}, {column})={value}"))
			})
		)
	}
}

impl<R, C, V> fmt::Display for TableViolation<R, C, V>
where
	R: fmt::Display,
	C: fmt::Display,
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TableViolation::RowCount {
				actual,
				expected,
				found,
			} => write!(
				f,
				"expecting:\n  {}\nto have {expected} rows but had {found}",
				Cells(actual)
			),
			TableViolation::ColumnCount {
				actual,
				expected,
				found,
			} => write!(
				f,
				"expecting:\n  {}\nto have {expected} columns but had {found}",
				Cells(actual)
			),
			TableViolation::ShouldContainRows {
				actual,
				rows,
				not_found,
			} => {
				write!(f, "expecting:\n  {}\nto contain rows:\n  ", Cells(actual))?;
				write_list(f, rows)?;
				f.write_str("\nbut could not find:\n  ")?;
				write_list(f, not_found)
			}
			TableViolation::ShouldContainColumns {
				actual,
				columns,
				not_found,
			} => {
				write!(f, "expecting:\n  {}\nto contain columns:\n  ", Cells(actual))?;
				write_list(f, columns)?;
				f.write_str("\nbut could not find:\n  ")?;
				write_list(f, not_found)
			}
			TableViolation::ShouldContainValues {
				actual,
				values,
				not_found,
			} => {
				write!(f, "expecting:\n  {}\nto contain values:\n  ", Cells(actual))?;
				write_list(f, values)?;
				f.write_str("\nbut could not find:\n  ")?;
				write_list(f, not_found)
			}
			TableViolation::ShouldContainCell {
				actual,
				row,
				column,
				expected,
				found,
			} => {
				write!(
					f,
					"expecting row: {row} and column: {column} to have value:\n  {expected}\nbut "
				)?;
				match found {
					Some(found) => write!(f, "was:\n  {found}")?,
					None => f.write_str("there was no such cell")?,
				}
				write!(f, "\nin:\n  {}", Cells(actual))
			}
			TableViolation::ShouldBeEmpty(actual) => {
				write!(f, "expecting:\n  {}\nto be empty", Cells(actual))
			}
		}
	}
}

/// A chainable set of checks over a borrowed [`Table`].
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
///
/// use collassert::TableAssert;
///
/// let actual = BTreeMap::from([
/// 	(1, BTreeMap::from([(3, "Millard Fillmore"), (4, "Franklin Pierce")])),
/// 	(2, BTreeMap::from([(5, "Grover Cleveland")])),
/// ]);
///
/// assert!(TableAssert::new(&actual)
/// 	.has_row_count(2)
/// 	.and_then(|a| a.has_column_count(3))
/// 	.and_then(|a| a.contains_columns([3, 5]))
/// 	.and_then(|a| a.contains_cell(1, 4, "Franklin Pierce"))
/// 	.is_ok());
/// ```
#[derive(Debug)]
pub struct TableAssert<'a, M: ?Sized> {
	actual: &'a M,
}

impl<M: ?Sized> Clone for TableAssert<'_, M> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<M: ?Sized> Copy for TableAssert<'_, M> {}

type Violation<M> =
	TableViolation<<M as Table>::Row, <M as Table>::Column, <M as Table>::Value>;

impl<'a, M> TableAssert<'a, M>
where
	M: Table + ?Sized,
	M::Row: Clone,
	M::Column: Clone,
	M::Value: Clone + PartialEq,
{
	/// Makes a new assertion over `actual`.
	pub fn new(actual: &'a M) -> Self {
		TableAssert { actual }
	}

	/// Returns the table under test.
	pub fn actual(&self) -> &'a M {
		self.actual
	}

	/// Checks that the table has exactly `expected` non-empty rows.
	pub fn has_row_count(self, expected: usize) -> Result<Self, CheckError<Violation<M>>> {
		let found = self.actual.row_count();
		if found != expected {
			return Err(fail(TableViolation::RowCount {
				actual: self.owned_cells(),
				expected,
				found,
			}));
		}
		Ok(self)
	}

	/// Checks that the table has exactly `expected` distinct columns.
	pub fn has_column_count(self, expected: usize) -> Result<Self, CheckError<Violation<M>>> {
		let found = self.actual.column_count();
		if found != expected {
			return Err(fail(TableViolation::ColumnCount {
				actual: self.owned_cells(),
				expected,
				found,
			}));
		}
		Ok(self)
	}

	/// Checks that every row holds at least one cell.
	///
	/// An absent or empty list of rows is an
	/// [`InvalidInvocation`](crate::InvalidInvocation).
	pub fn contains_rows<Q>(self, rows: Q) -> Result<Self, CheckError<Violation<M>>>
	where
		Q: IntoQuery<M::Row>,
	{
		let rows = required_elements(rows, QueryKind::Rows)?;
		let not_found: Vec<M::Row> = rows
			.iter()
			.filter(|&row| !self.actual.has_row(row))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(TableViolation::ShouldContainRows {
				actual: self.owned_cells(),
				rows,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that every column holds at least one cell.
	///
	/// An absent or empty list of columns is an
	/// [`InvalidInvocation`](crate::InvalidInvocation).
	pub fn contains_columns<Q>(self, columns: Q) -> Result<Self, CheckError<Violation<M>>>
	where
		Q: IntoQuery<M::Column>,
	{
		let columns = required_elements(columns, QueryKind::Columns)?;
		let not_found: Vec<M::Column> = columns
			.iter()
			.filter(|&column| !self.actual.has_column(column))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(TableViolation::ShouldContainColumns {
				actual: self.owned_cells(),
				columns,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that every value sits in at least one cell.
	///
	/// An absent or empty list of values is an
	/// [`InvalidInvocation`](crate::InvalidInvocation).
	pub fn contains_values<Q>(self, values: Q) -> Result<Self, CheckError<Violation<M>>>
	where
		Q: IntoQuery<M::Value>,
	{
		let values = required_elements(values, QueryKind::Values)?;
		let cells = self.actual.cells();
		let not_found: Vec<M::Value> = values
			.iter()
			.filter(|&value| !cells.iter().any(|(_, _, v)| *v == value))
			.cloned()
			.collect();
		if !not_found.is_empty() {
			return Err(fail(TableViolation::ShouldContainValues {
				actual: self.owned_cells(),
				values,
				not_found,
			}));
		}
		Ok(self)
	}

	/// Checks that the cell at `row` and `column` holds `value`.
	pub fn contains_cell(
		self,
		row: M::Row,
		column: M::Column,
		value: M::Value,
	) -> Result<Self, CheckError<Violation<M>>> {
		let found = self.actual.cell(&row, &column);
		if found != Some(&value) {
			return Err(fail(TableViolation::ShouldContainCell {
				actual: self.owned_cells(),
				found: found.cloned(),
				row,
				column,
				expected: value,
			}));
		}
		Ok(self)
	}

	/// Checks that the table holds no cell.
	pub fn is_empty(self) -> Result<Self, CheckError<Violation<M>>> {
		if self.actual.row_count() != 0 {
			return Err(fail(TableViolation::ShouldBeEmpty(self.owned_cells())));
		}
		Ok(self)
	}

	fn owned_cells(&self) -> Vec<(M::Row, M::Column, M::Value)> {
		self.actual
			.cells()
			.into_iter()
			.map(|(row, column, value)| (row.clone(), column.clone(), value.clone()))
			.collect()
	}
}

fn fail<R, C, V>(violation: TableViolation<R, C, V>) -> CheckError<TableViolation<R, C, V>> {
	tracing::debug!("table check failed");
	CheckError::Violation(violation)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::error::InvalidInvocation;

	fn presidents() -> BTreeMap<u8, BTreeMap<u8, &'static str>> {
		BTreeMap::from([
			(1, BTreeMap::from([(3, "Millard Fillmore"), (4, "Franklin Pierce")])),
			(2, BTreeMap::from([(5, "Grover Cleveland")])),
			(7, BTreeMap::new()),
		])
	}

	#[test]
	fn count_tests() {
		let actual = presidents();
		assert!(TableAssert::new(&actual)
			.has_row_count(2)
			.and_then(|a| a.has_column_count(3))
			.is_ok());
		assert_eq!(
			TableAssert::new(&actual).has_column_count(2).map(|_| ()),
			Err(CheckError::Violation(TableViolation::ColumnCount {
				actual: vec![
					(1, 3, "Millard Fillmore"),
					(1, 4, "Franklin Pierce"),
					(2, 5, "Grover Cleveland"),
				],
				expected: 2,
				found: 3,
			}))
		);
	}

	#[test]
	fn contains_tests() {
		let actual = presidents();
		assert!(TableAssert::new(&actual)
			.contains_rows([1, 2])
			.and_then(|a| a.contains_columns([4]))
			.and_then(|a| a.contains_values(["Grover Cleveland"]))
			.is_ok());

		let error = TableAssert::new(&actual)
			.contains_columns([6, 3, 9])
			.unwrap_err();
		assert_eq!(
			error
				.violation()
				.map(|violation| match violation {
					TableViolation::ShouldContainColumns { not_found, .. } => not_found.clone(),
					_ => Vec::new(),
				}),
			Some(vec![6, 9])
		);

		//an empty row does not count
		assert!(TableAssert::new(&actual).contains_rows([7]).is_err());
	}

	#[test]
	fn contains_preconditions() {
		let actual = presidents();
		assert_eq!(
			TableAssert::new(&actual).contains_rows(Vec::new()).map(|_| ()),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentEmpty(
				QueryKind::Rows
			)))
		);
		assert_eq!(
			TableAssert::new(&actual)
				.contains_values(None::<Vec<&str>>)
				.map(|_| ()),
			Err(CheckError::InvalidInvocation(InvalidInvocation::ArgumentNull(
				QueryKind::Values
			)))
		);
	}

	#[test]
	fn contains_cell_tests() {
		let actual: HashMap<u8, HashMap<u8, &str>> = presidents()
			.into_iter()
			.map(|(row, columns)| (row, columns.into_iter().collect()))
			.collect();
		assert!(TableAssert::new(&actual)
			.contains_cell(2, 5, "Grover Cleveland")
			.is_ok());

		let error = TableAssert::new(&actual)
			.contains_cell(1, 3, "Franklin Pierce")
			.unwrap_err();
		assert_eq!(
			error.violation().map(|violation| match violation {
				TableViolation::ShouldContainCell { found, .. } => *found,
				_ => None,
			}),
			Some(Some("Millard Fillmore"))
		);

		let error = TableAssert::new(&actual)
			.contains_cell(2, 3, "Millard Fillmore")
			.unwrap_err();
		assert_eq!(
			error.violation().map(|violation| match violation {
				TableViolation::ShouldContainCell { found, .. } => *found,
				_ => Some("unexpected"),
			}),
			Some(None)
		);
	}

	#[test]
	fn is_empty_tests() {
		let hollow: BTreeMap<u8, BTreeMap<u8, u8>> = BTreeMap::from([(1, BTreeMap::new())]);
		assert!(TableAssert::new(&hollow).is_empty().is_ok());
		assert!(TableAssert::new(&presidents()).is_empty().is_err());
	}

	#[test]
	fn display_tests() {
		let actual = BTreeMap::from([(1, BTreeMap::from([(3, "Millard Fillmore")]))]);
		let error = TableAssert::new(&actual)
			.contains_cell(1, 4, "Franklin Pierce")
			.unwrap_err();
		assert_eq!(
			error.to_string(),
			"expecting row: 1 and column: 4 to have value:\n  Franklin Pierce\nbut there was no such cell\nin:\n  [(1, 3)=Millard Fillmore]"
		);

		let error = TableAssert::new(&actual).has_row_count(2).unwrap_err();
		assert_eq!(
			error.to_string(),
			"expecting:\n  [(1, 3)=Millard Fillmore]\nto have 2 rows but had 1"
		);
	}
}
