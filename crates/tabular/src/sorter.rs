//! Row ordering.
//!
//! [`RowSorter`] orders rows by the string value of a single column. There is
//! no numeric coercion: `"10"` sorts before `"2"`.

use std::cmp::Ordering;

use crate::row::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Ascending unless `reverse` is set.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orders rows by the cell at a fixed column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSorter {
    column: usize,
    dir: Dir,
}

impl RowSorter {
    pub fn new(column: usize, dir: Dir) -> Self {
        Self { column, dir }
    }

    pub fn asc(column: usize) -> Self {
        Self::new(column, Dir::Asc)
    }

    pub fn desc(column: usize) -> Self {
        Self::new(column, Dir::Desc)
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Compares two rows by their cell at the sort column.
    ///
    /// A row without that cell sorts after every row that has it, in both
    /// directions.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        match (a.get(self.column), b.get(self.column)) {
            (Some(x), Some(y)) => self.dir.apply(x.cmp(y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Sorts rows in place. The sort is stable.
    pub fn sort(&self, rows: &mut [Row]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}
