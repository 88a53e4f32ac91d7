//! Property-based tests for the dataset invariants.

use proptest::prelude::*;
use tabular::{Dataset, Row, TagSet, TabularError};

// ============================================================================
// Strategies
// ============================================================================

fn cells(width: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9 ]{0,8}", width)
}

/// Rows of mixed widths, including empty ones.
fn ragged_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{0,6}", 0..5), 0..30)
}

fn tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]", 0..5)
}

// ============================================================================
// Width invariant
// ============================================================================

proptest! {
    /// Every accepted row has the established width; rejected rows never
    /// show up in `rows()`.
    #[test]
    fn accepted_rows_share_width(rows in ragged_rows()) {
        let mut ds = Dataset::new();
        let mut accepted = Vec::new();
        for cells in rows {
            let row = Row::new(cells.clone());
            match ds.push(row) {
                Ok(()) => accepted.push(cells),
                Err(TabularError::InvalidRowWidth { actual, .. }) => {
                    prop_assert_eq!(actual, cells.len());
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }

        prop_assert_eq!(ds.len(), accepted.len());
        if let Some(first) = accepted.first() {
            prop_assert_eq!(ds.columns(), first.len());
            for row in ds.rows() {
                prop_assert_eq!(row.len(), ds.columns());
            }
        }
    }

    /// Headers added up front fix the width regardless of later rows.
    #[test]
    fn headers_fix_width(header_count in 1usize..5, rows in ragged_rows()) {
        let mut ds = Dataset::new();
        for i in 0..header_count {
            ds.add_header(format!("k{i}"), format!("Title {i}"));
        }
        let valid = rows.into_iter().filter(|r| r.len() == header_count).map(Row::new);
        prop_assert!(ds.append(valid).is_ok());
        for row in ds.rows() {
            prop_assert_eq!(row.len(), header_count);
        }
        prop_assert!(ds.push(Row::new(vec!["x"; header_count + 1])).is_err());
    }

    /// Column width is the widest cell or title ever seen at that index.
    #[test]
    fn width_tracks_widest_cell(rows in prop::collection::vec(cells(3), 1..20)) {
        let mut ds = Dataset::new();
        ds.add_header("a", "Alpha");
        ds.add_header("b", "B");
        ds.add_header("c", "");
        ds.append(rows.iter().cloned().map(Row::new)).unwrap();

        let titles = ["Alpha", "B", ""];
        for (idx, title) in titles.iter().enumerate() {
            let widest = rows.iter().map(|r| r[idx].chars().count()).max().unwrap_or(0);
            prop_assert_eq!(ds.idx_width(idx), widest.max(title.len()));
        }
    }

    /// Filtering never shrinks the tracked widths.
    #[test]
    fn width_survives_filtering(rows in prop::collection::vec(cells(2), 1..20)) {
        let mut ds = Dataset::new();
        ds.append(rows.iter().cloned().map(Row::new)).unwrap();
        let before = (ds.idx_width(0), ds.idx_width(1));
        ds.find("nothing-is-tagged");
        prop_assert!(ds.is_empty());

        ds.push(Row::new(["", ""])).unwrap();
        prop_assert_eq!((ds.idx_width(0), ds.idx_width(1)), before);
    }
}

// ============================================================================
// Sorting
// ============================================================================

proptest! {
    /// Ascending sort yields non-decreasing values; descending non-increasing.
    #[test]
    fn sort_orders_column(values in prop::collection::vec("[a-z0-9]{0,5}", 1..40), reverse in any::<bool>()) {
        let mut ds = Dataset::new();
        ds.add_header("v", "Value");
        ds.append(values.iter().map(|v| Row::new([v.as_str()]))).unwrap();
        ds.sort("v", reverse);

        let sorted = ds.col_values("v").unwrap();
        for pair in sorted.windows(2) {
            if reverse {
                prop_assert!(pair[0] >= pair[1]);
            } else {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.iter().all(Option::is_some));
    }

    /// Sorting by an unknown key changes nothing.
    #[test]
    fn sort_unknown_key_is_noop(values in prop::collection::vec("[a-z]{1,5}", 1..20)) {
        let mut ds = Dataset::new();
        ds.add_header("v", "Value");
        ds.append(values.iter().map(|v| Row::new([v.as_str()]))).unwrap();
        ds.sort("missing", false);
        let after: Vec<String> = ds
            .col_values("v")
            .unwrap()
            .into_iter()
            .map(|cell| cell.unwrap().to_string())
            .collect();
        prop_assert_eq!(after, values);
    }
}

// ============================================================================
// Tags
// ============================================================================

proptest! {
    /// `has_all` is a subset test.
    #[test]
    fn has_all_is_subset(set in tags(), query in tags()) {
        let tagset: TagSet = set.iter().cloned().collect();
        let expected = !set.is_empty() && !query.is_empty() && query.iter().all(|q| set.contains(q));
        prop_assert_eq!(tagset.has_all(&query), expected);
    }

    /// `has_any` is an intersection test.
    #[test]
    fn has_any_is_intersection(set in tags(), query in tags()) {
        let tagset: TagSet = set.iter().cloned().collect();
        let expected = query.iter().any(|q| set.contains(q));
        prop_assert_eq!(tagset.has_any(&query), expected);
    }

    /// `find_all` keeps exactly the rows whose tags contain the query.
    #[test]
    fn find_all_keeps_only_matches(row_tags in prop::collection::vec(tags(), 1..20), query in tags()) {
        let mut ds = Dataset::new();
        for (i, t) in row_tags.iter().enumerate() {
            ds.push(Row::new([i.to_string()]).with_tags(t.iter().cloned())).unwrap();
        }
        let expected = row_tags
            .iter()
            .filter(|t| !t.is_empty() && !query.is_empty() && query.iter().all(|q| t.contains(q)))
            .count();
        ds.find_all(&query);
        prop_assert_eq!(ds.len(), expected);
    }
}
