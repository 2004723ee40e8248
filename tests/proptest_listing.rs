//! Property-based tests using proptest
//!
//! These tests check the listing pipeline's invariants over randomized
//! column lists, field paths, filter entries and grids.

use cloudls::listing::{derive_name, display_value};
use cloudls::output::{compare_cells, sort_grid, truncate_cell};
use std::cmp::Ordering;
use cloudls::{build_filters, resolve_field, ColumnExpansion, ColumnSpec};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Cells mixing free text, integers, decimals and NaN
fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,6}",
        any::<i32>().prop_map(|n| n.to_string()),
        (0u16..100, 0u16..100).prop_map(|(a, b)| format!("{}.{}", a, b)),
        (0u8..10).prop_map(|n| format!("{}a", n)),
        Just("NaN".to_string()),
    ]
}

fn arb_column() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("id".to_string()),
        Just("tags".to_string()),
        Just("launch_time".to_string()),
        Just("name".to_string()),
        "[a-z][a-z_]{0,12}",
    ]
}

/// Arbitrary nested record with string, number, array and object leaves
fn arb_record() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,10}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[A-Za-z_]{1,8}", inner, 0..4)
                .prop_map(|m| json!(m)),
        ]
    })
}

proptest! {
    /// Expansion keeps every user column in order
    #[test]
    fn expansion_never_removes_user_columns(
        user in prop::collection::vec(arb_column(), 0..8),
        derived in proptest::option::of(Just("name")),
    ) {
        let mut spec = ColumnSpec::new(user.clone());
        ColumnExpansion { forced: &["tags", "launch_time"], derived }.apply(&mut spec);

        let mut remaining = spec.as_slice().iter();
        for column in &user {
            prop_assert!(remaining.any(|c| c == column));
        }
    }

    /// A forced column appears exactly as often as the user listed it, or once
    #[test]
    fn expansion_never_duplicates_forced_columns(
        user in prop::collection::vec(arb_column(), 0..8),
    ) {
        let mut spec = ColumnSpec::new(user.clone());
        ColumnExpansion { forced: &["tags", "launch_time"], derived: None }.apply(&mut spec);

        for forced in ["tags", "launch_time"] {
            let before = user.iter().filter(|c| *c == forced).count();
            let after = spec.as_slice().iter().filter(|c| *c == forced).count();
            prop_assert_eq!(after, before.max(1));
        }
    }

    /// The derived column always leads, even when the user already listed it
    #[test]
    fn derived_column_is_always_first(
        user in prop::collection::vec(arb_column(), 0..8),
    ) {
        let mut spec = ColumnSpec::new(user.clone());
        ColumnExpansion { forced: &["tags"], derived: Some("name") }.apply(&mut spec);

        prop_assert_eq!(spec.as_slice()[0].as_str(), "name");
        let names = spec.as_slice().iter().filter(|c| *c == "name").count();
        let user_names = user.iter().filter(|c| *c == "name").count();
        prop_assert_eq!(names, user_names + 1);
    }

    /// Resolution of any path on any record returns, never panics
    #[test]
    fn resolution_never_panics(
        record in arb_record(),
        path in "[A-Za-z0-9_.]{0,20}",
    ) {
        let value = resolve_field(&record, &path);
        let _ = display_value(value);
        let _ = derive_name(&record);
    }

    /// Missing top-level keys resolve to nothing
    #[test]
    fn unknown_paths_resolve_to_none(key in "zz[a-z]{1,8}", rest in "(\\.[a-z]{1,5}){0,3}") {
        let record = json!({"id": "i-1", "State": {"Name": "running"}});
        let path = format!("{}{}", key, rest);
        prop_assert!(resolve_field(&record, &path).is_none());
    }

    /// Filter entries split on the first '=' only
    #[test]
    fn filters_split_on_first_equals(
        key in "[a-zA-Z:._-]{1,12}",
        value in "[a-zA-Z0-9=._-]{0,16}",
    ) {
        let clauses = build_filters(&[format!("{}={}", key, value)], &[]).unwrap();
        prop_assert_eq!(clauses.len(), 1);
        prop_assert_eq!(clauses[0].name(), key.as_str());
        prop_assert_eq!(clauses[0].value(), value.as_str());
    }

    /// Entries without '=' are rejected
    #[test]
    fn filters_without_equals_are_rejected(entry in "[a-zA-Z0-9:._-]{0,16}") {
        prop_assert!(build_filters(&[], &[entry]).is_err());
    }

    /// Truncation yields at most `max` characters, ending in the ellipsis when cut
    #[test]
    fn truncation_respects_max_width(value in "\\PC{0,64}", max in 1usize..40) {
        let out = truncate_cell(&value, max);
        let len = value.chars().count();
        if len > max {
            prop_assert_eq!(out.chars().count(), max);
            prop_assert!(out.ends_with('…'));
        } else {
            prop_assert_eq!(out, value);
        }
    }

    /// Descending sort puts greater values first and keeps ties in input order
    #[test]
    fn descending_sort_is_ordered_and_stable(
        keys in prop::collection::vec(0u8..5, 0..30),
    ) {
        let columns = vec!["key".to_string(), "pos".to_string()];
        let mut grid: Vec<Vec<String>> = keys
            .iter()
            .enumerate()
            .map(|(pos, key)| vec![key.to_string(), pos.to_string()])
            .collect();
        sort_grid(&mut grid, &columns, "key", false).unwrap();

        for pair in grid.windows(2) {
            let (k0, k1): (u8, u8) = (pair[0][0].parse().unwrap(), pair[1][0].parse().unwrap());
            prop_assert!(k0 >= k1);
            if k0 == k1 {
                let (p0, p1): (usize, usize) =
                    (pair[0][1].parse().unwrap(), pair[1][1].parse().unwrap());
                prop_assert!(p0 < p1);
            }
        }
    }

    /// Mixed text and numeric cells sort without panicking, in comparator
    /// order, with ties kept in input order
    #[test]
    fn mixed_cells_sort_totally_and_stably(
        keys in prop::collection::vec(arb_cell(), 0..200),
        ascending in any::<bool>(),
    ) {
        let columns = vec!["key".to_string(), "pos".to_string()];
        let mut grid: Vec<Vec<String>> = keys
            .iter()
            .enumerate()
            .map(|(pos, key)| vec![key.clone(), pos.to_string()])
            .collect();
        sort_grid(&mut grid, &columns, "key", ascending).unwrap();

        prop_assert_eq!(grid.len(), keys.len());
        for pair in grid.windows(2) {
            let ord = compare_cells(&pair[0][0], &pair[1][0]);
            let out_of_order = if ascending {
                Ordering::Greater
            } else {
                Ordering::Less
            };
            prop_assert_ne!(ord, out_of_order);
            if ord == Ordering::Equal {
                let (p0, p1): (usize, usize) =
                    (pair[0][1].parse().unwrap(), pair[1][1].parse().unwrap());
                prop_assert!(p0 < p1);
            }
        }
    }
}

#[test]
fn derived_names_for_mixed_records() {
    let records = [
        json!({"id": "a", "tags": [{"Key": "Name", "Value": "foo"}]}),
        json!({"id": "b", "tags": []}),
        json!({"id": "c", "tags": [{"Key": "Name", "Value": "bar"}]}),
    ];
    let names: Vec<String> = records.iter().map(derive_name).collect();
    assert_eq!(names, vec!["foo", "b", "bar"]);
}

#[test]
fn filter_and_tag_clauses_keep_order() {
    let clauses = build_filters(&["state=running".to_string()], &["Owner=alice".to_string()])
        .unwrap();
    let pairs: Vec<(&str, &str)> = clauses.iter().map(|c| (c.name(), c.value())).collect();
    assert_eq!(pairs, vec![("state", "running"), ("tag:Owner", "alice")]);
}
