use super::*;
use crate::layout::types::Orientation;
use proptest::prelude::*;

fn config(container_width: f64, gap: f64, min: f64, max: f64, row_height: f64) -> LayoutConfig {
    LayoutConfig {
        gap,
        min_item_width: min,
        max_item_width: max,
        target_row_height: row_height,
        container_width,
    }
}

fn item(id: &str, w: f64, h: f64) -> Item {
    Item::new(id, w, h).unwrap()
}

fn row_ids(row: &Row) -> Vec<&str> {
    row.items.iter().map(|i| i.id.as_str()).collect()
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn test_three_squares_fit_in_one_final_row() {
    let items = vec![
        item("a", 1000.0, 1000.0),
        item("b", 500.0, 500.0),
        item("c", 300.0, 300.0),
    ];
    let rows = pack(&items, &config(1000.0, 16.0, 250.0, 400.0, 300.0)).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_final);
    assert!(!rows[0].normalized);
    for i in &rows[0].items {
        assert_eq!(i.computed_width, 300.0);
        assert_eq!(i.computed_height, 300.0);
    }
}

#[test]
fn test_landscape_then_portrait_breaks_and_normalizes() {
    // Portrait given first: orientation sort moves the landscape item ahead.
    let items = vec![item("tall", 300.0, 600.0), item("wide", 600.0, 300.0)];
    let rows = pack(&items, &config(500.0, 16.0, 150.0, 400.0, 300.0)).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(row_ids(&rows[0]), vec!["wide"]);
    assert!(rows[0].normalized);
    assert!(!rows[0].is_final);
    assert!((rows[0].items[0].computed_width - 500.0).abs() < 1e-9);
    assert_eq!(rows[0].items[0].computed_height, 300.0);

    assert_eq!(row_ids(&rows[1]), vec!["tall"]);
    assert!(rows[1].is_final);
    assert_eq!(rows[1].items[0].computed_width, 150.0);
    assert_eq!(rows[1].items[0].computed_height, 300.0);
}

#[test]
fn test_empty_input_gives_no_rows() {
    let rows = pack(&[], &LayoutConfig::default()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_oversized_single_final_item_is_not_shrunk() {
    let items = vec![item("pano", 800.0, 300.0)];
    let rows = pack(&items, &config(300.0, 16.0, 150.0, 400.0, 300.0)).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_final);
    assert_eq!(rows[0].items[0].computed_width, 400.0);
}

#[test]
fn test_oversized_non_final_item_is_shrunk_to_fit() {
    let items = vec![item("pano", 800.0, 300.0), item("sq", 300.0, 300.0)];
    let rows = pack(&items, &config(300.0, 16.0, 150.0, 400.0, 300.0)).unwrap();
    assert_eq!(rows.len(), 2);
    assert!((rows[0].items[0].computed_width - 300.0).abs() < 1e-9);
    assert_eq!(rows[1].items[0].computed_width, 300.0);
}

#[test]
fn test_zero_container_width_gives_one_item_per_row() {
    let items = vec![
        item("a", 400.0, 300.0),
        item("b", 300.0, 300.0),
        item("c", 200.0, 300.0),
    ];
    let rows = pack(&items, &config(0.0, 16.0, 100.0, 400.0, 300.0)).unwrap();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.len(), 1);
        assert!(!row.normalized);
        assert!(row.items.iter().all(|i| i.computed_width.is_finite()));
    }
}

#[test]
fn test_multi_row_gallery_justifies_all_but_last() {
    let items: Vec<Item> = (0..10)
        .map(|i| item(&format!("img{i}"), 800.0 + 40.0 * i as f64, 600.0))
        .collect();
    let cfg = config(1200.0, 16.0, 200.0, 400.0, 250.0);
    let rows = pack(&items, &cfg).unwrap();
    assert!(rows.len() > 1);
    let (last, full) = rows.split_last().unwrap();
    for row in full {
        assert!((row.filled_width(cfg.gap) - cfg.container_width).abs() < 1e-6);
        assert!(row.items.iter().all(|i| i.computed_height == cfg.target_row_height));
    }
    assert!(last.is_final);
    assert_eq!(rows.iter().map(Row::len).sum::<usize>(), 10);
}

#[test]
fn test_pending_items_are_laid_out_as_squares() {
    let items = vec![Item::pending("x"), Item::pending("y")];
    let rows = pack(&items, &config(1000.0, 16.0, 250.0, 400.0, 300.0)).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].items.iter().all(|i| i.computed_width == 300.0));
}

#[test]
fn test_invalid_config_is_rejected_before_packing() {
    let items = vec![item("a", 100.0, 100.0)];
    let bad = config(1000.0, 16.0, 500.0, 400.0, 300.0);
    assert!(matches!(pack(&items, &bad), Err(LayoutError::InvalidInput(_))));
    let bad = config(1000.0, 16.0, 250.0, 400.0, 0.0);
    assert!(matches!(pack(&items, &bad), Err(LayoutError::InvalidInput(_))));
}

#[test]
fn test_pack_does_not_mutate_input() {
    let items = vec![item("a", 300.0, 600.0), item("b", 600.0, 300.0)];
    let before = items.clone();
    let _ = pack(&items, &LayoutConfig::default()).unwrap();
    assert_eq!(items, before);
    assert!(items.iter().all(|i| i.computed_width == 0.0));
}

// ── Properties ───────────────────────────────────────────────────────────

fn item_strategy() -> impl Strategy<Value = (f64, f64)> {
    (1.0f64..4000.0, 1.0f64..4000.0)
}

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (100.0f64..3000.0, 0.0f64..40.0, 50.0f64..300.0, 0.0f64..400.0, 100.0f64..500.0).prop_map(
        |(container_width, gap, min, spread, row_height)| LayoutConfig {
            gap,
            min_item_width: min,
            max_item_width: min + spread,
            target_row_height: row_height,
            container_width,
        },
    )
}

fn make_items(sizes: &[(f64, f64)]) -> Vec<Item> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, (w, h))| Item::new(format!("i{i}"), *w, *h).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Every non-final row spans exactly the container and has one height.
    #[test]
    fn prop_non_final_rows_fill_container(
        sizes in prop::collection::vec(item_strategy(), 0..40),
        cfg in config_strategy(),
    ) {
        let rows = pack(&make_items(&sizes), &cfg).unwrap();
        for row in rows.iter().filter(|r| !r.is_final) {
            let filled = row.filled_width(cfg.gap);
            prop_assert!((filled - cfg.container_width).abs() <= 1e-6 * cfg.container_width,
                "filled {} vs container {}", filled, cfg.container_width);
            let h = row.items[0].computed_height;
            prop_assert!(row.items.iter().all(|i| i.computed_height == h));
        }
        prop_assert_eq!(rows.iter().filter(|r| r.is_final).count(), usize::from(!sizes.is_empty()));
    }

    /// Same input, same output.
    #[test]
    fn prop_pack_is_idempotent(
        sizes in prop::collection::vec(item_strategy(), 0..30),
        cfg in config_strategy(),
    ) {
        let items = make_items(&sizes);
        prop_assert_eq!(pack(&items, &cfg).unwrap(), pack(&items, &cfg).unwrap());
    }

    /// Widening the container never packs fewer items into the first row.
    #[test]
    fn prop_first_row_monotone_in_container_width(
        sizes in prop::collection::vec(item_strategy(), 1..30),
        cfg in config_strategy(),
        extra in 0.0f64..2000.0,
    ) {
        let items = make_items(&sizes);
        let narrow = pack(&items, &cfg).unwrap();
        let wide = pack(&items, &cfg.with_container_width(cfg.container_width + extra)).unwrap();
        prop_assert!(wide[0].len() >= narrow[0].len());
    }

    /// Rows preserve every item once, in orientation order, stable within a bucket.
    #[test]
    fn prop_rows_partition_sorted_items(
        sizes in prop::collection::vec(item_strategy(), 0..30),
        cfg in config_strategy(),
    ) {
        let items = make_items(&sizes);
        let rows = pack(&items, &cfg).unwrap();
        let packed: Vec<String> = rows.iter().flat_map(|r| r.items.iter().map(|i| i.id.clone())).collect();

        let mut expected: Vec<(Orientation, String)> =
            items.iter().map(|i| (i.orientation(), i.id.clone())).collect();
        expected.sort_by_key(|(o, _)| o.priority());
        let expected: Vec<String> = expected.into_iter().map(|(_, id)| id).collect();
        prop_assert_eq!(packed, expected);
        prop_assert!(rows.iter().all(|r| !r.is_empty()));
    }

    /// The final row keeps clamped provisional widths.
    #[test]
    fn prop_final_row_widths_are_clamped(
        sizes in prop::collection::vec(item_strategy(), 1..30),
        cfg in config_strategy(),
    ) {
        let rows = pack(&make_items(&sizes), &cfg).unwrap();
        let last = rows.last().unwrap();
        prop_assert!(!last.normalized);
        for i in &last.items {
            prop_assert!(i.computed_width >= cfg.min_item_width && i.computed_width <= cfg.max_item_width);
            prop_assert_eq!(i.computed_height, cfg.target_row_height);
        }
    }
}
