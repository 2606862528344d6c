use super::*;

#[test]
fn test_classify_buckets() {
    assert_eq!(classify(2.0).unwrap(), Orientation::Landscape);
    assert_eq!(classify(1.0).unwrap(), Orientation::Square);
    assert_eq!(classify(0.5).unwrap(), Orientation::Portrait);
}

#[test]
fn test_classify_thresholds_are_strict() {
    assert_eq!(classify(LANDSCAPE_THRESHOLD).unwrap(), Orientation::Square);
    assert_eq!(classify(PORTRAIT_THRESHOLD).unwrap(), Orientation::Square);
    assert_eq!(classify(1.2000001).unwrap(), Orientation::Landscape);
    assert_eq!(classify(0.7999999).unwrap(), Orientation::Portrait);
}

#[test]
fn test_classify_rejects_bad_ratios() {
    for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(classify(ratio), Err(LayoutError::InvalidInput(_))),
            "ratio {ratio} should be rejected"
        );
    }
}

#[test]
fn test_sort_by_orientation_is_stable() {
    let mut items = vec![
        Item::new("p1", 300.0, 600.0).unwrap(),
        Item::new("s1", 500.0, 500.0).unwrap(),
        Item::new("l1", 800.0, 400.0).unwrap(),
        Item::new("p2", 400.0, 900.0).unwrap(),
        Item::new("l2", 1600.0, 900.0).unwrap(),
        Item::new("s2", 510.0, 490.0).unwrap(),
    ];
    sort_by_orientation(&mut items);
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["l1", "l2", "s1", "s2", "p1", "p2"]);
}
