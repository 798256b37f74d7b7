use super::*;

fn bucket(label: &str, count: i64) -> WeeklyCount {
    WeeklyCount { label: label.to_owned(), count }
}

#[test]
fn bar_width_scales_against_max() {
    assert_eq!(bar_width(5, 10), "50%");
    assert_eq!(bar_width(10, 10), "100%");
}

#[test]
fn bar_width_handles_empty_series() {
    assert_eq!(bar_width(0, 0), "0%");
    assert_eq!(bar_width(3, 0), "0%");
    assert_eq!(bar_width(-1, 10), "0%");
}

#[test]
fn max_count_picks_busiest_bucket() {
    let weekly = vec![bucket("W1", 2), bucket("W2", 9), bucket("W3", 4)];
    assert_eq!(max_count(&weekly), 9);
}

#[test]
fn max_count_of_empty_series_is_zero() {
    assert_eq!(max_count(&[]), 0);
}
