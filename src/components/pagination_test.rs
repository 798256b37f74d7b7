use super::*;

#[test]
fn first_page_has_no_prev() {
    assert_eq!(prev_page(1), None);
    assert_eq!(prev_page(2), Some(1));
}

#[test]
fn last_page_has_no_next() {
    assert_eq!(next_page(3, 3), None);
    assert_eq!(next_page(2, 3), Some(3));
}

#[test]
fn single_page_disables_both_directions() {
    assert_eq!(prev_page(1), None);
    assert_eq!(next_page(1, 1), None);
}

#[test]
fn empty_result_set_still_labels_one_page() {
    assert_eq!(page_label(1, 0), "Page 1 of 1");
}

#[test]
fn label_reports_position() {
    assert_eq!(page_label(2, 7), "Page 2 of 7");
}
