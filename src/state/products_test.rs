use super::*;

fn paged(page: u32, total_pages: u32) -> ProductListState {
    ProductListState { search: String::new(), page, total_pages }
}

// =============================================================
// Paging
// =============================================================

#[test]
fn first_page_cannot_go_back() {
    let mut state = paged(0, 3);
    assert!(!state.can_go_prev());
    state.prev();
    assert_eq!(state.page, 0);
}

#[test]
fn last_page_cannot_go_forward() {
    let mut state = paged(2, 3);
    assert!(!state.can_go_next());
    state.next();
    assert_eq!(state.page, 2);
}

#[test]
fn empty_result_disables_both_directions() {
    let state = paged(0, 0);
    assert!(!state.can_go_prev());
    assert!(!state.can_go_next());
}

#[test]
fn next_and_prev_move_one_page() {
    let mut state = paged(0, 3);
    state.next();
    assert_eq!(state.page, 1);
    state.prev();
    assert_eq!(state.page, 0);
}

#[test]
fn changing_search_resets_page() {
    let mut state = paged(2, 5);
    state.set_search("widget");
    assert_eq!(state.page, 0);
    assert_eq!(state.search, "widget");
}

#[test]
fn query_carries_term_page_and_size() {
    let mut state = paged(0, 5);
    state.set_search("bolt");
    state.next();
    let query = state.query(10);
    assert_eq!(query.path(), "/products/search");
    assert_eq!(
        query.params(),
        vec![("q", "bolt".to_owned()), ("page", "1".to_owned()), ("size", "10".to_owned())]
    );
}

#[test]
fn page_label_is_one_based() {
    assert_eq!(paged(1, 5).page_label(), "Page 2 of 5");
}

// =============================================================
// Status presentation
// =============================================================

#[test]
fn known_statuses_get_their_badges() {
    assert_eq!(status_badge("CREATED"), "badge badge--created");
    assert_eq!(status_badge("IN_TRANSIT"), "badge badge--in-transit");
    assert_eq!(status_badge("AT_RETAILER"), "badge badge--at-retailer");
    assert_eq!(status_badge("SOLD"), "badge badge--sold");
}

#[test]
fn unknown_status_is_neutral() {
    assert_eq!(status_badge("AT_DISTRIBUTOR"), "badge badge--neutral");
    assert_eq!(status_badge(""), "badge badge--neutral");
}

#[test]
fn status_label_replaces_first_underscore_only() {
    assert_eq!(status_label("IN_TRANSIT"), "IN TRANSIT");
    assert_eq!(status_label("AT_THE_DOCK"), "AT THE_DOCK");
    assert_eq!(status_label("SOLD"), "SOLD");
}
