use super::*;

#[test]
fn nav_items_cover_dashboard_sections() {
    let paths: Vec<_> = NAV_ITEMS.iter().map(|i| i.path).collect();
    assert_eq!(paths, ["/dashboard", "/dashboard/products", "/dashboard/products/new"]);
}

#[test]
fn overview_matches_exactly() {
    assert!(NAV_ITEMS[0].exact);
}
