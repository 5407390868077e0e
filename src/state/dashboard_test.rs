use super::*;

#[test]
fn stat_cards_follow_display_order() {
    let stats = DashboardStats { total_products: 12, in_transit: 4, at_retailer: 3, sold: 2, ..DashboardStats::default() };
    let cards = stat_cards(&stats);
    let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Total Products", "In Transit", "Verified", "Violations"]);
    let values: Vec<_> = cards.iter().map(|c| c.value).collect();
    assert_eq!(values, [12, 4, 3, 0]);
}

#[test]
fn empty_stats_render_zeroes() {
    assert!(stat_cards(&DashboardStats::default()).iter().all(|c| c.value == 0));
}

#[test]
fn unknown_roles_get_plain_badge() {
    assert_eq!(role_badge(&Role::Other("AUDITOR".into())), "role-badge");
    assert_eq!(role_badge(&Role::Retailer), "role-badge role-badge--retailer");
}

#[test]
fn greeting_and_affiliation_use_profile_fields() {
    let user = User {
        id: 1,
        email: None,
        first_name: "Dee".into(),
        last_name: "Stributor".into(),
        role: Role::Distributor,
        company: "Haulers".into(),
        wallet_address: String::new(),
    };
    assert_eq!(greeting(&user), "Welcome back, Dee!");
    assert_eq!(affiliation(&user), "Haulers \u{2022} DISTRIBUTOR");
}
