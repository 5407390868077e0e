use super::*;

#[test]
fn enumerated_roles_resolve_to_their_dashboards() {
    assert_eq!(resolve_landing_route("MANUFACTURER"), "/dashboard/manufacturer");
    assert_eq!(resolve_landing_route("DISTRIBUTOR"), "/dashboard/distributor");
    assert_eq!(resolve_landing_route("RETAILER"), "/dashboard/retailer");
    assert_eq!(resolve_landing_route("CUSTOMER"), "/dashboard/customer");
    assert_eq!(resolve_landing_route("ADMIN"), "/dashboard/admin");
}

#[test]
fn role_match_folds_case() {
    assert_eq!(resolve_landing_route("admin"), "/dashboard/admin");
    assert_eq!(resolve_landing_route("Retailer"), "/dashboard/retailer");
}

#[test]
fn unknown_roles_land_on_default_dashboard() {
    assert_eq!(resolve_landing_route(""), DEFAULT_LANDING_ROUTE);
    assert_eq!(resolve_landing_route("unknown"), DEFAULT_LANDING_ROUTE);
    assert_eq!(resolve_landing_route("SUPERUSER"), DEFAULT_LANDING_ROUTE);
}

#[test]
fn role_value_and_raw_string_agree() {
    for role in Role::REGISTRABLE {
        assert_eq!(role.landing_route(), resolve_landing_route(role.as_str()));
    }
    assert_eq!(Role::Admin.landing_route(), "/dashboard/admin");
}
