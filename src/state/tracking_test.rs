use super::*;

#[test]
fn known_event_types_map_to_icons() {
    assert_eq!(EventIcon::for_event("CREATION"), EventIcon::Package);
    assert_eq!(EventIcon::for_event("LOCATION_UPDATE"), EventIcon::Truck);
    assert_eq!(EventIcon::for_event("OWNERSHIP_TRANSFER"), EventIcon::Person);
    assert_eq!(EventIcon::for_event("QUALITY_CHECK"), EventIcon::Check);
}

#[test]
fn other_event_types_get_clock() {
    assert_eq!(EventIcon::for_event("RECALL"), EventIcon::Clock);
    assert_eq!(EventIcon::for_event("creation"), EventIcon::Clock);
}

#[test]
fn label_lowercases_and_replaces_first_underscore() {
    assert_eq!(event_label("LOCATION_UPDATE"), "location update");
    assert_eq!(event_label("CREATION"), "creation");
    assert_eq!(event_label("A_B_C"), "a b_c");
}
