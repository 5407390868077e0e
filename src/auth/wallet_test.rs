use super::*;
use time::macros::datetime;

#[test]
fn challenge_names_address_and_rfc3339_timestamp() {
    let msg = challenge_message("0xABCDEF", datetime!(2026-03-04 05:06:07 UTC));
    assert!(msg.starts_with(CHALLENGE_HEADLINE));
    assert!(msg.contains("Wallet: 0xABCDEF"));
    assert!(msg.contains("Timestamp: 2026-03-04T05:06:07Z"));
}

#[test]
fn challenges_differ_across_instants() {
    let a = challenge_message("0xABCDEF", datetime!(2026-03-04 05:06:07 UTC));
    let b = challenge_message("0xABCDEF", datetime!(2026-03-04 05:06:08 UTC));
    assert_ne!(a, b);
}
