use super::*;

#[test]
fn registered_flag_detected_with_or_without_question_mark() {
    assert!(has_registered_flag("?registered=true"));
    assert!(has_registered_flag("registered=true"));
}

#[test]
fn registered_flag_detected_among_other_params() {
    assert!(has_registered_flag("?from=email&registered=true"));
}

#[test]
fn registered_flag_requires_exact_true() {
    assert!(!has_registered_flag("?registered=false"));
    assert!(!has_registered_flag("?registered=TRUE"));
    assert!(!has_registered_flag("?registered"));
    assert!(!has_registered_flag(""));
}

#[test]
fn registered_flag_key_must_match_exactly() {
    assert!(!has_registered_flag("?unregistered=true"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn consume_is_false_outside_browser() {
    assert!(!consume_registered_flag());
}
