use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_folds_case() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("Retailer"), Role::Retailer);
    assert_eq!(Role::parse(" MANUFACTURER "), Role::Manufacturer);
}

#[test]
fn role_parse_keeps_unknown_values() {
    assert_eq!(Role::parse("AUDITOR"), Role::Other("AUDITOR".to_owned()));
    assert_eq!(Role::parse(""), Role::Other(String::new()));
}

#[test]
fn role_serializes_canonical_spelling() {
    assert_eq!(serde_json::to_value(Role::parse("customer")).unwrap(), json!("CUSTOMER"));
    assert_eq!(serde_json::to_value(Role::Other("auditor".into())).unwrap(), json!("auditor"));
}

#[test]
fn registrable_roles_exclude_admin() {
    assert!(!Role::REGISTRABLE.contains(&Role::Admin));
    assert_eq!(Role::REGISTRABLE.len(), 4);
}

// =============================================================
// Session / User
// =============================================================

#[test]
fn session_decodes_login_response() {
    let body = json!({
        "token": "jwt-abc",
        "user": {
            "id": 7,
            "email": "ops@acme.test",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "DISTRIBUTOR",
            "company": "Acme",
            "walletAddress": "0x1234567890abcdef1234567890abcdef12345678"
        }
    });
    let session: Session = serde_json::from_value(body).unwrap();
    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.role, Role::Distributor);
    assert_eq!(session.user.email.as_deref(), Some("ops@acme.test"));
    assert_eq!(session.user.display_name(), "Ada Lovelace");
}

#[test]
fn wallet_user_without_email_decodes_and_omits_email_on_encode() {
    let body = json!({
        "id": 3,
        "firstName": "Wen",
        "lastName": "Li",
        "role": "RETAILER",
        "company": "Shop",
        "walletAddress": "0xabc"
    });
    let user: User = serde_json::from_value(body).unwrap();
    assert_eq!(user.email, None);
    let encoded = serde_json::to_value(&user).unwrap();
    assert!(encoded.get("email").is_none());
    assert_eq!(encoded["walletAddress"], "0xabc");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn registration_request_uses_camel_case_and_skips_absent_optionals() {
    let req = RegistrationRequest {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@acme.test".into(),
        password: "password1".into(),
        confirm_password: "password1".into(),
        phone_number: None,
        role: Role::Manufacturer,
        company: "Acme".into(),
        job_title: Some("Lead".into()),
        department: None,
        address: None,
        wallet_address: "0x1234567890abcdef1234567890abcdef12345678".into(),
        timezone: Some("UTC".into()),
        locale: Some("en_US".into()),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["confirmPassword"], "password1");
    assert_eq!(value["role"], "MANUFACTURER");
    assert_eq!(value["jobTitle"], "Lead");
    assert!(value.get("phoneNumber").is_none());
    assert!(value.get("department").is_none());
}

#[test]
fn new_product_keeps_null_weight() {
    let product = NewProduct {
        product_code: "SKU-1".into(),
        name: "Widget".into(),
        description: String::new(),
        category: "INDUSTRIAL".into(),
        batch_number: "B-9".into(),
        weight_grams: None,
        manufactured_at: "2026-01-02T03:04".into(),
        initial_location: "Dock 4".into(),
    };
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value["weightGrams"], serde_json::Value::Null);
    assert_eq!(value["initialLocation"], "Dock 4");
}

// =============================================================
// Responses
// =============================================================

#[test]
fn dashboard_stats_missing_fields_default_to_zero() {
    let stats: DashboardStats = serde_json::from_value(json!({ "totalProducts": 12, "sold": 2 })).unwrap();
    assert_eq!(stats.total_products, 12);
    assert_eq!(stats.sold, 2);
    assert_eq!(stats.in_transit, 0);
}

#[test]
fn product_page_decodes_content_and_total_pages() {
    let page: ProductPage = serde_json::from_value(json!({
        "content": [{
            "id": 1,
            "blockchainId": "0xfeed",
            "productCode": "SKU-1",
            "name": "Widget",
            "category": "ELECTRONICS",
            "status": "IN_TRANSIT",
            "currentOwner": "0xowner",
            "currentLocation": null,
            "manufacturedAt": "2026-01-02T03:04:05"
        }],
        "totalPages": 4
    }))
    .unwrap();
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.content[0].status, "IN_TRANSIT");
    assert_eq!(page.content[0].current_location, None);
}

#[test]
fn tracking_history_missing_list_is_empty() {
    let history: TrackingHistory = serde_json::from_value(json!({})).unwrap();
    assert!(history.history.is_empty());
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_value(json!({ "message": "invalid credentials" })).unwrap();
    assert_eq!(body.message.as_deref(), Some("invalid credentials"));
    let body: ErrorBody = serde_json::from_value(json!({ "error": "x" })).unwrap();
    assert_eq!(body.message, None);
}
