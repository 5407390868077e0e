use super::*;

const WALLET: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

fn filled_details(role: Role) -> RegistrationForm {
    let mut form = RegistrationForm::new(role, Some("Europe/Berlin".into()));
    form.set(RegistrationField::FirstName, "Mia");
    form.set(RegistrationField::LastName, "Maker");
    form.set(RegistrationField::Email, "mia@factory.io");
    form.set(RegistrationField::Password, "longenough");
    form.set(RegistrationField::ConfirmPassword, "longenough");
    form
}

// =============================================================
// Role profiles
// =============================================================

#[test]
fn every_registrable_role_has_a_profile() {
    for role in Role::REGISTRABLE {
        let profile = role_profile(&role).unwrap();
        assert_eq!(profile.role, role);
        assert!(!profile.title.is_empty());
    }
}

#[test]
fn admin_is_not_self_registrable() {
    assert_eq!(role_profile(&Role::Admin), None);
}

// =============================================================
// Step 1
// =============================================================

#[test]
fn blank_form_reports_every_details_error() {
    let mut form = RegistrationForm::new(Role::Customer, None);
    assert!(!form.advance());
    assert_eq!(form.step, RegistrationStep::Details);
    assert_eq!(form.error(RegistrationField::FirstName), Some("First name is required"));
    assert_eq!(form.error(RegistrationField::LastName), Some("Last name is required"));
    assert_eq!(form.error(RegistrationField::Email), Some("Email is required"));
    assert_eq!(form.error(RegistrationField::Password), Some("Password is required"));
    assert_eq!(form.error(RegistrationField::ConfirmPassword), None);
}

#[test]
fn short_password_and_mismatch_are_reported() {
    let mut form = filled_details(Role::Customer);
    form.set(RegistrationField::Password, "short");
    assert!(!form.advance());
    assert_eq!(form.error(RegistrationField::Password), Some("Password must be at least 8 characters"));
    assert_eq!(form.error(RegistrationField::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn malformed_email_is_reported() {
    let mut form = filled_details(Role::Customer);
    form.set(RegistrationField::Email, "mia@factory");
    assert!(!form.advance());
    assert_eq!(form.error(RegistrationField::Email), Some("Valid email is required"));
}

#[test]
fn valid_details_advance_to_organization() {
    let mut form = filled_details(Role::Manufacturer);
    assert!(form.advance());
    assert_eq!(form.step, RegistrationStep::Organization);
    assert!(form.errors.is_empty());

    form.back();
    assert_eq!(form.step, RegistrationStep::Details);
    assert_eq!(form.value(RegistrationField::FirstName), "Mia");
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = RegistrationForm::new(Role::Customer, None);
    form.advance();
    form.set(RegistrationField::FirstName, "M");
    assert_eq!(form.error(RegistrationField::FirstName), None);
    assert_eq!(form.error(RegistrationField::LastName), Some("Last name is required"));
}

// =============================================================
// Step 2 and submit
// =============================================================

#[test]
fn organization_requires_company_and_wallet() {
    let mut form = filled_details(Role::Distributor);
    form.advance();
    assert_eq!(form.prepare_submit(), None);
    assert_eq!(form.error(RegistrationField::Company), Some("Company name is required"));
    assert_eq!(form.error(RegistrationField::WalletAddress), Some("Wallet address is required"));
}

#[test]
fn wallet_address_must_be_forty_hex_digits() {
    let mut form = filled_details(Role::Distributor);
    form.set(RegistrationField::Company, "Haulers");
    for bad in ["0x123", "52908400098527886E0F7030069857D2E4169EE7", "0xZZ908400098527886E0F7030069857D2E4169EE7"] {
        form.set(RegistrationField::WalletAddress, bad);
        assert_eq!(form.prepare_submit(), None, "{bad}");
        assert_eq!(form.error(RegistrationField::WalletAddress), Some("Valid Ethereum wallet address is required"));
    }
}

#[test]
fn submit_builds_request_with_optional_fields_omitted_when_blank() {
    let mut form = filled_details(Role::Retailer);
    form.advance();
    form.set(RegistrationField::Company, " Corner Shop ");
    form.set(RegistrationField::WalletAddress, WALLET);
    form.set(RegistrationField::JobTitle, "Owner");

    let req = form.prepare_submit().unwrap();
    assert_eq!(req.role, Role::Retailer);
    assert_eq!(req.company, "Corner Shop");
    assert_eq!(req.wallet_address, WALLET);
    assert_eq!(req.job_title.as_deref(), Some("Owner"));
    assert_eq!(req.phone_number, None);
    assert_eq!(req.timezone.as_deref(), Some("Europe/Berlin"));
    assert_eq!(req.locale.as_deref(), Some(DEFAULT_LOCALE));

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "RETAILER");
    assert_eq!(json["confirmPassword"], "longenough");
    assert!(json.get("phoneNumber").is_none());
}
