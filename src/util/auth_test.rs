use super::*;
use crate::auth::store::{MemoryArea, ScopedStore, StorageArea, TOKEN_KEY};

#[test]
fn allow_has_no_redirect() {
    assert_eq!(redirect_path(&Access::Allow), None);
}

#[test]
fn redirect_carries_target() {
    assert_eq!(redirect_path(&Access::RedirectTo("/login".into())), Some("/login"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_has_no_session_and_redirects() {
    let config = ClientConfig::default().with_login_route("/signin");
    assert_eq!(stored_session(&config), None);
    assert_eq!(check_access(&config, "/dashboard"), Access::RedirectTo("/signin".into()));
    assert_eq!(sign_out(&config), "/signin");
}

#[cfg(not(feature = "csr"))]
#[test]
fn authorized_without_session_is_401() {
    let err = authorized(&ClientConfig::default()).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: Some(SIGNED_OUT_MESSAGE.to_owned()) });
}

#[test]
fn every_child_navigation_rereads_storage() {
    let durable = MemoryArea::new();
    let store = ScopedStore::new(durable.clone(), MemoryArea::new());
    let config = ClientConfig::default();
    durable.set(TOKEN_KEY, "t1").unwrap();

    assert_eq!(access_on_navigation(&store, &config, "/dashboard"), Access::Allow);
    assert_eq!(access_on_navigation(&store, &config, "/dashboard/products"), Access::Allow);

    // Another tab signs out between two child routes.
    durable.remove(TOKEN_KEY);
    assert_eq!(
        access_on_navigation(&store, &config, "/dashboard/products/new"),
        Access::RedirectTo("/login".into())
    );
}

#[test]
fn navigation_is_allowed_again_after_a_new_sign_in() {
    let ephemeral = MemoryArea::new();
    let store = ScopedStore::new(MemoryArea::new(), ephemeral.clone());
    let config = ClientConfig::default().with_login_route("/signin");

    assert_eq!(access_on_navigation(&store, &config, "/dashboard"), Access::RedirectTo("/signin".into()));
    ephemeral.set(TOKEN_KEY, "t2").unwrap();
    assert_eq!(access_on_navigation(&store, &config, "/dashboard/products"), Access::Allow);
}
