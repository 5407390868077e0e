use super::*;

fn query(search: &str, page: u32) -> ProductQuery {
    ProductQuery { search: search.to_owned(), page, size: 10 }
}

#[test]
fn list_query_uses_products_path_without_term() {
    let q = query("", 2);
    assert_eq!(q.path(), "/products");
    assert_eq!(q.params(), vec![("page", "2".to_owned()), ("size", "10".to_owned())]);
}

#[test]
fn search_query_uses_search_path_and_trims_term() {
    let q = query("  pallet 7 ", 0);
    assert_eq!(q.path(), "/products/search");
    assert_eq!(
        q.params(),
        vec![("q", "pallet 7".to_owned()), ("page", "0".to_owned()), ("size", "10".to_owned())]
    );
}

#[test]
fn blank_search_term_is_a_plain_list() {
    assert_eq!(query("   ", 0).path(), PRODUCTS_PATH);
}

#[test]
fn tracking_path_embeds_product_id() {
    assert_eq!(tracking_path("42"), "/product-tracking/42/tracking");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("t1"), "Bearer t1");
}

#[test]
fn url_joins_base_and_path() {
    let api = HttpApi::new(&ClientConfig::default().with_api_base("https://api.example.test/api/v1/"));
    assert_eq!(api.url(AUTH_LOGIN_PATH), "https://api.example.test/api/v1/auth/login");
}

#[test]
fn server_message_prefers_non_blank_body_message() {
    let err = ApiError::Status { status: 401, message: Some("invalid credentials".into()) };
    assert_eq!(err.server_message(), Some("invalid credentials"));
    assert_eq!(err.user_message("Login failed"), "invalid credentials");
}

#[test]
fn server_message_absent_falls_back() {
    let blank = ApiError::Status { status: 500, message: Some("  ".into()) };
    assert_eq!(blank.user_message("Login failed"), "Login failed");
    let transport = ApiError::Transport("connection reset".into());
    assert_eq!(transport.server_message(), None);
    assert_eq!(transport.user_message("Login failed"), "Login failed");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let api = HttpApi::new(&ClientConfig::default());
    let result = futures::executor::block_on(api.dashboard_stats("t1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
