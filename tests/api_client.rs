use pretty_assertions::assert_eq;
use serde_json::json;
use stock_live::api::{ApiClient, Credentials};
use stock_live::error::ApiError;
use stock_live::router::{self, MenuOption, Screen};
use stock_live::session::Session;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The client is blocking, so it has to run off the async test runtime.
async fn with_client<T, F>(base_url: String, f: F) -> T
where
    F: FnOnce(ApiClient) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(ApiClient::new(&base_url).unwrap()))
        .await
        .unwrap()
}

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.into(),
        password: password.into(),
    }
}

/// A local address with nothing listening on it.
fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn login_returns_token_and_authenticates_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "abc123", "user": {"id": 1}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = with_client(mock_server.uri(), |api| {
        api.login(&credentials("admin", "secret"))
    })
    .await;
    assert_eq!(outcome.as_deref().ok(), Some("abc123"));

    let mut session = Session::new();
    assert!(session.apply_login(outcome));
    assert_eq!(
        session,
        Session::Authenticated {
            token: "abc123".into()
        }
    );
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = with_client(mock_server.uri(), |api| {
        api.login(&credentials("admin", "wrong"))
    })
    .await;
    assert!(matches!(outcome, Err(ApiError::Status(s)) if s.as_u16() == 401));

    let mut session = Session::new();
    assert!(!session.apply_login(outcome));
    assert_eq!(session, Session::Unauthenticated);
}

#[tokio::test]
async fn empty_credentials_are_sent_as_is() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "", "password": ""})))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = with_client(mock_server.uri(), |api| api.login(&credentials("", ""))).await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn login_without_token_field_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": "admin"})))
        .mount(&mock_server)
        .await;

    let outcome = with_client(mock_server.uri(), |api| {
        api.login(&credentials("admin", "secret"))
    })
    .await;
    assert!(matches!(outcome, Err(ApiError::MissingToken)));
}

#[tokio::test]
async fn malformed_login_body_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let outcome = with_client(mock_server.uri(), |api| {
        api.login(&credentials("admin", "secret"))
    })
    .await;
    assert!(matches!(outcome, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn only_200_counts_as_successful_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = with_client(mock_server.uri(), |api| {
        api.login(&credentials("admin", "secret"))
    })
    .await;
    assert!(matches!(outcome, Err(ApiError::Status(s)) if s.as_u16() == 201));
}

#[tokio::test]
async fn unreachable_backend_fails_login() {
    let outcome = with_client(unreachable_url(), |api| {
        api.login(&credentials("admin", "secret"))
    })
    .await;
    assert!(matches!(outcome, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn products_are_fetched_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Yerba", "stock": 4},
            {"id": 2, "name": "Mate", "price": 1500.0}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = Session::Authenticated {
        token: "abc123".into(),
    };
    let Screen::Products { token } = router::route(&session, MenuOption::Products) else {
        panic!("authenticated session should route to products");
    };
    let token = token.to_string();

    let products = with_client(mock_server.uri(), move |api| api.fetch_products(&token))
        .await
        .unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], json!("Yerba"));
    assert_eq!(products[1].get("stock"), None);
}

#[tokio::test]
async fn products_error_status_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let result = with_client(mock_server.uri(), |api| api.fetch_products("expired")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn analysis_sections_are_optional() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/analysis"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topSelling": [{"name": "Mate", "sold": 40}],
            "totalValue": 125000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let analysis = with_client(mock_server.uri(), |api| {
        api.fetch_inventory_analysis("abc123")
    })
    .await
    .unwrap();
    assert!(analysis.low_stock.is_none());
    assert_eq!(analysis.top_selling, Some(json!([{"name": "Mate", "sold": 40}])));
    assert_eq!(analysis.extra.get("totalValue"), Some(&json!(125000)));
}

#[tokio::test]
async fn analysis_failures_are_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/analysis"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let status = with_client(mock_server.uri(), |api| {
        api.fetch_inventory_analysis("abc123")
    })
    .await;
    assert!(matches!(status, Err(ApiError::Status(_))));

    let unreachable = with_client(unreachable_url(), |api| {
        api.fetch_inventory_analysis("abc123")
    })
    .await;
    assert!(matches!(unreachable, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn no_content_products_reply_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = with_client(mock_server.uri(), |api| api.fetch_products("abc123")).await;
    assert!(matches!(result, Err(ApiError::Status(s)) if s.as_u16() == 204));
}

#[tokio::test]
async fn malformed_products_body_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = with_client(mock_server.uri(), |api| api.fetch_products("abc123")).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn product_rows_are_not_required_to_be_objects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Yerba", "Mate"])))
        .mount(&mock_server)
        .await;

    let products = with_client(mock_server.uri(), |api| api.fetch_products("abc123"))
        .await
        .unwrap();
    assert_eq!(products, vec![json!("Yerba"), json!("Mate")]);
}

#[tokio::test]
async fn odd_analysis_section_keeps_its_sibling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lowStock": [{"name": "Yerba"}],
            "topSelling": [["Mate", 40]]
        })))
        .mount(&mock_server)
        .await;

    let analysis = with_client(mock_server.uri(), |api| {
        api.fetch_inventory_analysis("abc123")
    })
    .await
    .unwrap();
    assert_eq!(analysis.low_stock, Some(json!([{"name": "Yerba"}])));
    assert_eq!(analysis.top_selling, Some(json!([["Mate", 40]])));
}

#[tokio::test]
async fn null_analysis_section_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lowStock": null})))
        .mount(&mock_server)
        .await;

    let analysis = with_client(mock_server.uri(), |api| {
        api.fetch_inventory_analysis("abc123")
    })
    .await
    .unwrap();
    assert_eq!(analysis.low_stock, Some(serde_json::Value::Null));
    assert!(analysis.top_selling.is_none());
}
