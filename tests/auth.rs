use axum::http::StatusCode;
use hutbook::auth::{AuthUser, TokenKeys};
use serde_json::json;
use time::{Duration, OffsetDateTime};

mod helpers;

#[tokio::test]
async fn test_login_sets_cookie_and_user_endpoint_reads_it() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let resp = app.login("alice", "secret").await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let raw = helpers::raw_set_cookie(&resp).unwrap();
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("SameSite=Strict"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("Max-Age=3600"));

    let cookie = helpers::set_cookie(&resp).unwrap();
    assert_eq!(
        helpers::body_json(resp).await?,
        json!({ "message": "Login successful" })
    );

    let resp = app.get("/api/user", Some(&cookie)).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        helpers::body_json(resp).await?,
        json!({ "userId": app.alice_id, "username": "alice", "isAdmin": false })
    );

    Ok(())
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_username() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let resp = app.login("ALICE", "secret").await?;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let wrong_password = app.login("alice", "nope").await?;
    let unknown_user = app.login("mallory", "secret").await?;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert!(helpers::set_cookie(&wrong_password).is_none());

    let a = helpers::body_json(wrong_password).await?;
    let b = helpers::body_json(unknown_user).await?;
    assert_eq!(a, b);
    assert_eq!(a, json!({ "message": "Invalid credentials" }));

    Ok(())
}

#[tokio::test]
async fn test_login_malformed_body() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let resp = app
        .post_json("/api/login", None, json!({ "username": "alice" }))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(helpers::body_json(resp).await?["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_gate_without_cookie() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    for page in ["/", "/dashboard", "/bookings", "/nowhere"] {
        let resp = app.get(page, None).await?;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{page}");
        assert_eq!(helpers::location(&resp).as_deref(), Some("/login"), "{page}");
    }

    for api in ["/api/user", "/api/bookings"] {
        let resp = app.get(api, None).await?;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{api}");
        assert_eq!(
            helpers::body_json(resp).await?,
            json!({ "message": "Not authenticated" })
        );
    }

    let resp = app.get("/login", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.get("/health", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_gate_with_valid_cookie() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let cookie = app.alice_cookie().await?;

    let resp = app.get("/login", Some(&cookie)).await?;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(helpers::location(&resp).as_deref(), Some("/dashboard"));

    let resp = app.get("/", Some(&cookie)).await?;
    assert_eq!(helpers::location(&resp).as_deref(), Some("/dashboard"));

    let resp = app.get("/dashboard", Some(&cookie)).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_gate_clears_invalid_cookie() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let resp = app.get("/dashboard", Some("token=garbage")).await?;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(helpers::location(&resp).as_deref(), Some("/login"));

    let cleared = helpers::raw_set_cookie(&resp).unwrap();
    assert!(cleared.starts_with("token=;"));
    assert!(cleared.contains("Max-Age=0"));

    Ok(())
}

#[tokio::test]
async fn test_gate_rejects_expired_token() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let keys = TokenKeys::new(helpers::SECRET, 3600);
    let token = keys.sign(
        &AuthUser {
            user_id: app.alice_id,
            username: "alice".to_owned(),
            is_admin: false,
        },
        OffsetDateTime::now_utc() - Duration::hours(2),
    )?;
    let cookie = format!("token={token}");

    let resp = app.get("/api/user", Some(&cookie)).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.get("/dashboard", Some(&cookie)).await?;
    assert_eq!(helpers::location(&resp).as_deref(), Some("/login"));

    Ok(())
}

#[tokio::test]
async fn test_login_with_stale_cookie_keeps_new_token() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let resp = app
        .send(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/login")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .header(axum::http::header::COOKIE, "token=garbage")
                .body(axum::body::Body::from(
                    json!({ "username": "alice", "password": "secret" }).to_string(),
                ))?,
        )
        .await?;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = helpers::set_cookie(&resp).unwrap();
    assert_ne!(cookie, "token=");

    let resp = app.get("/api/user", Some(&cookie)).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_logout_clears_cookie() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let cookie = app.alice_cookie().await?;

    let resp = app
        .post_json("/api/logout", Some(&cookie), json!({}))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = helpers::raw_set_cookie(&resp).unwrap();
    assert!(cleared.starts_with("token=;"));
    assert!(cleared.contains("Max-Age=0"));
    assert_eq!(
        helpers::body_json(resp).await?,
        json!({ "message": "Logged out" })
    );

    let resp = app.get("/api/logout", Some(&cookie)).await?;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = app.post_json("/api/logout", None, json!({})).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
