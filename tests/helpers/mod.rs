#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use hutbook::config::{
    AuthConfig, CalendarConfig, Config, DatabaseConfig, ObservabilityConfig, ServerConfig,
};
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub state: hutbook_shared::State,
    pub alice_id: i64,
    _dir: TempDir,
}

pub fn config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
        },
        auth: AuthConfig {
            jwt_secret: SECRET.to_string(),
            token_lifetime_seconds: 3600,
            secure_cookie: false,
        },
        calendar: CalendarConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Migrated database in a temp dir with one user, `alice` / `secret`.
pub async fn setup() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = hutbook::create_pool(&url, 5).await?;
    hutbook::db::migrate(&pool).await?;

    let state = hutbook_shared::State::single(pool);
    let alice_id = hutbook_user::Command::new(state.clone())
        .create(hutbook_user::CreateInput {
            username: "alice".to_owned(),
            password: "secret".to_owned(),
            is_admin: false,
        })
        .await?;

    let router = hutbook::router(hutbook::AppState::new(config(url), state.clone()));

    Ok(TestApp {
        router,
        state,
        alice_id,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> anyhow::Result<Response<Body>> {
        Ok(self.router.clone().oneshot(req).await?)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut req = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        self.send(req.body(Body::empty())?).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        cookie: Option<&str>,
        body: serde_json::Value,
    ) -> anyhow::Result<Response<Body>> {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        self.send(req.body(Body::from(body.to_string()))?).await
    }

    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<Response<Body>> {
        self.post_json(
            "/api/login",
            None,
            serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Logs alice in and returns the `token=...` pair for a Cookie header.
    pub async fn alice_cookie(&self) -> anyhow::Result<String> {
        let resp = self.login("alice", "secret").await?;
        set_cookie(&resp).ok_or_else(|| anyhow::anyhow!("login did not set a cookie"))
    }
}

/// The `name=value` part of the response's `token` cookie.
pub fn set_cookie(resp: &Response<Body>) -> Option<String> {
    raw_set_cookie(resp).and_then(|c| c.split(';').next().map(str::to_owned))
}

pub fn raw_set_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("token="))
        .map(str::to_owned)
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

pub async fn body_json(resp: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = resp.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn body_text(resp: Response<Body>) -> anyhow::Result<String> {
    let bytes = resp.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}
