//! Session tokens and the cookie that carries them.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::error::AppError;

pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub is_admin: bool,
    pub iat: u64,
    pub exp: u64,
}

/// The logged-in user, as carried by the session token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl From<hutbook_user::LoginUser> for AuthUser {
    fn from(user: hutbook_user::LoginUser) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token expired")]
    Expired,

    #[error("invalid subject `{0}`")]
    Subject(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// HS256 signing and verification keys derived from `auth.jwt_secret`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, lifetime_seconds: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::seconds(i64::try_from(lifetime_seconds).unwrap_or(i64::MAX)),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn sign(&self, user: &AuthUser, now: OffsetDateTime) -> Result<String, TokenError> {
        let iat = unix_seconds(now);
        let claims = Claims {
            sub: user.user_id.to_string(),
            username: user.username.to_owned(),
            is_admin: user.is_admin,
            iat,
            exp: iat.saturating_add(self.lifetime.whole_seconds().unsigned_abs()),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Checks the signature and that `exp` is still ahead of `now`.
    pub fn verify(&self, token: &str, now: OffsetDateTime) -> Result<AuthUser, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding, &validation)?.claims;

        if claims.exp <= unix_seconds(now) {
            return Err(TokenError::Expired);
        }

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::Subject(claims.sub.to_owned()))?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
            is_admin: claims.is_admin,
        })
    }
}

fn unix_seconds(at: OffsetDateTime) -> u64 {
    u64::try_from(at.unix_timestamp()).unwrap_or_default()
}

pub fn session_cookie(token: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(max_age)
        .build()
}

pub fn cleared_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .build()
}

/// Set by the auth gate; handlers behind it can rely on it being present.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
