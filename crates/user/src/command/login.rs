use crate::repository::{self, FindType};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Identity confirmed by a successful login, ready to be put into a session token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginUser {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl super::Command {
    /// Unknown usernames and wrong passwords fail with the same message so the
    /// response does not reveal which accounts exist.
    #[tracing::instrument(skip_all, fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> hutbook_shared::Result<LoginUser> {
        if input.username.is_empty() || input.password.is_empty() {
            hutbook_shared::user!("{INVALID_CREDENTIALS}");
        }

        let Some(user) =
            repository::find(&self.read_db, FindType::Username(input.username)).await?
        else {
            tracing::debug!("unknown username");
            crate::password::verify_dummy(&input.password);
            hutbook_shared::user!("{INVALID_CREDENTIALS}");
        };

        if !crate::password::verify_password(&input.password, &user.password)? {
            tracing::debug!(user_id = user.id, "password mismatch");
            hutbook_shared::user!("{INVALID_CREDENTIALS}");
        }

        Ok(LoginUser {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        })
    }
}
