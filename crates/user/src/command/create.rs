use validator::Validate;

use crate::repository::{self, FindType};

#[derive(Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub is_admin: bool,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(username = %input.username))]
    pub async fn create(&self, input: CreateInput) -> hutbook_shared::Result<i64> {
        input.validate()?;

        if repository::find(&self.read_db, FindType::Username(input.username.to_owned()))
            .await?
            .is_some()
        {
            hutbook_shared::user!("Username already taken");
        }

        let password = crate::password::hash_password(&input.password)?;
        let id = repository::create(&self.write_db, input.username, password, input.is_admin)
            .await?;

        tracing::info!(user_id = id, "user created");

        Ok(id)
    }
}
