use std::ops::Deref;

use crate::repository::{self, FindType, UserRow};

mod create;
mod login;
mod set_role;

pub use create::CreateInput;
pub use login::{LoginInput, LoginUser};

#[derive(Clone)]
pub struct Command(pub hutbook_shared::State);

impl Deref for Command {
    type Target = hutbook_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: hutbook_shared::State) -> Self {
        Self(state)
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> hutbook_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, FindType::Username(username.into())).await
    }

    pub async fn find_by_id(&self, id: i64) -> hutbook_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, FindType::Id(id)).await
    }
}
