use crate::repository;

impl super::Command {
    pub async fn set_admin(&self, id: i64, is_admin: bool) -> hutbook_shared::Result<()> {
        if self.find_by_id(id).await?.is_none() {
            hutbook_shared::not_found!();
        }

        repository::set_admin(&self.write_db, id, is_admin).await?;

        tracing::info!(user_id = id, is_admin, "user role changed");

        Ok(())
    }
}
