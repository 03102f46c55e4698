use std::{path::PathBuf, str::FromStr};

use hutbook_user::CreateInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<hutbook_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    hutbook_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(hutbook_shared::State::single(pool))
}

#[allow(dead_code)]
pub async fn create_user(
    cmd: &hutbook_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<i64> {
    Ok(cmd
        .create(CreateInput {
            username: name.into(),
            password: "my_password".to_owned(),
            is_admin: false,
        })
        .await?)
}
