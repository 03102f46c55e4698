use std::{path::PathBuf, str::FromStr};

use hutbook_booking::CreateBookingInput;
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

pub async fn create_user(state: &hutbook_shared::State, name: &str) -> anyhow::Result<i64> {
    let cmd = hutbook_user::Command::new(state.clone());

    Ok(cmd
        .create(hutbook_user::CreateInput {
            username: name.to_owned(),
            password: "my_password".to_owned(),
            is_admin: false,
        })
        .await?)
}

pub fn input(user_id: i64, check_in: &str, check_out: &str, booking_type: &str) -> CreateBookingInput {
    CreateBookingInput {
        user_id: Some(user_id),
        check_in_date: Some(check_in.to_owned()),
        check_out_date: Some(check_out.to_owned()),
        booking_type: Some(booking_type.to_owned()),
    }
}
