use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Role {
    User,
    Admin,
}

pub async fn create_user(
    config: crate::config::Config,
    username: String,
    password: String,
    admin: bool,
) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    let command = hutbook_user::Command::new(hutbook_shared::State::single(pool.clone()));

    let id = command
        .create(hutbook_user::CreateInput {
            username: username.to_owned(),
            password,
            is_admin: admin,
        })
        .await?;

    tracing::info!(user_id = id, "{username} created");
    pool.close().await;

    Ok(())
}

pub async fn set_role(
    config: crate::config::Config,
    username: String,
    role: Role,
) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let command = hutbook_user::Command::new(hutbook_shared::State::single(pool.clone()));

    let Some(user) = command.find_by_username(&username).await? else {
        tracing::error!("user {username} not found");
        return Ok(());
    };

    command.set_admin(user.id, role == Role::Admin).await?;

    tracing::info!("{username} is now {role:?}");
    pool.close().await;

    Ok(())
}
