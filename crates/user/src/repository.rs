use hutbook_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

pub enum FindType {
    Id(i64),
    Username(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> hutbook_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([User::Id, User::Username, User::Password, User::IsAdmin])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Username(username) => statement.and_where(Expr::col(User::Username).eq(username)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    username: String,
    password: String,
    is_admin: bool,
) -> hutbook_shared::Result<i64> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([User::Username, User::Password, User::IsAdmin, User::CreatedAt])
        .values_panic([username.into(), password.into(), is_admin.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn set_admin(
    pool: &SqlitePool,
    id: i64,
    is_admin: bool,
) -> hutbook_shared::Result<()> {
    let statement = Query::update()
        .table(User::Table)
        .value(User::IsAdmin, is_admin)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
