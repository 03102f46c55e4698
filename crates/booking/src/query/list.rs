use hutbook_db::table::{Booking as BookingTable, User};
use hutbook_shared::{Day, booking::BookingType};
use sea_query::{Expr, ExprTrait, JoinType, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Text};

use crate::Booking;

#[derive(Debug, FromRow)]
struct BookingRow {
    id: i64,
    user_id: i64,
    username: Option<String>,
    check_in_date: Text<Day>,
    check_out_date: Text<Day>,
    booking_type: Text<BookingType>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            username: row.username,
            check_in_date: row.check_in_date.0,
            check_out_date: row.check_out_date.0,
            booking_type: row.booking_type.0,
        }
    }
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .column((BookingTable::Table, BookingTable::Id))
        .column((BookingTable::Table, BookingTable::UserId))
        .column((User::Table, User::Username))
        .column((BookingTable::Table, BookingTable::CheckInDate))
        .column((BookingTable::Table, BookingTable::CheckOutDate))
        .column((BookingTable::Table, BookingTable::BookingType))
        .from(BookingTable::Table)
        .join(
            JoinType::LeftJoin,
            User::Table,
            Expr::col((User::Table, User::Id)).equals((BookingTable::Table, BookingTable::UserId)),
        )
        .order_by((BookingTable::Table, BookingTable::CheckInDate), Order::Asc)
        .order_by((BookingTable::Table, BookingTable::Id), Order::Asc)
        .to_owned()
}

impl super::Query {
    /// Bookings whose departure is today or later, earliest arrival first.
    pub async fn list_upcoming(&self, today: Day) -> hutbook_shared::Result<Vec<Booking>> {
        let statement = select()
            .and_where(
                Expr::col((BookingTable::Table, BookingTable::CheckOutDate)).gte(today.to_string()),
            )
            .to_owned();

        self.fetch_all(statement).await
    }

    /// Bookings touching the closed range `[from, until]`.
    pub async fn list_range(&self, from: Day, until: Day) -> hutbook_shared::Result<Vec<Booking>> {
        let statement = select()
            .and_where(
                Expr::col((BookingTable::Table, BookingTable::CheckOutDate)).gte(from.to_string()),
            )
            .and_where(
                Expr::col((BookingTable::Table, BookingTable::CheckInDate)).lte(until.to_string()),
            )
            .to_owned();

        self.fetch_all(statement).await
    }

    pub async fn find(&self, id: i64) -> hutbook_shared::Result<Option<Booking>> {
        let statement = select()
            .and_where(Expr::col((BookingTable::Table, BookingTable::Id)).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, BookingRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn fetch_all(&self, statement: SelectStatement) -> hutbook_shared::Result<Vec<Booking>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, BookingRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
