use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Username,
    Password,
    IsAdmin,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Booking {
    Table,
    Id,
    UserId,
    CheckInDate,
    CheckOutDate,
    BookingType,
    CreatedAt,
}
