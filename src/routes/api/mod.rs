pub mod bookings;
pub mod login;
pub mod logout;
pub mod user;
