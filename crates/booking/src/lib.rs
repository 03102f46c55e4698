pub mod availability;
pub mod calendar;
mod command;
mod query;
mod types;

pub use availability::{DayKind, DayState, day_state};
pub use command::*;
pub use query::*;
pub use types::*;
