use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// `fixed` is a confirmed stay, `reservation` a tentative one. Both block the
/// calendar the same way.
#[derive(
    EnumString,
    VariantArray,
    Display,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    #[default]
    Fixed,
    Reservation,
}

impl BookingType {
    pub fn label(&self) -> &'static str {
        match self {
            BookingType::Fixed => "Fixe Buchung",
            BookingType::Reservation => "Reservierung",
        }
    }
}
