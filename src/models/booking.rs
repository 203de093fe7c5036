use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed transaction linking the user to a service, eligible for
/// review.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub completed_on: NaiveDate,
}
