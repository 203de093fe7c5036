use crate::models::booking::Booking;
use crate::models::service::Service;

/// Unsaved rating + comment held by the modal before submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: u8, // 0 = nothing selected yet, valid range 1..=5
    pub comment: String,
}

/// Identifies what a submitted review is about.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewTarget {
    pub booking_id: Option<i64>,
    pub service_id: i64,
    pub provider_id: i64,
}

impl ReviewTarget {
    pub fn for_booking(service: &Service, booking: Option<&Booking>) -> Self {
        Self {
            booking_id: booking.map(|b| b.id),
            service_id: service.id,
            provider_id: service.provider_id,
        }
    }
}
