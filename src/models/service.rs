use serde::{Deserialize, Serialize};

use crate::utils::format::format_inr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i64,                     // Unique ID for the service
    pub service_name: String,
    pub price: Option<f64>,          // In rupees; None renders as "₹N/A"
    pub category: String,
    pub location: Option<String>,
    pub provider_id: i64,
    pub provider_name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub average_rating: Option<f64>, // Aggregate maintained by the review service
    pub review_count: u32,
}

impl Service {
    /// Price row text. The rupee sign renders even for an unknown price.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("₹{}", format_inr(price)),
            None => "₹N/A".to_string(),
        }
    }

    /// Header image URL, falling back to a generated placeholder card
    /// carrying the service name.
    pub fn image_or_placeholder(&self) -> String {
        match &self.image_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "https://placehold.co/600x300/10101a/a99eff?text={}",
                urlencoding::encode(&self.service_name)
            ),
        }
    }
}
