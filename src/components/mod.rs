pub mod icons;
pub mod service_detail_modal;
pub mod star_rating;
