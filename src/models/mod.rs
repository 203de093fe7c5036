pub mod booking;
pub mod review;
pub mod service;
