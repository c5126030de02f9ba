pub mod doh;
pub mod ip_detector;
