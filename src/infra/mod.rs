//! Outbound service clients and start-up configuration.

pub mod attom;
pub mod config;
pub mod geocode;
pub mod http;
pub mod places;
pub mod sheets;
