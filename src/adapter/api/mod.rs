//! # API Adapter
//!
//! HTTP-контракт и клиент

pub mod client;
pub mod models;
