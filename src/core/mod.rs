// src/core/mod.rs
//! Configuration, backend client and fetch errors

pub mod config_manager;
pub mod error;
pub mod service_client;

pub use config_manager::{ConfigManager, ConfigOverrides};
pub use error::FetchError;
pub use service_client::{LeadSource, LeadsClient, FETCH_LEADS_ENDPOINT};
