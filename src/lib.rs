//! Terminal client for the TalentBridge job lead aggregator.
//!
//! A free-text query goes through the [`search::QueryLauncher`], becomes a
//! `/results?q=...` route and is fetched from the backend by a
//! [`search::SearchSession`]. The [`render`] module turns each state into a
//! terminal view.

pub mod cli;
pub mod core;
pub mod logging;
pub mod render;
pub mod search;
pub mod types;
pub mod utils;

pub use crate::core::{ConfigManager, FetchError, LeadSource, LeadsClient};
pub use search::{FetchState, QueryLauncher, Route, SearchSession};
pub use types::{JobLead, SearchIntent, SearchResponse};
