// src/search/mod.rs
pub mod fetcher;
pub mod launcher;
pub mod session;

pub use fetcher::{FetchState, Navigation, ResultFetcher, Ticket};
pub use launcher::{QueryLauncher, Route, EXAMPLE_QUERIES, QUERY_PARAM};
pub use session::SearchSession;
