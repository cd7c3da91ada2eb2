// src/types/mod.rs
pub mod response;

pub use response::{
    FetchLeadsRequest, JobLead, SearchIntent, SearchResponse, SearchResults, NOT_SPECIFIED,
};
