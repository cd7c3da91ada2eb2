// src/types/response.rs
//! Wire types for the `/fetch-leads` backend endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel the backend uses for intent fields it could not infer.
pub const NOT_SPECIFIED: &str = "Not Specified";

// ===== Request =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchLeadsRequest {
    pub query: String,
}

impl FetchLeadsRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

// ===== Response =====

/// Structured interpretation of the free-text query, produced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchIntent {
    pub job_role: String,
    pub location: String,
    pub experience_level: String,
    pub keywords: Vec<String>,
    pub search_query: String,
}

impl SearchIntent {
    pub fn role(&self) -> Option<&str> {
        specified(&self.job_role)
    }

    pub fn location(&self) -> Option<&str> {
        specified(&self.location)
    }

    pub fn experience(&self) -> Option<&str> {
        specified(&self.experience_level)
    }
}

/// One candidate opportunity. `confidence` is a 0-100 relevance score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobLead {
    pub title: String,
    pub company: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub confidence: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub intent: SearchIntent,
    /// Relevance order as returned by the backend.
    pub leads: Vec<JobLead>,
    pub total_results: u64,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

/// A parsed response together with the query it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub response: SearchResponse,
    pub fetched_at: DateTime<Utc>,
}

fn specified(value: &str) -> Option<&str> {
    if value == NOT_SPECIFIED {
        None
    } else {
        Some(value)
    }
}
