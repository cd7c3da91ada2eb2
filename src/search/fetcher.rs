// src/search/fetcher.rs
//! Request lifecycle of the results view

use chrono::Utc;

use super::launcher::Route;
use crate::core::FetchError;
use crate::types::{SearchResponse, SearchResults};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading { query: String },
    Success(SearchResults),
    Error { query: String, message: String },
}

impl FetchState {
    /// Query the state belongs to, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            FetchState::Idle => None,
            FetchState::Loading { query } | FetchState::Error { query, .. } => Some(query),
            FetchState::Success(results) => Some(&results.query),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Error { .. })
    }
}

/// What a navigation asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// No usable query parameter; go back to the launcher.
    Redirect(Route),
    /// Start a fetch tagged with `ticket`.
    Fetch(Ticket),
    /// The launcher itself is showing; nothing to fetch.
    Home,
}

/// Identity of one fetch. A completion only applies while its ticket is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub query: String,
}

/// The fetch state plus the generation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultFetcher {
    generation: u64,
    state: FetchState,
}

impl Default for ResultFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFetcher {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Observe a route change. Any navigation invalidates outstanding tickets.
    pub fn navigate(&mut self, route: &Route) -> Navigation {
        self.generation += 1;

        match route {
            Route::Home => {
                self.state = FetchState::Idle;
                Navigation::Home
            }
            Route::Results { query } => match query.as_deref() {
                Some(q) if !q.trim().is_empty() => {
                    self.state = FetchState::Loading {
                        query: q.to_string(),
                    };
                    Navigation::Fetch(Ticket {
                        generation: self.generation,
                        query: q.to_string(),
                    })
                }
                _ => {
                    self.state = FetchState::Idle;
                    Navigation::Redirect(Route::Home)
                }
            },
        }
    }

    /// Re-run the fetch for the query currently on screen.
    pub fn reload(&mut self) -> Option<Ticket> {
        let query = self.state.query()?.to_string();
        match self.navigate(&Route::results(query)) {
            Navigation::Fetch(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Apply a finished fetch. Returns `false` and leaves the state alone when
    /// the ticket has been superseded.
    pub fn complete(
        &mut self,
        ticket: &Ticket,
        outcome: Result<SearchResponse, FetchError>,
        backend_url: &str,
    ) -> bool {
        if ticket.generation != self.generation || !self.state.is_loading() {
            return false;
        }

        self.state = match outcome {
            Ok(response) => FetchState::Success(SearchResults {
                query: ticket.query.clone(),
                response,
                fetched_at: Utc::now(),
            }),
            Err(err) => FetchState::Error {
                query: ticket.query.clone(),
                message: err.user_message(backend_url),
            },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchIntent;

    const BACKEND: &str = "http://localhost:8000";

    fn response(total: u64) -> SearchResponse {
        SearchResponse {
            intent: SearchIntent {
                job_role: "Engineer".into(),
                location: "Remote".into(),
                experience_level: "Senior".into(),
                keywords: vec![],
                search_query: "engineer".into(),
            },
            leads: vec![],
            total_results: total,
        }
    }

    fn ticket_for(nav: Navigation) -> Ticket {
        match nav {
            Navigation::Fetch(ticket) => ticket,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_or_blank_parameter_redirects() {
        let mut fetcher = ResultFetcher::new();
        for route in [
            Route::Results { query: None },
            Route::results(""),
            Route::results("   "),
        ] {
            assert_eq!(fetcher.navigate(&route), Navigation::Redirect(Route::Home));
            assert_eq!(fetcher.state(), &FetchState::Idle);
        }
    }

    #[test]
    fn test_loading_then_success() {
        let mut fetcher = ResultFetcher::new();
        let ticket = ticket_for(fetcher.navigate(&Route::results("rust")));
        assert!(fetcher.state().is_loading());

        assert!(fetcher.complete(&ticket, Ok(response(3)), BACKEND));
        match fetcher.state() {
            FetchState::Success(results) => {
                assert_eq!(results.query, "rust");
                assert_eq!(results.response.total_results, 3);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_loading_then_error_carries_message() {
        let mut fetcher = ResultFetcher::new();
        let ticket = ticket_for(fetcher.navigate(&Route::results("rust")));
        assert!(fetcher.complete(&ticket, Err(FetchError::Status(503)), BACKEND));
        match fetcher.state() {
            FetchState::Error { query, message } => {
                assert_eq!(query, "rust");
                assert!(message.contains(BACKEND));
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut fetcher = ResultFetcher::new();
        let first = ticket_for(fetcher.navigate(&Route::results("first")));
        let second = ticket_for(fetcher.navigate(&Route::results("second")));

        assert!(!fetcher.complete(&first, Ok(response(1)), BACKEND));
        assert_eq!(
            fetcher.state(),
            &FetchState::Loading {
                query: "second".into()
            }
        );

        assert!(fetcher.complete(&second, Ok(response(2)), BACKEND));
        assert!(!fetcher.complete(&first, Err(FetchError::Status(500)), BACKEND));
        assert_eq!(fetcher.state().query(), Some("second"));
        assert!(matches!(fetcher.state(), FetchState::Success(_)));
    }

    #[test]
    fn test_completion_after_leaving_results_is_discarded() {
        let mut fetcher = ResultFetcher::new();
        let ticket = ticket_for(fetcher.navigate(&Route::results("rust")));
        assert_eq!(fetcher.navigate(&Route::Home), Navigation::Home);
        assert!(!fetcher.complete(&ticket, Ok(response(1)), BACKEND));
        assert_eq!(fetcher.state(), &FetchState::Idle);
    }

    #[test]
    fn test_reload_reenters_loading_for_same_query() {
        let mut fetcher = ResultFetcher::new();
        let ticket = ticket_for(fetcher.navigate(&Route::results("rust")));
        fetcher.complete(&ticket, Err(FetchError::Transport("refused".into())), BACKEND);

        let retry = fetcher.reload().expect("error state can be reloaded");
        assert_eq!(retry.query, "rust");
        assert!(retry.generation > ticket.generation);
        assert!(fetcher.state().is_loading());

        let mut idle = ResultFetcher::new();
        assert_eq!(idle.reload(), None);
    }
}
