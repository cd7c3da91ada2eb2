// src/search/session.rs
//! Drives the result fetcher on the tokio runtime.
//!
//! Every navigation bumps the fetcher generation, aborts the request that was
//! in flight and spawns a new one. A completion is written back only while its
//! ticket is still current, so a slow answer to an old query can never replace
//! the state of a newer one. State changes are published on a `watch` channel.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;

use super::fetcher::{FetchState, Navigation, ResultFetcher, Ticket};
use super::launcher::Route;
use crate::core::{FetchError, LeadSource};
use crate::{app_log, app_span};

pub struct SearchSession<S: LeadSource> {
    source: Arc<S>,
    timeout: Option<Duration>,
    state_tx: Arc<watch::Sender<ResultFetcher>>,
    in_flight: Option<JoinHandle<()>>,
}

impl<S: LeadSource> SearchSession<S> {
    /// `timeout` of `None` waits on the backend for as long as it takes.
    pub fn new(source: S, timeout: Option<Duration>) -> Self {
        Self::with_shared_source(Arc::new(source), timeout)
    }

    pub fn with_shared_source(source: Arc<S>, timeout: Option<Duration>) -> Self {
        let (state_tx, _) = watch::channel(ResultFetcher::new());
        Self {
            source,
            timeout,
            state_tx: Arc::new(state_tx),
            in_flight: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ResultFetcher> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> FetchState {
        self.state_tx.borrow().state().clone()
    }

    pub fn backend_url(&self) -> &str {
        self.source.backend_url()
    }

    /// Follow a route change. Must be called from within a tokio runtime.
    pub fn navigate(&mut self, route: &Route) -> Navigation {
        self.abort_in_flight();

        let mut navigation = Navigation::Home;
        self.state_tx.send_modify(|fetcher| navigation = fetcher.navigate(route));

        match &navigation {
            Navigation::Fetch(ticket) => self.spawn_fetch(ticket.clone()),
            Navigation::Redirect(target) => {
                app_log!(info, "No query parameter on {}, redirecting to {}", route, target)
            }
            Navigation::Home => {}
        }
        navigation
    }

    /// Fetch the displayed query again. Returns `None` when nothing is shown.
    pub fn reload(&mut self) -> Option<Ticket> {
        self.abort_in_flight();

        let mut ticket = None;
        self.state_tx.send_modify(|fetcher| ticket = fetcher.reload());
        if let Some(ticket) = &ticket {
            app_log!(info, "Reloading results for {:?}", ticket.query);
            self.spawn_fetch(ticket.clone());
        }
        ticket
    }

    /// Wait until the current navigation leaves the loading state.
    // The watch guard must drop before `rx`, hence the binding.
    #[allow(clippy::let_and_return)]
    pub async fn settled(&self) -> FetchState {
        let mut rx = self.state_tx.subscribe();
        let state = match rx.wait_for(|fetcher| !fetcher.state().is_loading()).await {
            Ok(fetcher) => fetcher.state().clone(),
            Err(_) => self.state(),
        };
        state
    }

    fn spawn_fetch(&mut self, ticket: Ticket) {
        let source = Arc::clone(&self.source);
        let state_tx = Arc::clone(&self.state_tx);
        let timeout = self.timeout;
        let span = app_span!("fetch_leads", generation = ticket.generation, query = %ticket.query);

        let task = async move {
            let request = source.fetch_leads(&ticket.query);
            let outcome = match timeout {
                Some(limit) => tokio::time::timeout(limit, request)
                    .await
                    .unwrap_or(Err(FetchError::Timeout(limit))),
                None => request.await,
            };

            if let Err(err) = &outcome {
                app_log!(warn, "Search for {:?} failed: {}", ticket.query, err);
            }

            let applied = state_tx
                .send_if_modified(|fetcher| fetcher.complete(&ticket, outcome, source.backend_url()));
            if !applied {
                app_log!(debug, "Discarded stale response for {:?}", ticket.query);
            }
        };

        self.in_flight = Some(tokio::spawn(task.instrument(span)));
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl<S: LeadSource> Drop for SearchSession<S> {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
