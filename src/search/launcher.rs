// src/search/launcher.rs
//! Routes and the query launcher that turns typed text into navigation

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

pub const HOME_PATH: &str = "/";
pub const RESULTS_PATH: &str = "/results";
pub const QUERY_PARAM: &str = "q";

pub const EXAMPLE_QUERIES: [&str; 4] = [
    "I am a web developer looking for a job in Lahore",
    "Senior Python engineer seeking remote work",
    "Graphic designer with Photoshop skills in Karachi",
    "Fresh graduate looking for data analyst position",
];

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as `encodeURIComponent` does.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A client-side navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Results { query: Option<String> },
}

impl Route {
    pub fn results(query: impl Into<String>) -> Self {
        Route::Results {
            query: Some(query.into()),
        }
    }

    /// Render as a path with an encoded `q` parameter.
    pub fn to_target(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::Results { query: None } => RESULTS_PATH.to_string(),
            Route::Results { query: Some(q) } => {
                format!(
                    "{}?{}={}",
                    RESULTS_PATH,
                    QUERY_PARAM,
                    utf8_percent_encode(q, URI_COMPONENT)
                )
            }
        }
    }

    /// Parse a navigation target. Unknown paths yield `None`.
    pub fn parse(target: &str) -> Option<Self> {
        let (path, query_string) = match target.split_once('?') {
            Some((path, qs)) => (path, Some(qs)),
            None => (target, None),
        };

        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            RESULTS_PATH => Some(Route::Results {
                query: query_string.and_then(|qs| query_param(qs, QUERY_PARAM)),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_target())
    }
}

/// First value for `key`, decoded the way browsers decode form parameters.
fn query_param(query_string: &str, key: &str) -> Option<String> {
    query_string
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k) == key).then(|| decode_component(v))
        })
        .next()
}

/// Invalid UTF-8 escapes decode to U+FFFD rather than failing.
fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Home-view search box.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryLauncher;

impl QueryLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Navigation for a home-view submission. Blank text is ignored.
    pub fn submit(&self, text: &str) -> Option<Route> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Route::results(text))
    }

    /// Navigation for the results-view search box: only a non-blank query
    /// that differs from the one on screen navigates.
    pub fn resubmit(&self, current: &str, text: &str) -> Option<Route> {
        if text == current {
            return None;
        }
        self.submit(text)
    }

    pub fn examples(&self) -> &'static [&'static str] {
        &EXAMPLE_QUERIES
    }

    /// Navigation for picking an example by its 1-based number on the home view.
    pub fn example(&self, number: usize) -> Option<Route> {
        let text = EXAMPLE_QUERIES.get(number.checked_sub(1)?)?;
        self.submit(text)
    }
}
