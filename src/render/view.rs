// src/render/view.rs
//! Whole-screen views for each state of the search flow

use std::time::Duration;

use super::card::{render_card, render_skeleton_card};
use super::theme::{pulse_frame, Style, Theme, SKELETON_CARDS};
use crate::search::{FetchState, EXAMPLE_QUERIES};
use crate::types::{SearchIntent, SearchResults};

pub const BRAND: &str = "TalentBridge";
pub const MAX_KEYWORDS: usize = 8;

pub const ERROR_TITLE: &str = "Connection Error";
pub const EMPTY_TITLE: &str = "No results found";
const EMPTY_HINT: &str =
    "Try adjusting your search or being more specific about the role and location.";
const RETRY_HINT: &str = "Type :retry to try again, or enter a new search.";

pub fn render_home(theme: Theme) -> String {
    let mut out = vec![
        theme.paint(Style::Brand, BRAND),
        String::new(),
        format!(
            "{}{}{}",
            theme.paint(Style::Heading, "Your skills are "),
            theme.paint(Style::Brand, "ready"),
            theme.paint(Style::Heading, ".")
        ),
        theme.paint(Style::Muted, "Your opportunity is missing."),
        theme.paint(
            Style::Muted,
            "Tell us what you do, and we'll find who needs you.",
        ),
        String::new(),
        theme.paint(Style::Muted, "Try an example:"),
    ];
    out.extend(
        EXAMPLE_QUERIES
            .iter()
            .enumerate()
            .map(|(i, example)| format!("  {}. {}", i + 1, example)),
    );
    out.push(theme.paint(Style::Muted, "Type :example N to run one."));
    out.push(String::new());
    out.push(theme.paint(
        Style::Muted,
        "Powered by AI • Aggregating opportunities from across the web",
    ));
    out.join("\n")
}

pub fn render_about(theme: Theme) -> String {
    [
        theme.paint(Style::Heading, &format!("About {}", BRAND)),
        String::new(),
        format!(
            "{} is a natural language job aggregator. It uses AI to understand your skills",
            BRAND
        ),
        "and preferences, then searches across multiple job boards to find opportunities"
            .to_string(),
        "that match your profile.".to_string(),
    ]
    .join("\n")
}

/// Loading view. `location` is the last known location, if any.
pub fn render_loading(location: Option<&str>, elapsed: Duration, theme: Theme) -> String {
    let subtitle = match location {
        Some(place) => format!("Scouting the web for opportunities in {}...", place),
        None => "Searching across job boards and company pages...".to_string(),
    };

    let mut out = vec![
        pulse_frame(theme, elapsed),
        theme.paint(Style::Heading, "Analyzing your request..."),
        theme.paint(Style::Muted, &subtitle),
        String::new(),
    ];
    out.extend((0..SKELETON_CARDS).map(|_| render_skeleton_card(theme)));
    out.join("\n")
}

pub fn render_error(message: &str, theme: Theme) -> String {
    [
        theme.paint(Style::Error, ERROR_TITLE),
        theme.paint(Style::Muted, message),
        String::new(),
        RETRY_HINT.to_string(),
    ]
    .join("\n")
}

fn render_intent(intent: &SearchIntent, theme: Theme) -> Vec<String> {
    let mut out = Vec::new();

    let tags: Vec<String> = [
        (intent.role(), Style::Role, "role"),
        (intent.location(), Style::Location, "location"),
        (intent.experience(), Style::Experience, "experience"),
    ]
    .into_iter()
    .filter_map(|(value, style, kind)| {
        value.map(|v| theme.paint(style, &format!("[{}: {}]", kind, v)))
    })
    .collect();
    if !tags.is_empty() {
        out.push(tags.join(" "));
    }

    if !intent.keywords.is_empty() {
        let skills: Vec<&str> = intent
            .keywords
            .iter()
            .take(MAX_KEYWORDS)
            .map(String::as_str)
            .collect();
        out.push(format!(
            "{} {}",
            theme.paint(Style::Muted, "Skills:"),
            skills.join(", ")
        ));
    }
    out
}

pub fn render_results(results: &SearchResults, theme: Theme) -> String {
    let response = &results.response;
    let mut out = vec![format!(
        "{} {} {}",
        theme.paint(Style::Heading, "Found"),
        theme.paint(Style::Brand, &response.total_results.to_string()),
        theme.paint(Style::Heading, "opportunities"),
    )];
    out.extend(render_intent(&response.intent, theme));
    out.push(String::new());

    if response.leads.is_empty() {
        out.push(theme.paint(Style::Heading, EMPTY_TITLE));
        out.push(theme.paint(Style::Muted, EMPTY_HINT));
    } else {
        out.extend(response.leads.iter().map(|lead| render_card(lead, theme)));
    }

    out.push(String::new());
    out.push(theme.paint(
        Style::Muted,
        &format!(
            "Results aggregated in real-time • fetched {}",
            results.fetched_at.format("%H:%M:%S UTC")
        ),
    ));
    out.join("\n")
}

/// Render whatever the session currently holds.
pub fn render_state(state: &FetchState, last_location: Option<&str>, theme: Theme) -> String {
    match state {
        FetchState::Idle => render_home(theme),
        FetchState::Loading { .. } => render_loading(last_location, Duration::ZERO, theme),
        FetchState::Error { message, .. } => render_error(message, theme),
        FetchState::Success(results) => render_results(results, theme),
    }
}
