// src/render/mod.rs
//! Terminal presentation. Everything here is a pure function of its input.

pub mod card;
pub mod confidence;
pub mod theme;
pub mod view;

pub use card::{render_card, render_skeleton_card};
pub use confidence::{badge_text, confidence_class, confidence_label, ConfidenceBand, ConfidenceClass};
pub use theme::{Style, Theme};
pub use view::{
    render_about, render_error, render_home, render_loading, render_results, render_state,
};
