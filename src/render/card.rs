// src/render/card.rs
use super::confidence::{badge_text, confidence_class};
use super::theme::{Style, Theme, SKELETON_BARS};
use crate::types::JobLead;
use crate::utils::{clamp_lines, clean_text, truncate};

pub const CARD_WIDTH: usize = 72;
const DESCRIPTION_LINES: usize = 3;
const SOURCE_WIDTH: usize = 24;

/// Marker printed on the action line of every rendered card.
pub const APPLY_LABEL: &str = "Apply Now";

/// Render one lead as a bordered card.
pub fn render_card(lead: &JobLead, theme: Theme) -> String {
    let inner = CARD_WIDTH - 4;
    let border = theme.paint(Style::Muted, "│");
    let mut lines = Vec::new();

    lines.push(theme.paint(Style::Muted, &format!("┌{}", "─".repeat(CARD_WIDTH - 1))));
    lines.push(format!(
        "{} {}",
        border,
        theme.paint(Style::Heading, &truncate(&clean_text(&lead.title), inner))
    ));
    lines.push(format!(
        "{} {}",
        border,
        theme.paint(Style::Accent, &truncate(&clean_text(&lead.company), inner))
    ));
    lines.push(format!(
        "{} {}",
        border,
        theme.paint(
            confidence_class(lead.confidence).style(),
            &format!("[{}]", badge_text(lead.confidence))
        )
    ));

    let description = clamp_lines(&clean_text(&lead.description), inner, DESCRIPTION_LINES);
    if !description.is_empty() {
        lines.push(border.clone());
        for line in description {
            lines.push(format!("{} {}", border, theme.paint(Style::Muted, &line)));
        }
    }

    lines.push(border.clone());
    lines.push(format!(
        "{} {}  {} → {}",
        border,
        theme.paint(Style::Muted, &format!("⛓ {}", truncate(&lead.source, SOURCE_WIDTH))),
        theme.paint(Style::Accent, APPLY_LABEL),
        lead.url
    ));
    lines.push(theme.paint(Style::Muted, &format!("└{}", "─".repeat(CARD_WIDTH - 1))));

    lines.join("\n")
}

/// Placeholder card shown while a search is loading.
pub fn render_skeleton_card(theme: Theme) -> String {
    let border = theme.paint(Style::Muted, "│");
    let bar = |width: usize| theme.paint(Style::Skeleton, &"▒".repeat(width));
    let [title, company, desc_a, desc_b, desc_c, footer] = SKELETON_BARS;

    [
        theme.paint(Style::Muted, &format!("┌{}", "─".repeat(CARD_WIDTH - 1))),
        format!("{} {}", border, bar(title)),
        format!("{} {}", border, bar(company)),
        border.clone(),
        format!("{} {}", border, bar(desc_a)),
        format!("{} {}", border, bar(desc_b)),
        format!("{} {}", border, bar(desc_c)),
        border.clone(),
        format!("{} {}", border, bar(footer)),
        theme.paint(Style::Muted, &format!("└{}", "─".repeat(CARD_WIDTH - 1))),
    ]
    .join("\n")
}
