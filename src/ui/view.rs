//! Pure projection of the session state to display lines.
//!
//! Everything the operator reads in the result pane is produced here, with
//! no side effects and no terminal handle, so the full rendering contract
//! is unit-testable: summary text verbatim, explicit indicators for empty
//! match/evidence lists, positional fallback ids, and the
//! `ingest_time`-over-`timestamp` preference.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::api::{AnalysisResponse, EvidenceItem};
use crate::session::{AnalysisPhase, SessionState};
use crate::ui::theme::{SECTION_TITLE, STATUS_BUSY, STATUS_ERROR};

/// Shown instead of an empty match list.
pub const NO_MATCHES: &str = "No MITRE technique matches.";

/// Shown instead of an empty evidence list. The hint matters: an empty
/// retrieval index looks identical to a miss.
pub const NO_EVIDENCE: &str = "No related evidence (the retrieval index may be empty).";

/// Hint shown before the first submission.
pub const IDLE_HINT: &str = "Paste a suspicious log snippet, then press Ctrl+A to analyze.";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the result pane for the current session state.
pub fn result_lines(state: &SessionState) -> Vec<Line<'static>> {
    match &state.phase {
        AnalysisPhase::Idle => vec![Line::styled(
            IDLE_HINT,
            Style::default().add_modifier(Modifier::DIM),
        )],

        AnalysisPhase::Busy { animation_tick } => {
            let frame = SPINNER_FRAMES[*animation_tick as usize % SPINNER_FRAMES.len()];
            vec![Line::styled(
                format!("{frame} Analyzing…"),
                Style::default().fg(STATUS_BUSY),
            )]
        }

        AnalysisPhase::Failure { message } => vec![Line::styled(
            format!("Error: {message}"),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )],

        AnalysisPhase::Success(response) => success_lines(response),
    }
}

fn success_lines(response: &AnalysisResponse) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(section("Summary"));
    // Verbatim, embedded newlines preserved as line breaks.
    for text in response.summary.lines() {
        lines.push(Line::from(text.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(section("MITRE Matches"));
    if response.mitre_matches.is_empty() {
        lines.push(dim(NO_MATCHES));
    } else {
        for m in &response.mitre_matches {
            lines.push(Line::from(format!(
                "{} {} [{}] — {}",
                m.technique_id, m.name, m.tactic, m.evidence
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("Related Evidence"));
    if response.evidence.is_empty() {
        lines.push(dim(NO_EVIDENCE));
    } else {
        for (index, item) in response.evidence.iter().enumerate() {
            lines.push(Line::from(evidence_heading(item, index)));
            lines.push(dim(evidence_details(item)));
        }
    }

    lines
}

fn evidence_heading(item: &EvidenceItem, index: usize) -> String {
    match item.metadata.event_type.as_deref() {
        Some(event_type) if !event_type.is_empty() => {
            format!("{}. [{}] {}", item.display_id(index), event_type, item.text)
        }
        _ => format!("{}. {}", item.display_id(index), item.text),
    }
}

/// Secondary line: source, preferred timestamp, hash. Absent fields render
/// empty rather than erroring or being skipped.
fn evidence_details(item: &EvidenceItem) -> String {
    format!(
        "   {}  {}  {}",
        item.metadata.source.as_deref().unwrap_or(""),
        item.metadata.display_timestamp(),
        item.metadata.hash.as_deref().unwrap_or(""),
    )
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default().fg(SECTION_TITLE).add_modifier(Modifier::BOLD),
    )
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), Style::default().add_modifier(Modifier::DIM))
}
