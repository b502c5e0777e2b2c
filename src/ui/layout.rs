use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        input: chunks[1],
        results: chunks[2],
        footer: chunks[3],
    }
}
