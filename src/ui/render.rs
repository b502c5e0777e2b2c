//! Frame composition.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_BUSY};
use crate::ui::view;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.session();

    let header = Line::from(vec![
        Span::styled(
            " Incident Response Analysis Console",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  v{VERSION}"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), regions.header);

    let input_title = if state.is_busy() {
        Span::styled(" Log snippet (analyzing…) ", Style::default().fg(STATUS_BUSY))
    } else {
        Span::styled(" Log snippet ", Style::default().fg(HEADER_TEXT))
    };
    let input = Paragraph::new(state.input.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(input_title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(input, regions.input);

    let results = Paragraph::new(Text::from(view::result_lines(state)))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Analysis ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(results, regions.results);

    // While busy the submit hint is dropped rather than greyed: the guard
    // already ignores the key, the footer just should not advertise it.
    let hints = if state.is_busy() {
        " Ctrl+L: Clear │ Ctrl+Q: Quit"
    } else {
        " Ctrl+A: Analyze │ Ctrl+L: Clear │ Ctrl+Q: Quit"
    };
    let footer = Paragraph::new(Span::styled(
        hints,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Left);
    frame.render_widget(footer, regions.footer);
}
