use crate::app::AppState;
use crate::ui::styles::{
    action_style, border_style, brand_style, danger_style, disabled_style, muted_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the header lines: brand + theme switch, page title + actions, date
fn header_lines(app: &AppState, date: &str) -> Vec<Line<'static>> {
    let theme = app.theme;
    let completed = app.store.metrics().completed_tasks;

    let undo = if app.store.can_undo() {
        Span::styled("[u] Undo changes", action_style(theme))
    } else {
        Span::styled("[u] Undo changes", disabled_style(theme))
    };
    let remove = if completed > 0 {
        Span::styled(format!("[x] Remove completed ({})", completed), danger_style(theme))
    } else {
        Span::styled(format!("[x] Remove completed ({})", completed), disabled_style(theme))
    };

    vec![
        Line::from(vec![
            Span::styled("▲ Trakr", brand_style(theme)),
            Span::raw("   "),
            Span::styled(format!("[d] {}", theme.switch_symbol()), muted_style(theme)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ✎", app.page_title), title_style(theme)),
            Span::raw("   "),
            undo,
            Span::raw("  "),
            remove,
            Span::raw("  "),
            Span::styled("[a] Create new task", action_style(theme)),
        ]),
        Line::from(Span::styled(date.to_string(), muted_style(theme))),
    ]
}

/// Render the dashboard header
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%A, %B %-d, %Y").to_string();
    let paragraph = Paragraph::new(header_lines(app, &date)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border_style(app.theme)),
    );
    f.render_widget(paragraph, area);
}
