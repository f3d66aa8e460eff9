use crate::app::AppState;
use crate::domain::{format_hms, Metrics};
use crate::ui::styles::{border_style, card_style, metric_accent_style, metric_value_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label, icon and value of each card, left to right
fn cards(metrics: &Metrics) -> [(&'static str, &'static str, String); 3] {
    [
        ("Total Tasks", "⌂", metrics.total_tasks.to_string()),
        ("Completed Tasks", "✓", metrics.completed_tasks.to_string()),
        ("Total Time", "◷", format_hms(metrics.total_time_secs)),
    ]
}

/// Render the three metric cards
pub fn render_metrics(f: &mut Frame, app: &AppState, areas: &[Rect; 3]) {
    let theme = app.theme;
    let metrics = app.store.metrics();

    for (index, ((label, icon, value), area)) in cards(&metrics).into_iter().zip(areas).enumerate() {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", icon), metric_accent_style(theme, index)),
            Span::raw(format!("{} ", label)),
        ]);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", value),
            metric_value_style(theme),
        )))
        .style(card_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(theme))
                .title(title),
        );
        f.render_widget(paragraph, *area);
    }
}
