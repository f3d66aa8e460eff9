use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Prompt title and placeholder for the current mode
fn prompt_labels(mode: UiMode) -> Option<(&'static str, &'static str)> {
    match mode {
        UiMode::AddingTask => Some((" Create new task ", "Enter task name")),
        UiMode::EditingTask => Some((" Edit task ", "Task name")),
        UiMode::EditingTitle => Some((" Page title ", "Page title")),
        UiMode::Normal => None,
    }
}

/// Render the text prompt for adding/renaming
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some((title_text, placeholder)) = prompt_labels(app.ui_mode) else {
        return;
    };
    let theme = app.theme;
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let value = if app.input.is_empty() {
        Span::styled(placeholder, hint_style(theme))
    } else {
        Span::styled(app.input.as_str(), modal_title_style(theme))
    };

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("> "),
            value,
            Span::styled("█", modal_title_style(theme)), // Cursor
        ]),
        Line::raw(""),
        Line::styled("Enter to save  ·  Esc to cancel", hint_style(theme)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style(theme)))
                .style(modal_bg_style(theme)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
