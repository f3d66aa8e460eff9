use crate::domain::Theme;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, theme: Theme) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Space done   "),
        Span::raw("Enter start/stop   "),
        Span::raw("r reset   "),
        Span::raw("e edit   "),
        Span::raw("a add   "),
        Span::raw("t title   "),
        Span::raw("x remove done   "),
        Span::raw("u undo   "),
        Span::raw("d theme   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style(theme));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_keybindings() {
        let backend = TestBackend::new(160, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_keybindings(f, f.size(), Theme::Light))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.width)
            .map(|x| buffer.get(x, 0).symbol().to_string())
            .collect();
        assert!(text.contains("Space done"));
        assert!(text.contains("u undo"));
        assert!(text.contains("q quit"));
    }
}
