use crate::app::AppState;
use crate::ui::styles::{card_style, CONFETTI_COLORS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONFETTI_GLYPHS: [&str; 6] = ["*", "•", "✦", "+", "o", "~"];

/// One row of falling confetti for a given animation frame.
/// Pieces drift down one row per frame; a cell holds a piece when its
/// hash lands on zero.
fn confetti_row(width: usize, row: usize, frame: u32) -> Vec<(usize, &'static str)> {
    let fall = frame as usize;
    (0..width)
        .filter_map(|col| {
            let seed = col * 7 + (row + CONFETTI_GLYPHS.len() * 4 - fall % (CONFETTI_GLYPHS.len() * 4)) * 13;
            (seed % 5 == 0).then(|| (col, CONFETTI_GLYPHS[(col + row) % CONFETTI_GLYPHS.len()]))
        })
        .collect()
}

fn confetti_line(width: usize, row: usize, frame: u32) -> Line<'static> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for (col, glyph) in confetti_row(width, row, frame) {
        if col > cursor {
            spans.push(Span::raw(" ".repeat(col - cursor)));
        }
        let color = CONFETTI_COLORS[(col + frame as usize) % CONFETTI_COLORS.len()];
        spans.push(Span::styled(glyph, Style::default().fg(color)));
        cursor = col + 1;
    }
    Line::from(spans)
}

/// Render the celebration banner shown after a task is checked off
pub fn render_celebration_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let width = area.width as usize;
    let lines = vec![
        confetti_line(width, 0, app.animation_frame),
        Line::from(Span::styled(
            "🎉 Task complete! 🎉",
            card_style(app.theme).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        confetti_line(width, 2, app.animation_frame),
    ];

    let paragraph = Paragraph::new(lines).style(card_style(app.theme));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_stays_in_bounds() {
        for frame in 0..30 {
            let row = confetti_row(40, 0, frame);
            assert!(!row.is_empty());
            assert!(row.iter().all(|(col, _)| *col < 40));
        }
    }

    #[test]
    fn test_confetti_moves_between_frames() {
        assert_ne!(confetti_row(40, 0, 0), confetti_row(40, 0, 1));
    }
}
