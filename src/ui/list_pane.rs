use crate::app::AppState;
use crate::domain::{checkbox, format_hms, timer_badge, Task, Theme};
use crate::ui::styles::{
    border_style, card_style, default_style, done_style, muted_style, running_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the task list
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let editing = app.store.editing();

    let items: Vec<ListItem> = app
        .store
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let lines = create_task_lines(task, theme);
            let style = if idx == app.selected_index && editing != Some(task.id) {
                selected_style(theme)
            } else {
                default_style(theme)
            };
            ListItem::new(lines).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.store.tasks().len());
    let list = List::new(items).style(card_style(theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(title, title_style(theme))),
    );

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Lines for one task.
/// Format: [x] Write proposal   00:12:31  ⏸ pause  ↺
///             Total time: 00:12:31
fn create_task_lines(task: &Task, theme: Theme) -> Vec<Line<'static>> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!(" {} ", checkbox(task.completed))));

    let name_style = if task.completed {
        done_style(theme)
    } else {
        default_style(theme)
    };
    spans.push(Span::styled(task.title.clone(), name_style));
    spans.push(Span::raw("   "));

    spans.push(Span::styled(format_hms(task.display_secs()), muted_style(theme)));
    spans.push(Span::raw("  "));

    let badge_style = if task.timer_running {
        running_style(theme)
    } else {
        muted_style(theme)
    };
    spans.push(Span::styled(timer_badge(task).to_string(), badge_style));

    // Reset is only offered once there is time to clear
    if task.has_time() {
        spans.push(Span::styled("  ↺ reset".to_string(), muted_style(theme)));
    }

    let mut lines = vec![Line::from(spans)];
    if !task.timer_running && task.total_secs > 0 {
        lines.push(Line::from(Span::styled(
            format!("     Total time: {}", format_hms(task.total_secs)),
            muted_style(theme),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_fresh_task_line() {
        let task = Task::new(1, "Test task");
        let lines = text(&create_task_lines(&task, Theme::Light));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ ] Test task"));
        assert!(lines[0].contains("00:00:00"));
        assert!(lines[0].contains("▶ start"));
        assert!(!lines[0].contains("reset"));
    }

    #[test]
    fn test_stopped_task_shows_total() {
        let mut task = Task::new(1, "Timed");
        task.total_secs = 75;
        task.completed = true;
        let lines = text(&create_task_lines(&task, Theme::Dark));

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[x] Timed"));
        assert!(lines[0].contains("00:01:15"));
        assert!(lines[0].contains("reset"));
        assert_eq!(lines[1].trim(), "Total time: 00:01:15");
    }

    #[test]
    fn test_running_task_hides_total_line() {
        let mut task = Task::new(1, "Running");
        task.total_secs = 60;
        task.start_timer();
        task.tick(5);
        let lines = text(&create_task_lines(&task, Theme::Light));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("00:01:05"));
        assert!(lines[0].contains("⏸ pause"));
    }
}
