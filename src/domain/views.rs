use super::task::Task;
use serde::Serialize;

/// Dashboard figures derived from the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_time_secs: u64,
}

impl Metrics {
    /// Recompute from scratch. Nothing here is cached between calls.
    pub fn compute(tasks: &[Task]) -> Self {
        Self {
            total_tasks: tasks.len(),
            completed_tasks: tasks.iter().filter(|t| t.completed).count(),
            total_time_secs: tasks.iter().map(Task::display_secs).sum(),
        }
    }
}

/// Format seconds as zero-padded HH:MM:SS (hours keep growing past 99)
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Checkbox glyph for a task row
pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Timer badge text
pub fn timer_badge(task: &Task) -> &'static str {
    if task.timer_running {
        "⏸ pause"
    } else {
        "▶ start"
    }
}
