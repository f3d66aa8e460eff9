use serde::{Deserialize, Serialize};

/// Identifier of a task, unique among live and restorable tasks
pub type TaskId = u32;

/// Titles of the example tasks every fresh session starts with
pub const SEED_TITLES: [&str; 10] = [
    "Start the design system",
    "Define a grid system",
    "Establish a visual language",
    "Curate a list of icon libraries",
    "Create a color palette",
    "Design primary UI components",
    "Develop typography guidelines",
    "Create user personas",
    "Sketch wireframes for key pages",
    "Plan user testing sessions",
];

/// A tracked task with its own stopwatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub timer_running: bool,
    /// Seconds in the current running interval
    pub elapsed_secs: u64,
    /// Seconds banked from every finished interval
    pub total_secs: u64,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            timer_running: false,
            elapsed_secs: 0,
            total_secs: 0,
        }
    }

    /// Start the stopwatch. Any unbanked elapsed time is discarded.
    pub fn start_timer(&mut self) {
        self.timer_running = true;
        self.elapsed_secs = 0;
    }

    /// Stop the stopwatch and bank the running interval
    pub fn stop_timer(&mut self) {
        self.total_secs += self.elapsed_secs;
        self.elapsed_secs = 0;
        self.timer_running = false;
    }

    /// Toggle between running and stopped
    pub fn toggle_timer(&mut self) {
        if self.timer_running {
            self.stop_timer();
        } else {
            self.start_timer();
        }
    }

    /// Clear all recorded time and stop the stopwatch
    pub fn reset_timer(&mut self) {
        self.elapsed_secs = 0;
        self.total_secs = 0;
        self.timer_running = false;
    }

    /// Advance a running stopwatch by `ticks` seconds
    pub fn tick(&mut self, ticks: u64) {
        if self.timer_running {
            self.elapsed_secs += ticks;
        }
    }

    /// Time shown for this task: banked total plus the live interval
    pub fn display_secs(&self) -> u64 {
        if self.timer_running {
            self.total_secs + self.elapsed_secs
        } else {
            self.total_secs
        }
    }

    /// Whether any time has been recorded (controls the reset affordance)
    pub fn has_time(&self) -> bool {
        self.total_secs > 0 || self.elapsed_secs > 0
    }
}

/// The ten example tasks, ids 1 through 10
pub fn seed_tasks() -> Vec<Task> {
    SEED_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| Task::new(i as TaskId + 1, *title))
        .collect()
}
