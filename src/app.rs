use crate::config::Settings;
use crate::domain::{Task, TaskId, Theme, UiMode};
use crate::notifications;
use crate::store::{StoreResult, TaskStore};
use crate::ticker::Ticker;
use std::time::{Duration, Instant};
use tracing::debug;

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input: String, // Text being typed in the active prompt
    pub page_title: String,
    pub theme: Theme,
    pub notify_on_complete: bool,

    // Celebration window, measured on the wall clock from the moment of completion
    pub celebration_secs: u64,
    pub celebration_until: Option<Instant>,

    // Animation frame counter for the confetti (increments every loop pass)
    pub animation_frame: u32,
}

impl AppState {
    pub fn new(store: TaskStore, settings: &Settings) -> Self {
        Self {
            store,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input: String::new(),
            page_title: settings.page_title.clone(),
            theme: settings.theme,
            notify_on_complete: settings.notify_on_complete,
            celebration_secs: settings.celebration_secs,
            celebration_until: None,
            animation_frame: 0,
        }
    }

    /// Build the starting state described by the settings
    pub fn from_settings(settings: &Settings) -> Self {
        let store = if settings.seed_examples {
            TaskStore::seeded()
        } else {
            TaskStore::default()
        };
        Self::new(store, settings)
    }

    /// Log a failed store call and carry on
    fn report<T>(result: StoreResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "store action skipped");
                None
            }
        }
    }

    /// Get the currently selected task
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected_index)
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection on a real row after the list shrinks
    fn clamp_selection(&mut self) {
        let len = self.store.tasks().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Check or uncheck the selected task
    pub fn toggle_selected_completion(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (id, checked, title) = (task.id, !task.completed, task.title.clone());

        if let Some(true) = Self::report(self.store.toggle_completion(id, checked)) {
            self.celebrate();
            if self.notify_on_complete {
                notifications::notify_task_completed(&title);
            }
        }
    }

    /// Open (or restart) the celebration window
    pub fn celebrate(&mut self) {
        self.celebrate_at(Instant::now());
    }

    pub fn celebrate_at(&mut self, now: Instant) {
        self.celebration_until = Some(now + Duration::from_secs(self.celebration_secs));
    }

    /// Close the celebration window once its deadline has passed
    pub fn expire_celebration(&mut self, now: Instant) {
        if self.celebration_until.is_some_and(|until| now >= until) {
            self.celebration_until = None;
        }
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration_until.is_some()
    }

    /// Start/stop the selected task's stopwatch
    pub fn toggle_selected_timer(&mut self) {
        if let Some(id) = self.selected_id() {
            Self::report(self.store.toggle_timer(id));
        }
    }

    /// Reset the selected stopwatch (only offered once it has time on it)
    pub fn reset_selected_timer(&mut self) {
        if let Some(task) = self.selected_task() {
            if task.has_time() {
                let id = task.id;
                Self::report(self.store.reset_timer(id));
            }
        }
    }

    /// Remove completed tasks; returns how many went
    pub fn remove_completed(&mut self) -> usize {
        let removed = self.store.remove_completed();
        self.clamp_selection();
        removed
    }

    /// Undo the last removal
    pub fn undo(&mut self) -> bool {
        let restored = self.store.undo();
        self.clamp_selection();
        restored
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Start adding a new task (opens the name prompt)
    pub fn start_add_task(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start renaming the selected task
    pub fn start_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if Self::report(self.store.begin_edit(id)).is_some() {
            self.input = self.selected_task().map(|t| t.title.clone()).unwrap_or_default();
            self.ui_mode = UiMode::EditingTask;
        }
    }

    /// Start renaming the page
    pub fn start_edit_page_title(&mut self) {
        self.input = self.page_title.clone();
        self.ui_mode = UiMode::EditingTitle;
    }

    /// Add character to the active prompt
    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Backspace in the active prompt
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the active prompt
    pub fn submit_input(&mut self) {
        match self.ui_mode {
            UiMode::AddingTask => {
                // A blank name keeps the prompt open
                if self.store.create(&self.input).is_some() {
                    self.selected_index = 0;
                    self.input.clear();
                    self.ui_mode = UiMode::Normal;
                }
            }
            UiMode::EditingTask => {
                if let Some(id) = self.store.editing() {
                    Self::report(self.store.save_edit(id, &self.input));
                }
                self.input.clear();
                self.ui_mode = UiMode::Normal;
            }
            UiMode::EditingTitle => {
                self.page_title = std::mem::take(&mut self.input);
                self.ui_mode = UiMode::Normal;
            }
            UiMode::Normal => {}
        }
    }

    /// Close the active prompt without applying it
    pub fn cancel_input(&mut self) {
        if self.ui_mode == UiMode::EditingTask {
            self.store.cancel_edit();
        }
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Apply `ticks` seconds of clock time
    pub fn tick(&mut self, ticks: u64) {
        self.store.tick(ticks);
    }

    /// Drain whatever the ticker has due and apply it
    pub fn pump(&mut self, ticker: &mut dyn Ticker) {
        let due = ticker.poll();
        if due > 0 {
            self.tick(due);
        }
        self.expire_celebration(Instant::now());
    }

    /// Advance the animation frame counter (wraps at u32::MAX)
    pub fn next_frame(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}
