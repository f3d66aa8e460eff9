//! The task list state machine.
//!
//! `TaskStore` owns the ordered task list, the stack of removed batches
//! used by undo, and the "currently editing" pointer. Every mutation is a
//! synchronous `&mut self` call; the event loop applies user actions and
//! clock ticks one at a time.

use crate::domain::{seed_tasks, Metrics, Task, TaskId};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Failure of a store operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no task with id {0}")]
    NotFound(TaskId),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Tasks taken out by one "remove completed" action.
///
/// `tasks[i]` sat at `indices[i]` in the list just before removal. Indices
/// are ascending, so reinserting in order rebuilds the original list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedBatch {
    pub tasks: Vec<Task>,
    pub indices: Vec<usize>,
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub metrics: Metrics,
    pub can_undo: bool,
    pub editing: Option<TaskId>,
}

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    history: Vec<RemovedBatch>,
    editing: Option<TaskId>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            history: Vec::new(),
            editing: None,
        }
    }

    /// Store holding the ten example tasks
    pub fn seeded() -> Self {
        Self::new(seed_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn history(&self) -> &[RemovedBatch] {
        &self.history
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::compute(&self.tasks)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            metrics: self.metrics(),
            can_undo: self.can_undo(),
            editing: self.editing,
        }
    }

    fn find_mut(&mut self, id: TaskId) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Next free id.
    ///
    /// Ids parked in the undo history count as taken, otherwise a task
    /// created after a removal could share its id with one that undo
    /// later brings back.
    pub fn next_id(&self) -> TaskId {
        let live = self.tasks.iter().map(|t| t.id);
        let parked = self.history.iter().flat_map(|b| b.tasks.iter().map(|t| t.id));
        live.chain(parked).max().map_or(1, |max| max + 1)
    }

    /// Prepend a new task. Blank titles are ignored.
    pub fn create(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            trace!("ignoring blank task title");
            return None;
        }

        let id = self.next_id();
        self.tasks.insert(0, Task::new(id, title));
        debug!(id, title, "created task");
        Some(id)
    }

    /// Set the completion flag.
    ///
    /// Returns `true` when the task was checked, which is the cue for the
    /// celebration.
    pub fn toggle_completion(&mut self, id: TaskId, checked: bool) -> StoreResult<bool> {
        let task = self.find_mut(id)?;
        task.completed = checked;
        debug!(id, checked, "set completion");
        Ok(checked)
    }

    /// Point the editor at `id`. Replaces whatever was being edited.
    pub fn begin_edit(&mut self, id: TaskId) -> StoreResult<()> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.editing = Some(id);
        Ok(())
    }

    /// Replace the title as typed (even if empty) and leave edit mode
    pub fn save_edit(&mut self, id: TaskId, title: &str) -> StoreResult<()> {
        self.editing = None;
        let task = self.find_mut(id)?;
        task.title = title.to_string();
        debug!(id, title, "saved task title");
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Start or stop the stopwatch. Returns whether it is now running.
    pub fn toggle_timer(&mut self, id: TaskId) -> StoreResult<bool> {
        let task = self.find_mut(id)?;
        task.toggle_timer();
        debug!(id, running = task.timer_running, total = task.total_secs, "toggled timer");
        Ok(task.timer_running)
    }

    pub fn reset_timer(&mut self, id: TaskId) -> StoreResult<()> {
        self.find_mut(id)?.reset_timer();
        debug!(id, "reset timer");
        Ok(())
    }

    /// Drop every completed task, remembering where each one was.
    ///
    /// Returns the number removed; nothing is recorded when it is zero.
    pub fn remove_completed(&mut self) -> usize {
        let mut batch = RemovedBatch {
            tasks: Vec::new(),
            indices: Vec::new(),
        };
        let mut kept = Vec::with_capacity(self.tasks.len());

        for (index, task) in std::mem::take(&mut self.tasks).into_iter().enumerate() {
            if task.completed {
                batch.tasks.push(task);
                batch.indices.push(index);
            } else {
                kept.push(task);
            }
        }
        self.tasks = kept;

        let removed = batch.tasks.len();
        if removed > 0 {
            debug!(removed, indices = ?batch.indices, "removed completed tasks");
            self.history.push(batch);
        }
        removed
    }

    /// Restore the most recently removed batch.
    ///
    /// Tasks go back unchecked. Insertion runs in ascending recorded order
    /// so each insert lands where the task sat before removal; an index past
    /// the current end is clamped to it. Returns `false` if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(batch) = self.history.pop() else {
            return false;
        };

        for (mut task, index) in batch.tasks.into_iter().zip(batch.indices) {
            task.completed = false;
            let index = index.min(self.tasks.len());
            self.tasks.insert(index, task);
        }
        debug!(remaining = self.history.len(), "undid removal");
        true
    }

    /// Advance every running stopwatch by `ticks` seconds
    pub fn tick(&mut self, ticks: u64) {
        if ticks == 0 {
            return;
        }
        for task in &mut self.tasks {
            task.tick(ticks);
        }
    }
}
