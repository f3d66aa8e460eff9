pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Theme, UiMode};
pub use task::{seed_tasks, Task, TaskId};
pub use views::{checkbox, format_hms, timer_badge, Metrics};
