pub mod files;
pub mod settings;

pub use files::{atomic_write, config_file, log_file, read_file};
pub use settings::{init_config, load_settings, Settings};
