pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod mood_log;
pub mod state;
pub mod storage;
pub mod tracker;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use mood_log::MoodLog;
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use tracker::MoodTracker;
