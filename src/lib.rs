pub mod achievements;
pub mod badge;
pub mod config;
pub mod day;
pub mod errors;
pub mod models;
pub mod records;
pub mod source;
pub mod storage;
pub mod streak;

pub use achievements::{build_report, build_report_at};
pub use config::Settings;
pub use day::ActivityDateSet;
pub use models::{ActivityKind, StreakResult};
pub use records::{BestStreakStore, MemoryStore};
pub use source::ActivitySource;
pub use storage::{load_snapshot, persist_snapshot};
pub use streak::{compute_streaks, compute_streaks_from_raw};
