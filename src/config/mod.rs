pub mod traits;
pub mod program;
pub mod search;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use program::ProgramConfig;
pub use search::SearchConfig;
