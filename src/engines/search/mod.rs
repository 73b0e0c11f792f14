pub mod analytic;
pub mod candidate;
pub mod driver;
pub mod progress;

pub use analytic::solve_largest;
pub use candidate::{decompose, has_zero_digit, recompose};
pub use driver::{ProgressCallback, SearchEngine};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
