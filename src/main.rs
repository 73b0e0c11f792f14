use std::process;

use blockseek::config::AppConfig;
use blockseek::engines::evaluation::BlockEvaluator;
use blockseek::engines::search::{ConsoleProgressCallback, SearchEngine};
use blockseek::types::SearchOutcome;

fn main() -> anyhow::Result<()> {
    // Configure logging (optional)
    env_logger::init();

    println!("=== Blockseek digit search ===");

    // The shipped block table and bounds; command line arguments are ignored.
    let config = AppConfig::default();
    config.validate()?;

    let evaluator = BlockEvaluator::new(config.program.to_program());
    let engine = SearchEngine::new(evaluator, config.search);

    match engine.run(&mut ConsoleProgressCallback) {
        SearchOutcome::Found(solution) => {
            println!("Solution: {}", solution);
            Ok(())
        }
        SearchOutcome::Exhausted => {
            println!("No solution found.");
            process::exit(1);
        }
    }
}
