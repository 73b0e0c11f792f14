use crate::config::SearchConfig;
use crate::engines::evaluation::BlockEvaluator;
use crate::engines::search::candidate::{decompose, has_zero_digit};
use crate::types::SearchOutcome;
use rayon::prelude::*;

pub trait ProgressCallback: Send {
    fn on_search_start(&mut self, total: u64);
    fn on_progress(&mut self, visited: u64, total: u64);
    fn on_candidate_evaluated(&mut self, candidate: u64);
}

/// Exhaustive descending scan over one candidate range.
///
/// Candidates run from `upper_bound` (inclusive) down to `lower_bound`
/// (exclusive). Because enumeration is descending, the first acceptance is
/// also the numerically largest accepted candidate in the range.
pub struct SearchEngine {
    evaluator: BlockEvaluator,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(evaluator: BlockEvaluator, config: SearchConfig) -> Self {
        Self { evaluator, config }
    }

    /// Sequential reference scan.
    ///
    /// Candidates containing a zero digit are skipped without touching the
    /// evaluator; `on_candidate_evaluated` fires only for candidates that
    /// actually reach it. Progress fires every `progress_interval` visited
    /// candidates, filtered or not.
    pub fn run<C: ProgressCallback>(&self, callback: &mut C) -> SearchOutcome {
        let width = self.evaluator.program().width();
        let total = self.config.upper_bound - self.config.lower_bound;
        callback.on_search_start(total);

        let mut visited: u64 = 0;
        let mut candidate = self.config.upper_bound;
        while candidate > self.config.lower_bound {
            visited += 1;
            if visited % self.config.progress_interval == 0 {
                callback.on_progress(visited, total);
            }

            let digits = decompose(candidate, width);
            if !has_zero_digit(&digits) {
                callback.on_candidate_evaluated(candidate);
                if self.evaluator.accepts(&digits) {
                    return SearchOutcome::Found(candidate);
                }
            }
            candidate -= 1;
        }

        SearchOutcome::Exhausted
    }

    /// Chunked parallel scan with the same result as [`run`](Self::run).
    ///
    /// Chunks are taken in descending order and `find_first` preserves the
    /// descending candidate order inside each chunk, so the first hit is
    /// still the largest accepted candidate. Progress is reported at chunk
    /// granularity; per-candidate callbacks are not invoked.
    pub fn run_parallel<C: ProgressCallback>(&self, callback: &mut C) -> SearchOutcome {
        let width = self.evaluator.program().width();
        let total = self.config.upper_bound - self.config.lower_bound;
        callback.on_search_start(total);

        let mut visited: u64 = 0;
        let mut chunk_top = self.config.upper_bound;
        while chunk_top > self.config.lower_bound {
            let len = (chunk_top - self.config.lower_bound).min(self.config.chunk_size);

            let hit = (0..len).into_par_iter().find_first(|&offset| {
                let digits = decompose(chunk_top - offset, width);
                !has_zero_digit(&digits) && self.evaluator.accepts(&digits)
            });
            if let Some(offset) = hit {
                return SearchOutcome::Found(chunk_top - offset);
            }

            let before = visited;
            visited += len;
            if visited / self.config.progress_interval != before / self.config.progress_interval {
                callback.on_progress(visited, total);
            }
            chunk_top -= len;
        }

        SearchOutcome::Exhausted
    }
}
