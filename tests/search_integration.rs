use blockseek::config::SearchConfig;
use blockseek::engines::evaluation::BlockEvaluator;
use blockseek::engines::search::{
    decompose, has_zero_digit, solve_largest, ChannelProgressCallback, ProgressCallback,
    ProgressMessage, SearchEngine,
};
use blockseek::types::{Block, BlockProgram, SearchOutcome};

/// Simple progress callback for testing
struct RecordingProgressCallback {
    evaluated: Vec<u64>,
    progress: Vec<(u64, u64)>,
}

impl RecordingProgressCallback {
    fn new() -> Self {
        Self {
            evaluated: Vec::new(),
            progress: Vec::new(),
        }
    }
}

impl ProgressCallback for RecordingProgressCallback {
    fn on_search_start(&mut self, _total: u64) {}

    fn on_progress(&mut self, visited: u64, total: u64) {
        self.progress.push((visited, total));
    }

    fn on_candidate_evaluated(&mut self, candidate: u64) {
        self.evaluated.push(candidate);
    }
}

/// Width-2 table accepting exactly the candidates whose digits agree.
fn matching_pair_table() -> BlockProgram {
    BlockProgram::new(vec![
        Block::ShiftIn { add2: 0 },
        Block::Reduce { add1: 0, add2: 0 },
    ])
}

/// Width-2 table no digit sequence satisfies: the Reduce predicate compares
/// against top - 26, below any digit in [1,9].
fn unsatisfiable_table() -> BlockProgram {
    BlockProgram::new(vec![
        Block::ShiftIn { add2: 0 },
        Block::Reduce { add1: -26, add2: 0 },
    ])
}

/// Width-3 table with two acceptance families, for order checks.
fn width3_table() -> BlockProgram {
    BlockProgram::new(vec![
        Block::ShiftIn { add2: 2 },
        Block::Reduce { add1: -2, add2: 0 },
        Block::Reduce { add1: 5, add2: 0 },
    ])
}

fn config(upper: u64, lower: u64) -> SearchConfig {
    SearchConfig {
        upper_bound: upper,
        lower_bound: lower,
        progress_interval: 10,
        chunk_size: 7,
    }
}

#[test]
fn first_acceptance_in_descending_order_wins() {
    let engine = SearchEngine::new(BlockEvaluator::new(matching_pair_table()), config(99, 9));
    let outcome = engine.run(&mut RecordingProgressCallback::new());
    assert_eq!(outcome, SearchOutcome::Found(99));
}

#[test]
fn exhausted_range_reports_no_solution() {
    let engine = SearchEngine::new(BlockEvaluator::new(unsatisfiable_table()), config(99, 9));
    let mut callback = RecordingProgressCallback::new();
    let outcome = engine.run(&mut callback);
    assert_eq!(outcome, SearchOutcome::Exhausted);
    // 90 visited candidates at an interval of 10.
    assert_eq!(callback.progress.len(), 9);
}

#[test]
fn zero_digit_candidates_never_reach_the_evaluator() {
    let engine = SearchEngine::new(BlockEvaluator::new(unsatisfiable_table()), config(99, 9));
    let mut callback = RecordingProgressCallback::new();
    engine.run(&mut callback);

    // 90 candidates visited, 9 of them carry a zero digit (10, 20, ..., 90).
    assert_eq!(callback.evaluated.len(), 81);
    for candidate in &callback.evaluated {
        assert!(!has_zero_digit(&decompose(*candidate, 2)));
    }
    assert!(!callback.evaluated.contains(&90));
    assert!(!callback.evaluated.contains(&10));
}

#[test]
fn upper_bound_is_inclusive() {
    let engine = SearchEngine::new(BlockEvaluator::new(matching_pair_table()), config(44, 33));
    let outcome = engine.run(&mut RecordingProgressCallback::new());
    assert_eq!(outcome, SearchOutcome::Found(44));
}

#[test]
fn lower_bound_is_exclusive() {
    // 33 is the only accepted value at or below 43, and it is never visited.
    let engine = SearchEngine::new(BlockEvaluator::new(matching_pair_table()), config(43, 33));
    let outcome = engine.run(&mut RecordingProgressCallback::new());
    assert_eq!(outcome, SearchOutcome::Exhausted);
}

#[test]
fn descending_first_match_is_the_maximum_acceptance() {
    let program = width3_table();
    let evaluator = BlockEvaluator::new(program.clone());

    // Brute-check the whole width-3 space for accepted candidates.
    let accepted: Vec<u64> = (100..=999)
        .filter(|&x| {
            let digits = decompose(x, 3);
            !has_zero_digit(&digits) && evaluator.accepts(&digits)
        })
        .collect();
    assert!(!accepted.is_empty());
    let maximum = *accepted.iter().max().unwrap();

    let engine = SearchEngine::new(BlockEvaluator::new(program), config(999, 99));
    let outcome = engine.run(&mut RecordingProgressCallback::new());
    assert_eq!(outcome, SearchOutcome::Found(maximum));
}

#[test]
fn parallel_scan_matches_sequential_scan() {
    for program in [matching_pair_table(), unsatisfiable_table(), width3_table()] {
        let width = program.width();
        let (upper, lower) = if width == 2 { (99, 9) } else { (999, 99) };

        let sequential = SearchEngine::new(BlockEvaluator::new(program.clone()), config(upper, lower))
            .run(&mut RecordingProgressCallback::new());
        let parallel = SearchEngine::new(BlockEvaluator::new(program), config(upper, lower))
            .run_parallel(&mut RecordingProgressCallback::new());

        assert_eq!(sequential, parallel);
    }
}

#[test]
fn analytic_solver_agrees_with_the_exhaustive_scan() {
    // Well-nested balanced width-4 table: pairs (1,2) and (0,3).
    let program = BlockProgram::new(vec![
        Block::ShiftIn { add2: 3 },
        Block::ShiftIn { add2: 1 },
        Block::Reduce { add1: -1, add2: 5 },
        Block::Reduce { add1: 2, add2: 0 },
    ]);

    let solved = solve_largest(&program).unwrap();

    let engine = SearchEngine::new(BlockEvaluator::new(program), config(9_999, 999));
    let scanned = match engine.run(&mut RecordingProgressCallback::new()) {
        SearchOutcome::Found(candidate) => Some(candidate),
        SearchOutcome::Exhausted => None,
    };

    assert_eq!(solved, scanned);
    assert_eq!(solved, Some(4_999));
}

#[test]
fn progress_percentages_increase_monotonically() {
    let engine = SearchEngine::new(BlockEvaluator::new(unsatisfiable_table()), config(99, 9));

    let (sender, receiver) = std::sync::mpsc::channel();
    engine.run(&mut ChannelProgressCallback::new(sender));

    let mut last_percentage = 0.0;
    let mut reports = 0;
    for message in receiver.try_iter() {
        match message {
            ProgressMessage::SearchStart(total) => assert_eq!(total, 90),
            ProgressMessage::Progress { visited, total } => {
                let percentage = visited as f64 / total as f64 * 100.0;
                assert!(percentage > last_percentage);
                last_percentage = percentage;
                reports += 1;
            }
            ProgressMessage::CandidateEvaluated(_) => {}
        }
    }
    // 90 visited candidates at an interval of 10.
    assert_eq!(reports, 9);
    assert_eq!(last_percentage, 100.0);
}
