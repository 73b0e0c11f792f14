use super::driver::ProgressCallback;

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_search_start(&mut self, total: u64) {
        println!("Scanning {} candidates...", total);
    }

    fn on_progress(&mut self, visited: u64, total: u64) {
        println!("{:.2}% done", visited as f64 / total as f64 * 100.0);
    }

    fn on_candidate_evaluated(&mut self, _candidate: u64) {}
}

// For embedders and tests that consume progress off-thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

pub enum ProgressMessage {
    SearchStart(u64),
    Progress { visited: u64, total: u64 },
    CandidateEvaluated(u64),
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_search_start(&mut self, total: u64) {
        let _ = self.sender.send(ProgressMessage::SearchStart(total));
    }

    fn on_progress(&mut self, visited: u64, total: u64) {
        let _ = self.sender.send(ProgressMessage::Progress { visited, total });
    }

    fn on_candidate_evaluated(&mut self, candidate: u64) {
        let _ = self
            .sender
            .send(ProgressMessage::CandidateEvaluated(candidate));
    }
}
