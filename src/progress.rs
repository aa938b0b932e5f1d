// src/progress.rs
/// Lightweight progress reporting for the record scan.
/// Frontends implement this; the library never prints on its own.
pub trait Progress {
    /// Called at the start with the number of candidate records.
    fn begin(&mut self, _total: usize) {}

    /// A record made it into the output.
    fn item_done(&mut self, _name: &str) {}

    /// A record was dropped because its image couldn't be obtained.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Counts items and reports through the log macros.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        logd!("[{}/{}] {name}", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.failed += 1;
        logd!("[{}/{}] {name} dropped: {reason}", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        logf!("Processed {}/{} ({} failed)", self.done + self.failed, self.total, self.failed);
    }
}
