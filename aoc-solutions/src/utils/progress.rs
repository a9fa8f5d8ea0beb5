//! Progress reporting for long brute-force loops.

/// Counts work items and logs every time another whole percent is done.
///
/// Output goes through the `log` facade at `info` level, so it stays silent
/// unless the runner enables logging.
///
/// ```rust
/// use aoc_solutions::utils::progress::Progress;
///
/// let mut progress = Progress::new("bytes", 4);
/// for _ in 0..3 {
///     progress.tick();
/// }
/// assert_eq!(progress.percent(), 75);
/// progress.finish();
/// assert_eq!(progress.percent(), 100);
/// ```
#[derive(Debug)]
pub struct Progress {
    label: String,
    total: usize,
    done: usize,
    last_reported: Option<usize>,
}

impl Progress {
    pub fn new(label: impl Into<String>, total: usize) -> Self {
        Self {
            label: label.into(),
            total,
            done: 0,
            last_reported: None,
        }
    }

    pub fn tick(&mut self) {
        self.advance(1);
    }

    pub fn advance(&mut self, steps: usize) {
        self.done = self.done.saturating_add(steps).min(self.total);
        let percent = self.percent();
        if self.last_reported.is_none_or(|last| percent > last) {
            self.last_reported = Some(percent);
            log::info!("{}: {}/{} ({}%)", self.label, self.done, self.total, percent);
        }
    }

    /// Mark everything done, e.g. after breaking out of the loop early
    pub fn finish(&mut self) {
        let remaining = self.total - self.done;
        if remaining > 0 || self.last_reported.is_none() {
            self.advance(remaining);
        }
    }

    pub fn done(&self) -> usize {
        self.done
    }

    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.done * 100 / self.total
        }
    }
}
