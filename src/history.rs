use crate::util::{mean, std_dev};

/// Committed BOLT results in seconds, oldest first.
///
/// Append-only: entries are never removed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultHistory {
    results: Vec<u32>,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, seconds: u32) {
        self.results.push(seconds);
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn latest(&self) -> Option<u32> {
        self.results.last().copied()
    }

    pub fn best(&self) -> Option<u32> {
        self.results.iter().copied().max()
    }

    pub fn mean(&self) -> Option<f64> {
        mean(&self.results)
    }

    pub fn std_dev(&self) -> Option<f64> {
        std_dev(&self.results)
    }

    /// One-line summary shown under the latest result
    pub fn summary(&self) -> Option<String> {
        let best = self.best()?;
        let avg = self.mean()?;
        let sd = self.std_dev().unwrap_or_default();
        Some(format!(
            "{} tests   best {} s   avg {:.1} s   {:.1} sd",
            self.len(),
            best,
            avg,
            sd
        ))
    }
}

impl From<Vec<u32>> for ResultHistory {
    fn from(results: Vec<u32>) -> Self {
        Self { results }
    }
}
