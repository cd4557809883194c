//! Run statistics
//!
//! One accumulator per generation run; returned alongside the corpus and
//! never persisted. The acronym counter counts dictionary entries
//! processed (once per entry per record, match or not), which is the
//! contract downstream reports rely on.

use crate::corpus::charset::CharSweep;
use crate::corpus::pipeline::config::CorpusConfig;

/// Mutable statistics accumulator for one generation run.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Non-blank records processed
    pub records: usize,
    /// Acronym dictionary entries processed (unconditional per entry)
    pub acronym_entries: usize,
    /// Expression entries that actually substituted
    pub expression_hits: usize,
    /// Special characters removed or replaced, all characters combined
    pub chars_removed: usize,
    /// Per-character removal counts, in policy order
    pub char_counts: Vec<(char, usize)>,
}

impl Statistics {
    /// Fold one character sweep into the totals.
    pub fn absorb_sweep(&mut self, sweep: &CharSweep) {
        self.chars_removed += sweep.total;
        if self.char_counts.is_empty() {
            self.char_counts = sweep.counts.clone();
            return;
        }
        for (ch, count) in &sweep.counts {
            match self.char_counts.iter_mut().find(|(c, _)| c == ch) {
                Some((_, accumulated)) => *accumulated += count,
                None => self.char_counts.push((*ch, *count)),
            }
        }
    }

    /// Render the human-readable report. Characters with zero occurrences
    /// are omitted from the breakdown.
    pub fn report(&self, config: &CorpusConfig) -> String {
        let mut report = format!("Records processed: {}\n", self.records);
        report.push_str(&format!(
            "Acronym entries processed: {}\n",
            self.acronym_entries
        ));
        report.push_str(&format!(
            "Expressions substituted: {}\n",
            self.expression_hits
        ));
        report.push_str(&format!(
            "Special characters removed: {}\n",
            self.chars_removed
        ));
        for rule in config.char_policy.rules() {
            if let Some((_, count)) = self
                .char_counts
                .iter()
                .find(|(ch, count)| *ch == rule.ch && *count > 0)
            {
                report.push_str(&format!(" - {} ({}) : {}\n", rule.name, rule.ch, count));
            }
        }
        report
    }
}
