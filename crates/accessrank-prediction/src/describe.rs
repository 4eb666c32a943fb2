//! Human-readable dumps for diagnostics.

use std::fmt::Write;

use crate::engine::AccessRank;

impl AccessRank {
    /// One line per item: `src > dst (count), dst (count)`, sorted by source.
    pub fn markov_description(&self) -> String {
        let mut sources: Vec<_> = self.state.items.iter().collect();
        sources.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut out = String::new();
        for (id, record) in sources {
            let _ = writeln!(out, "{id} > {}", record.markov_description());
        }
        out
    }

    /// One line per list entry with the stored score and the live factors.
    pub fn score_description(&self) -> String {
        let context = self.scoring_context();
        let mut out = String::new();
        for scored in &self.state.prediction_list {
            let parts = context.breakdown(&scored.id);
            let _ = writeln!(
                out,
                "{}: score: {}, markov: {}, crf: {}, time: {}",
                scored.id, scored.score, parts.markov, parts.crf, parts.time
            );
        }
        out
    }

    /// `id: score` per list entry, in list order.
    pub fn prediction_list_description(&self) -> String {
        let mut out = String::new();
        for scored in &self.state.prediction_list {
            let _ = writeln!(out, "{}: {}", scored.id, scored.score);
        }
        out
    }
}
