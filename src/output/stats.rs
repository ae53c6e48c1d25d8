//! Batch statistics reporting.

use std::collections::HashMap;

use console::style;

use crate::work::WorkType;

/// Counts of names generated in one run.
#[derive(Debug, Default)]
pub struct BatchStats {
    pub by_type: HashMap<WorkType, u64>,
    pub truncated: u64,
    pub failed: u64,
}

impl BatchStats {
    pub fn record(&mut self, work_type: WorkType) {
        *self.by_type.entry(work_type).or_default() += 1;
    }

    pub fn total(&self) -> u64 {
        self.by_type.values().sum()
    }
}

/// Print the batch summary.
pub fn print_batch_stats(stats: &BatchStats) {
    eprintln!();
    eprintln!("{}", style("═".repeat(50)).dim());
    eprintln!("{}", style("Summary:").bold());
    for work_type in WorkType::ALL {
        let count = stats.by_type.get(&work_type).copied().unwrap_or(0);
        if count > 0 {
            eprintln!("  {:<13} {}", format!("{}:", work_type.display_name()), count);
        }
    }
    if stats.truncated > 0 {
        eprintln!("  Truncated:    {}", style(stats.truncated).yellow());
    }
    if stats.failed > 0 {
        eprintln!("  Failed:       {}", style(stats.failed).red());
    }
    eprintln!("  Total:        {} named", stats.total());
    eprintln!("{}", style("═".repeat(50)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_stats() {
        let mut stats = BatchStats::default();
        stats.record(WorkType::Manga);
        stats.record(WorkType::Manga);
        stats.record(WorkType::Novel);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.by_type[&WorkType::Manga], 2);
    }
}
