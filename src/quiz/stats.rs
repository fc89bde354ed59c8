use std::collections::BTreeMap;

use crate::models::Difficulty;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: u32,
    pub total: u32,
}

impl Tally {
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

/// Running performance counters for one quiz session.
///
/// Every recorded resolution bumps `total_answered`, one topic tally and one
/// difficulty tally, so the three totals always agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceStats {
    pub total_answered: u32,
    pub total_correct: u32,
    pub by_topic: BTreeMap<String, Tally>,
    pub by_difficulty: BTreeMap<Difficulty, Tally>,
}

impl PerformanceStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, topic: &str, difficulty: Difficulty, correct: bool) {
        self.total_answered += 1;
        let topic_tally = self.by_topic.entry(topic.to_string()).or_default();
        topic_tally.total += 1;
        let difficulty_tally = self.by_difficulty.entry(difficulty).or_default();
        difficulty_tally.total += 1;

        if correct {
            self.total_correct += 1;
            topic_tally.correct += 1;
            difficulty_tally.correct += 1;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceSummary {
    pub overall_accuracy: f64,
    pub per_topic_accuracy: BTreeMap<String, f64>,
    pub per_difficulty_accuracy: BTreeMap<Difficulty, f64>,
}

impl PerformanceSummary {
    /// Lowest-accuracy topic. Ties go to the alphabetically first topic.
    pub fn weakest_topic(&self) -> Option<(&str, f64)> {
        let mut weakest: Option<(&str, f64)> = None;
        for (topic, &accuracy) in &self.per_topic_accuracy {
            match weakest {
                Some((_, lowest)) if lowest <= accuracy => {}
                _ => weakest = Some((topic.as_str(), accuracy)),
            }
        }
        weakest
    }
}

/// Accuracy percentages in `[0, 100]`. Topics never asked are absent.
pub fn compute_summary(stats: &PerformanceStats) -> PerformanceSummary {
    PerformanceSummary {
        overall_accuracy: percentage(stats.total_correct, stats.total_answered),
        per_topic_accuracy: stats
            .by_topic
            .iter()
            .map(|(topic, tally)| (topic.clone(), tally.accuracy()))
            .collect(),
        per_difficulty_accuracy: stats
            .by_difficulty
            .iter()
            .map(|(difficulty, tally)| (*difficulty, tally.accuracy()))
            .collect(),
    }
}

fn percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(correct) / f64::from(total) * 100.0
    }
}
