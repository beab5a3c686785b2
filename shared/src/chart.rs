//! Monthly progress chart data
//!
//! Buckets progress updates by calendar month and type and derives the
//! axis used to size the bars. Pure data shaping; the ui crate renders it.

use crate::models::{ProgressType, ProgressUpdate};

/// Axis ticks every 5 units, with the top rounded up to a multiple of 10
const AXIS_STEP: u32 = 5;
const SCALE_STEP: u32 = 10;

/// Per-type counts for one month, labelled with the short month name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: String,
    counts: [u32; ProgressType::ALL.len()],
}

impl MonthBucket {
    fn new(month: String) -> Self {
        Self {
            month,
            counts: [0; ProgressType::ALL.len()],
        }
    }

    pub fn count(&self, kind: ProgressType) -> u32 {
        let slot = ProgressType::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(0);
        self.counts[slot]
    }
}

/// Bar-chart data: one bucket per month, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyChart {
    pub months: Vec<MonthBucket>,
    pub scale: u32,
}

impl MonthlyChart {
    /// Undated updates cannot be placed on the axis and are skipped.
    pub fn build(updates: &[ProgressUpdate]) -> Self {
        let mut months: Vec<MonthBucket> = Vec::new();
        for update in updates {
            let Some(date) = update.date else {
                continue;
            };
            let month = date.format("%b").to_string();
            let at = match months.iter().position(|b| b.month == month) {
                Some(at) => at,
                None => {
                    months.push(MonthBucket::new(month));
                    months.len() - 1
                }
            };
            if let Some(slot) = ProgressType::ALL.iter().position(|k| *k == update.kind) {
                months[at].counts[slot] += 1;
            }
        }

        let max = months
            .iter()
            .flat_map(|b| b.counts.iter().copied())
            .max()
            .unwrap_or(0);
        let scale = max.div_ceil(SCALE_STEP) * SCALE_STEP;

        Self { months, scale }
    }

    /// Tick labels from 0 up to the scale top, bottom first
    pub fn axis_labels(&self) -> Vec<u32> {
        (0..=self.scale / AXIS_STEP).map(|i| i * AXIS_STEP).collect()
    }

    /// Bar height for `count`, as a percentage of the chart area
    pub fn height_pct(&self, count: u32) -> f64 {
        if self.scale == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.scale) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn update(kind: ProgressType, date: Option<(i32, u32, u32)>) -> ProgressUpdate {
        ProgressUpdate {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            kind,
            in_progress_type: None,
            title: "t".to_string(),
            date: date.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()),
            description: String::new(),
            ai_insight: None,
            user_reflection: None,
        }
    }

    #[test]
    fn test_groups_by_month_in_first_appearance_order() {
        let updates = vec![
            update(ProgressType::CompletedTutorial, Some((2026, 3, 5))),
            update(ProgressType::NewSkillLearned, Some((2026, 1, 10))),
            update(ProgressType::CompletedTutorial, Some((2026, 3, 20))),
            update(ProgressType::InProgress, Some((2026, 3, 21))),
        ];
        let chart = MonthlyChart::build(&updates);

        let months: Vec<&str> = chart.months.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(months, vec!["Mar", "Jan"]);

        let mar = &chart.months[0];
        assert_eq!(mar.count(ProgressType::CompletedTutorial), 2);
        assert_eq!(mar.count(ProgressType::NewSkillLearned), 0);
        assert_eq!(mar.count(ProgressType::InProgress), 1);
        assert_eq!(chart.months[1].count(ProgressType::NewSkillLearned), 1);
    }

    #[test]
    fn test_scale_rounds_up_to_tens() {
        let updates: Vec<ProgressUpdate> = (0..12)
            .map(|_| update(ProgressType::CompletedTutorial, Some((2026, 6, 1))))
            .collect();
        let chart = MonthlyChart::build(&updates);

        assert_eq!(chart.scale, 20);
        assert_eq!(chart.axis_labels(), vec![0, 5, 10, 15, 20]);
        assert_eq!(chart.height_pct(12), 60.0);
    }

    #[test]
    fn test_undated_updates_are_skipped() {
        let updates = vec![
            update(ProgressType::InProgress, None),
            update(ProgressType::InProgress, Some((2026, 2, 1))),
        ];
        let chart = MonthlyChart::build(&updates);

        assert_eq!(chart.months.len(), 1);
        assert_eq!(chart.scale, 10);
    }

    #[test]
    fn test_empty_input_yields_empty_chart() {
        let chart = MonthlyChart::build(&[]);
        assert!(chart.months.is_empty());
        assert_eq!(chart.scale, 0);
        assert_eq!(chart.height_pct(0), 0.0);
    }
}
