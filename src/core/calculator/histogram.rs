//! Releases per hour of day, with a ranked view and a top-K-plus-remainder view.

use crate::models::narrative::DistributionSlice;

const HOURS: usize = 24;

#[derive(Debug, Clone, Default)]
pub struct HourHistogram {
    counts: [u32; HOURS],
    total: u32,
}

impl HourHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hours outside 0..24 are ignored.
    pub fn record(&mut self, hour: u32) {
        if let Some(slot) = self.counts.get_mut(hour as usize) {
            *slot += 1;
            self.total += 1;
        }
    }

    pub fn count(&self, hour: u32) -> u32 {
        self.counts.get(hour as usize).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// All 24 hours, count descending; equal counts stay in hour order.
    pub fn ranked_descending(&self) -> Vec<(u32, u32)> {
        let mut ranked: Vec<(u32, u32)> = (0..HOURS as u32).map(|h| (h, self.count(h))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Non-zero hours in rank order, at most `limit` of them (`None` or 0 =
    /// no cap), then one `other_label` slice holding whatever was left out.
    pub fn distribution(&self, limit: Option<usize>, other_label: &str) -> Vec<DistributionSlice> {
        let limit = limit.filter(|&k| k > 0);
        let mut out = Vec::new();
        let mut covered = 0;

        for (i, (hour, value)) in self.ranked_descending().into_iter().enumerate() {
            if value > 0 && limit.is_none_or(|k| i < k) {
                covered += value;
                out.push(DistributionSlice {
                    name: hour_label(hour),
                    value,
                });
                continue;
            }

            if self.total > covered {
                out.push(DistributionSlice {
                    name: other_label.to_string(),
                    value: self.total - covered,
                });
            }
            break;
        }

        out
    }
}

/// "00".."23"
pub fn hour_label(hour: u32) -> String {
    format!("{:02}", hour)
}
