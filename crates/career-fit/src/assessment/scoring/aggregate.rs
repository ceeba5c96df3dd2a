use super::super::domain::AggregationGroup;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct WeightedSum {
    pub total: f64,
    pub weight: f64,
}

impl WeightedSum {
    /// Weighted mean; an empty group scores 0.
    pub fn mean(&self) -> f64 {
        if self.weight > 0.0 {
            // rounding can push a full-marks mean a hair past 100
            (self.total / self.weight).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// Per-group accumulator for weighted contributions.
#[derive(Debug, Default)]
pub(crate) struct GroupTotals {
    groups: HashMap<AggregationGroup, WeightedSum>,
}

impl GroupTotals {
    pub fn add(&mut self, group: AggregationGroup, normalized: f64, weight: f64) {
        let entry = self.groups.entry(group).or_default();
        entry.total += normalized * weight;
        entry.weight += weight;
    }

    pub fn get(&self, group: AggregationGroup) -> WeightedSum {
        self.groups.get(&group).copied().unwrap_or_default()
    }

    pub fn mean(&self, group: AggregationGroup) -> f64 {
        self.get(group).mean()
    }
}
