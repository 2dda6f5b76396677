// File: crates/chart-core/src/axis.rs
// Summary: Year axis model: label plus the years that get a tick label.

use crate::dataset::YEAR_TICKS;

#[derive(Clone, Debug, PartialEq)]
pub struct YearAxis {
    pub label: String,
    pub ticks: Vec<i32>,
}

impl YearAxis {
    pub fn new(label: impl Into<String>, ticks: impl Into<Vec<i32>>) -> Self {
        Self { label: label.into(), ticks: ticks.into() }
    }

    /// Every `step` years from `start` through `end`, always ending on `end`.
    pub fn every(label: impl Into<String>, start: i32, end: i32, step: i32) -> Self {
        let step = step.max(1);
        let mut ticks: Vec<i32> = (start..=end).step_by(step as usize).collect();
        if ticks.last() != Some(&end) { ticks.push(end); }
        Self::new(label, ticks)
    }

    pub fn default_years() -> Self { Self::new("Year", YEAR_TICKS) }
}

impl Default for YearAxis {
    fn default() -> Self { Self::default_years() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ends_on_last_year() {
        assert_eq!(YearAxis::every("Year", 1981, 2018, 10).ticks, vec![1981, 1991, 2001, 2011, 2018]);
        assert_eq!(YearAxis::every("Year", 2000, 2010, 5).ticks, vec![2000, 2005, 2010]);
    }
}
