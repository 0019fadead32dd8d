//! Dashboard aggregates.

/// Case counts and the closure-rate "prediction" shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
    /// Percentage of closed cases, rounded to a whole number
    pub prediction: u64,
}

impl DashboardMetrics {
    pub fn from_counts(total: u64, open: u64, closed: u64) -> Self {
        Self {
            total,
            open,
            closed,
            prediction: closure_rate(total, closed),
        }
    }

    /// Closure rate with two decimal places, for display next to the rounded figure.
    pub fn prediction_precise(&self) -> f64 {
        closure_rate_precise(self.total, self.closed)
    }
}

/// `round(100 * closed / total)`, or 0 when there are no cases.
pub fn closure_rate(total: u64, closed: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (closed as f64 * 100.0 / total as f64).round() as u64
}

/// `100 * closed / total` rounded to two decimals, or 0 when there are no cases.
pub fn closure_rate_precise(total: u64, closed: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (closed as f64 * 10_000.0 / total as f64).round() / 100.0
}
