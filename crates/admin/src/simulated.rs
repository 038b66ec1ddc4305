//! Simulated trend figures.
//!
//! Nothing here is computed from orders. These numbers fill the "growth" and
//! "vs last period" badges until order history exists to compare against,
//! and every value is tagged `simulated: true` so a renderer can label it.
//! The real aggregates in [`crate::views`] never read from this module.

use rand::Rng;
use serde::Serialize;

use crate::views::CategoryPerformance;

/// Direction and size of a simulated change, in whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub category: String,
    /// Positive for growth, negative for decline. Never zero.
    pub percent: i8,
    pub simulated: bool,
}

/// A fixed "vs last period" badge for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDelta {
    pub metric: &'static str,
    pub percent: f64,
    pub simulated: bool,
}

/// Badges for total revenue, order count and average order value.
pub const PERIOD_DELTAS: [PeriodDelta; 3] = [
    PeriodDelta {
        metric: "totalRevenue",
        percent: 12.5,
        simulated: true,
    },
    PeriodDelta {
        metric: "orderCount",
        percent: 8.3,
        simulated: true,
    },
    PeriodDelta {
        metric: "averageOrderValue",
        percent: 4.2,
        simulated: true,
    },
];

/// One random trend per category: a coin flip between growth of 5 to 24
/// percent and a decline of 1 to 10 percent.
pub fn category_trends<R: Rng>(
    categories: &[CategoryPerformance],
    rng: &mut R,
) -> Vec<Trend> {
    categories
        .iter()
        .map(|row| {
            let percent = if rng.random_bool(0.5) {
                rng.random_range(5..25)
            } else {
                -rng.random_range(1..=10)
            };
            Trend {
                category: row.category.clone(),
                percent,
                simulated: true,
            }
        })
        .collect()
}
