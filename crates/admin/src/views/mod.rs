//! Dashboard views.
//!
//! Each module holds the pure derivations one page renders. Functions take
//! product and order slices from a catalog snapshot and never fail: empty
//! input produces empty lists and zero totals.
//!
//! # Views
//!
//! - `dashboard` - Home stats, recent orders, low-stock alerts
//! - `inventory` - Product search, category filter, low-stock detection
//! - `orders` - Order search and status filter with resolved line items
//! - `rankings` - Revenue ranking and category rollup
//! - `reports` - Sales summary and channel breakdown
//! - `wholesale` - Discounted catalog for wholesale buyers
//! - `account` - The logged-in identity

pub mod account;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod rankings;
pub mod reports;
pub mod wholesale;

use serde::Serialize;

pub use account::AccountView;
pub use dashboard::{DashboardStats, HomeView};
pub use inventory::{CategoryFilter, InventoryView, ProductQuery};
pub use orders::{OrderQuery, OrdersView, StatusFilter};
pub use rankings::{CategoryPerformance, ProductRanking, RankingsView};
pub use reports::{ChannelBreakdown, SalesReport};
pub use wholesale::WholesaleView;

/// Wildcard accepted by the category and status filters.
pub const ALL: &str = "all";

/// Reporting window selected on the rankings and reports pages.
///
/// The window is carried through to the rendered view but is not applied
/// when aggregating: every order counts regardless of `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TimeRange {
    #[serde(rename = "7")]
    Last7Days,
    #[default]
    #[serde(rename = "30")]
    Last30Days,
    #[serde(rename = "90")]
    Last90Days,
    #[serde(rename = "365")]
    LastYear,
}

impl TimeRange {
    #[must_use]
    pub const fn days(self) -> u16 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
            Self::LastYear => 365,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::LastYear => "Last year",
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = stock_alchemist_core::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(Self::Last7Days),
            "30" => Ok(Self::Last30Days),
            "90" => Ok(Self::Last90Days),
            "365" => Ok(Self::LastYear),
            other => Err(stock_alchemist_core::ParseEnumError {
                kind: "time range",
                value: other.to_owned(),
            }),
        }
    }
}

/// Case-insensitive substring match. An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parse() {
        assert_eq!("7".parse::<TimeRange>().unwrap(), TimeRange::Last7Days);
        assert_eq!("365".parse::<TimeRange>().unwrap().days(), 365);
        assert!("14".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::default().label(), "Last 30 days");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("TS-001", "ts-"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Hoodie", "shirt"));
    }
}
