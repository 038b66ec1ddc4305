//! Read-only dashboard views.

use serde_json::json;
use tracing::debug;

use stock_alchemist_admin::AppState;
use stock_alchemist_admin::middleware::RequireAuth;
use stock_alchemist_admin::simulated::PERIOD_DELTAS;
use stock_alchemist_admin::views::{OrderQuery, ProductQuery, StatusFilter, TimeRange};

use super::print_json;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Home page.
pub fn dashboard(state: &AppState, auth: &RequireAuth) -> CommandResult {
    print_json(&state.home(auth))
}

/// Inventory page, optionally narrowed to low-stock items.
pub fn inventory(
    state: &AppState,
    auth: &RequireAuth,
    search: String,
    category: &str,
    low_stock_only: bool,
) -> CommandResult {
    let query = ProductQuery::new(search, category).with_low_stock_only(low_stock_only);
    let view = state.inventory(auth, &query);
    debug!(items = view.items.len(), "Inventory rendered");
    print_json(&view)
}

/// Orders page.
pub fn orders(
    state: &AppState,
    auth: &RequireAuth,
    search: String,
    status: StatusFilter,
) -> CommandResult {
    let view = state.orders(auth, &OrderQuery { search, status });
    debug!(orders = view.orders.len(), "Orders rendered");
    print_json(&view)
}

/// Rankings page, with simulated growth badges on request.
pub fn rankings(
    state: &AppState,
    auth: &RequireAuth,
    range: TimeRange,
    simulated: bool,
) -> CommandResult {
    let view = state.rankings(auth, range);
    if simulated {
        let trends = state.simulated_trends(auth, &mut rand::rng());
        return print_json(&json!({ "rankings": view, "simulatedTrends": trends }));
    }
    print_json(&view)
}

/// Sales report, with simulated period deltas on request.
pub fn report(
    state: &AppState,
    auth: &RequireAuth,
    range: TimeRange,
    simulated: bool,
) -> CommandResult {
    let report = state.sales_report(auth, range);
    if simulated {
        return print_json(&json!({ "report": report, "simulatedDeltas": PERIOD_DELTAS }));
    }
    print_json(&report)
}

/// Wholesale portal.
pub fn wholesale(
    state: &AppState,
    auth: &RequireAuth,
    search: String,
    category: &str,
) -> CommandResult {
    print_json(&state.wholesale(auth, &ProductQuery::new(search, category)))
}

/// Account page.
pub fn me(state: &AppState, auth: &RequireAuth) -> CommandResult {
    print_json(&state.account(auth))
}
