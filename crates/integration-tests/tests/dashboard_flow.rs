//! Integration tests for the full dashboard flow.
//!
//! Log in, render every view against the demo catalog, mutate the store,
//! and check that the views re-derive from the new state.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use stock_alchemist_admin::views::{OrderQuery, ProductQuery, StatusFilter, TimeRange};
use stock_alchemist_admin::{AdminConfig, AppError, AppState};
use stock_alchemist_core::{
    LineItem, Money, Order, OrderId, OrderStatus, ProductId, SalesChannel, UserId,
};
use stock_alchemist_integration_tests::TestContext;

// =============================================================================
// Gate
// =============================================================================

#[test]
fn test_anonymous_session_sees_nothing() {
    let state = AppState::new(AdminConfig::default(), stock_alchemist_admin::seed::demo_catalog());

    assert!(matches!(state.require_auth(), Err(AppError::Unauthorized(_))));
    assert!(state.guarded(|auth, s| s.orders(auth, &OrderQuery::default())).is_err());

    assert!(state.login("admin", "admin").is_err());
    assert!(state.require_auth().is_err());
}

#[test]
fn test_login_logout_round() {
    let ctx = TestContext::new();
    assert_eq!(ctx.state.account(&ctx.auth).username, "user");

    ctx.state.logout();
    ctx.state.logout();

    assert!(!ctx.state.session().is_authenticated());
    assert!(ctx.state.session().last_error().is_none());
    assert!(ctx.state.require_auth().is_err());
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn test_every_view_renders_demo_catalog() {
    let TestContext { state, auth } = TestContext::new();

    let home = state.home(&auth);
    assert_eq!(home.stats.product_count, 3);
    assert_eq!(home.low_stock_alerts[0].sku, "HD-001");

    let inventory = state.inventory(&auth, &ProductQuery::new("ts-", "all"));
    assert_eq!(inventory.items.len(), 1);
    assert_eq!(inventory.categories, ["all", "Apparel", "Electronics"]);

    let low = state.inventory(&auth, &ProductQuery::new("", "all").with_low_stock_only(true));
    let low_skus: Vec<_> = low.items.iter().map(|item| item.sku.as_str()).collect();
    assert_eq!(low_skus, ["HD-001"]);

    let rankings = state.rankings(&auth, TimeRange::default());
    let rollup: Vec<_> = rankings.categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(rollup, ["Apparel", "Electronics"]);

    let orders = state.orders(
        &auth,
        &OrderQuery {
            search: String::new(),
            status: StatusFilter::Only(OrderStatus::Shipped),
        },
    );
    assert_eq!(orders.orders.len(), 1);
    assert_eq!(orders.orders[0].line_items[0].product_name, "Wireless Earbuds");

    let report = state.sales_report(&auth, TimeRange::LastYear);
    assert_eq!(report.order_count, 2);
    assert_eq!(report.average_order_value, Money::from_cents(12498));
    assert!((report.channels[0].percentage - 50.0).abs() < f64::EPSILON);

    let wholesale = state.wholesale(&auth, &ProductQuery::new("", "Electronics"));
    assert_eq!(wholesale.items[0].wholesale_price, Money::from_cents(9099));

    let account = state.account(&auth);
    assert!(account.is_admin);
    assert_eq!(account.email, "user@example.com");
    assert_eq!(account.email_domain, "example.com");
}

#[test]
fn test_views_serialize_with_camel_case_fields() {
    let TestContext { state, auth } = TestContext::new();

    let home = serde_json::to_value(state.home(&auth)).unwrap();
    assert_eq!(home["stats"]["lowStockCount"], 1);
    assert_eq!(home["recentOrders"][0]["channelLabel"], "EC");

    let rankings = serde_json::to_value(state.rankings(&auth, TimeRange::Last7Days)).unwrap();
    assert_eq!(rankings["timeRange"], "7");
    assert_eq!(rankings["topProducts"][0]["sku"], "WE-001");
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_new_order_flows_into_every_aggregate() {
    let TestContext { state, auth } = TestContext::new();
    let before = state.home(&auth).stats;

    state.add_order(
        &auth,
        Order {
            id: OrderId::generate(),
            user_id: UserId::new("3"),
            line_items: vec![LineItem {
                product_id: ProductId::new("1"),
                quantity: 10,
                price: Money::from_cents(2999),
            }],
            status: OrderStatus::Pending,
            channel: SalesChannel::Wholesale,
            created_at: chrono::Utc::now(),
            total: Money::from_cents(29990),
        },
    );

    let after = state.home(&auth).stats;
    assert_eq!(after.pending_order_count, before.pending_order_count + 1);
    assert_eq!(after.total_revenue, before.total_revenue + Money::from_cents(29990));

    let rankings = state.rankings(&auth, TimeRange::default());
    assert_eq!(rankings.top_products[0].sku, "TS-001");
    assert_eq!(rankings.top_products[0].sales, 12);

    let report = state.sales_report(&auth, TimeRange::default());
    assert_eq!(report.channels[2].order_count, 1);
}

#[test]
fn test_updates_for_unknown_ids_are_not_found() {
    let TestContext { state, auth } = TestContext::new();
    let before = state.catalog().snapshot();

    let mut ghost = before.products()[0].clone();
    ghost.id = ProductId::new("ghost");
    assert!(matches!(state.update_product(&auth, ghost), Err(AppError::NotFound(_))));

    let mut ghost_order = before.orders()[0].clone();
    ghost_order.id = OrderId::new("ghost");
    assert!(matches!(state.update_order(&auth, ghost_order), Err(AppError::NotFound(_))));

    assert_eq!(*state.catalog().snapshot(), *before);
}

#[test]
fn test_deleting_a_product_leaves_unknown_lines() {
    let mut catalog = stock_alchemist_admin::seed::demo_catalog();
    catalog.products.retain(|p| p.id != ProductId::new("3"));
    let TestContext { state, auth } = TestContext::with_catalog(catalog);

    let orders = state.orders(&auth, &OrderQuery::default());

    assert_eq!(orders.orders[1].line_items[0].product_name, "Unknown Product");
    assert_eq!(state.rankings(&auth, TimeRange::default()).top_products.len(), 2);
}
