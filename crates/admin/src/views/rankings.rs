//! Rankings view: products ordered by revenue, rolled up by category.
//!
//! Revenue for a product is the sum of `quantity * price` over every line
//! item that references it, across all orders. An order that lists the same
//! product on several lines contributes every line.

use std::collections::HashMap;

use serde::Serialize;

use stock_alchemist_core::{Money, Order, Product, ProductId};

use super::TimeRange;
use super::inventory::categories;

/// A product with its aggregated sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRanking {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub image_url: String,
    pub revenue: Money,
    /// Units sold.
    pub sales: u64,
}

/// Revenue and units sold for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub category: String,
    pub revenue: Money,
    pub sales: u64,
}

/// Every product ranked by revenue, highest first.
///
/// Products with equal revenue keep their catalog order. Products that never
/// sold are included with zero revenue.
#[must_use]
pub fn rank_by_revenue(products: &[Product], orders: &[Order]) -> Vec<ProductRanking> {
    let mut totals: HashMap<&ProductId, (Money, u64)> = HashMap::new();
    for line in orders.iter().flat_map(|o| &o.line_items) {
        let entry = totals.entry(&line.product_id).or_insert((Money::ZERO, 0));
        entry.0 = entry.0 + line.subtotal();
        entry.1 += u64::from(line.quantity);
    }

    let mut ranked: Vec<ProductRanking> = products
        .iter()
        .map(|product| {
            let (revenue, sales) = totals.get(&product.id).copied().unwrap_or((Money::ZERO, 0));
            ProductRanking {
                id: product.id.clone(),
                name: product.name.clone(),
                sku: product.sku.clone(),
                category: product.category.clone(),
                image_url: product.image_url.clone(),
                revenue,
                sales,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranked
}

/// Sum ranked products per category, one row per category in the order it
/// first appears in the catalog. Categories with no sales get a zero row.
#[must_use]
pub fn category_rollup(products: &[Product], ranked: &[ProductRanking]) -> Vec<CategoryPerformance> {
    let mut rows: Vec<CategoryPerformance> = categories(products)
        .into_iter()
        .skip(1)
        .map(|category| CategoryPerformance {
            category,
            revenue: Money::ZERO,
            sales: 0,
        })
        .collect();
    for product in ranked {
        if let Some(row) = rows.iter_mut().find(|r| r.category == product.category) {
            row.revenue = row.revenue + product.revenue;
            row.sales = row.sales.saturating_add(product.sales);
        }
    }
    rows
}

/// Rankings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsView {
    pub time_range: TimeRange,
    pub time_range_label: &'static str,
    /// Top products by revenue.
    pub top_products: Vec<ProductRanking>,
    /// Rollup over every product, not only the top ones.
    pub categories: Vec<CategoryPerformance>,
}

/// Build the rankings page showing at most `limit` products.
#[must_use]
pub fn rankings_view(
    products: &[Product],
    orders: &[Order],
    time_range: TimeRange,
    limit: usize,
) -> RankingsView {
    let mut ranked = rank_by_revenue(products, orders);
    let categories = category_rollup(products, &ranked);
    ranked.truncate(limit);
    RankingsView {
        time_range,
        time_range_label: time_range.label(),
        top_products: ranked,
        categories,
    }
}
