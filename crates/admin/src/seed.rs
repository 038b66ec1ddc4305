//! Initial catalog contents.
//!
//! The dashboard starts from either the built-in demo catalog or a seed file.
//! Seed files use the [`Catalog`] shape and may be YAML or JSON (chosen by
//! the `.json` extension).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;
use tracing::{info, warn};

use stock_alchemist_core::{
    LineItem, Money, Order, OrderId, OrderStatus, Product, ProductId, SalesChannel, UserId,
};

use crate::models::Catalog;

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} validation errors found", .0.len())]
    Validation(Vec<String>),
}

/// Read and parse a seed file without validating it.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, or a parse error if
/// the contents are not a catalog.
pub async fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, SeedError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let catalog: Catalog = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(catalog)
}

/// Read, parse and validate a seed file.
///
/// Line items that reference unknown products are accepted and logged; they
/// render as "Unknown Product".
///
/// # Errors
///
/// Everything [`read_catalog`] returns, plus [`SeedError::Validation`] when
/// [`validate_catalog`] reports problems.
pub async fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, SeedError> {
    let path = path.as_ref();
    let catalog = read_catalog(path).await?;

    let errors = validate_catalog(&catalog);
    if !errors.is_empty() {
        return Err(SeedError::Validation(errors));
    }

    for (order_id, product_id) in dangling_references(&catalog) {
        warn!(%order_id, %product_id, "Order references a product that is not in the catalog");
    }

    info!(
        path = %path.display(),
        products = catalog.products.len(),
        orders = catalog.orders.len(),
        "Seed catalog loaded"
    );
    Ok(catalog)
}

/// Check a catalog for problems a hand-written seed file tends to have.
///
/// Returns one message per problem; an empty list means the catalog is fine.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    let mut product_ids = HashSet::new();
    let mut skus = HashSet::new();
    for product in &catalog.products {
        if !product_ids.insert(&product.id) {
            errors.push(format!("Duplicate product id: {}", product.id));
        }
        if !skus.insert(product.sku.as_str()) {
            errors.push(format!("Duplicate SKU: {}", product.sku));
        }
        if product.name.trim().is_empty() {
            errors.push(format!("Product {} has no name", product.id));
        }
    }

    let mut order_ids = HashSet::new();
    for order in &catalog.orders {
        if !order_ids.insert(&order.id) {
            errors.push(format!("Duplicate order id: {}", order.id));
        }
        if order.line_items.is_empty() {
            errors.push(format!("Order {} has no line items", order.id));
        }
        if order.line_items.iter().any(|line| line.quantity == 0) {
            errors.push(format!("Order {} has a line item with zero quantity", order.id));
        }
        match order.checked_line_total() {
            None => errors.push(format!("Order {} line item amounts overflow", order.id)),
            Some(line_total) if line_total != order.total => errors.push(format!(
                "Order {} total {} does not match line items {}",
                order.id, order.total, line_total
            )),
            Some(_) => {}
        }
    }

    errors
}

/// `(order, product)` pairs where a line item points at a missing product.
#[must_use]
pub fn dangling_references(catalog: &Catalog) -> Vec<(&OrderId, &ProductId)> {
    let mut dangling = Vec::new();
    for order in &catalog.orders {
        for line in &order.line_items {
            if catalog.product(&line.product_id).is_none() {
                dangling.push((&order.id, &line.product_id));
            }
        }
    }
    dangling
}

/// The built-in demo catalog: three products and two orders.
#[must_use]
pub fn demo_catalog() -> Catalog {
    Catalog {
        products: vec![
            demo_product(
                "1",
                "Premium T-Shirt",
                "TS-001",
                (2999, 1500),
                (150, 50),
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500",
                "Apparel",
            ),
            demo_product(
                "2",
                "Designer Hoodie",
                "HD-001",
                (5999, 3000),
                (30, 40),
                "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=500",
                "Apparel",
            ),
            demo_product(
                "3",
                "Wireless Earbuds",
                "WE-001",
                (12999, 6500),
                (75, 25),
                "https://images.unsplash.com/photo-1606220588913-b3aacb4d2f46?w=500",
                "Electronics",
            ),
        ],
        orders: vec![
            Order {
                id: OrderId::new("1"),
                user_id: UserId::new("1"),
                line_items: vec![demo_line("1", 2, 2999), demo_line("2", 1, 5999)],
                status: OrderStatus::Processing,
                channel: SalesChannel::Ec,
                created_at: utc(2024, 3, 15, 10, 0),
                total: Money::from_cents(11997),
            },
            Order {
                id: OrderId::new("2"),
                user_id: UserId::new("2"),
                line_items: vec![demo_line("3", 1, 12999)],
                status: OrderStatus::Shipped,
                channel: SalesChannel::Sns,
                created_at: utc(2024, 3, 14, 15, 30),
                total: Money::from_cents(12999),
            },
        ],
    }
}

fn demo_product(
    id: &str,
    name: &str,
    sku: &str,
    (price_cents, cost_cents): (u32, u32),
    (quantity, threshold): (u32, u32),
    image_url: &str,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        sku: sku.to_string(),
        price: Money::from_cents(price_cents),
        cost: Money::from_cents(cost_cents),
        quantity,
        threshold,
        image_url: image_url.to_string(),
        category: category.to_string(),
    }
}

fn demo_line(product_id: &str, quantity: u32, price_cents: u32) -> LineItem {
    LineItem {
        product_id: ProductId::new(product_id),
        quantity,
        price: Money::from_cents(price_cents),
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
