//! Inventory view: product search, category filter, low-stock detection.

use serde::Serialize;

use stock_alchemist_core::{Money, Product, ProductId};

use super::{ALL, contains_ignore_case};

/// Category picker selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }
}

/// Search box, category picker and low-stock toggle state.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub search: String,
    pub category: CategoryFilter,
    /// Keep only products below their reorder point.
    pub low_stock_only: bool,
}

impl ProductQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, category: impl AsRef<str>) -> Self {
        Self {
            search: search.into(),
            category: CategoryFilter::from(category.as_ref()),
            low_stock_only: false,
        }
    }

    #[must_use]
    pub const fn with_low_stock_only(mut self, low_stock_only: bool) -> Self {
        self.low_stock_only = low_stock_only;
        self
    }
}

/// Products whose stock is below their reorder point, in catalog order.
#[must_use]
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Products matching the search text on name or SKU (case-insensitive), the
/// category filter and the low-stock toggle, in catalog order.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let needle = query.search.to_lowercase();
    products
        .iter()
        .filter(|p| !query.low_stock_only || p.is_low_stock())
        .filter(|p| query.category.matches(&p.category))
        .filter(|p| contains_ignore_case(&p.name, &needle) || contains_ignore_case(&p.sku, &needle))
        .collect()
}

/// Picker options: `"all"` followed by each distinct category in the order it
/// first appears in the catalog.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for product in products {
        if !out.iter().skip(1).any(|c| c == &product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemView {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub image_url: String,
    pub price: Money,
    /// Per-unit margin, `None` when the product sells below cost.
    pub margin: Option<Money>,
    pub quantity: u32,
    pub threshold: u32,
    pub is_low_stock: bool,
}

impl From<&Product> for InventoryItemView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
            margin: product.margin(),
            quantity: product.quantity,
            threshold: product.threshold,
            is_low_stock: product.is_low_stock(),
        }
    }
}

/// Inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub categories: Vec<String>,
    pub items: Vec<InventoryItemView>,
    /// Low-stock products across the whole catalog, not just the filtered items.
    pub low_stock_count: usize,
}

/// Build the inventory page.
#[must_use]
pub fn inventory_view(products: &[Product], query: &ProductQuery) -> InventoryView {
    InventoryView {
        categories: categories(products),
        items: filter_products(products, query)
            .into_iter()
            .map(InventoryItemView::from)
            .collect(),
        low_stock_count: low_stock(products).len(),
    }
}
