//! Seed file validation.

use std::path::Path;

use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

use stock_alchemist_admin::seed::{dangling_references, read_catalog, validate_catalog};

use super::print_json;

/// Seed check failures that are not I/O or parse errors.
#[derive(Debug, Error)]
pub enum SeedCheckError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("{0} validation errors found")]
    Invalid(usize),
}

/// Parse and validate a seed file, printing a summary on success.
///
/// # Errors
///
/// Returns an error if the file is missing, cannot be parsed, or fails
/// validation. Each validation problem is logged.
pub async fn check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(SeedCheckError::NotFound(path.display().to_string()).into());
    }

    info!(path = %path.display(), "Checking seed file");
    let catalog = read_catalog(path).await?;

    let errors = validate_catalog(&catalog);
    if !errors.is_empty() {
        error!("Seed validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(SeedCheckError::Invalid(errors.len()).into());
    }

    let dangling = dangling_references(&catalog);
    for (order_id, product_id) in &dangling {
        warn!(%order_id, %product_id, "Line item references an unknown product");
    }

    info!("Seed file is valid");
    print_json(&json!({
        "path": path.display().to_string(),
        "products": catalog.products.len(),
        "orders": catalog.orders.len(),
        "danglingReferences": dangling.len(),
    }))
}
