//! Application state shared across every view.
//!
//! `AppState` is built once at startup and handed to whatever renders the
//! dashboard. It owns the session and catalog stores; there is no global.
//! Views and mutations take a [`RequireAuth`], so an anonymous caller is
//! turned away before any of them runs.

use std::sync::Arc;

use rand::Rng;
use tracing::{info, instrument};

use stock_alchemist_core::{Identity, Order, OrderId, OrderStatus, Product, ProductId};

use crate::config::AdminConfig;
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::Catalog;
use crate::services::{CatalogStore, SessionStore};
use crate::simulated::{self, Trend};
use crate::views::{
    AccountView, HomeView, InventoryView, OrderQuery, OrdersView, ProductQuery, RankingsView,
    SalesReport, TimeRange, WholesaleView, dashboard, inventory, orders, rankings, reports,
    wholesale,
};

/// Application state shared across all views.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AdminConfig,
    session: SessionStore,
    catalog: CatalogStore,
}

impl AppState {
    /// Create the state with an anonymous session and `catalog` as the
    /// initial store contents.
    #[must_use]
    pub fn new(config: AdminConfig, catalog: Catalog) -> Self {
        let session = SessionStore::new(config.auth.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                session,
                catalog: CatalogStore::new(catalog),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in with the demo credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] on a credential mismatch.
    pub fn login(&self, username: &str, password: &str) -> Result<Identity, AppError> {
        Ok(self.session().login(username, password)?)
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    /// Pass the login gate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if nobody is logged in.
    pub fn require_auth(&self) -> Result<RequireAuth, AppError> {
        Ok(RequireAuth::from_session(self.session())?)
    }

    /// Run `f` behind the login gate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] without calling `f` if nobody is
    /// logged in.
    pub fn guarded<T>(&self, f: impl FnOnce(&RequireAuth, &Self) -> T) -> Result<T, AppError> {
        let auth = self.require_auth()?;
        Ok(f(&auth, self))
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[must_use]
    #[instrument(skip_all, fields(user = %auth.identity().username))]
    pub fn home(&self, auth: &RequireAuth) -> HomeView {
        let snapshot = self.catalog().snapshot();
        dashboard::home_view(
            &auth.identity().username,
            snapshot.products(),
            snapshot.orders(),
            self.config().recent_orders_limit,
        )
    }

    #[must_use]
    #[instrument(skip_all, fields(user = %auth.identity().username, search = %query.search))]
    pub fn inventory(&self, auth: &RequireAuth, query: &ProductQuery) -> InventoryView {
        inventory::inventory_view(self.catalog().snapshot().products(), query)
    }

    #[must_use]
    #[instrument(skip_all, fields(user = %auth.identity().username, search = %query.search))]
    pub fn orders(&self, auth: &RequireAuth, query: &OrderQuery) -> OrdersView {
        orders::orders_view(&self.catalog().snapshot().catalog, query)
    }

    #[must_use]
    #[instrument(skip_all, fields(user = %auth.identity().username, days = time_range.days()))]
    pub fn rankings(&self, auth: &RequireAuth, time_range: TimeRange) -> RankingsView {
        let snapshot = self.catalog().snapshot();
        rankings::rankings_view(
            snapshot.products(),
            snapshot.orders(),
            time_range,
            self.config().ranking_limit,
        )
    }

    #[must_use]
    #[instrument(skip_all, fields(user = %auth.identity().username, days = time_range.days()))]
    pub fn sales_report(&self, auth: &RequireAuth, time_range: TimeRange) -> SalesReport {
        reports::sales_report(self.catalog().snapshot().orders(), time_range)
    }

    #[must_use]
    #[instrument(skip_all, fields(user = %auth.identity().username, search = %query.search))]
    pub fn wholesale(&self, auth: &RequireAuth, query: &ProductQuery) -> WholesaleView {
        wholesale::wholesale_view(
            self.catalog().snapshot().products(),
            query,
            self.config().wholesale_multiplier(),
        )
    }

    #[must_use]
    pub fn account(&self, auth: &RequireAuth) -> AccountView {
        AccountView::from(auth.identity())
    }

    /// Random per-category growth badges for the rankings page. See
    /// [`simulated`].
    pub fn simulated_trends<R: Rng>(&self, auth: &RequireAuth, rng: &mut R) -> Vec<Trend> {
        let view = self.rankings(auth, TimeRange::default());
        simulated::category_trends(&view.categories, rng)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    #[instrument(skip_all, fields(user = %auth.identity().username, product_id = %product.id))]
    pub fn update_product(&self, auth: &RequireAuth, product: Product) -> Result<(), AppError> {
        self.catalog().update_product(product)
    }

    #[instrument(skip_all, fields(user = %auth.identity().username, order_id = %order.id))]
    pub fn add_order(&self, auth: &RequireAuth, order: Order) {
        self.catalog().add_order(order);
    }

    /// Replace an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    #[instrument(skip_all, fields(user = %auth.identity().username, order_id = %order.id))]
    pub fn update_order(&self, auth: &RequireAuth, order: Order) -> Result<(), AppError> {
        self.catalog().update_order(order)
    }

    /// Add `quantity` units to a product's stock and return the updated
    /// product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    #[instrument(skip(self, auth), fields(user = %auth.identity().username))]
    pub fn restock(
        &self,
        auth: &RequireAuth,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Product, AppError> {
        let current = self
            .catalog()
            .product(product_id)
            .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;
        let updated = current.with_quantity(current.quantity.saturating_add(quantity));
        self.catalog().update_product(updated.clone())?;
        info!(
            product_id = %product_id,
            quantity = updated.quantity,
            low_stock = updated.is_low_stock(),
            "Product restocked"
        );
        Ok(updated)
    }

    /// Move an order to `status` and return the updated order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    #[instrument(skip(self, auth), fields(user = %auth.identity().username))]
    pub fn set_order_status(
        &self,
        auth: &RequireAuth,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let current = self
            .catalog()
            .order(order_id)
            .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;
        let updated = current.with_status(status);
        self.catalog().update_order(updated.clone())?;
        info!(order_id = %order_id, from = %current.status, to = %status, "Order status changed");
        Ok(updated)
    }
}
