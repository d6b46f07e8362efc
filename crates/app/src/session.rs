//! One user's order-entry session.

use std::sync::Arc;

use orderpad_catalog::{Catalog, Sku};
use orderpad_core::{DomainError, DomainResult, Entity, SessionId};
use orderpad_export::{build_content, DocumentRenderer, ExportError};
use orderpad_notify::{Notification, NotificationSink};
use orderpad_orders::{OrderDraft, OrderList};

/// The session owning one draft, one order list, and the export gate.
///
/// Single-threaded by construction: each method runs synchronously in
/// response to one discrete user action and either completes or no-ops.
pub struct OrderSession {
    id: SessionId,
    catalog: Catalog,
    draft: OrderDraft,
    orders: OrderList,
    export_enabled: bool,
    sink: Arc<dyn NotificationSink>,
}

impl OrderSession {
    pub fn new(catalog: Catalog, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            id: SessionId::new(),
            catalog,
            draft: OrderDraft::new(),
            orders: OrderList::new(),
            export_enabled: false,
            sink,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn orders(&self) -> &OrderList {
        &self.orders
    }

    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    /// Select a SKU into the draft, populating the derived aisle/price.
    ///
    /// A lookup miss clears the derived fields and notifies the user; it
    /// never blocks further interaction.
    pub fn select_sku(&mut self, sku: Sku) -> DomainResult<()> {
        let result = self.draft.select_sku(sku, &self.catalog);
        if result.is_err() {
            tracing::warn!(session_id = %self.id, %sku, "sku not in catalog");
            self.notify(format!("SKU {sku} is not in the catalog"));
        }
        result
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.draft.set_quantity(quantity);
    }

    pub fn set_order_type(&mut self, order_type: impl Into<String>) {
        self.draft.set_order_type(order_type);
    }

    /// Commit the draft as a new line at the end of the order list.
    ///
    /// On a valid draft the snapshot is appended, the draft resets to
    /// `Empty`, and a success notification is emitted. On an invalid draft
    /// every field is marked touched, a failure notification is emitted,
    /// and the list is unchanged.
    pub fn add_order(&mut self) -> DomainResult<()> {
        match self.draft.commit() {
            Ok(line) => {
                tracing::info!(
                    session_id = %self.id,
                    sku = %line.sku,
                    quantity = line.quantity,
                    "order line added"
                );
                self.orders.append(line);
                self.notify("Order added to the packing list");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(session_id = %self.id, %err, "order rejected");
                self.notify("Order could not be added, please review the form");
                Err(err)
            }
        }
    }

    /// Remove the line at `index` (0-based).
    ///
    /// Out-of-range indices are a silent no-op; an actual removal emits a
    /// notification.
    pub fn remove_order(&mut self, index: usize) {
        if let Some(line) = self.orders.remove_at(index) {
            tracing::info!(session_id = %self.id, index, sku = %line.sku, "order line removed");
            self.notify("Order removed from the packing list");
        }
    }

    /// Toggle the export gate. Independent of list emptiness.
    pub fn set_export_enabled(&mut self, enabled: bool) {
        self.export_enabled = enabled;
    }

    /// Build the tabular content for the current list and hand it to the
    /// renderer.
    ///
    /// Rejected as an invariant violation while the gate is off or the
    /// list is empty. A renderer failure surfaces the same way and alters
    /// no session state.
    pub fn export(&self, renderer: &mut dyn DocumentRenderer) -> DomainResult<()> {
        if !self.export_enabled {
            return Err(ExportError::Disabled.into());
        }
        if self.orders.is_empty() {
            return Err(ExportError::EmptyOrderList.into());
        }

        let content = build_content(self.orders.lines());
        renderer.render(&content).map_err(DomainError::from)?;
        tracing::info!(session_id = %self.id, rows = content.rows.len(), "order list exported");
        Ok(())
    }

    fn notify(&self, message: impl Into<String>) {
        self.sink.notify(&Notification::new(message));
    }
}

impl Entity for OrderSession {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
