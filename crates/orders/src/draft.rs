//! The in-progress order draft and its validity state machine.

use serde::{Deserialize, Serialize};

use orderpad_catalog::{Catalog, Sku};
use orderpad_core::{DomainError, DomainResult};

use crate::line::OrderLine;

/// Validity state of the draft.
///
/// A pristine draft is `Empty`. From the first field mutation onward the
/// draft is `Invalid` while any required field is unset or ill-typed and
/// `Valid` once everything is set and well-typed; there is no intermediate
/// editing state. A successful commit resets it to `Empty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftState {
    #[default]
    Empty,
    Valid,
    Invalid,
}

/// Which fields the user has interacted with, for surfacing validation
/// errors. Derived fields are marked together with the SKU selection that
/// populates them; a rejected commit marks everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchedFields {
    pub sku: bool,
    pub aisle: bool,
    pub unit_price: bool,
    pub quantity: bool,
    pub order_type: bool,
}

impl TouchedFields {
    pub fn mark_all(&mut self) {
        *self = Self {
            sku: true,
            aisle: true,
            unit_price: true,
            quantity: true,
            order_type: true,
        };
    }

    pub fn all(&self) -> bool {
        self.sku && self.aisle && self.unit_price && self.quantity && self.order_type
    }

    pub fn any(&self) -> bool {
        self.sku || self.aisle || self.unit_price || self.quantity || self.order_type
    }
}

/// The one line item currently being composed.
///
/// Aisle and unit price are derived: they are only ever written by a catalog
/// lookup during SKU selection, never by the user, yet they are part of the
/// committed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    sku: Option<Sku>,
    aisle: Option<u32>,
    unit_price_cents: Option<u64>,
    quantity: Option<u32>,
    order_type: Option<String>,
    touched: TouchedFields,
    state: DraftState,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn touched(&self) -> TouchedFields {
        self.touched
    }

    pub fn sku(&self) -> Option<Sku> {
        self.sku
    }

    pub fn aisle(&self) -> Option<u32> {
        self.aisle
    }

    pub fn unit_price_cents(&self) -> Option<u64> {
        self.unit_price_cents
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    pub fn order_type(&self) -> Option<&str> {
        self.order_type.as_deref()
    }

    /// Select a SKU, populating the derived aisle/price from the catalog.
    ///
    /// On a lookup miss the SKU and both derived fields are cleared rather
    /// than left over from a previous selection, so a stale aisle/price pair
    /// can never be committed. The miss is reported but never blocks further
    /// interaction.
    pub fn select_sku(&mut self, sku: Sku, catalog: &Catalog) -> DomainResult<()> {
        self.touched.sku = true;
        self.touched.aisle = true;
        self.touched.unit_price = true;

        match catalog.find_by_sku(sku) {
            Some(entry) => {
                self.sku = Some(entry.sku);
                self.aisle = Some(entry.aisle);
                self.unit_price_cents = Some(entry.unit_price_cents);
                self.recompute_state();
                Ok(())
            }
            None => {
                self.sku = None;
                self.aisle = None;
                self.unit_price_cents = None;
                self.recompute_state();
                Err(DomainError::not_found())
            }
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = Some(quantity);
        self.touched.quantity = true;
        self.recompute_state();
    }

    pub fn set_order_type(&mut self, order_type: impl Into<String>) {
        self.order_type = Some(order_type.into());
        self.touched.order_type = true;
        self.recompute_state();
    }

    /// Whether every required field is set and well-typed (quantity
    /// positive, order type non-blank, derived fields populated).
    pub fn is_valid(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Snapshot all fields into an `OrderLine` and reset the draft.
    ///
    /// On an incomplete or ill-typed draft every field is marked touched,
    /// the state moves to `Invalid`, and no line is produced; the list the
    /// caller appends to must stay unchanged.
    pub fn commit(&mut self) -> DomainResult<OrderLine> {
        match self.snapshot() {
            Some(line) => {
                self.reset();
                Ok(line)
            }
            None => {
                self.touched.mark_all();
                self.state = DraftState::Invalid;
                Err(DomainError::validation(
                    "order draft has missing or invalid fields",
                ))
            }
        }
    }

    /// Clear all fields and return to the pristine `Empty` state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn snapshot(&self) -> Option<OrderLine> {
        let quantity = self.quantity.filter(|q| *q > 0)?;
        let order_type = self
            .order_type
            .as_deref()
            .filter(|t| !t.trim().is_empty())?
            .to_owned();

        Some(OrderLine {
            sku: self.sku?,
            aisle: self.aisle?,
            unit_price_cents: self.unit_price_cents?,
            quantity,
            order_type,
        })
    }

    fn recompute_state(&mut self) {
        self.state = if self.is_valid() {
            DraftState::Valid
        } else {
            DraftState::Invalid
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::seeded()
    }

    #[test]
    fn starts_empty_and_untouched() {
        let draft = OrderDraft::new();
        assert_eq!(draft.state(), DraftState::Empty);
        assert!(!draft.touched().any());
    }

    #[test]
    fn selecting_a_seeded_sku_populates_derived_fields() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(1), &catalog).unwrap();

        assert_eq!(draft.sku(), Some(Sku::new(1)));
        assert_eq!(draft.aisle(), Some(1));
        assert_eq!(draft.unit_price_cents(), Some(1000));
    }

    #[test]
    fn partially_filled_draft_reports_invalid() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(1), &catalog).unwrap();
        assert_eq!(draft.state(), DraftState::Invalid);

        draft.set_quantity(2);
        assert_eq!(draft.state(), DraftState::Invalid);
    }

    #[test]
    fn lookup_miss_clears_stale_derived_fields() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(2), &catalog).unwrap();
        assert_eq!(draft.unit_price_cents(), Some(1500));

        let err = draft.select_sku(Sku::new(99), &catalog).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(draft.sku(), None);
        assert_eq!(draft.aisle(), None);
        assert_eq!(draft.unit_price_cents(), None);
        assert!(draft.touched().sku);
    }

    #[test]
    fn becomes_valid_once_all_fields_are_set() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(3), &catalog).unwrap();
        assert_eq!(draft.state(), DraftState::Invalid);

        draft.set_quantity(2);
        assert_eq!(draft.state(), DraftState::Invalid);

        draft.set_order_type("fragile");
        assert_eq!(draft.state(), DraftState::Valid);
    }

    #[test]
    fn zero_quantity_is_not_valid() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(3), &catalog).unwrap();
        draft.set_order_type("bulk");
        draft.set_quantity(0);
        assert_eq!(draft.state(), DraftState::Invalid);
        assert!(!draft.is_valid());
    }

    #[test]
    fn blank_order_type_is_not_valid() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(3), &catalog).unwrap();
        draft.set_quantity(1);
        draft.set_order_type("   ");
        assert_eq!(draft.state(), DraftState::Invalid);
    }

    #[test]
    fn commit_of_valid_draft_snapshots_and_resets() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(1), &catalog).unwrap();
        draft.set_quantity(3);
        draft.set_order_type("fragile");

        let line = draft.commit().unwrap();
        assert_eq!(
            line,
            OrderLine {
                sku: Sku::new(1),
                aisle: 1,
                unit_price_cents: 1000,
                quantity: 3,
                order_type: "fragile".to_owned(),
            }
        );

        assert_eq!(draft.state(), DraftState::Empty);
        assert!(!draft.touched().any());
        assert_eq!(draft.sku(), None);
    }

    #[test]
    fn commit_of_incomplete_draft_marks_all_fields_touched() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.select_sku(Sku::new(1), &catalog).unwrap();
        draft.set_order_type("fragile");
        // quantity never set

        let err = draft.commit().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(draft.state(), DraftState::Invalid);
        assert!(draft.touched().all());

        // Fields survive a rejected commit so the user can fix them.
        assert_eq!(draft.sku(), Some(Sku::new(1)));
        assert_eq!(draft.order_type(), Some("fragile"));
    }

    #[test]
    fn repeated_invalid_commits_have_no_further_effect() {
        let mut draft = OrderDraft::new();

        let first = draft.commit().unwrap_err();
        let state = draft.state();
        let touched = draft.touched();

        let second = draft.commit().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(draft.state(), state);
        assert_eq!(draft.touched(), touched);
    }

    #[test]
    fn draft_recovers_to_valid_after_rejected_commit() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.commit().unwrap_err();
        assert_eq!(draft.state(), DraftState::Invalid);

        draft.select_sku(Sku::new(2), &catalog).unwrap();
        assert_eq!(draft.state(), DraftState::Invalid);

        draft.set_quantity(1);
        draft.set_order_type("standard");
        assert_eq!(draft.state(), DraftState::Valid);
    }
}
