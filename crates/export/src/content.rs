//! Pure transform from order lines to a tabular content description.

use serde::Serialize;

use orderpad_catalog::Sku;
use orderpad_orders::OrderLine;

/// Title text printed above the table.
pub const DOCUMENT_TITLE: &str = "Packing Order Summary";

/// Fixed header image reference handed to the renderer alongside the table.
pub const HEADER_LOGO: &str = "assets/logo.png";

/// Fixed column labels, in table order.
pub const COLUMNS: [&str; 6] = ["Order Number", "ID", "Quantity", "Aisle", "Price", "Type"];

/// One rendered table row.
///
/// `row_no` is a 1-based presentation sequence recomputed on every export;
/// it is not an identifier and is unrelated to the 0-based removal index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub row_no: u32,
    pub sku: Sku,
    pub quantity: u32,
    pub aisle: u32,
    pub price: String,
    pub order_type: String,
}

/// Everything the document renderer needs: logo, title, headers, rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentContent {
    pub logo: &'static str,
    pub title: &'static str,
    pub columns: [&'static str; 6],
    pub rows: Vec<TableRow>,
}

/// Build the content description for the given lines, in list order.
///
/// Pure and deterministic: two calls over the same slice yield identical
/// content.
pub fn build_content(lines: &[OrderLine]) -> DocumentContent {
    let rows = lines
        .iter()
        .enumerate()
        .map(|(position, line)| TableRow {
            row_no: position as u32 + 1,
            sku: line.sku,
            quantity: line.quantity,
            aisle: line.aisle,
            price: format_cents(line.unit_price_cents),
            order_type: line.order_type.clone(),
        })
        .collect();

    DocumentContent {
        logo: HEADER_LOGO,
        title: DOCUMENT_TITLE,
        columns: COLUMNS,
        rows,
    }
}

/// Format a cent amount as a decimal string, e.g. `1000` → `"10.00"`.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(sku: u32, quantity: u32, aisle: u32, cents: u64, order_type: &str) -> OrderLine {
        OrderLine {
            sku: Sku::new(sku),
            aisle,
            unit_price_cents: cents,
            quantity,
            order_type: order_type.to_owned(),
        }
    }

    #[test]
    fn empty_list_yields_headers_and_no_rows() {
        let content = build_content(&[]);
        assert_eq!(content.title, DOCUMENT_TITLE);
        assert_eq!(content.logo, HEADER_LOGO);
        assert_eq!(content.columns, COLUMNS);
        assert!(content.rows.is_empty());
    }

    #[test]
    fn rows_are_numbered_from_one_in_list_order() {
        let lines = [
            line(1, 3, 1, 1000, "fragile"),
            line(4, 2, 2, 100, "bulk"),
        ];

        let content = build_content(&lines);
        assert_eq!(
            content.rows,
            vec![
                TableRow {
                    row_no: 1,
                    sku: Sku::new(1),
                    quantity: 3,
                    aisle: 1,
                    price: "10.00".to_owned(),
                    order_type: "fragile".to_owned(),
                },
                TableRow {
                    row_no: 2,
                    sku: Sku::new(4),
                    quantity: 2,
                    aisle: 2,
                    price: "1.00".to_owned(),
                    order_type: "bulk".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn row_numbers_are_recomputed_after_removal() {
        let mut lines = vec![
            line(1, 1, 1, 1000, "a"),
            line(2, 1, 1, 1500, "b"),
            line(3, 1, 1, 400, "c"),
        ];
        lines.remove(1);

        let content = build_content(&lines);
        let numbers: Vec<u32> = content.rows.iter().map(|r| r.row_no).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(content.rows[1].sku, Sku::new(3));
    }

    #[test]
    fn format_cents_handles_sub_unit_amounts() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(50), "0.50");
        assert_eq!(format_cents(105), "1.05");
        assert_eq!(format_cents(1500), "15.00");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the transform is idempotent over an unchanged list.
        #[test]
        fn transform_is_idempotent(
            inputs in prop::collection::vec(
                (1u32..100, 1u32..50, 1u32..5, 1u64..10_000, "[a-z]{1,8}"),
                0..16,
            )
        ) {
            let lines: Vec<OrderLine> = inputs
                .iter()
                .map(|(sku, quantity, aisle, cents, order_type)| {
                    line(*sku, *quantity, *aisle, *cents, order_type)
                })
                .collect();

            let first = build_content(&lines);
            let second = build_content(&lines);
            prop_assert_eq!(&first, &second);

            // Dense 1-based numbering regardless of content.
            for (position, row) in first.rows.iter().enumerate() {
                prop_assert_eq!(row.row_no as usize, position + 1);
            }
        }
    }
}
