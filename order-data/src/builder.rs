//! Document builder: one raw order row → one indexable document.
//!
//! Pure transform, no I/O. The two renderings are derived from the same
//! record; the consumer rendering must never carry profit figures, the
//! business rendering always does and never reuses the consumer descriptors.

use crate::ranges::{AmountRange, ProfitRange, QuantityRange};
use crate::record::{OrderDocument, OrderRecord};

/// Builds the indexable document for `record` at source row `index`.
///
/// The document id is `order_{index}`, stable per input row, so a full
/// rebuild from the same file produces an identical document set.
pub fn build_document(index: usize, record: &OrderRecord) -> OrderDocument {
    OrderDocument {
        id: format!("order_{index}"),
        order_id: record.order_id.clone(),
        amount: record.amount,
        profit: record.profit,
        quantity: record.quantity,
        category: record.category.clone(),
        sub_category: record.sub_category.clone(),
        content: consumer_content(record),
        business_content: business_content(record),
        amount_range: AmountRange::from_amount(record.amount),
        profit_range: ProfitRange::from_profit(record.profit),
        quantity_range: QuantityRange::from_quantity(record.quantity),
    }
}

/// Builds documents for a full record set, in row order.
pub fn build_documents(records: &[OrderRecord]) -> Vec<OrderDocument> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| build_document(i, r))
        .collect()
}

/// Consumer-facing rendering: product, category, price and availability.
/// No profit figures, ever.
fn consumer_content(record: &OrderRecord) -> String {
    let price = price_descriptor(record.amount);
    let quality = quality_descriptor(record.amount);
    let availability = availability_descriptor(record.quantity);

    format!(
        "Product: {} from {} category. Price: ${:.2}, Quantity available: {}. \
         This is a {price} item with {quality} quality. {availability}.",
        record.sub_category, record.category, record.amount, record.quantity,
    )
}

/// Business-facing rendering: price, profit, quantity, amount bucket and
/// profitability. Does not use the consumer descriptors.
fn business_content(record: &OrderRecord) -> String {
    let profitability = profit_descriptor(record.profit);
    let amount_range = AmountRange::from_amount(record.amount).as_str();

    format!(
        "Product: {} from {} category. Price: ${:.2}, Profit: ${:.2}, \
         Quantity available: {}. This is a {amount_range}-priced item with {profitability}.",
        record.sub_category, record.category, record.amount, record.profit, record.quantity,
    )
}

fn price_descriptor(amount: f64) -> &'static str {
    if amount < 100.0 {
        "affordable"
    } else if amount < 500.0 {
        "mid-range"
    } else {
        "premium"
    }
}

// Price-correlated, not a real quality signal.
fn quality_descriptor(amount: f64) -> &'static str {
    if amount < 100.0 {
        "good value"
    } else if amount < 500.0 {
        "high quality"
    } else {
        "luxury"
    }
}

fn availability_descriptor(quantity: u32) -> &'static str {
    if quantity <= 2 {
        "Limited stock available"
    } else if quantity <= 5 {
        "Moderate availability"
    } else {
        "Good stock availability"
    }
}

fn profit_descriptor(profit: f64) -> &'static str {
    if profit > 0.0 {
        "positive profitability"
    } else if profit < 0.0 {
        "negative profitability"
    } else {
        "break-even"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: f64, profit: f64, quantity: u32) -> OrderRecord {
        OrderRecord {
            order_id: "B-25601".to_string(),
            amount,
            profit,
            quantity,
            category: "Furniture".to_string(),
            sub_category: "Chairs".to_string(),
        }
    }

    #[test]
    fn cheap_loss_single_item_scenario() {
        let doc = build_document(0, &record(50.0, -5.0, 1));

        assert_eq!(doc.id, "order_0");
        assert_eq!(doc.amount_range, AmountRange::Low);
        assert_eq!(doc.profit_range, ProfitRange::Loss);
        assert_eq!(doc.quantity_range, QuantityRange::Small);

        assert!(doc.content.contains("affordable"));
        assert!(doc.content.contains("Limited stock available"));

        assert!(doc.business_content.contains("Profit: $-5.00"));
        assert!(doc.business_content.contains("negative profitability"));
        assert!(!doc.business_content.contains("affordable"));
    }

    #[test]
    fn consumer_content_never_leaks_profit() {
        for (amount, profit, quantity) in [
            (50.0, -5.0, 1),
            (250.0, 42.5, 4),
            (750.0, 130.0, 9),
            (99.99, 0.0, 2),
        ] {
            let doc = build_document(7, &record(amount, profit, quantity));
            assert!(!doc.content.contains("Profit"));
            assert!(!doc.content.contains(&format!("{profit:.2}")));
            assert!(!doc.content.contains("profitability"));
        }
    }

    #[test]
    fn business_content_always_carries_profit() {
        for profit in [-12.3, 0.0, 0.01, 49.99, 200.0] {
            let doc = build_document(1, &record(320.0, profit, 3));
            assert!(doc.business_content.contains(&format!("${profit:.2}")));
        }
    }

    #[test]
    fn descriptors_follow_amount_thresholds() {
        let mid = build_document(0, &record(100.0, 10.0, 3));
        assert!(mid.content.contains("mid-range"));
        assert!(mid.content.contains("high quality"));
        assert!(mid.content.contains("Moderate availability"));

        let premium = build_document(0, &record(500.0, 10.0, 6));
        assert!(premium.content.contains("premium"));
        assert!(premium.content.contains("luxury"));
        assert!(premium.content.contains("Good stock availability"));
    }

    #[test]
    fn break_even_wording() {
        let doc = build_document(0, &record(10.0, 0.0, 1));
        assert!(doc.business_content.contains("break-even"));
    }
}
