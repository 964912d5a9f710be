use crate::domain::validate::Violation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted product. `id` is assigned by the store at insert and never changes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub selected: bool,
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Request body for creating or fully overwriting a product.
///
/// `name`, `price` and `quantity` are required; `selected` and `available`
/// default to `false`/`true` when absent. The same strictness applies to POST
/// and PUT, and a PUT always overwrites all five mutable fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl ProductPayload {
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push(Violation::new("name", "must not be blank"));
        }
        if self.price < 0.0 {
            violations.push(Violation::new("price", "must not be negative"));
        }
        if self.quantity < 0 {
            violations.push(Violation::new("quantity", "must not be negative"));
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flags_default_to_false_and_true() {
        let payload: ProductPayload = serde_json::from_value(serde_json::json!({
            "name": "Pen",
            "price": 1.5,
            "quantity": 10
        }))
        .unwrap();
        assert!(!payload.selected);
        assert!(payload.available);
    }

    #[test]
    fn negative_price_and_quantity_are_violations() {
        let payload = ProductPayload {
            name: "Pen".to_string(),
            price: -1.0,
            quantity: -3,
            selected: false,
            available: true,
        };
        let violations = payload.validate();
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["price", "quantity"]);
    }

    #[test]
    fn missing_name_is_rejected_by_serde() {
        let result: Result<ProductPayload, _> =
            serde_json::from_value(serde_json::json!({ "price": 1.0, "quantity": 1 }));
        assert!(result.is_err());
    }
}
