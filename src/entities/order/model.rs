//! Order entity model

use crate::core::Record;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle of an order
///
/// Any status may move to any other through an update, except `Delivered`,
/// which is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }

    /// Parse the wire form ("out-for-delivery", ...); exact match only
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Delivered
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dish line of an order
///
/// Only `quantity` is interpreted. The copied dish fields (id, name, price
/// and whatever else the client sent) are kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderItem {
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity,
            details: Map::new(),
        }
    }

    /// Attach a copied dish field
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

/// A positive whole quantity; `2.0` counts as `2`
pub fn whole_quantity(value: &Value) -> Option<u64> {
    if let Some(quantity) = value.as_u64() {
        return (quantity >= 1).then_some(quantity);
    }
    let quantity = value.as_f64()?;
    let whole = quantity.fract() == 0.0 && quantity >= 1.0 && quantity <= u64::MAX as f64;
    whole.then_some(quantity as u64)
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_quantity(&value).ok_or_else(|| {
        de::Error::custom(format!("quantity must be a whole number of at least 1, got {value}"))
    })
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderItem>,
}

impl Record for Order {
    const RESOURCE: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Order fields decoded from a validated request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderItem>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl OrderDraft {
    /// New order; status defaults to pending
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status.unwrap_or_default(),
            dishes: self.dishes,
        }
    }

    /// Overwrite the mutable fields of `order`, keeping its id
    pub fn apply_to(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        order.dishes = self.dishes;
        if let Some(status) = self.status {
            order.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out-for-delivery")
        );
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
            assert_eq!(
                serde_json::from_value::<OrderStatus>(json!(status.as_str())).unwrap(),
                status
            );
        }
    }

    #[test]
    fn test_status_parse_is_exact() {
        assert_eq!(OrderStatus::parse("Pending"), None);
        assert_eq!(OrderStatus::parse("out_for_delivery"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        let terminal: Vec<OrderStatus> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![OrderStatus::Delivered]);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let draft: OrderDraft = serde_json::from_value(json!({
            "deliverTo": "1 Main St",
            "mobileNumber": "555-0100",
            "dishes": [{"id": "d1", "name": "Taco", "price": 5, "quantity": 2}]
        }))
        .unwrap();
        let order = draft.into_order("o1".to_string());

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["deliverTo"], "1 Main St");
        assert_eq!(json["mobileNumber"], "555-0100");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["dishes"][0]["quantity"], 2);
        assert_eq!(json["dishes"][0]["price"], 5);
        assert!(json["dishes"][0].get("image_url").is_none());
    }

    #[test]
    fn test_item_keeps_unknown_fields_as_sent() {
        let line = json!({"id": 7, "price": "5", "note": "no onions", "quantity": 1});
        let item: OrderItem = serde_json::from_value(line.clone()).unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.details["id"], 7);
        assert_eq!(serde_json::to_value(&item).unwrap(), line);
    }

    #[test]
    fn test_whole_float_quantity_is_normalized() {
        let item: OrderItem = serde_json::from_value(json!({"quantity": 2.0})).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"quantity": 2}));
    }

    #[test]
    fn test_whole_quantity() {
        assert_eq!(whole_quantity(&json!(3)), Some(3));
        assert_eq!(whole_quantity(&json!(3.0)), Some(3));
        assert_eq!(whole_quantity(&json!(1.5)), None);
        assert_eq!(whole_quantity(&json!(0)), None);
        assert_eq!(whole_quantity(&json!(0.0)), None);
        assert_eq!(whole_quantity(&json!(-2)), None);
        assert_eq!(whole_quantity(&json!("2")), None);
    }

    #[test]
    fn test_apply_keeps_status_when_absent() {
        let mut order = Order {
            id: "o1".to_string(),
            deliver_to: "a".to_string(),
            mobile_number: "b".to_string(),
            status: OrderStatus::Preparing,
            dishes: vec![],
        };
        let draft: OrderDraft = serde_json::from_value(json!({
            "deliverTo": "new",
            "mobileNumber": "b",
            "dishes": [{"quantity": 1}]
        }))
        .unwrap();

        draft.apply_to(&mut order);
        assert_eq!(order.deliver_to, "new");
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.id, "o1");
    }
}
