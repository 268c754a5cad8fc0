//! Behavioral event payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A batch of named events for one customer, sent to the events endpoint
/// as-is (no normalization beyond what the caller supplied).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event name mapped to its arbitrary key/value payload.
    pub events: HashMap<String, HashMap<String, Value>>,
    /// Customer the events belong to.
    pub customer_id: String,
    /// Optional contact fields for anonymous or guest attribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Event {
    /// Create an empty event batch for a customer.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }

    /// Add a named event with its payload.
    pub fn event(
        mut self,
        name: impl Into<String>,
        payload: HashMap<String, Value>,
    ) -> Self {
        self.events.insert(name.into(), payload);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let event = Event::new("c1").event(
            "place_order",
            HashMap::from([("total".to_string(), json!(42))]),
        );
        let wire = serde_json::to_value(&event).unwrap();
        assert_eq!(wire["customerId"], "c1");
        assert_eq!(wire["events"]["place_order"]["total"], 42);
        assert!(wire.get("mobile").is_none());
    }
}
