//! Customer identification: request types, validation, and the attribute
//! normalizer that produces the wire payload.

use crate::error::GameballError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Request to register or identify a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeCustomerRequest {
    /// Unique customer identifier in the host system. Must not be blank.
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Referral code the customer signed up with, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_attributes: Option<CustomerAttributes>,
    /// Push-notification device token. Requires `push_provider`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    /// Push provider identifier (e.g. "fcm"). Requires `device_token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_provider: Option<String>,
    /// Guest flag; defaults to `false` on the wire when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
}

impl InitializeCustomerRequest {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }
}

/// Structured customer attributes.
///
/// Standard fields pass through to the wire unchanged. `custom_attributes`
/// lands under a `custom` key; `additional_attributes` is flattened into the
/// top level of the attributes object, last, so its keys win collisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_attributes: Option<HashMap<String, String>>,
}

/// Response from the customer identify endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeCustomerResponse {
    /// Platform-assigned customer identifier.
    pub gameball_id: String,
}

/// Validate an identify request before any normalization or I/O.
pub fn validate(request: &InitializeCustomerRequest) -> Result<(), GameballError> {
    if request.customer_id.trim().is_empty() {
        return Err(GameballError::EmptyCustomerId);
    }
    match (&request.device_token, &request.push_provider) {
        (Some(_), None) => Err(GameballError::MissingPushProvider),
        (None, Some(_)) => Err(GameballError::MissingDeviceToken),
        _ => Ok(()),
    }
}

/// Transform an identify request into the wire payload.
///
/// Injects `osType` and a defaulted `isGuest` at the top level and
/// `channel = "mobile"` inside `customerAttributes`. Additional attributes
/// are applied last, overwriting colliding keys.
pub fn normalize(request: &InitializeCustomerRequest, os_type: &str) -> Result<Value, GameballError> {
    let mut payload = match serde_json::to_value(request)
        .map_err(|e| GameballError::Serialization(e.to_string()))?
    {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    payload.insert("osType".to_string(), json!(os_type));
    payload.insert("isGuest".to_string(), json!(request.is_guest.unwrap_or(false)));

    let mut attributes = Map::new();
    attributes.insert("channel".to_string(), json!("mobile"));

    if let Some(source) = &request.customer_attributes {
        if let Value::Object(standard) = serde_json::to_value(source)
            .map_err(|e| GameballError::Serialization(e.to_string()))?
        {
            for (key, value) in standard {
                if key != "customAttributes" && key != "additionalAttributes" {
                    attributes.insert(key, value);
                }
            }
        }
        if let Some(custom) = &source.custom_attributes {
            attributes.insert("custom".to_string(), json!(custom));
        }
        // Flattened last: additional-attribute keys win on collision.
        if let Some(additional) = &source.additional_attributes {
            for (key, value) in additional {
                attributes.insert(key.clone(), json!(value));
            }
        }
    }

    payload.insert("customerAttributes".to_string(), Value::Object(attributes));
    Ok(Value::Object(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_customer_id_rejected() {
        for id in ["", "   "] {
            let request = InitializeCustomerRequest::new(id);
            assert_eq!(validate(&request), Err(GameballError::EmptyCustomerId));
        }
    }

    #[test]
    fn test_device_token_requires_push_provider() {
        let mut request = InitializeCustomerRequest::new("c1");
        request.device_token = Some("abc".to_string());
        assert_eq!(validate(&request), Err(GameballError::MissingPushProvider));
    }

    #[test]
    fn test_push_provider_requires_device_token() {
        let mut request = InitializeCustomerRequest::new("c1");
        request.push_provider = Some("fcm".to_string());
        assert_eq!(validate(&request), Err(GameballError::MissingDeviceToken));
    }

    #[test]
    fn test_paired_or_absent_is_valid() {
        let request = InitializeCustomerRequest::new("c1");
        assert!(validate(&request).is_ok());

        let mut request = InitializeCustomerRequest::new("c1");
        request.device_token = Some("abc".to_string());
        request.push_provider = Some("fcm".to_string());
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_normalize_defaults_without_attributes() {
        let request = InitializeCustomerRequest::new("c1");
        let payload = normalize(&request, "ios").unwrap();
        assert_eq!(payload["osType"], "ios");
        assert_eq!(payload["isGuest"], false);
        assert_eq!(
            payload["customerAttributes"],
            json!({ "channel": "mobile" })
        );
    }

    #[test]
    fn test_normalize_preserves_guest_flag() {
        let mut request = InitializeCustomerRequest::new("c1");
        request.is_guest = Some(true);
        let payload = normalize(&request, "android").unwrap();
        assert_eq!(payload["isGuest"], true);
    }

    #[test]
    fn test_normalize_standard_fields_pass_through() {
        let mut request = InitializeCustomerRequest::new("c1");
        request.customer_attributes = Some(CustomerAttributes {
            first_name: Some("Nadia".to_string()),
            preferred_language: Some("ar".to_string()),
            ..Default::default()
        });
        let payload = normalize(&request, "android").unwrap();
        let attrs = &payload["customerAttributes"];
        assert_eq!(attrs["channel"], "mobile");
        assert_eq!(attrs["firstName"], "Nadia");
        assert_eq!(attrs["preferredLanguage"], "ar");
        assert!(attrs.get("customAttributes").is_none());
    }

    #[test]
    fn test_normalize_additional_attributes_win_collisions() {
        let mut request = InitializeCustomerRequest::new("c1");
        request.customer_attributes = Some(CustomerAttributes {
            custom_attributes: Some(HashMap::from([(
                "tier".to_string(),
                "gold".to_string(),
            )])),
            additional_attributes: Some(HashMap::from([(
                "tier".to_string(),
                "silver".to_string(),
            )])),
            ..Default::default()
        });
        let payload = normalize(&request, "android").unwrap();
        let attrs = &payload["customerAttributes"];
        assert_eq!(attrs["tier"], "silver");
        assert_eq!(attrs["custom"], json!({ "tier": "gold" }));
    }

    #[test]
    fn test_response_deserializes_from_wire() {
        let response: InitializeCustomerResponse =
            serde_json::from_value(json!({ "gameballId": "g1" })).unwrap();
        assert_eq!(response.gameball_id, "g1");
    }
}
