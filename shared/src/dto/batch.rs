use crate::domain::risk::Reading;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tested lot of grain as returned by `GET /api/batches`.
///
/// The `aflatoxin` field is kept as raw JSON because the backing store is
/// inconsistently typed (number, numeric string, or absent); [`Batch::reading`]
/// applies the coercion contract. Grain-quality fields (moisture, broken
/// kernels, infestation flags, ...) are pass-through data owned by the
/// backend and are carried opaquely in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub batch_id: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub aflatoxin: Value,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_on_market: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Batch {
    /// The aflatoxin reading, coerced per the fail-open contract.
    pub fn reading(&self) -> Reading {
        Reading::from_raw(Some(&self.aflatoxin))
    }
}

/// Body of `PUT /api/batches/{id}/market`: put a batch up for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketListingRequest {
    pub quantity: f64,
    pub price_per_kg: f64,
}

/// Body of `POST /api/tests`: request a new aflatoxin test for a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRequest {
    pub batch_id: String,
    pub supplier: String,
    pub date: String,
    pub user_id: String,
    pub user_name: String,
    pub laboratory_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::RiskCategory;

    #[test]
    fn batch_parses_backend_shape_with_quality_fields() {
        let json = r#"{
            "_id": "b1",
            "batchId": "MAIZE-2025-014",
            "supplier": "Nyagatare Farmers",
            "date": "2025-06-01",
            "aflatoxin": "7.5",
            "userId": "u1",
            "userName": "alice@coop.rw",
            "createdAt": "2025-06-02T08:00:00Z",
            "isOnMarket": true,
            "availableQuantity": 100,
            "pricePerKg": 250,
            "moisture_maize_grain": 12.5,
            "Liveinfestation": false
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.batch_id, "MAIZE-2025-014");
        assert_eq!(batch.reading().ppb(), 7.5);
        assert_eq!(batch.reading().classify(), RiskCategory::AdultsOnly);
        assert_eq!(batch.available_quantity, Some(100.0));
        assert_eq!(batch.extra["moisture_maize_grain"], 12.5);
    }

    #[test]
    fn missing_aflatoxin_reads_as_zero() {
        let batch: Batch =
            serde_json::from_str(r#"{"_id": "b2", "userId": "u1", "userName": "alice"}"#).unwrap();
        assert_eq!(batch.reading().ppb(), 0.0);
        assert!(!batch.is_on_market);
    }

    #[test]
    fn listing_request_uses_camel_case() {
        let request = MarketListingRequest {
            quantity: 100.0,
            price_per_kg: 250.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["quantity"], 100.0);
        assert_eq!(json["pricePerKg"], 250.0);
    }
}
