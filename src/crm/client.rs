// client.rs
use crate::crm::models::{GetResponse, ItemFields, ListResponse};
use crate::crm::CrmError;
use reqwest::blocking::Client;
use serde_json::json;
use std::time::Duration;

/// Blocking client for the remote CRM's item endpoints.
///
/// Every call is one HTTP round trip with no retries; failures surface
/// immediately to the handler that made them.
pub struct CrmClient {
    client: Client,
    base_url: String,
    entity_type_id: i64,
}

pub struct PageOfItems {
    pub items: Vec<ItemFields>,
    pub total: i64,
}

impl CrmClient {
    pub fn new(base_url: impl Into<String>, entity_type_id: i64) -> Result<Self, CrmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CrmError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            entity_type_id,
        })
    }

    /// One page of records in the remote system's stable id order.
    pub fn list_items(&self, start: i64, limit: i64) -> Result<PageOfItems, CrmError> {
        let body = json!({
            "entityTypeId": self.entity_type_id,
            "start": start,
            "limit": limit,
        });

        let resp = self
            .client
            .post(format!("{}/crm.item.list", self.base_url))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| CrmError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| CrmError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(CrmError::Status(format!("{status}: {text}")));
        }

        let parsed: ListResponse =
            serde_json::from_str(&text).map_err(|e| CrmError::JsonParse(e.to_string()))?;

        let items = parsed
            .result
            .ok_or_else(|| CrmError::UnexpectedShape("result missing".to_string()))?
            .items;

        Ok(PageOfItems {
            items,
            total: parsed.total.unwrap_or(0),
        })
    }

    /// One fully-resolved record, or `CrmError::NotFound` when the remote
    /// answers without an item.
    pub fn get_item(&self, id: i64) -> Result<ItemFields, CrmError> {
        let resp = self
            .client
            .get(format!("{}/crm.item.get", self.base_url))
            .query(&[
                ("id", id.to_string()),
                ("entityTypeId", self.entity_type_id.to_string()),
            ])
            .send()
            .map_err(|e| CrmError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| CrmError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(CrmError::Status(format!("{status}: {text}")));
        }

        let parsed: GetResponse =
            serde_json::from_str(&text).map_err(|e| CrmError::JsonParse(e.to_string()))?;

        parsed
            .result
            .and_then(|r| r.item)
            .ok_or(CrmError::NotFound)
    }

    pub fn delete_item(&self, id: i64) -> Result<(), CrmError> {
        let body = json!({
            "entityTypeId": self.entity_type_id,
            "id": id,
        });

        let resp = self
            .client
            .post(format!("{}/crm.item.delete", self.base_url))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| CrmError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(CrmError::Status(format!("{status}: {text}")));
        }

        Ok(())
    }
}
