use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Wire shapes for the Bitrix-style smart-process endpoints.
//
// crm.item.list  -> { "result": { "items": [ItemFields] }, "total": n }
// crm.item.get   -> { "result": { "item": ItemFields } }
// crm.item.delete-> { "result": ... } (body ignored beyond HTTP status)
//
// Property fields are opaque user-field keys (ufCrm7_<timestamp>); the rename
// attributes below are the only place those codes appear. Values come back as
// strings or numbers depending on how the record was saved, so scalar fields
// go through the tolerant deserializers at the bottom.

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub result: Option<ListResult>,
    pub total: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ListResult {
    #[serde(default)]
    pub items: Vec<ItemFields>,
}

#[derive(Debug, Deserialize)]
pub struct GetResponse {
    pub result: Option<GetResult>,
}

#[derive(Debug, Deserialize)]
pub struct GetResult {
    pub item: Option<ItemFields>,
}

#[derive(Debug, Deserialize)]
pub struct ItemFields {
    pub id: i64,

    #[serde(rename = "ufCrm7_1746709619520", default, deserialize_with = "de_opt_string")]
    pub title: Option<String>,

    #[serde(rename = "ufCrm7_1743829019488", default, deserialize_with = "de_opt_i64")]
    pub emirate: Option<i64>,

    #[serde(rename = "ufCrm7_1743829187045", default, deserialize_with = "de_opt_string")]
    pub building_name: Option<String>,

    #[serde(rename = "ufCrm7_1743829195831", default, deserialize_with = "de_opt_string")]
    pub address: Option<String>,

    #[serde(rename = "ufCrm7_1743829247734", default, deserialize_with = "de_opt_string")]
    pub property_type: Option<String>,

    #[serde(rename = "ufCrm7_1743829448289", default, deserialize_with = "de_opt_i64")]
    pub listing_type: Option<i64>,

    #[serde(rename = "ufCrm7_1743829543608", default, deserialize_with = "de_opt_i64")]
    pub status: Option<i64>,

    #[serde(rename = "ufCrm7_1743829576957", default, deserialize_with = "de_opt_string")]
    pub price: Option<String>,

    #[serde(rename = "ufCrm7_1743829315467", default, deserialize_with = "de_opt_string")]
    pub sqft: Option<String>,

    #[serde(rename = "ufCrm7_1743829267783", default, deserialize_with = "de_opt_string")]
    pub bedrooms: Option<String>,

    #[serde(rename = "ufCrm7_1743829278192", default, deserialize_with = "de_opt_string")]
    pub bathrooms: Option<String>,

    #[serde(rename = "ufCrm7_1746461192", default, deserialize_with = "de_opt_string")]
    pub description: Option<String>,

    #[serde(rename = "ufCrm7_1746461204", default)]
    pub amenities: Vec<String>,

    #[serde(rename = "ufCrm7_1743856030", default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRef {
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "urlMachine", default, deserialize_with = "de_opt_string")]
    pub url_machine: Option<String>,
}

/// Accepts a JSON string or number, yields its string form.
fn de_opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Accepts a JSON number or a numeric string.
fn de_opt_i64<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    })
}
