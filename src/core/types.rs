//! Core data types for the IP lookup service.
//!
//! Result records produced by the response mapper, plus the request
//! and response bodies of the direct HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geolocation subset returned by `ip_geo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoResult {
    pub city: String,
    pub region: String,
    pub country: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Full lookup record returned by `ip_lookup`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullLookupResult {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub timezone: String,
    pub postal_code: String,
    /// Autonomous system number (e.g. "AS15169")
    pub asn: String,
    /// Autonomous system name
    pub org: String,
    pub is_anonymous: bool,
    pub is_hosting: bool,
    pub is_anycast: bool,
    pub is_mobile: bool,
}

/// ASN and country/continent record returned by `ip_lite`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiteResult {
    pub ip: String,
    pub asn: String,
    pub as_name: String,
    pub as_domain: String,
    pub country_code: String,
    pub country: String,
    pub continent_code: String,
    pub continent: String,
}

/// Any tool result; serializes as the flat record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Geo(GeoResult),
    Full(FullLookupResult),
    Lite(LiteResult),
}

impl LookupResult {
    /// Record as a JSON object
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<GeoResult> for LookupResult {
    fn from(result: GeoResult) -> Self {
        LookupResult::Geo(result)
    }
}

impl From<FullLookupResult> for LookupResult {
    fn from(result: FullLookupResult) -> Self {
        LookupResult::Full(result)
    }
}

impl From<LiteResult> for LookupResult {
    fn from(result: LiteResult) -> Self {
        LookupResult::Lite(result)
    }
}

/// Tool descriptor as listed by both transports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Body of `GET /tools`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolDescriptor>,
}

/// Body of `POST /call`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    pub name: String,

    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Successful `POST /call` response
#[derive(Debug, Clone, Serialize)]
pub struct CallResponse {
    pub result: LookupResult,
}

/// Error body of `POST /call`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}
