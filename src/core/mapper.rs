//! Response mapper
//!
//! Turns the provider's JSON body into one of the fixed result
//! records. Missing keys (or `null`) fall back to empty string,
//! `0.0` or `false`; only an unparseable body, a non-object body or
//! a present value of the wrong shape is an error.

use crate::core::error::{IpInfoError, Result};
use crate::core::types::{FullLookupResult, GeoResult, LiteResult};
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

/// Decode a provider body into its top-level JSON object
pub fn decode(body: &str) -> Result<JsonObject> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| IpInfoError::MalformedResponse(format!("invalid JSON: {e}")))?;

    match value {
        Value::Object(object) => Ok(object),
        other => Err(IpInfoError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Map a lookup body to the geolocation subset
pub fn map_geo(data: &JsonObject) -> Result<GeoResult> {
    let geo = section(data, "geo");

    Ok(GeoResult {
        city: string_field(geo, "city")?,
        region: string_field(geo, "region")?,
        country: string_field(geo, "country")?,
        timezone: string_field(geo, "timezone")?,
        latitude: float_field(geo, "latitude")?,
        longitude: float_field(geo, "longitude")?,
    })
}

/// Map a lookup body to the full record
///
/// `ip` falls back to `requested_ip` verbatim when the provider does
/// not echo it.
pub fn map_lookup(data: &JsonObject, requested_ip: &str) -> Result<FullLookupResult> {
    let geo = section(data, "geo");
    let asn = section(data, "as");

    Ok(FullLookupResult {
        ip: echoed_ip(data, requested_ip)?,
        city: string_field(geo, "city")?,
        region: string_field(geo, "region")?,
        country: string_field(geo, "country")?,
        timezone: string_field(geo, "timezone")?,
        postal_code: string_field(geo, "postal_code")?,
        asn: string_field(asn, "asn")?,
        org: string_field(asn, "name")?,
        is_anonymous: bool_field(Some(data), "is_anonymous")?,
        is_hosting: bool_field(Some(data), "is_hosting")?,
        is_anycast: bool_field(Some(data), "is_anycast")?,
        is_mobile: bool_field(Some(data), "is_mobile")?,
    })
}

/// Map a lite body (flat fields) to the lite record
pub fn map_lite(data: &JsonObject, requested_ip: &str) -> Result<LiteResult> {
    let top = Some(data);

    Ok(LiteResult {
        ip: echoed_ip(data, requested_ip)?,
        asn: string_field(top, "asn")?,
        as_name: string_field(top, "as_name")?,
        as_domain: string_field(top, "as_domain")?,
        country_code: string_field(top, "country_code")?,
        country: string_field(top, "country")?,
        continent_code: string_field(top, "continent_code")?,
        continent: string_field(top, "continent")?,
    })
}

/// Nested object, `None` when absent or not an object
fn section<'a>(data: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    data.get(key).and_then(Value::as_object)
}

fn echoed_ip(data: &JsonObject, requested_ip: &str) -> Result<String> {
    match data.get("ip") {
        None | Some(Value::Null) => Ok(requested_ip.to_string()),
        Some(_) => string_field(Some(data), "ip"),
    }
}

fn string_field(object: Option<&JsonObject>, key: &str) -> Result<String> {
    match object.and_then(|o| o.get(key)) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(other) => Err(IpInfoError::MalformedResponse(format!(
            "field '{key}' should be a string, got {}",
            kind_of(other)
        ))),
    }
}

fn float_field(object: Option<&JsonObject>, key: &str) -> Result<f64> {
    match object.and_then(|o| o.get(key)) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            IpInfoError::MalformedResponse(format!("field '{key}' is not a finite number"))
        }),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            IpInfoError::MalformedResponse(format!("field '{key}' is not numeric: '{s}'"))
        }),
        Some(other) => Err(IpInfoError::MalformedResponse(format!(
            "field '{key}' should be a number, got {}",
            kind_of(other)
        ))),
    }
}

fn bool_field(object: Option<&JsonObject>, key: &str) -> Result<bool> {
    match object.and_then(|o| o.get(key)) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(IpInfoError::MalformedResponse(format!(
            "field '{key}' should be a boolean, got {}",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
