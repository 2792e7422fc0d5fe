//! ip_geo tool handler
//!
//! Geolocation subset (city, region, country, timezone, coordinates)
//! from the provider's lookup endpoint.

use super::handler::{ip_input_schema, required_ip, ToolHandler};
use crate::core::error::Result;
use crate::core::mapper;
use crate::core::provider::{Provider, Variant};
use crate::core::types::{LookupResult, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct IpGeoHandler {
    provider: Arc<dyn Provider>,
}

impl IpGeoHandler {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ToolHandler for IpGeoHandler {
    fn name(&self) -> &str {
        "ip_geo"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "ip_geo".to_string(),
            description: "Get geolocation info for IP address".to_string(),
            input_schema: ip_input_schema("ip_geo"),
        }
    }

    async fn execute(&self, args: &Map<String, Value>) -> Result<LookupResult> {
        let ip = required_ip(args)?;
        let body = self.provider.fetch(Variant::Geo, ip).await?;
        let data = mapper::decode(&body)?;

        Ok(mapper::map_geo(&data)?.into())
    }
}
