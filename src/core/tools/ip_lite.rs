//! ip_lite tool handler

use super::handler::{ip_input_schema, required_ip, ToolHandler};
use crate::core::error::Result;
use crate::core::mapper;
use crate::core::provider::{Provider, Variant};
use crate::core::types::{LookupResult, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct IpLiteHandler {
    provider: Arc<dyn Provider>,
}

impl IpLiteHandler {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ToolHandler for IpLiteHandler {
    fn name(&self) -> &str {
        "ip_lite"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "ip_lite".to_string(),
            description: "Lite lookup info for IP address with ASN and country/continent"
                .to_string(),
            input_schema: ip_input_schema("ip_lite"),
        }
    }

    async fn execute(&self, args: &Map<String, Value>) -> Result<LookupResult> {
        let ip = required_ip(args)?;
        let body = self.provider.fetch(Variant::Lite, ip).await?;
        let data = mapper::decode(&body)?;

        Ok(mapper::map_lite(&data, ip)?.into())
    }
}
