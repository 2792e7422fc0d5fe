//! ip_lookup tool handler
//!
//! Full lookup: location, postal code, ASN/org and the anonymity,
//! hosting, anycast and mobile flags.

use super::handler::{ip_input_schema, required_ip, ToolHandler};
use crate::core::error::Result;
use crate::core::mapper;
use crate::core::provider::{Provider, Variant};
use crate::core::types::{LookupResult, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct IpLookupHandler {
    provider: Arc<dyn Provider>,
}

impl IpLookupHandler {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ToolHandler for IpLookupHandler {
    fn name(&self) -> &str {
        "ip_lookup"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "ip_lookup".to_string(),
            description: "Full lookup info for IP address with ASN and network flags".to_string(),
            input_schema: ip_input_schema("ip_lookup"),
        }
    }

    async fn execute(&self, args: &Map<String, Value>) -> Result<LookupResult> {
        let ip = required_ip(args)?;
        let body = self.provider.fetch(Variant::Lookup, ip).await?;
        let data = mapper::decode(&body)?;

        Ok(mapper::map_lookup(&data, ip)?.into())
    }
}
