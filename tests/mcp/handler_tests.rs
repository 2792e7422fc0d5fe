//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::{
        create_test_services, StubProvider, StubReply, FULL_LOOKUP_BODY, GOOGLE_GEO_BODY,
    };
    use ipinfo_mcp::mcp::handlers::ProtocolHandlers;
    use ipinfo_mcp::mcp::protocol::*;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn create_test_handlers(stub: Arc<StubProvider>) -> ProtocolHandlers {
        ProtocolHandlers::new(create_test_services(stub))
    }

    fn request(id: Option<Value>, method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .handle_initialize(request(
                Some(json!(1)),
                "initialize",
                Some(json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "clientInfo": {"name": "test", "version": "1.0"}
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "ipinfo-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_initialize_unknown_version_gets_latest() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .handle_initialize(request(
                Some(json!(1)),
                "initialize",
                Some(json!({"protocolVersion": "1999-01-01"})),
            ))
            .await
            .unwrap();

        assert_eq!(
            response.result.unwrap()["protocolVersion"],
            LATEST_PROTOCOL_VERSION
        );
    }

    #[tokio::test]
    async fn test_notifications_get_no_reply() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        for method in [
            "notifications/initialized",
            "initialized",
            "notifications/cancelled",
        ] {
            let reply = handlers
                .dispatch(request(None, method, Some(json!({"requestId": 3}))))
                .await;
            assert!(reply.is_none(), "{method} should not be answered");
        }
    }

    #[tokio::test]
    async fn test_tools_list_is_stable() {
        let stub = StubProvider::body("{}");
        let handlers = create_test_handlers(stub.clone());

        let first = handlers
            .handle_tools_list(request(Some(json!(2)), "tools/list", None))
            .await
            .unwrap()
            .result
            .unwrap();
        let second = handlers
            .handle_tools_list(request(Some(json!(3)), "tools/list", None))
            .await
            .unwrap()
            .result
            .unwrap();

        assert_eq!(first, second);
        let tools = first["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0]["name"], "ip_geo");
        assert_eq!(tools[1]["name"], "ip_lookup");
        assert_eq!(tools[2]["name"], "ip_lite");
        assert_eq!(tools[0]["inputSchema"]["properties"]["ip"]["type"], "string");
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_tools_call_ip_geo() {
        let handlers = create_test_handlers(StubProvider::body(GOOGLE_GEO_BODY));

        let response = handlers
            .handle_tools_call(request(
                Some(json!(4)),
                "tools/call",
                Some(json!({"name": "ip_geo", "arguments": {"ip": "8.8.8.8"}})),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert!(result.get("isError").is_none());
        assert_eq!(result["structuredContent"]["city"], "Mountain View");
        assert_eq!(result["structuredContent"]["latitude"], 37.4056);
        assert_eq!(result["content"][0]["type"], "text");

        let text = result["content"][0]["text"].as_str().unwrap();
        let record: Value = serde_json::from_str(text).unwrap();
        assert_eq!(record, result["structuredContent"]);
    }

    #[tokio::test]
    async fn test_tools_call_ip_lookup_full_record() {
        let handlers = create_test_handlers(StubProvider::body(FULL_LOOKUP_BODY));

        let response = handlers
            .handle_tools_call(request(
                Some(json!(5)),
                "tools/call",
                Some(json!({"name": "ip_lookup", "arguments": {"ip": "1.1.1.1"}})),
            ))
            .await
            .unwrap();

        let record = &response.result.unwrap()["structuredContent"];
        assert_eq!(record["asn"], "AS13335");
        assert_eq!(record["org"], "Cloudflare, Inc.");
        assert_eq!(record["postal_code"], "4101");
        assert_eq!(record["is_anycast"], true);
        assert_eq!(record["is_mobile"], false);
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .dispatch(request(Some(json!(6)), "tools/call", None))
            .await
            .unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_is_error_result() {
        let stub = StubProvider::body("{}");
        let handlers = create_test_handlers(stub.clone());

        let response = handlers
            .handle_tools_call(request(
                Some(json!(7)),
                "tools/call",
                Some(json!({"name": "ip_whois", "arguments": {"ip": "8.8.8.8"}})),
            ))
            .await
            .unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Unknown tool: ip_whois"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_tools_call_upstream_failure_is_error_result() {
        let stub = StubProvider::new(StubReply::Status(500, "oops".to_string()));
        let handlers = create_test_handlers(stub.clone());

        let response = handlers
            .handle_tools_call(request(
                Some(json!(8)),
                "tools/call",
                Some(json!({"name": "ip_lookup", "arguments": {"ip": "8.8.8.8"}})),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_call_does_not_affect_next_call() {
        let stub = StubProvider::body(GOOGLE_GEO_BODY);
        let handlers = create_test_handlers(stub);

        let bad = handlers
            .handle_tools_call(request(
                Some(json!(9)),
                "tools/call",
                Some(json!({"name": "ip_geo", "arguments": {}})),
            ))
            .await
            .unwrap();
        assert_eq!(bad.result.unwrap()["isError"], true);

        let good = handlers
            .handle_tools_call(request(
                Some(json!(10)),
                "tools/call",
                Some(json!({"name": "ip_geo", "arguments": {"ip": "8.8.8.8"}})),
            ))
            .await
            .unwrap();
        assert_eq!(good.result.unwrap()["structuredContent"]["country"], "US");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .dispatch(request(Some(json!(11)), "resources/list", None))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let mut req = request(Some(json!(12)), "ping", None);
        req.jsonrpc = "1.0".to_string();
        let response = handlers.dispatch(req).await.unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_process_message_parse_error() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers.process_message("{not json").await.unwrap();

        assert!(response.id.is_none());
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_process_message_invalid_request_keeps_id() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .process_message(r#"{"jsonrpc":"2.0","id":42}"#)
            .await
            .unwrap();

        assert_eq!(response.id, Some(json!(42)));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_process_message_null_id_gets_reply() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .process_message(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#)
            .await
            .expect("null id is a request, not a notification");

        assert_eq!(response.id, Some(Value::Null));
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let handlers = create_test_handlers(StubProvider::body("{}"));

        let response = handlers
            .handle_ping(request(Some(json!(13)), "ping", None))
            .await
            .unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());
        assert_eq!(response.result, Some(json!({})));
    }
}
