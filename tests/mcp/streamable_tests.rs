//! Streamable HTTP transport tests

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, StubProvider, GOOGLE_GEO_BODY};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use ipinfo_mcp::mcp::streamable;
    use serde_json::{json, Value};
    use tower::ServiceExt as TowerServiceExt;

    fn create_test_app() -> Router {
        streamable::router(create_test_services(StubProvider::body(GOOGLE_GEO_BODY)))
    }

    fn post(body: Value, accept: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, accept)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 100_000)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn tool_call() -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "ip_geo", "arguments": {"ip": "8.8.8.8"}}
        })
    }

    #[tokio::test]
    async fn test_json_reply_without_event_stream() {
        let response = create_test_app()
            .oneshot(post(tool_call(), "application/json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let reply: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(reply["id"], 1);
        assert_eq!(reply["result"]["structuredContent"]["timezone"], "America/Los_Angeles");
    }

    #[tokio::test]
    async fn test_event_stream_reply() {
        let response = create_test_app()
            .oneshot(post(tool_call(), "application/json, text/event-stream"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/event-stream"));

        let text = body_text(response).await;
        assert!(text.contains("event: message"));

        let data = text
            .lines()
            .find_map(|line| line.strip_prefix("data: "))
            .unwrap();
        let reply: Value = serde_json::from_str(data).unwrap();
        assert_eq!(reply["result"]["structuredContent"]["city"], "Mountain View");
    }

    #[tokio::test]
    async fn test_notification_is_accepted() {
        let response = create_test_app()
            .oneshot(post(
                json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
                "application/json, text/event-stream",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/mcp")
                    .header(header::ACCEPT, "text/event-stream")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_tools_list_matches_http_api_order() {
        let response = create_test_app()
            .oneshot(post(
                json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
                "application/json",
            ))
            .await
            .unwrap();

        let reply: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let names: Vec<&str> = reply["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ip_geo", "ip_lookup", "ip_lite"]);
    }
}
