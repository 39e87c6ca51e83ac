//! Network tool: http_request

use serde::Serialize;
use serde_json::Value;
use toolgate_domain::{names, ActionClass, ParamType, ToolCall, ToolDefinition, ToolParameter};

use super::{payload, ExecutionError};

/// Get the tool definition for http_request
pub fn http_request_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::HTTP_REQUEST,
        "Make an HTTP request",
        ActionClass::Network,
    )
    .with_parameter(ToolParameter::new("url", "URL to request", true))
    .with_parameter(
        ToolParameter::new("method", "HTTP method", false)
            .with_allowed_values(["GET", "POST", "PUT", "DELETE"]),
    )
    .with_parameter(
        ToolParameter::new("headers", "Request headers", false).with_type(ParamType::Object),
    )
    .with_parameter(
        ToolParameter::new("data", "Request body data", false).with_type(ParamType::Object),
    )
}

#[derive(Serialize)]
struct HttpPayload {
    status: u16,
    data: Value,
}

fn parse_method(method: Option<&str>) -> Result<reqwest::Method, ExecutionError> {
    match method.unwrap_or("GET") {
        "GET" => Ok(reqwest::Method::GET),
        "POST" => Ok(reqwest::Method::POST),
        "PUT" => Ok(reqwest::Method::PUT),
        "DELETE" => Ok(reqwest::Method::DELETE),
        other => Err(ExecutionError::failed(format!(
            "Unsupported HTTP method: {}",
            other
        ))),
    }
}

/// Parse a response body as JSON where it parses, carry it as a string
/// otherwise
fn body_to_value(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

/// Execute the http_request tool
///
/// Blocks until response or transport failure; no retry at this layer. A
/// non-2xx status is still a transported response and comes back as data for
/// the agent to reason about.
pub async fn http_request(
    client: &reqwest::Client,
    call: &ToolCall,
) -> Result<Value, ExecutionError> {
    let url = call.require_str("url").map_err(ExecutionError::Failed)?;
    let method = parse_method(call.get_str("method"))?;

    let mut request = client.request(method, url);

    if let Some(headers) = call.get_object("headers") {
        for (name, value) in headers {
            let value = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            request = request.header(name, value);
        }
    }

    if let Some(data) = call.get("data") {
        request = request.json(data);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ExecutionError::failed(format!("HTTP request failed: {}", e)))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ExecutionError::failed(format!("Failed to read response body: {}", e)))?;

    payload(HttpPayload {
        status,
        data: body_to_value(body),
    })
}
