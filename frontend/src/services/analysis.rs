//! HTTP service for the document analysis backend.
//!
//! Uploads a document to `POST {backend}/{mode}` and turns the JSON reply
//! into an [`AnalysisResult`]. Transport sits behind [`AnalysisClient`] so
//! the mapping rules can be exercised without a browser.

use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::{File, FormData};

use crate::{
    AnalysisMode, AnalysisResult, AppError, AppResult, BackendStatus, HealthStatus, RiskItem,
    GENERIC_SERVER_ERROR, RISK_FORMAT_WARNING, UPLOAD_FIELD,
};

/// Status and body of a backend reply, before any interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status class.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the analysis backend.
#[allow(async_fn_in_trait)]
pub trait AnalysisClient {
    /// Platform file handle carried by an upload.
    type File: Clone;

    /// Upload `file` to the route named by `mode`.
    async fn post_document(&self, mode: &AnalysisMode, file: &Self::File) -> AppResult<RawResponse>;

    /// Query the backend's health route.
    async fn get_health(&self) -> AppResult<RawResponse>;
}

/// Browser client built on `gloo-net` and `FormData`.
#[derive(Clone, Debug)]
pub struct HttpAnalysisClient {
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the route serving `mode`.
    pub fn route(&self, mode: &AnalysisMode) -> String {
        format!("{}/{}", self.base_url, mode.as_str())
    }
}

async fn read_reply(response: Response) -> AppResult<RawResponse> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;
    Ok(RawResponse { status, body })
}

impl AnalysisClient for HttpAnalysisClient {
    type File = File;

    async fn post_document(&self, mode: &AnalysisMode, file: &File) -> AppResult<RawResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| AppError::Transport(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.route(mode))
            .body(form_data)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        read_reply(response).await
    }

    async fn get_health(&self) -> AppResult<RawResponse> {
        let url = format!("{}/health", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        read_reply(response).await
    }
}

// =============================================================================
// Response interpretation
// =============================================================================

/// Message to show for a non-2xx reply.
///
/// Uses the body's `error` string when the body is a JSON object carrying
/// one, the generic message otherwise.
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|payload| payload.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

/// Turn a raw reply for `mode` into a result, or the error to display.
pub fn interpret_reply(mode: &AnalysisMode, reply: &RawResponse) -> AppResult<AnalysisResult> {
    if !reply.is_success() {
        return Err(AppError::Server(server_error_message(&reply.body)));
    }

    let payload: Value = serde_json::from_str(&reply.body)
        .map_err(|e| AppError::Format(format!("Failed to parse response: {}", e)))?;

    interpret_response(mode, &payload)
}

/// Map a successful JSON payload to a result according to `mode`.
pub fn interpret_response(mode: &AnalysisMode, payload: &Value) -> AppResult<AnalysisResult> {
    match mode {
        AnalysisMode::Risks => Ok(risk_table(payload)),
        AnalysisMode::Simplify => text_field(payload, "simplified"),
        AnalysisMode::Extract => text_field(payload, "clauses"),
        AnalysisMode::Compare => text_field(payload, "differences"),
        AnalysisMode::Qa => text_field(payload, "answer"),
        AnalysisMode::Other(_) => pretty(payload).map(AnalysisResult::text),
    }
}

/// `risks` as table rows; any other shape degrades to a warning text.
fn risk_table(payload: &Value) -> AnalysisResult {
    let rows = payload
        .get("risks")
        .and_then(Value::as_array)
        .and_then(|rows| {
            rows.iter()
                .map(|row| serde_json::from_value::<RiskItem>(row.clone()).ok())
                .collect::<Option<Vec<_>>>()
        });

    match rows {
        Some(items) => AnalysisResult::Risks { items },
        None => {
            log::warn!("⚠️ Risk payload is not a list of rows");
            AnalysisResult::text(RISK_FORMAT_WARNING)
        }
    }
}

/// Strings verbatim, structures pretty-printed, scalars as JSON text.
fn text_field(payload: &Value, field: &str) -> AppResult<AnalysisResult> {
    let body = match payload.get(field) {
        None | Some(Value::Null) => {
            return Err(AppError::Format(format!("missing `{}` field", field)));
        }
        Some(Value::String(text)) => text.clone(),
        Some(value @ (Value::Object(_) | Value::Array(_))) => pretty(value)?,
        Some(value) => value.to_string(),
    };
    Ok(AnalysisResult::Text { body })
}

fn pretty(value: &Value) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Format(format!("Failed to format response: {}", e)))
}

/// Parse a `/health` reply. Anything but a 2xx JSON body is an error.
pub fn parse_health(reply: &RawResponse) -> AppResult<HealthStatus> {
    if !reply.is_success() {
        return Err(AppError::Server(server_error_message(&reply.body)));
    }
    serde_json::from_str(&reply.body)
        .map_err(|e| AppError::Format(format!("Failed to parse health status: {}", e)))
}

/// Probe the backend once; failures are logged and reported as offline.
pub async fn check_health<C: AnalysisClient>(client: &C) -> BackendStatus {
    match client.get_health().await.and_then(|reply| parse_health(&reply)) {
        Ok(health) => {
            log::info!("📡 Backend up: {}", health.message);
            BackendStatus::Online(health)
        }
        Err(e) => {
            log::warn!("Backend health check failed: {}", e);
            BackendStatus::Offline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: Value) -> RawResponse {
        RawResponse::new(200, body.to_string())
    }

    #[test]
    fn test_simplify_uses_simplified_field() {
        let reply = ok(json!({"simplified": "You rent the flat for a year."}));
        let result = interpret_reply(&AnalysisMode::Simplify, &reply).unwrap();
        assert_eq!(result, AnalysisResult::text("You rent the flat for a year."));
    }

    #[test]
    fn test_extract_pretty_prints_objects() {
        let reply = ok(json!({"clauses": {"a": 1}}));
        let result = interpret_reply(&AnalysisMode::Extract, &reply).unwrap();
        assert_eq!(result, AnalysisResult::text("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn test_extract_keeps_strings_verbatim() {
        let reply = ok(json!({"clauses": "hello"}));
        let result = interpret_reply(&AnalysisMode::Extract, &reply).unwrap();
        assert_eq!(result, AnalysisResult::text("hello"));
    }

    #[test]
    fn test_extract_preserves_key_order() {
        let reply = RawResponse::new(200, r#"{"clauses": {"zeta": 1, "alpha": 2}}"#);
        let result = interpret_reply(&AnalysisMode::Extract, &reply).unwrap();
        assert_eq!(result, AnalysisResult::text("{\n  \"zeta\": 1,\n  \"alpha\": 2\n}"));
    }

    #[test]
    fn test_dormant_modes_map_their_fields() {
        let reply = ok(json!({"differences": "Clause 4 changed", "answer": "Yes"}));
        assert_eq!(
            interpret_reply(&AnalysisMode::Compare, &reply).unwrap(),
            AnalysisResult::text("Clause 4 changed")
        );
        assert_eq!(
            interpret_reply(&AnalysisMode::Qa, &reply).unwrap(),
            AnalysisResult::text("Yes")
        );
    }

    #[test]
    fn test_unknown_mode_dumps_whole_payload() {
        let reply = ok(json!({"summary": "short"}));
        let mode = AnalysisMode::from_name("summarize");
        assert_eq!(
            interpret_reply(&mode, &reply).unwrap(),
            AnalysisResult::text("{\n  \"summary\": \"short\"\n}")
        );
    }

    #[test]
    fn test_risks_rows() {
        let reply = ok(json!({"risks": [{"clause": "C1", "severity": "RED", "details": "D1"}]}));
        let result = interpret_reply(&AnalysisMode::Risks, &reply).unwrap();
        let AnalysisResult::Risks { items } = result else {
            panic!("expected a risk table");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].clause, "C1");
        assert_eq!(items[0].details, "D1");
        assert_eq!(items[0].css_class(), "risk-high");
    }

    #[test]
    fn test_risks_rows_with_null_or_numeric_fields_are_kept() {
        let reply = ok(json!({"risks": [
            {"clause": "C1", "severity": "RED", "details": "D1"},
            {"clause": "C2", "severity": "green", "details": null},
            {"clause": 3, "severity": "Yellow"}
        ]}));
        let result = interpret_reply(&AnalysisMode::Risks, &reply).unwrap();
        let AnalysisResult::Risks { items } = result else {
            panic!("expected a risk table");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].details, "D1");
        assert_eq!(items[1].details, "");
        assert_eq!(items[1].css_class(), "risk-low");
        assert_eq!(items[2].clause, "3");
        assert_eq!(items[2].css_class(), "risk-medium");
    }

    #[test]
    fn test_risks_wrong_shape_degrades_to_warning() {
        for payload in [json!({"risks": "none found"}), json!({}), json!({"risks": ["C1"]})] {
            let result = interpret_reply(&AnalysisMode::Risks, &ok(payload)).unwrap();
            assert_eq!(result, AnalysisResult::text(RISK_FORMAT_WARNING));
        }
    }

    #[test]
    fn test_missing_field_is_format_error() {
        let reply = ok(json!({"unexpected": true}));
        let err = interpret_reply(&AnalysisMode::Simplify, &reply).unwrap_err();
        assert!(matches!(err, AppError::Format(msg) if msg.contains("simplified")));

        let reply = ok(json!({"answer": null}));
        assert!(matches!(
            interpret_reply(&AnalysisMode::Qa, &reply),
            Err(AppError::Format(_))
        ));
    }

    #[test]
    fn test_scalar_field_renders_as_json_text() {
        let reply = ok(json!({"clauses": 3}));
        assert_eq!(
            interpret_reply(&AnalysisMode::Extract, &reply).unwrap(),
            AnalysisResult::text("3")
        );
    }

    #[test]
    fn test_server_error_message() {
        let reply = RawResponse::new(400, r#"{"error": "File type not allowed"}"#);
        assert_eq!(
            interpret_reply(&AnalysisMode::Simplify, &reply),
            Err(AppError::Server("File type not allowed".to_string()))
        );

        let reply = RawResponse::new(502, "<html>Bad Gateway</html>");
        assert_eq!(
            interpret_reply(&AnalysisMode::Simplify, &reply),
            Err(AppError::Server(GENERIC_SERVER_ERROR.to_string()))
        );

        let reply = RawResponse::new(500, r#"{"error": 42}"#);
        assert_eq!(server_error_message(&reply.body), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_success_with_invalid_json() {
        let reply = RawResponse::new(200, "not json");
        assert!(matches!(
            interpret_reply(&AnalysisMode::Simplify, &reply),
            Err(AppError::Format(_))
        ));
    }

    #[test]
    fn test_route() {
        let client = HttpAnalysisClient::new("https://api.example.org");
        assert_eq!(client.route(&AnalysisMode::Risks), "https://api.example.org/risks");
    }

    #[test]
    fn test_health_deserialization() {
        let reply = ok(json!({
            "message": "Backend is running!",
            "status": "success",
            "api_connected": true,
            "model": "openai/gpt-4.1"
        }));
        let health = parse_health(&reply).unwrap();
        assert!(health.api_connected);
        assert_eq!(health.model.as_deref(), Some("openai/gpt-4.1"));

        let down = RawResponse::new(503, "");
        assert!(parse_health(&down).is_err());
    }

    struct HealthClient(AppResult<RawResponse>);

    impl AnalysisClient for HealthClient {
        type File = ();

        async fn post_document(&self, _: &AnalysisMode, _: &()) -> AppResult<RawResponse> {
            Err(AppError::Transport("not used".to_string()))
        }

        async fn get_health(&self) -> AppResult<RawResponse> {
            self.0.clone()
        }
    }

    #[test]
    fn test_check_health() {
        use futures::executor::block_on;

        let up = HealthClient(Ok(ok(json!({"status": "success", "api_connected": true}))));
        assert!(matches!(block_on(check_health(&up)), BackendStatus::Online(h) if h.api_connected));

        let unreachable = HealthClient(Err(AppError::Transport("Failed to fetch".to_string())));
        assert_eq!(block_on(check_health(&unreachable)), BackendStatus::Offline);

        let broken = HealthClient(Ok(RawResponse::new(200, "<html></html>")));
        assert_eq!(block_on(check_health(&broken)), BackendStatus::Offline);
    }
}
