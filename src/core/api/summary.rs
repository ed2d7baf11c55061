//! AI summary calls
//!
//! Summaries are generated by the backend's AI service per document; the
//! client only requests, displays, edits and deletes them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiClient, ApiError};

/// An AI-generated summary for one document: the summary markdown plus an
/// optional mermaid diagram source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Summary {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "mermaid", alias = "diagramCode")]
    pub diagram: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl Summary {
    /// Decode a summary response, unwrapping an optional `data` envelope.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let inner = match value {
            Value::Object(ref map) if map.get("data").is_some_and(Value::is_object) => {
                map.get("data").cloned().unwrap_or(Value::Null)
            }
            other => other,
        };
        serde_json::from_value(inner)
            .map_err(|e| ApiError::Network(format!("Malformed response: {}", e)))
    }

    pub fn has_content(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[derive(Debug, Serialize)]
struct UpdateSummaryRequest {
    summary: String,
}

impl ApiClient {
    /// GET /summary/{id}. A missing summary is a normal state, mapped to
    /// `Ok(None)` rather than an error.
    #[cfg(not(feature = "ssr"))]
    pub async fn get_summary(&self, document_id: &str) -> Result<Option<Summary>, ApiError> {
        use super::http::{Payload, ensure_ok, json_body, send};

        let token = self.require_token()?;
        let resp = send(
            "GET",
            &self.url(&format!("/summary/{}", document_id)),
            Some(&token),
            Payload::Empty,
            super::LONG_DEADLINE_MS,
        )
        .await?;

        match ensure_ok(&resp).await {
            Ok(()) => {}
            Err(ApiError::NotFound) => return Ok(None),
            Err(err) => return Err(err),
        }

        let value = json_body(&resp).await?;
        Summary::from_value(value).map(Some)
    }

    #[cfg(feature = "ssr")]
    pub async fn get_summary(&self, _document_id: &str) -> Result<Option<Summary>, ApiError> {
        Err(ApiError::unavailable())
    }

    /// POST /summary/{id}/create asks the AI service to generate a summary.
    #[cfg(not(feature = "ssr"))]
    pub async fn create_summary(&self, document_id: &str) -> Result<Summary, ApiError> {
        self.summary_action(document_id, "create").await
    }

    #[cfg(feature = "ssr")]
    pub async fn create_summary(&self, _document_id: &str) -> Result<Summary, ApiError> {
        Err(ApiError::unavailable())
    }

    /// POST /summary/{id}/refresh regenerates from scratch.
    #[cfg(not(feature = "ssr"))]
    pub async fn refresh_summary(&self, document_id: &str) -> Result<Summary, ApiError> {
        self.summary_action(document_id, "refresh").await
    }

    #[cfg(feature = "ssr")]
    pub async fn refresh_summary(&self, _document_id: &str) -> Result<Summary, ApiError> {
        Err(ApiError::unavailable())
    }

    #[cfg(not(feature = "ssr"))]
    async fn summary_action(&self, document_id: &str, action: &str) -> Result<Summary, ApiError> {
        use super::http::{Payload, ensure_ok, json_body, send};

        let token = self.require_token()?;
        let resp = send(
            "POST",
            &self.url(&format!("/summary/{}/{}", document_id, action)),
            Some(&token),
            Payload::Empty,
            super::LONG_DEADLINE_MS,
        )
        .await?;
        ensure_ok(&resp).await?;

        let value = json_body(&resp).await?;
        Summary::from_value(value)
    }

    /// PUT /summary/{id} replaces the summary text with an edited version.
    #[cfg(not(feature = "ssr"))]
    pub async fn update_summary(
        &self,
        document_id: &str,
        summary: &str,
    ) -> Result<Summary, ApiError> {
        use super::http::{Payload, ensure_ok, json_body, send};

        let token = self.require_token()?;
        let request = UpdateSummaryRequest {
            summary: summary.to_string(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = send(
            "PUT",
            &self.url(&format!("/summary/{}", document_id)),
            Some(&token),
            Payload::Json(body),
            super::LONG_DEADLINE_MS,
        )
        .await?;
        ensure_ok(&resp).await?;

        let value = json_body(&resp).await?;
        Summary::from_value(value)
    }

    #[cfg(feature = "ssr")]
    pub async fn update_summary(
        &self,
        _document_id: &str,
        _summary: &str,
    ) -> Result<Summary, ApiError> {
        Err(ApiError::unavailable())
    }

    /// DELETE /summary/{id}
    #[cfg(not(feature = "ssr"))]
    pub async fn delete_summary(&self, document_id: &str) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;
        let response: super::MessageResponse = send_json(
            "DELETE",
            &self.url(&format!("/summary/{}", document_id)),
            Some(&token),
            Payload::Empty,
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn delete_summary(&self, _document_id: &str) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_decodes_flat_shape() {
        let summary = Summary::from_value(json!({
            "summary": "# Overview\nKey points...",
            "diagram": "mindmap\n  root((Doc))"
        }))
        .unwrap();

        assert!(summary.has_content());
        assert!(summary.diagram.as_deref().unwrap().starts_with("mindmap"));
    }

    #[test]
    fn test_summary_decodes_data_envelope() {
        let summary = Summary::from_value(json!({
            "data": {"summary": "text", "mermaid": "graph TD; A-->B"}
        }))
        .unwrap();

        assert_eq!(summary.summary.as_deref(), Some("text"));
        assert_eq!(summary.diagram.as_deref(), Some("graph TD; A-->B"));
    }

    #[test]
    fn test_summary_tolerates_empty_object() {
        let summary = Summary::from_value(json!({})).unwrap();
        assert!(!summary.has_content());
        assert!(summary.diagram.is_none());
    }

    #[test]
    fn test_update_request_shape() {
        let request = UpdateSummaryRequest {
            summary: "edited".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"summary":"edited"}"#
        );
    }
}
