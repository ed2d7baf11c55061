//! Folder tree calls
//!
//! The tree endpoint returns the whole hierarchy in one response, wrapped in
//! a backend root node; the client unwraps it into a [`FolderTree`] and
//! never fetches subtrees incrementally.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::core::navigator::{FolderNode, FolderTree};

#[derive(Debug, Deserialize)]
struct FolderTreeResponse {
    #[serde(default)]
    folders: Vec<FolderNode>,
}

#[derive(Debug, Serialize)]
struct CreateFolderRequest {
    name: String,
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteFolderRequest {
    #[serde(rename = "folderId")]
    folder_id: String,
}

/// Unwrap the backend's root wrapper: the response carries a single root
/// node whose children are the user's top-level folders.
fn tree_from_response(response: FolderTreeResponse) -> FolderTree {
    let top_level = response
        .folders
        .into_iter()
        .next()
        .map(|root| root.children)
        .unwrap_or_default();
    FolderTree::new(top_level)
}

impl ApiClient {
    /// GET /folders fetches the full folder tree.
    #[cfg(not(feature = "ssr"))]
    pub async fn folder_tree(&self) -> Result<FolderTree, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;
        let response: FolderTreeResponse = send_json(
            "GET",
            &self.url("/folders"),
            Some(&token),
            Payload::Empty,
            super::LIST_DEADLINE_MS,
        )
        .await?;

        Ok(tree_from_response(response))
    }

    #[cfg(feature = "ssr")]
    pub async fn folder_tree(&self) -> Result<FolderTree, ApiError> {
        Err(ApiError::unavailable())
    }

    /// POST /folders creates a folder, optionally inside a parent.
    #[cfg(not(feature = "ssr"))]
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;
        let request = CreateFolderRequest {
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response: super::MessageResponse = send_json(
            "POST",
            &self.url("/folders"),
            Some(&token),
            Payload::Json(body),
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn create_folder(
        &self,
        _name: &str,
        _parent_id: Option<&str>,
    ) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }

    /// DELETE /folders/delete; the folder id travels in the body.
    #[cfg(not(feature = "ssr"))]
    pub async fn delete_folder(&self, folder_id: &str) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;
        let request = DeleteFolderRequest {
            folder_id: folder_id.to_string(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response: super::MessageResponse = send_json(
            "DELETE",
            &self.url("/folders/delete"),
            Some(&token),
            Payload::Json(body),
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn delete_folder(&self, _folder_id: &str) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_unwraps_backend_root() {
        let response: FolderTreeResponse = serde_json::from_str(
            r#"{
                "folders": [{
                    "id": "root",
                    "name": "Root",
                    "children": [
                        {"id": "a", "name": "A"},
                        {"id": "b", "name": "B"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let tree = tree_from_response(response);
        let ids: Vec<&str> = tree.root_children().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        // The wrapper root itself is gone.
        assert!(tree.find("root").is_none());
    }

    #[test]
    fn test_empty_response_yields_empty_tree() {
        let response: FolderTreeResponse = serde_json::from_str(r#"{"folders": []}"#).unwrap();
        let tree = tree_from_response(response);
        assert!(tree.root_children().is_empty());

        let response: FolderTreeResponse = serde_json::from_str("{}").unwrap();
        assert!(tree_from_response(response).root_children().is_empty());
    }

    #[test]
    fn test_create_request_omits_absent_parent() {
        let request = CreateFolderRequest {
            name: "Reports".to_string(),
            parent_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"name":"Reports"}"#);

        let request = CreateFolderRequest {
            name: "Q1".to_string(),
            parent_id: Some("f-9".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""parentId":"f-9""#));
    }

    #[test]
    fn test_delete_request_carries_folder_id_in_body() {
        let request = DeleteFolderRequest {
            folder_id: "f-3".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"folderId":"f-3"}"#
        );
    }
}
