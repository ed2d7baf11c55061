//! Document listing, upload, move, delete and download calls

use super::{ApiClient, ApiError};
use crate::core::documents::DocumentSummary;
use crate::core::paging::PagedResult;

#[cfg(not(feature = "ssr"))]
use serde::Serialize;

/// Handle to the file picked in the upload dialog.
///
/// On the client this is the browser's `File`; the server build never
/// constructs one.
#[cfg(not(feature = "ssr"))]
pub type UploadFile = web_sys::File;

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct UploadFile;

#[cfg(not(feature = "ssr"))]
#[derive(Debug, Serialize)]
struct MoveDocumentRequest {
    #[serde(rename = "folderId")]
    folder_id: String,
}

impl ApiClient {
    /// One page of documents: `GET /documents` or the folder-scoped
    /// `GET /documents/folder/{id}` when a folder is selected.
    ///
    /// A 404 from either listing means "nothing here" and comes back as an
    /// empty page, not as an error.
    #[cfg(not(feature = "ssr"))]
    pub async fn documents_page(
        &self,
        page: u64,
        limit: u64,
        folder_id: Option<&str>,
    ) -> Result<PagedResult<DocumentSummary>, ApiError> {
        use super::http::{Payload, ensure_ok, json_body, send};

        let token = self.require_token()?;
        let path = match folder_id {
            Some(id) => format!("/documents/folder/{}?page={}&limit={}", id, page, limit),
            None => format!("/documents?page={}&limit={}", page, limit),
        };

        let resp = send(
            "GET",
            &self.url(&path),
            Some(&token),
            Payload::Empty,
            super::LIST_DEADLINE_MS,
        )
        .await?;

        match ensure_ok(&resp).await {
            Ok(()) => {}
            Err(ApiError::NotFound) => return Ok(PagedResult::empty()),
            Err(err) => return Err(err),
        }

        let value = json_body(&resp).await?;
        PagedResult::from_value(value, limit)
            .map_err(|e| ApiError::Network(format!("Malformed response: {}", e)))
    }

    #[cfg(feature = "ssr")]
    pub async fn documents_page(
        &self,
        _page: u64,
        _limit: u64,
        _folder_id: Option<&str>,
    ) -> Result<PagedResult<DocumentSummary>, ApiError> {
        Err(ApiError::unavailable())
    }

    /// POST /documents: multipart upload of one file under the `file` field.
    ///
    /// The 50 MB ceiling is enforced before this is called; this only ships
    /// the bytes.
    #[cfg(not(feature = "ssr"))]
    pub async fn upload_document(&self, file: &UploadFile) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;

        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("Request error: {:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Network(format!("Request error: {:?}", e)))?;

        let response: super::MessageResponse = send_json(
            "POST",
            &self.url("/documents"),
            Some(&token),
            Payload::Form(form),
            super::LONG_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn upload_document(&self, _file: &UploadFile) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }

    /// DELETE /documents/{id}
    #[cfg(not(feature = "ssr"))]
    pub async fn delete_document(&self, document_id: &str) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;
        let response: super::MessageResponse = send_json(
            "DELETE",
            &self.url(&format!("/documents/{}", document_id)),
            Some(&token),
            Payload::Empty,
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn delete_document(&self, _document_id: &str) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }

    /// PUT /documents/{id}/move reassigns a document to a folder.
    #[cfg(not(feature = "ssr"))]
    pub async fn move_document(
        &self,
        document_id: &str,
        folder_id: &str,
    ) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let token = self.require_token()?;
        let request = MoveDocumentRequest {
            folder_id: folder_id.to_string(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response: super::MessageResponse = send_json(
            "PUT",
            &self.url(&format!("/documents/{}/move", document_id)),
            Some(&token),
            Payload::Json(body),
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn move_document(
        &self,
        _document_id: &str,
        _folder_id: &str,
    ) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }

    /// GET /documents/{id}/file: bearer-authenticated binary download.
    ///
    /// Streams the body into a blob and triggers the browser's save flow
    /// through a temporary object URL. The filename comes from the
    /// Content-Disposition header when present, else from the listing row.
    #[cfg(not(feature = "ssr"))]
    pub async fn download_document(
        &self,
        document_id: &str,
        fallback_name: &str,
        fallback_extension: &str,
    ) -> Result<(), ApiError> {
        use super::http::{Payload, ensure_ok, send};
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let token = self.require_token()?;
        let resp = send(
            "GET",
            &self.url(&format!("/documents/{}/file", document_id)),
            Some(&token),
            Payload::Empty,
            super::LONG_DEADLINE_MS,
        )
        .await?;
        ensure_ok(&resp).await?;

        let disposition = resp.headers().get("content-disposition").ok().flatten();
        let filename = resolve_download_filename(
            disposition.as_deref(),
            fallback_name,
            fallback_extension,
        );

        fn transport<E: std::fmt::Debug>(err: E) -> ApiError {
            ApiError::Network(format!("{:?}", err))
        }

        let blob_promise = resp.blob().map_err(transport)?;
        let blob: web_sys::Blob = JsFuture::from(blob_promise)
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(transport)?;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("No window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ApiError::Network("No document".to_string()))?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;
        anchor.set_href(&url);
        anchor.set_download(&filename);

        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            anchor.remove();
        }
        let _ = web_sys::Url::revoke_object_url(&url);

        Ok(())
    }

    #[cfg(feature = "ssr")]
    pub async fn download_document(
        &self,
        _document_id: &str,
        _fallback_name: &str,
        _fallback_extension: &str,
    ) -> Result<(), ApiError> {
        Err(ApiError::unavailable())
    }
}

/// Pick the filename to save under: the Content-Disposition `filename`
/// parameter when the header carries one, else the listing row's name; a
/// bare name gets the row's extension appended.
pub fn resolve_download_filename(
    disposition: Option<&str>,
    fallback_name: &str,
    fallback_extension: &str,
) -> String {
    let mut name = disposition
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback_name.to_string());

    if !name.contains('.') && fallback_extension != "unknown" && !fallback_extension.is_empty() {
        name = format!("{}.{}", name, fallback_extension);
    }
    name
}

/// Extract the `filename` parameter from a Content-Disposition header.
fn filename_from_disposition(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let rest = rest.trim();
    let name = rest
        .strip_prefix('"')
        .map(|r| r.split('"').next().unwrap_or(r))
        .unwrap_or_else(|| rest.split(';').next().unwrap_or(rest));
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_quoted_disposition() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="report.pdf""#),
            Some("report.pdf".to_string())
        );
    }

    #[test]
    fn test_filename_from_unquoted_disposition() {
        assert_eq!(
            filename_from_disposition("attachment; filename=notes.txt"),
            Some("notes.txt".to_string())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=notes.txt; size=12"),
            Some("notes.txt".to_string())
        );
    }

    #[test]
    fn test_filename_missing_from_disposition() {
        assert_eq!(filename_from_disposition("attachment"), None);
        assert_eq!(filename_from_disposition("attachment; filename="), None);
    }

    #[test]
    fn test_resolve_prefers_header_over_fallback() {
        let name = resolve_download_filename(
            Some(r#"attachment; filename="server-name.docx""#),
            "row-name.pdf",
            "pdf",
        );
        assert_eq!(name, "server-name.docx");
    }

    #[test]
    fn test_resolve_falls_back_to_row_name() {
        assert_eq!(
            resolve_download_filename(None, "report.pdf", "pdf"),
            "report.pdf"
        );
    }

    #[test]
    fn test_resolve_appends_extension_to_bare_names() {
        assert_eq!(resolve_download_filename(None, "report", "pdf"), "report.pdf");
        // An unknown extension is not appended.
        assert_eq!(resolve_download_filename(None, "report", "unknown"), "report");
    }
}
