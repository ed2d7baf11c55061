//! Document list rows and their display helpers
//!
//! The backend is loose about field names (`id` vs `documentId`, `title` vs
//! `filename` vs `name`, `createdAt` vs `createdDate`), so the row type keeps
//! everything optional and resolves display values through accessors.

use serde::{Deserialize, Serialize};

/// One document row as returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DocumentSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, rename = "createdAt", alias = "createdDate")]
    pub created_at: Option<String>,
    #[serde(default, rename = "folderId")]
    pub folder_id: Option<String>,
}

impl DocumentSummary {
    /// The document's identifier, whichever field the backend used.
    pub fn document_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.document_id.as_deref())
    }

    /// Best available display name.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or(self.filename.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("Unnamed Document")
    }

    /// Lowercased file extension of the display name, or "unknown".
    pub fn extension(&self) -> String {
        file_extension(self.display_name())
    }

    /// Processing state parsed from the wire string.
    pub fn lifecycle(&self) -> DocumentStatus {
        DocumentStatus::parse(self.status.as_deref().unwrap_or_default())
    }
}

/// Backend processing state of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Processing,
    Processed,
    Failed,
    Unknown,
}

impl DocumentStatus {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "processed" => Self::Processed,
            "failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// Badge styling class for the status column.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Processed => "badge-success",
            Self::Processing => "badge-warning",
            Self::Pending => "badge-muted",
            Self::Failed => "badge-danger",
            Self::Unknown => "badge-muted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

/// Lowercased extension of a filename, or "unknown" when it has none.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => "unknown".to_string(),
    }
}

/// Icon name for a file extension (see `ui::common::icons`).
pub fn file_icon(extension: &str) -> &'static str {
    match extension {
        "pdf" => "file-pdf",
        "doc" | "docx" => "file-word",
        "txt" => "file-text",
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" => "file-image",
        "xlsx" | "xls" => "file-excel",
        "pptx" | "ppt" => "file-ppt",
        "zip" | "rar" => "file-zip",
        _ => "file",
    }
}

/// Human-readable size: bytes under 1 KB, then one-decimal KB/MB.
pub fn format_file_size(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "N/A".to_string();
    };
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO-8601 timestamp's date part as "Mon D, YYYY".
///
/// The backend sends RFC 3339 strings; anything unparseable displays as-is
/// rather than failing the row.
pub fn format_date(timestamp: Option<&str>) -> String {
    let Some(ts) = timestamp else {
        return "N/A".to_string();
    };
    let date = ts.split('T').next().unwrap_or(ts);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return ts.to_string();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return ts.to_string();
    };
    match MONTHS.get(month.wrapping_sub(1)) {
        Some(name) => format!("{} {}, {}", name, day, year),
        None => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id_prefers_id_field() {
        let doc = DocumentSummary {
            id: Some("abc".to_string()),
            document_id: Some("def".to_string()),
            ..Default::default()
        };
        assert_eq!(doc.document_id(), Some("abc"));

        let alt = DocumentSummary {
            document_id: Some("def".to_string()),
            ..Default::default()
        };
        assert_eq!(alt.document_id(), Some("def"));

        assert_eq!(DocumentSummary::default().document_id(), None);
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut doc = DocumentSummary {
            title: Some("Quarterly Report".to_string()),
            filename: Some("report.pdf".to_string()),
            name: Some("r".to_string()),
            ..Default::default()
        };
        assert_eq!(doc.display_name(), "Quarterly Report");

        doc.title = None;
        assert_eq!(doc.display_name(), "report.pdf");

        doc.filename = None;
        assert_eq!(doc.display_name(), "r");

        doc.name = None;
        assert_eq!(doc.display_name(), "Unnamed Document");
    }

    #[test]
    fn test_wire_deserialization_tolerates_sparse_rows() {
        let row: DocumentSummary = serde_json::from_value(json!({
            "documentId": "d9",
            "filename": "notes.txt",
            "status": "Processed",
            "size": 2048,
            "createdDate": "2025-06-01T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(row.document_id(), Some("d9"));
        assert_eq!(row.extension(), "txt");
        assert_eq!(row.lifecycle(), DocumentStatus::Processed);
        assert_eq!(row.created_at.as_deref(), Some("2025-06-01T08:30:00Z"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.PDF"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("noextension"), "unknown");
        assert_eq!(file_extension(".hidden"), "unknown");
        assert_eq!(file_extension("trailing."), "unknown");
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(DocumentStatus::parse("PENDING"), DocumentStatus::Pending);
        assert_eq!(
            DocumentStatus::parse("processing"),
            DocumentStatus::Processing
        );
        assert_eq!(DocumentStatus::parse("Failed"), DocumentStatus::Failed);
        assert_eq!(DocumentStatus::parse("weird"), DocumentStatus::Unknown);
        assert_eq!(DocumentStatus::parse(""), DocumentStatus::Unknown);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(DocumentStatus::Processed.badge_class(), "badge-success");
        assert_eq!(DocumentStatus::Processing.badge_class(), "badge-warning");
        assert_eq!(DocumentStatus::Failed.badge_class(), "badge-danger");
    }

    #[test]
    fn test_file_icons() {
        assert_eq!(file_icon("pdf"), "file-pdf");
        assert_eq!(file_icon("docx"), "file-word");
        assert_eq!(file_icon("png"), "file-image");
        assert_eq!(file_icon("zip"), "file-zip");
        assert_eq!(file_icon("xyz"), "file");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(None), "N/A");
        assert_eq!(format_file_size(Some(512)), "512 B");
        assert_eq!(format_file_size(Some(2048)), "2.0 KB");
        assert_eq!(format_file_size(Some(5 * 1024 * 1024)), "5.0 MB");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(Some("2025-06-01T08:30:00Z")),
            "Jun 1, 2025".to_string()
        );
        assert_eq!(format_date(Some("2024-12-25")), "Dec 25, 2024".to_string());
        assert_eq!(format_date(None), "N/A".to_string());
        // Unparseable input passes through untouched.
        assert_eq!(format_date(Some("yesterday")), "yesterday".to_string());
    }
}
