use leptos::prelude::*;

/// Inline SVG icon referenced by name from the bundled sprite set.
#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the app.
#[allow(dead_code)]
pub mod icons {
    pub const FOLDER: &str = "folder";
    pub const FOLDER_OPEN: &str = "folder-open";
    pub const FOLDER_PLUS: &str = "folder-plus";
    pub const FILE: &str = "file";
    pub const FILE_PDF: &str = "file-pdf";
    pub const FILE_WORD: &str = "file-word";
    pub const FILE_TEXT: &str = "file-text";
    pub const FILE_IMAGE: &str = "file-image";
    pub const FILE_EXCEL: &str = "file-excel";
    pub const FILE_PPT: &str = "file-ppt";
    pub const FILE_ZIP: &str = "file-zip";
    pub const HOME: &str = "home";
    pub const UPLOAD: &str = "upload";
    pub const DOWNLOAD: &str = "download";
    pub const TRASH: &str = "trash";
    pub const MOVE: &str = "move";
    pub const PLUS: &str = "plus";
    pub const X: &str = "x";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const WARNING: &str = "warning";
    pub const LOADER: &str = "loader";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const DIAGRAM: &str = "diagram";
    pub const REFRESH: &str = "refresh";
    pub const EDIT: &str = "edit";
    pub const LOGOUT: &str = "logout";
}
