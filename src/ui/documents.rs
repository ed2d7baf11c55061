//! Paginated document table
//!
//! Shows one page of documents, globally or scoped to the selected folder,
//! with upload/download/move/delete actions. Every action issues one API
//! call and then re-fetches the current page; pagination state lives here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::api::documents::UploadFile;
use crate::core::api::use_api_client;
use crate::core::documents::{
    DocumentSummary, file_icon, format_date, format_file_size,
};
use crate::core::paging::{RequestSeq, item_range, page_after_delete, page_window};
use crate::core::validation::{accept_attribute, validate_upload_size};
use crate::ui::common::icon::{Icon, icons};
use crate::ui::common::modal::{BaseModal, ConfirmDialog};
use crate::ui::common::spinner::LoadingSpinner;

const PAGE_SIZE_OPTIONS: [u64; 4] = [5, 7, 10, 20];
const DEFAULT_PAGE_SIZE: u64 = 7;
const MAX_VISIBLE_PAGES: u64 = 5;

/// Paginated document table scoped by `selected_folder`.
#[component]
pub fn DocumentsTable(selected_folder: RwSignal<Option<String>>) -> impl IntoView {
    let api = use_api_client();
    let navigate = use_navigate();

    let documents = RwSignal::new(Vec::<DocumentSummary>::new());
    let total = RwSignal::new(0u64);
    let total_pages = RwSignal::new(0u64);
    let page = RwSignal::new(1u64);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let session_expired = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let seq = StoredValue::new(RequestSeq::new());

    // Upload modal state
    let show_upload = RwSignal::new(false);
    let selected_file = RwSignal::new_local(None::<UploadFile>);
    let file_meta = RwSignal::new(None::<(String, u64)>);
    let upload_error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    // Delete modal state
    let show_delete = RwSignal::new(false);
    let doc_to_delete = RwSignal::new(None::<DocumentSummary>);
    let delete_error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    // Move modal state
    let show_move = RwSignal::new(false);
    let doc_to_move = RwSignal::new(None::<DocumentSummary>);
    let move_target = RwSignal::new(String::new());
    let move_error = RwSignal::new(None::<String>);
    let moving = RwSignal::new(false);
    let folder_options = RwSignal::new(Vec::<(usize, String, String)>::new());

    let downloading = RwSignal::new(false);

    // Fetch one page. Guarded by a request token: a response superseded by
    // a later fetch (scope change, quicker page flip) is discarded.
    let fetch_page = move |page_num: u64| {
        let mut ticket = 0;
        seq.update_value(|s| ticket = s.issue());
        let folder_id = selected_folder.get_untracked();
        let limit = page_size.get_untracked();

        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let result = api
                .documents_page(page_num, limit, folder_id.as_deref())
                .await;
            if !seq.with_value(|s| s.is_current(ticket)) {
                return;
            }

            match result {
                Ok(result_page) => {
                    documents.set(result_page.items);
                    total.set(result_page.total);
                    total_pages.set(result_page.total_pages);
                    page.set(page_num);
                    session_expired.set(false);
                }
                Err(err) if err.is_unauthorized() => {
                    session_expired.set(true);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    // Scope or page-size changes always restart from page 1, so the page
    // can never be out of range for the new result set.
    Effect::new(move |_| {
        let _scope = selected_folder.get();
        let _limit = page_size.get();
        if api.session().is_authenticated() {
            fetch_page(1);
        }
    });

    let change_page = move |target: u64| {
        if target >= 1 && target <= total_pages.get_untracked() && target != page.get_untracked()
        {
            fetch_page(target);
        }
    };

    // View: snapshot the row for the viewer page, then navigate.
    let on_view = Callback::new({
        let navigate = navigate.clone();
        move |doc: DocumentSummary| {
            let Some(id) = doc.document_id().map(str::to_string) else {
                error.set(Some("Document ID not found".to_string()));
                return;
            };
            api.session().store_document_snapshot(&doc);
            navigate(&format!("/documents/{}/view", id), Default::default());
        }
    });

    let on_download = Callback::new(move |doc: DocumentSummary| {
        let Some(id) = doc.document_id().map(str::to_string) else {
            error.set(Some("Document ID not found".to_string()));
            return;
        };
        let name = doc.display_name().to_string();
        let extension = doc.extension();
        downloading.set(true);
        spawn_local(async move {
            if let Err(err) = api.download_document(&id, &name, &extension).await {
                error.set(Some(format!("Download failed: {}", err)));
            }
            downloading.set(false);
        });
    });

    let handle_upload = move || {
        let Some(file) = selected_file.get_untracked() else {
            upload_error.set(Some("Please select a file to upload".to_string()));
            return;
        };
        uploading.set(true);
        upload_error.set(None);
        spawn_local(async move {
            match api.upload_document(&file).await {
                Ok(message) => {
                    show_upload.set(false);
                    selected_file.set(None);
                    file_meta.set(None);
                    notice.set(Some(
                        message.unwrap_or_else(|| "File uploaded successfully!".to_string()),
                    ));
                    fetch_page(1);
                }
                Err(err) => {
                    upload_error.set(Some(err.to_string()));
                }
            }
            uploading.set(false);
        });
    };

    let handle_delete = move || {
        let Some(doc) = doc_to_delete.get_untracked() else {
            return;
        };
        let Some(id) = doc.document_id().map(str::to_string) else {
            delete_error.set(Some("Invalid document ID".to_string()));
            return;
        };
        deleting.set(true);
        delete_error.set(None);
        spawn_local(async move {
            match api.delete_document(&id).await {
                Ok(message) => {
                    show_delete.set(false);
                    doc_to_delete.set(None);
                    notice.set(Some(
                        message.unwrap_or_else(|| "Document deleted successfully!".to_string()),
                    ));
                    // Deleting the last row of a later page rolls back one.
                    let next = page_after_delete(
                        page.get_untracked(),
                        documents.with_untracked(Vec::len),
                    );
                    fetch_page(next);
                }
                Err(err) => {
                    delete_error.set(Some(err.to_string()));
                }
            }
            deleting.set(false);
        });
    };

    // The move dialog offers the whole tree, indented by depth.
    let open_move_modal = Callback::new(move |doc: DocumentSummary| {
        doc_to_move.set(Some(doc));
        move_target.set(String::new());
        move_error.set(None);
        show_move.set(true);
        spawn_local(async move {
            match api.folder_tree().await {
                Ok(tree) => {
                    let options = tree
                        .flatten()
                        .into_iter()
                        .map(|(depth, node)| (depth, node.id.clone(), node.name.clone()))
                        .collect();
                    folder_options.set(options);
                }
                Err(err) => {
                    move_error.set(Some(err.to_string()));
                }
            }
        });
    });

    let handle_move = move || {
        let target = move_target.get_untracked();
        if target.is_empty() {
            move_error.set(Some("Please select a folder".to_string()));
            return;
        }
        let Some(doc) = doc_to_move.get_untracked() else {
            return;
        };
        let Some(id) = doc.document_id().map(str::to_string) else {
            move_error.set(Some("Invalid document ID".to_string()));
            return;
        };
        moving.set(true);
        move_error.set(None);
        spawn_local(async move {
            match api.move_document(&id, &target).await {
                Ok(message) => {
                    show_move.set(false);
                    doc_to_move.set(None);
                    move_target.set(String::new());
                    notice.set(Some(
                        message.unwrap_or_else(|| "Document moved successfully!".to_string()),
                    ));
                    fetch_page(page.get_untracked());
                }
                Err(err) => {
                    move_error.set(Some(err.to_string()));
                }
            }
            moving.set(false);
        });
    };

    let in_folder_scope = Memo::new(move |_| selected_folder.get().is_some());

    view! {
        <section class="panel">
            <header class="panel-header">
                <div>
                    <h2 class="panel-title">
                        <Icon name=icons::FILE class="w-5 h-5"/>
                        {move || {
                            if in_folder_scope.get() { "Folder Documents" } else { "My Documents" }
                        }}
                    </h2>
                    <p class="panel-subtitle">
                        {move || {
                            let mut line = format!(
                                "{} document(s) found - Page {} of {}",
                                total.get(),
                                page.get(),
                                total_pages.get().max(1),
                            );
                            if in_folder_scope.get() {
                                line.push_str(" - Filtered by folder");
                            }
                            line
                        }}
                    </p>
                </div>
                <button
                    class="btn-primary"
                    on:click=move |_| {
                        selected_file.set(None);
                        file_meta.set(None);
                        upload_error.set(None);
                        show_upload.set(true);
                    }
                >
                    <Icon name=icons::UPLOAD class="w-4 h-4"/>
                    "Upload"
                </button>
            </header>

            // Scope indicator with the way back to the global list
            {move || {
                in_folder_scope.get().then(|| view! {
                    <div class="scope-bar">
                        <span class="badge badge-info">
                            <Icon name=icons::FOLDER class="w-3 h-3"/>
                            "Folder View"
                        </span>
                        <span class="scope-bar-hint">"Showing documents from selected folder"</span>
                        <button
                            class="btn-secondary btn-sm"
                            on:click=move |_| selected_folder.set(None)
                        >
                            <Icon name=icons::EYE class="w-4 h-4"/>
                            "Show All Documents"
                        </button>
                    </div>
                })
            }}

            {move || {
                session_expired.get().then(|| view! {
                    <div class="alert alert-warning">
                        <Icon name=icons::WARNING class="w-5 h-5"/>
                        <div>
                            <strong>"Session expired"</strong>
                            <p>"Please login again to view your documents."</p>
                        </div>
                    </div>
                })
            }}

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert-danger">
                        <span>{err}</span>
                        <button class="btn-icon" on:click=move |_| error.set(None)>
                            <Icon name=icons::X class="w-4 h-4"/>
                        </button>
                    </div>
                })
            }}

            {move || {
                notice.get().map(|message| view! {
                    <div class="alert alert-info">
                        <span>{message}</span>
                        <button class="btn-icon" on:click=move |_| notice.set(None)>
                            <Icon name=icons::X class="w-4 h-4"/>
                        </button>
                    </div>
                })
            }}

            {move || {
                if loading.get() {
                    return view! {
                        <LoadingSpinner message="Loading documents...".to_string() />
                    }
                    .into_any();
                }
                let docs = documents.get();
                if docs.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <Icon name=icons::FILE class="w-12 h-12"/>
                            <h3>"No documents found"</h3>
                            <p>
                                {move || {
                                    if in_folder_scope.get() {
                                        "No documents in this folder."
                                    } else {
                                        "No documents available."
                                    }
                                }}
                            </p>
                        </div>
                    }
                    .into_any();
                }

                let base_index = (page.get() - 1) * page_size.get();
                view! {
                    <table class="doc-table">
                        <thead>
                            <tr>
                                <th class="col-index">"#"</th>
                                <th>"Document Name"</th>
                                <th class="col-type">"File Type"</th>
                                <th class="col-status">"Status"</th>
                                <th class="col-date">"Created Date"</th>
                                <th class="col-size">"Size"</th>
                                <th class="col-actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {docs
                                .into_iter()
                                .enumerate()
                                .map(|(index, doc)| {
                                    let extension = doc.extension();
                                    let status = doc.lifecycle();
                                    let view_doc = doc.clone();
                                    let download_doc = doc.clone();
                                    let move_doc = doc.clone();
                                    let delete_doc = doc.clone();
                                    view! {
                                        <tr>
                                            <td class="col-index">{(base_index + index as u64 + 1).to_string()}</td>
                                            <td>
                                                <button
                                                    class="doc-name"
                                                    title="Click to view document"
                                                    on:click=move |_| on_view.run(view_doc.clone())
                                                >
                                                    <Icon name=file_icon(&extension) class="w-5 h-5"/>
                                                    <span class="doc-name-text">
                                                        <strong>{doc.display_name().to_string()}</strong>
                                                        {doc.description.clone().map(|d| view! {
                                                            <small class="doc-description">{d}</small>
                                                        })}
                                                    </span>
                                                </button>
                                            </td>
                                            <td class="col-type">
                                                <span class="badge badge-outline">{extension.to_uppercase()}</span>
                                            </td>
                                            <td class="col-status">
                                                <span class=format!("badge {}", status.badge_class())>
                                                    {status.label()}
                                                </span>
                                            </td>
                                            <td class="col-date">{format_date(doc.created_at.as_deref())}</td>
                                            <td class="col-size">{format_file_size(doc.size)}</td>
                                            <td class="col-actions">
                                                <div class="row-actions">
                                                    <button
                                                        class="btn-secondary btn-sm"
                                                        title="Download Document"
                                                        disabled=move || downloading.get()
                                                        on:click=move |_| on_download.run(download_doc.clone())
                                                    >
                                                        <Icon name=icons::DOWNLOAD class="w-4 h-4"/>
                                                        "Download"
                                                    </button>
                                                    {(!in_folder_scope.get()).then(|| {
                                                        let move_doc = move_doc.clone();
                                                        view! {
                                                            <button
                                                                class="btn-secondary btn-sm"
                                                                title="Move to Folder"
                                                                on:click=move |_| open_move_modal.run(move_doc.clone())
                                                            >
                                                                <Icon name=icons::MOVE class="w-4 h-4"/>
                                                                "Move"
                                                            </button>
                                                        }
                                                    })}
                                                    <button
                                                        class="btn-secondary btn-sm"
                                                        title="Delete Document"
                                                        on:click=move |_| {
                                                            doc_to_delete.set(Some(delete_doc.clone()));
                                                            delete_error.set(None);
                                                            show_delete.set(true);
                                                        }
                                                    >
                                                        <Icon name=icons::TRASH class="w-4 h-4"/>
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            // Pagination bar
            {move || {
                let pages = total_pages.get();
                (pages > 1 && !loading.get()).then(|| {
                    let current = page.get();
                    let (start, end) = page_window(current, pages, MAX_VISIBLE_PAGES);
                    let (from, to) = item_range(current, page_size.get(), total.get());
                    view! {
                        <div class="pagination-bar">
                            <div class="page-size-select">
                                <span>"Show:"</span>
                                <select on:change=move |ev| {
                                    let parsed = event_target_value(&ev)
                                        .parse::<u64>()
                                        .unwrap_or(DEFAULT_PAGE_SIZE);
                                    page_size.set(parsed);
                                }>
                                    {PAGE_SIZE_OPTIONS
                                        .into_iter()
                                        .map(|size| view! {
                                            <option
                                                value=size.to_string()
                                                selected=move || page_size.get() == size
                                            >
                                                {size.to_string()}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                                <span>"per page"</span>
                            </div>

                            <nav class="pagination">
                                <button
                                    class="page-button"
                                    disabled=current == 1
                                    on:click=move |_| change_page(current - 1)
                                >
                                    <Icon name=icons::CHEVRON_LEFT class="w-4 h-4"/>
                                </button>

                                {(start > 1).then(|| view! {
                                    <button class="page-button" on:click=move |_| change_page(1)>"1"</button>
                                    {(start > 2).then(|| view! { <span class="page-ellipsis">"..."</span> })}
                                })}

                                {(start..=end)
                                    .map(|p| view! {
                                        <button
                                            class="page-button"
                                            class:page-button-active=move || page.get() == p
                                            on:click=move |_| change_page(p)
                                        >
                                            {p.to_string()}
                                        </button>
                                    })
                                    .collect_view()}

                                {(end < pages).then(|| view! {
                                    {(end < pages - 1).then(|| view! { <span class="page-ellipsis">"..."</span> })}
                                    <button class="page-button" on:click=move |_| change_page(pages)>
                                        {pages.to_string()}
                                    </button>
                                })}

                                <button
                                    class="page-button"
                                    disabled=current == pages
                                    on:click=move |_| change_page(current + 1)
                                >
                                    <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4"/>
                                </button>
                            </nav>

                            <div class="pagination-summary">
                                {format!("Showing {} to {} of {} documents", from, to, total.get())}
                            </div>
                        </div>
                    }
                })
            }}

            // Upload modal
            <BaseModal
                title="Upload Document".to_string()
                is_open=Signal::derive(move || show_upload.get())
                on_close=Callback::new(move |_| show_upload.set(false))
            >
                <div class="stack-md">
                    {move || {
                        upload_error.get().map(|err| view! {
                            <div class="alert alert-danger">
                                <Icon name=icons::WARNING class="w-4 h-4"/>
                                <span>{err}</span>
                            </div>
                        })
                    }}

                    <div class="form-field">
                        <label for="upload-file" class="form-label">"Select File"</label>
                        <input
                            type="file"
                            id="upload-file"
                            class="form-input"
                            accept=accept_attribute()
                            disabled=move || uploading.get()
                            on:change=move |ev| {
                                #[cfg(not(feature = "ssr"))]
                                {
                                    let input: web_sys::HtmlInputElement = event_target(&ev);
                                    let file = input.files().and_then(|files| files.get(0));
                                    if let Some(file) = file {
                                        let size = file.size() as u64;
                                        match validate_upload_size(size) {
                                            Ok(()) => {
                                                file_meta.set(Some((file.name(), size)));
                                                selected_file.set(Some(file));
                                                upload_error.set(None);
                                            }
                                            Err(err) => {
                                                upload_error.set(Some(err.to_string()));
                                                selected_file.set(None);
                                                file_meta.set(None);
                                            }
                                        }
                                    }
                                }
                                #[cfg(feature = "ssr")]
                                {
                                    let _ = ev;
                                }
                            }
                        />
                        <p class="form-hint">
                            "Supported formats: PDF, DOC, DOCX, TXT, Images, Excel, PowerPoint (Max 50MB)"
                        </p>
                    </div>

                    {move || {
                        file_meta.get().map(|(name, size)| view! {
                            <div class="alert alert-info">
                                <Icon name=icons::FILE class="w-5 h-5"/>
                                <div>
                                    <strong>{name}</strong>
                                    <p class="detail-line">
                                        {format!("Size: {}", format_file_size(Some(size)))}
                                    </p>
                                </div>
                            </div>
                        })
                    }}

                    <div class="modal-actions">
                        <button
                            class="btn-secondary"
                            disabled=move || uploading.get()
                            on:click=move |_| show_upload.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || uploading.get() || file_meta.get().is_none()
                            on:click=move |_| handle_upload()
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Upload File" }}
                        </button>
                    </div>
                </div>
            </BaseModal>

            // Delete confirmation modal
            <ConfirmDialog
                title="Confirm Delete".to_string()
                message="Are you sure you want to delete this document? This action cannot be undone."
                    .to_string()
                is_open=Signal::derive(move || show_delete.get())
                on_confirm=Callback::new(move |_| handle_delete())
                on_cancel=Callback::new(move |_| {
                    show_delete.set(false);
                    doc_to_delete.set(None);
                })
                confirm_text="Delete Document".to_string()
                error=Signal::derive(move || delete_error.get())
                busy=Signal::derive(move || deleting.get())
            >
                {move || {
                    doc_to_delete.get().map(|doc| view! {
                        <div class="alert alert-warning">
                            <Icon name=file_icon(&doc.extension()) class="w-5 h-5"/>
                            <div>
                                <strong>{doc.display_name().to_string()}</strong>
                                <p class="detail-line">
                                    {format!(
                                        "Type: .{} - Size: {} - Created: {}",
                                        doc.extension(),
                                        format_file_size(doc.size),
                                        format_date(doc.created_at.as_deref()),
                                    )}
                                </p>
                            </div>
                        </div>
                    })
                }}
            </ConfirmDialog>

            // Move-to-folder modal
            <BaseModal
                title="Move Document to Folder".to_string()
                is_open=Signal::derive(move || show_move.get())
                on_close=Callback::new(move |_| show_move.set(false))
            >
                <div class="stack-md">
                    {move || {
                        move_error.get().map(|err| view! {
                            <div class="alert alert-danger">
                                <Icon name=icons::WARNING class="w-4 h-4"/>
                                <span>{err}</span>
                            </div>
                        })
                    }}

                    {move || {
                        doc_to_move.get().map(|doc| view! {
                            <div class="alert alert-info">
                                <Icon name=icons::FILE class="w-5 h-5"/>
                                <span>
                                    <strong>"Document: "</strong>
                                    {doc.display_name().to_string()}
                                </span>
                            </div>
                        })
                    }}

                    <div class="form-field">
                        <label for="move-target" class="form-label">"Select Folder"</label>
                        <select
                            id="move-target"
                            class="form-input"
                            on:change=move |ev| move_target.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a folder..."</option>
                            {move || {
                                folder_options
                                    .get()
                                    .into_iter()
                                    .map(|(depth, id, name)| {
                                        let label = format!("{}{}", "  ".repeat(depth), name);
                                        view! { <option value=id>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="modal-actions">
                        <button
                            class="btn-secondary"
                            disabled=move || moving.get()
                            on:click=move |_| show_move.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || moving.get() || move_target.get().is_empty()
                            on:click=move |_| handle_move()
                        >
                            {move || if moving.get() { "Moving..." } else { "Move Document" }}
                        </button>
                    </div>
                </div>
            </BaseModal>
        </section>
    }
}
