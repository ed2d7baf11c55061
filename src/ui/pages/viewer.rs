//! Document viewer page
//!
//! Shows the metadata snapshot stored when the row was clicked, plus the
//! document's AI summary: fetch, generate, refresh, edit, delete, and a
//! mermaid diagram modal. The document body itself stays on the backend;
//! only the summary and diagram are rendered here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use pulldown_cmark::{Options, Parser, html};

use crate::core::api::summary::Summary;
use crate::core::api::use_api_client;
use crate::core::documents::{DocumentSummary, file_icon, format_date, format_file_size};
use crate::ui::common::icon::{Icon, icons};
use crate::ui::common::modal::{BaseModal, ConfirmDialog};
use crate::ui::common::spinner::LoadingSpinner;
use crate::ui::diagram::DiagramModal;

/// Render summary markdown to HTML.
fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Document viewer page component
#[component]
pub fn ViewerPage() -> impl IntoView {
    let api = use_api_client();
    let params = use_params_map();

    let document_id = Memo::new(move |_| {
        params.with(|p| p.get("id").unwrap_or_default())
    });

    // Metadata snapshot written by the listing when the row was clicked.
    let document = RwSignal::new(None::<DocumentSummary>);
    Effect::new(move |_| {
        let id = document_id.get();
        let snapshot = api.session().load_document_snapshot();
        document.set(snapshot.filter(|doc| {
            doc.document_id().is_some_and(|snapshot_id| snapshot_id == id)
        }));
    });

    // Summary state: None while loading; Some(None) = no summary yet.
    let summary = RwSignal::new(None::<Option<Summary>>);
    let summary_error = RwSignal::new(None::<String>);
    let working = RwSignal::new(false);

    let show_diagram = RwSignal::new(false);
    let show_edit = RwSignal::new(false);
    let edit_text = RwSignal::new(String::new());
    let show_delete = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let id = document_id.get();
        if id.is_empty() || !api.session().is_authenticated() {
            return;
        }
        spawn_local(async move {
            match api.get_summary(&id).await {
                Ok(result) => summary.set(Some(result)),
                Err(err) => {
                    summary.set(Some(None));
                    summary_error.set(Some(err.to_string()));
                }
            }
        });
    });

    // Generate and refresh share the same shape: call, then replace.
    let run_generation = move |refresh: bool| {
        let id = document_id.get_untracked();
        if id.is_empty() {
            return;
        }
        working.set(true);
        summary_error.set(None);
        spawn_local(async move {
            let result = if refresh {
                api.refresh_summary(&id).await
            } else {
                api.create_summary(&id).await
            };
            match result {
                Ok(new_summary) => summary.set(Some(Some(new_summary))),
                Err(err) => summary_error.set(Some(err.to_string())),
            }
            working.set(false);
        });
    };

    let save_edit = move || {
        let id = document_id.get_untracked();
        let text = edit_text.get_untracked();
        working.set(true);
        summary_error.set(None);
        spawn_local(async move {
            match api.update_summary(&id, &text).await {
                Ok(updated) => {
                    summary.set(Some(Some(updated)));
                    show_edit.set(false);
                }
                Err(err) => summary_error.set(Some(err.to_string())),
            }
            working.set(false);
        });
    };

    let delete_summary = move || {
        let id = document_id.get_untracked();
        working.set(true);
        delete_error.set(None);
        spawn_local(async move {
            match api.delete_summary(&id).await {
                Ok(_) => {
                    summary.set(Some(None));
                    show_delete.set(false);
                }
                Err(err) => delete_error.set(Some(err.to_string())),
            }
            working.set(false);
        });
    };

    let diagram_source = Signal::derive(move || {
        summary
            .get()
            .flatten()
            .and_then(|s| s.diagram)
    });

    view! {
        <div class="page">
            <header class="app-header">
                <div class="app-header-inner">
                    <A href="/" attr:class="brand">
                        <Icon name=icons::CHEVRON_LEFT class="w-5 h-5"/>
                        <span class="brand-name">"Back to Documents"</span>
                    </A>
                </div>
            </header>

            <main class="page-main viewer">
                // Metadata card from the stored snapshot
                {move || {
                    match document.get() {
                        Some(doc) => {
                            let extension = doc.extension();
                            let status = doc.lifecycle();
                            view! {
                                <section class="panel doc-meta">
                                    <Icon name=file_icon(&extension) class="w-10 h-10"/>
                                    <div>
                                        <h1 class="doc-meta-title">{doc.display_name().to_string()}</h1>
                                        <div class="doc-meta-line">
                                            <span class="badge badge-outline">{extension.to_uppercase()}</span>
                                            <span class=format!("badge {}", status.badge_class())>
                                                {status.label()}
                                            </span>
                                            <span>{format_file_size(doc.size)}</span>
                                            <span>{format_date(doc.created_at.as_deref())}</span>
                                        </div>
                                    </div>
                                </section>
                            }
                            .into_any()
                        }
                        None => view! {
                            <section class="panel doc-meta">
                                <Icon name=icons::FILE class="w-10 h-10"/>
                                <div>
                                    <h1 class="doc-meta-title">"Document"</h1>
                                    <p class="panel-subtitle">
                                        {move || format!("ID: {}", document_id.get())}
                                    </p>
                                </div>
                            </section>
                        }
                        .into_any(),
                    }
                }}

                // Summary card
                <section class="panel">
                    <header class="panel-header">
                        <h2 class="panel-title">"AI Summary"</h2>
                        <div class="row-actions">
                            {move || {
                                let has_summary = summary
                                    .get()
                                    .flatten()
                                    .is_some_and(|s| s.has_content());
                                if has_summary {
                                    view! {
                                        <button
                                            class="btn-secondary btn-sm"
                                            disabled=move || working.get()
                                            on:click=move |_| run_generation(true)
                                        >
                                            <Icon name=icons::REFRESH class="w-4 h-4"/>
                                            "Refresh"
                                        </button>
                                        <button
                                            class="btn-secondary btn-sm"
                                            disabled=move || working.get()
                                            on:click=move |_| {
                                                let current = summary
                                                    .get_untracked()
                                                    .flatten()
                                                    .and_then(|s| s.summary)
                                                    .unwrap_or_default();
                                                edit_text.set(current);
                                                show_edit.set(true);
                                            }
                                        >
                                            <Icon name=icons::EDIT class="w-4 h-4"/>
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn-secondary btn-sm"
                                            disabled=move || working.get()
                                            on:click=move |_| {
                                                delete_error.set(None);
                                                show_delete.set(true);
                                            }
                                        >
                                            <Icon name=icons::TRASH class="w-4 h-4"/>
                                            "Delete"
                                        </button>
                                    }
                                    .into_any()
                                } else {
                                    view! { <span></span> }.into_any()
                                }
                            }}
                            {move || {
                                diagram_source.get().is_some().then(|| view! {
                                    <button
                                        class="btn-primary btn-sm"
                                        on:click=move |_| show_diagram.set(true)
                                    >
                                        <Icon name=icons::DIAGRAM class="w-4 h-4"/>
                                        "View Diagram"
                                    </button>
                                })
                            }}
                        </div>
                    </header>

                    {move || {
                        summary_error.get().map(|err| view! {
                            <div class="alert alert-danger">
                                <Icon name=icons::WARNING class="w-4 h-4"/>
                                <span>{err}</span>
                                <button class="btn-icon" on:click=move |_| summary_error.set(None)>
                                    <Icon name=icons::X class="w-4 h-4"/>
                                </button>
                            </div>
                        })
                    }}

                    {move || {
                        match summary.get() {
                            None => view! {
                                <LoadingSpinner message="Loading summary...".to_string() />
                            }
                            .into_any(),
                            Some(Some(current)) if current.has_content() => {
                                let rendered =
                                    markdown_to_html(current.summary.as_deref().unwrap_or_default());
                                view! {
                                    <article class="summary-body" inner_html=rendered></article>
                                }
                                .into_any()
                            }
                            Some(_) => view! {
                                <div class="empty-state">
                                    <Icon name=icons::DIAGRAM class="w-12 h-12"/>
                                    <h3>"No summary yet"</h3>
                                    <p>"Ask the AI service to summarize this document."</p>
                                    <button
                                        class="btn-primary"
                                        disabled=move || working.get()
                                        on:click=move |_| run_generation(false)
                                    >
                                        {move || {
                                            if working.get() { "Generating..." } else { "Generate Summary" }
                                        }}
                                    </button>
                                </div>
                            }
                            .into_any(),
                        }
                    }}
                </section>
            </main>

            // Diagram modal
            <DiagramModal
                is_open=Signal::derive(move || show_diagram.get())
                diagram=diagram_source
                error=Signal::derive(move || summary_error.get())
                on_close=Callback::new(move |_| show_diagram.set(false))
            />

            // Edit summary modal
            <BaseModal
                title="Edit Summary".to_string()
                is_open=Signal::derive(move || show_edit.get())
                on_close=Callback::new(move |_| show_edit.set(false))
                max_width="modal-lg"
            >
                <div class="stack-md">
                    <textarea
                        class="form-input summary-editor"
                        rows="12"
                        prop:value=move || edit_text.get()
                        on:input=move |ev| edit_text.set(event_target_value(&ev))
                    ></textarea>
                    <div class="modal-actions">
                        <button
                            class="btn-secondary"
                            disabled=move || working.get()
                            on:click=move |_| show_edit.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || working.get()
                            on:click=move |_| save_edit()
                        >
                            {move || if working.get() { "Saving..." } else { "Save Summary" }}
                        </button>
                    </div>
                </div>
            </BaseModal>

            // Delete summary confirmation
            <ConfirmDialog
                title="Delete Summary".to_string()
                message="Delete this document's AI summary? You can generate a new one later."
                    .to_string()
                is_open=Signal::derive(move || show_delete.get())
                on_confirm=Callback::new(move |_| delete_summary())
                on_cancel=Callback::new(move |_| show_delete.set(false))
                confirm_text="Delete Summary".to_string()
                error=Signal::derive(move || delete_error.get())
                busy=Signal::derive(move || working.get())
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_headings_and_lists() {
        let html = markdown_to_html("# Title\n\n- one\n- two");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_markdown_renders_tables() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_markdown_plain_text_becomes_paragraph() {
        let html = markdown_to_html("just text");
        assert!(html.contains("<p>just text</p>"));
    }
}
