//! Folder browser panel
//!
//! Renders the navigator's current view as a breadcrumb bar plus a folder
//! grid, with create/delete modals. Navigation steps are pure in-memory
//! cursor moves; only mutations and the initial load hit the network, and
//! every mutation is followed by a full tree reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::use_api_client;
use crate::core::documents::format_date;
use crate::core::navigator::FolderNavigator;
use crate::core::paging::RequestSeq;
use crate::core::validation::validate_folder_name;
use crate::ui::common::icon::{Icon, icons};
use crate::ui::common::modal::{BaseModal, ConfirmDialog};
use crate::ui::common::spinner::LoadingSpinner;

/// Folder names longer than this are shortened on cards.
const NAME_DISPLAY_LIMIT: usize = 20;

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LIMIT {
        let short: String = name.chars().take(NAME_DISPLAY_LIMIT).collect();
        format!("{}...", short)
    } else {
        name.to_string()
    }
}

/// Folder browser panel.
///
/// `selected_folder` is shared with the documents table: it follows the
/// navigator's current folder so the listing scopes itself accordingly.
#[component]
pub fn FoldersPanel(selected_folder: RwSignal<Option<String>>) -> impl IntoView {
    let api = use_api_client();

    let navigator = RwSignal::new(FolderNavigator::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let session_expired = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let seq = StoredValue::new(RequestSeq::new());

    // Create-folder modal state
    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let create_error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    // Delete-folder modal state
    let show_delete = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<DeleteTarget>);
    let delete_error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    // Full tree reload; resets the cursor to root. Guarded by a request
    // token so a slow response cannot clobber a newer one.
    let reload = move || {
        let mut ticket = 0;
        seq.update_value(|s| ticket = s.issue());
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let result = api.folder_tree().await;
            if !seq.with_value(|s| s.is_current(ticket)) {
                return;
            }

            match result {
                Ok(tree) => {
                    navigator.update(|nav| nav.replace_tree(tree));
                    selected_folder.set(None);
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

    // Initial load once a session is present.
    Effect::new(move |_| {
        if api.session().is_authenticated() {
            reload();
        }
    });

    let sync_selection = move || {
        selected_folder.set(navigator.with_untracked(|nav| {
            nav.current().map(|folder| folder.id.clone())
        }));
    };

    let open_folder = move |folder_id: String| {
        let result = {
            let mut outcome = Ok(());
            navigator.update(|nav| outcome = nav.open(&folder_id));
            outcome
        };
        match result {
            Ok(()) => sync_selection(),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let go_back = move || {
        navigator.update(|nav| nav.back());
        sync_selection();
    };

    let jump = move |index: usize| {
        navigator.update(|nav| nav.jump_to_breadcrumb(index));
        sync_selection();
    };

    let handle_create = move || {
        let name = match validate_folder_name(&new_name.get()) {
            Ok(name) => name,
            Err(err) => {
                create_error.set(Some(err.to_string()));
                return;
            }
        };
        let parent_id =
            navigator.with_untracked(|nav| nav.current().map(|folder| folder.id.clone()));

        creating.set(true);
        create_error.set(None);
        spawn_local(async move {
            match api.create_folder(&name, parent_id.as_deref()).await {
                Ok(message) => {
                    show_create.set(false);
                    new_name.set(String::new());
                    notice.set(Some(
                        message.unwrap_or_else(|| "Folder created successfully!".to_string()),
                    ));
                    reload();
                }
                Err(err) => {
                    create_error.set(Some(err.to_string()));
                }
            }
            creating.set(false);
        });
    };

    let handle_delete = move || {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        deleting.set(true);
        delete_error.set(None);
        spawn_local(async move {
            match api.delete_folder(&target.id).await {
                Ok(message) => {
                    show_delete.set(false);
                    delete_target.set(None);
                    notice.set(Some(
                        message.unwrap_or_else(|| "Folder deleted successfully!".to_string()),
                    ));
                    reload();
                }
                Err(err) => {
                    delete_error.set(Some(err.to_string()));
                }
            }
            deleting.set(false);
        });
    };

    let displayed = Memo::new(move |_| navigator.with(|nav| nav.displayed().to_vec()));
    let breadcrumbs = Memo::new(move |_| navigator.with(|nav| nav.breadcrumbs()));
    let in_subfolder = Memo::new(move |_| navigator.with(|nav| nav.in_subfolder()));
    let panel_title = Memo::new(move |_| {
        navigator.with(|nav| match nav.current() {
            Some(folder) => folder.name.clone(),
            None => "Folder Structure".to_string(),
        })
    });

    view! {
        <section class="panel">
            <header class="panel-header">
                <div>
                    <h2 class="panel-title">
                        <Icon name=icons::FOLDER class="w-5 h-5"/>
                        {move || panel_title.get()}
                    </h2>
                    <p class="panel-subtitle">
                        {move || format!("{} folder(s) found", displayed.get().len())}
                    </p>
                </div>
                <button
                    class="btn-secondary"
                    on:click=move |_| {
                        new_name.set(String::new());
                        create_error.set(None);
                        show_create.set(true);
                    }
                >
                    <Icon name=icons::FOLDER_PLUS class="w-4 h-4"/>
                    "New Folder"
                </button>
            </header>

            // Breadcrumb bar, shown once the user has stepped below root
            {move || {
                let crumbs = breadcrumbs.get();
                (crumbs.len() > 1).then(|| {
                    let last = crumbs.len() - 1;
                    view! {
                        <nav class="breadcrumbs" aria-label="breadcrumb">
                            {crumbs
                                .into_iter()
                                .enumerate()
                                .map(|(pos, (index, name))| {
                                    if pos == last {
                                        view! {
                                            <span class="breadcrumb-current">{name}</span>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <button
                                                class="breadcrumb-link"
                                                on:click=move |_| jump(index)
                                            >
                                                {if index == 0 {
                                                    view! {
                                                        <Icon name=icons::HOME class="w-4 h-4"/>
                                                        <span>{name}</span>
                                                    }
                                                    .into_any()
                                                } else {
                                                    view! { <span>{name}</span> }.into_any()
                                                }}
                                            </button>
                                            <span class="breadcrumb-separator">"/"</span>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()}
                        </nav>
                    }
                })
            }}

            // Session-expired banner takes precedence over other errors
            {move || {
                session_expired.get().then(|| view! {
                    <div class="alert alert-warning">
                        <Icon name=icons::WARNING class="w-5 h-5"/>
                        <div>
                            <strong>"Session expired"</strong>
                            <p>"Please login again to view your folders."</p>
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
                    view! { <LoadingSpinner message="Loading folders...".to_string() /> }
                        .into_any()
                } else {
                    let folders = displayed.get();
                    if folders.is_empty() {
                        view! {
                            <div class="empty-state">
                                <Icon name=icons::FOLDER_OPEN class="w-12 h-12"/>
                                <h3>"No folders found"</h3>
                                <p>
                                    {move || {
                                        if in_subfolder.get() {
                                            "No subfolders here."
                                        } else {
                                            "There are no folders to display."
                                        }
                                    }}
                                </p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="folder-grid">
                                {in_subfolder.get().then(|| view! {
                                    <button class="folder-card folder-card-up" on:click=move |_| go_back()>
                                        <Icon name=icons::CHEVRON_LEFT class="w-5 h-5"/>
                                        <span>".."</span>
                                    </button>
                                })}
                                {folders
                                    .into_iter()
                                    .map(|folder| {
                                        let open_id = folder.id.clone();
                                        let delete_info = DeleteTarget {
                                            id: folder.id.clone(),
                                            name: folder.name.clone(),
                                            created_at: folder.created_at.clone(),
                                            subfolders: folder.subfolder_count(),
                                            documents: folder.document_count(),
                                        };
                                        view! {
                                            <div class="folder-card" on:click={
                                                let open_id = open_id.clone();
                                                move |_| open_folder(open_id.clone())
                                            }>
                                                <div class="folder-card-info">
                                                    <Icon name=icons::FOLDER class="w-6 h-6 folder-card-icon"/>
                                                    <div>
                                                        <h4 class="folder-card-name">{truncate_name(&folder.name)}</h4>
                                                        <div class="folder-card-meta">
                                                            <span>{format_date(folder.created_at.as_deref())}</span>
                                                            <span class="badge badge-muted">
                                                                {format!("{} sub", folder.subfolder_count())}
                                                            </span>
                                                            <span class="badge badge-muted">
                                                                {format!("{} docs", folder.document_count())}
                                                            </span>
                                                        </div>
                                                    </div>
                                                </div>
                                                <div class="folder-card-actions">
                                                    <button
                                                        class="btn-icon"
                                                        title="Open Folder"
                                                        on:click={
                                                            let open_id = open_id.clone();
                                                            move |ev| {
                                                                ev.stop_propagation();
                                                                open_folder(open_id.clone());
                                                            }
                                                        }
                                                    >
                                                        <Icon name=icons::FOLDER_OPEN class="w-4 h-4"/>
                                                    </button>
                                                    <button
                                                        class="btn-icon"
                                                        title="Delete Folder"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            delete_target.set(Some(delete_info.clone()));
                                                            delete_error.set(None);
                                                            show_delete.set(true);
                                                        }
                                                    >
                                                        <Icon name=icons::TRASH class="w-4 h-4"/>
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            // Create folder modal
            <BaseModal
                title="Create New Folder".to_string()
                is_open=Signal::derive(move || show_create.get())
                on_close=Callback::new(move |_| show_create.set(false))
            >
                <form
                    class="stack-md"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        handle_create();
                    }
                >
                    {move || {
                        create_error.get().map(|err| view! {
                            <div class="alert alert-danger">
                                <Icon name=icons::WARNING class="w-4 h-4"/>
                                <span>{err}</span>
                            </div>
                        })
                    }}

                    <div class="form-field">
                        <label for="folder-name" class="form-label">"Folder Name"</label>
                        <input
                            type="text"
                            id="folder-name"
                            class="form-input"
                            placeholder="Enter folder name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| {
                                new_name.set(event_target_value(&ev));
                                create_error.set(None);
                            }
                        />
                    </div>

                    {move || {
                        navigator
                            .with(|nav| nav.current().map(|f| f.name.clone()))
                            .map(|parent| view! {
                                <div class="alert alert-info">
                                    <span>{format!("This folder will be created inside \"{}\"", parent)}</span>
                                </div>
                            })
                    }}

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || creating.get()
                            on:click=move |_| show_create.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || creating.get() || new_name.get().trim().is_empty()
                        >
                            {move || if creating.get() { "Creating..." } else { "Create Folder" }}
                        </button>
                    </div>
                </form>
            </BaseModal>

            // Delete confirmation modal
            <ConfirmDialog
                title="Confirm Delete".to_string()
                message="Are you sure you want to delete this folder? This action cannot be undone."
                    .to_string()
                is_open=Signal::derive(move || show_delete.get())
                on_confirm=Callback::new(move |_| handle_delete())
                on_cancel=Callback::new(move |_| {
                    show_delete.set(false);
                    delete_target.set(None);
                })
                confirm_text="Delete Folder".to_string()
                error=Signal::derive(move || delete_error.get())
                busy=Signal::derive(move || deleting.get())
            >
                {move || {
                    delete_target.get().map(|target| view! {
                        <div class="alert alert-warning">
                            <Icon name=icons::FOLDER class="w-5 h-5"/>
                            <div>
                                <strong>{target.name.clone()}</strong>
                                <p class="detail-line">
                                    {format!(
                                        "Created: {} - Contains: {} subfolders, {} documents",
                                        format_date(target.created_at.as_deref()),
                                        target.subfolders,
                                        target.documents,
                                    )}
                                </p>
                            </div>
                        </div>
                    })
                }}
            </ConfirmDialog>
        </section>
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DeleteTarget {
    id: String,
    name: String,
    created_at: Option<String>,
    subfolders: usize,
    documents: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name_shortens_long_names() {
        assert_eq!(truncate_name("Reports"), "Reports");
        assert_eq!(
            truncate_name("A very long folder name indeed"),
            "A very long folder n..."
        );
    }

    #[test]
    fn test_truncate_name_counts_chars_not_bytes() {
        let name = "é".repeat(NAME_DISPLAY_LIMIT);
        assert_eq!(truncate_name(&name), name);
    }
}
