//! Home page: folder browser above the paginated document table
//!
//! The two panels share the selected-folder scope: stepping into a folder
//! in the browser narrows the table to that folder's documents.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::session::use_session;
use crate::ui::common::icon::{Icon, icons};
use crate::ui::documents::DocumentsTable;
use crate::ui::folders::FoldersPanel;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Folder scope shared between the two panels.
    let selected_folder = RwSignal::new(None::<String>);

    // Signed-out visitors go to the login page.
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session.is_ready() && !session.is_authenticated() {
                navigate("/login", Default::default());
            }
        }
    });

    let on_logout = move |_| {
        session.clear();
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="page">
            <header class="app-header">
                <div class="app-header-inner">
                    <div class="brand">
                        <Icon name=icons::FOLDER class="w-6 h-6"/>
                        <span class="brand-name">"Docuvault"</span>
                    </div>
                    <button class="btn-secondary btn-sm" on:click=on_logout>
                        <Icon name=icons::LOGOUT class="w-4 h-4"/>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="page-main">
                <FoldersPanel selected_folder=selected_folder />
                <DocumentsTable selected_folder=selected_folder />
            </main>
        </div>
    }
}
