//! Login page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::session::use_session;
use crate::ui::auth::LoginForm;
use crate::ui::common::icon::{Icon, icons};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    // Already signed in: straight to the documents.
    Effect::new(move |_| {
        if session.is_ready() && session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    let on_register_click = move |_| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    };

    view! {
        <div class="page auth-page">
            <header class="app-header">
                <div class="app-header-inner">
                    <div class="brand">
                        <Icon name=icons::FOLDER class="w-6 h-6"/>
                        <span class="brand-name">"Docuvault"</span>
                    </div>
                </div>
            </header>

            <main class="auth-main">
                <div class="auth-card">
                    <LoginForm
                        on_success=Callback::new(on_success)
                        on_register_click=Callback::new(on_register_click)
                    />
                </div>
            </main>
        </div>
    }
}
