//! Registration page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::RegisterForm;
use crate::ui::common::icon::{Icon, icons};

/// Registration page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
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
                    <RegisterForm
                        on_success=Callback::new(on_success)
                        on_login_click=Callback::new(on_login_click)
                    />
                </div>
            </main>
        </div>
    }
}
