//! 404 page

use leptos::prelude::*;
use leptos_router::components::A;

/// Not-found page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <main class="empty-state not-found">
                <h1>"404"</h1>
                <p>"This page does not exist."</p>
                <A href="/" attr:class="btn-primary">"Back to Documents"</A>
            </main>
        </div>
    }
}
