use leptos::prelude::*;

use crate::ui::common::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal with backdrop, Escape handling and a titled header.
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle shown under the title
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class
    #[prop(default = "modal-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop modal-open"
                } else {
                    "modal-backdrop modal-closed"
                }
            }
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("modal-card {}", max_width)>
                <div class="modal-header">
                    <div>
                        <h3 class="modal-title">{title}</h3>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for destructive actions.
#[component]
pub fn ConfirmDialog(
    /// Dialog title
    title: String,
    /// Dialog message
    message: String,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
    /// Confirm button text
    #[prop(default = "Confirm".to_string())]
    confirm_text: String,
    /// Error message from a failed prior attempt
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
    /// Whether the confirm action is in flight
    #[prop(optional, into)]
    busy: Option<Signal<bool>>,
    /// Extra detail content (e.g. the item being deleted)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let is_busy = move || busy.map(|b| b.get()).unwrap_or(false);

    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=Callback::new(move |_| on_cancel.run(()))
            max_width="modal-sm"
        >
            <div class="stack-md">
                {error.map(|error| view! {
                    {move || error.get().map(|e| view! {
                        <div class="alert alert-danger">
                            <Icon name=icons::WARNING class="w-4 h-4"/>
                            <span>{e}</span>
                        </div>
                    })}
                })}

                <p class="modal-message">{message}</p>

                {children.map(|c| c())}

                <div class="modal-actions">
                    <button
                        class="btn-secondary"
                        disabled=is_busy
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn-danger"
                        disabled=is_busy
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_text.clone()}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
