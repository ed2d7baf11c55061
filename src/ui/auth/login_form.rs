//! Login form component
//!
//! Validates inline before any network call; on success stores the token in
//! the session and notifies the caller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::use_api_client;
use crate::core::validation::{validate_email, validate_password};
use crate::ui::common::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the register page
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    let api = use_api_client();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    // Field and request errors
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let request_error = RwSignal::new(None::<String>);

    let check_email = move || match validate_email(&email.get()) {
        Ok(()) => {
            email_error.set(None);
            true
        }
        Err(err) => {
            email_error.set(Some(err.to_string()));
            false
        }
    };

    let check_password = move || match validate_password(&password.get()) {
        Ok(()) => {
            password_error.set(None);
            true
        }
        Err(err) => {
            password_error.set(Some(err.to_string()));
            false
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        request_error.set(None);

        let email_valid = check_email();
        let password_valid = check_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();

        submitting.set(true);
        spawn_local(async move {
            match api.login(&email_val, &password_val).await {
                Ok(token) => {
                    api.session().set_token(token);
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(err) => {
                    request_error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="auth-form">
            <div class="auth-form-header">
                <h2 class="auth-form-title">"Welcome Back"</h2>
                <p class="auth-form-subtitle">"Sign in to manage your documents"</p>
            </div>

            {move || {
                request_error.get().map(|error| view! {
                    <div class="alert alert-danger">
                        <Icon name=icons::WARNING class="w-4 h-4"/>
                        <span>{error}</span>
                    </div>
                })
            }}

            <div class="form-field">
                <label for="email" class="form-label">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    class="form-input"
                    class:form-input-invalid=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { check_email(); }
                />
                {move || {
                    email_error.get().map(|error| view! {
                        <p class="form-error">{error}</p>
                    })
                }}
            </div>

            <div class="form-field">
                <label for="password" class="form-label">"Password"</label>
                <div class="form-input-wrap">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        class="form-input"
                        class:form-input-invalid=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                        on:blur=move |_| { check_password(); }
                    />
                    <button
                        type="button"
                        class="form-input-adornment"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_password.get() {
                                view! { <Icon name=icons::EYE_CLOSED class="w-5 h-5" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="w-5 h-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
                {move || {
                    password_error.get().map(|error| view! {
                        <p class="form-error">{error}</p>
                    })
                }}
            </div>

            <button type="submit" class="btn-primary btn-block" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
            </button>

            <p class="auth-form-footer">
                "Don't have an account yet? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| {
                        if let Some(callback) = on_register_click {
                            callback.run(());
                        }
                    }
                >
                    "Sign Up"
                </button>
            </p>
        </form>
    }
}
