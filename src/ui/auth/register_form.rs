//! Registration form component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::use_api_client;
use crate::core::validation::{
    validate_email, validate_password, validate_password_confirmation,
};
use crate::ui::common::icon::{Icon, icons};

/// Registration form component
#[component]
pub fn RegisterForm(
    /// Callback when registration succeeds
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the login page
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let api = use_api_client();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let email_error = RwSignal::new(None::<String>);
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirmation_error = RwSignal::new(None::<String>);
    let request_error = RwSignal::new(None::<String>);
    let success_message = RwSignal::new(None::<String>);

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

    let check_username = move || {
        if username.get().trim().is_empty() {
            username_error.set(Some("Username is required".to_string()));
            false
        } else {
            username_error.set(None);
            true
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

    let check_confirmation =
        move || match validate_password_confirmation(&password.get(), &confirmation.get()) {
            Ok(()) => {
                confirmation_error.set(None);
                true
            }
            Err(err) => {
                confirmation_error.set(Some(err.to_string()));
                false
            }
        };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        request_error.set(None);

        let checks = [
            check_email(),
            check_username(),
            check_password(),
            check_confirmation(),
        ];
        if checks.contains(&false) {
            return;
        }

        let email_val = email.get();
        let username_val = username.get().trim().to_string();
        let password_val = password.get();

        submitting.set(true);
        spawn_local(async move {
            match api.register(&email_val, &username_val, &password_val).await {
                Ok(message) => {
                    success_message.set(Some(
                        message.unwrap_or_else(|| "Account created. Please sign in.".to_string()),
                    ));
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
                <h2 class="auth-form-title">"Create Account"</h2>
                <p class="auth-form-subtitle">"Register to start organizing your documents"</p>
            </div>

            {move || {
                request_error.get().map(|error| view! {
                    <div class="alert alert-danger">
                        <Icon name=icons::WARNING class="w-4 h-4"/>
                        <span>{error}</span>
                    </div>
                })
            }}

            {move || {
                success_message.get().map(|message| view! {
                    <div class="alert alert-info">
                        <span>{message}</span>
                    </div>
                })
            }}

            <div class="form-field">
                <label for="register-email" class="form-label">"Email"</label>
                <input
                    type="email"
                    id="register-email"
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
                {move || email_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>

            <div class="form-field">
                <label for="register-username" class="form-label">"Username"</label>
                <input
                    type="text"
                    id="register-username"
                    name="username"
                    autocomplete="username"
                    placeholder="Choose a username"
                    class="form-input"
                    class:form-input-invalid=move || username_error.get().is_some()
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        username.set(event_target_value(&ev));
                        username_error.set(None);
                    }
                    on:blur=move |_| { check_username(); }
                />
                {move || username_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>

            <div class="form-field">
                <label for="register-password" class="form-label">"Password"</label>
                <input
                    type="password"
                    id="register-password"
                    name="password"
                    autocomplete="new-password"
                    placeholder="Choose a password"
                    class="form-input"
                    class:form-input-invalid=move || password_error.get().is_some()
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                    on:blur=move |_| { check_password(); }
                />
                {move || password_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>

            <div class="form-field">
                <label for="register-confirm" class="form-label">"Confirm Password"</label>
                <input
                    type="password"
                    id="register-confirm"
                    name="confirm-password"
                    autocomplete="new-password"
                    placeholder="Repeat the password"
                    class="form-input"
                    class:form-input-invalid=move || confirmation_error.get().is_some()
                    prop:value=move || confirmation.get()
                    on:input=move |ev| {
                        confirmation.set(event_target_value(&ev));
                        confirmation_error.set(None);
                    }
                    on:blur=move |_| { check_confirmation(); }
                />
                {move || confirmation_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>

            <button type="submit" class="btn-primary btn-block" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
            </button>

            <p class="auth-form-footer">
                "Already have an account? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click {
                            callback.run(());
                        }
                    }
                >
                    "Sign In"
                </button>
            </p>
        </form>
    }
}
