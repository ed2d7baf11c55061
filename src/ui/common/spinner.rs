use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Circular loading spinner
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = if class.is_empty() {
        format!("spinner {}", size.class())
    } else {
        format!("spinner {} {}", size.class(), class)
    };

    view! {
        <div class=classes role="status" aria-live="polite">
            <div class="spinner-circle"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Centered spinner with an optional message, for page/section loads
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="spinner-centered">
            <Spinner size=SpinnerSize::Large />
            {(!message.is_empty()).then(|| view! {
                <p class="spinner-label">{message.clone()}</p>
            })}
        </div>
    }
}

/// Small spinner for inline use inside buttons
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Small class="spinner-inline".to_string() />
    }
}

/// Button that swaps its label for a spinner while an action runs
#[component]
pub fn LoadingButton(
    /// Whether button is in loading state
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when not loading
    text: String,
    /// Button text when loading
    #[prop(default = "Working...".to_string())]
    loading_text: String,
    /// Click handler (disabled when loading)
    on_click: Callback<()>,
    /// Whether button is disabled for other reasons
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Button style class
    #[prop(default = "btn-primary")]
    class: &'static str,
) -> impl IntoView {
    let is_disabled = move || loading.get() || disabled.map(|d| d.get()).unwrap_or(false);

    view! {
        <button
            class=class
            disabled=is_disabled
            on:click=move |_| {
                if !is_disabled() {
                    on_click.run(());
                }
            }
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text.clone()}</span> }
            >
                <span class="btn-loading">
                    <InlineSpinner />
                    <span>{loading_text.clone()}</span>
                </span>
            </Show>
        </button>
    }
}
