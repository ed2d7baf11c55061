//! AI diagram modal
//!
//! Receives mermaid source text and hands it to the mermaid library loaded
//! as a page-level script, fire-and-forget. When the library is absent the
//! raw source is shown instead, and either way the source can be downloaded
//! as a `.mmd` file.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::ui::common::icon::{Icon, icons};
use crate::ui::common::modal::BaseModal;

const DIAGRAM_CONTAINER_ID: &str = "docuvault-diagram";

/// Modal rendering an AI-generated mermaid diagram.
#[component]
pub fn DiagramModal(
    /// Whether the modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Mermaid source to render; `None` while still loading
    #[prop(into)]
    diagram: Signal<Option<String>>,
    /// Error from the summary fetch, shown instead of a diagram
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Close callback
    on_close: Callback<()>,
) -> impl IntoView {
    // Re-render whenever the modal opens with new source.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let open = is_open.get();
            let Some(source) = diagram.get() else {
                return;
            };
            if open && !source.is_empty() {
                spawn_local(async move {
                    render_mermaid(&source).await;
                });
            }
        });
    }

    let download_source = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(source) = diagram.get_untracked() {
                download_mmd(&source);
            }
        }
    };

    view! {
        <BaseModal
            title="AI Generated Diagram".to_string()
            is_open=is_open
            on_close=on_close
            max_width="modal-xl"
        >
            <div class="stack-md">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert-warning">
                            <Icon name=icons::WARNING class="w-4 h-4"/>
                            <span>{err}</span>
                        </div>
                    })
                }}

                {move || {
                    (diagram.get().is_none() && error.get().is_none()).then(|| view! {
                        <div class="empty-state">
                            <Icon name=icons::LOADER class="w-8 h-8 spin"/>
                            <p>"Loading diagram..."</p>
                        </div>
                    })
                }}

                <div id=DIAGRAM_CONTAINER_ID class="diagram-canvas"></div>

                <div class="modal-actions">
                    <button class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    {move || {
                        diagram.get().is_some().then(|| view! {
                            <button class="btn-primary" on:click=download_source>
                                <Icon name=icons::DOWNLOAD class="w-4 h-4"/>
                                "Download Mermaid Code"
                            </button>
                        })
                    }}
                </div>
            </div>
        </BaseModal>
    }
}

/// Render the source through `window.mermaid` when the library is present,
/// falling back to the raw source text when it is not. Rendering failures
/// also fall back to the source; the diagram is presentation-only.
#[cfg(not(feature = "ssr"))]
async fn render_mermaid(source: &str) {
    use leptos::wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(container) = document.get_element_by_id(DIAGRAM_CONTAINER_ID) else {
        return;
    };

    let mermaid = js_sys::Reflect::get(&window, &JsValue::from_str("mermaid"))
        .ok()
        .filter(|value| !value.is_undefined());

    let Some(mermaid) = mermaid else {
        container.set_text_content(Some(source));
        return;
    };

    let rendered = async {
        let render_fn: js_sys::Function =
            js_sys::Reflect::get(&mermaid, &JsValue::from_str("render"))
                .ok()?
                .dyn_into()
                .ok()?;
        let promise: js_sys::Promise = render_fn
            .call2(
                &mermaid,
                &JsValue::from_str("docuvault_diagram_svg"),
                &JsValue::from_str(source),
            )
            .ok()?
            .dyn_into()
            .ok()?;
        let result = JsFuture::from(promise).await.ok()?;
        js_sys::Reflect::get(&result, &JsValue::from_str("svg"))
            .ok()?
            .as_string()
    }
    .await;

    match rendered {
        Some(svg) => container.set_inner_html(&svg),
        None => container.set_text_content(Some(source)),
    }
}

/// Offer the diagram source as a `diagram.mmd` download.
#[cfg(not(feature = "ssr"))]
fn download_mmd(source: &str) {
    use leptos::wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&source.into());
    let Ok(blob) = web_sys::Blob::new_with_str_sequence(&parts) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download("diagram.mmd");
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
