use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::field::Text;
use crate::i18n::use_locale;

const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Saves the text produced by `content` as `file_name`. The text is built
/// at click time so it is labelled in the language shown on screen.
#[component]
pub fn DownloadButton(
    label: Text,
    file_name: &'static str,
    content: Signal<String>,
) -> impl IntoView {
    let locale = use_locale();

    let on_click = move |_| {
        if let Err(err) = save_text(file_name, &content.get_untracked()) {
            tracing::warn!(file_name, error = ?err, "report download failed");
        }
    };

    view! {
        <button class="btn btn-secondary" on:click=on_click>
            {move || label(locale.strings())}
        </button>
    }
}

/// Hand `text` to the browser as a file download through a temporary
/// object URL.
fn save_text(file_name: &str, text: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(TEXT_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)
}
