use leptos::prelude::*;

use crate::i18n::{use_locale, Strings};

/// Picks one string out of the active bundle.
pub type Text = fn(&Strings) -> &'static str;

/// Labelled text input or textarea bound to a string signal.
#[component]
pub fn TextField(
    /// DOM id, also the label's `for`
    id: &'static str,
    value: RwSignal<String>,
    label: Text,
    placeholder: Text,
    /// Hint shown under the control
    #[prop(optional)]
    help: Option<Text>,
    /// Render a textarea instead of a single-line input
    #[prop(optional)]
    multiline: bool,
    /// `type` attribute for single-line inputs, defaults to "text"
    #[prop(optional)]
    input_type: Option<&'static str>,
) -> impl IntoView {
    let locale = use_locale();

    let control = if multiline {
        view! {
            <textarea
                id=id
                class="input textarea"
                rows="5"
                placeholder=move || placeholder(locale.strings())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                type=input_type.unwrap_or("text")
                class="input"
                placeholder=move || placeholder(locale.strings())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>{move || label(locale.strings())}</label>
            {control}
            {help.map(|help| view! {
                <p class="input-hint">{move || help(locale.strings())}</p>
            })}
        </div>
    }
}
