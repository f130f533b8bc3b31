use leptos::prelude::*;

use crate::i18n::{use_locale, Language};

/// Interface language switch. Changing it re-renders every label,
/// placeholder and result heading in place.
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="form-group language-select">
            <label for="ui-language">{move || locale.strings().ui_language}</label>
            <select
                id="ui-language"
                class="input"
                prop:value=move || locale.language.get().code()
                on:change=move |ev| locale.set(Language::from_code(&event_target_value(&ev)))
            >
                {Language::ALL
                    .iter()
                    .map(|lang| view! { <option value=lang.code()>{lang.native_name()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
