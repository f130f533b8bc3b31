//! Claim generation: invention idea in, one or more claim variants out.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::field::TextField;
use super::GENERATE_SECTION;
use super::result_field::ResultField;
use super::status_banner::StatusBanner;
use crate::app::use_api;
use crate::form::{IdeaFields, Output};
use crate::i18n::{use_locale, Language};
use crate::model::{FormulaResult, Style};

#[component]
pub fn FormulaPanel(
    /// Formula field of the enhancement panel, filled by "use for enhancement"
    enhance_formula: RwSignal<String>,
) -> impl IntoView {
    let locale = use_locale();
    let api = use_api();
    let fields = IdeaFields::new();
    let output = Output::<FormulaResult>::new();

    let on_generate = move |_| {
        let draft = fields.read(locale.language.get_untracked());
        let api = api.clone();
        output.begin();
        spawn_local(async move {
            output.settle(api.generate(&draft).await);
        });
    };

    view! {
        <section
            class=move || if output.is_revealed() { "panel has-result" } else { "panel" }
            id=GENERATE_SECTION
        >
            <h3>{move || locale.strings().generate_heading}</h3>

            <TextField
                id="idea-title"
                value=fields.title
                label=|s| s.title_label
                placeholder=|s| s.title_placeholder
            />
            <TextField
                id="idea-known"
                value=fields.known
                label=|s| s.known_label
                placeholder=|s| s.known_placeholder
                multiline=true
            />
            <TextField
                id="idea-distinct"
                value=fields.distinct
                label=|s| s.distinct_label
                placeholder=|s| s.distinct_placeholder
                multiline=true
            />
            <TextField
                id="idea-effect"
                value=fields.effect
                label=|s| s.effect_label
                placeholder=|s| s.effect_placeholder
            />

            <div class="form-row">
                <div class="form-group">
                    <label for="idea-style">{move || locale.strings().style_label}</label>
                    <select
                        id="idea-style"
                        class="input"
                        prop:value=move || fields.style.get()
                        on:change=move |ev| fields.style.set(event_target_value(&ev))
                    >
                        <option value="">{move || locale.strings().style_default}</option>
                        {[Style::Compact, Style::Verbose]
                            .into_iter()
                            .map(|style| view! {
                                <option value=style.code()>{move || style.label(locale.strings())}</option>
                            })
                            .collect_view()}
                    </select>
                    <p class="input-hint">{move || locale.strings().style_help}</p>
                </div>

                <TextField
                    id="idea-variants"
                    value=fields.variants
                    label=|s| s.variants_label
                    placeholder=|s| s.variants_placeholder
                    help=|s| s.variants_help
                    input_type="number"
                />

                <div class="form-group">
                    <label for="idea-language">{move || locale.strings().description_language}</label>
                    <select
                        id="idea-language"
                        class="input"
                        prop:value=move || {
                            fields.language.get().unwrap_or_else(|| locale.language.get()).code()
                        }
                        on:change=move |ev| {
                            fields.language.set(Some(Language::from_code(&event_target_value(&ev))))
                        }
                    >
                        {Language::ALL
                            .iter()
                            .map(|lang| view! { <option value=lang.code()>{lang.native_name()}</option> })
                            .collect_view()}
                    </select>
                    <p class="input-hint">{move || locale.strings().description_language_help}</p>
                </div>
            </div>

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=on_generate disabled=move || output.pending()>
                    {move || {
                        let s = locale.strings();
                        if output.pending() { s.generating } else { s.generate_button }
                    }}
                </button>
            </div>

            <StatusBanner error=Signal::derive(move || output.error()) />

            {move || output.value().map(|result| {
                let for_heading = result.clone();
                let primary = result.primary().to_string();
                view! {
                    <div class="result-card" id="formula-result">
                        <ResultField heading=|s| s.result_title_heading body=result.title.clone() />
                        <div class="result-field">
                            <h4>{move || for_heading.heading(locale.strings())}</h4>
                            <pre class="result-text formula-text">{result.display()}</pre>
                        </div>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| enhance_formula.set(primary.clone())
                        >
                            {move || locale.strings().use_for_enhancement}
                        </button>
                    </div>
                }
            })}
        </section>
    }
}
