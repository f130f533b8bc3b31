//! Formula enhancement: improved title, non-obviousness tips and a
//! patentability justification.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::download_button::DownloadButton;
use super::ENHANCE_SECTION;
use super::field::TextField;
use super::result_field::ResultField;
use super::status_banner::StatusBanner;
use crate::app::use_api;
use crate::form::{EnhanceFields, Output};
use crate::i18n::use_locale;
use crate::model::{EnhancementResult, Provider};

const REPORT_FILE: &str = "formula_enhancement.txt";

#[component]
pub fn EnhancementPanel(fields: EnhanceFields) -> impl IntoView {
    let locale = use_locale();
    let api = use_api();
    let output = Output::<EnhancementResult>::new();

    let on_enhance = move |_| {
        let draft = fields.read();
        let api = api.clone();
        output.begin();
        spawn_local(async move {
            output.settle(api.enhance(&draft).await);
        });
    };

    view! {
        <section
            class=move || if output.is_revealed() { "panel has-result" } else { "panel" }
            id=ENHANCE_SECTION
        >
            <h3>{move || locale.strings().enhance_heading}</h3>

            <TextField
                id="enhance-formula"
                value=fields.formula
                label=|s| s.formula_label
                placeholder=|s| s.formula_placeholder
                multiline=true
            />

            <div class="form-row">
                <div class="form-group">
                    <label for="enhance-provider">{move || locale.strings().provider_label}</label>
                    <select
                        id="enhance-provider"
                        class="input"
                        prop:value=move || fields.provider.get().code()
                        on:change=move |ev| fields.provider.set(Provider::from_code(&event_target_value(&ev)))
                    >
                        {[Provider::Local, Provider::OpenAi]
                            .into_iter()
                            .map(|provider| view! {
                                <option value=provider.code()>{move || provider.label(locale.strings())}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <TextField
                    id="enhance-api-key"
                    value=fields.api_key
                    label=|s| s.api_key_label
                    placeholder=|s| s.api_key_placeholder
                    input_type="password"
                />
            </div>

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=on_enhance disabled=move || output.pending()>
                    {move || {
                        let s = locale.strings();
                        if output.pending() { s.enhancing } else { s.enhance_button }
                    }}
                </button>
            </div>

            <StatusBanner error=Signal::derive(move || output.error()) />

            {move || output.value().map(|result| {
                let report = {
                    let result = result.clone();
                    Signal::derive(move || result.report(locale.strings()))
                };
                view! {
                    <div class="result-card" id="enhance-result">
                        <ResultField heading=|s| s.improved_title body=result.title />
                        <ResultField
                            heading=|s| s.suggestions
                            body=result.non_obvious_suggestions
                            preformatted=true
                        />
                        <ResultField heading=|s| s.justification body=result.justification preformatted=true />
                        <div class="action-buttons">
                            <DownloadButton
                                label=|s| s.download_improved_report
                                file_name=REPORT_FILE
                                content=report
                            />
                        </div>
                    </div>
                }
            })}
        </section>
    }
}
