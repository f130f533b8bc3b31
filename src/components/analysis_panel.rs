//! Description analysis: keywords, IPC codes, TRIZ functions and
//! contradictions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::contradiction_list::ContradictionList;
use super::ANALYZE_SECTION;
use super::download_button::DownloadButton;
use super::field::TextField;
use super::result_field::ResultField;
use super::status_banner::StatusBanner;
use crate::app::use_api;
use crate::form::{AnalysisFields, Output};
use crate::i18n::use_locale;
use crate::model::AnalysisResult;

const REPORT_FILE: &str = "triz_report.txt";

#[component]
pub fn AnalysisPanel() -> impl IntoView {
    let locale = use_locale();
    let api = use_api();
    let fields = AnalysisFields::new();
    let output = Output::<AnalysisResult>::new();

    let on_analyze = move |_| {
        let draft = fields.read();
        let api = api.clone();
        output.begin();
        spawn_local(async move {
            output.settle(api.analyze(&draft).await);
        });
    };

    view! {
        <section
            class=move || if output.is_revealed() { "panel has-result" } else { "panel" }
            id=ANALYZE_SECTION
        >
            <h3>{move || locale.strings().analyze_heading}</h3>

            <TextField
                id="analysis-text"
                value=fields.text
                label=|s| s.text_label
                placeholder=|s| s.text_placeholder
                multiline=true
            />
            <TextField
                id="analysis-max-keywords"
                value=fields.max_keywords
                label=|s| s.max_keywords_label
                placeholder=|s| s.max_keywords_placeholder
                input_type="number"
            />

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=on_analyze disabled=move || output.pending()>
                    {move || {
                        let s = locale.strings();
                        if output.pending() { s.analyzing } else { s.analyze_button }
                    }}
                </button>
            </div>

            <StatusBanner error=Signal::derive(move || output.error()) />

            {move || output.value().map(|result| {
                let keywords = result.keywords_line();
                let ipc_codes = result.ipc_codes_line();
                let triz_functions = result.triz_functions_line();
                let report = {
                    let result = result.clone();
                    Signal::derive(move || result.report(locale.strings()))
                };
                view! {
                    <div class="result-card" id="analysis-result">
                        <ResultField heading=|s| s.keywords body=keywords />
                        <ResultField heading=|s| s.ipc_codes body=ipc_codes />
                        <ResultField heading=|s| s.triz_functions body=triz_functions />
                        <div class="result-field">
                            <h4>{move || locale.strings().contradictions}</h4>
                            <ContradictionList result=result />
                        </div>
                        <div class="action-buttons">
                            <DownloadButton
                                label=|s| s.download_report
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
