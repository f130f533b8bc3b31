use leptos::prelude::*;

use crate::i18n::use_locale;
use crate::model::AnalysisResult;

#[component]
pub fn ContradictionList(result: AnalysisResult) -> impl IntoView {
    let locale = use_locale();

    view! {
        <ul class="contradiction-list">
            {move || {
                result
                    .contradiction_items(locale.strings())
                    .into_iter()
                    .map(|item| view! {
                        <li class="contradiction-item">
                            {item.tag.map(|tag| view! { <span class="contradiction-tag">{tag}</span> })}
                            <span class="contradiction-label">{item.label}</span>
                        </li>
                    })
                    .collect_view()
            }}
        </ul>
    }
}
