//! The single working page: claim generation, analysis and enhancement
//! side by side. Each panel runs its own request and writes only to its
//! own result area.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::analysis_panel::AnalysisPanel;
use crate::components::enhancement_panel::EnhancementPanel;
use crate::components::formula_panel::FormulaPanel;
use crate::form::EnhanceFields;
use crate::i18n::{use_locale, Language};

#[component]
pub fn WorkbenchPage() -> impl IntoView {
    let locale = use_locale();
    let query = use_query_map();

    // ?lang=en|ru picks the starting language
    Effect::new(move |_| {
        if let Some(code) = query.with(|q| q.get("lang")) {
            locale.set(Language::from_code(&code));
        }
    });

    // Shared so a generated claim can be handed to the enhancement form
    let enhance_fields = EnhanceFields::new();

    view! {
        <div class="page workbench-page">
            <h2>{move || locale.strings().app_title}</h2>
            <p class="page-description">{move || locale.strings().intro}</p>

            <FormulaPanel enhance_formula=enhance_fields.formula />
            <AnalysisPanel />
            <EnhancementPanel fields=enhance_fields />
        </div>
    }
}
