use leptos::prelude::*;

use super::field::Text;
use crate::i18n::use_locale;

/// One heading/value pair inside a result card. The heading follows the
/// active language; the body is service output and is shown verbatim.
#[component]
pub fn ResultField(
    heading: Text,
    #[prop(into)]
    body: String,
    /// Keep line breaks of multi-line bodies
    #[prop(optional)]
    preformatted: bool,
) -> impl IntoView {
    let locale = use_locale();
    let class = if preformatted { "result-text preformatted" } else { "result-text" };

    view! {
        <div class="result-field">
            <h4>{move || heading(locale.strings())}</h4>
            <p class=class>{body}</p>
        </div>
    }
}
