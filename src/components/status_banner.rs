use leptos::prelude::*;

use crate::error::DispatchError;
use crate::i18n::use_locale;

/// Inline error for a panel, re-rendered in the active language.
#[component]
pub fn StatusBanner(#[prop(into)] error: Signal<Option<DispatchError>>) -> impl IntoView {
    let locale = use_locale();

    move || {
        error.get().map(|err| {
            let class = if err.is_validation() {
                "status-banner status-warning"
            } else {
                "status-banner status-error"
            };
            view! {
                <div class=class role="alert">{err.localized(locale.strings())}</div>
            }
        })
    }
}
