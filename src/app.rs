use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::HttpTransport;
use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::i18n::{apply_document_language, LocaleContext};
use crate::pages::workbench::WorkbenchPage;

/// Dispatcher shared by every panel.
pub type Api = Arc<Dispatcher<HttpTransport>>;

pub fn use_api() -> Api {
    expect_context::<Api>()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let locale = LocaleContext::new(config.default_language);
    provide_context(locale);
    provide_context::<Api>(Arc::new(Dispatcher::new(config.endpoints(), HttpTransport)));

    // Keep <html lang> in step with the selector
    Effect::new(move |_| {
        apply_document_language(locale.language.get());
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <WorkbenchPage /> }>
                        <Route path=path!("/") view=WorkbenchPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
