use leptos::prelude::*;

use super::field::Text;
use super::language_select::LanguageSelect;
use super::{ANALYZE_SECTION, ENHANCE_SECTION, GENERATE_SECTION};
use crate::i18n::use_locale;

/// Same-page anchors must bypass the router; the browser then scrolls to
/// the panel itself.
const IN_PAGE_REL: &str = "external";

fn nav_links() -> [(&'static str, Text); 3] {
    [
        (GENERATE_SECTION, |s| s.nav_generate),
        (ANALYZE_SECTION, |s| s.nav_analyze),
        (ENHANCE_SECTION, |s| s.nav_enhance),
    ]
}

fn section_href(id: &str) -> String {
    format!("#{}", id)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let locale = use_locale();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"TRIZmate"</h1>
                <p class="sidebar-subtitle">{move || locale.strings().app_subtitle}</p>
            </div>
            <ul class="nav-list">
                {nav_links()
                    .into_iter()
                    .map(|(id, label)| view! {
                        <li class="nav-item">
                            <a href=section_href(id) rel=IN_PAGE_REL class="nav-link">
                                {move || label(locale.strings())}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <LanguageSelect />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{strings, Language};

    #[test]
    fn test_nav_links_point_at_panel_sections() {
        let hrefs: Vec<String> = nav_links().iter().map(|(id, _)| section_href(id)).collect();
        assert_eq!(hrefs, vec!["#generate", "#analyze", "#enhance"]);

        let en = strings(Language::En);
        let labels: Vec<&str> = nav_links().iter().map(|(_, label)| label(en)).collect();
        assert_eq!(labels, vec![en.nav_generate, en.nav_analyze, en.nav_enhance]);
    }
}
