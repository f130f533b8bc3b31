//! Bilingual (Russian/English) string table for every label, placeholder
//! and message the UI shows.
//!
//! Lookup is total: unknown language codes resolve to Russian.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Interface and description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    /// Parse a selector value. Anything unrecognised falls back to Russian.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Ru,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
        }
    }
}

/// Every user-visible string for one language.
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub intro: &'static str,
    pub ui_language: &'static str,

    pub nav_generate: &'static str,
    pub nav_analyze: &'static str,
    pub nav_enhance: &'static str,

    // Formula generation
    pub generate_heading: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub known_label: &'static str,
    pub known_placeholder: &'static str,
    pub distinct_label: &'static str,
    pub distinct_placeholder: &'static str,
    pub effect_label: &'static str,
    pub effect_placeholder: &'static str,
    pub style_label: &'static str,
    pub style_help: &'static str,
    pub style_default: &'static str,
    pub style_compact: &'static str,
    pub style_verbose: &'static str,
    pub variants_label: &'static str,
    pub variants_placeholder: &'static str,
    pub variants_help: &'static str,
    pub description_language: &'static str,
    pub description_language_help: &'static str,
    pub generate_button: &'static str,
    pub generating: &'static str,
    pub result_title_heading: &'static str,
    pub generated_formula: &'static str,
    pub generated_formulas: &'static str,
    pub use_for_enhancement: &'static str,

    // Analysis
    pub analyze_heading: &'static str,
    pub text_label: &'static str,
    pub text_placeholder: &'static str,
    pub max_keywords_label: &'static str,
    pub max_keywords_placeholder: &'static str,
    pub analyze_button: &'static str,
    pub analyzing: &'static str,
    pub keywords: &'static str,
    pub ipc_codes: &'static str,
    pub triz_functions: &'static str,
    pub contradictions: &'static str,
    pub no_contradictions: &'static str,
    pub contradiction_technical: &'static str,
    pub contradiction_physical: &'static str,

    // Enhancement
    pub enhance_heading: &'static str,
    pub formula_label: &'static str,
    pub formula_placeholder: &'static str,
    pub provider_label: &'static str,
    pub provider_local: &'static str,
    pub provider_openai: &'static str,
    pub api_key_label: &'static str,
    pub api_key_placeholder: &'static str,
    pub enhance_button: &'static str,
    pub enhancing: &'static str,
    pub improved_title: &'static str,
    pub suggestions: &'static str,
    pub justification: &'static str,

    // Report export
    pub download_report: &'static str,
    pub download_improved_report: &'static str,

    // Errors
    pub error_missing_title: &'static str,
    pub error_missing_effect: &'static str,
    pub error_missing_text: &'static str,
    pub error_missing_formula: &'static str,
    pub error_invalid_variants: &'static str,
    pub error_invalid_max_keywords: &'static str,
    pub error_status: &'static str,
    pub error_network: &'static str,
    pub error_encode: &'static str,
    pub error_decode: &'static str,
}

static RU: Strings = Strings {
    app_title: "TRIZ‑анализ изобретения",
    app_subtitle: "Формула, анализ и улучшение",
    intro: "Опишите изобретение: система составит формулу, выделит ключевые слова, \
            определит коды МПК, сопоставит функции ТРИЗ и найдёт возможные противоречия.",
    ui_language: "Язык интерфейса",

    nav_generate: "Формула",
    nav_analyze: "Анализ",
    nav_enhance: "Улучшение",

    generate_heading: "Генерация формулы",
    title_label: "Название",
    title_placeholder: "Например: Теплообменник",
    known_label: "Известные признаки",
    known_placeholder: "Что уже известно из уровня техники",
    distinct_label: "Отличительные признаки",
    distinct_placeholder: "Чем изобретение отличается",
    effect_label: "Технический результат",
    effect_placeholder: "Что обеспечивает изобретение",
    style_label: "Стиль формулы",
    style_help: "'compact' удаляет дубли и сводит признаки, 'verbose' сохраняет исходные формулировки",
    style_default: "По умолчанию",
    style_compact: "Компактный",
    style_verbose: "Подробный",
    variants_label: "Количество вариантов формулы",
    variants_placeholder: "1",
    variants_help: "При 2 и более выводятся 'широкая' и 'узкая' формулы",
    description_language: "Язык описания",
    description_language_help: "Определяет язык для лемматизации и построения формулы",
    generate_button: "Сгенерировать формулу",
    generating: "Генерация формулы...",
    result_title_heading: "Название",
    generated_formula: "Сгенерированная формула",
    generated_formulas: "Сгенерированные формулы",
    use_for_enhancement: "Улучшить эту формулу",

    analyze_heading: "Анализ описания",
    text_label: "Описание",
    text_placeholder: "Введите описание изобретения",
    max_keywords_label: "Количество ключевых слов",
    max_keywords_placeholder: "10",
    analyze_button: "Анализировать",
    analyzing: "Анализ...",
    keywords: "Ключевые слова",
    ipc_codes: "Коды IPC",
    triz_functions: "TRIZ‑функции",
    contradictions: "Противоречия",
    no_contradictions: "Противоречия не найдены",
    contradiction_technical: "техническое",
    contradiction_physical: "физическое",

    enhance_heading: "Улучшение формулы",
    formula_label: "Формула",
    formula_placeholder: "Вставьте формулу изобретения",
    provider_label: "Провайдер",
    provider_local: "Локальный",
    provider_openai: "OpenAI",
    api_key_label: "Ключ OpenAI API",
    api_key_placeholder: "sk-... (необязательно)",
    enhance_button: "Улучшить формулу",
    enhancing: "Улучшение...",
    improved_title: "Улучшенное название",
    suggestions: "Подсказки по неочевидности",
    justification: "Обоснование патентоспособности",

    download_report: "Скачать отчёт",
    download_improved_report: "Скачать улучшенный отчёт",

    error_missing_title: "Пожалуйста, введите название.",
    error_missing_effect: "Пожалуйста, укажите технический результат.",
    error_missing_text: "Пожалуйста, введите описание.",
    error_missing_formula: "Пожалуйста, введите формулу.",
    error_invalid_variants: "Количество вариантов должно быть положительным целым числом",
    error_invalid_max_keywords: "Количество ключевых слов должно быть целым числом",
    error_status: "Ошибка запроса, код",
    error_network: "Сервис недоступен",
    error_encode: "Не удалось сформировать запрос",
    error_decode: "Некорректный ответ сервиса",
};

static EN: Strings = Strings {
    app_title: "TRIZ invention analysis",
    app_subtitle: "Claims, analysis and enhancement",
    intro: "Describe the invention: the system will draft a claim, highlight keywords, \
            determine IPC codes, map TRIZ functions and find possible contradictions.",
    ui_language: "Interface language",

    nav_generate: "Claim",
    nav_analyze: "Analysis",
    nav_enhance: "Enhancement",

    generate_heading: "Claim generation",
    title_label: "Title",
    title_placeholder: "e.g. Heat exchanger",
    known_label: "Known features",
    known_placeholder: "What is already known in the prior art",
    distinct_label: "Distinctive features",
    distinct_placeholder: "What sets the invention apart",
    effect_label: "Technical effect",
    effect_placeholder: "What the invention achieves",
    style_label: "Formula style",
    style_help: "'compact' removes duplicates and merges features, 'verbose' preserves original wording",
    style_default: "Default",
    style_compact: "Compact",
    style_verbose: "Verbose",
    variants_label: "Number of formula variants",
    variants_placeholder: "1",
    variants_help: "When 2 or more, 'wide' and 'narrow' formulas are shown",
    description_language: "Language of description",
    description_language_help: "Determines the language for lemmatisation and formula generation",
    generate_button: "Generate claim",
    generating: "Generating claim...",
    result_title_heading: "Title",
    generated_formula: "Generated formula",
    generated_formulas: "Generated formulas",
    use_for_enhancement: "Enhance this formula",

    analyze_heading: "Description analysis",
    text_label: "Description",
    text_placeholder: "Enter the invention description",
    max_keywords_label: "Number of keywords",
    max_keywords_placeholder: "10",
    analyze_button: "Analyze",
    analyzing: "Analyzing...",
    keywords: "Keywords",
    ipc_codes: "IPC codes",
    triz_functions: "TRIZ functions",
    contradictions: "Contradictions",
    no_contradictions: "No contradictions found",
    contradiction_technical: "technical",
    contradiction_physical: "physical",

    enhance_heading: "Formula enhancement",
    formula_label: "Formula",
    formula_placeholder: "Paste the patent claim",
    provider_label: "Provider",
    provider_local: "Local",
    provider_openai: "OpenAI",
    api_key_label: "OpenAI API key",
    api_key_placeholder: "sk-... (optional)",
    enhance_button: "Enhance formula",
    enhancing: "Enhancing...",
    improved_title: "Improved title",
    suggestions: "Non‑obviousness tips",
    justification: "Patentability justification",

    download_report: "Download report",
    download_improved_report: "Download improved report",

    error_missing_title: "Please enter a title.",
    error_missing_effect: "Please enter the technical effect.",
    error_missing_text: "Please enter a description.",
    error_missing_formula: "Please enter a formula.",
    error_invalid_variants: "Number of variants must be a positive integer",
    error_invalid_max_keywords: "Number of keywords must be an integer",
    error_status: "Request failed with status",
    error_network: "Service unreachable",
    error_encode: "Could not build the request",
    error_decode: "Malformed service response",
};

/// The string bundle for `lang`.
pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Ru => &RU,
        Language::En => &EN,
    }
}

/// Reactive handle to the active UI language, shared through context.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub language: RwSignal<Language>,
}

impl LocaleContext {
    pub fn new(initial: Language) -> Self {
        Self {
            language: RwSignal::new(initial),
        }
    }

    /// Strings for the current language; tracks the signal when called
    /// inside a reactive closure.
    pub fn strings(&self) -> &'static Strings {
        strings(self.language.get())
    }

    pub fn set(&self, lang: Language) {
        self.language.set(lang);
    }
}

pub fn use_locale() -> LocaleContext {
    expect_context::<LocaleContext>()
}

/// Mirror the active language onto `<html lang="..">`.
pub fn apply_document_language(lang: Language) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let _ = html.set_attribute("lang", lang.code());
            }
        }
    }
}
