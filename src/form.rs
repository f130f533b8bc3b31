//! Reactive form fields and result slots.
//!
//! Input side: each panel owns a set of string signals bound to its
//! controls; `read()` snapshots them into a trimmed draft without
//! validating anything. Output side: `Output<T>` holds the last
//! successful result (its presence is what reveals the result section),
//! the last error, and whether a request is in flight.

use leptos::prelude::*;

use crate::error::DispatchError;
use crate::i18n::Language;
use crate::model::{Provider, Style};

/// Trimmed current value of a text field.
pub fn field_value(raw: &str) -> String {
    raw.trim().to_string()
}

// -- Drafts (unvalidated snapshots) --

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdeaDraft {
    pub title: String,
    pub known: String,
    pub distinct: String,
    pub effect: String,
    pub style: Option<Style>,
    pub variants: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisDraft {
    pub text: String,
    pub max_keywords: String,
}

#[derive(Clone, PartialEq, Default)]
pub struct EnhanceDraft {
    pub formula: String,
    pub provider: Provider,
    pub api_key: String,
}

// -- Field sets --

#[derive(Clone, Copy)]
pub struct IdeaFields {
    pub title: RwSignal<String>,
    pub known: RwSignal<String>,
    pub distinct: RwSignal<String>,
    pub effect: RwSignal<String>,
    pub style: RwSignal<String>,
    pub variants: RwSignal<String>,
    /// `None` until the user picks a description language explicitly.
    pub language: RwSignal<Option<Language>>,
}

impl IdeaFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            known: RwSignal::new(String::new()),
            distinct: RwSignal::new(String::new()),
            effect: RwSignal::new(String::new()),
            style: RwSignal::new(String::new()),
            variants: RwSignal::new(String::new()),
            language: RwSignal::new(None),
        }
    }

    /// Description language in effect, following `ui` unless overridden.
    pub fn effective_language(&self, ui: Language) -> Language {
        self.language.get_untracked().unwrap_or(ui)
    }

    pub fn read(&self, ui: Language) -> IdeaDraft {
        IdeaDraft {
            title: field_value(&self.title.get_untracked()),
            known: field_value(&self.known.get_untracked()),
            distinct: field_value(&self.distinct.get_untracked()),
            effect: field_value(&self.effect.get_untracked()),
            style: Style::from_code(&self.style.get_untracked()),
            variants: field_value(&self.variants.get_untracked()),
            language: self.effective_language(ui),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AnalysisFields {
    pub text: RwSignal<String>,
    pub max_keywords: RwSignal<String>,
}

impl AnalysisFields {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            max_keywords: RwSignal::new(String::new()),
        }
    }

    pub fn read(&self) -> AnalysisDraft {
        AnalysisDraft {
            text: field_value(&self.text.get_untracked()),
            max_keywords: field_value(&self.max_keywords.get_untracked()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct EnhanceFields {
    pub formula: RwSignal<String>,
    pub provider: RwSignal<Provider>,
    pub api_key: RwSignal<String>,
}

impl EnhanceFields {
    pub fn new() -> Self {
        Self {
            formula: RwSignal::new(String::new()),
            provider: RwSignal::new(Provider::default()),
            api_key: RwSignal::new(String::new()),
        }
    }

    pub fn read(&self) -> EnhanceDraft {
        EnhanceDraft {
            formula: field_value(&self.formula.get_untracked()),
            provider: self.provider.get_untracked(),
            api_key: field_value(&self.api_key.get_untracked()),
        }
    }
}

// -- Result slot --

pub struct Output<T: Send + Sync + 'static> {
    value: RwSignal<Option<T>>,
    error: RwSignal<Option<DispatchError>>,
    pending: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for Output<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Output<T> {}

impl<T: Clone + Send + Sync + 'static> Output<T> {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(None),
            error: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    /// Mark a request as started. Existing results stay on screen.
    pub fn begin(&self) {
        self.error.set(None);
        self.pending.set(true);
    }

    /// Apply the outcome of one operation. Success replaces the result
    /// and reveals the section; failure only records the error.
    pub fn settle(&self, outcome: Result<T, DispatchError>) {
        self.pending.set(false);
        match outcome {
            Ok(value) => {
                self.value.set(Some(value));
                self.error.set(None);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn value(&self) -> Option<T> {
        self.value.get()
    }

    pub fn is_revealed(&self) -> bool {
        self.value.with(Option::is_some)
    }

    pub fn error(&self) -> Option<DispatchError> {
        self.error.get()
    }

    pub fn pending(&self) -> bool {
        self.pending.get()
    }
}
