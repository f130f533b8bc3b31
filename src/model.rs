//! Request payloads and the canonical result records the UI renders.
//!
//! Results here are already normalized: the wire-level alternatives the
//! service may send are resolved in `api` before anything reaches these
//! types.

use std::fmt;

use serde::Serialize;

use crate::i18n::{Language, Strings};

/// Separator placed between formula variants for display.
pub const VARIANT_SEPARATOR: &str = "\n\n";

/// Separator for keyword, IPC and TRIZ function lists.
pub const LIST_SEPARATOR: &str = ", ";

/// Claim drafting style understood by the formula service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Compact,
    Verbose,
}

impl Style {
    pub fn code(&self) -> &'static str {
        match self {
            Style::Compact => "compact",
            Style::Verbose => "verbose",
        }
    }

    /// `None` for blank or unrecognised selector values (server default).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "compact" => Some(Style::Compact),
            "verbose" => Some(Style::Verbose),
            _ => None,
        }
    }

    pub fn label(&self, s: &Strings) -> &'static str {
        match self {
            Style::Compact => s.style_compact,
            Style::Verbose => s.style_verbose,
        }
    }
}

/// Backend used by the enhancement service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Local,
    OpenAi,
}

impl Provider {
    pub fn code(&self) -> &'static str {
        match self {
            Provider::Local => "local",
            Provider::OpenAi => "openai",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "openai" => Provider::OpenAi,
            _ => Provider::Local,
        }
    }

    pub fn label(&self, s: &Strings) -> &'static str {
        match self {
            Provider::Local => s.provider_local,
            Provider::OpenAi => s.provider_openai,
        }
    }
}

/// Validated body for `/formula`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventionIdea {
    pub title: String,
    pub known: String,
    pub distinct: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<u32>,
    pub language: Language,
}

/// Validated body for `/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisQuery {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_keywords: Option<u32>,
}

/// Validated body for `/enhance`.
#[derive(Clone, PartialEq, Serialize)]
pub struct EnhanceQuery {
    pub formula: String,
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl fmt::Debug for EnhanceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnhanceQuery")
            .field("formula", &self.formula)
            .field("provider", &self.provider)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Generated claim(s) together with the title they were drafted for.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaResult {
    pub title: String,
    /// Candidate claims in the order the service returned them.
    pub variants: Vec<String>,
}

impl FormulaResult {
    /// All variants joined by one blank line.
    pub fn display(&self) -> String {
        self.variants.join(VARIANT_SEPARATOR)
    }

    pub fn is_multi(&self) -> bool {
        self.variants.len() > 1
    }

    /// First variant, used when chaining into enhancement.
    pub fn primary(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or("")
    }

    pub fn heading(&self, s: &Strings) -> &'static str {
        if self.is_multi() {
            s.generated_formulas
        } else {
            s.generated_formula
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contradiction {
    pub description: String,
    /// `technical`, `physical` or whatever the service sent.
    pub kind: Option<String>,
}

/// One rendered line of the contradictions list.
#[derive(Debug, Clone, PartialEq)]
pub struct ContradictionItem {
    pub label: String,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisResult {
    pub keywords: Vec<String>,
    pub ipc_codes: Vec<String>,
    pub triz_functions: Vec<String>,
    pub contradictions: Vec<Contradiction>,
}

impl AnalysisResult {
    pub fn keywords_line(&self) -> String {
        self.keywords.join(LIST_SEPARATOR)
    }

    pub fn ipc_codes_line(&self) -> String {
        self.ipc_codes.join(LIST_SEPARATOR)
    }

    pub fn triz_functions_line(&self) -> String {
        self.triz_functions.join(LIST_SEPARATOR)
    }

    /// Contradictions as list items. An empty list yields exactly one
    /// placeholder item carrying the "none found" message of `s`.
    pub fn contradiction_items(&self, s: &Strings) -> Vec<ContradictionItem> {
        if self.contradictions.is_empty() {
            return vec![ContradictionItem {
                label: s.no_contradictions.to_string(),
                tag: None,
            }];
        }
        self.contradictions
            .iter()
            .map(|c| ContradictionItem {
                label: c.description.clone(),
                tag: c.kind.as_deref().map(|kind| localize_kind(kind, s)),
            })
            .collect()
    }

    /// Plain-text report of the analysis, labelled in the language of `s`.
    pub fn report(&self, s: &Strings) -> String {
        let mut out = format!("{}\n\n", s.analyze_heading);
        out.push_str(&format!("{}: {}\n", s.keywords, self.keywords_line()));
        out.push_str(&format!("{}: {}\n", s.ipc_codes, self.ipc_codes_line()));
        out.push_str(&format!("{}: {}\n", s.triz_functions, self.triz_functions_line()));
        out.push_str(&format!("\n{}:\n", s.contradictions));
        for item in self.contradiction_items(s) {
            match item.tag {
                Some(tag) => out.push_str(&format!("- [{}] {}\n", tag, item.label)),
                None => out.push_str(&format!("- {}\n", item.label)),
            }
        }
        out
    }
}

fn localize_kind(kind: &str, s: &Strings) -> String {
    match kind {
        "technical" => s.contradiction_technical.to_string(),
        "physical" => s.contradiction_physical.to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnhancementResult {
    pub title: String,
    pub non_obvious_suggestions: String,
    pub justification: String,
}

impl EnhancementResult {
    /// Plain-text report of the enhancement, labelled in the language of `s`.
    pub fn report(&self, s: &Strings) -> String {
        format!(
            "{}\n\n{}:\n{}\n\n{}:\n{}\n\n{}:\n{}\n",
            s.enhance_heading,
            s.improved_title,
            self.title,
            s.suggestions,
            self.non_obvious_suggestions,
            s.justification,
            self.justification,
        )
    }
}
