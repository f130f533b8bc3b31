//! Wire contract with the remote TRIZ service.
//!
//! All three endpoints take and return JSON over POST. Responses are
//! decoded into the loose `*Response` schemas below and normalized once
//! into the canonical `model` records.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::RequestError;
use crate::model::{AnalysisResult, Contradiction, EnhancementResult, FormulaResult};

pub const FORMULA_PATH: &str = "formula";
pub const ANALYZE_PATH: &str = "analyze";
pub const ENHANCE_PATH: &str = "enhance";

/// Fully qualified endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub formula: String,
    pub analyze: String,
    pub enhance: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        Self {
            formula: format!("{}/{}", base, FORMULA_PATH),
            analyze: format!("{}/{}", base, ANALYZE_PATH),
            enhance: format!("{}/{}", base, ENHANCE_PATH),
        }
    }
}

// -- Response schemas as the service sends them --

/// `formula` is either one claim or an ordered list of variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormulaField {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormulaResponse {
    #[serde(default)]
    pub formula: Option<FormulaField>,
}

/// A contradiction is a bare string or an object with a description.
/// `type` is kept only when it is a string; any other value is ignored
/// so the description still wins.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContradictionField {
    Text(String),
    Described {
        description: String,
        #[serde(rename = "type", default)]
        kind: Option<Value>,
    },
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub ipc_codes: Option<Vec<String>>,
    #[serde(default)]
    pub triz_functions: Option<Vec<String>>,
    #[serde(default)]
    pub contradictions: Option<Vec<ContradictionField>>,
}

/// `non_obvious` is the older name of `non_obvious_suggestions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnhanceResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub non_obvious_suggestions: Option<String>,
    #[serde(default)]
    pub non_obvious: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
}

// -- Normalization --

impl FormulaResponse {
    pub fn into_result(self, title: String) -> FormulaResult {
        let variants = match self.formula {
            Some(FormulaField::Many(list)) => list,
            Some(FormulaField::One(text)) => vec![text],
            None => vec![String::new()],
        };
        FormulaResult { title, variants }
    }
}

impl From<ContradictionField> for Contradiction {
    fn from(field: ContradictionField) -> Self {
        match field {
            ContradictionField::Text(description) => Contradiction {
                description,
                kind: None,
            },
            ContradictionField::Described { description, kind } if description.is_empty() => {
                // Nothing to label it with; show the object as sent
                let mut raw = serde_json::Map::new();
                raw.insert("description".to_string(), Value::String(description));
                if let Some(kind) = kind {
                    raw.insert("type".to_string(), kind);
                }
                Contradiction {
                    description: Value::Object(raw).to_string(),
                    kind: None,
                }
            }
            ContradictionField::Described { description, kind } => Contradiction {
                description,
                kind: match kind {
                    Some(Value::String(kind)) => Some(kind),
                    _ => None,
                },
            },
            ContradictionField::Other(value) => Contradiction {
                description: value.to_string(),
                kind: None,
            },
        }
    }
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(resp: AnalyzeResponse) -> Self {
        AnalysisResult {
            keywords: resp.keywords.unwrap_or_default(),
            ipc_codes: resp.ipc_codes.unwrap_or_default(),
            triz_functions: resp.triz_functions.unwrap_or_default(),
            contradictions: resp
                .contradictions
                .unwrap_or_default()
                .into_iter()
                .map(Contradiction::from)
                .collect(),
        }
    }
}

impl From<EnhanceResponse> for EnhancementResult {
    fn from(resp: EnhanceResponse) -> Self {
        let suggestions = resp
            .non_obvious_suggestions
            .filter(|s| !s.is_empty())
            .or(resp.non_obvious)
            .unwrap_or_default();
        EnhancementResult {
            title: resp.title.unwrap_or_default(),
            non_obvious_suggestions: suggestions,
            justification: resp.justification.unwrap_or_default(),
        }
    }
}

/// Decode a JSON body into one of the response schemas.
pub fn decode<T: for<'de> Deserialize<'de>>(body: Value) -> Result<T, RequestError> {
    serde_json::from_value(body).map_err(|e| RequestError::Decode(e.to_string()))
}

// -- Transport --

/// One JSON POST round trip. Non-2xx statuses are errors and their
/// bodies are not read.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, RequestError>;
}

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, RequestError> {
        let payload =
            serde_json::to_string(body).map_err(|e| RequestError::Encode(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| RequestError::Network("no browser window".to_string()))?;

        debug!(url, bytes = payload.len(), "POST");
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            warn!(url, status = response.status(), "request rejected");
            return Err(RequestError::Status(response.status()));
        }

        let json = JsFuture::from(response.json().map_err(js_error)?)
            .await
            .map_err(|e| RequestError::Decode(js_message(&e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

fn js_error(err: JsValue) -> RequestError {
    RequestError::Network(js_message(&err))
}

fn js_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoints_tolerate_trailing_slash() {
        let a = Endpoints::from_base("https://api.example.com/v1/");
        let b = Endpoints::from_base("https://api.example.com/v1");
        assert_eq!(a, b);
        assert_eq!(a.formula, "https://api.example.com/v1/formula");
        assert_eq!(a.analyze, "https://api.example.com/v1/analyze");
        assert_eq!(a.enhance, "https://api.example.com/v1/enhance");
    }

    #[test]
    fn test_formula_string_and_array_shapes() {
        let one: FormulaResponse = decode(json!({"formula": "claim"})).unwrap();
        assert_eq!(one.into_result("T".into()).variants, vec!["claim"]);

        let many: FormulaResponse = decode(json!({"formula": ["wide", "narrow"]})).unwrap();
        let result = many.into_result("T".into());
        assert_eq!(result.variants, vec!["wide", "narrow"]);
        assert_eq!(result.display(), "wide\n\nnarrow");
    }

    #[test]
    fn test_formula_of_wrong_type_is_decode_error() {
        let err = decode::<FormulaResponse>(json!({"formula": 42})).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn test_mixed_contradictions_normalized() {
        let resp: AnalyzeResponse = decode(json!({
            "keywords": ["pump", "sensor"],
            "contradictions": [
                "plain text",
                {"type": "technical", "description": "speed vs accuracy"},
                {"description": "no type"}
            ]
        }))
        .unwrap();
        let result = AnalysisResult::from(resp);
        let labels: Vec<_> = result.contradictions.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(labels, vec!["plain text", "speed vs accuracy", "no type"]);
        assert_eq!(result.contradictions[1].kind.as_deref(), Some("technical"));
        assert_eq!(result.keywords_line(), "pump, sensor");
    }

    #[test]
    fn test_null_and_absent_lists_are_empty() {
        let resp: AnalyzeResponse = decode(json!({"keywords": null})).unwrap();
        let result = AnalysisResult::from(resp);
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_suggestions_prefer_primary_field() {
        let both: EnhanceResponse = decode(json!({
            "non_obvious_suggestions": "new",
            "non_obvious": "old"
        }))
        .unwrap();
        assert_eq!(EnhancementResult::from(both).non_obvious_suggestions, "new");

        let legacy: EnhanceResponse = decode(json!({"title": "T", "non_obvious": "old"})).unwrap();
        let result = EnhancementResult::from(legacy);
        assert_eq!(result.non_obvious_suggestions, "old");
        assert_eq!(result.title, "T");
        assert_eq!(result.justification, "");

        let empty_primary: EnhanceResponse = decode(json!({
            "non_obvious_suggestions": "",
            "non_obvious": "old"
        }))
        .unwrap();
        assert_eq!(EnhancementResult::from(empty_primary).non_obvious_suggestions, "old");

        let neither: EnhanceResponse = decode(json!({})).unwrap();
        assert_eq!(EnhancementResult::from(neither).non_obvious_suggestions, "");
    }

    #[test]
    fn test_non_string_contradiction_type_keeps_description() {
        let resp: AnalyzeResponse = decode(json!({
            "contradictions": [
                {"description": "speed vs accuracy", "type": 2},
                {"description": "light vs strong", "type": null},
                {"description": "hot vs cold", "type": ["physical"]},
                {"description": "cheap vs durable", "type": "technical"}
            ]
        }))
        .unwrap();
        let result = AnalysisResult::from(resp);
        let labels: Vec<_> = result.contradictions.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(
            labels,
            vec!["speed vs accuracy", "light vs strong", "hot vs cold", "cheap vs durable"]
        );
        let kinds: Vec<_> = result.contradictions.iter().map(|c| c.kind.as_deref()).collect();
        assert_eq!(kinds, vec![None, None, None, Some("technical")]);
    }

    #[test]
    fn test_empty_description_falls_back_to_raw_object() {
        let resp: AnalyzeResponse = decode(json!({
            "contradictions": [{"description": "", "type": "physical"}]
        }))
        .unwrap();
        let result = AnalysisResult::from(resp);
        let label = &result.contradictions[0].description;
        assert!(!label.is_empty(), "Empty description must not render a blank item");
        assert!(label.contains("physical"), "Raw object expected, got {}", label);
        assert_eq!(result.contradictions[0].kind, None);
    }
}
