//! The three user operations: validate, build the payload, make one
//! request, normalize the response.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{self, AnalyzeResponse, EnhanceResponse, Endpoints, FormulaResponse, Transport};
use crate::error::{DispatchError, RequestError, ValidationError};
use crate::form::{AnalysisDraft, EnhanceDraft, IdeaDraft};
use crate::model::{
    AnalysisQuery, AnalysisResult, EnhanceQuery, EnhancementResult, FormulaResult, InventionIdea,
};

pub struct Dispatcher<T> {
    endpoints: Endpoints,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(endpoints: Endpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    /// Draft a patent claim from an invention idea.
    pub async fn generate(&self, draft: &IdeaDraft) -> Result<FormulaResult, DispatchError> {
        let idea = build_idea(draft)?;
        let body = self.post(&self.endpoints.formula, &idea).await?;
        let result = api::decode::<FormulaResponse>(body)?.into_result(idea.title);
        info!(variants = result.variants.len(), "formula generated");
        Ok(result)
    }

    /// Extract keywords, classification codes and contradictions.
    pub async fn analyze(&self, draft: &AnalysisDraft) -> Result<AnalysisResult, DispatchError> {
        let query = build_analysis(draft)?;
        let body = self.post(&self.endpoints.analyze, &query).await?;
        let result = AnalysisResult::from(api::decode::<AnalyzeResponse>(body)?);
        info!(
            keywords = result.keywords.len(),
            contradictions = result.contradictions.len(),
            "analysis received"
        );
        Ok(result)
    }

    /// Ask for an improved title, non-obviousness tips and justification.
    pub async fn enhance(&self, draft: &EnhanceDraft) -> Result<EnhancementResult, DispatchError> {
        let query = build_enhancement(draft)?;
        let body = self.post(&self.endpoints.enhance, &query).await?;
        let result = EnhancementResult::from(api::decode::<EnhanceResponse>(body)?);
        info!(provider = query.provider.code(), "enhancement received");
        Ok(result)
    }

    async fn post<P: Serialize>(&self, url: &str, payload: &P) -> Result<Value, RequestError> {
        let body =
            serde_json::to_value(payload).map_err(|e| RequestError::Encode(e.to_string()))?;
        debug!(url, "dispatching request");
        self.transport.post_json(url, &body).await.inspect_err(|err| {
            warn!(url, error = %err, "request failed");
        })
    }
}

// -- Validation and payload construction --

pub fn build_idea(draft: &IdeaDraft) -> Result<InventionIdea, ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if draft.effect.trim().is_empty() {
        return Err(ValidationError::MissingEffect);
    }
    Ok(InventionIdea {
        title: draft.title.trim().to_string(),
        known: draft.known.trim().to_string(),
        distinct: draft.distinct.trim().to_string(),
        effect: draft.effect.trim().to_string(),
        style: draft.style,
        variants: parse_variants(&draft.variants)?,
        language: draft.language,
    })
}

pub fn build_analysis(draft: &AnalysisDraft) -> Result<AnalysisQuery, ValidationError> {
    let text = draft.text.trim();
    if text.is_empty() {
        return Err(ValidationError::MissingText);
    }
    Ok(AnalysisQuery {
        text: text.to_string(),
        max_keywords: parse_max_keywords(&draft.max_keywords)?,
    })
}

pub fn build_enhancement(draft: &EnhanceDraft) -> Result<EnhanceQuery, ValidationError> {
    let formula = draft.formula.trim();
    if formula.is_empty() {
        return Err(ValidationError::MissingFormula);
    }
    let key = draft.api_key.trim();
    Ok(EnhanceQuery {
        formula: formula.to_string(),
        provider: draft.provider,
        openai_api_key: (!key.is_empty()).then(|| key.to_string()),
    })
}

/// Blank means "not supplied"; otherwise a positive integer.
fn parse_variants(raw: &str) -> Result<Option<u32>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ValidationError::InvalidVariants(raw.to_string())),
    }
}

/// Blank or zero means "not supplied".
fn parse_max_keywords(raw: &str) -> Result<Option<u32>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ValidationError::InvalidMaxKeywords(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::executor::block_on;
    use serde_json::json;

    use crate::i18n::{strings, Language};
    use crate::model::{Provider, Style};

    /// Records every request and answers with a canned reply.
    struct Recorder {
        calls: RefCell<Vec<(String, Value)>>,
        reply: Result<Value, RequestError>,
    }

    impl Recorder {
        fn replying(reply: Result<Value, RequestError>) -> Dispatcher<Recorder> {
            Dispatcher::new(
                Endpoints::from_base("http://svc.test"),
                Recorder {
                    calls: RefCell::new(Vec::new()),
                    reply,
                },
            )
        }
    }

    impl Transport for Recorder {
        async fn post_json(&self, url: &str, body: &Value) -> Result<Value, RequestError> {
            self.calls.borrow_mut().push((url.to_string(), body.clone()));
            self.reply.clone()
        }
    }

    fn calls(d: &Dispatcher<Recorder>) -> Vec<(String, Value)> {
        d.transport.calls.borrow().clone()
    }

    fn idea(title: &str, effect: &str) -> IdeaDraft {
        IdeaDraft {
            title: title.to_string(),
            known: "a housing".to_string(),
            distinct: "a temperature sensor".to_string(),
            effect: effect.to_string(),
            style: None,
            variants: String::new(),
            language: Language::Ru,
        }
    }

    #[test]
    fn test_generate_blank_required_fields_never_hit_network() {
        let d = Recorder::replying(Ok(json!({"formula": "x"})));
        let cases = [("", "effect"), ("   ", "effect"), ("Pump", ""), ("Pump", " \t\n")];
        for (title, effect) in cases {
            let err = block_on(d.generate(&idea(title, effect))).unwrap_err();
            assert!(err.is_validation(), "Expected validation error for {:?}", (title, effect));
        }
        assert!(calls(&d).is_empty(), "No request may be sent on validation failure");
    }

    #[test]
    fn test_generate_payload_includes_variants_only_when_supplied() {
        let d = Recorder::replying(Ok(json!({"formula": "claim"})));

        block_on(d.generate(&idea("Pump", "quiet"))).unwrap();
        let mut with_variants = idea("Pump", "quiet");
        with_variants.variants = "2".to_string();
        with_variants.style = Some(Style::Compact);
        block_on(d.generate(&with_variants)).unwrap();

        let sent = calls(&d);
        assert_eq!(sent[0].0, "http://svc.test/formula");
        assert_eq!(
            sent[0].1,
            json!({
                "title": "Pump",
                "known": "a housing",
                "distinct": "a temperature sensor",
                "effect": "quiet",
                "language": "ru"
            })
        );
        assert_eq!(sent[1].1["variants"], json!(2));
        assert_eq!(sent[1].1["style"], json!("compact"));
    }

    #[test]
    fn test_generate_rejects_non_positive_variants() {
        let d = Recorder::replying(Ok(json!({"formula": "claim"})));
        for raw in ["0", "-1", "two", "1.5"] {
            let mut draft = idea("Pump", "quiet");
            draft.variants = raw.to_string();
            let err = block_on(d.generate(&draft)).unwrap_err();
            assert_eq!(err, DispatchError::from(ValidationError::InvalidVariants(raw.to_string())));
        }
        assert!(calls(&d).is_empty());
    }

    #[test]
    fn test_generate_joins_variants_in_response_order() {
        let d = Recorder::replying(Ok(json!({"formula": ["first", "second", "third"]})));
        let result = block_on(d.generate(&idea("Pump", "quiet"))).unwrap();
        assert_eq!(result.title, "Pump");
        assert_eq!(result.display(), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_status_failure_surfaces_code() {
        let d = Recorder::replying(Err(RequestError::Status(422)));
        let err = block_on(d.generate(&idea("Pump", "quiet"))).unwrap_err();
        assert_eq!(err, DispatchError::Request(RequestError::Status(422)));
        assert!(err.localized(strings(Language::En)).contains("422"));
        assert_eq!(calls(&d).len(), 1, "Exactly one attempt, no retries");
    }

    #[test]
    fn test_analyze_status_failure_surfaces_code() {
        let d = Recorder::replying(Err(RequestError::Status(503)));
        let draft = AnalysisDraft {
            text: "pump".to_string(),
            max_keywords: String::new(),
        };
        let err = block_on(d.analyze(&draft)).unwrap_err();
        assert_eq!(err, DispatchError::Request(RequestError::Status(503)));
        assert!(err.localized(strings(Language::Ru)).contains("503"));
        assert_eq!(calls(&d).len(), 1, "Exactly one attempt, no retries");
    }

    #[test]
    fn test_enhance_status_failure_surfaces_code() {
        let d = Recorder::replying(Err(RequestError::Status(401)));
        let draft = EnhanceDraft {
            formula: "claim".to_string(),
            provider: Provider::OpenAi,
            api_key: "sk-bad".to_string(),
        };
        let err = block_on(d.enhance(&draft)).unwrap_err();
        assert_eq!(err, DispatchError::Request(RequestError::Status(401)));
        assert!(err.localized(strings(Language::En)).contains("401"));
        assert_eq!(calls(&d).len(), 1, "Exactly one attempt, no retries");
    }

    #[test]
    fn test_analyze_requires_text() {
        let d = Recorder::replying(Ok(json!({})));
        let draft = AnalysisDraft {
            text: "  ".to_string(),
            max_keywords: "5".to_string(),
        };
        let err = block_on(d.analyze(&draft)).unwrap_err();
        assert_eq!(err, DispatchError::from(ValidationError::MissingText));
        assert!(calls(&d).is_empty());
    }

    #[test]
    fn test_analyze_max_keywords_omitted_when_blank_or_zero() {
        let d = Recorder::replying(Ok(json!({})));
        for raw in ["", "0"] {
            let draft = AnalysisDraft {
                text: "pump".to_string(),
                max_keywords: raw.to_string(),
            };
            block_on(d.analyze(&draft)).unwrap();
        }
        let draft = AnalysisDraft {
            text: "pump".to_string(),
            max_keywords: "12".to_string(),
        };
        block_on(d.analyze(&draft)).unwrap();

        let sent = calls(&d);
        assert_eq!(sent[0].1, json!({"text": "pump"}));
        assert_eq!(sent[1].1, json!({"text": "pump"}));
        assert_eq!(sent[2].1, json!({"text": "pump", "max_keywords": 12}));
        assert_eq!(sent[2].0, "http://svc.test/analyze");
    }

    #[test]
    fn test_analyze_empty_contradictions_give_placeholder() {
        let d = Recorder::replying(Ok(json!({"keywords": ["pump"], "contradictions": []})));
        let draft = AnalysisDraft {
            text: "pump".to_string(),
            max_keywords: String::new(),
        };
        let result = block_on(d.analyze(&draft)).unwrap();
        let items = result.contradiction_items(strings(Language::En));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "No contradictions found");
    }

    #[test]
    fn test_analyze_mixed_contradictions_use_description_or_raw() {
        let d = Recorder::replying(Ok(json!({
            "contradictions": ["raw one", {"description": "described"}, "raw two"]
        })));
        let draft = AnalysisDraft {
            text: "pump".to_string(),
            max_keywords: String::new(),
        };
        let result = block_on(d.analyze(&draft)).unwrap();
        let labels: Vec<String> = result
            .contradiction_items(strings(Language::Ru))
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["raw one", "described", "raw two"]);
    }

    #[test]
    fn test_enhance_sends_key_only_when_present() {
        let d = Recorder::replying(Ok(json!({"title": "Better", "non_obvious": "tips"})));
        let mut draft = EnhanceDraft {
            formula: " claim ".to_string(),
            provider: Provider::OpenAi,
            api_key: "   ".to_string(),
        };
        let result = block_on(d.enhance(&draft)).unwrap();
        assert_eq!(result.title, "Better");
        assert_eq!(result.non_obvious_suggestions, "tips");

        draft.api_key = "sk-test".to_string();
        block_on(d.enhance(&draft)).unwrap();

        let sent = calls(&d);
        assert_eq!(sent[0].0, "http://svc.test/enhance");
        assert_eq!(sent[0].1, json!({"formula": "claim", "provider": "openai"}));
        assert_eq!(sent[1].1["openai_api_key"], json!("sk-test"));
    }

    #[test]
    fn test_enhance_requires_formula() {
        let d = Recorder::replying(Ok(json!({})));
        let draft = EnhanceDraft::default();
        let err = block_on(d.enhance(&draft)).unwrap_err();
        assert_eq!(err, DispatchError::from(ValidationError::MissingFormula));
        assert!(calls(&d).is_empty());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let d = Recorder::replying(Ok(json!({"formula": {"nested": true}})));
        let err = block_on(d.generate(&idea("Pump", "quiet"))).unwrap_err();
        assert!(matches!(err, DispatchError::Request(RequestError::Decode(_))), "got {:?}", err);
    }
}
