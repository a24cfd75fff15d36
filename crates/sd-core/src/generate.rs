use crate::error::{DeckError, ShapeError};
use crate::skilldeck::RequestContext;
use crate::types::enums::{ContentKind, ContentSource};
use crate::types::envelope::{Generated, RequestToken};
use crate::types::ids::GenerationId;
use chrono::Utc;
use sd_gen::TextModel;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// One generated-content operation: how to ask the model, how to judge a
/// reply, and what to serve when the reply is unusable.
///
/// `fallback` must be deterministic over the request fields. Everything the
/// caller can observe about a failed call flows through it, so two identical
/// requests that both fail produce identical content.
pub trait ContentRequest {
    type Output: DeserializeOwned;

    const KIND: ContentKind;

    fn prompt(&self) -> String;

    fn validate(output: &Self::Output) -> Result<(), ShapeError>;

    fn fallback(&self) -> Self::Output;
}

/// Runs one generation end to end. Never fails: any error on the model,
/// parse, or validation step is logged and replaced by the fallback.
pub(crate) async fn run<M, R>(
    model: &M,
    ctx: &RequestContext,
    request: &R,
    token: RequestToken,
) -> Generated<R::Output>
where
    M: TextModel,
    R: ContentRequest,
{
    match attempt(model, request).await {
        Ok(content) => {
            debug!(kind = R::KIND.as_str(), "serving generated content");
            envelope(token, ContentSource::Generated, content)
        }
        Err(err) => {
            warn!(
                kind = R::KIND.as_str(),
                correlation_id = ctx.correlation_id.as_deref(),
                error = %err,
                "generation failed, serving fallback"
            );
            envelope(token, ContentSource::Fallback, request.fallback())
        }
    }
}

async fn attempt<M, R>(model: &M, request: &R) -> Result<R::Output, DeckError>
where
    M: TextModel,
    R: ContentRequest,
{
    let raw = model.complete(&request.prompt()).await?;
    let body = strip_json_fences(&raw);
    let output: R::Output = serde_json::from_str(body).map_err(ShapeError::from)?;
    R::validate(&output)?;
    Ok(output)
}

fn envelope<T>(token: RequestToken, source: ContentSource, content: T) -> Generated<T> {
    Generated {
        id: GenerationId::generate(),
        token,
        source,
        generated_at: Utc::now(),
        content,
    }
}

/// Gemini wraps JSON replies in markdown fences even when the prompt asks
/// for bare JSON. Peel one fence pair if present.
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    let body = body.trim_end();
    body.strip_suffix("```").map_or(body, str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_gen::ModelError;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Reply {
        answer: String,
    }

    struct Echo;

    impl ContentRequest for Echo {
        type Output = Reply;

        const KIND: ContentKind = ContentKind::Search;

        fn prompt(&self) -> String {
            "say something".to_string()
        }

        fn validate(output: &Self::Output) -> Result<(), ShapeError> {
            if output.answer.is_empty() {
                return Err(ShapeError::Invalid {
                    field: "answer",
                    reason: "must not be blank".to_string(),
                });
            }
            Ok(())
        }

        fn fallback(&self) -> Self::Output {
            Reply {
                answer: "canned".to_string(),
            }
        }
    }

    struct Scripted(Result<&'static str, ()>);

    impl TextModel for Scripted {
        async fn complete(&self, _prompt: &str) -> Result<String, ModelError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(ModelError::Unconfigured),
            }
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new(crate::types::enums::RequestSource::Cli, None)
    }

    #[tokio::test]
    async fn good_reply_is_generated() {
        let model = Scripted(Ok(r#"{"answer": "hi"}"#));
        let out = run(&model, &ctx(), &Echo, RequestToken(1)).await;
        assert_eq!(out.source, ContentSource::Generated);
        assert_eq!(out.content.answer, "hi");
    }

    #[tokio::test]
    async fn model_error_serves_fallback() {
        let model = Scripted(Err(()));
        let out = run(&model, &ctx(), &Echo, RequestToken(1)).await;
        assert!(out.is_fallback());
        assert_eq!(out.content.answer, "canned");
    }

    #[tokio::test]
    async fn unparseable_reply_serves_fallback() {
        let model = Scripted(Ok("I cannot answer that as JSON"));
        let out = run(&model, &ctx(), &Echo, RequestToken(1)).await;
        assert!(out.is_fallback());
    }

    #[tokio::test]
    async fn invalid_shape_serves_fallback() {
        let model = Scripted(Ok(r#"{"answer": ""}"#));
        let out = run(&model, &ctx(), &Echo, RequestToken(1)).await;
        assert!(out.is_fallback());
    }

    #[tokio::test]
    async fn fenced_reply_is_parsed() {
        let model = Scripted(Ok("```json\n{\"answer\": \"hi\"}\n```"));
        let out = run(&model, &ctx(), &Echo, RequestToken(1)).await;
        assert_eq!(out.source, ContentSource::Generated);
        assert_eq!(out.content.answer, "hi");
    }

    #[test]
    fn fence_stripping() {
        assert_eq!(strip_json_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_json_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_json_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_json_fences("  ```json\n{\"a\": 1}\n```  "), "{\"a\": 1}");
        assert_eq!(strip_json_fences("```json\n{}"), "{}");
    }
}
