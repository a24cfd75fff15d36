use crate::types::enums::ContentSource;
use crate::types::ids::GenerationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Position of a call in its operation kind's sequence. Strictly increasing
/// per kind; a consumer keeps the largest token it has issued and discards
/// any response carrying a smaller one (latest wins).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(as = u64)]
pub struct RequestToken(pub u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Wrapper around every provider result: rendering key, sequence token,
/// provenance, and timestamp. `id` and `generated_at` are the only fields
/// that may differ between two calls with identical inputs on the fallback
/// path; `content` is deterministic there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Generated<T> {
    pub id: GenerationId,
    pub token: RequestToken,
    pub source: ContentSource,
    pub generated_at: DateTime<Utc>,
    pub content: T,
}

impl<T> Generated<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}
