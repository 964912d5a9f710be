use crate::domain::validate::Violation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted article. `id` is assigned by the store at insert and never changes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Request body for creating or fully overwriting an article.
///
/// Both fields are required: a body missing either one is rejected at the JSON
/// boundary before any store call.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
}

impl ArticlePayload {
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.title.trim().is_empty() {
            violations.push(Violation::new("title", "must not be blank"));
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_a_violation() {
        let payload = ArticlePayload {
            title: "   ".to_string(),
            content: "body".to_string(),
        };
        let violations = payload.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn missing_content_is_rejected_by_serde() {
        let result: Result<ArticlePayload, _> =
            serde_json::from_value(serde_json::json!({ "title": "hello" }));
        assert!(result.is_err());
    }
}
