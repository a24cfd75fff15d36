use crate::error::ShapeError;

pub fn require_items<T>(field: &'static str, items: &[T]) -> Result<(), ShapeError> {
    if items.is_empty() {
        return Err(ShapeError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ShapeError> {
    if value.trim().is_empty() {
        return Err(ShapeError::Invalid {
            field,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

pub fn require_score(field: &'static str, value: u8) -> Result<(), ShapeError> {
    if value > 100 {
        return Err(ShapeError::Invalid {
            field,
            reason: format!("score {value} exceeds 100"),
        });
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: u32) -> Result<(), ShapeError> {
    if value == 0 {
        return Err(ShapeError::Invalid {
            field,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collections_are_rejected() {
        assert!(require_items::<String>("skills", &[]).is_err());
        assert!(require_items("skills", &["a".to_string()]).is_ok());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("title", "   ").is_err());
        assert!(require_text("title", "Rust").is_ok());
    }

    #[test]
    fn scores_are_capped_at_100() {
        assert!(require_score("relevanceScore", 101).is_err());
        assert!(require_score("relevanceScore", 100).is_ok());
        assert!(require_score("relevanceScore", 0).is_ok());
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert!(require_positive("questionCount", 0).is_err());
        assert!(require_positive("questionCount", 20).is_ok());
    }
}
