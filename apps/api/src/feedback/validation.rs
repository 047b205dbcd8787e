use crate::errors::AppError;

/// Review text limit, matching the form widget's cap.
pub const MAX_REVIEW_CHARS: usize = 500;

/// Trims and validates review text: required, at most `MAX_REVIEW_CHARS`.
pub fn validate_review(text: &str) -> Result<String, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Please write something before submitting".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_REVIEW_CHARS {
        return Err(AppError::Validation(format!(
            "Review must be at most {MAX_REVIEW_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// A blank reviewer name becomes "Anonymous".
pub fn normalize_reviewer(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Anonymous".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ratings come in as form text; only 1..=5 is accepted.
pub fn validate_rating(raw: &str) -> Result<i16, AppError> {
    let rating: i16 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Rating '{raw}' is not a number")))?;
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between 1 and 5, got {rating}"
        )));
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_review_rejected() {
        assert!(validate_review("").is_err());
        assert!(validate_review("   \n ").is_err());
    }

    #[test]
    fn review_is_trimmed() {
        assert_eq!(validate_review("  lovely ghats  ").unwrap(), "lovely ghats");
    }

    #[test]
    fn overlong_review_rejected() {
        let long = "a".repeat(MAX_REVIEW_CHARS + 1);
        assert!(validate_review(&long).is_err());
        let exact = "a".repeat(MAX_REVIEW_CHARS);
        assert!(validate_review(&exact).is_ok());
    }

    #[test]
    fn blank_reviewer_defaults_to_anonymous() {
        assert_eq!(normalize_reviewer("  "), "Anonymous");
        assert_eq!(normalize_reviewer("Aarushi"), "Aarushi");
    }

    #[test]
    fn rating_bounds_enforced() {
        assert_eq!(validate_rating("4").unwrap(), 4);
        assert_eq!(validate_rating(" 1 ").unwrap(), 1);
        assert!(validate_rating("0").is_err());
        assert!(validate_rating("6").is_err());
        assert!(validate_rating("four").is_err());
    }
}
