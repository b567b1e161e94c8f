use crate::domain::category::Category;
use crate::domain::errors::DomainError;
use crate::domain::validation::{ValidationError, ValidationHandler, Validator};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Rule set for [`Category`].
///
/// Only the name is constrained, and at most one name error is reported per
/// pass: null, then blank, then length.
pub struct CategoryValidator<'a, H: ValidationHandler> {
    category: &'a Category,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CategoryValidator<'a, H> {
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> Result<(), DomainError> {
        let Some(name) = self.category.name() else {
            return self
                .handler
                .append(ValidationError::new("'name' should not be null"));
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self
                .handler
                .append(ValidationError::new("'name' should not be empty"));
        }

        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return self.handler.append(ValidationError::new(format!(
                "'name' must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(())
    }
}

impl<H: ValidationHandler> Validator for CategoryValidator<'_, H> {
    fn validate(&mut self) -> Result<(), DomainError> {
        self.check_name_constraints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{Notification, ThrowsValidationHandler};

    fn errors_for(name: Option<&str>) -> Vec<String> {
        let category = Category::new_category(name.map(str::to_string), None, true);
        let mut notification = Notification::new();
        category.validate(&mut notification).unwrap();
        notification
            .into_errors()
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn valid_names_produce_no_errors() {
        let long = "a".repeat(255);
        for name in ["Fil", "Movies", "  Series  ", long.as_str()] {
            assert!(errors_for(Some(name)).is_empty(), "{name:?} should be valid");
        }
    }

    #[test]
    fn null_name() {
        assert_eq!(errors_for(None), vec!["'name' should not be null"]);
    }

    #[test]
    fn blank_name() {
        assert_eq!(errors_for(Some("  ")), vec!["'name' should not be empty"]);
        assert_eq!(errors_for(Some("")), vec!["'name' should not be empty"]);
    }

    #[test]
    fn name_length_is_checked_after_trimming() {
        let expected = vec!["'name' must be between 3 and 255 characters"];
        assert_eq!(errors_for(Some("Fi ")), expected);
        assert_eq!(errors_for(Some(&"a".repeat(256))), expected);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(errors_for(Some("Чай")).is_empty());
    }

    #[test]
    fn throws_handler_reports_first_violation() {
        let category = Category::new_category(None, None, true);
        let err = category.validate(&mut ThrowsValidationHandler).unwrap_err();

        assert_eq!(err.message(), "'name' should not be null");
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn validation_does_not_touch_the_aggregate() {
        let category = Category::new_category(Some("Fi".to_string()), None, false);
        let snapshot = category.clone();

        let _ = category.validate(&mut Notification::new());

        assert_eq!(category, snapshot);
    }
}
