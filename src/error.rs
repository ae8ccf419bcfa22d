use std::path::PathBuf;
use thiserror::Error;

/// Fatal import failures. Every variant carries the raw value that caused it.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unknown BeerXML literal for {field}: '{value}'")]
    UnknownLiteral { field: &'static str, value: String },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid date '{value}', expected format dd MMM yyyy")]
    InvalidDate { value: String },

    #[error("Malformed XML at byte {position}: {message}")]
    Xml { position: usize, message: String },

    #[error("Recipe '{recipe}' is missing its {reference}")]
    MissingReference {
        recipe: String,
        reference: &'static str,
    },

    #[error("Invalid state for recipe '{recipe}': {reason}")]
    InvalidRecipe { recipe: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ImportError {
    pub fn unknown_literal(field: &'static str, value: &str) -> Self {
        ImportError::UnknownLiteral {
            field,
            value: value.to_string(),
        }
    }

    pub fn invalid_recipe(recipe: &str, reason: impl Into<String>) -> Self {
        ImportError::InvalidRecipe {
            recipe: recipe.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_raw_value() {
        let err = ImportError::unknown_literal("hop type", "Noble");
        assert!(err.to_string().contains("'Noble'"));

        let err = ImportError::InvalidDate {
            value: "2024-01-05".to_string(),
        };
        assert!(err.to_string().contains("2024-01-05"));
    }

    #[test]
    fn test_invalid_recipe_message() {
        let err = ImportError::invalid_recipe("Pale Ale", "no mash steps");
        assert_eq!(
            err.to_string(),
            "Invalid state for recipe 'Pale Ale': no mash steps"
        );
    }
}
