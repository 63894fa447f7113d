//! Rendering model metadata for terminal output.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::ModelInfo;

/// Output format for rendered metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON format (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation) - compact, line oriented.
    Toon,
}

/// Render a [`ModelInfo`] in the requested format.
pub fn render(info: &ModelInfo, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
        OutputFormat::Toon => {
            serde_toon::to_string(info).map_err(|e| AppError::Toon(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MutantType;

    fn invoice() -> ModelInfo {
        ModelInfo::new(
            MutantType::Class,
            "http://example.com/ns",
            "Invoice",
            "invoiceRoot",
        )
    }

    #[test]
    fn test_default_format_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_render_json_parses_back() {
        let rendered = render(&invoice(), OutputFormat::Json).unwrap();
        let parsed: ModelInfo = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, invoice());
    }

    #[test]
    fn test_render_toon_contains_values() {
        let rendered = render(&invoice(), OutputFormat::Toon).unwrap();
        assert!(rendered.contains("CLASS"));
        assert!(rendered.contains("Invoice"));
        assert!(rendered.contains("invoiceRoot"));
    }

    #[test]
    fn test_format_deserializes_snake_case() {
        let format: OutputFormat = serde_json::from_str("\"toon\"").unwrap();
        assert_eq!(format, OutputFormat::Toon);
    }
}
