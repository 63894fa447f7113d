//! Descriptor files holding a single serialized [`ModelInfo`].
//!
//! The format is chosen from the file extension:
//! - `.json`: read and written
//! - `.toml`: read only
//!
//! ```toml
//! mutant_type = "CLASS"
//! namespace_uri = "http://example.com/ns"
//! root_type = "Invoice"
//! root_name = "invoiceRoot"
//! ```

use std::path::Path;

use figment::{
    providers::{Format, Toml},
    Figment,
};

use crate::error::AppError;
use crate::models::ModelInfo;

/// On-disk format of a descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Toml,
}

impl DescriptorFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(DescriptorFormat::Json),
            Some("toml") => Ok(DescriptorFormat::Toml),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a [`ModelInfo`] from a `.json` or `.toml` descriptor.
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<ModelInfo, AppError> {
    let path = path.as_ref();
    let format = DescriptorFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |message: String| AppError::Descriptor {
        path: path.to_path_buf(),
        message,
    };

    let info: ModelInfo = match format {
        DescriptorFormat::Json => {
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?
        }
        DescriptorFormat::Toml => Figment::from(Toml::string(&content))
            .extract()
            .map_err(|e| invalid(e.to_string()))?,
    };

    tracing::debug!("Loaded descriptor {} ({:?})", path.display(), format);
    Ok(info)
}

/// Write a [`ModelInfo`] as a pretty-printed JSON descriptor.
pub fn save_descriptor(path: impl AsRef<Path>, info: &ModelInfo) -> Result<(), AppError> {
    let path = path.as_ref();
    if DescriptorFormat::from_path(path)? != DescriptorFormat::Json {
        return Err(AppError::UnsupportedFormat(path.display().to_string()));
    }

    let mut content = serde_json::to_string_pretty(info)?;
    content.push('\n');

    std::fs::write(path, content).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote descriptor {}", path.display());
    Ok(())
}
