//! Upload validation (demo tracks, press photos, video clips)
//!
//! Independent of rule chains: a file is checked against size and type
//! limits before it is attached to a form.

use crate::result::ValidationResult;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

pub const KIBIBYTE: u64 = 1024;
pub const MEBIBYTE: u64 = 1024 * KIBIBYTE;
pub const DEFAULT_MAX_SIZE: u64 = 10 * MEBIBYTE;
pub const FILE_TYPE_MESSAGE: &str = "File type not allowed";

const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "audio/mpeg",
    "audio/wav",
    "audio/ogg",
    "audio/flac",
    "audio/aac",
    "audio/mp4",
    "video/mp4",
    "video/webm",
    "video/quicktime",
];

/// What the browser reports about a selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Lowercased extension without the dot, if the name has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Size and type limits for uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRules {
    /// Maximum size in bytes
    pub max_size: u64,
    /// Accepted MIME types, lowercase
    #[serde(deserialize_with = "deserialize_types")]
    pub allowed_types: BTreeSet<String>,
    /// Accepted extensions (lowercase, no dot). Empty means any extension.
    #[serde(deserialize_with = "deserialize_extensions")]
    pub allowed_extensions: BTreeSet<String>,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect(),
            allowed_extensions: BTreeSet::new(),
        }
    }
}

impl FileRules {
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_types = types.into_iter().map(|t| normalize_type(t.as_ref())).collect();
        self
    }

    fn type_allowed(&self, file: &FileInfo) -> bool {
        if !self.allowed_types.contains(&normalize_type(&file.mime_type)) {
            return false;
        }
        if self.allowed_extensions.is_empty() {
            return true;
        }
        file.extension()
            .map(|ext| self.allowed_extensions.contains(&ext))
            .unwrap_or(false)
    }
}

fn normalize_type(mime_type: &str) -> String {
    mime_type.trim().to_ascii_lowercase()
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

// Configured lists are stored lowercase, extensions without the dot
fn deserialize_types<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().map(|t| normalize_type(t)).collect())
}

fn deserialize_extensions<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().map(|e| normalize_extension(e)).collect())
}

/// Check a file against upload limits. Size is checked before type.
pub fn validate_file(file: &FileInfo, rules: &FileRules) -> ValidationResult {
    if file.size > rules.max_size {
        return ValidationResult::fail(format!(
            "File size must not exceed {}",
            format_size(rules.max_size)
        ));
    }

    if !rules.type_allowed(file) {
        tracing::debug!(name = %file.name, mime = %file.mime_type, "rejected file type");
        return ValidationResult::fail(FILE_TYPE_MESSAGE);
    }

    ValidationResult::ok()
}

/// Human-readable binary size: `10MB`, `2.5MB`, `512KB` or `900 bytes`
fn format_size(bytes: u64) -> String {
    let (unit, suffix) = if bytes >= MEBIBYTE {
        (MEBIBYTE, "MB")
    } else if bytes >= KIBIBYTE {
        (KIBIBYTE, "KB")
    } else {
        return format!("{} bytes", bytes);
    };

    if bytes % unit == 0 {
        format!("{}{}", bytes / unit, suffix)
    } else {
        format!("{:.1}{}", bytes as f64 / unit as f64, suffix)
    }
}
