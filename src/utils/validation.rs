use crate::utils::error::{GenError, Result};
use std::path::Path;
use url::Url;

pub const CATALOG_EXTENSIONS: &[&str] = &["yml", "yaml"];
pub const README_EXTENSIONS: &[&str] = &["md", "markdown"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> GenError {
    GenError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The userstyles catalog is fetched over plain HTTP(S) only.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

/// A repository file path with one of the `allowed` extensions (matched case-insensitively).
pub fn validate_path(field_name: &str, path: &str, allowed: &[&str]) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(()),
        _ => Err(invalid(
            field_name,
            path,
            format!("Expected a .{} file", allowed.join(" or .")),
        )),
    }
}
