//! Application configuration.
//!
//! Centralized configuration for the Layman Law frontend.
//! Values are compiled in; the backend URL can be swapped at build time
//! by exporting `LAYMAN_LAW_BACKEND_URL` before running trunk.

/// Default analysis service base URL.
pub const DEFAULT_BACKEND_URL: &str = "https://layman-law.onrender.com";

/// Application name, shown in the navbar, footer and page titles.
pub const APP_NAME: &str = "Layman Law";

/// File types advertised by the file picker.
///
/// This is a hint for the picker only, nothing is rejected locally.
pub const ACCEPTED_FILE_TYPES: &str = ".txt,.doc,.docx,.pdf";

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

/// Notice shown when submitting without a file.
pub const NO_FILE_NOTICE: &str = "Please select a file first!";

/// Fallback message for failed responses without an `error` field.
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong";

/// Result text when a risk analysis response has no usable `risks` list.
pub const RISK_FORMAT_WARNING: &str = "⚠️ Risk data not in expected format.";

/// Prefix of every failed-submission result.
pub const ERROR_PREFIX: &str = "⚠️ Error: ";

/// Analysis service base URL, honouring the build-time override.
pub fn backend_url() -> &'static str {
    resolve_backend_url(option_env!("LAYMAN_LAW_BACKEND_URL"))
}

/// Override without trailing slashes, or the default when that leaves
/// nothing.
fn resolve_backend_url(override_url: Option<&'static str>) -> &'static str {
    match override_url.map(|url| url.trim_end_matches('/')) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    }
}

/// Whether `file_name` carries one of the advertised extensions.
pub fn is_accepted_file(file_name: &str) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    ACCEPTED_FILE_TYPES
        .split(',')
        .any(|accepted| accepted.trim_start_matches('.') == ext)
}
