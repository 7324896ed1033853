// src/utils.rs
use crate::input::PDF_MEDIA_TYPE;

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Media type inferred from a file name. Anything that is not a PDF maps to
/// a generic binary type, which the staging gate then rejects.
pub fn media_type_for(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        _ => "application/octet-stream",
    }
}
