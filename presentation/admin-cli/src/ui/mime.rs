use std::path::Path;

/// Guesses an upload's content type from its extension.
///
/// Unknown extensions come back as `application/octet-stream`, which the
/// image upload path rejects.
pub fn mime_for_path(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
