//! MIME type table module
//!
//! Fixed, read-only mapping from file extension to Content-Type, compiled
//! into the binary. The combiner serves CSS and JavaScript bundles, so the
//! table is intentionally small; anything unrecognized falls back to
//! `text/css`, matching the concat-style asset servers this URL syntax
//! comes from.

/// Get the Content-Type for a file extension (without the dot).
///
/// # Examples
/// ```
/// use combo_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("css")), "text/css");
/// assert_eq!(content_type_for(Some("js")), "application/javascript");
/// assert_eq!(content_type_for(None), "text/css");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("js" | "mjs") => "application/javascript",
        _ => "text/css",
    }
}
