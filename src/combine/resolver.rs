//! Request target resolution module
//!
//! Turns a raw request target into an ordered list of absolute file paths
//! plus the content type to declare for the combined response.
//!
//! The resolver is a pure function over the *path-and-query* string, not a
//! parsed URI: the `??` marker starts with a question mark, so hyper's
//! `uri.path()` would stop right before it and hide the filename list in the
//! query component.

use super::CombineError;
use crate::http::mime;
use std::path::{Component, Path, PathBuf};

/// The `??` sequence separating the base directory from the filename list.
const MARKER: &str = "??";

/// Resolved form of one combine request.
///
/// Immutable once parsed; discarded after the response is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Content type for the combined response, derived from the first
    /// filename's extension only.
    pub mime: &'static str,
    /// Absolute paths to read, in the exact order the URL lists them.
    /// Never empty for a successfully parsed request.
    pub file_paths: Vec<PathBuf>,
}

/// Parse a request target into a [`RequestDescriptor`].
///
/// Grammar:
/// - `<base>??<name1>[,<name2>,...]` combines the listed files under
///   `root/<base>` in listed order.
/// - A target without the `??` marker is shorthand for a single file: the
///   part after the final `/` is the filename, everything before it the
///   base directory, so `/assets/a.js` is equivalent to `/assets/??a.js`.
///
/// # Examples
/// ```
/// use combo_server::combine::parse_request_target;
/// use std::path::Path;
///
/// let desc = parse_request_target("/styles/??a.css,b.css", Path::new("/srv")).unwrap();
/// assert_eq!(desc.mime, "text/css");
/// assert_eq!(desc.file_paths[0], Path::new("/srv/styles/a.css"));
/// assert_eq!(desc.file_paths[1], Path::new("/srv/styles/b.css"));
/// ```
pub fn parse_request_target(
    target: &str,
    root: &Path,
) -> Result<RequestDescriptor, CombineError> {
    let (base, list) = split_target(target);

    if list.is_empty() {
        return Err(CombineError::MalformedUrl {
            target: target.to_string(),
            reason: "empty marker segment",
        });
    }

    let names: Vec<&str> = list.split(',').filter(|name| !name.is_empty()).collect();
    if names.is_empty() {
        return Err(CombineError::MalformedUrl {
            target: target.to_string(),
            reason: "no filenames listed",
        });
    }

    // Reject `..` anywhere in the request before touching the filesystem.
    // The original nginx-style concat syntax joins segments verbatim; that
    // would hand out any file the process can read.
    if has_parent_component(base) || names.iter().any(|name| has_parent_component(name)) {
        return Err(CombineError::PathTraversal {
            target: target.to_string(),
        });
    }

    // Trim leading slashes before joining: `PathBuf::join` would otherwise
    // replace the whole path when handed an absolute segment.
    let base_dir = root.join(base.trim_start_matches('/'));
    let file_paths: Vec<PathBuf> = names
        .iter()
        .map(|name| base_dir.join(name.trim_start_matches('/')))
        .collect();

    // First filename alone decides the content type
    let mime = mime::content_type_for(Path::new(names[0]).extension().and_then(|e| e.to_str()));

    Ok(RequestDescriptor { mime, file_paths })
}

/// Split a target into base directory and filename list.
///
/// Without the marker the target is treated as a single-file request split
/// at its final `/` separator.
fn split_target(target: &str) -> (&str, &str) {
    match target.split_once(MARKER) {
        Some((base, list)) => (base, list),
        None => target.rsplit_once('/').unwrap_or(("", target)),
    }
}

fn has_parent_component(segment: &str) -> bool {
    Path::new(segment)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(target: &str) -> Result<RequestDescriptor, CombineError> {
        parse_request_target(target, Path::new("/srv"))
    }

    #[test]
    fn test_marker_form_preserves_order() {
        let desc = parse("/assets/??b.js,a.js,c.js").unwrap();
        assert_eq!(
            desc.file_paths,
            vec![
                PathBuf::from("/srv/assets/b.js"),
                PathBuf::from("/srv/assets/a.js"),
                PathBuf::from("/srv/assets/c.js"),
            ]
        );
        assert_eq!(desc.mime, "application/javascript");
    }

    #[test]
    fn test_shorthand_resolves_single_file() {
        let desc = parse("/scripts/app.js").unwrap();
        assert_eq!(desc.file_paths, vec![PathBuf::from("/srv/scripts/app.js")]);
        assert_eq!(desc.mime, "application/javascript");
    }

    #[test]
    fn test_shorthand_at_root() {
        let desc = parse("/site.css").unwrap();
        assert_eq!(desc.file_paths, vec![PathBuf::from("/srv/site.css")]);
        assert_eq!(desc.mime, "text/css");
    }

    #[test]
    fn test_mime_from_first_filename_only() {
        let desc = parse("/assets/??a.css,b.js").unwrap();
        assert_eq!(desc.mime, "text/css");

        let desc = parse("/assets/??a.js,b.css").unwrap();
        assert_eq!(desc.mime, "application/javascript");
    }

    #[test]
    fn test_unknown_extension_defaults_to_css() {
        let desc = parse("/assets/??readme.txt").unwrap();
        assert_eq!(desc.mime, "text/css");
    }

    #[test]
    fn test_empty_marker_segment_is_malformed() {
        let err = parse("/assets/??").unwrap_err();
        assert!(matches!(err, CombineError::MalformedUrl { .. }));
    }

    #[test]
    fn test_only_commas_is_malformed() {
        let err = parse("/assets/??,,").unwrap_err();
        assert!(matches!(err, CombineError::MalformedUrl { .. }));
    }

    #[test]
    fn test_trailing_slash_shorthand_is_malformed() {
        let err = parse("/assets/").unwrap_err();
        assert!(matches!(err, CombineError::MalformedUrl { .. }));
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let desc = parse("/assets/??a.js,,b.js").unwrap();
        assert_eq!(
            desc.file_paths,
            vec![
                PathBuf::from("/srv/assets/a.js"),
                PathBuf::from("/srv/assets/b.js"),
            ]
        );
    }

    #[test]
    fn test_parent_components_rejected() {
        let err = parse("/assets/??../../etc/passwd").unwrap_err();
        assert!(matches!(err, CombineError::PathTraversal { .. }));

        let err = parse("/../secrets/??a.js").unwrap_err();
        assert!(matches!(err, CombineError::PathTraversal { .. }));

        let err = parse("/assets/../../etc/passwd").unwrap_err();
        assert!(matches!(err, CombineError::PathTraversal { .. }));
    }

    #[test]
    fn test_absolute_filename_stays_under_root() {
        let desc = parse("/assets/??/etc/passwd").unwrap();
        assert_eq!(
            desc.file_paths,
            vec![PathBuf::from("/srv/assets/etc/passwd")]
        );
    }

    #[test]
    fn test_nested_base_directory() {
        let desc = parse("/static/vendor/??lib.js").unwrap();
        assert_eq!(
            desc.file_paths,
            vec![PathBuf::from("/srv/static/vendor/lib.js")]
        );
    }
}
