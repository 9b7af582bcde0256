//! Decomposition of a media query definition into types and features.

use crate::patterns;

/// Returns every parenthesised media feature in `definition`, in order.
pub fn extract_media_features(definition: &str) -> Vec<&str> {
    patterns::media_feature()
        .find_iter(definition)
        .map(|m| m.as_str())
        .collect()
}

/// Returns `@media` and its media types, up to the first `(`.
///
/// The result holds at most one element.
pub fn extract_media_types(definition: &str) -> Vec<&str> {
    patterns::media_types()
        .find(definition)
        .map(|m| m.as_str())
        .into_iter()
        .collect()
}
