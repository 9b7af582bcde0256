use regex::Regex;
use std::sync::OnceLock;

/// The media feature used to describe fold orientation.
pub const SPANNING_MEDIA_FEATURE_KEY: &str = "screen-spanning";

/// An `@media` block whose condition mentions [`SPANNING_MEDIA_FEATURE_KEY`].
///
/// Capture groups:
/// 1. whitespace before `@media`
/// 2. the query definition, up to the opening brace
/// 3. the block body, ending with the last inner `}`
/// 4. whitespace before the closing brace
///
/// Word boundaries around the key are ASCII-only, so a non-ASCII letter
/// next to it still counts as a boundary.
///
/// The body is matched lazily, so nested at-rules inside the block can end
/// the match early.
pub fn spanning_media_block() -> &'static Regex {
    static SPANNING_MEDIA_BLOCK: OnceLock<Regex> = OnceLock::new();
    SPANNING_MEDIA_BLOCK.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)(\s*)(@media.*?(?-u:\b){SPANNING_MEDIA_FEATURE_KEY}(?-u:\b)[^{{]+)\{{([\s\S]+?\}})(\s*)\}}"
        ))
        .expect("Invalid spanning media block regex")
    })
}

/// A parenthesised media feature such as `(min-width: 100px)`.
pub fn media_feature() -> &'static Regex {
    static MEDIA_FEATURE: OnceLock<Regex> = OnceLock::new();
    MEDIA_FEATURE
        .get_or_init(|| Regex::new(r"(?i)\((.*?)\)").expect("Invalid media feature regex"))
}

/// `@media` and its media types, up to the first feature parenthesis.
pub fn media_types() -> &'static Regex {
    static MEDIA_TYPES: OnceLock<Regex> = OnceLock::new();
    MEDIA_TYPES.get_or_init(|| Regex::new(r"(?i)@media[^(]+").expect("Invalid media types regex"))
}

/// Builds the pattern for `env(<variable>)` references.
///
/// `variable` goes into the pattern verbatim. Names containing regex
/// metacharacters produce a different pattern, or none at all.
pub fn css_env_variable(variable: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)env\(\s*{variable}\s*\)"))
}
