use regex::Captures;

use crate::patterns;

/// One `@media` block that mentions the spanning media feature.
///
/// All fields borrow from the scanned stylesheet. Concatenating
/// `indent_start`, `definition`, `{`, `content`, `indent_end` and `}`
/// reproduces `full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaBlock<'a> {
    /// Whitespace preceding `@media`.
    pub indent_start: &'a str,
    /// The query definition, from `@media` up to the opening brace.
    pub definition: &'a str,
    /// Block body, including the last inner closing brace.
    pub content: &'a str,
    /// Whitespace preceding the closing brace.
    pub indent_end: &'a str,
    /// The entire matched text.
    pub full: &'a str,
}

impl<'a> MediaBlock<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Self {
            indent_start: group(1),
            definition: group(2),
            content: group(3),
            indent_end: group(4),
            full: group(0),
        }
    }
}

/// Finds every `@media` block mentioning `screen-spanning`, in document order.
pub fn find_spanning_media_blocks(css: &str) -> Vec<MediaBlock<'_>> {
    patterns::spanning_media_block()
        .captures_iter(css)
        .map(|caps| MediaBlock::from_captures(&caps))
        .collect()
}

/// Replaces every spanning `@media` block with `replacement`.
///
/// `replacement` may refer to the block's parts with `$1` (leading
/// whitespace), `$2` (definition), `$3` (body) and `$4` (trailing
/// whitespace). Use `$$` for a literal dollar sign. A group reference runs
/// on through letters, digits and underscores, so `$1x` names a group `1x`
/// that does not exist; write `${1}x` instead.
pub fn replace_spanning_media_blocks(css: &str, replacement: &str) -> String {
    patterns::spanning_media_block()
        .replace_all(css, replacement)
        .into_owned()
}
