//! Extraction and rewriting of `screen-spanning` media queries.
//!
//! Stylesheets targeting foldable and dual-screen devices describe their fold
//! layouts with `@media (screen-spanning: ...)` blocks. The functions here find
//! those blocks with pattern matching (there is no CSS parser), group them by
//! fold orientation, and strip or substitute them and related `env()` values.
//!
//! Every operation is a pure function over string slices. "No match" is an
//! empty result, never an error.

pub mod blocks;
pub mod env;
pub mod patterns;
pub mod query;
pub mod spanning;

// Re-export key types for easier usage
pub use blocks::{MediaBlock, find_spanning_media_blocks, replace_spanning_media_blocks};
pub use env::{replace_css_env_variables, replace_css_env_variables_with};
pub use patterns::SPANNING_MEDIA_FEATURE_KEY;
pub use query::{extract_media_features, extract_media_types};
pub use spanning::{SpanningCssText, SpanningValue, UnknownSpanningValue, get_spanning_css_text};
