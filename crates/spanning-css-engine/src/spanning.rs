use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::blocks::find_spanning_media_blocks;
use crate::patterns::SPANNING_MEDIA_FEATURE_KEY;
use crate::query::{extract_media_features, extract_media_types};

/// Fold orientation targeted by a `screen-spanning` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanningValue {
    SingleFoldHorizontal,
    SingleFoldVertical,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown screen-spanning value: {0}")]
pub struct UnknownSpanningValue(pub String);

impl SpanningValue {
    pub const ALL: [SpanningValue; 3] = [
        SpanningValue::SingleFoldHorizontal,
        SpanningValue::SingleFoldVertical,
        SpanningValue::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpanningValue::SingleFoldHorizontal => "single-fold-horizontal",
            SpanningValue::SingleFoldVertical => "single-fold-vertical",
            SpanningValue::None => "none",
        }
    }

    /// Classifies a media query definition by the spanning value it names.
    ///
    /// Falls back to [`SpanningValue::None`]. A definition naming both fold
    /// values is vertical.
    pub fn classify(definition: &str) -> Self {
        let mut value = SpanningValue::None;
        if definition.contains(SpanningValue::SingleFoldHorizontal.as_str()) {
            value = SpanningValue::SingleFoldHorizontal;
        }
        if definition.contains(SpanningValue::SingleFoldVertical.as_str()) {
            value = SpanningValue::SingleFoldVertical;
        }
        value
    }
}

impl fmt::Display for SpanningValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanningValue {
    type Err = UnknownSpanningValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpanningValue::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| UnknownSpanningValue(s.to_string()))
    }
}

/// Spanning `@media` blocks of a stylesheet grouped by [`SpanningValue`].
///
/// Each group is the concatenation of its rebuilt blocks in document order,
/// with the `screen-spanning` feature removed from every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningCssText {
    #[serde(rename = "single-fold-horizontal")]
    pub single_fold_horizontal: String,
    #[serde(rename = "single-fold-vertical")]
    pub single_fold_vertical: String,
    pub none: String,
}

impl SpanningCssText {
    pub fn get(&self, value: SpanningValue) -> &str {
        match value {
            SpanningValue::SingleFoldHorizontal => &self.single_fold_horizontal,
            SpanningValue::SingleFoldVertical => &self.single_fold_vertical,
            SpanningValue::None => &self.none,
        }
    }

    fn get_mut(&mut self, value: SpanningValue) -> &mut String {
        match value {
            SpanningValue::SingleFoldHorizontal => &mut self.single_fold_horizontal,
            SpanningValue::SingleFoldVertical => &mut self.single_fold_vertical,
            SpanningValue::None => &mut self.none,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpanningValue, &str)> {
        SpanningValue::ALL
            .into_iter()
            .map(move |value| (value, self.get(value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, css)| css.is_empty())
    }
}

/// Finds all spanning media blocks in `css` and groups them by fold
/// orientation.
pub fn get_spanning_css_text(css: &str) -> SpanningCssText {
    let blocks = find_spanning_media_blocks(css);
    log::debug!("Found {} screen-spanning media blocks", blocks.len());

    let mut result = SpanningCssText::default();
    for block in blocks {
        let value = SpanningValue::classify(block.definition);

        let media_types = extract_media_types(block.definition)
            .first()
            .copied()
            .unwrap_or("");
        let media_features = extract_media_features(block.definition)
            .into_iter()
            .filter(|feature| !feature.contains(SPANNING_MEDIA_FEATURE_KEY))
            .collect::<Vec<_>>()
            .join(" and ");

        let group = result.get_mut(value);
        group.push_str(block.indent_start);
        group.push_str(media_types);
        group.push_str(&media_features);
        group.push('{');
        group.push_str(block.content);
        group.push_str(block.indent_end);
        group.push('}');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", SpanningValue::None)]
    #[case("@media (screen-spanning: none)", SpanningValue::None)]
    #[case(
        "@media (screen-spanning: single-fold-horizontal)",
        SpanningValue::SingleFoldHorizontal
    )]
    #[case(
        "@media (screen-spanning: single-fold-vertical)",
        SpanningValue::SingleFoldVertical
    )]
    #[case(
        "@media (screen-spanning: single-fold-horizontal), (screen-spanning: single-fold-vertical)",
        SpanningValue::SingleFoldVertical
    )]
    fn classify(#[case] definition: &str, #[case] expected: SpanningValue) {
        assert_eq!(SpanningValue::classify(definition), expected);
    }

    #[test]
    fn parses_and_displays_values() {
        for value in SpanningValue::ALL {
            assert_eq!(value.to_string().parse::<SpanningValue>(), Ok(value));
        }
        assert_eq!(
            "diagonal".parse::<SpanningValue>(),
            Err(UnknownSpanningValue("diagonal".to_string()))
        );
    }

    #[test]
    fn horizontal_block_loses_spanning_feature() {
        let css = "@media screen and (screen-spanning: single-fold-horizontal) and (min-width: 100px) { .a{color:red} }";
        let result = get_spanning_css_text(css);

        assert_eq!(
            result.single_fold_horizontal,
            "@media screen and (min-width: 100px){ .a{color:red} }"
        );
        assert_eq!(result.single_fold_vertical, "");
        assert_eq!(result.none, "");
    }

    #[test]
    fn vertical_and_none_blocks_are_grouped_separately() {
        let css = "
@media (screen-spanning: single-fold-vertical) {
  .v { width: env(fold-left); }
}
@media (screen-spanning: none) {
  .n { width: 100%; }
}";
        let result = get_spanning_css_text(css);

        assert_eq!(result.single_fold_horizontal, "");
        assert_eq!(
            result.single_fold_vertical,
            "\n@media {\n  .v { width: env(fold-left); }\n}"
        );
        assert_eq!(result.none, "\n@media {\n  .n { width: 100%; }\n}");
    }

    #[test]
    fn blocks_with_same_value_accumulate_in_order() {
        let css = "@media (screen-spanning: none) { .first{a:b} }\n\
                   .between { color: red; }\n\
                   @media print and (screen-spanning: none) { .second{a:b} }";
        let result = get_spanning_css_text(css);

        assert_eq!(
            result.none,
            "@media { .first{a:b} }\n@media print and { .second{a:b} }"
        );
    }

    #[test]
    fn stylesheet_without_spanning_blocks_is_empty() {
        let css = ".a { color: red; }\n@media (min-width: 10px) { .b { color: blue; } }";
        let result = get_spanning_css_text(css);

        assert!(result.is_empty());
        assert_eq!(result, SpanningCssText::default());
    }

    #[test]
    fn iter_yields_every_value() {
        let result = get_spanning_css_text("@media (screen-spanning: none) { .a{b:c} }");
        let values: Vec<_> = result.iter().map(|(value, _)| value).collect();

        assert_eq!(values, SpanningValue::ALL.to_vec());
        assert_eq!(result.get(SpanningValue::None), "@media { .a{b:c} }");
    }

    #[test]
    fn serializes_with_kebab_case_keys() {
        let json = serde_json::to_value(SpanningCssText::default()).unwrap();
        insta::assert_snapshot!(json.to_string(), @r#"{"none":"","single-fold-horizontal":"","single-fold-vertical":""}"#);
    }
}
