//! Substitution of CSS `env()` references.

use regex::NoExpand;

use crate::patterns;

/// Replaces every `env(<variable>)` reference with `replacement`.
///
/// Matching ignores case and whitespace inside the parentheses. `variable`
/// is used as a pattern fragment without escaping, so it should be a plain
/// identifier such as `fold-top`. A name that does not form a valid pattern
/// matches nothing and the stylesheet is returned unchanged.
///
/// `replacement` is inserted literally; `$` has no special meaning.
pub fn replace_css_env_variables(css: &str, variable: &str, replacement: &str) -> String {
    match patterns::css_env_variable(variable) {
        Ok(re) => re.replace_all(css, NoExpand(replacement)).into_owned(),
        Err(e) => {
            log::warn!("Ignoring env() variable {variable:?}: {e}");
            css.to_string()
        }
    }
}

/// Applies [`replace_css_env_variables`] for each `(variable, replacement)`
/// pair, in order.
pub fn replace_css_env_variables_with<I, K, V>(css: &str, substitutions: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    substitutions
        .into_iter()
        .fold(css.to_string(), |acc, (variable, replacement)| {
            replace_css_env_variables(&acc, variable.as_ref(), replacement.as_ref())
        })
}
