//! Component template (`.dtmpl`) handling.
//!
//! A template is the component's own config file with concrete values
//! replaced by `{name}` placeholders. Before a run the placeholders are
//! substituted back with the values Dakota should start from; the inverse
//! direction (`templatize`) turns a concrete config file into a template.
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use thiserror::Error;

/// Conventional extension for template files.
pub const TEMPLATE_EXTENSION: &str = "dtmpl";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unresolved placeholder in template: {{{name}}}")]
    UnresolvedPlaceholder { name: String },

    #[error("Substitution value has no matching placeholder: {name}")]
    UnusedValue { name: String },
}

fn is_placeholder_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replace every `{name}` placeholder with its value.
///
/// A placeholder with no value errors out, as does a value whose name never
/// appears in the template; both catch parameter typos before the external
/// executable is ever launched. Text in braces that is not a valid
/// placeholder name is left verbatim.
pub fn substitute(
    text: &str,
    values: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(text.len());
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                match values.get(name) {
                    Some(value) => {
                        used.insert(name.to_string());
                        out.push_str(value);
                    }
                    None => {
                        return Err(TemplateError::UnresolvedPlaceholder {
                            name: name.to_string(),
                        });
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    for name in values.keys() {
        if !used.contains(name) {
            return Err(TemplateError::UnusedValue { name: name.clone() });
        }
    }
    Ok(out)
}

/// Read a template file and substitute its placeholders.
pub fn render_file(
    template: &Path,
    values: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let text = std::fs::read_to_string(template)?;
    substitute(&text, values)
}

/// The inverse of [`substitute`]: replace each concrete value with its
/// `{name}` placeholder, producing template text from a plain config file.
pub fn templatize(text: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = text.to_string();
    for (name, value) in values {
        if value.is_empty() {
            continue;
        }
        out = out.replace(value.as_str(), &format!("{{{}}}", name));
    }
    out
}

/// Format a scalar for substitution, matching input-file rendering.
pub fn fmt_scalar(value: f64) -> String {
    value.to_string()
}

/// Format a list for substitution: space-separated scalars.
pub fn fmt_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
