//! Typed renderers for the five blocks of a Dakota input file.
//! Each block validates its own parameters and implements `Display`,
//! producing the keyword block in Dakota's native syntax.

pub mod environment;
pub mod interface;
pub mod method;
pub mod responses;
pub mod variables;

pub use environment::Environment;
pub use interface::Interface;
pub use method::{Method, MethodControls};
pub use responses::Responses;
pub use variables::Variables;

/// Append ` v1 v2 ...` after a `key =` prefix.
pub(crate) fn push_values<T: std::fmt::Display>(s: &mut String, values: &[T]) {
    for v in values {
        s.push_str(&format!(" {}", v));
    }
    s.push('\n');
}

/// Append ` 'a' 'b' ...` after a `key =` prefix.
pub(crate) fn push_quoted(s: &mut String, items: &[String]) {
    for item in items {
        s.push_str(&format!(" '{}'", item));
    }
    s.push('\n');
}

/// Render probability/response levels. A flat list becomes one row; nested
/// lists (one inner list per response) each get their own indented row.
pub(crate) fn push_levels(s: &mut String, levels: &Levels) {
    match levels {
        Levels::Flat(values) => {
            for v in values {
                s.push_str(&format!(" {}", v));
            }
        }
        Levels::PerResponse(rows) => {
            for row in rows {
                s.push_str("\n     ");
                for v in row {
                    s.push_str(&format!(" {}", v));
                }
            }
        }
    }
    s.push('\n');
}

/// Levels supplied either once for all responses or nested per response.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Levels {
    Flat(Vec<f64>),
    PerResponse(Vec<Vec<f64>>),
}

impl Levels {
    pub fn is_empty(&self) -> bool {
        match self {
            Levels::Flat(values) => values.is_empty(),
            Levels::PerResponse(rows) => rows.is_empty(),
        }
    }
}

impl Default for Levels {
    fn default() -> Self {
        Levels::Flat(Vec::new())
    }
}
