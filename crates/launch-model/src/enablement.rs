//! Enablement expressions for launch shortcuts
//!
//! An [`Enablement`] decides whether a shortcut applies to a
//! [`SelectionContext`]. Expressions deserialize from tagged tables:
//!
//! ```toml
//! enablement = { type = "all", of = [
//!     { type = "kind", kind = "file" },
//!     { type = "extension", ext = "rs" },
//! ] }
//! ```
//!
//! Per-element predicates (`kind`, `extension`, `name_matches`) hold only
//! for a non-empty selection whose every element satisfies them.

use crate::{Error, Resource, ResourceKind, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

/// Compiled `name_matches` patterns, keyed by source text
static PATTERNS: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// The selection an enablement expression is evaluated against.
///
/// An empty selection is a valid context.
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
    elements: Vec<Resource>,
}

impl SelectionContext {
    /// A context with nothing selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context holding exactly one resource
    pub fn single(resource: Resource) -> Self {
        Self {
            elements: vec![resource],
        }
    }

    pub fn elements(&self) -> &[Resource] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// First selected element, if any
    pub fn first(&self) -> Option<&Resource> {
        self.elements.first()
    }
}

impl FromIterator<Resource> for SelectionContext {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Boolean expression over a [`SelectionContext`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Enablement {
    Always,
    Never,
    SelectionEmpty,
    SelectionCount {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    Kind {
        kind: ResourceKind,
    },
    Extension {
        ext: String,
    },
    NameMatches {
        pattern: String,
    },
    All {
        of: Vec<Enablement>,
    },
    Any {
        of: Vec<Enablement>,
    },
    Not {
        expr: Box<Enablement>,
    },
}

impl Enablement {
    /// Evaluate against `context`.
    ///
    /// Fails when the expression itself is malformed (an invalid regex or an
    /// inverted count range). Evaluation short-circuits, so a malformed
    /// branch that is never reached does not fail.
    pub fn evaluate(&self, context: &SelectionContext) -> Result<bool> {
        match self {
            Enablement::Always => Ok(true),
            Enablement::Never => Ok(false),
            Enablement::SelectionEmpty => Ok(context.is_empty()),
            Enablement::SelectionCount { min, max } => {
                if let Some(max) = max {
                    if min > max {
                        return Err(Error::InvalidCountRange {
                            min: *min,
                            max: *max,
                        });
                    }
                }
                let n = context.len();
                Ok(n >= *min && max.is_none_or(|max| n <= max))
            }
            Enablement::Kind { kind } => Ok(every(context, |r| r.kind() == *kind)),
            Enablement::Extension { ext } => {
                let ext = ext.trim_start_matches('.');
                Ok(every(context, |r| {
                    r.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
                }))
            }
            Enablement::NameMatches { pattern } => {
                let re = compiled(pattern)?;
                Ok(every(context, |r| re.is_match(r.name())))
            }
            Enablement::All { of } => {
                for expr in of {
                    if !expr.evaluate(context)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Enablement::Any { of } => {
                for expr in of {
                    if expr.evaluate(context)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Enablement::Not { expr } => Ok(!expr.evaluate(context)?),
        }
    }
}

/// Compile `pattern` once per process. Invalid patterns are not cached.
fn compiled(pattern: &str) -> Result<Regex> {
    let mut patterns = PATTERNS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(re) = patterns.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    patterns.insert(pattern.to_string(), re.clone());
    Ok(re)
}

fn every(context: &SelectionContext, predicate: impl Fn(&Resource) -> bool) -> bool {
    !context.is_empty() && context.elements().iter().all(predicate)
}
