//! Front-matter extraction for markdown posts.
//!
//! A front-matter block is YAML between a leading `---` line and the next
//! `---` line. Documents without one parse to an empty field set with the
//! whole text as body.

use std::collections::BTreeMap;

use serde_yaml::Value;
use thiserror::Error;

const DELIMITER: &str = "---";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Structured failure from a front-matter parser
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid front-matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front-matter must be a key-value mapping")]
    NotAMapping,
}

/// A markdown document split into front-matter fields and body text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<'a> {
    pub fields: BTreeMap<String, Value>,
    pub body: &'a str,
}

impl Document<'_> {
    /// Get a field as display text
    ///
    /// Strings are returned as-is; numbers and `true` are stringified. Missing,
    /// null, empty, `false` and nested values yield `None` so callers fall back
    /// to derived metadata.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// Get a raw field value, ignoring nulls
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }
}

/// Pluggable front-matter parser
pub trait FrontMatterParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<Document<'a>, FrontMatterError>;
}

/// `---` delimited YAML front-matter, parsed with serde_yaml
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFrontMatter;

impl FrontMatterParser for YamlFrontMatter {
    fn parse<'a>(&self, content: &'a str) -> Result<Document<'a>, FrontMatterError> {
        let Some((yaml, body)) = split_front_matter(content) else {
            return Ok(Document { fields: BTreeMap::new(), body: content });
        };

        Ok(Document { fields: parse_fields(yaml)?, body })
    }
}

/// Split a document into (yaml, body) if it opens with a front-matter block
///
/// A block with no closing delimiter runs to the end of the document and
/// leaves an empty body.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let rest = content.strip_prefix(DELIMITER)?;

    // Opening line must be exactly the delimiter ("----" or "---x" is body text)
    let (opening_tail, after_opening) = match rest.find('\n') {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => (rest, ""),
    };
    if !opening_tail.trim().is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in after_opening.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &after_opening[..offset];
            let body = &after_opening[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    Some((after_opening, ""))
}

fn parse_fields(yaml: &str) -> Result<BTreeMap<String, Value>, FrontMatterError> {
    if yaml.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(BTreeMap::new()),
        Value::Mapping(mapping) => Ok(mapping
            .into_iter()
            .filter_map(|(key, value)| match key {
                Value::String(k) => Some((k, value)),
                Value::Number(n) => Some((n.to_string(), value)),
                Value::Bool(b) => Some((b.to_string(), value)),
                _ => None,
            })
            .collect()),
        _ => Err(FrontMatterError::NotAMapping),
    }
}
