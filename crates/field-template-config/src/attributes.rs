//! Attribute settings.
//!
//! Wrapper attributes are stored either as a map or as an HTML-like
//! attribute string:
//!
//! ```text
//! name="ow-att" data-role='main' lang=en hidden
//! ```
//!
//! Values may be double-quoted, single-quoted or bare. A name with no `=`
//! maps to itself (`hidden="hidden"`). An empty value is kept as-is: it tells
//! the composition engine to remove the attribute.

use crate::types::{ConfigError, ConfigResult, SettingsValue};
use field_template_types::{Attributes, empty_attributes};
use std::iter::Peekable;
use std::str::CharIndices;
use yaml_rust2::Yaml;

/// Parse an attribute string into an ordered mapping.
pub fn parse_attribute_string(input: &str) -> ConfigResult<Attributes> {
    let mut attributes = empty_attributes();
    let mut chars = input.char_indices().peekable();

    loop {
        skip_whitespace(&mut chars);
        let Some(&(start, _)) = chars.peek() else {
            break;
        };

        let name = read_while(input, &mut chars, start, |c| {
            !c.is_whitespace() && c != '='
        });
        if name.is_empty() {
            return Err(invalid(input, format!("missing attribute name at offset {start}")));
        }
        if name.contains(['"', '\'']) {
            return Err(invalid(input, format!("quote in attribute name {name:?}")));
        }

        skip_whitespace(&mut chars);
        let value = if matches!(chars.peek(), Some(&(_, '='))) {
            chars.next();
            skip_whitespace(&mut chars);
            read_value(input, &mut chars)?
        } else {
            name.to_string()
        };

        attributes.insert(name.to_string(), value);
    }

    Ok(attributes)
}

/// Read a wrapper `attributes` setting: a map, an attribute string or null.
///
/// Map entries take scalar text; `true` maps the name to itself and
/// `false`/`null` to the empty (removing) value.
pub fn attributes_from_value(value: &SettingsValue) -> ConfigResult<Attributes> {
    match value {
        SettingsValue::Scalar(Yaml::Null) => Ok(empty_attributes()),
        SettingsValue::Scalar(Yaml::String(s)) => parse_attribute_string(s),
        SettingsValue::Map(entries) => {
            let mut attributes = empty_attributes();
            for (name, entry) in entries {
                let text = match entry {
                    SettingsValue::Scalar(Yaml::Boolean(true)) => name.clone(),
                    SettingsValue::Scalar(Yaml::Boolean(false) | Yaml::Null) => String::new(),
                    other => other.to_text().ok_or_else(|| {
                        invalid(
                            name,
                            format!("attribute value must be a scalar, found {}", other.kind_name()),
                        )
                    })?,
                };
                attributes.insert(name.clone(), text);
            }
            Ok(attributes)
        }
        other => Err(invalid(
            "",
            format!("attributes must be a map or a string, found {}", other.kind_name()),
        )),
    }
}

fn invalid(input: &str, message: String) -> ConfigError {
    ConfigError::InvalidAttributes {
        input: input.to_string(),
        message,
    }
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
        chars.next();
    }
}

fn read_while<'s>(
    input: &'s str,
    chars: &mut Peekable<CharIndices<'_>>,
    start: usize,
    keep: impl Fn(char) -> bool,
) -> &'s str {
    let mut end = start;
    while let Some(&(i, c)) = chars.peek() {
        if !keep(c) {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }
    &input[start..end]
}

fn read_value(input: &str, chars: &mut Peekable<CharIndices<'_>>) -> ConfigResult<String> {
    match chars.peek().copied() {
        Some((start, quote @ ('"' | '\''))) => {
            chars.next();
            let value_start = start + 1;
            let value = read_while(input, chars, value_start, |c| c != quote);
            if chars.next().is_none() {
                return Err(invalid(input, format!("unterminated {quote} at offset {start}")));
            }
            Ok(value.to_string())
        }
        Some((start, _)) => Ok(read_while(input, chars, start, |c| !c.is_whitespace()).to_string()),
        None => Ok(String::new()),
    }
}
