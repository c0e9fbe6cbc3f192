//! `.publishing.env` loading and `${env:VAR}` interpolation of `Publishing.toml` text.

use std::collections::BTreeMap;
use std::path::Path;

const ENV_PREFIX: &str = "${env:";

/// Loads a `.publishing.env` file (shell-style `KEY=value` format).
///
/// `.publishing.env` keeps release values and secrets (version overrides,
/// signing passphrases, repository URLs) out of `Publishing.toml`. Values are
/// available via `${env:VAR}` interpolation.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content =
        std::fs::read_to_string(path).map_err(pubcfg_util::errors::PublishingError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }
    tracing::debug!("Loaded {} entries from {}", map.len(), path.display());
    Ok(map)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Where a `${env:VAR}` reference sits in the TOML text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Bare,
    Comment,
    Basic,
    Literal,
    MultiBasic,
    MultiLiteral,
}

/// Interpolate `${env:VAR}` references in `Publishing.toml` text.
///
/// Looks up values first from the provided `env_overrides` map (populated
/// from `.publishing.env`), then falls back to process environment variables.
/// Unknown keys resolve to the empty string.
///
/// Inside `"..."` and `"""..."""` strings the value is escaped, so
/// backslashes and quotes survive parsing. Outside strings it is inserted
/// verbatim, which lets `sign-jars = ${env:SIGN}` produce a boolean.
/// Literal `'...'` strings take the value as is. References in comments are
/// left untouched. Substituted values are not scanned again.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut context = Context::Bare;
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if context != Context::Comment && rest.starts_with(ENV_PREFIX) {
            if let Some(end) = rest.find('}') {
                let value = lookup(&rest[ENV_PREFIX.len()..end], env_overrides);
                match context {
                    Context::Basic | Context::MultiBasic => result.push_str(&escape_basic(&value)),
                    _ => result.push_str(&value),
                }
                pos += end + 1;
                continue;
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        let mut step = c.len_utf8();
        context = match context {
            Context::Bare if rest.starts_with("\"\"\"") => {
                step = 3;
                Context::MultiBasic
            }
            Context::Bare if rest.starts_with("'''") => {
                step = 3;
                Context::MultiLiteral
            }
            Context::Bare => match c {
                '"' => Context::Basic,
                '\'' => Context::Literal,
                '#' => Context::Comment,
                _ => Context::Bare,
            },
            Context::Comment if c == '\n' => Context::Bare,
            Context::Basic | Context::MultiBasic if c == '\\' => {
                step += rest[1..].chars().next().map_or(0, char::len_utf8);
                context
            }
            Context::Basic if c == '"' || c == '\n' => Context::Bare,
            Context::Literal if c == '\'' || c == '\n' => Context::Bare,
            Context::MultiBasic if rest.starts_with("\"\"\"") => {
                step = 3;
                Context::Bare
            }
            Context::MultiLiteral if rest.starts_with("'''") => {
                step = 3;
                Context::Bare
            }
            other => other,
        };
        result.push_str(&rest[..step]);
        pos += step;
    }
    result
}

fn lookup(key: &str, env_overrides: &BTreeMap<String, String>) -> String {
    env_overrides
        .get(key)
        .cloned()
        .or_else(|| std::env::var(key).ok())
        .unwrap_or_else(|| {
            tracing::warn!("${{env:{key}}} is not defined; substituting an empty string");
            String::new()
        })
}

/// Escape `value` for use inside a TOML basic string (without the quotes).
pub fn escape_basic(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `value` as a quoted TOML basic string.
pub fn quote_basic(value: &str) -> String {
    format!("\"{}\"", escape_basic(value))
}
