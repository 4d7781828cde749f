//! Discovery of already-declared providers and resources
//!
//! The scanner is line based. It recognizes:
//! ```text
//! resource <type> <name> {
//! provider <alias> {
//! required_providers {
//!     <local> = { source = "<namespace>/<name>" }
//!     <local> = {
//!         source = "<namespace>/<name>"
//!     }
//! }
//! required_providers { <local> = { source = "<namespace>/<name>" } }
//! ```
//! Labels may be double-quoted. Anything else is ignored.

use std::collections::HashMap;
use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static RESOURCE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*resource\s+"?([A-Za-z0-9_\-]+)"?\s+"?([A-Za-z0-9_\-]+)"?\s*\{"#)
        .expect("Invalid resource header regex")
});

static PROVIDER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*provider\s+"?([A-Za-z0-9_\-]+)"?\s*\{"#)
        .expect("Invalid provider header regex")
});

static REQUIRED_PROVIDERS_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*required_providers\s*\{").expect("Invalid required_providers regex")
});

static INLINE_REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"?[A-Za-z0-9_\-]+"?\s*=\s*\{\s*source\s*=\s*"([^"]+)""#)
        .expect("Invalid inline requirement regex")
});

// Unanchored form for entries sharing a line with `required_providers {`.
static REQUIREMENT_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""?[A-Za-z0-9_\-]+"?\s*=\s*\{\s*source\s*=\s*"([^"]+)""#)
        .expect("Invalid requirement entry regex")
});

static SOURCE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*source\s*=\s*"([^"]+)""#).expect("Invalid source attribute regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Provider,
    Resource,
}

/// Declaration counts keyed by kind, then by provider source/alias or
/// `type.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionIndex {
    counts: HashMap<DefinitionKind, HashMap<String, usize>>,
}

impl DefinitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: DefinitionKind, key: impl Into<String>) {
        *self
            .counts
            .entry(kind)
            .or_default()
            .entry(key.into())
            .or_insert(0) += 1;
    }

    pub fn count(&self, kind: DefinitionKind, key: &str) -> usize {
        self.counts
            .get(&kind)
            .and_then(|keys| keys.get(key))
            .copied()
            .unwrap_or(0)
    }

    pub fn has_provider(&self, provider: &str) -> bool {
        self.count(DefinitionKind::Provider, provider) > 0
    }

    pub fn has_resource(&self, resource_type: &str, name: &str) -> bool {
        self.count(DefinitionKind::Resource, &format!("{resource_type}.{name}")) > 0
    }

    /// Number of distinct keys recorded for `kind`.
    pub fn distinct(&self, kind: DefinitionKind) -> usize {
        self.counts.get(&kind).map_or(0, HashMap::len)
    }
}

/// Strip a registry host from a provider source, `host/ns/name` -> `ns/name`.
pub fn provider_source_key(source: &str) -> &str {
    let segments: Vec<&str> = source.split('/').collect();
    if segments.len() > 2 {
        let host_len = segments[..segments.len() - 2]
            .iter()
            .map(|s| s.len() + 1)
            .sum::<usize>();
        &source[host_len..]
    } else {
        source
    }
}

/// Scan configuration text and count what it declares.
///
/// Bytes that are not valid UTF-8 are decoded lossily.
pub fn scan<R: BufRead>(mut reader: R) -> Result<DefinitionIndex> {
    let mut index = DefinitionIndex::new();
    // Brace depth relative to the enclosing `required_providers` block.
    let mut requirement_depth: Option<i64> = None;
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::Read {
                line: line_no + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);

        if let Some(depth) = requirement_depth {
            let source = match depth {
                1 => INLINE_REQUIREMENT.captures(&line),
                2 => SOURCE_ATTRIBUTE.captures(&line),
                _ => None,
            };
            if let Some(caps) = source {
                let key = provider_source_key(&caps[1]);
                tracing::debug!(line = line_no, provider = key, "Found provider requirement");
                index.record(DefinitionKind::Provider, key);
            }

            let depth = depth + brace_delta(&line);
            requirement_depth = (depth > 0).then_some(depth);
            continue;
        }

        if let Some(open) = REQUIRED_PROVIDERS_OPEN.find(&line) {
            for caps in REQUIREMENT_ENTRY.captures_iter(&line[open.end()..]) {
                let key = provider_source_key(&caps[1]);
                tracing::debug!(line = line_no, provider = key, "Found provider requirement");
                index.record(DefinitionKind::Provider, key);
            }
            let depth = brace_delta(&line);
            requirement_depth = (depth > 0).then_some(depth);
        } else if let Some(caps) = RESOURCE_HEADER.captures(&line) {
            let key = format!("{}.{}", &caps[1], &caps[2]);
            tracing::debug!(line = line_no, resource = %key, "Found resource declaration");
            index.record(DefinitionKind::Resource, key);
        } else if let Some(caps) = PROVIDER_HEADER.captures(&line) {
            tracing::debug!(line = line_no, provider = &caps[1], "Found legacy provider block");
            index.record(DefinitionKind::Provider, &caps[1]);
        }
    }

    tracing::debug!(
        lines = line_no,
        providers = index.distinct(DefinitionKind::Provider),
        resources = index.distinct(DefinitionKind::Resource),
        "Scanned configuration text"
    );
    Ok(index)
}

/// Net change in brace depth over a line, ignoring braces inside strings.
pub fn brace_delta(line: &str) -> i64 {
    let mut delta = 0;
    let mut in_string = false;
    let mut escaped = false;
    for c in line.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => delta += 1,
            '}' => delta -= 1,
            '#' => break,
            _ => {}
        }
    }
    delta
}
