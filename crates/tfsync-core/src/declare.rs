//! Declaration headers written before importing
//!
//! New provider sources go into a `required_providers` block. When the file
//! already has one the entries are inserted into it, one-line blocks
//! included, otherwise a `terraform` block is appended. Providers given without a namespace get a legacy
//! `provider` block. Each new resource gets an empty `resource` line.

use regex::Regex;
use std::sync::LazyLock;
use tfsync_hcl::scanner::brace_delta;

use crate::diff::Diff;

static REQUIRED_PROVIDERS_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)required_providers\s*\{(.*)$").expect("Invalid required_providers regex")
});

/// Local name for a provider source, its last path segment.
pub fn local_name(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}

fn requirement_line(source: &str, indent: &str) -> String {
    format!("{indent}{} = {{ source = \"{source}\" }}\n", local_name(source))
}

/// `terraform { required_providers { ... } }` for the given sources.
pub fn required_providers_block<'a>(sources: impl IntoIterator<Item = &'a str>) -> String {
    let lines: String = sources
        .into_iter()
        .map(|source| requirement_line(source, "\t\t"))
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    format!("terraform {{\n\trequired_providers {{\n{lines}\t}}\n}}\n\n")
}

/// Legacy `provider <alias> { alias = "<alias>" }` block.
pub fn legacy_provider_block(alias: &str) -> String {
    aliased_provider_block(alias, alias)
}

/// `provider <local> { alias = "<alias>" }` block.
pub fn aliased_provider_block(local_name: &str, alias: &str) -> String {
    format!("provider {local_name} {{\n\talias = \"{alias}\"\n}}\n\n")
}

/// Text of the configuration file after declaring `diff`.
///
/// Existing content is kept verbatim, except that a `required_providers`
/// block opened and filled on one line is spread over several.
pub fn with_declarations(existing: &str, diff: &Diff) -> String {
    let (qualified, legacy): (Vec<&str>, Vec<&str>) = diff
        .new_providers
        .iter()
        .map(String::as_str)
        .partition(|provider| provider.contains('/'));

    let mut out = String::with_capacity(existing.len() + 256);
    let mut inserted = qualified.is_empty();
    for line in existing.split_inclusive('\n') {
        if !inserted
            && let Some(caps) = REQUIRED_PROVIDERS_OPEN.captures(line.trim_end_matches(['\r', '\n']))
        {
            let indent = &caps[1];
            out.push_str(&format!("{indent}required_providers {{\n"));
            for source in &qualified {
                out.push_str(&requirement_line(source, &format!("{indent}\t")));
            }
            push_opening_rest(&mut out, caps[2].trim(), indent);
            inserted = true;
            continue;
        }
        out.push_str(line);
    }

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    if !out.is_empty() && (!inserted || !legacy.is_empty() || !diff.new_resources.is_empty()) {
        out.push('\n');
    }

    if !inserted {
        out.push_str(&required_providers_block(qualified.iter().copied()));
    }
    for alias in &legacy {
        out.push_str(&legacy_provider_block(alias));
    }
    for definition in &diff.new_resources {
        out.push_str(&format!(
            "resource {} {} {{}}\n",
            definition.resource_type, definition.name
        ));
    }

    tracing::debug!(
        providers = diff.new_providers.len(),
        resources = diff.new_resources.len(),
        "Rendered declaration headers"
    );
    out
}

/// Whatever followed `required_providers {` on its line, moved to lines of
/// its own so the inserted entries stay valid.
fn push_opening_rest(out: &mut String, rest: &str, indent: &str) {
    if brace_delta(rest) < 0 {
        let body = rest.strip_suffix('}').unwrap_or(rest).trim_end();
        if !body.is_empty() {
            out.push_str(&format!("{indent}\t{body}\n"));
        }
        out.push_str(&format!("{indent}}}\n"));
    } else if !rest.is_empty() {
        out.push_str(&format!("{indent}\t{rest}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_is_last_segment() {
        assert_eq!(local_name("onelogin/onelogin"), "onelogin");
        assert_eq!(local_name("hashicorp/aws"), "aws");
        assert_eq!(local_name("aws"), "aws");
    }

    #[test]
    fn empty_source_list_renders_nothing() {
        assert_eq!(required_providers_block(Vec::<&str>::new()), "");
    }

    #[test]
    fn aliased_block_names_the_local_provider() {
        assert_eq!(
            aliased_provider_block("aws", "west"),
            "provider aws {\n\talias = \"west\"\n}\n\n"
        );
    }

    #[test]
    fn legacy_block_aliases_itself() {
        assert_eq!(
            legacy_provider_block("onelogin"),
            "provider onelogin {\n\talias = \"onelogin\"\n}\n\n"
        );
    }
}
