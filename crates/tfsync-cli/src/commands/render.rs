//! The render command

use std::path::{Path, PathBuf};

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use tfsync_fs::io;

use super::Context;
use crate::error::{CliError, Result};

/// Re-emit the configuration file from the state snapshot.
///
/// With `show_diff` the file is left alone and a unified diff against the
/// rendered text is printed instead.
pub fn run_render(
    ctx: &Context,
    output: Option<&Path>,
    state: Option<&Path>,
    show_diff: bool,
) -> Result<()> {
    let output = match (output, &ctx.config.output) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => {
            return Err(CliError::user(
                "No output file: pass --output or set [sync] output in tfsync.toml",
            ));
        }
    };
    let state = state
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&ctx.config.state_file));

    let engine = ctx.engine(&output, &state);
    let rendered = engine.render()?;

    if !show_diff {
        engine.write_rendered(&rendered)?;
        println!(
            "{} Rendered {}",
            "OK".green().bold(),
            engine.output().as_str().cyan()
        );
        return Ok(());
    }

    let current = io::read_text_or_empty(engine.output())?;
    if current == rendered {
        println!("{} {} is up to date.", "OK".green().bold(), engine.output().as_str().cyan());
        return Ok(());
    }

    let path = engine.output().as_str();
    print!("{}", unified_diff(&current, &rendered, path));
    Ok(())
}

/// Unified diff of `current` against `rendered`, colored by change.
fn unified_diff(current: &str, rendered: &str, path: &str) -> String {
    let diff = TextDiff::from_lines(current, rendered);
    let mut out = format!("{}\n{}\n", format!("--- {path}").red(), format!("+++ {path} (rendered)").green());
    for group in diff.grouped_ops(3) {
        for op in group {
            for change in diff.iter_changes(&op) {
                let line = match change.tag() {
                    ChangeTag::Delete => format!("-{change}").red().to_string(),
                    ChangeTag::Insert => format!("+{change}").green().to_string(),
                    ChangeTag::Equal => format!(" {change}"),
                };
                out.push_str(&line);
                if change.missing_newline() {
                    out.push('\n');
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_marks_changed_lines() {
        colored::control::set_override(false);
        let out = unified_diff("a\nb\n", "a\nc\n", "main.tf");
        assert!(out.starts_with("--- main.tf\n+++ main.tf (rendered)\n"));
        assert!(out.contains("-b\n"));
        assert!(out.contains("+c\n"));
        assert!(out.contains(" a\n"));
    }
}
