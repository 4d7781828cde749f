//! The list-types command

use colored::Colorize;
use tfsync_importables::ResourceKind;

use crate::error::Result;

pub fn run_list_types() -> Result<()> {
    println!("{}", "Supported resource types:".bold());
    for kind in ResourceKind::ALL {
        let aliases = if kind.aliases().is_empty() {
            String::new()
        } else {
            format!(" (alias: {})", kind.aliases().join(", "))
        };
        println!(
            "   {} {}{} {}",
            "-".dimmed(),
            kind.tag().cyan(),
            aliases,
            kind.provider().dimmed()
        );
    }
    Ok(())
}
