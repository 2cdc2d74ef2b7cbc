use colored::{ColoredString, Colorize};
use supports_color::Stream;

use crate::filesystem::{ChangeDir, DirEntry, FsError, NodeKind};
use crate::script::Command;
use crate::shell::Outcome;

/// Turns colour off when stdout cannot display it.
pub fn configure_colors() {
    if supports_color::on(Stream::Stdout).is_none() {
        colored::control::set_override(false);
    }
}

pub fn print_outcome(outcome: &Outcome) {
    println!("{}", format_outcome(outcome));
}

pub fn print_error(command: &Command, error: &FsError) {
    println!(
        "{} {}: {}",
        "error".red().bold(),
        command.to_string().dimmed(),
        error
    );
}

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created { path, kind } => {
            let label = match kind {
                NodeKind::File => "File",
                NodeKind::Directory => "Directory",
            };
            format!("{} {} created", label, path.bold())
        }
        Outcome::Listed { path, entries } => {
            let names: Vec<String> = entries.iter().map(|e| entry_name(e).to_string()).collect();
            format!("Contents of {}: [{}]", path.bold(), names.join(", "))
        }
        Outcome::ChangedDir(ChangeDir::AlreadyAtRoot) => {
            "Already at the root directory".to_string()
        }
        Outcome::ChangedDir(ChangeDir::Stayed { name }) => {
            format!("Already in directory {}", name.blue().bold())
        }
        Outcome::ChangedDir(ChangeDir::Changed { path }) => {
            format!("Current directory: {}", path.blue().bold())
        }
        Outcome::Moved { from, to } => format!("Moved {} to {}", from.bold(), to.bold()),
        Outcome::Written { path, bytes } => format!("Wrote {} bytes to {}", bytes, path.bold()),
        Outcome::Read { path, contents } => format!("Data in {}: {}", path.bold(), contents),
        Outcome::Removed { path } => format!("Deleted {}", path.bold()),
        Outcome::Stat { path, metadata } => format!(
            "{}: {}, {} bytes, {} children",
            path.bold(),
            metadata.kind,
            metadata.size,
            metadata.children
        ),
        Outcome::WorkingDir { path } => path.blue().bold().to_string(),
    }
}

fn entry_name(entry: &DirEntry) -> ColoredString {
    match entry.kind {
        NodeKind::Directory => entry.name.blue().bold(),
        NodeKind::File => entry.name.normal(),
    }
}
