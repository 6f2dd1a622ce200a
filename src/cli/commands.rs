use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ignore::WalkBuilder;
use serde::Serialize;

use zlanddoc::config::Config;
use zlanddoc::describe::{DescriptionEntry, README_FILENAME};
use zlanddoc::error::Result;
use zlanddoc::scanner::DEPENDENCY_DIR;
use zlanddoc::transform::{FileContents, ReadmeTransform, TargetFile};

#[derive(Parser)]
#[command(name = "zlanddoc")]
#[command(about = "Keeps generated directory and file description sections in README files up to date")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Regenerate every README.md under the current directory
    zlanddoc update

    # Include per-file descriptions from @filedescription doc tags
    zlanddoc update ./docs --file-descriptions

    # Restrict file descriptions to TypeScript sources
    zlanddoc update --file-descriptions --extension .ts --extension .tsx

    # Fail CI when any README is out of date
    zlanddoc check

    # Show what would be generated for one directory
    zlanddoc scan ./docs --format json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (defaults to .zlanddoc.yml in the target directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate description sections in README files
    Update {
        /// README file to update, or directory to update recursively
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Build the "## Files" section from @filedescription tags
        #[arg(long)]
        file_descriptions: bool,

        /// Source extension eligible for file descriptions, leading dot included (repeatable)
        #[arg(long, value_name = "EXT")]
        extension: Vec<String>,
    },

    /// Verify README files are up to date without writing
    Check {
        /// README file or directory to verify
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Build the "## Files" section from @filedescription tags
        #[arg(long)]
        file_descriptions: bool,

        /// Source extension eligible for file descriptions, leading dot included (repeatable)
        #[arg(long, value_name = "EXT")]
        extension: Vec<String>,
    },

    /// Print the entries that would be generated for a directory
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Build file entries from @filedescription tags
        #[arg(long)]
        file_descriptions: bool,

        /// Source extension eligible for file descriptions, leading dot included (repeatable)
        #[arg(long, value_name = "EXT")]
        extension: Vec<String>,
    },
}

pub fn update(
    path: &Path,
    config_path: Option<&Path>,
    extensions: &[String],
    file_descriptions: bool,
) -> Result<()> {
    let (targets, config_root) = targets_and_root(path)?;
    let config = resolve_config(config_path, &config_root, extensions, file_descriptions)?;
    let transform = ReadmeTransform::new(config);

    let mut updated = 0;
    for readme in &targets {
        let (original, regenerated) = regenerate(&transform, readme)?;
        if regenerated != original {
            fs::write(readme, &regenerated)?;
            println!("Updated {}", readme.display());
            updated += 1;
        }
    }

    println!("Updated {} of {} README files", updated, targets.len());
    Ok(())
}

pub fn check(
    path: &Path,
    config_path: Option<&Path>,
    extensions: &[String],
    file_descriptions: bool,
) -> Result<Vec<PathBuf>> {
    let (targets, config_root) = targets_and_root(path)?;
    let config = resolve_config(config_path, &config_root, extensions, file_descriptions)?;
    let transform = ReadmeTransform::new(config);

    let mut stale = Vec::new();
    for readme in &targets {
        let (original, regenerated) = regenerate(&transform, readme)?;
        if regenerated != original {
            println!("Stale {}", readme.display());
            stale.push(readme.clone());
        }
    }

    if stale.is_empty() {
        println!("All {} README files up to date", targets.len());
    } else {
        println!(
            "{} of {} README files need an update",
            stale.len(),
            targets.len()
        );
    }
    Ok(stale)
}

pub fn scan(
    path: &Path,
    config_path: Option<&Path>,
    extensions: &[String],
    file_descriptions: bool,
    format: &str,
) -> Result<()> {
    let config = resolve_config(config_path, path, extensions, file_descriptions)?;
    let transform = ReadmeTransform::new(config);
    let (directories, files) = transform.collect_entries(path)?;

    if format == "json" {
        #[derive(Serialize)]
        struct ScanReport<'a> {
            directories: &'a [DescriptionEntry],
            files: &'a [DescriptionEntry],
        }
        let report = ScanReport {
            directories: &directories,
            files: &files,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if directories.is_empty() && files.is_empty() {
        println!("Nothing to describe in {}", path.display());
        return Ok(());
    }
    print_entries("Directories", &directories);
    print_entries("Files", &files);
    Ok(())
}

fn print_entries(heading: &str, entries: &[DescriptionEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("{}:", heading);
    for entry in entries {
        let link = entry.link.as_deref().unwrap_or("-");
        if entry.description.is_empty() {
            println!("  {} -> {}", entry.text, link);
        } else {
            println!("  {} -> {}: {}", entry.text, link, entry.description);
        }
    }
}

/// Runs one README through the transform, returning (original, regenerated)
fn regenerate(transform: &ReadmeTransform, readme: &Path) -> Result<(Vec<u8>, Vec<u8>)> {
    let original = fs::read(readme)?;
    let output = transform.transform(TargetFile::new(
        readme,
        FileContents::Buffer(original.clone()),
    ))?;
    match output.contents {
        FileContents::Buffer(bytes) => Ok((original, bytes)),
        // Buffer in, buffer out
        _ => unreachable!("buffer input produced non-buffer output"),
    }
}

/// Resolves the target README list and the directory whose config applies
fn targets_and_root(path: &Path) -> Result<(Vec<PathBuf>, PathBuf)> {
    if fs::metadata(path)?.is_file() {
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        return Ok((vec![path.to_path_buf()], root));
    }
    Ok((discover_readmes(path)?, path.to_path_buf()))
}

/// Recursively finds README.md files under `root`, skipping hidden entries,
/// gitignored paths, and dependency folders
fn discover_readmes(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .filter_entry(|entry| {
            !entry
                .file_name()
                .to_string_lossy()
                .starts_with(DEPENDENCY_DIR)
        })
        .build();

    let mut readmes = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if path.is_file() && entry.file_name() == README_FILENAME {
            readmes.push(path.to_path_buf());
        }
    }
    readmes.sort();
    Ok(readmes)
}

fn resolve_config(
    explicit: Option<&Path>,
    root: &Path,
    extensions: &[String],
    file_descriptions: bool,
) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(root)?,
    };
    if !extensions.is_empty() {
        config.file_extensions = extensions.to_vec();
    }
    if file_descriptions {
        config.build_file_descriptions = true;
    }
    Ok(config)
}
