use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use concierge_prompts::utils::fs::{list_exported, manifest_path};
use concierge_prompts::PromptRegistry;

pub const DEFAULT_EXPORT_DIR: &str = "prompts";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub force: bool,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0} already contains an export. Use --force to overwrite.")]
    AlreadyExported(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Files written by one export, in registry order
#[derive(Debug)]
pub struct ExportResult {
    pub files: Vec<String>,
    pub exported_at: DateTime<Utc>,
}

pub fn run(options: ExportOptions) -> Result<(), ExportError> {
    let result = export_to_dir(&PromptRegistry::new(), &options.dir, options.force, Utc::now())?;

    println!(
        "Exported {} templates to {}",
        result.files.len(),
        options.dir.display()
    );
    for file in &result.files {
        println!("  {}", file);
    }
    println!("  MANIFEST.md");
    println!("Exported at: {}", result.exported_at.format("%Y-%m-%dT%H:%M:%SZ"));

    Ok(())
}

pub fn export_to_dir(
    registry: &PromptRegistry,
    dir: &Path,
    force: bool,
    now: DateTime<Utc>,
) -> Result<ExportResult, ExportError> {
    let manifest = manifest_path(dir);
    if manifest.exists() && !force {
        return Err(ExportError::AlreadyExported(dir.display().to_string()));
    }

    fs::create_dir_all(dir)?;

    // Drop files from an earlier export so stale fingerprints don't linger
    for old in list_exported(dir)? {
        debug!(file = %old.filename, "removing previous export");
        fs::remove_file(&old.path)?;
    }

    let mut files = Vec::with_capacity(registry.len());
    for template in registry.iter() {
        let filename = template.export_filename();
        fs::write(dir.join(&filename), template.body)?;
        debug!(template = template.name, file = %filename, "exported template");
        files.push(filename);
    }

    fs::write(&manifest, render_manifest(registry, now))?;

    Ok(ExportResult {
        files,
        exported_at: now,
    })
}

fn render_manifest(registry: &PromptRegistry, now: DateTime<Utc>) -> String {
    let mut content = format!(
        "# Prompt Templates\n\nExported: {}\n\n| Template | Version | SHA-256 |\n|----------|---------|---------|\n",
        now.format("%Y-%m-%dT%H:%M:%SZ")
    );
    for template in registry.iter() {
        content.push_str(&format!(
            "| {} | {} | {} |\n",
            template.name,
            template.version,
            template.fingerprint()
        ));
    }
    content
}
