use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use thiserror::Error;
use tracing::debug;

use concierge_prompts::registry::lint::{check, Finding};
use concierge_prompts::utils::fs::list_exported;
use concierge_prompts::utils::hash::{sha256_hex, sha256_short};
use concierge_prompts::PromptRegistry;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VERIFY_FAILED: i32 = 1;
const EXIT_DIR_NOT_FOUND: i32 = 2;

#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    pub dir: Option<PathBuf>,
}

/// Findings for one template
#[derive(Debug)]
pub struct TemplateReport {
    pub name: &'static str,
    pub findings: Vec<Finding>,
}

impl TemplateReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Export directory not found: {0}")]
    DirNotFound(String),
    #[error("Missing export for {name} (expected {expected})")]
    MissingExport { name: String, expected: String },
    #[error("Stale export {filename}: no registered template has this fingerprint")]
    StaleExport { filename: String },
    #[error("Fingerprint mismatch at {filename}\nContent hashes to: {content_hash}\nRegistry has:      {expected}")]
    FingerprintMismatch {
        filename: String,
        expected: String,
        content_hash: String,
    },
    #[error("Template check failed for {name}: {finding}")]
    CheckFailed { name: String, finding: Finding },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub fn run(options: VerifyOptions) -> io::Result<()> {
    let registry = PromptRegistry::new();

    let reports = check_templates(&registry);
    for report in &reports {
        if report.findings.is_empty() {
            println!("✓ {}", report.name);
            continue;
        }
        for finding in &report.findings {
            debug!(template = report.name, error = finding.is_error(), "{}", finding);
            if finding.is_error() {
                eprintln!("✗ {}: {}", report.name, finding);
            } else {
                println!("! {}: {}", report.name, finding);
            }
        }
        if !report.has_errors() {
            println!("✓ {} (with warnings)", report.name);
        }
    }

    if let Err(e) = ensure_checks_pass(&reports) {
        eprintln!();
        eprintln!("{}", e);
        process::exit(EXIT_VERIFY_FAILED);
    }

    if let Some(dir) = options.dir {
        match verify_export_dir(&registry, &dir) {
            Ok(count) => {
                println!("✓ Export verified: {} files in {}", count, dir.display());
            }
            Err(VerifyError::DirNotFound(path)) => {
                eprintln!("Export directory not found: {}", path);
                process::exit(EXIT_DIR_NOT_FOUND);
            }
            Err(e) => {
                eprintln!("✗ {}", e);
                eprintln!();
                eprintln!("The export is out of date or has been modified. Re-run `concierge export --force`.");
                process::exit(EXIT_VERIFY_FAILED);
            }
        }
    }

    process::exit(EXIT_SUCCESS);
}

/// Run the template checks over every registered template
pub fn check_templates(registry: &PromptRegistry) -> Vec<TemplateReport> {
    registry
        .iter()
        .map(|t| TemplateReport {
            name: t.name,
            findings: check(t.body),
        })
        .collect()
}

/// First error-level finding across `reports`, as a `CheckFailed`.
/// Warnings never fail verification.
pub fn ensure_checks_pass(reports: &[TemplateReport]) -> Result<(), VerifyError> {
    for report in reports {
        if let Some(finding) = report.findings.iter().find(|f| f.is_error()) {
            return Err(VerifyError::CheckFailed {
                name: report.name.to_string(),
                finding: finding.clone(),
            });
        }
    }
    Ok(())
}

/// Check that `dir` holds exactly the current registry's templates.
/// Returns the number of verified files.
pub fn verify_export_dir(registry: &PromptRegistry, dir: &Path) -> Result<usize, VerifyError> {
    if !dir.is_dir() {
        return Err(VerifyError::DirNotFound(dir.display().to_string()));
    }

    let files = list_exported(dir)?;

    for template in registry.iter() {
        let expected = template.export_filename();
        if !files.iter().any(|f| f.filename == expected) {
            return Err(VerifyError::MissingExport {
                name: template.name.to_string(),
                expected,
            });
        }
    }

    for file in &files {
        let template = match registry.template(&file.name) {
            Ok(t) if t.short_fingerprint() == file.short_hash => t,
            _ => {
                return Err(VerifyError::StaleExport {
                    filename: file.filename.clone(),
                })
            }
        };

        // Raw bytes, so edits that break UTF-8 still show up as a mismatch
        let content = fs::read(&file.path)?;
        let content_hash = sha256_hex(&content);
        if content_hash != template.fingerprint() {
            return Err(VerifyError::FingerprintMismatch {
                filename: file.filename.clone(),
                expected: sha256_short(template.body),
                content_hash: sha256_short(&content),
            });
        }
    }

    Ok(files.len())
}
