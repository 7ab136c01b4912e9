use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;

pub const MANIFEST_FILE: &str = "MANIFEST.md";

/// A template file found in an export directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub name: String,
    pub short_hash: String,
    pub filename: String,
    pub path: PathBuf,
}

impl ExportedFile {
    /// Parse `<NAME>_<HHHHHHHH>.md`, e.g. `ROOT_AGENT_INSTR_V1_1a2b3c4d.md`
    pub fn from_filename(filename: &str, dir: &Path) -> Option<Self> {
        let re = Regex::new(r"^([A-Z][A-Z0-9_]*)_([a-f0-9]{8})\.md$").unwrap();
        let caps = re.captures(filename)?;

        Some(ExportedFile {
            name: caps[1].to_string(),
            short_hash: caps[2].to_string(),
            filename: filename.to_string(),
            path: dir.join(filename),
        })
    }
}

pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

/// List exported template files sorted by template name, then filename.
/// MANIFEST.md and anything else not matching the export pattern is skipped.
pub fn list_exported(dir: &Path) -> io::Result<Vec<ExportedFile>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<ExportedFile> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            ExportedFile::from_filename(&name, dir)
        })
        .collect();

    files.sort_by(|a, b| (&a.name, &a.filename).cmp(&(&b.name, &b.filename)));

    Ok(files)
}
