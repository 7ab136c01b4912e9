use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Path to the built concierge binary
fn concierge_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_concierge"))
}

fn run_concierge(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(concierge_bin())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute concierge command")
}

fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// LIST / SHOW
// =============================================================================

#[test]
fn test_list_shows_all_templates() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["list"]);

    assert!(output.status.success(), "list should succeed: {}", stderr_str(&output));
    let stdout = stdout_str(&output);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("ROOT_AGENT_INSTR "));
    assert!(stdout.contains("ROOT_AGENT_INSTR_V1"));
    assert!(stdout.contains("ROOT_AGENT_INSTR_V2"));
}

#[test]
fn test_list_help_matches_real_fingerprints() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["list", "--help"]);

    assert!(output.status.success());
    let help = stdout_str(&output);
    for template in concierge_prompts::PromptRegistry::new().iter() {
        let fingerprint = template.short_fingerprint();
        let version = format!("v{}", template.version);
        let listed = help.lines().any(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            cols.len() > 3
                && cols[0] == template.name
                && cols[1] == version
                && cols[2] == fingerprint
        });
        assert!(listed, "help is missing {} {}", template.name, fingerprint);
    }
}

#[test]
fn test_show_prints_exact_body() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["show", "ROOT_AGENT_INSTR"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_str(&output),
        concierge_prompts::templates::ROOT_AGENT_INSTR
    );
}

#[test]
fn test_show_unknown_template_fails() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["show", "NOT_A_REAL_TEMPLATE"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).is_empty(), "no partial text on failure");
    assert!(stderr_str(&output).contains("Template not found: NOT_A_REAL_TEMPLATE"));
}

#[test]
fn test_no_args_prints_help() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(stderr_str(&output).contains("Usage"));
}

// =============================================================================
// VERIFY
// =============================================================================

#[test]
fn test_verify_templates_passes_with_warning() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["verify"]);

    assert!(output.status.success(), "verify should pass: {}", stderr_str(&output));
    let stdout = stdout_str(&output);
    assert!(stdout.contains("✓ ROOT_AGENT_INSTR_V1"));
    assert!(stdout.contains("inspiration_agent but says it cannot use any tool"));
}

#[test]
fn test_verify_reports_warning_once() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["verify"]);

    assert!(output.status.success());
    let warning = "inspiration_agent but says it cannot use any tool";
    // ROOT_AGENT_INSTR and ROOT_AGENT_INSTR_V2 share the body
    assert_eq!(stdout_str(&output).matches(warning).count(), 2);
    assert!(!stderr_str(&output).contains(warning));
}

#[test]
fn test_verify_missing_dir_exit_code() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["verify", "--dir", "missing"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("Export directory not found"));
}

// =============================================================================
// EXPORT
// =============================================================================

#[test]
fn test_export_then_verify() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["export"]);
    assert!(output.status.success(), "export should succeed: {}", stderr_str(&output));
    assert!(stdout_str(&output).contains("Exported 3 templates"));
    assert!(dir.path().join("prompts/MANIFEST.md").exists());

    let output = run_concierge(dir.path(), &["verify", "--dir", "prompts"]);
    assert!(output.status.success(), "verify should pass: {}", stderr_str(&output));
    assert!(stdout_str(&output).contains("✓ Export verified: 3 files"));
}

#[test]
fn test_verify_detects_edited_export() {
    let dir = tempdir().unwrap();
    assert!(run_concierge(dir.path(), &["export", "--dir", "out"]).status.success());

    let exported = fs::read_dir(dir.path().join("out"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().starts_with("ROOT_AGENT_INSTR_V1_"))
                .unwrap_or(false)
        })
        .unwrap();
    fs::write(&exported, "- You are a budget travel agent\n").unwrap();

    let output = run_concierge(dir.path(), &["verify", "--dir", "out"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("Fingerprint mismatch"));
}

#[test]
fn test_export_twice_requires_force() {
    let dir = tempdir().unwrap();
    assert!(run_concierge(dir.path(), &["export"]).status.success());

    let output = run_concierge(dir.path(), &["export"]);
    assert!(!output.status.success());
    assert!(stderr_str(&output).contains("--force"));

    let output = run_concierge(dir.path(), &["export", "--force"]);
    assert!(output.status.success());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();

    let output = run_concierge(dir.path(), &["--verbose", "show", "ROOT_AGENT_INSTR_V1"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_str(&output),
        concierge_prompts::templates::ROOT_AGENT_INSTR_V1
    );
    assert!(stderr_str(&output).contains("template lookup"));
}
