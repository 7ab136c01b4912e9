use std::io;

use concierge_prompts::PromptRegistry;

pub fn run() -> io::Result<()> {
    let registry = PromptRegistry::new();
    for line in render(&registry) {
        println!("{}", line);
    }
    Ok(())
}

/// One row per template: name, version, short fingerprint, description
fn render(registry: &PromptRegistry) -> Vec<String> {
    let width = registry.names().map(str::len).max().unwrap_or(0);
    registry
        .iter()
        .map(|t| {
            format!(
                "{:<width$}  v{}  {}  {}",
                t.name,
                t.version,
                t.short_fingerprint(),
                t.description,
                width = width
            )
        })
        .collect()
}
