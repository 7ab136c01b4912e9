use std::io::{self, Write};

use concierge_prompts::PromptRegistry;

pub fn run(name: &str) -> io::Result<()> {
    let body = PromptRegistry::new()
        .get(name)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?;

    // Exact bytes, no trailing newline added
    let mut stdout = io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.flush()
}
