use std::fmt;

use regex::Regex;

/// Something worth reporting about a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Body is blank after trimming
    Empty,
    /// Unresolved substitution token such as `{}` or `{destination}`
    Placeholder(String),
    /// Body names tools but also says it cannot use any tool
    ToolContradiction { tools: Vec<String> },
}

impl Finding {
    pub fn is_error(&self) -> bool {
        !matches!(self, Finding::ToolContradiction { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Empty => write!(f, "template body is empty"),
            Finding::Placeholder(token) => write!(f, "unresolved placeholder {}", token),
            Finding::ToolContradiction { tools } => write!(
                f,
                "references {} but says it cannot use any tool",
                tools.join(", ")
            ),
        }
    }
}

/// Run every check over `body`, in a stable order.
pub fn check(body: &str) -> Vec<Finding> {
    if body.trim().is_empty() {
        return vec![Finding::Empty];
    }

    let mut findings: Vec<Finding> = find_placeholders(body)
        .into_iter()
        .map(Finding::Placeholder)
        .collect();

    let tools = find_tool_references(body);
    if !tools.is_empty() && forbids_tools(body) {
        findings.push(Finding::ToolContradiction { tools });
    }

    findings
}

/// Collect `{...}` tokens. Covers `{}`, `{name}`, `{:?}`, `{name:>5}`,
/// `{name!r}` and `{{ name }}`; a double-brace token is reported once, as written.
pub fn find_placeholders(body: &str) -> Vec<String> {
    let re = Regex::new(
        r"\{\{ *[A-Za-z0-9_.]* *\}\}|\{[A-Za-z0-9_.\[\]]*(?:![rsa])?(?::[^{}\s]*)?\}",
    )
    .unwrap();
    re.find_iter(body).map(|m| m.as_str().to_string()).collect()
}

/// Identifiers that look like tools: `inspiration_agent`, `google_search`, ...
pub fn find_tool_references(body: &str) -> Vec<String> {
    let re = Regex::new(r"\b[a-z][a-z0-9]*(?:_[a-z0-9]+)*_(?:agent|search|tool)\b").unwrap();
    let mut tools: Vec<String> = Vec::new();
    for m in re.find_iter(body) {
        let name = m.as_str().to_string();
        if !tools.contains(&name) {
            tools.push(name);
        }
    }
    tools
}

fn forbids_tools(body: &str) -> bool {
    let re = Regex::new(r"(?i)\b(?:cannot|can't|must not|may not) use any tools?\b").unwrap();
    re.is_match(body)
}
