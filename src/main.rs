use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

const LONG_ABOUT: &str = "\
Concierge serves the instruction templates for the travel concierge agent.

Each template is a fixed, named block of text compiled into the binary. The
agent runtime looks templates up by name; this tool lists them, prints them
byte for byte, checks them for unresolved placeholders and conflicting
directives, and exports them with SHA-256 fingerprints for review.";

const AFTER_HELP: &str = "\
EXAMPLES:
    List the registered templates:
        $ concierge list

    Print the current root agent instructions:
        $ concierge show ROOT_AGENT_INSTR

    Check every template:
        $ concierge verify

    Export templates with a manifest, then verify the export:
        $ concierge export --dir prompts
        $ concierge verify --dir prompts";

#[derive(Parser)]
#[command(name = "concierge")]
#[command(version)]
#[command(about = "Instruction templates for the travel concierge agent")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Log lookups and file writes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered templates
    #[command(after_help = "\
OUTPUT:
    ROOT_AGENT_INSTR     v2  d37da424  Travel concierge root agent (current)
    ROOT_AGENT_INSTR_V1  v1  060cd8af  Travel concierge root agent using google_search
    ROOT_AGENT_INSTR_V2  v2  d37da424  Travel concierge root agent delegating to inspiration_agent")]
    List,

    /// Print a template body exactly as registered
    #[command(after_help = "\
EXAMPLES:
    $ concierge show ROOT_AGENT_INSTR
    $ concierge show ROOT_AGENT_INSTR_V1 > v1.md")]
    Show {
        /// Template name, e.g. ROOT_AGENT_INSTR
        name: String,
    },

    /// Check templates and, optionally, an export directory
    #[command(
        long_about = "\
Check templates and, optionally, an export directory.

Every registered template is checked for:
  • An empty body (error)
  • Unresolved placeholders such as {} or {destination} (error)
  • Tool references in a template that also says it cannot use any tool (warning)

With --dir, the export directory must hold one file per registered template
whose content hashes to the registry fingerprint.",
        after_help = "\
EXIT CODES:
    0  All checks passed
    1  A template check or export check failed
    2  Export directory not found"
    )]
    Verify {
        /// Export directory to verify against the registry
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Write templates and a MANIFEST.md to a directory
    Export {
        /// Target directory
        #[arg(long, default_value = commands::export::DEFAULT_EXPORT_DIR)]
        dir: PathBuf,

        /// Overwrite an existing export
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::List => commands::list::run().map_err(Into::into),
        Commands::Show { name } => commands::show::run(&name).map_err(Into::into),
        Commands::Verify { dir } => {
            commands::verify::run(commands::verify::VerifyOptions { dir }).map_err(Into::into)
        }
        Commands::Export { dir, force } => {
            commands::export::run(commands::export::ExportOptions { dir, force }).map_err(Into::into)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
