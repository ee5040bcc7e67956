//! Namestyle CLI
//!
//! Command-line interface for inspecting editorconfig naming-style rules

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use namestyle_core::{Language, Result, init_tracing};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "namestyle")]
#[command(about = "Parse, order, and resolve editorconfig naming-style rules")]
#[command(version = namestyle_core::VERSION)]
#[command(
    long_about = "Namestyle reads dotnet_naming_* entries from an already-merged\n\
editorconfig-style file and assembles them into an ordered naming rule set.\n\
\n\
Examples:\n  \
namestyle rules merged.editorconfig             # List rules in applied order\n  \
namestyle rules merged.editorconfig -f json     # Machine-readable output\n  \
namestyle resolve merged.editorconfig --kind field --accessibility private --modifiers const"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List naming rules in their final applied order
    Rules {
        /// Path to the merged configuration file
        #[arg(help = "Path to the merged editorconfig-style file")]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Keyword spelling for serialized accessibility and modifier lists
        #[arg(short, long, value_enum, default_value_t = LanguageArg::Csharp)]
        language: LanguageArg,
    },

    /// Resolve a described symbol against the ordered rule set
    Resolve {
        /// Path to the merged configuration file
        #[arg(help = "Path to the merged editorconfig-style file")]
        config: PathBuf,

        /// Symbol kind keyword (e.g. field, method, interface)
        #[arg(long)]
        kind: String,

        /// Accessibility keyword (e.g. public, private)
        #[arg(long, default_value = "public")]
        accessibility: String,

        /// Comma-separated declared modifiers (e.g. "static, readonly")
        #[arg(long)]
        modifiers: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for programmatic consumption
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LanguageArg {
    /// C# keyword spellings
    Csharp,
    /// Visual Basic keyword spellings
    Vb,
}

impl From<LanguageArg> for Language {
    fn from(language: LanguageArg) -> Self {
        match language {
            LanguageArg::Csharp => Language::CSharp,
            LanguageArg::Vb => Language::VisualBasic,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize colored output
    if !cli.no_color && std::env::var("NO_COLOR").is_err() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    match run_command(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("namestyle failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rules {
            config,
            format,
            language,
        } => commands::rules_command(&config, format, language.into()),
        Commands::Resolve {
            config,
            kind,
            accessibility,
            modifiers,
        } => commands::resolve_command(&config, &kind, &accessibility, modifiers.as_deref()),
    }
}
