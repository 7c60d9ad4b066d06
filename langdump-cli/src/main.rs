use std::process::ExitCode;

use clap::{Parser, Subcommand};
use langdump_cli::{run_export_command, run_languages_command, run_view_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export every declared language's strings to one tab-separated file.
    #[command(visible_alias = "output")]
    Export {
        /// Game install folder containing a `languages` folder
        game_dir: String,
        /// The LanguageTypes.xml file declaring the languages
        language_types: String,
        /// The file to write the table to
        output: String,
        /// Do not log a diagnostic for every missing translation
        #[arg(long)]
        no_missing_report: bool,
    },

    /// List the languages an export would contain, in column order.
    Languages {
        /// The LanguageTypes.xml file declaring the languages
        language_types: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// View the entries of one language file.
    View {
        /// A `language.<id>.bin` file
        input: String,
        /// Display full value without truncation
        #[arg(long)]
        full: bool,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("langdump=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let result = match args.commands {
        Commands::Export {
            game_dir,
            language_types,
            output,
            no_missing_report,
        } => run_export_command(&game_dir, &language_types, &output, !no_missing_report),
        Commands::Languages {
            language_types,
            json,
        } => run_languages_command(&language_types, json),
        Commands::View { input, full } => run_view_command(&input, full),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
