mod commands;
mod config;
mod error;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::drop::DropTarget;
use config::CliConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "modsum", version, about = "Edit and format go.sum checksum manifests")]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite a sum file in canonical form.
    Fmt {
        /// Sum file (defaults to the configured default_file).
        file: Option<PathBuf>,
        /// Exit non-zero instead of writing if the file is not canonical.
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// Check that a sum file is well-formed.
    Verify {
        /// Sum file (defaults to the configured default_file).
        file: Option<PathBuf>,
    },
    /// List the entries of a sum file.
    List {
        /// Sum file (defaults to the configured default_file).
        file: Option<PathBuf>,
    },
    /// Pin a hash for a module version.
    Add {
        /// Module path.
        path: String,
        /// Module version; a trailing /go.mod implies --go-mod.
        version: String,
        /// Hash string, e.g. h1:base64=.
        hash: String,
        /// The hash is of the module's go.mod file.
        #[arg(long, default_value_t = false)]
        go_mod: bool,
        /// Sum file (created if missing).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Remove hashes of a module version (the zip hash by default).
    Drop {
        /// Module path.
        path: String,
        /// Module version; a trailing /go.mod implies --go-mod.
        version: String,
        /// Remove the go.mod hash instead of the zip hash.
        #[arg(long, default_value_t = false, conflicts_with = "all")]
        go_mod: bool,
        /// Remove both the zip and go.mod hashes.
        #[arg(long, default_value_t = false)]
        all: bool,
        /// Sum file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("MODSUM_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::load_default() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    let resolve = |file: Option<PathBuf>| file.unwrap_or_else(|| config.default_file.clone());
    let json = cli.json;

    let result = match cli.command {
        Commands::Fmt { file, check } => commands::fmt::run(&resolve(file), check, json),
        Commands::Verify { file } => commands::verify::run(&resolve(file), json),
        Commands::List { file } => commands::list::run(&resolve(file), json),
        Commands::Add {
            path,
            version,
            hash,
            go_mod,
            file,
        } => commands::add::run(&resolve(file), &path, &version, &hash, go_mod, json),
        Commands::Drop {
            path,
            version,
            go_mod,
            all,
            file,
        } => {
            let target = if all {
                DropTarget::All
            } else if go_mod {
                DropTarget::GoMod
            } else {
                DropTarget::Zip
            };
            commands::drop::run(&resolve(file), &path, &version, target, json)
        }
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
