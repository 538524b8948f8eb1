use clap::{Parser, Subcommand};
use structgen::commands::{backends, generate};
use structgen::config::StructgenConfig;
use tracing_subscriber::EnvFilter;

/// Generate struct, class and interface declarations from JSON schemas.
#[derive(Parser)]
#[command(name = "structgen", version, about)]
struct Cli {
    /// Enable debug logging on stderr (overrides STRUCTGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate type declarations for one backend
    Generate(generate::GenerateArgs),
    /// List available backends
    Backends(backends::BackendsArgs),
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function; this only changes the
    // signal disposition back to the default (terminate on broken pipe).
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("STRUCTGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Command::Generate(args) => {
            let root = std::env::current_dir().unwrap_or_else(|_| ".".into());
            let config = StructgenConfig::load(&root);
            generate::run(args, &config.generate)
        }
        Command::Backends(args) => backends::run(args),
    };
    std::process::exit(code);
}
