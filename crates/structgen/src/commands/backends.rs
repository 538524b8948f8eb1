//! Backends command - list registered code generation backends.

use clap::Args;
use serde::Serialize;
use structgen_typegen::backends;

/// Backends command arguments
#[derive(Args, Debug)]
pub struct BackendsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BackendInfo {
    name: &'static str,
    language: &'static str,
    extension: &'static str,
    visibility: bool,
}

fn collect() -> Vec<BackendInfo> {
    backends()
        .into_iter()
        .map(|b| BackendInfo {
            name: b.name(),
            language: b.language(),
            extension: b.extension(),
            visibility: b.supports_visibility(),
        })
        .collect()
}

/// Run the backends command
pub fn run(args: BackendsArgs) -> i32 {
    let infos = collect();

    if args.json {
        match serde_json::to_string_pretty(&infos) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    for info in &infos {
        println!(
            "{:<12} {:<12} .{:<5} {}",
            info.name,
            info.language,
            info.extension,
            if info.visibility { "visibility" } else { "-" }
        );
    }
    0
}
