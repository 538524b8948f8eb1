//! Generate command - type declarations from a JSON schema.

use crate::config::GenerateConfig;
use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};
use structgen_typegen::{
    Backend, CompileOptions, SchemaNode, backend_for_extension, backend_names, compile,
    get_backend, parse_json_schema_str,
};

/// Generate command arguments
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON schema file, use - for stdin
    pub schema: PathBuf,

    /// Target backend: c, cpp, java, go, rust, typescript, javascript
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mark types and fields public/exported where the language supports it
    #[arg(short, long)]
    pub public: bool,

    /// Package name (for Go)
    #[arg(long)]
    pub package: Option<String>,

    /// Root type title, used when the schema has none
    #[arg(long)]
    pub name: Option<String>,
}

/// Run the generate command
pub fn run(args: GenerateArgs, config: &GenerateConfig) -> i32 {
    match generate(args, config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn generate(args: GenerateArgs, config: &GenerateConfig) -> Result<()> {
    let backend = select_backend(&args, config)?;
    let schema = read_schema(&args.schema, args.name.as_deref())?;

    let options = CompileOptions {
        public_visibility: args.public || config.public.unwrap_or(false),
        package: args
            .package
            .or_else(|| config.package.clone())
            .unwrap_or_else(|| CompileOptions::default().package),
    };
    tracing::debug!(backend = backend.name(), public = options.public_visibility, "generate");

    let code = compile(&schema, backend, &options)
        .with_context(|| format!("failed to compile schema for {}", backend.name()))?;

    if let Some(path) = args.output {
        std::fs::write(&path, &code)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Generated {}", path.display());
    } else {
        print!("{}", code);
    }
    Ok(())
}

/// `--lang`, then the output file's extension, then the configured default.
fn select_backend(args: &GenerateArgs, config: &GenerateConfig) -> Result<&'static dyn Backend> {
    if let Some(name) = &args.lang {
        return lookup(name);
    }

    let by_extension = args
        .output
        .as_deref()
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .and_then(backend_for_extension);
    if let Some(backend) = by_extension {
        return Ok(backend);
    }

    match &config.backend {
        Some(name) => lookup(name),
        None => bail!(
            "no backend selected; pass --lang or set generate.backend (available: {})",
            backend_names().join(", ")
        ),
    }
}

fn lookup(name: &str) -> Result<&'static dyn Backend> {
    get_backend(name).ok_or_else(|| {
        anyhow!(
            "unknown backend: {} (available: {})",
            name,
            backend_names().join(", ")
        )
    })
}

fn read_schema(input: &Path, name: Option<&str>) -> Result<SchemaNode> {
    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    let schema = parse_json_schema_str(&content).context("failed to parse JSON schema")?;
    Ok(match name {
        Some(name) if schema.title().is_none() => schema.with_title(name),
        _ => schema,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lang: Option<&str>, output: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            schema: PathBuf::from("-"),
            lang: lang.map(String::from),
            output: output.map(PathBuf::from),
            public: false,
            package: None,
            name: None,
        }
    }

    #[test]
    fn lang_flag_wins() {
        let config = GenerateConfig {
            backend: Some("go".into()),
            ..Default::default()
        };
        let backend = select_backend(&args(Some("java"), Some("out.ts")), &config).unwrap();
        assert_eq!(backend.name(), "java");
    }

    #[test]
    fn extension_before_config() {
        let config = GenerateConfig {
            backend: Some("go".into()),
            ..Default::default()
        };
        let backend = select_backend(&args(None, Some("types.hpp")), &config).unwrap();
        assert_eq!(backend.name(), "cpp");

        let backend = select_backend(&args(None, Some("types.txt")), &config).unwrap();
        assert_eq!(backend.name(), "go");
    }

    #[test]
    fn missing_and_unknown_backends() {
        let err = select_backend(&args(None, None), &GenerateConfig::default()).err().unwrap();
        assert!(err.to_string().starts_with("no backend selected"));

        let err = select_backend(&args(Some("cobol"), None), &GenerateConfig::default())
            .err().unwrap();
        assert!(err.to_string().contains("unknown backend: cobol"));
    }
}
