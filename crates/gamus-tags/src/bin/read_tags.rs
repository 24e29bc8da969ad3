use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gamus_tags::{FormatGate, LoftyReader, TagExtractor, TagsConfig};

/// Lee los tags de uno o varios archivos y los imprime normalizados como JSON.
#[derive(Debug, Parser)]
#[command(name = "read_tags", version)]
struct Args {
  /// Archivos de audio a leer.
  #[arg(required = true)]
  paths: Vec<PathBuf>,

  /// JSON indentado.
  #[arg(long)]
  pretty: bool,

  /// Ignorar gamus.toml y usar las extensiones por defecto.
  #[arg(long)]
  no_config: bool,
}

fn main() {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

  let args = Args::parse();

  let cfg = if args.no_config {
    TagsConfig::default()
  } else {
    TagsConfig::load().unwrap_or_else(|e| {
      tracing::warn!(error = %e, "could not load [tags] config, using defaults");
      TagsConfig::default()
    })
  };

  let extractor = TagExtractor::new(LoftyReader::new(FormatGate::from_config(&cfg)));
  let mut failures = 0usize;

  for path in &args.paths {
    if !extractor.can_read(path) {
      tracing::info!(file = %path.display(), "skipping unsupported file");
      continue;
    }

    let info = match extractor.extract_sync(path) {
      Ok(info) => info,
      Err(e) => {
        tracing::error!(file = %path.display(), error = %e, "could not read tags");
        failures += 1;
        continue;
      }
    };

    let json = if args.pretty { serde_json::to_string_pretty(&info) } else { serde_json::to_string(&info) };

    match json {
      Ok(json) => println!("{json}"),
      Err(e) => {
        tracing::error!(file = %path.display(), error = %e, "could not encode record");
        failures += 1;
      }
    }
  }

  if failures > 0 {
    std::process::exit(1);
  }
}
