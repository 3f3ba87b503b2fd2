//! Headless host: replays a recorded event script and prints the export.
//!
//! ```sh
//! micboard session.json          # numpy literal
//! micboard session.json --json   # JSON array
//! ```

use anyhow::{Context, Result, bail};
use micboard::editor::{Editor, EditorEvent};
use micboard::export::ExportFormat;
use micboard::settings::EditorSettings;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Args {
    script: PathBuf,
    format: ExportFormat,
}

fn parse_args() -> Result<Args> {
    let mut script = None;
    let mut format = ExportFormat::Numpy;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => format = ExportFormat::Json,
            "--numpy" => format = ExportFormat::Numpy,
            flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
            path => script = Some(PathBuf::from(path)),
        }
    }

    let Some(script) = script else {
        bail!("usage: micboard <script.json> [--json|--numpy]");
    };
    Ok(Args { script, format })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("micboard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let events: VecDeque<EditorEvent> = serde_json::from_str(&content)
        .with_context(|| format!("parsing event script {}", args.script.display()))?;

    let mut editor = Editor::new(EditorSettings::load());
    let mut source = events;
    let effects = editor.run(&mut source);
    tracing::info!(
        effects = effects.len(),
        microphones = editor.microphones().len(),
        "Replay finished"
    );

    println!("{}", editor.export(args.format)?);
    Ok(())
}
