use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{Args, Settings, STDIN};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::from_args(&args)?;
    tracing::info!(delimiter = %settings.delimiter, inputs = args.files.len(), "splitting");

    let inputs = args.inputs()?;

    // Each input gets its own splitter; only the rendering runs in parallel.
    let rendered = inputs
        .par_iter()
        .map(|path| split_input(path, &settings))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    let with_headers = rendered.len() > 1;
    for (idx, (path, buffer)) in inputs.iter().zip(rendered).enumerate() {
        if with_headers {
            if idx > 0 {
                writeln!(stdout)?;
            }
            writeln!(stdout, "==> {} <==", path.display())?;
        }
        stdout.write_all(&buffer)?;
    }
    stdout.flush()?;

    Ok(())
}

fn split_input(path: &Path, settings: &Settings) -> anyhow::Result<Vec<u8>> {
    let text = read_input(path)?;
    let mut buffer = Vec::new();
    let segments = render::render(&text, settings, &mut buffer)
        .with_context(|| format!("splitting {}", path.display()))?;
    tracing::debug!(path = %path.display(), segments, "split input");
    Ok(buffer)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new(STDIN) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading standard input")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
