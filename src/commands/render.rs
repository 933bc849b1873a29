//! Render subcommand handler

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use ansihtml::cli::RenderArgs;
use ansihtml::{render_page, Pipeline};

use super::load_config;

/// Convert input lines to HTML and write them out.
#[cfg(not(tarpaulin_include))]
pub fn handle_render(args: &RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let pipeline = Pipeline::new(args.render_config(config.render));
    debug!(options = ?pipeline.options(), "render options");

    let input = read_input(args.file.as_deref())?;
    let lines: Vec<&str> = input.lines().collect();
    let rendered = pipeline.render_lines(&lines);

    let output = if args.standalone {
        let mut page = config.page;
        if let Some(title) = &args.title {
            page.title = title.clone();
        }
        render_page(&rendered, &page)
    } else {
        let mut fragment = rendered.join("\n");
        if !rendered.is_empty() {
            fragment.push('\n');
        }
        fragment
    };

    write_output(args.output.as_deref(), &output)
}

/// Read all input, decoding invalid UTF-8 lossily.
fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            if atty::is(atty::Stream::Stdin) {
                eprintln!("Reading from terminal, press Ctrl-D to finish.");
            }
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    debug!(bytes = bytes.len(), "read input");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_output(file: Option<&Path>, output: &str) -> Result<()> {
    match file {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
