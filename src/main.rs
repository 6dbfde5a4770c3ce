use anyhow::{Context, Result};
use docpage::{Config, Document, MarkdownRenderer, Theme, pages};
use std::fs;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Log filter when neither `--verbose` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    let renderer = MarkdownRenderer::with_options(config.render_options());

    if config.fragment {
        let document = Document::load(&config.input).context("Failed to load document")?;
        let html = renderer
            .render(document.content())
            .context("Failed to render document")?;
        print!("{}", html);
        return Ok(());
    }

    let page = pages::docs::generate(&config.input, &renderer, config.title.as_deref())
        .with_context(|| format!("Failed to generate page for {}", config.input.display()))?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    docpage::write_css_assets(&assets_dir, &Theme::default(), &config.code_theme)?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, page.into_string())
        .with_context(|| format!("Failed to write page to {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        warn!("Failed to open {} in browser: {}", index_path.display(), e);
    }

    Ok(())
}
