use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use geometric_fractals::{
    parse_max_level, CliRenderController, Colour, FractalKinds, Palette, RenderConfig,
    RenderRequest, SvgFilePresenter, DEFAULT_MAX_LEVEL,
};
use tracing::Level;

/// Draws self-similar fractals by recursive subdivision and saves them as SVG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// cantor-set, fractal-tree, koch-line, koch-snowflake or sierpinski-carpet
    #[arg(short, long, default_value = "cantor-set")]
    fractal: FractalKinds,

    /// Number of subdivision steps before the terminal rule draws.
    #[arg(short = 'l', long, default_value_t = DEFAULT_MAX_LEVEL, value_parser = parse_max_level)]
    max_level: u32,

    /// Colour of level 0, as `r,g,b`. Defaults to the fractal's own palette.
    #[arg(long)]
    first_colour: Option<Colour>,

    /// Colour of the deepest level, as `r,g,b`.
    #[arg(long)]
    last_colour: Option<Colour>,

    /// Render every fractal in parallel; `--output` is then a directory.
    #[arg(long)]
    all: bool,

    /// Output file, or directory with `--all`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn palette_for(&self, kind: FractalKinds) -> Palette {
        let defaults = kind.default_palette();

        Palette::new(
            self.first_colour.unwrap_or(defaults.first),
            self.last_colour.unwrap_or(defaults.last),
        )
    }

    fn requests(&self) -> anyhow::Result<Vec<RenderRequest>> {
        let kinds: &[FractalKinds] = if self.all {
            FractalKinds::ALL
        } else {
            std::slice::from_ref(&self.fractal)
        };

        kinds
            .iter()
            .map(|&kind| {
                RenderConfig::new(self.max_level, self.palette_for(kind))
                    .and_then(|config| RenderRequest::new(kind, config))
                    .with_context(|| format!("invalid settings for {}", kind))
            })
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let requests = args.requests()?;
    let mut controller = CliRenderController::new(SvgFilePresenter::new());
    controller.generate(&requests);

    if args.all {
        let dir = args.output.clone().unwrap_or_else(|| PathBuf::from("output"));
        controller.write_dir(dir)?;
    } else {
        let file = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("output/{}.svg", args.fractal.slug())));
        if let Some(parent) = file.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        controller.write_file(file)?;
    }

    Ok(())
}
