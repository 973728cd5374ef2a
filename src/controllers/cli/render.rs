use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::draw_fractal::draw_fractals_rayon::{draw_fractals_rayon, RenderedDrawing};
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::fractals::fractal_kinds::FractalKinds;

/// One fractal to draw and how to draw it. The level is checked against
/// the fractal's own limit, so a request always fits in memory.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    kind: FractalKinds,
    config: RenderConfig,
}

impl RenderRequest {
    pub fn new(kind: FractalKinds, config: RenderConfig) -> Result<Self, RenderConfigError> {
        kind.check_max_level(config.max_level())?;

        Ok(Self { kind, config })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

/// Draws requested fractals and hands them to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    rendered: Vec<(FractalKinds, RenderedDrawing)>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            rendered: Vec::new(),
        }
    }

    /// Draws every request, replacing anything generated before.
    pub fn generate(&mut self, requests: &[RenderRequest]) {
        let jobs: Vec<(FractalKinds, RenderConfig)> = requests
            .iter()
            .map(|request| (request.kind, request.config))
            .collect();

        let start = Instant::now();
        let drawings = draw_fractals_rayon(&jobs);
        let duration = start.elapsed();

        for (request, rendered) in requests.iter().zip(&drawings) {
            info!(
                fractal = request.kind.display_name(),
                max_level = request.config.max_level(),
                primitives = rendered.stats.primitives(),
                terminals = rendered.stats.terminals,
                "rendered"
            );
        }
        info!(?duration, count = drawings.len(), "rendering finished");

        self.rendered = requests
            .iter()
            .map(|request| request.kind)
            .zip(drawings)
            .collect();
    }

    #[must_use]
    pub fn rendered(&self) -> &[(FractalKinds, RenderedDrawing)] {
        &self.rendered
    }

    /// Writes the single generated drawing to `filepath`.
    pub fn write_file(&self, filepath: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let filepath = filepath.as_ref();

        let [(kind, rendered)] = self.rendered.as_slice() else {
            bail!(
                "expected exactly one rendered fractal to write to {}, found {}",
                filepath.display(),
                self.rendered.len()
            );
        };

        self.presenter
            .present(&rendered.drawing, filepath)
            .with_context(|| format!("failed to write {} to {}", kind, filepath.display()))?;
        info!(path = %filepath.display(), "saved");

        Ok(filepath.to_path_buf())
    }

    /// Writes every generated drawing into `dir`, one file per fractal named
    /// after its slug.
    pub fn write_dir(&self, dir: impl AsRef<Path>) -> anyhow::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;

        self.rendered
            .iter()
            .map(|(kind, rendered)| {
                let filepath = dir.join(format!("{}.{}", kind.slug(), self.presenter.extension()));
                self.presenter
                    .present(&rendered.drawing, &filepath)
                    .with_context(|| format!("failed to write {} to {}", kind, filepath.display()))?;
                info!(path = %filepath.display(), "saved");

                Ok(filepath)
            })
            .collect()
    }
}
