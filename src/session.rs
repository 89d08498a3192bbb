//! Single-owner render state: the current configuration and the surface rendered from it.

use std::path::{Path, PathBuf};

use crate::config::input::apply_control;
use crate::config::model::Configuration;
use crate::encode::{ExportFormat, encode, export_filename, write_atomic};
use crate::foundation::error::BgResult;
use crate::render::backend::{BackendKind, FrameRGBA, RasterBackend, create_backend};
use crate::render::orchestrator::render_with;

/// Encoded export ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name (`bg-<w>x<h>.<ext>`).
    pub filename: String,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Format of `bytes`.
    pub format: ExportFormat,
}

/// Holds the current configuration and re-renders fully after every change.
pub struct Session {
    config: Configuration,
    backend: Box<dyn RasterBackend>,
    surface: FrameRGBA,
}

impl Session {
    /// Create a session on the CPU backend and render `config` immediately.
    pub fn new(config: Configuration) -> BgResult<Self> {
        Self::with_backend(config, create_backend(BackendKind::Cpu))
    }

    /// Create a session on a specific backend and render `config` immediately.
    pub fn with_backend(config: Configuration, mut backend: Box<dyn RasterBackend>) -> BgResult<Self> {
        let surface = render_with(backend.as_mut(), &config)?;
        Ok(Self {
            config,
            backend,
            surface,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Most recently rendered surface.
    pub fn surface(&self) -> &FrameRGBA {
        &self.surface
    }

    /// Re-render with the current configuration.
    pub fn render(&mut self) -> BgResult<&FrameRGBA> {
        self.surface = render_with(self.backend.as_mut(), &self.config)?;
        Ok(&self.surface)
    }

    /// Replace the configuration and re-render.
    ///
    /// On error the previous configuration and surface are kept.
    pub fn set_config(&mut self, config: Configuration) -> BgResult<&FrameRGBA> {
        self.commit(config)
    }

    /// Edit a copy of the configuration and re-render; the edit is kept only if rendering
    /// succeeds.
    pub fn update(&mut self, edit: impl FnOnce(&mut Configuration)) -> BgResult<&FrameRGBA> {
        let mut next = self.config.clone();
        edit(&mut next);
        self.commit(next)
    }

    /// Apply one form control (see [`crate::apply_control`]) and re-render.
    ///
    /// Returns whether the configuration changed. An unchanged configuration still re-renders,
    /// matching the form's behaviour of rendering on every input event. A control whose value
    /// cannot be rendered leaves the session untouched.
    pub fn apply_control(&mut self, key: &str, raw: &str) -> BgResult<bool> {
        let mut next = self.config.clone();
        let changed = apply_control(&mut next, key, raw)?;
        self.commit(next)?;
        Ok(changed)
    }

    fn commit(&mut self, config: Configuration) -> BgResult<&FrameRGBA> {
        self.surface = render_with(self.backend.as_mut(), &config)?;
        self.config = config;
        Ok(&self.surface)
    }

    /// Encode the current surface.
    #[tracing::instrument(skip(self), fields(width = self.surface.width, height = self.surface.height))]
    pub fn export(&self, format: ExportFormat) -> BgResult<Export> {
        let bytes = encode(&self.surface, format)?;
        Ok(Export {
            filename: export_filename(self.surface.width, self.surface.height, format),
            bytes,
            format,
        })
    }

    /// Encode the current surface and save it under `dir` with the conventional file name.
    pub fn export_to_dir(&self, format: ExportFormat, dir: &Path) -> BgResult<PathBuf> {
        let export = self.export(format)?;
        let path = dir.join(&export.filename);
        write_atomic(&path, &export.bytes)?;
        tracing::info!(path = %path.display(), bytes = export.bytes.len(), "exported");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
