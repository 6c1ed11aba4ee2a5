//! Color block image entity for one scene.
//!
//! The entity owns the scene configuration and a [`BlockImageRenderer`].
//! Lifecycle hooks normalize the configured colors and re-render; readers
//! only ever see the renderer's cached image.

use std::sync::Arc;

use renderer::{BlockImageRenderer, RenderedImage};
use scene_common::time::Timestamp;
use scene_common::{normalize, SceneConfig, SceneResult};
use tracing::{debug, info, warn};

/// Image entity showing a scene's colors as proportional blocks.
pub struct SceneImageEntity {
    config: SceneConfig,
    entry_id: String,
    renderer: BlockImageRenderer,
}

impl SceneImageEntity {
    pub fn new(config: SceneConfig, entry_id: impl Into<String>) -> Self {
        Self {
            config,
            entry_id: entry_id.into(),
            renderer: BlockImageRenderer::new(),
        }
    }

    /// Display name, e.g. `"Sunset Color Block"`.
    pub fn name(&self) -> String {
        format!("{} Color Block", self.config.name)
    }

    /// Unique id derived from the config entry id.
    pub fn unique_id(&self) -> String {
        format!("{}-image", self.entry_id)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Called once when the entity is registered with the host.
    pub fn on_added(&self) -> SceneResult<Arc<RenderedImage>> {
        info!(entity = %self.unique_id(), "Scene image entity added");
        self.regenerate()
    }

    /// Swap in a new configuration and re-render.
    ///
    /// The new configuration is kept even when rendering fails; the cache
    /// keeps serving the last good image until a render succeeds.
    pub fn on_config_changed(&mut self, config: SceneConfig) -> SceneResult<Arc<RenderedImage>> {
        debug!(entity = %self.unique_id(), "Scene configuration changed");
        self.config = config;
        self.regenerate()
    }

    /// Latest cached image, if any.
    pub fn image(&self) -> Option<Arc<RenderedImage>> {
        self.renderer.image()
    }

    pub fn last_updated(&self) -> Timestamp {
        self.renderer.last_updated()
    }

    fn regenerate(&self) -> SceneResult<Arc<RenderedImage>> {
        let colors = normalize(&self.config);
        self.renderer.render(&colors).map_err(|e| {
            warn!(
                entity = %self.unique_id(),
                error = %e,
                "No updated image this cycle"
            );
            e
        })
    }
}
