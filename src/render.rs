mod canvas;
mod gpu;
mod helpers;
pub mod texture;

use crate::constants::{CANVAS_CSS, CLASS_CANVAS};
use crate::core::capability::{Capabilities, RendererKind};
use crate::core::error::ViewerError;
use crate::core::projection::SampleGrid;
use crate::core::{FrameParams, Panorama, ViewerConfig};
use crate::dom;
pub use canvas::CanvasRenderer;
pub use gpu::GpuRenderer;
use web_sys as web;

/// The drawing strategy of one viewer, chosen once at construction.
pub enum Renderer {
    Accelerated(GpuRenderer),
    Fallback(CanvasRenderer),
}

impl Renderer {
    /// Each attempt gets its own canvas: a canvas that handed out a GPU
    /// context can never produce a 2D one afterwards.
    pub async fn create(
        document: &web::Document,
        caps: &Capabilities,
        config: &ViewerConfig,
    ) -> Result<Self, ViewerError> {
        if caps.renderer_kind() == RendererKind::Accelerated {
            match Self::create_accelerated(document, caps).await {
                Ok(r) => return Ok(r),
                Err(e) => log::warn!("[render] accelerated init failed, using fallback: {:?}", e),
            }
        }
        let grid = SampleGrid::new(config.fallback_rings, config.fallback_segments);
        let r = CanvasRenderer::new(document, grid).map_err(|e| ViewerError::Init(e.to_string()))?;
        prepare_canvas(r.canvas());
        log::info!("[render] fallback canvas strategy");
        Ok(Renderer::Fallback(r))
    }

    async fn create_accelerated(
        document: &web::Document,
        caps: &Capabilities,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::create_element(document, "canvas")?;
        prepare_canvas(&canvas);
        let r = GpuRenderer::new(canvas, caps).await?;
        log::info!("[render] accelerated strategy");
        Ok(Renderer::Accelerated(r))
    }

    pub fn kind(&self) -> RendererKind {
        match self {
            Renderer::Accelerated(_) => RendererKind::Accelerated,
            Renderer::Fallback(_) => RendererKind::Fallback,
        }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        match self {
            Renderer::Accelerated(r) => r.canvas(),
            Renderer::Fallback(r) => r.canvas(),
        }
    }

    pub fn max_texture_dim(&self) -> u32 {
        match self {
            Renderer::Accelerated(r) => r.max_texture_dim(),
            Renderer::Fallback(r) => r.max_texture_dim(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        match self {
            Renderer::Accelerated(r) => r.resize(width, height),
            Renderer::Fallback(r) => r.resize(width, height),
        }
    }

    pub fn set_panorama(&mut self, panorama: Panorama) {
        match self {
            Renderer::Accelerated(r) => r.set_panorama(&panorama),
            Renderer::Fallback(r) => r.set_panorama(panorama),
        }
    }

    pub fn render(&mut self, frame: &FrameParams) {
        match self {
            Renderer::Accelerated(r) => {
                if let Err(e) = r.render(frame) {
                    log::error!("render error: {:?}", e);
                }
            }
            Renderer::Fallback(r) => r.render(frame),
        }
    }

    /// Releases GPU/2D resources and detaches the canvas from the page.
    pub fn dispose(&mut self) {
        match self {
            Renderer::Accelerated(r) => r.dispose(),
            Renderer::Fallback(r) => r.dispose(),
        }
        self.canvas().remove();
    }
}

fn prepare_canvas(canvas: &web::HtmlCanvasElement) {
    canvas.set_class_name(CLASS_CANVAS);
    _ = canvas.set_attribute("style", CANVAS_CSS);
}
