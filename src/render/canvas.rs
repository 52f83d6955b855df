use crate::core::constants::{FALLBACK_MAX_TEXTURE_DIM, FALLBACK_SPLAT_PX};
use crate::core::projection::{project_samples, SampleGrid, Splat};
use crate::core::{FrameParams, Panorama};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Software fallback: plots a coarse grid of image samples on a 2D canvas.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    grid: SampleGrid,
    panorama: Option<Panorama>,
    splats: Vec<Splat>,
}

impl CanvasRenderer {
    pub fn new(document: &web::Document, grid: SampleGrid) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::create_element(document, "canvas")?;
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            grid,
            panorama: None,
            splats: Vec::with_capacity(grid.sample_count()),
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn max_texture_dim(&self) -> u32 {
        FALLBACK_MAX_TEXTURE_DIM
    }

    pub fn resize(&mut self, css_width: f64, css_height: f64) {
        self.canvas.set_width((css_width as u32).max(1));
        self.canvas.set_height((css_height as u32).max(1));
    }

    pub fn set_panorama(&mut self, panorama: Panorama) {
        self.panorama = Some(panorama);
    }

    pub fn render(&mut self, frame: &FrameParams) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(0.0, 0.0, w, h);
        let Some(pano) = &self.panorama else {
            return;
        };
        project_samples(
            pano,
            self.grid,
            frame.azimuth_deg,
            frame.elevation_deg,
            w,
            h,
            &mut self.splats,
        );
        for s in &self.splats {
            let [r, g, b, a] = s.rgba;
            self.ctx
                .set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, a as f64 / 255.0));
            self.ctx
                .fill_rect(s.x, s.y, FALLBACK_SPLAT_PX, FALLBACK_SPLAT_PX);
        }
    }

    pub fn dispose(&mut self) {
        self.panorama = None;
        self.splats = Vec::new();
    }
}
