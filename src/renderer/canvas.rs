//! `CanvasRenderingContext2d` surface (wasm only)

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{BlendMode, Circle, Surface};
use crate::error::FxError;

/// A 2D canvas and its context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap the canvas with element id `id`
    pub fn from_id(document: &web_sys::Document, id: &str) -> Result<Self, FxError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| FxError::MissingElement(id.to_string()))?
            .dyn_into()
            .map_err(|_| FxError::WrongElementType(id.to_string()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(FxError::from)?
            .ok_or_else(|| FxError::ContextUnavailable(id.to_string()))?
            .dyn_into()
            .map_err(|_| FxError::ContextUnavailable(id.to_string()))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(w), f64::from(h));
    }

    fn set_blend(&mut self, mode: BlendMode) {
        let _ = self.ctx.set_global_composite_operation(mode.as_str());
    }

    fn fill_circle(&mut self, circle: &Circle) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(f64::from(circle.alpha));
        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(circle.center.x),
            f64::from(circle.center.y),
            f64::from(circle.radius),
            0.0,
            TAU,
        );
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(&circle.color.css()));
        if let Some(glow) = circle.glow {
            ctx.set_shadow_color(glow.color);
            ctx.set_shadow_blur(f64::from(glow.blur));
        }
        ctx.fill();
        ctx.restore();
    }
}
