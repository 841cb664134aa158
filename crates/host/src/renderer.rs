use hud_core::{IconVisual, Point, Renderer};
use tracing::{debug, info};

/// Headless renderer: logs every draw call and keeps running totals.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    icons_drawn: u64,
    tooltips_drawn: u64,
    last_tooltip: Option<String>,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icons_drawn(&self) -> u64 {
        self.icons_drawn
    }

    pub fn tooltips_drawn(&self) -> u64 {
        self.tooltips_drawn
    }

    pub fn last_tooltip(&self) -> Option<&str> {
        self.last_tooltip.as_deref()
    }
}

impl Renderer for TraceRenderer {
    fn draw_icon(&mut self, icon: &IconVisual) {
        self.icons_drawn += 1;
        debug!(
            texture = icon.texture.0,
            x = icon.screen.x,
            y = icon.screen.y,
            w = icon.screen.w,
            h = icon.screen.h,
            scale = icon.scale,
            "draw icon"
        );
    }

    fn draw_tooltip(&mut self, text: &str, at: Point) {
        self.tooltips_drawn += 1;
        // Only announce text changes; the same tooltip is redrawn every frame.
        if self.last_tooltip.as_deref() != Some(text) {
            info!(x = at.x, y = at.y, "tooltip: {text}");
            self.last_tooltip = Some(text.to_string());
        } else {
            debug!(x = at.x, y = at.y, "tooltip redrawn");
        }
    }
}
