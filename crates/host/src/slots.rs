use hud_config::IconRowConfig;
use hud_core::{IconSlots, Point};

/// Lays HUD icons out in a single row growing to the left.
///
/// Each claim moves the next slot one `spacing` further left; the host resets
/// the row at the start of every frame.
#[derive(Debug, Clone)]
pub struct IconRow {
    layout: IconRowConfig,
    claimed: i32,
}

impl IconRow {
    pub fn new(layout: IconRowConfig) -> Self {
        Self { layout, claimed: 0 }
    }

    /// Swap in a new layout.  Takes effect from the next claim.
    pub fn set_layout(&mut self, layout: IconRowConfig) {
        self.layout = layout;
    }

    /// Icons placed since the last reset.
    pub fn claimed(&self) -> i32 {
        self.claimed
    }
}

impl IconSlots for IconRow {
    fn next_icon_position(&mut self) -> Point {
        let x = self.layout.origin_x - self.layout.spacing * self.claimed;
        self.claimed += 1;
        Point::new(x, self.layout.origin_y)
    }

    fn reset(&mut self) {
        self.claimed = 0;
    }
}
