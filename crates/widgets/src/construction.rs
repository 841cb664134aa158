use hud_core::{
    HostContext, IconVisual, Localizer, OverlayWidget, PerViewport, Rect, Subscriptions,
    TaskStatus, TextureId, Topic, ViewportId, WorldView,
};
use tracing::{debug, warn};

use crate::status::evaluate;

/// Hammer icon on the builder's sprite sheet, trimmed by a pixel to line up
/// with the other HUD icons.
pub const ICON_SOURCE: Rect = Rect::new(0, 196, 15, 14);

/// On-screen edge length of the icon (15 px tile at 8/3 scale).
pub const ICON_SIZE: i32 = 40;

pub const ICON_SCALE: f32 = 8.0 / 3.0;

/// Shows a builder icon in the HUD icon row while a house upgrade or a
/// building is under way, with the remaining days as hover text.
///
/// Status is recomputed on every `DayStarted`; the icon is rebuilt every
/// frame because the slot allocator may move it.
#[derive(Debug)]
pub struct ConstructionStatusIcon {
    /// Character whose sprite sheet holds the icon.
    builder: String,
    enabled: bool,
    status: TaskStatus,
    sprite_sheet: Option<TextureId>,
    source_region: Option<Rect>,
    /// Icon built by the latest `RenderingHud` of each viewport.
    icons: PerViewport<Option<IconVisual>>,
}

impl ConstructionStatusIcon {
    pub const ID: &'static str = "construction-status";

    pub fn new(builder: impl Into<String>) -> Self {
        Self {
            builder: builder.into(),
            enabled: false,
            status: TaskStatus::idle(),
            sprite_sheet: None,
            source_region: None,
            icons: PerViewport::new(),
        }
    }

    pub fn status(&self) -> &TaskStatus {
        &self.status
    }

    pub fn sprite_sheet(&self) -> Option<TextureId> {
        self.sprite_sheet
    }

    /// Icon drawn in the latest frame of `viewport`, if one was drawn.
    pub fn icon(&self, viewport: ViewportId) -> Option<&IconVisual> {
        self.icons.get(viewport).and_then(Option::as_ref)
    }

    /// Recompute the cached status and, while something is being built,
    /// look the sprite sheet up again.
    pub fn refresh(&mut self, world: &dyn WorldView, i18n: &dyn Localizer) {
        self.status = evaluate(world, i18n);
        debug!(
            in_progress = self.status.in_progress(),
            days = self.status.remaining_days(),
            "construction status refreshed"
        );

        if self.status.in_progress() {
            self.resolve_sprite_sheet(world);
        }
    }

    /// A failed lookup keeps whatever handle an earlier lookup found.
    fn resolve_sprite_sheet(&mut self, world: &dyn WorldView) {
        match world.character_sprite_sheet(&self.builder) {
            Some(texture) => self.sprite_sheet = Some(texture),
            None => warn!(
                builder = %self.builder,
                have_previous = self.sprite_sheet.is_some(),
                "{}: could not find the builder's sprite sheet",
                Self::ID
            ),
        }
        self.source_region = Some(ICON_SOURCE);
    }

    /// Draw the icon into the next free HUD slot.
    pub fn on_pre_render(&mut self, cx: &mut HostContext<'_>) {
        let slot = self.icons.get_mut(cx.viewport);
        *slot = None;

        if cx.world.is_cinematic_active() || !self.status.in_progress() {
            return;
        }
        let (Some(source), Some(texture)) = (self.source_region, self.sprite_sheet) else {
            return;
        };

        let position = cx.slots.next_icon_position();
        let icon = IconVisual {
            texture,
            source,
            screen: Rect::at(position, ICON_SIZE, ICON_SIZE),
            scale: ICON_SCALE,
        };
        cx.renderer.draw_icon(&icon);
        *slot = Some(icon);
    }

    /// Show the status text while the pointer rests on this frame's icon.
    pub fn on_post_render(&mut self, cx: &mut HostContext<'_>) {
        if !self.status.in_progress() || self.status.message().is_empty() {
            return;
        }
        let pointer = cx.world.pointer_position();
        let hovered = self
            .icon(cx.viewport)
            .is_some_and(|icon| icon.screen.contains(pointer));

        if hovered {
            cx.renderer.draw_tooltip(self.status.message(), pointer);
        }
    }
}

impl OverlayWidget for ConstructionStatusIcon {
    fn id(&self) -> &str {
        Self::ID
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(
        &mut self,
        enabled: bool,
        bus: &mut dyn Subscriptions,
        cx: &mut HostContext<'_>,
    ) {
        for topic in Topic::ALL {
            bus.unsubscribe(topic, Self::ID);
        }

        if enabled {
            self.refresh(cx.world, cx.i18n);
            for topic in Topic::ALL {
                bus.subscribe(topic, Self::ID);
            }
        }

        if self.enabled != enabled {
            debug!(enabled, "{} toggled", Self::ID);
        }
        self.enabled = enabled;
    }

    fn on_notification(&mut self, topic: Topic, cx: &mut HostContext<'_>) {
        match topic {
            Topic::DayStarted   => self.refresh(cx.world, cx.i18n),
            Topic::RenderingHud => self.on_pre_render(cx),
            Topic::RenderedHud  => self.on_post_render(cx),
        }
    }

    fn dispose(&mut self, bus: &mut dyn Subscriptions) {
        for topic in Topic::ALL {
            bus.unsubscribe(topic, Self::ID);
        }
        self.enabled = false;
    }
}
