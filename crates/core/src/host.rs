//! Collaborators the host provides to overlay widgets.
//!
//! Widgets never reach for global state: every query and draw call goes
//! through one of these traits, bundled per callback in [`HostContext`].

use std::fmt;

use crate::{
    geometry::Point,
    state::{ConstructionSite, IconVisual, TextureId},
    viewport::ViewportId,
};

/// Read-only view of the simulated world.
pub trait WorldView {
    /// Days until the house upgrade finishes; `<= 0` when none is pending.
    fn days_until_house_upgrade(&self) -> i32;

    /// The single building under construction, if any.
    fn building_under_construction(&self) -> Option<ConstructionSite>;

    /// `true` while a full-screen cutscene owns the screen.
    fn is_cinematic_active(&self) -> bool;

    /// Current pointer position in screen space.
    fn pointer_position(&self) -> Point;

    /// Sprite sheet of the named character, if the character and its sprite exist.
    fn character_sprite_sheet(&self, name: &str) -> Option<TextureId>;
}

/// Fire-and-forget draw primitives.
pub trait Renderer {
    fn draw_icon(&mut self, icon: &IconVisual);

    /// Draw `text` as a hover tooltip anchored at `at`, using the host's default text style.
    fn draw_tooltip(&mut self, text: &str, at: Point);
}

/// Shared allocator handing out non-overlapping icon positions.
///
/// Every call to [`IconSlots::next_icon_position`] claims a new slot; the host
/// calls [`IconSlots::reset`] at the start of each frame.
pub trait IconSlots {
    fn next_icon_position(&mut self) -> Point;

    fn reset(&mut self);
}

/// Template-based string lookup.
///
/// Missing keys degrade to a fallback string; lookup never fails.
pub trait Localizer {
    fn format(&self, key: &str, args: &[&dyn fmt::Display]) -> String;
}

/// Everything a widget may touch while handling one notification.
pub struct HostContext<'a> {
    pub world:    &'a dyn WorldView,
    pub i18n:     &'a dyn Localizer,
    pub renderer: &'a mut dyn Renderer,
    pub slots:    &'a mut dyn IconSlots,
    /// Viewport the notification is delivered for.
    pub viewport: ViewportId,
}
