use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Opaque handle to a texture owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u64);

/// A building that is currently being built or upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionSite {
    /// Days of construction work still to go.
    pub days_of_construction_left: i32,
    /// Days until the finished building can actually be used.
    pub days_until_available: i32,
}

/// Derived status of the tracked multi-day task.
///
/// `message` is non-empty exactly when `in_progress` is set; the only way to
/// build a value is through [`TaskStatus::idle`] and [`TaskStatus::active`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStatus {
    in_progress: bool,
    message: String,
    remaining_days: u32,
}

impl TaskStatus {
    /// Nothing is being built.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A task is running. An empty `message` yields an idle status.
    pub fn active(message: impl Into<String>, remaining_days: u32) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self::idle();
        }
        Self {
            in_progress: true,
            message,
            remaining_days,
        }
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn remaining_days(&self) -> u32 {
        self.remaining_days
    }
}

/// Everything needed to draw the status icon for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconVisual {
    pub texture: TextureId,
    /// Region of the sprite sheet, in sheet pixels.
    pub source: Rect,
    /// Where the icon lands on screen.
    pub screen: Rect,
    pub scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_empty_message() {
        let s = TaskStatus::idle();
        assert!(!s.in_progress());
        assert!(s.message().is_empty());
        assert_eq!(s.remaining_days(), 0);
    }

    #[test]
    fn active_with_empty_message_is_idle() {
        assert_eq!(TaskStatus::active("", 3), TaskStatus::idle());
    }

    #[test]
    fn active_keeps_message_and_days() {
        let s = TaskStatus::active("2 days left", 2);
        assert!(s.in_progress());
        assert_eq!(s.message(), "2 days left");
        assert_eq!(s.remaining_days(), 2);
    }
}
