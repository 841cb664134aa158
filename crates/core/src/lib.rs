pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod state;
pub mod viewport;
pub mod widget;

pub use error::{HudError, Result};
pub use event::{Subscriptions, Topic};
pub use geometry::{Point, Rect};
pub use host::{HostContext, IconSlots, Localizer, Renderer, WorldView};
pub use state::{ConstructionSite, IconVisual, TaskStatus, TextureId};
pub use viewport::{PerViewport, ViewportId};
pub use widget::OverlayWidget;
