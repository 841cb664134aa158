use std::fmt;

/// Host notifications an overlay can subscribe to.
///
/// Delivery order within a simulated day:
/// `DayStarted` → (`RenderingHud` → `RenderedHud`) for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    /// A new simulated day began. World counters are already updated.
    DayStarted,
    /// Fired right before the HUD draw pass of a frame.
    RenderingHud,
    /// Fired right after the HUD draw pass of the same frame.
    RenderedHud,
}

impl Topic {
    /// Every topic, in delivery order.
    pub const ALL: [Topic; 3] = [Topic::DayStarted, Topic::RenderingHud, Topic::RenderedHud];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::DayStarted   => "day-started",
            Topic::RenderingHud => "rendering-hud",
            Topic::RenderedHud  => "rendered-hud",
        };
        f.write_str(name)
    }
}

/// Observer registration owned by the host.
///
/// Behaves like a multicast delegate: subscribing twice registers twice and
/// unsubscribing removes one registration (a no-op when none exists).
/// Widgets keep themselves to one live registration per topic by always
/// unsubscribing before they subscribe.
pub trait Subscriptions {
    fn subscribe(&mut self, topic: Topic, subscriber: &str);

    fn unsubscribe(&mut self, topic: Topic, subscriber: &str);

    /// Number of live registrations `subscriber` holds for `topic`.
    fn count(&self, topic: Topic, subscriber: &str) -> usize;
}
