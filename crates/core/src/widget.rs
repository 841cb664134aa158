use crate::{
    event::{Subscriptions, Topic},
    host::HostContext,
};

/// Every overlay widget the host can drive must implement this trait.
///
/// Widgets own their cached state and only mutate it from inside the
/// callbacks below. The host guarantees serial delivery.
pub trait OverlayWidget: std::fmt::Debug {
    /// Unique identifier, also used as the subscriber key on the bus.
    fn id(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Turn the widget on or off. Idempotent; never leaves more than one
    /// registration per topic on `bus`.
    fn set_enabled(&mut self, enabled: bool, bus: &mut dyn Subscriptions, cx: &mut HostContext<'_>);

    /// Called by the host for every topic the widget is subscribed to.
    fn on_notification(&mut self, topic: Topic, cx: &mut HostContext<'_>);

    /// Release all subscriptions. Called when the widget is torn down.
    fn dispose(&mut self, bus: &mut dyn Subscriptions);
}
