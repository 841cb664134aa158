use std::collections::BTreeMap;

use hud_core::{Subscriptions, Topic};

/// Subscription lists keyed by topic.
///
/// Mirrors multicast-delegate semantics: a subscriber registered twice is
/// notified twice, and each unsubscribe removes one registration.
#[derive(Debug, Default)]
pub struct EventHub {
    topics: BTreeMap<Topic, Vec<String>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribers of `topic` in registration order.
    pub fn subscribers(&self, topic: Topic) -> Vec<String> {
        self.topics.get(&topic).cloned().unwrap_or_default()
    }

    /// Live registrations across all topics.
    pub fn len(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Subscriptions for EventHub {
    fn subscribe(&mut self, topic: Topic, subscriber: &str) {
        self.topics
            .entry(topic)
            .or_default()
            .push(subscriber.to_string());
    }

    fn unsubscribe(&mut self, topic: Topic, subscriber: &str) {
        let Some(list) = self.topics.get_mut(&topic) else {
            return;
        };
        if let Some(pos) = list.iter().position(|s| s == subscriber) {
            list.remove(pos);
        }
    }

    fn count(&self, topic: Topic, subscriber: &str) -> usize {
        self.topics
            .get(&topic)
            .map_or(0, |list| list.iter().filter(|s| *s == subscriber).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_subscriptions_are_kept() {
        let mut hub = EventHub::new();
        hub.subscribe(Topic::DayStarted, "a");
        hub.subscribe(Topic::DayStarted, "a");
        assert_eq!(hub.count(Topic::DayStarted, "a"), 2);
        assert_eq!(hub.subscribers(Topic::DayStarted), vec!["a", "a"]);
    }

    #[test]
    fn unsubscribe_removes_one_registration() {
        let mut hub = EventHub::new();
        hub.subscribe(Topic::RenderedHud, "a");
        hub.subscribe(Topic::RenderedHud, "b");
        hub.subscribe(Topic::RenderedHud, "a");

        hub.unsubscribe(Topic::RenderedHud, "a");

        assert_eq!(hub.subscribers(Topic::RenderedHud), vec!["b", "a"]);
    }

    #[test]
    fn unsubscribe_without_registration_is_noop() {
        let mut hub = EventHub::new();
        hub.unsubscribe(Topic::RenderingHud, "ghost");
        hub.subscribe(Topic::DayStarted, "a");
        hub.unsubscribe(Topic::DayStarted, "ghost");
        assert_eq!(hub.len(), 1);
    }

    #[test]
    fn topics_are_independent() {
        let mut hub = EventHub::new();
        hub.subscribe(Topic::DayStarted, "a");
        assert_eq!(hub.count(Topic::RenderingHud, "a"), 0);
        assert!(hub.subscribers(Topic::RenderedHud).is_empty());
    }
}
