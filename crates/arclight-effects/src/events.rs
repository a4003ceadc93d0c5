//! Event bus for reporting combat outcomes to the caller.

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

use arclight_common::EffectId;

use crate::archetype::ArchetypeKind;
use crate::element::Element;

/// Event types published by the effects core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A target took damage
    DamageDealt {
        /// Target identifier
        target: u64,
        /// Damage applied after clamping
        damage: f32,
        /// Damage element
        element: Element,
    },
    /// A target's health reached zero
    TargetDefeated {
        /// Target identifier
        target: u64,
    },
    /// A live effect instance expired or exhausted its hits
    EffectExpired {
        /// Instance identifier
        id: EffectId,
        /// Instance kind
        kind: ArchetypeKind,
    },
    /// The projectile pool had no free slot; a fresh allocation was made
    PoolExhausted {
        /// Live pooled instances at the time
        live: usize,
    },
}

/// Bus broadcasting combat events to the embedding game loop.
#[derive(Debug)]
pub struct EventBus {
    /// Sender for broadcasting events
    sender: Sender<CombatEvent>,
    /// Receiver for collecting events
    receiver: Receiver<CombatEvent>,
    /// Channel capacity
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

impl EventBus {
    /// Creates a new event bus with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Publishes an event to the bus.
    pub fn publish(&self, event: CombatEvent) {
        // Non-blocking send - if full, event is dropped
        let _ = self.sender.try_send(event);
    }

    /// Drains all pending events.
    pub fn drain(&self) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Returns the channel capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Creates a new sender handle for publishing events.
    #[must_use]
    pub fn sender(&self) -> Sender<CombatEvent> {
        self.sender.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_drain() {
        let bus = EventBus::new(8);
        bus.publish(CombatEvent::DamageDealt {
            target: 1,
            damage: 10.0,
            element: Element::Fire,
        });
        bus.publish(CombatEvent::TargetDefeated { target: 1 });

        assert_eq!(bus.pending_count(), 2);
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_full_bus_drops_not_blocks() {
        let bus = EventBus::new(1);
        bus.publish(CombatEvent::TargetDefeated { target: 1 });
        bus.publish(CombatEvent::TargetDefeated { target: 2 });

        assert_eq!(bus.drain().len(), 1);
    }
}
