//! # VITRINE Event Channels
//!
//! Edge-triggered notifications from the core to the presentation layer.
//!
//! ```text
//! ┌────────────┐      ┌─────────────┐      ┌──────────────┐
//! │  Challenge │─────>│   Event     │─────>│ Presentation │
//! │   Engine   │      │   Channel   │      │    Layer     │
//! └────────────┘      └─────────────┘      └──────────────┘
//! ```
//!
//! The core never polls flags at the boundary: a win report or a
//! quality-tier flip is sent exactly once, at the mutation that caused it,
//! and the host drains pending events once per frame in arrival order.
//!
//! Channels are bounded. A full channel drops the event rather than block
//! the frame; these buses carry at most a handful of events per game, so a
//! drop means the consumer stopped draining.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Bounded event bus for one stream of notifications.
///
/// Generic over the event type: the challenge engine and the quality
/// controller publish different enums through the same mechanism.
pub struct EventBus<E> {
    /// Sender end - held by the producing component.
    sender: Sender<E>,
    /// Receiver end - held by the presentation layer.
    receiver: Receiver<E>,
}

impl<E> EventBus<E> {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight before drops. 64 is plenty
    ///   for a stream that carries a few events per game.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender<E> {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle (clone for multiple consumers).
    #[must_use]
    pub fn receiver(&self) -> EventReceiver<E> {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a paired sender and receiver directly.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender<E>, EventReceiver<E>) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for sending events.
pub struct EventSender<E> {
    sender: Sender<E>,
}

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E> EventSender<E> {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the event was dropped (channel full or receiver
    /// gone). The frame must not stall on a slow consumer.
    #[inline]
    pub fn send(&self, event: E) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("event channel full, notification dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
pub struct EventReceiver<E> {
    receiver: Receiver<E>,
}

impl<E> Clone for EventReceiver<E> {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver.clone(),
        }
    }
}

impl<E> EventReceiver<E> {
    /// Receives all pending events (non-blocking).
    ///
    /// Use this once per frame to process notifications in arrival order.
    #[inline]
    pub fn drain(&self) -> Vec<E> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives one event (non-blocking).
    ///
    /// Returns `None` if no events are pending.
    #[inline]
    pub fn try_recv(&self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_receive() {
        let bus: EventBus<u32> = EventBus::new(8);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(7));
        assert!(receiver.has_events());
        assert_eq!(receiver.try_recv(), Some(7));
        assert_eq!(receiver.try_recv(), None);
    }

    #[test]
    fn test_drain_preserves_order() {
        let (sender, receiver) = EventBus::create_pair(16);
        for i in 0..5 {
            assert!(sender.send(i));
        }
        assert_eq!(receiver.drain(), vec![0, 1, 2, 3, 4]);
        assert!(!receiver.has_events());
    }

    #[test]
    fn test_full_channel_drops() {
        let (sender, receiver) = EventBus::create_pair(1);
        assert!(sender.send(1u8));
        assert!(!sender.send(2u8));
        assert_eq!(receiver.pending_count(), 1);
    }
}
