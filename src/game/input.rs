//! Pointer event sources the controller can drain

use glam::Vec2;
use std::collections::VecDeque;

/// Pointer activity relevant to an in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a screen position
    Moved(Vec2),
    /// Primary button released
    Released,
}

/// Anything that can hand the controller pending pointer events
pub trait PointerSource {
    /// Next pending event, or None once drained
    fn poll(&mut self) -> Option<PointerEvent>;
}

/// FIFO of events pushed by the owner. Used by the egui frame adapter and by tests.
#[derive(Debug, Default)]
pub struct QueuedPointer {
    events: VecDeque<PointerEvent>,
}

impl QueuedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PointerEvent::Moved(Vec2::new(x, y)));
        self
    }

    pub fn release(&mut self) -> &mut Self {
        self.push(PointerEvent::Released);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl PointerSource for QueuedPointer {
    fn poll(&mut self) -> Option<PointerEvent> {
        self.events.pop_front()
    }
}
