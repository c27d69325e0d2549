//! Fire-and-forget notification sink.
//!
//! The store emits a [`Notification`] after each successful in-memory
//! transition (XP gain, level-up, badge unlock). Delivery is one-way: the
//! engine never reads a return value and never blocks on the sink.

use std::sync::Mutex;

/// A toast-style message handed to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

/// Consumer of progression notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, note: Notification);
}

/// Discards every notification.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _note: Notification) {}
}

/// Buffers notifications in memory for the host (or a test) to drain into
/// its own toast layer.
#[derive(Default)]
pub struct BufferSink {
    notes: Mutex<Vec<Notification>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notes.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for BufferSink {
    fn notify(&self, note: Notification) {
        self.notes.lock().unwrap().push(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_collects_in_order() {
        let sink = BufferSink::new();
        sink.notify(Notification {
            title: "a".to_string(),
            description: String::new(),
            duration_ms: 1000,
        });
        sink.notify(Notification {
            title: "b".to_string(),
            description: String::new(),
            duration_ms: 1000,
        });
        let notes = sink.drain();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "a");
        assert_eq!(notes[1].title, "b");
        assert!(sink.is_empty());
    }
}
