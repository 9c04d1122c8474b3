// Scoped listener registration
//
// The shell listens to two global event streams (viewport resize and
// document pointer-down). Each registration is held by a guard and released
// when the guard drops; at most one live registration per stream.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Global event streams the shell subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStream {
    Resize,
    PointerDown,
}

impl fmt::Display for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStream::Resize => f.write_str("resize"),
            EventStream::PointerDown => f.write_str("pointer-down"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListenerError {
    #[error("A {0} listener is already registered")]
    AlreadyRegistered(EventStream),
}

/// Tracks live listener registrations.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Arc<Mutex<HashSet<EventStream>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `stream`; released when the guard drops.
    pub fn acquire(&self, stream: EventStream) -> Result<ListenerGuard, ListenerError> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if !active.insert(stream) {
            tracing::warn!("Refusing second {} listener registration", stream);
            return Err(ListenerError::AlreadyRegistered(stream));
        }

        tracing::debug!("Registered {} listener", stream);
        Ok(ListenerGuard {
            stream,
            registry: Arc::clone(&self.active),
        })
    }

    pub fn is_registered(&self, stream: EventStream) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&stream)
    }

    pub fn active_count(&self) -> usize {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Live registration. Dropping it releases the listener.
#[derive(Debug)]
pub struct ListenerGuard {
    stream: EventStream,
    registry: Arc<Mutex<HashSet<EventStream>>>,
}

impl ListenerGuard {
    pub fn stream(&self) -> EventStream {
        self.stream
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.stream);
        tracing::debug!("Released {} listener", self.stream);
    }
}
