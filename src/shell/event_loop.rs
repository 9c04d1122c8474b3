// ShellEventLoop - Single-consumer, run-to-completion event queue
//
// UI events (navigation, resize, pointer-down, toggles) are produced from
// anywhere and queued on a bounded tokio channel. One consumer drains the
// queue on the current task, handling each event fully before taking the
// next. The resize and pointer-down listener registrations are held for
// exactly as long as the loop runs.

use crate::metrics::ShellMetrics;
use crate::shell::controller::{ShellController, ShellEvent, ShellView};
use crate::shell::listeners::{EventStream, ListenerError, ListenerRegistry};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Bounded event queue with a single consumer
///
/// # Example
/// ```ignore
/// let event_loop = ShellEventLoop::new(100, metrics.clone());
/// let sender = event_loop.sender();
///
/// sender.send(ShellEvent::Resize { width: 600 });
/// drop(sender);
///
/// let processed = event_loop
///     .drive(&controller, &registry, |_, view| println!("{}", view.summary()))
///     .await?;
/// ```
pub struct ShellEventLoop<T = ShellEvent> {
    tx: mpsc::Sender<T>,
    rx: mpsc::Receiver<T>,
    metrics: Arc<ShellMetrics>,
}

impl<T: Send + 'static> ShellEventLoop<T> {
    pub fn new(capacity: usize, metrics: Arc<ShellMetrics>) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self { tx, rx, metrics }
    }

    /// Cloneable producer handle
    pub fn sender(&self) -> ShellEventSender<T> {
        ShellEventSender {
            tx: self.tx.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Drain the queue, handing each item to `handler` in arrival order.
    ///
    /// Returns once every sender has been dropped and the queue is empty.
    /// Fails without processing anything if the shell's listeners are
    /// already registered by another live loop.
    pub async fn run<F>(self, registry: &ListenerRegistry, mut handler: F) -> Result<usize, ListenerError>
    where
        F: FnMut(T),
    {
        let _resize = registry.acquire(EventStream::Resize)?;
        let _pointer = registry.acquire(EventStream::PointerDown)?;

        let Self { tx, mut rx, metrics } = self;
        // Only external senders keep the loop alive
        drop(tx);

        tracing::debug!("Shell event loop started");

        let mut processed = 0;
        while let Some(item) = rx.recv().await {
            handler(item);
            metrics.record_event_processed();
            processed += 1;
        }

        tracing::debug!("Shell event loop finished after {} events", processed);
        Ok(processed)
    }
}

impl ShellEventLoop<ShellEvent> {
    /// Run the loop against a controller, reporting each resulting view.
    pub async fn drive<F>(
        self,
        controller: &ShellController,
        registry: &ListenerRegistry,
        mut on_view: F,
    ) -> Result<usize, ListenerError>
    where
        F: FnMut(&ShellEvent, &ShellView),
    {
        self.run(registry, |event| {
            let view = controller.handle(event.clone());
            on_view(&event, &view);
        })
        .await
    }
}

/// Producer handle for a [`ShellEventLoop`]
pub struct ShellEventSender<T> {
    tx: mpsc::Sender<T>,
    metrics: Arc<ShellMetrics>,
}

// Manual Clone implementation to avoid requiring T: Clone
impl<T> Clone for ShellEventSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<T> ShellEventSender<T> {
    /// Queue without waiting. Returns false if the event was dropped.
    pub fn send(&self, item: T) -> bool {
        match self.tx.try_send(item) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("Shell event queue full - dropping event");
                self.metrics.record_event_dropped();
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::warn!("Shell event loop has stopped - dropping event");
                self.metrics.record_event_dropped();
                false
            }
        }
    }

    /// Queue, waiting for capacity. Returns false if the loop has stopped.
    pub async fn send_async(&self, item: T) -> bool {
        if self.tx.send(item).await.is_err() {
            tracing::warn!("Shell event loop has stopped - dropping event");
            self.metrics.record_event_dropped();
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_processes_in_order_and_stops() {
        let metrics = Arc::new(ShellMetrics::new());
        let event_loop = ShellEventLoop::<u32>::new(8, metrics.clone());
        let sender = event_loop.sender();
        let registry = ListenerRegistry::new();

        for i in 0..5 {
            assert!(sender.send(i));
        }
        drop(sender);

        let mut seen = Vec::new();
        let processed = event_loop.run(&registry, |i| seen.push(i)).await.unwrap();

        assert_eq!(processed, 5);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(metrics.events_processed.load(Ordering::Relaxed), 5);
    }

    #[tokio::test]
    async fn test_listeners_released_after_run() {
        let registry = ListenerRegistry::new();
        let event_loop = ShellEventLoop::<u32>::new(1, Arc::new(ShellMetrics::new()));

        event_loop.run(&registry, |_| {}).await.unwrap();

        assert_eq!(registry.active_count(), 0);
    }

    #[tokio::test]
    async fn test_second_loop_is_refused_while_first_holds_listeners() {
        let registry = ListenerRegistry::new();
        let _held = registry.acquire(EventStream::Resize).unwrap();
        let event_loop = ShellEventLoop::<u32>::new(1, Arc::new(ShellMetrics::new()));

        let result = event_loop.run(&registry, |_| {}).await;

        assert_eq!(
            result.unwrap_err(),
            ListenerError::AlreadyRegistered(EventStream::Resize)
        );
    }

    #[test]
    fn test_full_queue_drops_event() {
        let metrics = Arc::new(ShellMetrics::new());
        let event_loop = ShellEventLoop::<u32>::new(1, metrics.clone());
        let sender = event_loop.sender();

        assert!(sender.send(1));
        assert!(!sender.send(2));
        assert_eq!(metrics.events_dropped.load(Ordering::Relaxed), 1);
    }
}
