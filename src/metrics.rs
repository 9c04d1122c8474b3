// Shell metrics module
//
// Lightweight counters for what the shell decided over its lifetime

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Shell decision counters
///
/// Uses atomic operations so the counters can be shared with the event loop
/// and read from anywhere without locks. Logged on shutdown.
#[derive(Debug)]
pub struct ShellMetrics {
    /// Navigation events applied (including redirects)
    pub navigations: AtomicU64,

    /// Redirects issued by the route guard
    pub redirects: AtomicU64,

    /// Guard evaluations that came back pending
    pub pending_verdicts: AtomicU64,

    /// Overlays closed by an outside pointer-down
    pub pointer_dismissals: AtomicU64,

    /// Overlays closed by a navigation reset
    pub navigation_resets: AtomicU64,

    /// Viewport resize events
    pub resize_events: AtomicU64,

    /// Events processed by the event loop
    pub events_processed: AtomicU64,

    /// Events dropped because the queue was full or closed
    pub events_dropped: AtomicU64,

    start_time: Instant,
}

impl ShellMetrics {
    pub fn new() -> Self {
        Self {
            navigations: AtomicU64::new(0),
            redirects: AtomicU64::new(0),
            pending_verdicts: AtomicU64::new(0),
            pointer_dismissals: AtomicU64::new(0),
            navigation_resets: AtomicU64::new(0),
            resize_events: AtomicU64::new(0),
            events_processed: AtomicU64::new(0),
            events_dropped: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_navigation(&self) {
        self.navigations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirect(&self) {
        self.redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pending(&self) {
        self.pending_verdicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pointer_dismissals(&self, count: usize) {
        self.pointer_dismissals
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_navigation_resets(&self, count: usize) {
        self.navigation_resets
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_resize(&self) {
        self.resize_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_processed(&self) {
        self.events_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_dropped(&self) {
        self.events_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Share of navigations that ended in a guard redirect
    pub fn redirect_ratio(&self) -> f64 {
        let navigations = self.navigations.load(Ordering::Relaxed);
        let redirects = self.redirects.load(Ordering::Relaxed);
        if navigations > 0 {
            redirects as f64 / navigations as f64
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("=== Shell Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Navigations: {}, redirects: {} ({:.0}%), pending verdicts: {}",
            self.navigations.load(Ordering::Relaxed),
            self.redirects.load(Ordering::Relaxed),
            self.redirect_ratio() * 100.0,
            self.pending_verdicts.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Overlay dismissals: {} by pointer, {} by navigation",
            self.pointer_dismissals.load(Ordering::Relaxed),
            self.navigation_resets.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Events: {} processed, {} dropped, {} resizes",
            self.events_processed.load(Ordering::Relaxed),
            self.events_dropped.load(Ordering::Relaxed),
            self.resize_events.load(Ordering::Relaxed)
        );
    }
}

impl Default for ShellMetrics {
    fn default() -> Self {
        Self::new()
    }
}
