// Shell module - orchestration around the pure services
//
// This module contains:
// - ShellController: applies UI events, runs the guard, issues redirects, composes views
// - ShellEventLoop: single-consumer run-to-completion event queue
// - ListenerRegistry: scoped resize/pointer-down listener registrations
// - providers: the Session Source, Theme Provider and Router seams
// - script: YAML event scripts for headless replay

pub mod controller;
pub mod event_loop;
pub mod listeners;
pub mod providers;
pub mod script;

pub use controller::{ShellController, ShellEvent, ShellView};
pub use event_loop::{ShellEventLoop, ShellEventSender};
pub use listeners::{EventStream, ListenerError, ListenerGuard, ListenerRegistry};
pub use providers::{
    InMemorySession, InMemoryTheme, NavigateOptions, Navigator, RecordingNavigator,
    SessionSource, ThemeSource,
};
pub use script::{EventScript, ScriptError, ScriptStep, SessionStep};
