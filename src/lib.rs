//! # auto-layer
//!
//! Threshold-activated momentary layer controller for pointing devices.
//!
//! The crate watches a stream of relative-motion samples and a broadcast of
//! key-position notifications, and decides when to turn a secondary keymap
//! layer on, how long to keep it on, and when a real key press should end it
//! early. Accumulated absolute motion past a configured threshold activates
//! the layer; continued motion keeps it alive; an idle timeout or a key press
//! on a non-excluded position deactivates it.
//!
//! Wiring follows the device/listener/processor split used throughout the
//! embassy ecosystem:
//!
//! - an [`input_device::InputDevice`] produces [`event::PointingEvent`]s,
//! - a [`listener::MotionListener`] routes them into one controller
//!   instance's mailbox, attaching the activation parameters (target layer,
//!   disable timeout) of that binding,
//! - an [`processor::AutoLayerProcessor`] consumes the mailbox, subscribes to
//!   the [`event::KeyboardEvent`] broadcast, and drives a
//!   [`keymap::LayerManager`].
//!
//! Each controller instance is an independent single-writer task; run as many
//! instances as there are configured bindings.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// Logging macros, resolved at compile time: defmt wins over log, and with
// neither feature enabled the macros compile to nothing.
#[cfg(feature = "defmt")]
#[macro_use(debug, info, warn, error)]
extern crate defmt;
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_use(debug, info, warn, error)]
extern crate log;
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[macro_use]
mod silent_log {
    #![allow(unused_macros)]

    macro_rules! debug {
        ($($args:expr),* $(,)?) => {{ $(let _ = &$args;)* }};
    }
    macro_rules! info {
        ($($args:expr),* $(,)?) => {{ $(let _ = &$args;)* }};
    }
    macro_rules! warn {
        ($($args:expr),* $(,)?) => {{ $(let _ = &$args;)* }};
    }
    macro_rules! error {
        ($($args:expr),* $(,)?) => {{ $(let _ = &$args;)* }};
    }
}

pub mod channel;
pub mod config;
pub mod event;
pub mod input_device;
pub mod keymap;
pub mod listener;
pub mod processor;

/// The raw mutex type used by every channel in this crate.
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Capacity of each controller instance's motion mailbox.
pub const MOTION_CHANNEL_SIZE: usize = 16;
/// Capacity of the broadcast keyboard event channel.
pub const KEYBOARD_EVENT_CHANNEL_SIZE: usize = 16;
/// Max concurrent publishers on the keyboard event channel.
pub const KEYBOARD_EVENT_PUB_SIZE: usize = 4;
/// Max concurrent subscribers on the keyboard event channel, i.e. the max
/// number of controller instances running at the same time.
pub const KEYBOARD_EVENT_SUB_SIZE: usize = 4;
/// Max number of excluded key positions per controller instance.
pub const EXCLUDED_POSITIONS_MAX: usize = 8;
