//! Input device and processing traits.
//!
//! This module defines the `InputDevice` trait for event sources, the
//! `Runnable` trait for long-running tasks, and the `ProcessResult` contract
//! for processors sitting in an input pipeline.

/// The trait for input devices.
///
/// An input device produces discrete input events, e.g. a trackball driver
/// reporting relative motion. Devices are bound to controller instances with
/// [`crate::listener::MotionListener`].
pub trait InputDevice {
    /// Type of the emitted events.
    type Event;

    /// Read the next raw input event.
    async fn read_event(&mut self) -> Self::Event;
}

/// A task that runs for the lifetime of the process.
///
/// Devices, listeners and controller instances all implement `Runnable`;
/// join their `run` futures to run the whole pipeline concurrently.
pub trait Runnable {
    async fn run(&mut self) -> !;
}

/// Outcome of processing one input sample.
///
/// A processor that returns `Continue` leaves the sample for the rest of the
/// pipeline unmodified; `Stop` consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    Continue,
    Stop,
}
