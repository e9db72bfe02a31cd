//! Exposed channels which can be used to wire devices, listeners and
//! controller instances together.

use embassy_sync::channel::{Channel, Receiver, Sender};
pub use embassy_sync::{blocking_mutex, channel, pubsub};

use crate::processor::RoutedMotion;
use crate::{MOTION_CHANNEL_SIZE, RawMutex};

/// Mailbox carrying routed motion samples to one controller instance.
///
/// Every instance owns exactly one mailbox; its listener(s) hold the sender
/// side.
pub type MotionChannel = Channel<RawMutex, RoutedMotion, MOTION_CHANNEL_SIZE>;
pub type MotionSender<'a> = Sender<'a, RawMutex, RoutedMotion, MOTION_CHANNEL_SIZE>;
pub type MotionReceiver<'a> = Receiver<'a, RawMutex, RoutedMotion, MOTION_CHANNEL_SIZE>;
