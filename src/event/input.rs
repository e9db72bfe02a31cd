//! Input events.
//!
//! This module contains the two event families the controller consumes:
//! - Keyboard events (key position state changes), broadcast to every
//!   controller instance
//! - Pointing device events (relative or absolute axis samples)

use embassy_sync::pubsub::{ImmediatePublisher, PubSubChannel, Publisher, Subscriber};
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::event::{AsyncEvent, Event};
use crate::{KEYBOARD_EVENT_CHANNEL_SIZE, KEYBOARD_EVENT_PUB_SIZE, KEYBOARD_EVENT_SUB_SIZE, RawMutex};

/// A key position state change.
///
/// `KeyboardEvent` is different from events from pointing devices: pointing
/// events are routed to a single controller instance by its listener, while
/// `KeyboardEvent` is broadcast so that every instance observes key activity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub pressed: bool,
    pub pos: KeyPos,
}

impl KeyboardEvent {
    pub fn key(row: u8, col: u8, pressed: bool) -> Self {
        Self {
            pressed,
            pos: KeyPos { row, col },
        }
    }
}

/// The physical position of a key.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

#[doc(hidden)]
static KEYBOARD_EVENT_CHANNEL: PubSubChannel<
    RawMutex,
    KeyboardEvent,
    KEYBOARD_EVENT_CHANNEL_SIZE,
    KEYBOARD_EVENT_SUB_SIZE,
    KEYBOARD_EVENT_PUB_SIZE,
> = PubSubChannel::new();

impl Event for KeyboardEvent {
    type Publisher = ImmediatePublisher<
        'static,
        RawMutex,
        KeyboardEvent,
        KEYBOARD_EVENT_CHANNEL_SIZE,
        KEYBOARD_EVENT_SUB_SIZE,
        KEYBOARD_EVENT_PUB_SIZE,
    >;
    type Subscriber = Subscriber<
        'static,
        RawMutex,
        KeyboardEvent,
        KEYBOARD_EVENT_CHANNEL_SIZE,
        KEYBOARD_EVENT_SUB_SIZE,
        KEYBOARD_EVENT_PUB_SIZE,
    >;

    fn publisher() -> Self::Publisher {
        KEYBOARD_EVENT_CHANNEL.immediate_publisher()
    }

    fn subscriber() -> Self::Subscriber {
        KEYBOARD_EVENT_CHANNEL.subscriber().expect(
            "Failed to create subscriber for KeyboardEvent. The subscriber limit has been exceeded. \
             Increase KEYBOARD_EVENT_SUB_SIZE.",
        )
    }
}

impl AsyncEvent for KeyboardEvent {
    type AsyncPublisher = Publisher<
        'static,
        RawMutex,
        KeyboardEvent,
        KEYBOARD_EVENT_CHANNEL_SIZE,
        KEYBOARD_EVENT_SUB_SIZE,
        KEYBOARD_EVENT_PUB_SIZE,
    >;

    fn publisher_async() -> Self::AsyncPublisher {
        KEYBOARD_EVENT_CHANNEL.publisher().expect(
            "Failed to create async publisher for KeyboardEvent. The publisher limit has been \
             exceeded. Increase KEYBOARD_EVENT_PUB_SIZE.",
        )
    }
}

/// One pointing device sample: X, Y and wheel axis events.
#[derive(Serialize, Deserialize, Clone, Debug, Copy, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointingEvent(pub [AxisEvent; 3]);

#[derive(Serialize, Deserialize, Clone, Debug, Copy, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisEvent {
    /// The axis event value type, relative or absolute
    pub typ: AxisValType,
    /// The axis name
    pub axis: Axis,
    /// Value of the axis event
    pub value: i16,
}

#[derive(Serialize, Deserialize, Clone, Debug, Copy, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisValType {
    /// The axis value is relative
    Rel,
    /// The axis value is absolute
    Abs,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Axis {
    X,
    Y,
    Z,
    H,
    V,
    // .. More is allowed
}
