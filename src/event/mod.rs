//! Event system.
//!
//! This module provides:
//! - Input event types (key position changes, pointing samples)
//! - Event infrastructure (publish/subscribe traits and their
//!   implementations for the embassy-sync channel endpoints)

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel;
use embassy_sync::pubsub::{ImmediatePublisher, Publisher, Subscriber};

mod input;

pub use input::*;

/// Trait for event publishers.
///
/// This is a generic trait that can be implemented by any type that publishes
/// events without waiting.
pub trait EventPublisher<T> {
    fn publish(&self, message: T);
}

/// Async version of event publisher trait.
pub trait AsyncEventPublisher<T> {
    async fn publish_async(&self, message: T);
}

/// Trait for event subscribers.
pub trait EventSubscriber<T> {
    async fn next_event(&mut self) -> T;
}

/// An event type with a static channel behind it.
pub trait Event: Clone + Send {
    type Publisher: EventPublisher<Self>;
    type Subscriber: EventSubscriber<Self>;

    fn publisher() -> Self::Publisher;
    fn subscriber() -> Self::Subscriber;
}

/// An event type that can also be published asynchronously, waiting for
/// channel space instead of dropping.
pub trait AsyncEvent: Event {
    type AsyncPublisher: AsyncEventPublisher<Self>;

    fn publisher_async() -> Self::AsyncPublisher;
}

/// Publish `event` on its static channel without waiting.
pub fn publish_event<E: Event>(event: E) {
    E::publisher().publish(event);
}

/// Publish `event` on its static channel, waiting for space if needed.
pub async fn publish_event_async<E: AsyncEvent>(event: E) {
    E::publisher_async().publish_async(event).await;
}

// Implementations for embassy-sync PubSubChannel
impl<'a, M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> EventPublisher<T>
    for ImmediatePublisher<'a, M, T, CAP, SUBS, PUBS>
{
    fn publish(&self, message: T) {
        self.publish_immediate(message);
    }
}

impl<'a, M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> AsyncEventPublisher<T>
    for Publisher<'a, M, T, CAP, SUBS, PUBS>
{
    async fn publish_async(&self, message: T) {
        self.publish(message).await
    }
}

impl<'a, M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> EventSubscriber<T>
    for Subscriber<'a, M, T, CAP, SUBS, PUBS>
{
    async fn next_event(&mut self) -> T {
        self.next_message_pure().await
    }
}

// Implementations for embassy-sync Channel
impl<'a, M: RawMutex, T: Clone, const N: usize> EventPublisher<T> for channel::Sender<'a, M, T, N> {
    fn publish(&self, message: T) {
        if self.try_send(message).is_err() {
            error!("Send event to Channel error, channel is full");
        }
    }
}

impl<'a, M: RawMutex, T: Clone, const N: usize> AsyncEventPublisher<T> for channel::Sender<'a, M, T, N> {
    async fn publish_async(&self, message: T) {
        self.send(message).await
    }
}

impl<'a, M: RawMutex, T: Clone, const N: usize> EventSubscriber<T> for channel::Receiver<'a, M, T, N> {
    async fn next_event(&mut self) -> T {
        self.receive().await
    }
}
