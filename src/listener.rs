//! Binding of pointing devices to controller instances.

use embassy_time::Duration;

use crate::channel::MotionSender;
use crate::event::{AsyncEventPublisher, PointingEvent};
use crate::input_device::{InputDevice, Runnable};
use crate::processor::RoutedMotion;

/// Routes samples from one pointing device into one controller instance's
/// mailbox.
///
/// The listener carries the activation parameters of its binding: every
/// routed sample is tagged with the layer to activate and the disable timeout
/// to apply. Several listeners with different parameters may feed the same
/// instance, so the parameters arrive per sample rather than living in the
/// instance configuration.
pub struct MotionListener<'a, D: InputDevice<Event = PointingEvent>> {
    device: D,
    sink: MotionSender<'a>,
    target_layer: u8,
    disable_timeout: Duration,
}

impl<'a, D: InputDevice<Event = PointingEvent>> MotionListener<'a, D> {
    pub fn new(device: D, sink: MotionSender<'a>, target_layer: u8, disable_timeout: Duration) -> Self {
        Self {
            device,
            sink,
            target_layer,
            disable_timeout,
        }
    }
}

impl<'a, D: InputDevice<Event = PointingEvent>> Runnable for MotionListener<'a, D> {
    async fn run(&mut self) -> ! {
        loop {
            let event = self.device.read_event().await;
            self.sink
                .publish_async(RoutedMotion {
                    event,
                    target_layer: self.target_layer,
                    disable_timeout: self.disable_timeout,
                })
                .await;
        }
    }
}
