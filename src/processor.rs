//! Threshold-activated momentary layer controller.
//!
//! One [`AutoLayerProcessor`] per configured binding. The instance's `run`
//! loop owns all mutable state and serializes the four inputs that can touch
//! it: routed motion samples, broadcast key notifications, and the two timer
//! expiries. The handlers themselves never suspend, so there is no window in
//! which a timer expiry can observe half-updated state.

use core::cell::RefCell;

use embassy_futures::select::{Either4, select4};
use embassy_time::{Duration, Instant, Timer};
use futures::future::pending;

use crate::channel::MotionReceiver;
use crate::config::AutoLayerConfig;
use crate::event::{Axis, AxisValType, Event, EventSubscriber, KeyPos, KeyboardEvent, PointingEvent};
use crate::input_device::{ProcessResult, Runnable};
use crate::keymap::LayerManager;

/// A pointing sample routed to a controller instance, together with the
/// activation parameters chosen by the listener binding that delivered it.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoutedMotion {
    pub event: PointingEvent,
    /// Layer to activate when the threshold is crossed.
    pub target_layer: u8,
    /// How long the layer stays active without further motion.
    pub disable_timeout: Duration,
}

/// One-shot deferred timer with replace-on-reschedule semantics.
///
/// Rescheduling replaces any pending deadline, `cancel` disarms it, and an
/// unarmed timer never fires. The owning select loop polls `wait`, so a
/// replaced or cancelled deadline can never deliver a stale expiry.
struct DeferredTimer {
    deadline: Option<Instant>,
}

impl DeferredTimer {
    const fn new() -> Self {
        Self { deadline: None }
    }

    fn schedule_after(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolves at the scheduled deadline; pending forever while unarmed.
    async fn wait(&self) {
        match self.deadline {
            Some(deadline) => Timer::at(deadline).await,
            None => pending::<()>().await,
        }
    }
}

/// Threshold-activated momentary layer controller for one pointing-device
/// binding.
///
/// Accumulates the absolute relative motion of the X and Y axes. When the
/// combined total reaches the configured threshold, the layer requested by
/// the routed sample is activated and held until either the sample's disable
/// timeout elapses without further motion, or a key on a non-excluded
/// position is pressed.
pub struct AutoLayerProcessor<'a, L: LayerManager> {
    config: AutoLayerConfig,
    layer_manager: &'a RefCell<L>,
    motion_rx: MotionReceiver<'a>,
    accumulated_x: u32,
    accumulated_y: u32,
    active_layer: Option<u8>,
    last_activity_time: Instant,
    disable_timer: DeferredTimer,
    accumulation_reset_timer: DeferredTimer,
}

impl<'a, L: LayerManager> AutoLayerProcessor<'a, L> {
    pub fn new(config: AutoLayerConfig, layer_manager: &'a RefCell<L>, motion_rx: MotionReceiver<'a>) -> Self {
        Self {
            config,
            layer_manager,
            motion_rx,
            accumulated_x: 0,
            accumulated_y: 0,
            active_layer: None,
            last_activity_time: Instant::from_ticks(0),
            disable_timer: DeferredTimer::new(),
            accumulation_reset_timer: DeferredTimer::new(),
        }
    }

    /// The layer currently held active by this instance, if any.
    pub fn active_layer(&self) -> Option<u8> {
        self.active_layer
    }

    /// Process one routed motion sample.
    ///
    /// Always returns [`ProcessResult::Continue`]: the controller observes
    /// motion but never consumes or modifies it.
    pub fn on_motion(&mut self, motion: RoutedMotion) -> ProcessResult {
        let now = Instant::now();

        // The idle gate is measured against key-press activity only. Motion
        // never updates `last_activity_time`, so sustained motion cannot
        // re-arm the gate once the quiet period has elapsed.
        if self.config.require_prior_idle_ms > 0
            && now < self.last_activity_time + Duration::from_millis(self.config.require_prior_idle_ms as u64)
        {
            return ProcessResult::Continue;
        }

        for axis_event in motion.event.0.iter() {
            if !matches!(axis_event.typ, AxisValType::Rel) {
                continue;
            }
            let delta = axis_event.value.unsigned_abs() as u32;
            match axis_event.axis {
                Axis::X => self.accumulated_x = self.accumulated_x.saturating_add(delta),
                Axis::Y => self.accumulated_y = self.accumulated_y.saturating_add(delta),
                _ => {}
            }
        }

        let total_movement = self.accumulated_x.saturating_add(self.accumulated_y);

        debug!(
            "auto layer: movement={}, threshold={}, active={}",
            total_movement,
            self.config.threshold,
            self.active_layer.is_some()
        );

        // Sliding window: every qualifying sample pushes the reset out again.
        self.accumulation_reset_timer
            .schedule_after(Duration::from_millis(self.config.accumulation_window_ms as u64));

        // If the layer is already active, continued motion only extends it.
        if self.active_layer.is_some() {
            self.disable_timer.schedule_after(motion.disable_timeout);
            return ProcessResult::Continue;
        }

        if total_movement >= self.config.threshold {
            debug!("auto layer: threshold exceeded, activating layer {}", motion.target_layer);
            self.layer_manager.borrow_mut().activate_layer(motion.target_layer);
            self.active_layer = Some(motion.target_layer);
            self.accumulated_x = 0;
            self.accumulated_y = 0;
            self.disable_timer.schedule_after(motion.disable_timeout);
        }

        ProcessResult::Continue
    }

    /// Process one broadcast key notification.
    ///
    /// A press on a non-excluded position ends the active layer immediately;
    /// the layer's job is done once the user actually presses a key. Every
    /// press, excluded or not, records the activity time that feeds the idle
    /// gate.
    pub fn on_key_event(&mut self, event: KeyboardEvent) {
        if !event.pressed {
            return;
        }

        if let Some(layer) = self.active_layer {
            if !self.is_position_excluded(event.pos) {
                self.disable_timer.cancel();
                debug!("auto layer: key press, deactivating layer {}", layer);
                self.layer_manager.borrow_mut().deactivate_layer(layer);
                self.active_layer = None;
            }
        }

        self.last_activity_time = Instant::now();
    }

    /// Disable-timer expiry. A stale expiry with no active layer is a no-op.
    pub fn on_disable_timeout(&mut self) {
        self.disable_timer.cancel();
        if let Some(layer) = self.active_layer.take() {
            debug!("auto layer: timeout, deactivating layer {}", layer);
            self.layer_manager.borrow_mut().deactivate_layer(layer);
        }
    }

    /// Accumulation-window expiry: discard accumulated movement. Does not
    /// touch the active layer.
    pub fn on_accumulation_reset_timeout(&mut self) {
        self.accumulation_reset_timer.cancel();
        self.accumulated_x = 0;
        self.accumulated_y = 0;
        debug!("auto layer: accumulation reset");
    }

    fn is_position_excluded(&self, pos: KeyPos) -> bool {
        self.config.excluded_positions.iter().any(|p| *p == pos)
    }
}

impl<'a, L: LayerManager> Runnable for AutoLayerProcessor<'a, L> {
    async fn run(&mut self) -> ! {
        let mut key_events = KeyboardEvent::subscriber();
        loop {
            match select4(
                self.motion_rx.next_event(),
                key_events.next_event(),
                self.disable_timer.wait(),
                self.accumulation_reset_timer.wait(),
            )
            .await
            {
                Either4::First(motion) => {
                    self.on_motion(motion);
                }
                Either4::Second(event) => self.on_key_event(event),
                Either4::Third(()) => self.on_disable_timeout(),
                Either4::Fourth(()) => self.on_accumulation_reset_timeout(),
            }
            // A layer is held active exactly as long as a disable deadline is armed.
            debug_assert_eq!(self.active_layer.is_some(), self.disable_timer.is_scheduled());
        }
    }
}
