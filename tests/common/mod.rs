pub mod test_block_on;

use std::cell::RefCell;

use auto_layer::config::AutoLayerConfig;
use auto_layer::event::{Axis, AxisEvent, AxisValType, KeyboardEvent, PointingEvent, publish_event_async};
use auto_layer::input_device::Runnable;
use auto_layer::keymap::LayerManager;
use auto_layer::processor::{AutoLayerProcessor, RoutedMotion};
use embassy_futures::select::select;
use embassy_time::{Duration, Timer};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Every layer call the controller makes, in order.
#[derive(Debug, Default)]
pub struct LayerJournal {
    pub ops: Vec<LayerOp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerOp {
    Activate(u8),
    Deactivate(u8),
}

impl LayerManager for LayerJournal {
    fn activate_layer(&mut self, layer_num: u8) {
        self.ops.push(LayerOp::Activate(layer_num));
    }

    fn deactivate_layer(&mut self, layer_num: u8) {
        self.ops.push(LayerOp::Deactivate(layer_num));
    }
}

/// One scripted input step. `delay` is the time to let pass before the step
/// fires, in milliseconds.
#[derive(Clone, Copy, Debug)]
pub enum TestStep {
    /// A relative motion sample.
    Motion { delay: u64, dx: i16, dy: i16 },
    /// A key state change at (row, col).
    Key {
        delay: u64,
        row: u8,
        col: u8,
        pressed: bool,
    },
    /// Let time pass with no input.
    Wait { delay: u64 },
}

pub fn routed(event: PointingEvent, target_layer: u8, disable_timeout_ms: u64) -> RoutedMotion {
    RoutedMotion {
        event,
        target_layer,
        disable_timeout: Duration::from_millis(disable_timeout_ms),
    }
}

/// An absolute-position sample, e.g. from a touch surface reporting
/// coordinates instead of deltas.
pub fn abs_motion(x: i16, y: i16) -> PointingEvent {
    PointingEvent([
        AxisEvent {
            typ: AxisValType::Abs,
            axis: Axis::X,
            value: x,
        },
        AxisEvent {
            typ: AxisValType::Abs,
            axis: Axis::Y,
            value: y,
        },
        AxisEvent {
            typ: AxisValType::Rel,
            axis: Axis::Z,
            value: 0,
        },
    ])
}

pub fn rel_motion(dx: i16, dy: i16) -> PointingEvent {
    PointingEvent([
        AxisEvent {
            typ: AxisValType::Rel,
            axis: Axis::X,
            value: dx,
        },
        AxisEvent {
            typ: AxisValType::Rel,
            axis: Axis::Y,
            value: dy,
        },
        AxisEvent {
            typ: AxisValType::Rel,
            axis: Axis::Z,
            value: 0,
        },
    ])
}

/// Drive `controller` through a scripted sequence of motion samples, key
/// events and pauses, then return with the controller stopped. Motion samples
/// are routed with the given activation parameters, the way a listener
/// binding would tag them.
pub async fn run_scenario<L: LayerManager>(
    controller: &mut AutoLayerProcessor<'_, L>,
    sink: auto_layer::channel::MotionSender<'_>,
    target_layer: u8,
    disable_timeout_ms: u64,
    steps: &[TestStep],
) {
    select(controller.run(), async {
        for step in steps {
            match *step {
                TestStep::Motion { delay, dx, dy } => {
                    Timer::after(Duration::from_millis(delay)).await;
                    sink.send(routed(rel_motion(dx, dy), target_layer, disable_timeout_ms)).await;
                }
                TestStep::Key {
                    delay,
                    row,
                    col,
                    pressed,
                } => {
                    Timer::after(Duration::from_millis(delay)).await;
                    publish_event_async(KeyboardEvent::key(row, col, pressed)).await;
                }
                TestStep::Wait { delay } => {
                    Timer::after(Duration::from_millis(delay)).await;
                }
            }
        }
        // Let the controller drain the last step before the script returns.
        Timer::after(Duration::from_millis(1)).await;
    })
    .await;
}

/// Build a config with the thresholds used by most scenarios:
/// threshold 20, accumulation window 150 ms, no idle gate, no exclusions.
pub fn scenario_config() -> AutoLayerConfig {
    AutoLayerConfig {
        threshold: 20,
        accumulation_window_ms: 150,
        require_prior_idle_ms: 0,
        ..AutoLayerConfig::default()
    }
}

pub fn assert_ops(journal: &RefCell<LayerJournal>, expected: &[LayerOp]) {
    assert_eq!(journal.borrow().ops.as_slice(), expected);
}
