//! Block-on executor for the embassy-time mock driver.
//!
//! Polls the future on the current thread and advances the mock clock
//! whenever the future is idle, so `Timer::after` delays in test scripts
//! complete deterministically and instantly.

use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll, Wake, Waker};

use embassy_time::{Duration, MockDriver};

/// Upper bound on simulated time per test, to turn a hung scenario into a
/// failure instead of an endless loop.
const MAX_SIMULATED_TIME: Duration = Duration::from_secs(600);

/// Clock step while the future is idle.
const IDLE_STEP: Duration = Duration::from_millis(1);

struct TestWaker {
    woken: AtomicBool,
}

impl Wake for TestWaker {
    fn wake(self: Arc<Self>) {
        self.woken.store(true, Ordering::SeqCst);
    }
}

pub fn test_block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let wake_state = Arc::new(TestWaker {
        woken: AtomicBool::new(false),
    });
    let waker = Waker::from(wake_state.clone());
    let mut cx = Context::from_waker(&waker);
    let mut simulated = Duration::from_ticks(0);

    loop {
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => return output,
            Poll::Pending => {
                if wake_state.woken.swap(false, Ordering::SeqCst) {
                    continue;
                }
                assert!(
                    simulated < MAX_SIMULATED_TIME,
                    "test scenario did not finish within the simulated time limit"
                );
                MockDriver::get().advance(IDLE_STEP);
                simulated += IDLE_STEP;
            }
        }
    }
}
