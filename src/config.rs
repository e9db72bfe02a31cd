//! Per-instance configuration.

use heapless::Vec;

use crate::EXCLUDED_POSITIONS_MAX;
use crate::event::KeyPos;

/// Static configuration of one controller instance.
///
/// All durations are in milliseconds. Range checking is the responsibility of
/// whatever loads the configuration; the controller treats the values as
/// valid.
#[derive(Clone, Debug)]
pub struct AutoLayerConfig {
    /// Combined accumulated movement magnitude that triggers activation.
    pub threshold: u32,
    /// Sliding accumulation window: accumulated movement is discarded after
    /// this much time without a qualifying sample.
    pub accumulation_window_ms: u32,
    /// Minimum quiet time since the last key press before motion samples are
    /// accumulated. 0 disables the gate.
    pub require_prior_idle_ms: u32,
    /// Key positions that never cancel an active layer.
    pub excluded_positions: Vec<KeyPos, EXCLUDED_POSITIONS_MAX>,
}

impl Default for AutoLayerConfig {
    fn default() -> Self {
        Self {
            threshold: 100,
            accumulation_window_ms: 200,
            require_prior_idle_ms: 0,
            excluded_positions: Vec::new(),
        }
    }
}
