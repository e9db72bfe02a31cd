//! The layer subsystem capability consumed by the controller.

/// Activate and deactivate keymap layers.
///
/// The controller calls into this from its own task; implementations must
/// tolerate duplicate `deactivate_layer` calls for the same layer, since a
/// disable timeout and a key-press cancellation can both ask for the same
/// deactivation.
pub trait LayerManager {
    /// Activate given layer
    fn activate_layer(&mut self, layer_num: u8);

    /// Deactivate given layer
    fn deactivate_layer(&mut self, layer_num: u8);
}

/// Minimal layer-state tracker.
///
/// Keeps one activation flag per layer. Out-of-range layer numbers are logged
/// and ignored; duplicate deactivations are no-ops.
#[derive(Clone, Debug)]
pub struct LayerState<const NUM_LAYER: usize> {
    layer_state: [bool; NUM_LAYER],
}

impl<const NUM_LAYER: usize> Default for LayerState<NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_LAYER: usize> LayerState<NUM_LAYER> {
    pub const fn new() -> Self {
        Self {
            layer_state: [false; NUM_LAYER],
        }
    }

    pub fn is_active(&self, layer_num: u8) -> bool {
        (layer_num as usize) < NUM_LAYER && self.layer_state[layer_num as usize]
    }
}

impl<const NUM_LAYER: usize> LayerManager for LayerState<NUM_LAYER> {
    fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, only {} layers are supported",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, only {} layers are supported",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }
}
