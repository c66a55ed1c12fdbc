use crate::model::{PlankModel, Preview};
use crate::weight::WeightSource;

/// Application state
pub struct AppState {
    /// The plank and everything placed on it
    pub model: PlankModel<Box<dyn WeightSource>>,
    /// Preview of the pending weight under the pointer
    pub preview: Option<Preview>,
    /// Index of the placed object under the pointer
    pub hovered: Option<usize>,
    /// Enable debug mode
    pub debug: bool,
    /// Set once the user asked to leave
    pub quit: bool,
}

impl AppState {
    /// Fresh state around `model`, with no pointer over the plank
    pub fn new(model: PlankModel<Box<dyn WeightSource>>, debug: bool) -> Self {
        AppState {
            model,
            preview: None,
            hovered: None,
            debug,
            quit: false,
        }
    }

    /// Drops anything that depends on the pointer being over the plank
    pub fn clear_pointer(&mut self) {
        self.preview = None;
        self.hovered = None;
    }
}
