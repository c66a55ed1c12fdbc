//! Screen coordinates to plank coordinates.
//!
//! The plank is drawn rotated around its pivot, so a pointer position has to
//! be rotated back by the current tilt before it can be read off the plank's
//! own axis.

use tracing::warn;

use crate::constants::{PIVOT_X, PLANK_LENGTH};
use crate::error::{Error, Result};
use crate::math::unrotate;

/// Pointer offset expressed in the plank's unrotated frame, relative to the pivot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlankOffset {
    /// Distance along the plank, negative towards the left end
    pub along: f64,
    /// Distance perpendicular to the plank, positive below it
    pub across: f64,
}

/// Rotates a screen point back into the plank frame without clamping
pub fn plank_offset(
    screen_x: f64,
    screen_y: f64,
    center_x: f64,
    center_y: f64,
    current_angle: f64,
) -> Result<PlankOffset> {
    let inputs = [screen_x, screen_y, center_x, center_y, current_angle];
    if inputs.iter().any(|value| !value.is_finite()) {
        warn!(?inputs, "rejected non-finite pointer input");
        return Err(Error::NonFiniteCoordinate);
    }

    let relative = [screen_x - center_x, screen_y - center_y];
    let [along, across] = unrotate(relative, current_angle);
    // Offsets near f64::MAX overflow while being rotated
    if !along.is_finite() || !across.is_finite() {
        warn!(?inputs, along, across, "pointer offset overflowed");
        return Err(Error::NonFiniteCoordinate);
    }
    Ok(PlankOffset { along, across })
}

/// Maps a pointer position to a position on the plank, in `[0, PLANK_LENGTH]`
pub fn map_to_plank(
    screen_x: f64,
    screen_y: f64,
    center_x: f64,
    center_y: f64,
    current_angle: f64,
) -> Result<f64> {
    let offset = plank_offset(screen_x, screen_y, center_x, center_y, current_angle)?;
    Ok((offset.along + PIVOT_X).clamp(0.0, PLANK_LENGTH))
}
