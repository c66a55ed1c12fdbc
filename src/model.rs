//! Torque-balance model of the plank.
//!
//! Every object pulls its side of the plank down with a torque of
//! `weight * distance from the pivot`. The tilt is the torque difference
//! scaled down by [`TORQUE_DIVISOR`] and clamped to [`MAX_ANGLE`] either way.
//! Positive angles mean the right side is heavier.

use tracing::{debug, trace, warn};

use crate::constants::{MAX_ANGLE, PIVOT_X, PLANK_LENGTH, TORQUE_DIVISOR};
use crate::error::{Error, Result};
use crate::weight::{RandomWeights, Weight, WeightSource};

/// Which side of the pivot an object sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    /// Exactly on the pivot: no torque, not counted on either side
    Pivot,
}

/// An object placed on the plank
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedObject {
    position: f64,
    weight: Weight,
}

impl PlacedObject {
    /// Creates an object, clamping `position` onto the plank
    pub fn new(position: f64, weight: Weight) -> Result<Self> {
        if !position.is_finite() {
            warn!(position, weight = weight.get(), "rejected non-finite position");
            return Err(Error::NonFiniteCoordinate);
        }
        Ok(PlacedObject {
            position: position.clamp(0.0, PLANK_LENGTH),
            weight,
        })
    }

    /// Position along the plank, in `[0, PLANK_LENGTH]`
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Weight of the object
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Distance from the pivot
    pub fn distance(&self) -> f64 {
        (self.position - PIVOT_X).abs()
    }

    /// Turning force around the pivot: `weight * distance`
    pub fn torque(&self) -> f64 {
        self.weight.as_f64() * self.distance()
    }

    /// Side of the pivot the object sits on
    pub fn side(&self) -> Side {
        if self.position < PIVOT_X {
            Side::Left
        } else if self.position > PIVOT_X {
            Side::Right
        } else {
            Side::Pivot
        }
    }
}

/// Torque and weight sums on each side of the pivot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub left_torque: f64,
    pub right_torque: f64,
    pub left_weight: u32,
    pub right_weight: u32,
}

impl Totals {
    /// Adds one object's torque and weight to its side
    fn add(&mut self, object: &PlacedObject) {
        let weight = u32::from(object.weight.get());
        match object.side() {
            Side::Left => {
                self.left_torque += object.torque();
                self.left_weight += weight;
            }
            Side::Right => {
                self.right_torque += object.torque();
                self.right_weight += weight;
            }
            Side::Pivot => {}
        }
    }

    /// Tilt angle produced by these totals
    pub fn angle(&self) -> i32 {
        angle_for(self.left_torque, self.right_torque)
    }
}

/// Sums torques and weights on each side of the pivot
pub fn aggregate(objects: &[PlacedObject]) -> Totals {
    let mut totals = Totals::default();
    for object in objects {
        totals.add(object);
    }
    totals
}

/// Converts a torque balance into a whole-degree tilt.
///
/// Rounds half away from zero, which keeps the result antisymmetric.
pub fn angle_for(left_torque: f64, right_torque: f64) -> i32 {
    let raw = (right_torque - left_torque) / TORQUE_DIVISOR;
    let max = f64::from(MAX_ANGLE);
    raw.clamp(-max, max).round() as i32
}

/// What placing a weight at some position would do
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preview {
    pub position: f64,
    pub weight: Weight,
    /// Torque the hypothetical object would add
    pub torque: f64,
    /// Angle the plank would settle at
    pub angle: i32,
    /// Change relative to the current angle
    pub delta: i32,
}

/// Outcome of placing the pending weight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub object: PlacedObject,
    pub angle: i32,
}

/// The plank, its objects and the weight queued for the next placement
pub struct PlankModel<S = RandomWeights> {
    objects: Vec<PlacedObject>,
    current_angle: i32,
    pending_weight: Weight,
    weights: S,
}

impl<S: WeightSource> PlankModel<S> {
    /// Empty, level plank. Draws the first pending weight from `weights`.
    pub fn new(mut weights: S) -> Self {
        let pending_weight = weights.next_weight();
        PlankModel {
            objects: Vec::new(),
            current_angle: 0,
            pending_weight,
            weights,
        }
    }

    /// Placed objects, in placement order
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Tilt in whole degrees, positive when the right side is down
    pub fn current_angle(&self) -> i32 {
        self.current_angle
    }

    /// Weight the next placement will use
    pub fn pending_weight(&self) -> Weight {
        self.pending_weight
    }

    /// Torque and weight sums for the current objects
    pub fn totals(&self) -> Totals {
        aggregate(&self.objects)
    }

    /// Places `weight` at `position` and returns the new angle.
    ///
    /// The pending weight is re-rolled afterwards, whatever weight was placed.
    pub fn place(&mut self, position: f64, weight: Weight) -> Result<i32> {
        self.push(position, weight)?;
        Ok(self.current_angle)
    }

    /// Places the pending weight at `position`
    pub fn place_pending(&mut self, position: f64) -> Result<Placement> {
        let weight = self.pending_weight;
        let object = self.push(position, weight)?;
        Ok(Placement {
            object,
            angle: self.current_angle,
        })
    }

    /// Appends an object, recomputes the angle and re-rolls the pending weight
    fn push(&mut self, position: f64, weight: Weight) -> Result<PlacedObject> {
        let object = PlacedObject::new(position, weight)?;
        self.objects.push(object);
        self.current_angle = self.totals().angle();
        self.pending_weight = self.weights.next_weight();

        debug!(
            position = object.position(),
            weight = weight.get(),
            angle = self.current_angle,
            next_weight = self.pending_weight.get(),
            "placed object"
        );
        Ok(object)
    }

    /// Angle the plank would take if `weight` were placed at `position`.
    /// Leaves the model untouched.
    pub fn preview_angle(&self, position: f64, weight: Weight) -> Result<Preview> {
        let object = PlacedObject::new(position, weight)?;
        let mut totals = self.totals();
        totals.add(&object);
        let angle = totals.angle();

        trace!(position = object.position(), weight = weight.get(), angle, "preview");
        Ok(Preview {
            position: object.position(),
            weight,
            torque: object.torque(),
            angle,
            delta: angle - self.current_angle,
        })
    }

    /// Preview for the pending weight
    pub fn preview_pending(&self, position: f64) -> Result<Preview> {
        self.preview_angle(position, self.pending_weight)
    }

    /// Clears the plank and draws a fresh pending weight
    pub fn reset(&mut self) {
        self.objects.clear();
        self.current_angle = 0;
        self.pending_weight = self.weights.next_weight();
        debug!(next_weight = self.pending_weight.get(), "plank reset");
    }
}

impl Default for PlankModel<RandomWeights> {
    fn default() -> Self {
        PlankModel::new(RandomWeights::new())
    }
}
