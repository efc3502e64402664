//! The ordered set of up to two points chosen on the map.
//!
//! A click appends while fewer than two points are held. A click on a full
//! selection discards both points and starts over with the new one; the
//! oldest point is never evicted on its own.

use crate::geo::Location;
use crate::measurement::Measurement;

pub const MAX_POINTS: usize = 2;

/// Which transition a click produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTransition {
    /// Empty → one point.
    Started,
    /// One point → two points.
    Completed,
    /// Two points → one point (the clicked one).
    Restarted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    points: [Location; MAX_POINTS],
    len: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self {
            points: [Location::new(0.0, 0.0); MAX_POINTS],
            len: 0,
        }
    }

    pub fn click(&mut self, location: Location) -> SelectionTransition {
        match self.len {
            0 => {
                self.points[0] = location;
                self.len = 1;
                SelectionTransition::Started
            }
            1 => {
                self.points[1] = location;
                self.len = 2;
                SelectionTransition::Completed
            }
            _ => {
                self.points[0] = location;
                self.len = 1;
                SelectionTransition::Restarted
            }
        }
    }

    /// Held points, oldest first.
    pub fn points(&self) -> &[Location] {
        &self.points[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len == MAX_POINTS
    }

    /// Only a full selection yields a measurement.
    pub fn measurement(&self) -> Option<Measurement> {
        match self.points() {
            [from, to] => Some(Measurement::between(*from, *to)),
            _ => None,
        }
    }
}
