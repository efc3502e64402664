//! Click-driven state machine over a [`Selection`].
//!
//! The machine owns the selection and a single observer. Every click is
//! applied and the observer is notified before `click` returns, so whatever
//! the observer renders always matches the current selection.

use tracing::{debug, info};

use crate::geo::Location;
use crate::selection::{Selection, SelectionTransition};

/// Receives the selection after every transition.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: &Selection, transition: SelectionTransition);
}

/// Observer that ignores every change.
impl SelectionObserver for () {
    fn selection_changed(&mut self, _selection: &Selection, _transition: SelectionTransition) {}
}

pub struct InteractionMachine<O> {
    selection: Selection,
    observer: O,
}

impl<O: SelectionObserver> InteractionMachine<O> {
    pub fn new(observer: O) -> Self {
        Self {
            selection: Selection::new(),
            observer,
        }
    }

    pub fn click(&mut self, location: Location) -> SelectionTransition {
        let transition = self.selection.click(location);
        debug!(
            lat = location.lat,
            lng = location.lng,
            ?transition,
            held = self.selection.len(),
            "map click applied"
        );
        if let Some(measurement) = self.selection.measurement() {
            info!(
                miles = measurement.miles,
                rhode_islands = measurement.rhode_islands,
                "measurement completed"
            );
        }
        self.observer.selection_changed(&self.selection, transition);
        transition
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<O: SelectionObserver + Default> Default for InteractionMachine<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}
