//! Display state derived from the selection: markers and the result line.

use ri_core::geo::Location;
use ri_core::interaction::SelectionObserver;
use ri_core::selection::{Selection, SelectionTransition};

#[derive(Debug, Default)]
pub struct MapOverlay {
    markers: Vec<Location>,
    result_text: Option<String>,
}

impl MapOverlay {
    /// Marker positions in selection order.
    pub fn markers(&self) -> &[Location] {
        &self.markers
    }

    /// `Some` only while two points are held.
    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }
}

impl SelectionObserver for MapOverlay {
    fn selection_changed(&mut self, selection: &Selection, _transition: SelectionTransition) {
        self.markers.clear();
        self.markers.extend_from_slice(selection.points());
        self.result_text = selection
            .measurement()
            .map(|measurement| measurement.display_text());
    }
}
