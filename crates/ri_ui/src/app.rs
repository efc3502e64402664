//! Application state for the map window.

use ri_core::geo::Location;
use ri_core::interaction::InteractionMachine;
use ri_core::selection::SelectionTransition;

pub mod config;
pub mod map_tiles;
pub mod overlay;
pub mod viewport;

use config::MapConfig;
use map_tiles::MapTileState;
use overlay::MapOverlay;
use viewport::MapViewport;

/// Main application state for the Rhode Island map.
pub struct RhodeIslandApp {
    pub config: MapConfig,
    pub viewport: MapViewport,
    pub map_tiles: MapTileState,
    interaction: InteractionMachine<MapOverlay>,
}

impl RhodeIslandApp {
    pub fn new(config: MapConfig) -> Self {
        Self {
            viewport: MapViewport::new(&config),
            map_tiles: MapTileState::new(&config),
            interaction: InteractionMachine::new(MapOverlay::default()),
            config,
        }
    }

    pub fn handle_map_click(&mut self, location: Location) -> SelectionTransition {
        self.interaction.click(location)
    }

    pub fn overlay(&self) -> &MapOverlay {
        self.interaction.observer()
    }
}
