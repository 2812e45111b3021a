// Application state for HTTP handlers
use crate::application::map_service::{MapService, MapState};
use tokio::sync::RwLock;

pub struct AppState {
    pub map_service: MapService,
    pub map_state: RwLock<MapState>,
}

impl AppState {
    pub fn new(map_service: MapService) -> Self {
        Self {
            map_service,
            map_state: RwLock::new(MapState::Loading),
        }
    }

    /// Run the fetch and compose pipeline and store its outcome
    pub async fn reload(&self) {
        let state = self.map_service.load_state().await;
        *self.map_state.write().await = state;
    }
}
