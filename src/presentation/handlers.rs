// HTTP request handlers
use crate::application::map_service::MapState;
use crate::domain::map_view::{MapView, OverlayEvent};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::map_mapper::{map_view_to_dto, MapViewDto};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Host page with the `map` container
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Current map view as JSON
pub async fn get_map(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let dto = {
        let map_state = state.map_state.read().await;
        match ready_view(&map_state) {
            Ok(view) => map_view_to_dto(view),
            Err(response) => return response,
        }
    };

    send_view(&dto, &headers).await
}

/// Legend markup, or no content while the legend is hidden
pub async fn get_legend(State(state): State<Arc<AppState>>) -> Response {
    let map_state = state.map_state.read().await;
    match ready_view(&map_state) {
        Ok(view) if view.legend_visible() => Html(view.legend.legend.to_html()).into_response(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(response) => response,
    }
}

/// Turn an overlay on
pub async fn add_overlay(
    Path(name): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    toggle_overlay(OverlayEvent::Add(name), &headers, &state).await
}

/// Turn an overlay off
pub async fn remove_overlay(
    Path(name): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    toggle_overlay(OverlayEvent::Remove(name), &headers, &state).await
}

/// Re-fetch both feeds and recompose the view
pub async fn refresh_map(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    state.reload().await;
    get_map(headers, State(state)).await
}

async fn toggle_overlay(event: OverlayEvent, headers: &HeaderMap, state: &AppState) -> Response {
    let dto = {
        let mut map_state = state.map_state.write().await;
        let view = match &mut *map_state {
            MapState::Ready(view) => view,
            other => return not_ready(other),
        };

        if let Err(e) = view.handle(&event) {
            tracing::warn!("Ignoring overlay event: {}", e);
            return (StatusCode::NOT_FOUND, e.to_string()).into_response();
        }
        tracing::debug!(
            "Overlay event {:?}, overlay visible: {:?}, legend visible: {}",
            event,
            view.overlay(event.overlay_name()).map(|o| o.visible),
            view.legend_visible()
        );
        map_view_to_dto(view)
    };

    send_view(&dto, headers).await
}

fn ready_view(state: &MapState) -> Result<&MapView, Response> {
    match state {
        MapState::Ready(view) => Ok(view),
        other => Err(not_ready(other)),
    }
}

fn not_ready(state: &MapState) -> Response {
    match state {
        MapState::Failed(message) => (StatusCode::SERVICE_UNAVAILABLE, message.clone()).into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "map is still loading").into_response(),
    }
}

async fn send_view(dto: &MapViewDto, headers: &HeaderMap) -> Response {
    match json_response(dto, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::feed_repository::FeedRepository;
    use crate::application::map_service::MapService;
    use crate::domain::earthquake::{EarthquakeRecord, PlateBoundaryRecord};
    use crate::domain::features::FeatureRenderer;
    use crate::domain::map_view::{MapOptions, EARTHQUAKES_OVERLAY, PLATES_OVERLAY};
    use async_trait::async_trait;

    struct StaticFeeds {
        available: bool,
    }

    #[async_trait]
    impl FeedRepository for StaticFeeds {
        async fn fetch_earthquakes(&self) -> anyhow::Result<Vec<EarthquakeRecord>> {
            if !self.available {
                anyhow::bail!("earthquake feed unreachable");
            }
            Ok(vec![
                EarthquakeRecord::new(2.0, "A".to_string(), 0, -120.0, 36.0),
                EarthquakeRecord::new(5.5, "B".to_string(), 0, 142.3, 38.1),
            ])
        }

        async fn fetch_plate_boundaries(&self) -> anyhow::Result<Vec<PlateBoundaryRecord>> {
            Ok(vec![PlateBoundaryRecord::new(vec![(0.0, 0.0), (1.0, 1.0)])])
        }
    }

    async fn app_state(available: bool) -> Arc<AppState> {
        let service = MapService::new(
            Arc::new(StaticFeeds { available }),
            MapOptions::default(),
            FeatureRenderer::default(),
        );
        let state = Arc::new(AppState::new(service));
        state.reload().await;
        state
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_map() {
        let response = get_map(HeaderMap::new(), State(app_state(true).await)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["overlays"].as_array().unwrap().len(), 2);
        assert_eq!(value["legend"]["visible"], true);
    }

    #[tokio::test]
    async fn test_failed_load_is_unavailable() {
        let state = app_state(false).await;

        let response = get_map(HeaderMap::new(), State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_text(response).await.contains("earthquake feed unreachable"));

        let response = add_overlay(Path(EARTHQUAKES_OVERLAY.to_string()), HeaderMap::new(), State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_legend_toggle_round_trip() {
        let state = app_state(true).await;
        let before = body_text(get_legend(State(state.clone())).await).await;

        let response = remove_overlay(Path(EARTHQUAKES_OVERLAY.to_string()), HeaderMap::new(), State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_legend(State(state.clone())).await.status(), StatusCode::NO_CONTENT);

        add_overlay(Path(EARTHQUAKES_OVERLAY.to_string()), HeaderMap::new(), State(state.clone())).await;
        let after = get_legend(State(state)).await;
        assert_eq!(after.status(), StatusCode::OK);
        assert_eq!(body_text(after).await, before);
    }

    #[tokio::test]
    async fn test_plate_toggle_keeps_legend() {
        let state = app_state(true).await;

        remove_overlay(Path(PLATES_OVERLAY.to_string()), HeaderMap::new(), State(state.clone())).await;
        assert_eq!(get_legend(State(state)).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_overlay_is_not_found() {
        let response = add_overlay(Path("Volcanoes".to_string()), HeaderMap::new(), State(app_state(true).await)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_has_map_container() {
        let Html(page) = index().await;
        assert!(page.contains("id=\"map\""));
        // Overlay toggles only touch the legend when the service answered 2xx
        assert!(page.contains("r.ok ? r.json() : null"));
    }
}
