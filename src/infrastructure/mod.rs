// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod feed_repository;
pub mod geojson;
pub mod http_response;
pub mod map_mapper;
