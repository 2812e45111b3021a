// Application layer - Feed access seam and map composition use case
pub mod feed_repository;
pub mod map_service;
