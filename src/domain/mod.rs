// Domain layer - Records, scales and the composed map view
pub mod color_scale;
pub mod earthquake;
pub mod features;
pub mod legend;
pub mod map_view;
