pub mod renderer;

pub use renderer::{layout_overlay, scene, score_text, OverlayLayout, Renderer, Sprite};
