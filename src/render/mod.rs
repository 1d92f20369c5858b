//! Rendering - wgpu surface setup and egui painting

mod renderer;

pub use renderer::Renderer;
