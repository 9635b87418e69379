/// Renderer module - boundary with the windowing/rasterization substrate

// Module declarations
pub mod substrate;
pub mod viewport;
#[cfg(test)]
pub mod mock_substrate;

// Re-export everything from substrate.rs
pub use substrate::*;
pub use viewport::Viewport;
