// Library exports for the binaries and tests
pub mod auditor;
pub mod bitmap_font;
pub mod canvas;
pub mod composer;
pub mod config;
pub mod constants;
pub mod exporter;
pub mod fonts;
pub mod installer;
pub mod logging;
pub mod project;
pub mod text;

pub use project::Project;
