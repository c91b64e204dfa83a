//! Data-driven panels animated between table, sphere, helix and grid layouts.

pub mod camera;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod layout;
pub mod panels;
pub mod showcase;
pub mod transition;
pub mod visual;

pub use error::{ShowcaseError, ShowcaseResult};
pub use layout::{LayoutKind, LayoutSet, LayoutTransform, generate_layouts};
pub use showcase::Showcase;
