pub mod animation;
pub mod labels;
pub mod plugin;
pub mod setup;

pub use plugin::ShowcasePlugin;
pub use setup::AppState;
