pub mod loading;
pub mod scene;

pub use loading::{AppState, open_gate, poll_fetch, show_failure, start_fetch};
pub use scene::{
    LABEL_HEIGHT, LABEL_WIDTH, PanelAssets, PanelLabel, PanelNode, setup_panel_assets,
    spawn_panels,
};
