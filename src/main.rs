use bevy::prelude::*;
use bevy::window::WindowResolution;

use panel_showcase::camera::CameraPlugin;
use panel_showcase::config::ShowcaseConfig;
use panel_showcase::input::InputPlugin;
use panel_showcase::visual::ShowcasePlugin;

fn main() -> AppExit {
    let config = match ShowcaseConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("panel_showcase: {}", e);
            return AppExit::error();
        }
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: config.window_title.clone(),
            resolution: WindowResolution::new(1600, 900),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(config)
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(ShowcasePlugin);

    app.run()
}
