use crate::visual::animation::{
    advance_showcase, apply_layout_selection, ignore_early_selection, sync_panel_transforms,
};
use crate::visual::labels::place_panel_labels;
use crate::visual::setup::{
    AppState, open_gate, poll_fetch, setup_panel_assets, show_failure, start_fetch,
};
use bevy::prelude::*;

pub struct ShowcasePlugin;

impl Plugin for ShowcasePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_systems(Startup, setup_panel_assets)
            .add_systems(OnEnter(AppState::Loading), start_fetch)
            .add_systems(OnEnter(AppState::Failed), show_failure)
            .add_systems(Update, open_gate.run_if(in_state(AppState::SignIn)))
            .add_systems(Update, poll_fetch.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                ignore_early_selection.run_if(not(in_state(AppState::Ready))),
            )
            .add_systems(
                Update,
                (
                    // Layout switches first, so a switch takes effect this frame
                    apply_layout_selection,
                    advance_showcase,
                    sync_panel_transforms,
                    place_panel_labels,
                )
                    .chain()
                    .run_if(in_state(AppState::Ready)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowcaseConfig;
    use crate::input::{LayoutSelected, SignInSubmitted};
    use crate::layout::LayoutKind;
    use crate::showcase::Showcase;
    use crate::visual::setup::loading::PendingRecords;
    use crate::visual::setup::{PanelLabel, PanelNode};
    use bevy::state::app::StatesPlugin;
    use std::io::Write;
    use std::time::Duration;

    const SHEET: &str = "\
Name,Role,Company,Networth
Aina Rahman,Founder,Kopi Labs,250000
Ben Tan,Engineer,Grab,150000
Chong Wei,Analyst,Maybank,90000
";

    fn test_app(config: ShowcaseConfig) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_message::<LayoutSelected>()
            .add_message::<SignInSubmitted>()
            .insert_resource(config)
            .add_plugins(ShowcasePlugin);
        app
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    fn run_until_settled(app: &mut App) {
        for _ in 0..500 {
            app.update();
            if matches!(state(app), AppState::Ready | AppState::Failed) {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn test_selection_before_sign_in_is_ignored() {
        let mut app = test_app(ShowcaseConfig {
            source_url: "https://example.invalid/sheet.csv".into(),
            require_sign_in: true,
            ..Default::default()
        });

        app.update();
        app.world_mut().write_message(LayoutSelected(LayoutKind::Sphere));
        app.update();
        app.update();

        assert_eq!(state(&app), AppState::SignIn);
        assert!(app.world().get_resource::<Showcase>().is_none());
        assert!(app.world().get_resource::<PendingRecords>().is_none());
    }

    #[test]
    fn test_gate_fetch_and_select_flow() {
        let mut sheet = tempfile::NamedTempFile::new().unwrap();
        sheet.write_all(SHEET.as_bytes()).unwrap();

        let mut app = test_app(ShowcaseConfig {
            source_url: "https://example.invalid/sheet.csv".into(),
            source_file: Some(sheet.path().to_string_lossy().into_owned()),
            require_sign_in: true,
            ..Default::default()
        });
        app.update();

        // Selecting before the data exists does nothing
        app.world_mut().write_message(SignInSubmitted);
        app.world_mut().write_message(LayoutSelected(LayoutKind::Grid));
        run_until_settled(&mut app);
        assert_eq!(state(&app), AppState::Ready);

        let showcase = app.world().resource::<Showcase>();
        assert_eq!(showcase.nodes().len(), 3);
        assert_eq!(showcase.current(), LayoutKind::Table);

        let world = app.world_mut();
        assert_eq!(world.query::<&PanelNode>().iter(world).count(), 3);
        assert_eq!(world.query::<&PanelLabel>().iter(world).count(), 3);

        app.world_mut().write_message(LayoutSelected(LayoutKind::Helix));
        app.update();

        let showcase = app.world().resource::<Showcase>();
        assert_eq!(showcase.current(), LayoutKind::Helix);
        assert!(showcase.is_animating());
    }

    #[test]
    fn test_unreadable_source_fails_without_showcase() {
        let mut app = test_app(ShowcaseConfig {
            source_url: "https://example.invalid/sheet.csv".into(),
            source_file: Some("/definitely/not/here.csv".into()),
            ..Default::default()
        });

        run_until_settled(&mut app);

        assert_eq!(state(&app), AppState::Failed);
        assert!(app.world().get_resource::<Showcase>().is_none());
    }
}
