//! Startup gate and the one-time record fetch.
//!
//! Nothing is spawned and no transition starts until the fetch task resolves.

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task, block_on, futures_lite::future};
use bevy::window::PrimaryWindow;

use crate::{
    config::ShowcaseConfig,
    data::{self, Record},
    error::ShowcaseResult,
    input::SignInSubmitted,
    showcase::Showcase,
    visual::setup::scene::{PanelAssets, spawn_panels},
};

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Waiting for the external sign-in
    #[default]
    SignIn,
    /// Records are being fetched
    Loading,
    /// Panels exist and respond to layout switches
    Ready,
    /// The records could not be loaded
    Failed,
}

/// Fetch running on the async compute pool
#[derive(Resource)]
pub struct PendingRecords(Task<ShowcaseResult<Vec<Record>>>);

/// System: leave the sign-in state once the gate opens
pub fn open_gate(
    config: Res<ShowcaseConfig>,
    mut sign_ins: MessageReader<SignInSubmitted>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let submitted = sign_ins.read().count() > 0;
    if !config.require_sign_in || submitted {
        info!("Sign-in gate open");
        next_state.set(AppState::Loading);
    }
}

/// System: kick off the fetch off the frame loop
pub fn start_fetch(mut commands: Commands, config: Res<ShowcaseConfig>) {
    let source = data::from_config(&config);

    info!("Fetching records from {}", source.describe());
    let task = AsyncComputeTaskPool::get().spawn(source.fetch());
    commands.insert_resource(PendingRecords(task));
}

/// System: once the fetch resolves, build the showcase and spawn its panels
pub fn poll_fetch(
    mut commands: Commands,
    pending: Option<ResMut<PendingRecords>>,
    config: Res<ShowcaseConfig>,
    time: Res<Time>,
    assets: Res<PanelAssets>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut pending) = pending else {
        return;
    };
    let Some(result) = block_on(future::poll_once(&mut pending.0)) else {
        return;
    };
    commands.remove_resource::<PendingRecords>();

    let built = result.and_then(|records| {
        info!("✓ Loaded {} records", records.len());
        Showcase::from_records(&records, &config, &mut rand::rng(), time.elapsed())
    });

    match built {
        Ok(showcase) => {
            spawn_panels(&mut commands, &showcase, &assets);
            info!(
                "Showcase ready: {} panels heading for {}",
                showcase.nodes().len(),
                showcase.current()
            );
            commands.insert_resource(showcase);
            next_state.set(AppState::Ready);
        }
        Err(e) => {
            error!("Failed to initialize showcase: {}", e);
            next_state.set(AppState::Failed);
        }
    }
}

/// System: make the failure visible in the window title
pub fn show_failure(
    config: Res<ShowcaseConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = windows.single_mut() {
        window.title = format!("{} (data unavailable)", config.window_title);
    }
}
