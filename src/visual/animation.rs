use bevy::prelude::*;

use crate::{input::LayoutSelected, showcase::Showcase, visual::setup::PanelNode};

/// System: start a transition for each requested layout (last one wins)
pub fn apply_layout_selection(
    time: Res<Time>,
    mut selections: MessageReader<LayoutSelected>,
    mut showcase: ResMut<Showcase>,
) {
    for &LayoutSelected(kind) in selections.read() {
        match showcase.select(kind, time.elapsed()) {
            Ok(()) => info!("Layout → {} ({} panels)", kind, showcase.nodes().len()),
            Err(e) => error!("Cannot switch to {}: {}", kind, e),
        }
    }
}

/// System: layout switches before the panels exist do nothing
pub fn ignore_early_selection(mut selections: MessageReader<LayoutSelected>) {
    for LayoutSelected(kind) in selections.read() {
        warn!("Ignoring {} selection: panels are not ready yet", kind);
    }
}

/// System: step the active transition
pub fn advance_showcase(time: Res<Time>, mut showcase: ResMut<Showcase>) {
    if showcase.is_animating() {
        showcase.advance(time.elapsed());
    }
}

/// System: mirror node state into entity transforms
pub fn sync_panel_transforms(
    showcase: Res<Showcase>,
    mut panels: Query<(&PanelNode, &mut Transform)>,
) {
    if !showcase.is_changed() {
        return;
    }

    for (panel, mut transform) in &mut panels {
        if let Some(node) = showcase.nodes().get(panel.index) {
            transform.translation = node.position;
            transform.rotation = node.orientation;
        }
    }
}
