//! Captions drawn over the panels in screen space.
//!
//! Each panel gets a UI text node that is moved to the panel's projected
//! position every frame, and hidden while the panel is off screen or turned
//! away from the camera.

use bevy::prelude::*;

use crate::{
    camera::MainCamera,
    showcase::Showcase,
    visual::setup::{LABEL_HEIGHT, LABEL_WIDTH, PanelLabel},
};

/// Is the panel's front face (+Z) turned towards `eye`?
pub fn faces_viewer(orientation: Quat, position: Vec3, eye: Vec3) -> bool {
    (orientation * Vec3::Z).dot(eye - position) > 0.0
}

/// Top-left corner of a label centered on `point`
pub fn label_origin(point: Vec2) -> Vec2 {
    point - Vec2::new(LABEL_WIDTH, LABEL_HEIGHT) * 0.5
}

/// System: move every caption onto its panel
pub fn place_panel_labels(
    showcase: Res<Showcase>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut labels: Query<(&PanelLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let eye = camera_transform.translation();

    for (label, mut node, mut visibility) in &mut labels {
        let Some(panel) = showcase.nodes().get(label.index) else {
            continue;
        };

        let on_screen = camera
            .world_to_viewport(camera_transform, panel.position)
            .ok()
            .filter(|_| faces_viewer(panel.orientation, panel.position, eye));

        match on_screen {
            Some(point) => {
                let origin = label_origin(point);
                node.left = Val::Px(origin.x);
                node.top = Val::Px(origin.y);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}
