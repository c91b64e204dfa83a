use bevy::prelude::*;

use crate::config::ShowcaseConfig;

pub const CAMERA_FOV_DEGREES: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Perspective camera on the +Z axis looking back at the origin
///
/// Coordinate System (right-handed, Y-up):
/// ```text
///        Y
///        ↑
///        |
///        +---→ X
///       /
///      ↙ Z (towards the viewer)
/// ```
///
/// Every layout is centered on the origin, so the camera never moves.
fn setup_camera(mut commands: Commands, config: Res<ShowcaseConfig>) {
    let projection = Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_xyz(0.0, 0.0, config.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}
