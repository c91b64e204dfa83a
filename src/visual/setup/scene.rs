use bevy::prelude::*;

use crate::{
    panels::NetWorthTier,
    showcase::Showcase,
};

/// Panel card size in world units
const PANEL_WIDTH: f32 = 120.0;
const PANEL_HEIGHT: f32 = 160.0;
const PANEL_DEPTH: f32 = 4.0;

/// Links an entity to its node in the showcase
#[derive(Component, Debug, Clone, Copy)]
pub struct PanelNode {
    pub index: usize,
}

/// Screen-space caption that follows panel `index`
#[derive(Component, Debug, Clone, Copy)]
pub struct PanelLabel {
    pub index: usize,
}

pub const LABEL_WIDTH: f32 = 120.0;
pub const LABEL_HEIGHT: f32 = 60.0;
const LABEL_FONT_SIZE: f32 = 11.0;

/// Mesh shared by every panel, plus one material per net worth tier
#[derive(Resource)]
pub struct PanelAssets {
    mesh: Handle<Mesh>,
    low: Handle<StandardMaterial>,
    mid: Handle<StandardMaterial>,
    high: Handle<StandardMaterial>,
}

impl PanelAssets {
    pub fn material(&self, tier: NetWorthTier) -> Handle<StandardMaterial> {
        match tier {
            NetWorthTier::Low => self.low.clone(),
            NetWorthTier::Mid => self.mid.clone(),
            NetWorthTier::High => self.high.clone(),
        }
    }
}

/// System: build the shared panel mesh and tier materials
pub fn setup_panel_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut tier_material = |tier: NetWorthTier| {
        materials.add(StandardMaterial {
            base_color: tier.color(),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })
    };

    let assets = PanelAssets {
        low: tier_material(NetWorthTier::Low),
        mid: tier_material(NetWorthTier::Mid),
        high: tier_material(NetWorthTier::High),
        mesh: meshes.add(Cuboid::new(PANEL_WIDTH, PANEL_HEIGHT, PANEL_DEPTH)),
    };
    commands.insert_resource(assets);
}

/// Spawn one entity per showcase node, at the node's current position
pub fn spawn_panels(commands: &mut Commands, showcase: &Showcase, assets: &PanelAssets) {
    for (index, node) in showcase.nodes().iter().enumerate() {
        commands.spawn((
            PanelNode { index },
            Name::new(node.content.label.clone()),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material(node.content.tier)),
            Transform::from_translation(node.position).with_rotation(node.orientation),
        ));

        // Placed over the panel each frame by `place_panel_labels`
        commands.spawn((
            PanelLabel { index },
            Text::new(node.content.caption()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(LABEL_WIDTH),
                height: Val::Px(LABEL_HEIGHT),
                ..default()
            },
            Visibility::Hidden,
        ));
    }

    info!("Spawned {} panels", showcase.nodes().len());
}
