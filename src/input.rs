use bevy::prelude::*;

use crate::layout::LayoutKind;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LayoutSelected>()
            .add_message::<SignInSubmitted>()
            .add_systems(Update, collect_key_commands);
    }
}

/// The user asked for a layout switch
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSelected(pub LayoutKind);

/// Stand-in for the external sign-in callback
#[derive(Message, Debug, Clone, Copy)]
pub struct SignInSubmitted;

/// Number row or initial letter of the layout name
pub fn layout_for_key(key: KeyCode) -> Option<LayoutKind> {
    match key {
        KeyCode::Digit1 | KeyCode::KeyT => Some(LayoutKind::Table),
        KeyCode::Digit2 | KeyCode::KeyS => Some(LayoutKind::Sphere),
        KeyCode::Digit3 | KeyCode::KeyH => Some(LayoutKind::Helix),
        KeyCode::Digit4 | KeyCode::KeyG => Some(LayoutKind::Grid),
        _ => None,
    }
}

fn collect_key_commands(
    keys: Res<ButtonInput<KeyCode>>,
    mut layouts: MessageWriter<LayoutSelected>,
    mut sign_ins: MessageWriter<SignInSubmitted>,
) {
    for &key in keys.get_just_pressed() {
        if let Some(kind) = layout_for_key(key) {
            layouts.write(LayoutSelected(kind));
        }
        if key == KeyCode::Enter {
            sign_ins.write(SignInSubmitted);
        }
    }
}
