//! Target arrangements for the panels.
//!
//! [`generate_layouts`] is a pure function of the panel count: for every
//! [`LayoutKind`] it returns one [`LayoutTransform`] per panel, in panel order.
//! Index `i` of every sequence is the destination of panel `i`.

pub mod shapes;

use bevy::prelude::{Quat, Vec3};
use std::fmt;

/// The four fixed arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Table,
    Sphere,
    Helix,
    Grid,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Table,
        LayoutKind::Sphere,
        LayoutKind::Helix,
        LayoutKind::Grid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Table => "table",
            LayoutKind::Sphere => "sphere",
            LayoutKind::Helix => "helix",
            LayoutKind::Grid => "grid",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destination of one panel under one layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTransform {
    pub position: Vec3,
    /// `None` means the panel faces the camera (identity rotation)
    pub orientation: Option<Quat>,
}

impl LayoutTransform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: None,
        }
    }
}

/// Targets for every layout kind, each `count` long
#[derive(Debug, Clone)]
pub struct LayoutSet {
    table: Vec<LayoutTransform>,
    sphere: Vec<LayoutTransform>,
    helix: Vec<LayoutTransform>,
    grid: Vec<LayoutTransform>,
}

impl LayoutSet {
    pub fn get(&self, kind: LayoutKind) -> &[LayoutTransform] {
        match kind {
            LayoutKind::Table => &self.table,
            LayoutKind::Sphere => &self.sphere,
            LayoutKind::Helix => &self.helix,
            LayoutKind::Grid => &self.grid,
        }
    }

    /// Number of panels each layout places
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Compute all four layouts for `count` panels
pub fn generate_layouts(count: usize) -> LayoutSet {
    LayoutSet {
        table: (0..count).map(shapes::table).collect(),
        sphere: (0..count).map(|i| shapes::sphere(i, count)).collect(),
        helix: (0..count).map(shapes::helix).collect(),
        grid: (0..count).map(shapes::grid).collect(),
    }
}
