//! One panel per record, in record order.

use bevy::prelude::{Color, Quat, Vec3};
use rand::Rng;

use crate::data::Record;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::layout::LayoutSet;

/// Net worth bracket, drives the panel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetWorthTier {
    #[default]
    Low,
    Mid,
    High,
}

impl NetWorthTier {
    pub const MID_THRESHOLD: u64 = 100_000;
    pub const HIGH_THRESHOLD: u64 = 200_000;

    pub fn from_networth(networth: u64) -> Self {
        if networth < Self::MID_THRESHOLD {
            NetWorthTier::Low
        } else if networth < Self::HIGH_THRESHOLD {
            NetWorthTier::Mid
        } else {
            NetWorthTier::High
        }
    }

    pub fn color(self) -> Color {
        match self {
            NetWorthTier::Low => Color::srgba(1.0, 0.0, 0.0, 0.6), // red
            NetWorthTier::Mid => Color::srgba(1.0, 165.0 / 255.0, 0.0, 0.6), // orange
            NetWorthTier::High => Color::srgba(0.0, 1.0, 0.0, 0.6), // green
        }
    }
}

/// What a panel displays, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelContent {
    pub label: String,
    /// Role, company and net worth, one per line
    pub details: String,
    pub tier: NetWorthTier,
}

impl PanelContent {
    pub fn from_record(record: &Record) -> Self {
        PanelContent {
            label: record.name.clone(),
            details: format!("{}\n{}\nRM {}", record.role, record.company, record.networth),
            tier: NetWorthTier::from_networth(record.networth),
        }
    }

    /// Name on the first line, details below
    pub fn caption(&self) -> String {
        format!("{}\n{}", self.label, self.details)
    }
}

/// A panel's live state; only the transition controller moves it
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub position: Vec3,
    pub orientation: Quat,
    pub content: PanelContent,
}

/// Create one node per record, scattered in a cube of half-width `extent`
pub fn populate(records: &[Record], extent: f32, rng: &mut impl Rng) -> Vec<VisualNode> {
    records
        .iter()
        .map(|record| VisualNode {
            position: Vec3::new(
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            ),
            orientation: Quat::IDENTITY,
            content: PanelContent::from_record(record),
        })
        .collect()
}

/// Panel `i` is driven by target `i` of every layout, so the counts must agree
pub fn ensure_matches_layouts(nodes: &[VisualNode], layouts: &LayoutSet) -> ShowcaseResult<()> {
    if nodes.len() != layouts.len() {
        return Err(ShowcaseError::LayoutMismatch {
            nodes: nodes.len(),
            targets: layouts.len(),
        });
    }
    Ok(())
}
