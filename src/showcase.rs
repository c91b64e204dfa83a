//! The showcase context: panels, their layouts and the active transition.
//!
//! Everything that moves a panel goes through this one object, which the
//! frame loop owns as a resource.

use bevy::prelude::Resource;
use rand::Rng;
use std::time::Duration;

use crate::config::ShowcaseConfig;
use crate::data::{Record, RecordSource};
use crate::error::ShowcaseResult;
use crate::layout::{LayoutKind, LayoutSet, generate_layouts};
use crate::panels::{VisualNode, ensure_matches_layouts, populate};
use crate::transition::TransitionController;

/// Layout shown as soon as the panels exist
pub const INITIAL_LAYOUT: LayoutKind = LayoutKind::Table;

#[derive(Resource, Debug)]
pub struct Showcase {
    nodes: Vec<VisualNode>,
    layouts: LayoutSet,
    controller: TransitionController,
    transition_ms: u64,
    current: LayoutKind,
}

impl Showcase {
    /// Fetch the records, then build the showcase from them
    pub fn initialize(
        source: &dyn RecordSource,
        config: &ShowcaseConfig,
        rng: &mut impl Rng,
        now: Duration,
    ) -> ShowcaseResult<Self> {
        let records = source.fetch_records()?;
        Self::from_records(&records, config, rng, now)
    }

    /// Generate layouts, create the panels and start moving them into the table
    pub fn from_records(
        records: &[Record],
        config: &ShowcaseConfig,
        rng: &mut impl Rng,
        now: Duration,
    ) -> ShowcaseResult<Self> {
        let layouts = generate_layouts(records.len());
        let nodes = populate(records, config.scatter_extent, rng);
        ensure_matches_layouts(&nodes, &layouts)?;

        let mut showcase = Showcase {
            nodes,
            layouts,
            controller: TransitionController::new(),
            transition_ms: config.transition_ms,
            current: INITIAL_LAYOUT,
        };
        showcase.select(INITIAL_LAYOUT, now)?;
        Ok(showcase)
    }

    /// Start a transition to `kind`, replacing whatever is in flight
    pub fn select(&mut self, kind: LayoutKind, now: Duration) -> ShowcaseResult<()> {
        self.controller.transition_to(
            &self.nodes,
            self.layouts.get(kind),
            self.transition_ms,
            now,
        )?;
        self.current = kind;
        Ok(())
    }

    /// Advance the active transition to `now`
    pub fn advance(&mut self, now: Duration) {
        self.controller.advance(&mut self.nodes, now);
    }

    pub fn nodes(&self) -> &[VisualNode] {
        &self.nodes
    }

    pub fn layouts(&self) -> &LayoutSet {
        &self.layouts
    }

    /// The most recently selected layout
    pub fn current(&self) -> LayoutKind {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }
}
