//! Drives panels from wherever they are to a layout's targets.
//!
//! Each in-flight move is a plain [`PositionTween`] record. Starting a new
//! transition replaces the whole set, so the previous one stops on the spot
//! and no panel is ever animated by two transitions at once.

use bevy::prelude::{Quat, Vec3};
use std::time::Duration;

use super::easing::ease_in_out_expo;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::layout::LayoutTransform;
use crate::panels::VisualNode;

/// Position animation for one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionTween {
    /// Index of the panel this tween moves
    pub node: usize,
    pub from: Vec3,
    pub to: Vec3,
    /// Applied when the panel arrives
    pub orientation: Quat,
    pub started_at: Duration,
    pub duration: Duration,
}

impl PositionTween {
    /// Linear progress through the tween, clamped to [0, 1]
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    pub fn sample(&self, now: Duration) -> Vec3 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_in_out_expo(t))
    }
}

/// The single active transition
#[derive(Debug, Default)]
pub struct TransitionController {
    tweens: Vec<PositionTween>,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running transition with one towards `targets`
    ///
    /// Fails without touching anything if the counts differ. Returns
    /// immediately; panels only move when [`advance`](Self::advance) runs.
    pub fn transition_to(
        &mut self,
        nodes: &[VisualNode],
        targets: &[LayoutTransform],
        duration_ms: u64,
        now: Duration,
    ) -> ShowcaseResult<()> {
        if nodes.len() != targets.len() {
            return Err(ShowcaseError::LayoutMismatch {
                nodes: nodes.len(),
                targets: targets.len(),
            });
        }
        if duration_ms == 0 {
            return Err(ShowcaseError::InvalidDuration);
        }

        let duration = Duration::from_millis(duration_ms);
        self.tweens = nodes
            .iter()
            .zip(targets)
            .enumerate()
            .map(|(node, (visual, target))| PositionTween {
                node,
                from: visual.position,
                to: target.position,
                orientation: target.orientation.unwrap_or(Quat::IDENTITY),
                started_at: now,
                duration,
            })
            .collect();

        Ok(())
    }

    /// Move every animated panel to its eased position for `now`
    ///
    /// Tweens that reach their end write the exact target, snap the panel's
    /// orientation and are retired.
    pub fn advance(&mut self, nodes: &mut [VisualNode], now: Duration) {
        self.tweens.retain(|tween| {
            let Some(node) = nodes.get_mut(tween.node) else {
                return false;
            };

            node.position = tween.sample(now);

            let arrived = tween.progress(now) >= 1.0;
            if arrived {
                node.orientation = tween.orientation;
            }
            !arrived
        });
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn tweens(&self) -> &[PositionTween] {
        &self.tweens
    }
}
