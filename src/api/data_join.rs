use std::time::Duration;

use crate::core::{BarGeometry, DataSet, LinearScale, baseline_bar};
use crate::error::{ChartError, ChartResult};
use crate::render::{BarElement, JoinPhase};

/// Timing applied to bar transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinTiming {
    pub enter_stagger: Duration,
    pub duration: Duration,
}

/// Counts produced by one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinSummary {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Enter/update/exit reconciliation of bars, keyed by data index.
///
/// The join remembers the geometry each index settled on, so updates animate
/// from the previous bar instead of re-entering from the baseline.
#[derive(Debug, Clone, Default)]
pub struct BarJoin {
    settled: Vec<BarGeometry>,
}

impl BarJoin {
    #[must_use]
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }

    /// Forgets every bound bar; the next pass enters all of them again.
    pub fn clear(&mut self) {
        self.settled.clear();
    }

    /// Plans the transitions from the bound bars to `targets`.
    ///
    /// The join itself is unchanged until [`BarJoin::commit`] records the
    /// drawn geometry.
    pub fn reconcile(
        &self,
        data: &DataSet,
        targets: &[BarGeometry],
        value_scale: LinearScale,
        timing: JoinTiming,
    ) -> ChartResult<(Vec<BarElement>, JoinSummary)> {
        if targets.len() != data.len() {
            return Err(ChartError::InvalidData(format!(
                "bar count {} does not match data length {}",
                targets.len(),
                data.len()
            )));
        }

        let previous = self.settled.len();
        let summary = JoinSummary {
            entered: targets.len().saturating_sub(previous),
            updated: targets.len().min(previous),
            exited: previous.saturating_sub(targets.len()),
        };

        let mut elements = Vec::with_capacity(targets.len());
        for (index, (point, &to)) in data.points().iter().zip(targets).enumerate() {
            let element = match self.settled.get(index) {
                Some(&from) => BarElement {
                    index,
                    label: point.month_label(),
                    value_label: point.monthly_formatted().to_owned(),
                    phase: JoinPhase::Update,
                    from,
                    to,
                    delay: Duration::ZERO,
                    duration: timing.duration,
                },
                None => BarElement {
                    index,
                    label: point.month_label(),
                    value_label: point.monthly_formatted().to_owned(),
                    phase: JoinPhase::Enter,
                    from: baseline_bar(to, value_scale),
                    to,
                    delay: stagger(timing.enter_stagger, index),
                    duration: timing.duration,
                },
            };
            elements.push(element);
        }

        Ok((elements, summary))
    }

    /// Binds `drawn` as the settled geometry of the next pass.
    pub fn commit(&mut self, drawn: &[BarGeometry]) {
        self.settled.clear();
        self.settled.extend_from_slice(drawn);
    }
}

fn stagger(step: Duration, index: usize) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
