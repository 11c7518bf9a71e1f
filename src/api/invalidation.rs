use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::BarChartView;

/// Domain-oriented invalidation topic used to classify redraw requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Data,
    Labels,
    Scale,
    Style,
    Layout,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Data => 1 << 0,
            Self::Labels => 1 << 1,
            Self::Scale => 1 << 2,
            Self::Style => 1 << 3,
            Self::Layout => 1 << 4,
        }
    }
}

/// Coalesced bitmask of pending redraw topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Data.bit()
        | InvalidationTopic::Labels.bit()
        | InvalidationTopic::Scale.bit()
        | InvalidationTopic::Style.bit()
        | InvalidationTopic::Layout.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl<R: Renderer> BarChartView<R> {
    /// Records a redraw request; the host renders on its next draw callback.
    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.pending = self.pending.with_topic(topic);
        trace!(?topic, "bar chart invalidated");
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.pending
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.pending.is_none()
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.pending = InvalidationTopics::none();
    }

    /// Renders only when a redraw was requested since the last render.
    ///
    /// Returns whether a frame was rendered.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }
}
