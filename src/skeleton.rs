//! Loading placeholder for the pool chart container.
//!
//! Layout only: block sizes and arrangement for the renderer to draw while
//! chart data is loading.

use serde::{Deserialize, Serialize};

/// Vertical margin applied above and below every block, in pixels.
pub const BLOCK_MARGIN_Y: u32 = 4;

/// Height of the chart area placeholder, in pixels.
pub const CHART_HEIGHT: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    Fixed(u32),
    Full,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Rectangular,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    Wave,
}

/// One placeholder block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub width: Width,
    pub height: u32,
    pub variant: Variant,
    pub animation: Animation,
    pub margin_y: u32,
}

impl Block {
    pub fn fixed(width: u32, height: u32) -> Self {
        Self::new(Width::Fixed(width), height)
    }

    pub fn full(height: u32) -> Self {
        Self::new(Width::Full, height)
    }

    fn new(width: Width, height: u32) -> Self {
        Self {
            width,
            height,
            variant: Variant::default(),
            animation: Animation::default(),
            margin_y: BLOCK_MARGIN_Y,
        }
    }

    /// Vertical space taken including margins.
    pub fn outer_height(&self) -> u32 {
        self.height + 2 * self.margin_y
    }
}

/// Header row: title/subtitle on the left, value/change lines on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub left: Vec<Block>,
    pub right: Vec<Block>,
}

/// Placeholder for the chart container: header then a full-width chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartContainerSkeleton {
    pub header: Header,
    pub chart: Block,
}

impl ChartContainerSkeleton {
    pub fn layout() -> Self {
        Self {
            header: Header {
                left: vec![Block::fixed(300, 34), Block::fixed(260, 18)],
                right: vec![Block::fixed(250, 24), Block::fixed(240, 24)],
            },
            chart: Block::full(CHART_HEIGHT),
        }
    }

    /// Minimum height needed to show the whole placeholder.
    pub fn min_height(&self) -> u32 {
        let column = |blocks: &[Block]| blocks.iter().map(Block::outer_height).sum::<u32>();
        column(&self.header.left).max(column(&self.header.right)) + self.chart.outer_height()
    }
}

impl Default for ChartContainerSkeleton {
    fn default() -> Self {
        Self::layout()
    }
}
