use std::ops::{Add, Neg};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A single monochrome intensity image.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// The three exposures cut from one plate, all the same shape.
#[derive(Clone, Debug)]
pub struct ChannelStack {
    pub blue: Frame,
    pub green: Frame,
    pub red: Frame,
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }
}

/// Integer translation, in pixels, to apply to a moving channel so that it
/// overlays the reference channel.
///
/// Positive `dy` moves content down, positive `dx` moves content right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Displacement {
    pub dy: i32,
    pub dx: i32,
}

impl Displacement {
    pub const ZERO: Displacement = Displacement { dy: 0, dx: 0 };

    pub const fn new(dy: i32, dx: i32) -> Self {
        Self { dy, dx }
    }

    /// Scale both components, used when carrying an estimate to a finer
    /// pyramid level.
    pub fn scaled(self, factor: i32) -> Self {
        Self {
            dy: self.dy * factor,
            dx: self.dx * factor,
        }
    }
}

impl Add for Displacement {
    type Output = Displacement;

    fn add(self, rhs: Displacement) -> Displacement {
        Displacement {
            dy: self.dy + rhs.dy,
            dx: self.dx + rhs.dx,
        }
    }
}

impl Neg for Displacement {
    type Output = Displacement;

    fn neg(self) -> Displacement {
        Displacement {
            dy: -self.dy,
            dx: -self.dx,
        }
    }
}

impl std::fmt::Display for Displacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(dy={}, dx={})", self.dy, self.dx)
    }
}

/// Resolved displacements of the two moving channels against blue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelOffsets {
    pub green: Displacement,
    pub red: Displacement,
}
