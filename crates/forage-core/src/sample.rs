#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discrete class label produced by classification.
///
/// Valid labels are non-negative scorer ordinals. `Category::INVALID` marks a sample the scorer
/// could not accept; it orders before every valid label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category(pub i32);

impl Category {
    pub const INVALID: Category = Category(-1);

    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }

    pub fn ordinal(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("invalid")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleShape {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl SampleShape {
    pub const fn new(width: u32, height: u32, channels: u32) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One input to the scorer: an image-like tensor, row-major, channels interleaved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub shape: SampleShape,
    pub data: Vec<f32>,
}

impl Sample {
    pub fn new(shape: SampleShape, data: Vec<f32>) -> Self {
        Self { shape, data }
    }

    pub fn filled(shape: SampleShape, value: f32) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Shape agrees with `expected` and the buffer is fully populated.
    pub fn matches(&self, expected: SampleShape) -> bool {
        self.shape == expected && self.data.len() == expected.len()
    }

    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f32>() / self.data.len() as f32
    }
}

/// The pictures associated with a resource node; classified as a batch when the node is drained.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Depiction {
    pub samples: Vec<Sample>,
}

impl Depiction {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}
