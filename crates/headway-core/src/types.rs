use crate::{HeadwayError, Result};
use serde::Serialize;
use std::fmt;

/// A cylinder address on the disk
pub type Cylinder = u32;

/// Default number of addressable cylinders
pub const DEFAULT_DISK_SIZE: u32 = 1000;

/// Geometry of the simulated disk
///
/// The only parameter is the number of cylinders. Valid addresses are
/// `0..size`, so the outermost cylinder is `size - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiskGeometry {
    size: u32,
}

impl DiskGeometry {
    /// Create a geometry with `size` cylinders
    pub fn new(size: i64) -> Result<Self> {
        if size < 1 || size > i64::from(u32::MAX) {
            return Err(HeadwayError::invalid_disk_size(size));
        }
        Ok(Self { size: size as u32 })
    }

    /// Number of cylinders
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Lowest addressable cylinder
    pub fn min_cylinder(&self) -> Cylinder {
        0
    }

    /// Highest addressable cylinder
    pub fn max_cylinder(&self) -> Cylinder {
        self.size - 1
    }

    /// Whether `value` is a valid address on this disk
    pub fn contains(&self, value: i64) -> bool {
        value >= 0 && value < i64::from(self.size)
    }

    /// Check that `value` is addressable and convert it to a cylinder.
    /// `field` names the offending input in the error.
    pub fn check(&self, value: i64, field: &str) -> Result<Cylinder> {
        if !self.contains(value) {
            return Err(HeadwayError::range_error(value, field, self.size));
        }
        Ok(value as Cylinder)
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        Self {
            size: DEFAULT_DISK_SIZE,
        }
    }
}

impl fmt::Display for DiskGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cylinders (0-{})", self.size, self.max_cylinder())
    }
}
