//! Rectangular redaction regions.

use crate::util::InvalidRegion;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in some image's pixel space.
///
/// Always has a non-negative origin and a positive size. Deserialisation goes
/// through the same validation as [`Region::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RegionRecord", into = "RegionRecord")]
pub struct Region {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

/// Unvalidated wire form of a region: `{"x":..,"y":..,"width":..,"height":..}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Region {
    /// Creates a region, rejecting negative origins and non-positive sizes.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Result<Self, InvalidRegion> {
        if x < 0 || y < 0 {
            return Err(InvalidRegion::NegativeOrigin { x, y });
        }
        if width <= 0 || height <= 0 {
            return Err(InvalidRegion::NonPositiveSize { width, height });
        }
        Ok(Self {
            x: to_u32(x)?,
            y: to_u32(y)?,
            width: to_u32(width)?,
            height: to_u32(height)?,
        })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }
}

fn to_u32(value: i64) -> Result<u32, InvalidRegion> {
    u32::try_from(value).map_err(|_| InvalidRegion::OutOfRange { value })
}

impl TryFrom<RegionRecord> for Region {
    type Error = InvalidRegion;

    fn try_from(record: RegionRecord) -> Result<Self, Self::Error> {
        Region::new(record.x, record.y, record.width, record.height)
    }
}

impl From<Region> for RegionRecord {
    fn from(region: Region) -> Self {
        Self {
            x: i64::from(region.x),
            y: i64::from(region.y),
            width: i64::from(region.width),
            height: i64::from(region.height),
        }
    }
}
