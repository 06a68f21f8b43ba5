//! Coordinate Normalization
//!
//! Linear mapping between pixel space and the absolute coordinate space
//! used by the OS injection API. Absolute coordinates run 0..=65535 per
//! axis regardless of physical resolution; the pixel-space domain is a
//! caller-supplied reference rectangle (normally the virtual screen
//! bounds from [`crate::platform::DesktopProbe`]).
//!
//! All functions here are pure. The reference rectangle is read, never
//! cached or mutated; callers that hold one are responsible for
//! refreshing it when the display configuration changes.

use crate::error::{Result, SynthError};
use serde::{Deserialize, Serialize};

/// Maximum value of the absolute coordinate space, per axis
pub const ABS_COORDINATE_MAX: i32 = u16::MAX as i32;

/// A position in device pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal position in pixels
    pub x: i32,
    /// Vertical position in pixels
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel-space point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A position in the OS absolute coordinate space, each axis in 0..=65535
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedPoint {
    /// Horizontal absolute coordinate
    pub x: i32,
    /// Vertical absolute coordinate
    pub y: i32,
}

/// Pixel-space rectangle defining the normalization domain
///
/// Immutable once obtained. Display reconfiguration is not auto-detected;
/// query a fresh rectangle when monitors change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRect {
    /// Left edge in pixels
    pub left: i32,
    /// Top edge in pixels
    pub top: i32,
    /// Right edge in pixels
    pub right: i32,
    /// Bottom edge in pixels
    pub bottom: i32,
}

impl ReferenceRect {
    /// Create a new reference rectangle
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle width in pixels
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Rectangle height in pixels
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if a pixel point is within this rectangle
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Normalize `value` from `old_range` to `new_range` by linear interpolation
pub fn normalize(value: f64, old_range: (f64, f64), new_range: (f64, f64)) -> f64 {
    new_range.0 + (value - old_range.0) * (new_range.1 - new_range.0) / (old_range.1 - old_range.0)
}

/// [`normalize`], truncated toward zero
pub fn normalize_int(value: f64, old_range: (f64, f64), new_range: (f64, f64)) -> i32 {
    normalize(value, old_range, new_range).trunc() as i32
}

/// Convert a horizontal pixel position to an absolute coordinate
pub fn to_abs_x(x_pixels: i32, rect: &ReferenceRect) -> Result<i32> {
    if rect.width() == 0 {
        return Err(SynthError::DegenerateRect { axis: "x" });
    }
    Ok(normalize_int(
        x_pixels as f64,
        (rect.left as f64, rect.right as f64),
        (0.0, ABS_COORDINATE_MAX as f64),
    ))
}

/// Convert a vertical pixel position to an absolute coordinate
pub fn to_abs_y(y_pixels: i32, rect: &ReferenceRect) -> Result<i32> {
    if rect.height() == 0 {
        return Err(SynthError::DegenerateRect { axis: "y" });
    }
    Ok(normalize_int(
        y_pixels as f64,
        (rect.top as f64, rect.bottom as f64),
        (0.0, ABS_COORDINATE_MAX as f64),
    ))
}

/// Convert a pixel point to absolute coordinates
pub fn to_abs(point: PixelPoint, rect: &ReferenceRect) -> Result<NormalizedPoint> {
    Ok(NormalizedPoint {
        x: to_abs_x(point.x, rect)?,
        y: to_abs_y(point.y, rect)?,
    })
}

/// Convert a horizontal absolute coordinate back to pixels
pub fn from_abs_x(x_abs: i32, rect: &ReferenceRect) -> Result<i32> {
    if rect.width() == 0 {
        return Err(SynthError::DegenerateRect { axis: "x" });
    }
    Ok(normalize_int(
        x_abs as f64,
        (0.0, ABS_COORDINATE_MAX as f64),
        (rect.left as f64, rect.right as f64),
    ))
}

/// Convert a vertical absolute coordinate back to pixels
pub fn from_abs_y(y_abs: i32, rect: &ReferenceRect) -> Result<i32> {
    if rect.height() == 0 {
        return Err(SynthError::DegenerateRect { axis: "y" });
    }
    Ok(normalize_int(
        y_abs as f64,
        (0.0, ABS_COORDINATE_MAX as f64),
        (rect.top as f64, rect.bottom as f64),
    ))
}

/// Convert an absolute-coordinate point back to pixels
pub fn from_abs(point: NormalizedPoint, rect: &ReferenceRect) -> Result<PixelPoint> {
    Ok(PixelPoint {
        x: from_abs_x(point.x, rect)?,
        y: from_abs_y(point.y, rect)?,
    })
}
