//! Mouse Record Building
//!
//! Constructs single mouse [`EventRecord`]s: button transitions,
//! absolute and relative movement, and wheel motion.

use crate::coords::{self, NormalizedPoint, PixelPoint, ReferenceRect};
use crate::error::Result;
use crate::record::{EventRecord, MouseEventFlag, XBUTTON1, XBUTTON2};
use enumflags2::BitFlags;

/// Mouse button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
    /// First extension (side) button
    X1,
    /// Second extension (side) button
    X2,
}

impl MouseButton {
    /// Transition flag for this button
    ///
    /// X1 and X2 share the XDown/XUp pair; the record's `data` field
    /// tells them apart.
    pub fn transition_flag(self, down: bool) -> MouseEventFlag {
        match (self, down) {
            (MouseButton::Left, true) => MouseEventFlag::LeftDown,
            (MouseButton::Left, false) => MouseEventFlag::LeftUp,
            (MouseButton::Right, true) => MouseEventFlag::RightDown,
            (MouseButton::Right, false) => MouseEventFlag::RightUp,
            (MouseButton::Middle, true) => MouseEventFlag::MiddleDown,
            (MouseButton::Middle, false) => MouseEventFlag::MiddleUp,
            (MouseButton::X1 | MouseButton::X2, true) => MouseEventFlag::XDown,
            (MouseButton::X1 | MouseButton::X2, false) => MouseEventFlag::XUp,
        }
    }

    /// `data` value identifying this button, nonzero only for X buttons
    pub fn data_value(self) -> i32 {
        match self {
            MouseButton::X1 => XBUTTON1,
            MouseButton::X2 => XBUTTON2,
            _ => 0,
        }
    }
}

/// Scroll wheel axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    /// The main wheel
    Vertical,
    /// The tilt wheel
    Horizontal,
}

/// Build a button transition record
pub fn button(button: MouseButton, down: bool) -> EventRecord {
    EventRecord::Mouse {
        dx: 0,
        dy: 0,
        data: button.data_value(),
        flags: button.transition_flag(down).into(),
    }
}

/// Build a button press record
pub fn button_down(btn: MouseButton) -> EventRecord {
    button(btn, true)
}

/// Build a button release record
pub fn button_up(btn: MouseButton) -> EventRecord {
    button(btn, false)
}

/// Build an absolute move to a pixel position
///
/// Coordinates are normalized against `rect` and flagged for the whole
/// virtual desktop, so the target may be on any monitor.
pub fn move_to(target: PixelPoint, rect: &ReferenceRect) -> Result<EventRecord> {
    let abs = coords::to_abs(target, rect)?;
    Ok(EventRecord::Mouse {
        dx: abs.x,
        dy: abs.y,
        data: 0,
        flags: MouseEventFlag::Move | MouseEventFlag::Absolute | MouseEventFlag::VirtualDesktop,
    })
}

/// Build an absolute move from pre-normalized coordinates
pub fn move_to_abs(target: NormalizedPoint) -> EventRecord {
    EventRecord::Mouse {
        dx: target.x,
        dy: target.y,
        data: 0,
        flags: MouseEventFlag::Move | MouseEventFlag::Absolute | MouseEventFlag::VirtualDesktop,
    }
}

/// Build a relative move by a pixel offset (no normalization)
pub fn move_by(dx: i32, dy: i32) -> EventRecord {
    EventRecord::Mouse {
        dx,
        dy,
        data: 0,
        flags: BitFlags::from(MouseEventFlag::Move),
    }
}

/// Build a wheel record
///
/// `delta` follows the OS convention the injection API defines: positive
/// vertical means the wheel rotated forward (away from the user),
/// positive horizontal means rotated to the right. One physical click is
/// [`crate::record::WHEEL_DELTA`].
pub fn scroll(axis: ScrollAxis, delta: i32) -> EventRecord {
    let flag = match axis {
        ScrollAxis::Vertical => MouseEventFlag::Wheel,
        ScrollAxis::Horizontal => MouseEventFlag::HorizontalWheel,
    };
    EventRecord::Mouse {
        dx: 0,
        dy: 0,
        data: delta,
        flags: flag.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::WHEEL_DELTA;

    #[test]
    fn test_dedicated_button_flags() {
        for (btn, down_flag, up_flag) in [
            (
                MouseButton::Left,
                MouseEventFlag::LeftDown,
                MouseEventFlag::LeftUp,
            ),
            (
                MouseButton::Right,
                MouseEventFlag::RightDown,
                MouseEventFlag::RightUp,
            ),
            (
                MouseButton::Middle,
                MouseEventFlag::MiddleDown,
                MouseEventFlag::MiddleUp,
            ),
        ] {
            match button(btn, true) {
                EventRecord::Mouse { data, flags, .. } => {
                    assert_eq!(flags, BitFlags::from(down_flag));
                    assert_eq!(data, 0);
                }
                _ => panic!("expected mouse record"),
            }
            match button(btn, false) {
                EventRecord::Mouse { flags, .. } => assert_eq!(flags, BitFlags::from(up_flag)),
                _ => panic!("expected mouse record"),
            }
        }
    }

    #[test]
    fn test_x_buttons_disambiguated_by_data() {
        match button_down(MouseButton::X1) {
            EventRecord::Mouse { data, flags, .. } => {
                assert_eq!(flags, BitFlags::from(MouseEventFlag::XDown));
                assert_eq!(data, XBUTTON1);
            }
            _ => panic!("expected mouse record"),
        }
        match button_up(MouseButton::X2) {
            EventRecord::Mouse { data, flags, .. } => {
                assert_eq!(flags, BitFlags::from(MouseEventFlag::XUp));
                assert_eq!(data, XBUTTON2);
            }
            _ => panic!("expected mouse record"),
        }
    }

    #[test]
    fn test_move_to_normalizes() {
        let rect = ReferenceRect::new(0, 0, 1920, 1080);
        let record = move_to(PixelPoint::new(1920, 1080), &rect).unwrap();
        match record {
            EventRecord::Mouse { dx, dy, flags, .. } => {
                assert_eq!(dx, 65535);
                assert_eq!(dy, 65535);
                assert!(flags.contains(MouseEventFlag::Absolute));
                assert!(flags.contains(MouseEventFlag::VirtualDesktop));
                assert!(flags.contains(MouseEventFlag::Move));
            }
            _ => panic!("expected mouse record"),
        }
    }

    #[test]
    fn test_move_to_degenerate_rect_fails() {
        let rect = ReferenceRect::new(5, 0, 5, 1080);
        assert!(move_to(PixelPoint::new(10, 10), &rect).is_err());
    }

    #[test]
    fn test_move_by_is_raw_pixels() {
        match move_by(-12, 34) {
            EventRecord::Mouse { dx, dy, flags, .. } => {
                assert_eq!((dx, dy), (-12, 34));
                assert_eq!(flags, BitFlags::from(MouseEventFlag::Move));
            }
            _ => panic!("expected mouse record"),
        }
    }

    #[test]
    fn test_scroll_axes() {
        match scroll(ScrollAxis::Vertical, -WHEEL_DELTA) {
            EventRecord::Mouse { data, flags, .. } => {
                assert_eq!(data, -WHEEL_DELTA);
                assert_eq!(flags, BitFlags::from(MouseEventFlag::Wheel));
            }
            _ => panic!("expected mouse record"),
        }
        match scroll(ScrollAxis::Horizontal, WHEEL_DELTA) {
            EventRecord::Mouse { flags, .. } => {
                assert_eq!(flags, BitFlags::from(MouseEventFlag::HorizontalWheel));
            }
            _ => panic!("expected mouse record"),
        }
    }
}
