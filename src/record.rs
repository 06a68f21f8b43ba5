//! Event Records
//!
//! The internal representation of a single injectable input event. This
//! is a plain sum type, decoupled from the fixed-byte OS layout; records
//! are only lowered to the wire shape at the dispatch boundary (see
//! [`crate::wire`]).

use enumflags2::{bitflags, BitFlags};

/// One wheel click, as defined by the OS
pub const WHEEL_DELTA: i32 = 120;

/// `data` value identifying the first X button in XDown/XUp records
pub const XBUTTON1: i32 = 0x0001;

/// `data` value identifying the second X button in XDown/XUp records
pub const XBUTTON2: i32 = 0x0002;

/// Keyboard event flags
///
/// A record without [`KeyEventFlag::KeyUp`] is a press. Unicode mode and
/// virtual-key mode are mutually exclusive per record: unicode records
/// carry the code point in `scan_code` with `virtual_key = 0`.
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventFlag {
    /// Scan code has the two-byte 0xE0 prefix form
    ExtendedKey = 0x0001,
    /// The key is being released; absent means pressed
    KeyUp = 0x0002,
    /// `scan_code` carries a Unicode code point, `virtual_key` must be 0
    Unicode = 0x0004,
    /// `scan_code` identifies the key and `virtual_key` is ignored
    ScanCode = 0x0008,
}

/// Mouse event flags
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventFlag {
    /// Movement occurred
    Move = 0x0001,
    /// Left button pressed
    LeftDown = 0x0002,
    /// Left button released
    LeftUp = 0x0004,
    /// Right button pressed
    RightDown = 0x0008,
    /// Right button released
    RightUp = 0x0010,
    /// Middle button pressed
    MiddleDown = 0x0020,
    /// Middle button released
    MiddleUp = 0x0040,
    /// An X button pressed; which one is in `data`
    XDown = 0x0080,
    /// An X button released; which one is in `data`
    XUp = 0x0100,
    /// Vertical wheel motion; amount is in `data`
    Wheel = 0x0800,
    /// Horizontal wheel motion; amount is in `data`
    HorizontalWheel = 0x1000,
    /// Do not coalesce with other move events
    MoveNoCoalesce = 0x2000,
    /// Absolute coordinates map to the whole virtual desktop
    VirtualDesktop = 0x4000,
    /// `dx`/`dy` are normalized absolute coordinates, not deltas
    Absolute = 0x8000,
}

/// Key transition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Key released
    Up,
    /// Key pressed
    Down,
}

/// A single injectable input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRecord {
    /// Keyboard event, in virtual-key or unicode mode
    Keyboard {
        /// Virtual-key code; 0 in unicode mode
        virtual_key: u16,
        /// Hardware scan code, or the Unicode code point in unicode mode
        scan_code: u16,
        /// Event flags
        flags: BitFlags<KeyEventFlag>,
    },

    /// Mouse event
    Mouse {
        /// Absolute x coordinate or horizontal delta, per flags
        dx: i32,
        /// Absolute y coordinate or vertical delta, per flags
        dy: i32,
        /// Wheel delta or X-button identifier, per flags
        data: i32,
        /// Event flags
        flags: BitFlags<MouseEventFlag>,
    },

    /// Hardware event, pass-through only
    Hardware {
        /// Message identifier
        message: u32,
        /// Low word of the message parameter
        param_low: u16,
        /// High word of the message parameter
        param_high: u16,
    },
}

impl EventRecord {
    /// True for a keyboard record with the release flag set
    pub fn is_key_up(&self) -> bool {
        matches!(
            self,
            EventRecord::Keyboard { flags, .. } if flags.contains(KeyEventFlag::KeyUp)
        )
    }

    /// True for a keyboard record in unicode mode
    pub fn is_unicode(&self) -> bool {
        matches!(
            self,
            EventRecord::Keyboard { flags, .. } if flags.contains(KeyEventFlag::Unicode)
        )
    }
}

/// Ordered list of records; order is the literal injection order and is
/// never rearranged after construction
pub type EventSequence = Vec<EventRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values_match_os_contract() {
        assert_eq!(KeyEventFlag::ExtendedKey as u32, 0x0001);
        assert_eq!(KeyEventFlag::KeyUp as u32, 0x0002);
        assert_eq!(KeyEventFlag::Unicode as u32, 0x0004);
        assert_eq!(KeyEventFlag::ScanCode as u32, 0x0008);

        assert_eq!(MouseEventFlag::Wheel as u32, 0x0800);
        assert_eq!(MouseEventFlag::HorizontalWheel as u32, 0x1000);
        assert_eq!(MouseEventFlag::VirtualDesktop as u32, 0x4000);
        assert_eq!(MouseEventFlag::Absolute as u32, 0x8000);
    }

    #[test]
    fn test_record_predicates() {
        let up = EventRecord::Keyboard {
            virtual_key: 0x41,
            scan_code: 0x1E,
            flags: KeyEventFlag::KeyUp.into(),
        };
        assert!(up.is_key_up());
        assert!(!up.is_unicode());

        let ch = EventRecord::Keyboard {
            virtual_key: 0,
            scan_code: 'a' as u16,
            flags: KeyEventFlag::Unicode.into(),
        };
        assert!(ch.is_unicode());
        assert!(!ch.is_key_up());
    }
}
