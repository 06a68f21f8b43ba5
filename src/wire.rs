//! Wire Layout
//!
//! Fixed-byte lowering of [`EventRecord`] to the exact shape the OS
//! injection API consumes (the `INPUT` structure family). Field sizes,
//! order, and alignment are platform ABI and not negotiable; the union
//! payload is pointer-aligned, so the struct differs between 32- and
//! 64-bit targets the same way the native headers do.

// FFI-shaped union access below.
#![allow(unsafe_code)]

use crate::record::EventRecord;

/// Record type tag: mouse payload
pub const INPUT_MOUSE: u32 = 0;
/// Record type tag: keyboard payload
pub const INPUT_KEYBOARD: u32 = 1;
/// Record type tag: hardware payload
pub const INPUT_HARDWARE: u32 = 2;

/// Mouse payload, matching `MOUSEINPUT`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawMouseInput {
    /// Absolute x or horizontal delta, per `flags`
    pub dx: i32,
    /// Absolute y or vertical delta, per `flags`
    pub dy: i32,
    /// Wheel delta or X-button identifier, per `flags`
    pub data: i32,
    /// Mouse event flag bits
    pub flags: u32,
    /// Event timestamp; 0 lets the OS assign one
    pub time: u32,
    /// Extra pointer-sized message info; always 0 here
    pub extra: usize,
}

/// Keyboard payload, matching `KEYBDINPUT`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawKeyboardInput {
    /// Virtual-key code; 0 in unicode mode
    pub virtual_key: u16,
    /// Scan code, or the code point in unicode mode
    pub scan_code: u16,
    /// Keyboard event flag bits
    pub flags: u32,
    /// Event timestamp; 0 lets the OS assign one
    pub time: u32,
    /// Extra pointer-sized message info; always 0 here
    pub extra: usize,
}

/// Hardware payload, matching `HARDWAREINPUT`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawHardwareInput {
    /// Message identifier
    pub message: u32,
    /// Low word of the message parameter
    pub param_low: u16,
    /// High word of the message parameter
    pub param_high: u16,
}

/// Payload union, matching the anonymous union inside `INPUT`
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawPayload {
    /// Valid when the tag is [`INPUT_MOUSE`]
    pub mouse: RawMouseInput,
    /// Valid when the tag is [`INPUT_KEYBOARD`]
    pub keyboard: RawKeyboardInput,
    /// Valid when the tag is [`INPUT_HARDWARE`]
    pub hardware: RawHardwareInput,
}

/// One fixed-layout injection record, matching `INPUT`
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawInput {
    /// Type tag selecting the payload arm
    pub kind: u32,
    /// Tagged payload
    pub payload: RawPayload,
}

// The native INPUT struct is 40 bytes on 64-bit (4 tag + 4 padding + 32
// payload) and 28 bytes on 32-bit.
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<RawInput>() == 40);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(std::mem::size_of::<RawInput>() == 28);

impl RawInput {
    /// Keyboard payload, when this is a keyboard record
    pub fn keyboard(&self) -> Option<RawKeyboardInput> {
        (self.kind == INPUT_KEYBOARD).then(|| unsafe { self.payload.keyboard })
    }

    /// Mouse payload, when this is a mouse record
    pub fn mouse(&self) -> Option<RawMouseInput> {
        (self.kind == INPUT_MOUSE).then(|| unsafe { self.payload.mouse })
    }

    /// Hardware payload, when this is a hardware record
    pub fn hardware(&self) -> Option<RawHardwareInput> {
        (self.kind == INPUT_HARDWARE).then(|| unsafe { self.payload.hardware })
    }
}

impl std::fmt::Debug for RawInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            INPUT_MOUSE => f.debug_tuple("RawInput").field(&self.mouse()).finish(),
            INPUT_KEYBOARD => f.debug_tuple("RawInput").field(&self.keyboard()).finish(),
            INPUT_HARDWARE => f.debug_tuple("RawInput").field(&self.hardware()).finish(),
            kind => f.debug_struct("RawInput").field("kind", &kind).finish(),
        }
    }
}

/// Lower one record to its wire shape
pub fn encode(record: &EventRecord) -> RawInput {
    match *record {
        EventRecord::Keyboard {
            virtual_key,
            scan_code,
            flags,
        } => RawInput {
            kind: INPUT_KEYBOARD,
            payload: RawPayload {
                keyboard: RawKeyboardInput {
                    virtual_key,
                    scan_code,
                    flags: flags.bits(),
                    time: 0,
                    extra: 0,
                },
            },
        },
        EventRecord::Mouse {
            dx,
            dy,
            data,
            flags,
        } => RawInput {
            kind: INPUT_MOUSE,
            payload: RawPayload {
                mouse: RawMouseInput {
                    dx,
                    dy,
                    data,
                    flags: flags.bits(),
                    time: 0,
                    extra: 0,
                },
            },
        },
        EventRecord::Hardware {
            message,
            param_low,
            param_high,
        } => RawInput {
            kind: INPUT_HARDWARE,
            payload: RawPayload {
                hardware: RawHardwareInput {
                    message,
                    param_low,
                    param_high,
                },
            },
        },
    }
}

/// Lower an ordered sequence, preserving order
pub fn encode_batch(sequence: &[EventRecord]) -> Vec<RawInput> {
    sequence.iter().map(encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{KeyEventFlag, MouseEventFlag};
    use enumflags2::BitFlags;

    #[test]
    fn test_encode_keyboard() {
        let record = EventRecord::Keyboard {
            virtual_key: 0x0D,
            scan_code: 0x1C,
            flags: KeyEventFlag::KeyUp.into(),
        };
        let raw = encode(&record);
        assert_eq!(raw.kind, INPUT_KEYBOARD);
        let kbd = raw.keyboard().unwrap();
        assert_eq!(kbd.virtual_key, 0x0D);
        assert_eq!(kbd.scan_code, 0x1C);
        assert_eq!(kbd.flags, 0x0002);
        assert_eq!(kbd.time, 0);
        assert_eq!(kbd.extra, 0);
        assert!(raw.mouse().is_none());
    }

    #[test]
    fn test_encode_mouse() {
        let record = EventRecord::Mouse {
            dx: 32767,
            dy: 32767,
            data: 0,
            flags: MouseEventFlag::Move | MouseEventFlag::Absolute,
        };
        let raw = encode(&record);
        assert_eq!(raw.kind, INPUT_MOUSE);
        let mouse = raw.mouse().unwrap();
        assert_eq!(mouse.dx, 32767);
        assert_eq!(mouse.flags, 0x8001);
    }

    #[test]
    fn test_encode_hardware_passthrough() {
        let record = EventRecord::Hardware {
            message: 0x0100,
            param_low: 1,
            param_high: 2,
        };
        let raw = encode(&record);
        assert_eq!(raw.kind, INPUT_HARDWARE);
        let hw = raw.hardware().unwrap();
        assert_eq!(hw.message, 0x0100);
        assert_eq!(hw.param_low, 1);
        assert_eq!(hw.param_high, 2);
    }

    #[test]
    fn test_encode_batch_preserves_order() {
        let seq = vec![
            EventRecord::Keyboard {
                virtual_key: 1,
                scan_code: 0,
                flags: BitFlags::empty(),
            },
            EventRecord::Mouse {
                dx: 0,
                dy: 0,
                data: 0,
                flags: MouseEventFlag::Move.into(),
            },
        ];
        let batch = encode_batch(&seq);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].kind, INPUT_KEYBOARD);
        assert_eq!(batch[1].kind, INPUT_MOUSE);
    }
}
