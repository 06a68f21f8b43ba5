//! Keyboard Record Building
//!
//! Constructs single keyboard [`EventRecord`]s in the two encodings the
//! OS understands: virtual-key mode for named keys and unicode mode for
//! literal characters. The control characters `\n`, `\t`, and backspace
//! are emitted as their named-key equivalents because many applications
//! only honor named-key events for them.

use crate::error::{Result, SynthError};
use crate::keys::VirtualKey;
use crate::platform::ScanCodeMap;
use crate::record::{EventRecord, KeyEventFlag, KeyState};
use enumflags2::BitFlags;

/// Check whether a scan code or code point uses the extended-key prefix
///
/// Extended keys carry a two-byte scan code whose first byte is `0xE0`;
/// they need an extra flag bit when injected.
pub const fn is_extended_code(code: u16) -> bool {
    code & 0xFF00 == 0xE000
}

fn key_record(key: VirtualKey, scan_code: u16, state: KeyState) -> EventRecord {
    let mut flags = BitFlags::empty();
    if matches!(state, KeyState::Up) {
        flags |= KeyEventFlag::KeyUp;
    }
    if is_extended_code(scan_code) {
        flags |= KeyEventFlag::ExtendedKey;
    }
    EventRecord::Keyboard {
        virtual_key: key.code(),
        scan_code,
        flags,
    }
}

/// Build a key transition with an explicit scan code
pub fn key_state(key: VirtualKey, scan_code: u16, state: KeyState) -> EventRecord {
    key_record(key, scan_code, state)
}

/// Build a key transition, resolving the scan code via the collaborator
pub fn key_state_resolved(key: VirtualKey, state: KeyState, map: &dyn ScanCodeMap) -> EventRecord {
    key_record(key, map.scan_from_vk(key), state)
}

/// Build a key press record (scan code resolved if omitted)
pub fn key_down(key: VirtualKey, scan_code: Option<u16>, map: &dyn ScanCodeMap) -> EventRecord {
    let scan = scan_code.unwrap_or_else(|| map.scan_from_vk(key));
    key_record(key, scan, KeyState::Down)
}

/// Build a key release record (scan code resolved if omitted)
pub fn key_up(key: VirtualKey, scan_code: Option<u16>, map: &dyn ScanCodeMap) -> EventRecord {
    let scan = scan_code.unwrap_or_else(|| map.scan_from_vk(key));
    key_record(key, scan, KeyState::Up)
}

fn char_record(ch: char, state: KeyState) -> Result<EventRecord> {
    // Control characters go out as named keys, not unicode packets.
    let named = match ch {
        '\n' => Some(VirtualKey::RETURN),
        '\t' => Some(VirtualKey::TAB),
        '\u{8}' => Some(VirtualKey::BACK),
        _ => None,
    };
    if let Some(key) = named {
        return Ok(key_record(key, 0, state));
    }

    let code_point = ch as u32;
    if code_point > u16::MAX as u32 {
        // Would need a surrogate pair; refuse rather than truncate.
        return Err(SynthError::UnsupportedCharacter(ch));
    }
    let code_point = code_point as u16;

    let mut flags = BitFlags::from(KeyEventFlag::Unicode);
    if matches!(state, KeyState::Up) {
        flags |= KeyEventFlag::KeyUp;
    }
    if is_extended_code(code_point) {
        flags |= KeyEventFlag::ExtendedKey;
    }
    Ok(EventRecord::Keyboard {
        virtual_key: 0,
        scan_code: code_point,
        flags,
    })
}

/// Build a character press record in unicode mode
pub fn char_down(ch: char) -> Result<EventRecord> {
    char_record(ch, KeyState::Down)
}

/// Build a character release record in unicode mode
pub fn char_up(ch: char) -> Result<EventRecord> {
    char_record(ch, KeyState::Up)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity-ish fake: scan code is the key code with a marker bit
    struct FakeMap;

    impl ScanCodeMap for FakeMap {
        fn scan_from_vk(&self, key: VirtualKey) -> u16 {
            key.code() | 0x0100
        }

        fn vk_from_scan(&self, scan_code: u16) -> VirtualKey {
            VirtualKey(scan_code & !0x0100)
        }
    }

    #[test]
    fn test_key_down_resolves_scan_code() {
        let record = key_down(VirtualKey::A, None, &FakeMap);
        match record {
            EventRecord::Keyboard {
                virtual_key,
                scan_code,
                flags,
            } => {
                assert_eq!(virtual_key, 0x41);
                assert_eq!(scan_code, 0x0141);
                assert!(flags.is_empty());
            }
            _ => panic!("expected keyboard record"),
        }
    }

    #[test]
    fn test_explicit_scan_code_skips_resolution() {
        let record = key_down(VirtualKey::A, Some(0x1E), &FakeMap);
        match record {
            EventRecord::Keyboard { scan_code, .. } => assert_eq!(scan_code, 0x1E),
            _ => panic!("expected keyboard record"),
        }
    }

    #[test]
    fn test_key_up_sets_release_flag() {
        let record = key_up(VirtualKey::RETURN, Some(0x1C), &FakeMap);
        assert!(record.is_key_up());
    }

    #[test]
    fn test_extended_scan_code_sets_flag() {
        // Right Ctrl carries the 0xE0 prefix
        let record = key_down(VirtualKey::RCONTROL, Some(0xE01D), &FakeMap);
        match record {
            EventRecord::Keyboard { flags, .. } => {
                assert!(flags.contains(KeyEventFlag::ExtendedKey));
            }
            _ => panic!("expected keyboard record"),
        }
    }

    #[test]
    fn test_char_uses_unicode_mode() {
        let record = char_down('a').unwrap();
        match record {
            EventRecord::Keyboard {
                virtual_key,
                scan_code,
                flags,
            } => {
                assert_eq!(virtual_key, 0);
                assert_eq!(scan_code, 'a' as u16);
                assert_eq!(flags, BitFlags::from(KeyEventFlag::Unicode));
            }
            _ => panic!("expected keyboard record"),
        }
    }

    #[test]
    fn test_extended_char_flag() {
        let record = char_down('\u{E005}').unwrap();
        match record {
            EventRecord::Keyboard { flags, .. } => {
                assert!(flags.contains(KeyEventFlag::ExtendedKey));
                assert!(flags.contains(KeyEventFlag::Unicode));
            }
            _ => panic!("expected keyboard record"),
        }

        let record = char_down('A').unwrap();
        match record {
            EventRecord::Keyboard { flags, .. } => {
                assert!(!flags.contains(KeyEventFlag::ExtendedKey));
            }
            _ => panic!("expected keyboard record"),
        }
    }

    #[test]
    fn test_control_chars_become_named_keys() {
        for (ch, vk) in [
            ('\n', VirtualKey::RETURN),
            ('\t', VirtualKey::TAB),
            ('\u{8}', VirtualKey::BACK),
        ] {
            let record = char_down(ch).unwrap();
            match record {
                EventRecord::Keyboard {
                    virtual_key, flags, ..
                } => {
                    assert_eq!(virtual_key, vk.code());
                    assert!(!flags.contains(KeyEventFlag::Unicode));
                }
                _ => panic!("expected keyboard record"),
            }
            assert!(char_up(ch).unwrap().is_key_up());
        }
    }

    #[test]
    fn test_astral_plane_char_rejected() {
        let err = char_down('\u{1F600}').unwrap_err();
        assert!(matches!(err, SynthError::UnsupportedCharacter('\u{1F600}')));
        assert!(char_up('\u{1F600}').is_err());
    }
}
