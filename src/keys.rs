//! Virtual Keys and Modifiers
//!
//! The semantic key identifier used by the builder, the well-known
//! virtual-key code table (read-only data, mirrors the OS assignment),
//! and the modifier abstraction with its left/right variant policy.

use serde::{Deserialize, Serialize};

/// A semantic key, identified by its numeric virtual-key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VirtualKey(pub u16);

impl VirtualKey {
    /// Numeric virtual-key code
    pub const fn code(self) -> u16 {
        self.0
    }
}

impl From<u16> for VirtualKey {
    fn from(code: u16) -> Self {
        VirtualKey(code)
    }
}

macro_rules! virtual_keys {
    ($($(#[$meta:meta])* $name:ident = $code:literal,)+) => {
        impl VirtualKey {
            $($(#[$meta])* pub const $name: VirtualKey = VirtualKey($code);)+

            /// Well-known name for this key code, if it has one
            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($code => Some(stringify!($name)),)+
                    _ => None,
                }
            }
        }
    };
}

virtual_keys! {
    /// Left mouse button (reported in key state queries, not injectable as a key)
    LBUTTON = 0x01,
    /// Right mouse button
    RBUTTON = 0x02,
    /// Control-break processing
    CANCEL = 0x03,
    /// Middle mouse button
    MBUTTON = 0x04,
    /// First X mouse button
    XBUTTON1 = 0x05,
    /// Second X mouse button
    XBUTTON2 = 0x06,
    /// Backspace key
    BACK = 0x08,
    /// Tab key
    TAB = 0x09,
    /// Clear key
    CLEAR = 0x0C,
    /// Enter key
    RETURN = 0x0D,
    /// Shift key (neutral, either side)
    SHIFT = 0x10,
    /// Ctrl key (neutral, either side)
    CONTROL = 0x11,
    /// Alt key (neutral, either side)
    MENU = 0x12,
    /// Pause key
    PAUSE = 0x13,
    /// Caps Lock key
    CAPITAL = 0x14,
    /// Esc key
    ESCAPE = 0x1B,
    /// Spacebar
    SPACE = 0x20,
    /// Page Up key
    PRIOR = 0x21,
    /// Page Down key
    NEXT = 0x22,
    /// End key
    END = 0x23,
    /// Home key
    HOME = 0x24,
    /// Left arrow key
    LEFT = 0x25,
    /// Up arrow key
    UP = 0x26,
    /// Right arrow key
    RIGHT = 0x27,
    /// Down arrow key
    DOWN = 0x28,
    /// Select key
    SELECT = 0x29,
    /// Print key
    PRINT = 0x2A,
    /// Execute key
    EXECUTE = 0x2B,
    /// Print Screen key
    SNAPSHOT = 0x2C,
    /// Insert key
    INSERT = 0x2D,
    /// Delete key
    DELETE = 0x2E,
    /// Help key
    HELP = 0x2F,
    /// 0 key
    KEY_0 = 0x30,
    /// 1 key
    KEY_1 = 0x31,
    /// 2 key
    KEY_2 = 0x32,
    /// 3 key
    KEY_3 = 0x33,
    /// 4 key
    KEY_4 = 0x34,
    /// 5 key
    KEY_5 = 0x35,
    /// 6 key
    KEY_6 = 0x36,
    /// 7 key
    KEY_7 = 0x37,
    /// 8 key
    KEY_8 = 0x38,
    /// 9 key
    KEY_9 = 0x39,
    /// A key
    A = 0x41,
    /// B key
    B = 0x42,
    /// C key
    C = 0x43,
    /// D key
    D = 0x44,
    /// E key
    E = 0x45,
    /// F key
    F = 0x46,
    /// G key
    G = 0x47,
    /// H key
    H = 0x48,
    /// I key
    I = 0x49,
    /// J key
    J = 0x4A,
    /// K key
    K = 0x4B,
    /// L key
    L = 0x4C,
    /// M key
    M = 0x4D,
    /// N key
    N = 0x4E,
    /// O key
    O = 0x4F,
    /// P key
    P = 0x50,
    /// Q key
    Q = 0x51,
    /// R key
    R = 0x52,
    /// S key
    S = 0x53,
    /// T key
    T = 0x54,
    /// U key
    U = 0x55,
    /// V key
    V = 0x56,
    /// W key
    W = 0x57,
    /// X key
    X = 0x58,
    /// Y key
    Y = 0x59,
    /// Z key
    Z = 0x5A,
    /// Left Windows key
    LWIN = 0x5B,
    /// Right Windows key
    RWIN = 0x5C,
    /// Application (context menu) key
    APPS = 0x5D,
    /// Computer Sleep key
    SLEEP = 0x5F,
    /// Numeric keypad 0
    NUMPAD0 = 0x60,
    /// Numeric keypad 1
    NUMPAD1 = 0x61,
    /// Numeric keypad 2
    NUMPAD2 = 0x62,
    /// Numeric keypad 3
    NUMPAD3 = 0x63,
    /// Numeric keypad 4
    NUMPAD4 = 0x64,
    /// Numeric keypad 5
    NUMPAD5 = 0x65,
    /// Numeric keypad 6
    NUMPAD6 = 0x66,
    /// Numeric keypad 7
    NUMPAD7 = 0x67,
    /// Numeric keypad 8
    NUMPAD8 = 0x68,
    /// Numeric keypad 9
    NUMPAD9 = 0x69,
    /// Multiply key
    MULTIPLY = 0x6A,
    /// Add key
    ADD = 0x6B,
    /// Separator key
    SEPARATOR = 0x6C,
    /// Subtract key
    SUBTRACT = 0x6D,
    /// Decimal key
    DECIMAL = 0x6E,
    /// Divide key
    DIVIDE = 0x6F,
    /// F1 key
    F1 = 0x70,
    /// F2 key
    F2 = 0x71,
    /// F3 key
    F3 = 0x72,
    /// F4 key
    F4 = 0x73,
    /// F5 key
    F5 = 0x74,
    /// F6 key
    F6 = 0x75,
    /// F7 key
    F7 = 0x76,
    /// F8 key
    F8 = 0x77,
    /// F9 key
    F9 = 0x78,
    /// F10 key
    F10 = 0x79,
    /// F11 key
    F11 = 0x7A,
    /// F12 key
    F12 = 0x7B,
    /// F13 key
    F13 = 0x7C,
    /// F14 key
    F14 = 0x7D,
    /// F15 key
    F15 = 0x7E,
    /// F16 key
    F16 = 0x7F,
    /// F17 key
    F17 = 0x80,
    /// F18 key
    F18 = 0x81,
    /// F19 key
    F19 = 0x82,
    /// F20 key
    F20 = 0x83,
    /// F21 key
    F21 = 0x84,
    /// F22 key
    F22 = 0x85,
    /// F23 key
    F23 = 0x86,
    /// F24 key
    F24 = 0x87,
    /// Num Lock key
    NUMLOCK = 0x90,
    /// Scroll Lock key
    SCROLL = 0x91,
    /// Left Shift key
    LSHIFT = 0xA0,
    /// Right Shift key
    RSHIFT = 0xA1,
    /// Left Ctrl key
    LCONTROL = 0xA2,
    /// Right Ctrl key
    RCONTROL = 0xA3,
    /// Left Alt key
    LMENU = 0xA4,
    /// Right Alt key
    RMENU = 0xA5,
    /// Browser Back key
    BROWSER_BACK = 0xA6,
    /// Browser Forward key
    BROWSER_FORWARD = 0xA7,
    /// Browser Refresh key
    BROWSER_REFRESH = 0xA8,
    /// Browser Stop key
    BROWSER_STOP = 0xA9,
    /// Browser Search key
    BROWSER_SEARCH = 0xAA,
    /// Browser Favorites key
    BROWSER_FAVORITES = 0xAB,
    /// Browser Home key
    BROWSER_HOME = 0xAC,
    /// Volume Mute key
    VOLUME_MUTE = 0xAD,
    /// Volume Down key
    VOLUME_DOWN = 0xAE,
    /// Volume Up key
    VOLUME_UP = 0xAF,
    /// Next Track key
    MEDIA_NEXT_TRACK = 0xB0,
    /// Previous Track key
    MEDIA_PREV_TRACK = 0xB1,
    /// Stop Media key
    MEDIA_STOP = 0xB2,
    /// Play/Pause Media key
    MEDIA_PLAY_PAUSE = 0xB3,
    /// Start Mail key
    LAUNCH_MAIL = 0xB4,
    /// Select Media key
    LAUNCH_MEDIA_SELECT = 0xB5,
    /// Start Application 1 key
    LAUNCH_APP1 = 0xB6,
    /// Start Application 2 key
    LAUNCH_APP2 = 0xB7,
    /// `;:` key on the US layout
    OEM_1 = 0xBA,
    /// `=+` key on any layout
    OEM_PLUS = 0xBB,
    /// `,<` key on any layout
    OEM_COMMA = 0xBC,
    /// `-_` key on any layout
    OEM_MINUS = 0xBD,
    /// `.>` key on any layout
    OEM_PERIOD = 0xBE,
    /// `/?` key on the US layout
    OEM_2 = 0xBF,
    /// `` `~ `` key on the US layout
    OEM_3 = 0xC0,
    /// `[{` key on the US layout
    OEM_4 = 0xDB,
    /// `\|` key on the US layout
    OEM_5 = 0xDC,
    /// `]}` key on the US layout
    OEM_6 = 0xDD,
    /// `'"` key on the US layout
    OEM_7 = 0xDE,
    /// Miscellaneous OEM key
    OEM_8 = 0xDF,
    /// `<>` or `\|` key on non-US 102-key layouts
    OEM_102 = 0xE2,
    /// IME Process key
    PROCESSKEY = 0xE5,
    /// Unicode packet carrier key
    PACKET = 0xE7,
    /// Attn key
    ATTN = 0xF6,
    /// CrSel key
    CRSEL = 0xF7,
    /// ExSel key
    EXSEL = 0xF8,
    /// Erase EOF key
    EREOF = 0xF9,
    /// Play key
    PLAY = 0xFA,
    /// Zoom key
    ZOOM = 0xFB,
    /// PA1 key
    PA1 = 0xFD,
    /// Clear key (OEM specific)
    OEM_CLEAR = 0xFE,
}

/// Logical modifier keys for a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Shift
    Shift,
    /// Ctrl
    Control,
    /// Alt
    Alt,
    /// Windows / Super
    Win,
}

/// Which physical variant a logical modifier resolves to when the caller
/// does not disambiguate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantPolicy {
    /// Left-hand keys (LSHIFT, LCONTROL, LMENU, LWIN)
    #[default]
    Left,
    /// Right-hand keys (RSHIFT, RCONTROL, RMENU, RWIN)
    Right,
    /// Side-neutral codes (SHIFT, CONTROL, MENU); Win has no neutral
    /// code and resolves to LWIN
    Neutral,
}

impl Modifier {
    /// Resolve to a concrete virtual key under the given policy
    pub fn resolve(self, policy: VariantPolicy) -> VirtualKey {
        match (self, policy) {
            (Modifier::Shift, VariantPolicy::Left) => VirtualKey::LSHIFT,
            (Modifier::Shift, VariantPolicy::Right) => VirtualKey::RSHIFT,
            (Modifier::Shift, VariantPolicy::Neutral) => VirtualKey::SHIFT,
            (Modifier::Control, VariantPolicy::Left) => VirtualKey::LCONTROL,
            (Modifier::Control, VariantPolicy::Right) => VirtualKey::RCONTROL,
            (Modifier::Control, VariantPolicy::Neutral) => VirtualKey::CONTROL,
            (Modifier::Alt, VariantPolicy::Left) => VirtualKey::LMENU,
            (Modifier::Alt, VariantPolicy::Right) => VirtualKey::RMENU,
            (Modifier::Alt, VariantPolicy::Neutral) => VirtualKey::MENU,
            (Modifier::Win, VariantPolicy::Right) => VirtualKey::RWIN,
            (Modifier::Win, _) => VirtualKey::LWIN,
        }
    }
}

/// Ordered modifier keys for a stroke
///
/// Order is semantic: press order follows the list, release order is the
/// reverse (stack discipline).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    keys: Vec<VirtualKey>,
}

impl ModifierSet {
    /// Build from explicit virtual keys, preserving order
    pub fn from_keys(keys: impl IntoIterator<Item = VirtualKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Build from logical modifiers under a variant policy, preserving order
    pub fn resolve(modifiers: &[Modifier], policy: VariantPolicy) -> Self {
        Self {
            keys: modifiers.iter().map(|m| m.resolve(policy)).collect(),
        }
    }

    /// The resolved keys in press order
    pub fn keys(&self) -> &[VirtualKey] {
        &self.keys
    }

    /// True when no modifiers are present
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<&[VirtualKey]> for ModifierSet {
    fn from(keys: &[VirtualKey]) -> Self {
        Self {
            keys: keys.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        assert_eq!(VirtualKey::RETURN.name(), Some("RETURN"));
        assert_eq!(VirtualKey::A.name(), Some("A"));
        assert_eq!(VirtualKey::LSHIFT.name(), Some("LSHIFT"));
        assert_eq!(VirtualKey(0x07).name(), None); // unassigned
    }

    #[test]
    fn test_modifier_resolution() {
        assert_eq!(
            Modifier::Shift.resolve(VariantPolicy::Left),
            VirtualKey::LSHIFT
        );
        assert_eq!(
            Modifier::Control.resolve(VariantPolicy::Right),
            VirtualKey::RCONTROL
        );
        assert_eq!(
            Modifier::Alt.resolve(VariantPolicy::Neutral),
            VirtualKey::MENU
        );
        // Win has no neutral variant
        assert_eq!(
            Modifier::Win.resolve(VariantPolicy::Neutral),
            VirtualKey::LWIN
        );
    }

    #[test]
    fn test_modifier_set_preserves_order() {
        let set = ModifierSet::resolve(&[Modifier::Control, Modifier::Shift], VariantPolicy::Left);
        assert_eq!(set.keys(), &[VirtualKey::LCONTROL, VirtualKey::LSHIFT]);
    }
}
