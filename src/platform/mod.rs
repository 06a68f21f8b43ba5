//! Platform Collaborators
//!
//! Narrow interfaces over the OS facilities the engine depends on:
//! scan-code resolution, cursor/screen queries, and the injection call
//! itself. All three are traits so tests (and other platforms) can
//! substitute fakes; the real implementations live in [`windows`].

use crate::coords::{PixelPoint, ReferenceRect};
use crate::error::Result;
use crate::keys::VirtualKey;
use crate::wire::RawInput;

#[cfg(windows)]
pub mod windows;

#[cfg(windows)]
pub use windows::{SendInputSink, WinDesktopProbe, WinScanCodeMap};

/// Bidirectional virtual-key ↔ scan-code mapping
///
/// Resolution depends on the active keyboard layout, so it is a query
/// against the OS rather than static data. A result of 0 means the key
/// has no translation in the current layout.
pub trait ScanCodeMap {
    /// Scan code for a virtual key, or 0 if untranslatable
    fn scan_from_vk(&self, key: VirtualKey) -> u16;

    /// Virtual key for a scan code, or `VirtualKey(0)` if untranslatable
    fn vk_from_scan(&self, scan_code: u16) -> VirtualKey;
}

/// Cursor and monitor geometry queries
///
/// Each call is a single blocking query with no timeout; a call that
/// never returns blocks the caller.
pub trait DesktopProbe {
    /// Current cursor position in device pixels
    fn cursor_position(&self) -> Result<PixelPoint>;

    /// Bounding rectangle of the virtual screen in device pixels
    fn virtual_screen_rect(&self) -> Result<ReferenceRect>;
}

/// The OS injection facility
///
/// Accepts an ordered batch and reports how many records it accepted.
/// The count is the entire failure contract: the OS does not say why a
/// record was rejected (UIPI, secure desktop, focus policy), and
/// implementations must not invent a cause.
pub trait InputSink {
    /// Inject the batch, returning the accepted count (0..=len)
    fn inject(&self, batch: &[RawInput]) -> u32;
}
