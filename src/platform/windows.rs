//! Windows Collaborator Implementations
//!
//! Thin wrappers over `user32` via `windows-sys`. Everything here is a
//! direct system call; no state is held between calls.

// FFI calls below.
#![allow(unsafe_code)]

use crate::coords::{PixelPoint, ReferenceRect};
use crate::error::{Result, SynthError};
use crate::keys::VirtualKey;
use crate::platform::{DesktopProbe, InputSink, ScanCodeMap};
use crate::wire::RawInput;

use windows_sys::Win32::Foundation::POINT;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, SendInput, INPUT, MAPVK_VK_TO_VSC_EX, MAPVK_VSC_TO_VK_EX,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN,
    SM_YVIRTUALSCREEN,
};

// Our wire layout must coincide with the native INPUT struct before the
// batch pointer can be reinterpreted.
const _: () = assert!(std::mem::size_of::<RawInput>() == std::mem::size_of::<INPUT>());
const _: () = assert!(std::mem::align_of::<RawInput>() == std::mem::align_of::<INPUT>());

/// Layout-aware scan-code mapping via `MapVirtualKeyW`
#[derive(Debug, Clone, Copy, Default)]
pub struct WinScanCodeMap;

impl ScanCodeMap for WinScanCodeMap {
    fn scan_from_vk(&self, key: VirtualKey) -> u16 {
        unsafe { MapVirtualKeyW(key.code() as u32, MAPVK_VK_TO_VSC_EX) as u16 }
    }

    fn vk_from_scan(&self, scan_code: u16) -> VirtualKey {
        VirtualKey(unsafe { MapVirtualKeyW(scan_code as u32, MAPVK_VSC_TO_VK_EX) as u16 })
    }
}

/// Cursor and virtual-screen queries via `GetCursorPos`/`GetSystemMetrics`
#[derive(Debug, Clone, Copy, Default)]
pub struct WinDesktopProbe;

impl DesktopProbe for WinDesktopProbe {
    fn cursor_position(&self) -> Result<PixelPoint> {
        let mut point = POINT { x: 0, y: 0 };
        if unsafe { GetCursorPos(&mut point) } == 0 {
            return Err(SynthError::Probe("GetCursorPos failed".into()));
        }
        Ok(PixelPoint::new(point.x, point.y))
    }

    fn virtual_screen_rect(&self) -> Result<ReferenceRect> {
        let (x, y, width, height) = unsafe {
            (
                GetSystemMetrics(SM_XVIRTUALSCREEN),
                GetSystemMetrics(SM_YVIRTUALSCREEN),
                GetSystemMetrics(SM_CXVIRTUALSCREEN),
                GetSystemMetrics(SM_CYVIRTUALSCREEN),
            )
        };
        if width == 0 || height == 0 {
            return Err(SynthError::Probe(
                "GetSystemMetrics reported an empty virtual screen".into(),
            ));
        }
        Ok(ReferenceRect::new(x, y, x + width, y + height))
    }
}

/// Batch injection via `SendInput`
///
/// One blocking call per batch; the OS serializes concurrent callers.
/// Records accepted before a rejection cannot be undone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendInputSink;

impl InputSink for SendInputSink {
    fn inject(&self, batch: &[RawInput]) -> u32 {
        if batch.is_empty() {
            return 0;
        }
        unsafe {
            SendInput(
                batch.len() as u32,
                batch.as_ptr() as *const INPUT,
                std::mem::size_of::<INPUT>() as i32,
            )
        }
    }
}
