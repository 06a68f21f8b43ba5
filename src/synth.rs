//! Synthesis Facade
//!
//! One entry point tying the layers together: a [`Synthesizer`] holds
//! the configuration, the platform collaborators, and a cached
//! reference rectangle, and exposes one method per compound action.
//! Each method builds the full sequence first and only then dispatches
//! it, so an argument error never leaves the desktop in a half-acted
//! state.

use crate::config::SynthConfig;
use crate::coords::{PixelPoint, ReferenceRect};
use crate::dispatch;
use crate::error::Result;
use crate::keys::{Modifier, ModifierSet, VirtualKey};
use crate::mouse::{self, MouseButton, ScrollAxis};
use crate::platform::{DesktopProbe, InputSink, ScanCodeMap};
use crate::sequence;
use tracing::debug;

/// High-level input synthesizer
///
/// Generic over the platform collaborators so tests can run the whole
/// stack against fakes. The reference rectangle is captured once at
/// construction; call [`refresh_reference_rect`](Self::refresh_reference_rect)
/// after the monitor topology changes.
pub struct Synthesizer<M, P, S> {
    config: SynthConfig,
    map: M,
    probe: P,
    sink: S,
    reference_rect: ReferenceRect,
}

#[cfg(windows)]
impl
    Synthesizer<
        crate::platform::WinScanCodeMap,
        crate::platform::WinDesktopProbe,
        crate::platform::SendInputSink,
    >
{
    /// Build a synthesizer backed by the native OS facilities
    pub fn native(config: SynthConfig) -> Result<Self> {
        Self::with_collaborators(
            config,
            crate::platform::WinScanCodeMap,
            crate::platform::WinDesktopProbe,
            crate::platform::SendInputSink,
        )
    }
}

impl<M, P, S> Synthesizer<M, P, S>
where
    M: ScanCodeMap,
    P: DesktopProbe,
    S: InputSink,
{
    /// Build a synthesizer from explicit collaborators
    ///
    /// Probes the virtual screen once to seed the reference rectangle.
    pub fn with_collaborators(config: SynthConfig, map: M, probe: P, sink: S) -> Result<Self> {
        config.validate()?;
        let reference_rect = probe.virtual_screen_rect()?;
        debug!(?reference_rect, "synthesizer ready");
        Ok(Self {
            config,
            map,
            probe,
            sink,
            reference_rect,
        })
    }

    /// The cached reference rectangle for absolute moves
    pub fn reference_rect(&self) -> &ReferenceRect {
        &self.reference_rect
    }

    /// The injection collaborator
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Re-probe the virtual screen, picking up topology changes
    pub fn refresh_reference_rect(&mut self) -> Result<()> {
        self.reference_rect = self.probe.virtual_screen_rect()?;
        debug!(rect = ?self.reference_rect, "reference rectangle refreshed");
        Ok(())
    }

    /// Current cursor position in device pixels
    pub fn cursor_position(&self) -> Result<PixelPoint> {
        self.probe.cursor_position()
    }

    /// Press and release one key
    pub fn press(&self, key: VirtualKey) -> Result<()> {
        dispatch::submit_all(&sequence::key_press(key, &self.map), &self.sink)
    }

    /// Press a key without releasing it
    pub fn key_down(&self, key: VirtualKey) -> Result<()> {
        dispatch::submit_all(&sequence::keys_down(&[key], &self.map), &self.sink)
    }

    /// Release a previously pressed key
    pub fn key_up(&self, key: VirtualKey) -> Result<()> {
        dispatch::submit_all(&sequence::keys_up(&[key], &self.map), &self.sink)
    }

    /// Inject a modifier-bracketed stroke, e.g. Ctrl+Shift+K
    ///
    /// Generic modifiers resolve to concrete keys per the configured
    /// variant policy.
    pub fn stroke(&self, modifiers: &[Modifier], keys: &[VirtualKey]) -> Result<()> {
        let mods = ModifierSet::resolve(modifiers, self.config.keyboard.variant_policy);
        dispatch::submit_all(&sequence::key_stroke(&mods, keys, &self.map), &self.sink)
    }

    /// Type a string as unicode character events
    pub fn type_text(&self, text: &str) -> Result<()> {
        dispatch::submit_all(&sequence::text(text)?, &self.sink)
    }

    /// Move the cursor to an absolute pixel position
    pub fn move_to(&self, target: PixelPoint) -> Result<()> {
        let record = mouse::move_to(target, &self.reference_rect)?;
        dispatch::submit_all(&[record], &self.sink)
    }

    /// Move the cursor by a pixel offset
    pub fn move_by(&self, dx: i32, dy: i32) -> Result<()> {
        dispatch::submit_all(&[mouse::move_by(dx, dy)], &self.sink)
    }

    /// Click a button where the cursor currently is
    pub fn click(&self, button: MouseButton) -> Result<()> {
        dispatch::submit_all(&sequence::click(button, 1)?, &self.sink)
    }

    /// Double-click a button where the cursor currently is
    pub fn double_click(&self, button: MouseButton) -> Result<()> {
        dispatch::submit_all(&sequence::click(button, 2)?, &self.sink)
    }

    /// Move to a pixel position and click there
    ///
    /// Honors `mouse.restore_cursor` from the configuration: when set,
    /// the cursor returns to where it was before the move.
    pub fn click_at(&self, button: MouseButton, target: PixelPoint, click_count: i32) -> Result<()> {
        let seq = sequence::click_at(
            button,
            target,
            click_count,
            &self.reference_rect,
            self.config.mouse.restore_cursor,
            &self.probe,
        )?;
        dispatch::submit_all(&seq, &self.sink)
    }

    /// Scroll by whole wheel ticks, scaled by the configured wheel delta
    ///
    /// Positive vertical ticks scroll away from the user, positive
    /// horizontal ticks scroll right.
    pub fn scroll(&self, axis: ScrollAxis, ticks: i32) -> Result<()> {
        let delta = ticks * self.config.mouse.wheel_delta;
        dispatch::submit_all(&[mouse::scroll(axis, delta)], &self.sink)
    }
}
