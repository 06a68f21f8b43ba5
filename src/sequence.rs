//! Stroke Sequencing
//!
//! Composes ordered [`EventSequence`]s for compound actions. Sequences
//! are built in full before anything is dispatched, so argument errors
//! can never leave a modifier held down or the cursor half-moved.

use crate::coords::{PixelPoint, ReferenceRect};
use crate::error::{Result, SynthError};
use crate::keyboard;
use crate::keys::{ModifierSet, VirtualKey};
use crate::mouse::{self, MouseButton, ScrollAxis};
use crate::platform::{DesktopProbe, ScanCodeMap};
use crate::record::EventSequence;
use tracing::{debug, trace};

/// Press and release a key: `[Down, Up]`
pub fn key_press(key: VirtualKey, map: &dyn ScanCodeMap) -> EventSequence {
    vec![
        keyboard::key_down(key, None, map),
        keyboard::key_up(key, None, map),
    ]
}

/// Press several keys in order, without releasing them
pub fn keys_down(keys: &[VirtualKey], map: &dyn ScanCodeMap) -> EventSequence {
    keys.iter().map(|&k| keyboard::key_down(k, None, map)).collect()
}

/// Release several keys in order
pub fn keys_up(keys: &[VirtualKey], map: &dyn ScanCodeMap) -> EventSequence {
    keys.iter().map(|&k| keyboard::key_up(k, None, map)).collect()
}

/// Build a bracketed key stroke
///
/// Modifier presses fully enclose the key events:
/// modifiers down in list order, keys down then up in list order, then
/// modifiers up in REVERSE order. The release order mirrors a stack
/// discipline, so `stroke([Ctrl, Shift], [K])` yields
/// `[Ctrl↓, Shift↓, K↓, K↑, Shift↑, Ctrl↑]`.
pub fn key_stroke(
    modifiers: &ModifierSet,
    keys: &[VirtualKey],
    map: &dyn ScanCodeMap,
) -> EventSequence {
    let mut sequence = Vec::with_capacity(2 * (modifiers.keys().len() + keys.len()));

    for &modifier in modifiers.keys() {
        sequence.push(keyboard::key_down(modifier, None, map));
    }
    for &key in keys {
        sequence.push(keyboard::key_down(key, None, map));
    }
    for &key in keys {
        sequence.push(keyboard::key_up(key, None, map));
    }
    for &modifier in modifiers.keys().iter().rev() {
        sequence.push(keyboard::key_up(modifier, None, map));
    }

    trace!(
        modifiers = modifiers.keys().len(),
        keys = keys.len(),
        records = sequence.len(),
        "built key stroke"
    );
    sequence
}

/// Type a string: each character becomes a down/up pair in string order
///
/// No modifier bracketing; `\n`, `\t`, and backspace become named-key
/// pairs. Fails on the first character outside the 16-bit code-point
/// range, before any record is produced for it.
pub fn text(input: &str) -> Result<EventSequence> {
    let mut sequence = Vec::with_capacity(2 * input.chars().count());
    for ch in input.chars() {
        sequence.push(keyboard::char_down(ch)?);
        sequence.push(keyboard::char_up(ch)?);
    }
    trace!(chars = input.chars().count(), "built text sequence");
    Ok(sequence)
}

/// Click a button `click_count` times in place
///
/// `click_count == 0` yields an empty sequence; negative counts are
/// rejected before any record is built.
pub fn click(button: MouseButton, click_count: i32) -> Result<EventSequence> {
    if click_count < 0 {
        return Err(SynthError::InvalidArgument(format!(
            "click_count cannot be negative (was {click_count})"
        )));
    }
    let mut sequence = Vec::with_capacity(2 * click_count as usize);
    for _ in 0..click_count {
        sequence.push(mouse::button_down(button));
        sequence.push(mouse::button_up(button));
    }
    Ok(sequence)
}

/// Move to a pixel position, click, and optionally move back
///
/// With `restore` the current cursor position is captured NOW, at build
/// time, and the sequence ends with a move back to that captured
/// position. If the cursor moves between build and dispatch, the restore
/// targets the stale captured position; callers that care should build
/// immediately before dispatching.
///
/// `click_count == 0` yields an empty sequence with no move-to records
/// at all. Negative counts are rejected before any record is built and
/// before the cursor is probed.
pub fn click_at(
    button: MouseButton,
    target: PixelPoint,
    click_count: i32,
    rect: &ReferenceRect,
    restore: bool,
    probe: &dyn DesktopProbe,
) -> Result<EventSequence> {
    if click_count < 0 {
        return Err(SynthError::InvalidArgument(format!(
            "click_count cannot be negative (was {click_count})"
        )));
    }
    if click_count == 0 {
        return Ok(Vec::new());
    }

    let restore_to = if restore {
        Some(probe.cursor_position()?)
    } else {
        None
    };

    let mut sequence = Vec::with_capacity(2 + 2 * click_count as usize);
    sequence.push(mouse::move_to(target, rect)?);
    sequence.extend(click(button, click_count)?);
    if let Some(origin) = restore_to {
        sequence.push(mouse::move_to(origin, rect)?);
    }

    debug!(
        ?button,
        x = target.x,
        y = target.y,
        click_count,
        restore,
        "built click-at sequence"
    );
    Ok(sequence)
}

/// Repeat a wheel record `count` times
pub fn scroll_repeat(axis: ScrollAxis, delta: i32, count: i32) -> Result<EventSequence> {
    if count < 0 {
        return Err(SynthError::InvalidArgument(format!(
            "count cannot be negative (was {count})"
        )));
    }
    Ok((0..count).map(|_| mouse::scroll(axis, delta)).collect())
}
