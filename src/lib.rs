//! # inputsynth
//!
//! Synthetic input event engine: builds and injects keyboard and mouse
//! event batches through the OS injection facility.
//!
//! # Architecture
//!
//! ```text
//! inputsynth
//!   ├─> Synthesizer (facade: one method per compound action)
//!   ├─> Sequencer (compound actions → ordered event sequences)
//!   ├─> Record Builders (keyboard / mouse → single event records)
//!   ├─> Coordinate Mapper (pixels ↔ normalized absolute space)
//!   ├─> Dispatcher (sequence → wire batch → injection, acceptance accounting)
//!   └─> Platform Collaborators (scan-code map, desktop probe, input sink)
//! ```
//!
//! # Data Flow
//!
//! **Action Path:** Facade → Sequencer → Record Builders → Dispatcher → OS
//!
//! **Query Path:** Facade → Desktop Probe → OS
//!
//! Sequences are always built in full before anything is dispatched, so
//! an argument error never emits a partial action. The OS reports only
//! an accepted count on injection; a shortfall surfaces as
//! [`SynthError::PartialInjection`] with no cause attached.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

/// Synthesis configuration
pub mod config;

/// Pixel ↔ normalized coordinate mapping
pub mod coords;

/// Batch dispatch and acceptance accounting
pub mod dispatch;

/// Error types
pub mod error;

/// Keyboard record building
pub mod keyboard;

/// Virtual keys and modifiers
pub mod keys;

/// Mouse record building
pub mod mouse;

/// Platform collaborator traits and implementations
pub mod platform;

/// Event records and flags
pub mod record;

/// Compound action sequencing
pub mod sequence;

/// High-level synthesis facade
pub mod synth;

/// Native wire encoding
pub mod wire;

pub use config::SynthConfig;
pub use coords::{NormalizedPoint, PixelPoint, ReferenceRect};
pub use dispatch::SubmitReport;
pub use error::{Result, SynthError};
pub use keys::{Modifier, ModifierSet, VariantPolicy, VirtualKey};
pub use mouse::{MouseButton, ScrollAxis};
pub use platform::{DesktopProbe, InputSink, ScanCodeMap};
pub use record::{EventRecord, EventSequence, KeyEventFlag, KeyState, MouseEventFlag};
pub use synth::Synthesizer;
