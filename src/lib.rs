//! # mastery-engine - skill mastery over curriculum universes
//!
//! Tracks how a learner's command of individual skills evolves from a stream
//! of performance signals, while forcing those signals to arrive through a
//! fixed rotation of input channels.
//!
//! ## Module structure
//!
//! - [`types`] - universes, skill state, learner profiles, signals
//! - [`channel`] - reading -> visual -> kinesthetic -> auditory sequencing
//! - [`transition`] - the pure skill-state transition function
//! - [`engine`] - registries and the gated event write path
//! - [`sanitize`] - clamping and opt-in skill graph validation
//! - [`error`] - engine and validation errors
//! - [`config`] / [`logging`] - environment config and tracing setup
//!
//! ## Example
//!
//! ```rust
//! use mastery_engine::{
//!     select_next_channel, AssessmentEvent, LearnerMode, MasteryEngine, SignalEnvelope,
//!     Universe,
//! };
//!
//! let mut engine = MasteryEngine::new();
//! engine.register_universe(Universe::new("u1", "Fractions", 0.8));
//! engine.ensure_learner("l1", LearnerMode::Assessment);
//!
//! let channel = select_next_channel(None);
//! let event = AssessmentEvent {
//!     learner_id: "l1".to_string(),
//!     universe_id: "u1".to_string(),
//!     skill_id: "s1".to_string(),
//!     expected_next_channel: channel,
//!     signal: SignalEnvelope {
//!         channel,
//!         observed_at: 1_700_000_000_000,
//!         value: 0.9,
//!         reasoning_quality: 0.8,
//!         transfer_evidence: 0.7,
//!         misconception_tag: None,
//!     },
//! };
//!
//! let learner = engine.apply_assessment_event(&event).unwrap();
//! assert_eq!(learner.timeline.len(), 1);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod channel;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod sanitize;
pub mod transition;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use channel::{channel_cycle, select_next_channel, select_next_channel_str, Channel, ChannelCycle};

pub use config::EngineConfig;

pub use engine::MasteryEngine;

pub use error::{EngineError, UniverseIssue};

pub use sanitize::{clamp_unit, validate_universe};

pub use transition::{decay_factor, elapsed_days, misconception_pressure, transition};
