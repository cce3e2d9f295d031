//! Mastery Engine
//!
//! Owns the universe and learner registries of a single engine instance and
//! gates every write through the mode, channel and universe checks before
//! running the transition function.
//!
//! Event lifecycle:
//! Received -> ModeCheck (sandbox: return) -> ChannelCheck -> UniverseCheck
//! -> Transition -> Persist -> Return
//!
//! The engine does no locking. Hosts that accept events for the same learner
//! from several callers must serialize them per learner id.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::transition::transition;
use crate::types::{
    AssessmentEvent, EngineState, LearnerMode, LearnerProfile, SkillState, TimelineEntry,
    Universe,
};

#[derive(Debug, Clone, Default)]
pub struct MasteryEngine {
    config: EngineConfig,
    state: EngineState,
}

impl MasteryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::default(),
        }
    }

    /// Rebuild an engine from a state previously taken with [`Self::snapshot`].
    pub fn from_state(state: EngineState, config: EngineConfig) -> Self {
        tracing::info!(
            universes = state.universes.len(),
            learners = state.learners.len(),
            "mastery engine restored from snapshot"
        );
        Self { config, state }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==================== Universes ====================

    /// Insert or wholesale replace a universe. The skill graph is not checked.
    pub fn register_universe(&mut self, universe: Universe) {
        let replaced = self.state.universes.contains_key(&universe.id);
        tracing::info!(
            universe_id = %universe.id,
            nodes = universe.graph.nodes.len(),
            replaced,
            "universe registered"
        );
        self.state.universes.insert(universe.id.clone(), universe);
    }

    pub fn universe(&self, universe_id: &str) -> Option<&Universe> {
        self.state.universes.get(universe_id)
    }

    pub fn universe_count(&self) -> usize {
        self.state.universes.len()
    }

    // ==================== Learners ====================

    /// Create the learner with `mode` if absent. An existing learner is
    /// returned untouched and `mode` is ignored.
    pub fn ensure_learner(&mut self, learner_id: &str, mode: LearnerMode) -> &LearnerProfile {
        self.learner_entry(learner_id, mode)
    }

    pub fn set_mode(&mut self, learner_id: &str, mode: LearnerMode) -> &LearnerProfile {
        let learner = self.learner_entry(learner_id, LearnerMode::Assessment);
        if learner.mode != mode {
            tracing::debug!(
                learner_id,
                from = learner.mode.as_str(),
                to = mode.as_str(),
                "learner mode changed"
            );
        }
        learner.mode = mode;
        learner
    }

    /// Live view of the learner, created in assessment mode if absent. The
    /// borrow ends before any later mutating call.
    pub fn get_learner(&mut self, learner_id: &str) -> &LearnerProfile {
        self.learner_entry(learner_id, LearnerMode::Assessment)
    }

    /// Detached copy of one learner. Never creates the learner.
    pub fn learner_snapshot(&self, learner_id: &str) -> Option<LearnerProfile> {
        self.state.learners.get(learner_id).cloned()
    }

    /// Detached copy of one skill state. Never creates anything.
    pub fn skill_state(&self, learner_id: &str, skill_id: &str) -> Option<SkillState> {
        self.state
            .learners
            .get(learner_id)
            .and_then(|learner| learner.skill(skill_id))
            .cloned()
    }

    pub fn learner_count(&self) -> usize {
        self.state.learners.len()
    }

    fn learner_entry(&mut self, learner_id: &str, mode: LearnerMode) -> &mut LearnerProfile {
        self.state
            .learners
            .entry(learner_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(learner_id, mode = mode.as_str(), "learner created");
                LearnerProfile::new(learner_id, mode)
            })
    }

    // ==================== Events ====================

    /// Gated write path. A failed check leaves the engine untouched.
    pub fn apply_assessment_event(
        &mut self,
        event: &AssessmentEvent,
    ) -> Result<&LearnerProfile, EngineError> {
        let mode = self
            .state
            .learners
            .get(&event.learner_id)
            .map(|learner| learner.mode)
            .unwrap_or_default();

        if mode == LearnerMode::Sandbox {
            tracing::debug!(
                learner_id = %event.learner_id,
                skill_id = %event.skill_id,
                "sandbox learner, event ignored"
            );
            return Ok(self.learner_entry(&event.learner_id, mode));
        }

        if event.signal.channel != event.expected_next_channel {
            tracing::warn!(
                learner_id = %event.learner_id,
                expected = %event.expected_next_channel,
                actual = %event.signal.channel,
                "channel contract violation"
            );
            return Err(EngineError::ChannelContractViolation {
                expected: event.expected_next_channel,
                actual: event.signal.channel,
            });
        }

        if !self.state.universes.contains_key(&event.universe_id) {
            tracing::warn!(
                learner_id = %event.learner_id,
                universe_id = %event.universe_id,
                "event references unregistered universe"
            );
            return Err(EngineError::UnregisteredUniverse {
                universe_id: event.universe_id.clone(),
            });
        }

        let learner = self.learner_entry(&event.learner_id, mode);
        let next = match learner.skill_states.get(&event.skill_id) {
            Some(previous) => transition(previous, &event.signal),
            None => transition(&SkillState::default(), &event.signal),
        };

        tracing::debug!(
            learner_id = %event.learner_id,
            skill_id = %event.skill_id,
            channel = %event.signal.channel,
            mastery_score = next.mastery_score,
            "assessment event applied"
        );

        learner.timeline.push(TimelineEntry {
            skill_id: event.skill_id.clone(),
            timestamp: event.signal.observed_at,
            mastery_score: next.mastery_score,
        });
        learner.skill_states.insert(event.skill_id.clone(), next);

        Ok(learner)
    }

    // ==================== Snapshot ====================

    /// Deep copy of the whole engine state, sharing nothing with it.
    pub fn snapshot(&self) -> EngineState {
        self.state.clone()
    }
}
