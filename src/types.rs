//! Common Types and Constants
//!
//! Data model shared by the channel sequencer, the transition function and
//! the engine: curriculum universes, per-skill mastery state, learner
//! profiles and the signals that drive them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;

// ==================== Constants ====================

/// Milliseconds in one day, used to turn timestamp gaps into elapsed days
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Decay lost per elapsed day
pub const DECAY_PER_DAY: f64 = 0.03;

/// Lower bound of the decay factor, however long the gap
pub const MIN_DECAY: f64 = 0.5;

/// Per-tag ceiling on misconception pressure
pub const MAX_TAG_PRESSURE: f64 = 0.25;

/// Pressure contributed by each occurrence of a misconception tag
pub const PRESSURE_PER_OCCURRENCE: f64 = 0.03;

/// Fragility penalty applied per unit of misconception pressure
pub const PRESSURE_FRAGILITY_WEIGHT: f64 = 0.2;

// ==================== Universe Types ====================

/// A skill node inside a universe's skill graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: String,
    pub label: String,
    /// Owning universe id
    pub universe_id: String,
    pub base_difficulty: f64,
}

/// Directed dependency `from -> to` between two skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Per-skill difficulty arc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyArc {
    pub skill_id: String,
    pub level: u32,
    pub complexity_weight: f64,
}

/// Skill graph carried by a universe. The engine stores it as opaque data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGraph {
    #[serde(default)]
    pub nodes: Vec<SkillNode>,
    #[serde(default)]
    pub edges: Vec<SkillEdge>,
    #[serde(default)]
    pub arcs: Vec<DifficultyArc>,
}

/// Curriculum namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    pub id: String,
    pub label: String,
    /// Policy value for external consumers; the engine never enforces it
    pub mastery_threshold: f64,
    #[serde(default)]
    pub graph: SkillGraph,
}

impl Universe {
    pub fn new(id: impl Into<String>, label: impl Into<String>, mastery_threshold: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            mastery_threshold,
            graph: SkillGraph::default(),
        }
    }

    pub fn with_graph(mut self, graph: SkillGraph) -> Self {
        self.graph = graph;
        self
    }

    pub fn node(&self, skill_id: &str) -> Option<&SkillNode> {
        self.graph.nodes.iter().find(|n| n.id == skill_id)
    }
}

// ==================== Skill State ====================

/// Mastery state of one (learner, skill) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillState {
    pub stability: f64,
    pub transfer: f64,
    pub momentum: f64,
    pub reasoning_quality: f64,
    pub recency_weight: f64,
    /// 1 means no evidence yet
    pub fragility: f64,
    pub misconception_counts: BTreeMap<String, u64>,
    /// Milliseconds since epoch of the latest signal, 0 = never updated
    pub last_updated_at: i64,
    pub mastery_score: f64,
}

impl Default for SkillState {
    fn default() -> Self {
        Self {
            stability: 0.0,
            transfer: 0.0,
            momentum: 0.0,
            reasoning_quality: 0.0,
            recency_weight: 0.0,
            fragility: 1.0,
            misconception_counts: BTreeMap::new(),
            last_updated_at: 0,
            mastery_score: 0.0,
        }
    }
}

impl SkillState {
    pub fn is_mastered(&self, threshold: f64) -> bool {
        self.mastery_score >= threshold
    }
}

// ==================== Learner Types ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LearnerMode {
    #[default]
    Assessment,
    Sandbox,
}

impl LearnerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::Sandbox => "sandbox",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Self::Sandbox,
            _ => Self::Assessment,
        }
    }
}

/// One applied assessment event, as recorded on the learner timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub skill_id: String,
    pub timestamp: i64,
    pub mastery_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub learner_id: String,
    pub mode: LearnerMode,
    pub skill_states: BTreeMap<String, SkillState>,
    /// Append-only, in application order
    pub timeline: Vec<TimelineEntry>,
}

impl LearnerProfile {
    pub fn new(learner_id: impl Into<String>, mode: LearnerMode) -> Self {
        Self {
            learner_id: learner_id.into(),
            mode,
            skill_states: BTreeMap::new(),
            timeline: Vec::new(),
        }
    }

    pub fn skill(&self, skill_id: &str) -> Option<&SkillState> {
        self.skill_states.get(skill_id)
    }
}

// ==================== Signal Types ====================

/// A single observed performance signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEnvelope {
    pub channel: Channel,
    /// Milliseconds since epoch
    pub observed_at: i64,
    /// Raw performance [0, 1]
    pub value: f64,
    pub reasoning_quality: f64,
    pub transfer_evidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misconception_tag: Option<String>,
}

/// Unit of input to the engine's write path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEvent {
    pub learner_id: String,
    pub universe_id: String,
    pub skill_id: String,
    /// Channel the caller asserts the engine expects next
    pub expected_next_channel: Channel,
    pub signal: SignalEnvelope,
}

// ==================== Engine State ====================

/// Everything one engine instance owns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    pub universes: BTreeMap<String, Universe>,
    pub learners: BTreeMap<String, LearnerProfile>,
}

// ==================== Tests ====================
