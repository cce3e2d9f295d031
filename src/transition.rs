//! Skill State Transition
//!
//! Pure map from (previous skill state, new signal) to the next skill state.
//! Every output field except counts and timestamp is clamped to [0, 1].
//!
//! decay            = clamp(1 - days * 0.03, 0.5, 1)
//! recency'         = 0.7  * recency   * decay + 0.3  * 1
//! stability'       = 0.65 * stability * decay + 0.35 * value
//! transfer'        = 0.7  * transfer  * decay + 0.3  * transfer_evidence
//! reasoning'       = 0.6  * reasoning * decay + 0.4  * reasoning_quality
//! momentum'        = 0.75 * momentum  * decay + 0.25 * (value - stability + 1) / 2
//! fragility        = 1 - (0.5 * stability' + 0.2 * transfer' + 0.3 * reasoning')
//!                    + 0.2 * sum(min(0.25, count * 0.03))
//! mastery          = 0.28 * stability' + 0.22 * transfer' + 0.18 * momentum'
//!                    + 0.2 * reasoning' + 0.12 * recency' - 0.18 * fragility

use std::collections::BTreeMap;

use crate::sanitize::clamp_unit;
use crate::types::{
    SignalEnvelope, SkillState, DECAY_PER_DAY, MAX_TAG_PRESSURE, MIN_DECAY, MS_PER_DAY,
    PRESSURE_FRAGILITY_WEIGHT, PRESSURE_PER_OCCURRENCE,
};

/// Days between the previous update and `observed_at`. Never negative; zero
/// when the state has never been updated.
pub fn elapsed_days(last_updated_at: i64, observed_at: i64) -> f64 {
    if last_updated_at == 0 {
        return 0.0;
    }
    // Gap taken in f64 so extreme caller timestamps cannot overflow.
    ((observed_at as f64 - last_updated_at as f64) / MS_PER_DAY).max(0.0)
}

pub fn decay_factor(elapsed_days: f64) -> f64 {
    (1.0 - elapsed_days * DECAY_PER_DAY).clamp(MIN_DECAY, 1.0)
}

/// Sum of per-tag pressure; each tag is capped, the total is not.
pub fn misconception_pressure(counts: &BTreeMap<String, u64>) -> f64 {
    counts
        .values()
        .map(|&count| (count as f64 * PRESSURE_PER_OCCURRENCE).min(MAX_TAG_PRESSURE))
        .sum()
}

fn blend(keep: f64, previous: f64, decay: f64, gain: f64, evidence: f64) -> f64 {
    clamp_unit(keep * previous * decay + gain * evidence)
}

pub fn transition(previous: &SkillState, signal: &SignalEnvelope) -> SkillState {
    let decay = decay_factor(elapsed_days(previous.last_updated_at, signal.observed_at));

    let recency_weight = blend(0.7, previous.recency_weight, decay, 0.3, 1.0);
    let stability = blend(0.65, previous.stability, decay, 0.35, signal.value);
    let transfer = blend(0.7, previous.transfer, decay, 0.3, signal.transfer_evidence);
    let reasoning_quality = blend(
        0.6,
        previous.reasoning_quality,
        decay,
        0.4,
        signal.reasoning_quality,
    );

    // Delta against the undecayed prior stability, may be negative.
    let momentum_delta = signal.value - previous.stability;
    let momentum = blend(
        0.75,
        previous.momentum,
        decay,
        0.25,
        (momentum_delta + 1.0) / 2.0,
    );

    let mut misconception_counts = previous.misconception_counts.clone();
    if let Some(tag) = signal.misconception_tag.as_deref().filter(|t| !t.is_empty()) {
        *misconception_counts.entry(tag.to_string()).or_insert(0) += 1;
    }
    let pressure = misconception_pressure(&misconception_counts);

    let fragility = clamp_unit(1.0 - (0.5 * stability + 0.2 * transfer + 0.3 * reasoning_quality));
    let fragility = clamp_unit(fragility + pressure * PRESSURE_FRAGILITY_WEIGHT);

    let mastery_score = clamp_unit(
        0.28 * stability + 0.22 * transfer + 0.18 * momentum + 0.2 * reasoning_quality
            + 0.12 * recency_weight
            - 0.18 * fragility,
    );

    SkillState {
        stability,
        transfer,
        momentum,
        reasoning_quality,
        recency_weight,
        fragility,
        misconception_counts,
        last_updated_at: signal.observed_at,
        mastery_score,
    }
}
