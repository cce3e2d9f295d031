//! Data Sanitization
//!
//! Numerical stability utilities and opt-in curriculum checks.
//!
//! Functions:
//! - Unit-interval clamping that absorbs NaN and infinities
//! - Unit-interval range checks
//! - Skill graph referential validation (for authoring tooling; the engine
//!   never calls it)

use std::collections::HashSet;

use crate::error::UniverseIssue;
use crate::types::Universe;

/// Clamp into [0, 1]. NaN maps to 0, infinities saturate.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Whether every value lies in [0, 1]
pub fn all_in_unit_interval(arr: &[f64]) -> bool {
    arr.iter().all(|&x| (0.0..=1.0).contains(&x))
}

/// Check that every node, edge and arc of a universe resolves inside that
/// universe. Returns all problems found, in graph order.
pub fn validate_universe(universe: &Universe) -> Vec<UniverseIssue> {
    let mut issues = Vec::new();
    let mut known: HashSet<&str> = HashSet::new();

    for node in &universe.graph.nodes {
        if node.universe_id != universe.id {
            issues.push(UniverseIssue::ForeignNode {
                node_id: node.id.clone(),
                owner: node.universe_id.clone(),
            });
        }
        if !known.insert(node.id.as_str()) {
            issues.push(UniverseIssue::DuplicateNode {
                node_id: node.id.clone(),
            });
        }
    }

    for edge in &universe.graph.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !known.contains(endpoint.as_str()) {
                issues.push(UniverseIssue::DanglingEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    for arc in &universe.graph.arcs {
        if !known.contains(arc.skill_id.as_str()) {
            issues.push(UniverseIssue::DanglingArc {
                skill_id: arc.skill_id.clone(),
            });
        }
    }

    issues
}
