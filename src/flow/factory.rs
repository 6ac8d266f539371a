// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Committing a draft into a named, immutable flow.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::draft::{normalize_flow_draft, FlowDraft};
use super::error::CreateFlowError;
use super::validate::validate_flow_draft;

const ID_SUFFIX_LEN: usize = 6;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A committed practice routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    /// `flow_<epoch-millis>_<base36 suffix>`
    pub id: String,
    /// Trimmed, non-empty name
    pub name: String,
    /// Normalized draft snapshot taken at commit time
    pub config: FlowDraft,
    /// Practice progress (0-100)
    pub progress_percent: u8,
    /// ISO-8601 commit time
    pub created_at: String,
    /// ISO-8601 time of the last change
    pub updated_at: String,
}

/// Format a timestamp the way flows store it, e.g. `2026-02-17T10:00:00.000Z`
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate a flow id from the commit time and a random base36 suffix
///
/// Ids are unique enough for one in-memory session; collisions are not
/// checked.
pub fn create_flow_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("flow_{}_{}", now.timestamp_millis(), suffix)
}

/// Build a flow from a draft and a user-supplied name
///
/// Fails when the trimmed name is empty or the draft has validation
/// errors; the failure always carries the full validation list. The
/// function has no side effects beyond drawing from `rng`.
pub fn create_flow_from_draft<R: Rng>(
    draft: &FlowDraft,
    name: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Flow, CreateFlowError> {
    let name = name.trim();
    let errors = validate_flow_draft(draft);

    if name.is_empty() {
        return Err(CreateFlowError {
            errors,
            missing_name: true,
        });
    }

    if !errors.is_empty() {
        return Err(CreateFlowError {
            errors,
            missing_name: false,
        });
    }

    let timestamp = iso_timestamp(now);

    Ok(Flow {
        id: create_flow_id(now, rng),
        name: name.to_string(),
        config: normalize_flow_draft(draft),
        progress_percent: 0,
        created_at: timestamp.clone(),
        updated_at: timestamp,
    })
}
