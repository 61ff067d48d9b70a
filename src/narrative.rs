//! Boundary to the narrative-generation collaborator.
//!
//! The pipeline's facts are deterministic and verified; the narration
//! stage only turns them into prose. This module builds the outbound
//! payload (the fixed instruction plus the FactRecord serialized
//! verbatim) without performing the LLM call itself.

use crate::domain::model::FactRecord;
use crate::utils::error::Result;
use serde::Serialize;

/// Fixed instruction accompanying every facts payload. The narration
/// stage must not recompute any number in the record.
pub const NARRATIVE_INSTRUCTION: &str = "\
You are a reflective soul guide. The user JSON you receive is VERIFIED \
- do NOT recalculate any numerology or Human-Design numbers. Instead:
1. Summarise each system succinctly
2. Synthesize them into a cohesive life-blueprint
3. Highlight strengths, shadows, and growth practices
Use a warm, empowering tone.";

#[derive(Debug, Clone, Serialize)]
pub struct NarrativeRequest<'a> {
    pub instruction: &'static str,
    pub facts: &'a FactRecord,
}

/// Build the payload handed to the narration stage. The facts are
/// embedded unmodified.
pub fn narrative_request(facts: &FactRecord) -> NarrativeRequest<'_> {
    NarrativeRequest {
        instruction: NARRATIVE_INSTRUCTION,
        facts,
    }
}

/// Serialized form of the payload, for transports that want raw JSON.
pub fn narrative_payload(facts: &FactRecord) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(narrative_request(facts))?)
}
