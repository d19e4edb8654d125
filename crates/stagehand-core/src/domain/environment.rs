//! The per-stage/per-region environment document.
//!
//! Written alongside the scaffolded service as `stagehand.env.yaml`. The
//! document is a two-level map (`stages -> regions -> vars`); a fresh
//! scaffold seeds exactly one empty vars mapping for the resolved
//! stage/region pair. `BTreeMap` keeps serialization deterministic so a
//! re-scaffold produces byte-equal output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceIdentity;

/// Free-form deployment variables for one stage/region pair.
pub type RegionVars = BTreeMap<String, serde_yaml::Value>;

/// Environment document: `stages.<stage>.regions.<region> = { vars }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDocument {
    pub stages: BTreeMap<String, StageEntry>,
}

/// One stage's regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageEntry {
    pub regions: BTreeMap<String, RegionVars>,
}

impl EnvironmentDocument {
    /// Document with a single empty branch for the identity's stage/region.
    pub fn seeded(identity: &ServiceIdentity) -> Self {
        let mut stage = StageEntry::default();
        stage
            .regions
            .insert(identity.region().to_string(), RegionVars::new());

        let mut doc = Self::default();
        doc.stages.insert(identity.stage().to_string(), stage);
        doc
    }

    /// The vars mapping for a stage/region pair, if present.
    pub fn vars(&self, stage: &str, region: &str) -> Option<&RegionVars> {
        self.stages.get(stage)?.regions.get(region)
    }
}
