//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the portal backend (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP, exported to TypeScript with ts-rs
//! for the parts of the application that are not written in Rust.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstitutionError {
    #[error("unknown workload tier: {0:?} (expected one of 15, 30, 45, 60, 75, 90)")]
    UnknownWorkloadTier(String),
}

// ============================================================================
// Workload Rules
// ============================================================================

/// Discrete workload tier, keyed by its number of hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, TS)]
#[ts(export, export_to = "../../portal-ui/src/types/generated.ts")]
pub enum WorkloadTier {
    #[serde(rename = "15")]
    H15,
    #[serde(rename = "30")]
    H30,
    #[serde(rename = "45")]
    H45,
    #[serde(rename = "60")]
    H60,
    #[serde(rename = "75")]
    H75,
    #[serde(rename = "90")]
    H90,
}

impl WorkloadTier {
    /// Every tier, ascending.
    pub const ALL: [WorkloadTier; 6] = [
        WorkloadTier::H15,
        WorkloadTier::H30,
        WorkloadTier::H45,
        WorkloadTier::H60,
        WorkloadTier::H75,
        WorkloadTier::H90,
    ];

    pub fn hours(self) -> u32 {
        match self {
            WorkloadTier::H15 => 15,
            WorkloadTier::H30 => 30,
            WorkloadTier::H45 => 45,
            WorkloadTier::H60 => 60,
            WorkloadTier::H75 => 75,
            WorkloadTier::H90 => 90,
        }
    }

    /// Wire key, identical to the serde representation.
    pub fn as_key(self) -> &'static str {
        match self {
            WorkloadTier::H15 => "15",
            WorkloadTier::H30 => "30",
            WorkloadTier::H45 => "45",
            WorkloadTier::H60 => "60",
            WorkloadTier::H75 => "75",
            WorkloadTier::H90 => "90",
        }
    }
}

impl fmt::Display for WorkloadTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for WorkloadTier {
    type Err = InstitutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkloadTier::ALL
            .into_iter()
            .find(|tier| tier.as_key() == s)
            .ok_or_else(|| InstitutionError::UnknownWorkloadTier(s.to_string()))
    }
}

/// Rule value for every workload tier.
///
/// Serialized as an object with exactly the six tier keys; missing or extra
/// keys are rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../../portal-ui/src/types/generated.ts")]
pub struct WorkloadRules {
    #[serde(rename = "15")]
    pub tier_15: f64,
    #[serde(rename = "30")]
    pub tier_30: f64,
    #[serde(rename = "45")]
    pub tier_45: f64,
    #[serde(rename = "60")]
    pub tier_60: f64,
    #[serde(rename = "75")]
    pub tier_75: f64,
    #[serde(rename = "90")]
    pub tier_90: f64,
}

impl WorkloadRules {
    pub fn get(&self, tier: WorkloadTier) -> f64 {
        match tier {
            WorkloadTier::H15 => self.tier_15,
            WorkloadTier::H30 => self.tier_30,
            WorkloadTier::H45 => self.tier_45,
            WorkloadTier::H60 => self.tier_60,
            WorkloadTier::H75 => self.tier_75,
            WorkloadTier::H90 => self.tier_90,
        }
    }

    pub fn set(&mut self, tier: WorkloadTier, value: f64) {
        let slot = match tier {
            WorkloadTier::H15 => &mut self.tier_15,
            WorkloadTier::H30 => &mut self.tier_30,
            WorkloadTier::H45 => &mut self.tier_45,
            WorkloadTier::H60 => &mut self.tier_60,
            WorkloadTier::H75 => &mut self.tier_75,
            WorkloadTier::H90 => &mut self.tier_90,
        };
        *slot = value;
    }

    /// `(tier, value)` pairs in ascending tier order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkloadTier, f64)> + '_ {
        WorkloadTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.get(tier)))
    }

    pub fn from_fn(mut f: impl FnMut(WorkloadTier) -> f64) -> Self {
        let mut rules = Self::default();
        for tier in WorkloadTier::ALL {
            rules.set(tier, f(tier));
        }
        rules
    }
}

// ============================================================================
// Institution
// ============================================================================

/// Institution record as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../portal-ui/src/types/generated.ts")]
pub struct Institution {
    pub id: String,
    pub name: String,
    /// Category label (e.g. "university", "technical school")
    pub category: String,
    pub workload_rules: WorkloadRules,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an institution; id and timestamps are server-assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../portal-ui/src/types/generated.ts")]
pub struct CreateInstitution {
    pub name: String,
    pub category: String,
    pub workload_rules: WorkloadRules,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../portal-ui/src/types/generated.ts")]
pub struct UpdateInstitution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload_rules: Option<WorkloadRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateInstitution {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.workload_rules.is_none()
            && self.active.is_none()
    }
}

impl Institution {
    pub fn from_create(id: String, create: CreateInstitution, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: create.name,
            category: create.category,
            workload_rules: create.workload_rules,
            active: create.active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `update` into the record. `updated_at` only moves when something
    /// was actually supplied.
    pub fn apply_update(&mut self, update: UpdateInstitution, now: DateTime<Utc>) {
        if update.is_empty() {
            return;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(rules) = update.workload_rules {
            self.workload_rules = rules;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        self.updated_at = now;
    }

    pub fn workload_rule(&self, tier: WorkloadTier) -> f64 {
        self.workload_rules.get(tier)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ts_rs::Config;

    fn sample_rules() -> WorkloadRules {
        WorkloadRules::from_fn(|tier| f64::from(tier.hours()) / 15.0)
    }

    fn sample_institution() -> Institution {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Institution {
            id: "inst_1".to_string(),
            name: "Escola Técnica Central".to_string(),
            category: "technical".to_string(),
            workload_rules: sample_rules(),
            active: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_workload_tier_keys() {
        let keys: Vec<&str> = WorkloadTier::ALL.iter().map(|t| t.as_key()).collect();
        assert_eq!(keys, vec!["15", "30", "45", "60", "75", "90"]);

        let json = serde_json::to_string(&WorkloadTier::H45).unwrap();
        assert_eq!(json, "\"45\"");
        let parsed: WorkloadTier = serde_json::from_str("\"90\"").unwrap();
        assert_eq!(parsed, WorkloadTier::H90);
    }

    #[test]
    fn test_workload_tier_from_str() {
        assert_eq!("60".parse::<WorkloadTier>().unwrap(), WorkloadTier::H60);
        assert_eq!("15".parse::<WorkloadTier>().unwrap(), WorkloadTier::H15);
        assert_eq!(
            " 15 ".parse::<WorkloadTier>().unwrap_err(),
            InstitutionError::UnknownWorkloadTier(" 15 ".to_string())
        );
        assert!("15h".parse::<WorkloadTier>().is_err());

        let err = "20".parse::<WorkloadTier>().unwrap_err();
        assert_eq!(err, InstitutionError::UnknownWorkloadTier("20".to_string()));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_workload_rules_json_shape() {
        let rules = sample_rules();
        let value = serde_json::to_value(rules).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 6);
        assert_eq!(obj["15"], serde_json::json!(1.0));
        assert_eq!(obj["90"], serde_json::json!(6.0));
    }

    #[test]
    fn test_workload_rules_reject_missing_and_extra_keys() {
        let missing = r#"{"15":1,"30":2,"45":3,"60":4,"75":5}"#;
        assert!(serde_json::from_str::<WorkloadRules>(missing).is_err());

        let extra = r#"{"15":1,"30":2,"45":3,"60":4,"75":5,"90":6,"120":7}"#;
        assert!(serde_json::from_str::<WorkloadRules>(extra).is_err());
    }

    #[test]
    fn test_workload_rules_get_set_iter() {
        let mut rules = WorkloadRules::default();
        rules.set(WorkloadTier::H75, 2.5);

        assert_eq!(rules.get(WorkloadTier::H75), 2.5);
        assert_eq!(rules.get(WorkloadTier::H15), 0.0);

        let tiers: Vec<WorkloadTier> = rules.iter().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, WorkloadTier::ALL.to_vec());
    }

    #[test]
    fn test_institution_camel_case_round_trip() {
        let institution = sample_institution();
        let json = serde_json::to_value(&institution).unwrap();

        assert!(json.get("workloadRules").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["workloadRules"]["30"], serde_json::json!(2.0));

        let back: Institution = serde_json::from_value(json).unwrap();
        assert_eq!(back, institution);
    }

    #[test]
    fn test_create_defaults_to_active() {
        let json = r#"{
            "name": "Instituto Norte",
            "category": "university",
            "workloadRules": {"15":1,"30":1,"45":1,"60":1,"75":1,"90":1}
        }"#;
        let create: CreateInstitution = serde_json::from_str(json).unwrap();
        assert!(create.active);

        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 30, 0).unwrap();
        let institution = Institution::from_create("inst_9".to_string(), create, now);
        assert_eq!(institution.created_at, now);
        assert_eq!(institution.updated_at, now);
        assert_eq!(institution.workload_rule(WorkloadTier::H60), 1.0);
    }

    #[test]
    fn test_apply_update_merges_supplied_fields() {
        let mut institution = sample_institution();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        institution.apply_update(
            UpdateInstitution {
                active: Some(false),
                ..Default::default()
            },
            later,
        );

        assert!(!institution.active);
        assert_eq!(institution.name, "Escola Técnica Central");
        assert_eq!(institution.updated_at, later);
    }

    #[test]
    fn test_apply_empty_update_keeps_timestamp() {
        let mut institution = sample_institution();
        let before = institution.updated_at;
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        institution.apply_update(UpdateInstitution::default(), later);
        assert_eq!(institution.updated_at, before);
    }

    #[test]
    fn test_update_skips_absent_fields_on_the_wire() {
        let update = UpdateInstitution {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"Renamed"}"#);
    }

    #[test]
    fn export_types() {
        // Export all types to TypeScript
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        WorkloadTier::export(&config).unwrap();
        WorkloadRules::export(&config).unwrap();
        Institution::export(&config).unwrap();
        CreateInstitution::export(&config).unwrap();
        UpdateInstitution::export(&config).unwrap();
    }
}
