use crate::level::{level_as_label, level_hint, RiskLevel};
use crate::score::classify;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned record identifier.
///
/// Backends differ on whether ids are numeric or strings (e.g. document
/// ids), so both are accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskId::Number(n) => write!(f, "{}", n),
            RiskId::Text(s) => f.write_str(s),
        }
    }
}

/// One asset/threat pairing as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    #[serde(alias = "_id")]
    pub id: RiskId,
    pub asset: String,
    pub threat: String,
    pub likelihood: i32,
    pub impact: i32,
    pub score: i32,
    #[serde(with = "level_as_label", default)]
    pub level: Option<RiskLevel>,
    #[serde(default)]
    pub hint: String,
}

impl RiskRecord {
    /// Build a record from raw inputs, deriving score, level and hint.
    pub fn new(id: RiskId, asset: &str, threat: &str, likelihood: i32, impact: i32) -> Self {
        let c = classify(likelihood, impact);
        Self {
            id,
            asset: asset.to_string(),
            threat: threat.to_string(),
            likelihood,
            impact,
            score: c.score,
            level: c.level,
            hint: c.hint.to_string(),
        }
    }
}

/// Decode a `GET {base}/risks` body one entry at a time.
///
/// A body that is not a JSON array is an error. Entries that do not decode
/// as a [`RiskRecord`] are skipped with a warning.
pub fn parse_listing(body: &str) -> Result<Vec<RiskRecord>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let records = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed risk at index {}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(records)
}

/// Body of `POST {base}/add-risk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRisk {
    pub asset: String,
    pub threat: String,
    pub likelihood: i32,
    pub impact: i32,
    pub score: i32,
    #[serde(with = "level_as_label")]
    pub level: Option<RiskLevel>,
    pub hint: String,
}

impl NewRisk {
    /// Build the payload, computing the derived fields client-side.
    pub fn new(asset: &str, threat: &str, likelihood: i32, impact: i32) -> Self {
        let c = classify(likelihood, impact);
        Self {
            asset: asset.to_string(),
            threat: threat.to_string(),
            likelihood,
            impact,
            score: c.score,
            level: c.level,
            hint: c.hint.to_string(),
        }
    }
}

/// Response of `POST {base}/add-risk`.
///
/// Only the id is guaranteed. Whatever else the server sends wins over the
/// client-computed payload; missing fields fall back to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedRisk {
    #[serde(alias = "_id")]
    pub id: RiskId,
    pub asset: Option<String>,
    pub threat: Option<String>,
    pub likelihood: Option<i32>,
    pub impact: Option<i32>,
    pub score: Option<i32>,
    pub level: Option<String>,
    pub hint: Option<String>,
}

impl CreatedRisk {
    pub fn into_record(self, sent: &NewRisk) -> RiskRecord {
        let level = match self.level {
            Some(label) => RiskLevel::from_label(&label),
            None => sent.level,
        };
        let hint = match self.hint {
            Some(hint) => hint,
            // Server re-derived the level but not the hint
            None if level != sent.level => level_hint(level).to_string(),
            None => sent.hint.clone(),
        };
        RiskRecord {
            id: self.id,
            asset: self.asset.unwrap_or_else(|| sent.asset.clone()),
            threat: self.threat.unwrap_or_else(|| sent.threat.clone()),
            likelihood: self.likelihood.unwrap_or(sent.likelihood),
            impact: self.impact.unwrap_or(sent.impact),
            score: self.score.unwrap_or(sent.score),
            level,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_numeric_id() {
        let json = r#"{"id":7,"asset":"DB","threat":"SQLi","likelihood":4,"impact":5,"score":20,"level":"Critical","hint":"x"}"#;
        let record: RiskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RiskId::Number(7));
        assert_eq!(record.level, Some(RiskLevel::Critical));
        assert_eq!(record.hint, "x");
    }

    #[test]
    fn test_record_accepts_document_id_and_missing_hint() {
        let json = r#"{"_id":"65af","asset":"Web","threat":"XSS","likelihood":2,"impact":2,"score":4,"level":"Low"}"#;
        let record: RiskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RiskId::Text("65af".to_string()));
        assert_eq!(record.id.to_string(), "65af");
        assert_eq!(record.hint, "");
    }

    #[test]
    fn test_sentinel_level_is_unrated() {
        let json = r#"{"id":1,"asset":"A","threat":"T","likelihood":0,"impact":3,"score":0,"level":"Enter risk","hint":""}"#;
        let record: RiskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.level, None);
    }

    #[test]
    fn test_listing_skips_malformed_entries() {
        let body = r#"[
            {"id":1,"asset":"DB","threat":"SQLi","likelihood":4,"impact":5,"score":20,"level":"Critical"},
            {"id":2,"asset":"Web","threat":"XSS","likelihood":2,"impact":2},
            {"id":3,"asset":"VPN","threat":"Brute force","likelihood":4,"impact":4,"score":16,"level":"High"}
        ]"#;
        let records = parse_listing(body).unwrap();
        let ids: Vec<RiskId> = records.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RiskId::Number(1), RiskId::Number(3)]);
    }

    #[test]
    fn test_listing_rejects_non_array_body() {
        assert!(parse_listing(r#"{"message":"down"}"#).is_err());
        assert!(parse_listing("[]").unwrap().is_empty());
    }

    #[test]
    fn test_new_risk_serializes_all_seven_fields() {
        let payload = NewRisk::new("DB", "SQLi", 4, 5);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["asset"], "DB");
        assert_eq!(value["threat"], "SQLi");
        assert_eq!(value["likelihood"], 4);
        assert_eq!(value["impact"], 5);
        assert_eq!(value["score"], 20);
        assert_eq!(value["level"], "Critical");
        assert_eq!(
            value["hint"],
            "Immediate action required: NIST PR.AC-7 + ISO 27001 controls"
        );
    }

    #[test]
    fn test_created_risk_server_fields_win() {
        let sent = NewRisk::new("DB", "SQLi", 4, 5);
        let created: CreatedRisk =
            serde_json::from_str(r#"{"id":42,"asset":"Database","score":20,"level":"Critical"}"#)
                .unwrap();
        let record = created.into_record(&sent);
        assert_eq!(record.id, RiskId::Number(42));
        assert_eq!(record.asset, "Database");
        assert_eq!(record.threat, "SQLi");
        assert_eq!(record.score, 20);
        assert_eq!(record.hint, sent.hint);
    }

    #[test]
    fn test_created_risk_rederived_level_refreshes_hint() {
        let sent = NewRisk::new("DB", "SQLi", 4, 5);
        let created: CreatedRisk =
            serde_json::from_str(r#"{"id":1,"level":"High"}"#).unwrap();
        let record = created.into_record(&sent);
        assert_eq!(record.level, Some(RiskLevel::High));
        assert_eq!(record.hint, RiskLevel::High.hint());
    }
}
