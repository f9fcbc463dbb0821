use serde::{Deserialize, Serialize};

/// Qualitative severity attached to a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Critical,
    High,
    Incident,
}

/// One marker on the map. Field order matches the embedded JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,

    /// Category label ("US Air Force Base", "Strategic Port", ...).
    #[serde(rename = "type")]
    pub kind: String,

    pub lat: f64,
    pub lng: f64,

    /// Hex display color, `#rrggbb`.
    pub color: String,

    pub status: String,
    pub note: String,
    pub risk: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tier_serializes_lowercase() {
        let s = serde_json::to_string(&RiskTier::Incident).unwrap();
        assert_eq!(s, "\"incident\"");
        let t: RiskTier = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(t, RiskTier::Critical);
    }

    #[test]
    fn kind_is_serialized_as_type() {
        let rec = LocationRecord {
            name: "A".into(),
            kind: "Port".into(),
            lat: 1.0,
            lng: 2.0,
            color: "#000000".into(),
            status: "s".into(),
            note: "n".into(),
            risk: RiskTier::High,
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["type"], "Port");
        assert!(v.get("kind").is_none());

        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 8);
    }
}
