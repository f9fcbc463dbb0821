//! The hand-authored location table compiled into the binary.

use super::record::{LocationRecord, RiskTier};

struct Entry {
    name: &'static str,
    kind: &'static str,
    lat: f64,
    lng: f64,
    color: &'static str,
    status: &'static str,
    note: &'static str,
    risk: RiskTier,
}

const TABLE: &[Entry] = &[
    Entry {
        name: "Al Dhafra Air Base",
        kind: "US Air Force Base — Abu Dhabi",
        lat: 24.248,
        lng: 54.591,
        color: "#cc0000",
        status: "CONFIRMED IRANIAN MISSILE TARGET",
        note: "Directly targeted by Iranian ballistic missiles. \
               Hosts US F-35s, AWACS, and tanker aircraft. \
               Primary US air power hub in the Gulf.",
        risk: RiskTier::Critical,
    },
    Entry {
        name: "Al Minhad Air Base",
        kind: "Coalition Air Base — South Dubai",
        lat: 25.026,
        lng: 55.366,
        color: "#cc0000",
        status: "HIGH RISK — US COALITION PRESENCE",
        note: "Hosts US and allied coalition forces south of Dubai. \
               Likely on Iranian secondary target list. \
               Shares corridor with Dubai International Airport.",
        risk: RiskTier::Critical,
    },
    Entry {
        name: "Jebel Ali Port",
        kind: "Strategic Port / US Navy Docking",
        lat: 24.993,
        lng: 55.058,
        color: "#e06000",
        status: "ELEVATED RISK — US NAVAL USE",
        note: "World's largest man-made harbour. Regularly used by US Navy. \
               Strategic dual-use civilian/military target. \
               ~12km from Palm Jumeirah drone strike — likely causal link.",
        risk: RiskTier::High,
    },
    Entry {
        name: "Palm Jumeirah — Drone Strike",
        kind: "Confirmed Drone Incident",
        lat: 25.113,
        lng: 55.138,
        color: "#cc8800",
        status: "CONFIRMED DRONE INCIDENT — 4 INJURED",
        note: "Iranian drone struck hotel/building. Fire reported. \
               Proximity to Jebel Ali Port suggests drift or intentional near-miss. \
               Dense residential/tourist area.",
        risk: RiskTier::Incident,
    },
];

/// Built-in locations, in display order.
pub fn builtin() -> Vec<LocationRecord> {
    TABLE
        .iter()
        .map(|e| LocationRecord {
            name: e.name.to_string(),
            kind: e.kind.to_string(),
            lat: e.lat,
            lng: e.lng,
            color: e.color.to_string(),
            status: e.status.to_string(),
            note: e.note.to_string(),
            risk: e.risk,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_order_and_tiers() {
        let t = builtin();
        let names: Vec<&str> = t.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Al Dhafra Air Base",
                "Al Minhad Air Base",
                "Jebel Ali Port",
                "Palm Jumeirah — Drone Strike",
            ]
        );
        let tiers: Vec<RiskTier> = t.iter().map(|r| r.risk).collect();
        assert_eq!(
            tiers,
            [
                RiskTier::Critical,
                RiskTier::Critical,
                RiskTier::High,
                RiskTier::Incident
            ]
        );
    }

    #[test]
    fn notes_are_joined_with_single_spaces() {
        for rec in builtin() {
            assert!(!rec.note.contains("  "), "double space in {:?}", rec.note);
            assert!(rec.note.ends_with('.'));
        }
    }
}
