use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type FleetName = String;

/// One `[type, weight]` pair of a fleet.
///
/// The weight is carried through from the data files but aircraft type selection is
/// uniform over the entries, so it never influences which type is picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct FleetEntry {
    pub aircraft_type: String,
    pub weight: f64,
}

impl From<(String, f64)> for FleetEntry {
    fn from((aircraft_type, weight): (String, f64)) -> Self {
        FleetEntry {
            aircraft_type,
            weight,
        }
    }
}

impl From<FleetEntry> for (String, f64) {
    fn from(entry: FleetEntry) -> Self {
        (entry.aircraft_type, entry.weight)
    }
}

pub type Fleets = BTreeMap<FleetName, Vec<FleetEntry>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallsignDefinition {
    pub name: Option<String>,
    pub length: Option<usize>,
    pub alpha: Option<bool>,
}

/// Raw airline record as it appears in the airline data files.
///
/// Every field is optional here; defaults are applied by `Airline::new`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirlineDefinition {
    pub icao: Option<String>,
    pub name: Option<String>,
    pub callsign: Option<CallsignDefinition>,
    pub fleets: Option<Fleets>,
}
