use crate::airline::Airline;
use crate::definition::{AirlineDefinition, CallsignDefinition, FleetEntry, Fleets};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn entry(aircraft_type: &str, weight: f64) -> FleetEntry {
    FleetEntry::from((aircraft_type.to_string(), weight))
}

pub fn add_fleet(fleets: &mut Fleets, name: &str, entries: &[(&str, f64)]) {
    fleets.insert(
        name.to_string(),
        entries.iter().map(|(t, w)| entry(t, *w)).collect(),
    );
}

pub fn airline(icao: &str, length: Option<usize>, alpha: bool, fleets: Fleets) -> Airline {
    Airline::new(AirlineDefinition {
        icao: Some(icao.to_string()),
        name: Some(format!("{} Airways", icao)),
        callsign: Some(CallsignDefinition {
            name: Some(icao.to_lowercase()),
            length,
            alpha: Some(alpha),
        }),
        fleets: Some(fleets),
    })
}

pub fn numbered_airline(length: usize, alpha: bool) -> Airline {
    airline("TST", Some(length), alpha, BTreeMap::new())
}

pub fn arb_aircraft_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("B737".to_string()),
        Just("b738".to_string()),
        Just("A320".to_string()),
        Just("a321".to_string()),
        Just("E190".to_string()),
        Just("Crj9".to_string()),
    ]
}

pub fn arb_fleet_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("default".to_string()),
        Just("short".to_string()),
        Just("long".to_string()),
        Just("Cargo".to_string()),
    ]
}
