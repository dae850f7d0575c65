use crate::definition::{AirlineDefinition, FleetEntry, Fleets};
use crate::error::AirlineError;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;


const LEADING_DIGITS: &[u8] = b"123456789";
const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    icao: String,
    name: String,
    callsign: String,
    flight_number_length: Option<usize>,
    flight_number_alpha: bool,
    fleets: Fleets,
    active_flight_numbers: Vec<String>,
}

impl Airline {
    pub const DEFAULT_NAME: &'static str = "Default airline";
    pub const DEFAULT_CALLSIGN: &'static str = "Default";
    pub const MAX_FLIGHT_NUMBER_LENGTH: usize = 10;

    pub fn new(definition: AirlineDefinition) -> Airline {
        let callsign = definition.callsign.unwrap_or_default();
        let mut fleets = definition.fleets.unwrap_or_default();
        fleets
            .values_mut()
            .flat_map(|entries| entries.iter_mut())
            .for_each(|entry| entry.aircraft_type = entry.aircraft_type.to_lowercase());

        Airline {
            icao: definition.icao.unwrap_or_default(),
            name: definition
                .name
                .unwrap_or_else(|| Self::DEFAULT_NAME.to_string()),
            callsign: callsign
                .name
                .unwrap_or_else(|| Self::DEFAULT_CALLSIGN.to_string()),
            flight_number_length: callsign.length,
            flight_number_alpha: callsign.alpha.unwrap_or(false),
            fleets,
            active_flight_numbers: Vec::new(),
        }
    }

    pub fn from_value(value: &Value) -> Result<Airline, AirlineError> {
        match value {
            Value::Null => Err(AirlineError::InvalidDefinition(
                "definition is missing".to_string(),
            )),
            Value::Array(_) => Err(AirlineError::InvalidDefinition(
                "expected a record, found a sequence".to_string(),
            )),
            Value::Object(fields) if fields.is_empty() => Err(AirlineError::InvalidDefinition(
                "definition has no fields".to_string(),
            )),
            Value::Object(_) => {
                let definition = AirlineDefinition::deserialize(value)
                    .map_err(|e| AirlineError::InvalidDefinition(e.to_string()))?;
                let length = definition.callsign.as_ref().and_then(|c| c.length);
                if let Some(length) = length.filter(|l| *l > Self::MAX_FLIGHT_NUMBER_LENGTH) {
                    return Err(AirlineError::InvalidDefinition(format!(
                        "flight number length {} exceeds {}",
                        length,
                        Self::MAX_FLIGHT_NUMBER_LENGTH
                    )));
                }
                Ok(Airline::new(definition))
            }
            other => Err(AirlineError::InvalidDefinition(format!(
                "expected a record, found {}",
                other
            ))),
        }
    }

    pub fn icao(&self) -> &str {
        &self.icao
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn flight_number_length(&self) -> Option<usize> {
        self.flight_number_length
    }

    pub fn is_alpha_numeric(&self) -> bool {
        self.flight_number_alpha
    }

    pub fn fleets(&self) -> &Fleets {
        &self.fleets
    }

    pub fn aircraft_type_catalog(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.fleets
            .values()
            .flatten()
            .map(|entry| entry.aircraft_type.as_str())
            .filter(|aircraft_type| seen.insert(*aircraft_type))
            .collect()
    }

    pub fn flight_numbers(&self) -> &[String] {
        &self.active_flight_numbers
    }

    pub fn has_fleet(&self, fleet_name: &str) -> bool {
        self.fleets.contains_key(fleet_name)
    }

    // uniform pick, fleet weights are ignored
    pub fn random_aircraft_type<R: Rng + ?Sized>(
        &self,
        fleet_name: Option<&str>,
        rng: &mut R,
    ) -> Result<&str, AirlineError> {
        match fleet_name.filter(|name| !name.is_empty()) {
            None => {
                let catalog = self.aircraft_type_catalog();
                pick(&catalog, rng)
                    .copied()
                    .ok_or(AirlineError::EmptyFleet(None))
            }
            Some(name) => {
                if !self.has_fleet(name) {
                    return Err(AirlineError::UnknownFleet(name.to_string()));
                }
                pick(&self.fleets[name], rng)
                    .map(|entry: &FleetEntry| entry.aircraft_type.as_str())
                    .ok_or_else(|| AirlineError::EmptyFleet(Some(name.to_string())))
            }
        }
    }

    /// Digit-only numbers are `length` digits long. Alpha-numeric numbers are
    /// `length - 3` digits followed by two letters, one character shorter than `length`.
    pub fn generate_flight_number<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<String, AirlineError> {
        let length = self
            .flight_number_length
            .ok_or_else(|| AirlineError::MissingFlightNumberLength(self.icao.clone()))?;

        let mut flight_number = String::new();
        flight_number.push(random_char(LEADING_DIGITS, rng));

        let (digits, letters) = if self.flight_number_alpha {
            (length.saturating_sub(3), 2)
        } else {
            (length, 0)
        };
        for _ in 1..digits {
            flight_number.push(random_char(DIGITS, rng));
        }
        for _ in 0..letters {
            flight_number.push(random_char(LETTERS, rng));
        }

        Ok(flight_number)
    }

    pub fn add_flight_number_to_in_use(&mut self, flight_number: &str) {
        self.active_flight_numbers.push(flight_number.to_string());
    }

    /// Releases the first matching flight number; unknown numbers are ignored.
    pub fn remove_flight_number(&mut self, flight_number: &str) {
        if let Some(idx) = self
            .active_flight_numbers
            .iter()
            .position(|n| n == flight_number)
        {
            self.active_flight_numbers.remove(idx);
        }
    }

    pub fn reset(&mut self) {
        self.active_flight_numbers.clear();
    }

    pub fn callsign_for(&self, flight_number: &str) -> String {
        format!("{} {}", self.callsign, flight_number)
    }

    pub fn flight_id(&self, flight_number: &str) -> String {
        format!("{}{}", self.icao, flight_number).to_uppercase()
    }
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..=items.len() - 1))
}

fn random_char<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> char {
    char::from(alphabet[rng.random_range(0..alphabet.len())])
}
