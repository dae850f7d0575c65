use crate::airline::Airline;
use crate::error::AirlineError;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub flight_number: String,
    pub flight_id: String,
    pub radio_callsign: String,
    pub aircraft_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct AirlineSummary {
    #[tabled(rename = "ICAO")]
    pub icao: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Callsign")]
    pub callsign: String,
    #[tabled(rename = "Numbers")]
    pub number_format: String,
    #[tabled(rename = "Fleets")]
    pub fleets: usize,
    #[tabled(rename = "Types")]
    pub aircraft_types: usize,
    #[tabled(rename = "Active")]
    pub active: usize,
}

impl From<&Airline> for AirlineSummary {
    fn from(airline: &Airline) -> Self {
        AirlineSummary {
            icao: airline.icao().to_uppercase(),
            name: airline.name().to_string(),
            callsign: airline.callsign().to_string(),
            number_format: number_format(airline),
            fleets: airline.fleets().len(),
            aircraft_types: airline.aircraft_type_catalog().len(),
            active: airline.flight_numbers().len(),
        }
    }
}

fn number_format(airline: &Airline) -> String {
    match (airline.flight_number_length(), airline.is_alpha_numeric()) {
        (None, _) => "unset".to_string(),
        (Some(length), false) => format!("{} digits", length),
        (Some(length), true) => format!("{} digits + 2 letters", length.saturating_sub(3)),
    }
}

pub struct Roster {
    airlines: BTreeMap<String, Airline>,
    rng: StdRng,
}

impl Roster {
    const MAX_ATTEMPTS: usize = 100;

    pub fn new(airlines: Vec<Airline>, rng: StdRng) -> Result<Roster, AirlineError> {
        let mut by_icao = BTreeMap::new();
        for airline in airlines {
            let key = airline.icao().to_lowercase();
            if by_icao.contains_key(&key) {
                return Err(AirlineError::DuplicateAirline(airline.icao().to_string()));
            }
            by_icao.insert(key, airline);
        }
        Ok(Roster {
            airlines: by_icao,
            rng,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, AirlineError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let raw: Vec<Value> = serde_json::from_str(&data)?;

        let airlines = raw
            .iter()
            .map(Airline::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let roster = Roster::new(airlines, rng)?;
        info!(
            "loaded {} airlines from {}",
            roster.airlines.len(),
            path.as_ref().display()
        );
        Ok(roster)
    }

    pub fn airlines(&self) -> impl Iterator<Item = &Airline> {
        self.airlines.values()
    }

    pub fn summaries(&self) -> Vec<AirlineSummary> {
        self.airlines().map(AirlineSummary::from).collect()
    }

    pub fn airline(&self, icao: &str) -> Result<&Airline, AirlineError> {
        self.airlines
            .get(&icao.to_lowercase())
            .ok_or_else(|| AirlineError::UnknownAirline(icao.to_string()))
    }

    pub fn airline_mut(&mut self, icao: &str) -> Result<&mut Airline, AirlineError> {
        self.airlines
            .get_mut(&icao.to_lowercase())
            .ok_or_else(|| AirlineError::UnknownAirline(icao.to_string()))
    }

    pub fn assign_flight_number(
        &mut self,
        icao: &str,
        fleet: Option<&str>,
    ) -> Result<Assignment, AirlineError> {
        let airline = self
            .airlines
            .get_mut(&icao.to_lowercase())
            .ok_or_else(|| AirlineError::UnknownAirline(icao.to_string()))?;

        let aircraft_type = match fleet {
            Some(_) => Some(airline.random_aircraft_type(fleet, &mut self.rng)?.to_string()),
            None => None,
        };

        for _ in 0..Self::MAX_ATTEMPTS {
            let flight_number = airline.generate_flight_number(&mut self.rng)?;
            if airline.flight_numbers().contains(&flight_number) {
                debug!("{} already flying as {}, retrying", airline.icao(), flight_number);
                continue;
            }

            airline.add_flight_number_to_in_use(&flight_number);
            return Ok(Assignment {
                flight_id: airline.flight_id(&flight_number),
                radio_callsign: airline.callsign_for(&flight_number),
                flight_number,
                aircraft_type,
            });
        }

        warn!(
            "no free flight number for {} after {} attempts",
            airline.icao(),
            Self::MAX_ATTEMPTS
        );
        Err(AirlineError::FlightNumbersExhausted(airline.icao().to_string()))
    }

    pub fn release(&mut self, icao: &str, flight_number: &str) -> Result<(), AirlineError> {
        self.airline_mut(icao)?.remove_flight_number(flight_number);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.airlines.values_mut().for_each(Airline::reset);
        info!("cleared active flight numbers for {} airlines", self.airlines.len());
    }
}
