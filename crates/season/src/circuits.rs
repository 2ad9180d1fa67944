// ABOUTME: Loader for the static circuit reference file and circuit statistics.
// ABOUTME: Circuits are not scraped; they come from a CSV shipped alongside the tool.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::SeasonError;
use crate::models::CircuitRecord;

/// Load circuit reference data from a CSV file with columns
/// `name, grand_prix, date, circuit_length, number_of_turns, number_of_laps, lat, lon`.
///
/// The file is read wholesale; no validation beyond what deserialization
/// requires.
pub fn load_circuits<P: AsRef<Path>>(path: P) -> Result<Vec<CircuitRecord>, SeasonError> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        SeasonError::reference(
            "circuits",
            Some(anyhow::anyhow!("cannot read {}: {}", path.display(), e)),
        )
    })?;

    let mut circuits = Vec::new();
    for result in reader.deserialize::<CircuitRecord>() {
        let record = result.map_err(|e| {
            SeasonError::reference(
                "circuits",
                Some(anyhow::anyhow!("malformed row in {}: {}", path.display(), e)),
            )
        })?;
        circuits.push(record);
    }

    info!(circuits = circuits.len(), path = %path.display(), "circuit reference data loaded");
    Ok(circuits)
}

/// Derived statistics over the circuit reference data.
///
/// Min/max ties are broken by stored order: the first record with the extreme
/// value wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitStats {
    pub longest: CircuitRecord,
    pub shortest: CircuitRecord,
    pub most_turns: CircuitRecord,
    pub fewest_turns: CircuitRecord,
    pub mean_turns: u32,
}

impl CircuitStats {
    /// Compute statistics over the reference data, or `None` if it is empty.
    pub fn compute(circuits: &[CircuitRecord]) -> Option<CircuitStats> {
        let first = circuits.first()?;

        let mut longest = first;
        let mut shortest = first;
        let mut most_turns = first;
        let mut fewest_turns = first;

        // Strict comparisons so the first record wins ties
        for circuit in &circuits[1..] {
            if circuit.circuit_length > longest.circuit_length {
                longest = circuit;
            }
            if circuit.circuit_length < shortest.circuit_length {
                shortest = circuit;
            }
            if circuit.number_of_turns > most_turns.number_of_turns {
                most_turns = circuit;
            }
            if circuit.number_of_turns < fewest_turns.number_of_turns {
                fewest_turns = circuit;
            }
        }

        let total_turns: u32 = circuits.iter().map(|c| c.number_of_turns).sum();
        let mean_turns = (total_turns as f64 / circuits.len() as f64).round() as u32;

        Some(CircuitStats {
            longest: longest.clone(),
            shortest: shortest.clone(),
            most_turns: most_turns.clone(),
            fewest_turns: fewest_turns.clone(),
            mean_turns,
        })
    }

    /// Narrative lines for the dashboard's circuit statistics section.
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!(
                "{} is the longest circuit with circuit length of {} km.",
                self.longest.name, self.longest.circuit_length
            ),
            format!(
                "{} is the shortest circuit with circuit length of {} km.",
                self.shortest.name, self.shortest.circuit_length
            ),
            format!(
                "The circuit with the most turns is {} with a total of {} turns.",
                self.most_turns.name, self.most_turns.number_of_turns
            ),
            format!(
                "The circuit with the least number of turns is {} with only {} turns.",
                self.fewest_turns.name, self.fewest_turns.number_of_turns
            ),
            format!(
                "The average number of turns for a circuit on the calendar is {}.",
                self.mean_turns
            ),
        ]
    }
}
