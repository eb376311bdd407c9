//! # Species Table Module
//!
//! ## Aim
//! Keeps the pure-species property table (Smith-Van Ness heat-capacity coefficients,
//! standard enthalpy and Gibbs energy of formation, physical state) and serves
//! read-only lookups for the equilibrium and heat-duty calculators.
//!
//! ## Main Data Structures and Logic
//! - `SpeciesState`: gas, liquid, solid or aqueous; only gas rows take part in lookups
//! - `SpeciesRecord`: one row of the table, missing A-D are stored as 0.0
//! - `SpeciesTable`: rows in file order plus a name index; names are unique across the table
//!
//! ## Usage
//! ```rust, ignore
//! let table = SpeciesTable::load(&CsvFile::new("DataPure.csv"))?;
//! let records = table.lookup(&["Acetylene", "Nitrogen"])?;
//! ```
//!
//! Liquid, solid and aqueous rows are loaded and kept but never returned by `lookup`:
//! the integration scheme only accounts for ideal-gas species.
use super::table_sources::TableSource;
use crate::Thermodynamics::thermo_errors::EquilibriumError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// physical state of a tabulated species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesState {
    Gas,
    Liquid,
    Solid,
    Aqueous,
}

impl SpeciesState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesState::Gas => "g",
            SpeciesState::Liquid => "l",
            SpeciesState::Solid => "s",
            SpeciesState::Aqueous => "aq",
        }
    }
}

impl FromStr for SpeciesState {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gas" => Ok(SpeciesState::Gas),
            "l" | "liquid" => Ok(SpeciesState::Liquid),
            "s" | "solid" => Ok(SpeciesState::Solid),
            "aq" | "aqueous" => Ok(SpeciesState::Aqueous),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SpeciesState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// one row of the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub state: SpeciesState,
    /// heat-capacity coefficients as tabulated (before the Smith-Van Ness scaling)
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
    /// standard enthalpy of formation at 298.15 K, J/mol
    pub Enthalpy: Option<f64>,
    /// standard Gibbs energy of formation at 298.15 K, J/mol
    pub Gibbs: Option<f64>,
}

impl SpeciesRecord {
    /// gas-phase record with all optional data absent
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: SpeciesState::Gas,
            A: 0.0,
            B: 0.0,
            C: 0.0,
            D: 0.0,
            Enthalpy: None,
            Gibbs: None,
        }
    }
    /// A, B, C, D in table order
    pub fn cp_coefficients(&self) -> [f64; 4] {
        [self.A, self.B, self.C, self.D]
    }
    /// dimensionless heat capacity Cp/R at temperature T
    pub fn cp_over_r(&self, T: f64) -> f64 {
        let [a, b, c, d] = self.cp_coefficients();
        a + b * 1e-3 * T + c * 1e-6 * T * T + d * 1e5 / (T * T)
    }
    pub fn is_gas(&self) -> bool {
        self.state == SpeciesState::Gas
    }
}

/// pure-species property table keyed by species name
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    records: Vec<SpeciesRecord>,
    index: HashMap<String, usize>,
}

impl SpeciesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// reads the whole table through the given source
    pub fn load<S: TableSource>(source: &S) -> Result<Self, EquilibriumError> {
        let table = source.load_table()?;
        debug!(
            "species table loaded from {}: {} rows, {} gas-phase",
            source.describe(),
            table.len(),
            table.gas_species().len()
        );
        Ok(table)
    }

    pub fn from_records<I>(records: I) -> Result<Self, EquilibriumError>
    where
        I: IntoIterator<Item = SpeciesRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    /// adds a row; a second row with an already known name is rejected whatever its state
    pub fn insert(&mut self, record: SpeciesRecord) -> Result<(), EquilibriumError> {
        if self.index.contains_key(&record.name) {
            return Err(EquilibriumError::DuplicateSpecies(record.name));
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// row of any state
    pub fn get(&self, name: &str) -> Option<&SpeciesRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn gas_record(&self, name: &str) -> Option<&SpeciesRecord> {
        self.get(name).filter(|record| record.is_gas())
    }

    /// gas-phase rows for the requested names, in the requested order
    pub fn lookup<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<SpeciesRecord>, EquilibriumError> {
        let mut found = Vec::with_capacity(names.len());
        let mut missing: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.gas_record(name) {
                Some(record) => found.push(record.clone()),
                None => {
                    if let Some(record) = self.get(name) {
                        warn!(
                            "species '{}' is tabulated only in state '{}', gas-phase data required",
                            name, record.state
                        );
                    }
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                }
            }
        }
        if missing.is_empty() {
            Ok(found)
        } else {
            Err(EquilibriumError::UnknownSpecies { names: missing })
        }
    }

    /// names of gas-phase rows in table order
    pub fn gas_species(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.is_gas())
            .map(|record| record.name.as_str())
            .collect()
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
