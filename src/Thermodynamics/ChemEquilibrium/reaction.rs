use crate::Thermodynamics::thermo_errors::EquilibriumError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// species of a reaction (or of a mixture) with matching signed weights:
/// negative for reactants, positive for products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSpec {
    species: Vec<String>,
    coefficients: Vec<f64>,
}

impl ReactionSpec {
    pub fn new<S: AsRef<str>>(species: &[S], coefficients: &[f64]) -> Result<Self, EquilibriumError> {
        if species.len() != coefficients.len() {
            return Err(EquilibriumError::CoefficientMismatch {
                species: species.len(),
                coefficients: coefficients.len(),
            });
        }
        if species.is_empty() {
            return Err(EquilibriumError::EmptyReaction);
        }
        Ok(Self {
            species: species.iter().map(|s| s.as_ref().to_string()).collect(),
            coefficients: coefficients.to_vec(),
        })
    }

    /// every species weighted by 1.0
    pub fn unit_weighted<S: AsRef<str>>(species: &[S]) -> Result<Self, EquilibriumError> {
        Self::new(species, &vec![1.0; species.len()])
    }

    /// parses equations like `Ethylene + Water => Ethanol` or `2 H2 + O2 = 2 H2O`;
    /// `=`, `=>`, `<=>` and `->` are accepted as the arrow, reactants get negative coefficients
    pub fn from_equation(equation: &str) -> Result<Self, EquilibriumError> {
        let arrow = Regex::new(r"\s*(?:<=>|=>|->|=)\s*").map_err(|e| {
            EquilibriumError::ReactionParse(format!("invalid arrow pattern: {}", e))
        })?;
        let term = Regex::new(r"^\s*(?:(\d+(?:\.\d*)?|\.\d+)\s+)?(\S.*?)\s*$").map_err(|e| {
            EquilibriumError::ReactionParse(format!("invalid term pattern: {}", e))
        })?;

        let sides: Vec<&str> = arrow.split(equation).collect();
        if sides.len() != 2 {
            return Err(EquilibriumError::ReactionParse(format!(
                "'{}' must contain exactly one arrow",
                equation
            )));
        }
        let mut species = Vec::new();
        let mut coefficients = Vec::new();
        for (side, sign) in sides.iter().zip([-1.0, 1.0]) {
            for part in side.split(" + ") {
                let caps = term.captures(part).ok_or_else(|| {
                    EquilibriumError::ReactionParse(format!("empty term in '{}'", equation))
                })?;
                let nu = match caps.get(1) {
                    Some(m) => m.as_str().parse::<f64>().map_err(|e| {
                        EquilibriumError::ReactionParse(format!("'{}': {}", m.as_str(), e))
                    })?,
                    None => 1.0,
                };
                species.push(caps[2].to_string());
                coefficients.push(sign * nu);
            }
        }
        Self::new(&species, &coefficients)
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl fmt::Display for ReactionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = |want_products: bool| -> String {
            self.species
                .iter()
                .zip(&self.coefficients)
                .filter(|(_, nu)| (**nu > 0.0) == want_products && **nu != 0.0)
                .map(|(s, nu)| {
                    if nu.abs() == 1.0 {
                        s.clone()
                    } else {
                        format!("{} {}", nu.abs(), s)
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(f, "{} => {}", side(false), side(true))
    }
}
