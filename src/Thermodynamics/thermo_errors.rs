use thiserror::Error;

/// errors of the species table, the polynomial assembly and both calculators
#[derive(Debug, Error)]
pub enum EquilibriumError {
    #[error(
        "number of species ({species}) does not match number of stoichiometric coefficients ({coefficients})"
    )]
    CoefficientMismatch { species: usize, coefficients: usize },
    #[error("reaction contains no species")]
    EmptyReaction,
    #[error("species not found among gas-phase entries of the table: {}", names.join(", "))]
    UnknownSpecies { names: Vec<String> },
    #[error("temperature must be a finite positive number of Kelvin, got {0}")]
    InvalidTemperature(f64),
    #[error("species '{species}' has no tabulated enthalpy or Gibbs energy of formation")]
    MissingFormationData { species: String },
    #[error("cannot parse reaction equation: {0}")]
    ReactionParse(String),
    #[error("failed to read species table '{path}': {source}")]
    TableRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed species table at line {line}: {message}")]
    TableFormat { line: usize, message: String },
    #[error("species '{0}' appears more than once in the table")]
    DuplicateSpecies(String),
    #[error("species '{species}' has unrecognised state '{state}'")]
    InvalidState { species: String, state: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// strictly positive finite Kelvin value or `InvalidTemperature`
pub fn check_temperature(T: f64) -> Result<f64, EquilibriumError> {
    if T.is_finite() && T > 0.0 {
        Ok(T)
    } else {
        Err(EquilibriumError::InvalidTemperature(T))
    }
}
