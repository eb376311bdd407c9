use super::polynomial_assembler::{AggregatePolynomial, AssemblyColumns, assemble};
use super::reaction::ReactionSpec;
use crate::Thermodynamics::DBhandlers::species_table::SpeciesTable;
use crate::Thermodynamics::thermo_constants::{R, T_REF};
use crate::Thermodynamics::thermo_errors::{EquilibriumError, check_temperature};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// equilibrium constant at one temperature, computed twice: with the heat-capacity
/// integrated van't Hoff form and assuming a temperature-independent reaction enthalpy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    /// K
    pub temperature: f64,
    pub lnK: f64,
    pub K: f64,
    pub pK: f64,
    pub lnK_indep: f64,
    pub K_indep: f64,
    pub pK_indep: f64,
}

impl EquilibriumResult {
    /// closed-form integration of the van't Hoff equation from 298.15 K to T
    pub fn from_polynomial(T: f64, poly: &AggregatePolynomial) -> Result<Self, EquilibriumError> {
        let T = check_temperature(T)?;
        let (dH, dG) = match (poly.dH, poly.dG) {
            (Some(dH), Some(dG)) => (dH, dG),
            _ => {
                return Err(EquilibriumError::MissingFormationData {
                    species: "reaction aggregate".to_string(),
                });
            }
        };
        let (a, b, c, d) = (poly.a, poly.b, poly.c, poly.d);
        let t0 = T_REF;
        // enthalpy baseline fixed at the standard state
        let lambda = -t0 * a - (t0 * t0) * b / 2.0 - (c / 3.0) * t0.powi(3) + d / t0;
        let lnK = (lambda + dH / R) * (1.0 / t0 - 1.0 / T) - dG / (R * t0)
            + a * (T / t0).ln()
            + (b / 2.0) * (T - t0)
            + (c / 6.0) * (T * T - t0 * t0)
            + (d / 2.0) * (1.0 / (T * T) - 1.0 / (t0 * t0));
        let lnK_indep = -dG / (R * t0) + dH / R * (1.0 / t0 - 1.0 / T);

        let K = lnK.exp();
        let K_indep = lnK_indep.exp();
        Ok(Self {
            temperature: T,
            lnK,
            K,
            pK: -K.log10(),
            lnK_indep,
            K_indep,
            pK_indep: -K_indep.log10(),
        })
    }
}

/// equilibrium constant of the reaction `coefficients * species` at temperature T (K)
pub fn equilibrium_constant<S: AsRef<str>>(
    table: &SpeciesTable,
    T: f64,
    species: &[S],
    coefficients: &[f64],
) -> Result<EquilibriumResult, EquilibriumError> {
    let reaction = ReactionSpec::new(species, coefficients)?;
    equilibrium_constant_for(table, T, &reaction)
}

pub fn equilibrium_constant_for(
    table: &SpeciesTable,
    T: f64,
    reaction: &ReactionSpec,
) -> Result<EquilibriumResult, EquilibriumError> {
    check_temperature(T)?;
    let poly = reaction_polynomial(table, reaction)?;
    let result = EquilibriumResult::from_polynomial(T, &poly)?;
    info!(
        "K({} K) of {} = {:e} (temperature-independent estimate {:e})",
        T, reaction, result.K, result.K_indep
    );
    Ok(result)
}

/// one result per temperature; the table is consulted once
pub fn equilibrium_constants_over(
    table: &SpeciesTable,
    temperatures: &[f64],
    reaction: &ReactionSpec,
) -> Result<Vec<EquilibriumResult>, EquilibriumError> {
    for &T in temperatures {
        check_temperature(T)?;
    }
    let poly = reaction_polynomial(table, reaction)?;
    temperatures
        .iter()
        .map(|&T| EquilibriumResult::from_polynomial(T, &poly))
        .collect()
}

/// aggregate heat-capacity polynomial with standard reaction enthalpy and Gibbs energy
pub fn reaction_polynomial(
    table: &SpeciesTable,
    reaction: &ReactionSpec,
) -> Result<AggregatePolynomial, EquilibriumError> {
    let records = table.lookup(reaction.species())?;
    debug!("species found for {}: {}", reaction, records.len());
    assemble(
        &records,
        reaction.coefficients(),
        AssemblyColumns::HeatCapacityAndFormation,
    )
}
