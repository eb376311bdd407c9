use super::polynomial_assembler::{AssemblyColumns, assemble};
use super::reaction::ReactionSpec;
use crate::Thermodynamics::DBhandlers::species_table::SpeciesTable;
use crate::Thermodynamics::thermo_errors::{EquilibriumError, check_temperature};
use log::info;

/// heat needed to bring the weighted mixture from t1 to t2 (K), J per mole of mixture basis;
/// negative when heat is released. Bounds may come in either order.
pub fn heat_duty<S: AsRef<str>>(
    table: &SpeciesTable,
    t1: f64,
    t2: f64,
    species: &[S],
    coefficients: &[f64],
) -> Result<f64, EquilibriumError> {
    let mixture = ReactionSpec::new(species, coefficients)?;
    heat_duty_for(table, t1, t2, &mixture)
}

pub fn heat_duty_for(
    table: &SpeciesTable,
    t1: f64,
    t2: f64,
    mixture: &ReactionSpec,
) -> Result<f64, EquilibriumError> {
    check_temperature(t1)?;
    check_temperature(t2)?;
    let records = table.lookup(mixture.species())?;
    let poly = assemble(&records, mixture.coefficients(), AssemblyColumns::HeatCapacity)?;
    let dH = poly.integrated_enthalpy(t1, t2);
    info!("heat duty of {} from {} K to {} K: {} J", mixture, t1, t2, dH);
    Ok(dH)
}
