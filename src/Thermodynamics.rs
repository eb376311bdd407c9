/// van't Hoff equilibrium constants and heat duties of gas-phase reactions
pub mod ChemEquilibrium;
#[allow(non_snake_case)]
/// pure-species property table and the sources it is read from
pub mod DBhandlers;
/// R, reference temperature, Smith-Van Ness scale factors
pub mod thermo_constants;
pub mod thermo_errors;
