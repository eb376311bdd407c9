//! Equilibrium constants and heat duties from tabulated heat-capacity polynomials.
//!
//! # Examples
//! ```
//! use EqConst::Thermodynamics::ChemEquilibrium::equilibrium_constant::equilibrium_constant;
//! use EqConst::Thermodynamics::ChemEquilibrium::heat_duty::heat_duty;
//! use EqConst::Thermodynamics::DBhandlers::species_table::SpeciesTable;
//! use EqConst::Thermodynamics::DBhandlers::table_sources::CsvText;
//! let csv = "Species,State,A,B,C,D,Enthalpy,Gibbs
//! Acetylene,g,6.132,1.952,,-1.299,227480,209970
//! Nitrogen,g,3.280,0.593,,0.040,0,0
//! Hydrogen cyanide,g,4.736,1.359,,-0.725,135100,124700
//! ";
//! let table = SpeciesTable::load(&CsvText::new(csv)).unwrap();
//! let result = equilibrium_constant(
//!     &table,
//!     573.15,
//!     &["Acetylene", "Nitrogen", "Hydrogen cyanide"],
//!     &[-1.0, -1.0, 2.0],
//! )
//! .unwrap();
//! assert!((10f64.powf(-result.pK) - result.K).abs() < 1e-12);
//! let q = heat_duty(&table, 300.0, 500.0, &["Nitrogen"], &[1.0]).unwrap();
//! assert!(q > 0.0);
//! ```
pub mod equilibrium_constant;
pub mod equilibrium_output;
pub mod heat_duty;
pub mod polynomial_assembler;
pub mod reaction;
