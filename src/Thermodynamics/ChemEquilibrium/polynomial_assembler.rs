//! Reaction-level heat-capacity polynomial.
//!
//! Every species contributes its tabulated row weighted by its stoichiometric coefficient:
//! the table rows form a (species x columns) matrix `M`, the coefficients a vector `nu`,
//! and the aggregate is `M^T * nu`. The A-D sums are then multiplied by the Smith-Van Ness
//! factors `[1, 1e-3, 1e-6, 1e5]`, so that `dCp/R = a + b*T + c*T^2 + d/T^2` with T in K.
//! Enthalpy and Gibbs sums are left as they are (J/mol).
use crate::Thermodynamics::DBhandlers::species_table::SpeciesRecord;
use crate::Thermodynamics::thermo_constants::{CP_SCALE, R, T_REF};
use crate::Thermodynamics::thermo_errors::EquilibriumError;
use log::debug;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// which table columns take part in the weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyColumns {
    /// A, B, C, D only (heat duty)
    HeatCapacity,
    /// A, B, C, D plus Enthalpy and Gibbs (equilibrium constant)
    HeatCapacityAndFormation,
}

impl AssemblyColumns {
    fn ncols(&self) -> usize {
        match self {
            AssemblyColumns::HeatCapacity => 4,
            AssemblyColumns::HeatCapacityAndFormation => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatePolynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// standard reaction enthalpy at 298.15 K, J/mol
    pub dH: Option<f64>,
    /// standard reaction Gibbs energy at 298.15 K, J/mol
    pub dG: Option<f64>,
}

impl AggregatePolynomial {
    /// dCp/R of the reaction at temperature T
    pub fn delta_cp_over_r(&self, T: f64) -> f64 {
        self.a + self.b * T + self.c * T * T + self.d / (T * T)
    }

    /// R * integral of dCp/R from t1 to t2 written through the lower-bound constant
    /// Lambda = -t1*a - t1^2*b/2 - (c/3)*t1^3 + d/t1
    pub fn integrated_enthalpy(&self, t1: f64, t2: f64) -> f64 {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let lambda = -t1 * a - (t1 * t1) * b / 2.0 - (c / 3.0) * t1.powi(3) + d / t1;
        R * (lambda + a * t2 + b * t2 * t2 / 2.0 + c * t2.powi(3) / 3.0 - d / t2)
    }

    /// reaction enthalpy at T: standard value at 298.15 K corrected by the heat-capacity integral
    pub fn reaction_enthalpy(&self, T: f64) -> Option<f64> {
        self.dH.map(|dH| dH + self.integrated_enthalpy(T_REF, T))
    }
}

/// weighted sums of the requested columns
pub fn assemble(
    records: &[SpeciesRecord],
    coefficients: &[f64],
    columns: AssemblyColumns,
) -> Result<AggregatePolynomial, EquilibriumError> {
    if records.len() != coefficients.len() {
        return Err(EquilibriumError::CoefficientMismatch {
            species: records.len(),
            coefficients: coefficients.len(),
        });
    }
    if columns == AssemblyColumns::HeatCapacityAndFormation {
        if let Some(record) = records
            .iter()
            .find(|r| r.Enthalpy.is_none() || r.Gibbs.is_none())
        {
            return Err(EquilibriumError::MissingFormationData {
                species: record.name.clone(),
            });
        }
    }

    let ncols = columns.ncols();
    let M = DMatrix::from_fn(records.len(), ncols, |i, j| {
        let r = &records[i];
        match j {
            0 => r.A,
            1 => r.B,
            2 => r.C,
            3 => r.D,
            4 => r.Enthalpy.unwrap_or(0.0),
            _ => r.Gibbs.unwrap_or(0.0),
        }
    });
    let nu = DVector::from_column_slice(coefficients);
    let sums = M.tr_mul(&nu);

    let formation = columns == AssemblyColumns::HeatCapacityAndFormation;
    let poly = AggregatePolynomial {
        a: sums[0] * CP_SCALE[0],
        b: sums[1] * CP_SCALE[1],
        c: sums[2] * CP_SCALE[2],
        d: sums[3] * CP_SCALE[3],
        dH: formation.then(|| sums[4]),
        dG: formation.then(|| sums[5]),
    };
    debug!("assembled polynomial for {} species: {:?}", records.len(), poly);
    Ok(poly)
}
