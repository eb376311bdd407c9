/// universal gas constant, J/(mol*K)
pub const R: f64 = 8.31447;
/// standard-state temperature at which formation enthalpy and Gibbs energy are tabulated, K
pub const T_REF: f64 = 298.15;
/// Smith-Van Ness multipliers turning tabulated A, B, C, D into Cp/R = A + B*T + C*T^2 + D*T^-2
pub const CP_SCALE: [f64; 4] = [1.0, 1e-3, 1e-6, 1e5];
