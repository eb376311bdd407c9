use super::equilibrium_constant::EquilibriumResult;
use super::polynomial_assembler::AggregatePolynomial;
use prettytable::{Table, row};
use std::fmt;
use std::fs::File;
use std::io::Write;

impl EquilibriumResult {
    ////////////////////////INPUT/OUTPUT////////////////////////////////////////////////////////
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["", "ln K", "K", "pK"]);
        table.add_row(row![
            "temperature dependent",
            format!("{:.6}", self.lnK),
            format!("{:.6e}", self.K),
            format!("{:.6}", self.pK)
        ]);
        table.add_row(row![
            "temperature independent",
            format!("{:.6}", self.lnK_indep),
            format!("{:.6e}", self.K_indep),
            format!("{:.6}", self.pK_indep)
        ]);
        table
    }

    /// Prints both estimates of the constant to the console
    pub fn pretty_print(&self) {
        println!(
            "__________equilibrium constant at {} K__________",
            self.temperature
        );
        self.to_table().printstd();
    }

    pub fn save_to_json(&self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for EquilibriumResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Assuming the constant depends on temperature (T = {} K):", self.temperature)?;
        writeln!(f, "ln K = {}", self.lnK)?;
        writeln!(f, "K = {}", self.K)?;
        writeln!(f, "pK = {}", self.pK)?;
        writeln!(f, "Assuming the constant does not depend on temperature:")?;
        writeln!(f, "ln K independent = {}", self.lnK_indep)?;
        writeln!(f, "K independent = {}", self.K_indep)?;
        write!(f, "pK independent = {}", self.pK_indep)
    }
}

/// one row per temperature
pub fn sweep_table(results: &[EquilibriumResult]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["T, K", "ln K", "K", "ln K indep", "K indep"]);
    for r in results {
        table.add_row(row![
            r.temperature,
            format!("{:.6}", r.lnK),
            format!("{:.6e}", r.K),
            format!("{:.6}", r.lnK_indep),
            format!("{:.6e}", r.K_indep)
        ]);
    }
    table
}

pub fn polynomial_table(poly: &AggregatePolynomial) -> Table {
    let fmt_opt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    let mut table = Table::new();
    table.add_row(row!["a", "b", "c", "d", "dH, J/mol", "dG, J/mol"]);
    table.add_row(row![
        poly.a,
        poly.b,
        poly.c,
        poly.d,
        fmt_opt(poly.dH),
        fmt_opt(poly.dG)
    ]);
    table
}

pub fn print_heat_duty(t1: f64, t2: f64, dH: f64) {
    println!("__________heat from {} K to {} K__________", t1, t2);
    let mut table = Table::new();
    table.add_row(row!["t1, K", "t2, K", "Q, J"]);
    table.add_row(row![t1, t2, format!("{:.3}", dH)]);
    table.printstd();
}
