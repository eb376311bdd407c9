use crate::Thermodynamics::ChemEquilibrium::equilibrium_constant::{
    equilibrium_constant, equilibrium_constant_for, equilibrium_constants_over,
    reaction_polynomial,
};
use crate::Thermodynamics::ChemEquilibrium::equilibrium_output::{
    polynomial_table, print_heat_duty, sweep_table,
};
use crate::Thermodynamics::ChemEquilibrium::heat_duty::heat_duty;
use crate::Thermodynamics::ChemEquilibrium::reaction::ReactionSpec;
use crate::Thermodynamics::thermo_errors::EquilibriumError;
use crate::library_manager::with_table_manager;
use log::info;

pub fn equilibrium_examples(task: usize) -> Result<(), EquilibriumError> {
    let table = with_table_manager(|manager| manager.load_species_table())?;
    info!("gas-phase species on board: {:?}", table.gas_species());
    match task {
        // HCN synthesis from acetylene and nitrogen at 300 C
        0 => {
            let result = equilibrium_constant(
                &table,
                300.0 + 273.15,
                &["Acetylene", "Nitrogen", "Hydrogen cyanide"],
                &[-1.0, -1.0, 2.0],
            )?;
            println!("{}", result);
            result.pretty_print();
        }
        // ethylene hydration at 145 C and 320 C
        1 => {
            let reaction = ReactionSpec::from_equation("Ethylene + Water => Ethanol")?;
            println!("reaction: {}", reaction);
            polynomial_table(&reaction_polynomial(&table, &reaction)?).printstd();
            for T in [145.0 + 273.15, 320.0 + 273.15] {
                equilibrium_constant_for(&table, T, &reaction)?.pretty_print();
            }
        }
        // heat to bring a shift-reactor feed from 298 K to 850 C
        2 => {
            let (t1, t2) = (298.0, 850.0 + 273.15);
            let dH = heat_duty(
                &table,
                t1,
                t2,
                &["Water", "Carbon dioxide", "Carbon monoxide", "Hydrogen"],
                &[0.1725, 0.0275, 0.1725, 0.6275],
            )?;
            print_heat_duty(t1, t2, dH);
        }
        // water-gas shift constant over a temperature range
        3 => {
            let reaction = ReactionSpec::from_equation(
                "Carbon monoxide + Water = Carbon dioxide + Hydrogen",
            )?;
            let temperatures: Vec<f64> = (0..8).map(|i| 400.0 + 100.0 * i as f64).collect();
            let results = equilibrium_constants_over(&table, &temperatures, &reaction)?;
            println!("reaction: {}", reaction);
            sweep_table(&results).printstd();
        }
        _ => {
            println!("no such example: {}, choose 0..=3", task);
        }
    }
    Ok(())
}
