pub mod species_table;
mod species_table_tests;
pub mod table_sources;
