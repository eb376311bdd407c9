#[cfg(test)]
mod tests {
    use crate::Thermodynamics::DBhandlers::species_table::{
        SpeciesRecord, SpeciesState, SpeciesTable,
    };
    use crate::Thermodynamics::DBhandlers::table_sources::{
        CsvFile, CsvText, JsonFile, TableSource, TableSourceEnum, create_source_by_path,
        parse_csv,
    };
    use crate::Thermodynamics::thermo_errors::EquilibriumError;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV: &str = "Species,State,A,B,C,D,Enthalpy,Gibbs
Acetylene,g,6.132,1.952,,-1.299,227480,209970
Nitrogen,g,3.280,0.593,,0.040,0,0
\"Hydrogen cyanide\",g,4.736,1.359,,-0.725,135100,124700
Methanol,l,13.431,-51.28,131.13,,-238660,-166270
Argon,g,,,,,0,0
";

    fn table() -> SpeciesTable {
        parse_csv(CSV).unwrap()
    }

    #[test]
    fn test_parse_csv_rows() {
        let table = table();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.gas_species(),
            vec!["Acetylene", "Nitrogen", "Hydrogen cyanide", "Argon"]
        );
        let hcn = table.get("Hydrogen cyanide").unwrap();
        assert_eq!(hcn.state, SpeciesState::Gas);
        assert_relative_eq!(hcn.A, 4.736);
        assert_eq!(hcn.C, 0.0);
        assert_eq!(hcn.Enthalpy, Some(135100.0));
        let methanol = table.get("Methanol").unwrap();
        assert_eq!(methanol.state, SpeciesState::Liquid);
        assert_eq!(methanol.D, 0.0);
    }

    #[test]
    fn test_missing_coefficients_become_zero() {
        let argon = table().get("Argon").unwrap().clone();
        assert_eq!(argon.cp_coefficients(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(argon.cp_over_r(500.0), 0.0);
    }

    #[test]
    fn test_columns_in_any_order() {
        let csv = "name,Gibbs,Enthalpy,D,C,B,A,state,comment
Nitrogen,0,0,0.040,,0.593,3.280,gas,diatomic
";
        let table = parse_csv(csv).unwrap();
        let n2 = table.gas_record("Nitrogen").unwrap();
        assert_relative_eq!(n2.A, 3.280);
        assert_relative_eq!(n2.B, 0.593);
        assert_relative_eq!(n2.D, 0.040);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Species,State,A,B,C,D,Enthalpy\nNitrogen,g,3.28,0.593,,0.04,0\n";
        match parse_csv(csv) {
            Err(EquilibriumError::TableFormat { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("Gibbs"));
            }
            other => panic!("expected TableFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_number_reports_line() {
        let csv = "Species,State,A,B,C,D,Enthalpy,Gibbs\nNitrogen,g,3.28,0.593,,0.04,0,0\nOxygen,g,x,0.506,,-0.227,0,0\n";
        match parse_csv(csv) {
            Err(EquilibriumError::TableFormat { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected TableFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        let csv = "Species,State,A,B,C,D,Enthalpy,Gibbs\nNitrogen,plasma,3.28,0.593,,0.04,0,0\n";
        assert!(matches!(
            parse_csv(csv),
            Err(EquilibriumError::InvalidState { ref species, ref state })
                if species == "Nitrogen" && state == "plasma"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let csv = "Species,State,A,B,C,D,Enthalpy,Gibbs\nWater,g,3.47,1.45,,0.121,-241818,-228572\nWater,l,8.712,1.25,-0.18,,-285830,-237129\n";
        assert!(matches!(
            parse_csv(csv),
            Err(EquilibriumError::DuplicateSpecies(ref name)) if name == "Water"
        ));
    }

    #[test]
    fn test_lookup_keeps_requested_order() {
        let table = table();
        let records = table
            .lookup(&["Hydrogen cyanide", "Acetylene", "Hydrogen cyanide"])
            .unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Hydrogen cyanide", "Acetylene", "Hydrogen cyanide"]);
    }

    #[test]
    fn test_lookup_reports_every_unknown_species() {
        let table = table();
        match table.lookup(&["Acetylene", "Unobtainium", "Methanol"]) {
            Err(EquilibriumError::UnknownSpecies { names }) => {
                // liquid rows are invisible to lookups
                assert_eq!(names, vec!["Unobtainium".to_string(), "Methanol".to_string()]);
            }
            other => panic!("expected UnknownSpecies, got {:?}", other),
        }
        assert_eq!(table.len(), 5);
        assert!(table.get("Unobtainium").is_none());
    }

    #[test]
    fn test_from_records_and_insert() {
        let mut record = SpeciesRecord::new("Helium");
        record.A = 2.5;
        let mut table = SpeciesTable::from_records(vec![record.clone()]).unwrap();
        assert_relative_eq!(table.gas_record("Helium").unwrap().cp_over_r(1000.0), 2.5);
        assert!(table.insert(record).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_csv_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let source = CsvFile::new(file.path().to_str().unwrap());
        let table = SpeciesTable::load(&source).unwrap();
        assert_eq!(table.len(), 5);
        assert!(source.describe().contains("CSV"));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let source = CsvFile::new("definitely/not/here/DataPure.csv");
        assert!(matches!(
            SpeciesTable::load(&source),
            Err(EquilibriumError::TableRead { .. })
        ));
    }

    #[test]
    fn test_json_file_source() {
        let json = r#"{
            "Water": {"State": "g", "A": 3.470, "B": 1.450, "C": null, "D": 0.121,
                      "Enthalpy": -241818, "Gibbs": -228572},
            "Methanol": {"State": "l", "A": 13.431, "B": -51.28, "C": 131.13,
                         "Enthalpy": -238660, "Gibbs": -166270}
        }"#;
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();
        let source = create_source_by_path(path);
        assert!(matches!(source, TableSourceEnum::Json(_)));
        let table = SpeciesTable::load(&source).unwrap();
        assert_eq!(table.gas_species(), vec!["Water"]);
        let water = table.gas_record("Water").unwrap();
        assert_eq!(water.C, 0.0);
        assert_eq!(water.Gibbs, Some(-228572.0));
        assert_eq!(table.get("Methanol").unwrap().D, 0.0);

        let direct = SpeciesTable::load(&JsonFile::new(path)).unwrap();
        assert_eq!(direct.len(), 2);
    }

    #[test]
    fn test_source_enum_dispatch() {
        let source = TableSourceEnum::Text(CsvText::new(CSV));
        assert_eq!(source.load_table().unwrap().len(), 5);
        assert!(matches!(
            create_source_by_path("DataPure.csv"),
            TableSourceEnum::Csv(_)
        ));
    }
}
