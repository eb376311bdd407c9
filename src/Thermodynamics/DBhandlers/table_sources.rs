//! Sources the species table can be read from. The calculators never open files
//! themselves: a `TableSource` is handed to `SpeciesTable::load`.
//!
//! CSV layout: the first column holds the species name, the header must name the columns
//! `State, A, B, C, D, Enthalpy, Gibbs` (any order, case-insensitive, extra columns ignored).
//! Empty cells are allowed: A-D become 0.0, Enthalpy/Gibbs stay absent.
//!
//! JSON layout: `{"Water": {"State": "g", "A": 3.47, "B": 1.45, "C": null, "D": 0.121,
//! "Enthalpy": -241818, "Gibbs": -228572}, ...}`
use super::species_table::{SpeciesRecord, SpeciesState, SpeciesTable};
use crate::Thermodynamics::thermo_errors::EquilibriumError;
use enum_dispatch::enum_dispatch;
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[enum_dispatch]
pub trait TableSource {
    fn load_table(&self) -> Result<SpeciesTable, EquilibriumError>;
    /// human readable origin used in log messages
    fn describe(&self) -> String;
}

/// CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFile {
    pub path: String,
}

impl CsvFile {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl TableSource for CsvFile {
    fn load_table(&self) -> Result<SpeciesTable, EquilibriumError> {
        let text = read_file(&self.path)?;
        let table = parse_csv(&text)?;
        info!(
            "Successfully parsed species table from file '{}' ({} rows)",
            self.path,
            table.len()
        );
        Ok(table)
    }
    fn describe(&self) -> String {
        format!("CSV file '{}'", self.path)
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFile {
    pub path: String,
}

impl JsonFile {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl TableSource for JsonFile {
    fn load_table(&self) -> Result<SpeciesTable, EquilibriumError> {
        let text = read_file(&self.path)?;
        let table = parse_json(&text)?;
        info!(
            "Successfully parsed species table from file '{}' ({} rows)",
            self.path,
            table.len()
        );
        Ok(table)
    }
    fn describe(&self) -> String {
        format!("JSON file '{}'", self.path)
    }
}

/// CSV content already held in memory (embedded data, tests)
#[derive(Debug, Clone)]
pub struct CsvText {
    pub text: String,
}

impl CsvText {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl TableSource for CsvText {
    fn load_table(&self) -> Result<SpeciesTable, EquilibriumError> {
        parse_csv(&self.text)
    }
    fn describe(&self) -> String {
        "in-memory CSV".to_string()
    }
}

#[derive(Debug, Clone)]
#[enum_dispatch(TableSource)]
pub enum TableSourceEnum {
    Csv(CsvFile),
    Json(JsonFile),
    Text(CsvText),
}

/// picks the reader by file extension: `.json` is JSON, everything else is CSV
pub fn create_source_by_path(path: &str) -> TableSourceEnum {
    let is_json = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        TableSourceEnum::Json(JsonFile::new(path))
    } else {
        TableSourceEnum::Csv(CsvFile::new(path))
    }
}

fn read_file(path: &str) -> Result<String, EquilibriumError> {
    std::fs::read_to_string(path).map_err(|source| EquilibriumError::TableRead {
        path: path.to_string(),
        source,
    })
}

////////////////////////////////////////CSV//////////////////////////////////////////////////////

const REQUIRED_COLUMNS: [&str; 7] = ["State", "A", "B", "C", "D", "Enthalpy", "Gibbs"];

pub fn parse_csv(text: &str) -> Result<SpeciesTable, EquilibriumError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(EquilibriumError::TableFormat {
        line: 1,
        message: "table is empty".to_string(),
    })?;
    let headers = split_csv_line(header, header_line)?;
    let col_index = |name: &str| -> Result<usize, EquilibriumError> {
        headers
            .iter()
            .skip(1)
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .map(|i| i + 1)
            .ok_or_else(|| EquilibriumError::TableFormat {
                line: header_line,
                message: format!("missing '{}' column", name),
            })
    };
    let mut idx = [0usize; 7];
    for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = col_index(name)?;
    }
    let [state_idx, a_idx, b_idx, c_idx, d_idx, h_idx, g_idx] = idx;

    let mut table = SpeciesTable::new();
    for (line_num, line) in lines {
        let fields = split_csv_line(line, line_num)?;
        let field = |i: usize| fields.get(i).map(|s| s.trim()).unwrap_or("");
        let name = field(0);
        if name.is_empty() {
            return Err(EquilibriumError::TableFormat {
                line: line_num,
                message: "row without species name".to_string(),
            });
        }
        let state = field(state_idx)
            .parse::<SpeciesState>()
            .map_err(|state| EquilibriumError::InvalidState {
                species: name.to_string(),
                state,
            })?;
        let number = |i: usize| parse_optional_f64(field(i), line_num);
        let record = SpeciesRecord {
            name: name.to_string(),
            state,
            A: number(a_idx)?.unwrap_or(0.0),
            B: number(b_idx)?.unwrap_or(0.0),
            C: number(c_idx)?.unwrap_or(0.0),
            D: number(d_idx)?.unwrap_or(0.0),
            Enthalpy: number(h_idx)?,
            Gibbs: number(g_idx)?,
        };
        table.insert(record)?;
    }
    Ok(table)
}

/// empty cells and NaN markers are "no value"
fn parse_optional_f64(s: &str, line: usize) -> Result<Option<f64>, EquilibriumError> {
    if s.is_empty() || s.eq_ignore_ascii_case("nan") || s.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(EquilibriumError::TableFormat {
            line,
            message: format!("'{}' is not a number", s),
        }),
    }
}

/// splits one CSV line, honouring double quotes ("" inside quotes is a literal quote)
fn split_csv_line(line: &str, line_num: usize) -> Result<Vec<String>, EquilibriumError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if in_quotes {
        return Err(EquilibriumError::TableFormat {
            line: line_num,
            message: "unterminated quoted field".to_string(),
        });
    }
    fields.push(current);
    Ok(fields)
}

////////////////////////////////////////JSON//////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(default)]
    A: Option<f64>,
    #[serde(default)]
    B: Option<f64>,
    #[serde(default)]
    C: Option<f64>,
    #[serde(default)]
    D: Option<f64>,
    #[serde(default)]
    Enthalpy: Option<f64>,
    #[serde(default)]
    Gibbs: Option<f64>,
}

pub fn parse_json(text: &str) -> Result<SpeciesTable, EquilibriumError> {
    let rows: BTreeMap<String, JsonRow> = serde_json::from_str(text)?;
    let mut table = SpeciesTable::new();
    for (name, row) in rows {
        let state = row
            .state
            .parse::<SpeciesState>()
            .map_err(|state| EquilibriumError::InvalidState {
                species: name.clone(),
                state,
            })?;
        table.insert(SpeciesRecord {
            name,
            state,
            A: row.A.unwrap_or(0.0),
            B: row.B.unwrap_or(0.0),
            C: row.C.unwrap_or(0.0),
            D: row.D.unwrap_or(0.0),
            Enthalpy: row.Enthalpy,
            Gibbs: row.Gibbs,
        })?;
    }
    Ok(table)
}
