//! CSV export of impact tables.
//!
//! Layout: a header row of column names (`name, sector, weight_pct`, then one
//! column per scenario in scenario order), then one row per constituent in
//! registry order. Numbers are written with a fixed number of decimals and no
//! padding.

use std::io::{Read, Write};

use super::format_fixed;
use crate::calculator::{ImpactTable, BASE_COLUMNS};
use crate::error::{ImpactError, ImpactResult};
use crate::types::parse_scenario_label;

/// Writes `table` as CSV.
///
/// # Errors
///
/// Returns [`ImpactError::Export`] if the underlying writer fails.
pub fn write_csv<W: Write>(table: &ImpactTable, writer: W, precision: u32) -> ImpactResult<()> {
    let export_err = |e: csv::Error| ImpactError::export(e.to_string());
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(table.column_names()).map_err(export_err)?;
    for row in table.rows() {
        let mut record = Vec::with_capacity(table.column_count());
        record.push(row.constituent.name.clone());
        record.push(row.constituent.sector.clone());
        record.push(format_fixed(row.constituent.weight_pct, precision));
        record.extend(row.required_pct.iter().map(|v| format_fixed(*v, precision)));
        wtr.write_record(&record).map_err(export_err)?;
    }

    wtr.flush().map_err(|e| ImpactError::export(e.to_string()))
}

/// Renders `table` as a CSV string.
///
/// # Errors
///
/// See [`write_csv`].
pub fn to_csv_string(table: &ImpactTable, precision: u32) -> ImpactResult<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf, precision)?;
    String::from_utf8(buf).map_err(|e| ImpactError::export(e.to_string()))
}

/// One parsed data row of an exported table.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// Constituent name.
    pub name: String,
    /// Sector.
    pub sector: String,
    /// Weight in percent, as rounded on export.
    pub weight_pct: f64,
    /// Scenario values, as rounded on export.
    pub values: Vec<f64>,
}

/// An exported table read back from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    /// Point moves recovered from the scenario column headers.
    pub scenarios: Vec<i64>,
    /// Rows in file order.
    pub rows: Vec<ParsedRow>,
}

/// Parses CSV produced by [`write_csv`].
///
/// # Errors
///
/// Returns [`ImpactError::Parse`] if the header does not have the expected
/// layout, a row has the wrong number of fields, or a number is malformed.
pub fn parse_csv<R: Read>(reader: R) -> ImpactResult<ParsedTable> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() < BASE_COLUMNS.len()
        || headers.iter().zip(BASE_COLUMNS).any(|(h, expected)| h != expected)
    {
        return Err(ImpactError::parse(format!(
            "expected header to start with {}",
            BASE_COLUMNS.join(",")
        )));
    }
    let scenarios = headers
        .iter()
        .skip(BASE_COLUMNS.len())
        .map(|h| {
            parse_scenario_label(h)
                .ok_or_else(|| ImpactError::parse(format!("unrecognised scenario column '{h}'")))
        })
        .collect::<ImpactResult<Vec<i64>>>()?;

    let mut rows = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let number = |idx: usize| -> ImpactResult<f64> {
            let field = record.get(idx).unwrap_or_default();
            field.trim().parse::<f64>().map_err(|_| {
                ImpactError::parse(format!("row {}: '{}' is not a number", line + 1, field))
            })
        };

        let values = (BASE_COLUMNS.len()..headers.len())
            .map(&number)
            .collect::<ImpactResult<Vec<f64>>>()?;

        rows.push(ParsedRow {
            name: record.get(0).unwrap_or_default().to_string(),
            sector: record.get(1).unwrap_or_default().to_string(),
            weight_pct: number(2)?,
            values,
        });
    }

    Ok(ParsedTable { scenarios, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_impact_table;
    use crate::types::{ConstituentRecord, ScenarioSet};
    use approx::assert_abs_diff_eq;

    fn table() -> ImpactTable {
        let records = vec![
            ConstituentRecord::new("LARSEN & TOUBRO LTD", 2.61, "Construction/Engineering"),
            ConstituentRecord::new("ACME, INC", 1.0, "Finance - NBFC"),
        ];
        compute_impact_table(&records, 25_509.7, &ScenarioSet::new([100, -250])).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv_string(&table(), 2).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "name,sector,weight_pct,required % change for +100 pts,required % change for -250 pts"
        );
        assert_eq!(
            lines.next().unwrap(),
            "LARSEN & TOUBRO LTD,Construction/Engineering,2.61,15.02,-37.55"
        );
        assert_eq!(lines.next().unwrap(), "\"ACME, INC\",Finance - NBFC,1.00,39.20,-98.00");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_round_trip_within_rounding() {
        let table = table();
        let csv = to_csv_string(&table, 2).unwrap();
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.scenarios, vec![100, -250]);
        assert_eq!(parsed.rows.len(), table.len());
        for (orig, back) in table.rows().iter().zip(&parsed.rows) {
            assert_eq!(orig.constituent.name, back.name);
            assert_eq!(orig.constituent.sector, back.sector);
            assert_abs_diff_eq!(orig.constituent.weight_pct, back.weight_pct, epsilon = 0.01);
            for (a, b) in orig.required_pct.iter().zip(&back.values) {
                assert_abs_diff_eq!(*a, *b, epsilon = 0.01);
            }
        }
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        let err = parse_csv("company,weight\nX,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ImpactError::Parse { .. }));

        let err = parse_csv("name,sector,weight_pct,pts100\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("pts100"));
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let data = "name,sector,weight_pct,required % change for +100 pts\nX,IT,1.00,abc\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
