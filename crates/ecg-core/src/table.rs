//! CSV table loading — one row of extracted ECG features per record.
//!
//! The header row is optional: the first record is treated as a header and
//! skipped only when every one of its cells fails to parse as a number, so
//! a typo in data row 1 still surfaces as an error. Cells must be finite;
//! NaN and infinity are rejected at parse time. Rows are kept as parsed,
//! ragged widths included, so the shape validator can name the offending row.

use crate::error::ValidationError;

/// In-memory table of feature rows parsed from uploaded CSV bytes.
///
/// Request-scoped: built from the upload, discarded after the response.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    rows: Vec<Vec<f32>>,
}

impl FeatureTable {
    /// Build a table directly from rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Parse raw uploaded CSV bytes into a table.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let mut rows: Vec<Vec<f32>> = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ValidationError::Csv(e.to_string()))?;

            let mut row = Vec::with_capacity(record.len());
            let mut first_bad = None;
            let mut bad_count = 0;
            for (col, field) in record.iter().enumerate() {
                match field.parse::<f32>() {
                    Ok(v) if v.is_finite() => row.push(v),
                    _ => {
                        bad_count += 1;
                        if first_bad.is_none() {
                            first_bad = Some((col, field.to_string()));
                        }
                    }
                }
            }

            match first_bad {
                None => rows.push(row),
                // A fully non-numeric first record is the optional header row.
                Some(_) if idx == 0 && bad_count == record.len() => continue,
                Some((col, value)) => {
                    return Err(ValidationError::NonNumeric {
                        row: idx + 1,
                        col: col + 1,
                        value,
                    });
                }
            }
        }

        if rows.is_empty() {
            return Err(ValidationError::EmptyTable);
        }
        Ok(Self { rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_without_header() {
        let table = FeatureTable::from_csv_bytes(b"1,2,3\n4,5,6\n").unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.rows()[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(table.rows()[1], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn skips_optional_header_row() {
        let table = FeatureTable::from_csv_bytes(b"f1,f2,f3\n1,2,3\n").unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.rows()[0], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn trims_whitespace_around_cells() {
        let table = FeatureTable::from_csv_bytes(b" 1.5 , -2 , 3e-1 \n").unwrap();
        assert_eq!(table.rows()[0], vec![1.5, -2.0, 0.3]);
    }

    #[test]
    fn rejects_non_numeric_data_cell() {
        let err = FeatureTable::from_csv_bytes(b"1,2,3\n4,oops,6\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                row: 2,
                col: 2,
                value: "oops".into(),
            }
        );
    }

    #[test]
    fn rejects_nan_cell() {
        let err = FeatureTable::from_csv_bytes(b"1,2,NaN\n4,5,6\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                row: 1,
                col: 3,
                value: "NaN".into(),
            }
        );
    }

    #[test]
    fn rejects_infinite_cell() {
        let err = FeatureTable::from_csv_bytes(b"1,2,3\ninf,5,6\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                row: 2,
                col: 1,
                value: "inf".into(),
            }
        );
    }

    #[test]
    fn first_record_with_a_typo_is_not_a_header() {
        let err = FeatureTable::from_csv_bytes(b"1,2,oops\n4,5,6\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                row: 1,
                col: 3,
                value: "oops".into(),
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        let err = FeatureTable::from_csv_bytes(b"").unwrap_err();
        assert_eq!(err, ValidationError::EmptyTable);
    }

    #[test]
    fn rejects_header_only_input() {
        let err = FeatureTable::from_csv_bytes(b"f1,f2,f3\n").unwrap_err();
        assert_eq!(err, ValidationError::EmptyTable);
    }

    #[test]
    fn keeps_ragged_rows_for_the_validator() {
        let table = FeatureTable::from_csv_bytes(b"1,2,3\n4,5\n").unwrap();
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[1].len(), 2);
    }
}
