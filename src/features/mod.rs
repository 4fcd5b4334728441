//! Feature and target extraction
//!
//! Turns the raw stats table into the numeric matrices the trainer and
//! scorer consume. The feature column order given here is the order the
//! fitted weights come back in; scoring must use the same order.

use crate::data::StatTable;
use crate::{HoopsError, Result};
use ndarray::{Array1, Array2};

/// A team's feature vector taken from its phase-average row
#[derive(Debug, Clone)]
pub struct TeamVector {
    pub team: String,
    pub values: Array1<f64>,
}

/// Build the design matrix and target vector from the table.
///
/// Rows come back in file order; columns follow `feature_names`. Fails
/// with a schema error if any column is missing or non-numeric.
pub fn design_matrix(
    table: &StatTable,
    feature_names: &[String],
    target: &str,
) -> Result<(Array2<f64>, Array1<f64>)> {
    let row_indices: Vec<usize> = (0..table.len()).collect();
    let x = matrix_for_rows(table, feature_names, &row_indices)?;
    let y = Array1::from_vec(table.numeric_column(target)?);
    Ok((x, y))
}

/// Build the design matrix and target vector from a subset of rows
pub fn design_matrix_for_rows(
    table: &StatTable,
    feature_names: &[String],
    target: &str,
    row_indices: &[usize],
) -> Result<(Array2<f64>, Array1<f64>)> {
    let x = matrix_for_rows(table, feature_names, row_indices)?;
    let mut y = Array1::zeros(row_indices.len());
    for (i, &row) in row_indices.iter().enumerate() {
        y[i] = table.numeric_cell(row, target)?;
    }
    Ok((x, y))
}

/// Extract one feature vector per average-tagged row, in file order.
///
/// Replaces the hand-maintained per-team average arrays the report used
/// to be built from: averages are ordinary rows of the input table whose
/// category column carries `average_tag`.
pub fn team_vectors(
    table: &StatTable,
    feature_names: &[String],
    team_column: &str,
    category_column: &str,
    average_tag: &str,
) -> Result<Vec<TeamVector>> {
    let rows = table.rows_where(category_column, average_tag)?;
    if rows.is_empty() {
        return Err(HoopsError::InsufficientData(format!(
            "no rows tagged '{}' in column '{}'",
            average_tag, category_column
        )));
    }

    let teams = table.string_column(team_column)?;
    let mut out = Vec::with_capacity(rows.len());
    for &row in &rows {
        let mut values = Array1::zeros(feature_names.len());
        for (j, name) in feature_names.iter().enumerate() {
            values[j] = table.numeric_cell(row, name)?;
        }
        out.push(TeamVector {
            team: teams[row].clone(),
            values,
        });
    }

    log::debug!("Extracted {} team average vectors", out.len());
    Ok(out)
}

fn matrix_for_rows(
    table: &StatTable,
    feature_names: &[String],
    row_indices: &[usize],
) -> Result<Array2<f64>> {
    let mut x = Array2::zeros((row_indices.len(), feature_names.len()));
    for (j, name) in feature_names.iter().enumerate() {
        for (i, &row) in row_indices.iter().enumerate() {
            x[(i, j)] = table.numeric_cell(row, name)?;
        }
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
TEAM,CAT,P2,P3,RES
Slovenia,GAME,0.61,0.35,1
France,GAME,0.59,0.37,0
USA,GAME,0.62,0.42,1
Slovenia,AVE,0.60,0.36,0
France,AVE,0.58,0.38,0
";

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample_table() -> StatTable {
        StatTable::from_reader(SAMPLE.as_bytes(), b',').unwrap()
    }

    #[test]
    fn test_design_matrix_shape_and_order() {
        let table = sample_table();
        let features = names(&["P2", "P3"]);
        let (x, y) = design_matrix(&table, &features, "RES").unwrap();
        assert_eq!(x.dim(), (5, 2));
        assert_eq!(y.len(), 5);
        // Column order follows the feature list, not the file header
        let swapped = names(&["P3", "P2"]);
        let (xs, _) = design_matrix(&table, &swapped, "RES").unwrap();
        assert_eq!(x[(0, 0)], xs[(0, 1)]);
        assert_eq!(x[(0, 1)], xs[(0, 0)]);
    }

    #[test]
    fn test_design_matrix_for_row_subset() {
        let table = sample_table();
        let features = names(&["P2", "P3"]);
        let game_rows = table.rows_where("CAT", "GAME").unwrap();
        let (x, y) = design_matrix_for_rows(&table, &features, "RES", &game_rows).unwrap();
        assert_eq!(x.dim(), (3, 2));
        assert_eq!(y.to_vec(), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_missing_feature_column_fails() {
        let table = sample_table();
        let features = names(&["P2", "FT"]);
        let err = design_matrix(&table, &features, "RES").unwrap_err();
        assert!(matches!(err, HoopsError::Schema(_)));
    }

    #[test]
    fn test_team_vectors_in_file_order() {
        let table = sample_table();
        let features = names(&["P2", "P3"]);
        let teams = team_vectors(&table, &features, "TEAM", "CAT", "AVE").unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team, "Slovenia");
        assert_eq!(teams[1].team, "France");
        assert_eq!(teams[0].values.to_vec(), vec![0.60, 0.36]);
    }

    #[test]
    fn test_no_average_rows_is_insufficient_data() {
        let table = sample_table();
        let features = names(&["P2"]);
        let err = team_vectors(&table, &features, "TEAM", "CAT", "FINAL").unwrap_err();
        assert!(matches!(err, HoopsError::InsufficientData(_)));
    }
}
