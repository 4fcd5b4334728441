//! Win-probability scoring and team ranking
//!
//! Applies the fitted weights to per-team average feature vectors. The
//! vector order must match the order the model was trained with; that
//! precondition is not checked here, the test suite pins it down.

use crate::features::TeamVector;
use crate::model::FittedModel;
use ndarray::ArrayView1;

/// Lowest score a clamped probability can take; keeps a ranked table
/// free of zero and negative entries.
pub const MIN_PROBABILITY: f64 = 0.001;

/// Whether scores are forced into probability range.
///
/// The regression output is not calibrated, so a raw score can leave
/// [0, 1]; clamping trades that honesty for a table that reads as
/// probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    /// Clamp into [0.001, 1.0]
    Probability,
    /// Report the raw regression output
    Raw,
}

impl Clamp {
    pub fn from_flag(clamp_scores: bool) -> Self {
        if clamp_scores {
            Clamp::Probability
        } else {
            Clamp::Raw
        }
    }

    fn apply(self, score: f64) -> f64 {
        match self {
            Clamp::Probability => score.clamp(MIN_PROBABILITY, 1.0),
            Clamp::Raw => score,
        }
    }
}

/// One row of the ranking table
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub team: String,
    pub score: f64,
}

/// Score a single feature vector
pub fn score(model: &FittedModel, x: ArrayView1<f64>, clamp: Clamp) -> f64 {
    clamp.apply(model.predict_one(x))
}

/// Score every team and sort descending; ties keep input order.
pub fn rank_teams(model: &FittedModel, teams: &[TeamVector], clamp: Clamp) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = teams
        .iter()
        .map(|t| RankingEntry {
            team: t.team.clone(),
            score: score(model, t.values.view(), clamp),
        })
        .collect();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    fn model(weights: Vec<f64>, intercept: f64) -> FittedModel {
        let feature_names = (0..weights.len()).map(|i| format!("f{}", i + 1)).collect();
        FittedModel {
            feature_names,
            weights: Array1::from_vec(weights),
            intercept,
        }
    }

    fn team(name: &str, values: Vec<f64>) -> TeamVector {
        TeamVector {
            team: name.to_string(),
            values: Array1::from_vec(values),
        }
    }

    #[test]
    fn test_known_weights_scenario() {
        // w = (2, -1, 0), b = 0.5
        let m = model(vec![2.0, -1.0, 0.0], 0.5);
        let a = array![1.0, 0.0, 0.0];
        let b = array![0.0, 1.0, 0.0];
        assert_relative_eq!(score(&m, a.view(), Clamp::Raw), 2.5);
        assert_relative_eq!(score(&m, b.view(), Clamp::Raw), -0.5);

        let ranked = rank_teams(
            &m,
            &[team("B", vec![0.0, 1.0, 0.0]), team("A", vec![1.0, 0.0, 0.0])],
            Clamp::Raw,
        );
        assert_eq!(ranked[0].team, "A");
        assert_eq!(ranked[1].team, "B");
    }

    #[test]
    fn test_score_is_linear_up_to_intercept() {
        let m = model(vec![1.5, -0.5], 0.3);
        let x = array![0.4, 0.8];
        let y = array![0.1, 0.2];
        let sum = &x + &y;
        let lhs = score(&m, sum.view(), Clamp::Raw);
        let rhs = score(&m, x.view(), Clamp::Raw) + score(&m, y.view(), Clamp::Raw) - m.intercept;
        assert_relative_eq!(lhs, rhs, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_scores_stay_in_probability_range() {
        let m = model(vec![10.0], 0.0);
        let high = array![5.0];
        let low = array![-5.0];
        assert_eq!(score(&m, high.view(), Clamp::Probability), 1.0);
        assert_eq!(score(&m, low.view(), Clamp::Probability), MIN_PROBABILITY);
        // Raw scoring is unrestricted
        assert_eq!(score(&m, high.view(), Clamp::Raw), 50.0);
        assert_eq!(score(&m, low.view(), Clamp::Raw), -50.0);
    }

    #[test]
    fn test_ranking_is_descending() {
        let m = model(vec![1.0], 0.0);
        let teams: Vec<TeamVector> = (0..6)
            .map(|i| team(&format!("T{}", i), vec![(i as f64 * 31.0) % 7.0]))
            .collect();
        let ranked = rank_teams(&m, &teams, Clamp::Raw);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let m = model(vec![0.0], 0.5);
        let ranked = rank_teams(
            &m,
            &[
                team("First", vec![1.0]),
                team("Second", vec![2.0]),
                team("Third", vec![3.0]),
            ],
            Clamp::Raw,
        );
        // All scores equal 0.5; stable sort keeps file order
        assert_eq!(ranked[0].team, "First");
        assert_eq!(ranked[1].team, "Second");
        assert_eq!(ranked[2].team, "Third");
    }
}
