//! Human-readable run report
//!
//! Formatting is driven by explicit per-call options; there is no
//! process-global display state.

use crate::model::FittedModel;
use crate::predict::RankingEntry;
use crate::training::RegressionMetrics;
use std::fmt::Write;

/// Per-call report formatting options
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Decimal places for metrics and scores
    pub decimals: usize,
    /// Append the legend block
    pub legend: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            decimals: 3,
            legend: true,
        }
    }
}

/// Render the fitted-model block: metrics, weight percentages, intercept
/// and the scoring formula.
pub fn render_model(
    metrics: &RegressionMetrics,
    model: &FittedModel,
    options: &ReportOptions,
) -> String {
    let d = options.decimals;
    let mut out = String::new();

    out.push_str("Model: Ridge\n");
    out.push_str("=======================\n\n");

    out.push_str("Metrics:\n");
    let _ = writeln!(out, "mse: {:.*}", d, metrics.mse);
    let _ = writeln!(out, "mae: {:.*}", d, metrics.mae);
    let _ = writeln!(out, "r2_score: {:.*}\n", d, metrics.r2);

    out.push_str("Regression model feature weights:\n");
    for (name, weight) in model.feature_names.iter().zip(model.weights.iter()) {
        let _ = writeln!(out, "{}_we: {:.*}%", name, d, weight * 100.0);
    }
    let _ = writeln!(out, "intercept: {:.*}\n", d, model.intercept);

    out.push_str("Formula:\n");
    let terms: Vec<String> = model
        .feature_names
        .iter()
        .map(|name| format!("{}_we*{}", name, name.to_lowercase()))
        .collect();
    let _ = writeln!(out, "winprob = {} + intercept", terms.join(" + "));

    out
}

/// Render the ranked team table
pub fn render_ranking(rankings: &[RankingEntry], options: &ReportOptions) -> String {
    let d = options.decimals;
    let width = rankings
        .iter()
        .map(|e| e.team.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  winprob", "team", width = width);
    for entry in rankings {
        let _ = writeln!(out, "{:<width$}  {:.*}", entry.team, d, entry.score, width = width);
    }
    out
}

/// Render the full run report
pub fn render_report(
    metrics: &RegressionMetrics,
    model: &FittedModel,
    rankings: &[RankingEntry],
    options: &ReportOptions,
) -> String {
    let mut out = render_model(metrics, model, options);
    out.push('\n');
    out.push_str("Win probability ranking from team average stats:\n");
    out.push_str(&render_ranking(rankings, options));

    if options.legend {
        out.push('\n');
        out.push_str(&render_legend(model));
    }

    out
}

fn render_legend(model: &FittedModel) -> String {
    let mut out = String::new();
    out.push_str("References:\n");
    out.push_str("mse      : mean squared error\n");
    out.push_str("mae      : mean absolute error\n");
    out.push_str("r2_score : coefficient of determination\n");
    for name in &model.feature_names {
        let _ = writeln!(out, "{:<9}: input feature column", name);
    }
    out
}
