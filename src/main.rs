//! Basketball win-probability CLI
//!
//! Fits a ridge regression to a scraped box-score table and ranks teams
//! by their predicted win probability.

use clap::{Parser, Subcommand};
use hoops::{Config, Result};

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Basketball win probability from box-score statistics", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the model and print held-out metrics and weights
    Train {
        /// Input stats table (delimited text with a header row)
        input: String,
        /// Override ridge regularization strength
        #[arg(long)]
        alpha: Option<f64>,
        /// Override split seed
        #[arg(long)]
        seed: Option<u64>,
        /// Override held-out fraction
        #[arg(long)]
        test_fraction: Option<f64>,
        /// Standardize features before fitting
        #[arg(long)]
        normalize: bool,
    },
    /// Fit on game rows and rank teams by their average-row scores
    Rank {
        /// Input stats table (delimited text with a header row)
        input: String,
        /// Report raw regression scores instead of clamped probabilities
        #[arg(long)]
        raw_scores: bool,
    },
    /// Full pipeline: train, evaluate and rank in one report
    Run {
        /// Input stats table (delimited text with a header row)
        input: String,
        /// Override ridge regularization strength
        #[arg(long)]
        alpha: Option<f64>,
        /// Override split seed
        #[arg(long)]
        seed: Option<u64>,
        /// Report raw regression scores instead of clamped probabilities
        #[arg(long)]
        raw_scores: bool,
        /// Skip the abbreviation legend
        #[arg(long)]
        no_legend: bool,
    },
    /// Write a default config.toml
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Train {
            input,
            alpha,
            seed,
            test_fraction,
            normalize,
        } => commands::train(&config, &input, alpha, seed, test_fraction, normalize),
        Commands::Rank { input, raw_scores } => commands::rank(&config, &input, raw_scores),
        Commands::Run {
            input,
            alpha,
            seed,
            raw_scores,
            no_legend,
        } => commands::run(&config, &input, alpha, seed, raw_scores, no_legend),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use hoops::data::StatTable;
    use hoops::predict::{rank_teams, Clamp};
    use hoops::report::{render_model, render_ranking, render_report, ReportOptions};
    use hoops::training::{train_and_evaluate, TrainOutcome};
    use hoops::{features, ModelConfig};

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);
        println!("\nNext steps:");
        println!("  1. Edit {} to match your table's column names", config_path);
        println!("  2. Run 'hoops run <stats.csv>' for the full report");
        Ok(())
    }

    pub fn train(
        config: &Config,
        input: &str,
        alpha: Option<f64>,
        seed: Option<u64>,
        test_fraction: Option<f64>,
        normalize: bool,
    ) -> Result<()> {
        let model_config = override_model_config(config, alpha, seed, test_fraction, normalize);
        let table = StatTable::from_path(input, config.columns.delimiter_byte())?;
        let outcome = fit(config, &model_config, &table)?;

        let options = report_options(config, false);
        print!("{}", render_model(&outcome.metrics, &outcome.model, &options));
        Ok(())
    }

    pub fn rank(config: &Config, input: &str, raw_scores: bool) -> Result<()> {
        let table = StatTable::from_path(input, config.columns.delimiter_byte())?;
        let outcome = fit(config, &config.model, &table)?;

        let clamp = clamp_mode(config, raw_scores);
        let teams = features::team_vectors(
            &table,
            &config.columns.features,
            &config.columns.team,
            &config.columns.category,
            &config.columns.average_tag,
        )?;
        let rankings = rank_teams(&outcome.model, &teams, clamp);

        let options = report_options(config, false);
        print!("{}", render_ranking(&rankings, &options));
        Ok(())
    }

    pub fn run(
        config: &Config,
        input: &str,
        alpha: Option<f64>,
        seed: Option<u64>,
        raw_scores: bool,
        no_legend: bool,
    ) -> Result<()> {
        let model_config = override_model_config(config, alpha, seed, None, config.model.normalize);
        let table = StatTable::from_path(input, config.columns.delimiter_byte())?;
        let outcome = fit(config, &model_config, &table)?;

        let clamp = clamp_mode(config, raw_scores);
        let teams = features::team_vectors(
            &table,
            &config.columns.features,
            &config.columns.team,
            &config.columns.category,
            &config.columns.average_tag,
        )?;
        let rankings = rank_teams(&outcome.model, &teams, clamp);

        let options = report_options(config, no_legend);
        print!(
            "{}",
            render_report(&outcome.metrics, &outcome.model, &rankings, &options)
        );
        Ok(())
    }

    /// Fit on the game rows: everything not tagged as an average row.
    /// Tables without a category column train on every row.
    fn fit(config: &Config, model_config: &ModelConfig, table: &StatTable) -> Result<TrainOutcome> {
        let columns = &config.columns;
        let game_rows = match table.column_index(&columns.category) {
            Ok(_) => table.rows_where_not(&columns.category, &columns.average_tag)?,
            Err(_) => {
                log::debug!(
                    "No '{}' column; training on all {} rows",
                    columns.category,
                    table.len()
                );
                (0..table.len()).collect()
            }
        };

        let (x, y) = features::design_matrix_for_rows(
            table,
            &columns.features,
            &columns.target,
            &game_rows,
        )?;
        train_and_evaluate(&x, &y, &columns.features, model_config)
    }

    fn override_model_config(
        config: &Config,
        alpha: Option<f64>,
        seed: Option<u64>,
        test_fraction: Option<f64>,
        normalize: bool,
    ) -> ModelConfig {
        let mut model_config = config.model.clone();
        if let Some(alpha) = alpha {
            model_config.alpha = alpha;
        }
        if let Some(seed) = seed {
            model_config.seed = seed;
        }
        if let Some(fraction) = test_fraction {
            model_config.test_fraction = fraction;
        }
        if normalize {
            model_config.normalize = true;
        }
        model_config
    }

    fn clamp_mode(config: &Config, raw_scores: bool) -> Clamp {
        if raw_scores {
            Clamp::Raw
        } else {
            Clamp::from_flag(config.model.clamp_scores)
        }
    }

    fn report_options(config: &Config, no_legend: bool) -> ReportOptions {
        ReportOptions {
            decimals: config.report.decimals,
            legend: config.report.legend && !no_legend,
        }
    }
}
