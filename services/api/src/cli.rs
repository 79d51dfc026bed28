use crate::render::{run_break_even, run_compare, run_score, BreakEvenArgs, CompareArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use site_eval::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Restaurant Site Evaluator",
    about = "Score candidate restaurant sites and estimate their break-even economics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute the weighted composite score for one site
    Score(ScoreArgs),
    /// Estimate daily break-even revenue, table turnover and risk
    Breakeven(BreakEvenArgs),
    /// Rank candidate sites loaded from a CSV file
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Breakeven(args) => run_break_even(args),
        Command::Compare(args) => run_compare(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["site-eval-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "site-eval-api",
            "score",
            "--traffic",
            "8",
            "--location",
            "6",
            "--customer-match",
            "7",
            "--heat",
            "5",
            "--cost",
            "9",
            "--competition",
            "6",
            "--business-model",
            "快餐",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.customer_match, 7);
                assert_eq!(args.business_model, "快餐");
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn breakeven_other_costs_default_to_zero() {
        let cli = Cli::try_parse_from([
            "site-eval-api",
            "breakeven",
            "--price",
            "50",
            "--margin",
            "60",
            "--rent",
            "30000",
            "--labor",
            "40000",
            "--seats",
            "60",
            "--restaurant-type",
            "快餐",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Breakeven(args)) => assert_eq!(args.other, 0.0),
            other => panic!("expected breakeven command, got {other:?}"),
        }
    }
}
