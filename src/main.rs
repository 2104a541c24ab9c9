use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use mealplan::config::AppConfig;
use mealplan::ingredient_model::PlanId;
use mealplan::logging;
use mealplan::shopping_list::ShoppingListService;
use mealplan::store::load_store;

/// mealplan - weekly meal plan shopping lists
#[derive(Parser)]
#[command(name = "mealplan")]
#[command(about = "Generate consolidated shopping lists from weekly meal plans", long_about = None)]
struct Cli {
    /// JSON file with meals and plans (overrides MEALPLAN_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shopping list for a plan
    ShoppingList {
        /// Plan id
        #[arg(long)]
        plan: PlanId,

        /// Scale every day by this factor instead of the plan's portion sizes
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        multiplier: Option<u32>,

        /// Group ingredients per planned day instead of one consolidated list
        #[arg(long)]
        per_meal: bool,
    },
    /// List plans by week
    Plans,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    logging::init(config.log_format);

    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());
    info!(path = %data_path, "starting mealplan");

    let store = load_store(&data_path)
        .with_context(|| format!("Failed to load meal plan data from {data_path}"))?;
    let service = ShoppingListService::new(store);

    let output = match cli.command {
        Commands::ShoppingList {
            plan,
            multiplier,
            per_meal,
        } => {
            let scaling = config.scaling(multiplier);
            if per_meal {
                let breakdown = service
                    .generate_meal_breakdown(plan, scaling)
                    .with_context(|| format!("Failed to generate meal breakdown for plan {plan}"))?;
                serde_json::to_string_pretty(&breakdown)?
            } else {
                let list = service
                    .generate_shopping_list(plan, scaling)
                    .with_context(|| format!("Failed to generate shopping list for plan {plan}"))?;
                serde_json::to_string_pretty(&list)?
            }
        }
        Commands::Plans => {
            let plans = service.weekly_plans().context("Failed to list plans")?;
            serde_json::to_string_pretty(&plans)?
        }
    };

    println!("{output}");
    Ok(())
}
