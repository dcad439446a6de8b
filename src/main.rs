use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{debug, info};

use mensa_scrape::presentation::{render_meal_table, render_site_list};
use mensa_scrape::{
    fetch_menu_with_config, MensaConfig, MensaError, MenuSummary, PriceTier, SiteRegistry,
    TableOptions,
};

#[derive(Parser)]
#[command(name = "mensa", version, about = "Scrape Mensa menus from supported providers")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available Mensas
    List,

    /// Fetch and display a Mensa menu
    Scrape {
        /// Key of the mensa to scrape (defaults to the configured default_site)
        #[arg(short, long)]
        mensa: Option<String>,

        /// Price tier to show (student/employee/guest)
        #[arg(long)]
        price_tier: Option<PriceTier>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Hide allergen information
        #[arg(long)]
        no_allergens: bool,

        /// Hide price information
        #[arg(long)]
        no_prices: bool,

        /// Hide nutrition traffic lights
        #[arg(long)]
        no_nutrition: bool,

        /// Hide dietary labels
        #[arg(long)]
        no_dietary: bool,

        /// Show summary statistics (table output only)
        #[arg(short, long, conflicts_with = "json")]
        summary: bool,

        /// Print meals as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("Verbose logging enabled");
}

async fn run(cli: Cli) -> Result<(), MensaError> {
    let config = MensaConfig::load()?;
    let registry = SiteRegistry::with_config(&config)?;

    match cli.command {
        Commands::List => {
            println!("Available Mensas:");
            print!("{}", render_site_list(&registry));
        }
        Commands::Scrape {
            mensa,
            price_tier,
            timeout,
            no_allergens,
            no_prices,
            no_nutrition,
            no_dietary,
            summary,
            json,
        } => {
            let key = mensa.unwrap_or_else(|| config.default_site.clone());
            let site = registry.get(&key)?;
            let price_tier = match price_tier {
                Some(tier) => tier,
                None => config.price_tier.parse()?,
            };

            info!("Fetching menu from: {}", site.url);
            let meals =
                fetch_menu_with_config(site, &config, timeout.map(Duration::from_secs)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&meals)?);
                return Ok(());
            }

            if meals.is_empty() {
                eprintln!("No dishes found, maybe the structure differs?");
                return Ok(());
            }
            info!("Successfully parsed {} meals", meals.len());

            let options = TableOptions {
                allergens: !no_allergens,
                prices: !no_prices,
                nutrition: !no_nutrition,
                dietary: !no_dietary,
                price_tier,
            };
            print!("{}", render_meal_table(&meals, &options));

            if summary {
                println!();
                print!("{}", MenuSummary::from_meals(&meals));
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
