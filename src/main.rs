use smart_scrape::{Scrape, ScrapeConfig};

mod args;
use args::Args;
use clap::Parser;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting scrape for: {}", args.url);

    let mut scrape = if let Some(path) = &args.config {
        match Scrape::new(&args.url).with_config_file(path) {
            Ok(scrape) => scrape,
            Err(e) => {
                ::log::error!("Failed to load config file {:?}: {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        let mut config = ScrapeConfig::new(&args.url);
        config.request_timeout_secs = args.timeout;
        config.max_interactions = args.max_interactions;
        config.min_text_length = args.min_text_length;
        config.truncate_limit = args.truncate_limit;
        Scrape::new(&args.url).with_config(config)
    };

    if let Some(webdriver_url) = &args.webdriver_url {
        scrape = scrape.with_webdriver_url(webdriver_url);
    }

    let start_time = std::time::Instant::now();
    let result = match scrape.run().await {
        Ok(result) => result,
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Scraped {} sections via {:?} strategy in {:.2} seconds",
        result.sections.len(),
        result.strategy_used,
        start_time.elapsed().as_secs_f64()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}
