use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use ibscreen_bedrock::config::ScreeningConfig;
use ibscreen_bedrock::screening::ScreeningAdapter;
use ibscreen_cli::args::Args;
use ibscreen_cli::intake::initial_record;
use ibscreen_export::render::render_report;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let record = initial_record(&args)?;

    let config = ScreeningConfig::from_env()?;
    tracing::info!(region = %config.region, model = %config.model_id, "screening configuration loaded");

    let adapter = ScreeningAdapter::from_config(&config).await;
    let transaction = adapter.evaluate_recorded(record).await?;

    tracing::info!(
        transaction_id = %transaction.id,
        input_tokens = transaction.usage.tokens.input,
        output_tokens = transaction.usage.tokens.output,
        cost_usd = transaction.usage.cost_usd,
        "screening complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&transaction)?);
    } else {
        print!("{}", render_report(args.view, &transaction.result)?);
    }

    Ok(())
}
