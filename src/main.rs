use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ride_fit_advisor::config::Settings;
use ride_fit_advisor::core::{FitField, FitRequestModel, SubmissionController, SubmissionState};
use ride_fit_advisor::models::PainPointKey;
use ride_fit_advisor::render::{render_inputs, render_options, render_state};
use ride_fit_advisor::services::FitClient;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ride-fit", about = "Get a starting bike fit estimate from the fit advisory service")]
struct Cli {
    /// Advisory service base URL (overrides configuration)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Configuration file to load instead of config/default.toml
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit measurements and print the recommendation
    Estimate {
        /// Height in inches
        #[arg(long)]
        height: Option<String>,

        /// Inseam in inches
        #[arg(long)]
        inseam: Option<String>,

        /// endurance, race, gravel or commute
        #[arg(long)]
        style: Option<String>,

        /// low, medium or high
        #[arg(long)]
        flexibility: Option<String>,

        /// Pain point to report; repeat to report several
        #[arg(long = "pain")]
        pain: Vec<String>,
    },
    /// Check that the advisory service is reachable
    Ping,
    /// List the riding styles, flexibility levels and pain points the service understands
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("failed to load configuration")?;

    if let Some(base_url) = cli.base_url {
        settings.advisor.base_url = base_url;
    }

    init_logging(&settings);

    match cli.command {
        Command::Estimate {
            height,
            inseam,
            style,
            flexibility,
            pain,
        } => {
            let mut model = FitRequestModel::new();

            let fields = [
                (FitField::HeightIn, height),
                (FitField::InseamIn, inseam),
                (FitField::RidingStyle, style),
                (FitField::Flexibility, flexibility),
            ];
            for (field, raw) in fields {
                if let Some(raw) = raw {
                    model.set_field(field, &raw)?;
                }
            }
            for raw in &pain {
                let key: PainPointKey = raw.parse()?;
                if !model.pain_points().contains(key) {
                    model.toggle_pain_point(key);
                }
            }

            if model.inseam_looks_implausible() {
                warn!("Inseam is not shorter than height; double-check your measurements");
            }

            print!("{}", render_inputs(&model));
            println!();

            let client = FitClient::from_settings(&settings.advisor)?;
            let mut controller = SubmissionController::new();

            info!("Requesting fit estimate from {}", client.base_url());

            controller.submit(&client, model.snapshot()).await?;
            print!("{}", render_state(&controller));

            if let SubmissionState::Error(message) = controller.state() {
                bail!("fit request failed: {}", message);
            }
        }
        Command::Ping => {
            let client = FitClient::from_settings(&settings.advisor)?;
            let status = client
                .status()
                .await
                .with_context(|| format!("fit service at {} is not reachable", client.base_url()))?;
            println!("{}", status.message);
        }
        Command::Options => {
            print!("{}", render_options());
        }
    }

    Ok(())
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
