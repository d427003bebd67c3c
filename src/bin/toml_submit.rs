use clap::Parser;
use leave_sender::config::toml_config::TomlConfig;
use leave_sender::core::normalizer::normalize;
use leave_sender::core::validator::validate;
use leave_sender::domain::model::SubmissionRecord;
use leave_sender::domain::ports::ConfigProvider;
use leave_sender::utils::{logger, validation::Validate};
use leave_sender::{FirestoreClient, SubmissionPipeline};

#[derive(Parser)]
#[command(name = "toml-submit")]
#[command(about = "Submit a sick leave request from a TOML profile")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "leave-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - print the record that would be written without submitting
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting TOML-based submission");
    tracing::info!("Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load config file '{}': {}", args.config, e);
            eprintln!("Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    let form = config.initial_form_state();

    if args.dry_run {
        tracing::info!("Dry run mode - nothing will be written");
        if let Err(e) = validate(&form) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        let record = SubmissionRecord::new(
            form.to_name.clone().unwrap_or_default(),
            form.to_email.clone().unwrap_or_default(),
            form.subject.clone().unwrap_or_default(),
            normalize(&form.body_html),
        );
        println!("Record that would be written:");
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let client = FirestoreClient::new(&config);
    let pipeline = SubmissionPipeline::new(client);

    match pipeline.submit(&form).await {
        Ok(receipt) => {
            tracing::info!("Document written with id: {}", receipt.document_id);
            println!("{}", receipt.message);
            println!("Document id: {}", receipt.document_id);
        }
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("Configuration Summary:");
    println!("  Backend: {}", config.api_endpoint());
    println!("  Project: {}", config.project_id());
    println!("  Database: {}", config.database_id());
    println!(
        "  Auth token: {}",
        if config.auth_token().is_some() {
            "configured"
        } else {
            "none"
        }
    );
    println!("  To: {}", config.form.to_name.as_deref().unwrap_or("(unset)"));
    println!(
        "  Email: {}",
        config.form.to_email.as_deref().unwrap_or("(unset)")
    );
    println!(
        "  Subject: {}",
        config.form.subject.as_deref().unwrap_or("(unset)")
    );

    if args.dry_run {
        println!("  DRY RUN MODE ENABLED");
    }

    println!();
}
