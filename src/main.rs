use clap::Parser;
use leave_sender::core::suggest::load_suggestions;
use leave_sender::domain::model::{FormEvent, FormState, SuggestionLists};
use leave_sender::utils::{logger, validation::Validate};
use leave_sender::{CliConfig, FirestoreClient, SubmissionPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting leave-sender CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let client = FirestoreClient::new(&config);

    if config.list_suggestions {
        if config.auth_token.is_none() {
            eprintln!("Error: an auth token is required to load suggestions");
            std::process::exit(1);
        }
        match load_suggestions(&client).await {
            Ok(lists) => print_suggestions(&lists),
            Err(e) => {
                tracing::error!("Loading suggestions failed: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let form = build_form_state(&config)?;
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

/// Folds the CLI selections into a form snapshot, in the order a user
/// would fill the page: template first, then an explicit body on top.
fn build_form_state(config: &CliConfig) -> Result<FormState, leave_sender::FormError> {
    let mut form = FormState::default()
        .apply(FormEvent::NameSelected(config.to_name.clone()))
        .apply(FormEvent::EmailSelected(config.to_email.clone()))
        .apply(FormEvent::SubjectSelected(config.subject.clone()))
        .apply(FormEvent::BodyTemplateSelected(config.body_template.clone()));

    if let Some(path) = &config.body_file {
        let html = std::fs::read_to_string(path)?;
        form = form.apply(FormEvent::BodyEdited(html));
    } else if let Some(body) = &config.body {
        form = form.apply(FormEvent::BodyEdited(body.clone()));
    }

    Ok(form)
}

fn print_suggestions(lists: &SuggestionLists) {
    print_list("Names", &lists.names);
    print_list("Emails", &lists.emails);
    print_list("Subjects", &lists.subjects);
    print_list("Body templates", &lists.body_templates);
}

fn print_list(label: &str, values: &[String]) {
    println!("{} ({}):", label, values.len());
    for value in values {
        println!("  {}", value);
    }
    println!();
}
