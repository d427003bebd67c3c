use crate::adapters::firestore::{DEFAULT_API_ENDPOINT, DEFAULT_DATABASE_ID};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "leave-sender")]
#[command(about = "Compose and submit a sick leave notification request")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long)]
    pub project_id: String,

    #[arg(long, default_value = DEFAULT_DATABASE_ID)]
    pub database_id: String,

    #[arg(long, help = "Bearer token for the backend; also gates suggestion loading")]
    pub auth_token: Option<String>,

    #[arg(long)]
    pub to_name: Option<String>,

    #[arg(long)]
    pub to_email: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long, help = "Body template HTML; a non-empty template seeds the body")]
    pub body_template: Option<String>,

    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    #[arg(long, help = "Read the body HTML from a file")]
    pub body_file: Option<String>,

    #[arg(long, help = "Print the suggestion lists instead of submitting")]
    pub list_suggestions: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn database_id(&self) -> &str {
        &self.database_id
    }

    fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("project_id", &self.project_id)?;
        validate_non_empty_string("database_id", &self.database_id)?;
        Ok(())
    }
}
