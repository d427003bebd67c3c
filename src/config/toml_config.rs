use crate::adapters::firestore::{DEFAULT_API_ENDPOINT, DEFAULT_DATABASE_ID};
use crate::domain::model::{FormEvent, FormState};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Submission profile loaded from a TOML file: backend coordinates plus
/// the form field values that would otherwise arrive as CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub project_id: String,
    #[serde(default = "default_database_id")]
    pub database_id: String,
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub to_name: Option<String>,
    pub to_email: Option<String>,
    pub subject: Option<String>,
    pub body_template: Option<String>,
    pub body: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_database_id() -> String {
    DEFAULT_DATABASE_ID.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AUTH_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Folds the profile's field values into a form snapshot through the
    /// reducer, in the order a user would fill the page: selections
    /// first, then the template, then the body edit. An explicit `body`
    /// therefore overrides a template's seeded text.
    pub fn initial_form_state(&self) -> FormState {
        let mut state = FormState::default()
            .apply(FormEvent::NameSelected(self.form.to_name.clone()))
            .apply(FormEvent::EmailSelected(self.form.to_email.clone()))
            .apply(FormEvent::SubjectSelected(self.form.subject.clone()))
            .apply(FormEvent::BodyTemplateSelected(
                self.form.body_template.clone(),
            ));
        if let Some(body) = &self.form.body {
            state = state.apply(FormEvent::BodyEdited(body.clone()));
        }
        state
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.backend.endpoint
    }

    fn project_id(&self) -> &str {
        &self.backend.project_id
    }

    fn database_id(&self) -> &str {
        &self.backend.database_id
    }

    fn auth_token(&self) -> Option<&str> {
        self.backend.auth_token.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.endpoint", &self.backend.endpoint)?;
        validate_non_empty_string("backend.project_id", &self.backend.project_id)?;
        validate_non_empty_string("backend.database_id", &self.backend.database_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[backend]
project_id = "leave-prod"

[form]
to_name = "Alice"
to_email = "a@x.com"
subject = "Leave"
body = "<p>Hello</p>"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.backend.project_id, "leave-prod");
        assert_eq!(config.backend.endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.backend.database_id, DEFAULT_DATABASE_ID);
        assert_eq!(config.form.to_name.as_deref(), Some("Alice"));
        assert_eq!(config.form.body.as_deref(), Some("<p>Hello</p>"));
    }

    #[test]
    fn test_missing_form_table_defaults_to_empty() {
        let config = TomlConfig::from_toml_str("[backend]\nproject_id = \"leave-prod\"\n").unwrap();
        assert_eq!(config.form.to_name, None);
        assert_eq!(config.initial_form_state(), FormState::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_LEAVE_TOKEN", "secret-token");

        let toml_content = r#"
[backend]
project_id = "leave-prod"
auth_token = "${TEST_LEAVE_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.auth_token.as_deref(), Some("secret-token"));

        std::env::remove_var("TEST_LEAVE_TOKEN");
    }

    #[test]
    fn test_unset_env_var_is_left_as_written() {
        let toml_content = r#"
[backend]
project_id = "leave-prod"
auth_token = "${TEST_LEAVE_TOKEN_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.backend.auth_token.as_deref(),
            Some("${TEST_LEAVE_TOKEN_UNSET}")
        );
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[backend]
endpoint = "invalid-url"
project_id = "leave-prod"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[backend]
project_id = "file-test"

[form]
subject = "Leave"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend.project_id, "file-test");
        assert_eq!(config.form.subject.as_deref(), Some("Leave"));
    }

    #[test]
    fn test_body_overrides_template_in_initial_state() {
        let toml_content = r#"
[backend]
project_id = "leave-prod"

[form]
body_template = "<p>template</p>"
body = "<p>edited</p>"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let state = config.initial_form_state();

        assert_eq!(state.body_template.as_deref(), Some("<p>template</p>"));
        assert_eq!(state.body_html, "<p>edited</p>");
    }

    #[test]
    fn test_template_alone_seeds_the_body() {
        let toml_content = r#"
[backend]
project_id = "leave-prod"

[form]
body_template = "<p>template</p>"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.initial_form_state().body_html, "<p>template</p>");
    }
}
