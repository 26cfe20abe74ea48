use crate::domain::model::Period;
use crate::utils::error::{ConfigError, ConfigResult};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub report: ReportConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub destinations: Vec<String>,
    pub period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> ConfigResult<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> ConfigResult<()> {
        validate_path("source.path", &self.source.path)?;

        if self.report.destinations.is_empty() {
            return Err(ConfigError::MissingField {
                field: "report.destinations".to_string(),
            });
        }
        for destination in &self.report.destinations {
            validate_non_empty_string("report.destinations", destination)?;
        }

        self.period()?;
        validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;

        Ok(())
    }

    pub fn source_path(&self) -> &str {
        &self.source.path
    }

    pub fn destinations(&self) -> &[String] {
        &self.report.destinations
    }

    /// Defaults to early morning when unset.
    pub fn period(&self) -> ConfigResult<Period> {
        match &self.report.period {
            None => Ok(Period::EarlyMorning),
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                field: "report.period".to_string(),
                value: raw.clone(),
                reason: format!("{}", e),
            }),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    pub fn is_json_output(&self) -> bool {
        self.output_format() == "json"
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.validate_config()
    }
}
