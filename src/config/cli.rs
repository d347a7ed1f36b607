use crate::config::{Settings, TomlConfig};
use crate::core::{ReactionKind, ResponseOrdering};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-reactions")]
#[command(about = "Like or dislike a blog article and print the updated count")]
pub struct CliConfig {
    /// like 或 dislike
    #[arg(value_parser = parse_kind)]
    pub kind: ReactionKind,

    /// Article slug, as carried by the button's data-slug attribute
    pub slug: String,

    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Blog server root, overrides the config file")]
    pub base_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_parser = parse_ordering, help = "arrival or latest-request")]
    pub ordering: Option<ResponseOrdering>,

    #[arg(long, default_value = "1", help = "Number of overlapping activations")]
    pub repeat: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_kind(value: &str) -> std::result::Result<ReactionKind, String> {
    value.parse().map_err(|e: crate::utils::error::ReactionError| e.to_string())
}

fn parse_ordering(value: &str) -> std::result::Result<ResponseOrdering, String> {
    match value {
        "arrival" | "arrival-order" => Ok(ResponseOrdering::ArrivalOrder),
        "latest-request" | "latest_request" => Ok(ResponseOrdering::LatestRequest),
        other => Err(format!(
            "unknown ordering `{}` (expected arrival or latest-request)",
            other
        )),
    }
}

impl CliConfig {
    /// 設定檔為底，命令列參數覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            // 合併後再驗證，命令列可以補上檔案中缺的值
            Some(path) => Settings::from_toml(&TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }
        if let Some(ordering) = self.ordering {
            settings.ordering = ordering;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("repeat", self.repeat, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_arguments() {
        let cli = CliConfig::parse_from([
            "blog-reactions",
            "dislike",
            "hello-world",
            "--base-url",
            "http://127.0.0.1:8000",
            "--ordering",
            "latest-request",
            "--repeat",
            "3",
        ]);

        assert_eq!(cli.kind, ReactionKind::Dislike);
        assert_eq!(cli.slug, "hello-world");
        assert_eq!(cli.repeat, 3);
        assert!(cli.validate().is_ok());

        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.ordering, ResponseOrdering::LatestRequest);
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(CliConfig::try_parse_from(["blog-reactions", "love", "abc"]).is_err());
    }

    #[test]
    fn test_zero_repeat_is_invalid() {
        let cli = CliConfig::parse_from(["blog-reactions", "like", "abc", "--repeat", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[server]
base_url = "http://from-file:8000"
timeout_seconds = 7

[controller]
ordering = "latest_request"
"#,
            )
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::parse_from([
            "blog-reactions",
            "like",
            "abc",
            "--config",
            path.as_str(),
            "--base-url",
            "http://from-cli:8000",
        ]);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url, "http://from-cli:8000");
        assert_eq!(settings.timeout_seconds, Some(7));
        assert_eq!(settings.ordering, ResponseOrdering::LatestRequest);
    }

    #[test]
    fn test_cli_base_url_fills_unset_env_var() {
        std::env::remove_var("TEST_REACTIONS_CLI_UNSET_URL");

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbase_url = \"${TEST_REACTIONS_CLI_UNSET_URL}\"\n")
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::parse_from([
            "blog-reactions",
            "like",
            "abc",
            "--config",
            path.as_str(),
            "--base-url",
            "http://from-cli:8000",
        ]);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url, "http://from-cli:8000");

        // 沒有命令列覆蓋時仍然會失敗
        let cli = CliConfig::parse_from(["blog-reactions", "like", "abc", "--config", path.as_str()]);
        assert!(cli.settings().is_err());
    }

    #[test]
    fn test_invalid_config_file_values_still_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbase_url = \"http://localhost:8000\"\n\n[logging]\nlevel = \"loud\"\n")
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::parse_from(["blog-reactions", "like", "abc", "--config", path.as_str()]);
        assert!(cli.settings().is_err());
    }

    #[test]
    fn test_invalid_base_url_from_cli() {
        let cli = CliConfig::parse_from(["blog-reactions", "like", "abc", "--base-url", "nowhere"]);
        assert!(cli.settings().is_err());
    }
}
