use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::{Commands, HistoryAction};
use crate::enums::output_format::OutputFormat;
use crate::errors::{LogTriageError, LogTriageResult, ResultExt};
use crate::logger::analysis_report_logger::AnalysisReportLogger;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::build_provider;
use crate::services::history_store::HistoryStore;
use crate::services::log_analyzer::LogAnalyzer;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> LogTriageResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { file, offline, format, owner, no_save } => {
                self.analyze_command(file, offline, format, owner, no_save).await
            }
            Commands::History { action } => self.history_command(action),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> LogTriageResult<()> {
        log::info!("🚀 Initializing logtriage configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to choose a provider and tune the pipeline.", path.display());
        log::info!("🔧 Run 'logtriage validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> LogTriageResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = ConfigManager::load()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("   Provider: {} ({})", config.ai.provider, config.ai.model_name());
                log::info!(
                    "   Pipeline: {} chars, {}ms timeout, {} attempt(s)",
                    config.pipeline.max_chars,
                    config.pipeline.timeout_ms,
                    config.pipeline.max_attempts()
                );
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                ConfigManager::ensure_valid(&config)
            }
        }
    }

    async fn analyze_command(
        &self,
        file: Option<PathBuf>,
        offline: bool,
        format: Option<OutputFormat>,
        owner: Option<String>,
        no_save: bool,
    ) -> LogTriageResult<()> {
        let config = Self::load_valid_config()?;
        let raw_log = Self::read_input(file.as_deref())?;

        let outcome = if offline {
            log::info!("📴 Offline mode: running keyword scan only");
            LogAnalyzer::analyze_offline_with(&config.pipeline, &raw_log)?
        } else {
            self.analyze_online(&config, &raw_log).await?
        };

        let format = format.unwrap_or(config.output.format);
        let owner = owner.unwrap_or_else(|| config.output.owner.clone());

        if !config.output.save_history || no_save {
            return Self::print_outcome(&outcome, format);
        }

        let record = Self::save_record(&config, &owner, &raw_log, &outcome)?;

        match format {
            OutputFormat::Pretty => {
                AnalysisReportLogger::print_outcome(&outcome);
                println!("💾 Saved as {}", record.id);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        }

        Ok(())
    }

    async fn analyze_online(&self, config: &Config, raw_log: &str) -> LogTriageResult<AnalysisOutcome> {
        let rate_limiter = Arc::new(ApiRateLimiter::new(&config.rate_limit));
        let provider = build_provider(&config.ai, rate_limiter)?;
        let analyzer = LogAnalyzer::new(Arc::clone(&provider), config.pipeline.clone());

        let mut spinner = AnimatedLogger::new(format!("🤖 Analyzing logs with {}", provider.name()));
        spinner.start();

        match analyzer.analyze(raw_log).await {
            Ok(outcome) if outcome.is_fallback() => {
                spinner.warn("AI analysis unavailable, showing keyword fallback").await;
                Ok(outcome)
            }
            Ok(outcome) => {
                spinner.stop(&format!("Analysis complete after {} attempt(s)", outcome.attempts)).await;
                Ok(outcome)
            }
            Err(e) => {
                spinner.error(&e.to_string()).await;
                Err(e.into())
            }
        }
    }

    fn history_command(&self, action: HistoryAction) -> LogTriageResult<()> {
        let config = Self::load_valid_config()?;
        let store = Self::history_store(&config);

        match action {
            HistoryAction::List { page, page_size, owner } => {
                let page = store.list(owner.as_deref(), page, page_size)?;
                AnalysisReportLogger::print_history(&page);
            }
            HistoryAction::Show { id, format } => {
                let record = store.get(id)?;
                match format.unwrap_or(config.output.format) {
                    OutputFormat::Pretty => AnalysisReportLogger::print_record(&record),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
                }
            }
            HistoryAction::Delete { id } => Self::delete_record(&store, id)?,
        }

        Ok(())
    }

    pub fn save_record(config: &Config, owner: &str, raw_log: &str, outcome: &AnalysisOutcome) -> LogTriageResult<AnalysisRecord> {
        Self::history_store(config).create(owner, raw_log, outcome.clone())
    }

    fn delete_record(store: &HistoryStore, id: Uuid) -> LogTriageResult<()> {
        store.delete(id)?;
        println!("🗑️  Deleted {}", id);
        Ok(())
    }

    fn print_outcome(outcome: &AnalysisOutcome, format: OutputFormat) -> LogTriageResult<()> {
        match format {
            OutputFormat::Pretty => AnalysisReportLogger::print_outcome(outcome),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
        }
        Ok(())
    }

    fn load_valid_config() -> LogTriageResult<Config> {
        let config = ConfigManager::load()
            .inspect_err(|_| log::error!("💡 Run 'logtriage init' to create a fresh configuration file."))?;
        ConfigManager::ensure_valid(&config)?;
        Ok(config)
    }

    pub fn history_store(config: &Config) -> HistoryStore {
        match &config.output.history_dir {
            Some(dir) => HistoryStore::new(dir),
            None => HistoryStore::default_location(),
        }
    }

    /// Reads the whole file, or stdin when no file is given.
    pub fn read_input(file: Option<&Path>) -> LogTriageResult<String> {
        match file {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| LogTriageError::file_error(&path.display().to_string(), "read log file", &e.to_string())),
            None => {
                let mut stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(LogTriageError::user_input_error(
                        "no input",
                        "log text on stdin or --file PATH",
                        "Pipe logs in, e.g. `journalctl -n 500 | logtriage analyze`",
                    ));
                }

                let mut buffer = String::new();
                stdin.read_to_string(&mut buffer).with_operation("read stdin")?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_log_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "ERROR boom\n").unwrap();

        assert_eq!(CommandRunner::read_input(Some(&path)).unwrap(), "ERROR boom\n");
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let dir = TempDir::new().unwrap();
        let result = CommandRunner::read_input(Some(&dir.path().join("missing.log")));
        assert!(matches!(result, Err(LogTriageError::FileOperationError { .. })));
    }

    #[test]
    fn failed_save_reports_a_single_file_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut config = Config::default();
        config.output.history_dir = Some(blocker.join("history").display().to_string());
        let outcome = LogAnalyzer::analyze_offline_with(&config.pipeline, "ERROR boom").unwrap();

        let error = CommandRunner::save_record(&config, "ops", "ERROR boom", &outcome).unwrap_err();
        assert!(matches!(error, LogTriageError::FileOperationError { .. }));
        assert!(!error.user_message().contains("Multiple errors"));
    }

    #[test]
    fn configured_history_dir_wins() {
        let mut config = Config::default();
        config.output.history_dir = Some("/tmp/logtriage-history".to_string());

        assert_eq!(CommandRunner::history_store(&config).dir(), Path::new("/tmp/logtriage-history"));
    }
}
