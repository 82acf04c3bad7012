use std::sync::Arc;
use std::time::{Duration, Instant};
use logtriage::enums::ai_provider_error::AiProviderError;
use logtriage::enums::analysis_error::AnalysisError;
use logtriage::enums::analysis_source::AnalysisSource;
use logtriage::enums::issue_type::IssueType;
use logtriage::enums::risk_level::RiskLevel;
use logtriage::enums::severity::Severity;
use logtriage::prompts::log_analysis_prompt::LOG_BLOCK_START;
use logtriage::services::ai_providers::anthropic::AnthropicProvider;
use logtriage::services::bounded_invoker::BoundedInvoker;
use logtriage::services::fallback_analyzer::FallbackAnalyzer;
use logtriage::services::log_analyzer::LogAnalyzer;
use logtriage::services::preprocessor::Preprocessor;
use logtriage::services::prompt_builder::PromptBuilder;
use logtriage::services::rate_limiter::ApiRateLimiter;
use logtriage::services::risk_classifier::RiskClassifier;
use logtriage::structs::analysis_outcome::AnalysisOutcome;
use logtriage::structs::config::rate_limit_config::RateLimitConfig;
use crate::support::{fast_pipeline, Reply, ScriptedProvider};

const CRITICAL_REPLY: &str = r#"Here is my analysis:
```json
{
  "summary": "Privilege escalation observed",
  "securityThreats": [
    {"severity": "Critical", "description": "root shell from www-data", "recommendation": "Isolate host", "timestamp": "2024-03-01T10:00:00Z"}
  ],
  "operationalIssues": [],
  "overallRiskLevel": "Low",
  "totalThreats": 42
}
```"#;

fn analyzer(provider: &Arc<ScriptedProvider>, max_retries: u32) -> LogAnalyzer {
    LogAnalyzer::new(provider.clone(), fast_pipeline(max_retries))
}

fn assert_consistent(outcome: &AnalysisOutcome) {
    let result = &outcome.result;
    assert_eq!(result.total_threats(), result.security_threats().len());
    assert_eq!(result.total_issues(), result.operational_issues().len());
    assert_eq!(
        result.overall_risk_level(),
        RiskClassifier::classify(result.security_threats(), result.operational_issues())
    );
}

#[tokio::test]
async fn empty_input_makes_no_call() {
    let provider = Arc::new(ScriptedProvider::always(Reply::Text("{}".to_string())));
    let analyzer = analyzer(&provider, 3);

    assert_eq!(analyzer.analyze("").await, Err(AnalysisError::EmptyInput));
    assert_eq!(analyzer.analyze(" \t\n\n  ").await, Err(AnalysisError::EmptyInput));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn timeouts_exhaust_attempts_then_fall_back() {
    let provider = Arc::new(ScriptedProvider::always(Reply::Hang));
    let analyzer = analyzer(&provider, 2);

    let outcome = analyzer.analyze("ERROR payment gateway unreachable").await.unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(outcome.attempts, 2);
    assert!(outcome.is_fallback());
    assert!(outcome.result.summary().starts_with("Fallback analysis"));
    assert!(matches!(outcome.source, AnalysisSource::Fallback { ref reason } if reason.contains("timed out")));
    assert_consistent(&outcome);
}

#[tokio::test]
async fn non_json_is_retried_then_falls_back() {
    let provider = Arc::new(ScriptedProvider::always(Reply::Text("I could not find any problems.".to_string())));
    let analyzer = analyzer(&provider, 3);

    let outcome = analyzer.analyze("WARN disk usage at 91%").await.unwrap();

    assert_eq!(provider.calls(), 3);
    assert!(outcome.is_fallback());
    assert_eq!(outcome.result.operational_issues()[0].issue_type, IssueType::Warning);
    assert_consistent(&outcome);
}

#[tokio::test]
async fn critical_threat_overrides_model_risk_level() {
    let provider = Arc::new(ScriptedProvider::always(Reply::Text(CRITICAL_REPLY.to_string())));
    let analyzer = analyzer(&provider, 3);

    let outcome = analyzer.analyze("sudo: www-data : TTY=pts/0 ; COMMAND=/bin/sh").await.unwrap();

    assert_eq!(outcome.source, AnalysisSource::Ai { provider: "scripted".to_string() });
    assert_eq!(outcome.result.overall_risk_level(), RiskLevel::Critical);
    assert_eq!(outcome.result.total_threats(), 1);
    assert_eq!(outcome.result.security_threats()[0].severity, Severity::Critical);
    assert_consistent(&outcome);
}

#[tokio::test]
async fn mixed_failures_recover_on_a_later_attempt() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Reply::Hang,
        Reply::Fail(AiProviderError::ApiError("Rate limit exceeded: slow down".to_string())),
        Reply::Text("not json at all".to_string()),
        Reply::Text(r#"{"summary":"ok","securityThreats":[],"operationalIssues":[{"type":"performance","description":"GC pauses"}]}"#.to_string()),
    ]));
    let analyzer = analyzer(&provider, 4);

    let outcome = analyzer.analyze("gc pause 1200ms").await.unwrap();

    assert_eq!(provider.calls(), 4);
    assert_eq!(outcome.attempts, 4);
    assert!(!outcome.is_fallback());
    assert_eq!(outcome.result.operational_issues()[0].issue_type, IssueType::Performance);
    assert_eq!(outcome.result.overall_risk_level(), RiskLevel::Low);
    assert_consistent(&outcome);
}

#[tokio::test]
async fn prompt_carries_only_the_normalized_tail() {
    let provider = Arc::new(ScriptedProvider::always(Reply::Text(r#"{"summary":"quiet"}"#.to_string())));
    let mut pipeline = fast_pipeline(1);
    pipeline.max_chars = 40;
    let analyzer = LogAnalyzer::new(provider.clone(), pipeline);

    let raw: String = (0..20).map(|i| format!("   line number {:02}   \n\n", i)).collect();
    analyzer.analyze(&raw).await.unwrap();

    let prompt = &provider.prompts()[0];
    assert!(prompt.contains(LOG_BLOCK_START));
    assert!(prompt.contains("line number 19"));
    assert!(!prompt.contains("line number 00"));
    assert!(!prompt.contains("   line"));
}

#[tokio::test]
async fn consistent_results_for_varied_inputs() {
    let replies = [
        r#"{"summary":"s","securityThreats":[{"severity":"high"},{"severity":"bogus"}],"operationalIssues":[{"type":"error"}]}"#,
        r#"{"securityThreats":"not a list","operationalIssues":[{"type":"warning"},{"type":"warning"},{"type":"info"},{"type":"info"}]}"#,
        r#"{}"#,
    ];

    for reply in replies {
        let provider = Arc::new(ScriptedProvider::always(Reply::Text(reply.to_string())));
        let outcome = analyzer(&provider, 1).analyze("some log line").await.unwrap();
        assert!(!outcome.is_fallback());
        assert_consistent(&outcome);
    }
}

#[test]
fn preprocessor_keeps_recent_lines_within_budget() {
    let raw: String = (0..500).map(|i| format!("2024-01-01 event {}\n", i)).collect();
    let normalized = Preprocessor::new(1_000).normalize(&raw).unwrap();

    assert!(normalized.chars().count() <= 1_000);
    assert!(normalized.ends_with("event 499"));
    assert!(raw.trim_end().ends_with(&normalized));
}

#[test]
fn fallback_caps_errors_and_flags_login_failures() {
    let mut lines: Vec<String> = (0..10).map(|i| format!("ERROR job {} crashed", i)).collect();
    lines.push("login failed for user admin from 10.0.0.8".to_string());

    let result = FallbackAnalyzer::analyze(&lines.join("\n"));
    let error_issues = result
        .operational_issues()
        .iter()
        .filter(|issue| issue.issue_type == IssueType::Error)
        .count();

    assert_eq!(error_issues, 3);
    assert_eq!(result.total_threats(), 1);
    assert!(result.overall_risk_level() >= RiskLevel::Medium);
}

#[test]
fn offline_analysis_is_consistent() {
    let outcome = LogAnalyzer::analyze_offline_with(&fast_pipeline(3), "unauthorized request to /admin\nERROR 500").unwrap();

    assert_eq!(outcome.attempts, 0);
    assert!(outcome.is_fallback());
    assert_consistent(&outcome);
}

#[tokio::test]
async fn rate_limit_wait_does_not_count_against_the_deadline() {
    // One call per second; the second attempt waits ~1s locally, longer than the deadline.
    let limiter = Arc::new(ApiRateLimiter::new(&RateLimitConfig {
        requests_per_minute: 50,
        burst_per_second: 1,
    }));
    let provider = AnthropicProvider::new("test-key".to_string(), limiter)
        .with_base_url("http://127.0.0.1:1".to_string());
    let invoker = BoundedInvoker::new(Duration::from_millis(500), 2, Duration::from_millis(1));

    let started = Instant::now();
    let failure = invoker.invoke(&provider, &PromptBuilder::build("ERROR boom")).await.unwrap_err();

    assert_eq!(failure.attempts, 2);
    assert!(matches!(failure.error, AnalysisError::Transport(_)), "got {:?}", failure.error);
    assert!(started.elapsed() >= Duration::from_millis(800));
}
