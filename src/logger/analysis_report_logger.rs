use std::fmt::Write;
use crate::enums::analysis_source::AnalysisSource;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::history_page::HistoryPage;
use crate::structs::log_analysis_result::LogAnalysisResult;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const PREVIEW_CHARS: usize = 60;

pub struct AnalysisReportLogger {}

impl AnalysisReportLogger {
    pub fn print_outcome(outcome: &AnalysisOutcome) {
        println!("{}", Self::render(&outcome.result, &outcome.source, outcome.attempts));
    }

    pub fn print_record(record: &AnalysisRecord) {
        println!("\n🆔 Record {} (owner: {}, {})", record.id, record.owner, record.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
        println!("{}", Self::render(&record.result, &record.source, record.attempts));
    }

    pub fn print_history(page: &HistoryPage) {
        println!("{}", Self::render_history(page));
    }

    pub fn render(result: &LogAnalysisResult, source: &AnalysisSource, attempts: u32) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n📊 Log Analysis Report");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(
            out,
            "{} Overall risk: {}",
            result.overall_risk_level().emoji(),
            result.overall_risk_level()
        );
        let _ = writeln!(out, "🧠 Source: {} ({} attempt(s))", source.label(), attempts);
        if let AnalysisSource::Fallback { reason } = source {
            let _ = writeln!(out, "   Reason: {}", reason);
        }
        let _ = writeln!(out, "\n📝 {}", result.summary());

        let _ = writeln!(out, "\n🔒 Security threats: {}", result.total_threats());
        for (index, threat) in result.security_threats().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} [{}] {}",
                index + 1,
                threat.severity.emoji(),
                threat.severity.as_str(),
                threat.description
            );
            if let Some(category) = &threat.category {
                let _ = writeln!(out, "     Category: {}", category);
            }
            if let Some(score) = threat.risk_score {
                let _ = writeln!(out, "     Risk score: {}/100", score);
            }
            let _ = writeln!(out, "     Time: {}", threat.timestamp);
            let _ = writeln!(out, "     💡 {}", threat.recommendation);
        }

        let _ = writeln!(out, "\n⚙️  Operational issues: {}", result.total_issues());
        for (index, issue) in result.operational_issues().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} [{}] {}",
                index + 1,
                issue.issue_type.emoji(),
                issue.issue_type.as_str(),
                issue.description
            );
            if let Some(impact) = &issue.impact {
                let _ = writeln!(out, "     Impact: {}", impact);
            }
            let _ = writeln!(out, "     Time: {}", issue.timestamp);
            let _ = writeln!(out, "     💡 {}", issue.recommendation);
        }

        let _ = write!(out, "{}", RULE);
        out
    }

    pub fn render_history(page: &HistoryPage) -> String {
        let mut out = String::new();

        if page.records.is_empty() {
            let _ = write!(out, "📭 No stored analyses (page {} of {})", page.page, page.total_pages.max(1));
            return out;
        }

        let _ = writeln!(out, "\n📚 Analysis history: page {} of {} ({} total)", page.page, page.total_pages, page.total);
        let _ = writeln!(out, "{}", RULE);
        for record in &page.records {
            let _ = writeln!(
                out,
                "{} {}  {}  {:<8} {:<10} {}",
                record.result.overall_risk_level().emoji(),
                record.id,
                record.created_at.format("%Y-%m-%d %H:%M"),
                record.result.overall_risk_level().as_str(),
                record.owner,
                Self::preview(record.result.summary())
            );
        }
        let _ = write!(out, "{}", RULE);

        if page.has_next() {
            let _ = write!(out, "\n➡️  More results: --page {}", page.page + 1);
        }
        out
    }

    fn preview(text: &str) -> String {
        if text.chars().count() <= PREVIEW_CHARS {
            return text.to_string();
        }
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback_analyzer::FallbackAnalyzer;

    #[test]
    fn report_lists_every_entry_and_the_source() {
        let result = FallbackAnalyzer::analyze("ERROR db down\nWARN slow query\nfailed login for root");
        let source = AnalysisSource::Fallback { reason: "timed out".to_string() };
        let report = AnalysisReportLogger::render(&result, &source, 3);

        assert!(report.contains("Overall risk: Medium"));
        assert!(report.contains("Fallback (keyword scan) (3 attempt(s))"));
        assert!(report.contains("Reason: timed out"));
        assert!(report.contains("Security threats: 1"));
        assert!(report.contains("Operational issues: 3"));
        assert!(report.contains("Category: Keyword Match"));
    }

    #[test]
    fn empty_history_has_a_friendly_line() {
        let page = HistoryPage {
            records: Vec::new(),
            page: 1,
            page_size: 20,
            total: 0,
            total_pages: 0,
        };
        assert_eq!(AnalysisReportLogger::render_history(&page), "📭 No stored analyses (page 1 of 1)");
    }

    #[test]
    fn long_summaries_are_shortened() {
        let preview = AnalysisReportLogger::preview(&"a".repeat(100));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));
    }
}
