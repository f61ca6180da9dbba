#![forbid(unsafe_code)]

//! Self-contained HTML report with inline CSS/JS
//!
//! The page has a filter panel (by level and by issue type) followed by one
//! section per record with issues, headed by the record's line number.

use crate::bib::Record;
use crate::engine::ExecutionResult;
use crate::issues::{Issue, IssueType};
use crate::types::Severity;

const TITLE: &str = "Bibliography Check Report";

/// HTML output formatter
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Creates a new HtmlFormatter
    pub fn new() -> Self {
        HtmlFormatter
    }

    /// Render the whole report as a standalone HTML page
    pub fn format(&self, result: &ExecutionResult) -> String {
        let errors = result.count_severity(Severity::Error);
        let warnings = result.count_severity(Severity::Warning);

        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", TITLE));
        html.push_str("<style>\n");
        html.push_str(INLINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", TITLE));
        html.push_str(&format!(
            "<p class=\"summary\">{} entries &middot; {} checked &middot; {} errors &middot; {} warnings</p>\n",
            result.records.len(),
            result.records_checked,
            errors,
            warnings
        ));

        push_filter_panel(&mut html);

        let mut any = false;
        for record in result.records_with_issues() {
            push_record(&mut html, record);
            any = true;
        }
        if !any {
            html.push_str("<p class=\"no-issues\">No issues found.</p>\n");
        }

        html.push_str("<script>\n");
        html.push_str(INLINE_JS);
        html.push_str("</script>\n</body>\n</html>\n");
        html
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_filter_panel(html: &mut String) {
    html.push_str("<div id=\"filter-panel\">\n<h3>Levels</h3>\n<div class=\"filter-group\">\n");
    for severity in [Severity::Error, Severity::Warning] {
        html.push_str(&format!(
            "<label><input type=\"checkbox\" class=\"level-filter\" data-level=\"{0}\" checked> {0}</label>\n",
            severity
        ));
    }
    html.push_str("</div>\n<h3>Issue types</h3>\n<div class=\"filter-group\">\n");
    for issue_type in IssueType::ALL {
        html.push_str(&format!(
            "<label><input type=\"checkbox\" class=\"type-filter\" data-type=\"{}\" checked> {}</label>\n",
            issue_type.as_str(),
            escape_html(issue_type.legend())
        ));
    }
    html.push_str("</div>\n</div>\n");
}

fn push_record(html: &mut String, record: &Record) {
    html.push_str("<section class=\"bib-entry\">\n");
    html.push_str(&format!("<h2>Line {}</h2>\n", record.line_number()));
    html.push_str(&format!(
        "<div class=\"citation-key\">@{}{{{}}}</div>\n",
        escape_html(record.kind().as_str()),
        escape_html(record.citation_key())
    ));
    if let Some(title) = record.title() {
        html.push_str(&format!("<div class=\"title\">{}</div>\n", escape_html(title)));
    }

    html.push_str("<table class=\"fields\">\n");
    for (key, value) in record.fields().iter() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(key),
            escape_html(value)
        ));
    }
    html.push_str("</table>\n");

    for issue in record.issues() {
        push_issue(html, issue);
    }
    html.push_str("</section>\n");
}

fn push_issue(html: &mut String, issue: &Issue) {
    html.push_str(&format!(
        "<div class=\"issue {0}\" data-level=\"{0}\" data-type=\"{1}\">[{0}] {2}</div>\n",
        issue.severity(),
        issue.issue_type().as_str(),
        escape_html(&issue.message())
    ));
}

const INLINE_CSS: &str = r#"body { font-family: Arial, sans-serif; padding: 20px; }
#filter-panel { background: #f7f7f7; padding: 10px 15px; border-radius: 5px; margin-bottom: 20px; }
.filter-group label { display: inline-block; margin-right: 12px; }
.bib-entry { background: #f0f0f0; padding: 15px; border-radius: 5px; margin-bottom: 15px; }
.citation-key { font-family: monospace; font-weight: bold; }
.title { font-style: italic; margin-bottom: 6px; }
.fields td { padding: 0 8px; font-family: monospace; font-size: 0.9em; }
.issue { margin-top: 4px; }
.issue.error { color: #d00000; }
.issue.warning { color: #c26a1b; }
"#;

const INLINE_JS: &str = r#"document.querySelectorAll('.level-filter, .type-filter').forEach(function (filter) {
  filter.addEventListener('change', updateDisplay);
});

function updateDisplay() {
  var levels = new Set(
    Array.from(document.querySelectorAll('.level-filter:checked')).map(function (f) { return f.dataset.level; })
  );
  var types = new Set(
    Array.from(document.querySelectorAll('.type-filter:checked')).map(function (f) { return f.dataset.type; })
  );
  document.querySelectorAll('.issue').forEach(function (el) {
    var show = levels.has(el.dataset.level) && types.has(el.dataset.type);
    el.style.display = show ? 'block' : 'none';
  });
  document.querySelectorAll('.bib-entry').forEach(function (section) {
    var visible = Array.from(section.querySelectorAll('.issue')).some(function (el) {
      return el.style.display !== 'none';
    });
    section.style.display = visible ? 'block' : 'none';
  });
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bib::parse_str;
    use crate::engine::ExecutionEngine;
    use crate::rules::{ExecutionContext, RuleRegistry};

    fn render(source: &str) -> String {
        let result = ExecutionEngine::new(RuleRegistry::builtin())
            .execute(parse_str(source), &ExecutionContext::new(2025));
        HtmlFormatter::new().format(&result)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_filters_cover_taxonomy() {
        let html = render("");
        assert!(html.contains("data-level=\"error\""));
        assert!(html.contains("data-level=\"warning\""));
        for issue_type in IssueType::ALL {
            assert!(html.contains(&format!("data-type=\"{}\"", issue_type.as_str())));
        }
        assert!(html.contains("No issues found."));
    }

    #[test]
    fn test_record_section_headed_by_line() {
        let html = render("% comment\n\n@article{a<b,\n  title = {Fish & Chips},\n  pages = {7},\n}\n");
        assert!(html.contains("<h2>Line 3</h2>"));
        assert!(html.contains("@article{a&lt;b}"));
        assert!(html.contains("Fish &amp; Chips"));
        assert!(html.contains("data-type=\"only-one-page\""));
        assert!(!html.contains("Fish & Chips"));
    }

    #[test]
    fn test_old_preprint_tagged_as_error() {
        let html = render(
            "@article{p,\n  title = {Deep Nets},\n  journal = {arXiv preprint},\n  year = 2020,\n}\n",
        );
        assert!(html.contains("data-level=\"error\" data-type=\"arxiv-paper\""));
    }

    #[test]
    fn test_filtering_hides_sections_without_visible_issues() {
        let html = render("@article{a,\n  pages = {7},\n}\n");
        assert!(html.contains("querySelectorAll('.bib-entry')"));
        assert!(html.contains("section.style.display = visible ? 'block' : 'none';"));
        assert!(html.contains("<section class=\"bib-entry\">"));
    }
}
