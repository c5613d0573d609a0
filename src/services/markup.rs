//! 结果页片段渲染 - 业务能力层
//!
//! 生成结果页用到的 HTML 片段。所有文本都经过转义，只作为纯文本插入页面。

use crate::models::{AnswerResult, ScoreSummary};
use crate::services::html_entities::decode_html_text;

/// 没有结果时的提示
pub const NO_RESULTS_MESSAGE: &str = "No results found. Please play the game first.";

/// 存储的结果无法解析时的提示
pub const MALFORMED_RESULTS_MESSAGE: &str =
    "Your results could not be loaded. Please play the game again.";

/// 提示框级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Danger,
}

impl NoticeLevel {
    fn css_name(self) -> &'static str {
        match self {
            NoticeLevel::Warning => "warning",
            NoticeLevel::Danger => "danger",
        }
    }
}

/// 单题结果卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// 题号（从 1 开始）
    pub number: usize,
    pub question_id: String,
    pub correct: bool,
    /// 已解码的正确答案（纯文本）
    pub correct_answer: String,
}

impl ResultCard {
    pub fn from_result(index: usize, result: &AnswerResult) -> Self {
        Self {
            number: index + 1,
            question_id: result.question_id.clone(),
            correct: result.correct,
            correct_answer: decode_html_text(&result.correct_answer),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.correct {
            "Correct!"
        } else {
            "Incorrect"
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.correct {
            "✓"
        } else {
            "✗"
        }
    }

    fn tone(&self) -> &'static str {
        if self.correct {
            "success"
        } else {
            "danger"
        }
    }

    pub fn to_html(&self) -> String {
        let icon_class = if self.correct { "correct-icon" } else { "incorrect-icon" };
        format!(
            concat!(
                r#"<div class="card mb-3 border-{tone}" data-question-id="{id}">"#,
                r#"<div class="card-header bg-{tone} text-white">"#,
                r#"<span class="{icon_class}">{icon}</span> {label}"#,
                "</div>",
                r#"<div class="card-body">"#,
                r#"<p class="card-title fw-bold">Question {number}</p>"#,
                r#"<p class="card-text"><strong>Correct Answer:</strong> {answer}</p>"#,
                "</div>",
                "</div>"
            ),
            tone = self.tone(),
            id = escape_html(&self.question_id),
            icon_class = icon_class,
            icon = self.icon(),
            label = self.label(),
            number = self.number,
            answer = escape_html(&self.correct_answer),
        )
    }
}

/// 成绩汇总片段
pub fn summary_html(summary: &ScoreSummary) -> String {
    let percentage = match summary.percentage {
        Some(pct) => format!("{}%", pct),
        None => "N/A".to_string(),
    };
    format!(
        r#"<span class="score-display">{}</span><p class="fs-5">You scored {}</p>"#,
        summary.fraction(),
        percentage
    )
}

/// 提示框片段
pub fn notice_html(level: NoticeLevel, message: &str) -> String {
    format!(
        r#"<div class="alert alert-{}">{}</div>"#,
        level.css_name(),
        escape_html(message)
    )
}

/// 转义文本，使其只能作为纯文本出现在 HTML 中
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decodes_then_escapes() {
        let card = ResultCard::from_result(0, &AnswerResult::new("q1", true, "O&#39;Brien"));
        assert_eq!(card.number, 1);
        assert_eq!(card.correct_answer, "O'Brien");

        let html = card.to_html();
        assert!(html.contains("border-success"));
        assert!(html.contains("Correct!"));
        assert!(html.contains("Question 1"));
        assert!(html.contains("O&#39;Brien"));
    }

    #[test]
    fn test_card_never_emits_raw_markup() {
        let card = ResultCard::from_result(
            2,
            &AnswerResult::new("q3", false, "&lt;img src=x onerror=alert(1)&gt;"),
        );
        assert_eq!(card.correct_answer, "<img src=x onerror=alert(1)>");
        assert_eq!(card.label(), "Incorrect");
        assert_eq!(card.icon(), "✗");

        let html = card.to_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("bg-danger"));
        assert!(html.contains("Question 3"));
    }

    #[test]
    fn test_summary_html() {
        let summary = ScoreSummary {
            correct: 2,
            total: 3,
            percentage: Some(67),
        };
        assert_eq!(
            summary_html(&summary),
            r#"<span class="score-display">2/3</span><p class="fs-5">You scored 67%</p>"#
        );

        let empty = ScoreSummary::from_results(&[]);
        assert!(summary_html(&empty).contains("You scored N/A"));
    }

    #[test]
    fn test_notice_html() {
        assert_eq!(
            notice_html(NoticeLevel::Warning, NO_RESULTS_MESSAGE),
            r#"<div class="alert alert-warning">No results found. Please play the game first.</div>"#
        );
    }
}
