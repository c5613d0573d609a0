use serde::{Deserialize, Serialize};

/// 用户对单个题目的选择（请求体元素）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_answer: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, selected_answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            selected_answer: selected_answer.into(),
        }
    }
}

/// 服务器对单个题目的判分结果
///
/// `correct_answer` 可能包含 HTML 实体（如 `&#39;`），展示前需要解码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub question_id: String,
    pub correct: bool,
    pub correct_answer: String,
}

impl AnswerResult {
    pub fn new(question_id: impl Into<String>, correct: bool, correct_answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            correct,
            correct_answer: correct_answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_uses_camel_case_wire_names() {
        let json = serde_json::to_string(&Answer::new("q-1", "Water")).unwrap();
        assert_eq!(json, r#"{"questionId":"q-1","selectedAnswer":"Water"}"#);
    }

    #[test]
    fn test_answer_result_parses_server_payload() {
        let results: Vec<AnswerResult> = serde_json::from_str(
            r#"[{"questionId":"a","correct":true,"correctAnswer":"O&#39;Brien"}]"#,
        )
        .unwrap();
        assert_eq!(results, vec![AnswerResult::new("a", true, "O&#39;Brien")]);
    }
}
