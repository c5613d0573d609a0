//! 跨页面交接数据
//!
//! 判分结果由答题页写入临时存储，结果页读取后渲染。
//! 存储值是页面脚本也能直接读取的 `AnswerResult[]` 数组：
//!
//! ```json
//! [ { "questionId": "...", "correct": true, "correctAnswer": "..." } ]
//! ```
//!
//! 裸数组即版本 1。读取时也接受带版本号的信封
//! `{ "schemaVersion": n, "results": [...] }`，版本高于当前支持的会被拒绝。

use serde::{Deserialize, Serialize};

use crate::error::HandoffError;
use crate::models::answer::AnswerResult;

/// 临时存储中的固定键
pub const RESULTS_STORAGE_KEY: &str = "triviaResults";

/// 当前交接数据版本
pub const HANDOFF_SCHEMA_VERSION: u32 = 1;

/// 答题页交给结果页的判分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultHandoff {
    pub schema_version: u32,
    pub results: Vec<AnswerResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHandoff {
    Versioned(ResultHandoff),
    Legacy(Vec<AnswerResult>),
}

impl ResultHandoff {
    pub fn new(results: Vec<AnswerResult>) -> Self {
        Self {
            schema_version: HANDOFF_SCHEMA_VERSION,
            results,
        }
    }

    /// 序列化为存储值（版本 1 即裸数组）
    pub fn to_json(&self) -> Result<String, HandoffError> {
        serde_json::to_string(&self.results).map_err(|source| HandoffError::EncodeFailed { source })
    }

    pub fn from_json(raw: &str) -> Result<Self, HandoffError> {
        let stored: StoredHandoff =
            serde_json::from_str(raw).map_err(|source| HandoffError::Malformed { source })?;

        let handoff = match stored {
            StoredHandoff::Versioned(handoff) => handoff,
            StoredHandoff::Legacy(results) => Self::new(results),
        };

        if handoff.schema_version > HANDOFF_SCHEMA_VERSION {
            return Err(HandoffError::UnsupportedVersion {
                found: handoff.schema_version,
                supported: HANDOFF_SCHEMA_VERSION,
            });
        }

        Ok(handoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_is_bare_array() {
        let handoff = ResultHandoff::new(vec![AnswerResult::new("q1", false, "Paris")]);
        let json = handoff.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"questionId":"q1","correct":false,"correctAnswer":"Paris"}]"#
        );
        assert_eq!(ResultHandoff::from_json(&json).unwrap(), handoff);
    }

    #[test]
    fn test_versioned_envelope_is_accepted() {
        let handoff = ResultHandoff::from_json(
            r#"{"schemaVersion":1,"results":[{"questionId":"q1","correct":true,"correctAnswer":"Water"}]}"#,
        )
        .unwrap();
        assert_eq!(handoff.results, vec![AnswerResult::new("q1", true, "Water")]);
    }

    #[test]
    fn test_bare_array_reads_as_current_version() {
        let handoff = ResultHandoff::from_json(
            r#"[{"questionId":"q1","correct":true,"correctAnswer":"Water"},
                {"questionId":"q2","correct":false,"correctAnswer":"Mars"}]"#,
        )
        .unwrap();
        assert_eq!(handoff.schema_version, HANDOFF_SCHEMA_VERSION);
        assert_eq!(handoff.results.len(), 2);
        assert_eq!(handoff.results[1].question_id, "q2");
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let err = ResultHandoff::from_json(r#"{"schemaVersion":7,"results":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            HandoffError::UnsupportedVersion { found: 7, supported: 1 }
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = ResultHandoff::from_json("not json").unwrap_err();
        assert!(matches!(err, HandoffError::Malformed { .. }));
    }
}
