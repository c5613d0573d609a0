use std::fmt;

use crate::models::answer::AnswerResult;

/// 成绩档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// >= 80%
    Success,
    /// 50% ~ 79%
    Warning,
    /// < 50%
    Danger,
}

impl Tier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Tier::Success
        } else if percentage >= 50 {
            Tier::Warning
        } else {
            Tier::Danger
        }
    }

    /// 样式名（对应 `border-success` 等 class）
    pub fn css_name(self) -> &'static str {
        match self {
            Tier::Success => "success",
            Tier::Warning => "warning",
            Tier::Danger => "danger",
        }
    }
}

/// 成绩汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    /// 结果集为空时为 `None`
    pub percentage: Option<u32>,
}

impl ScoreSummary {
    pub fn from_results(results: &[AnswerResult]) -> Self {
        let correct = results.iter().filter(|r| r.correct).count();
        let total = results.len();
        Self {
            correct,
            total,
            percentage: round_percentage(correct, total),
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        self.percentage.map(Tier::from_percentage)
    }

    /// "K/N"
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage {
            Some(pct) => write!(f, "{} ({}%)", self.fraction(), pct),
            None => write!(f, "{} (N/A)", self.fraction()),
        }
    }
}

/// round(correct / total * 100)，四舍五入（.5 进位），只用整数运算
fn round_percentage(correct: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let scaled = (correct as u64) * 200 + total as u64;
    let pct = scaled / (2 * total as u64);
    Some(pct as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(correct: usize, total: usize) -> Vec<AnswerResult> {
        (0..total)
            .map(|i| AnswerResult::new(format!("q{}", i), i < correct, "x"))
            .collect()
    }

    #[test]
    fn test_eight_of_ten_is_success() {
        let summary = ScoreSummary::from_results(&results(8, 10));
        assert_eq!(summary.fraction(), "8/10");
        assert_eq!(summary.percentage, Some(80));
        assert_eq!(summary.tier(), Some(Tier::Success));
    }

    #[test]
    fn test_four_of_ten_is_danger() {
        let summary = ScoreSummary::from_results(&results(4, 10));
        assert_eq!(summary.fraction(), "4/10");
        assert_eq!(summary.percentage, Some(40));
        assert_eq!(summary.tier(), Some(Tier::Danger));
    }

    #[test]
    fn test_two_of_three_rounds_up_to_warning() {
        let summary = ScoreSummary::from_results(&results(2, 3));
        assert_eq!(summary.fraction(), "2/3");
        assert_eq!(summary.percentage, Some(67));
        assert_eq!(summary.tier(), Some(Tier::Warning));
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_percentage(1, 8), Some(13));
        assert_eq!(round_percentage(1, 3), Some(33));
        assert_eq!(round_percentage(0, 4), Some(0));
        assert_eq!(round_percentage(4, 4), Some(100));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_percentage(79), Tier::Warning);
        assert_eq!(Tier::from_percentage(50), Tier::Warning);
        assert_eq!(Tier::from_percentage(49), Tier::Danger);
        assert_eq!(Tier::from_percentage(100), Tier::Success);
    }

    #[test]
    fn test_empty_results_have_no_percentage() {
        let summary = ScoreSummary::from_results(&[]);
        assert_eq!(summary.fraction(), "0/0");
        assert_eq!(summary.percentage, None);
        assert_eq!(summary.tier(), None);
        assert_eq!(summary.to_string(), "0/0 (N/A)");
    }
}
