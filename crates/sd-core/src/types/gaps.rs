use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Skill-gap analysis against a target role. `overall_readiness` is
/// percentage-as-text ("65%"); consumers extract the number at display time
/// via [`SkillGapReport::readiness_percent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub relevant_skills: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub nice_to_have: Vec<String>,
    /// Ordered: first entry is the highest learning priority.
    pub learning_priority: Vec<String>,
    pub overall_readiness: String,
}

impl SkillGapReport {
    /// Extracts the leading integer from `overall_readiness`, so "65%"
    /// yields 65. `None` when the text carries no usable number or the
    /// number is out of the 0..=100 range.
    pub fn readiness_percent(&self) -> Option<u8> {
        let digits: String = self
            .overall_readiness
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        let value: u32 = digits.parse().ok()?;
        u8::try_from(value).ok().filter(|v| *v <= 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(readiness: &str) -> SkillGapReport {
        SkillGapReport {
            relevant_skills: vec![],
            critical_gaps: vec![],
            nice_to_have: vec![],
            learning_priority: vec![],
            overall_readiness: readiness.to_string(),
        }
    }

    #[test]
    fn extracts_plain_percentage() {
        assert_eq!(report("65%").readiness_percent(), Some(65));
    }

    #[test]
    fn extracts_from_surrounding_text() {
        assert_eq!(report("about 80% ready").readiness_percent(), Some(80));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(report("150%").readiness_percent(), None);
        assert_eq!(report("unknown").readiness_percent(), None);
        assert_eq!(report("").readiness_percent(), None);
    }
}
