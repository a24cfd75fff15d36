use crate::error::ShapeError;
use crate::generate::ContentRequest;
use crate::types::enums::ContentKind;
use crate::types::gaps::SkillGapReport;
use crate::types::io::GapRequest;

impl ContentRequest for GapRequest {
    type Output = SkillGapReport;

    const KIND: ContentKind = ContentKind::SkillGaps;

    fn prompt(&self) -> String {
        format!(
            r#"Analyze the skill gaps for someone wanting to become a {role}.

Current Skills: {skills}
Target Role: {role}

Please provide:
1. Skills they already have that are relevant
2. Critical skills they're missing
3. Nice-to-have skills for the role
4. Priority order for learning missing skills

Format as JSON:
{{
  "relevantSkills": ["skill1", "skill2"],
  "criticalGaps": ["skill1", "skill2"],
  "niceToHave": ["skill1", "skill2"],
  "learningPriority": ["skill1", "skill2", "skill3"],
  "overallReadiness": "percentage"
}}"#,
            role = self.target_role,
            skills = self.current_skills.join(", "),
        )
    }

    fn validate(output: &SkillGapReport) -> Result<(), ShapeError> {
        if output.readiness_percent().is_none() {
            return Err(ShapeError::Invalid {
                field: "overallReadiness",
                reason: format!("no percentage in {:?}", output.overall_readiness),
            });
        }
        Ok(())
    }

    fn fallback(&self) -> SkillGapReport {
        // First 60 percent of the list, rounding up.
        let keep = (self.current_skills.len() * 3).div_ceil(5);
        SkillGapReport {
            relevant_skills: self.current_skills.iter().take(keep).cloned().collect(),
            critical_gaps: vec![
                "Communication".to_string(),
                "Leadership".to_string(),
                "Technical Expertise".to_string(),
            ],
            nice_to_have: vec![
                "Project Management".to_string(),
                "Data Analysis".to_string(),
                "Design Thinking".to_string(),
            ],
            learning_priority: vec![
                "Communication".to_string(),
                "Technical Expertise".to_string(),
                "Leadership".to_string(),
            ],
            overall_readiness: "65%".to_string(),
        }
    }
}
