use crate::error::ShapeError;
use crate::generate::ContentRequest;
use crate::types::assessment::{Assessment, AssessmentSet};
use crate::types::enums::{AssessmentKind, ContentKind};
use crate::types::io::AssessmentRequest;
use crate::validation::{require_items, require_positive, require_text};

impl ContentRequest for AssessmentRequest {
    type Output = AssessmentSet;

    const KIND: ContentKind = ContentKind::Assessments;

    fn prompt(&self) -> String {
        format!(
            r#"Generate skill assessments for a {level} level learner.

Provide:
1. Assessment categories (Programming, Design, Data Science, etc.)
2. Specific assessments for each category
3. Estimated completion time
4. Skills being evaluated

Format as JSON:
{{
  "assessments": [
    {{
      "id": "unique_id",
      "title": "Assessment Title",
      "category": "Programming",
      "description": "What this assessment evaluates",
      "difficulty": "beginner|intermediate|advanced",
      "duration": "estimated time",
      "skillsEvaluated": ["skill1", "skill2"],
      "questionCount": 20,
      "type": "multiple-choice|coding|project"
    }}
  ]
}}"#,
            level = self.level.as_str(),
        )
    }

    fn validate(output: &AssessmentSet) -> Result<(), ShapeError> {
        require_items("assessments", &output.assessments)?;
        for assessment in &output.assessments {
            require_text("assessments.id", &assessment.id)?;
            require_positive("assessments.questionCount", assessment.question_count)?;
        }
        Ok(())
    }

    fn fallback(&self) -> AssessmentSet {
        AssessmentSet {
            assessments: vec![
                Assessment {
                    id: "prog-basics".to_string(),
                    title: "Programming Fundamentals".to_string(),
                    category: "Programming".to_string(),
                    description: "Evaluate your understanding of basic programming concepts"
                        .to_string(),
                    difficulty: self.level,
                    duration: "30 minutes".to_string(),
                    skills_evaluated: vec![
                        "Variables".to_string(),
                        "Functions".to_string(),
                        "Control Flow".to_string(),
                    ],
                    question_count: 20,
                    kind: AssessmentKind::MultipleChoice,
                },
                Assessment {
                    id: "web-dev".to_string(),
                    title: "Web Development Skills".to_string(),
                    category: "Web Development".to_string(),
                    description: "Test your knowledge of HTML, CSS, and JavaScript".to_string(),
                    difficulty: self.level,
                    duration: "45 minutes".to_string(),
                    skills_evaluated: vec![
                        "HTML".to_string(),
                        "CSS".to_string(),
                        "JavaScript".to_string(),
                    ],
                    question_count: 25,
                    kind: AssessmentKind::Coding,
                },
                Assessment {
                    id: "data-analysis".to_string(),
                    title: "Data Analysis Fundamentals".to_string(),
                    category: "Data Science".to_string(),
                    description: "Assess your data analysis and visualization skills".to_string(),
                    difficulty: self.level,
                    duration: "40 minutes".to_string(),
                    skills_evaluated: vec![
                        "Data Analysis".to_string(),
                        "Statistics".to_string(),
                        "Visualization".to_string(),
                    ],
                    question_count: 22,
                    kind: AssessmentKind::MultipleChoice,
                },
            ],
        }
    }
}
