use crate::error::ShapeError;
use crate::generate::ContentRequest;
use crate::types::enums::{ContentKind, Difficulty};
use crate::types::io::PathRequest;
use crate::types::path::{GeneratedPath, Milestone};
use crate::validation::{require_items, require_text};

impl ContentRequest for PathRequest {
    type Output = GeneratedPath;

    const KIND: ContentKind = ContentKind::LearningPath;

    fn prompt(&self) -> String {
        format!(
            r#"Create a personalized learning path for someone with the following profile:

Current Skills: {skills}
Current Level: {level}
Learning Goals: {goals}

Please provide:
1. A structured learning path with 5-7 key milestones
2. Recommended resources for each milestone
3. Estimated time to complete each milestone
4. Skills that will be developed at each stage

Format the response as a JSON object with the following structure:
{{
  "learningPath": [
    {{
      "title": "Milestone Title",
      "description": "Description of what will be learned",
      "duration": "Estimated time",
      "skills": ["skill1", "skill2"],
      "resources": ["resource1", "resource2"],
      "difficulty": "beginner|intermediate|advanced"
    }}
  ],
  "totalDuration": "Total estimated time",
  "skillsToGain": ["skill1", "skill2", "skill3"]
}}"#,
            skills = self.skills.join(", "),
            level = self.level.as_str(),
            goals = self.goals.join(", "),
        )
    }

    fn validate(output: &GeneratedPath) -> Result<(), ShapeError> {
        require_items("learningPath", &output.milestones)?;
        for milestone in &output.milestones {
            require_text("learningPath.title", &milestone.title)?;
        }
        require_text("totalDuration", &output.total_duration)?;
        Ok(())
    }

    fn fallback(&self) -> GeneratedPath {
        let mut skills_to_gain = self.skills.clone();
        skills_to_gain.extend(self.goals.iter().cloned());
        GeneratedPath {
            milestones: vec![
                Milestone {
                    title: "Foundation Building".to_string(),
                    description: "Strengthen your core skills and establish a solid foundation"
                        .to_string(),
                    duration: "2-3 weeks".to_string(),
                    skills: vec!["Problem Solving".to_string(), "Critical Thinking".to_string()],
                    resources: vec![
                        "Online Courses".to_string(),
                        "Practice Exercises".to_string(),
                    ],
                    difficulty: Difficulty::Beginner,
                },
                Milestone {
                    title: "Skill Development".to_string(),
                    description: "Focus on developing key technical and soft skills".to_string(),
                    duration: "4-6 weeks".to_string(),
                    skills: self.skills.iter().take(3).cloned().collect(),
                    resources: vec![
                        "Tutorials".to_string(),
                        "Projects".to_string(),
                        "Mentorship".to_string(),
                    ],
                    difficulty: Difficulty::Intermediate,
                },
                Milestone {
                    title: "Advanced Application".to_string(),
                    description: "Apply your skills in real-world scenarios".to_string(),
                    duration: "3-4 weeks".to_string(),
                    skills: vec!["Project Management".to_string(), "Leadership".to_string()],
                    resources: vec![
                        "Capstone Project".to_string(),
                        "Industry Certification".to_string(),
                    ],
                    difficulty: Difficulty::Advanced,
                },
            ],
            total_duration: "9-13 weeks".to_string(),
            skills_to_gain,
        }
    }
}
