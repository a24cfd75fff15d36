use crate::error::ShapeError;
use crate::generate::ContentRequest;
use crate::types::enums::{ContentKind, Difficulty};
use crate::types::io::SearchRequest;
use crate::types::search::{CourseMatch, PathMatch, SearchResults};
use crate::validation::require_score;

impl ContentRequest for SearchRequest {
    type Output = SearchResults;

    const KIND: ContentKind = ContentKind::Search;

    fn prompt(&self) -> String {
        format!(
            r#"Based on the search query: "{query}"

Provide relevant learning recommendations including:
1. Suggested courses that match the query
2. Learning paths that would be beneficial
3. Skills to focus on
4. Difficulty level recommendations

Format as JSON:
{{
  "courses": [
    {{
      "title": "Course Title",
      "description": "Course description",
      "difficulty": "beginner|intermediate|advanced",
      "duration": "estimated duration",
      "skills": ["skill1", "skill2"],
      "relevanceScore": 95
    }}
  ],
  "learningPaths": [
    {{
      "title": "Path Title",
      "description": "Path description",
      "difficulty": "beginner|intermediate|advanced",
      "duration": "estimated duration",
      "relevanceScore": 90
    }}
  ],
  "recommendedSkills": ["skill1", "skill2", "skill3"],
  "suggestedLevel": "beginner|intermediate|advanced"
}}"#,
            query = self.query,
        )
    }

    // Empty course and path lists are valid results; the caller renders an
    // explicit empty state for them.
    fn validate(output: &SearchResults) -> Result<(), ShapeError> {
        for course in &output.courses {
            require_score("courses.relevanceScore", course.relevance_score)?;
        }
        for path in &output.learning_paths {
            require_score("learningPaths.relevanceScore", path.relevance_score)?;
        }
        Ok(())
    }

    fn fallback(&self) -> SearchResults {
        SearchResults {
            courses: vec![
                CourseMatch {
                    title: format!("Introduction to {}", self.query),
                    description: "A comprehensive course covering the fundamentals".to_string(),
                    difficulty: Difficulty::Beginner,
                    duration: "4-6 weeks".to_string(),
                    skills: vec!["Fundamentals".to_string(), "Best Practices".to_string()],
                    relevance_score: 95,
                },
                CourseMatch {
                    title: format!("Advanced {} Techniques", self.query),
                    description: "Deep dive into advanced concepts and applications".to_string(),
                    difficulty: Difficulty::Advanced,
                    duration: "6-8 weeks".to_string(),
                    skills: vec![
                        "Advanced Concepts".to_string(),
                        "Real-world Applications".to_string(),
                    ],
                    relevance_score: 88,
                },
            ],
            learning_paths: vec![PathMatch {
                title: format!("{} Mastery Path", self.query),
                description: "Complete journey from beginner to expert".to_string(),
                difficulty: Difficulty::Beginner,
                duration: "12-16 weeks".to_string(),
                relevance_score: 92,
            }],
            recommended_skills: vec![
                "Fundamentals".to_string(),
                "Problem Solving".to_string(),
                "Critical Thinking".to_string(),
            ],
            suggested_level: Difficulty::Beginner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
        }
    }

    #[test]
    fn prompt_quotes_the_query() {
        let prompt = request("rust async").prompt();
        assert!(prompt.contains("search query: \"rust async\""));
        assert!(prompt.contains("\"relevanceScore\""));
        assert!(prompt.contains("\"suggestedLevel\""));
    }

    #[test]
    fn fallback_builds_titles_from_query() {
        let results = request("Python").fallback();
        assert_eq!(results.courses[0].title, "Introduction to Python");
        assert_eq!(results.courses[0].relevance_score, 95);
        assert_eq!(results.courses[1].title, "Advanced Python Techniques");
        assert_eq!(results.courses[1].relevance_score, 88);
        assert_eq!(results.learning_paths[0].title, "Python Mastery Path");
        assert_eq!(results.learning_paths[0].relevance_score, 92);
        assert_eq!(results.suggested_level, Difficulty::Beginner);
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(request("Python").fallback(), request("Python").fallback());
    }

    #[test]
    fn validate_rejects_out_of_range_scores() {
        let mut results = request("Python").fallback();
        results.courses[0].relevance_score = 150;
        assert!(SearchRequest::validate(&results).is_err());
    }

    #[test]
    fn validate_accepts_empty_result_lists() {
        let mut results = request("Python").fallback();
        results.courses.clear();
        results.learning_paths.clear();
        assert!(SearchRequest::validate(&results).is_ok());
    }
}
