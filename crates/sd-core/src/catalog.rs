use crate::error::CatalogError;
use crate::types::catalog::{CatalogPath, Course, PathMilestone, SkillEntry, SkillPortfolio};
use crate::types::enums::{Difficulty, SkillLevel};
use crate::types::io::CourseFilter;

/// In-memory course, path, and skill data. Built once per deck; lookups
/// clone so callers never borrow into the hub.
pub struct Catalog {
    courses: Vec<Course>,
    paths: Vec<CatalogPath>,
    skills: Vec<SkillEntry>,
    target_role: String,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            courses: builtin_courses(),
            paths: builtin_paths(),
            skills: builtin_skills(),
            target_role: "Full Stack Developer".to_string(),
        }
    }

    pub fn courses(&self, filter: &CourseFilter) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| matches_filter(course, filter))
            .cloned()
            .collect()
    }

    pub fn course(&self, id: &str) -> Result<Course, CatalogError> {
        self.courses
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::CourseNotFound { id: id.to_string() })
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .courses
            .iter()
            .map(|course| course.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn paths(&self) -> Vec<CatalogPath> {
        self.paths.clone()
    }

    pub fn path(&self, id: &str) -> Result<CatalogPath, CatalogError> {
        self.paths
            .iter()
            .find(|path| path.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::PathNotFound { id: id.to_string() })
    }

    pub fn skills(&self) -> SkillPortfolio {
        SkillPortfolio {
            skills: self.skills.clone(),
            target_role: self.target_role.clone(),
        }
    }
}

fn matches_filter(course: &Course, filter: &CourseFilter) -> bool {
    if let Some(query) = &filter.query {
        let query = query.to_lowercase();
        let matches = course.title.to_lowercase().contains(&query)
            || course.description.to_lowercase().contains(&query)
            || course
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&query));
        if !matches {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if course.category != *category {
            return false;
        }
    }
    if let Some(difficulty) = filter.difficulty {
        if course.difficulty != difficulty {
            return false;
        }
    }
    true
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn builtin_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "Complete React Developer Course 2024".to_string(),
            description: "Master React from basics to advanced concepts including hooks, context, and testing".to_string(),
            instructor: "Sarah Johnson".to_string(),
            duration: "40 hours".to_string(),
            difficulty: Difficulty::Intermediate,
            rating: 4.8,
            enrolled: 15420,
            skills: strings(&["React", "JavaScript", "JSX", "Hooks", "Context API"]),
            category: "Frontend Development".to_string(),
            price: 89.99,
            progress: 65,
            completed: false,
        },
        Course {
            id: "2".to_string(),
            title: "Python for Data Science Masterclass".to_string(),
            description: "Learn Python programming with focus on data analysis and machine learning".to_string(),
            instructor: "Dr. Michael Chen".to_string(),
            duration: "35 hours".to_string(),
            difficulty: Difficulty::Beginner,
            rating: 4.9,
            enrolled: 23150,
            skills: strings(&["Python", "Pandas", "NumPy", "Matplotlib", "Data Analysis"]),
            category: "Data Science".to_string(),
            price: 79.99,
            progress: 0,
            completed: false,
        },
        Course {
            id: "3".to_string(),
            title: "Advanced JavaScript Concepts".to_string(),
            description: "Deep dive into closures, prototypes, async programming, and modern ES6+ features".to_string(),
            instructor: "Alex Rodriguez".to_string(),
            duration: "25 hours".to_string(),
            difficulty: Difficulty::Advanced,
            rating: 4.7,
            enrolled: 8930,
            skills: strings(&["JavaScript", "ES6+", "Async/Await", "Closures", "Prototypes"]),
            category: "Programming".to_string(),
            price: 69.99,
            progress: 100,
            completed: true,
        },
        Course {
            id: "4".to_string(),
            title: "Node.js Backend Development".to_string(),
            description: "Build scalable backend applications with Node.js, Express, and MongoDB".to_string(),
            instructor: "Emma Wilson".to_string(),
            duration: "45 hours".to_string(),
            difficulty: Difficulty::Intermediate,
            rating: 4.6,
            enrolled: 12340,
            skills: strings(&["Node.js", "Express", "MongoDB", "REST APIs", "Authentication"]),
            category: "Backend Development".to_string(),
            price: 94.99,
            progress: 30,
            completed: false,
        },
        Course {
            id: "5".to_string(),
            title: "Machine Learning Fundamentals".to_string(),
            description: "Introduction to ML algorithms, supervised and unsupervised learning".to_string(),
            instructor: "Prof. David Kim".to_string(),
            duration: "50 hours".to_string(),
            difficulty: Difficulty::Intermediate,
            rating: 4.8,
            enrolled: 18750,
            skills: strings(&["Machine Learning", "Python", "Scikit-learn", "TensorFlow", "Statistics"]),
            category: "Machine Learning".to_string(),
            price: 109.99,
            progress: 0,
            completed: false,
        },
        Course {
            id: "6".to_string(),
            title: "UI/UX Design Principles".to_string(),
            description: "Learn design thinking, user research, and create beautiful user interfaces".to_string(),
            instructor: "Lisa Park".to_string(),
            duration: "30 hours".to_string(),
            difficulty: Difficulty::Beginner,
            rating: 4.9,
            enrolled: 9870,
            skills: strings(&["UI Design", "UX Research", "Figma", "Design Systems", "Prototyping"]),
            category: "Design".to_string(),
            price: 74.99,
            progress: 85,
            completed: false,
        },
        Course {
            id: "7".to_string(),
            title: "DevOps and Cloud Computing".to_string(),
            description: "Master Docker, Kubernetes, AWS, and CI/CD pipelines".to_string(),
            instructor: "Mark Thompson".to_string(),
            duration: "55 hours".to_string(),
            difficulty: Difficulty::Advanced,
            rating: 4.7,
            enrolled: 7650,
            skills: strings(&["Docker", "Kubernetes", "AWS", "CI/CD", "Infrastructure"]),
            category: "DevOps".to_string(),
            price: 119.99,
            progress: 0,
            completed: false,
        },
        Course {
            id: "8".to_string(),
            title: "Mobile App Development with React Native".to_string(),
            description: "Build cross-platform mobile apps using React Native".to_string(),
            instructor: "Jennifer Lee".to_string(),
            duration: "42 hours".to_string(),
            difficulty: Difficulty::Intermediate,
            rating: 4.6,
            enrolled: 11200,
            skills: strings(&["React Native", "Mobile Development", "iOS", "Android", "Redux"]),
            category: "Mobile Development".to_string(),
            price: 89.99,
            progress: 0,
            completed: false,
        },
    ]
}

fn builtin_paths() -> Vec<CatalogPath> {
    vec![
        CatalogPath {
            id: "1".to_string(),
            title: "Full Stack Developer Path".to_string(),
            description: "Master both frontend and backend development with modern technologies"
                .to_string(),
            milestones: vec![
                PathMilestone {
                    title: "Frontend Fundamentals".to_string(),
                    description: "Learn HTML, CSS, and JavaScript basics".to_string(),
                    duration: "3 weeks".to_string(),
                    skills: strings(&["HTML", "CSS", "JavaScript"]),
                    difficulty: Difficulty::Beginner,
                    completed: true,
                },
                PathMilestone {
                    title: "React Development".to_string(),
                    description: "Build interactive UIs with React".to_string(),
                    duration: "4 weeks".to_string(),
                    skills: strings(&["React", "JSX", "State Management"]),
                    difficulty: Difficulty::Intermediate,
                    completed: true,
                },
                PathMilestone {
                    title: "Backend with Node.js".to_string(),
                    description: "Create server-side applications".to_string(),
                    duration: "3 weeks".to_string(),
                    skills: strings(&["Node.js", "Express", "APIs"]),
                    difficulty: Difficulty::Intermediate,
                    completed: false,
                },
                PathMilestone {
                    title: "Database Integration".to_string(),
                    description: "Work with databases and data persistence".to_string(),
                    duration: "2 weeks".to_string(),
                    skills: strings(&["MongoDB", "SQL", "Database Design"]),
                    difficulty: Difficulty::Intermediate,
                    completed: false,
                },
            ],
            total_duration: "12 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            progress: 50,
            skills_to_gain: strings(&["React", "Node.js", "MongoDB", "API Development"]),
            active: true,
        },
        CatalogPath {
            id: "2".to_string(),
            title: "AI/ML Fundamentals".to_string(),
            description: "Learn the basics of artificial intelligence and machine learning"
                .to_string(),
            milestones: vec![
                PathMilestone {
                    title: "Python for Data Science".to_string(),
                    description: "Master Python programming for data analysis".to_string(),
                    duration: "2 weeks".to_string(),
                    skills: strings(&["Python", "NumPy", "Pandas"]),
                    difficulty: Difficulty::Beginner,
                    completed: false,
                },
                PathMilestone {
                    title: "Statistics & Probability".to_string(),
                    description: "Understand statistical concepts for ML".to_string(),
                    duration: "2 weeks".to_string(),
                    skills: strings(&["Statistics", "Probability", "Data Analysis"]),
                    difficulty: Difficulty::Intermediate,
                    completed: false,
                },
                PathMilestone {
                    title: "Machine Learning Algorithms".to_string(),
                    description: "Learn core ML algorithms and techniques".to_string(),
                    duration: "3 weeks".to_string(),
                    skills: strings(&[
                        "Supervised Learning",
                        "Unsupervised Learning",
                        "Model Evaluation",
                    ]),
                    difficulty: Difficulty::Intermediate,
                    completed: false,
                },
                PathMilestone {
                    title: "Deep Learning Basics".to_string(),
                    description: "Introduction to neural networks".to_string(),
                    duration: "3 weeks".to_string(),
                    skills: strings(&["Neural Networks", "TensorFlow", "Deep Learning"]),
                    difficulty: Difficulty::Advanced,
                    completed: false,
                },
            ],
            total_duration: "10 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            progress: 0,
            skills_to_gain: strings(&["Python", "Machine Learning", "TensorFlow", "Data Science"]),
            active: false,
        },
    ]
}

fn builtin_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry {
            id: "1".to_string(),
            name: "JavaScript".to_string(),
            level: SkillLevel::Intermediate,
            category: "Programming".to_string(),
            progress: 75,
        },
        SkillEntry {
            id: "2".to_string(),
            name: "React".to_string(),
            level: SkillLevel::Intermediate,
            category: "Frontend".to_string(),
            progress: 65,
        },
        SkillEntry {
            id: "3".to_string(),
            name: "Python".to_string(),
            level: SkillLevel::Beginner,
            category: "Programming".to_string(),
            progress: 40,
        },
        SkillEntry {
            id: "4".to_string(),
            name: "Machine Learning".to_string(),
            level: SkillLevel::Beginner,
            category: "AI/ML".to_string(),
            progress: 25,
        },
        SkillEntry {
            id: "5".to_string(),
            name: "Node.js".to_string(),
            level: SkillLevel::Intermediate,
            category: "Backend".to_string(),
            progress: 55,
        },
        SkillEntry {
            id: "6".to_string(),
            name: "SQL".to_string(),
            level: SkillLevel::Advanced,
            category: "Database".to_string(),
            progress: 85,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_filter() -> CourseFilter {
        CourseFilter {
            query: None,
            category: None,
            difficulty: None,
        }
    }

    #[test]
    fn catalog_holds_expected_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.courses(&no_filter()).len(), 8);
        assert_eq!(catalog.paths().len(), 2);
        assert_eq!(catalog.skills().skills.len(), 6);
        assert_eq!(catalog.skills().target_role, "Full Stack Developer");
    }

    #[test]
    fn query_matches_title_description_and_skills() {
        let catalog = Catalog::builtin();
        let filter = CourseFilter {
            query: Some("react".to_string()),
            category: None,
            difficulty: None,
        };
        let hits = catalog.courses(&filter);
        // Title hits for courses 1 and 8, skill hit for nothing new.
        assert_eq!(hits.len(), 2);

        let filter = CourseFilter {
            query: Some("pandas".to_string()),
            category: None,
            difficulty: None,
        };
        let hits = catalog.courses(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn category_and_difficulty_narrow_results() {
        let catalog = Catalog::builtin();
        let filter = CourseFilter {
            query: None,
            category: Some("Data Science".to_string()),
            difficulty: None,
        };
        assert_eq!(catalog.courses(&filter).len(), 1);

        let filter = CourseFilter {
            query: None,
            category: None,
            difficulty: Some(Difficulty::Advanced),
        };
        let hits = catalog.courses(&filter);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.difficulty == Difficulty::Advanced));
    }

    #[test]
    fn lookup_by_id_and_missing_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.course("3").unwrap().title, "Advanced JavaScript Concepts");
        assert!(catalog.course("99").is_err());
        assert_eq!(catalog.path("1").unwrap().milestones.len(), 4);
        assert!(catalog.path("99").is_err());
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = Catalog::builtin();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 8);
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn progress_overlay_is_applied() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.course("1").unwrap().progress, 65);
        let third = catalog.course("3").unwrap();
        assert_eq!(third.progress, 100);
        assert!(third.completed);
        assert_eq!(catalog.course("7").unwrap().progress, 0);
    }
}
