use crate::catalog::Catalog;
use crate::types::dashboard::DashboardSummary;
use crate::types::enums::SkillLevel;

// Tracked outside the catalog; no session history exists to derive them from.
const WEEKLY_HOURS: f64 = 12.5;
const ACHIEVEMENTS: u32 = 8;

pub fn summarize(catalog: &Catalog) -> DashboardSummary {
    let portfolio = catalog.skills();
    let skills = portfolio.skills;
    let paths = catalog.paths();

    let average_progress = if skills.is_empty() {
        0
    } else {
        let total: u32 = skills.iter().map(|skill| u32::from(skill.progress)).sum();
        (f64::from(total) / skills.len() as f64).round() as u8
    };

    DashboardSummary {
        skill_count: skills.len() as u32,
        average_progress,
        advanced_skills: skills
            .iter()
            .filter(|skill| {
                skill.level == SkillLevel::Advanced || skill.level == SkillLevel::Expert
            })
            .count() as u32,
        learning_skills: skills
            .iter()
            .filter(|skill| skill.level == SkillLevel::Beginner)
            .count() as u32,
        active_paths: paths.iter().filter(|path| path.active).count() as u32,
        weekly_hours: WEEKLY_HOURS,
        achievements: ACHIEVEMENTS,
        skills,
        paths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_over_builtin_catalog() {
        let summary = summarize(&Catalog::builtin());
        assert_eq!(summary.skill_count, 6);
        assert_eq!(summary.average_progress, 58);
        assert_eq!(summary.advanced_skills, 1);
        assert_eq!(summary.learning_skills, 2);
        assert_eq!(summary.active_paths, 1);
        assert!((summary.weekly_hours - 12.5).abs() < f64::EPSILON);
        assert_eq!(summary.achievements, 8);
        assert_eq!(summary.skills.len(), 6);
        assert_eq!(summary.paths.len(), 2);
    }
}
