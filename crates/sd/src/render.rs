use owo_colors::OwoColorize;
use sd_core::types::assessment::AssessmentSet;
use sd_core::types::catalog::{CatalogPath, Course, SkillPortfolio};
use sd_core::types::dashboard::DashboardSummary;
use sd_core::types::enums::Difficulty;
use sd_core::types::envelope::Generated;
use sd_core::types::gaps::SkillGapReport;
use sd_core::types::path::GeneratedPath;
use sd_core::types::search::SearchResults;

pub fn generated_path(result: &Generated<GeneratedPath>) {
    provenance(result);
    let path = &result.content;
    println!("{}", "Learning Path".bold());
    println!("  total duration: {}", path.total_duration);
    for (index, milestone) in path.milestones.iter().enumerate() {
        println!(
            "  {}. {} ({}, {})",
            index + 1,
            milestone.title.bold(),
            milestone.duration,
            difficulty_label(milestone.difficulty)
        );
        println!("     {}", milestone.description);
        if !milestone.skills.is_empty() {
            println!("     skills: {}", milestone.skills.join(", "));
        }
    }
    if !path.skills_to_gain.is_empty() {
        println!("  skills to gain: {}", path.skills_to_gain.join(", "));
    }
}

pub fn gap_report(result: &Generated<SkillGapReport>) {
    provenance(result);
    let report = &result.content;
    let percent = report.readiness_percent().unwrap_or(0);
    println!(
        "{} {}",
        "Overall readiness:".bold(),
        readiness_label(percent)
    );
    list_line("relevant skills", &report.relevant_skills);
    list_line("critical gaps", &report.critical_gaps);
    list_line("nice to have", &report.nice_to_have);
    list_line("learning priority", &report.learning_priority);
}

pub fn search_results(result: &Generated<SearchResults>) {
    provenance(result);
    let results = &result.content;

    println!("{}", "Courses".bold());
    if results.courses.is_empty() {
        println!("  {}", "No Courses Found".dimmed());
    }
    for course in &results.courses {
        println!(
            "  {} ({}) {}",
            course.title.bold(),
            course.duration,
            relevance_label(course.relevance_score)
        );
        println!("    {}", course.description);
        if !course.skills.is_empty() {
            println!("    skills: {}", course.skills.join(", "));
        }
    }

    println!("{}", "Learning Paths".bold());
    if results.learning_paths.is_empty() {
        println!("  {}", "No Learning Paths Found".dimmed());
    }
    for path in &results.learning_paths {
        println!(
            "  {} ({}) {}",
            path.title.bold(),
            path.duration,
            relevance_label(path.relevance_score)
        );
        println!("    {}", path.description);
    }

    list_line("recommended skills", &results.recommended_skills);
    println!(
        "  suggested level: {}",
        difficulty_label(results.suggested_level)
    );
}

pub fn assessments(result: &Generated<AssessmentSet>) {
    provenance(result);
    for assessment in &result.content.assessments {
        println!(
            "{} [{}] ({}, {}, {} questions)",
            assessment.title.bold(),
            assessment.kind.as_str(),
            difficulty_label(assessment.difficulty),
            assessment.duration,
            assessment.question_count
        );
        println!("  {}", assessment.description);
        if !assessment.skills_evaluated.is_empty() {
            println!("  evaluates: {}", assessment.skills_evaluated.join(", "));
        }
    }
}

pub fn courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("{}", "No Courses Found".bold());
        println!("Try adjusting your search or filters.");
        return;
    }
    for course in courses {
        println!(
            "{} [{}] {} ({}, {})",
            course.id.dimmed(),
            course.category,
            course.title.bold(),
            course.duration,
            difficulty_label(course.difficulty)
        );
        println!("    {}", course.description);
        println!(
            "    rating {} | {} enrolled | ${}",
            course.rating, course.enrolled, course.price
        );
        if course.progress > 0 {
            let done = if course.completed { " (completed)" } else { "" };
            println!("    progress: {}%{}", course.progress, done);
        }
    }
}

pub fn catalog_paths(paths: &[CatalogPath]) {
    if paths.is_empty() {
        println!("{}", "No Learning Paths Found".bold());
        return;
    }
    for path in paths {
        let status = if path.active { "active" } else { "paused" };
        println!(
            "{} {} ({}, {}, {}% done, {})",
            path.id.dimmed(),
            path.title.bold(),
            path.total_duration,
            difficulty_label(path.difficulty),
            path.progress,
            status
        );
        for milestone in &path.milestones {
            let mark = if milestone.completed { "x" } else { " " };
            println!("    [{}] {} ({})", mark, milestone.title, milestone.duration);
        }
    }
}

pub fn portfolio(portfolio: &SkillPortfolio) {
    println!("{} {}", "Target role:".bold(), portfolio.target_role);
    for skill in &portfolio.skills {
        println!(
            "  {} ({}, {}) {}%",
            skill.name.bold(),
            skill.category,
            skill.level.as_str(),
            skill.progress
        );
    }
}

pub fn dashboard(summary: &DashboardSummary) {
    println!("{}", "Dashboard".bold());
    println!("  skills tracked:   {}", summary.skill_count);
    println!("  average progress: {}%", summary.average_progress);
    println!("  advanced skills:  {}", summary.advanced_skills);
    println!("  learning now:     {}", summary.learning_skills);
    println!("  active paths:     {}", summary.active_paths);
    println!("  hours per week:   {}", summary.weekly_hours);
    println!("  achievements:     {}", summary.achievements);
}

fn provenance<T>(result: &Generated<T>) {
    if result.is_fallback() {
        println!(
            "{}",
            "fallback content: the generator was unreachable, showing built-in suggestions"
                .yellow()
        );
    }
}

fn list_line(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {label}: none");
    } else {
        println!("  {label}: {}", items.join(", "));
    }
}

fn difficulty_label(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Beginner => difficulty.as_str().green().to_string(),
        Difficulty::Intermediate => difficulty.as_str().yellow().to_string(),
        Difficulty::Advanced => difficulty.as_str().red().to_string(),
    }
}

fn relevance_label(score: u8) -> String {
    let text = format!("{score}% match");
    if score >= 90 {
        text.green().to_string()
    } else if score >= 70 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn readiness_label(percent: u8) -> String {
    let text = format!("{percent}%");
    if percent >= 70 {
        text.green().to_string()
    } else if percent >= 40 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: &str = "\u{1b}[32m";
    const YELLOW: &str = "\u{1b}[33m";
    const RED: &str = "\u{1b}[31m";

    #[test]
    fn relevance_bands_pick_colors() {
        assert!(relevance_label(95).starts_with(GREEN));
        assert!(relevance_label(75).starts_with(YELLOW));
        assert!(relevance_label(40).starts_with(RED));
        assert!(relevance_label(95).contains("95% match"));
    }

    #[test]
    fn readiness_bands_pick_colors() {
        assert!(readiness_label(80).starts_with(GREEN));
        assert!(readiness_label(65).starts_with(YELLOW));
        assert!(readiness_label(20).starts_with(RED));
    }

    #[test]
    fn difficulty_labels_follow_level() {
        assert!(difficulty_label(Difficulty::Beginner).starts_with(GREEN));
        assert!(difficulty_label(Difficulty::Intermediate).starts_with(YELLOW));
        assert!(difficulty_label(Difficulty::Advanced).starts_with(RED));
        assert!(difficulty_label(Difficulty::Advanced).contains("advanced"));
    }
}
