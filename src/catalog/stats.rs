use std::collections::HashSet;

use super::{group_by_category, CatalogError, Category, Project, ProjectStatus, Skill};

/// Skills at or above this level count as expert.
pub const EXPERT_LEVEL: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillStats {
    pub average_level: u32,
    pub total_projects: u32,
    pub total_skills: usize,
    pub expert_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub in_production: usize,
    pub technologies: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub skill_count: usize,
    pub average_level: u32,
}

// round half up, inputs are non-negative
fn rounded_mean(sum: u64, count: u64) -> u32 {
    ((2 * sum + count) / (2 * count)) as u32
}

pub fn compute_skill_stats<'a, I>(skills: I) -> Result<SkillStats, CatalogError>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let (level_sum, total_projects, total_skills, expert_count) = skills.into_iter().fold(
        (0u64, 0u32, 0usize, 0usize),
        |(levels, projects, count, experts), skill| {
            (
                levels + u64::from(skill.level),
                projects + skill.project_count,
                count + 1,
                experts + usize::from(skill.level >= EXPERT_LEVEL),
            )
        },
    );
    if total_skills == 0 {
        return Err(CatalogError::EmptyInput);
    }
    Ok(SkillStats {
        average_level: rounded_mean(level_sum, total_skills as u64),
        total_projects,
        total_skills,
        expert_count,
    })
}

pub fn compute_category_average<'a, I>(skills: I) -> Result<u32, CatalogError>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let (sum, count) = skills
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), skill| {
            (sum + u64::from(skill.level), count + 1)
        });
    if count == 0 {
        return Err(CatalogError::EmptyInput);
    }
    Ok(rounded_mean(sum, count))
}

/// Per-category overview, in catalog order. Empty categories never appear
/// since groups are derived from the records themselves.
pub fn category_summaries(skills: &[Skill]) -> Vec<CategorySummary> {
    group_by_category(skills)
        .into_iter()
        .filter_map(|(category, members)| {
            let average_level = compute_category_average(members.iter().copied()).ok()?;
            Some(CategorySummary {
                category,
                skill_count: members.len(),
                average_level,
            })
        })
        .collect()
}

pub fn compute_project_stats<'a, I>(projects: I) -> ProjectStats
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut technologies = HashSet::new();
    let mut total = 0;
    let mut in_production = 0;
    for project in projects {
        total += 1;
        if project.status == ProjectStatus::Production {
            in_production += 1;
        }
        technologies.extend(project.technologies.iter().copied());
    }
    ProjectStats {
        total,
        in_production,
        technologies: technologies.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter_by_category, CategoryFilter, PROJECTS, SKILLS};

    fn skill_with_level(level: u8) -> Skill {
        Skill {
            name: "test",
            level,
            category: Category::Embedded,
            experience: "1+ years",
            project_count: 1,
        }
    }

    #[test]
    fn test_skill_stats_small_set() {
        let skills = [95, 88, 90, 92, 85, 80].map(skill_with_level);
        let stats = compute_skill_stats(&skills).unwrap();
        assert_eq!(stats.average_level, 88);
        assert_eq!(stats.total_skills, 6);
        assert_eq!(stats.expert_count, 5);
        assert_eq!(stats.total_projects, 6);
    }

    #[test]
    fn test_skill_stats_full_catalog() {
        let stats = compute_skill_stats(SKILLS).unwrap();
        assert_eq!(stats.total_skills, 32);
        assert_eq!(stats.average_level, 83);
        assert_eq!(stats.total_projects, 349);
        assert_eq!(stats.expert_count, 15);
    }

    #[test]
    fn test_skill_stats_all_filter_matches_catalog() {
        let all = filter_by_category(SKILLS, &CategoryFilter::All);
        let stats = compute_skill_stats(all.iter().copied()).unwrap();
        assert_eq!(stats.total_skills, 32);
    }

    #[test]
    fn test_skill_stats_idempotent() {
        let first = compute_skill_stats(SKILLS);
        let second = compute_skill_stats(SKILLS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_expert_threshold_is_inclusive() {
        let skills = [84, 85].map(skill_with_level);
        let stats = compute_skill_stats(&skills).unwrap();
        assert_eq!(stats.expert_count, 1);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let skills = [1, 2].map(skill_with_level);
        assert_eq!(compute_category_average(&skills), Ok(2));
        let skills = [80, 81, 81].map(skill_with_level);
        assert_eq!(compute_category_average(&skills), Ok(81));
        let skills = [80, 80, 81].map(skill_with_level);
        assert_eq!(compute_category_average(&skills), Ok(80));
    }

    #[test]
    fn test_empty_input() {
        let none: [Skill; 0] = [];
        assert_eq!(compute_skill_stats(&none), Err(CatalogError::EmptyInput));
        assert_eq!(compute_category_average(&none), Err(CatalogError::EmptyInput));
    }

    #[test]
    fn test_category_averages() {
        let averages = Category::ALL
            .iter()
            .map(|c| {
                let members = filter_by_category(SKILLS, &CategoryFilter::from(*c));
                compute_category_average(members.iter().copied()).unwrap()
            })
            .collect::<Vec<_>>();
        assert_eq!(averages, vec![86, 83, 82, 83]);
    }

    #[test]
    fn test_category_summaries_match_category_average() {
        let summaries = category_summaries(SKILLS);
        assert_eq!(summaries.len(), 4);
        for summary in summaries {
            let members = filter_by_category(SKILLS, &CategoryFilter::from(summary.category));
            assert_eq!(summary.skill_count, members.len());
            assert_eq!(
                Ok(summary.average_level),
                compute_category_average(members.iter().copied())
            );
        }
    }

    #[test]
    fn test_project_stats() {
        let stats = compute_project_stats(PROJECTS);
        assert_eq!(
            stats,
            ProjectStats {
                total: 6,
                in_production: 2,
                technologies: 22,
            }
        );
    }

    #[test]
    fn test_project_stats_distinct_technologies_are_case_sensitive() {
        let mut first = PROJECTS[0].clone();
        first.technologies = &["Rust", "rust"];
        let mut second = PROJECTS[1].clone();
        second.technologies = &["Rust"];
        let stats = compute_project_stats(&[first, second]);
        assert_eq!(stats.technologies, 2);
        assert_eq!(stats.in_production, 1);
    }

    #[test]
    fn test_project_stats_empty() {
        let none: [Project; 0] = [];
        let stats = compute_project_stats(&none);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.technologies, 0);
    }
}
