mod data;
mod stats;

pub use data::{FEATURED_SKILLS, PROJECTS, SKILLS};
pub use stats::{
    category_summaries, compute_category_average, compute_project_stats, compute_skill_stats,
    CategorySummary, ProjectStats, SkillStats, EXPERT_LEVEL,
};

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Embedded,
    Backend,
    ToolsDevOps,
    Communication,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Embedded,
        Category::Backend,
        Category::ToolsDevOps,
        Category::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Embedded => "Embedded",
            Category::Backend => "Backend",
            Category::ToolsDevOps => "Tools & DevOps",
            Category::Communication => "Communication",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Production,
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Production => "Production",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percent, 0 to 100.
    pub level: u8,
    pub category: Category,
    pub experience: &'static str,
    pub project_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Category,
    pub status: ProjectStatus,
    pub duration: &'static str,
    /// Display text only, units differ between projects.
    pub impact: &'static str,
    pub repository: &'static str,
    pub image: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("cannot average an empty set of skills")]
    EmptyInput,
    #[error("no project with id {0}")]
    ProjectNotFound(u32),
    #[error("invalid project id: {0:?}")]
    InvalidProjectId(String),
}

/// Records that belong to exactly one display category.
pub trait Categorized {
    fn category(&self) -> Category;
}

impl Categorized for Skill {
    fn category(&self) -> Category {
        self.category
    }
}

impl Categorized for Project {
    fn category(&self) -> Category {
        self.category
    }
}

pub const ALL_SELECTOR: &str = "All";

/// The value of a category selector: every record, or one category by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_SELECTOR,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name.as_str() == category.as_str(),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            ALL_SELECTOR => Self::All,
            name => Self::Named(name.to_string()),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Named(value.as_str().to_string())
    }
}

/// Records matching `filter`, in their original order. A name outside the
/// category set matches nothing.
pub fn filter_by_category<'a, T: Categorized>(
    items: &'a [T],
    filter: &CategoryFilter,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

/// Distinct categories of `items` in order of first appearance.
pub fn categories_of<T: Categorized>(items: &[T]) -> Vec<Category> {
    items.iter().fold(Vec::new(), |mut acc, item| {
        let category = item.category();
        if !acc.contains(&category) {
            acc.push(category);
        }
        acc
    })
}

/// Groups `items` by category. Recomputed on every call.
pub fn group_by_category<T: Categorized>(items: &[T]) -> Vec<(Category, Vec<&T>)> {
    categories_of(items)
        .into_iter()
        .map(|category| {
            let members = items
                .iter()
                .filter(|item| item.category() == category)
                .collect();
            (category, members)
        })
        .collect()
}

pub fn find_skill(name: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.name == name)
}

pub fn featured_skills() -> Vec<&'static Skill> {
    FEATURED_SKILLS
        .iter()
        .filter_map(|name| find_skill(name))
        .collect()
}

pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..PROJECTS.len().min(3)]
}

pub fn find_project(id: u32) -> Result<&'static Project, CatalogError> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or(CatalogError::ProjectNotFound(id))
}

pub fn parse_project_id(raw: &str) -> Result<u32, CatalogError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CatalogError::InvalidProjectId(raw.to_string()))
}

/// First `limit` technologies and how many were left out.
pub fn tech_preview<'a>(technologies: &'a [&'a str], limit: usize) -> (&'a [&'a str], usize) {
    let shown = technologies.len().min(limit);
    (&technologies[..shown], technologies.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let all = filter_by_category(SKILLS, &CategoryFilter::All);
        assert_eq!(all.len(), SKILLS.len());
        for (filtered, original) in all.iter().zip(SKILLS.iter()) {
            assert_eq!(*filtered, original);
        }

        let projects = filter_by_category(PROJECTS, &CategoryFilter::from("All"));
        let ids = projects.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_by_each_category() {
        for category in Category::ALL {
            let filter = CategoryFilter::from(category);
            let filtered = filter_by_category(SKILLS, &filter);
            assert!(filtered.iter().all(|s| s.category == category));
            let expected = SKILLS.iter().filter(|s| s.category == category).count();
            assert_eq!(filtered.len(), expected);
        }

        let backend = filter_by_category(PROJECTS, &CategoryFilter::from("Backend"));
        let ids = backend.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let embedded = filter_by_category(SKILLS, &CategoryFilter::from("Embedded"));
        let names = embedded.iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(names[0], "C/C++");
        assert_eq!(names[7], "Embedded Linux");
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let filter = CategoryFilter::from("NonexistentCategory");
        assert!(filter_by_category(SKILLS, &filter).is_empty());
        assert!(filter_by_category(PROJECTS, &filter).is_empty());
        // names are matched exactly
        let filter = CategoryFilter::from("backend");
        assert!(filter_by_category(PROJECTS, &filter).is_empty());
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(
            CategoryFilter::from(Category::ToolsDevOps).label(),
            "Tools & DevOps"
        );
    }

    #[test]
    fn test_categories_of() {
        assert_eq!(categories_of(SKILLS), Category::ALL.to_vec());
        assert_eq!(
            categories_of(PROJECTS),
            vec![Category::Embedded, Category::Backend]
        );
        assert!(categories_of::<Skill>(&[]).is_empty());
    }

    #[test]
    fn test_group_by_category() {
        let groups = group_by_category(SKILLS);
        assert_eq!(groups.len(), 4);
        for (category, members) in &groups {
            assert_eq!(members.len(), 8);
            assert!(members.iter().all(|s| s.category == *category));
        }
        let total = groups.iter().map(|(_, m)| m.len()).sum::<usize>();
        assert_eq!(total, 32);
    }

    #[test]
    fn test_catalog_invariants() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_featured() {
        let names = featured_skills().iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["C/C++", "Rust", "Python", "ARM Cortex-M"]);
        let ids = featured_projects().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(find_skill("COBOL").is_none());
    }

    #[test]
    fn test_find_project() {
        assert_eq!(find_project(4).map(|p| p.title), Ok("Distributed Cache System"));
        assert_eq!(find_project(42), Err(CatalogError::ProjectNotFound(42)));
    }

    #[test]
    fn test_parse_project_id() {
        assert_eq!(parse_project_id("3"), Ok(3));
        assert_eq!(parse_project_id(" 5 "), Ok(5));
        assert_eq!(
            parse_project_id("abc"),
            Err(CatalogError::InvalidProjectId("abc".to_string()))
        );
        assert!(parse_project_id("-1").is_err());
        assert!(parse_project_id("").is_err());
    }

    #[test]
    fn test_tech_preview() {
        let techs = ["Rust", "Redis", "PostgreSQL", "Docker", "Kubernetes"];
        let (shown, hidden) = tech_preview(&techs, 3);
        assert_eq!(shown, &["Rust", "Redis", "PostgreSQL"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = tech_preview(&techs[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);
    }
}
