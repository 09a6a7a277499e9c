use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::components::{status_variant, BackLink, Badge, Card, FilterBar};
use super::NotFound;
use crate::catalog::{
    categories_of, compute_project_stats, filter_by_category, find_project, parse_project_id,
    tech_preview, CategoryFilter, Project, PROJECTS,
};
use crate::profile;

const PREVIEW_TECHNOLOGIES: usize = 3;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::All);
    let stats = compute_project_stats(PROJECTS);

    view! {
        <Title text="Projects" />
        <div class="max-w-7xl mx-auto w-full p-6">
            <div class="mb-8">
                <BackLink href="/" label="Back to Home" />
                <h1 class="text-4xl font-bold text-foreground mb-2">"Projects"</h1>
                <p class="text-muted">"Embedded systems and backend solutions I've built"</p>
            </div>
            <FilterBar categories=categories_of(PROJECTS) selected />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    selected
                        .with(|filter| filter_by_category(PROJECTS, filter))
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()
                }}
            </div>
            <div class="mt-12 pt-8 border-t border-muted/30">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    <ProjectStat value=stats.total.to_string() label="Projects Completed" />
                    <ProjectStat value=stats.in_production.to_string() label="In Production" />
                    <ProjectStat value=stats.technologies.to_string() label="Technologies Used" />
                    <ProjectStat
                        value=profile::DATA_POINTS_PROCESSED
                        label="Data Points Processed"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectStat(#[prop(into)] value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-2xl font-bold text-primary mb-1">{value}</div>
            <p class="text-sm text-muted">{label}</p>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let (shown, hidden) = tech_preview(project.technologies, PREVIEW_TECHNOLOGIES);
    view! {
        <Card class="group overflow-hidden" delay_ms={index * 100}>
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-300"
                />
                <div class="absolute top-4 right-4">
                    <Badge variant=status_variant(project.status) class="backdrop-blur-sm">
                        {project.status.as_str()}
                    </Badge>
                </div>
            </div>
            <div class="p-6">
                <div class="flex items-start justify-between mb-3">
                    <h3 class="text-xl font-semibold group-hover:text-primary transition-colors">
                        {project.title}
                    </h3>
                    <Badge class="ml-2">{project.category.as_str()}</Badge>
                </div>
                <p class="text-muted mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-1 mb-4">
                    {shown.iter().map(|tech| view! { <Badge>{*tech}</Badge> }).collect_view()}
                    {(hidden > 0).then(|| view! { <Badge>{format!("+{hidden} more")}</Badge> })}
                </div>
                <div class="grid grid-cols-2 gap-3 mb-4 text-sm">
                    <div>
                        <span class="text-muted">"Duration:"</span>
                        <p class="font-medium">{project.duration}</p>
                    </div>
                    <div>
                        <span class="text-muted">"Impact:"</span>
                        <p class="font-medium">{project.impact}</p>
                    </div>
                </div>
                <div class="flex gap-2">
                    <A
                        href=format!("/projects/{}", project.id)
                        attr:class="flex-1 text-center text-sm px-3 py-1.5 rounded-md border border-muted/50 hover:bg-brightBlack/40"
                    >
                        "↗ View Details"
                    </A>
                    <a
                        href=project.repository
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm px-3 py-1.5 rounded-md hover:bg-brightBlack/40"
                        aria-label="Source repository"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || {
        let raw = params.get().get("id").unwrap_or_default();
        parse_project_id(&raw).and_then(find_project)
    };

    move || match project() {
        Ok(project) => Either::Left(view! { <ProjectDetail project /> }),
        Err(e) => {
            log::debug!("project lookup failed: {e}");
            Either::Right(view! { <NotFound /> })
        }
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <Title text=project.title />
        <div class="max-w-4xl mx-auto w-full p-6">
            <BackLink href="/projects" label="Back to Projects" />
            <img
                src=project.image
                alt=project.title
                class="w-full h-64 object-cover rounded-lg mb-6 animate-fade-in"
            />
            <div class="flex flex-wrap items-center gap-3 mb-4">
                <h1 class="text-3xl font-bold text-foreground">{project.title}</h1>
                <Badge variant=status_variant(project.status)>{project.status.as_str()}</Badge>
                <Badge>{project.category.as_str()}</Badge>
            </div>
            <p class="text-lg mb-4 leading-relaxed">{project.description}</p>
            <p class="text-muted mb-6 leading-relaxed">{project.long_description}</p>
            <div class="grid grid-cols-2 gap-3 mb-6">
                <div>
                    <span class="text-muted">"Duration:"</span>
                    <p class="font-medium">{project.duration}</p>
                </div>
                <div>
                    <span class="text-muted">"Impact:"</span>
                    <p class="font-medium">{project.impact}</p>
                </div>
            </div>
            <h2 class="text-xl font-bold mb-3">"Technologies"</h2>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! { <Badge>{*tech}</Badge> })
                    .collect_view()}
            </div>
            <a
                href=project.repository
                target="_blank"
                rel="noopener noreferrer"
                class="inline-block px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200"
            >
                "View source on GitHub"
            </a>
        </div>
    }
}
