use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::components::{
    category_color, category_icon, BackLink, Badge, Card, FilterBar, ProgressBar, StatCard,
};
use crate::catalog::{
    category_summaries, compute_skill_stats, filter_by_category, Category, CategoryFilter, Skill,
    SkillStats, SKILLS,
};
use crate::profile::CURRENTLY_LEARNING;

// wait for the cards to fade in before the bars grow
const PROGRESS_DELAY_MS: f64 = 500.0;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::All);
    let (animate, set_animate) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_animate.set(true), PROGRESS_DELAY_MS);
    Effect::new(move |_| start(()));

    let stats = compute_skill_stats(SKILLS).unwrap_or_else(|e| {
        log::warn!("skill stats unavailable: {e}");
        SkillStats::default()
    });

    view! {
        <Title text="Skills" />
        <div class="max-w-7xl mx-auto w-full p-6">
            <div class="mb-8">
                <BackLink href="/" label="Back to Home" />
                <h1 class="text-4xl font-bold text-foreground mb-2">"Skills & Expertise"</h1>
                <p class="text-muted">
                    "Technical skills and experience across embedded systems and backend development"
                </p>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                <StatCard value=stats.total_skills.to_string() label="Total Skills" />
                <StatCard value=stats.expert_count.to_string() label="Expert Level" delay_ms=100 />
                <StatCard
                    value=format!("{}%", stats.average_level)
                    label="Avg Proficiency"
                    delay_ms=200
                />
                <StatCard
                    value=format!("{}+", stats.total_projects)
                    label="Projects Done"
                    delay_ms=300
                />
            </div>
            <FilterBar categories=Category::ALL.to_vec() selected with_icons=true />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    selected
                        .with(|filter| filter_by_category(SKILLS, filter))
                        .into_iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill index animate /> })
                        .collect_view()
                }}
            </div>
            {move || {
                (selected.get() == CategoryFilter::All)
                    .then(|| view! { <CategoryOverview selected /> })
            }}
            <CurrentlyLearning />
        </div>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize, animate: ReadSignal<bool>) -> impl IntoView {
    let delay_ms = index * 50;
    view! {
        <Card delay_ms>
            <div class="p-6">
                <div class="flex items-start justify-between mb-4">
                    <div class="flex items-center gap-3">
                        <div class=format!(
                            "p-2 rounded-lg bg-brightBlack {}",
                            category_color(skill.category),
                        )>{category_icon(skill.category)}</div>
                        <div>
                            <h3 class="font-semibold">{skill.name}</h3>
                            <Badge class="mt-1">{skill.category.as_str()}</Badge>
                        </div>
                    </div>
                    <div class="text-lg font-bold text-primary">{skill.level} "%"</div>
                </div>
                <div class="space-y-3">
                    <ProgressBar level=skill.level animate delay_ms />
                    <div class="grid grid-cols-2 gap-4 text-sm">
                        <div>
                            <span class="text-muted">"Experience:"</span>
                            <p class="font-medium">{skill.experience}</p>
                        </div>
                        <div>
                            <span class="text-muted">"Projects:"</span>
                            <p class="font-medium">{skill.project_count}</p>
                        </div>
                    </div>
                </div>
            </div>
        </Card>
    }
}

/// One card per category; clicking a card narrows the list to it.
#[component]
fn CategoryOverview(selected: RwSignal<CategoryFilter>) -> impl IntoView {
    view! {
        <div class="mt-12 pt-8 border-t border-muted/30">
            <h2 class="text-2xl font-bold mb-6">"Expertise Areas"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {category_summaries(SKILLS)
                    .into_iter()
                    .enumerate()
                    .map(|(index, summary)| {
                        let category = summary.category;
                        view! {
                            <div
                                class="cursor-pointer"
                                on:click=move |_| selected.set(CategoryFilter::from(category))
                            >
                                <Card delay_ms={800 + index * 100}>
                                    <div class="p-6 text-center">
                                        <div class=format!(
                                            "inline-flex p-3 rounded-full bg-brightBlack mb-4 text-2xl {}",
                                            category_color(category),
                                        )>{category_icon(category)}</div>
                                        <h3 class="font-semibold mb-2">{category.as_str()}</h3>
                                        <p class="text-sm text-muted mb-3">
                                            {summary.skill_count} " skills"
                                        </p>
                                        <div class="text-xs text-muted">
                                            "Avg: " {summary.average_level} "%"
                                        </div>
                                    </div>
                                </Card>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CurrentlyLearning() -> impl IntoView {
    view! {
        <div class="mt-12 pt-8 border-t border-muted/30">
            <h2 class="text-2xl font-bold mb-6">"Currently Learning"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {CURRENTLY_LEARNING
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <Card delay_ms={index * 100}>
                                <div class="p-6">
                                    <div class="flex items-center gap-3 mb-3">
                                        <span class="text-primary">{item.icon}</span>
                                        <h3 class="font-medium">{item.title}</h3>
                                    </div>
                                    <p class="text-sm text-muted">{item.blurb}</p>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
