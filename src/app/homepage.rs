use chrono::{DateTime, Local};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::use_interval_fn;

use super::components::{status_variant, Badge, BadgeVariant, Card, ProgressBar};
use crate::catalog::{featured_projects, featured_skills, tech_preview};
use crate::clock::{format_date, format_time, BUILD_DATE, TICK_MS};
use crate::profile;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Overview" />
        <div class="max-w-7xl mx-auto w-full p-6">
            <div class="mb-8">
                <h1 class="text-4xl font-bold text-foreground mb-2">"Developer Portfolio"</h1>
                <p class="text-muted">{profile::TAGLINE}</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <AboutCard />
                <WeatherCard />
                <TimeCard />
                <CoreSkillsCard />
                <FeaturedProjectsCard />
            </div>
            <Footer />
        </div>
    }
}

#[component]
fn AboutCard() -> impl IntoView {
    view! {
        <Card class="col-span-1 md:col-span-2 lg:col-span-2">
            <div class="p-6 flex items-start gap-4">
                <div class="w-16 h-16 rounded-full overflow-hidden flex-shrink-0 bg-brightBlack">
                    <img
                        src=profile::AVATAR
                        alt=format!("{} avatar", profile::HANDLE)
                        class="w-full h-full object-cover"
                    />
                </div>
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-2">
                        <h2 class="text-xl font-semibold">{profile::HANDLE}</h2>
                        <Badge variant=BadgeVariant::Secondary>"</> " {profile::ROLE}</Badge>
                    </div>
                    <p class="text-muted mb-4 leading-relaxed">{profile::BIO}</p>
                    <div class="flex flex-wrap gap-2">
                        {featured_skills()
                            .into_iter()
                            .map(|skill| view! { <Badge>{skill.name}</Badge> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Card>
    }
}

#[component]
fn WeatherCard() -> impl IntoView {
    let weather = profile::WEATHER;
    view! {
        <Card delay_ms=100>
            <div class="p-6">
                <div class="flex items-center gap-3 mb-3">
                    <span class="text-primary">"⛅"</span>
                    <h3 class="font-medium">"Weather"</h3>
                </div>
                <div class="text-2xl font-semibold mb-1">{weather.temp_c} "°C"</div>
                <p class="text-sm text-muted mb-1">{weather.condition}</p>
                <p class="text-xs text-muted">{weather.location}</p>
            </div>
        </Card>
    }
}

#[component]
fn TimeCard() -> impl IntoView {
    // None until the first client tick so hydration sees the server markup
    let (now, set_now) = signal(None::<DateTime<Local>>);
    Effect::new(move |_| set_now.set(Some(Local::now())));
    // cleared by the owner when the page unmounts
    let _ = use_interval_fn(move || set_now.set(Some(Local::now())), TICK_MS);

    view! {
        <Card delay_ms=200>
            <div class="p-6">
                <div class="flex items-center gap-3 mb-3">
                    <span class="text-primary">"🕒"</span>
                    <h3 class="font-medium">"Local Time"</h3>
                </div>
                <div class="text-2xl font-semibold mb-1">
                    {move || {
                        now.get().map(|t| format_time(&t)).unwrap_or_else(|| "--:--".to_string())
                    }}
                </div>
                <p class="text-sm text-muted">
                    {move || now.get().map(|t| format_date(&t)).unwrap_or_default()}
                </p>
            </div>
        </Card>
    }
}

#[component]
fn CoreSkillsCard() -> impl IntoView {
    view! {
        <Card class="col-span-1 md:col-span-2 lg:col-span-2" delay_ms=300>
            <div class="p-6">
                <div class="flex items-center gap-3 mb-4">
                    <span class="text-primary">"⚡"</span>
                    <h3 class="font-medium">"Core Skills"</h3>
                    <A href="/skills" attr:class="ml-auto text-sm text-muted hover:text-foreground">
                        "→"
                    </A>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {featured_skills()
                        .into_iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <div class="space-y-2">
                                    <div class="flex justify-between items-center">
                                        <span class="text-sm font-medium">{skill.name}</span>
                                        <Badge>{skill.category.as_str()}</Badge>
                                    </div>
                                    <ProgressBar
                                        level=skill.level
                                        animate=true
                                        delay_ms={400 + index * 100}
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Card>
    }
}

#[component]
fn FeaturedProjectsCard() -> impl IntoView {
    view! {
        <Card class="col-span-1 md:col-span-2 lg:col-span-4" delay_ms=400>
            <div class="p-6">
                <div class="flex items-center gap-3 mb-4">
                    <span class="text-primary">"📁"</span>
                    <h3 class="font-medium">"Featured Projects"</h3>
                    <A href="/projects" attr:class="ml-auto text-sm text-muted hover:text-foreground">
                        "View All →"
                    </A>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {featured_projects()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let (shown, _) = tech_preview(project.technologies, 3);
                            view! {
                                <A
                                    href=format!("/projects/{}", project.id)
                                    attr:class="block p-4 border border-muted/30 rounded-lg hover:border-primary/50 transition-all duration-300 animate-slide-in-up group"
                                    attr:style=format!("animation-delay: {}ms", 500 + index * 100)
                                >
                                    <div class="flex items-start justify-between mb-2">
                                        <h4 class="font-medium group-hover:text-primary transition-colors">
                                            {project.title}
                                        </h4>
                                        <Badge variant=status_variant(project.status)>
                                            {project.status.as_str()}
                                        </Badge>
                                    </div>
                                    <p class="text-sm text-muted mb-3 leading-relaxed">
                                        {project.description}
                                    </p>
                                    <div class="flex flex-wrap gap-1">
                                        {shown
                                            .iter()
                                            .map(|tech| view! { <Badge>{*tech}</Badge> })
                                            .collect_view()}
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Card>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-12 pt-6 border-t border-muted/30">
            <div class="flex flex-col sm:flex-row justify-between items-center gap-4">
                <div class="flex items-center gap-4 text-sm">
                    <a
                        href=profile::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-cyan"
                    >
                        "GitHub"
                    </a>
                    <a href=profile::CONTACT_EMAIL class="hover:text-cyan">
                        "Contact"
                    </a>
                </div>
                <p class="text-sm text-muted">
                    "Built with Rust & Leptos · " {BUILD_DATE}
                </p>
            </div>
        </footer>
    }
}
