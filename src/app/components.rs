use leptos::prelude::*;

use crate::catalog::{Category, CategoryFilter, ProjectStatus};

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Embedded => "🔌",
        Category::Backend => "🖥️",
        Category::ToolsDevOps => "🔧",
        Category::Communication => "📡",
    }
}

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Embedded => "text-blue",
        Category::Backend => "text-green",
        Category::ToolsDevOps => "text-purple",
        Category::Communication => "text-orange",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Secondary,
    #[default]
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "bg-primary text-background border-primary",
            BadgeVariant::Secondary => "bg-brightBlack text-foreground border-brightBlack",
            BadgeVariant::Outline => "border-muted/50 text-foreground",
        }
    }
}

pub fn status_variant(status: ProjectStatus) -> BadgeVariant {
    match status {
        ProjectStatus::Production => BadgeVariant::Primary,
        ProjectStatus::Active | ProjectStatus::Completed => BadgeVariant::Secondary,
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-md border px-2 py-0.5 text-xs font-medium {} {}",
            variant.class(),
            class,
        )>{children()}</span>
    }
}

#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: usize,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!(
                "rounded-lg border border-muted/30 bg-brightBlack/20 shadow-sm hover:shadow-lg transition-all duration-300 animate-fade-in {class}",
            )
            style=format!("animation-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] value: String,
    label: &'static str,
    #[prop(optional)] delay_ms: usize,
) -> impl IntoView {
    view! {
        <Card delay_ms>
            <div class="p-4 text-center">
                <div class="text-2xl font-bold text-primary mb-1">{value}</div>
                <p class="text-xs text-muted">{label}</p>
            </div>
        </Card>
    }
}

/// Proficiency bar. Grows from 0 to `level` once `animate` turns true.
#[component]
pub fn ProgressBar(
    level: u8,
    #[prop(into)] animate: Signal<bool>,
    #[prop(optional)] delay_ms: usize,
) -> impl IntoView {
    view! {
        <div class="w-full bg-brightBlack rounded-full h-2">
            <div
                class="bg-primary h-2 rounded-full transition-all duration-1000 ease-out"
                style=move || {
                    let width = if animate.get() { level } else { 0 };
                    format!("width: {width}%; transition-delay: {delay_ms}ms")
                }
            ></div>
        </div>
    }
}

/// "All" followed by one button per category.
#[component]
pub fn FilterBar(
    categories: Vec<Category>,
    selected: RwSignal<CategoryFilter>,
    #[prop(optional)] with_icons: bool,
) -> impl IntoView {
    let options = std::iter::once((CategoryFilter::All, None))
        .chain(
            categories
                .into_iter()
                .map(|c| (CategoryFilter::from(c), Some(c))),
        )
        .collect::<Vec<_>>();
    view! {
        <div class="flex flex-wrap gap-2 mb-8">
            {options
                .into_iter()
                .map(|(option, category)| {
                    let label = option.label().to_string();
                    let is_selected = {
                        let option = option.clone();
                        move || selected.with(|s| *s == option)
                    };
                    view! {
                        <button
                            class=move || {
                                if is_selected() {
                                    "px-4 py-2 rounded-md border border-primary bg-primary text-background font-medium animate-fade-in"
                                } else {
                                    "px-4 py-2 rounded-md border border-muted/50 hover:bg-brightBlack/40 animate-fade-in"
                                }
                            }
                            on:click=move |_| {
                                log::debug!("category selected: {}", option.label());
                                selected.set(option.clone());
                            }
                        >
                            {category
                                .filter(|_| with_icons)
                                .map(|c| view! { <span class="mr-2">{category_icon(c)}</span> })}
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BackLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-4">
            <a href=href class="text-sm text-muted hover:text-foreground transition-colors">
                "← "
                {label}
            </a>
        </div>
    }
}
