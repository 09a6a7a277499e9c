mod components;
mod homepage;
mod projects;
mod skills;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};
use projects::{ProjectDetailPage, ProjectsPage};
use skills::SkillsPage;

use crate::profile;

const SITE_NAME: &str = "w0vz.dev";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono bg-background text-foreground min-h-screen">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", profile::HANDLE) />
        <Router>
            <Header />
            <main class="flex flex-col flex-grow items-center mx-auto w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:id") view=ProjectDetailPage />
                    <Route path=path!("/skills") view=SkillsPage />
                </Routes>
            </main>
        </Router>
    }
}

fn dir_from_pathname(pathname: &str) -> String {
    match pathname.trim_end_matches('/').rsplit('/').next() {
        Some(dir) if !dir.is_empty() => dir.to_string(),
        _ => SITE_NAME.to_string(),
    }
}

#[component]
fn Header() -> impl IntoView {
    let location = use_location();
    let dir = move || dir_from_pathname(&location.pathname.get());
    let nav_class = "hover:text-cyan aria-[current=page]:text-cyan aria-[current=page]:underline";

    view! {
        <header class="shadow-lg">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between gap-4">
                <div class="text-2xl font-bold">
                    <A href="/">
                        <span class="text-green">"➜"</span>
                        " "
                        <span class="text-cyan">{dir}</span>
                        " "
                        <span class="text-blue">
                            <span>"git:("</span>
                            <span class="text-red">"main"</span>
                            <span>")"</span>
                        </span>
                    </A>
                </div>
                <nav class="flex gap-6 text-lg">
                    <A href="/" exact=true attr:class=nav_class>
                        "~/"
                    </A>
                    <A href="/projects" attr:class=nav_class>
                        "projects/"
                    </A>
                    <A href="/skills" attr:class=nav_class>
                        "skills/"
                    </A>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub(crate) fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="max-w-2xl mx-auto p-6 text-center">
            <h1 class="text-2xl font-bold mb-4">
                <span class="text-red">"➜"</span>
                " cd: no such file or directory"
            </h1>
            <A href="/" attr:class="text-cyan hover:underline">
                "cd ~"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_from_pathname() {
        assert_eq!(dir_from_pathname("/"), "w0vz.dev");
        assert_eq!(dir_from_pathname(""), "w0vz.dev");
        assert_eq!(dir_from_pathname("/projects"), "projects");
        assert_eq!(dir_from_pathname("/projects/3"), "3");
        assert_eq!(dir_from_pathname("/skills/"), "skills");
    }
}
