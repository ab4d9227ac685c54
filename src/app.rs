mod effects;
mod home;
mod intro;
mod projects;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use home::HomePage;
use theme::{Theme, ThemeToggle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Theme lives for the whole page; in-memory only, defaults to dark.
    let theme = RwSignal::new(Theme::Dark);
    provide_context(theme);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Jonathan de Boisvilliers - {title}") />

        <Router>
            <div class=move || {
                format!(
                    "flex flex-col md:flex-row min-h-screen w-full overflow-hidden {}",
                    theme.get().root_class(),
                )
            }>
                <main class="flex flex-col md:flex-row flex-grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Copyright />
                <ThemeToggle />
            </div>
        </Router>
    }
}

#[component]
fn Copyright() -> impl IntoView {
    view! {
        <div class="fixed bottom-8 left-8 text-xs opacity-60 z-20">
            "© Jonathan"
            <br />
            "de BOISVILLIERS"
        </div>
    }
}
