use leptos::prelude::*;
use leptos_meta::Title;

use super::intro::IntroPane;
use super::projects::ProjectsPane;

/// Single-page layout: bio on the left, project viewport on the right.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <IntroPane />
        <ProjectsPane />
    }
}
