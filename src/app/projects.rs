use leptos::{html, prelude::*};
use leptos_use::use_media_query;

use crate::projects::{all_projects, Project};
use crate::tracker::{tier_for, FocusTracker, Tier};

use super::theme::Theme;

/// Deliberate second measurement after mount, once layout settles.
#[cfg(feature = "hydrate")]
const SETTLE_REMEASURE_MS: u32 = 500;
/// Delay before the one-shot initial auto-focus scroll.
#[cfg(feature = "hydrate")]
const INITIAL_FOCUS_DELAY_MS: u32 = 300;
/// How long a smooth scroll is given before the selection is pinned.
#[cfg(feature = "hydrate")]
const SCROLL_SETTLE_MS: u32 = 500;
/// Lifetime of the focus-pulse indicator.
#[cfg(feature = "hydrate")]
const FOCUS_PULSE_MS: u32 = 1_000;
/// Hover dwell before the active item's details expand.
#[cfg(feature = "hydrate")]
const HOVER_DETAILS_MS: u32 = 300;
/// Hover dwell before an inactive item is auto-centered.
#[cfg(feature = "hydrate")]
const HOVER_AUTOSCROLL_MS: u32 = 800;

/// Right half of the page. Desktop gets the scroll viewport driven by the
/// focus tracker; below the `md` breakpoint every project renders flat and
/// focus is tap-driven only.
#[component]
pub fn ProjectsPane() -> impl IntoView {
    let is_compact = use_media_query("(max-width: 767px)");
    let (active_id, set_active_id) = signal(None::<u32>);
    let projects = all_projects();

    view! {
        <div class="w-full md:w-1/2 h-screen relative">
            <Show
                when=move || is_compact.get()
                fallback={
                    let projects = projects.clone();
                    move || {
                        view! {
                            <ProjectViewport
                                projects=projects.clone()
                                active_id=active_id
                                set_active_id=set_active_id
                            />
                        }
                    }
                }
            >
                <CompactProjectList
                    projects=projects.clone()
                    active_id=active_id
                    set_active_id=set_active_id
                />
            </Show>
        </div>
    }
}

/// Scrollable project viewport. Every scroll event re-measures geometry and
/// reselects the item nearest the viewport center; clicks and hover dwells
/// animate the target to center and then pin it active.
#[component]
fn ProjectViewport(
    projects: Vec<Project>,
    #[prop(into)] active_id: Signal<Option<u32>>,
    set_active_id: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let container_ref = NodeRef::<html::Div>::new();
    let item_refs: Vec<(u32, NodeRef<html::Div>)> =
        projects.iter().map(|p| (p.id, NodeRef::new())).collect();
    let tracker = StoredValue::new(FocusTracker::new());
    let (show_pulse, set_show_pulse) = signal(false);

    #[cfg(feature = "hydrate")]
    let (measure, focus_to) = {
        use gloo_timers::callback::Timeout;

        use crate::projects::default_project_id;

        use dom::DomViewport;

        let adapter = StoredValue::new_local(DomViewport::new(container_ref, item_refs.clone()));
        let timers = StoredValue::new_local(ViewportTimers::default());
        // Dropping the handles cancels anything still pending, so a timed
        // callback can never fire against an unmounted viewport.
        on_cleanup(move || timers.update_value(|t| t.clear()));

        let measure = move || {
            let active = adapter
                .with_value(|a| tracker.try_update_value(|t| t.recompute_from(a)))
                .flatten();
            set_active_id(active);
        };

        let focus_to = move |id: u32| {
            let issued = adapter
                .with_value(|a| tracker.try_update_value(|t| t.focus_item(a, id, true)))
                .flatten();
            if issued.is_none() {
                return;
            }
            log::info!("centering project {id}");
            timers.update_value(|t| {
                t.settle = Some(Timeout::new(SCROLL_SETTLE_MS, move || {
                    // The animation has settled; pin the selection so any
                    // transient mid-scroll measurement can't win.
                    tracker.update_value(|t| t.set_active(id));
                    set_active_id(Some(id));
                    set_show_pulse(true);
                    timers.update_value(|t| {
                        t.pulse =
                            Some(Timeout::new(FOCUS_PULSE_MS, move || set_show_pulse(false)));
                    });
                }));
            });
        };

        // Measure immediately, again once layout settles, then run the
        // one-shot auto-focus on the default project.
        Effect::new(move |_| {
            measure();
            timers.update_value(|t| {
                t.remeasure = Some(Timeout::new(SETTLE_REMEASURE_MS, measure));
                if let Some(id) = default_project_id() {
                    t.initial = Some(Timeout::new(INITIAL_FOCUS_DELAY_MS, move || focus_to(id)));
                }
            });
        });

        (measure, focus_to)
    };
    #[cfg(not(feature = "hydrate"))]
    let (measure, focus_to) = {
        let _ = (tracker, set_active_id, set_show_pulse);
        (move || {}, move |_id: u32| {})
    };

    view! {
        <div class="w-full h-full flex flex-col relative">
            <div class="fade-overlay fade-overlay-top"></div>

            <Show when=move || show_pulse.get()>
                <div
                    class=move || {
                        format!(
                            "absolute left-1/2 top-1/2 w-8 h-8 -translate-x-1/2 -translate-y-1/2 rounded-full z-50 pointer-events-none animate-pulse {}",
                            theme.get().pulse_class(),
                        )
                    }
                    style:box-shadow=move || theme.get().pulse_glow()
                ></div>
            </Show>

            <div
                node_ref=container_ref
                class="pt-2 h-full overflow-y-auto overflow-x-hidden snap-y snap-mandatory"
                style="scroll-padding-top: calc(50vh - 100px); scroll-padding-bottom: calc(50vh - 100px)"
                on:scroll=move |_| measure()
            >
                <div class="h-[30vh]"></div>
                {projects
                    .iter()
                    .zip(item_refs.iter())
                    .map(|(project, (_, node_ref))| {
                        view! {
                            <ProjectItem
                                project=project.clone()
                                compact=false
                                active_id=active_id
                                on_activate=move |id: u32| focus_to(id)
                                on_hover_focus=Callback::new(move |id: u32| focus_to(id))
                                node_ref=*node_ref
                            />
                        }
                    })
                    .collect_view()}
                <div class="h-[30vh]"></div>
            </div>

            <div class="fade-overlay fade-overlay-bottom"></div>
        </div>
    }
}

/// Compact layout: flat column, no scroll container, tap to focus.
#[component]
fn CompactProjectList(
    projects: Vec<Project>,
    #[prop(into)] active_id: Signal<Option<u32>>,
    set_active_id: WriteSignal<Option<u32>>,
) -> impl IntoView {
    view! {
        <div class="w-full py-8 px-4 mt-8 flex flex-col gap-12">
            {projects
                .into_iter()
                .map(|project| {
                    view! {
                        <ProjectItem
                            project=project
                            compact=true
                            active_id=active_id
                            on_activate=move |id: u32| set_active_id(Some(id))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectItem(
    project: Project,
    compact: bool,
    #[prop(into)] active_id: Signal<Option<u32>>,
    #[prop(into)] on_activate: Callback<u32>,
    #[prop(optional, into)] on_hover_focus: Option<Callback<u32>>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let id = project.id;
    let tier = Memo::new(move |_| tier_for(active_id.get(), id));
    let (hovered, set_hovered) = signal(false);
    let (show_details, set_show_details) = signal(false);

    // Compact layout keeps the active item's details pinned open.
    if compact {
        Effect::new(move |_| {
            set_show_details(tier.get() == Tier::Focused);
        });
    }

    #[cfg(feature = "hydrate")]
    let (on_enter, on_leave) = {
        use gloo_timers::callback::Timeout;

        let timers = StoredValue::new_local(HoverTimers::default());
        on_cleanup(move || timers.update_value(|t| t.clear()));

        let on_enter = move |_: leptos::ev::MouseEvent| {
            set_hovered(true);
            let active = tier.get_untracked() == Tier::Focused;
            if compact {
                if active {
                    set_show_details(true);
                }
                return;
            }
            if active {
                timers.update_value(|t| {
                    t.details =
                        Some(Timeout::new(HOVER_DETAILS_MS, move || set_show_details(true)));
                });
            } else if let Some(focus) = on_hover_focus {
                // Dwelling on a neighbor pulls it to center.
                timers.update_value(|t| {
                    t.autoscroll =
                        Some(Timeout::new(HOVER_AUTOSCROLL_MS, move || focus.run(id)));
                });
            }
        };

        let on_leave = move |_: leptos::ev::MouseEvent| {
            set_hovered(false);
            timers.update_value(|t| t.clear());
            if compact && tier.get_untracked() == Tier::Focused {
                return;
            }
            set_show_details(false);
        };

        (on_enter, on_leave)
    };
    #[cfg(not(feature = "hydrate"))]
    let (on_enter, on_leave) = {
        let _ = (on_hover_focus, set_hovered);
        (
            move |_: leptos::ev::MouseEvent| {},
            move |_: leptos::ev::MouseEvent| {},
        )
    };

    let opacity = move || {
        let tier = tier.get();
        if compact {
            // Inactive items stay half-visible; nothing is ever hidden.
            if tier == Tier::Focused { 1.0 } else { 0.5 }
        } else if hovered.get() && tier == Tier::Adjacent {
            0.8
        } else {
            tier.opacity()
        }
    };

    let pointer_events = move || {
        if compact || tier.get().interactive() {
            "auto"
        } else {
            "none"
        }
    };

    let wrapper_class = move || {
        let active = tier.get() == Tier::Focused;
        let spacing = if compact { "mb-8" } else { "mb-16" };
        let scale = match (active, compact) {
            (true, true) => "scale-100",
            (true, false) => "scale-105",
            (false, true) => "",
            (false, false) => "scale-95",
        };
        let nudge = if hovered.get() && active && !compact {
            "-translate-x-2.5"
        } else {
            ""
        };
        format!(
            "project-item w-fit mx-auto cursor-pointer snap-center transition-all duration-500 {spacing} {scale} {nudge}"
        )
    };

    let title_class = if compact {
        "text-5xl font-normal tracking-tighter"
    } else {
        "text-6xl font-normal tracking-tighter"
    };

    let details_class = move || {
        let open = show_details.get() && tier.get() == Tier::Focused;
        if open {
            "overflow-hidden transition-all duration-300 ease-out max-h-32 opacity-100 mt-2"
        } else {
            "overflow-hidden transition-all duration-300 ease-out max-h-0 opacity-0"
        }
    };

    view! {
        <div
            node_ref=node_ref
            class=wrapper_class
            style:opacity=move || opacity().to_string()
            style:pointer-events=pointer_events
            on:click=move |_| on_activate.run(id)
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class="mb-2">
                {project
                    .title_lines
                    .into_iter()
                    .map(|line| view! { <h2 class=title_class>{line}</h2> })
                    .collect_view()}
            </div>
            <p class="ml-1 text-sm opacity-75">{project.date}</p>
            <div class="ml-1 mt-2 text-sm">
                <ul class="flex flex-wrap gap-1 max-w-2xs">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| view! { <li><Badge label=tag /></li> })
                        .collect_view()}
                </ul>
            </div>
            <div class=details_class>
                <p class="ml-1 text-sm mb-2">{project.description}</p>
            </div>
        </div>
    }
}

#[component]
fn Badge(label: String) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! { <div class=move || format!("badge {}", theme.get().badge_class())>{label}</div> }
}

/// Pending viewport-level callbacks; dropping a handle cancels it.
#[cfg(feature = "hydrate")]
#[derive(Default)]
struct ViewportTimers {
    initial: Option<gloo_timers::callback::Timeout>,
    remeasure: Option<gloo_timers::callback::Timeout>,
    settle: Option<gloo_timers::callback::Timeout>,
    pulse: Option<gloo_timers::callback::Timeout>,
}

#[cfg(feature = "hydrate")]
impl ViewportTimers {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pending hover dwells for one item.
#[cfg(feature = "hydrate")]
#[derive(Default)]
struct HoverTimers {
    details: Option<gloo_timers::callback::Timeout>,
    autoscroll: Option<gloo_timers::callback::Timeout>,
}

#[cfg(feature = "hydrate")]
impl HoverTimers {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use leptos::{html, prelude::*};
    use web_sys::{ScrollBehavior, ScrollToOptions};

    use crate::tracker::{Rect, ViewportAdapter};

    /// [`ViewportAdapter`] over the live DOM, reading client-coordinate
    /// geometry from `getBoundingClientRect`.
    pub struct DomViewport {
        container: NodeRef<html::Div>,
        items: Vec<(u32, NodeRef<html::Div>)>,
    }

    impl DomViewport {
        pub fn new(container: NodeRef<html::Div>, items: Vec<(u32, NodeRef<html::Div>)>) -> Self {
            Self { container, items }
        }
    }

    impl ViewportAdapter for DomViewport {
        fn viewport(&self) -> Option<Rect> {
            let el = self.container.get_untracked()?;
            let rect = el.get_bounding_client_rect();
            Some(Rect::new(rect.top(), rect.height()))
        }

        fn items(&self) -> Vec<(u32, Rect)> {
            self.items
                .iter()
                .filter_map(|(id, node)| {
                    let el = node.get_untracked()?;
                    let rect = el.get_bounding_client_rect();
                    Some((*id, Rect::new(rect.top(), rect.height())))
                })
                .collect()
        }

        fn scroll_top(&self) -> f64 {
            self.container
                .get_untracked()
                .map(|el| el.scroll_top() as f64)
                .unwrap_or_default()
        }

        fn scroll_to(&self, top: f64, animate: bool) {
            let Some(el) = self.container.get_untracked() else {
                return;
            };
            if animate {
                let opts = ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(ScrollBehavior::Smooth);
                el.scroll_to_with_scroll_to_options(&opts);
            } else {
                el.set_scroll_top(top as i32);
            }
        }
    }
}
