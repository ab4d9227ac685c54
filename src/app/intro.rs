use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

use super::effects::{DecryptedText, SplitText};
use super::theme::Theme;

#[cfg(feature = "hydrate")]
const EMAIL: &str = "j.deboisvilliers@gmail.com";

#[cfg(feature = "hydrate")]
const COPY_TOOLTIP_MS: u32 = 2_000;

const BIO_LEAD: &str = "Fullstack JS developer with 5+ years of experience, combining technical \
     expertise and creative approach to design performant and intuitive interfaces:";

const BIO_POINTS: [&str; 4] = [
    "Deep mastery of React ecosystems, particularly in state management (Zustand) and data flow \
     optimization (GraphQL)",
    "Proficiency in data visualization (D3.JS, Chart.JS), transforming complex information into \
     readable interfaces",
    "UI/UX expertise with modern frameworks (Tailwind, Radix-UI, Chakra-UI, MUI) ensuring \
     accessibility and polished aesthetics",
    "Solid fullstack skills (Node, TypeScript) complemented by automation tools (Puppeteer) and \
     continuous integration",
];

const BIO_CLOSE: &str = "I strive to create responsive applications that combine technical \
     performance with intuitive user experience.";

/// Left half of the page: avatar, name, bio, and stats.
#[component]
pub fn IntroPane() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class="w-full md:w-1/2 min-h-screen flex items-center justify-center overflow-hidden">
            <div class="flex flex-col w-full max-w-md px-4 sm:px-6 py-8 space-y-6">
                <div class="flex flex-col items-center sm:flex-row sm:items-start mb-8">
                    <div class="flex flex-col items-center sm:items-start mr-2.5">
                        <div class=move || {
                            format!(
                                "rounded-full overflow-hidden w-24 h-24 border-2 shadow-lg flex-shrink-0 mb-4 sm:mb-0 {}",
                                theme.get().avatar_border(),
                            )
                        }>
                            <img
                                src="/profil.jpg"
                                loading="lazy"
                                decoding="async"
                                alt="Jonathan de Boisvilliers"
                                class="w-full h-full object-cover scale-x-[-1]"
                            />
                        </div>
                        <div class="w-fit h-12 flex items-center justify-center">
                            <SocialIcons />
                        </div>
                    </div>

                    <div class="text-center sm:text-left">
                        <h1 class=move || {
                            format!(
                                "text-4xl font-bold tracking-tighter mb-2 pl-2 {}",
                                theme.get().accent_text(),
                            )
                        }>
                            <SplitText text="JONATHAN" delay_ms=100 />
                            <br />
                            <SplitText text="DE BOISVILLIERS" delay_ms=200 />
                        </h1>
                        <p class="text-3xl opacity-90">"FullStack JS Developer"</p>
                    </div>
                </div>

                <div class="text-base mb-8 opacity-75 max-w-md mx-auto sm:mx-0 text-left">
                    <p class="mb-4">
                        <DecryptedText text=BIO_LEAD />
                    </p>
                    <ul class="list-disc pl-5 mb-4 space-y-2">
                        {BIO_POINTS
                            .into_iter()
                            .map(|point| {
                                view! {
                                    <li>
                                        <DecryptedText text=point />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p>
                        <DecryptedText text=BIO_CLOSE />
                    </p>
                </div>

                <div class="flex flex-wrap justify-center sm:justify-start gap-4 sm:gap-8 w-fit">
                    <Stat value="5+" label="Years of Experience" />
                    <Stat value="12+" label="Completed Projects" />
                    <Stat value="10k+" label="Downed Coffees" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <div class="flex-1 text-center sm:text-left">
            <p class=move || format!("text-4xl font-bold {}", theme.get().accent_text())>{value}</p>
            <p class="text-sm opacity-75">{label}</p>
        </div>
    }
}

/// External profiles plus a copy-email button with a transient tooltip.
#[component]
fn SocialIcons() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let (copied, set_copied) = signal(false);

    #[cfg(feature = "hydrate")]
    let copy_email = {
        let reset = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            reset.update_value(|t| {
                t.take();
            });
        });
        move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            // Fire-and-forget; the tooltip is optimistic.
            let _ = window.navigator().clipboard().write_text(EMAIL);
            set_copied(true);
            reset.update_value(|t| {
                *t = Some(Timeout::new(COPY_TOOLTIP_MS, move || set_copied(false)));
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let copy_email = {
        let _ = set_copied;
        move |_| {}
    };

    let icon_class = move || {
        format!(
            "w-6 h-6 cursor-pointer transition-colors duration-300 text-2xl {}",
            theme.get().icon_class(),
        )
    };

    view! {
        <div class="flex justify-center space-x-4 mt-2">
            <a
                href="https://www.linkedin.com/in/jdeboisvilliers/"
                target="_blank"
                rel="noopener noreferrer"
                class="hover:scale-110 transition-transform"
                aria-label="LinkedIn Profile"
            >
                <i class=move || format!("devicon-linkedin-plain {}", icon_class())></i>
            </a>
            <a
                href="https://github.com/Dumpinator"
                target="_blank"
                rel="noopener noreferrer"
                class="hover:scale-110 transition-transform"
                aria-label="GitHub Profile"
            >
                <i class=move || format!("devicon-github-plain {}", icon_class())></i>
            </a>
            <button
                on:click=copy_email
                class="hover:scale-110 transition-transform relative"
                aria-label="Copy email address"
            >
                <span class=icon_class>"✉"</span>
                <Show when=move || copied.get()>
                    <span class=move || {
                        format!(
                            "absolute -top-8 left-1/2 -translate-x-1/2 text-white text-xs px-2 py-1 rounded {}",
                            theme.get().tooltip_class(),
                        )
                    }>"Copied!"</span>
                </Show>
            </button>
        </div>
    }
}
