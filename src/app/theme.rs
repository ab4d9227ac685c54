use leptos::prelude::*;

/// Page-wide color mode. Every theme-dependent class comes from the lookup
/// methods below rather than runtime string building, so the full set of
/// emitted classes is enumerable at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    /// Accent color for headings and stat values.
    pub fn accent_text(self) -> &'static str {
        match self {
            Theme::Dark => "text-green-300/80",
            Theme::Light => "text-blue-400/50",
        }
    }

    pub fn avatar_border(self) -> &'static str {
        match self {
            Theme::Dark => "border-green-300/80",
            Theme::Light => "border-blue-400/50",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "text-white/80 hover:text-green-300",
            Theme::Light => "text-black/50 hover:text-blue-500",
        }
    }

    pub fn tooltip_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-green-600",
            Theme::Light => "bg-blue-600",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Theme::Dark => "badge-dark text-blue-300/90",
            Theme::Light => "badge-light text-yellow-600/90",
        }
    }

    pub fn pulse_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-blue-500/30",
            Theme::Light => "bg-yellow-500/30",
        }
    }

    /// Glow behind the focus-pulse indicator, applied as an inline shadow.
    pub fn pulse_glow(self) -> &'static str {
        match self {
            Theme::Dark => "0 0 20px 10px rgba(59, 130, 246, 0.4)",
            Theme::Light => "0 0 20px 10px rgba(234, 179, 8, 0.4)",
        }
    }
}

/// Stacked-letter DARK / LIGHT switcher pinned to the bottom-right corner.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    view! {
        <div class="flex flex-col text-xs items-end fixed bottom-8 right-8 z-50 gap-6">
            <ThemeButton label="DARK" target=Theme::Dark />
            <ThemeButton label="LIGHT" target=Theme::Light />
        </div>
    }
}

#[component]
fn ThemeButton(label: &'static str, target: Theme) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            class=move || {
                let emphasis = if theme.get() == target { "opacity-100" } else { "opacity-40" };
                format!("flex flex-col items-center cursor-pointer {emphasis}")
            }
            on:click=move |_| theme.set(target)
        >
            {label
                .chars()
                .map(|letter| {
                    view! {
                        <span class="my-1 hover:scale-110 transition-transform">
                            {letter.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_map_to_distinct_classes() {
        assert_ne!(Theme::Dark.root_class(), Theme::Light.root_class());
        assert_ne!(Theme::Dark.accent_text(), Theme::Light.accent_text());
        assert_ne!(Theme::Dark.badge_class(), Theme::Light.badge_class());
        assert_ne!(Theme::Dark.pulse_glow(), Theme::Light.pulse_glow());
    }
}
