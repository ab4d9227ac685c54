use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

/// Milliseconds between scramble re-rolls.
#[cfg(feature = "hydrate")]
const SCRAMBLE_TICK_MS: u32 = 50;

/// Reveal runs slightly ahead of elapsed time so word reveals overlap
/// instead of ticking over one at a time.
const REVEAL_OVERSHOOT: f64 = 1.2;

#[cfg(feature = "hydrate")]
const SCRAMBLE_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,./<>?";

/// How many words are revealed at `elapsed_ms` into a run of `duration_ms`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn revealed_words(elapsed_ms: f64, duration_ms: f64, total: usize) -> usize {
    if duration_ms <= 0.0 {
        return total;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    if progress >= 1.0 {
        return total;
    }
    ((progress * total as f64 * REVEAL_OVERSHOOT) as usize).min(total)
}

#[cfg(feature = "hydrate")]
fn scrambled(len: usize) -> String {
    (0..len)
        .map(|_| {
            let roll = (js_sys::Math::random() * SCRAMBLE_CHARSET.len() as f64) as usize;
            SCRAMBLE_CHARSET[roll.min(SCRAMBLE_CHARSET.len() - 1)] as char
        })
        .collect()
}

/// Decryption effect: words start scrambled and resolve left-to-right over
/// `duration_ms`. Server-rendered output is the plain text, so the page
/// reads fine before (or without) hydration; the client swaps in the
/// scramble on mount. The interval handle is owned by the component and
/// dropped on unmount, so a tick can never fire against a gone view.
#[component]
pub fn DecryptedText(
    text: &'static str,
    #[prop(default = 2000.0)] duration_ms: f64,
) -> impl IntoView {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let (display, set_display) = signal(
        words
            .iter()
            .map(|w| (w.clone(), true))
            .collect::<Vec<(String, bool)>>(),
    );

    #[cfg(feature = "hydrate")]
    {
        let words = StoredValue::new(words);
        let handle = StoredValue::new_local(None::<Interval>);
        let (finished, set_finished) = signal(false);

        Effect::new(move |_| {
            let start = js_sys::Date::now();
            let interval = Interval::new(SCRAMBLE_TICK_MS, move || {
                if finished.get_untracked() {
                    return;
                }
                let elapsed = js_sys::Date::now() - start;
                words.with_value(|words| {
                    let reveal = revealed_words(elapsed, duration_ms, words.len());
                    set_display(
                        words
                            .iter()
                            .enumerate()
                            .map(|(i, w)| {
                                if i < reveal {
                                    (w.clone(), true)
                                } else {
                                    (scrambled(w.chars().count()), false)
                                }
                            })
                            .collect(),
                    );
                    if reveal == words.len() {
                        set_finished(true);
                    }
                });
            });
            handle.update_value(|h| *h = Some(interval));
        });

        // The interval can't drop itself mid-tick, so cancellation runs in
        // a queued effect once the run completes (or on unmount below).
        Effect::new(move |_| {
            if finished.get() {
                handle.update_value(|h| {
                    h.take();
                });
            }
        });
        on_cleanup(move || {
            handle.update_value(|h| {
                h.take();
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = duration_ms;

    view! {
        <span class="decrypted-text">
            {move || {
                display
                    .get()
                    .into_iter()
                    .map(|(word, resolved)| {
                        view! {
                            <span class=move || {
                                if resolved { "decrypted-word" } else { "decrypted-word scrambling" }
                            }>{word}</span>
                        }
                    })
                    .collect_view()
            }}
        </span>
    }
}

/// Letter-by-letter reveal for headings. The stagger is pure CSS: each
/// letter gets its own `animation-delay`, so there is no timeline to cancel.
#[component]
pub fn SplitText(
    text: &'static str,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    const STAGGER_MS: u32 = 40;

    view! {
        <span class=format!("split-text {class}")>
            {text
                .chars()
                .enumerate()
                .map(|(i, letter)| {
                    let delay = delay_ms + i as u32 * STAGGER_MS;
                    // Keep spaces from collapsing between inline-block spans.
                    let letter = if letter == ' ' { '\u{a0}' } else { letter };
                    view! {
                        <span
                            class="split-letter"
                            style:animation-delay=format!("{delay}ms")
                        >
                            {letter.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_revealed_at_start() {
        assert_eq!(revealed_words(0.0, 2000.0, 10), 0);
    }

    #[test]
    fn everything_revealed_at_and_past_duration() {
        assert_eq!(revealed_words(2000.0, 2000.0, 10), 10);
        assert_eq!(revealed_words(5000.0, 2000.0, 10), 10);
    }

    #[test]
    fn overshoot_reveals_ahead_of_linear_progress() {
        // Halfway in, 1.2 overshoot puts 6 of 10 words through.
        assert_eq!(revealed_words(1000.0, 2000.0, 10), 6);
    }

    #[test]
    fn reveal_count_never_exceeds_total() {
        for elapsed in [0, 500, 1000, 1500, 1900, 2000] {
            assert!(revealed_words(elapsed as f64, 2000.0, 4) <= 4);
        }
    }

    #[test]
    fn degenerate_duration_reveals_immediately() {
        assert_eq!(revealed_words(0.0, 0.0, 3), 3);
    }
}
