//! Components applying motion presets to their children

use leptos::prelude::*;

use crate::core::motion::{FloatLoop, Preset, keyframes_css};

/// Scroll-gated entrance: hidden until `shown` turns true, then transitions
/// to rest after `delay_ms`.
#[component]
pub fn Reveal(
    preset: Preset,
    #[prop(into)] shown: Signal<bool>,
    /// Stagger slot of this element
    #[prop(default = 0)]
    delay_ms: u32,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=reveal_class(class)
            style=move || preset.style(shown.get(), delay_ms)
        >
            {children()}
        </div>
    }
}

/// On-load entrance played by a CSS animation, independent of hydration
#[component]
pub fn Entrance(
    preset: Preset,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class style=preset.animation(delay_ms)>
            {children()}
        </div>
    }
}

/// Decoration bobbing up and down for as long as it is mounted
#[component]
pub fn Floating(float: FloatLoop, #[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=class style=float.animation()>
            {children()}
        </div>
    }
}

/// Keyframes for every on-load preset, plus the no-script fallback that
/// leaves scroll-gated elements at rest
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style inner_html=keyframes_css()></style>
        <noscript inner_html=NOSCRIPT_FALLBACK></noscript>
    }
}

const NOSCRIPT_FALLBACK: &str =
    "<style>.reveal { opacity: 1 !important; transform: none !important; }</style>";

fn reveal_class(class: &str) -> String {
    if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {}", class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{FADE_IN_UP, FLOAT_PRIMARY, HERO_VISUAL};

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_reveal_renders_hidden_state() {
        let html = render(|| {
            let shown = RwSignal::new(false);
            view! {
                <Reveal preset=FADE_IN_UP shown=shown delay_ms=300 class="feature-card">
                    "content"
                </Reveal>
            }
        });
        assert!(html.contains("class=\"reveal feature-card\""));
        assert!(html.contains("opacity: 0; transform: translate(0px, 40px) scale(1);"));
        assert!(!html.contains("transition"));
    }

    #[test]
    fn test_reveal_renders_resting_state_when_shown() {
        let html = render(|| {
            let shown = RwSignal::new(true);
            view! {
                <Reveal preset=FADE_IN_UP shown=shown delay_ms=300>
                    "content"
                </Reveal>
            }
        });
        assert!(html.contains("class=\"reveal\""));
        assert!(html.contains("opacity: 1;"));
        assert!(html.contains("300ms"));
    }

    #[test]
    fn test_entrance_uses_animation() {
        let html = render(|| view! { <Entrance preset=HERO_VISUAL>"x"</Entrance> });
        assert!(html.contains("animation: motion-hero-visual 800ms ease-out 300ms both;"));
    }

    #[test]
    fn test_floating_loops_forever() {
        let html = render(|| {
            view! { <Floating float=FLOAT_PRIMARY class="floating-badge">"x"</Floating> }
        });
        assert!(html.contains("float-primary 4000ms ease-in-out 0ms infinite"));
    }

    #[test]
    fn test_motion_styles_include_keyframes_and_fallback() {
        let html = render(|| view! { <MotionStyles /> });
        assert!(html.contains("@keyframes motion-fade-in-up"));
        assert!(html.contains("<noscript>"));
        assert!(html.contains(".reveal"));
    }
}
