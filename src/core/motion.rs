//! Declarative motion presets
//!
//! Every animation on the landing page is described by plain data:
//! - [`MotionState`]: opacity, offset and scale of an element at rest or hidden
//! - [`Transition`]: duration, delay and easing
//! - [`Preset`]: a hidden state, a resting state and the transition between them
//! - [`Stagger`]: delays applied to successive siblings
//! - [`FloatLoop`]: an infinite vertical oscillation for decorations
//!
//! Nothing here interpolates anything. The presets render to CSS declarations
//! and the browser's transition/animation engine does the rest.

/// Visual state of an animated element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub opacity: f32,
    /// Horizontal offset in px
    pub x: i32,
    /// Vertical offset in px (positive is down)
    pub y: i32,
    pub scale: f32,
}

impl MotionState {
    /// Fully visible, untransformed
    pub const REST: MotionState = MotionState {
        opacity: 1.0,
        x: 0,
        y: 0,
        scale: 1.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            x: 0,
            y: 0,
            scale: 1.0,
        }
    }

    pub const fn offset_y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    pub const fn offset_x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub const fn opaque(mut self) -> Self {
        self.opacity = 1.0;
        self
    }

    /// CSS `transform` value for this state
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }

    /// Inline style declarations for this state
    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

/// Timing function of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Smooth deceleration used by the slide presets
    pub const SMOOTH: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

/// Duration, delay and easing of a transition (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// A named entrance animation: hidden state, resting state and timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub hidden: MotionState,
    pub visible: MotionState,
    pub transition: Transition,
}

impl Preset {
    /// Inline style for an element driven by a visibility flag.
    ///
    /// While hidden the element sits in its offset state. Once shown it moves
    /// to rest with a CSS transition whose delay is the preset's own delay
    /// plus `extra_delay_ms` (the element's stagger slot).
    pub fn style(&self, shown: bool, extra_delay_ms: u32) -> String {
        if !shown {
            return self.hidden.css();
        }

        let t = self.transition;
        let delay = t.delay_ms + extra_delay_ms;
        let easing = t.easing.css();
        format!(
            "{} transition: opacity {}ms {easing} {delay}ms, transform {}ms {easing} {delay}ms;",
            self.visible.css(),
            t.duration_ms,
            t.duration_ms,
        )
    }

    /// `@keyframes` rule playing this preset once, hidden to rest
    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.keyframes_name(),
            self.hidden.css(),
            self.visible.css()
        )
    }

    /// Inline `animation` style for on-load entrances.
    ///
    /// `both` fill mode keeps the element hidden during its delay and at rest
    /// once finished.
    pub fn animation(&self, extra_delay_ms: u32) -> String {
        let t = self.transition;
        format!(
            "animation: {} {}ms {} {}ms both;",
            self.keyframes_name(),
            t.duration_ms,
            t.easing.css(),
            t.delay_ms + extra_delay_ms
        )
    }

    pub fn keyframes_name(&self) -> String {
        format!("motion-{}", self.name)
    }
}

pub const FADE_IN_UP: Preset = Preset {
    name: "fade-in-up",
    hidden: MotionState::hidden().offset_y(40),
    visible: MotionState::REST,
    transition: Transition::new(600, Easing::SMOOTH),
};

pub const FADE_IN_DOWN: Preset = Preset {
    name: "fade-in-down",
    hidden: MotionState::hidden().offset_y(-40),
    visible: MotionState::REST,
    transition: Transition::new(600, Easing::SMOOTH),
};

pub const FADE_IN: Preset = Preset {
    name: "fade-in",
    hidden: MotionState::hidden(),
    visible: MotionState::REST,
    transition: Transition::new(600, Easing::EaseOut),
};

pub const SCALE_IN: Preset = Preset {
    name: "scale-in",
    hidden: MotionState::hidden().scaled(0.9),
    visible: MotionState::REST,
    transition: Transition::new(500, Easing::EaseOut),
};

/// Navbar drops in from above the viewport on load
pub const NAVBAR_SLIDE: Preset = Preset {
    name: "navbar-slide",
    hidden: MotionState::hidden().opaque().offset_y(-100),
    visible: MotionState::REST,
    transition: Transition::new(600, Easing::EaseOut),
};

/// Hero dashboard mock grows in from the right
pub const HERO_VISUAL: Preset = Preset {
    name: "hero-visual",
    hidden: MotionState::hidden().scaled(0.9).offset_x(50),
    visible: MotionState::REST,
    transition: Transition::new(800, Easing::EaseOut).delayed(300),
};

/// Presets that play on load through keyframes rather than transitions
pub const KEYFRAME_PRESETS: [Preset; 6] = [
    FADE_IN_UP,
    FADE_IN_DOWN,
    FADE_IN,
    SCALE_IN,
    NAVBAR_SLIDE,
    HERO_VISUAL,
];

/// Staggered-children container timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_children_ms: u32,
}

impl Stagger {
    /// Delay of the `index`-th child
    pub fn delay(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_children_ms * index as u32
    }

    /// Stagger for a container that itself starts `offset_ms` late
    pub fn after(&self, offset_ms: u32) -> Stagger {
        Stagger {
            delay_children_ms: self.delay_children_ms + offset_ms,
            ..*self
        }
    }
}

pub const STAGGER: Stagger = Stagger {
    delay_children_ms: 200,
    stagger_children_ms: 100,
};

/// Infinite `0 -> -amplitude -> 0` vertical oscillation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLoop {
    pub name: &'static str,
    pub amplitude_px: u32,
    pub period_ms: u32,
    pub delay_ms: u32,
}

impl FloatLoop {
    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ 0%, 100% {{ transform: translateY(0px); }} 50% {{ transform: translateY(-{}px); }} }}",
            self.name, self.amplitude_px
        )
    }

    pub fn animation(&self) -> String {
        format!(
            "animation: {} {}ms {} {}ms infinite;",
            self.name,
            self.period_ms,
            Easing::EaseInOut.css(),
            self.delay_ms
        )
    }
}

pub const FLOAT_PRIMARY: FloatLoop = FloatLoop {
    name: "float-primary",
    amplitude_px: 10,
    period_ms: 4000,
    delay_ms: 0,
};

pub const FLOAT_SECONDARY: FloatLoop = FloatLoop {
    name: "float-secondary",
    amplitude_px: 15,
    period_ms: 5000,
    delay_ms: 1000,
};

/// Decorative loops of the two hero badges, in render order
pub const FLOAT_LOOPS: [FloatLoop; 2] = [FLOAT_PRIMARY, FLOAT_SECONDARY];

/// Stylesheet text with keyframes for every on-load preset and float loop
pub fn keyframes_css() -> String {
    let mut css = String::new();
    for preset in KEYFRAME_PRESETS {
        css.push_str(&preset.keyframes());
        css.push('\n');
    }
    for float in FLOAT_LOOPS {
        css.push_str(&float.keyframes());
        css.push('\n');
    }
    css
}
