use leptos::prelude::*;

/// Icon from `public/icons`, painted with the current text color.
///
/// The SVG is applied as a CSS mask so the icon inherits `color` from its
/// parent instead of the stroke baked into the file.
#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// Edge length in px
    #[prop(default = 20)]
    size: u32,
    /// Extra CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {}", class)
    };

    view! {
        <span
            class=class
            style=icon_style(name, size)
            aria-hidden="true"
        ></span>
    }
}

fn icon_style(name: &str, size: u32) -> String {
    format!(
        "width: {size}px; height: {size}px; --icon: url(/icons/{name}.svg);"
    )
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const AWARD: &str = "award";
    pub const BAR_CHART: &str = "bar-chart-3";
    pub const BELL: &str = "bell";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const EYE: &str = "eye";
    pub const FILE_TEXT: &str = "file-text";
    pub const GITHUB: &str = "github";
    pub const GLOBE: &str = "globe";
    pub const LINKEDIN: &str = "linkedin";
    pub const LOCK: &str = "lock";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const PLAY: &str = "play";
    pub const RADIO: &str = "radio";
    pub const SHIELD: &str = "shield";
    pub const STAR: &str = "star";
    pub const STAR_FILLED: &str = "star-filled";
    pub const TARGET: &str = "target";
    pub const TWITTER: &str = "twitter";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";

    #[cfg(test)]
    pub const ALL: [&str; 28] = [
        ACTIVITY,
        ARROW_RIGHT,
        AWARD,
        BAR_CHART,
        BELL,
        CALENDAR,
        CHECK_CIRCLE,
        CHEVRON_RIGHT,
        CLOCK,
        EYE,
        FILE_TEXT,
        GITHUB,
        GLOBE,
        LINKEDIN,
        LOCK,
        MAP_PIN,
        MENU,
        MESSAGE_SQUARE,
        PLAY,
        RADIO,
        SHIELD,
        STAR,
        STAR_FILLED,
        TARGET,
        TWITTER,
        USERS,
        X,
        ZAP,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::referenced_icons;

    #[test]
    fn test_icon_style() {
        assert_eq!(
            icon_style("shield", 24),
            "width: 24px; height: 24px; --icon: url(/icons/shield.svg);"
        );
    }

    #[test]
    fn test_content_icons_exist() {
        for name in referenced_icons() {
            assert!(icons::ALL.contains(&name), "missing icon {name}");
        }
    }

    #[test]
    fn test_icon_files_present() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in icons::ALL {
            let path = dir.join(format!("{name}.svg"));
            assert!(path.exists(), "{} not found", path.display());
        }
    }
}
