//! Page copy
//!
//! Every list rendered on the landing page. Icon fields hold names from the
//! `public/icons` set.

use crate::ui::icon::icons;

/// In-page navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Features,
    CommandCenter,
    Pricing,
    Testimonials,
    /// Demo booking, handled outside this site
    Demo,
    /// Trial signup, handled outside this site
    Trial,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Features,
        Anchor::CommandCenter,
        Anchor::Pricing,
        Anchor::Testimonials,
        Anchor::Demo,
        Anchor::Trial,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Features => "features",
            Anchor::CommandCenter => "command-center",
            Anchor::Pricing => "pricing",
            Anchor::Testimonials => "testimonials",
            Anchor::Demo => "demo",
            Anchor::Trial => "trial",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Anchor::Features => "#features",
            Anchor::CommandCenter => "#command-center",
            Anchor::Pricing => "#pricing",
            Anchor::Testimonials => "#testimonials",
            Anchor::Demo => "#demo",
            Anchor::Trial => "#trial",
        }
    }

    /// Whether a section on this page carries the anchor's id
    pub fn is_rendered_section(&self) -> bool {
        !matches!(self, Anchor::Demo | Anchor::Trial)
    }
}

pub const BRAND_PRIMARY: &str = "IRA";
pub const BRAND_SECONDARY: &str = "FORCE";
pub const BRAND_NAME: &str = "IRA FORCE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Features",
        anchor: Anchor::Features,
    },
    NavLink {
        label: "Command Center",
        anchor: Anchor::CommandCenter,
    },
    NavLink {
        label: "Pricing",
        anchor: Anchor::Pricing,
    },
    NavLink {
        label: "Testimonials",
        anchor: Anchor::Testimonials,
    },
];

// ----------------------------------------------------------------------------
// Hero
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: "99.9%",
        label: "Uptime SLA",
    },
    Stat {
        value: "50K+",
        label: "Guards Managed",
    },
    Stat {
        value: "24/7",
        label: "Support Available",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCard {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const DASHBOARD_CARDS: [DashboardCard; 3] = [
    DashboardCard {
        icon: icons::USERS,
        value: "284",
        label: "Active Guards",
    },
    DashboardCard {
        icon: icons::MAP_PIN,
        value: "47",
        label: "Sites Covered",
    },
    DashboardCard {
        icon: icons::BELL,
        value: "12",
        label: "Active Alerts",
    },
];

/// Decorative badge floating over the hero dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingBadge {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const FLOATING_BADGES: [FloatingBadge; 2] = [
    FloatingBadge {
        icon: icons::CHECK_CIRCLE,
        title: "Patrol Complete",
        detail: "Building A - Zone 3",
    },
    FloatingBadge {
        icon: icons::CLOCK,
        title: "Shift Started",
        detail: "8:00 AM - John D.",
    },
];

// ----------------------------------------------------------------------------
// Trust & features
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustBadge {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const TRUST_BADGES: [TrustBadge; 4] = [
    TrustBadge {
        icon: icons::LOCK,
        label: "SOC 2 Type II",
    },
    TrustBadge {
        icon: icons::SHIELD,
        label: "GDPR Compliant",
    },
    TrustBadge {
        icon: icons::AWARD,
        label: "ISO 27001",
    },
    TrustBadge {
        icon: icons::GLOBE,
        label: "HIPAA Ready",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: [&'static str; 3],
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: icons::CLOCK,
        title: "Time & Attendance",
        description: "Multi-method clock in/out with GPS verification, geofencing, and real-time breadcrumb tracking.",
        bullets: [
            "Mobile, Kiosk & Web Clock-in",
            "Geofencing & GPS Tracking",
            "Automated Overtime Alerts",
        ],
    },
    Feature {
        icon: icons::MAP_PIN,
        title: "Guard Tour System",
        description: "Checkpoint verification with NFC, QR codes, and intelligent route optimization.",
        bullets: [
            "NFC/QR Checkpoint Scanning",
            "Route Optimization",
            "Real-time Patrol Progress",
        ],
    },
    Feature {
        icon: icons::CALENDAR,
        title: "Smart Scheduling",
        description: "AI-assisted scheduling with drag-and-drop interface and automated shift management.",
        bullets: [
            "AI-Assisted Scheduling",
            "Shift Swap & Replacement",
            "Work Hour Compliance",
        ],
    },
    Feature {
        icon: icons::FILE_TEXT,
        title: "Incident Reporting",
        description: "Comprehensive incident documentation with multimedia support and AI-assisted writing.",
        bullets: [
            "AI-Powered Report Writing",
            "Photo/Video Evidence",
            "Real-time Escalation",
        ],
    },
    Feature {
        icon: icons::MESSAGE_SQUARE,
        title: "Communications Hub",
        description: "Unified team messaging, company feed, and help desk all in one platform.",
        bullets: [
            "Team Chat & Messaging",
            "Company Announcements",
            "Multi-language Support",
        ],
    },
    Feature {
        icon: icons::BAR_CHART,
        title: "Analytics & Insights",
        description: "Real-time dashboards, custom reports, and predictive analytics for better decisions.",
        bullets: [
            "Live Operational Dashboards",
            "Custom Report Builder",
            "Predictive Analytics",
        ],
    },
];

// ----------------------------------------------------------------------------
// Command center
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COMMAND_FEATURES: [CommandFeature; 3] = [
    CommandFeature {
        icon: icons::EYE,
        title: "Real-time Visibility",
        description: "Monitor all guard locations, patrol progress, and incidents on a single dashboard.",
    },
    CommandFeature {
        icon: icons::RADIO,
        title: "Intelligent Dispatch",
        description: "Automatically suggest the nearest available officer based on proximity and skills.",
    },
    CommandFeature {
        icon: icons::ACTIVITY,
        title: "System Integrations",
        description: "Connect with CCTV, access control, and alarm systems for unified monitoring.",
    },
];

pub const COMMAND_TABS: [&str; 3] = ["Live View", "Incidents", "Patrols"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn class(&self) -> &'static str {
        match self {
            AlertSeverity::Success => "success",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ALERTS: [Alert; 3] = [
    Alert {
        severity: AlertSeverity::Success,
        icon: icons::CHECK_CIRCLE,
        title: "Patrol Complete",
        description: "Zone A - Building 1",
    },
    Alert {
        severity: AlertSeverity::Warning,
        icon: icons::BELL,
        title: "Checkpoint Missed",
        description: "Zone C - Gate 4",
    },
    Alert {
        severity: AlertSeverity::Info,
        icon: icons::CLOCK,
        title: "Shift Change",
        description: "Team Alpha - 8:00 PM",
    },
];

// ----------------------------------------------------------------------------
// Pricing
// ----------------------------------------------------------------------------

/// Label that marks a plan without a fixed monthly rate
pub const CUSTOM_PRICE: &str = "Custom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// Monthly amount in USD
    Monthly(&'static str),
    /// Negotiated with sales
    Custom,
}

impl Price {
    pub fn from_label(label: &'static str) -> Self {
        if label == CUSTOM_PRICE {
            Price::Custom
        } else {
            Price::Monthly(label)
        }
    }

    /// Amount as displayed in the price block
    pub fn amount(&self) -> &'static str {
        match self {
            Price::Monthly(amount) => amount,
            Price::Custom => CUSTOM_PRICE,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Price::Custom)
    }

    pub fn cta_label(&self) -> &'static str {
        match self {
            Price::Monthly(_) => "Start Free Trial",
            Price::Custom => "Contact Sales",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub featured: bool,
    pub features: &'static [&'static str],
}

impl PricingPlan {
    pub fn card_class(&self) -> &'static str {
        if self.featured {
            "pricing-card featured"
        } else {
            "pricing-card"
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.featured {
            "btn btn-primary"
        } else {
            "btn btn-outline"
        }
    }
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        description: "Perfect for small security teams",
        price: Price::Monthly("49"),
        featured: false,
        features: &[
            "Up to 30 users",
            "Time & Attendance",
            "Basic Scheduling",
            "Mobile App Access",
            "Email Support",
            "5 GB Storage",
        ],
    },
    PricingPlan {
        name: "Professional",
        description: "For growing security operations",
        price: Price::Monthly("99"),
        featured: true,
        features: &[
            "Up to 100 users",
            "Guard Tour System",
            "Incident Reporting",
            "Geofencing & GPS",
            "Priority Support",
            "50 GB Storage",
            "API Access",
        ],
    },
    PricingPlan {
        name: "Enterprise",
        description: "For large-scale operations",
        price: Price::Custom,
        featured: false,
        features: &[
            "Unlimited users",
            "Command Center (SOC)",
            "Advanced Analytics",
            "Custom Integrations",
            "Dedicated Success Manager",
            "Unlimited Storage",
            "SSO & Enhanced Security",
            "SLA Guarantee",
        ],
    },
];

// ----------------------------------------------------------------------------
// Testimonials
// ----------------------------------------------------------------------------

/// Stars shown on every testimonial card
pub const RATING_STARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub initials: &'static str,
}

impl Testimonial {
    /// "Role, Company" byline
    pub fn byline(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "IRA FORCE transformed our operations. We've reduced scheduling conflicts by 85% and our guards love the mobile app. The command center gives us visibility we never had before.",
        author: "Michael Chen",
        role: "Operations Director",
        company: "SecureGuard Inc.",
        initials: "MC",
    },
    Testimonial {
        quote: "The incident reporting with AI assistance has saved our team countless hours. Reports are more detailed and consistent. Our clients are impressed with the professionalism.",
        author: "Sarah Johnson",
        role: "Regional Manager",
        company: "Allied Protection Services",
        initials: "SJ",
    },
    Testimonial {
        quote: "Implementation was seamless and the support team is exceptional. We're now managing 200+ guards across 35 sites with a fraction of the administrative overhead.",
        author: "David Park",
        role: "CEO",
        company: "Sentinel Security Group",
        initials: "DP",
    },
];

// ----------------------------------------------------------------------------
// Footer
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "Product",
        links: &[
            "Features",
            "Command Center",
            "Mobile App",
            "Integrations",
            "API Docs",
            "Pricing",
        ],
    },
    FooterColumn {
        heading: "Solutions",
        links: &[
            "Security Services",
            "Facilities Management",
            "Healthcare",
            "Logistics",
            "Retail",
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            "Blog",
            "Case Studies",
            "Webinars",
            "Help Center",
            "Documentation",
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Contact", "Partners", "Press"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: icons::TWITTER,
        label: "Twitter",
    },
    SocialLink {
        icon: icons::LINKEDIN,
        label: "LinkedIn",
    },
    SocialLink {
        icon: icons::GITHUB,
        label: "GitHub",
    },
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

pub const COPYRIGHT: &str = "© 2025 IRA FORCE. All rights reserved.";

/// Every icon name referenced by the lists above
pub fn referenced_icons() -> Vec<&'static str> {
    let mut names = vec![icons::SHIELD];
    names.extend(DASHBOARD_CARDS.iter().map(|c| c.icon));
    names.extend(FLOATING_BADGES.iter().map(|b| b.icon));
    names.extend(TRUST_BADGES.iter().map(|b| b.icon));
    names.extend(FEATURES.iter().map(|f| f.icon));
    names.extend(COMMAND_FEATURES.iter().map(|f| f.icon));
    names.extend(ALERTS.iter().map(|a| a.icon));
    names.extend(SOCIAL_LINKS.iter().map(|s| s.icon));
    names.sort_unstable();
    names.dedup();
    names
}
