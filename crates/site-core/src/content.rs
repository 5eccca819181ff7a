//! Static site content. Image references are opaque URLs.

use crate::portfolio::{PortfolioItem, Tag};

pub const BRAND_NAME: &str = "Limitless";

pub const SPLINE_SCENE_URL: &str = "https://prod.spline.design/7m4PRZ7kg6K1jPfF/scene.splinecode";

pub const HERO_TITLE: &str = "Design & Development";
pub const HERO_TITLE_ACCENT: &str = "Without Limits";
pub const HERO_SUBTITLE: &str =
    "We craft expressive digital products and brand systems with a premium, future-facing aesthetic.";
pub const HERO_CTA: &str = "Explore the work";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoryCard {
    pub image_url: &'static str,
    pub text: &'static str,
}

pub const STORY_CARDS: [StoryCard; 5] = [
    StoryCard {
        image_url: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop",
        text: "We start with story. The narrative defines form.",
    },
    StoryCard {
        image_url: "https://images.unsplash.com/photo-1520975922284-7b683aee0f22?q=80&w=1600&auto=format&fit=crop",
        text: "Design as performance — every pixel has intent.",
    },
    StoryCard {
        image_url: "https://images.unsplash.com/photo-1551281044-8d8f302f0f84?q=80&w=1600&auto=format&fit=crop",
        text: "Technology as canvas — systems that scale with style.",
    },
    StoryCard {
        image_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?q=80&w=1600&auto=format&fit=crop",
        text: "Motion to guide, never distract. Precision and play.",
    },
    StoryCard {
        image_url: "https://images.unsplash.com/photo-1542751371-adc38448a05e?q=80&w=1600&auto=format&fit=crop",
        text: "Outcomes that feel inevitable — crafted without limits.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceIcon {
    Palette,
    Code,
    Rocket,
    Sparkles,
}

impl ServiceIcon {
    pub fn name(self) -> &'static str {
        match self {
            ServiceIcon::Palette => "palette",
            ServiceIcon::Code => "code",
            ServiceIcon::Rocket => "rocket",
            ServiceIcon::Sparkles => "sparkles",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Palette => "\u{1F3A8}",
            ServiceIcon::Code => "&lt;/&gt;",
            ServiceIcon::Rocket => "\u{1F680}",
            ServiceIcon::Sparkles => "\u{2728}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str, // gradient classes
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: ServiceIcon::Palette,
        title: "Brand & Identity",
        description: "Expressive visual systems, design languages and premium brand assets.",
        accent: "from-blue-500 to-cyan-400",
    },
    Service {
        icon: ServiceIcon::Code,
        title: "Product & Engineering",
        description: "Robust web apps, design systems and performant frontends.",
        accent: "from-cyan-400 to-sky-300",
    },
    Service {
        icon: ServiceIcon::Rocket,
        title: "Launch & Growth",
        description: "Go-to-market sites, content engines and measurable outcomes.",
        accent: "from-blue-600 to-indigo-500",
    },
    Service {
        icon: ServiceIcon::Sparkles,
        title: "Motion & Interactivity",
        description: "Micro-interactions, 3D and motion systems that guide and delight.",
        accent: "from-sky-400 to-blue-300",
    },
];

pub static PORTFOLIO_ITEMS: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        title: "Nebula UI",
        tag: Tag::Brand,
        image_url: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?q=80&w=1600&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 2,
        title: "Astra Commerce",
        tag: Tag::Product,
        image_url: "https://images.unsplash.com/photo-1522071901873-411886a10004?q=80&w=1600&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 3,
        title: "Pulse Motion",
        tag: Tag::Motion,
        image_url: "https://images.unsplash.com/photo-1535223289827-42f1e9919769?q=80&w=1600&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 4,
        title: "Flux System",
        tag: Tag::Product,
        image_url: "https://images.unsplash.com/photo-1504805572947-34fad45aed93?q=80&w=1600&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 5,
        title: "Cobalt Site",
        tag: Tag::Web,
        image_url: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?q=80&w=1600&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 6,
        title: "Orion Brand",
        tag: Tag::Brand,
        image_url: "https://images.unsplash.com/photo-1520974735194-8d95b0d6d3b8?q=80&w=1600&auto=format&fit=crop",
    },
];

pub const CONTACT_HEADLINE: &str = "Let’s build without limits";
pub const CONTACT_SUBTITLE: &str =
    "Tell us about your brand or product. We’ll get back within 24h.";
pub const CONTACT_PITCH_POINTS: [&str; 3] = [
    "Senior design and engineering hands-on",
    "Motion systems and design ops baked-in",
    "Performance-first, accessible experiences",
];
