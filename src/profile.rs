//! Static biographical content. Displayed verbatim, nothing is derived from it.

pub const HANDLE: &str = "@w0vz";
pub const ROLE: &str = "Developer";
pub const TAGLINE: &str = "Embedded & Backend Systems";
pub const BIO: &str = "Embedded & Backend engineer focused on real-time systems, IoT solutions, and high-performance distributed architectures. Building the future one line of code at a time.";
pub const AVATAR: &str = "/img/avatar.svg";

pub const GITHUB_URL: &str = "https://github.com/w0vz";
pub const CONTACT_EMAIL: &str = "mailto:contact@w0vz.dev";

pub struct Weather {
    pub temp_c: i32,
    pub condition: &'static str,
    pub location: &'static str,
}

pub const WEATHER: Weather = Weather {
    temp_c: 22,
    condition: "Partly Cloudy",
    location: "Moscow",
};

pub struct LearningItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static CURRENTLY_LEARNING: &[LearningItem] = &[
    LearningItem {
        icon: "📖",
        title: "WebAssembly",
        blurb: "Exploring WASM for high-performance web applications",
    },
    LearningItem {
        icon: "⚡",
        title: "Machine Learning",
        blurb: "ML algorithms for embedded systems optimization",
    },
    LearningItem {
        icon: "☁️",
        title: "Edge Computing",
        blurb: "Distributed computing at the network edge",
    },
];

/// Headline figure on the projects page, not computed from the catalog.
pub const DATA_POINTS_PROCESSED: &str = "2M+";
