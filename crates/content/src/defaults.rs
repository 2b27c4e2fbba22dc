use crate::CardRecord;

struct Seed {
    id: &'static str,
    client_name: &'static str,
    project_title: &'static str,
    years: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    theme_color: &'static str,
    rotation: f64,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        client_name: "Eco Dashboard",
        project_title: "Energy usage at a glance",
        years: "2023",
        tags: &["UI/UX", "React"],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=1000&auto=format&fit=crop",
        theme_color: "#2f7d4f",
        rotation: -5.0,
    },
    Seed {
        id: "2",
        client_name: "Neon Commerce",
        project_title: "Storefront in WebGL",
        years: "2022",
        tags: &["E-commerce", "WebGL"],
        image: "https://images.unsplash.com/photo-1555421689-d68471e189f2?q=80&w=1000&auto=format&fit=crop",
        theme_color: "#d6457a",
        rotation: 3.0,
    },
    Seed {
        id: "3",
        client_name: "FinTech App",
        project_title: "Mobile banking",
        years: "2021",
        tags: &["Finance", "Mobile"],
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?q=80&w=1000&auto=format&fit=crop",
        theme_color: "#2f5fd6",
        rotation: -3.0,
    },
    Seed {
        id: "4",
        client_name: "Dark Mode System",
        project_title: "Design system",
        years: "2020",
        tags: &["Design System", "CSS"],
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000&auto=format&fit=crop",
        theme_color: "#1b1b1f",
        rotation: 6.0,
    },
];

/// Deck used when the host page supplies none.
pub fn default_cards() -> Vec<CardRecord> {
    SEEDS
        .iter()
        .map(|s| CardRecord {
            id: s.id.to_string(),
            client_name: s.client_name.to_string(),
            project_title: s.project_title.to_string(),
            years: s.years.to_string(),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            image: s.image.to_string(),
            image_alt: s.client_name.to_string(),
            link: Some("#".to_string()),
            theme_color: s.theme_color.to_string(),
            rotation: s.rotation,
        })
        .collect()
}
