use super::{InputKind, PromptConfig, PromptInput};

/// Display order of the catalog.
pub const PROMPT_ORDER: &[&str] = &[
    "bio",
    "reels",
    "hooks",
    "captions",
    "carousels",
    "outreach",
    "growth",
    "monetization",
    "workflow",
];

const fn text(id: &'static str, label: &'static str, placeholder: &'static str) -> PromptInput {
    PromptInput {
        id,
        label,
        kind: InputKind::Text,
        options: None,
        placeholder: Some(placeholder),
    }
}

const fn number(id: &'static str, label: &'static str, placeholder: &'static str) -> PromptInput {
    PromptInput {
        id,
        label,
        kind: InputKind::Number,
        options: None,
        placeholder: Some(placeholder),
    }
}

const fn select(
    id: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> PromptInput {
    PromptInput {
        id,
        label,
        kind: InputKind::Select,
        options: Some(options),
        placeholder: None,
    }
}

pub static PROMPTS: &[PromptConfig] = &[
    PromptConfig {
        id: "bio",
        name: "Bio",
        description: "Get a clear Instagram bio with a value statement and call-to-action",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., fitness coaching"),
            text("audience", "Audience", "e.g., busy professionals"),
            text("goal", "Main Instagram goal", "e.g., get more clients"),
        ],
        template: "Write a simple Instagram bio with a clear one-line value statement and one call-to-action.",
    },
    PromptConfig {
        id: "reels",
        name: "Reels",
        description: "10 beginner-friendly Reel ideas that don't need fancy editing",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., personal finance"),
            text("audience", "Audience", "e.g., college students"),
            select("goal", "Goal", &["followers", "clients", "sales", "community"]),
        ],
        template: "Give me 10 Reel ideas that are beginner-friendly and do not require fancy editing.",
    },
    PromptConfig {
        id: "hooks",
        name: "Hooks",
        description: "10 scroll-stopping hooks for your Reels",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., skincare"),
            text("audience", "Audience", "e.g., women 25-40"),
            text(
                "problem",
                "One problem your audience struggles with",
                "e.g., acne breakouts",
            ),
        ],
        template: "Write 10 simple Instagram Reel hooks that would stop my audience from scrolling.",
    },
    PromptConfig {
        id: "captions",
        name: "Captions",
        description: "5 different caption styles teaching the same lesson",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., productivity"),
            text("audience", "Audience", "e.g., entrepreneurs"),
            text("lesson", "One lesson from the post", "e.g., time blocking works"),
        ],
        template: "Write 5 caption options that teach the same lesson in different ways.",
    },
    PromptConfig {
        id: "carousels",
        name: "Carousels",
        description: "A complete carousel outline with slide-by-slide text",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., marketing tips"),
            text("audience", "Audience", "e.g., small business owners"),
            text(
                "lesson",
                "One big lesson for this carousel",
                "e.g., how to write better hooks",
            ),
            number("slides", "Number of slides", "7"),
        ],
        template: "Create a carousel outline with short slide text and one clear takeaway.",
    },
    PromptConfig {
        id: "outreach",
        name: "Outreach",
        description: "A short, respectful DM template for collaborations",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., travel photography"),
            text("audience", "Audience", "e.g., adventure seekers"),
            text(
                "collaboration",
                "Collaboration type you want",
                "e.g., brand partnership",
            ),
        ],
        template: "Write a DM outreach message to collaborate that is short, clear, and respectful.",
    },
    PromptConfig {
        id: "growth",
        name: "Growth",
        description: "10 post ideas optimized for your target metric",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., cooking"),
            text("audience", "Audience", "e.g., home cooks"),
            select("metric", "Target metric", &["saves", "shares", "follows"]),
        ],
        template: "Suggest 10 post ideas engineered to increase this metric.",
    },
    PromptConfig {
        id: "monetization",
        name: "Monetization",
        description: "A quick-start offer package and Instagram offer statement",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., graphic design"),
            text("audience", "Audience", "e.g., startups"),
            select(
                "sellType",
                "What you're selling",
                &["service", "product", "course", "newsletter"],
            ),
        ],
        template: "Package my service into a simple \"quick start\" offer and write a simple Instagram offer statement that a beginner can understand in 5 seconds.",
    },
    PromptConfig {
        id: "workflow",
        name: "Workflow",
        description: "A simple weekly content creation workflow for your tools",
        inputs: &[
            text("niche", "Niche/Topic", "e.g., lifestyle blogging"),
            text("audience", "Audience", "e.g., millennials"),
            select("tools", "Tools you have", &["phone only", "phone + laptop"]),
        ],
        template: "Build a simple content creation workflow I can repeat every week with my tools.",
    },
];
