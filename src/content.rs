pub const BRAND: &str = "Voxline";

pub const HERO_WORDS: &[&str] = &[
    "receptionist",
    "sales rep",
    "appointment setter",
    "support desk",
    "night shift",
];

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 24, suffix: "/7", label: "Calls answered, every day of the year" },
    Stat { value: 62, suffix: "%", label: "Of small business calls go unanswered today" },
    Stat { value: 850, suffix: "ms", label: "Average time to first spoken word" },
    Stat { value: 40, suffix: "+", label: "Businesses running on our agents" },
];

pub const STATS_SOURCE: &str = "Source: widely reported lead response and customer experience studies.";

pub struct Pillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "⏱",
        title: "Enhancing First Impressions & Speed",
        body: "Instant response meets polished tone. Your brand feels premium from the first hello.",
    },
    Pillar {
        icon: "✦",
        title: "Proactive Capture & Fast Follow-up",
        body: "Structure intake, qualify leads, and trigger workflows automatically.",
    },
    Pillar {
        icon: "☺",
        title: "Reduce Team Load, Keep the Human",
        body: "Offload repetitive calls while your team focuses on high-value conversations.",
    },
];

pub struct Founder {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Maya Lindqvist",
        role: "Co-founder, CEO",
        bio: "Ran inbound sales for a regional clinic chain and watched half the leads die on hold. Now Maya makes sure nobody waits.",
    },
    Founder {
        name: "Daniel Okafor",
        role: "Co-founder, CTO",
        bio: "Built real-time speech pipelines for telecom carriers. Obsessed with shaving latency until conversations feel human.",
    },
];

impl Founder {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS: &[Step] = &[
    Step {
        title: "Discovery call",
        body: "We learn how your phones ring today: who calls, what they ask, where calls get dropped.",
    },
    Step {
        title: "Agent design",
        body: "We script, voice and connect an agent to your calendar, CRM and knowledge base.",
    },
    Step {
        title: "Live in a week",
        body: "Forward your number. The agent answers, books and qualifies while we tune it on real calls.",
    },
    Step {
        title: "Ongoing tuning",
        body: "Weekly transcripts review and monthly reports so the agent keeps getting better.",
    },
];

/// Anchors every landing page build must render, checked once on mount.
pub const SECTION_IDS: &[&str] = &["top", "mission", "founders", "process", "faq", "contact"];

/// Decorative layers the mount check also looks for, as CSS selectors.
pub const LANDMARK_SELECTORS: &[&str] = &["[data-testid='bg-grid']", "[data-testid='hero-keyword-strip']"];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Will callers know they are talking to an AI?",
        answer: "Our agents introduce themselves honestly. Most callers care that they get a fast, correct answer, and that is what the agent is built for.",
    },
    Faq {
        question: "Do I need to change my phone number?",
        answer: "No. You forward your existing number, or only the calls you miss, to the agent. Switching back takes one setting.",
    },
    Faq {
        question: "What happens when the agent can't help?",
        answer: "It takes a message, or transfers the call to a person you choose, and sends you a summary either way.",
    },
    Faq {
        question: "Which tools do you integrate with?",
        answer: "Google and Outlook calendars, the common CRMs, and anything with a webhook. If you use something unusual, ask us.",
    },
    Faq {
        question: "How long does setup take?",
        answer: "Most businesses go live within a week of the discovery call.",
    },
];
