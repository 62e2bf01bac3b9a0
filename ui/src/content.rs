//! Everything the page says. Plain data, rendered by `pages::home` and the
//! header/footer components.

pub const OWNER_NAME: &str = "Dawit Abrha Weldegebriel";
pub const GITHUB_URL: &str = "https://github.com/Dafi-web";
pub const CONTACT_EMAIL: &str = "dawitabrha.dev@gmail.com";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Education", href: "#education" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub code_url: &'static str,
    pub link_label: &'static str,
}

impl Project {
    /// Label of the source link: "Code" next to a live site, "GitHub" on its own.
    pub fn code_label(&self) -> &'static str {
        if self.live_url.is_some() { "Code" } else { "GitHub" }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "dafitech.org",
        description: "A technology-focused platform built for community impact, showcasing services and initiatives with a performant, accessible user experience.",
        stack: &["React", "Node.js", "MongoDB"],
        live_url: Some("https://dafitech.org"),
        code_url: GITHUB_URL,
        link_label: "Visit site",
    },
    Project {
        title: "abunearegawi.nl",
        description: "Developed a modern web presence for a community organization, combining intuitive navigation, localized content, and secure integrations.",
        stack: &["Next.js", "TypeScript", "Tailwind CSS"],
        live_url: Some("https://abunearegawi.nl"),
        code_url: GITHUB_URL,
        link_label: "Visit site",
    },
    Project {
        title: "Open Source @ Dafi-web",
        description: "A collection of repositories exploring modern web architectures, component systems, and automation pipelines. Continuous experimentation keeps my toolkit fresh.",
        stack: &["Full MERN", "CI/CD", "Design Systems"],
        live_url: None,
        code_url: GITHUB_URL,
        link_label: "Explore repos",
    },
];

pub struct Stat {
    pub value: &'static [&'static str],
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: &["5+"], label: "MERN projects delivered" },
    Stat { value: &["Electrical &", "Computer Engineering"], label: "Academic foundation" },
    Stat { value: &["Collaborative"], label: "Working with cross-functional teams" },
];

pub struct Value {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        name: "End-to-end ownership:",
        detail: "Seeing products through from concept to launch.",
    },
    Value {
        name: "Continuous learning:",
        detail: "Staying ahead with modern JavaScript, DevOps, and design trends.",
    },
    Value {
        name: "Impact:",
        detail: "Building tools that matter for communities and organizations.",
    },
];

pub struct Degree {
    pub title: &'static str,
    pub institution: &'static str,
    pub summary: &'static str,
}

pub const EDUCATION: &[Degree] = &[
    Degree {
        title: "Master of Science, Electrical and Computer Engineering",
        institution: "Addis Ababa Science and Technology University",
        summary: "Advanced coursework and research blending intelligent systems, embedded solutions, and software engineering to solve real-world challenges.",
    },
    Degree {
        title: "Bachelor of Science, Electrical and Computer Engineering",
        institution: "Mettu University, Ethiopia",
        summary: "Built a strong engineering foundation, combining hardware knowledge with software principles. Led collaborative academic projects emphasizing practical innovation.",
    },
];

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Frontend",
        skills: &[
            "React.js & Next.js",
            "TypeScript & JavaScript (ES6+)",
            "Tailwind CSS, Styled Components",
            "Responsive UI Design",
        ],
    },
    SkillGroup {
        name: "Backend",
        skills: &[
            "Node.js & Express",
            "RESTful API Design",
            "MongoDB & Mongoose",
            "Authentication & Authorization",
        ],
    },
    SkillGroup {
        name: "DevOps & Tools",
        skills: &[
            "Git & GitHub Actions",
            "Docker & Deployment Pipelines",
            "Cloud Hosting (Vercel, Netlify, Render)",
            "Agile & Scrum Collaboration",
        ],
    },
    SkillGroup {
        name: "Soft Skills",
        skills: &[
            "Systems Thinking",
            "Technical Communication",
            "Mentorship & Team Leadership",
            "Problem Solving",
        ],
    },
];
