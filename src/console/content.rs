//! Fixed content shown by the console commands.

/// Prompt shown before every echoed command and the live input line
pub const PROMPT: &str = "leo@redshift";

/// Where the `blog` command navigates
pub const BLOG_PATH: &str = "/blog";

pub const WELCOME: &str = "Welcome to Leo Cai's terminal. Type 'help' to see available commands.";

/// `(usage, description)` rows of the `help` output
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("help", "Show this help message"),
    ("about", "Learn about Leo Cai"),
    ("skills", "View technical skills"),
    ("contact", "Get contact information"),
    ("blog", "Visit the blog"),
    ("motto", "Display personal motto"),
    ("clear", "Clear the terminal"),
    ("echo [message]", "Display a message"),
];

pub const ABOUT: &[&str] = &[
    "Hello, I'm Leo Cai!",
    "I'm a Software Engineer at AWS Redshift, passionate about database engineering, \
     distributed systems, and finding elegant solutions to complex problems.",
    "My philosophy is \"Best coding is no coding\" - sometimes the best solution \
     isn't adding more code, but finding simpler ways to solve problems.",
];

pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory { name: "Programming", items: &["Java", "Kotlin", "Python", "C#", "JS/TS"] },
    SkillCategory { name: "Frontend", items: &["Angular", "React"] },
    SkillCategory { name: "Backend", items: &["Spring", ".NET Core", "Flask"] },
    SkillCategory { name: "Mobile", items: &["Android", "Compose"] },
    SkillCategory { name: "Databases", items: &["PostgreSQL", "MongoDB", "DynamoDB"] },
    SkillCategory { name: "Cloud", items: &["AWS"] },
];

pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "github.com/leo-xiangyu-cai",
        url: "https://github.com/leo-xiangyu-cai",
    },
    ContactLink {
        label: "linkedin.com/in/xiangyu-cai",
        url: "https://www.linkedin.com/in/xiangyu-cai-27b6a4a5/",
    },
];

/// "Best coding is no coding" banner
pub const MOTTO_ART: &[&str] = &[
    r"  ____           _     ____          _ _                 _          _   _          ____          _ _",
    r" | __ )  ___  __| |_  / ___|___   __| (_)_ __   __ _   (_)___     | \ | | ___    / ___|___   __| (_)_ __   __ _",
    r" |  _ \ / _ \/ _` | |/ /   / _ \ / _` | | '_ \ / _` |  | / __|    |  \| |/ _ \  / /   / _ \ / _` | | '_ \ / _` |",
    r" | |_) |  __/ (_| |   <   | (_) | (_| | | | | | (_| |_ | \__ \    | |\  | (_) |/ /___| (_) | (_| | | | | | (_| |",
    r" |____/ \___|\__,_|_|\_\   \___/ \__,_|_|_| |_|\__, (_)/ |___/    |_| \_|\___/ \____/\___/ \__,_|_|_| |_|\__, |",
    r"                                                |___/ |__/                                                |___/",
];

pub const MOTTO: &str =
    "Sometimes the best solution isn't adding more code, but finding simpler ways to solve problems.";
