//! The static catalog of career roles scored by the matcher.

use serde::Serialize;

/// A career path and the skills it requires. Every role requires at least one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub about: &'static str,
}

pub static CATALOG: &[Role] = &[
    Role {
        name: "Data Scientist",
        skills: &["python", "machine learning", "statistics", "sql"],
        about: "Analyze data, build ML models, and derive insights.",
    },
    Role {
        name: "Backend Developer",
        skills: &["python", "django", "sql", "api"],
        about: "Build and maintain the server side of web apps.",
    },
    Role {
        name: "Frontend Developer",
        skills: &["javascript", "react", "css", "html"],
        about: "Design and implement user interfaces for web apps.",
    },
    Role {
        name: "Full Stack Developer",
        skills: &["javascript", "react", "node.js", "sql", "api"],
        about: "Work on both frontend and backend of applications.",
    },
    Role {
        name: "AI Engineer",
        skills: &["python", "deep learning", "ml", "data pipelines"],
        about: "Build AI-powered products using ML models.",
    },
    Role {
        name: "Machine Learning Engineer",
        skills: &["python", "tensorflow", "pytorch", "mlops"],
        about: "Design, train, and deploy ML systems at scale.",
    },
    Role {
        name: "DevOps Engineer",
        skills: &["linux", "docker", "kubernetes", "ci/cd", "aws"],
        about: "Automate infrastructure, CI/CD, and cloud deployments.",
    },
    Role {
        name: "Cloud Architect",
        skills: &["aws", "azure", "gcp", "networking", "terraform"],
        about: "Design and manage scalable cloud solutions.",
    },
    Role {
        name: "Cybersecurity Analyst",
        skills: &["networking", "linux", "python", "security"],
        about: "Protect systems and networks from cyber threats.",
    },
    Role {
        name: "Blockchain Developer",
        skills: &["solidity", "ethereum", "smart contracts", "web3"],
        about: "Build decentralized applications and smart contracts.",
    },
    Role {
        name: "Data Engineer",
        skills: &["python", "sql", "spark", "etl", "airflow"],
        about: "Design and maintain large-scale data pipelines.",
    },
    Role {
        name: "Mobile App Developer",
        skills: &["kotlin", "swift", "flutter", "react native"],
        about: "Build apps for Android and iOS platforms.",
    },
    Role {
        name: "Game Developer",
        skills: &["c++", "unity", "unreal engine", "3d modeling"],
        about: "Create interactive video games and simulations.",
    },
    Role {
        name: "Product Manager",
        skills: &["communication", "strategy", "market research", "agile"],
        about: "Define product vision, strategy, and manage delivery.",
    },
    Role {
        name: "UI/UX Designer",
        skills: &["figma", "adobe xd", "prototyping", "usability testing"],
        about: "Design user-centered interfaces and experiences.",
    },
    Role {
        name: "Digital Marketing Specialist",
        skills: &["seo", "content", "analytics", "social media"],
        about: "Promote products/services through digital channels.",
    },
];

/// Case-insensitive lookup by role name.
pub fn find_role(name: &str) -> Option<&'static Role> {
    let name = name.trim();
    CATALOG.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}
