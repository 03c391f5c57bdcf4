//! Résumé data served as the bodies of the documented endpoints.
//!
//! Each section is a serde-serializable struct so the JSON shown on the page
//! is produced by `serde_json` rather than hand-written strings.

use serde::Serialize;

/// `GET /developer/info`
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub years_experience: u32,
    pub availability: &'static str,
    pub timezone: &'static str,
    pub preferred_contact: &'static str,
    pub response_time: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sunil Poudel",
    title: "Senior Backend Developer",
    location: "Pokhara, Nepal",
    email: "contact@poudelsunil.info.np",
    linkedin: "https://www.linkedin.com/in/pasive/",
    github: "https://github.com/0xpasive",
    years_experience: 1,
    availability: "Open to opportunities",
    timezone: "GMT+5:45",
    preferred_contact: "email",
    response_time: "24-48 hours",
};

/// `GET /developer/skills`
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SkillSheet {
    pub programming_languages: &'static [Language],
    pub databases: Databases,
    pub cloud_platforms: CloudPlatforms,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub proficiency: u8,
    pub years_experience: u32,
    pub frameworks: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Databases {
    pub relational: &'static [&'static str],
    pub nosql: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CloudPlatforms {
    pub aws: CloudProvider,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CloudProvider {
    pub services: &'static [&'static str],
    pub proficiency: u8,
}

pub const SKILLS: SkillSheet = SkillSheet {
    programming_languages: &[
        Language {
            name: "Python",
            proficiency: 95,
            years_experience: 6,
            frameworks: &["Django", "Flask", "FastAPI"],
        },
        Language {
            name: "JavaScript/Node.js",
            proficiency: 90,
            years_experience: 5,
            frameworks: &["Express.js", "Nest.js"],
        },
    ],
    databases: Databases { relational: &["MySQL"], nosql: &["MongoDB"] },
    cloud_platforms: CloudPlatforms {
        aws: CloudProvider { services: &["EC2", "S3", "Lambda", "RDS", "API Gateway"], proficiency: 90 },
    },
};

/// `GET /developer/experience`
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ExperienceLog {
    pub positions: &'static [Position],
    pub total_years_experience: u32,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Position {
    pub company: &'static str,
    pub position: &'static str,
    pub start_date: &'static str,
    /// `null` while the position is current.
    pub end_date: Option<&'static str>,
    pub current: bool,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: ExperienceLog = ExperienceLog {
    positions: &[Position {
        company: "TechCorp Inc.",
        position: "Senior Backend Developer",
        start_date: "2022-03-01",
        end_date: None,
        current: true,
        location: "San Francisco, CA",
        achievements: &[
            "Led migration of monolithic system to microservices (50+ services)",
            "Improved API response time by 60% through caching and optimization",
        ],
        technologies: &["Python", "Django", "PostgreSQL", "AWS"],
    }],
    total_years_experience: 7,
};

/// `GET /developer/projects`
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProjectList {
    pub projects: &'static [Project],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
}

pub const PROJECTS: ProjectList = ProjectList {
    projects: &[Project {
        name: "E-Commerce Microservices Platform",
        description: "Complete microservices ecosystem for e-commerce with 25+ services",
        technologies: &["Python", "FastAPI", "PostgreSQL", "Redis"],
        github_url: "https://github.com/0xpasive/ecommerce-platform",
    }],
};

/// `GET /developer/resume`
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ResumeDownload {
    pub download_links: DownloadLinks,
    pub metadata: ResumeMetadata,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct DownloadLinks {
    pub pdf: DownloadLink,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct DownloadLink {
    pub url: &'static str,
    pub expires_at: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ResumeMetadata {
    pub last_updated: &'static str,
    pub version: &'static str,
}

pub const RESUME: ResumeDownload = ResumeDownload {
    download_links: DownloadLinks {
        pdf: DownloadLink {
            url: "https://api.developer-portfolio.dev/files/resume.pdf",
            expires_at: "2024-01-16T10:30:00Z",
        },
    },
    metadata: ResumeMetadata { last_updated: "2024-01-10T00:00:00Z", version: "2.1.0" },
};
