//! Static copy for the page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Layers,
    Database,
    Cloud,
    Bug,
    FolderKanban,
    Mail,
    Linkedin,
}

/// In-page anchors, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Services,
    Projects,
    Contact,
}

impl Section {
    /// Sections linked from the navigation bar; contact gets its own call to action.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Services,
        Section::Projects,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

pub struct SkillCategory {
    pub icon: Icon,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        icon: Icon::Code,
        title: "Frontend",
        items: &[
            "React.js",
            "HTML5",
            "CSS3",
            "JavaScript (ES6+)",
            "Material UI",
            "Responsive Design",
        ],
    },
    SkillCategory {
        icon: Icon::Layers,
        title: "Backend",
        items: &["Node.js", "Express.js", "REST APIs"],
    },
    SkillCategory {
        icon: Icon::Database,
        title: "Database",
        items: &["MySQL", "PostgreSQL"],
    },
    SkillCategory {
        icon: Icon::Cloud,
        title: "Cloud & DevOps",
        items: &[
            "AWS EC2",
            "AWS S3",
            "AWS CloudFront",
            "AWS Lambda",
            "AWS RDS",
            "AWS Container Service",
        ],
    },
    SkillCategory {
        icon: Icon::Bug,
        title: "Debugging",
        items: &[
            "Frontend Debugging",
            "Backend Debugging",
            "Performance Optimization",
        ],
    },
];

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Code,
        title: "Web Applications",
        description: "Scalable, user-friendly applications",
    },
    Service {
        icon: Icon::Layers,
        title: "Frontend Dev",
        description: "React & modern web tech",
    },
    Service {
        icon: Icon::Database,
        title: "Backend APIs",
        description: "Node.js REST APIs",
    },
    Service {
        icon: Icon::Cloud,
        title: "AWS Cloud",
        description: "Deployment & maintenance",
    },
    Service {
        icon: Icon::Bug,
        title: "Debugging & Troubleshooting",
        description: "Diagnosis and resolution of issues in live/legacy applications.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[Project] = &[Project {
    title: "Coming Soon",
    description: "Real-world full-stack applications",
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets() {
        let hrefs = Section::NAV.iter().map(Section::href).collect::<Vec<_>>();
        assert_eq!(hrefs, ["#about", "#skills", "#services", "#projects"]);
        assert_eq!(Section::Contact.href(), "#contact");
    }

    #[test]
    fn test_content_not_empty() {
        assert_eq!(SKILLS.len(), 5);
        assert!(SKILLS.iter().all(|c| !c.items.is_empty()));
        assert_eq!(SERVICES.len(), 5);
        assert!(!PROJECTS.is_empty());
    }
}
