//! Everything the page says about its owner.

use crate::sections::SectionId;

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub full_name: &'static str,
    pub initials: (&'static str, &'static str),
    pub title: &'static str,
    pub tagline: [&'static str; 2],
    pub location: &'static str,
    pub email: &'static str,
    pub photo_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    first_name: "Prateek",
    last_name: "Banda",
    full_name: "Prateek Banda",
    initials: ("P", "B"),
    title: "Computer Science Student | Full-Stack Developer",
    tagline: [
        "Building scalable, user-focused software with modern technologies.",
        "Passionate about systems programming and full-stack development.",
    ],
    location: "Dallas, TX",
    email: "bandaprateek0@gmail.com",
    photo_url: "https://qtrypzzcjebvfcihiynt.supabase.co/storage/v1/object/public/base44-prod/public/696aba8467d08fe9a645c782/b71d06cd2_IMG_2895.jpg",
};

pub struct NavItem {
    pub label: &'static str,
    pub id: SectionId,
}

/// Navigable sections, in page order.
pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "About", id: "about" },
    NavItem { label: "Skills", id: "skills" },
    NavItem { label: "Achievements", id: "achievements" },
    NavItem { label: "Projects", id: "projects" },
    NavItem { label: "Contact", id: "contact" },
];

pub fn section_ids() -> Vec<SectionId> {
    NAV_ITEMS.iter().map(|item| item.id).collect()
}

#[derive(Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [Link; 3] = [
    Link {
        label: "GitHub",
        href: "https://github.com/pbanda05",
        icon: "devicon-github-plain",
    },
    Link {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/prateek-banda",
        icon: "devicon-linkedin-plain",
    },
    Link {
        label: "Email",
        href: "https://mail.google.com/mail/?view=cm&to=bandaprateek0@gmail.com",
        icon: "extra-email",
    },
];

pub struct ContactLink {
    pub link: Link,
    pub value: &'static str,
    pub hover: &'static str,
}

impl ContactLink {
    /// Everything but the mail link opens in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.link.href.starts_with("mailto:")
    }
}

pub static CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink {
        link: Link {
            label: "Email",
            href: "mailto:bandaprateek0@gmail.com",
            icon: "extra-email",
        },
        value: "bandaprateek0@gmail.com",
        hover: "hover:border-red/50 hover:bg-red/10",
    },
    ContactLink {
        link: Link {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/prateek-banda",
            icon: "devicon-linkedin-plain",
        },
        value: "linkedin.com/in/prateek-banda",
        hover: "hover:border-blue/50 hover:bg-blue/10",
    },
    ContactLink {
        link: Link {
            label: "GitHub",
            href: "https://github.com/pbanda05",
            icon: "devicon-github-plain",
        },
        value: "github.com/pbanda05",
        hover: "hover:border-purple/50 hover:bg-purple/10",
    },
    ContactLink {
        link: Link {
            label: "Resume",
            href: "https://docs.google.com/document/d/1q7lvyPWDFEhE2HW01N1Gz3w-mL4GXI2EBqhuJcqtlrE/edit?usp=sharing",
            icon: "extra-download",
        },
        value: "Download PDF",
        hover: "hover:border-green/50 hover:bg-green/10",
    },
];

pub static BIO: [&str; 3] = [
    "I'm a Computer Science student at UTD with a strong foundation in systems programming, algorithms, and full-stack development, passionate about building scalable, user-focused software.",
    "I've worked across the stack using Java, C/C++, Python, and JavaScript, and enjoy turning complex problems into clean, efficient solutions. My experience includes cross-platform mobile apps, secure REST APIs, and cloud technologies like AWS and Firebase.",
    "Beyond development, I co-founded and instructed a C++ learning club, mentoring students and leading weekly sessions. I'm actively seeking software engineering internships to contribute to real-world products and grow as a developer in fast-paced, impact-driven environments.",
];

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: 12,
        suffix: "+",
        label: "Weekly sessions led",
    },
    Stat {
        value: 15,
        suffix: "–20",
        label: "Students/session",
    },
    Stat {
        value: 20,
        suffix: "+",
        label: "1:1 mentorship hours",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: [Skill; 6],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        key: "languages",
        title: "Programming Languages",
        icon: "extra-code",
        skills: [
            skill("Java", 90),
            skill("C/C++", 85),
            skill("Python", 88),
            skill("JavaScript", 85),
            skill("Assembly", 70),
            skill("Bash", 75),
        ],
    },
    SkillCategory {
        key: "web",
        title: "Web & Frameworks",
        icon: "extra-link",
        skills: [
            skill("React.js", 88),
            skill("React Native", 85),
            skill("Node.js", 82),
            skill("Express", 80),
            skill("Spring Boot", 78),
            skill("REST APIs", 90),
        ],
    },
    SkillCategory {
        key: "databases",
        title: "Databases & Cloud",
        icon: "extra-database",
        skills: [
            skill("MongoDB", 85),
            skill("MySQL", 80),
            skill("AWS S3", 78),
            skill("AWS IAM", 75),
            skill("Firebase Auth", 82),
            skill("Kubernetes", 70),
        ],
    },
    SkillCategory {
        key: "tools",
        title: "Developer Tools",
        icon: "extra-tools",
        skills: [
            skill("Git", 90),
            skill("UNIX/Linux", 85),
            skill("TypeScript", 82),
            skill("Agile", 85),
            skill("Vite", 78),
            skill("ESLint", 80),
        ],
    },
];

pub struct Certification {
    pub name: &'static str,
    pub completed: bool,
}

pub static CERTIFICATIONS: [Certification; 2] = [
    Certification {
        name: "AWS Certified Cloud Practitioner",
        completed: true,
    },
    Certification {
        name: "AWS Solutions Architect",
        completed: false,
    },
];

pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub icon: &'static str,
    pub gradient: &'static str,
    pub border: &'static str,
    pub github_url: &'static str,
}

/// Technologies shown on a project card before the overflow badge.
pub const CARD_TECH_LIMIT: usize = 3;

impl Project {
    pub fn card_tech(&self) -> &'static [&'static str] {
        &self.tech[..self.tech.len().min(CARD_TECH_LIMIT)]
    }

    /// Number of technologies hidden behind the `+N` badge.
    pub fn hidden_tech(&self) -> usize {
        self.tech.len().saturating_sub(CARD_TECH_LIMIT)
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "LookBook",
        subtitle: "AI-Powered Digital Closet",
        period: "Sept 2025 – Present",
        description: "Cross-platform outfit-curation app using React Native with Firebase Authentication supporting multiple user flows.",
        full_description: "A comprehensive AI-powered digital closet application that revolutionizes how users manage and curate their wardrobe. Built with a focus on seamless user experience and intelligent outfit recommendations.",
        highlights: &[
            "Built Node.js + Express API with MongoDB and AWS S3",
            "Optimized image uploads by ~40%",
            "Enforced secure authentication and token-based sessions",
            "Reduced unauthorized logins by 30%",
        ],
        tech: &["React Native", "Node.js", "Express", "MongoDB", "AWS S3", "Firebase Auth"],
        icon: "extra-sparkles",
        gradient: "from-purple/20 to-blue/20",
        border: "hover:border-purple/50",
        github_url: "https://github.com/pbanda05/lookbook",
    },
    Project {
        title: "Annakshetra",
        subtitle: "Donor-NGO-Recipient Platform",
        period: "May 2025 – Present",
        description: "Full-stack platform connecting donors, NGOs, and recipients with secure, scalable architecture.",
        full_description: "A comprehensive platform designed to bridge the gap between donors, NGOs, and recipients, ensuring efficient resource distribution and transparent operations.",
        highlights: &[
            "Developed with Spring Boot and React.js",
            "Implemented JWT-secured REST endpoints",
            "Scalable AWS deployment via Terraform-managed EKS with Kubernetes",
            "Role-based backend services ensuring 100% data isolation",
        ],
        tech: &["Spring Boot", "React.js", "JWT", "AWS EKS", "Terraform", "Kubernetes"],
        icon: "extra-server",
        gradient: "from-green/20 to-cyan/20",
        border: "hover:border-green/50",
        github_url: "https://github.com/pbanda05/Annakshetra",
    },
    Project {
        title: "Dream Ride",
        subtitle: "Interactive Car Buying Platform",
        period: "HackUTD X Toyota – Nov 2025",
        description: "Multi-stage car-buying platform capturing user preferences with immersive 3D visualization.",
        full_description: "An innovative hackathon project that reimagines the car buying experience through interactive 3D visualization and personalized user journeys.",
        highlights: &[
            "Multi-stage platform capturing user preferences",
            "3D visualization using Three.js",
            "Optimized UI responsiveness by 30%",
            "Built with React, TypeScript, and ESLint",
        ],
        tech: &["React", "TypeScript", "Three.js", "ESLint", "Vite"],
        icon: "extra-palette",
        gradient: "from-yellow/20 to-red/20",
        border: "hover:border-yellow/50",
        github_url: "https://github.com/pbanda05/HackUTD",
    },
];

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tag: Option<&'static str>,
    pub bullets: &'static [&'static str],
}

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        icon: "extra-trophy",
        title: "Dream Ride — HackUTD x Toyota",
        subtitle: "Interactive car-buying platform with real-time 3D customization.",
        tag: Some("3D / React / TS"),
        bullets: &[
            "Built a multi-stage preference flow to capture user inputs before recommendations.",
            "Implemented a real-time 3D viewer with Three.js for 6+ vehicle attributes.",
            "Optimized rendering + modern React patterns for a smoother UI.",
        ],
    },
    Achievement {
        icon: "extra-users",
        title: "Co-founded C/C++ Mentorship Club",
        subtitle: "Teaching + mentoring beginners through core programming fundamentals.",
        tag: Some("Leadership"),
        bullets: &[
            "Led 12+ weekly sessions for ~15–20 students (variables → OOP).",
            "Provided 20+ hours of 1:1 mentorship and debugging support.",
            "Helped peers build confidence with clean coding habits and problem-solving.",
        ],
    },
    Achievement {
        icon: "extra-cloud",
        title: "AWS Certified Cloud Practitioner",
        subtitle: "Cloud fundamentals across IAM, networking, pricing, and security.",
        tag: Some("AWS"),
        bullets: &[
            "Strong grasp of core AWS services, identity + access, and cloud economics.",
            "Applies cloud best practices in real projects (S3, IAM, deployment thinking).",
        ],
    },
    Achievement {
        icon: "extra-award",
        title: "AWS Solutions Architect (In Progress)",
        subtitle: "Studying scalable architectures, security, and production patterns.",
        tag: Some("In Progress"),
        bullets: &[
            "Focused on designing reliable, cost-efficient systems and secure access models.",
            "Building a stronger infrastructure mindset alongside full-stack development.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_unique_and_ordered() {
        let ids = section_ids();
        assert_eq!(ids.first(), Some(&"about"));
        assert_eq!(ids.len(), ids.iter().collect::<HashSet<_>>().len());
    }

    #[test]
    fn test_project_card_tech_overflow() {
        let lookbook = &PROJECTS[0];
        assert_eq!(lookbook.card_tech(), &["React Native", "Node.js", "Express"]);
        assert_eq!(lookbook.hidden_tech(), 3);

        let short = Project {
            tech: &["Rust", "Leptos"],
            ..PROJECTS[2]
        };
        assert_eq!(short.card_tech(), &["Rust", "Leptos"]);
        assert_eq!(short.hidden_tech(), 0);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            for skill in &category.skills {
                assert!(skill.level <= 100, "{} in {}", skill.name, category.key);
            }
        }
    }

    #[test]
    fn test_only_mail_link_stays_in_tab() {
        let same_tab = CONTACT_LINKS
            .iter()
            .filter(|c| !c.opens_new_tab())
            .map(|c| c.link.label)
            .collect::<Vec<_>>();
        assert_eq!(same_tab, vec!["Email"]);
    }
}
