//! Static page copy: project cards, skills, navigation entries and the
//! default owner profile.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: Url,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }

    pub fn is_mailto(&self) -> bool {
        self.url.scheme() == "mailto"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerProfile {
    pub name: String,
    pub role: String,
    pub initials: String,
    pub email: String,
    pub location: String,
    pub availability: String,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            name: "Trung Loyal".into(),
            role: "Web Developer".into(),
            initials: "TL".into(),
            email: "trungloyal@example.com".into(),
            location: "Ho Chi Minh City, Vietnam".into(),
            availability: "Available for freelance work".into(),
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        target: SectionId::About,
    },
    NavItem {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavItem {
        label: "Contact",
        target: SectionId::Contact,
    },
];

pub const HERO_TAGLINE: &str = "Crafting digital experiences that inspire and engage through innovative design and cutting-edge technology.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate web developer with expertise in creating modern, responsive, and user-friendly applications. With a strong foundation in both frontend and backend technologies, I bring ideas to life through clean code and innovative design.",
    "Specializing in Java Spring Boot for robust backend solutions and modern JavaScript frameworks for dynamic user interfaces. I'm constantly exploring new technologies and animation libraries to create engaging experiences.",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", icon: "</>" },
    Skill { name: "CSS3", icon: "#" },
    Skill { name: "JavaScript", icon: "ϟ" },
    Skill { name: "Java", icon: "☕" },
    Skill { name: "Spring Boot", icon: "❦" },
    Skill { name: "GSAP", icon: "✦" },
    Skill { name: "React", icon: "⚛" },
    Skill { name: "Database", icon: "▤" },
];

pub const PROJECTS_BLURB: &str = "A showcase of my latest work, featuring modern web applications built with cutting-edge technologies.";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with Java Spring Boot backend and React frontend",
        tech: &["Java", "Spring Boot", "React", "MySQL"],
        link: "#",
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "Collaborative task management with real-time updates and team collaboration",
        tech: &["React", "Node.js", "Socket.io", "MongoDB"],
        link: "#",
    },
    Project {
        id: 3,
        title: "Portfolio Website",
        description: "Modern portfolio with 3D animations and smooth scrolling effects",
        tech: &["React", "GSAP", "Spline", "Tailwind"],
        link: "#",
    },
    Project {
        id: 4,
        title: "Weather Dashboard",
        description: "Real-time weather tracking with beautiful data visualizations",
        tech: &["Vue.js", "Chart.js", "API", "CSS"],
        link: "#",
    },
    Project {
        id: 5,
        title: "Social Media API",
        description: "RESTful API for social media platform with authentication and file uploads",
        tech: &["Spring Boot", "JWT", "PostgreSQL", "AWS"],
        link: "#",
    },
    Project {
        id: 6,
        title: "Analytics Dashboard",
        description: "Business intelligence dashboard with interactive charts and real-time data",
        tech: &["React", "D3.js", "Python", "Flask"],
        link: "#",
    },
];

pub const CONTACT_BLURB: &str =
    "Ready to bring your ideas to life? Let's collaborate and create something amazing together.";

pub const AVAILABILITY_BLURB: &str = "I'm currently accepting new projects and freelance opportunities. Whether you need a full-stack web application, a modern frontend, or backend API development, I'd love to help bring your vision to life.";

/// Project links of `"#"` are placeholders and render without a target.
pub fn project_has_link(project: &Project) -> bool {
    !project.link.is_empty() && project.link != "#"
}

pub fn copyright_line(year: i32, owner: &OwnerProfile) -> String {
    format!("© {year} {}. Built with Rust & egui.", owner.name)
}
