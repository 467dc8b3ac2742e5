//! Copy for the dynamic page sections. Kept as plain data so the frontend
//! only decides how to render it.

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Real Time Solar Tracking System",
        summary: "An automated system that dynamically orients solar panels to maximize \
                  sunlight capture using microcontroller-based control.",
        tags: &["Arduino", "C/C++", "Solar Energy", "Embedded Systems"],
        link: "#",
    },
    Project {
        title: "Greenhouse Monitoring and Control System Using IoT",
        summary: "An IoT-enabled solution for real-time environmental monitoring and \
                  automated resource control in greenhouse farming.",
        tags: &["Arduino", "IoT", "Sensors", "Web Dashboard"],
        link: "#",
    },
    Project {
        title: "Data Logger System for Third-Party Instrument Interface",
        summary: "A Python-MySQL application for real-time data acquisition, logging, and \
                  analysis from external production instruments.",
        tags: &["Python", "MySQL", "Data Logging", "Web Interface"],
        link: "#",
    },
    Project {
        title: "Portfolio Website",
        summary: "A modern portfolio website showcasing projects and skills with smooth \
                  animations and responsive design.",
        tags: &["Rust", "WebAssembly", "wasm-bindgen", "CSS"],
        link: "#",
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub years: &'static str,
    pub score: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "BE in Electronics and Telecommunication",
        school: "International Institute of Information Technology, Pune",
        years: "2021 - 2025",
        score: "CGPA - 7.20",
    },
    EducationEntry {
        degree: "HSC, Maharashtra",
        school: "Manere Jr. College, Ichalkaranji",
        years: "2019 - 2021",
        score: "95%",
    },
    EducationEntry {
        degree: "SSC, Maharashtra",
        school: "Saraswati Highschool, Ichalkaranji",
        years: "2019",
        score: "91.40%",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/danishmane",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/danish-mane/",
    },
    SocialLink {
        label: "Email",
        href: "mailto:danishmane33@gmail.com",
    },
];

pub const SKILLS: &[&str] = &["HTML", "CSS", "JavaScript", "C/C++", "Python", "Java", "SQL"];
