//! Static program content shown alongside the form.
//!
//! These lists are fixed marketing copy for the skill development program;
//! they are never edited or persisted.

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Perk {
    pub label: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        title: "App Building",
        description: "Learn basic to intermediate application construction.",
    },
    Skill {
        title: "Mobile & Web",
        description: "Full-stack development for modern platforms.",
    },
    Skill {
        title: "Windows Apps",
        description: "Desktop software architecture and building.",
    },
    Skill {
        title: "Automation",
        description: "Workflow creation and business process automation.",
    },
    Skill {
        title: "Soft Skills",
        description: "Professional communication and teamwork mastery.",
    },
    Skill {
        title: "Problem Solving",
        description: "Logical thinking and practical engineering mindsets.",
    },
];

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "Monthly Stipend",
        description: "Performance-based earnings while you learn.",
    },
    Benefit {
        title: "Certifications",
        description: "Official experience letter and skill certificates.",
    },
    Benefit {
        title: "Live Projects",
        description: "Work on real-world industrial applications.",
    },
];

pub const PERKS: [Perk; 3] = [
    Perk {
        label: "Transportation",
    },
    Perk {
        label: "Daily Meals",
    },
    Perk {
        label: "Remote (Lucknow)",
    },
];
