//! Static display content for the portfolio page.
//!
//! Read-only reference data. Entries have no identity beyond their order.

/// Freelance marketplace profile, opened in a new tab
pub const HIRE_URL: &str = "https://www.fiverr.com/s/xXazGzQ";

/// Who the page is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub affiliation: &'static str,
    pub tagline: &'static str,
    pub banner: &'static str,
    pub languages: &'static str,
    pub about: &'static [&'static str],
    pub footer_quote: &'static str,
    pub copyright: &'static str,
    pub description: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Eras Tanveel Khan",
    headline: "Graphic Designer & AI Design Expert",
    affiliation: "Mianwali, Pakistan | TANVEEL DIGITAL ACADEMY",
    tagline: "\u{201C}Designs That Speak \u{2014} Creativity Beyond Limits\u{201D}",
    banner: "AI-Enhanced Designs: Where Tech Meets Art",
    languages: "\u{1F1F5}\u{1F1F0} English, Urdu",
    about: &[
        "I\u{2019}m Eras Tanveel Khan, a professional graphic designer and AI specialist from Pakistan. I design modern T-shirt graphics, logos, and brand identities that blend creativity and technology. With years of experience, I help brands stand out through unique and meaningful visuals.",
        "Passionate about pushing boundaries with AI tools like Midjourney and Firefly, I create visuals that resonate globally. From Mianwali, I'm building TANVEEL DIGITAL ACADEMY to empower aspiring designers.",
    ],
    footer_quote: "\u{201C}Turning ideas into timeless visuals.\u{201D}",
    copyright: "\u{00A9} 2025 Eras Tanveel Khan. All rights reserved. | Designed with \u{2764}\u{FE0F} in Pakistan.",
    description: "Professional portfolio of Eras Tanveel Khan, blending graphic design and AI from Mianwali, Pakistan.",
};

/// In-page navigation anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section id, without the leading `#`
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Experience", anchor: "experience" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Process", anchor: "process" },
    NavLink { label: "Portfolio", anchor: "portfolio" },
    NavLink { label: "Contact", anchor: "contact" },
];

/// Every section id on the page, top to bottom
pub const SECTION_IDS: &[&str] = &[
    "home",
    "about",
    "experience",
    "skills",
    "tools",
    "process",
    "achievements",
    "portfolio",
    "testimonials",
    "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub icon: &'static str,
    pub title: &'static str,
    pub dates: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        icon: "\u{1F3A8}",
        title: "Graphic Designer at TANVEEL DIGITAL ACADEMY",
        dates: "2022\u{2013}Present",
        description: "Designed professional T-shirt graphics, logos, and brand collections for global clients.",
    },
    Experience {
        icon: "\u{1F4BC}",
        title: "Freelance Designer on Fiverr",
        dates: "2023\u{2013}Present",
        description: "Delivered AI-assisted branding and vector art for international businesses.",
    },
    Experience {
        icon: "\u{1F3D7}\u{FE0F}",
        title: "Civil Engineer",
        dates: "2019\u{2013}2021",
        description: "Built expertise in structure design and technical drawing before focusing on creative design.",
    },
];

/// Skill bar; `width` is the filled share of the track in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub width: u8,
}

pub const DESIGN_SKILLS: &[Skill] = &[
    Skill { name: "Logo Design", width: 100 },
    Skill { name: "T-shirt Design", width: 92 },
    Skill { name: "Brand Identity", width: 83 },
    Skill { name: "Vector Illustration", width: 83 },
    Skill { name: "Typography Design", width: 80 },
];

pub const TOOL_SKILLS: &[Skill] = &[
    Skill { name: "Adobe Illustrator", width: 92 },
    Skill { name: "Adobe Photoshop", width: 83 },
    Skill { name: "Canva", width: 83 },
    Skill { name: "AI Tools (Midjourney, Firefly, Leonardo AI)", width: 100 },
];

/// Tool card; `caption` shows while the card is hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub caption: &'static str,
}

pub const TOOLS: &[Tool] = &[
    Tool { name: "Adobe Illustrator", caption: "Vector graphics mastery" },
    Tool { name: "Adobe Photoshop", caption: "Raster editing pro" },
    Tool { name: "Canva", caption: "Quick design toolkit" },
    Tool { name: "Midjourney", caption: "AI image generation" },
    Tool { name: "Adobe Firefly", caption: "Generative AI fills" },
    Tool { name: "Leonardo AI", caption: "AI art creation" },
    Tool { name: "Figma", caption: "Collaborative UI/UX" },
    Tool { name: "Procreate", caption: "Digital illustration" },
    Tool { name: "Blender", caption: "3D modeling basics" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: 1,
        icon: "\u{1F4AD}",
        title: "Understand Client Goals",
        description: "Deep dive into vision, needs, and brand story to align creativity with objectives.",
    },
    ProcessStep {
        step: 2,
        icon: "\u{1F916}",
        title: "Generate AI Concept Visuals",
        description: "Leverage Midjourney, Firefly, and Leonardo AI for rapid ideation and inspiration.",
    },
    ProcessStep {
        step: 3,
        icon: "\u{270F}\u{FE0F}",
        title: "Refine Manually in Illustrator",
        description: "Handcraft vectors, adjust details, and infuse personal touch for perfection.",
    },
    ProcessStep {
        step: 4,
        icon: "\u{1F4CA}",
        title: "Finalize with Mockups",
        description: "Present polished designs in realistic contexts with animations and variations.",
    },
];

/// Achievement line; highlighted ones render bold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub text: &'static str,
    pub highlighted: bool,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { text: "Founder of Tanveel Digital Academy", highlighted: true },
    Achievement { text: "Founder of Indus Graphic Design Academy", highlighted: true },
    Achievement { text: "Launched creative studio Eras Imagery", highlighted: true },
    Achievement { text: "Contributor on Adobe Stock with premium assets", highlighted: false },
];

/// Slogans listed under "Designed viral T-shirt slogans"
pub const SLOGANS: &[&str] = &[
    "\u{201C}Eat Drink and Be Scary\u{201D}",
    "\u{201C}Queen of Chaos\u{201D}",
    "\u{201C}Lone Wolf, Strong Spirit\u{201D}",
    "\u{201C}Mom Mode On 24/7\u{201D}",
];

/// Portfolio card with its cover gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: (&'static str, &'static str),
}

impl Project {
    /// CSS background for the cover
    pub fn cover_style(&self) -> String {
        format!(
            "background: linear-gradient(to right, {}, {});",
            self.gradient.0, self.gradient.1
        )
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tanveel Logo Suite Mockup",
        description: "3D logo presentation across cards and signage for brand launch.",
        gradient: ("#a855f7", "#ec4899"),
    },
    Project {
        title: "Halloween T-Shirt Collection",
        description: "Fun spooky typography designs with AI-generated elements.",
        gradient: ("#f97316", "#ef4444"),
    },
    Project {
        title: "Queen of Chaos Series",
        description: "Empowering fashion graphics with bold, chaotic aesthetics.",
        gradient: ("#ec4899", "#f43f5e"),
    },
    Project {
        title: "Lone Wolf Spirit",
        description: "Wolf and moon digital illustration for adventure brand.",
        gradient: ("#4b5563", "#1f2937"),
    },
    Project {
        title: "Mom Mode On 24/7",
        description: "Trendy modern T-shirt art celebrating everyday heroes.",
        gradient: ("#eab308", "#f59e0b"),
    },
    Project {
        title: "AI Logo Experiments",
        description: "Futuristic minimalist branding using generative AI.",
        gradient: ("#06b6d4", "#3b82f6"),
    },
    Project {
        title: "Indus Academy Branding",
        description: "Educational logo and materials for design academy.",
        gradient: ("#22c55e", "#10b981"),
    },
    Project {
        title: "Viral Slogan Tees",
        description: "Collection of catchy phrase designs that went viral on social.",
        gradient: ("#6366f1", "#8b5cf6"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "\u{201C}Eras understood my vision perfectly. The logo exceeded expectations!\u{201D}",
        author: "Client, USA",
    },
    Testimonial {
        quote: "\u{201C}Professional, fast, and creative. I\u{2019}ll hire him again for sure.\u{201D}",
        author: "Client, UK",
    },
];

/// Footer link; `external` ones open in a new tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "\u{1F4BC} Fiverr", href: HIRE_URL, external: true },
    SocialLink { label: "\u{1F4F8} Instagram", href: "#", external: false },
    SocialLink { label: "\u{1F4D8} Facebook", href: "#", external: false },
];

/// Shown when no resume file is configured
pub const RESUME_NOTICE: &str =
    "Resume downloaded! Visit Fiverr for full details or contact for PDF.";

/// Shown while `submitted` is set
pub const SENT_NOTICE: &str = "Message sent successfully! I'll respond soon. \u{1F389}";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_links_point_at_sections() {
        for link in NAV_LINKS {
            assert!(SECTION_IDS.contains(&link.anchor), "{} has no section", link.anchor);
            assert_eq!(link.href(), format!("#{}", link.anchor));
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
    }

    #[test]
    fn tool_names_are_unique_hover_keys() {
        let unique: HashSet<_> = TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(unique.len(), TOOLS.len());
    }

    #[test]
    fn skill_widths_are_percentages() {
        for skill in DESIGN_SKILLS.iter().chain(TOOL_SKILLS) {
            assert!(skill.width > 0 && skill.width <= 100, "{}", skill.name);
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.step as usize, i + 1);
        }
    }

    #[test]
    fn content_counts() {
        assert_eq!(EXPERIENCE.len(), 3);
        assert_eq!(TOOLS.len(), 9);
        assert_eq!(PROJECTS.len(), 8);
        assert_eq!(TESTIMONIALS.len(), 2);
    }

    #[test]
    fn project_cover_style() {
        assert_eq!(
            PROJECTS[0].cover_style(),
            "background: linear-gradient(to right, #a855f7, #ec4899);"
        );
    }
}
