//! Static portfolio content.
//!
//! Everything here is compiled in; nothing is fetched or derived at runtime.

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Card title.
    pub title: &'static str,
    /// One-line summary shown on the card.
    pub description: &'static str,
    /// Cover image reference (path or URL, opaque).
    pub image: &'static str,
    /// Source code link.
    pub github: Option<&'static str>,
    /// Live demo link.
    pub demo: Option<&'static str>,
    /// Long-form description shown in the detail view.
    pub long_description: &'static str,
    /// Technology tags, in display order.
    pub tags: &'static [&'static str],
    /// Gallery image references, in display order.
    pub images: &'static [&'static str],
}

impl Project {
    /// Whether the project has at least one outbound link.
    ///
    /// Linked projects render their link controls; the rest are
    /// detail-only and open the project modal instead.
    #[must_use]
    pub const fn has_links(&self) -> bool {
        self.github.is_some() || self.demo.is_some()
    }

    /// Present links as `(label, url)` pairs, source first.
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &'static str)> {
        [("Code", self.github), ("Demo", self.demo)]
            .into_iter()
            .filter_map(|(label, url)| url.map(|url| (label, url)))
            .collect()
    }
}

/// A blog post preview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    /// Post title.
    pub title: &'static str,
    /// Teaser text.
    pub preview: &'static str,
    /// Thumbnail reference (path or URL, opaque).
    pub thumbnail: &'static str,
    /// Publish date as display text.
    pub date: &'static str,
}

/// A social profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Network name.
    pub label: &'static str,
    /// Profile URL.
    pub url: &'static str,
}

/// A titled block of the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
    /// Heading.
    pub title: &'static str,
    /// Bullet lines.
    pub items: &'static [&'static str],
}

/// Who the portfolio belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Full name.
    pub name: &'static str,
    /// Short role badge.
    pub tagline: &'static str,
    /// Longer role line used on the About page.
    pub headline: &'static str,
    /// Hero paragraph.
    pub bio: &'static str,
    /// Profile picture reference.
    pub avatar: &'static str,
    /// Social links shown on Home and in the footer.
    pub socials: &'static [SocialLink],
    /// About page blocks.
    pub about: &'static [AboutSection],
    /// Tech stack chips.
    pub tech_stack: &'static [&'static str],
    /// Footer line.
    pub copyright: &'static str,
}

/// The portfolio owner.
pub const PROFILE: Profile = Profile {
    name: "Oubey Badis",
    tagline: "Software Engineer | Laravel",
    headline: "Software Engineer | Backend Developer | AI Enthusiast",
    bio: "Hi! I'm a Software Engineer with a Bachelor's in Networks and Telecommunications \
          Engineering from USTHB, Algeria, currently pursuing a Master's in Software \
          Engineering. With over 4 years of experience in web development and a strong focus \
          on backend engineering, I specialize in designing scalable RESTful APIs and \
          integrating AI-driven solutions. I enjoy problem-solving and writing clean, scalable \
          code, and I'm ready to turn business challenges into tech solutions.",
    avatar: "/profile.jpg",
    socials: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/oubeybadis",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/oubey-badis-7b7700342/",
        },
    ],
    about: &[
        AboutSection {
            title: "Education",
            items: &[
                "Master's in Software Engineering (Ongoing) - University of Blida, Algeria",
                "Bachelor's in Networks & Telecommunications Engineering - USTHB, Algeria",
            ],
        },
        AboutSection {
            title: "Skills",
            items: &[
                "Backend: Laravel, RESTful APIs, Docker",
                "Frontend: TailwindCSS, UI/UX",
                "Database: MySQL",
                "AI & ML: Deep Learning (CNN, RNN), AI API Integration",
                "Networking: TCP/IP, ADM Networking",
            ],
        },
        AboutSection {
            title: "Learning",
            items: &[
                "Deep Learning: CNN, RNN, GANs, GNNs",
                "API-First Design with Apidog",
            ],
        },
        AboutSection {
            title: "Let's Connect!",
            items: &["Algeria", "oubeybadis20@gmail.com"],
        },
    ],
    tech_stack: &[
        "Laravel",
        "Vue.js",
        "PHP",
        "JavaScript",
        "MySQL",
        "TailwindCSS",
        "Git",
        "Docker",
        "Python",
    ],
    copyright: "(c) 2025 Oubey Badis. All rights reserved.",
};

/// Project cards in display order.
///
/// Source and demo links are placeholders under `example.com`; the projects
/// have no public URLs yet.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Setram Ticketing System",
        description: "Developed a complete web-based ticketing solution for Setram, optimizing \
                      public transport accessibility.",
        image: "/setram.png",
        github: None,
        demo: None,
        long_description: "A ticketing platform built for Setram's tramway network. Riders buy \
                           and validate tickets online, operators manage fares and lines, and \
                           back-office staff follow sales and ridership through dashboards.",
        tags: &["Laravel", "Vue.js", "MySQL", "TailwindCSS"],
        images: &["/setram.png", "/setram2.png"],
    },
    Project {
        title: "Tahalile",
        description: "Online booking platform for medical lab tests with result delivery.",
        image: "/tahalile.png",
        github: None,
        demo: None,
        long_description: "Tahalile lets patients find nearby laboratories, book analyses, and \
                           receive results securely. Laboratories manage their catalog of tests, \
                           appointments, and result uploads from a dedicated dashboard.",
        tags: &["Laravel", "Livewire", "MySQL", "TailwindCSS"],
        images: &["/tahalile.png", "/tahalile2.png", "/tahalile3.png"],
    },
    Project {
        title: "Coding Game API",
        description: "Built a Dockerized backend API for ITC Club, enabling interactive coding \
                      challenges and real-time leaderboards.",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&auto=format&fit=crop&q=60",
        github: Some("https://example.com/code/coding-game-api"),
        demo: None,
        long_description: "Challenge submission, sandboxed evaluation, and scoring for ITC \
                           Club coding events, packaged with Docker for one-command deploys.",
        tags: &["Laravel", "Docker", "Redis"],
        images: &[],
    },
    Project {
        title: "E-Commerce Platform",
        description: "Designed a secure and scalable e-commerce system with seamless product \
                      management and payment integration.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop&q=60",
        github: None,
        demo: Some("https://example.com/demo/e-commerce-platform"),
        long_description: "Catalog, cart, checkout, and order tracking with an admin panel for \
                           inventory and payment reconciliation.",
        tags: &["Laravel", "Vue.js", "Stripe"],
        images: &[],
    },
    Project {
        title: "WebRTC Video Conferencing",
        description: "Implemented real-time communication using WebRTC and Mediasoup, ensuring \
                      high-quality video conferencing.",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&auto=format&fit=crop&q=60",
        github: Some("https://example.com/code/webrtc-conferencing"),
        demo: None,
        long_description: "Multi-party video rooms routed through a Mediasoup SFU, with screen \
                           sharing and chat.",
        tags: &["WebRTC", "Mediasoup", "Node.js"],
        images: &[],
    },
    Project {
        title: "AI-Based Food Ingredient Prediction",
        description: "Developed a machine learning model to predict food ingredients using AI \
                      for enhanced food safety and nutrition analysis.",
        image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&auto=format&fit=crop&q=60",
        github: Some("https://example.com/code/food-ingredient-prediction"),
        demo: Some("https://example.com/demo/food-ingredient-prediction"),
        long_description: "A CNN trained on dish photos that predicts likely ingredients, used \
                           to flag allergens and estimate nutrition.",
        tags: &["Python", "TensorFlow", "CNN"],
        images: &[],
    },
];

/// Blog post cards in display order.
pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Scalable APIs with Laravel",
        preview: "Best practices for creating maintainable and efficient APIs...",
        thumbnail: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&auto=format&fit=crop&q=60",
        date: "March 15, 2024",
    },
    BlogPost {
        title: "Vue.js 3 Composition API Deep Dive",
        preview: "Understanding the power of the Composition API...",
        thumbnail: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&auto=format&fit=crop&q=60",
        date: "March 10, 2024",
    },
];

/// Look up a project by exact title.
#[must_use]
pub fn project_by_title(title: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_setram_is_detail_only() {
        let setram = project_by_title("Setram Ticketing System");
        assert!(setram.is_some_and(|p| !p.has_links()));
    }

    #[test]
    fn test_food_prediction_is_linked() {
        let food = project_by_title("AI-Based Food Ingredient Prediction");
        assert!(food.is_some_and(Project::has_links));
        assert_eq!(food.map(|p| p.links().len()), Some(2));
    }

    #[test]
    fn test_single_link_projects_are_linked() {
        for title in ["Coding Game API", "E-Commerce Platform"] {
            let project = project_by_title(title);
            assert!(project.is_some_and(|p| p.has_links() && p.links().len() == 1));
        }
    }

    #[test]
    fn test_links_source_first() {
        let food = project_by_title("AI-Based Food Ingredient Prediction");
        let labels: Vec<_> = food
            .map(|p| p.links().into_iter().map(|(label, _)| label).collect())
            .unwrap_or_default();
        assert_eq!(labels, vec!["Code", "Demo"]);
    }

    #[test]
    fn test_project_links_are_placeholders() {
        for project in PROJECTS {
            for (label, url) in project.links() {
                assert!(
                    url.starts_with("https://example.com/"),
                    "{} {label}: {url}",
                    project.title
                );
            }
        }
    }

    #[test]
    fn test_tahalile_gallery_order() {
        let images = project_by_title("Tahalile").map(|p| p.images.to_vec());
        assert_eq!(
            images,
            Some(vec!["/tahalile.png", "/tahalile2.png", "/tahalile3.png"])
        );
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
