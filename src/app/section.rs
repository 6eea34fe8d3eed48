//! Top-level content sections.

/// One of the four top-level content views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero: name, tagline, bio, socials.
    #[default]
    Home,
    /// Education, skills and tech stack.
    About,
    /// Project cards.
    Projects,
    /// Blog post cards.
    Blog,
}

impl Section {
    /// All sections, in sidebar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Projects, Self::Blog];

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Blog => "Blog",
        }
    }

    /// Heading shown above the section content.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::Projects => "Latest Projects",
            Self::Blog => "Latest Posts",
        }
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Projects => 2,
            Self::Blog => 3,
        }
    }

    /// Section at `index`, wrapping around.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next section in sidebar order, wrapping to Home after Blog.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous section in sidebar order, wrapping to Blog before Home.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_index_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_index(section.index()), section);
        }
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Section::Blog.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Blog);
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
        }
    }
}
