//! Navigation targets exposed by the hosting site
//!
//! The interaction layer only ever redirects to a fixed set of relative
//! paths. This module is completely pure and testable without a page.

/// A destination the page can navigate to
///
/// Paths are relative to the page the script runs on, so they resolve
/// against the hosting site's own routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The site's home page
    Homepage,
    /// The mailing-list members page
    MailingMembers,
}

impl NavTarget {
    /// Returns the relative path for this target
    ///
    /// # Examples
    /// ```rust
    /// use navwire::domain::nav::NavTarget;
    ///
    /// assert_eq!(NavTarget::Homepage.relative_path(), "../general/home");
    /// ```
    pub fn relative_path(&self) -> &'static str {
        match self {
            NavTarget::Homepage => "../general/home",
            NavTarget::MailingMembers => "../mailing/members",
        }
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepage_path() {
        assert_eq!(NavTarget::Homepage.relative_path(), "../general/home");
    }

    #[test]
    fn mailing_members_path() {
        assert_eq!(NavTarget::MailingMembers.relative_path(), "../mailing/members");
    }

    #[test]
    fn display_renders_the_path() {
        assert_eq!(format!("{}", NavTarget::Homepage), "../general/home");
        assert_eq!(format!("{}", NavTarget::MailingMembers), "../mailing/members");
    }
}
