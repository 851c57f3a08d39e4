/// RFC 3339 timestamp captured by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Identity and outbound endpoints for the site, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub email: &'static str,
    pub linkedin_url: &'static str,
    /// Spreadsheet ingestion endpoint the contact form posts to.
    pub submit_url: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    owner: or_default(option_env!("PORTFOLIO_OWNER"), "BalaG"),
    email: or_default(option_env!("PORTFOLIO_EMAIL"), "contact@example.com"),
    linkedin_url: or_default(
        option_env!("PORTFOLIO_LINKEDIN_URL"),
        "https://www.linkedin.com/",
    ),
    submit_url: or_default(option_env!("PORTFOLIO_SUBMIT_URL"), ""),
};

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

impl SiteConfig {
    /// `mailto:` link with a prefilled subject and greeting.
    pub fn mailto_href(&self) -> String {
        format!(
            "mailto:{}?subject=Contact%20Request&body=Hi%20{},",
            self.email,
            self.owner.replace(' ', "%20")
        )
    }
}

/// Year of the build, for the footer copyright line.
pub fn copyright_year() -> &'static str {
    BUILD_TIME.get(..4).unwrap_or("2025")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_href() {
        let config = SiteConfig {
            owner: "Bala G",
            email: "bala@example.com",
            linkedin_url: "https://linkedin.com/in/bala",
            submit_url: "",
        };
        assert_eq!(
            config.mailto_href(),
            "mailto:bala@example.com?subject=Contact%20Request&body=Hi%20Bala%20G,"
        );
    }

    #[test]
    fn test_copyright_year() {
        let year = copyright_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
