//! Portfolio content: profile, timelines, certifications, projects and stack.
//!
//! Content is declared in `portfolio.toml` and loaded once at startup. Nothing
//! here mutates after load; the core hands out shared references.

use crate::core::gallery::{GalleryCategory, GalleryImage, GalleryModal};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tech_stack: Vec<TechCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Digits only, country code first (e.g. "923043923901")
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub title: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub badge_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mobile_app: bool,
    #[serde(default)]
    pub gallery: Option<Gallery>,
}

impl Project {
    /// Build a fresh modal for this project's screenshots, if it has any
    pub fn open_gallery(&self) -> Option<Result<GalleryModal, crate::core::gallery::GalleryError>> {
        self.gallery.as_ref().map(|gallery| {
            let title = gallery.title.as_deref().unwrap_or(&self.title);
            GalleryModal::new(title, &gallery.categories, &gallery.images)
        })
    }
}

/// Screenshot set attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub categories: Vec<GalleryCategory>,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechCategory {
    pub category: String,
    #[serde(default)]
    pub icon: String,
    pub skills: Vec<String>,
}

impl Portfolio {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read portfolio file: {:?}", path))?;
        Self::parse(&contents).context(format!("Failed to parse portfolio file: {:?}", path))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Portfolio shipped inside the binary
    pub fn embedded() -> Result<Self> {
        Self::parse(crate::config::DEFAULT_PORTFOLIO).context("Embedded portfolio is invalid")
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid period '{0}', expected \"MM/YYYY - MM/YYYY\" or \"MM/YYYY - Present\"")]
pub struct PeriodError(pub String);

/// Month-granular date range such as "06/2024 - 08/2024"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    /// `None` while ongoing ("Present")
    pub end: Option<NaiveDate>,
}

impl Period {
    pub fn parse(text: &str) -> Result<Self, PeriodError> {
        let err = || PeriodError(text.to_string());
        let (start, end) = text.split_once('-').ok_or_else(err)?;
        let start = parse_month(start.trim()).ok_or_else(err)?;
        let end = match end.trim() {
            e if e.eq_ignore_ascii_case("present") => None,
            e => Some(parse_month(e).ok_or_else(err)?),
        };
        if matches!(end, Some(end) if end < start) {
            return Err(err());
        }
        Ok(Self { start, end })
    }

    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }

    /// Whole months covered, counting both the first and last month
    pub fn months(&self, today: NaiveDate) -> u32 {
        let end = self.end.unwrap_or(today);
        let span = month_ordinal(end) - month_ordinal(self.start) + 1;
        span.max(0) as u32
    }

    /// Human duration such as "1 yr 4 mos"
    pub fn duration_label(&self, today: NaiveDate) -> String {
        let months = self.months(today);
        let (years, rest) = (months / 12, months % 12);
        let plural = |n: u32, one: &str, many: &str| {
            format!("{} {}", n, if n == 1 { one } else { many })
        };
        match (years, rest) {
            (0, m) => plural(m, "mo", "mos"),
            (y, 0) => plural(y, "yr", "yrs"),
            (y, m) => format!("{} {}", plural(y, "yr", "yrs"), plural(m, "mo", "mos")),
        }
    }
}

fn parse_month(text: &str) -> Option<NaiveDate> {
    let (month, year) = text.split_once('/')?;
    NaiveDate::from_ymd_opt(year.trim().parse().ok()?, month.trim().parse().ok()?, 1)
}

fn month_ordinal(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 15).unwrap()
    }

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = Portfolio::embedded().unwrap();
        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.education.len(), 3);
        assert_eq!(portfolio.experience.len(), 2);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.tech_stack.len(), 4);
    }

    #[test]
    fn test_embedded_galleries_open() {
        let portfolio = Portfolio::embedded().unwrap();
        for project in &portfolio.projects {
            if let Some(modal) = project.open_gallery() {
                let modal = modal.unwrap();
                assert!(modal.current_image().is_ok(), "{}", project.title);
            }
        }
    }

    #[test]
    fn test_gallery_title_falls_back_to_project() {
        let portfolio = Portfolio::parse(
            r#"
            [profile]
            name = "Dev"
            headline = "Engineer"

            [[projects]]
            title = "Tracker"
            description = "Tracks things"
            image = "https://img.example/tracker.png"
            link = "https://github.com/dev/tracker"

            [[projects.gallery.images]]
            url = "https://img.example/home.png"
            title = "Home"
            description = "Landing"
            category = "main"
            "#,
        )
        .unwrap();

        let modal = portfolio.projects[0].open_gallery().unwrap().unwrap();
        assert_eq!(modal.title(), "Tracker");
        assert_eq!(modal.state().len(), 1);
    }

    #[test]
    fn test_project_without_gallery() {
        let portfolio = Portfolio::parse(
            r#"
            [profile]
            name = "Dev"
            headline = "Engineer"

            [[projects]]
            title = "Site"
            description = "A site"
            image = "https://img.example/site.png"
            link = "https://github.com/dev/site"
            "#,
        )
        .unwrap();
        assert!(portfolio.projects[0].open_gallery().is_none());
        assert!(portfolio.education.is_empty());
    }

    #[test]
    fn test_period_parse() {
        let period = Period::parse("06/2024 - 08/2024").unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 8, 1));
        assert!(!period.is_current());

        let ongoing = Period::parse("10/2024 - Present").unwrap();
        assert!(ongoing.is_current());
    }

    #[test]
    fn test_period_rejects_garbage() {
        assert!(Period::parse("2024").is_err());
        assert!(Period::parse("13/2024 - Present").is_err());
        assert!(Period::parse("09/2024 - 05/2024").is_err());
    }

    #[test]
    fn test_duration_labels() {
        let today = date(2025, 1);
        assert_eq!(
            Period::parse("06/2024 - 08/2024").unwrap().duration_label(today),
            "3 mos"
        );
        assert_eq!(
            Period::parse("10/2024 - Present").unwrap().duration_label(today),
            "4 mos"
        );
        assert_eq!(
            Period::parse("01/2021 - 12/2021").unwrap().duration_label(today),
            "1 yr"
        );
        assert_eq!(
            Period::parse("01/2021 - Present").unwrap().duration_label(today),
            "4 yrs 1 mo"
        );
    }
}
