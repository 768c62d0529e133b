//! Portfolio content validator
//!
//! Checks that required fields are filled, periods parse and project galleries
//! are consistent with their declared filter chips.

use crate::core::gallery::ALL_CATEGORY;
use crate::data::portfolio::{Period, Portfolio, Project};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    EmptyField {
        context: String,
        field: &'static str,
    },
    InvalidPeriod {
        context: String,
        period: String,
    },
    EmptyGallery {
        project: String,
    },
    /// A declared chip that no image uses; selecting it shows an empty gallery
    CategoryWithoutImages {
        project: String,
        category: String,
    },
    UndeclaredCategory {
        project: String,
        category: String,
    },
    DuplicateCategory {
        project: String,
        category: String,
    },
    UnusualLink {
        context: String,
        url: String,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::EmptyField { .. }
            | ValidationIssue::InvalidPeriod { .. }
            | ValidationIssue::EmptyGallery { .. } => ValidationSeverity::Error,
            ValidationIssue::CategoryWithoutImages { .. }
            | ValidationIssue::UndeclaredCategory { .. }
            | ValidationIssue::DuplicateCategory { .. }
            | ValidationIssue::UnusualLink { .. } => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::EmptyField { context, field } => {
                format!("{}: '{}' must not be empty", context, field)
            }
            ValidationIssue::InvalidPeriod { context, period } => {
                format!("{}: cannot parse period '{}'", context, period)
            }
            ValidationIssue::EmptyGallery { project } => {
                format!("Project '{}' declares a gallery without images", project)
            }
            ValidationIssue::CategoryWithoutImages { project, category } => {
                format!(
                    "Project '{}': category '{}' has no images and will show an empty gallery",
                    project, category
                )
            }
            ValidationIssue::UndeclaredCategory { project, category } => {
                format!(
                    "Project '{}': images use category '{}' which is not declared (label defaults to the id)",
                    project, category
                )
            }
            ValidationIssue::DuplicateCategory { project, category } => {
                format!("Project '{}': category '{}' is declared twice", project, category)
            }
            ValidationIssue::UnusualLink { context, url } => {
                format!("{}: link '{}' is not http(s) or mailto", context, url)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

/// Validate a loaded portfolio
pub fn validate_portfolio(portfolio: &Portfolio) -> ValidationResult {
    let mut issues = Vec::new();
    let profile = &portfolio.profile;

    check_not_empty(&mut issues, "Profile", "name", &profile.name);
    check_not_empty(&mut issues, "Profile", "headline", &profile.headline);
    for link in &profile.links {
        check_link(&mut issues, &format!("Profile link '{}'", link.label), &link.url);
    }

    for item in &portfolio.education {
        let context = format!("Education '{}'", item.title);
        check_not_empty(&mut issues, &context, "institution", &item.institution);
        check_period(&mut issues, &context, &item.period);
    }

    for item in &portfolio.experience {
        let context = format!("Experience '{}'", item.title);
        check_not_empty(&mut issues, &context, "company", &item.company);
        check_period(&mut issues, &context, &item.period);
    }

    for cert in &portfolio.certifications {
        let context = format!("Certification '{}'", cert.title);
        check_link(&mut issues, &context, &cert.url);
    }

    for project in &portfolio.projects {
        check_project(&mut issues, project);
    }

    ValidationResult { issues }
}

fn check_not_empty(
    issues: &mut Vec<ValidationIssue>,
    context: &str,
    field: &'static str,
    value: &str,
) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::EmptyField {
            context: context.to_string(),
            field,
        });
    }
}

fn check_period(issues: &mut Vec<ValidationIssue>, context: &str, period: &str) {
    if Period::parse(period).is_err() {
        issues.push(ValidationIssue::InvalidPeriod {
            context: context.to_string(),
            period: period.to_string(),
        });
    }
}

fn check_link(issues: &mut Vec<ValidationIssue>, context: &str, url: &str) {
    let known_scheme = ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme));
    if !known_scheme {
        issues.push(ValidationIssue::UnusualLink {
            context: context.to_string(),
            url: url.to_string(),
        });
    }
}

fn check_project(issues: &mut Vec<ValidationIssue>, project: &Project) {
    let context = format!("Project '{}'", project.title);
    check_not_empty(issues, &context, "title", &project.title);
    check_link(issues, &context, &project.link);

    let Some(gallery) = &project.gallery else {
        return;
    };

    if gallery.images.is_empty() {
        issues.push(ValidationIssue::EmptyGallery {
            project: project.title.clone(),
        });
        return;
    }

    for image in &gallery.images {
        let image_context = format!("{} image '{}'", context, image.title);
        check_not_empty(issues, &image_context, "url", &image.url);
    }

    let mut seen: Vec<&str> = Vec::new();
    for category in &gallery.categories {
        if seen.contains(&category.id.as_str()) {
            issues.push(ValidationIssue::DuplicateCategory {
                project: project.title.clone(),
                category: category.id.clone(),
            });
            continue;
        }
        seen.push(&category.id);

        let used = gallery.images.iter().any(|i| i.category == category.id);
        if category.id != ALL_CATEGORY && !used {
            issues.push(ValidationIssue::CategoryWithoutImages {
                project: project.title.clone(),
                category: category.id.clone(),
            });
        }
    }

    for image in &gallery.images {
        let declared = seen.contains(&image.category.as_str());
        let already_reported = issues.iter().any(|issue| {
            matches!(issue, ValidationIssue::UndeclaredCategory { project: p, category: c }
                if *p == project.title && *c == image.category)
        });
        if !declared && !already_reported {
            issues.push(ValidationIssue::UndeclaredCategory {
                project: project.title.clone(),
                category: image.category.clone(),
            });
        }
    }
}
