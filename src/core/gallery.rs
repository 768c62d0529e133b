//! Image gallery shown inside project modals.
//!
//! The gallery is a small reducer over an immutable, shared image list. The
//! active category filter and the current index are the only moving parts;
//! frontends hold a `GalleryModal` and feed it `GalleryAction`s.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Id of the filter chip that shows every image
pub const ALL_CATEGORY: &str = "all";

/// A captioned screenshot belonging to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Filter chip declared alongside a gallery's images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub id: String,
    pub label: String,
}

impl GalleryCategory {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    fn all() -> Self {
        Self::new(ALL_CATEGORY, "All")
    }
}

/// Which slice of the gallery is visible
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORY {
            Self::All
        } else {
            Self::Category(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Category(id) => id,
        }
    }

    pub fn matches(&self, image: &GalleryImage) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => image.category == *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Navigation against a filter that matches nothing
    #[error("no images match the active filter")]
    EmptyCollection,

    #[error("unknown gallery category '{0}'")]
    UnknownCategory(String),

    #[error("index {index} is out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a gallery needs at least one image")]
    NoImages,

    #[error("image '{0}' has no url")]
    InvalidImage(String),
}

/// Images matching `filter`, in their original relative order
pub fn filtered<'a>(images: &'a [GalleryImage], filter: &CategoryFilter) -> Vec<&'a GalleryImage> {
    images.iter().filter(|image| filter.matches(image)).collect()
}

/// Everything a user can do to a gallery
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    SelectFilter(CategoryFilter),
    Next,
    Previous,
    JumpTo(usize),
}

/// Snapshot of a gallery: shared images plus the active filter and index.
///
/// Invariant: `current_index < len()` whenever `len() > 0`, otherwise it is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    images: Arc<[GalleryImage]>,
    known_categories: Arc<[String]>,
    active_filter: CategoryFilter,
    current_index: usize,
}

impl GalleryState {
    /// Build the initial state (filter `All`, index 0).
    ///
    /// `declared` lists category ids declared next to the images; every
    /// category present on an image is accepted as well.
    pub fn new(images: Arc<[GalleryImage]>, declared: &[String]) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::NoImages);
        }
        if let Some(image) = images.iter().find(|image| image.url.trim().is_empty()) {
            return Err(GalleryError::InvalidImage(image.title.clone()));
        }

        let mut known: Vec<String> = Vec::new();
        let present = images.iter().map(|image| &image.category);
        for id in declared.iter().chain(present) {
            if id != ALL_CATEGORY && !known.contains(id) {
                known.push(id.clone());
            }
        }

        Ok(Self {
            images,
            known_categories: known.into(),
            active_filter: CategoryFilter::All,
            current_index: 0,
        })
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.active_filter
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_known(&self, filter: &CategoryFilter) -> bool {
        match filter {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => self.known_categories.iter().any(|k| k == id),
        }
    }

    pub fn filtered(&self) -> Vec<&GalleryImage> {
        filtered(&self.images, &self.active_filter)
    }

    /// Size of the filtered sequence
    pub fn len(&self) -> usize {
        self.images
            .iter()
            .filter(|image| self.active_filter.matches(image))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_image(&self) -> Result<&GalleryImage, GalleryError> {
        self.images
            .iter()
            .filter(|image| self.active_filter.matches(image))
            .nth(self.current_index)
            .ok_or(GalleryError::EmptyCollection)
    }

    fn with_index(&self, current_index: usize) -> Self {
        Self {
            current_index,
            ..self.clone()
        }
    }
}

/// Apply one action, returning the next state.
///
/// Contract violations (unknown category, out-of-range jump) are rejected and
/// the caller keeps its previous state.
pub fn reduce(state: &GalleryState, action: GalleryAction) -> Result<GalleryState, GalleryError> {
    match action {
        GalleryAction::SelectFilter(filter) => {
            if !state.is_known(&filter) {
                return Err(GalleryError::UnknownCategory(filter.id().to_string()));
            }
            Ok(GalleryState {
                active_filter: filter,
                current_index: 0,
                ..state.clone()
            })
        }
        GalleryAction::Next => {
            let len = non_empty_len(state)?;
            Ok(state.with_index((state.current_index + 1) % len))
        }
        GalleryAction::Previous => {
            let len = non_empty_len(state)?;
            Ok(state.with_index((state.current_index + len - 1) % len))
        }
        GalleryAction::JumpTo(index) => {
            let len = non_empty_len(state)?;
            if index >= len {
                return Err(GalleryError::IndexOutOfRange { index, len });
            }
            Ok(state.with_index(index))
        }
    }
}

fn non_empty_len(state: &GalleryState) -> Result<usize, GalleryError> {
    match state.len() {
        0 => Err(GalleryError::EmptyCollection),
        len => Ok(len),
    }
}

/// An open gallery dialog: title, filter chips and the current state
#[derive(Debug, Clone)]
pub struct GalleryModal {
    title: String,
    chips: Vec<GalleryCategory>,
    state: GalleryState,
}

impl GalleryModal {
    pub fn new(
        title: &str,
        categories: &[GalleryCategory],
        images: &[GalleryImage],
    ) -> Result<Self, GalleryError> {
        // "All" always leads, then declared chips, then any undeclared category
        let mut chips = vec![GalleryCategory::all()];
        for category in categories {
            if category.id != ALL_CATEGORY && !chips.iter().any(|c| c.id == category.id) {
                chips.push(category.clone());
            }
        }
        for image in images {
            if !chips.iter().any(|c| c.id == image.category) {
                chips.push(GalleryCategory::new(&image.category, &image.category));
            }
        }

        let declared: Vec<String> = chips.iter().map(|c| c.id.clone()).collect();
        let state = GalleryState::new(images.to_vec().into(), &declared)?;

        Ok(Self {
            title: title.to_string(),
            chips,
            state,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn chips(&self) -> &[GalleryCategory] {
        &self.chips
    }

    pub fn is_chip_active(&self, chip: &GalleryCategory) -> bool {
        self.state.active_filter().id() == chip.id
    }

    pub fn apply(&mut self, action: GalleryAction) -> Result<(), GalleryError> {
        self.state = reduce(&self.state, action)?;
        Ok(())
    }

    pub fn select_filter(&mut self, filter: CategoryFilter) -> Result<(), GalleryError> {
        self.apply(GalleryAction::SelectFilter(filter))
    }

    pub fn next(&mut self) -> Result<(), GalleryError> {
        self.apply(GalleryAction::Next)
    }

    pub fn previous(&mut self) -> Result<(), GalleryError> {
        self.apply(GalleryAction::Previous)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
        self.apply(GalleryAction::JumpTo(index))
    }

    pub fn current_image(&self) -> Result<&GalleryImage, GalleryError> {
        self.state.current_image()
    }

    /// Move to the neighbouring filter chip, wrapping at either end
    pub fn cycle_filter(&mut self, forward: bool) -> Result<(), GalleryError> {
        let count = self.chips.len();
        let active = self
            .chips
            .iter()
            .position(|chip| self.is_chip_active(chip))
            .unwrap_or(0);
        let target = if forward {
            (active + 1) % count
        } else {
            (active + count - 1) % count
        };
        let filter = CategoryFilter::from_id(&self.chips[target].id);
        self.select_filter(filter)
    }

    /// 1-based position and total, or `None` for an empty filter
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.state.len() {
            0 => None,
            len => Some((self.state.current_index() + 1, len)),
        }
    }

    /// Accessible label for each pagination dot
    pub fn dot_labels(&self) -> Vec<String> {
        self.state
            .filtered()
            .iter()
            .map(|image| format!("View {}", image.title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(title: &str, category: &str) -> GalleryImage {
        GalleryImage {
            url: format!("https://img.example/{}.png", title.to_lowercase()),
            title: title.to_string(),
            description: format!("{} screen", title),
            category: category.to_string(),
        }
    }

    /// Seven screenshots: main 1, input 3, result 1, validation 1, other 1
    fn calculator_images() -> Vec<GalleryImage> {
        vec![
            image("Splash", "main"),
            image("Result", "result"),
            image("NewCourse", "input"),
            image("Grade", "input"),
            image("Credits", "input"),
            image("Validation", "validation"),
            image("About", "other"),
        ]
    }

    fn calculator_modal() -> GalleryModal {
        let categories = vec![
            GalleryCategory::new("main", "Main View"),
            GalleryCategory::new("input", "Input Options"),
            GalleryCategory::new("result", "Results"),
            GalleryCategory::new("validation", "Validation"),
            GalleryCategory::new("other", "Other"),
        ];
        GalleryModal::new("CGPA Calculator", &categories, &calculator_images()).unwrap()
    }

    fn state_with(count: usize) -> GalleryState {
        let images: Vec<GalleryImage> = (0..count)
            .map(|i| image(&format!("Shot{}", i), if i % 2 == 0 { "even" } else { "odd" }))
            .collect();
        GalleryState::new(images.into(), &[]).unwrap()
    }

    #[test]
    fn test_filter_keeps_only_matching_images_in_order() {
        let images = calculator_images();
        let inputs = filtered(&images, &CategoryFilter::from_id("input"));

        let titles: Vec<&str> = inputs.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["NewCourse", "Grade", "Credits"]);
        assert!(inputs.iter().all(|i| i.category == "input"));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let images = calculator_images();
        let all: Vec<GalleryImage> = filtered(&images, &CategoryFilter::All)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all, images);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let images = calculator_images();
        let filter = CategoryFilter::from_id("input");
        assert_eq!(filtered(&images, &filter), filtered(&images, &filter));
    }

    #[test]
    fn test_next_wraps_after_n_steps() {
        for count in 2..9 {
            let start = state_with(count);
            let mut state = reduce(&start, GalleryAction::JumpTo(1)).unwrap();
            for _ in 0..count {
                state = reduce(&state, GalleryAction::Next).unwrap();
            }
            assert_eq!(state.current_index(), 1, "count = {}", count);
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for count in 2..9 {
            let state = state_with(count);
            for index in 0..count {
                let s = reduce(&state, GalleryAction::JumpTo(index)).unwrap();
                let there = reduce(&s, GalleryAction::Next).unwrap();
                let back = reduce(&there, GalleryAction::Previous).unwrap();
                assert_eq!(back, s);
            }
        }
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let state = reduce(&state_with(4), GalleryAction::Previous).unwrap();
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn test_filter_change_resets_index() {
        let mut modal = calculator_modal();
        modal.jump_to(4).unwrap();
        modal.select_filter(CategoryFilter::from_id("input")).unwrap();
        assert_eq!(modal.state().current_index(), 0);

        modal.next().unwrap();
        modal.select_filter(CategoryFilter::All).unwrap();
        assert_eq!(modal.state().current_index(), 0);
    }

    #[test]
    fn test_jump_to_selects_filtered_image() {
        let mut modal = calculator_modal();
        modal.select_filter(CategoryFilter::from_id("input")).unwrap();
        modal.jump_to(2).unwrap();
        assert_eq!(modal.current_image().unwrap().title, "Credits");
    }

    #[test]
    fn test_input_filter_scenario() {
        let mut modal = calculator_modal();
        assert_eq!(modal.state().len(), 7);

        modal.select_filter(CategoryFilter::from_id("input")).unwrap();
        assert_eq!(modal.state().len(), 3);
        assert_eq!(modal.state().current_index(), 0);

        modal.next().unwrap();
        modal.next().unwrap();
        assert_eq!(modal.state().current_index(), 2);

        modal.next().unwrap();
        assert_eq!(modal.state().current_index(), 0);
    }

    #[test]
    fn test_unknown_category_is_rejected_without_change() {
        let mut modal = calculator_modal();
        modal.jump_to(3).unwrap();
        let before = modal.state().clone();

        let err = modal
            .select_filter(CategoryFilter::from_id("settings"))
            .unwrap_err();
        assert_eq!(err, GalleryError::UnknownCategory("settings".to_string()));
        assert_eq!(modal.state(), &before);
    }

    #[test]
    fn test_out_of_range_jump_is_rejected_without_change() {
        let mut modal = calculator_modal();
        modal.select_filter(CategoryFilter::from_id("input")).unwrap();
        modal.next().unwrap();

        let err = modal.jump_to(3).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(modal.state().current_index(), 1);
    }

    #[test]
    fn test_declared_category_without_images_is_empty_collection() {
        let categories = vec![GalleryCategory::new("settings", "Settings")];
        let mut modal =
            GalleryModal::new("Demo", &categories, &[image("Home", "main")]).unwrap();

        modal
            .select_filter(CategoryFilter::from_id("settings"))
            .unwrap();
        assert!(modal.state().is_empty());
        assert_eq!(modal.position(), None);
        assert_eq!(modal.next(), Err(GalleryError::EmptyCollection));
        assert_eq!(modal.previous(), Err(GalleryError::EmptyCollection));
        assert_eq!(modal.jump_to(0), Err(GalleryError::EmptyCollection));
        assert_eq!(
            modal.current_image().unwrap_err(),
            GalleryError::EmptyCollection
        );
    }

    #[test]
    fn test_gallery_without_images_is_refused() {
        let err = GalleryModal::new("Empty", &[], &[]).unwrap_err();
        assert_eq!(err, GalleryError::NoImages);
    }

    #[test]
    fn test_image_without_url_is_refused() {
        let mut blank = image("Login", "auth");
        blank.url = "  ".to_string();
        let err = GalleryModal::new("Demo", &[], &[image("Home", "main"), blank]).unwrap_err();
        assert_eq!(err, GalleryError::InvalidImage("Login".to_string()));
    }

    #[test]
    fn test_chips_lead_with_all_and_include_undeclared_categories() {
        let categories = vec![GalleryCategory::new("main", "Main View")];
        let images = vec![image("Home", "main"), image("Login", "auth")];
        let modal = GalleryModal::new("Demo", &categories, &images).unwrap();

        let ids: Vec<&str> = modal.chips().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["all", "main", "auth"]);
        assert!(modal.is_chip_active(&modal.chips()[0]));
    }

    #[test]
    fn test_cycle_filter_wraps_both_ways() {
        let mut modal = calculator_modal();

        modal.cycle_filter(false).unwrap();
        assert_eq!(modal.state().active_filter().id(), "other");

        modal.cycle_filter(true).unwrap();
        assert_eq!(modal.state().active_filter(), &CategoryFilter::All);

        modal.cycle_filter(true).unwrap();
        assert_eq!(modal.state().active_filter().id(), "main");
    }

    #[test]
    fn test_position_and_dot_labels() {
        let mut modal = calculator_modal();
        modal.select_filter(CategoryFilter::from_id("input")).unwrap();
        modal.next().unwrap();

        assert_eq!(modal.position(), Some((2, 3)));
        assert_eq!(
            modal.dot_labels(),
            vec!["View NewCourse", "View Grade", "View Credits"]
        );
    }
}
