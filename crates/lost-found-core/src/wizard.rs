//! Report Wizard
//!
//! Four-step linear form that produces exactly one new item on submit.
//! Moving forward requires the current step's fields; moving back is always
//! allowed past step one.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Category, Item, ItemStatus, NewItem};
use crate::repository::ItemRepository;

/// Most photos a draft can hold
pub const MAX_PHOTOS: usize = 5;

/// Reporter name used when nobody is signed in
pub const ANONYMOUS_REPORTER: &str = "Anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Lost or found
    Kind = 1,
    /// Title and category
    Details = 2,
    /// Description, location, date and photos
    Place = 3,
    /// Contact info, summary and submit
    Contact = 4,
}

impl Step {
    pub const COUNT: u8 = 4;

    pub const ALL: [Step; 4] = [Step::Kind, Step::Details, Step::Place, Step::Contact];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Kind => "Type",
            Step::Details => "Details",
            Step::Place => "Location",
            Step::Contact => "Contact",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Kind => Some(Step::Details),
            Step::Details => Some(Step::Place),
            Step::Place => Some(Step::Contact),
            Step::Contact => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Kind => None,
            Step::Details => Some(Step::Kind),
            Step::Place => Some(Step::Details),
            Step::Contact => Some(Step::Place),
        }
    }
}

/// Whether the user lost or found the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Lost,
    Found,
}

impl From<ReportKind> for ItemStatus {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Lost => ItemStatus::Lost,
            ReportKind::Found => ItemStatus::Found,
        }
    }
}

/// A locally attached photo. Never uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub name: String,
    /// Browser object URL used for the preview
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step {0} is missing required fields")]
    Incomplete(u8),
    #[error("already on the first step")]
    AtFirstStep,
    #[error("already on the last step")]
    AtLastStep,
    #[error("submit is only possible from the last step")]
    NotOnFinalStep,
}

/// Everything the user has entered so far
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub kind: Option<ReportKind>,
    pub title: String,
    pub category: Option<Category>,
    pub description: String,
    /// Empty until a location is selected
    pub location: String,
    pub date: NaiveDate,
    pub contact_info: String,
    photos: Vec<Photo>,
}

impl ReportDraft {
    fn new(today: NaiveDate) -> Self {
        Self {
            kind: None,
            title: String::new(),
            category: None,
            description: String::new(),
            location: String::new(),
            date: today,
            contact_info: String::new(),
            photos: Vec::new(),
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportWizard {
    step: Step,
    draft: ReportDraft,
}

impl ReportWizard {
    /// Fresh wizard on step one; `today` seeds the date field
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: Step::Kind,
            draft: ReportDraft::new(today),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn set_kind(&mut self, kind: ReportKind) {
        self.draft.kind = Some(kind);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = Some(category);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.draft.location = location.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
    }

    pub fn set_contact_info(&mut self, contact_info: impl Into<String>) {
        self.draft.contact_info = contact_info.into();
    }

    fn step_complete(&self, step: Step) -> bool {
        let d = &self.draft;
        match step {
            Step::Kind => d.kind.is_some(),
            Step::Details => !d.title.trim().is_empty() && d.category.is_some(),
            Step::Place => !d.description.trim().is_empty() && !d.location.trim().is_empty(),
            Step::Contact => !d.contact_info.trim().is_empty(),
        }
    }

    /// Whether the current step's required fields are filled
    pub fn can_proceed(&self) -> bool {
        self.step_complete(self.step)
    }

    pub fn can_go_back(&self) -> bool {
        self.step != Step::Kind
    }

    /// Advance one step
    pub fn next(&mut self) -> Result<Step, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        if !self.can_proceed() {
            return Err(WizardError::Incomplete(self.step.number()));
        }
        self.step = next;
        Ok(next)
    }

    /// Go back one step
    pub fn back(&mut self) -> Result<Step, WizardError> {
        let prev = self.step.prev().ok_or(WizardError::AtFirstStep)?;
        self.step = prev;
        Ok(prev)
    }

    /// Attach photos up to [`MAX_PHOTOS`]; returns the ones that did not fit
    pub fn attach_photos<I>(&mut self, photos: I) -> Vec<Photo>
    where
        I: IntoIterator<Item = Photo>,
    {
        let mut rejected = Vec::new();
        for photo in photos {
            if self.draft.photos.len() < MAX_PHOTOS {
                self.draft.photos.push(photo);
            } else {
                rejected.push(photo);
            }
        }
        rejected
    }

    /// Remove the photo at `index`; later photos shift down
    pub fn remove_photo(&mut self, index: usize) -> Option<Photo> {
        (index < self.draft.photos.len()).then(|| self.draft.photos.remove(index))
    }

    /// Assembled item, if every step is complete
    fn build(&self, reporter: &str) -> Option<NewItem> {
        let d = &self.draft;
        Some(NewItem {
            title: d.title.trim().to_string(),
            category: d.category?,
            location: d.location.clone(),
            date: d.date,
            description: d.description.trim().to_string(),
            status: d.kind?.into(),
            image: None,
            reporter: reporter.to_string(),
            contact_info: d.contact_info.trim().to_string(),
        })
    }

    /// Write the report into `repo` and reset the wizard.
    ///
    /// Returns the photos that were attached so the caller can release them.
    pub fn submit(
        &mut self,
        repo: &mut ItemRepository,
        reporter: Option<&str>,
    ) -> Result<(Item, Vec<Photo>), WizardError> {
        if self.step != Step::Contact {
            return Err(WizardError::NotOnFinalStep);
        }
        // Fields stay editable after their step, so every step is rechecked
        if let Some(step) = Step::ALL.into_iter().find(|&s| !self.step_complete(s)) {
            return Err(WizardError::Incomplete(step.number()));
        }
        let new_item = self
            .build(reporter.unwrap_or(ANONYMOUS_REPORTER))
            .ok_or(WizardError::Incomplete(self.step.number()))?;

        let item = repo.add(new_item);
        let photos = self.reset();
        Ok((item, photos))
    }

    /// Back to an empty step one, keeping the date. Returns dropped photos.
    pub fn reset(&mut self) -> Vec<Photo> {
        let today = self.draft.date;
        let old = std::mem::replace(&mut self.draft, ReportDraft::new(today));
        self.step = Step::Kind;
        old.photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()
    }

    fn photo(n: usize) -> Photo {
        Photo {
            name: format!("photo-{}.jpg", n),
            url: format!("blob:{}", n),
        }
    }

    fn filled_to_contact(wizard: &mut ReportWizard) {
        wizard.set_kind(ReportKind::Lost);
        wizard.next().unwrap();
        wizard.set_title("Silver Watch");
        wizard.set_category(Category::Jewelry);
        wizard.next().unwrap();
        wizard.set_description("Fossil watch with a leather strap");
        wizard.set_location("Library - 3rd Floor");
        wizard.next().unwrap();
    }

    #[test]
    fn test_next_blocked_until_kind_chosen() {
        let mut wizard = ReportWizard::new(today());
        assert!(!wizard.can_proceed());
        assert_eq!(wizard.next(), Err(WizardError::Incomplete(1)));
        assert_eq!(wizard.step(), Step::Kind);

        wizard.set_kind(ReportKind::Found);
        assert!(wizard.can_proceed());
        assert_eq!(wizard.next(), Ok(Step::Details));
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let mut wizard = ReportWizard::new(today());
        wizard.set_kind(ReportKind::Lost);
        wizard.next().unwrap();

        wizard.set_title("   ");
        wizard.set_category(Category::Books);
        assert!(!wizard.can_proceed());

        wizard.set_title("Calculus textbook");
        assert!(wizard.can_proceed());
    }

    #[test]
    fn test_place_step_needs_location() {
        let mut wizard = ReportWizard::new(today());
        wizard.set_kind(ReportKind::Lost);
        wizard.next().unwrap();
        wizard.set_title("Umbrella");
        wizard.set_category(Category::Other);
        wizard.next().unwrap();

        wizard.set_description("Black folding umbrella");
        assert!(!wizard.can_proceed());
        wizard.set_location("Cafeteria");
        assert_eq!(wizard.next(), Ok(Step::Contact));
    }

    #[test]
    fn test_back_navigation() {
        let mut wizard = ReportWizard::new(today());
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));

        filled_to_contact(&mut wizard);
        assert_eq!(wizard.next(), Err(WizardError::AtLastStep));
        assert_eq!(wizard.back(), Ok(Step::Place));
        assert_eq!(wizard.back(), Ok(Step::Details));
        // Fields survive going back
        assert_eq!(wizard.draft().title, "Silver Watch");
    }

    #[test]
    fn test_submit_adds_exactly_one_item() {
        let mut repo = ItemRepository::from_items(crate::seed::items());
        let before = repo.len();

        let mut wizard = ReportWizard::new(today());
        filled_to_contact(&mut wizard);
        assert!(!wizard.can_proceed());
        wizard.set_contact_info("me@university.edu");

        let (item, _) = wizard.submit(&mut repo, Some("Sarah Chen")).unwrap();

        assert_eq!(repo.len(), before + 1);
        assert_eq!(item.status, ItemStatus::Lost);
        assert_eq!(item.title, "Silver Watch");
        assert_eq!(item.category, Category::Jewelry);
        assert_eq!(item.location, "Library - 3rd Floor");
        assert_eq!(item.description, "Fossil watch with a leather strap");
        assert_eq!(item.contact_info, "me@university.edu");
        assert_eq!(item.reporter, "Sarah Chen");
        assert_eq!(item.date, today());
        assert_eq!(repo.list().last(), Some(&item));

        assert_eq!(wizard.step(), Step::Kind);
        assert_eq!(wizard.draft().kind, None);
    }

    #[test]
    fn test_submit_requires_last_step_and_contact() {
        let mut repo = ItemRepository::new();
        let mut wizard = ReportWizard::new(today());
        wizard.set_kind(ReportKind::Found);
        assert_eq!(wizard.submit(&mut repo, None).unwrap_err(), WizardError::NotOnFinalStep);

        let mut wizard = ReportWizard::new(today());
        filled_to_contact(&mut wizard);
        assert_eq!(wizard.submit(&mut repo, None).unwrap_err(), WizardError::Incomplete(4));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_submit_rechecks_earlier_steps() {
        let mut repo = ItemRepository::new();
        let mut wizard = ReportWizard::new(today());
        filled_to_contact(&mut wizard);
        wizard.set_contact_info("555-0100");

        wizard.set_title("   ");
        assert_eq!(wizard.submit(&mut repo, None).unwrap_err(), WizardError::Incomplete(2));

        wizard.set_title("Silver Watch");
        wizard.set_description("");
        assert_eq!(wizard.submit(&mut repo, None).unwrap_err(), WizardError::Incomplete(3));

        wizard.set_description("Fossil watch with a leather strap");
        wizard.set_location("");
        assert_eq!(wizard.submit(&mut repo, None).unwrap_err(), WizardError::Incomplete(3));
        assert!(repo.is_empty());
        assert_eq!(wizard.step(), Step::Contact);

        wizard.set_location("Library - 3rd Floor");
        let (item, _) = wizard.submit(&mut repo, None).unwrap();
        assert_eq!(item.title, "Silver Watch");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_anonymous_reporter() {
        let mut repo = ItemRepository::new();
        let mut wizard = ReportWizard::new(today());
        filled_to_contact(&mut wizard);
        wizard.set_contact_info("555-0100");

        let (item, _) = wizard.submit(&mut repo, None).unwrap();
        assert_eq!(item.reporter, ANONYMOUS_REPORTER);
    }

    #[test]
    fn test_photos_truncate_to_five() {
        let mut wizard = ReportWizard::new(today());
        let rejected = wizard.attach_photos((0..3).map(photo));
        assert!(rejected.is_empty());

        let rejected = wizard.attach_photos((3..7).map(photo));
        assert_eq!(wizard.draft().photos().len(), MAX_PHOTOS);
        assert_eq!(rejected, vec![photo(5), photo(6)]);
    }

    #[test]
    fn test_remove_photo_shifts_later_ones() {
        let mut wizard = ReportWizard::new(today());
        wizard.attach_photos((0..5).map(photo));

        assert_eq!(wizard.remove_photo(2), Some(photo(2)));
        let names: Vec<&str> = wizard.draft().photos().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["photo-0.jpg", "photo-1.jpg", "photo-3.jpg", "photo-4.jpg"]);

        assert_eq!(wizard.remove_photo(10), None);
        assert_eq!(wizard.draft().photos().len(), 4);
    }

    #[test]
    fn test_submit_hands_back_photos() {
        let mut repo = ItemRepository::new();
        let mut wizard = ReportWizard::new(today());
        wizard.attach_photos([photo(1)]);
        filled_to_contact(&mut wizard);
        wizard.set_contact_info("me@university.edu");

        let (item, photos) = wizard.submit(&mut repo, None).unwrap();
        assert_eq!(item.image, None);
        assert_eq!(photos, vec![photo(1)]);
        assert!(wizard.draft().photos().is_empty());
    }
}
