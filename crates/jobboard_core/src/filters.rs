/// Platforms offered by the platform picker, in display order.
pub const KNOWN_PLATFORMS: [&str; 20] = [
    "LinkedIn",
    "Wellfound",
    "Naukri",
    "Indeed",
    "Glassdoor",
    "Monster",
    "SimplyHired",
    "ZipRecruiter",
    "Shine",
    "TimesJobs",
    "CareerBuilder",
    "JobStreet",
    "Foundit",
    "Hirect",
    "AngelList",
    "Dice",
    "Jooble",
    "Internshala",
    "Freshersworld",
    "WorkIndia",
];

/// Maps user input onto a known platform name, ignoring case and surrounding whitespace.
pub fn canonical_platform(input: &str) -> Option<&'static str> {
    let needle = input.trim();
    KNOWN_PLATFORMS
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(needle))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Title,
    Platform,
}

impl FilterField {
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Title => "title",
            FilterField::Platform => "platform",
        }
    }
}

/// Immutable filter snapshot. `None` means "no constraint"; an empty or
/// whitespace-only input is normalized to `None` and never reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    title: Option<String>,
    platform: Option<String>,
}

impl FilterCriteria {
    pub fn new(title: &str, platform: &str) -> Self {
        Self {
            title: normalize(title),
            platform: normalize(platform),
        }
    }

    pub fn unset() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Title => self.title(),
            FilterField::Platform => self.platform(),
        }
    }

    /// Copy of these criteria with one field unset.
    pub fn without(&self, field: FilterField) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Title => next.title = None,
            FilterField::Platform => next.platform = None,
        }
        next
    }

    pub fn is_unset(&self) -> bool {
        self.title.is_none() && self.platform.is_none()
    }

    /// Set fields in display order (title first).
    pub fn active(&self) -> Vec<(FilterField, String)> {
        [FilterField::Title, FilterField::Platform]
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value.to_string())))
            .collect()
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
