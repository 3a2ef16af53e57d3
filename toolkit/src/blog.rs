//! Blog draft generator model.
//!
//! Content is produced from fixed templates; no feed is fetched and no model
//! is called. The widget drives the simulated delays and calls back into
//! [`BlogState`] when each one elapses.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use time::{Duration, OffsetDateTime, Weekday};
use uuid::Uuid;

use crate::catalog::{ContentTemplate, FeedSource};

pub const GENERATE_DELAY_MS: u32 = 3000;
pub const SCAN_DELAY_MS: u32 = 2000;
pub const PROGRESS_STEP_MS: u32 = 750;

pub const PROGRESS_STEPS: [&str; 4] = [
    "📰 Analyzing RSS feeds...",
    "🤖 AI processing content...",
    "✍️ Optimizing for SEO...",
    "🌍 Preparing translations...",
];

pub const SCAN_STARTED: &str = "Scanning RSS feeds for new content...";
pub const SCAN_FINISHED: &str = "Found 5 new articles across all feeds!";
pub const GENERATED: &str = "Article generated successfully! Check the Drafts tab.";

pub const LANGUAGES: [(&str, &str); 4] = [("en", "English"), ("de", "German"), ("fr", "French"), ("it", "Italian")];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlogView {
    #[default]
    Dashboard,
    Feeds,
    Drafts,
    Schedule,
    Settings,
}

impl BlogView {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Feeds, Self::Drafts, Self::Schedule, Self::Settings];

    /// Unknown values show the dashboard.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|view| view.as_str() == raw).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Feeds => "feeds",
            Self::Drafts => "drafts",
            Self::Schedule => "schedule",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Feeds => "RSS Feeds",
            Self::Drafts => "Drafts",
            Self::Schedule => "Schedule",
            Self::Settings => "Settings",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub language: String,
    pub word_count: u32,
    pub generated_at: OffsetDateTime,
}

impl Draft {
    fn new(title: &str, excerpt: &str, language: &str, word_count: u32, generated_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            excerpt: excerpt.to_owned(),
            language: language.to_owned(),
            word_count,
            generated_at,
        }
    }

    /// `EN · 1,245 words`.
    #[must_use]
    pub fn meta(&self) -> String {
        format!("{} · {} words", self.language.to_uppercase(), crate::dashboard::format_count(self.word_count))
    }
}

/// A recurring weekly publication slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledPost {
    pub day: Weekday,
    pub time: &'static str,
    pub title: &'static str,
}

fn weekly_schedule() -> Vec<ScheduledPost> {
    vec![
        ScheduledPost { day: Weekday::Monday, time: "10:00", title: "Industry News" },
        ScheduledPost { day: Weekday::Wednesday, time: "14:00", title: "Buying Guide" },
        ScheduledPost { day: Weekday::Friday, time: "09:00", title: "Swiss Market Update" },
    ]
}

/// Editorial settings shown on the settings view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub tone: String,
    pub audience: String,
    pub primary_language: String,
    pub auto_translate: bool,
    pub translation_languages: Vec<String>,
    pub focus_keywords: Vec<String>,
    pub meta_template: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            tone: "professional".to_owned(),
            audience: "general".to_owned(),
            primary_language: "en".to_owned(),
            auto_translate: true,
            translation_languages: ["de", "fr", "it"].map(str::to_owned).to_vec(),
            focus_keywords: ["e-bike schweiz", "elektrofahrrad kaufen", "pedelec test", "e-bike beratung"]
                .map(str::to_owned)
                .to_vec(),
            meta_template: "{title} - Expert advice from Godspeed, your Swiss e-bike specialist. {excerpt}".to_owned(),
        }
    }
}

impl GeneratorSettings {
    /// Fill `{title}` and `{excerpt}` in the meta description template.
    #[must_use]
    pub fn meta_description(&self, draft: &Draft) -> String {
        self.meta_template.replace("{title}", &draft.title).replace("{excerpt}", &draft.excerpt)
    }

    /// Comma-separated keyword list from the settings textarea.
    pub fn set_keywords(&mut self, raw: &str) {
        self.focus_keywords = raw
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_owned)
            .collect();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Generation {
    #[default]
    Idle,
    /// Index into [`PROGRESS_STEPS`] of the step currently highlighted.
    Running { step: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogState {
    view: BlogView,
    feeds: Vec<FeedSource>,
    templates: Vec<ContentTemplate>,
    drafts: Vec<Draft>,
    schedule: Vec<ScheduledPost>,
    generation: Generation,
    scanning: bool,
    pub settings: GeneratorSettings,
}

impl BlogState {
    #[must_use]
    pub fn new(feeds: Vec<FeedSource>, templates: Vec<ContentTemplate>, now: OffsetDateTime) -> Self {
        let drafts = vec![
            Draft::new(
                "E-Bike Trends 2025: What to Expect",
                "The e-bike industry is set for major innovations in 2025, with advances in battery technology...",
                "en",
                1245,
                now - Duration::hours(2),
            ),
            Draft::new(
                "Winter E-Bike Maintenance Guide",
                "Keep your e-bike running smoothly through winter with these essential maintenance tips...",
                "de",
                987,
                now - Duration::days(1),
            ),
        ];
        Self {
            view: BlogView::default(),
            feeds,
            templates,
            drafts,
            schedule: weekly_schedule(),
            generation: Generation::Idle,
            scanning: false,
            settings: GeneratorSettings::default(),
        }
    }

    #[must_use]
    pub fn view(&self) -> BlogView {
        self.view
    }

    pub fn show(&mut self, view: BlogView) {
        self.view = view;
    }

    #[must_use]
    pub fn feeds(&self) -> &[FeedSource] {
        &self.feeds
    }

    #[must_use]
    pub fn templates(&self) -> &[ContentTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn template(&self, key: &str) -> Option<&ContentTemplate> {
        self.templates.iter().find(|template| template.key == key)
    }

    #[must_use]
    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    /// Drafts in `language`, or every draft for `None`.
    pub fn drafts_in<'a>(&'a self, language: Option<&'a str>) -> impl Iterator<Item = &'a Draft> {
        self.drafts.iter().filter(move |draft| language.is_none_or(|lang| draft.language == lang))
    }

    pub fn delete_draft(&mut self, id: Uuid) -> bool {
        let before = self.drafts.len();
        self.drafts.retain(|draft| draft.id != id);
        self.drafts.len() != before
    }

    #[must_use]
    pub fn schedule(&self) -> &[ScheduledPost] {
        &self.schedule
    }

    /// Posts published on `day`.
    pub fn scheduled_on(&self, day: Weekday) -> impl Iterator<Item = &ScheduledPost> {
        self.schedule.iter().filter(move |post| post.day == day)
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        matches!(self.generation, Generation::Running { .. })
    }

    /// Start a generation run. Returns `false` if one is already running.
    pub fn start_generation(&mut self) -> bool {
        if self.is_generating() {
            return false;
        }
        self.generation = Generation::Running { step: 0 };
        true
    }

    /// Highlight the next progress step; stays on the last one.
    pub fn advance_progress(&mut self) {
        if let Generation::Running { step } = &mut self.generation {
            *step = (*step + 1).min(PROGRESS_STEPS.len() - 1);
        }
    }

    /// Append the generated draft and switch to the drafts view.
    pub fn finish_generation(&mut self, now: OffsetDateTime) -> Option<&Draft> {
        if !self.is_generating() {
            return None;
        }
        self.generation = Generation::Idle;
        self.drafts.push(Draft::new(
            "New E-Bike Safety Standards in Switzerland",
            "Understanding the latest regulatory changes for e-bikes in Switzerland...",
            "en",
            1234,
            now,
        ));
        self.view = BlogView::Drafts;
        tracing::info!(drafts = self.drafts.len(), "blog draft generated");
        self.drafts.last()
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Begin a feed scan; `None` if one is already running.
    pub fn start_scan(&mut self) -> Option<&'static str> {
        if self.scanning {
            return None;
        }
        self.scanning = true;
        tracing::debug!(feeds = self.feeds.len(), "feed scan started");
        Some(SCAN_STARTED)
    }

    pub fn finish_scan(&mut self) -> Option<&'static str> {
        if !self.scanning {
            return None;
        }
        self.scanning = false;
        Some(SCAN_FINISHED)
    }
}
