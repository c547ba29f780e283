//! Help content data model.
//!
//! Documents are stored per `(language, category)` and parsed into a typed
//! schema. Every field is optional (list fields default to empty, and an
//! explicit `null` list reads as empty) so sparse translations still load,
//! while documents of the wrong shape are rejected at parse time.

use crate::domain::errors::ContentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifies one cached help document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentKey {
    language: String,
    category: String,
}

impl ContentKey {
    pub fn new(language: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            category: category.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language, self.category)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpSection {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub difficulty: Option<Difficulty>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub search_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpTopic {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialStep {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    pub action: Option<String>,
    pub target: Option<String>,
    /// Expected duration in milliseconds
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<TutorialStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A parsed help document. Never mutated once cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<HelpSection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<HelpTopic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tutorials: Vec<Tutorial>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<FaqEntry>,
    pub version: Option<String>,
    pub last_updated: Option<String>,
    pub language: Option<String>,
}

/// Borrowed view of one addressable item inside a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentItem<'a> {
    Document(&'a ContentDocument),
    Section(&'a HelpSection),
    Topic(&'a HelpTopic),
    Tutorial(&'a Tutorial),
    Faq(&'a FaqEntry),
}

impl ContentItem<'_> {
    pub fn title(&self) -> &str {
        match self {
            ContentItem::Document(doc) => doc.title.as_deref().unwrap_or_default(),
            ContentItem::Section(section) => &section.title,
            ContentItem::Topic(topic) => &topic.title,
            ContentItem::Tutorial(tutorial) => &tutorial.title,
            ContentItem::Faq(faq) => &faq.question,
        }
    }
}

/// Owned copy of a `ContentItem`, for callers that outlive the cache entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HelpItem {
    Document(Box<ContentDocument>),
    Section(HelpSection),
    Topic(HelpTopic),
    Tutorial(Tutorial),
    Faq(FaqEntry),
}

impl From<ContentItem<'_>> for HelpItem {
    fn from(item: ContentItem<'_>) -> Self {
        match item {
            ContentItem::Document(doc) => HelpItem::Document(Box::new(doc.clone())),
            ContentItem::Section(section) => HelpItem::Section(section.clone()),
            ContentItem::Topic(topic) => HelpItem::Topic(topic.clone()),
            ContentItem::Tutorial(tutorial) => HelpItem::Tutorial(tutorial.clone()),
            ContentItem::Faq(faq) => HelpItem::Faq(faq.clone()),
        }
    }
}

impl ContentDocument {
    /// Parse raw JSON for `key`.
    ///
    /// The root must be a JSON object; arrays and scalars are rejected even
    /// though serde would otherwise accept a sequence for a struct.
    pub fn from_json(key: &ContentKey, raw: &str) -> Result<Self, ContentError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ContentError::parse(key, e.to_string()))?;

        if !value.is_object() {
            return Err(ContentError::parse(key, "document root must be an object"));
        }

        serde_json::from_value(value).map_err(|e| ContentError::parse(key, e.to_string()))
    }

    /// Find an item by id: the document itself, then sections, topics,
    /// tutorials and FAQ entries in that order.
    pub fn find_item(&self, item_id: &str) -> Option<ContentItem<'_>> {
        if self.id.as_deref() == Some(item_id) {
            return Some(ContentItem::Document(self));
        }

        self.sections
            .iter()
            .find(|s| s.id == item_id)
            .map(ContentItem::Section)
            .or_else(|| {
                self.topics
                    .iter()
                    .find(|t| t.id == item_id)
                    .map(ContentItem::Topic)
            })
            .or_else(|| {
                self.tutorials
                    .iter()
                    .find(|t| t.id == item_id)
                    .map(ContentItem::Tutorial)
            })
            .or_else(|| {
                self.faqs
                    .iter()
                    .find(|f| f.id == item_id)
                    .map(ContentItem::Faq)
            })
    }

    /// Number of addressable items (excluding the document itself)
    pub fn item_count(&self) -> usize {
        self.sections.len() + self.topics.len() + self.tutorials.len() + self.faqs.len()
    }
}

/// One per-language step of a load, recorded before any I/O
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadAttemptRecord {
    pub language: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl LoadAttemptRecord {
    pub fn new(key: &ContentKey) -> Self {
        Self {
            language: key.language().to_string(),
            category: key.category().to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn key(&self) -> ContentKey {
        ContentKey::new(self.language.clone(), self.category.clone())
    }
}
