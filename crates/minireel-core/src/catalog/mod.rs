//! Static video catalog and the queries the feed and player views run over it

mod videos;

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, Result};

/// Fixed set of feed categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Action,
    Comedy,
    Drama,
    Documentary,
    Music,
    Sports,
    Technology,
    Travel,
}

impl Category {
    #[cfg(test)]
    pub(crate) fn all() -> &'static [Category] {
        &[
            Category::Action,
            Category::Comedy,
            Category::Drama,
            Category::Documentary,
            Category::Music,
            Category::Sports,
            Category::Technology,
            Category::Travel,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Action => "Action",
            Category::Comedy => "Comedy",
            Category::Drama => "Drama",
            Category::Documentary => "Documentary",
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
            Category::Travel => "Travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playable entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Nominal length in seconds. Display only; the media element reports the real one.
    pub duration: u32,
    pub category: Category,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Videos sharing a category, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub videos: Vec<VideoItem>,
}

/// Immutable list of videos with lookup helpers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<VideoItem>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(videos::builtin_videos()));

impl Catalog {
    pub fn new(videos: Vec<VideoItem>) -> Self {
        Self { videos }
    }

    /// The catalog shipped with the app
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn all(&self) -> &[VideoItem] {
        &self.videos
    }

    pub fn by_id(&self, id: &str) -> Option<&VideoItem> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Like [`Catalog::by_id`], but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&VideoItem> {
        self.by_id(id)
            .ok_or_else(|| PlayerError::UnknownVideo(id.to_string()))
    }

    pub fn by_category(&self, category: Category) -> Vec<VideoItem> {
        self.videos
            .iter()
            .filter(|v| v.category == category)
            .cloned()
            .collect()
    }

    /// Distinct categories in the order they first appear
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for video in &self.videos {
            if !seen.contains(&video.category) {
                seen.push(video.category);
            }
        }
        seen
    }

    /// Partition the catalog by category, groups ordered by first appearance
    pub fn grouped_by_category(&self) -> Vec<CategoryGroup> {
        self.categories()
            .into_iter()
            .map(|category| CategoryGroup {
                category,
                videos: self.by_category(category),
            })
            .collect()
    }

    /// Same-category videos, excluding `current` itself
    pub fn related_to(&self, current: &VideoItem) -> Vec<VideoItem> {
        self.videos
            .iter()
            .filter(|v| v.category == current.category && v.id != current.id)
            .cloned()
            .collect()
    }

    /// First related video; this is what autoplay chains into
    pub fn next_after(&self, current: &VideoItem) -> Option<VideoItem> {
        self.videos
            .iter()
            .find(|v| v.category == current.category && v.id != current.id)
            .cloned()
    }
}

#[cfg(test)]
pub(crate) fn test_video(id: &str, category: Category) -> VideoItem {
    VideoItem {
        id: id.to_string(),
        title: format!("Video {}", id),
        thumbnail: format!("https://example.test/{}.jpg", id),
        duration: 100,
        category,
        video_url: format!("https://example.test/{}.mp4", id),
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Catalog {
        Catalog::new(vec![
            test_video("a1", Category::Action),
            test_video("d1", Category::Drama),
            test_video("a2", Category::Action),
            test_video("m1", Category::Music),
            test_video("d2", Category::Drama),
        ])
    }

    #[test]
    fn test_by_id_finds_every_builtin_video() {
        let catalog = Catalog::builtin();
        assert!(!catalog.all().is_empty());
        for video in catalog.all() {
            assert_eq!(catalog.by_id(&video.id), Some(video));
        }
        assert!(catalog.by_id("missing").is_none());
    }

    #[test]
    fn test_require_unknown_id() {
        let err = Catalog::builtin().require("nope").unwrap_err();
        assert_eq!(err, PlayerError::UnknownVideo("nope".to_string()));
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&str> = catalog.all().iter().map(|v| v.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn test_grouping_partitions_in_first_seen_order() {
        let catalog = mixed();
        let groups = catalog.grouped_by_category();
        let order: Vec<Category> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, vec![Category::Action, Category::Drama, Category::Music]);
        assert_eq!(order, catalog.categories());

        let total: usize = groups.iter().map(|g| g.videos.len()).sum();
        assert_eq!(total, catalog.all().len());
        for video in catalog.all() {
            let containing = groups
                .iter()
                .filter(|g| g.videos.iter().any(|v| v.id == video.id))
                .count();
            assert_eq!(containing, 1, "{} should be in exactly one group", video.id);
        }

        let action_ids: Vec<&str> = groups[0].videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(action_ids, vec!["a1", "a2"]);
    }

    #[test]
    fn test_builtin_grouping_covers_catalog() {
        let catalog = Catalog::builtin();
        let groups = catalog.grouped_by_category();
        let total: usize = groups.iter().map(|g| g.videos.len()).sum();
        assert_eq!(total, catalog.all().len());
        assert_eq!(groups[0].category, Category::Action);
    }

    #[test]
    fn test_related_excludes_self_and_other_categories() {
        let catalog = Catalog::builtin();
        for video in catalog.all() {
            let related = catalog.related_to(video);
            assert!(related.iter().all(|r| r.id != video.id));
            assert!(related.iter().all(|r| r.category == video.category));
            assert_eq!(related.len(), catalog.by_category(video.category).len() - 1);
        }
    }

    #[test]
    fn test_next_after_is_first_related() {
        let catalog = mixed();
        let a2 = catalog.by_id("a2").unwrap().clone();
        assert_eq!(catalog.next_after(&a2).map(|v| v.id), Some("a1".to_string()));

        let m1 = catalog.by_id("m1").unwrap().clone();
        assert!(catalog.next_after(&m1).is_none());
    }

    #[test]
    fn test_groups_keep_list_order_within_category() {
        let catalog = Catalog::builtin();
        for group in catalog.grouped_by_category() {
            let expected: Vec<&str> = catalog
                .all()
                .iter()
                .filter(|v| v.category == group.category)
                .map(|v| v.id.as_str())
                .collect();
            let actual: Vec<&str> = group.videos.iter().map(|v| v.id.as_str()).collect();
            assert_eq!(actual, expected);
            assert!(Category::all().contains(&group.category));
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::all().len(), 8);
        assert_eq!(Category::Technology.to_string(), "Technology");
    }
}
