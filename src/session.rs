//! Listing state behind the launcher window
//!
//! The session owns the descriptors of the current scan, hands out stable
//! [`ItemId`]s for them and applies the text filter and category selection.
//! The window only ever sees ids and labels; activation maps an id back to
//! its descriptor at click time.

use crate::error::{LauncherError, Result};
use crate::launcher::{LaunchBackend, LaunchOutcome, Launcher};
use crate::scanner::{Category, FileDescriptor};

/// Stable handle for one listed item, valid until the next [`Session::replace`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Category selection from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Everything
    #[default]
    All,
    /// Applications, including Store app shortcuts
    Apps,
    /// Images, videos and audio
    Media,
    /// Shortcuts other than Store apps
    Links,
}

impl CategoryFilter {
    /// Sidebar order
    pub const ALL: [Self; 4] = [Self::All, Self::Apps, Self::Media, Self::Links];

    /// Sidebar button text
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Apps => "Apps",
            Self::Media => "Media",
            Self::Links => "Links",
        }
    }

    /// Filter for a sidebar index; out-of-range indices select everything
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Whether `descriptor` belongs to this category
    pub fn matches(self, descriptor: &FileDescriptor) -> bool {
        match self {
            Self::All => true,
            Self::Apps => {
                descriptor.category == Category::Application || descriptor.is_store_app()
            }
            Self::Media => matches!(descriptor.category, Category::Media(_)),
            Self::Links => descriptor.category == Category::Shortcut && !descriptor.is_store_app(),
        }
    }
}

/// Row text: type tag in parentheses followed by the name, e.g. `(video) clip`
pub fn item_label(descriptor: &FileDescriptor) -> String {
    format!("({}) {}", descriptor.kind_label(), descriptor.display_name)
}

/// Current listing, filter and selection
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<FileDescriptor>,
    filter: String,
    category: CategoryFilter,
}

impl Session {
    /// Session over `descriptors`, sorted case-insensitively by display name
    pub fn new(descriptors: Vec<FileDescriptor>) -> Self {
        let mut session = Self::default();
        session.replace(descriptors);
        session
    }

    /// Swap in a fresh scan. Previously issued ids become invalid; the filter
    /// and category are kept.
    pub fn replace(&mut self, mut descriptors: Vec<FileDescriptor>) {
        descriptors.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.source_path.cmp(&b.source_path))
        });
        self.items = descriptors;
    }

    /// Number of items, ignoring filters
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the session holds no items at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current filter text
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set the filter text (case-insensitive substring of the display name)
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
    }

    /// Current category selection
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Change the category selection
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Items passing the filter and category, in display order
    pub fn visible(&self) -> impl Iterator<Item = (ItemId, &FileDescriptor)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, d)| self.category.matches(d))
            .filter(|(_, d)| {
                self.filter.is_empty() || d.display_name.to_lowercase().contains(&self.filter)
            })
            .map(|(index, d)| (ItemId(index), d))
    }

    /// First visible item, the target of "press Enter in the filter box"
    pub fn first_visible(&self) -> Option<ItemId> {
        self.visible().next().map(|(id, _)| id)
    }

    /// Descriptor behind `id`
    pub fn get(&self, id: ItemId) -> Result<&FileDescriptor> {
        self.items.get(id.0).ok_or(LauncherError::UnknownItem(id.0))
    }

    /// Launch the item behind `id`
    pub fn activate<B: LaunchBackend>(
        &self,
        id: ItemId,
        launcher: &mut Launcher<B>,
    ) -> Result<LaunchOutcome> {
        let descriptor = self.get(id)?;
        launcher.launch(descriptor)
    }
}
