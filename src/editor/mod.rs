//! Admin editors.
//!
//! The gallery editor commits every successful mutation right away. Section
//! editors (about, contact, SEO, footer) keep a working copy and persist it
//! according to their [`SavePolicy`].
//!
//! A commit always means: write the full record to the [`ContentStore`],
//! then publish the same record on the [`SyncBus`].

// Field enums are plain string-keyed selectors so the CLI can parse them.
macro_rules! field_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::editor::UnknownField;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|field| field.as_str() == s)
                    .ok_or_else(|| $crate::editor::UnknownField::new(
                        s,
                        Self::ALL.iter().map(|field| field.as_str()),
                    ))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod about;
mod contact;
mod draft;
mod footer;
mod gallery;
mod seo;
mod upload;

pub use about::{AboutEditor, AboutField, FeatureField};
pub use contact::{ContactEditor, ContactField};
pub use draft::{FieldError, MaterialDraft, ProductDraft};
pub use footer::{FooterEditor, FooterField, SocialField};
pub use gallery::GalleryEditor;
pub use seo::{AddressField, SeoEditor, SeoField, StructuredField};
pub use upload::{encode_data_uri, mime_for, upload_image};

use crate::{bus::SyncBus, content::Content, store::ContentStore};
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, sync::Arc};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("invalid input: {}", join_errors(.0))]
    Invalid(Vec<FieldError>),

    #[error("{0} not found")]
    NotFound(Missing),

    #[error("no free id left for {0}")]
    IdsExhausted(&'static str),

    #[error("failed to read image `{0}`")]
    Upload(PathBuf, #[source] std::io::Error),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What an edit referred to that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Material(u32),
    Product { material: u32, product: u32 },
    /// Position in a list field, e.g. `address` line 3
    Index { list: &'static str, index: usize },
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material(id) => write!(f, "material #{id}"),
            Self::Product { material, product } => {
                write!(f, "product #{product} of material #{material}")
            }
            Self::Index { list, index } => write!(f, "{list}[{index}]"),
        }
    }
}

/// A field selector string that names no field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{value}`, expected one of: {expected}")]
pub struct UnknownField {
    pub value: String,
    pub expected: String,
}

impl UnknownField {
    fn new<'a>(value: &str, expected: impl Iterator<Item = &'a str>) -> Self {
        Self {
            value: value.to_owned(),
            expected: expected.collect::<Vec<_>>().join(", "),
        }
    }
}

/// Mutable slot at `index`, or a `NotFound` naming the list.
fn slot<'a, T>(items: &'a mut [T], list: &'static str, index: usize) -> Result<&'a mut T, EditorError> {
    items
        .get_mut(index)
        .ok_or(EditorError::NotFound(Missing::Index { list, index }))
}

/// Remove the element at `index`, or a `NotFound` naming the list.
fn take<T>(items: &mut Vec<T>, list: &'static str, index: usize) -> Result<T, EditorError> {
    if index < items.len() {
        Ok(items.remove(index))
    } else {
        Err(EditorError::NotFound(Missing::Index { list, index }))
    }
}

// ============================================================================
// Save policy
// ============================================================================

/// When section edits reach the store and the bus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavePolicy {
    /// Edits stay in the working copy until [`SectionEditor::save`].
    #[default]
    Manual,
    /// Every edit is committed as soon as it is applied.
    Immediate,
}

// ============================================================================
// SectionEditor
// ============================================================================

/// Working copy of a singleton content record.
///
/// Per-record setters live in the `about`, `contact`, `seo` and `footer`
/// modules. Under [`SavePolicy::Immediate`] each setter commits; failed
/// setters never do.
pub struct SectionEditor<C: Content + PartialEq> {
    store: Arc<ContentStore>,
    bus: SyncBus,
    policy: SavePolicy,
    /// Last value read from or written to the store
    saved: C,
    draft: C,
}

impl<C: Content + PartialEq> SectionEditor<C> {
    /// Load the record, seeding it on first use.
    pub fn open(store: Arc<ContentStore>, bus: SyncBus, policy: SavePolicy) -> Self {
        let saved = store.load_or_seed::<C>();
        Self {
            store,
            bus,
            policy,
            draft: saved.clone(),
            saved,
        }
    }

    /// The working copy, including unsaved edits.
    pub const fn current(&self) -> &C {
        &self.draft
    }

    pub const fn policy(&self) -> SavePolicy {
        self.policy
    }

    /// Whether the working copy differs from the stored record.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// Persist the working copy and announce it.
    ///
    /// Returns the number of live views that received the update.
    pub fn save(&mut self) -> usize {
        self.store.put(&self.draft);
        self.saved = self.draft.clone();
        self.bus.publish(&self.draft)
    }

    /// Drop unsaved edits and reload the stored record.
    pub fn revert(&mut self) {
        self.saved = self.store.load_or_seed::<C>();
        self.draft = self.saved.clone();
    }

    /// Apply `change` to the working copy, committing under `Immediate`.
    fn edit<R>(
        &mut self,
        change: impl FnOnce(&mut C) -> Result<R, EditorError>,
    ) -> Result<R, EditorError> {
        let out = change(&mut self.draft)?;
        if self.policy == SavePolicy::Immediate {
            self.save();
        }
        Ok(out)
    }
}

impl<C: Content + PartialEq + fmt::Debug> fmt::Debug for SectionEditor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionEditor")
            .field("policy", &self.policy)
            .field("dirty", &self.is_dirty())
            .field("draft", &self.draft)
            .finish()
    }
}
