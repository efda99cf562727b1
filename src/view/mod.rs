//! Live display components.
//!
//! A [`LiveView`] mirrors one content record. It reads the record when it is
//! mounted and then follows the bus, so edits show up without a reload.
//! [`Page`] mounts one view per record and renders `index.html`.

mod head;
mod render;

pub use head::{render_head, structured_data};
pub use render::{
    escape_html, render_about, render_contact, render_footer, render_gallery, render_hero,
};

use crate::{
    bus::{Subscription, SyncBus},
    content::{AboutContent, Content, ContactContent, FooterContent, Gallery, SeoContent},
    store::ContentStore,
};
use parking_lot::RwLock;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

// ============================================================================
// LiveView
// ============================================================================

struct ViewState<C> {
    record: RwLock<C>,
    /// Number of updates received since mount
    revision: AtomicU64,
}

/// A record kept current through the bus. Dropping the view unsubscribes.
pub struct LiveView<C: Content> {
    state: Arc<ViewState<C>>,
    _subscription: Subscription,
}

impl<C: Content> LiveView<C> {
    /// Load the record (seeding it if needed) and start following updates.
    pub fn mount(store: &ContentStore, bus: &SyncBus) -> Self {
        let state = Arc::new(ViewState {
            record: RwLock::new(store.load_or_seed::<C>()),
            revision: AtomicU64::new(0),
        });

        let handle = Arc::clone(&state);
        let subscription = bus.subscribe(move |record: &C| {
            *handle.record.write() = record.clone();
            handle.revision.fetch_add(1, Ordering::SeqCst);
        });

        Self {
            state,
            _subscription: subscription,
        }
    }

    pub fn current(&self) -> C {
        self.state.record.read().clone()
    }

    /// Borrow the record for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.state.record.read())
    }

    /// How many times the view re-rendered after mount.
    pub fn revision(&self) -> u64 {
        self.state.revision.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Page
// ============================================================================

/// The public page with one live view per section.
pub struct Page {
    pub gallery: LiveView<Gallery>,
    pub about: LiveView<AboutContent>,
    pub contact: LiveView<ContactContent>,
    pub seo: LiveView<SeoContent>,
    pub footer: LiveView<FooterContent>,
}

impl Page {
    pub fn mount(store: &ContentStore, bus: &SyncBus) -> Self {
        Self {
            gallery: LiveView::mount(store, bus),
            about: LiveView::mount(store, bus),
            contact: LiveView::mount(store, bus),
            seo: LiveView::mount(store, bus),
            footer: LiveView::mount(store, bus),
        }
    }

    /// Full `index.html` document.
    pub fn render(&self, lang: &str, site_name: &str) -> String {
        let head = self.seo.with(|seo| render_head(seo, site_name));
        let body = [
            render_hero(),
            self.about.with(render_about),
            self.gallery.with(render_gallery),
            self.contact.with(render_contact),
            self.footer.with(render_footer),
        ]
        .concat();

        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>{head}</head>\n<body><main>{body}</main></body>\n</html>\n",
            escape_html(lang)
        )
    }
}
