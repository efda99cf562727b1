//! Content-editing commands.
//!
//! One CLI invocation is one editing session: open the editor, apply the
//! change, save. Section editors follow the configured [`SavePolicy`]; a
//! session still saves whatever is left dirty before it ends.

use crate::{
    bus::SyncBus,
    cli::{
        AboutAction, ConsentAction, ContactAction, FooterAction, GalleryAction, ImageArgs,
        MaterialArgs, ProductAction, ProductArgs, SeoAction, TrackingAction, TrackingTarget,
    },
    config::SiteConfig,
    consent::{self, ConsentChoice, ConsentKind, TrackingId},
    content::Content,
    editor::{
        AboutEditor, ContactEditor, EditorError, FooterEditor, GalleryEditor, MaterialDraft,
        Missing, ProductDraft, SavePolicy, SectionEditor, SeoEditor, upload_image,
    },
    logger::report_ok,
    store::ContentStore,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Store, bus and save policy shared by the editors of one session.
pub struct Workspace {
    pub store: Arc<ContentStore>,
    pub bus: SyncBus,
    pub policy: SavePolicy,
}

impl Workspace {
    pub fn open(config: &SiteConfig) -> Self {
        Self::new(ContentStore::open(&config.build.storage), config.admin.save)
    }

    pub fn new(store: ContentStore, policy: SavePolicy) -> Self {
        Self {
            store: Arc::new(store),
            bus: SyncBus::new(),
            policy,
        }
    }

    fn section<C: Content + PartialEq>(&self) -> SectionEditor<C> {
        SectionEditor::open(Arc::clone(&self.store), self.bus.clone(), self.policy)
    }

    fn gallery(&self) -> GalleryEditor {
        GalleryEditor::open(Arc::clone(&self.store), self.bus.clone())
    }
}

/// Save what the edit left unsaved and report it.
fn finish<C: Content + PartialEq>(mut editor: SectionEditor<C>, what: &str) {
    if editor.is_dirty() {
        editor.save();
    }
    report_ok(&format!("{what} saved"));
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize record")?;
    println!("{json}");
    Ok(())
}

// ============================================================================
// Gallery
// ============================================================================

/// Image from `--image` as given, or `--upload` read into a data URI.
pub async fn resolve_image(args: &ImageArgs) -> Result<Option<String>, EditorError> {
    match (&args.image, &args.upload) {
        (_, Some(path)) => upload_image(path).await.map(Some),
        (image, None) => Ok(image.clone()),
    }
}

async fn material_draft(mut draft: MaterialDraft, args: &MaterialArgs) -> Result<MaterialDraft, EditorError> {
    if let Some(name) = &args.name {
        draft.name.clone_from(name);
    }
    if let Some(image) = resolve_image(&args.image).await? {
        draft.image = image;
    }
    if let Some(description) = &args.description {
        draft.description.clone_from(description);
    }
    Ok(draft)
}

async fn product_draft(mut draft: ProductDraft, args: &ProductArgs) -> Result<ProductDraft, EditorError> {
    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(image) = resolve_image(&args.image).await? {
        draft.image = image;
    }
    if let Some(description) = &args.description {
        draft.description.clone_from(description);
    }
    Ok(draft)
}

pub async fn gallery(ws: &Workspace, action: &GalleryAction) -> Result<()> {
    let mut editor = ws.gallery();
    match action {
        GalleryAction::List => {
            for material in editor.items().iter() {
                println!(
                    "#{} {} ({} Produkte)",
                    material.id,
                    material.name,
                    material.products.len()
                );
                for product in &material.products {
                    println!("    #{} {}", product.id, product.title);
                }
            }
        }
        GalleryAction::Add(args) => {
            let draft = material_draft(MaterialDraft::default(), args).await?;
            let id = editor.add_material(draft)?;
            report_ok(&format!("material #{id} added"));
        }
        GalleryAction::Update { id, fields } => {
            let current = editor
                .items()
                .get(*id)
                .map(MaterialDraft::from)
                .ok_or(EditorError::NotFound(Missing::Material(*id)))?;
            let draft = material_draft(current, fields).await?;
            editor.update_material(*id, draft)?;
            report_ok(&format!("material #{id} updated"));
        }
        GalleryAction::Delete { id } => {
            let removed = editor.delete_material(*id)?;
            report_ok(&format!(
                "material #{id} `{}` deleted with {} products",
                removed.name,
                removed.products.len()
            ));
        }
    }
    Ok(())
}

pub async fn product(ws: &Workspace, action: &ProductAction) -> Result<()> {
    let mut editor = ws.gallery();
    match action {
        ProductAction::Add { material, fields } => {
            let draft = product_draft(ProductDraft::default(), fields).await?;
            let id = editor.add_product(*material, draft)?;
            report_ok(&format!("product #{id} added to material #{material}"));
        }
        ProductAction::Update {
            material,
            product,
            fields,
        } => {
            let current = editor
                .items()
                .get(*material)
                .and_then(|m| m.products.iter().find(|p| p.id == *product))
                .map(ProductDraft::from)
                .ok_or(EditorError::NotFound(Missing::Product {
                    material: *material,
                    product: *product,
                }))?;
            let draft = product_draft(current, fields).await?;
            editor.update_product(*material, *product, draft)?;
            report_ok(&format!("product #{product} updated"));
        }
        ProductAction::Delete { material, product } => {
            let removed = editor.delete_product(*material, *product)?;
            report_ok(&format!("product #{product} `{}` deleted", removed.title));
        }
    }
    Ok(())
}

// ============================================================================
// Sections
// ============================================================================

pub fn about(ws: &Workspace, action: &AboutAction) -> Result<()> {
    let mut editor: AboutEditor = ws.section();
    match action {
        AboutAction::Show => return print_json(editor.current()),
        AboutAction::Set { field, value } => editor.update_field(*field, value.as_str())?,
        AboutAction::Feature {
            index,
            field,
            value,
        } => editor.update_feature(*index, *field, value.as_str())?,
    }
    finish(editor, "about");
    Ok(())
}

pub fn contact(ws: &Workspace, action: &ContactAction) -> Result<()> {
    let mut editor: ContactEditor = ws.section();
    match action {
        ContactAction::Show => return print_json(editor.current()),
        ContactAction::Set { field, value } => editor.update_field(*field, value.as_str())?,
        ContactAction::Address { lines } => editor.set_address(lines.clone())?,
        ContactAction::Hours { index, day, hours } => {
            if let Some(day) = day {
                editor.rename_day(*index, day.as_str())?;
            }
            if let Some(hours) = hours {
                editor.set_hours(*index, hours.as_str())?;
            }
        }
        ContactAction::AddHours { day, hours } => {
            editor.add_opening_hours(day.as_str(), hours.as_str())?;
        }
        ContactAction::RemoveHours { index } => {
            editor.remove_opening_hours(*index)?;
        }
    }
    finish(editor, "contact");
    Ok(())
}

pub fn seo(ws: &Workspace, action: &SeoAction) -> Result<()> {
    let mut editor: SeoEditor = ws.section();
    match action {
        SeoAction::Show => return print_json(editor.current()),
        SeoAction::Set { field, value } => editor.update_field(*field, value.as_str())?,
        SeoAction::Business { field, value } => {
            editor.update_structured_data(*field, value.as_str())?;
        }
        SeoAction::Address { field, value } => editor.update_address(*field, value.as_str())?,
        SeoAction::Hours { index, spec } => editor.set_opening_hours(*index, spec.as_str())?,
        SeoAction::AddHours { spec } => {
            editor.add_opening_hours(spec.as_str())?;
        }
        SeoAction::RemoveHours { index } => {
            editor.remove_opening_hours(*index)?;
        }
    }
    finish(editor, "seo");
    Ok(())
}

pub fn footer(ws: &Workspace, action: &FooterAction) -> Result<()> {
    let mut editor: FooterEditor = ws.section();
    match action {
        FooterAction::Show => return print_json(editor.current()),
        FooterAction::Set { field, value } => editor.update_field(*field, value.as_str())?,
        FooterAction::Social { field, url } => editor.set_social(*field, url.as_str())?,
    }
    finish(editor, "footer");
    Ok(())
}

// ============================================================================
// Consent & tracking
// ============================================================================

pub fn consent(store: &ContentStore, action: &ConsentAction, now: DateTime<Utc>) -> Result<()> {
    match action {
        ConsentAction::Show => {
            for kind in ConsentKind::ALL {
                match consent::stored_consent(store, kind, now) {
                    Some(record) => println!(
                        "{kind}: analytics={} marketing={} functionality={}",
                        record.choice.analytics, record.choice.marketing, record.choice.functionality
                    ),
                    None => println!("{kind}: not given"),
                }
            }
        }
        ConsentAction::AcceptAll => {
            consent::record_consent(store, ConsentChoice::ACCEPT_ALL, now);
            report_ok("all cookies accepted");
        }
        ConsentAction::Necessary => {
            consent::record_consent(store, ConsentChoice::NECESSARY, now);
            report_ok("necessary cookies only");
        }
        ConsentAction::Revoke => {
            consent::revoke_all(store);
            report_ok("consent revoked");
        }
    }
    Ok(())
}

impl From<TrackingTarget> for TrackingId {
    fn from(target: TrackingTarget) -> Self {
        match target {
            TrackingTarget::Ga => Self::GaMeasurement,
            TrackingTarget::MetaPixel => Self::MetaPixel,
            TrackingTarget::MetaTestEvent => Self::MetaTestEvent,
        }
    }
}

pub fn tracking(store: &ContentStore, action: &TrackingAction) -> Result<()> {
    match action {
        TrackingAction::Show => {
            for id in TrackingId::ALL {
                let value = consent::tracking_id(store, id);
                println!("{}: {}", id.key(), value.as_deref().unwrap_or("-"));
            }
        }
        TrackingAction::Set { target, value } => {
            let id = TrackingId::from(*target);
            consent::set_tracking_id(store, id, value);
            report_ok(&format!("{} saved", id.key()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{Cli, Commands},
        content::{AboutContent, ContactContent, FooterContent, Gallery},
        editor::{AboutField, ContactField},
    };
    use clap::Parser;

    fn workspace() -> Workspace {
        Workspace::new(ContentStore::in_memory(), SavePolicy::Manual)
    }

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("lumi").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_section_edit_is_saved() {
        let ws = workspace();
        about(
            &ws,
            &AboutAction::Set {
                field: AboutField::Title,
                value: "Neu".into(),
            },
        )
        .unwrap();
        assert_eq!(ws.store.load::<AboutContent>().unwrap().title, "Neu");
    }

    #[test]
    fn test_failed_section_edit_leaves_store_untouched() {
        let ws = workspace();
        let result = contact(&ws, &ContactAction::RemoveHours { index: 99 });
        assert!(result.is_err());
        assert_eq!(ws.store.load::<ContactContent>().unwrap(), ContactContent::seed());

        contact(
            &ws,
            &ContactAction::Set {
                field: ContactField::Email,
                value: "info@lumixpert.de".into(),
            },
        )
        .unwrap();
        assert_eq!(ws.store.load::<ContactContent>().unwrap().email, "info@lumixpert.de");
    }

    #[test]
    fn test_contact_hours_rename_and_set() {
        let ws = workspace();
        let Commands::Contact { action } =
            command(&["contact", "hours", "0", "--day", "Mo-Do", "--hours", "8-16 Uhr"])
        else {
            panic!("expected contact command");
        };
        contact(&ws, &action).unwrap();

        let stored = ws.store.load::<ContactContent>().unwrap();
        assert_eq!(stored.opening_hours[0].day, "Mo-Do");
        assert_eq!(stored.opening_hours[0].hours, "8-16 Uhr");
        assert_eq!(stored.opening_hours.len(), ContactContent::seed().opening_hours.len());
    }

    #[test]
    fn test_footer_social_removal() {
        let ws = workspace();
        let Commands::Footer { action } = command(&["footer", "social", "instagram", ""]) else {
            panic!("expected footer command");
        };
        footer(&ws, &action).unwrap();
        assert_eq!(ws.store.load::<FooterContent>().unwrap().social_links.instagram, None);
    }

    #[tokio::test]
    async fn test_gallery_add_update_delete() {
        let ws = workspace();
        let Commands::Gallery { action } = command(&[
            "gallery", "add", "--name", "Stein", "--image", "/stein.webp", "--description", "Granit",
        ]) else {
            panic!("expected gallery command");
        };
        gallery(&ws, &action).await.unwrap();

        let stored = ws.store.load::<Gallery>().unwrap();
        let added = stored.iter().find(|m| m.name == "Stein").unwrap();
        let id = added.id.to_string();

        let Commands::Gallery { action } =
            command(&["gallery", "update", id.as_str(), "--description", "Schiefer"])
        else {
            panic!("expected gallery command");
        };
        gallery(&ws, &action).await.unwrap();
        let stored = ws.store.load::<Gallery>().unwrap();
        let updated = stored.iter().find(|m| m.name == "Stein").unwrap();
        assert_eq!(updated.description, "Schiefer");
        assert_eq!(updated.image, "/stein.webp");

        let Commands::Gallery { action } = command(&["gallery", "delete", id.as_str()]) else {
            panic!("expected gallery command");
        };
        gallery(&ws, &action).await.unwrap();
        assert!(ws.store.load::<Gallery>().unwrap().iter().all(|m| m.name != "Stein"));
    }

    #[tokio::test]
    async fn test_gallery_add_requires_fields() {
        let ws = workspace();
        let Commands::Gallery { action } = command(&["gallery", "add", "--name", "Stein"]) else {
            panic!("expected gallery command");
        };
        let err = gallery(&ws, &action).await.unwrap_err();
        assert!(err.to_string().contains("image must not be empty"));
    }

    #[tokio::test]
    async fn test_product_upload_embeds_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schild.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let ws = workspace();
        let material = Gallery::seed()[0].id.to_string();
        let upload = path.to_string_lossy().into_owned();
        let Commands::Product { action } = command(&[
            "product", "add", material.as_str(), "--title", "Schild", "--upload", upload.as_str(), "--description", "Messing",
        ]) else {
            panic!("expected product command");
        };
        product(&ws, &action).await.unwrap();

        let stored = ws.store.load::<Gallery>().unwrap();
        let schild = stored[0].products.iter().find(|p| p.title == "Schild").unwrap();
        assert!(schild.image.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_tracking_set_and_clear() {
        let store = ContentStore::in_memory();
        tracking(
            &store,
            &TrackingAction::Set {
                target: TrackingTarget::Ga,
                value: " G-ABC123 ".into(),
            },
        )
        .unwrap();
        assert_eq!(
            consent::tracking_id(&store, TrackingId::GaMeasurement).as_deref(),
            Some("G-ABC123")
        );

        tracking(
            &store,
            &TrackingAction::Set {
                target: TrackingTarget::Ga,
                value: String::new(),
            },
        )
        .unwrap();
        assert_eq!(consent::tracking_id(&store, TrackingId::GaMeasurement), None);
    }

    #[test]
    fn test_consent_commands() {
        let store = ContentStore::in_memory();
        let now = Utc::now();
        consent(&store, &ConsentAction::Necessary, now).unwrap();
        let record = consent::stored_consent(&store, ConsentKind::Analytics, now).unwrap();
        assert!(!record.choice.analytics);

        consent(&store, &ConsentAction::Revoke, now).unwrap();
        assert!(consent::stored_consent(&store, ConsentKind::MetaPixel, now).is_none());
    }
}
