use super::{EditorError, SectionEditor, slot};
use crate::content::AboutContent;

pub type AboutEditor = SectionEditor<AboutContent>;

field_enum! {
    /// Top-level text fields of the about section.
    AboutField {
        Title => "title",
        Description => "description",
    }
}

field_enum! {
    FeatureField {
        Title => "title",
        Description => "description",
    }
}

impl AboutEditor {
    pub fn update_field(&mut self, field: AboutField, value: impl Into<String>) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|about| {
            match field {
                AboutField::Title => about.title = value,
                AboutField::Description => about.description = value,
            }
            Ok(())
        })
    }

    /// Edit one feature card in place. The list itself has a fixed length.
    pub fn update_feature(
        &mut self,
        index: usize,
        field: FeatureField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|about| {
            let feature = slot(&mut about.features, "features", index)?;
            match field {
                FeatureField::Title => feature.title = value,
                FeatureField::Description => feature.description = value,
            }
            Ok(())
        })
    }
}
