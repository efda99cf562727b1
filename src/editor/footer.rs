use super::{EditorError, SectionEditor};
use crate::content::FooterContent;

pub type FooterEditor = SectionEditor<FooterContent>;

field_enum! {
    FooterField {
        CompanyName => "company-name",
        Description => "description",
        Copyright => "copyright",
    }
}

field_enum! {
    SocialField {
        Facebook => "facebook",
        Instagram => "instagram",
        Linkedin => "linkedin",
    }
}

impl FooterEditor {
    pub fn update_field(&mut self, field: FooterField, value: impl Into<String>) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|footer| {
            let target = match field {
                FooterField::CompanyName => &mut footer.company_name,
                FooterField::Description => &mut footer.description,
                FooterField::Copyright => &mut footer.copyright,
            };
            *target = value;
            Ok(())
        })
    }

    /// Set a social profile URL. A blank value removes the link.
    pub fn set_social(&mut self, field: SocialField, url: impl Into<String>) -> Result<(), EditorError> {
        let url = url.into();
        let url = (!url.trim().is_empty()).then(|| url.trim().to_owned());
        self.edit(|footer| {
            let links = &mut footer.social_links;
            let target = match field {
                SocialField::Facebook => &mut links.facebook,
                SocialField::Instagram => &mut links.instagram,
                SocialField::Linkedin => &mut links.linkedin,
            };
            *target = url;
            Ok(())
        })
    }
}
