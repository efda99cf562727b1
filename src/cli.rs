//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::editor::{
    AboutField, AddressField, ContactField, FeatureField, FooterField, SeoField, SocialField,
    StructuredField,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// LumiXpert content store, editors and sitemap tooling
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file name (default: lumi.toml)
    #[arg(short = 'C', long, global = true, default_value = "lumi.toml")]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Content Store directory (relative to project root)
    #[arg(short, long, global = true)]
    pub storage: Option<PathBuf>,

    /// Admin password for content-changing commands
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render index.html and regenerate sitemap.xml and robots.txt
    Build {
        /// Minify the html content
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// Regenerate sitemap.xml and robots.txt from the stored gallery
    Sitemap,

    /// Notify Google and Bing about the sitemap
    Ping {
        /// Sitemap URL (default: <site.url>/sitemap.xml)
        #[arg(long)]
        url: Option<String>,
    },

    /// Manage gallery materials
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// Manage the products of a material
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Edit the "about" section
    About {
        #[command(subcommand)]
        action: AboutAction,
    },

    /// Edit the contact section
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Edit SEO meta tags and structured data
    Seo {
        #[command(subcommand)]
        action: SeoAction,
    },

    /// Edit the footer
    Footer {
        #[command(subcommand)]
        action: FooterAction,
    },

    /// Inspect or change the stored cookie consent
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },

    /// Inspect or change tracking identifiers
    Tracking {
        #[command(subcommand)]
        action: TrackingAction,
    },
}

// ============================================================================
// Gallery
// ============================================================================

/// Image source: a URL/data URI as-is, or a local file to embed.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ImageArgs {
    /// Image URL or data URI
    #[arg(long, conflicts_with = "upload")]
    pub image: Option<String>,

    /// Local image file, embedded as a base64 data URI
    #[arg(long)]
    pub upload: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct MaterialArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub image: ImageArgs,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProductArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub image: ImageArgs,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GalleryAction {
    /// List materials and their products
    List,
    /// Add a material
    Add(MaterialArgs),
    /// Change a material; omitted fields keep their value
    Update {
        id: u32,
        #[command(flatten)]
        fields: MaterialArgs,
    },
    /// Delete a material and all of its products
    Delete { id: u32 },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProductAction {
    /// Add a product to a material
    Add {
        material: u32,
        #[command(flatten)]
        fields: ProductArgs,
    },
    /// Change a product; omitted fields keep their value
    Update {
        material: u32,
        product: u32,
        #[command(flatten)]
        fields: ProductArgs,
    },
    /// Delete a product
    Delete { material: u32, product: u32 },
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Subcommand, Debug, Clone)]
pub enum AboutAction {
    Show,
    /// Set a top-level field (title, description)
    Set { field: AboutField, value: String },
    /// Set a field of the feature at INDEX
    Feature {
        index: usize,
        field: FeatureField,
        value: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ContactAction {
    Show,
    /// Set a top-level field (title, description, email, phone)
    Set { field: ContactField, value: String },
    /// Replace the address lines
    Address {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Change the opening-hours row at INDEX
    Hours {
        index: usize,
        #[arg(long)]
        day: Option<String>,
        #[arg(long)]
        hours: Option<String>,
    },
    /// Append an opening-hours row
    AddHours { day: String, hours: String },
    /// Remove the opening-hours row at INDEX
    RemoveHours { index: usize },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SeoAction {
    Show,
    /// Set a meta field (title, description, keywords, og-image, canonical-url)
    Set { field: SeoField, value: String },
    /// Set a structured-data field (business-name, business-type, telephone, email)
    Business { field: StructuredField, value: String },
    /// Set a business address field (street, city, postal-code, country)
    Address { field: AddressField, value: String },
    /// Replace the opening-hours entry at INDEX, e.g. "Mo-Fr 09:00-18:00"
    Hours { index: usize, spec: String },
    /// Append an opening-hours entry
    AddHours { spec: String },
    /// Remove the opening-hours entry at INDEX
    RemoveHours { index: usize },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FooterAction {
    Show,
    /// Set a field (company-name, description, copyright)
    Set { field: FooterField, value: String },
    /// Set a social link; an empty URL removes it
    Social { field: SocialField, url: String },
}

// ============================================================================
// Consent & tracking
// ============================================================================

#[derive(Subcommand, Debug, Clone)]
pub enum ConsentAction {
    Show,
    /// Consent to analytics, marketing and functionality
    AcceptAll,
    /// Consent to functionality only
    Necessary,
    /// Forget all stored consent
    Revoke,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingTarget {
    /// Google Analytics measurement id
    Ga,
    /// Meta pixel id
    MetaPixel,
    /// Meta test event code
    MetaTestEvent,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TrackingAction {
    Show,
    /// Set an identifier; an empty value removes it
    Set { target: TrackingTarget, value: String },
}

// ============================================================================
// Queries
// ============================================================================

impl Commands {
    /// `--minify` override, only carried by `build`.
    pub const fn minify(&self) -> Option<bool> {
        match self {
            Self::Build { minify } => *minify,
            _ => None,
        }
    }

    /// Whether the command changes site content and needs the admin password.
    pub const fn is_admin(&self) -> bool {
        match self {
            Self::Gallery { action } => !matches!(action, GalleryAction::List),
            Self::Product { .. } => true,
            Self::About { action } => !matches!(action, AboutAction::Show),
            Self::Contact { action } => !matches!(action, ContactAction::Show),
            Self::Seo { action } => !matches!(action, SeoAction::Show),
            Self::Footer { action } => !matches!(action, FooterAction::Show),
            Self::Tracking { action } => !matches!(action, TrackingAction::Show),
            Self::Build { .. } | Self::Sitemap | Self::Ping { .. } | Self::Consent { .. } => {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lumi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_build_minify_flag() {
        assert_eq!(parse(&["build"]).command.minify(), None);
        assert_eq!(parse(&["build", "--minify"]).command.minify(), Some(true));
        assert_eq!(parse(&["build", "--minify", "false"]).command.minify(), Some(false));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["sitemap", "--root", "site", "--output", "dist"]);
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
        assert_eq!(cli.config, PathBuf::from("lumi.toml"));
    }

    #[test]
    fn test_field_selectors_parse() {
        let cli = parse(&["seo", "address", "postal-code", "10115"]);
        match cli.command {
            Commands::Seo {
                action: SeoAction::Address { field, value },
            } => {
                assert_eq!(field, AddressField::PostalCode);
                assert_eq!(value, "10115");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Cli::try_parse_from(["lumi", "about", "set", "subtitle", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_image_and_upload_conflict() {
        let result = Cli::try_parse_from([
            "lumi", "gallery", "add", "--name", "Holz", "--image", "a.jpg", "--upload", "b.jpg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_admin_commands() {
        assert!(parse(&["gallery", "delete", "1"]).command.is_admin());
        assert!(parse(&["product", "delete", "1", "2"]).command.is_admin());
        assert!(parse(&["tracking", "set", "ga", "G-1"]).command.is_admin());
        assert!(!parse(&["gallery", "list"]).command.is_admin());
        assert!(!parse(&["about", "show"]).command.is_admin());
        assert!(!parse(&["consent", "revoke"]).command.is_admin());
        assert!(!parse(&["build"]).command.is_admin());
    }
}
