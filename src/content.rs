use dashmap::DashMap;
use rust_embed::Embed;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

use crate::gallery::Gallery;

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<Variant, Arc<SiteContent>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

/// One of the three versions of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Gallery projects get a "Showcase" lightbox, the rest a "View on Drive" link.
    Dark,
    /// Gallery projects get "View Gallery", the rest a "Demo" link.
    Light,
    /// No lightbox; clicking a project image opens its link.
    Classic,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Dark, Variant::Light, Variant::Classic];

    pub fn content_file(self) -> &'static str {
        match self {
            Variant::Dark => "dark.json",
            Variant::Light => "light.json",
            Variant::Classic => "classic.json",
        }
    }

    /// Label of the card button, or `None` when the image itself is the link.
    pub fn button_label(self, target: &ProjectTarget) -> Option<&'static str> {
        match (self, target) {
            (Variant::Dark, ProjectTarget::Gallery(_)) => Some("Showcase"),
            (Variant::Dark, ProjectTarget::Link(_)) => Some("View on Drive"),
            (Variant::Light, ProjectTarget::Gallery(_)) => Some("View Gallery"),
            (Variant::Light, ProjectTarget::Link(_)) => Some("Demo"),
            (Variant::Classic, _) => None,
        }
    }

    pub fn image_is_link(self) -> bool {
        matches!(self, Variant::Classic)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file {0} not found")]
    NotFound(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("project {0:?} has both a gallery and a link")]
    AmbiguousTarget(String),
    #[error("project {0:?} has neither a gallery nor a link")]
    MissingTarget(String),
    #[error("project {0:?} has an empty link")]
    EmptyLink(String),
    #[error("project {0:?} has a gallery, but {1:?} pages only open links")]
    GalleryNotSupported(String, Variant),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
    pub photo: String,
    pub portfolio_link: String,
    pub cv_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tool {
    pub name: String,
    pub icon: String,
}

/// Where a project's "view more" action leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectTarget {
    Gallery(Gallery),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub target: ProjectTarget,
}

// Shape of a project in the content files
#[derive(Deserialize)]
struct ProjectRecord {
    title: String,
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    image: String,
    #[serde(default)]
    gallery: Vec<String>,
    link: Option<String>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ContentError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let target = match (Gallery::new(record.gallery), record.link) {
            (Some(_), Some(_)) => return Err(ContentError::AmbiguousTarget(record.title)),
            (Some(gallery), None) => ProjectTarget::Gallery(gallery),
            (None, Some(link)) if link.trim().is_empty() => {
                return Err(ContentError::EmptyLink(record.title))
            }
            (None, Some(link)) => ProjectTarget::Link(link),
            (None, None) => return Err(ContentError::MissingTarget(record.title)),
        };
        Ok(Self {
            title: record.title,
            description: record.description,
            tags: record.tags,
            image: record.image,
            target,
        })
    }
}

// Shape of a whole content file, before project targets are checked
#[derive(Deserialize)]
struct SiteRecord {
    profile: Profile,
    #[serde(default)]
    tools: Vec<Tool>,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Everything a page renders that isn't view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub tools: Vec<Tool>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    pub fn parse(file: &str, data: &[u8]) -> Result<Self, ContentError> {
        let record: SiteRecord =
            serde_json::from_slice(data).map_err(|e| ContentError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;
        let projects = record
            .projects
            .into_iter()
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            profile: record.profile,
            tools: record.tools,
            projects,
        })
    }

    /// Checks the invariants that depend on which page shows the content.
    pub fn validate(&self, variant: Variant) -> Result<(), ContentError> {
        if !variant.image_is_link() {
            return Ok(());
        }
        match self
            .projects
            .iter()
            .find(|p| matches!(p.target, ProjectTarget::Gallery(_)))
        {
            Some(p) => Err(ContentError::GalleryNotSupported(p.title.clone(), variant)),
            None => Ok(()),
        }
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

/// Loads the embedded content for `variant`, parsing each file at most once.
pub fn load(variant: Variant) -> Result<Arc<SiteContent>, ContentError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    if let Some(content) = cache.get(&variant) {
        return Ok(content.clone());
    }
    let content = cache
        .entry(variant)
        .or_try_insert_with(|| -> Result<_, ContentError> {
            let file = variant.content_file();
            let asset =
                ContentAssets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
            let content = SiteContent::parse(file, &asset.data)?;
            content.validate(variant)?;
            Ok(Arc::new(content))
        })?
        .clone();
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#""profile": {
        "name": "Test Person",
        "role": "Tester",
        "description": "Writes tests.",
        "email": "test@example.com",
        "phone": "+1 555 0100",
        "instagram": "https://instagram.com/test",
        "photo": "/Profile.jpg",
        "portfolio_link": "https://example.com/portfolio",
        "cv_image": "/CV.png"
    }"#;

    fn parse_projects(projects: &str) -> Result<SiteContent, ContentError> {
        let json = format!("{{ {PROFILE}, \"projects\": [{projects}] }}");
        SiteContent::parse("test.json", json.as_bytes())
    }

    #[test]
    fn test_shipped_content_loads() {
        for variant in Variant::ALL {
            let content = load(variant).expect("shipped content should load");
            assert!(!content.profile.name.is_empty());
            assert!(!content.projects.is_empty());
        }
    }

    #[test]
    fn test_load_is_cached() {
        let first = load(Variant::Light).unwrap();
        let second = load(Variant::Light).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_dark_content_shape() {
        let content = load(Variant::Dark).unwrap();
        assert_eq!(content.projects.len(), 3);
        match &content.projects[0].target {
            ProjectTarget::Gallery(g) => assert_eq!(g.len().get(), 6),
            ProjectTarget::Link(_) => panic!("first project should have a gallery"),
        }
        assert!(matches!(content.projects[1].target, ProjectTarget::Link(_)));
        assert!(matches!(content.projects[2].target, ProjectTarget::Link(_)));
        assert_eq!(content.tools.len(), 7);
    }

    #[test]
    fn test_empty_gallery_with_link_is_link() {
        let content = parse_projects(
            r#"{"title": "Videos", "description": "d", "image": "/p.jpg",
                "gallery": [], "link": "https://example.com/videos"}"#,
        )
        .unwrap();
        assert_eq!(
            content.projects[0].target,
            ProjectTarget::Link("https://example.com/videos".to_string())
        );
        assert!(content.projects[0].tags.is_empty());
    }

    #[test]
    fn test_target_invariants() {
        let both = parse_projects(
            r#"{"title": "Both", "description": "d", "image": "/p.jpg",
                "gallery": ["/1.jpg"], "link": "https://example.com"}"#,
        );
        assert_eq!(both, Err(ContentError::AmbiguousTarget("Both".to_string())));

        let neither = parse_projects(
            r#"{"title": "Neither", "description": "d", "image": "/p.jpg"}"#,
        );
        assert_eq!(neither, Err(ContentError::MissingTarget("Neither".to_string())));

        let blank = parse_projects(
            r#"{"title": "Blank", "description": "d", "image": "/p.jpg", "link": "  "}"#,
        );
        assert_eq!(blank, Err(ContentError::EmptyLink("Blank".to_string())));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_projects(r#"{"title": "No image", "description": "d", "link": "x"}"#)
            .unwrap_err();
        assert!(matches!(&err, ContentError::Parse { file, .. } if file == "test.json"));
        assert!(err.to_string().contains("image"));

        let err = SiteContent::parse("broken.json", b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_classic_rejects_galleries() {
        let content = parse_projects(
            r#"{"title": "Stills", "description": "d", "image": "/p.jpg",
                "gallery": ["/1.jpg", "/2.jpg"]}"#,
        )
        .unwrap();
        assert!(content.validate(Variant::Dark).is_ok());
        assert!(content.validate(Variant::Light).is_ok());
        assert_eq!(
            content.validate(Variant::Classic),
            Err(ContentError::GalleryNotSupported(
                "Stills".to_string(),
                Variant::Classic
            ))
        );
    }

    #[test]
    fn test_button_labels_per_variant() {
        let gallery = ProjectTarget::Gallery(Gallery::new(vec!["/1.jpg".to_string()]).unwrap());
        let link = ProjectTarget::Link("https://example.com".to_string());

        assert_eq!(Variant::Dark.button_label(&gallery), Some("Showcase"));
        assert_eq!(Variant::Dark.button_label(&link), Some("View on Drive"));
        assert_eq!(Variant::Light.button_label(&gallery), Some("View Gallery"));
        assert_eq!(Variant::Light.button_label(&link), Some("Demo"));
        assert_eq!(Variant::Classic.button_label(&link), None);
        assert!(Variant::Classic.image_is_link());
    }
}
