use crate::content::{ProjectTarget, SiteContent};
use crate::gallery;

/// Which overlay is on screen. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Cv,
    Lightbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveGallery {
    project: usize,
    image: usize,
}

/// What a click on a project's action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    OpenedGallery,
    /// The caller should open this URL in a new browsing context.
    OpenLink(String),
}

/// Per-page UI state, mutated only by the page's own event handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    navbar_solid: bool,
    cv_open: bool,
    active_gallery: Option<ActiveGallery>,
    last_image: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navbar_solid(&self) -> bool {
        self.navbar_solid
    }

    pub fn set_scroll_offset(&mut self, scroll_y: f64) {
        self.navbar_solid = crate::observers::navbar_solid(scroll_y);
    }

    pub fn modal(&self) -> Modal {
        if self.active_gallery.is_some() {
            Modal::Lightbox
        } else if self.cv_open {
            Modal::Cv
        } else {
            Modal::Closed
        }
    }

    pub fn modal_open(&self) -> bool {
        self.modal() != Modal::Closed
    }

    pub fn active_gallery_project(&self) -> Option<usize> {
        self.active_gallery.map(|g| g.project)
    }

    /// Current lightbox image. Keeps its last value after the lightbox closes.
    pub fn active_image_index(&self) -> usize {
        self.active_gallery.map_or(self.last_image, |g| g.image)
    }

    /// Runs the "view more" action of project `index`. `None` if there is no such project.
    pub fn activate(&mut self, content: &SiteContent, index: usize) -> Option<Activation> {
        match &content.project(index)?.target {
            ProjectTarget::Gallery(_) => {
                self.open_gallery(index);
                Some(Activation::OpenedGallery)
            }
            ProjectTarget::Link(url) => Some(Activation::OpenLink(url.clone())),
        }
    }

    // only reachable through `activate`, so `project` always has a gallery
    fn open_gallery(&mut self, project: usize) {
        log::debug!("opening gallery for project {}", project);
        self.cv_open = false;
        self.last_image = 0;
        self.active_gallery = Some(ActiveGallery { project, image: 0 });
    }

    pub fn open_cv(&mut self) {
        log::debug!("opening cv");
        self.active_gallery = None;
        self.cv_open = true;
    }

    pub fn close_modal(&mut self) {
        self.active_gallery = None;
        self.cv_open = false;
    }

    pub fn next_image(&mut self, content: &SiteContent) {
        self.step_image(content, gallery::next);
    }

    pub fn prev_image(&mut self, content: &SiteContent) {
        self.step_image(content, gallery::prev);
    }

    fn step_image(
        &mut self,
        content: &SiteContent,
        step: fn(usize, std::num::NonZeroUsize) -> usize,
    ) {
        let Some(active) = self.active_gallery.as_mut() else {
            return;
        };
        let Some(ProjectTarget::Gallery(images)) = content.project(active.project).map(|p| &p.target)
        else {
            return;
        };
        active.image = step(active.image, images.len());
        self.last_image = active.image;
    }

    /// Image reference shown in the lightbox, if one is open.
    pub fn lightbox_image<'a>(&self, content: &'a SiteContent) -> Option<&'a str> {
        let active = self.active_gallery?;
        match &content.project(active.project)?.target {
            ProjectTarget::Gallery(images) => Some(images.image(active.image)),
            ProjectTarget::Link(_) => None,
        }
    }
}
