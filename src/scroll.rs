/// Page sections reachable from the navbar and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Cv,
    Contact,
}

impl Section {
    /// Navbar entries, in display order.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Cv,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Cv => "cv",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Cv => "CV",
            Section::Contact => "Contact",
        }
    }
}

/// Something that can look up elements by id and scroll them into view.
pub trait SectionHost {
    type Element;

    fn find_section(&self, id: &str) -> Option<Self::Element>;

    /// Smoothly scrolls `el` so its top edge meets the top of the viewport.
    fn scroll_to_top(&self, el: &Self::Element);
}

/// Scrolls to the element with `id`. Returns false, doing nothing, if it doesn't exist.
pub fn scroll_to_section<H: SectionHost>(host: &H, id: &str) -> bool {
    match host.find_section(id) {
        Some(el) => {
            host.scroll_to_top(&el);
            true
        }
        None => {
            log::debug!("no section with id {:?}, not scrolling", id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl SectionHost for FakePage {
        type Element = String;

        fn find_section(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|i| **i == id).map(|i| i.to_string())
        }

        fn scroll_to_top(&self, el: &String) {
            self.scrolled.borrow_mut().push(el.clone());
        }
    }

    fn page() -> FakePage {
        FakePage {
            ids: vec!["hero", "about", "projects", "cv", "contact"],
            scrolled: RefCell::new(vec![]),
        }
    }

    #[test]
    fn test_scrolls_to_existing_section() {
        let page = page();
        assert!(scroll_to_section(&page, Section::Contact.id()));
        assert!(scroll_to_section(&page, "hero"));
        assert_eq!(*page.scrolled.borrow(), vec!["contact", "hero"]);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let page = page();
        assert!(!scroll_to_section(&page, "blog"));
        assert!(!scroll_to_section(&page, ""));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_nav_sections_have_distinct_ids() {
        let mut ids = Section::NAV.iter().map(|s| s.id()).collect::<Vec<_>>();
        ids.push(Section::Hero.id());
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
