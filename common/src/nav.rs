use tracing::trace;

// vertical extent of one page section, in document coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

// the section the reader is currently in
//
// each section's window starts early by the header height plus a lookahead margin, so a
// heading counts as reached just before it slides under the header.  later sections
// win when windows overlap
pub fn section_in_view(
    sections: &[SectionBounds],
    scroll_y: f64,
    header_height: f64,
    lookahead: f64,
) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - header_height - lookahead;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

// where to scroll so that a section lands just under the header
pub fn scroll_target(section_top: f64, header_height: f64, offset: f64) -> f64 {
    section_top - header_height - offset
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavSync {
    links: Vec<String>,
    active: Option<String>,
}

impl NavSync {
    pub fn new(links: Vec<String>) -> Self {
        let active = links.first().cloned();

        NavSync { links, active }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active() == Some(section)
    }

    pub fn reset(&mut self) {
        self.active = self.links.first().cloned();
    }

    // clicking a link marks it immediately, without waiting for the scroll to land
    pub fn activate(&mut self, section: &str) -> bool {
        if !self.links.iter().any(|link| link == section) {
            trace!("no nav link for {section}");
            return false;
        }

        self.active = Some(section.to_owned());
        true
    }

    // a section in view with no link of its own leaves nothing highlighted; nothing in
    // view at all falls back to the first link
    pub fn link_in_view(
        &self,
        sections: &[SectionBounds],
        scroll_y: f64,
        header_height: f64,
        lookahead: f64,
    ) -> Option<&str> {
        let link = match section_in_view(sections, scroll_y, header_height, lookahead) {
            Some(current) => self.links.iter().find(|link| *link == current),
            None => self.links.first(),
        };

        link.map(String::as_str)
    }

    pub fn on_scroll(
        &mut self,
        sections: &[SectionBounds],
        scroll_y: f64,
        header_height: f64,
        lookahead: f64,
    ) -> Option<&str> {
        self.active = self
            .link_in_view(sections, scroll_y, header_height, lookahead)
            .map(str::to_owned);

        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_owned(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionBounds> {
        vec![
            section("home", 0.0, 600.0),
            section("work", 600.0, 900.0),
            section("reviews", 1500.0, 400.0),
            section("footer", 1900.0, 200.0),
        ]
    }

    fn nav() -> NavSync {
        NavSync::new(
            ["home", "work", "reviews"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    #[test]
    fn picks_section_under_offset() {
        // work starts counting at 600 - 80 - 100 = 420
        assert_eq!(section_in_view(&page(), 419.0, 80.0, 100.0), Some("home"));
        assert_eq!(section_in_view(&page(), 420.0, 80.0, 100.0), Some("work"));
        assert_eq!(section_in_view(&page(), 1400.0, 80.0, 100.0), Some("reviews"));
    }

    #[test]
    fn nothing_in_view_falls_back_to_first_link() {
        let mut nav = nav();
        nav.activate("reviews");

        assert_eq!(nav.on_scroll(&page(), 9000.0, 80.0, 100.0), Some("home"));
        assert_eq!(nav.on_scroll(&[], 0.0, 80.0, 100.0), Some("home"));
    }

    #[test]
    fn scroll_marks_matching_link() {
        let mut nav = nav();

        assert_eq!(nav.on_scroll(&page(), 700.0, 80.0, 100.0), Some("work"));
        assert!(nav.is_active("work"));
        assert!(!nav.is_active("home"));
    }

    #[test]
    fn link_in_view_leaves_active_alone() {
        let nav = nav();

        assert_eq!(nav.link_in_view(&page(), 700.0, 80.0, 100.0), Some("work"));
        assert_eq!(nav.active(), Some("home"));
    }

    #[test]
    fn unlinked_section_clears_highlight() {
        let mut nav = nav();

        assert_eq!(nav.on_scroll(&page(), 1800.0, 80.0, 100.0), None);
    }

    #[test]
    fn activate_only_known_links() {
        let mut nav = nav();

        assert!(nav.activate("reviews"));
        assert!(!nav.activate("pricing"));
        assert_eq!(nav.active(), Some("reviews"));

        nav.reset();
        assert_eq!(nav.active(), Some("home"));
    }

    #[test]
    fn click_target_sits_under_header() {
        assert_eq!(scroll_target(600.0, 80.0, 20.0), 500.0);
    }
}
