#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub width: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { label: "HTML & CSS", width: "95%" },
    Skill { label: "JavaScript", width: "85%" },
    Skill { label: "React", width: "75%" },
    Skill { label: "Blender", width: "80%" },
    Skill { label: "Figma", width: "70%" },
];

pub const SKILLS_THRESHOLD: f64 = 0.5;
pub const SPY_ROOT_MARGIN: &str = "-30% 0px -70% 0px";
pub const HEADER_SCROLL_OFFSET: f64 = 50.0;

/// One-way switch: once the skills section has been seen, bars stay filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillReveal {
    revealed: bool,
}

impl SkillReveal {
    pub fn observe(&mut self, intersecting: bool) {
        if intersecting {
            self.revealed = true;
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn bar_style(&self, skill: &Skill) -> String {
        if self.revealed {
            format!("width: {};", skill.width)
        } else {
            "width: 0;".to_string()
        }
    }
}

/// Tracks which section sits near the middle of the viewport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    /// An intersecting section without an id leaves no link active.
    pub fn observe(&mut self, section_id: &str, intersecting: bool) {
        if !intersecting {
            return;
        }
        self.active = (!section_id.is_empty()).then(|| section_id.to_string());
    }

    pub fn is_active(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }

    pub fn link_class(&self, href: &str) -> &'static str {
        if self.is_active(href) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

pub fn header_background(scroll_y: f64, light_mode: bool) -> &'static str {
    let scrolled = scroll_y > HEADER_SCROLL_OFFSET;
    match (light_mode, scrolled) {
        (true, true) => "rgba(241, 245, 249, 0.95)",
        (true, false) => "rgba(241, 245, 249, 0.8)",
        (false, true) => "rgba(15, 23, 42, 0.95)",
        (false, false) => "rgba(15, 23, 42, 0.8)",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skill_bars_fill_once_and_stay_filled() {
        let mut reveal = SkillReveal::default();
        let skill = SKILLS[1];
        assert_eq!(reveal.bar_style(&skill), "width: 0;");
        reveal.observe(true);
        reveal.observe(false);
        assert!(reveal.is_revealed());
        assert_eq!(reveal.bar_style(&skill), "width: 85%;");
    }

    #[test]
    fn at_most_one_nav_link_is_active() {
        let mut spy = ScrollSpy::default();
        spy.observe("about", true);
        spy.observe("projects", true);
        spy.observe("contact", false);
        let links = ["#home", "#about", "#projects", "#contact"];
        let active: Vec<&str> = links
            .iter()
            .copied()
            .filter(|href| spy.is_active(href))
            .collect();
        assert_eq!(active, vec!["#projects"]);
        assert_eq!(spy.link_class("#about"), "nav-link");
    }

    #[test]
    fn anonymous_section_clears_the_active_link() {
        let mut spy = ScrollSpy::default();
        spy.observe("skills", true);
        assert_eq!(spy.link_class("#skills"), "nav-link active");
        spy.observe("", true);
        assert!(!spy.is_active("#skills"));
        assert_eq!(spy.link_class("#skills"), "nav-link");
    }

    #[test]
    fn header_darkens_past_the_offset() {
        assert_eq!(header_background(50.0, false), "rgba(15, 23, 42, 0.8)");
        assert_eq!(header_background(51.0, false), "rgba(15, 23, 42, 0.95)");
        assert_eq!(header_background(120.0, true), "rgba(241, 245, 249, 0.95)");
    }

    #[test]
    fn mobile_menu_closes_on_link_click() {
        let mut nav = MobileNav::default();
        nav.toggle();
        assert_eq!(nav.menu_class(), "nav-menu active");
        nav.close();
        assert_eq!(nav.menu_class(), "nav-menu");
    }
}
