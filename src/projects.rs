pub const ALL: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Weather Dashboard",
        url: "https://example.github.io/weather-dashboard/",
        category: "web",
        summary: "Forecasts with animated conditions and a searchable city list.",
    },
    Project {
        title: "Low Poly Island",
        url: "https://example.github.io/low-poly-island/",
        category: "3d",
        summary: "Real-time scene with a day/night cycle and orbit controls.",
    },
    Project {
        title: "Task Board",
        url: "https://example.github.io/task-board/",
        category: "web",
        summary: "Drag-and-drop kanban board that keeps state in the browser.",
    },
    Project {
        title: "Banking App Concept",
        url: "https://example.github.io/banking-concept/",
        category: "design",
        summary: "Mobile-first interface study with an interactive prototype.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: &'static str,
    pub label: &'static str,
}

pub const FILTERS: &[FilterButton] = &[
    FilterButton { filter: ALL, label: "All" },
    FilterButton { filter: "web", label: "Web" },
    FilterButton { filter: "3d", label: "3D" },
    FilterButton { filter: "design", label: "Design" },
];

/// Currently selected category. Exactly one filter button is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    active: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn select(&mut self, filter: &str) {
        self.active = filter.to_string();
    }

    pub fn is_active(&self, filter: &str) -> bool {
        self.active == filter
    }

    pub fn shows(&self, category: &str) -> bool {
        self.active == ALL || self.active == category
    }

    #[cfg(test)]
    pub fn visible<'a, T>(
        &self,
        cards: &'a [T],
        category: impl Fn(&T) -> &str,
    ) -> Vec<&'a T> {
        cards.iter().filter(|card| self.shows(category(card))).collect()
    }
}

pub fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filters_cards_by_category() {
        let cards = ["a", "b", "a"];
        let mut filter = ProjectFilter::default();
        filter.select("a");
        assert_eq!(filter.visible(&cards, |card| *card).len(), 2);
        filter.select(ALL);
        assert_eq!(filter.visible(&cards, |card| *card).len(), 3);
    }

    #[test]
    fn only_selected_button_is_active() {
        let mut filter = ProjectFilter::default();
        filter.select("3d");
        let active: Vec<&str> = FILTERS
            .iter()
            .filter(|button| filter.is_active(button.filter))
            .map(|button| button.filter)
            .collect();
        assert_eq!(active, vec!["3d"]);
    }

    #[test]
    fn catalog_filters_by_project_category() {
        let mut filter = ProjectFilter::default();
        filter.select("web");
        let titles: Vec<&str> = filter
            .visible(PROJECTS, |project| project.category)
            .into_iter()
            .map(|project| project.title)
            .collect();
        assert_eq!(titles, vec!["Weather Dashboard", "Task Board"]);
    }
}
