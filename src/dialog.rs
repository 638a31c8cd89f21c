//! Open/close state shared by the certificate, project, lightbox and trailer
//! dialogs. Content lives inside the `Open` variant, so closing a dialog drops
//! whatever was embedded in it and any iframe playback stops with it.

#[derive(Clone, Debug, PartialEq)]
pub enum DialogState<T> {
    Closed,
    Open(T),
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        DialogState::Closed
    }
}

/// Where a click on a dialog landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Content,
}

impl<T> DialogState<T> {
    pub fn open(&mut self, content: T) {
        *self = DialogState::Open(content);
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open(_))
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            DialogState::Open(content) => Some(content),
            DialogState::Closed => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        match self {
            DialogState::Open(content) => Some(content),
            DialogState::Closed => None,
        }
    }

    /// Closes on backdrop clicks only. Returns whether the dialog closed.
    pub fn handle_click(&mut self, origin: ClickOrigin) -> bool {
        if origin == ClickOrigin::Backdrop && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    pub fn class(&self, base: &str) -> String {
        if self.is_open() {
            format!("{base} open")
        } else {
            base.to_string()
        }
    }
}

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";
pub const TRAILER_VIDEO_ID: &str = "QdBZY2fkU-0";

pub fn embed_url(video_id: &str) -> String {
    format!(
        "{EMBED_BASE}{}?autoplay=1&rel=0",
        urlencoding::encode(video_id.trim())
    )
}

pub fn trailer_url() -> String {
    embed_url(TRAILER_VIDEO_ID)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub url: String,
    pub fullscreen: bool,
}

impl ProjectView {
    /// Needs both a url and a title, like the cards' data attributes.
    pub fn from_card(url: &str, title: &str) -> Option<Self> {
        if url.trim().is_empty() || title.trim().is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            url: url.to_string(),
            fullscreen: false,
        })
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn content_class(&self) -> &'static str {
        if self.fullscreen {
            "project-modal-content fullscreen"
        } else {
            "project-modal-content"
        }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.fullscreen {
            "fa-solid fa-compress"
        } else {
            "fa-solid fa-expand"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxMedia {
    Image { src: String, alt: String },
    Video { url: String },
}

impl LightboxMedia {
    /// Builds lightbox content from a media item's `data-type`. Unknown types
    /// open nothing.
    pub fn from_item(kind: &str, href: &str, alt: &str, video_id: &str) -> Option<Self> {
        match kind {
            "image" => Some(LightboxMedia::Image {
                src: href.to_string(),
                alt: alt.to_string(),
            }),
            "video" => Some(LightboxMedia::Video {
                url: embed_url(video_id),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut dialog = DialogState::Closed;
        dialog.open("certificate");
        assert!(!dialog.handle_click(ClickOrigin::Content));
        assert!(dialog.is_open());
        assert!(dialog.handle_click(ClickOrigin::Backdrop));
        assert!(!dialog.is_open());
        assert!(!dialog.handle_click(ClickOrigin::Backdrop));
    }

    #[test]
    fn closing_drops_embedded_content() {
        let mut dialog = DialogState::Closed;
        dialog.open(LightboxMedia::Video {
            url: trailer_url(),
        });
        dialog.close();
        assert_eq!(dialog.content(), None);
        assert_eq!(dialog.class("lightbox"), "lightbox");
    }

    #[test]
    fn fullscreen_swaps_icon_and_resets_on_reopen() {
        let mut dialog = DialogState::Closed;
        let view = ProjectView::from_card("https://example.com", "Demo").unwrap();
        dialog.open(view.clone());
        if let Some(open) = dialog.content_mut() {
            open.toggle_fullscreen();
        }
        let open = dialog.content().unwrap();
        assert_eq!(open.icon_class(), "fa-solid fa-compress");
        assert_eq!(open.content_class(), "project-modal-content fullscreen");
        dialog.close();
        dialog.open(view);
        assert_eq!(dialog.content().unwrap().icon_class(), "fa-solid fa-expand");
    }

    #[test]
    fn project_needs_url_and_title() {
        assert_eq!(ProjectView::from_card("", "Demo"), None);
        assert_eq!(ProjectView::from_card("https://example.com", " "), None);
    }

    #[test]
    fn media_items_map_by_type() {
        assert_eq!(
            LightboxMedia::from_item("video", "#", "", "abc123"),
            Some(LightboxMedia::Video {
                url: "https://www.youtube.com/embed/abc123?autoplay=1&rel=0".to_string(),
            })
        );
        assert_eq!(
            LightboxMedia::from_item("image", "/shots/1.jpg", "Vice City", ""),
            Some(LightboxMedia::Image {
                src: "/shots/1.jpg".to_string(),
                alt: "Vice City".to_string(),
            })
        );
        assert_eq!(LightboxMedia::from_item("audio", "#", "", ""), None);
    }

    #[test]
    fn trailer_uses_fixed_video() {
        assert_eq!(
            trailer_url(),
            "https://www.youtube.com/embed/QdBZY2fkU-0?autoplay=1&rel=0"
        );
    }

    #[test]
    fn video_ids_cannot_break_out_of_the_path() {
        assert_eq!(
            embed_url(" a&b c/d "),
            "https://www.youtube.com/embed/a%26b%20c%2Fd?autoplay=1&rel=0"
        );
    }
}
