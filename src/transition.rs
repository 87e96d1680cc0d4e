//! Fade-out page transition for links marked `data-transition`.

/// Class added to `<body>` while the page fades out.
pub const FADE_CLASS: &str = "fade-out";

/// What the click looked like, read from the anchor and the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClick {
    /// Anchor has `target="_blank"`.
    pub new_tab_target: bool,
    pub meta_key: bool,
    pub ctrl_key: bool,
}

impl LinkClick {
    /// New-tab clicks keep the browser's default behavior.
    pub fn should_fade(&self) -> bool {
        !(self.new_tab_target || self.meta_key || self.ctrl_key)
    }
}
