//! Landing Page Content
//!
//! Fixed copy and asset references for the "Je Parle!" page.

/// An image with a remote fallback used when the local file fails to load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub src: &'static str,
    pub fallback: &'static str,
    pub alt: &'static str,
}

impl ImageAsset {
    /// Source to switch to after a load error, if any.
    ///
    /// Returns `None` once the fallback itself has failed.
    pub fn next_source(&self, failed: &str) -> Option<&'static str> {
        (failed != self.fallback).then_some(self.fallback)
    }
}

/// Everything on the page that does not depend on preview state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingContent {
    pub author_name: &'static str,
    pub avatar: ImageAsset,
    pub nav_items: [&'static str; 2],
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub primary_cta: &'static str,
    pub preview_caption: &'static str,
    pub preview_loading_caption: &'static str,
    pub preview_label: &'static str,
    pub hero: ImageAsset,
    pub contact_label: &'static str,
}

pub const LANDING: LandingContent = LandingContent {
    author_name: "Гаврилов Илья",
    avatar: ImageAsset {
        src: "./assets/avatar.svg",
        fallback: "https://api.dicebear.com/7.x/avataaars/svg?seed=Ilya",
        alt: "Илья",
    },
    nav_items: ["Что внутри", "Почему это работает"],
    headline: "Книга, собранная не за день — а за 7 лет преподавания французского.",
    subheadline: "Внутри — живые выражения, которые используют французы каждый день.",
    primary_cta: "Получить книгу «Je Parle!»",
    preview_caption: "Посмотреть фрагмент",
    preview_loading_caption: "Загрузка...",
    preview_label: "Пример из книги:",
    hero: ImageAsset {
        src: "./assets/hero-image.png",
        fallback: "https://r.jina.ai/i/6c41b80d0d8641bc8836528d2274488b",
        alt: "Je Parle! Book and Audio Interface",
    },
    contact_label: "Связаться",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_used_once() {
        let avatar = LANDING.avatar;
        assert_eq!(avatar.next_source(avatar.src), Some(avatar.fallback));
        assert_eq!(avatar.next_source(avatar.fallback), None);
    }

    #[test]
    fn test_captions_differ() {
        assert_ne!(LANDING.preview_caption, LANDING.preview_loading_caption);
    }
}
