//! View Model
//!
//! Pure mapping from [`PreviewState`] to what the page shows. The Leptos
//! component only turns this into markup.

use crate::content::LandingContent;
use crate::state::PreviewState;

/// The phrase card shown under the preview button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewCard {
    pub label: &'static str,
    /// Phrase wrapped in guillemets
    pub quoted_phrase: String,
    pub translation: String,
}

/// Everything state-dependent on the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingView {
    pub button_caption: &'static str,
    pub busy: bool,
    /// Present only when a phrase is set and nothing is loading
    pub preview: Option<PreviewCard>,
}

pub fn render(state: &PreviewState, content: &LandingContent) -> LandingView {
    let busy = state.is_loading();
    let button_caption = if busy {
        content.preview_loading_caption
    } else {
        content.preview_caption
    };

    let preview = state
        .phrase()
        .filter(|_| !busy)
        .map(|p| PreviewCard {
            label: content.preview_label,
            quoted_phrase: format!("«{}»", p.phrase),
            translation: p.translation.clone(),
        });

    LandingView {
        button_caption,
        busy,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LANDING;
    use crate::error::PreviewError;
    use crate::phrase::PreviewPhrase;

    #[test]
    fn test_idle_view_has_no_preview() {
        let view = render(&PreviewState::new(), &LANDING);
        assert_eq!(view.button_caption, "Посмотреть фрагмент");
        assert!(!view.busy);
        assert!(view.preview.is_none());
    }

    #[test]
    fn test_loading_view_hides_panel_and_swaps_caption() {
        let mut state = PreviewState::new();
        let t = state.begin();
        state.finish(t, Ok(PreviewPhrase::new("Bof", "Так себе")));
        state.begin();

        let view = render(&state, &LANDING);
        assert_eq!(view.button_caption, "Загрузка...");
        assert!(view.busy);
        assert!(view.preview.is_none());
    }

    #[test]
    fn test_success_renders_strings_verbatim() {
        let mut state = PreviewState::new();
        let t = state.begin();
        state.finish(t, Ok(PreviewPhrase::new("Ça roule?", "How's it going?")));

        let card = render(&state, &LANDING).preview.unwrap();
        assert_eq!(card.quoted_phrase, "«Ça roule?»");
        assert_eq!(card.translation, "How's it going?");
        assert_eq!(card.label, "Пример из книги:");
    }

    #[test]
    fn test_failure_after_success_keeps_card() {
        let mut state = PreviewState::new();
        let t = state.begin();
        state.finish(t, Ok(PreviewPhrase::new("Ça roule?", "How's it going?")));
        let t = state.begin();
        state.finish(t, Err(PreviewError::Malformed("eof".into())));

        let view = render(&state, &LANDING);
        assert!(!view.busy);
        assert_eq!(view.preview.unwrap().translation, "How's it going?");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = PreviewState::new();
        let t = state.begin();
        state.finish(t, Ok(PreviewPhrase::new("Ça roule?", "How's it going?")));

        assert_eq!(render(&state, &LANDING), render(&state, &LANDING));
        assert_eq!(render(&PreviewState::new(), &LANDING), render(&PreviewState::new(), &LANDING));
    }
}
