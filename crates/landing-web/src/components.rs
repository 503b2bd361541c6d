//! UI Components

use leptos::prelude::*;
use phrase_core::{ImageAsset, PreviewCard};

/// Image that swaps to its remote fallback once if the local file fails
#[component]
pub fn FallbackImage(asset: ImageAsset, #[prop(into)] class: String) -> impl IntoView {
    let (src, set_src) = signal(asset.src);

    let on_error = move |_| {
        if let Some(next) = asset.next_source(src.get_untracked()) {
            set_src.set(next);
        }
    };

    view! {
        <img src=move || src.get() alt=asset.alt class=class on:error=on_error />
    }
}

/// Phrase card shown under the preview button
#[component]
pub fn PreviewPanel(card: PreviewCard) -> impl IntoView {
    view! {
        <div class="mt-4 p-5 bg-white/10 rounded-2xl text-left border border-white/5">
            <div class="text-[10px] font-bold uppercase tracking-[0.2em] text-white/40 mb-2">
                {card.label}
            </div>
            <div class="text-xl font-medium mb-1 text-white tracking-tight leading-snug">
                {card.quoted_phrase}
            </div>
            <div class="text-sm font-normal text-white/70 tracking-tight">{card.translation}</div>
        </div>
    }
}
