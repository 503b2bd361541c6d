//! Landing Page

use leptos::{logging, prelude::*, task::spawn_local};
use phrase_core::{render, FetchOutcome, PreviewState, LANDING};

use crate::api;
use crate::components::{FallbackImage, PreviewPanel};

const BOOK_ICON: &str = "M18 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 4h5v8l-2.5-1.5L6 12V4z";
const OPEN_BOOK_ICON: &str = "M21 5c-1.11-.35-2.33-.5-3.5-.5-1.95 0-4.05.4-5.5 1.5-1.45-1.1-3.55-1.5-5.5-1.5-1.17 0-2.39.15-3.5.5V19c1.11-.35 2.33-.5 3.5-.5 1.95 0 4.05.4 5.5 1.5 1.45-1.1 3.55-1.5 5.5-1.5 1.17 0 2.39.15 3.5.5V5z";

#[component]
pub fn LandingPage() -> impl IntoView {
    let preview = RwSignal::new(PreviewState::new());
    let page = Memo::new(move |_| preview.with(|s| render(s, &LANDING)));

    let generate_preview = move |_| {
        let Some(ticket) = preview.try_update(PreviewState::begin) else {
            return;
        };

        spawn_local(async move {
            let outcome = api::fetch_preview().await;
            if let Some(FetchOutcome::Failed(e)) =
                preview.try_update(|s| s.finish(ticket, outcome))
            {
                logging::error!("Preview fetch failed: {e}");
            }
        });
    };

    view! {
        <div class="min-h-screen bg-white p-4 md:p-5 flex items-center justify-center font-sans">
            <div class="w-full max-w-[1400px] flex flex-col lg:flex-row gap-4 h-full">

                <section class="flex-1 bg-[#721c1c] rounded-[40px] text-white p-8 md:p-12 lg:p-16 flex flex-col min-h-[600px] lg:min-h-[850px]">
                    <header class="flex items-center justify-between mb-12">
                        <div class="flex items-center gap-4">
                            <div class="w-12 h-12 rounded-full overflow-hidden border border-white/10">
                                <FallbackImage asset=LANDING.avatar class="w-full h-full object-cover" />
                            </div>
                            <span class="text-xl font-medium tracking-tight">{LANDING.author_name}</span>
                        </div>
                        <nav class="hidden md:flex items-center gap-3">
                            {LANDING
                                .nav_items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <button class="px-5 py-2.5 rounded-full border border-white/20 bg-white/10 text-sm font-light hover:bg-white/20 transition-all">
                                            {item}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </header>

                    <div class="flex-1 flex flex-col justify-center max-w-xl mx-auto text-center lg:text-left">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-semibold leading-[1.1] mb-8 tracking-tight">
                            {LANDING.headline}
                        </h1>
                        <p class="text-lg md:text-xl font-light text-white/80 mb-12 leading-relaxed">
                            {LANDING.subheadline}
                        </p>

                        <div class="flex flex-col gap-4 w-full md:w-[440px] mx-auto lg:mx-0">
                            <button class="bg-white text-black h-[84px] rounded-full flex items-center p-2 hover:bg-gray-100 transition-all shadow-lg">
                                <div class="w-[68px] h-[68px] bg-[#111] rounded-full flex items-center justify-center">
                                    <svg width="24" height="24" viewBox="0 0 24 24" fill="white">
                                        <path d=BOOK_ICON />
                                    </svg>
                                </div>
                                <span class="flex-1 text-center text-lg font-semibold pr-4 tracking-tight">
                                    {LANDING.primary_cta}
                                </span>
                            </button>

                            <button
                                on:click=generate_preview
                                aria-busy=move || page.get().busy.to_string()
                                class="bg-[#8b3d3d] text-white h-[84px] rounded-full flex items-center p-2 hover:bg-[#9b4d4d] transition-all relative overflow-hidden shadow-lg"
                            >
                                <div class="w-[68px] h-[68px] bg-white/20 rounded-full flex items-center justify-center">
                                    <svg width="24" height="24" viewBox="0 0 24 24" fill="white">
                                        <path d=OPEN_BOOK_ICON />
                                    </svg>
                                </div>
                                <span class="flex-1 text-center text-lg font-semibold pr-4 tracking-tight">
                                    {move || page.get().button_caption}
                                </span>
                            </button>

                            {move || page.get().preview.map(|card| view! { <PreviewPanel card=card /> })}
                        </div>
                    </div>
                </section>

                <section class="flex-1 rounded-[40px] relative min-h-[600px] lg:min-h-[850px] overflow-hidden group">
                    <FallbackImage
                        asset=LANDING.hero
                        class="absolute inset-0 w-full h-full object-cover transition-transform duration-1000 group-hover:scale-[1.03]"
                    />
                    <header class="absolute top-0 left-0 right-0 p-8 md:p-12 flex justify-end z-10">
                        <button class="px-8 py-3 rounded-full bg-white/30 backdrop-blur-md text-black/90 font-bold hover:bg-white/50 transition-all border border-white/20 shadow-xl tracking-tight">
                            {LANDING.contact_label}
                        </button>
                    </header>
                </section>
            </div>
        </div>
    }
}
