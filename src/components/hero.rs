use gloo_timers::callback::Interval;
use yew::prelude::*;

const SLIDE_INTERVAL_MS: u32 = 3_000;

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: AttrValue,
    pub title: AttrValue,
}

impl Slide {
    pub fn new(image: &'static str, title: &'static str) -> Self {
        Self {
            image: AttrValue::Static(image),
            title: AttrValue::Static(title),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub image: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Full-width background image with a centred caption.
#[function_component(HeroBanner)]
pub fn hero_banner(props: &HeroBannerProps) -> Html {
    let style = format!(
        "position:relative; width:100%; height:20em; background-image:url({}); background-size:cover; background-position:center; display:flex; align-items:center; justify-content:center;",
        props.image
    );
    html! {
        <div {style}>
            <div style="text-align:center; color:white; padding:0.4em 1.5em; border-radius:8px; background:rgba(0,0,0,0.45);">
                <h2 style="margin:0; font-size:2.2em; font-weight:700;">{ &*props.title }</h2>
                if let Some(subtitle) = &props.subtitle {
                    <p style="margin:0.4em 0 0 0; font-size:1.1em;">{ &**subtitle }</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroCarouselProps {
    pub slides: Vec<Slide>,
}

/// Cycles through `slides` every few seconds. A single slide stays put.
#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        use_effect_with(props.slides.len(), move |len| {
            let len = *len;
            let interval = (len > 1).then(|| {
                let mut tick = 0usize;
                Interval::new(SLIDE_INTERVAL_MS, move || {
                    tick = (tick + 1) % len;
                    current.set(tick);
                })
            });
            move || drop(interval)
        });
    }

    match props.slides.get(*current).or_else(|| props.slides.first()) {
        Some(slide) => html! {
            <HeroBanner image={slide.image.clone()} title={slide.title.clone()} />
        },
        None => html! {},
    }
}
