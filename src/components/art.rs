//! Decorative, non-interactive artwork: background washes, hero orbs, the
//! ribbon wave, section dividers and the generated portfolio posters.

use yew::prelude::*;

#[function_component(BackgroundCanvas)]
pub fn background_canvas() -> Html {
    html! {
        <>
            <div aria-hidden="true" class="bg-washes"></div>
            <div aria-hidden="true" class="bg-conic"></div>
            <div aria-hidden="true" class="bg-grid"></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct OrbProps {
    size: u32,
    color: &'static str,
    /// Extra positioning, e.g. `top: 110px; left: -60px;`
    placement: &'static str,
    #[prop_or("0s")]
    delay: &'static str,
}

#[function_component(Orb)]
fn orb(props: &OrbProps) -> Html {
    let style = format!(
        "width: {size}px; height: {size}px; {placement} animation-delay: {delay}; \
         background: radial-gradient(circle at 50% 50%, {color}, rgba(0,0,0,0) 60%);",
        size = props.size,
        placement = props.placement,
        delay = props.delay,
        color = props.color,
    );
    html! { <div class="orb" style={style} aria-hidden="true"></div> }
}

#[function_component(HeroArt)]
pub fn hero_art() -> Html {
    html! {
        <div class="hero-art">
            <Orb size={280} color="rgba(56,189,248,0.55)" placement="top: 110px; left: -60px;" />
            <Orb size={360} color="rgba(99,102,241,0.5)" placement="bottom: 80px; right: -80px;" delay="4s" />
            <Orb size={220} color="rgba(16,185,129,0.45)" placement="bottom: 260px; left: 40%;" delay="9s" />
            <svg aria-hidden="true" class="ribbon-wave" viewBox="0 0 1100 300" fill="none">
                <defs>
                    <linearGradient id="ribbon-a" x1="0" y1="0" x2="1" y2="0">
                        <stop offset="0" stop-color="rgb(var(--kc-accent))" stop-opacity="0.7" />
                        <stop offset="1" stop-color="rgb(var(--kc-cta))" stop-opacity="0.7" />
                    </linearGradient>
                    <linearGradient id="ribbon-b" x1="1" y1="0" x2="0" y2="0">
                        <stop offset="0" stop-color="rgb(var(--kc-accent-2))" stop-opacity="0.5" />
                        <stop offset="1" stop-color="rgb(var(--kc-accent))" stop-opacity="0.5" />
                    </linearGradient>
                </defs>
                <path
                    d="M-50 120 C 150 60, 350 180, 550 120 S 950 60, 1150 120"
                    stroke="url(#ribbon-a)" stroke-width="40" stroke-linecap="round" opacity="0.7"
                />
                <path
                    d="M-50 180 C 150 120, 350 240, 550 180 S 950 120, 1150 180"
                    stroke="url(#ribbon-b)" stroke-width="28" stroke-linecap="round" opacity="0.5"
                />
            </svg>
        </div>
    }
}

#[function_component(SectionDivider)]
pub fn section_divider() -> Html {
    html! { <div class="section-divider" aria-hidden="true"></div> }
}

#[derive(Properties, PartialEq)]
pub struct PosterProps {
    /// Keeps gradient and pattern ids unique when several posters share a page.
    pub index: usize,
}

#[function_component(Poster)]
pub fn poster(props: &PosterProps) -> Html {
    let id = |name: &str| format!("poster-{}-{}", props.index, name);
    let url = |name: &str| format!("url(#{})", id(name));

    html! {
        <svg viewBox="0 0 800 600" class="poster">
            <defs>
                <linearGradient id={id("g1")} x1="0" y1="0" x2="1" y2="1">
                    <stop offset="0%" stop-color="rgb(56,189,248)" stop-opacity="0.6" />
                    <stop offset="100%" stop-color="rgb(99,102,241)" stop-opacity="0.6" />
                </linearGradient>
                <linearGradient id={id("g2")} x1="1" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color="rgb(16,185,129)" stop-opacity="0.34" />
                    <stop offset="100%" stop-color="transparent" />
                </linearGradient>
                <mask id={id("vignette")}>
                    <rect width="800" height="600" fill="white" />
                    <rect x="-50" y="-50" width="900" height="700" rx="40" ry="40" fill="black" opacity="0.12" />
                </mask>
                <pattern id={id("diag")} width="24" height="24" patternUnits="userSpaceOnUse">
                    <path d="M0 24 L24 0" stroke="rgba(255,255,255,0.10)" stroke-width="2" />
                </pattern>
            </defs>
            <rect width="800" height="600" fill={url("g1")} />
            <rect width="800" height="600" fill={url("g2")} />
            <rect width="800" height="600" fill={url("diag")} />
            <rect width="800" height="600" mask={url("vignette")} fill="black" opacity="0.16" />
            <g transform="translate(30,30)">
                <rect width="130" height="36" rx="18" fill="rgba(0,0,0,0.35)" />
                <circle cx="18" cy="18" r="6" fill="rgb(56,189,248)" />
                <text x="34" y="23" font-size="14" fill="white">{"HOOK TEST"}</text>
            </g>
        </svg>
    }
}
