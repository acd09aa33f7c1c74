use std::rc::Rc;

use yew::prelude::*;

use crate::components::art::{BackgroundCanvas, HeroArt, Poster, SectionDivider};
use crate::components::faq_item::FaqItem;
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::icons::{service_icon, Play};
use crate::components::mailto_button::MailtoButton;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::tilt_card::TiltCard;
use crate::config;
use crate::content::{PricingTier, Service, SiteContent};
use crate::hooks::use_scrollspy;
use crate::mailto;

#[derive(Properties, PartialEq)]
struct EyebrowProps {
    title: &'static str,
    subtitle: String,
}

#[function_component(HeaderEyebrow)]
fn header_eyebrow(props: &EyebrowProps) -> Html {
    html! {
        <div class="eyebrow">
            <h2>{props.title}</h2>
            <p>{&props.subtitle}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <article class="card service-card">
            <span aria-hidden="true" class="corner-glow"></span>
            <div class="card-title">
                { service_icon(service.icon) }
                <h3>{&service.title}</h3>
            </div>
            <p class="card-copy">{&service.copy}</p>
            <ul class="bullets">
                { for service.bullets.iter().map(|b| html! { <li key={b.clone()}>{b}</li> }) }
            </ul>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    tier: PricingTier,
    subject: String,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = &props.tier;
    let href = mailto::href(&props.subject);
    let cta = if tier.featured {
        "Start Trial".to_string()
    } else {
        format!("Choose {}", tier.label)
    };

    html! {
        <article class={classes!("card", "pricing-card", tier.featured.then(|| "featured"))}>
            if tier.featured {
                <span class="featured-badge">{"Best for first-timers"}</span>
            }
            <h3>{&tier.label}</h3>
            <p class="tier-note">{tier.note.as_deref().unwrap_or("\u{00a0}")}</p>
            <p class="tier-price">{&tier.price}</p>
            <p class="tier-meta">{&tier.meta}</p>
            <ul class="bullets">
                { for tier.bullets.iter().map(|b| html! { <li key={b.clone()}>{b}</li> }) }
            </ul>
            <div class="tier-cta">
                <a
                    href={href}
                    class={classes!("btn", "full-width", if tier.featured { "btn-gradient" } else { "btn-secondary" })}
                >
                    {cta}
                </a>
            </div>
            <div aria-hidden="true" class="tier-sweep"></div>
        </article>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let active = use_scrollspy(content.section_ids());
    let trial_subject = content.trial_subject();

    html! {
        <div class="page">
            <BackgroundCanvas />

            <SiteHeader
                brand={content.brand.clone()}
                nav={content.nav.clone()}
                active={active.clone()}
                trial_subject={trial_subject.clone()}
            />

            // Hero
            <section class="section hero">
                <HeroArt />
                <div class="hero-content">
                    <span class="pill">
                        <span class="pill-dot"></span>
                        {&content.hero.badge}
                    </span>
                    <h1>
                        <span class="gradient-text">{&content.hero.headline}</span>
                        {&content.hero.headline_tail}
                    </h1>
                    <p class="hero-lede">{&content.hero.lede}</p>
                    <div class="hero-cta-group">
                        <MailtoButton subject={trial_subject.clone()} />
                        <a href="#pricing" class="btn btn-secondary" aria-label="View pricing">{"See pricing"}</a>
                    </div>
                    <div class="hero-chips">
                        { for content.hero.chips.iter().map(|chip| html! {
                            <span key={chip.clone()} class="pill">{chip}</span>
                        }) }
                    </div>
                </div>
                <SectionDivider />
            </section>

            <section id="services" class="section">
                <HeaderEyebrow title="Services" subtitle={content.services_subtitle.clone()} />
                <div class="grid grid-3">
                    { for content.services.iter().map(|service| html! {
                        <ServiceCard key={service.title.clone()} service={service.clone()} />
                    }) }
                </div>
                <SectionDivider />
            </section>

            <section id="work" class="section">
                <HeaderEyebrow title="Work" subtitle={content.work_subtitle.clone()} />
                <div class="grid grid-3">
                    { for content.posters.iter().enumerate().map(|(index, caption)| html! {
                        <TiltCard key={caption.clone()}>
                            <figure class="poster-card">
                                <Poster {index} />
                                <figcaption>{caption}</figcaption>
                                <div class="poster-overlay">
                                    <div class="play-ring"><Play /></div>
                                </div>
                            </figure>
                        </TiltCard>
                    }) }
                </div>
                <SectionDivider />
            </section>

            <section class="section">
                <HeaderEyebrow title="Process" subtitle={content.process_subtitle.clone()} />
                <ol class="grid grid-2 process">
                    { for content.process.iter().enumerate().map(|(idx, step)| html! {
                        <li key={step.title.clone()} class="card process-step">
                            <span class="step-number">{(idx + 1).to_string()}</span>
                            <h3>{&step.title}</h3>
                            <p class="card-copy">{&step.description}</p>
                            <span aria-hidden="true" class="corner-glow"></span>
                        </li>
                    }) }
                </ol>
                <SectionDivider />
            </section>

            <section id="pricing" class="section">
                <HeaderEyebrow title="Pricing" subtitle={content.pricing_subtitle.clone()} />
                <div class="grid grid-3">
                    { for content.pricing.iter().map(|tier| html! {
                        <PricingCard
                            key={tier.label.clone()}
                            tier={tier.clone()}
                            subject={content.subject_for(&tier.subject_tag)}
                        />
                    }) }
                </div>
                <SectionDivider />
            </section>

            <section id="faq" class="section">
                <HeaderEyebrow title="FAQ" subtitle={content.faq_subtitle.clone()} />
                <div class="faq-list">
                    { for content.faq.iter().map(|entry| html! {
                        <FaqItem
                            key={entry.question.clone()}
                            question={entry.question.clone()}
                            answer={entry.answer.clone()}
                        />
                    }) }
                </div>
                <SectionDivider />
            </section>

            <section id="contact" class="section">
                <div class="contact-card">
                    <h2>{&content.contact.headline}</h2>
                    <p>{&content.contact.lede}</p>
                    <div class="hero-cta-group">
                        <a href={mailto::href("")} class="btn btn-cta" aria-label="Email Kinetic Clips">
                            {config::CONTACT_EMAIL}
                        </a>
                        <a href="#" class="btn btn-secondary" aria-label="Back to top">{"Back to top"}</a>
                    </div>
                </div>
            </section>

            <SiteFooter brand={content.brand.clone()} nav={content.nav.clone()} {active} />

            <ScrollTopButton />
        </div>
    }
}
