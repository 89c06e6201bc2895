use log::info;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::catalog::{
    MediaItem, MediaKind, EDITORIAL_ITEMS, HERO_ITEMS, HERO_PRIORITY_INDEX, UGC_ITEMS, WORK_ITEMS,
};
use crate::components::carousel::Carousel;
use crate::components::lead_form::LeadForm;
use crate::components::media_slot::{ActivationMode, MediaSlot};
use crate::components::nav::NavBar;
use crate::components::reveal::Reveal;
use crate::config;

/// Hero neighbors hold their fetch this long so the center card has
/// the pipe to itself.
const HERO_NEIGHBOR_DELAY_MS: u32 = 1500;

/// Activation for a hero card by row position.
fn hero_activation(index: usize) -> ActivationMode {
    if index == HERO_PRIORITY_INDEX {
        ActivationMode::Immediate { delay_ms: 0 }
    } else {
        ActivationMode::Deferred {
            delay_ms: HERO_NEIGHBOR_DELAY_MS,
        }
    }
}

fn render_gallery_card(item: &MediaItem, activation: ActivationMode) -> Html {
    html! {
        <div class="gallery-card">
            <MediaSlot item={*item} activation={activation} />
            if item.label.is_some() || item.sublabel.is_some() {
                <div class="gallery-card-caption">
                    if let Some(label) = item.label {
                        <div class="gallery-card-label">{ label }</div>
                    }
                    if let Some(sublabel) = item.sublabel {
                        <div class="gallery-card-sublabel">{ sublabel }</div>
                    }
                </div>
            }
        </div>
    }
}

fn render_step(number: &str, title: &str, description: &str) -> Html {
    html! {
        <div class="step-card">
            <div class="step-number">{ format!("Step {number}") }</div>
            <div class="step-title">{ title }</div>
            <p class="step-copy">{ description }</p>
        </div>
    }
}

/// Placeholder slots for the parts of the page still waiting on final
/// footage.
const TESTIMONIAL_SLOT: MediaItem = MediaItem {
    id: 0,
    kind: MediaKind::Video,
    src: None,
    label: None,
    sublabel: None,
    tint: "#141418",
};

const PORTRAIT_SLOT: MediaItem = MediaItem {
    id: 0,
    kind: MediaKind::Image,
    src: None,
    label: Some("Ben Lewis"),
    sublabel: None,
    tint: "#1a1520",
};

#[function_component(Landing)]
pub fn landing() -> Html {
    info!("Rendering landing page");
    let scroll_y = use_state_eq(|| 0.0_f64);

    // Track scroll depth for the hero parallax; start from the top on a
    // fresh mount.
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                        let listener = Closure::<dyn Fn()>::new({
                            let window = window.clone();
                            let scroll_y = scroll_y.clone();
                            move || scroll_y.set(window.scroll_y().unwrap_or(0.0))
                        });
                        match window.add_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "scroll",
                                    listener.as_ref().unchecked_ref(),
                                );
                            }),
                            Err(_) => Box::new(move || drop(listener)),
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            (),
        );
    }

    let orb_style = format!(
        "position: absolute; width: 600px; height: 600px; border-radius: 50%; \
         background: radial-gradient(circle, rgba(245,240,235,0.02) 0%, transparent 70%); \
         top: 30%; left: 50%; transform: translate(-50%,-50%) translateY({}px); \
         pointer-events: none;",
        *scroll_y * -0.06,
    );

    html! {
        <div class="page">
            <link
                rel="stylesheet"
                href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
            />
            <style>{r#"
                @import url('https://fonts.googleapis.com/css2?family=Syne:wght@400;500;600;700;800&family=Inter:wght@300;400;500;600&display=swap');

                * { margin: 0; padding: 0; box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                ::selection { background: rgba(245,240,235,0.2); color: #fff; }

                .page {
                    --fh: 'Syne', 'Helvetica Neue', sans-serif;
                    --fb: 'Inter', -apple-system, sans-serif;
                    min-height: 100vh;
                    background: #0A0A0A;
                    color: #F5F0EB;
                    font-family: var(--fb);
                    overflow-x: hidden;
                }

                @keyframes fadeUp { from { opacity: 0; transform: translateY(40px); } to { opacity: 1; transform: translateY(0); } }
                @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }

                .top-nav {
                    position: fixed; top: 0; left: 0; right: 0; z-index: 100;
                    padding: 18px 32px;
                    display: flex; justify-content: space-between; align-items: center;
                    background: transparent;
                    transition: all 0.4s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10,10,10,0.92);
                    backdrop-filter: blur(20px);
                    border-bottom: 1px solid rgba(255,255,255,0.04);
                }
                .nav-brand {
                    font-family: var(--fh); font-size: 14px; font-weight: 600;
                    letter-spacing: 3px; text-transform: uppercase;
                    color: #F5F0EB; cursor: pointer;
                }
                .nav-links { display: flex; gap: 28px; align-items: center; }
                .nav-link {
                    color: rgba(245,240,235,0.4); text-decoration: none;
                    font-size: 11px; letter-spacing: 2px; text-transform: uppercase;
                    cursor: pointer; transition: color 0.3s; font-weight: 400;
                }
                .nav-link:hover { color: #F5F0EB; }
                .nav-link.big { font-size: 16px; }
                .nav-cta { padding: 10px 24px; font-size: 10px; }
                .nav-burger {
                    background: none; border: none; cursor: pointer;
                    display: none; flex-direction: column; gap: 5px; padding: 8px;
                }
                .nav-burger span {
                    width: 22px; height: 1.5px; background: #F5F0EB;
                    transition: all 0.3s; display: block;
                }
                .nav-burger.open span:nth-child(1) { transform: rotate(45deg) translate(4.5px, 4.5px); }
                .nav-burger.open span:nth-child(2) { opacity: 0; transform: scaleX(0); }
                .nav-burger.open span:nth-child(3) { transform: rotate(-45deg) translate(4.5px, -4.5px); }
                .nav-overlay {
                    position: fixed; inset: 0; background: rgba(10,10,10,0.98);
                    backdrop-filter: blur(24px); z-index: 99;
                    display: flex; flex-direction: column; align-items: center; justify-content: center;
                    gap: 28px; animation: fadeIn 0.3s ease;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none !important; }
                    .nav-burger { display: flex !important; }
                }

                .btn-primary {
                    display: inline-flex; align-items: center; gap: 10px;
                    padding: 16px 36px; background: #F5F0EB; border: none; color: #0A0A0A;
                    font-family: var(--fb); font-size: 11px; letter-spacing: 2px;
                    text-transform: uppercase; text-decoration: none; cursor: pointer;
                    font-weight: 500; transition: all 0.35s cubic-bezier(0.16, 1, 0.3, 1);
                    border-radius: 2px;
                }
                .btn-primary:hover { background: #fff; transform: translateY(-2px); box-shadow: 0 8px 32px rgba(245,240,235,0.15); }
                .btn-ghost {
                    display: inline-flex; align-items: center; gap: 10px;
                    padding: 16px 36px; background: transparent;
                    border: 1px solid rgba(245,240,235,0.2); color: #F5F0EB;
                    font-family: var(--fb); font-size: 11px; letter-spacing: 2px;
                    text-transform: uppercase; text-decoration: none; cursor: pointer;
                    font-weight: 400; transition: all 0.35s; border-radius: 2px;
                }
                .btn-ghost:hover { border-color: rgba(245,240,235,0.5); background: rgba(245,240,235,0.04); }

                .section { padding: 100px 24px; max-width: 1100px; margin: 0 auto; }
                .section-label {
                    font-size: 10px; letter-spacing: 4px; text-transform: uppercase;
                    color: rgba(245,240,235,0.45); margin-bottom: 16px;
                    font-weight: 500; text-align: center;
                }
                .section-heading {
                    font-family: var(--fh); font-size: clamp(28px, 4vw, 44px);
                    font-weight: 600; line-height: 1.15; margin-bottom: 48px; text-align: center;
                }
                .section-heading .thin { font-weight: 400; color: rgba(245,240,235,0.45); }

                .carousel-track {
                    display: flex;
                    overflow-x: auto;
                    padding: 0 40px 20px;
                    scrollbar-width: none;
                    -webkit-overflow-scrolling: touch;
                    scroll-snap-type: x mandatory;
                }
                .carousel-track::-webkit-scrollbar { display: none; }
                .carousel-arrow {
                    position: absolute; top: 50%; transform: translateY(-60%);
                    width: 44px; height: 44px; border-radius: 50%;
                    background: rgba(10,10,10,0.7); backdrop-filter: blur(12px);
                    border: 1px solid rgba(255,255,255,0.1);
                    display: flex; align-items: center; justify-content: center;
                    cursor: pointer; z-index: 10;
                    transition: opacity 0.3s, background 0.3s;
                }
                .carousel-arrow:hover { background: rgba(30,30,30,0.9); }
                .carousel-arrow i { color: #F5F0EB; font-size: 14px; }

                .gallery-card { user-select: none; }
                .gallery-card-caption { margin-top: 12px; padding: 0 4px; text-align: center; }
                .gallery-card-label { font-size: 12px; color: #F5F0EB; font-weight: 400; }
                .gallery-card-sublabel {
                    font-size: 11px; color: rgba(245,240,235,0.35);
                    font-weight: 300; line-height: 1.5; margin-top: 4px;
                }

                .slot-placeholder {
                    position: absolute; inset: 0;
                    display: flex; align-items: center; justify-content: center;
                    pointer-events: none;
                    transition: opacity 0.5s ease;
                }
                .slot-placeholder-badge {
                    width: 44px; height: 44px; border-radius: 50%;
                    border: 1.5px solid rgba(255,255,255,0.15);
                    display: flex; align-items: center; justify-content: center;
                }
                .slot-placeholder-badge i { color: rgba(255,255,255,0.4); font-size: 14px; }

                .editorial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 14px; }
                @media (max-width: 640px) { .editorial-grid { grid-template-columns: repeat(2, 1fr); } }
                .grid-tile {
                    transition: transform 0.4s cubic-bezier(0.16, 1, 0.3, 1), box-shadow 0.4s;
                    cursor: pointer; overflow: hidden; border-radius: 8px;
                }
                .grid-tile:hover { transform: scale(1.03); box-shadow: 0 16px 48px rgba(0,0,0,0.4); }

                .step-row { display: flex; gap: 20px; flex-wrap: wrap; }
                @media (max-width: 768px) { .step-row { flex-direction: column; } }
                .step-card {
                    padding: 32px 28px; background: rgba(255,255,255,0.02);
                    border: 1px solid rgba(255,255,255,0.04); border-radius: 12px;
                    flex: 1; min-width: 260px; text-align: center;
                }
                .step-number {
                    font-size: 11px; letter-spacing: 3px; text-transform: uppercase;
                    color: rgba(245,240,235,0.45); margin-bottom: 16px; font-weight: 500;
                }
                .step-title {
                    font-size: 18px; font-weight: 600; color: #F5F0EB;
                    margin-bottom: 12px; font-family: var(--fh);
                }
                .step-copy { font-size: 14px; line-height: 1.7; color: rgba(245,240,235,0.4); font-weight: 300; }

                .testimonial-card {
                    max-width: 700px; margin: 0 auto;
                    background: rgba(255,255,255,0.015);
                    border: 1px solid rgba(255,255,255,0.04);
                    border-radius: 14px; padding: 52px 40px; text-align: center;
                }

                .lead-form {
                    display: flex; flex-direction: column; gap: 14px;
                    max-width: 420px; margin: 0 auto;
                }
                .lead-input {
                    padding: 15px 18px;
                    background: rgba(255,255,255,0.03);
                    border: 1px solid rgba(255,255,255,0.08);
                    border-radius: 6px;
                    color: #F5F0EB; font-family: var(--fb); font-size: 14px; font-weight: 300;
                    transition: border-color 0.3s, background 0.3s;
                }
                .lead-input::placeholder { color: rgba(245,240,235,0.3); }
                .lead-input:focus {
                    outline: none;
                    border-color: rgba(245,240,235,0.35);
                    background: rgba(255,255,255,0.05);
                }
                .lead-submit { justify-content: center; margin-top: 8px; }
                .lead-submit:disabled { opacity: 0.6; cursor: wait; transform: none; }
                .lead-done { text-align: center; padding: 32px 0; animation: fadeIn 0.5s ease; }
                .lead-done-title { font-family: var(--fh); font-size: 20px; font-weight: 600; margin-bottom: 10px; }
                .lead-done-sub { font-size: 14px; color: rgba(245,240,235,0.45); font-weight: 300; }

                .site-footer {
                    padding: 28px 32px; border-top: 1px solid rgba(255,255,255,0.04);
                    display: flex; flex-direction: column; align-items: center;
                    gap: 16px; text-align: center;
                }
                .footer-brand {
                    font-family: var(--fh); font-size: 12px; font-weight: 500;
                    letter-spacing: 2px; text-transform: uppercase;
                    color: rgba(245,240,235,0.45);
                }
                .footer-links { display: flex; gap: 24px; align-items: center; }
                .footer-links a {
                    color: rgba(245,240,235,0.25); font-size: 11px; letter-spacing: 1px;
                    text-decoration: none; transition: color 0.3s; display: flex;
                }
                .footer-links a:hover { color: rgba(245,240,235,0.6); }
                .footer-links i { font-size: 16px; }
                .footer-note { font-size: 11px; color: rgba(245,240,235,0.25); letter-spacing: 0.5px; }
            "#}</style>

            <NavBar />

            <section
                id="hero"
                style="min-height: 100vh; display: flex; flex-direction: column; justify-content: center; padding: 120px 0 60px; position: relative;"
            >
                <div style={orb_style}></div>
                <div style="padding: 0 32px; max-width: 1100px; margin: 0 auto; width: 100%; text-align: center;">
                    <div style="animation: fadeIn 0.8s ease 0.2s both;">
                        <div style="font-family: var(--fh); font-size: 11px; font-weight: 500; letter-spacing: 4px; text-transform: uppercase; color: rgba(245,240,235,0.45); margin-bottom: 32px;">
                            {"Ben Lewis Studios"}
                        </div>
                    </div>
                    <h1 style="font-family: var(--fh); font-size: clamp(36px, 7vw, 76px); font-weight: 700; line-height: 1.05; max-width: 800px; margin: 0 auto; animation: fadeUp 0.9s ease 0.35s both; letter-spacing: -1px;">
                        {"Your brand deserves better content."}<br />
                        <span style="color: rgba(245,240,235,0.45); font-weight: 400;">{"We make it effortless."}</span>
                    </h1>
                    <p style="font-size: 16px; line-height: 1.75; color: rgba(245,240,235,0.45); max-width: 540px; margin: 28px auto 0; font-weight: 300; animation: fadeUp 0.9s ease 0.55s both;">
                        {"Editorial photography. UGC videos. Product shots. Cinematic reels. One partner. Unlimited output."}
                    </p>
                </div>
                <div style="margin-top: 52px; animation: fadeUp 0.9s ease 0.7s both;">
                    <Carousel center_index={Some(HERO_PRIORITY_INDEX)}>
                        { for HERO_ITEMS.iter().enumerate().map(|(index, item)| {
                            render_gallery_card(item, hero_activation(index))
                        })}
                    </Carousel>
                </div>
                <div style="padding: 0 32px; margin-top: 40px; animation: fadeUp 0.9s ease 0.85s both; text-align: center;">
                    <a href={config::CALENDLY_URL} class="btn-primary">{"Book a Discovery Call"}</a>
                </div>
                <div style="position: absolute; bottom: 28px; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; align-items: center; gap: 6px; animation: fadeIn 1s ease 1.2s both;">
                    <span style="font-size: 9px; letter-spacing: 3px; text-transform: uppercase; color: rgba(245,240,235,0.25);">{"Scroll"}</span>
                    <div style="width: 1px; height: 32px; background: linear-gradient(to bottom, rgba(245,240,235,0.3), transparent);"></div>
                </div>
            </section>

            <section id="work" style="padding: 80px 0 100px;">
                <div style="padding: 0 32px; max-width: 1100px; margin: 0 auto; text-align: center;">
                    <Reveal>
                        <div class="section-label">{"The Work"}</div>
                        <h2 class="section-heading">{"Selected "}<span class="thin">{"pieces"}</span></h2>
                    </Reveal>
                </div>
                <Reveal>
                    <Carousel card_width={280} center_index={Some(WORK_ITEMS.len() / 2)}>
                        { for WORK_ITEMS.iter().map(|item| {
                            render_gallery_card(item, ActivationMode::Lazy)
                        })}
                    </Carousel>
                </Reveal>
                <Reveal>
                    <div style="text-align: center; margin-top: 40px;">
                        <a href={config::CALENDLY_URL} class="btn-ghost">{"Like what you see? Let's talk"}</a>
                    </div>
                </Reveal>
            </section>

            <section id="ugc" style="padding: 80px 0 100px;">
                <div style="padding: 0 32px; max-width: 1100px; margin: 0 auto; text-align: center;">
                    <Reveal>
                        <div class="section-label">{"UGC"}</div>
                        <h2 class="section-heading">{"Scroll-stopping "}<span class="thin">{"UGC"}</span></h2>
                    </Reveal>
                </div>
                <Reveal>
                    <Carousel card_width={260} center_index={Some(UGC_ITEMS.len() / 2)}>
                        { for UGC_ITEMS.iter().map(|item| {
                            render_gallery_card(item, ActivationMode::Lazy)
                        })}
                    </Carousel>
                </Reveal>
                <Reveal>
                    <div style="text-align: center; margin-top: 40px;">
                        <a href={config::CALENDLY_URL} class="btn-ghost">{"Get this for your brand"}</a>
                    </div>
                </Reveal>
            </section>

            <section class="section" style="text-align: center;">
                <Reveal>
                    <div class="section-label">{"Editorial & Product"}</div>
                    <h2 class="section-heading">{"The full "}<span class="thin">{"content ecosystem"}</span></h2>
                </Reveal>
                <div class="editorial-grid">
                    { for EDITORIAL_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <Reveal delay={index as f32 * 0.05}>
                            <div class="grid-tile">
                                <MediaSlot
                                    item={*item}
                                    aspect_ratio="4/5"
                                    border_radius="0px"
                                />
                            </div>
                        </Reveal>
                    })}
                </div>
                <Reveal>
                    <div style="margin-top: 48px;">
                        <a href={config::CALENDLY_URL} class="btn-primary">{"Book a Discovery Call"}</a>
                    </div>
                </Reveal>
            </section>

            <section style="padding: 120px 24px; text-align: center; background: linear-gradient(180deg, #0A0A0A 0%, #0e0e0e 50%, #0A0A0A 100%);">
                <Reveal>
                    <div style="max-width: 700px; margin: 0 auto;">
                        <div class="section-label" style="margin-bottom: 32px;">{"What This Replaces"}</div>
                        <h2 style="font-family: var(--fh); font-size: clamp(26px, 4.5vw, 48px); font-weight: 700; line-height: 1.12; margin-bottom: 32px;">
                            {"Your current content production costs"}
                            <span style="display: block; color: #F5F0EB; margin-top: 8px;">{"£19,000–£45,000 per month."}</span>
                        </h2>
                        <p style="font-size: 15px; line-height: 1.8; color: rgba(245,240,235,0.45); max-width: 480px; margin: 0 auto 12px; font-weight: 300;">
                            {"Photographers. Videographers. UGC creators. Content agencies. Studio hire. Model fees."}
                        </p>
                        <p style="font-family: var(--fh); font-size: clamp(22px, 3.5vw, 36px); font-weight: 600; color: #F5F0EB; margin-top: 40px; line-height: 1.2;">
                            {"We replace all of it."}
                        </p>
                        <p style="font-size: 15px; color: rgba(245,240,235,0.45); font-weight: 300; margin-top: 16px;">
                            {"One partner. Campaign-grade output. A fraction of the cost."}
                        </p>
                        <div style="margin-top: 44px;">
                            <a href={config::CALENDLY_URL} class="btn-primary">{"See How It Works"}</a>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section" style="text-align: center;">
                <Reveal>
                    <div class="section-label">{"Process"}</div>
                    <h2 class="section-heading">{"How it "}<span class="thin">{"works"}</span></h2>
                </Reveal>
                <Reveal delay={0.1}>
                    <div class="step-row">
                        { render_step("01", "Brand Immersion", "We learn your brand, your audience, your aesthetic. We study your products, your competitors, and your content gaps.") }
                        { render_step("02", "Content Production", "We produce a complete monthly content library — editorial stills, UGC videos, product shots, and cinematic reels — all tailored to your brand.") }
                        { render_step("03", "Deliver & Scale", "You receive ready-to-post content every month. We optimise based on performance and scale what works.") }
                    </div>
                </Reveal>
                <Reveal>
                    <div style="margin-top: 48px;">
                        <a href={config::CALENDLY_URL} class="btn-ghost">{"Book a Discovery Call"}</a>
                    </div>
                </Reveal>
            </section>

            <section class="section" style="padding-top: 60px;">
                <Reveal>
                    <div class="testimonial-card">
                        <div class="section-label" style="margin-bottom: 28px;">{"What Clients Say"}</div>
                        <div style="max-width: 480px; margin: 0 auto 28px;">
                            <MediaSlot
                                item={TESTIMONIAL_SLOT}
                                aspect_ratio="16/9"
                                border_radius="8px"
                            />
                        </div>
                        <p style="font-family: var(--fh); font-size: 18px; font-style: italic; line-height: 1.65; color: rgba(245,240,235,0.45); max-width: 440px; margin: 0 auto 16px; font-weight: 400;">
                            {"\"Video testimonial coming soon.\""}
                        </p>
                        <div style="font-size: 11px; letter-spacing: 2px; text-transform: uppercase; color: rgba(245,240,235,0.25);">
                            {"— Client Name, Founder of Brand"}
                        </div>
                    </div>
                </Reveal>
            </section>

            <section id="about" class="section" style="text-align: center;">
                <Reveal>
                    <div style="max-width: 600px; margin: 0 auto;">
                        <div style="width: 200px; margin: 0 auto 36px;">
                            <MediaSlot item={PORTRAIT_SLOT} aspect_ratio="4/5" />
                        </div>
                        <div class="section-label">{"About"}</div>
                        <h2 style="font-family: var(--fh); font-size: clamp(24px, 3.5vw, 36px); font-weight: 600; line-height: 1.2; margin-bottom: 20px;">
                            {"Ben Lewis"}
                        </h2>
                        <p style="font-size: 15px; line-height: 1.8; color: rgba(245,240,235,0.45); font-weight: 300; max-width: 480px; margin: 0 auto;">
                            {"I build AI-powered content production systems that give DTC beauty brands campaign-grade content without the traditional production overhead. My work spans editorial fashion, skincare campaigns, and cinematic brand films."}
                        </p>
                        <p style="font-size: 15px; line-height: 1.8; color: rgba(245,240,235,0.45); font-weight: 300; max-width: 480px; margin: 16px auto 0;">
                            {"One partner replaces an entire production team — photographers, videographers, UGC creators, stylists, and studio sessions. You get the output. I handle the rest."}
                        </p>
                        <div style="margin-top: 36px;">
                            <a href={config::CALENDLY_URL} class="btn-primary">{"Book a Discovery Call"}</a>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section id="contact" class="section" style="text-align: center; padding-top: 40px;">
                <Reveal>
                    <div class="section-label">{"Start The Conversation"}</div>
                    <h2 class="section-heading">{"Tell us about "}<span class="thin">{"your brand"}</span></h2>
                    <p style="font-size: 15px; color: rgba(245,240,235,0.45); font-weight: 300; max-width: 420px; margin: -24px auto 40px; line-height: 1.7;">
                        {"Three questions, thirty seconds. We come back with ideas, not a sales script."}
                    </p>
                    <LeadForm />
                </Reveal>
            </section>

            <section style="padding: 120px 24px; text-align: center; background: linear-gradient(180deg, #0A0A0A 0%, #0d0d0d 100%);">
                <Reveal>
                    <h2 style="font-family: var(--fh); font-size: clamp(28px, 5vw, 52px); font-weight: 700; line-height: 1.1; max-width: 700px; margin: 0 auto 28px;">
                        {"Ready to replace your entire content production"}
                        <span style="display: block; font-weight: 400; color: rgba(245,240,235,0.45); margin-top: 4px;">{"with one partner?"}</span>
                    </h2>
                    <p style="font-size: 15px; color: rgba(245,240,235,0.45); font-weight: 300; max-width: 420px; margin: 0 auto 44px; line-height: 1.7;">
                        {"15-minute discovery call. No pitch deck. Just a conversation about your content and how to fix it."}
                    </p>
                    <div style="display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;">
                        <a href={config::CALENDLY_URL} class="btn-primary">{"Book a Discovery Call"}</a>
                        <a href={config::LINKEDIN_URL} class="btn-ghost">{"Connect on LinkedIn"}</a>
                    </div>
                </Reveal>
            </section>

            <footer class="site-footer">
                <div class="footer-brand">{"Ben Lewis Studios"}</div>
                <div class="footer-links">
                    <a href={config::CALENDLY_URL} target="_blank" rel="noopener" aria-label="Book a call">
                        <i class="fa-regular fa-calendar"></i>
                    </a>
                    <a href={config::LINKEDIN_URL} target="_blank" rel="noopener" aria-label="LinkedIn">
                        <i class="fa-brands fa-linkedin-in"></i>
                    </a>
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener" aria-label="Instagram">
                        <i class="fa-brands fa-instagram"></i>
                    </a>
                    <a href={config::YOUTUBE_URL} target="_blank" rel="noopener" aria-label="YouTube">
                        <i class="fa-brands fa-youtube"></i>
                    </a>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </div>
                <div class="footer-note">{"© 2026 Ben Lewis Studios"}</div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_center_races_ahead_of_its_neighbors() {
        assert_eq!(
            hero_activation(HERO_PRIORITY_INDEX),
            ActivationMode::Immediate { delay_ms: 0 }
        );
        for index in (0..HERO_ITEMS.len()).filter(|i| *i != HERO_PRIORITY_INDEX) {
            assert_eq!(
                hero_activation(index),
                ActivationMode::Deferred { delay_ms: 1500 }
            );
        }
    }
}
