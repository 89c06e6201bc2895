#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use studio_site::catalog::{EDITORIAL_ITEMS, HERO_ITEMS};
use studio_site::components::media_slot::{ActivationMode, MediaSlot};
use studio_site::config;
use studio_site::pages::landing::Landing;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_point() -> web_sys::Element {
    let document = document();
    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();
    mount
}

#[wasm_bindgen_test]
async fn landing_mounts_every_section() {
    let mount = mount_point();
    yew::Renderer::<Landing>::with_root(mount).render();
    sleep(Duration::ZERO).await;

    let document = document();
    for id in ["hero", "work", "ugc", "about", "contact"] {
        assert!(
            document.get_element_by_id(id).is_some(),
            "missing section #{id}"
        );
    }

    let text = document.body().unwrap().text_content().unwrap_or_default();
    assert!(text.contains("Ben Lewis Studios"));
    assert!(text.contains("Selected"));
    assert!(text.contains("Scroll-stopping"));
    assert!(text.contains("We replace all of it."));

    // Lead form fields and the outbound links the page promises.
    assert!(document
        .query_selector("input[name='first_name']")
        .unwrap()
        .is_some());
    assert!(document
        .query_selector("input[name='brand']")
        .unwrap()
        .is_some());
    assert!(document
        .query_selector("input[type='email']")
        .unwrap()
        .is_some());
    for href in [
        config::CALENDLY_URL,
        config::LINKEDIN_URL,
        config::INSTAGRAM_URL,
        config::YOUTUBE_URL,
    ] {
        assert!(
            document
                .query_selector(&format!("a[href='{href}']"))
                .unwrap()
                .is_some(),
            "missing outbound link {href}"
        );
    }
}

#[function_component(HeroTrio)]
fn hero_trio() -> Html {
    html! {
        <div id="trio">
            <MediaSlot
                item={HERO_ITEMS[0]}
                activation={ActivationMode::Deferred { delay_ms: 1500 }}
            />
            <MediaSlot
                item={HERO_ITEMS[1]}
                activation={ActivationMode::Immediate { delay_ms: 0 }}
            />
            <MediaSlot
                item={HERO_ITEMS[2]}
                activation={ActivationMode::Deferred { delay_ms: 1500 }}
            />
        </div>
    }
}

#[wasm_bindgen_test]
async fn priority_card_fetches_before_its_neighbors() {
    let mount = mount_point();
    yew::Renderer::<HeroTrio>::with_root(mount).render();

    // Well inside the neighbor delay: only the priority card has
    // started fetching.
    sleep(Duration::from_millis(100)).await;
    let early = document()
        .query_selector_all("#trio video, #trio img")
        .unwrap();
    assert_eq!(early.length(), 1);

    // Past the delay the whole row is live.
    sleep(Duration::from_millis(1700)).await;
    let late = document()
        .query_selector_all("#trio video, #trio img")
        .unwrap();
    assert_eq!(late.length(), 3);
}

#[function_component(BelowFold)]
fn below_fold() -> Html {
    html! {
        <div>
            <div style="height: 400vh;"></div>
            <div id="lazy-probe">
                <MediaSlot item={EDITORIAL_ITEMS[0]} />
            </div>
        </div>
    }
}

#[wasm_bindgen_test]
async fn lazy_slot_waits_for_the_viewport() {
    let mount = mount_point();
    yew::Renderer::<BelowFold>::with_root(mount).render();

    sleep(Duration::from_millis(150)).await;
    assert!(document()
        .query_selector("#lazy-probe img")
        .unwrap()
        .is_none());

    // Scrolling the probe into range lets the fetch start.
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 1.0e5);
    sleep(Duration::from_millis(400)).await;
    assert!(document()
        .query_selector("#lazy-probe img")
        .unwrap()
        .is_some());
}
