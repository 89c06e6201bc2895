use gloo_console::log;
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

/// Subject line stamped on the forwarded mail, and the relay-side
/// formatting template.
const RELAY_SUBJECT: &str = "New enquiry — Ben Lewis Studios";
const RELAY_TEMPLATE: &str = "table";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
}

/// A submission may start only when none is in flight and none has
/// completed. The page never re-arms the form without a remount.
pub fn can_submit(status: SubmitStatus) -> bool {
    status == SubmitStatus::Idle
}

/// Lead answers plus the relay directives, serialized with the exact
/// field names the relay forwards verbatim.
#[derive(Debug, Serialize)]
pub struct LeadPayload {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "_subject")]
    subject: &'static str,
    #[serde(rename = "_template")]
    template: &'static str,
}

impl LeadPayload {
    pub fn new(first_name: String, brand: String, email: String) -> Self {
        Self {
            first_name,
            brand,
            email,
            subject: RELAY_SUBJECT,
            template: RELAY_TEMPLATE,
        }
    }
}

/// Pre-filled mail-compose URL used when the relay cannot take the lead.
/// Every answer survives into the mail body so nothing is lost.
pub fn mailto_fallback_url(payload: &LeadPayload) -> String {
    let body = format!(
        "Hi Ben,\n\nFirst name: {}\nBrand: {}\nEmail: {}\n\nKeen to talk about content production.",
        payload.first_name, payload.brand, payload.email,
    );
    format!(
        "mailto:{}?subject={}&body={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(RELAY_SUBJECT),
        urlencoding::encode(&body),
    )
}

fn open_mail_compose(payload: &LeadPayload) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(&mailto_fallback_url(payload)).is_err() {
            log!("mail compose navigation failed");
        }
    }
}

/// Lead capture form. Tries the relay first and falls back to the
/// visitor's own mail client; both paths land on the same confirmation.
#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let first_name = use_state(String::new);
    let brand = use_state(String::new);
    let email = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);

    let on_first_name = {
        let first_name = first_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            first_name.set(input.value());
        })
    };
    let on_brand = {
        let brand = brand.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            brand.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let first_name = first_name.clone();
        let brand = brand.clone();
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !can_submit(*status) {
                return;
            }
            status.set(SubmitStatus::Sending);

            let payload = LeadPayload::new(
                (*first_name).clone(),
                (*brand).clone(),
                (*email).clone(),
            );
            let status = status.clone();
            spawn_local(async move {
                let delivered = match Request::post(config::LEAD_RELAY_URL).json(&payload) {
                    Ok(request) => match request.send().await {
                        Ok(response) if response.ok() => {
                            log!("lead relay accepted the submission");
                            true
                        }
                        Ok(response) => {
                            log!(format!(
                                "lead relay refused the submission: {}",
                                response.status()
                            ));
                            false
                        }
                        Err(err) => {
                            log!(format!("lead relay unreachable: {}", err));
                            false
                        }
                    },
                    Err(err) => {
                        log!(format!("lead payload did not serialize: {}", err));
                        false
                    }
                };
                if !delivered {
                    open_mail_compose(&payload);
                }
                status.set(SubmitStatus::Sent);
            });
        })
    };

    html! {
        if *status == SubmitStatus::Sent {
            <div class="lead-done">
                <p class="lead-done-title">{"Thank you. Your enquiry is on its way."}</p>
                <p class="lead-done-sub">{"We reply to every brand within one working day."}</p>
            </div>
        } else {
            <form class="lead-form" onsubmit={onsubmit}>
                <input
                    class="lead-input"
                    type="text"
                    name="first_name"
                    placeholder="First name"
                    required=true
                    value={(*first_name).clone()}
                    oninput={on_first_name}
                />
                <input
                    class="lead-input"
                    type="text"
                    name="brand"
                    placeholder="Brand"
                    required=true
                    value={(*brand).clone()}
                    oninput={on_brand}
                />
                <input
                    class="lead-input"
                    type="email"
                    name="email"
                    placeholder="Email"
                    required=true
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <button class="btn-primary lead-submit" type="submit" disabled={*status == SubmitStatus::Sending}>
                    { if *status == SubmitStatus::Sending { "Sending..." } else { "Send Enquiry" } }
                </button>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_the_relay_field_names() {
        let payload = LeadPayload::new("Ava".into(), "Lumière".into(), "ava@brand.com".into());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["First Name"], "Ava");
        assert_eq!(value["Brand"], "Lumière");
        assert_eq!(value["Email"], "ava@brand.com");
        assert_eq!(value["_template"], "table");
        assert!(value["_subject"].as_str().unwrap().contains("Ben Lewis Studios"));
    }

    #[test]
    fn mailto_fallback_carries_every_answer() {
        let payload = LeadPayload::new(
            "Ava Chen".into(),
            "Glow Theory".into(),
            "ava@glowtheory.com".into(),
        );
        let url = mailto_fallback_url(&payload);
        assert!(url.starts_with("mailto:ben@benlewisltd.com?"));
        assert!(url.contains(&*urlencoding::encode("Ava Chen")));
        assert!(url.contains(&*urlencoding::encode("Glow Theory")));
        assert!(url.contains(&*urlencoding::encode("ava@glowtheory.com")));
    }

    #[test]
    fn submission_is_single_shot() {
        assert!(can_submit(SubmitStatus::Idle));
        assert!(!can_submit(SubmitStatus::Sending));
        assert!(!can_submit(SubmitStatus::Sent));
    }
}
