use dioxus::prelude::*;

use crate::config::SiteConfig;

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const EMAILJS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/@emailjs/browser@4/dist/email.min.js";

pub const SENT_NOTICE: &str = "Your message has been sent successfully!";
pub const FAILED_NOTICE: &str = "Failed to send the message. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    Failed(String),
}

/// Single in-flight submission at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionGuard {
    #[default]
    Idle,
    Sending,
}

impl SubmissionGuard {
    pub fn begin(&mut self) -> Result<(), String> {
        if *self == SubmissionGuard::Sending {
            return Err("a message is already being sent".to_string());
        }
        *self = SubmissionGuard::Sending;
        Ok(())
    }

    /// Releases the guard and returns the notice to show the visitor.
    pub fn finish(&mut self, outcome: &SendOutcome) -> &'static str {
        *self = SubmissionGuard::Idle;
        match outcome {
            SendOutcome::Delivered => SENT_NOTICE,
            SendOutcome::Failed(_) => FAILED_NOTICE,
        }
    }

    pub fn is_sending(&self) -> bool {
        *self == SubmissionGuard::Sending
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<SiteConfig>();
    let mut form = use_signal(ContactForm::default);
    let guard = use_signal(SubmissionGuard::default);

    #[cfg(target_arch = "wasm32")]
    {
        let public_key = config.emailjs_public_key.clone();
        use_hook(move || {
            spawn(async move {
                if let Err(message) = init_emailjs(&public_key).await {
                    tracing::warn!("contact: {message}");
                }
            })
        });
    }

    let sending = guard().is_sending();

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Get In Touch" }
            form {
                id: CONTACT_FORM_ID,
                class: "contact-form",
                "data-aos": "fade-up",
                onsubmit: move |event| {
                    event.prevent_default();
                    let mut guard = guard;
                    if let Err(message) = guard.write().begin() {
                        tracing::debug!("contact: {message}");
                        return;
                    }
                    let mut form = form;
                    let service_id = config.emailjs_service_id.clone();
                    let template_id = config.emailjs_template_id.clone();
                    spawn(async move {
                        let outcome = send_form(&service_id, &template_id).await;
                        if let SendOutcome::Failed(detail) = &outcome {
                            tracing::error!("EmailJS Error: {detail}");
                        }
                        let notice = guard.write().finish(&outcome);
                        if outcome == SendOutcome::Delivered {
                            form.set(ContactForm::default());
                        }
                        alert(notice);
                    });
                },
                div { class: "form-row",
                    input {
                        r#type: "text",
                        name: "name",
                        placeholder: "Your Name",
                        required: true,
                        value: "{form().name}",
                        oninput: move |event| form.write().name = event.value(),
                    }
                    input {
                        r#type: "email",
                        name: "email",
                        placeholder: "Your Email",
                        required: true,
                        value: "{form().email}",
                        oninput: move |event| form.write().email = event.value(),
                    }
                }
                input {
                    r#type: "text",
                    name: "subject",
                    placeholder: "Subject",
                    value: "{form().subject}",
                    oninput: move |event| form.write().subject = event.value(),
                }
                textarea {
                    name: "message",
                    rows: "6",
                    placeholder: "Your Message",
                    required: true,
                    value: "{form().message}",
                    oninput: move |event| form.write().message = event.value(),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: sending,
                    "{guard().button_label()}"
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn init_emailjs(public_key: &str) -> Result<(), String> {
    use crate::bridge::{call_method, ensure_script, global};

    ensure_script("emailjs", EMAILJS_SCRIPT).await?;
    let emailjs = global("emailjs").ok_or("emailjs missing")?;
    call_method(&emailjs, "init", &[wasm_bindgen::JsValue::from_str(public_key)])?;
    tracing::debug!("contact: emailjs ready");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn send_form(service_id: &str, template_id: &str) -> SendOutcome {
    use crate::bridge::{call_method, global};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let Some(emailjs) = global("emailjs") else {
        return SendOutcome::Failed("emailjs unavailable".to_string());
    };
    let Some(form) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONTACT_FORM_ID))
    else {
        return SendOutcome::Failed("contact form missing".to_string());
    };
    let pending = match call_method(
        &emailjs,
        "sendForm",
        &[
            JsValue::from_str(service_id),
            JsValue::from_str(template_id),
            form.into(),
        ],
    ) {
        Ok(pending) => pending,
        Err(message) => return SendOutcome::Failed(message),
    };
    let Ok(promise) = pending.dyn_into::<js_sys::Promise>() else {
        return SendOutcome::Failed("sendForm returned no promise".to_string());
    };
    match JsFuture::from(promise).await {
        Ok(_) => SendOutcome::Delivered,
        Err(err) => SendOutcome::Failed(
            js_sys::JSON::stringify(&err)
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_else(|| format!("{err:?}")),
        ),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_form(_service_id: &str, _template_id: &str) -> SendOutcome {
    SendOutcome::Failed("emailjs requires a browser".to_string())
}

fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("contact: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlapping_submission_is_rejected() {
        let mut guard = SubmissionGuard::default();
        assert_eq!(guard.begin(), Ok(()));
        assert!(guard.begin().is_err());
        assert_eq!(guard.button_label(), "Sending...");
    }

    #[test]
    fn success_releases_guard_with_confirmation() {
        let mut guard = SubmissionGuard::default();
        guard.begin().unwrap();
        assert_eq!(guard.finish(&SendOutcome::Delivered), SENT_NOTICE);
        assert!(!guard.is_sending());
        assert_eq!(guard.button_label(), "Send Message");
    }

    #[test]
    fn failure_releases_guard_with_error_notice() {
        let mut guard = SubmissionGuard::default();
        guard.begin().unwrap();
        let outcome = SendOutcome::Failed("{\"status\":400}".to_string());
        assert_eq!(guard.finish(&outcome), FAILED_NOTICE);
        assert_eq!(guard.begin(), Ok(()));
    }
}
