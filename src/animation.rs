use serde::Serialize;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::bridge::{call_method, ensure_script, global, set_property, to_js};

pub const AOS_SCRIPT: &str = "https://unpkg.com/aos@2.3.4/dist/aos.js";
pub const AOS_STYLES: &str = "https://unpkg.com/aos@2.3.4/dist/aos.css";
pub const GSAP_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/gsap.min.js";
pub const SCROLL_TRIGGER_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/ScrollTrigger.min.js";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AosConfig {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
}

pub const AOS_CONFIG: AosConfig = AosConfig {
    duration: 1000,
    once: true,
    offset: 100,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position_x: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTrigger>,
}

/// `trigger` is attached separately since it is a DOM node.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScrollTrigger {
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub scrub: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealSide {
    Left,
    Right,
}

impl RevealSide {
    pub fn selector(self) -> &'static str {
        match self {
            RevealSide::Left => ".reveal-left",
            RevealSide::Right => ".reveal-right",
        }
    }

    fn offset(self) -> f64 {
        match self {
            RevealSide::Left => -24.0,
            RevealSide::Right => 24.0,
        }
    }

    pub fn from_state(self) -> Tween {
        Tween {
            opacity: Some(0.0),
            x: Some(self.offset()),
            ..Tween::default()
        }
    }

    pub fn to_state(self) -> Tween {
        Tween {
            opacity: Some(1.0),
            x: Some(0.0),
            duration: Some(0.9),
            ease: Some("power3.out"),
            scroll_trigger: Some(ScrollTrigger {
                start: "top 80%",
                ..ScrollTrigger::default()
            }),
            ..Tween::default()
        }
    }
}

pub fn logo_intro() -> Tween {
    Tween {
        opacity: Some(1.0),
        y: Some(0.0),
        duration: Some(1.0),
        delay: Some(0.2),
        ease: Some("power3.out"),
        ..Tween::default()
    }
}

pub const PARALLAX_LAYERS: &[(&str, &str)] = &[
    (".layer-back", "-20%"),
    (".layer-mid", "-35%"),
    (".layer-front", "-50%"),
];

pub fn parallax_timeline() -> Tween {
    Tween {
        scroll_trigger: Some(ScrollTrigger {
            start: "top bottom",
            end: Some("bottom top"),
            scrub: true,
        }),
        ..Tween::default()
    }
}

pub fn parallax_layer(position: &'static str) -> Tween {
    Tween {
        background_position_x: Some(position),
        ease: Some("none"),
        ..Tween::default()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn init_aos() -> Result<(), String> {
    ensure_script("AOS", AOS_SCRIPT).await?;
    let aos = global("AOS").ok_or("AOS missing")?;
    call_method(&aos, "init", &[to_js(&AOS_CONFIG)?])?;
    tracing::debug!("animation: AOS ready");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn init_landing_timelines() -> Result<(), String> {
    ensure_script("gsap", GSAP_SCRIPT).await?;
    ensure_script("ScrollTrigger", SCROLL_TRIGGER_SCRIPT).await?;
    let gsap = global("gsap").ok_or("gsap missing")?;
    let scroll_trigger = global("ScrollTrigger").ok_or("ScrollTrigger missing")?;
    call_method(&gsap, "registerPlugin", &[scroll_trigger])?;

    call_method(
        &gsap,
        "to",
        &[JsValue::from_str(".gta-logo"), to_js(&logo_intro())?],
    )?;

    for side in [RevealSide::Left, RevealSide::Right] {
        for element in select_all(side.selector()) {
            let to = to_js(&side.to_state())?;
            attach_trigger(&to, &element)?;
            call_method(&gsap, "fromTo", &[element, to_js(&side.from_state())?, to])?;
        }
    }

    let Some(divider) = select_all(".scene-divider").into_iter().next() else {
        return Ok(());
    };
    let options = to_js(&parallax_timeline())?;
    attach_trigger(&options, &divider)?;
    let timeline = call_method(&gsap, "timeline", &[options])?;
    for &(selector, position) in PARALLAX_LAYERS {
        let layer = divider
            .dyn_ref::<web_sys::Element>()
            .and_then(|element| element.query_selector(selector).ok().flatten());
        if let Some(layer) = layer {
            call_method(
                &timeline,
                "to",
                &[layer.into(), to_js(&parallax_layer(position))?, JsValue::from_f64(0.0)],
            )?;
        }
    }
    tracing::debug!("animation: GSAP timelines registered");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn attach_trigger(options: &JsValue, element: &JsValue) -> Result<(), String> {
    let trigger = js_sys::Reflect::get(options, &"scrollTrigger".into())
        .map_err(|_| "scrollTrigger missing".to_string())?;
    set_property(&trigger, "trigger", element)
}

#[cfg(target_arch = "wasm32")]
fn select_all(selector: &str) -> Vec<JsValue> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .map(Into::into)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::to_json;
    use pretty_assertions::assert_eq;

    #[test]
    fn aos_config_matches_library_options() {
        assert_eq!(
            to_json(&AOS_CONFIG).unwrap(),
            r#"{"duration":1000,"once":true,"offset":100}"#
        );
    }

    #[test]
    fn reveal_tweens_slide_in_from_their_side() {
        assert_eq!(
            to_json(&RevealSide::Left.from_state()).unwrap(),
            r#"{"opacity":0.0,"x":-24.0}"#
        );
        assert_eq!(
            to_json(&RevealSide::Right.to_state()).unwrap(),
            r#"{"opacity":1.0,"x":0.0,"duration":0.9,"ease":"power3.out","scrollTrigger":{"start":"top 80%"}}"#
        );
    }

    #[test]
    fn parallax_scrubs_across_the_divider() {
        assert_eq!(
            to_json(&parallax_timeline()).unwrap(),
            r#"{"scrollTrigger":{"start":"top bottom","end":"bottom top","scrub":true}}"#
        );
        assert_eq!(
            to_json(&parallax_layer("-35%")).unwrap(),
            r#"{"ease":"none","backgroundPositionX":"-35%"}"#
        );
    }
}
