//! Mirrors scene events onto the host document

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlElement, Window};
use widget_core::{
    Confetti, Control, ElementIds, Entity, Heart, Params, Placement, SceneEvent, Surface, Vec2,
    WidgetError, WidgetResult,
};

use crate::style;

pub struct Dom {
    window: Window,
    document: Document,
    body: HtmlElement,
    accept: HtmlElement,
    evasive: HtmlElement,
    prompt: HtmlElement,
    success: HtmlElement,
    nodes: HashMap<Entity, HtmlElement>, // live hearts and confetti
}

impl Dom {
    /// Look up every required element, failing on the first one missing
    pub fn attach(window: Window, ids: &ElementIds) -> WidgetResult<Self> {
        let document = window
            .document()
            .ok_or_else(|| WidgetError::Host("window has no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| WidgetError::Host("document has no body".to_string()))?;

        Ok(Self {
            accept: lookup(&document, Control::Accept.role(), &ids.accept)?,
            evasive: lookup(&document, Control::Evasive.role(), &ids.evasive)?,
            prompt: lookup(&document, "prompt", &ids.prompt)?,
            success: lookup(&document, "success", &ids.success)?,
            window,
            document,
            body,
            nodes: HashMap::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Event target for a control's listeners
    pub fn target(&self, control: Control) -> EventTarget {
        match control {
            Control::Document => self.document.clone().into(),
            Control::Accept => self.accept.clone().into(),
            Control::Evasive => self.evasive.clone().into(),
        }
    }

    pub fn apply(&mut self, event: &SceneEvent) -> Result<(), JsValue> {
        match event {
            SceneEvent::HeartSpawned { entity, heart } => self.spawn_heart(*entity, heart),
            SceneEvent::ConfettiSpawned { entity, confetti } => {
                self.spawn_confetti(*entity, confetti)
            }
            SceneEvent::ConfettiLaunched {
                entity,
                rotation_deg,
            } => self.launch_confetti(*entity, *rotation_deg),
            SceneEvent::Removed { entity, .. } => {
                if let Some(node) = self.nodes.remove(entity) {
                    node.remove();
                }
                Ok(())
            }
            SceneEvent::PromptHidden => self.prompt.style().set_property("display", "none"),
            SceneEvent::SuccessShown => self.success.class_list().remove_1(style::HIDDEN_CLASS),
            SceneEvent::AcceptDisabled => self.accept.set_attribute("disabled", ""),
            SceneEvent::EvasiveMoved(placement) => self.move_evasive(placement),
        }
    }

    fn create_div(&self) -> Result<HtmlElement, JsValue> {
        self.document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)
    }

    fn spawn_heart(&mut self, entity: Entity, heart: &Heart) -> Result<(), JsValue> {
        let node = self.create_div()?;
        node.class_list().add_1(style::HEART_CLASS)?;
        node.set_text_content(Some(&heart.glyph));

        let css = node.style();
        css.set_property("left", &style::vw(heart.left_vw))?;
        css.set_property("animation-duration", &style::seconds(heart.duration_s))?;
        css.set_property("font-size", &style::px(heart.size_px))?;

        self.body.append_child(&node)?;
        self.nodes.insert(entity, node);
        Ok(())
    }

    fn spawn_confetti(&mut self, entity: Entity, confetti: &Confetti) -> Result<(), JsValue> {
        let node = self.create_div()?;

        let css = node.style();
        css.set_property("position", "fixed")?;
        css.set_property("left", &style::vw(confetti.left_vw))?;
        css.set_property("top", &style::px(Params::CONFETTI_START_TOP_PX))?;
        css.set_property("width", &style::px(Params::CONFETTI_SIZE_PX))?;
        css.set_property("height", &style::px(Params::CONFETTI_SIZE_PX))?;
        css.set_property("background-color", &confetti.color)?;
        css.set_property("transition", &style::confetti_transition(confetti))?;

        self.body.append_child(&node)?;
        self.nodes.insert(entity, node);
        Ok(())
    }

    fn launch_confetti(&self, entity: Entity, rotation_deg: f32) -> Result<(), JsValue> {
        let Some(node) = self.nodes.get(&entity) else {
            return Ok(());
        };
        let css = node.style();
        css.set_property("top", &style::confetti_target_top())?;
        css.set_property("transform", &style::rotate(rotation_deg))
    }

    fn move_evasive(&self, placement: &Placement) -> Result<(), JsValue> {
        let css = self.evasive.style();
        css.set_property("position", "fixed")?;
        css.set_property("left", &style::px(placement.pos.x))?;
        css.set_property("top", &style::px(placement.pos.y))?;
        css.set_property("transform", &style::rotate(placement.rotation_deg))
    }

    /// Drop any node the scene no longer tracks
    pub fn clear(&mut self) {
        for (_, node) in self.nodes.drain() {
            node.remove();
        }
    }
}

impl Surface for Dom {
    fn viewport(&self) -> Vec2 {
        let read = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Vec2::new(
            read(self.window.inner_width()),
            read(self.window.inner_height()),
        )
    }

    fn control_size(&self, control: Control) -> Vec2 {
        let element = match control {
            Control::Document => return Vec2::ZERO,
            Control::Accept => &self.accept,
            Control::Evasive => &self.evasive,
        };
        let rect = element.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }
}

fn lookup(document: &Document, role: &'static str, id: &str) -> WidgetResult<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| WidgetError::MissingElement {
            role,
            id: id.to_string(),
        })
}
