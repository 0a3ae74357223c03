//! DOM-backed [`HostSurface`].

use crate::elements::{role_selector, HostElements};
use orbitkit_core::{ControlAction, HostError, Rect, Size};
use orbitkit_diagram::{HostSurface, SceneFrame, ViewTransform};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub(crate) const NODE_CLASS: &str = "orbit-node";
pub(crate) const LANE_CLASS: &str = "orbit-lane";
pub(crate) const ACTIVE_CLASS: &str = "is-active";

pub(crate) fn js_error(err: JsValue) -> HostError {
    HostError::Operation {
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

/// Finds every `[data-orbit-*]` element under `root`, or none of them.
pub(crate) fn find_elements(root: &Element) -> Result<HostElements<Element>, HostError> {
    HostElements::resolve(|role| root.query_selector(&role_selector(role)).map_err(js_error))
}

fn html(el: Element, role: &str) -> Result<HtmlElement, HostError> {
    el.dyn_into::<HtmlElement>()
        .map_err(|_| HostError::missing(role))
}

fn set_px(el: &HtmlElement, property: &str, value: f64) -> Result<(), HostError> {
    el.style()
        .set_property(property, &format!("{value:.2}px"))
        .map_err(js_error)
}

fn place(el: &HtmlElement, rect: &Rect) -> Result<(), HostError> {
    set_px(el, "left", rect.x)?;
    set_px(el, "top", rect.y)?;
    set_px(el, "width", rect.width)?;
    set_px(el, "height", rect.height)
}

fn class_list(base: &str, active: bool) -> String {
    if active {
        format!("{base} {ACTIVE_CLASS}")
    } else {
        base.to_string()
    }
}

/// Element handles for one mounted diagram.
pub struct DomSurface {
    document: Document,
    viewport: HtmlElement,
    canvas: HtmlElement,
    hub: HtmlElement,
    title: Element,
    description: Element,
    controls: Vec<(Element, ControlAction)>,
    lanes: Element,
    nodes: HtmlElement,
    drawn: Option<SceneFrame>,
}

impl DomSurface {
    /// Creates the lane and node layers inside the canvas.
    ///
    /// Both layers are built before either is inserted, so a failure leaves
    /// the document unchanged.
    pub fn attach(document: Document, elements: HostElements<Element>) -> Result<Self, HostError> {
        let controls = elements
            .controls()
            .into_iter()
            .map(|(el, action)| (el.clone(), action))
            .collect();
        let HostElements {
            viewport,
            canvas,
            hub,
            title,
            description,
            ..
        } = elements;
        let viewport = html(viewport, "viewport")?;
        let canvas = html(canvas, "canvas")?;
        let hub = html(hub, "hub")?;

        let lanes = document
            .create_element_ns(Some(SVG_NS), "svg")
            .map_err(js_error)?;
        lanes
            .set_attribute("data-orbit-lanes", "")
            .map_err(js_error)?;
        lanes
            .set_attribute("aria-hidden", "true")
            .map_err(js_error)?;

        let nodes = html(document.create_element("div").map_err(js_error)?, "nodes")?;
        nodes
            .set_attribute("data-orbit-nodes", "")
            .map_err(js_error)?;

        canvas.prepend_with_node_1(&lanes).map_err(js_error)?;
        if let Err(e) = canvas.append_child(&nodes) {
            lanes.remove();
            return Err(js_error(e));
        }

        Ok(Self {
            document,
            viewport,
            canvas,
            hub,
            title,
            description,
            controls,
            lanes,
            nodes,
            drawn: None,
        })
    }

    pub fn viewport(&self) -> &HtmlElement {
        &self.viewport
    }

    pub fn canvas(&self) -> &HtmlElement {
        &self.canvas
    }

    pub fn controls(&self) -> &[(Element, ControlAction)] {
        &self.controls
    }

    fn draw_lanes(&self, frame: &SceneFrame) -> Result<(), HostError> {
        let width = format!("{:.0}", frame.canvas.width);
        let height = format!("{:.0}", frame.canvas.height);
        self.lanes.set_attribute("width", &width).map_err(js_error)?;
        self.lanes.set_attribute("height", &height).map_err(js_error)?;
        self.lanes
            .set_attribute("viewBox", &format!("0 0 {width} {height}"))
            .map_err(js_error)?;
        self.lanes.set_inner_html("");

        for lane in &frame.lanes {
            let path = self
                .document
                .create_element_ns(Some(SVG_NS), "path")
                .map_err(js_error)?;
            path.set_attribute("d", &lane.path).map_err(js_error)?;
            path.set_attribute("class", &class_list(LANE_CLASS, lane.active))
                .map_err(js_error)?;
            path.set_attribute("data-feature-id", &lane.feature_id)
                .map_err(js_error)?;
            self.lanes.append_child(&path).map_err(js_error)?;
        }
        Ok(())
    }

    fn draw_nodes(&self, frame: &SceneFrame) -> Result<(), HostError> {
        self.nodes.set_inner_html("");
        for node in &frame.nodes {
            let button = html(
                self.document.create_element("button").map_err(js_error)?,
                "node",
            )?;
            button.set_attribute("type", "button").map_err(js_error)?;
            button
                .set_attribute("data-feature-id", &node.feature_id)
                .map_err(js_error)?;
            button
                .set_attribute("aria-pressed", node.aria_pressed())
                .map_err(js_error)?;
            button.set_class_name(&class_list(NODE_CLASS, node.active));
            button.set_text_content(Some(&node.label));
            place(&button, &node.rect)?;
            self.nodes.append_child(&button).map_err(js_error)?;
        }
        Ok(())
    }

    /// Restyles the existing node buttons and lane paths in place so focus
    /// stays on the activated button.
    fn restyle(&self, frame: &SceneFrame) -> Result<(), HostError> {
        let buttons = self.nodes.children();
        for (idx, node) in frame.nodes.iter().enumerate() {
            if let Some(button) = buttons.item(idx as u32) {
                button
                    .set_attribute("aria-pressed", node.aria_pressed())
                    .map_err(js_error)?;
                button.set_class_name(&class_list(NODE_CLASS, node.active));
            }
        }
        let paths = self.lanes.children();
        for (idx, lane) in frame.lanes.iter().enumerate() {
            if let Some(path) = paths.item(idx as u32) {
                path.set_attribute("class", &class_list(LANE_CLASS, lane.active))
                    .map_err(js_error)?;
            }
        }
        Ok(())
    }

    fn draw_detail(&self, frame: &SceneFrame) {
        let (label, text) = frame
            .detail
            .as_ref()
            .map(|d| (d.label.as_str(), d.description.as_str()))
            .unwrap_or(("", ""));
        self.title.set_text_content(Some(label));
        self.description.set_text_content(Some(text));
    }

    fn draw(&self, frame: &SceneFrame) -> Result<(), HostError> {
        let unchanged = self
            .drawn
            .as_ref()
            .is_some_and(|prev| prev.same_geometry(frame));
        if unchanged {
            self.restyle(frame)?;
        } else {
            place(&self.hub, &frame.hub)?;
            self.draw_lanes(frame)?;
            self.draw_nodes(frame)?;
        }
        self.draw_detail(frame);
        Ok(())
    }
}

impl HostSurface for DomSurface {
    fn viewport_size(&self) -> Size {
        Size::new(
            self.viewport.client_width() as f64,
            self.viewport.client_height() as f64,
        )
    }

    fn canvas_size(&self) -> Size {
        Size::new(
            self.canvas.offset_width() as f64,
            self.canvas.offset_height() as f64,
        )
    }

    fn hub_size(&self) -> Size {
        Size::new(
            self.hub.offset_width() as f64,
            self.hub.offset_height() as f64,
        )
    }

    fn present_scene(&mut self, frame: &SceneFrame) {
        match self.draw(frame) {
            Ok(()) => self.drawn = Some(frame.clone()),
            Err(e) => {
                self.drawn = None;
                tracing::warn!("Failed to present scene: {}", e);
            }
        }
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        if let Err(e) = self
            .canvas
            .style()
            .set_property("transform", &transform.to_css())
        {
            tracing::warn!("Failed to apply view transform: {}", js_error(e));
        }
    }
}
