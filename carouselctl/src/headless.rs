//! In-memory document used to drive the engine without a renderer.
//!
//! Nodes live in an arena and refer to each other by [`NodeHandle`]. Sibling
//! insertion is a free function taking explicit references, so no node
//! ever holds a pointer back into the tree.

use std::collections::BTreeMap;

use carousel_contracts::prelude::*;

const CONTROL_CHAR_WIDTH: f32 = 8.0;
const CONTROL_PADDING: f32 = 16.0;
const CONTROL_HEIGHT: f32 = 24.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub size: TileMetrics,
    pub parent: Option<NodeHandle>,
    pub children: Vec<NodeHandle>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.set_class(class, true);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = TileMetrics::new(width, height);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn set_class(&mut self, class: &str, on: bool) {
        let present = self.has_class(class);
        if on && !present {
            self.classes.push(class.to_string());
        } else if !on && present {
            self.classes.retain(|c| c != class);
        }
    }

    fn set_attr(&mut self, name: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.attrs.insert(name.to_string(), value);
            }
            None => {
                self.attrs.remove(name);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct HeadlessDocument {
    nodes: Vec<Element>,
    events: Vec<LifecycleEvent>,
    focused: Option<NodeHandle>,
    click_region: Option<NodeHandle>,
    focus_bound: Vec<NodeHandle>,
    controls: Option<ControlHandles>,
    controls_wrapper: Option<NodeHandle>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, element: Element) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len() as u64);
        self.nodes.push(element);
        handle
    }

    pub fn get(&self, node: NodeHandle) -> Option<&Element> {
        self.nodes.get(node.get() as usize)
    }

    fn get_mut(&mut self, node: NodeHandle) -> Option<&mut Element> {
        self.nodes.get_mut(node.get() as usize)
    }

    pub fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.get(node).and_then(|element| element.parent)
    }

    pub fn children(&self, node: NodeHandle) -> &[NodeHandle] {
        self.get(node)
            .map(|element| element.children.as_slice())
            .unwrap_or_default()
    }

    pub fn append_child(&mut self, parent: NodeHandle, child: NodeHandle) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.get_mut(parent) {
            element.children.push(child);
        }
    }

    /// Remove `node` from its parent. The node stays in the arena.
    pub fn detach(&mut self, node: NodeHandle) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(element) = self.get_mut(parent) {
            element.children.retain(|child| *child != node);
        }
        if let Some(element) = self.get_mut(node) {
            element.parent = None;
        }
    }

    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    pub fn focused(&self) -> Option<NodeHandle> {
        self.focused
    }

    pub fn click_region(&self) -> Option<NodeHandle> {
        self.click_region
    }

    pub fn focus_bound(&self) -> &[NodeHandle] {
        &self.focus_bound
    }

    pub fn controls(&self) -> Option<ControlHandles> {
        self.controls
    }

    pub fn controls_wrapper(&self) -> Option<NodeHandle> {
        self.controls_wrapper
    }

    /// Class name a click on `node` is routed by, the way a delegated
    /// listener on the click region would see it.
    pub fn click_target_class(&self, node: NodeHandle) -> Option<&str> {
        let element = self.get(node)?;
        NavAction::ALL
            .into_iter()
            .map(NavAction::class_name)
            .find(|class| element.has_class(class))
    }

    fn control_element(action: NavAction, text: &str, enabled: bool) -> Element {
        let width = text.chars().count() as f32 * CONTROL_CHAR_WIDTH + CONTROL_PADDING;
        let element = if enabled {
            Element::new("button").with_class(action.class_name())
        } else {
            Element::new("span")
                .with_class(action.class_name())
                .with_class("disabled")
        };
        element.with_text(text).with_size(width, CONTROL_HEIGHT)
    }
}

/// Insert `node` into the parent of `reference`, directly after it.
/// Returns `false` when `reference` is detached.
pub fn insert_after(
    doc: &mut HeadlessDocument,
    reference: NodeHandle,
    node: NodeHandle,
) -> bool {
    insert_sibling(doc, reference, node, 1)
}

/// Insert `node` into the parent of `reference`, directly before it.
pub fn insert_before(
    doc: &mut HeadlessDocument,
    reference: NodeHandle,
    node: NodeHandle,
) -> bool {
    insert_sibling(doc, reference, node, 0)
}

fn insert_sibling(
    doc: &mut HeadlessDocument,
    reference: NodeHandle,
    node: NodeHandle,
    offset: usize,
) -> bool {
    if reference == node || doc.get(node).is_none() {
        return false;
    }
    let Some(parent) = doc.parent(reference) else {
        return false;
    };

    doc.detach(node);
    let Some(siblings) = doc.get_mut(parent).map(|element| &mut element.children) else {
        return false;
    };
    let Some(position) = siblings.iter().position(|child| *child == reference) else {
        return false;
    };
    siblings.insert(position + offset, node);
    if let Some(element) = doc.get_mut(node) {
        element.parent = Some(parent);
    }
    true
}

impl ContainerService for HeadlessDocument {
    fn wrap(&mut self, holder: NodeHandle) -> ContainerHandles {
        let region = match self.parent(holder) {
            Some(parent) => parent,
            None => {
                let root = self.create(Element::new("body"));
                self.append_child(root, holder);
                root
            }
        };

        let wrapper = self.create(Element::new("div").with_class("carousel-wrapper"));
        let viewport = self.create(Element::new("div").with_class("carousel-viewport"));
        insert_after(self, holder, wrapper);
        self.append_child(wrapper, viewport);
        self.append_child(viewport, holder);

        ContainerHandles {
            region,
            wrapper,
            viewport,
        }
    }

    fn apply_layout(
        &mut self,
        handles: ContainerHandles,
        tiles: &[NodeHandle],
        layout: &ContainerLayout,
    ) {
        if let Some(wrapper) = self.get_mut(handles.wrapper) {
            wrapper.set_attr("margin", Some(format!("{}px", layout.wrapper_margin)));
        }
        if let Some(viewport) = self.get_mut(handles.viewport) {
            viewport.set_attr("margin", Some(format!("{}px", layout.viewport_margin)));
            viewport.set_attr("width", Some(format!("{}px", layout.viewport_width)));
        }
        for tile in tiles {
            if let Some(element) = self.get_mut(*tile) {
                element.set_attr("width", Some(format!("{}%", layout.tile_width_percent)));
            }
        }
    }

    fn insert_controls(
        &mut self,
        handles: ContainerHandles,
        spec: &ControlsSpec,
    ) -> ControlHandles {
        let prev = self.create(Self::control_element(
            NavAction::PrevFrame,
            &spec.prev_text,
            spec.prev_enabled,
        ));
        let next = self.create(Self::control_element(
            NavAction::NextFrame,
            &spec.next_text,
            spec.next_enabled,
        ));

        match spec.placement {
            ControlsPlacement::Encapsulated => {
                let wrapper = self.create(Element::new("div").with_class("carousel-controls"));
                self.append_child(handles.wrapper, wrapper);
                self.append_child(wrapper, prev);
                self.append_child(wrapper, next);
                self.controls_wrapper = Some(wrapper);
            }
            ControlsPlacement::BeforeWrapper => {
                insert_before(self, handles.wrapper, prev);
                insert_before(self, handles.wrapper, next);
            }
        }

        let controls = ControlHandles { prev, next };
        self.controls = Some(controls);
        controls
    }

    fn position_controls(&mut self, position: ControlsPosition) {
        let Some(wrapper) = self.controls_wrapper else {
            return;
        };
        if let Some(element) = self.get_mut(wrapper) {
            element.set_attr("width", Some(format!("{}px", position.width)));
            element.set_attr("left", Some(format!("{}px", position.left)));
        }
    }

    fn swap_control(&mut self, action: NavAction, enabled: bool) {
        let Some(mut controls) = self.controls else {
            return;
        };
        let current = match action {
            NavAction::PrevFrame => controls.prev,
            NavAction::NextFrame => controls.next,
        };
        let text = self
            .get(current)
            .and_then(|element| element.text.clone())
            .unwrap_or_default();

        let replacement = self.create(Self::control_element(action, &text, enabled));
        insert_after(self, current, replacement);
        self.detach(current);

        match action {
            NavAction::PrevFrame => controls.prev = replacement,
            NavAction::NextFrame => controls.next = replacement,
        }
        self.controls = Some(controls);
    }
}

impl MeasurementService for HeadlessDocument {
    fn measure(&self, node: NodeHandle) -> TileMetrics {
        self.get(node).map(|element| element.size).unwrap_or_default()
    }
}

impl Notifier for HeadlessDocument {
    fn publish(&mut self, event: LifecycleEvent) {
        self.events.push(event);
    }
}

impl EventBinder for HeadlessDocument {
    fn bind_controls(&mut self, region: NodeHandle) {
        self.click_region = Some(region);
    }

    fn bind_tile_focus(&mut self, tiles: &[NodeHandle]) {
        self.focus_bound = tiles.to_vec();
    }
}

impl TilePresenter for HeadlessDocument {
    fn set_busy(&mut self, holder: NodeHandle, busy: bool) {
        if let Some(element) = self.get_mut(holder) {
            element.set_attr("aria-busy", busy.then(|| "true".to_string()));
        }
    }

    fn apply_accessibility(&mut self, tile: NodeHandle, state: &TileAccessibility) {
        let Some(element) = self.get_mut(tile) else {
            return;
        };
        let hidden = state.visibility.map(|visibility| {
            (visibility == Visibility::Hidden).to_string()
        });
        element.set_attr("aria-hidden", hidden);
        element.set_attr("tabindex", state.tab_index.map(|index| index.to_string()));
        element.set_class("state-focus", state.focused);
    }

    fn focus(&mut self, tile: NodeHandle) {
        self.focused = Some(tile);
    }

    fn load_media(&mut self, tile: NodeHandle, media: &[DeferredMedia]) {
        let sources: Vec<&str> = media.iter().filter_map(|m| m.src.as_deref()).collect();
        if let Some(element) = self.get_mut(tile) {
            element.set_attr("src", Some(sources.join(" ")));
        }
    }
}

/// Build a document holding a list of `count` equally sized tiles, each
/// with one deferred image. Returns the document, the tile holder and the
/// tile descriptions in order.
pub fn tile_strip(
    count: usize,
    width: f32,
    height: f32,
) -> (HeadlessDocument, NodeHandle, Vec<TileSpec>) {
    let mut doc = HeadlessDocument::new();
    let body = doc.create(Element::new("body"));
    let holder = doc.create(Element::new("ul").with_class("carousel"));
    doc.append_child(body, holder);

    let tiles = (0..count)
        .map(|index| {
            let node = doc.create(
                Element::new("li")
                    .with_class("carousel-tile")
                    .with_size(width, height),
            );
            doc.append_child(holder, node);
            TileSpec::panel(node).with_media(format!("tile-{index}.jpg"))
        })
        .collect();

    (doc, holder, tiles)
}
