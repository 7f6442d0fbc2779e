/// Clickable button wrapper with a label, optional nested content and a click callback
use eframe::egui;

use super::node::Node;

/// Button styling constants
pub const BUTTON_MIN_HEIGHT: f32 = 24.0;
pub const BUTTON_PADDING: f32 = 6.0;

/// Callback fired once per activation
pub type ClickHandler<'a> = Box<dyn FnMut() + 'a>;

/// Props of a button. Built fresh every frame by the caller.
///
/// ```no_run
/// # fn demo(ui: &mut eframe::egui::Ui) {
/// let mut runs = 0;
/// flowboard_ui::ui::Button::new("Run")
///     .on_click(|| runs += 1)
///     .show(ui);
/// # }
/// ```
pub struct Button<'a> {
    text: String,
    on_click: Option<ClickHandler<'a>>,
    children: Option<Node>,
}

impl<'a> Button<'a> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_click: None,
            children: None,
        }
    }

    pub fn on_click(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Content rendered after the label
    pub fn children(mut self, content: impl Into<Node>) -> Self {
        self.children = Some(content.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Label followed by the nested content, if any
    pub fn content(&self) -> Node {
        match &self.children {
            Some(children) => Node::List(vec![Node::Text(self.text.clone()), children.clone()]),
            None => Node::Text(self.text.clone()),
        }
    }

    /// Dispatches one activation. Returns true if a callback ran.
    pub fn activate(&mut self) -> bool {
        match self.on_click.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Adds the control to `ui` and dispatches the callback when egui reports a click
    pub fn show(mut self, ui: &mut egui::Ui) -> egui::Response {
        let font = egui::TextStyle::Button.resolve(ui.style());
        let color = ui.visuals().text_color();
        let mut job = egui::text::LayoutJob::default();
        self.content().append_to(&mut job, &font, color);

        let response = ui
            .add(
                egui::Button::new(job)
                    .min_size(egui::vec2(BUTTON_PADDING * 2.0, BUTTON_MIN_HEIGHT)),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            if self.activate() {
                log::debug!("🟢 Button '{}' activated", self.text);
            } else {
                log::debug!("Button '{}' clicked without a handler", self.text);
            }
        }

        response
    }
}

impl std::fmt::Debug for Button<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children)
            .finish()
    }
}
