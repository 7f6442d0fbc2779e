/// Renderable content passed between components and the egui host
use eframe::egui;
use serde::Serialize;

/// Symbolic glyph identifiers used by the legend and by nested button content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    CheckCircle,
    PlayCircle,
    Clock,
    XCircle,
    PauseCircle,
}

impl Icon {
    /// Identifier understood by external icon sets
    pub fn id(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::PlayCircle => "play-circle",
            Icon::Clock => "clock",
            Icon::XCircle => "x-circle",
            Icon::PauseCircle => "pause-circle",
        }
    }

    /// Fallback glyph drawn with egui's bundled fonts
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::CheckCircle => "✔",
            Icon::PlayCircle => "▶",
            Icon::Clock => "⏳",
            Icon::XCircle => "✖",
            Icon::PauseCircle => "⏸",
        }
    }
}

/// Style token; the class name is resolved by an external stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Gray,
    Red,
    Yellow,
}

impl Tone {
    pub fn class_name(self) -> &'static str {
        match self {
            Tone::Green => "text-green-500",
            Tone::Blue => "text-blue-500",
            Tone::Gray => "text-gray-500",
            Tone::Red => "text-red-500",
            Tone::Yellow => "text-yellow-500",
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            Tone::Green => egui::Color32::from_rgb(34, 197, 94),
            Tone::Blue => egui::Color32::from_rgb(59, 130, 246),
            Tone::Gray => egui::Color32::from_rgb(107, 114, 128),
            Tone::Red => egui::Color32::from_rgb(239, 68, 68),
            Tone::Yellow => egui::Color32::from_rgb(234, 179, 8),
        }
    }
}

/// Content tree: plain text, a coloured icon, or a sequence of nodes
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node {
    Text(String),
    Icon(Icon, Tone),
    List(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn icon(icon: Icon, tone: Tone) -> Self {
        Node::Icon(icon, tone)
    }

    /// Visible text of the tree in document order. Icons contribute their glyph.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Icon(icon, _) => out.push_str(icon.glyph()),
            Node::List(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Leaves of the tree in document order
    pub fn leaves(&self) -> Vec<&Node> {
        match self {
            Node::List(children) => children.iter().flat_map(Node::leaves).collect(),
            leaf => vec![leaf],
        }
    }

    /// Flattens the tree into a layout job so it fits inside a single egui widget
    pub fn append_to(&self, job: &mut egui::text::LayoutJob, font: &egui::FontId, color: egui::Color32) {
        match self {
            Node::Text(text) => {
                job.append(text, 0.0, egui::TextFormat::simple(font.clone(), color));
            }
            Node::Icon(icon, tone) => {
                job.append(icon.glyph(), 0.0, egui::TextFormat::simple(font.clone(), tone.color()));
            }
            Node::List(children) => {
                for child in children {
                    child.append_to(job, font, color);
                }
            }
        }
    }

    /// Draws the tree as non-interactive labels laid out left to right
    pub fn show(&self, ui: &mut egui::Ui) {
        match self {
            Node::Text(text) => {
                ui.label(text.as_str());
            }
            Node::Icon(icon, tone) => {
                ui.label(egui::RichText::new(icon.glyph()).color(tone.color()));
            }
            Node::List(children) => {
                ui.horizontal(|ui| {
                    for child in children {
                        child.show(ui);
                    }
                });
            }
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::List(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_follows_document_order() {
        let node = Node::List(vec![
            Node::text("a"),
            Node::List(vec![Node::text("b"), Node::icon(Icon::CheckCircle, Tone::Green)]),
            Node::text("c"),
        ]);
        assert_eq!(node.plain_text(), "ab✔c");
        assert_eq!(node.leaves().len(), 4);
    }

    #[test]
    fn layout_job_keeps_icon_colour() {
        let node = Node::List(vec![Node::text("Run "), Node::icon(Icon::PlayCircle, Tone::Blue)]);
        let mut job = egui::text::LayoutJob::default();
        node.append_to(&mut job, &egui::FontId::proportional(14.0), egui::Color32::WHITE);

        assert_eq!(job.text, "Run ▶");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[0].format.color, egui::Color32::WHITE);
        assert_eq!(job.sections[1].format.color, Tone::Blue.color());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Node::icon(Icon::Clock, Tone::Gray)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "icon", "value": ["clock", "gray"] }));
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(Icon::XCircle.id(), "x-circle");
        assert_eq!(Tone::Yellow.class_name(), "text-yellow-500");
    }
}
