/// Static legend of workflow node statuses
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use eframe::egui;
use serde::Serialize;

use super::node::{Icon, Node, Tone};

/// Constants for legend styling
pub const LEGEND_PADDING: i8 = 8;
pub const LEGEND_SPACING: f32 = 12.0;
pub const LEGEND_ROUNDING: u8 = 6;

/// Execution state of a workflow node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Completed,
    Running,
    Pending,
    Error,
    Paused,
}

impl NodeStatus {
    pub const ALL: [NodeStatus; 5] = [
        NodeStatus::Completed,
        NodeStatus::Running,
        NodeStatus::Pending,
        NodeStatus::Error,
        NodeStatus::Paused,
    ];

    pub fn category(self) -> &'static StatusCategory {
        &CATEGORIES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.category().label
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NodeStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NodeStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow!("unknown node status '{}'", s))
    }
}

/// One legend entry: icon and label with its style token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusCategory {
    pub status: NodeStatus,
    pub label: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

impl StatusCategory {
    pub fn render(&self) -> Node {
        Node::List(vec![Node::icon(self.icon, self.tone), Node::text(self.label)])
    }
}

/// Indexed by `NodeStatus as usize`
pub const CATEGORIES: [StatusCategory; 5] = [
    StatusCategory {
        status: NodeStatus::Completed,
        label: "Completed",
        icon: Icon::CheckCircle,
        tone: Tone::Green,
    },
    StatusCategory {
        status: NodeStatus::Running,
        label: "Running",
        icon: Icon::PlayCircle,
        tone: Tone::Blue,
    },
    StatusCategory {
        status: NodeStatus::Pending,
        label: "Pending",
        icon: Icon::Clock,
        tone: Tone::Gray,
    },
    StatusCategory {
        status: NodeStatus::Error,
        label: "Error",
        icon: Icon::XCircle,
        tone: Tone::Red,
    },
    StatusCategory {
        status: NodeStatus::Paused,
        label: "Paused",
        icon: Icon::PauseCircle,
        tone: Tone::Yellow,
    },
];

/// Legend component. Takes no input and always draws the same five entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusInfo;

impl StatusInfo {
    pub fn entries() -> &'static [StatusCategory] {
        &CATEGORIES
    }

    pub fn render(&self) -> Node {
        Node::List(CATEGORIES.iter().map(StatusCategory::render).collect())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(Self::entries())
    }

    /// Draws the legend as a framed row of non-interactive labels
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let visuals = ui.visuals();
        let frame = egui::Frame::new()
            .fill(visuals.faint_bg_color)
            .stroke(visuals.widgets.noninteractive.bg_stroke)
            .corner_radius(LEGEND_ROUNDING)
            .inner_margin(egui::Margin::same(LEGEND_PADDING));

        frame
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = LEGEND_SPACING;
                    for category in Self::entries() {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 4.0;
                            category.render().show(ui);
                        });
                    }
                });
            })
            .response
    }
}
