pub mod button;
pub mod node;
pub mod status_info;

pub use button::{Button, ClickHandler};
pub use node::{Icon, Node, Tone};
pub use status_info::{NodeStatus, StatusCategory, StatusInfo, CATEGORIES};
