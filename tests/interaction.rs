//! Drives the components through a headless egui context with synthetic pointer input.

use std::cell::Cell;

use eframe::egui;
use flowboard_ui::ui::{Button, Icon, Node, StatusInfo, Tone};

fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
        events,
        ..Default::default()
    }
}

fn press(pos: egui::Pos2, pressed: bool) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        },
    ]
}

/// Renders one frame and returns the rect of the widget the closure adds
fn frame(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    mut add: impl FnMut(&mut egui::Ui) -> egui::Response,
) -> egui::Response {
    let mut response = None;
    let _ = ctx.run(raw_input(events), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            response = Some(add(ui));
        });
    });
    response.expect("panel body runs every frame")
}

/// Layout frame, hover, press, release. Returns the response of the release frame.
fn click(ctx: &egui::Context, mut add: impl FnMut(&mut egui::Ui) -> egui::Response) -> egui::Response {
    let rect = frame(ctx, Vec::new(), &mut add).rect;
    let center = rect.center();
    frame(ctx, vec![egui::Event::PointerMoved(center)], &mut add);
    frame(ctx, press(center, true), &mut add);
    frame(ctx, press(center, false), &mut add)
}

#[test]
fn click_invokes_handler_exactly_once() {
    let ctx = egui::Context::default();
    let calls = Cell::new(0);

    let response = click(&ctx, |ui| {
        Button::new("Run")
            .on_click(|| calls.set(calls.get() + 1))
            .show(ui)
    });
    assert!(response.clicked());
    assert_eq!(calls.get(), 1);

    // Later frames without input do not replay the activation
    frame(&ctx, Vec::new(), |ui| {
        Button::new("Run")
            .on_click(|| calls.set(calls.get() + 1))
            .show(ui)
    });
    assert_eq!(calls.get(), 1);
}

#[test]
fn click_without_handler_is_inert() {
    let ctx = egui::Context::default();
    let response = click(&ctx, |ui| Button::new("Run").show(ui));
    assert!(response.clicked());
}

#[test]
fn rendering_without_input_never_fires() {
    let ctx = egui::Context::default();
    let calls = Cell::new(0);
    for _ in 0..3 {
        frame(&ctx, Vec::new(), |ui| {
            Button::new("Run")
                .children(Node::icon(Icon::PlayCircle, Tone::Blue))
                .on_click(|| calls.set(calls.get() + 1))
                .show(ui)
        });
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn children_widen_the_button() {
    let ctx = egui::Context::default();
    let plain = frame(&ctx, Vec::new(), |ui| Button::new("Run").show(ui)).rect;
    let nested = frame(&ctx, Vec::new(), |ui| {
        Button::new("Run").children(" with extra content").show(ui)
    })
    .rect;
    assert!(nested.width() > plain.width());
}

#[test]
fn legend_is_not_clickable_and_stable() {
    let ctx = egui::Context::default();
    let first = frame(&ctx, Vec::new(), |ui| StatusInfo.show(ui)).rect;
    let released = click(&ctx, |ui| StatusInfo.show(ui));

    assert!(!released.clicked());
    assert_eq!(released.rect, first);
}

#[test]
fn empty_label_still_renders_and_dispatches() {
    let ctx = egui::Context::default();
    let calls = Cell::new(0);

    let response = click(&ctx, |ui| {
        Button::new("")
            .on_click(|| calls.set(calls.get() + 1))
            .show(ui)
    });
    assert!(response.rect.width() > 0.0);
    assert!(response.rect.height() > 0.0);
    assert!(response.clicked());
    assert_eq!(calls.get(), 1);
}
