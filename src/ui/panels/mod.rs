// StockManager - ui/panels/mod.rs

pub mod container;
pub mod content;
pub mod sidebar;

/// Frames for one primary click at `pos` on an 800x600 screen: move, press,
/// release, then a quiet frame.
#[cfg(test)]
pub(crate) fn click_input(pos: egui::Pos2) -> Vec<egui::RawInput> {
    let button = |pressed: bool| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    };
    [
        vec![egui::Event::PointerMoved(pos)],
        vec![button(true)],
        vec![button(false)],
        Vec::new(),
    ]
    .into_iter()
    .map(|events| egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(800.0, 600.0),
        )),
        events,
        ..Default::default()
    })
    .collect()
}
