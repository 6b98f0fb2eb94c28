use bank_sim::{
    common::action::ActionKind,
    domain::ledger::Ledger,
    io::form::{button_label, Form, FIELD_LABELS},
    observability,
    worker::processor::Processor,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    observability::init(None);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 280.0])
            .with_title("Simple Bank"),
        ..Default::default()
    };

    eframe::run_native(
        "Simple Bank",
        options,
        Box::new(|_cc| Ok(Box::new(BankApp::default()))),
    )
}

/// Window over one [`Form`]; the ledger lives as long as the window.
#[derive(Default)]
struct BankApp {
    ledger: Ledger,
    processor: Processor,
    form: Form,
}

impl eframe::App for BankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("fields").num_columns(2).show(ui, |ui| {
                for (label, field) in FIELD_LABELS.iter().zip(self.form.fields_mut()) {
                    ui.label(*label);
                    ui.text_edit_singleline(field);
                    ui.end_row();
                }
            });

            ui.add_space(10.0);

            // two buttons per row, in menu order
            let mut pressed = None;
            egui::Grid::new("buttons").num_columns(2).show(ui, |ui| {
                for pair in ActionKind::ALL.chunks(2) {
                    for &kind in pair {
                        if ui.button(button_label(kind)).clicked() {
                            pressed = Some(kind);
                        }
                    }
                    ui.end_row();
                }
            });
            if let Some(kind) = pressed {
                self.form.press(kind, &mut self.ledger, &mut self.processor);
            }

            ui.separator();
            ui.label(self.form.status());
        });
    }
}
