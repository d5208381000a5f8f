// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Chaque bouton envoie un jeton au répartiteur (aucune logique ici)
// - Pavé auxiliaire selon le mode : scientifique / programmeur / aucun

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::etat::{Base, ModeAffichage, ModeAngle, PRECISION_MAX};
use crate::noyau::Pave;

/// (étiquette, jeton) — lettres hex en minuscule ("C" = effacer).
const PAVE_PROG: [(&str, &str); 13] = [
    ("AND", "AND"),
    ("OR", "OR"),
    ("XOR", "XOR"),
    ("NOT", "NOT"),
    ("Lsh", "Lsh"),
    ("Rsh", "Rsh"),
    ("Mod", "Mod"),
    ("A", "a"),
    ("B", "b"),
    ("C", "c"),
    ("D", "d"),
    ("E", "e"),
    ("F", "f"),
];

const PAVE_SCI: [(&str, &str); 11] = [
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("x^y", "x^y"),
    ("log", "log"),
    ("ln", "ln"),
    ("sqrt", "sqrt"),
    ("x²", "x²"),
    ("1/x", "1/x"),
    ("π", "PI"),
    ("e", "EULER"),
];

/// Pavé standard (None = case vide).
const PAVE_STANDARD: [[Option<&str>; 5]; 6] = [
    [Some("MC"), Some("MR"), Some("M+"), Some("M-"), Some("C")],
    [Some("Undo"), Some("Redo"), Some("%"), Some("+/-"), Some("CE")],
    [Some("7"), Some("8"), Some("9"), Some("/"), None],
    [Some("4"), Some("5"), Some("6"), Some("*"), None],
    [Some("1"), Some("2"), Some("3"), Some("-"), None],
    [Some("0"), Some("."), Some("="), Some("+"), None],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_afficheur(ui);

        ui.add_space(8.0);
        self.ui_modes(ui, maintenant);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            match self.calc.pave() {
                Pave::Scientifique => self.ui_pave_aux(ui, "pave_sci", &PAVE_SCI, maintenant),
                Pave::Programmeur => self.ui_pave_aux(ui, "pave_prog", &PAVE_PROG, maintenant),
                Pave::Aucun => {}
            }
            self.ui_pave_standard(ui, maintenant);
        });
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        let couleur = if self.rendu.erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.rendu.texte)
                            .monospace()
                            .size(30.0)
                            .color(couleur),
                    );
                });
            });

        let memoire = self.calc.etat().memoire;
        if memoire != 0.0 {
            ui.small("M");
        }
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let (angle, affichage, base, precision) = {
            let e = self.calc.etat();
            (e.angle, e.affichage, e.base, e.precision)
        };

        ui.horizontal_wrapped(|ui| {
            for (mode, label) in [
                (ModeAngle::Deg, "DEG"),
                (ModeAngle::Rad, "RAD"),
                (ModeAngle::Grad, "GRAD"),
            ] {
                if ui.selectable_label(angle == mode, label).clicked() {
                    self.envoyer(mode.jeton(), maintenant);
                }
            }

            ui.separator();

            for (mode, label) in [
                (ModeAffichage::Normal, "NORMAL"),
                (ModeAffichage::Scientifique, "SCI"),
                (ModeAffichage::Programmeur, "PROG"),
            ] {
                if ui.selectable_label(affichage == mode, label).clicked() {
                    self.envoyer(mode.jeton(), maintenant);
                }
            }
        });

        ui.horizontal_wrapped(|ui| {
            for b in [Base::Dec, Base::Hex, Base::Oct, Base::Bin] {
                if ui.selectable_label(base == b, b.jeton()).clicked() {
                    self.envoyer(b.jeton(), maintenant);
                }
            }

            ui.separator();

            // Un clic = un pas = un instantané undo.
            ui.label("Précision :");
            let moins = pas_precision(precision, false);
            if ui.add_enabled(moins.is_some(), egui::Button::new("−")).clicked() {
                if let Some(p) = moins {
                    self.changer_precision(p, maintenant);
                }
            }
            ui.monospace(format!("{precision:>2} déc."));
            let plus = pas_precision(precision, true);
            if ui.add_enabled(plus.is_some(), egui::Button::new("+")).clicked() {
                if let Some(p) = plus {
                    self.changer_precision(p, maintenant);
                }
            }
        });
    }

    fn ui_pave_aux(
        &mut self,
        ui: &mut egui::Ui,
        id: &str,
        touches: &[(&str, &'static str)],
        maintenant: f64,
    ) {
        egui::Grid::new(id)
            .num_columns(2)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for (i, (label, jeton)) in touches.iter().enumerate() {
                    self.bouton(ui, label, jeton, maintenant);
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    fn ui_pave_standard(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_standard")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE_STANDARD {
                    for case in ligne {
                        match case {
                            Some(jeton) => {
                                let actif = self.touche_active(jeton);
                                ui.add_enabled_ui(actif, |ui| {
                                    self.bouton(ui, jeton, jeton, maintenant);
                                });
                            }
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Undo / Redo grisés quand la pile correspondante est vide.
    fn touche_active(&self, jeton: &str) -> bool {
        let h = self.calc.historique();
        match jeton {
            "Undo" => h.peut_annuler(),
            "Redo" => h.peut_retablir(),
            _ => true,
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, jeton: &str, maintenant: f64) {
        let resp = ui.add_sized([52.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.envoyer(jeton, maintenant);
        }
    }
}

/// Précision voisine (un pas), None en butée.
fn pas_precision(precision: u8, hausse: bool) -> Option<u8> {
    if hausse {
        (precision < PRECISION_MAX).then_some(precision + 1)
    } else {
        precision.checked_sub(1)
    }
}
