// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre par frame : minuterie d’erreur -> clavier -> vue.

pub mod clavier;
pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);
        self.tick(maintenant);

        // Clavier global : la calculatrice n’a pas de champ texte éditable.
        let prog_hex = self.est_prog_hex();
        let jetons: Vec<&'static str> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| clavier::jeton_pour_evenement(ev, prog_hex))
                .collect()
        });
        for jeton in jetons {
            self.envoyer(jeton, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        // Repaint pour le retour automatique de l’erreur.
        if let Some(restant) = self.calc.retour_erreur_dans(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(restant));
        }
    }
}
