//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir le répartiteur du noyau et le dernier rendu à peindre.
//! Toute action passe par `envoyer` (un jeton) : la vue ne touche jamais l’état du noyau.

use crate::noyau::etat::{Base, ModeAffichage};
use crate::noyau::{Calculatrice, Rendu};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // Dernier rendu (texte + drapeau erreur)
    pub rendu: Rendu,
}

impl Default for AppCalc {
    fn default() -> Self {
        let calc = Calculatrice::new();
        let rendu = calc.apercu();
        Self { calc, rendu }
    }
}

impl AppCalc {
    /// Bouton ou touche : un jeton -> répartiteur -> nouveau rendu.
    pub fn envoyer(&mut self, jeton: &str, maintenant: f64) {
        self.rendu = self.calc.dispatch(jeton, maintenant);
    }

    pub fn changer_precision(&mut self, precision: u8, maintenant: f64) {
        self.rendu = self.calc.changer_precision(precision, maintenant);
    }

    /// Retour automatique après erreur (appelé à chaque frame).
    pub fn tick(&mut self, maintenant: f64) {
        if let Some(r) = self.calc.tick(maintenant) {
            self.rendu = r;
        }
    }

    pub fn est_prog_hex(&self) -> bool {
        let e = self.calc.etat();
        e.affichage == ModeAffichage::Programmeur && e.base == Base::Hex
    }
}
