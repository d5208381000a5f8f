// src/noyau/minuterie.rs
//
// Retour automatique après une erreur : tâche différée annulable.
// Horloge fournie par l’appelant (secondes, ex. egui `input.time`),
// donc identique en natif et en wasm, et déterministe en test.
// Au plus une échéance armée à la fois.

/// Durée d’affichage d’une erreur.
pub const DELAI_ERREUR_S: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct MinuterieErreur {
    echeance: Option<f64>,
}

impl MinuterieErreur {
    /// Annule l’échéance en cours puis en arme une nouvelle.
    pub fn armer(&mut self, maintenant: f64) {
        self.echeance = Some(maintenant + DELAI_ERREUR_S);
    }

    pub fn annuler(&mut self) {
        self.echeance = None;
    }

    pub fn echue(&self, maintenant: f64) -> bool {
        matches!(self.echeance, Some(t) if maintenant >= t)
    }

    /// Temps restant avant l’échéance (pour planifier un repaint).
    pub fn restant(&self, maintenant: f64) -> Option<f64> {
        self.echeance.map(|t| (t - maintenant).max(0.0))
    }
}
