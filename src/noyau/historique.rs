// src/noyau/historique.rs
//
// Historique undo/redo : deux piles d’instantanés (copies profondes).
// Le sommet de chaque pile est le plus récent.

use super::etat::EtatCalc;

#[derive(Clone, Debug, Default)]
pub struct Historique {
    annuler: Vec<EtatCalc>,
    retablir: Vec<EtatCalc>,
}

impl Historique {
    /// Avant toute mutation : copie de l’état ; invalide le redo.
    pub fn push_undo(&mut self, etat: &EtatCalc) {
        self.annuler.push(etat.clone());
        self.retablir.clear();
    }

    /// Renvoie l’état précédent (l’état courant part sur la pile redo), ou None.
    pub fn undo(&mut self, courant: &EtatCalc) -> Option<EtatCalc> {
        let precedent = self.annuler.pop()?;
        self.retablir.push(courant.clone());
        Some(precedent)
    }

    pub fn redo(&mut self, courant: &EtatCalc) -> Option<EtatCalc> {
        let suivant = self.retablir.pop()?;
        self.annuler.push(courant.clone());
        Some(suivant)
    }

    pub fn peut_annuler(&self) -> bool {
        !self.annuler.is_empty()
    }

    pub fn peut_retablir(&self) -> bool {
        !self.retablir.is_empty()
    }
}
