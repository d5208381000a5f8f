//! Noyau calculatrice (sans UI)
//!
//! Organisation interne :
//! - etat.rs       : état (instantané copiable) + modes
//! - erreur.rs     : taxonomie d’erreurs
//! - operateurs.rs : opérateurs (ensemble fermé) + règles d’évaluation
//! - trig.rs       : sin/cos/tan + angles singuliers
//! - format.rs     : affichage numérique + passe d’affichage
//! - moteur.rs     : saisie, opérations, fonctions, mémoire
//! - historique.rs : undo/redo
//! - minuterie.rs  : retour automatique après erreur
//! - commandes.rs  : jetons -> commandes + répartiteur

pub mod commandes;
pub mod erreur;
pub mod etat;
pub mod format;
pub mod historique;
pub mod minuterie;
pub mod moteur;
pub mod operateurs;
pub mod trig;

#[cfg(test)]
mod tests_moteur;



// API publique minimale
pub use commandes::Calculatrice;
pub use format::{Pave, Rendu};
