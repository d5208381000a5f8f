// src/noyau/erreur.rs
//
// Taxonomie des erreurs visibles (toutes récupérables).
// Le texte Display est exactement ce que l’afficheur montre.

use thiserror::Error;

use super::etat::{Base, ModeAffichage};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("Format invalide")]
    FormatInvalide,

    #[error("Entier invalide ({base})")]
    EntierInvalide { base: Base },

    #[error("Division par zéro")]
    DivisionParZero,

    #[error("Modulo par zéro")]
    ModuloParZero,

    #[error("{fonction} : argument ≤ 0")]
    LogDomaine { fonction: &'static str },

    #[error("sqrt : argument < 0")]
    RacineNegative,

    #[error("Inverse de zéro")]
    InverseDeZero,

    #[error("tan indéfinie")]
    TangenteIndefinie,

    #[error("Dépassement")]
    Depassement,

    /// Opérateur/fonction connu mais pas dans ce mode (ex. x^y en PROG, AND en NORMAL).
    #[error("{quoi} indisponible ({mode})")]
    Indisponible {
        quoi: &'static str,
        mode: ModeAffichage,
    },
}

pub type Resultat<T> = std::result::Result<T, ErreurCalc>;

/// Résultat flottant non fini => dépassement.
pub fn fini(v: f64) -> Resultat<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalc::Depassement)
    }
}
