// src/noyau/format.rs
//
// Affichage numérique
// -------------------
// - formater() : pur, (valeur, mode, base, précision) -> texte
// - rendre()   : passe d’affichage sur l’état (écrit le texte formaté
//                dans l’opérande quand un nouveau nombre commence)

use super::etat::{Base, EtatCalc, ModeAffichage};
use super::operateurs::vers_entier;

/// Au-delà (ou en deçà, hors zéro), NORMAL bascule en notation scientifique.
const SEUIL_SCI_HAUT: f64 = 1e10;
const SEUIL_SCI_BAS: f64 = 1e-7;

/// Ce que l’UI doit peindre après chaque commande.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendu {
    pub texte: String,
    pub erreur: bool,
}

/// Pavé auxiliaire à montrer, dérivé du mode d’affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pave {
    Aucun,
    Scientifique,
    Programmeur,
}

impl Pave {
    pub fn pour(mode: ModeAffichage) -> Self {
        match mode {
            ModeAffichage::Normal => Self::Aucun,
            ModeAffichage::Scientifique => Self::Scientifique,
            ModeAffichage::Programmeur => Self::Programmeur,
        }
    }
}

/* ------------------------ Formatage pur ------------------------ */

pub fn formater(valeur: f64, mode: ModeAffichage, base: Base, precision: u8) -> String {
    match mode {
        ModeAffichage::Programmeur => formater_entier(vers_entier(valeur), base),
        ModeAffichage::Scientifique => formater_scientifique(valeur, precision),
        ModeAffichage::Normal => {
            let a = valeur.abs();
            if a > SEUIL_SCI_HAUT || (a < SEUIL_SCI_BAS && valeur != 0.0) {
                formater_scientifique(valeur, precision)
            } else {
                formater_groupe(valeur, precision)
            }
        }
    }
}

/// Négatifs hors DEC : motif brut du complément à deux sur 64 bits.
pub fn formater_entier(n: i64, base: Base) -> String {
    match base {
        Base::Dec => n.to_string(),
        Base::Hex => format!("{n:X}"),
        Base::Oct => format!("{n:o}"),
        Base::Bin => format!("{n:b}"),
    }
}

/// m.mmmE±x : au plus `precision` décimales, zéros finaux retirés.
pub fn formater_scientifique(valeur: f64, precision: u8) -> String {
    let s = format!("{:.*e}", precision as usize, valeur);
    let (mantisse, exposant) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    format!("{}E{exposant}", retirer_zeros(mantisse))
}

/// 1,234,567.89 : séparateur de milliers ',' et point décimal (stable, sans locale).
pub fn formater_groupe(valeur: f64, precision: u8) -> String {
    let s = format!("{:.*}", precision as usize, valeur.abs());
    let s = retirer_zeros(&s);
    let (entier, frac) = match s.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (s, None),
    };

    let mut out = String::with_capacity(s.len() + entier.len() / 3 + 1);
    if valeur < 0.0 && s != "0" {
        out.push('-');
    }
    out.push_str(&grouper_milliers(entier));
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn retirer_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/* ------------------------ Passe d’affichage ------------------------ */

/// Texte à afficher pour l’état courant.
///
/// Effet de bord voulu : si un nouveau nombre commence, l’opérande prend
/// le texte formaté (l’undo retrouve ainsi ce que l’utilisateur voyait).
pub fn rendre(etat: &mut EtatCalc) -> Rendu {
    if etat.erreur {
        return apercu(etat);
    }

    if etat.nouveau_nombre {
        etat.texte = texte_valeur(etat);
    }

    Rendu {
        texte: etat.texte.clone(),
        erreur: false,
    }
}

/// Comme rendre(), sans toucher à l’état.
pub fn apercu(etat: &EtatCalc) -> Rendu {
    if etat.erreur {
        return Rendu {
            texte: etat.message_erreur.clone(),
            erreur: true,
        };
    }

    let texte = if etat.nouveau_nombre {
        texte_valeur(etat)
    } else {
        etat.texte.clone()
    };

    Rendu {
        texte,
        erreur: false,
    }
}

fn texte_valeur(etat: &EtatCalc) -> String {
    if etat.valeur == 0.0 {
        "0".to_string()
    } else {
        formater(etat.valeur, etat.affichage, etat.base, etat.precision)
    }
}
