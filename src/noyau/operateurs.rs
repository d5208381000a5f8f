// src/noyau/operateurs.rs
//
// Opérateurs (ensemble fermé)
// ---------------------------
// Chaque variante porte sa règle d’évaluation :
// - réel (f64) en NORMAL / SCI
// - entier 64 bits (complément à deux, arithmétique enveloppante) en PROG

use num_traits::ToPrimitive;

use super::erreur::{fini, ErreurCalc, Resultat};
use super::etat::ModeAffichage;

/// Petite valeur pour les comparaisons flottantes.
pub const EPSILON: f64 = 1e-12;

/// En dessous, un résultat unaire non nul est ramené à 0.
pub const SEUIL_MICRO: f64 = 1e-15;

/// f64 -> i64 par troncature, saturé aux bornes de i64 (NaN -> 0).
pub fn vers_entier(v: f64) -> i64 {
    v.to_i64().unwrap_or(if v.is_nan() {
        0
    } else if v < 0.0 {
        i64::MIN
    } else {
        i64::MAX
    })
}

/* ------------------------ Binaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Mod,
    Et,
    Ou,
    OuExclusif,
    DecalageGauche,
    DecalageDroite,
}

impl OpBinaire {
    pub fn depuis_jeton(s: &str) -> Option<Self> {
        Some(match s {
            "+" => Self::Plus,
            "-" => Self::Moins,
            "*" => Self::Fois,
            "/" => Self::Divise,
            "x^y" => Self::Puissance,
            "Mod" => Self::Mod,
            "AND" => Self::Et,
            "OR" => Self::Ou,
            "XOR" => Self::OuExclusif,
            "Lsh" => Self::DecalageGauche,
            "Rsh" => Self::DecalageDroite,
            _ => return None,
        })
    }

    pub fn jeton(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "*",
            Self::Divise => "/",
            Self::Puissance => "x^y",
            Self::Mod => "Mod",
            Self::Et => "AND",
            Self::Ou => "OR",
            Self::OuExclusif => "XOR",
            Self::DecalageGauche => "Lsh",
            Self::DecalageDroite => "Rsh",
        }
    }

    /// NORMAL / SCI : a (op) b en double précision.
    pub fn appliquer_reel(self, a: f64, b: f64, mode: ModeAffichage) -> Resultat<f64> {
        let r = match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => {
                if b.abs() < EPSILON {
                    return Err(ErreurCalc::DivisionParZero);
                }
                a / b
            }
            Self::Puissance => a.powf(b),
            _ => {
                return Err(ErreurCalc::Indisponible {
                    quoi: self.jeton(),
                    mode,
                })
            }
        };
        fini(r)
    }

    /// PROG : a (op) b sur i64.
    pub fn appliquer_entier(self, a: i64, b: i64) -> Resultat<i64> {
        Ok(match self {
            Self::Plus => a.wrapping_add(b),
            Self::Moins => a.wrapping_sub(b),
            Self::Fois => a.wrapping_mul(b),
            Self::Divise => {
                if b == 0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                a.wrapping_div(b)
            }
            Self::Mod => {
                if b == 0 {
                    return Err(ErreurCalc::ModuloParZero);
                }
                a.wrapping_rem(b)
            }
            Self::Et => a & b,
            Self::Ou => a | b,
            Self::OuExclusif => a ^ b,
            // Compte de décalage : 6 bits de poids faible.
            Self::DecalageGauche => a.wrapping_shl(b as u32),
            Self::DecalageDroite => a.wrapping_shr(b as u32),
            Self::Puissance => {
                return Err(ErreurCalc::Indisponible {
                    quoi: self.jeton(),
                    mode: ModeAffichage::Programmeur,
                })
            }
        })
    }
}

/* ------------------------ Unaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Log,
    Ln,
    Racine,
    Carre,
    Inverse,
    Non,
}

impl OpUnaire {
    pub fn depuis_jeton(s: &str) -> Option<Self> {
        Some(match s {
            "log" => Self::Log,
            "ln" => Self::Ln,
            "sqrt" => Self::Racine,
            "x²" => Self::Carre,
            "1/x" => Self::Inverse,
            "NOT" => Self::Non,
            _ => return None,
        })
    }

    pub fn jeton(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Racine => "sqrt",
            Self::Carre => "x²",
            Self::Inverse => "1/x",
            Self::Non => "NOT",
        }
    }

    pub fn appliquer_reel(self, x: f64, mode: ModeAffichage) -> Resultat<f64> {
        let r = match self {
            Self::Log | Self::Ln if x <= 0.0 => {
                return Err(ErreurCalc::LogDomaine {
                    fonction: self.jeton(),
                })
            }
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Racine if x < 0.0 => return Err(ErreurCalc::RacineNegative),
            Self::Racine => x.sqrt(),
            Self::Carre => x * x,
            Self::Inverse if x.abs() < EPSILON => return Err(ErreurCalc::InverseDeZero),
            Self::Inverse => 1.0 / x,
            Self::Non => {
                return Err(ErreurCalc::Indisponible {
                    quoi: self.jeton(),
                    mode,
                })
            }
        };

        let r = if r != 0.0 && r.abs() < SEUIL_MICRO { 0.0 } else { r };
        fini(r)
    }

    /// PROG : seul NOT est permis.
    pub fn appliquer_entier(self, n: i64) -> Resultat<i64> {
        match self {
            Self::Non => Ok(!n),
            _ => Err(ErreurCalc::Indisponible {
                quoi: self.jeton(),
                mode: ModeAffichage::Programmeur,
            }),
        }
    }
}

/* ------------------------ Mémoire + constantes ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpMemoire {
    Effacer,
    Rappel,
    Ajouter,
    Soustraire,
}

impl OpMemoire {
    pub fn depuis_jeton(s: &str) -> Option<Self> {
        Some(match s {
            "MC" => Self::Effacer,
            "MR" => Self::Rappel,
            "M+" => Self::Ajouter,
            "M-" => Self::Soustraire,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    Euler,
}

impl Constante {
    pub fn depuis_jeton(s: &str) -> Option<Self> {
        match s {
            "PI" => Some(Self::Pi),
            "EULER" => Some(Self::Euler),
            _ => None,
        }
    }

    pub fn jeton(self) -> &'static str {
        match self {
            Self::Pi => "PI",
            Self::Euler => "EULER",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::Euler => std::f64::consts::E,
        }
    }
}
