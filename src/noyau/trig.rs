// src/noyau/trig.rs
//
// Trig (sin/cos/tan) selon le mode d’angle
// ----------------------------------------
// - Conversion DEG / GRAD / RAD -> radians
// - Angles singuliers (multiple impair de 90° / 100 grad / π/2) :
//   cos = 0 exactement, tan = indéfinie
// - |résultat| < EPSILON -> 0 (sin(180°) ne donne pas 1.2e-16)

use std::f64::consts::{FRAC_PI_2, PI};

use super::erreur::{fini, ErreurCalc, Resultat};
use super::etat::ModeAngle;
use super::operateurs::EPSILON;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnTrig {
    Sin,
    Cos,
    Tan,
}

impl FnTrig {
    pub fn depuis_jeton(s: &str) -> Option<Self> {
        match s {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    pub fn jeton(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

pub fn en_radians(angle: f64, mode: ModeAngle) -> f64 {
    match mode {
        ModeAngle::Deg => angle.to_radians(),
        ModeAngle::Grad => angle * (PI / 200.0),
        ModeAngle::Rad => angle,
    }
}

/// Multiple impair d’un quart de tour ?
/// DEG / GRAD : comparaison exacte ; RAD : à EPSILON près.
pub fn est_quart_de_tour_impair(angle: f64, mode: ModeAngle) -> bool {
    match mode {
        ModeAngle::Deg => (angle % 180.0).abs() == 90.0,
        ModeAngle::Grad => (angle % 200.0).abs() == 100.0,
        ModeAngle::Rad => ((angle.abs() % PI) - FRAC_PI_2).abs() < EPSILON,
    }
}

pub fn evaluer_trig(f: FnTrig, angle: f64, mode: ModeAngle) -> Resultat<f64> {
    let rad = en_radians(angle, mode);
    let singulier = est_quart_de_tour_impair(angle, mode);

    let r = match f {
        FnTrig::Sin => rad.sin(),
        FnTrig::Cos if singulier => 0.0,
        FnTrig::Cos => rad.cos(),
        FnTrig::Tan if singulier => return Err(ErreurCalc::TangenteIndefinie),
        FnTrig::Tan => rad.tan(),
    };

    let r = if r.abs() < EPSILON { 0.0 } else { r };
    fini(r)
}
