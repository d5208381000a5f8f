//! src/noyau/etat.rs
//!
//! État de la calculatrice (données seulement).
//!
//! Rôle : contenir l’opérande en saisie, les valeurs, l’opération en attente,
//! les modes et la mémoire. Copié tel quel (Clone) pour l’historique undo/redo.
//!
//! Contrats :
//! - Aucune évaluation ici (voir moteur.rs).
//! - erreur => operation_en_attente == None (garanti par set_erreur).
//! - La saisie clavier ne dépasse jamais LONGUEUR_MAX caractères.
//! - PROG => valeur et precedente entières (voir normaliser_entiers).

use std::fmt;

use super::erreur::ErreurCalc;
use super::operateurs::{vers_entier, OpBinaire};

/// Largeur de l’afficheur (saisie).
pub const LONGUEUR_MAX: usize = 16;

/// Précision décimale par défaut (chiffres après la virgule).
pub const PRECISION_DEFAUT: u8 = 10;

/// Garde-fou : précision bornée.
pub const PRECISION_MAX: u8 = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
    Grad,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAffichage {
    #[default]
    Normal,
    Scientifique,
    Programmeur,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Base {
    #[default]
    Dec,
    Hex,
    Oct,
    Bin,
}

impl ModeAngle {
    pub fn jeton(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
            Self::Grad => "GRAD",
        }
    }
}

impl ModeAffichage {
    pub fn jeton(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL_DISP",
            Self::Scientifique => "SCI_DISP",
            Self::Programmeur => "PROG_DISP",
        }
    }
}

impl fmt::Display for ModeAffichage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "NORMAL",
            Self::Scientifique => "SCI",
            Self::Programmeur => "PROG",
        };
        f.write_str(s)
    }
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Self::Dec => 10,
            Self::Hex => 16,
            Self::Oct => 8,
            Self::Bin => 2,
        }
    }

    /// Chiffre acceptable dans cette base (hex insensible à la casse).
    pub fn chiffre_valide(self, c: char) -> bool {
        c.is_digit(self.radix())
    }

    pub fn jeton(self) -> &'static str {
        match self {
            Self::Dec => "DEC",
            Self::Hex => "HEX",
            Self::Oct => "OCT",
            Self::Bin => "BIN",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.jeton())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    // --- saisie / affichage ---
    pub texte: String,
    pub nouveau_nombre: bool,
    pub erreur: bool,
    pub message_erreur: String,

    // --- valeurs ---
    pub valeur: f64,
    pub precedente: f64,
    pub operation_en_attente: Option<OpBinaire>,

    // --- répétition de "=" ---
    pub dernier_operateur: Option<OpBinaire>,
    pub dernier_operande: f64,

    // --- modes ---
    pub angle: ModeAngle,
    pub affichage: ModeAffichage,
    pub base: Base,
    pub precision: u8,

    // --- mémoire ---
    pub memoire: f64,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            texte: "0".to_string(),
            nouveau_nombre: true,
            erreur: false,
            message_erreur: String::new(),
            valeur: 0.0,
            precedente: 0.0,
            operation_en_attente: None,
            dernier_operateur: None,
            dernier_operande: 0.0,
            angle: ModeAngle::default(),
            affichage: ModeAffichage::default(),
            base: Base::default(),
            precision: PRECISION_DEFAUT,
            memoire: 0.0,
        }
    }
}

impl EtatCalc {
    pub fn est_programmeur(&self) -> bool {
        self.affichage == ModeAffichage::Programmeur
    }

    /* ------------------------ Effacements ------------------------ */

    /// C : remise à zéro (base DEC + précision par défaut).
    /// Conserve la mémoire, le mode d’angle et le mode d’affichage.
    pub fn clear_all(&mut self) {
        self.repartir_de_zero();
        self.base = Base::Dec;
        self.precision = PRECISION_DEFAUT;
    }

    /// Opérande, valeurs, opération en attente et erreur à zéro.
    /// Modes (base et précision comprises) et mémoire intacts.
    pub fn repartir_de_zero(&mut self) {
        self.texte = "0".to_string();
        self.valeur = 0.0;
        self.precedente = 0.0;
        self.operation_en_attente = None;
        self.nouveau_nombre = true;
        self.erreur = false;
        self.message_erreur.clear();
        self.dernier_operateur = None;
        self.dernier_operande = 0.0;
    }

    /// CE : efface l’entrée courante ; en erreur, équivaut à C.
    pub fn clear_entree(&mut self) {
        if self.erreur {
            self.clear_all();
            return;
        }
        self.texte = "0".to_string();
        self.valeur = 0.0;
        self.nouveau_nombre = true;
    }

    /// Place une erreur : le message remplace l’opérande, l’opération en attente
    /// et la répétition de "=" sont oubliées. Mémoire et modes intacts.
    pub fn set_erreur(&mut self, err: ErreurCalc) {
        let msg = err.to_string();
        self.texte = msg.clone();
        self.message_erreur = msg;
        self.erreur = true;
        self.nouveau_nombre = true;
        self.operation_en_attente = None;
        self.dernier_operateur = None;
        self.dernier_operande = 0.0;
    }

    /// Fin de l’affichage temporaire d’une erreur (minuterie échue).
    pub fn lever_erreur(&mut self) {
        self.erreur = false;
        self.message_erreur.clear();
    }

    /// Entrée en PROG : valeurs tronquées vers l’entier 64 bits.
    pub fn normaliser_entiers(&mut self) {
        self.valeur = vers_entier(self.valeur) as f64;
        self.precedente = vers_entier(self.precedente) as f64;
        self.dernier_operande = vers_entier(self.dernier_operande) as f64;
    }

    pub fn set_precision(&mut self, precision: u8) {
        self.precision = precision.min(PRECISION_MAX);
    }
}
