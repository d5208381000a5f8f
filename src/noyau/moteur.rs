//! Noyau — moteur d’évaluation
//!
//! Logique pure sur un `EtatCalc` emprunté en écriture :
//! saisie de chiffres, opérateurs en attente, "=", fonctions, mémoire.
//!
//! Règles communes :
//! - une erreur interrompt la commande ; rien n’est validé avant le calcul complet
//! - en erreur, seules MC / MR agissent (le reste est ignoré)
//! - PROG : valeurs entières 64 bits stockées en f64

use super::erreur::{ErreurCalc, Resultat};
use super::etat::{EtatCalc, LONGUEUR_MAX};
use super::operateurs::{vers_entier, Constante, OpBinaire, OpMemoire, OpUnaire};
use super::trig::{evaluer_trig, FnTrig};

/// Marqueurs d’exposant encore incomplets (saisie flottante).
const EXPOSANTS_INCOMPLETS: [&str; 4] = ["E", "e", "E-", "e-"];

pub struct Moteur<'a> {
    etat: &'a mut EtatCalc,
}

impl<'a> Moteur<'a> {
    pub fn new(etat: &'a mut EtatCalc) -> Self {
        Self { etat }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn ajouter_chiffre(&mut self, c: char) {
        if self.etat.erreur {
            self.etat.clear_all();
        }

        let valide = if self.etat.est_programmeur() {
            self.etat.base.chiffre_valide(c)
        } else {
            c.is_ascii_digit()
        };
        if !valide {
            return;
        }
        let c = c.to_ascii_uppercase();

        let e = &mut *self.etat;
        if e.nouveau_nombre {
            e.texte = c.to_string();
            e.nouveau_nombre = false;
            return;
        }

        // "0" seul : remplacé plutôt que préfixé (sauf après un point)
        if e.texte == "0" && !e.texte.contains('.') {
            if c != '0' {
                e.texte = c.to_string();
            }
            return;
        }

        if e.texte.len() < LONGUEUR_MAX {
            e.texte.push(c);
        }
    }

    pub fn ajouter_decimale(&mut self) {
        if self.etat.erreur {
            self.etat.clear_all();
        }
        if self.etat.est_programmeur() {
            return;
        }

        let e = &mut *self.etat;
        if e.nouveau_nombre {
            e.texte = "0.".to_string();
            e.nouveau_nombre = false;
        } else if !e.texte.contains('.') && e.texte.len() < LONGUEUR_MAX {
            e.texte.push('.');
        }
    }

    /// Texte de l’opérande -> valeur. En cas d’échec, l’erreur est déjà posée.
    pub fn analyser_operande(&mut self) -> bool {
        match self.lire_operande() {
            Ok(v) => {
                self.etat.valeur = v;
                true
            }
            Err(err) => {
                self.etat.set_erreur(err);
                false
            }
        }
    }

    fn lire_operande(&mut self) -> Resultat<f64> {
        let texte = self.etat.texte.replace(',', ".");

        // Saisie partielle tolérée.
        if texte == "." || texte == "-" {
            self.etat.texte = "0".to_string();
            return Ok(0.0);
        }

        if self.etat.est_programmeur() {
            let base = self.etat.base;
            return i64::from_str_radix(&texte, base.radix())
                .map(|n| n as f64)
                .map_err(|_| ErreurCalc::EntierInvalide { base });
        }

        if texte.is_empty() || EXPOSANTS_INCOMPLETS.contains(&texte.as_str()) {
            return Err(ErreurCalc::FormatInvalide);
        }
        texte.parse::<f64>().map_err(|_| ErreurCalc::FormatInvalide)
    }

    /// Matérialise l’opérande s’il est en cours de saisie.
    fn operande_pret(&mut self) -> bool {
        self.etat.nouveau_nombre || self.analyser_operande()
    }

    /* ------------------------ Binaires ------------------------ */

    pub fn set_operateur(&mut self, op: OpBinaire) {
        if self.etat.erreur {
            return;
        }
        let saisi = !self.etat.nouveau_nombre;
        if !self.operande_pret() {
            return;
        }

        // Enchaînement : 3 + 4 * => 7 * ...
        if self.etat.operation_en_attente.is_some() && saisi {
            self.calculer();
            if self.etat.erreur {
                return;
            }
        }

        let e = &mut *self.etat;
        e.precedente = e.valeur;
        e.operation_en_attente = Some(op);
        e.nouveau_nombre = true;
    }

    /// Résout l’opération en attente, ou rejoue la dernière ("=" répété).
    pub fn calculer(&mut self) {
        let (op, gauche, droite) = match self.etat.operation_en_attente {
            Some(op) => (op, self.etat.precedente, self.etat.valeur),
            None => match self.etat.dernier_operateur {
                Some(op) => (op, self.etat.valeur, self.etat.dernier_operande),
                None => {
                    if self.operande_pret() {
                        self.etat.nouveau_nombre = true;
                    }
                    return;
                }
            },
        };

        match self.appliquer_binaire(op, gauche, droite) {
            Ok(r) => {
                let e = &mut *self.etat;
                e.valeur = r;
                e.precedente = gauche;
                e.dernier_operateur = Some(op);
                e.dernier_operande = droite;
                e.operation_en_attente = None;
                e.nouveau_nombre = true;
            }
            Err(err) => self.etat.set_erreur(err),
        }
    }

    fn appliquer_binaire(&self, op: OpBinaire, a: f64, b: f64) -> Resultat<f64> {
        if self.etat.est_programmeur() {
            op.appliquer_entier(vers_entier(a), vers_entier(b))
                .map(|n| n as f64)
        } else {
            op.appliquer_reel(a, b, self.etat.affichage)
        }
    }

    pub fn egal(&mut self) {
        if self.etat.erreur {
            return;
        }
        if self.operande_pret() {
            self.calculer();
        }
    }

    /* ------------------------ Signe ------------------------ */

    pub fn changer_signe(&mut self) {
        if self.etat.erreur {
            return;
        }

        if self.etat.est_programmeur() {
            if !self.operande_pret() {
                return;
            }
            let n = vers_entier(self.etat.valeur);
            self.etat.valeur = n.wrapping_neg() as f64;
            self.etat.nouveau_nombre = true;
            return;
        }

        let e = &mut *self.etat;
        if e.nouveau_nombre {
            e.valeur = -e.valeur;
            return;
        }
        if e.texte == "0" || e.texte == "0.0" {
            return;
        }
        if let Some(reste) = e.texte.strip_prefix('-') {
            e.texte = reste.to_string();
        } else if e.texte.len() < LONGUEUR_MAX {
            e.texte.insert(0, '-');
        }
    }

    /* ------------------------ Fonctions ------------------------ */

    pub fn trig(&mut self, f: FnTrig) {
        if self.etat.erreur {
            return;
        }
        if self.etat.est_programmeur() {
            self.etat.set_erreur(ErreurCalc::Indisponible {
                quoi: f.jeton(),
                mode: self.etat.affichage,
            });
            return;
        }
        if !self.operande_pret() {
            return;
        }

        let r = evaluer_trig(f, self.etat.valeur, self.etat.angle);
        self.valider(r);
    }

    pub fn unaire(&mut self, op: OpUnaire) {
        if self.etat.erreur {
            return;
        }
        if self.etat.est_programmeur() && op != OpUnaire::Non {
            self.etat.set_erreur(ErreurCalc::Indisponible {
                quoi: op.jeton(),
                mode: self.etat.affichage,
            });
            return;
        }
        if !self.operande_pret() {
            return;
        }

        let x = self.etat.valeur;
        let r = if self.etat.est_programmeur() {
            op.appliquer_entier(vers_entier(x)).map(|n| n as f64)
        } else {
            op.appliquer_reel(x, self.etat.affichage)
        };
        self.valider(r);
    }

    fn valider(&mut self, r: Resultat<f64>) {
        match r {
            Ok(v) => {
                self.etat.valeur = v;
                self.etat.nouveau_nombre = true;
            }
            Err(err) => self.etat.set_erreur(err),
        }
    }

    /// % : base × x / 100 pour + et − ; x / 100 pour * et / ; sinon x / 100 seul.
    pub fn pourcentage(&mut self) {
        if self.etat.erreur {
            return;
        }
        if self.etat.est_programmeur() {
            self.etat.set_erreur(ErreurCalc::Indisponible {
                quoi: "%",
                mode: self.etat.affichage,
            });
            return;
        }
        if !self.operande_pret() {
            return;
        }

        let attente = self.etat.operation_en_attente;
        match attente {
            Some(OpBinaire::Plus | OpBinaire::Moins) => {
                self.etat.valeur = self.etat.precedente * self.etat.valeur / 100.0;
                self.calculer();
            }
            Some(OpBinaire::Fois | OpBinaire::Divise) => {
                self.etat.valeur /= 100.0;
                self.calculer();
            }
            _ => {
                let e = &mut *self.etat;
                e.valeur /= 100.0;
                e.dernier_operateur = None;
                e.dernier_operande = 0.0;
            }
        }
        self.etat.nouveau_nombre = true;
    }

    /* ------------------------ Mémoire + constantes ------------------------ */

    pub fn memoire(&mut self, op: OpMemoire) {
        match op {
            OpMemoire::Effacer => self.etat.memoire = 0.0,
            OpMemoire::Rappel => {
                let e = &mut *self.etat;
                e.valeur = if e.est_programmeur() {
                    vers_entier(e.memoire) as f64
                } else {
                    e.memoire
                };
                e.nouveau_nombre = true;
                e.lever_erreur();
            }
            OpMemoire::Ajouter | OpMemoire::Soustraire => {
                if self.etat.erreur || !self.operande_pret() {
                    return;
                }
                let v = if self.etat.est_programmeur() {
                    vers_entier(self.etat.valeur) as f64
                } else {
                    self.etat.valeur
                };
                let e = &mut *self.etat;
                if op == OpMemoire::Ajouter {
                    e.memoire += v;
                } else {
                    e.memoire -= v;
                }
                e.nouveau_nombre = true;
            }
        }
    }

    pub fn constante(&mut self, c: Constante) {
        if self.etat.erreur {
            return;
        }
        if self.etat.est_programmeur() {
            self.etat.set_erreur(ErreurCalc::Indisponible {
                quoi: c.jeton(),
                mode: self.etat.affichage,
            });
            return;
        }
        self.etat.valeur = c.valeur();
        self.etat.nouveau_nombre = true;
    }
}
