//! Noyau — commandes + répartiteur
//!
//! Point d’entrée unique du noyau : un jeton (bouton ou clavier) -> une commande,
//! puis exécution sur l’état vivant.
//!
//! Contrats :
//! - toute commande sauf Undo/Redo pousse un instantané AVANT la mutation,
//!   même si elle ne change rien
//! - en erreur, seules C / CE / MC / MR et les changements de mode passent ;
//!   les autres sont ignorées sans toucher à l’historique
//! - chaque passe d’affichage annule la minuterie d’erreur puis la réarme si besoin

use super::etat::{Base, EtatCalc, ModeAffichage, ModeAngle};
use super::format::{apercu, rendre, Pave, Rendu};
use super::historique::Historique;
use super::minuterie::MinuterieErreur;
use super::moteur::Moteur;
use super::operateurs::{Constante, OpBinaire, OpMemoire, OpUnaire};
use super::trig::FnTrig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Decimale,
    Binaire(OpBinaire),
    Egal,
    EffacerTout,
    EffacerEntree,
    ChangerSigne,
    Trig(FnTrig),
    Unaire(OpUnaire),
    Pourcentage,
    Memoire(OpMemoire),
    Constante(Constante),
    Angle(ModeAngle),
    Affichage(ModeAffichage),
    Base(Base),
    Annuler,
    Retablir,
}

impl Commande {
    /// "C" reste l’effacement : le chiffre hexadécimal C s’envoie en minuscule ("c").
    pub fn depuis_jeton(jeton: &str) -> Option<Self> {
        if jeton == "C" {
            return Some(Self::EffacerTout);
        }

        let mut chars = jeton.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_hexdigit() {
                return Some(Self::Chiffre(c));
            }
        }

        let cmd = match jeton {
            "." => Self::Decimale,
            "=" => Self::Egal,
            "CE" => Self::EffacerEntree,
            "+/-" => Self::ChangerSigne,
            "%" => Self::Pourcentage,
            "Undo" => Self::Annuler,
            "Redo" => Self::Retablir,
            "DEG" => Self::Angle(ModeAngle::Deg),
            "RAD" => Self::Angle(ModeAngle::Rad),
            "GRAD" => Self::Angle(ModeAngle::Grad),
            "NORMAL_DISP" => Self::Affichage(ModeAffichage::Normal),
            "SCI_DISP" => Self::Affichage(ModeAffichage::Scientifique),
            "PROG_DISP" => Self::Affichage(ModeAffichage::Programmeur),
            "DEC" => Self::Base(Base::Dec),
            "HEX" => Self::Base(Base::Hex),
            "OCT" => Self::Base(Base::Oct),
            "BIN" => Self::Base(Base::Bin),
            _ => {
                return OpBinaire::depuis_jeton(jeton)
                    .map(Self::Binaire)
                    .or_else(|| OpUnaire::depuis_jeton(jeton).map(Self::Unaire))
                    .or_else(|| FnTrig::depuis_jeton(jeton).map(Self::Trig))
                    .or_else(|| OpMemoire::depuis_jeton(jeton).map(Self::Memoire))
                    .or_else(|| Constante::depuis_jeton(jeton).map(Self::Constante))
            }
        };
        Some(cmd)
    }

    /// Liste blanche en état d’erreur.
    pub fn permise_en_erreur(self) -> bool {
        matches!(
            self,
            Self::EffacerTout
                | Self::EffacerEntree
                | Self::Memoire(OpMemoire::Effacer | OpMemoire::Rappel)
                | Self::Angle(_)
                | Self::Affichage(_)
                | Self::Base(_)
        )
    }

    fn est_changement_de_mode(self) -> bool {
        matches!(self, Self::Angle(_) | Self::Affichage(_) | Self::Base(_))
    }
}

/// Répartiteur : possède l’état vivant, l’historique et la minuterie d’erreur.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: EtatCalc,
    historique: Historique,
    minuterie: MinuterieErreur,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn pave(&self) -> Pave {
        Pave::pour(self.etat.affichage)
    }

    /// Affichage courant, sans effet de bord.
    pub fn apercu(&self) -> Rendu {
        apercu(&self.etat)
    }

    /// Secondes avant le retour automatique (None si aucune erreur affichée).
    pub fn retour_erreur_dans(&self, maintenant: f64) -> Option<f64> {
        self.minuterie.restant(maintenant)
    }

    /// Jeton texte -> commande. Jeton inconnu : ignoré (journalisé).
    pub fn dispatch(&mut self, jeton: &str, maintenant: f64) -> Rendu {
        match Commande::depuis_jeton(jeton) {
            Some(cmd) => self.executer(cmd, maintenant),
            None => {
                tracing::warn!(jeton, "jeton inconnu ignoré");
                self.apercu()
            }
        }
    }

    pub fn executer(&mut self, cmd: Commande, maintenant: f64) -> Rendu {
        match cmd {
            Commande::Annuler => {
                if let Some(precedent) = self.historique.undo(&self.etat) {
                    tracing::debug!("undo");
                    self.etat = precedent;
                }
                return self.rafraichir(maintenant);
            }
            Commande::Retablir => {
                if let Some(suivant) = self.historique.redo(&self.etat) {
                    tracing::debug!("redo");
                    self.etat = suivant;
                }
                return self.rafraichir(maintenant);
            }
            _ => {}
        }

        if self.etat.erreur && !cmd.permise_en_erreur() {
            tracing::debug!(?cmd, "ignorée (erreur affichée)");
            return self.apercu();
        }

        tracing::debug!(?cmd, "commande");
        self.historique.push_undo(&self.etat);

        // Reprise implicite : un changement de mode efface d’abord l’erreur
        // (les autres modes restent en place).
        if self.etat.erreur && cmd.est_changement_de_mode() {
            self.etat.repartir_de_zero();
        }

        let etait_en_erreur = self.etat.erreur;
        self.appliquer(cmd);
        if self.etat.erreur && !etait_en_erreur {
            tracing::debug!(message = %self.etat.message_erreur, "erreur");
        }

        self.rafraichir(maintenant)
    }

    fn appliquer(&mut self, cmd: Commande) {
        match cmd {
            Commande::Chiffre(c) => self.moteur().ajouter_chiffre(c),
            Commande::Decimale => self.moteur().ajouter_decimale(),
            Commande::Binaire(op) => self.moteur().set_operateur(op),
            Commande::Egal => self.moteur().egal(),
            Commande::ChangerSigne => self.moteur().changer_signe(),
            Commande::Trig(f) => self.moteur().trig(f),
            Commande::Unaire(op) => self.moteur().unaire(op),
            Commande::Pourcentage => self.moteur().pourcentage(),
            Commande::Memoire(op) => self.moteur().memoire(op),
            Commande::Constante(c) => self.moteur().constante(c),
            Commande::EffacerTout => self.etat.clear_all(),
            Commande::EffacerEntree => self.etat.clear_entree(),
            Commande::Angle(a) => self.etat.angle = a,
            Commande::Affichage(mode) => self.reinstaller(|e| e.affichage = mode),
            Commande::Base(base) => self.reinstaller(|e| e.base = base),
            // traités par executer()
            Commande::Annuler | Commande::Retablir => {}
        }
    }

    fn moteur(&mut self) -> Moteur<'_> {
        Moteur::new(&mut self.etat)
    }

    /// Changement de mode/base : l’opérande en saisie est lu sous l’ANCIEN
    /// mode, puis la valeur est réaffichée sous le nouveau.
    fn reinstaller(&mut self, changer: impl FnOnce(&mut EtatCalc)) {
        if !self.etat.nouveau_nombre && !self.etat.erreur {
            self.moteur().analyser_operande();
        }
        changer(&mut self.etat);
        if self.etat.est_programmeur() {
            self.etat.normaliser_entiers();
        }
        self.etat.nouveau_nombre = true;
    }

    /// Précision d’affichage (bornée par set_precision), commande annulable.
    pub fn changer_precision(&mut self, precision: u8, maintenant: f64) -> Rendu {
        self.historique.push_undo(&self.etat);
        self.etat.set_precision(precision);
        self.rafraichir(maintenant)
    }

    /// À appeler à chaque frame : fin de l’affichage d’erreur si l’échéance est passée.
    pub fn tick(&mut self, maintenant: f64) -> Option<Rendu> {
        if !self.minuterie.echue(maintenant) {
            return None;
        }
        self.minuterie.annuler();
        self.etat.lever_erreur();
        Some(self.rafraichir(maintenant))
    }

    fn rafraichir(&mut self, maintenant: f64) -> Rendu {
        self.minuterie.annuler();
        let r = rendre(&mut self.etat);
        if r.erreur {
            self.minuterie.armer(maintenant);
        }
        r
    }
}
