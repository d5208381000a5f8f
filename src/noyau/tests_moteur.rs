//! Tests moteur : saisie, lecture de l’opérande, opérateurs, fonctions.
//!
//! On pilote `Moteur` directement sur un `EtatCalc` (sans répartiteur ni historique).

use std::f64::consts::FRAC_PI_2;

use super::erreur::ErreurCalc;
use super::etat::{Base, EtatCalc, ModeAffichage, ModeAngle, LONGUEUR_MAX};
use super::moteur::Moteur;
use super::operateurs::{vers_entier, OpBinaire, OpMemoire, OpUnaire};
use super::trig::{evaluer_trig, FnTrig};

fn taper(etat: &mut EtatCalc, s: &str) {
    let mut m = Moteur::new(etat);
    for c in s.chars() {
        if c == '.' {
            m.ajouter_decimale();
        } else {
            m.ajouter_chiffre(c);
        }
    }
}

fn prog(base: Base) -> EtatCalc {
    EtatCalc {
        affichage: ModeAffichage::Programmeur,
        base,
        ..EtatCalc::default()
    }
}

fn en_saisie(texte: &str, etat: EtatCalc) -> EtatCalc {
    EtatCalc {
        texte: texte.to_string(),
        nouveau_nombre: false,
        ..etat
    }
}

fn message(err: ErreurCalc) -> String {
    err.to_string()
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn zero_initial_remplace() {
    let mut e = EtatCalc::default();
    taper(&mut e, "005");
    assert_eq!(e.texte, "5");

    let mut e = EtatCalc::default();
    taper(&mut e, "0.05");
    assert_eq!(e.texte, "0.05");
}

#[test]
fn point_decimal_une_seule_fois() {
    let mut e = EtatCalc::default();
    taper(&mut e, "1.2.3");
    assert_eq!(e.texte, "1.23");

    let mut e = EtatCalc::default();
    taper(&mut e, ".5");
    assert_eq!(e.texte, "0.5");
}

#[test]
fn saisie_plafonnee() {
    let mut e = EtatCalc::default();
    taper(&mut e, "123456789012345678901234");
    assert_eq!(e.texte.len(), LONGUEUR_MAX);
    taper(&mut e, ".");
    assert_eq!(e.texte.len(), LONGUEUR_MAX);
}

#[test]
fn lettres_hex_ignorees_hors_programmeur() {
    let mut e = EtatCalc::default();
    taper(&mut e, "1A2");
    assert_eq!(e.texte, "12");
}

#[test]
fn programmeur_filtre_par_base() {
    let mut e = prog(Base::Hex);
    taper(&mut e, "1aF");
    assert_eq!(e.texte, "1AF");

    let mut e = prog(Base::Oct);
    taper(&mut e, "789");
    assert_eq!(e.texte, "7");

    let mut e = prog(Base::Bin);
    taper(&mut e, "1021");
    assert_eq!(e.texte, "101");

    // pas de point en PROG
    let mut e = prog(Base::Dec);
    taper(&mut e, "1.5");
    assert_eq!(e.texte, "15");
}

#[test]
fn chiffre_en_erreur_repart_de_zero() {
    let mut e = EtatCalc {
        memoire: 4.0,
        ..EtatCalc::default()
    };
    e.set_erreur(ErreurCalc::DivisionParZero);
    taper(&mut e, "7");
    assert!(!e.erreur);
    assert_eq!(e.texte, "7");
    assert_eq!(e.memoire, 4.0);
}

/* ------------------------ Lecture de l’opérande ------------------------ */

#[test]
fn saisie_partielle_toleree() {
    for t in [".", "-"] {
        let mut e = en_saisie(t, EtatCalc::default());
        assert!(Moteur::new(&mut e).analyser_operande());
        assert_eq!(e.valeur, 0.0);
        assert_eq!(e.texte, "0");
    }
}

#[test]
fn exposant_incomplet_rejete() {
    for t in ["E", "e-"] {
        let mut e = en_saisie(t, EtatCalc::default());
        assert!(!Moteur::new(&mut e).analyser_operande());
        assert_eq!(e.message_erreur, message(ErreurCalc::FormatInvalide));
    }

    let mut e = en_saisie("1e3", EtatCalc::default());
    assert!(Moteur::new(&mut e).analyser_operande());
    assert_eq!(e.valeur, 1000.0);
}

#[test]
fn virgule_normalisee() {
    let mut e = en_saisie("1,5", EtatCalc::default());
    assert!(Moteur::new(&mut e).analyser_operande());
    assert_eq!(e.valeur, 1.5);
}

#[test]
fn programmeur_lit_dans_la_base() {
    let mut e = en_saisie("FF", prog(Base::Hex));
    assert!(Moteur::new(&mut e).analyser_operande());
    assert_eq!(e.valeur, 255.0);

    // "E" est un chiffre hex, pas un exposant
    let mut e = en_saisie("E", prog(Base::Hex));
    assert!(Moteur::new(&mut e).analyser_operande());
    assert_eq!(e.valeur, 14.0);

    let mut e = en_saisie("12", prog(Base::Bin));
    assert!(!Moteur::new(&mut e).analyser_operande());
    assert_eq!(
        e.message_erreur,
        message(ErreurCalc::EntierInvalide { base: Base::Bin })
    );
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn erreur_efface_l_operation_en_attente() {
    let mut e = EtatCalc::default();
    taper(&mut e, "8");
    let mut m = Moteur::new(&mut e);
    m.set_operateur(OpBinaire::Divise);
    m.egal();
    // 8 / 8 = 1 ; puis / 0
    m.set_operateur(OpBinaire::Divise);
    taper(&mut e, "0");
    Moteur::new(&mut e).egal();
    assert!(e.erreur);
    assert_eq!(e.operation_en_attente, None);
    assert_eq!(e.dernier_operateur, None);
    assert_eq!(e.message_erreur, message(ErreurCalc::DivisionParZero));
}

#[test]
fn repetition_sans_validation_partielle() {
    // 2 x^y 1000 = 2^1000 ; "=" encore : (2^1000)^1000 = inf -> erreur, valeur intacte
    let mut e = EtatCalc::default();
    taper(&mut e, "2");
    Moteur::new(&mut e).set_operateur(OpBinaire::Puissance);
    taper(&mut e, "1000");
    Moteur::new(&mut e).egal();
    let avant = e.valeur;
    assert!(avant > 1e300);

    Moteur::new(&mut e).egal();
    assert!(e.erreur);
    assert_eq!(e.valeur, avant);
    assert_eq!(e.message_erreur, message(ErreurCalc::Depassement));
}

#[test]
fn entier_enveloppe_et_decalages() {
    assert_eq!(OpBinaire::Plus.appliquer_entier(i64::MAX, 1), Ok(i64::MIN));
    assert_eq!(OpBinaire::Divise.appliquer_entier(i64::MIN, -1), Ok(i64::MIN));
    assert_eq!(OpBinaire::Mod.appliquer_entier(i64::MIN, -1), Ok(0));
    assert_eq!(OpBinaire::DecalageGauche.appliquer_entier(1, 4), Ok(16));
    assert_eq!(OpBinaire::DecalageGauche.appliquer_entier(1, 64), Ok(1));
    assert_eq!(OpBinaire::DecalageDroite.appliquer_entier(-16, 2), Ok(-4));
    assert_eq!(
        OpBinaire::Mod.appliquer_entier(5, 0),
        Err(ErreurCalc::ModuloParZero)
    );
    assert_eq!(
        OpBinaire::Puissance.appliquer_entier(2, 3),
        Err(ErreurCalc::Indisponible {
            quoi: "x^y",
            mode: ModeAffichage::Programmeur
        })
    );
}

#[test]
fn bit_a_bit_indisponible_en_reel() {
    assert_eq!(
        OpBinaire::Et.appliquer_reel(1.0, 2.0, ModeAffichage::Normal),
        Err(ErreurCalc::Indisponible {
            quoi: "AND",
            mode: ModeAffichage::Normal
        })
    );
}

#[test]
fn division_reelle_par_presque_zero() {
    assert_eq!(
        OpBinaire::Divise.appliquer_reel(1.0, 1e-13, ModeAffichage::Normal),
        Err(ErreurCalc::DivisionParZero)
    );
    assert_eq!(
        OpBinaire::Divise.appliquer_reel(1.0, 4.0, ModeAffichage::Normal),
        Ok(0.25)
    );
}

#[test]
fn conversion_entiere_saturee() {
    assert_eq!(vers_entier(-3.9), -3);
    assert_eq!(vers_entier(f64::NAN), 0);
    assert_eq!(vers_entier(1e30), i64::MAX);
    assert_eq!(vers_entier(-1e30), i64::MIN);
}

/* ------------------------ Signe ------------------------ */

#[test]
fn changer_signe_sur_le_texte() {
    let mut e = EtatCalc::default();
    taper(&mut e, "12");
    Moteur::new(&mut e).changer_signe();
    assert_eq!(e.texte, "-12");
    Moteur::new(&mut e).changer_signe();
    assert_eq!(e.texte, "12");

    let mut e = en_saisie("0", EtatCalc::default());
    Moteur::new(&mut e).changer_signe();
    assert_eq!(e.texte, "0");
}

#[test]
fn changer_signe_programmeur_sur_la_valeur() {
    let mut e = prog(Base::Dec);
    taper(&mut e, "5");
    Moteur::new(&mut e).changer_signe();
    assert_eq!(e.valeur, -5.0);
    assert!(e.nouveau_nombre);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn trig_angles_singuliers() {
    assert_eq!(evaluer_trig(FnTrig::Cos, 90.0, ModeAngle::Deg), Ok(0.0));
    assert_eq!(evaluer_trig(FnTrig::Cos, 270.0, ModeAngle::Deg), Ok(0.0));
    assert_eq!(
        evaluer_trig(FnTrig::Tan, -90.0, ModeAngle::Deg),
        Err(ErreurCalc::TangenteIndefinie)
    );
    assert_eq!(
        evaluer_trig(FnTrig::Tan, 100.0, ModeAngle::Grad),
        Err(ErreurCalc::TangenteIndefinie)
    );
    assert_eq!(
        evaluer_trig(FnTrig::Tan, FRAC_PI_2, ModeAngle::Rad),
        Err(ErreurCalc::TangenteIndefinie)
    );
    assert_eq!(evaluer_trig(FnTrig::Cos, FRAC_PI_2, ModeAngle::Rad), Ok(0.0));
}

#[test]
fn trig_petits_resultats_ramenes_a_zero() {
    assert_eq!(evaluer_trig(FnTrig::Sin, 180.0, ModeAngle::Deg), Ok(0.0));
    assert_eq!(evaluer_trig(FnTrig::Sin, 200.0, ModeAngle::Grad), Ok(0.0));
    let s = evaluer_trig(FnTrig::Sin, 30.0, ModeAngle::Deg).expect("sin 30");
    assert!((s - 0.5).abs() < 1e-12);
    let t = evaluer_trig(FnTrig::Tan, 45.0, ModeAngle::Deg).expect("tan 45");
    assert!((t - 1.0).abs() < 1e-12);
}

#[test]
fn trig_interdite_en_programmeur() {
    let mut e = prog(Base::Dec);
    Moteur::new(&mut e).trig(FnTrig::Sin);
    assert!(e.erreur);
}

#[test]
fn unaires_domaines() {
    let n = ModeAffichage::Normal;
    assert_eq!(
        OpUnaire::Log.appliquer_reel(0.0, n),
        Err(ErreurCalc::LogDomaine { fonction: "log" })
    );
    assert_eq!(
        OpUnaire::Ln.appliquer_reel(-1.0, n),
        Err(ErreurCalc::LogDomaine { fonction: "ln" })
    );
    assert_eq!(
        OpUnaire::Racine.appliquer_reel(-1.0, n),
        Err(ErreurCalc::RacineNegative)
    );
    assert_eq!(
        OpUnaire::Inverse.appliquer_reel(0.0, n),
        Err(ErreurCalc::InverseDeZero)
    );
    let l = OpUnaire::Log.appliquer_reel(1000.0, n).expect("log 1000");
    assert!((l - 3.0).abs() < 1e-12);
    assert_eq!(OpUnaire::Carre.appliquer_reel(-3.0, n), Ok(9.0));
    assert_eq!(OpUnaire::Carre.appliquer_reel(1e-8, n), Ok(0.0));
    assert_eq!(
        OpUnaire::Carre.appliquer_reel(1e200, n),
        Err(ErreurCalc::Depassement)
    );
}

#[test]
fn racine_negative_garde_la_valeur() {
    let mut e = en_saisie("-1", EtatCalc::default());
    Moteur::new(&mut e).unaire(OpUnaire::Racine);
    assert!(e.erreur);
    assert_eq!(e.valeur, -1.0);
    assert_eq!(e.message_erreur, message(ErreurCalc::RacineNegative));
}

#[test]
fn non_seul_unaire_en_programmeur() {
    let mut e = prog(Base::Dec);
    Moteur::new(&mut e).unaire(OpUnaire::Non);
    assert_eq!(e.valeur, -1.0);

    let mut e = prog(Base::Dec);
    Moteur::new(&mut e).unaire(OpUnaire::Racine);
    assert!(e.erreur);
}

/* ------------------------ Pourcentage + mémoire ------------------------ */

#[test]
fn pourcentage_selon_operateur() {
    let mut e = EtatCalc::default();
    taper(&mut e, "200");
    Moteur::new(&mut e).set_operateur(OpBinaire::Moins);
    taper(&mut e, "10");
    Moteur::new(&mut e).pourcentage();
    assert_eq!(e.valeur, 180.0);

    let mut e = EtatCalc::default();
    taper(&mut e, "50");
    Moteur::new(&mut e).set_operateur(OpBinaire::Fois);
    taper(&mut e, "10");
    Moteur::new(&mut e).pourcentage();
    assert_eq!(e.valeur, 5.0);

    let mut e = EtatCalc::default();
    taper(&mut e, "50");
    Moteur::new(&mut e).pourcentage();
    assert_eq!(e.valeur, 0.5);
    assert_eq!(e.dernier_operateur, None);
}

#[test]
fn memoire_programmeur_tronque() {
    let mut e = EtatCalc {
        affichage: ModeAffichage::Programmeur,
        valeur: 7.9,
        ..EtatCalc::default()
    };
    let mut m = Moteur::new(&mut e);
    m.memoire(OpMemoire::Ajouter);
    m.memoire(OpMemoire::Ajouter);
    m.memoire(OpMemoire::Soustraire);
    assert_eq!(e.memoire, 7.0);
}

#[test]
fn rappel_memoire_leve_l_erreur() {
    let mut e = EtatCalc {
        memoire: 42.0,
        ..EtatCalc::default()
    };
    e.set_erreur(ErreurCalc::InverseDeZero);
    Moteur::new(&mut e).memoire(OpMemoire::Rappel);
    assert!(!e.erreur);
    assert_eq!(e.valeur, 42.0);
    assert!(e.nouveau_nombre);
}

#[test]
fn rappel_memoire_programmeur_entier() {
    let mut e = EtatCalc {
        affichage: ModeAffichage::Programmeur,
        memoire: 2.5,
        ..EtatCalc::default()
    };
    Moteur::new(&mut e).memoire(OpMemoire::Rappel);
    assert_eq!(e.valeur, 2.0);
    // la mémoire elle-même garde sa fraction
    assert_eq!(e.memoire, 2.5);
}
