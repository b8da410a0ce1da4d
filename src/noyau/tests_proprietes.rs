//! Propriétés observables de bout en bout (touches -> affichage).
//!
//! On passe toujours par la machine de saisie, comme l’utilisateur.

use super::affichage::{Affichage, LibelleClear};
use super::saisie::MachineSaisie;
use super::touches::{Operateur, Touche};

fn taper(m: &mut MachineSaisie, symboles: &str) -> Affichage {
    let mut a = m.affichage();
    for c in symboles.chars() {
        let t = Touche::depuis_symbole(&c.to_string())
            .unwrap_or_else(|| panic!("symbole inconnu {c:?}"));
        a = m.submit(t);
    }
    a
}

fn resultat(symboles: &str) -> String {
    let mut m = MachineSaisie::new();
    taper(&mut m, symboles);
    m.submit(Touche::Egal).courant
}

#[test]
fn prop_exemples_numeriques() {
    assert_eq!(resultat("2+3"), "5");
    assert_eq!(resultat("2.5×4"), "10");
    assert_eq!(resultat("50%"), "0.5");
    assert_eq!(resultat("(2+3)(4"), "20");
    assert_eq!(resultat("5÷0"), "ERROR");
}

#[test]
fn prop_juxtaposition_saisie_complete() {
    assert_eq!(resultat("(2+3)(4)"), "20");
    assert_eq!(resultat("2(3+1)"), "8");
    assert_eq!(resultat("(2)5"), "10");
}

#[test]
fn prop_pourcent_litteral() {
    assert_eq!(resultat("1+2%"), "1.02");
    // '%' refusé après ')' : reste "(1+2)"
    assert_eq!(resultat("(1+2)%"), "3");
}

#[test]
fn prop_signe_apres_operateur() {
    assert_eq!(resultat("3×-4"), "-12");
    assert_eq!(resultat("-8÷-2"), "4");
}

#[test]
fn prop_point_decimal_bloque_jusqu_au_prochain_nombre() {
    let mut m = MachineSaisie::new();
    let avant = taper(&mut m, "3.14");
    let apres = m.submit(Touche::Point);
    assert_eq!(avant, apres);

    let a = taper(&mut m, "+.");
    assert_eq!(a.courant, "3.14+");
    let a = taper(&mut m, "1.");
    assert_eq!(a.courant, "3.14+1.");

    let a = taper(&mut m, "5(2.");
    assert_eq!(a.courant, "3.14+1.5(2.");
}

#[test]
fn prop_clear_un_caractere_ou_tout() {
    let mut m = MachineSaisie::new();
    taper(&mut m, "12+3");
    assert_eq!(m.submit(Touche::Clear).courant, "12+");

    let mut m = MachineSaisie::new();
    taper(&mut m, "5");
    assert_eq!(m.submit(Touche::Clear).courant, "0");
}

#[test]
fn prop_libelle_ac_puis_chiffre_remplace() {
    let mut m = MachineSaisie::new();
    let a = taper(&mut m, "2+2=");
    assert_eq!(a.libelle_clear, LibelleClear::AC);

    let a = m.submit(Touche::Chiffre(7));
    assert_eq!(a.courant, "7");
    assert_eq!(a.libelle_clear, LibelleClear::CE);
}

#[test]
fn prop_rejet_idempotent() {
    // (préfixe, touche illégale)
    let cas = [
        ("5%", Touche::Chiffre(3)),
        ("5+", Touche::Op(Operateur::Fois)),
        ("5+", Touche::Op(Operateur::Moins)),
        ("5", Touche::ParFermante),
        ("(5+", Touche::ParFermante),
        ("(", Touche::Pourcent),
        ("3.1", Touche::Point),
        ("(", Touche::Point),
    ];

    for (prefixe, touche) in cas {
        let mut m = MachineSaisie::new();
        let avant = taper(&mut m, prefixe);
        let etat_avant = m.etat().clone();

        let apres = m.submit(touche);
        assert_eq!(avant, apres, "prefixe={prefixe:?} touche={touche:?}");
        assert_eq!(&etat_avant, m.etat());

        // deux fois : toujours rien
        assert_eq!(m.submit(touche), apres);
    }
}

#[test]
fn prop_fermeture_automatique() {
    for saisie in ["(((1", "(2+(3×(4", "2×(3+(4-1"] {
        let mut m = MachineSaisie::new();
        taper(&mut m, saisie);
        let ouvertes = m.etat().profondeur;
        assert!(ouvertes > 0);

        let a = m.submit(Touche::Egal);
        assert_eq!(m.etat().profondeur, 0);
        assert_ne!(a.courant, "ERROR", "saisie={saisie:?}");
        assert!(a.precedent.ends_with(&format!("{} =", ")".repeat(ouvertes))));
    }
}

#[test]
fn prop_enchainement_apres_resultat_exponentiel() {
    let mut m = MachineSaisie::new();
    let a = taper(&mut m, "100000000000×100000000000=");
    assert_eq!(a.courant, "1e+22");
    let a = taper(&mut m, "+1=");
    assert_eq!(a.courant, "1e+22");
    assert_eq!(a.precedent, "1e+22+1 =");

    let mut m = MachineSaisie::new();
    let a = taper(&mut m, "1÷10000000=");
    assert_eq!(a.courant, "1e-7");
    let a = taper(&mut m, "×10=");
    assert_eq!(a.courant, "0.000001");
}

#[test]
fn prop_point_refuse_apres_exposant() {
    let mut m = MachineSaisie::new();
    taper(&mut m, "1÷10000000=");
    let a = m.submit(Touche::Point);
    assert_eq!(a.courant, "1e-7");
}

#[test]
fn prop_enchainement_ans() {
    let mut m = MachineSaisie::new();
    taper(&mut m, "6×7=");
    let a = taper(&mut m, "-2=");
    assert_eq!(a.courant, "40");
    assert_eq!(a.precedent, "42-2 =");

    let a = m.submit(Touche::Op(Operateur::Plus));
    assert_eq!(a.precedent, "Ans = 40");
    assert_eq!(a.courant, "40+");
}
