//! Tests fuzz safe : suites de touches aléatoires, invariants vérifiés à chaque touche.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : l’expression reste toujours grammaticale

use std::time::{Duration, Instant};

use super::eval::evaluate;
use super::saisie::{MachineSaisie, MARQUEUR_ERREUR};
use super::touches::{Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres sur-représentés, sinon tout finit en rejets
    match rng.pick(20) {
        0..=7 => Touche::Chiffre(rng.pick(10) as u8),
        8 => Touche::Op(Operateur::Plus),
        9 => Touche::Op(Operateur::Moins),
        10 => Touche::Op(Operateur::Fois),
        11 => Touche::Op(Operateur::Divise),
        12 => Touche::ParOuvrante,
        13 => Touche::ParFermante,
        14 => Touche::Pourcent,
        15 => Touche::Point,
        16 | 17 => Touche::Clear,
        _ => Touche::Egal,
    }
}

/* ------------------------ Invariants ------------------------ */

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '×' | '÷')
}

fn check_invariants(m: &MachineSaisie, historique: &[Touche]) {
    let e = m.etat();
    let s = &e.expression;
    let ctx = || format!("expr={s:?} touches={historique:?}");

    assert!(!s.is_empty(), "expression vide: {}", ctx());
    assert_eq!(s.chars().last(), Some(e.dernier), "{}", ctx());

    let ouvertes = s.chars().filter(|&c| c == '(').count();
    let fermees = s.chars().filter(|&c| c == ')').count();
    assert_eq!(ouvertes - fermees, e.profondeur, "{}", ctx());

    let chars: Vec<char> = s.chars().collect();
    for w in chars.windows(2) {
        if est_operateur(w[0]) && est_operateur(w[1]) {
            assert!(
                matches!(w, ['×', '-'] | ['÷', '-']),
                "double opérateur {w:?}: {}",
                ctx()
            );
        }
        if w[1] == '%' {
            assert!(
                w[0].is_ascii_digit() || w[0] == '%',
                "'%' mal placé: {}",
                ctx()
            );
        }
    }

    for nombre in s.split(|c: char| est_operateur(c) || matches!(c, '(' | ')' | '%')) {
        assert!(
            nombre.chars().filter(|&c| c == '.').count() <= 1,
            "deux points dans {nombre:?}: {}",
            ctx()
        );
    }
}

fn check_resultat(courant: &str) {
    if courant == MARQUEUR_ERREUR {
        return;
    }
    let v: f64 = courant
        .parse()
        .unwrap_or_else(|_| panic!("résultat illisible: {courant:?}"));
    assert!(v.is_finite());
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_de_saisie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut m = MachineSaisie::new();
        let mut historique = Vec::new();

        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            historique.push(t);

            let a = m.submit(t);
            check_invariants(&m, &historique);

            if t == Touche::Egal {
                assert_eq!(m.etat().profondeur, 0);
                check_resultat(&a.courant);
                if a.courant == MARQUEUR_ERREUR {
                    seen_err += 1;
                } else {
                    // un résultat affiché doit pouvoir être repris tel quel
                    assert_eq!(
                        evaluate(&a.courant).as_deref(),
                        Ok(a.courant.as_str()),
                        "touches={historique:?}"
                    );
                    seen_ok += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = MachineSaisie::new();
        (0..300)
            .map(|_| m.submit(gen_touche(&mut rng)))
            .collect::<Vec<_>>()
    };
    assert_eq!(jouer(0xBADC0DE_u64), jouer(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_evaluateur_texte_arbitraire() {
    // Chaînes pathologiques (hors machine de saisie) : jamais de panique.
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let alphabet: Vec<char> = "0123456789+-×÷*/().% Ee".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let n = rng.pick(16) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        if let Ok(v) = evaluate(&s) {
            check_resultat(&v);
        }
    }
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut m = MachineSaisie::new();
    for _ in 0..500 {
        m.submit(Touche::ParOuvrante);
    }
    m.submit(Touche::Chiffre(7));
    let a = m.submit(Touche::Egal);
    budget(t0, max);

    assert_eq!(a.courant, "7");
}
