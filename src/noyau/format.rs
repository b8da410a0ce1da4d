// src/noyau/format.rs
//
// Affichage d’un résultat flottant, forme “canonique” :
// - entiers sans ".0"            : 10, -3
// - décimal le plus court qui relit la même valeur : 0.5, 0.30000000000000004
// - notation exponentielle hors [1e-6, 1e21) : 1e+21, 1.5e-7
// - -0 s’affiche "0"

/// Bornes de la notation positionnelle (au-delà : exposant).
const SEUIL_HAUT: f64 = 1e21;
const SEUIL_BAS: f64 = 1e-6;

/// Formate un nombre fini. Les non-finis sont écartés en amont (ErreurEval::NonFini).
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= SEUIL_HAUT || a < SEUIL_BAS {
        return format_exposant(x);
    }

    // Display de f64 : plus courte écriture aller-retour, sans exposant
    format!("{x}")
}

/// "1e21" -> "1e+21" ; "1.5e-7" reste tel quel.
fn format_exposant(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
