// src/noyau/reecriture.rs
//
// Réécritures textuelles AVANT l’évaluation (ordre significatif) :
//   1) × -> *   ÷ -> /
//   2) %  -> " * (1/100)"          (littéral : l’opérande gauche n’est pas regroupé)
//   3) chiffre|")" suivi de "("    -> insère "*"
//   4) ")" suivi d’un chiffre      -> insère "*"
//
// Toutes pures : &str -> String.

/// 1) Symboles humains -> opérateurs standard.
pub fn normaliser_operateurs(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            _ => c,
        })
        .collect()
}

/// 2) Pourcentage = multiplication par 1/100.
/// "1+2%" devient "1+2 * (1/100)" : seul le 2 est concerné.
pub fn developper_pourcent(s: &str) -> String {
    s.replace('%', " * (1/100)")
}

/// 3) Juxtaposition avant une parenthèse : "5(" -> "5*(" ; ")(" -> ")*(".
pub fn multiplication_avant_parenthese(s: &str) -> String {
    inserer_fois(s, |prec, c| c == '(' && (prec.is_ascii_digit() || prec == ')'))
}

/// 4) Juxtaposition après une parenthèse : ")5" -> ")*5".
pub fn multiplication_apres_parenthese(s: &str) -> String {
    inserer_fois(s, |prec, c| prec == ')' && c.is_ascii_digit())
}

/// Insère '*' entre deux caractères consécutifs quand `colle(prec, c)`.
fn inserer_fois(s: &str, colle: impl Fn(char, char) -> bool) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prec: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prec {
            if colle(p, c) {
                out.push('*');
            }
        }
        out.push(c);
        prec = Some(c);
    }
    out
}

/// Pipeline complet (1 -> 4).
pub fn reecrire(s: &str) -> String {
    let s = normaliser_operateurs(s);
    let s = developper_pourcent(&s);
    let s = multiplication_avant_parenthese(&s);
    multiplication_apres_parenthese(&s)
}
