//! Noyau — évaluation (pipeline réel)
//!
//! réécriture (× ÷ % juxtapositions) -> jetons -> RPN -> valeur f64 -> texte
//!
//! Aucune exécution de code générique : grammaire restreinte (nombres, + - * /,
//! parenthèses, moins unaire). Toute panne remonte en `ErreurEval`.

use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::reecriture::reecrire;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression “humaine” (×, ÷, %) et retourne
/// le résultat sous forme canonique, ou l’erreur.
pub fn evaluate(expr: &str) -> Result<String, ErreurEval> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1-4) Réécritures textuelles
    let reecrite = reecrire(s);

    // 5) Jetons -> RPN -> valeur
    let jetons = tokenize(&reecrite)?;
    let rpn = to_rpn(&jetons)?;
    log::debug!(
        "éval {s:?} -> {reecrite:?} | rpn: {}",
        format_tokens(&rpn)
    );
    let v = eval_rpn(&rpn)?;

    // 6) Texte canonique
    Ok(format_nombre(v))
}
