// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur (f64)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de flottants
//
// Règles:
// - Moins unaire:
//    - un '-' qui ne suit pas une valeur devient Tok::Neg
//    - Neg est préfixe, lie plus fort que * et /, et se compose ("--3" = 3)
// - Division par zéro et résultat non fini => erreur (jamais Infinity/NaN)

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Star, Minus, Num(4)]
///   rpn:    [Num(3), Num(4), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    // deux valeurs collées : "2 3"
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    // la multiplication implicite est insérée en amont (réécriture)
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::Parentheses);
                }
                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler
                ops.push(Tok::Neg);
            }

            // réservé à la RPN, jamais produit par tokenize
            Tok::Neg => return Err(ErreurEval::ExpressionInvalide),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    // "*3", "3+*4", "(+2)"
                    return Err(ErreurEval::ExpressionInvalide);
                }

                // tous binaires ici, associatifs à gauche
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        if let Some(op) = ops.pop() {
                            out.push(op);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Parentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(x) => st.push(*x),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };

                if !v.is_finite() {
                    return Err(ErreurEval::NonFini);
                }
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::Parentheses),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
