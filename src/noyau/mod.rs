//! Noyau de la calculatrice à saisie guidée
//!
//! Organisation interne :
//! - touches.rs    : touches de saisie (chiffres, opérateurs, C, =…) + symboles des boutons
//! - saisie.rs     : machine de saisie (grammaire touche par touche, AC/CE, "=")
//! - affichage.rs  : modèle d’affichage + contrat du puits (afficher / surligner)
//! - reecriture.rs : × ÷ % et multiplications implicites (texte -> texte)
//! - jetons.rs     : tokenisation de l’expression réécrite
//! - rpn.rs        : shunting-yard + évaluation RPN (f64)
//! - format.rs     : résultat f64 -> texte canonique
//! - eval.rs       : pipeline complet
//! - erreur.rs     : ErreurEval

pub mod affichage;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reecriture;
pub mod rpn;
pub mod saisie;
pub mod touches;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use affichage::{Affichage, Afficheur, Zone};
pub use saisie::MachineSaisie;
pub use touches::{Operateur, Touche};
