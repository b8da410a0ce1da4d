// src/noyau/erreur.rs
//
// Erreurs d’évaluation. À la frontière (machine de saisie), toutes les variantes
// donnent le même marqueur visible "ERROR"; le détail ne sert qu’au journal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses déséquilibrées")]
    Parentheses,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,
}
