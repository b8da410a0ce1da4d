//! Machine de saisie : construit l’expression touche par touche.
//!
//! Contrats (vérifiés après CHAQUE touche) :
//! - `expression` n’est jamais vide (placeholder "0")
//! - `dernier` == dernier caractère de `expression`
//! - parenthèses ouvertes non fermées == `profondeur`
//! - pas deux opérateurs binaires consécutifs, sauf "×-" / "÷-" (saisie du signe)
//! - au plus un '.' par nombre ; '%' seulement après un chiffre ou un '%'
//!
//! Une touche illégale est ignorée : l’état ne bouge pas (ce n’est pas une erreur).

use super::affichage::{Affichage, Afficheur, LibelleClear, Zone};
use super::eval::evaluate;
use super::touches::{Operateur, Touche};

/// Expression de départ (remplacée par le premier chiffre / "(" / "-").
pub const PLACEHOLDER: &str = "0";

/// Texte affiché quand l’évaluation échoue, quelle qu’en soit la cause.
pub const MARQUEUR_ERREUR: &str = "ERROR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatEdition {
    pub(super) expression: String,
    /// Ligne “réponse précédente” ("2+2 =", puis "Ans = 4").
    pub(super) precedent: String,
    pub(super) dernier: char,
    /// Vrai après un résultat ou un reset : le prochain chiffre remplace.
    pub(super) attend_nouvelle: bool,
    pub(super) profondeur: usize,
    pub(super) point_permis: bool,
    /// Vrai entre un résultat et la touche suivante (instantané "Ans = …").
    pub(super) resultat_affiche: bool,
}

impl Default for EtatEdition {
    fn default() -> Self {
        Self {
            expression: PLACEHOLDER.to_string(),
            precedent: String::new(),
            dernier: '0',
            attend_nouvelle: false,
            profondeur: 0,
            point_permis: true,
            resultat_affiche: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MachineSaisie {
    etat: EtatEdition,
}

impl MachineSaisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> &EtatEdition {
        &self.etat
    }

    pub fn affichage(&self) -> Affichage {
        Affichage {
            courant: self.etat.expression.clone(),
            precedent: self.etat.precedent.clone(),
            libelle_clear: if self.etat.attend_nouvelle {
                LibelleClear::AC
            } else {
                LibelleClear::CE
            },
        }
    }

    /// Applique une touche et retourne le nouvel affichage.
    pub fn submit(&mut self, touche: Touche) -> Affichage {
        if self.etat.resultat_affiche {
            self.etat.precedent = format!("Ans = {}", self.etat.expression);
            self.etat.resultat_affiche = false;
        }

        let acceptee = match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Clear => {
                self.clear();
                true
            }
            Touche::Egal => {
                self.egal();
                true
            }
            autre => {
                let ok = self.structure(autre);
                if ok {
                    // on poursuit à partir du résultat ("4" puis "+" => "4+")
                    self.etat.attend_nouvelle = false;
                }
                ok
            }
        };

        if acceptee {
            self.etat.dernier = self.etat.expression.chars().last().unwrap_or('0');
        } else {
            log::trace!("touche ignorée {touche:?} après {:?}", self.etat.expression);
        }

        self.affichage()
    }

    /// Comme `submit`, puis pousse le résultat vers le puits d’affichage.
    /// "=" déclenche aussi la surbrillance des deux zones.
    pub fn dispatch(&mut self, touche: Touche, afficheur: &mut impl Afficheur) -> Affichage {
        let affichage = self.submit(touche);
        if touche == Touche::Egal {
            afficheur.surligner(Zone::Precedent);
            afficheur.surligner(Zone::Courant);
        }
        afficheur.afficher(&affichage);
        affichage
    }

    /* ------------------------ Chiffres ------------------------ */

    fn chiffre(&mut self, d: u8) -> bool {
        // pas de chiffre collé derrière un pourcentage
        if self.etat.dernier == '%' {
            return false;
        }
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return false;
        };

        let e = &mut self.etat;
        if e.attend_nouvelle {
            e.expression = c.to_string();
            e.attend_nouvelle = false;
            e.point_permis = true;
        } else if e.expression == PLACEHOLDER {
            e.expression = c.to_string();
        } else {
            e.expression.push(c);
        }
        true
    }

    /* ------------------------ Clear (AC / CE) ------------------------ */

    fn clear(&mut self) {
        if self.etat.attend_nouvelle || self.etat.expression.chars().count() == 1 {
            self.reset();
            return;
        }

        let e = &mut self.etat;
        match e.expression.pop() {
            Some(')') => e.profondeur += 1,
            Some('(') => e.profondeur = e.profondeur.saturating_sub(1),
            _ => {}
        }
        // '.' retiré => de nouveau permis ; opérateur retiré => on retombe
        // dans le nombre précédent, qui a peut-être déjà son point
        e.point_permis = !point_interdit_en_fin(&e.expression);
    }

    /// Remise à zéro totale (sauf la ligne “précédent”).
    fn reset(&mut self) {
        let precedent = std::mem::take(&mut self.etat.precedent);
        self.etat = EtatEdition {
            precedent,
            ..EtatEdition::default()
        };
    }

    /* ------------------------ "=" ------------------------ */

    fn egal(&mut self) {
        let e = &mut self.etat;

        // fermeture automatique des parenthèses restantes
        for _ in 0..e.profondeur {
            e.expression.push(')');
        }
        e.profondeur = 0;

        let enregistrement = format!("{} =", e.expression);
        match evaluate(&e.expression) {
            Ok(v) => {
                log::debug!("{enregistrement} {v}");
                e.precedent = enregistrement;
                e.expression = v;
            }
            Err(err) => {
                log::debug!("{enregistrement} {MARQUEUR_ERREUR} ({err})");
                e.expression = MARQUEUR_ERREUR.to_string();
            }
        }

        e.attend_nouvelle = true;
        e.resultat_affiche = true;
        e.point_permis = !point_interdit_en_fin(&e.expression);
    }

    /* ------------------------ Parenthèses, opérateurs, %, . ------------------------ */

    /// Retourne false si la touche est illégale dans l’état courant.
    fn structure(&mut self, touche: Touche) -> bool {
        let e = &mut self.etat;
        let d = e.dernier;
        let apres_operande = d.is_ascii_digit() || d == '%';

        match touche {
            Touche::ParOuvrante => {
                if e.expression == PLACEHOLDER {
                    e.expression = "(".to_string();
                } else {
                    e.expression.push('(');
                }
                e.profondeur += 1;
                e.point_permis = true;
            }

            Touche::ParFermante => {
                if e.profondeur == 0 || !apres_operande {
                    return false;
                }
                e.expression.push(')');
                e.profondeur -= 1;
                e.point_permis = true;
            }

            Touche::Pourcent => {
                if !apres_operande {
                    return false;
                }
                e.expression.push('%');
            }

            Touche::Op(Operateur::Moins) => {
                if e.expression == PLACEHOLDER {
                    e.expression = "-".to_string();
                } else if apres_operande || matches!(d, '÷' | '×' | ')') {
                    e.expression.push('-');
                } else {
                    return false;
                }
                e.point_permis = true;
            }

            Touche::Op(op) => {
                if !(apres_operande || d == ')') {
                    return false;
                }
                e.expression.push(op.symbole());
                e.point_permis = true;
            }

            Touche::Point => {
                if !d.is_ascii_digit() || !e.point_permis {
                    return false;
                }
                e.expression.push('.');
                e.point_permis = false;
            }

            Touche::Chiffre(_) | Touche::Clear | Touche::Egal => return false,
        }
        true
    }
}

/// Le nombre en fin d’expression a-t-il déjà un '.' ou un exposant ("1e-7") ?
fn point_interdit_en_fin(s: &str) -> bool {
    // partie "chiffres et points" en fin d’expression (ASCII : 1 octet par char)
    let queue = s
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .count();
    let (tete, nombre) = s.split_at(s.len() - queue);
    nombre.contains('.')
        || tete.ends_with('e')
        || tete.ends_with("e+")
        || tete.ends_with("e-")
}
