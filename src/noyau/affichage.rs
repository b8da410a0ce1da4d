// src/noyau/affichage.rs
//
// Modèle d’affichage (pur) + contrat du “puits” d’affichage.
// Le noyau ne dessine rien : il produit un `Affichage` et, au besoin,
// demande une surbrillance par zone.

/// Libellé du bouton Clear.
/// - AC : le prochain Clear remet tout à zéro
/// - CE : le prochain Clear efface un caractère
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibelleClear {
    AC,
    CE,
}

impl LibelleClear {
    pub fn as_str(self) -> &'static str {
        match self {
            LibelleClear::AC => "AC",
            LibelleClear::CE => "CE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// Expression en cours (ou résultat / "ERROR").
    pub courant: String,
    /// Ligne de contexte : "2+2 =" ou "Ans = 4".
    pub precedent: String,
    pub libelle_clear: LibelleClear,
}

/// Les deux zones d’affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Precedent,
    Courant,
}

/// Puits d’affichage (implémenté par l’UI, ou par un enregistreur en test).
pub trait Afficheur {
    fn afficher(&mut self, affichage: &Affichage);

    /// Surbrillance transitoire d’une zone, indépendante du texte.
    fn surligner(&mut self, zone: Zone);
}
