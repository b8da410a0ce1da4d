//! src/app/etat.rs
//!
//! État UI : la machine de saisie + l’écran (puits d’affichage).
//!
//! Contrats :
//! - Aucune règle de grammaire ici (tout passe par `MachineSaisie`).
//! - L’écran ne fait que recevoir : texte via `afficher`, surbrillance via `surligner`.

use std::time::Duration;

use crate::noyau::{Affichage, Afficheur, MachineSaisie, Touche, Zone};

use super::surbrillance::Surbrillance;

/// Puits d’affichage côté UI : dernier `Affichage` reçu + surbrillances.
#[derive(Clone, Debug)]
pub struct Ecran {
    pub affichage: Affichage,
    precedent: Surbrillance,
    courant: Surbrillance,
    /// Horloge egui (s), mise à jour à chaque frame avant toute touche.
    pub maintenant: f64,
}

impl Ecran {
    fn new(affichage: Affichage) -> Self {
        Self {
            affichage,
            precedent: Surbrillance::default(),
            courant: Surbrillance::default(),
            maintenant: 0.0,
        }
    }

    fn zone(&self, zone: Zone) -> &Surbrillance {
        match zone {
            Zone::Precedent => &self.precedent,
            Zone::Courant => &self.courant,
        }
    }

    pub fn surligne(&self, zone: Zone) -> bool {
        self.zone(zone).active(self.maintenant)
    }

    /// Délai avant la prochaine extinction (pour demander un repaint).
    pub fn delai_avant_extinction(&self) -> Option<Duration> {
        [Zone::Precedent, Zone::Courant]
            .into_iter()
            .filter_map(|z| self.zone(z).restant(self.maintenant))
            .min()
    }
}

impl Afficheur for Ecran {
    fn afficher(&mut self, affichage: &Affichage) {
        self.affichage = affichage.clone();
    }

    fn surligner(&mut self, zone: Zone) {
        let maintenant = self.maintenant;
        match zone {
            Zone::Precedent => self.precedent.declencher(maintenant),
            Zone::Courant => self.courant.declencher(maintenant),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub machine: MachineSaisie,
    pub ecran: Ecran,
}

impl Default for AppCalc {
    fn default() -> Self {
        let machine = MachineSaisie::new();
        let ecran = Ecran::new(machine.affichage());
        Self { machine, ecran }
    }
}

impl AppCalc {
    /// Point d’entrée unique des adaptateurs (boutons + clavier).
    pub fn appuyer(&mut self, touche: Touche) {
        self.machine.dispatch(touche, &mut self.ecran);
    }
}
