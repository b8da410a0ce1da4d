//! Surbrillance transitoire d’une zone d’affichage.
//!
//! Horloge = temps egui (`InputState::time`, secondes, f64) : marche pareil en natif et en wasm.
//! Un nouveau déclenchement écrase l’échéance précédente (le dernier gagne).

use std::time::Duration;

/// Durée de la surbrillance après "=" (secondes).
pub const DUREE_SURBRILLANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surbrillance {
    jusqua: Option<f64>,
}

impl Surbrillance {
    pub fn declencher(&mut self, maintenant: f64) {
        self.jusqua = Some(maintenant + DUREE_SURBRILLANCE);
    }

    pub fn active(&self, maintenant: f64) -> bool {
        matches!(self.jusqua, Some(fin) if maintenant < fin)
    }

    /// Temps restant avant extinction (None si éteinte).
    pub fn restant(&self, maintenant: f64) -> Option<Duration> {
        let fin = self.jusqua?;
        (maintenant < fin).then(|| Duration::from_secs_f64(fin - maintenant))
    }
}
