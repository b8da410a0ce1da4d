// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, clavier, surbrillance)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre dans une frame :
// 1) horloge de l’écran (pour les surbrillances)
// 2) touches clavier (consommées de la file egui)
// 3) vue (les clics du pavé passent par appuyer())
// 4) repaint programmé si une surbrillance doit s’éteindre

pub mod clavier;
pub mod etat;
pub mod surbrillance;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ecran.maintenant = ctx.input(|i| i.time);

        for touche in clavier::touches_du_clavier(ctx) {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // Sans entrée, egui ne redessine pas : on réveille la frame d’extinction.
        if let Some(delai) = self.ecran.delai_avant_extinction() {
            ctx.request_repaint_after(delai);
        }
    }
}
