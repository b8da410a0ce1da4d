// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux zones : ligne “précédent” (petite) + expression courante (grande)
// - Pavé 5×4 : chaque bouton porte un symbole -> Touche (adaptateur pointeur)
// - Le bouton "C" affiche AC ou CE selon l’état
//
// Note :
// - Aucune logique de saisie ici : tout clic devient `appuyer(touche)`.

use eframe::egui;

use crate::noyau::{Touche, Zone};

use super::etat::AppCalc;

/// Disposition du pavé (symboles reconnus par `Touche::depuis_symbole`).
const PAVE: [[&str; 4]; 5] = [
    ["C", "(", ")", "%"],
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

const TAILLE_BOUTON: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let a = &self.ecran.affichage;

        Self::zone_texte(
            ui,
            &a.precedent,
            18.0,
            self.ecran.surligne(Zone::Precedent),
        );
        Self::zone_texte(ui, &a.courant, 36.0, self.ecran.surligne(Zone::Courant));
    }

    /// Zone alignée à droite, fond accentué pendant la surbrillance.
    fn zone_texte(ui: &mut egui::Ui, texte: &str, taille: f32, surligne: bool) {
        let fond = if surligne {
            ui.visuals().selection.bg_fill
        } else {
            ui.visuals().extreme_bg_color
        };

        egui::Frame::default()
            .fill(fond)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(taille * 1.3);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).monospace().size(taille));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let libelle_clear = self.ecran.affichage.libelle_clear;
        let mut appuis: Vec<Touche> = Vec::new();

        egui::Grid::new("pave_saisie")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for symbole in ligne {
                        let label = if symbole == "C" {
                            libelle_clear.as_str()
                        } else {
                            symbole
                        };
                        let resp = ui.add_sized(
                            TAILLE_BOUTON,
                            egui::Button::new(egui::RichText::new(label).size(22.0)),
                        );
                        if resp.clicked() {
                            if let Some(t) = Touche::depuis_symbole(symbole) {
                                appuis.push(t);
                            }
                        }
                    }
                    ui.end_row();
                }
            });

        for t in appuis {
            self.appuyer(t);
        }
    }
}
