// src/app/clavier.rs
//
// Adaptateur clavier physique -> touches.
// Table fixe (identité de touche, au sens KeyboardEvent.key) :
//   chiffres            -> Chiffre
//   ( ) % . + -         -> eux-mêmes
//   /  -> ÷     *  -> ×
//   Enter ou =          -> Egal
//   Backspace           -> Clear
// Le reste ne produit rien.
//
// Les événements convertis sont RETIRÉS de la file egui (équivalent du
// preventDefault web : rien d’autre ne les voit).

use eframe::egui;

use crate::noyau::{Operateur, Touche};

/// Table fixe des identités de touches.
pub fn touche_depuis_cle(cle: &str) -> Option<Touche> {
    match cle {
        "Enter" | "=" => Some(Touche::Egal),
        "Backspace" => Some(Touche::Clear),
        "/" => Some(Touche::Op(Operateur::Divise)),
        "*" => Some(Touche::Op(Operateur::Fois)),
        "(" | ")" | "%" | "." | "+" | "-" => Touche::depuis_symbole(cle),
        _ => {
            let mut it = cle.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => c
                    .to_digit(10)
                    .and_then(|d| Touche::chiffre(d as u8)),
                _ => None,
            }
        }
    }
}

/// Touches portées par un événement egui.
/// - Text : un caractère = une identité de touche ("7", "*", "=")
/// - Key  : seulement Enter / Backspace (les chiffres arrivent déjà en Text)
fn touches_de_l_evenement(ev: &egui::Event) -> Vec<Touche> {
    match ev {
        egui::Event::Text(t) => {
            let mut buf = [0u8; 4];
            t.chars()
                .filter_map(|c| touche_depuis_cle(c.encode_utf8(&mut buf)))
                .collect()
        }
        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            ..
        } => vec![Touche::Egal],
        egui::Event::Key {
            key: egui::Key::Backspace,
            pressed: true,
            ..
        } => vec![Touche::Clear],
        _ => Vec::new(),
    }
}

/// Extrait (et consomme) les touches de la frame courante.
pub fn touches_du_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input_mut(|i| {
        let mut out = Vec::new();
        i.events.retain(|ev| {
            let touches = touches_de_l_evenement(ev);
            let garder = touches.is_empty();
            out.extend(touches);
            garder
        });
        out
    })
}
