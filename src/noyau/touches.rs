// src/noyau/touches.rs
//
// Touches de saisie : une touche = une unité d’entrée utilisateur.
// Les adaptateurs (boutons, clavier) produisent des `Touche`; le noyau ne voit rien d’autre.

/// Opérateurs binaires, avec leur symbole “humain” (×, ÷).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9 (garanti par `chiffre`)
    Chiffre(u8),
    Op(Operateur),
    ParOuvrante,
    ParFermante,
    Pourcent,
    Point,
    Clear,
    Egal,
}

impl Touche {
    /// Chiffre validé : None hors 0..=9.
    pub fn chiffre(d: u8) -> Option<Touche> {
        (d <= 9).then_some(Touche::Chiffre(d))
    }

    /// Adaptateur “pointeur” : symbole porté par un bouton -> touche.
    /// Symboles reconnus : 0-9 + - × ÷ ( ) % . C =
    pub fn depuis_symbole(s: &str) -> Option<Touche> {
        let mut it = s.chars();
        let c = it.next()?;
        if it.next().is_some() {
            return None;
        }

        let t = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '+' => Touche::Op(Operateur::Plus),
            '-' => Touche::Op(Operateur::Moins),
            '×' => Touche::Op(Operateur::Fois),
            '÷' => Touche::Op(Operateur::Divise),
            '(' => Touche::ParOuvrante,
            ')' => Touche::ParFermante,
            '%' => Touche::Pourcent,
            '.' => Touche::Point,
            'C' => Touche::Clear,
            '=' => Touche::Egal,
            _ => return None,
        };
        Some(t)
    }
}
