// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    /// Moins unaire. Jamais produit par `tokenize` : c’est `to_rpn` qui
    /// requalifie un Minus placé là où une valeur est attendue.
    Neg,

    LPar,
    RPar,
}

/// Tokenize une expression déjà normalisée (opérateurs ASCII).
/// Supporte:
/// - nombres décimaux (ex: 12, 2.5, 5., .5)
/// - exposant (ex: 1e+22, 1.5e-7) : forme produite par l’affichage des résultats
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : suite de chiffres et de points (au plus un point, vérifié au parse)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            i = fin_exposant(&chars, i);
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_litteral(&lit)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Suffixe `e[+-]?chiffres` optionnel à partir de `i`; retourne la nouvelle fin.
/// Sans chiffre après le `e`, rien n’est consommé.
fn fin_exposant(chars: &[char], i: usize) -> usize {
    if !matches!(chars.get(i), Some('e' | 'E')) {
        return i;
    }
    let mut j = i + 1;
    if matches!(chars.get(j), Some('+' | '-')) {
        j += 1;
    }
    let debut = j;
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
    }
    if j == debut {
        i
    } else {
        j
    }
}

/// "." seul ou "1.2.3" sont refusés.
fn parse_litteral(lit: &str) -> Result<f64, ErreurEval> {
    let points = lit.chars().filter(|&c| c == '.').count();
    let chiffres = lit.chars().any(|c| c.is_ascii_digit());
    if points > 1 || !chiffres {
        return Err(ErreurEval::NombreInvalide(lit.to_string()));
    }
    lit.parse::<f64>()
        .map_err(|_| ErreurEval::NombreInvalide(lit.to_string()))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
