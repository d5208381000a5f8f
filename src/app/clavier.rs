// src/app/clavier.rs
//
// Clavier -> jeton de commande (adaptateur trivial).
// Lettres a-f : seulement en PROG + HEX, envoyées en minuscule
// ("C" majuscule est réservé à l’effacement).

use eframe::egui::{Event, Key, Modifiers};

pub fn jeton_pour_evenement(ev: &Event, prog_hex: bool) -> Option<&'static str> {
    match ev {
        Event::Text(t) => {
            let mut chars = t.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => jeton_pour_caractere(c, prog_hex),
                _ => None,
            }
        }
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => jeton_pour_touche(*key, *modifiers),
        _ => None,
    }
}

pub fn jeton_pour_caractere(c: char, prog_hex: bool) -> Option<&'static str> {
    const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    const LETTRES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    match c {
        '0'..='9' => Some(CHIFFRES[c as usize - '0' as usize]),
        '.' => Some("."),
        '+' => Some("+"),
        '-' => Some("-"),
        '*' => Some("*"),
        '/' => Some("/"),
        '%' => Some("%"),
        '=' => Some("="),
        'a'..='f' | 'A'..='F' if prog_hex => {
            let i = c.to_ascii_lowercase() as usize - 'a' as usize;
            Some(LETTRES[i])
        }
        _ => None,
    }
}

pub fn jeton_pour_touche(key: Key, modifiers: Modifiers) -> Option<&'static str> {
    match key {
        Key::Enter => Some("="),
        Key::Backspace => Some("CE"),
        Key::Escape => Some("C"),
        Key::Z if modifiers.command => Some("Undo"),
        Key::Y if modifiers.command => Some("Redo"),
        _ => None,
    }
}
