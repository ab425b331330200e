use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use enigma::consts::index_letter;
use enigma::machine::Rotor;
use enigma::presets::{KnownReflector, KnownRotor};
use strum::IntoEnumIterator;

fn letter_cell(i: u8) -> Cell {
    Cell::new(index_letter(i)).set_alignment(CellAlignment::Center)
}

pub fn print_pairs(name: &str, pairs: &[(u8, u8)]) {
    println!("\n{}: {} pair(s)", name, pairs.len());
    if pairs.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(pairs.iter().map(|&(a, _)| letter_cell(a)));
    table.add_row(pairs.iter().map(|&(_, b)| letter_cell(b)));
    println!("{}", table);
}

pub fn print_rotors(rotors: &[Rotor]) {
    println!("\nRotors (rightmost first): {}", rotors.len());
    if rotors.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Pos").fg(Color::Cyan),
        Cell::new("Notches").fg(Color::Red),
        Cell::new("Wiring (at current position)"),
    ]);

    for (i, rotor) in rotors.iter().enumerate() {
        let notches: String = rotor.notches().iter().map(|&n| index_letter(n)).collect();
        let wiring: String = rotor
            .wiring()
            .as_slice()
            .iter()
            .map(|&w| index_letter(w))
            .collect();
        table.add_row(vec![
            Cell::new(i).add_attribute(Attribute::Bold),
            Cell::new(index_letter(rotor.offset())).fg(Color::Cyan),
            Cell::new(if notches.is_empty() { "-".to_string() } else { notches }).fg(Color::Red),
            Cell::new(wiring),
        ]);
    }
    println!("{}", table);
}

pub fn print_presets() {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Wiring"),
        Cell::new("Notches").fg(Color::Red),
    ]);

    for r in KnownRotor::iter() {
        table.add_row(vec![
            Cell::new(r.to_string()).add_attribute(Attribute::Bold),
            Cell::new("rotor"),
            Cell::new(r.wiring_str()),
            Cell::new(r.notch_str()).fg(Color::Red),
        ]);
    }
    for r in KnownReflector::iter() {
        table.add_row(vec![
            Cell::new(r.to_string()).add_attribute(Attribute::Bold),
            Cell::new("reflector"),
            Cell::new(r.table_str()),
            Cell::new("-"),
        ]);
    }
    println!("{}", table);
}
