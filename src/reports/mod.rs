use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keybreak::Decryption;

const PREVIEW_CHARS: usize = 60;

fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    }
}

pub fn print_ranked(results: &[Decryption]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Key"),
        Cell::new("Plaintext"),
    ]);

    for (rank, d) in results.iter().enumerate() {
        let mut score_cell = Cell::new(format!("{:.4}", d.score));
        if rank == 0 {
            score_cell = score_cell.fg(Color::Green);
        }
        table.add_row(vec![
            Cell::new(rank + 1),
            score_cell,
            Cell::new(&d.key),
            Cell::new(preview(&d.plaintext)),
        ]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("{}", table);
}
