// ===== wordforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use wordforge::board::{letter_token, Boggler};
use wordforge::solver::ScoreOutcome;

pub fn print_board<B: Boggler>(name: &str, board: &B) {
    println!("\nBoard: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for r in 0..board.rows() {
        let cells: Vec<Cell> = (0..board.cols())
            .map(|c| {
                Cell::new(letter_token(board.letter(r * board.cols() + c)))
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_words(outcome: &ScoreOutcome) {
    let mut words = outcome.words.clone();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![Cell::new("Word"), Cell::new("Points")]);
    for (word, value) in &words {
        table.add_row(vec![
            Cell::new(word),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!(
        "Total: {} points across {} words",
        outcome.total,
        outcome.words.len()
    );
}
