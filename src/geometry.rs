/// Words shorter than this never score and are dropped at dictionary load.
pub const MIN_WORD_LENGTH: usize = 3;

/// Neighbor lists for a rows x cols grid under king's moves, indexed by
/// linear cell index. Built once per geometry and shared read-only.
/// Degenerate dimensions yield an empty structure.
pub fn build_adjacency(rows: usize, cols: usize) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); rows * cols];
    for r in 0..rows as i64 {
        for c in 0..cols as i64 {
            let list = &mut adjacency[(r * cols as i64 + c) as usize];
            for dr in -1..=1i64 {
                let nr = r + dr;
                if nr < 0 || nr >= rows as i64 {
                    continue;
                }
                for dc in -1..=1i64 {
                    let nc = c + dc;
                    if nc < 0 || nc >= cols as i64 {
                        continue;
                    }
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    list.push((nr * cols as i64 + nc) as usize);
                }
            }
        }
    }
    adjacency
}

/// Point value per word length, capped at the board's cell count (the
/// longest word a board can hold).
pub fn score_table(rows: usize, cols: usize) -> Vec<u32> {
    (0..=rows * cols)
        .map(|len| match len {
            _ if len < MIN_WORD_LENGTH => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        })
        .collect()
}
