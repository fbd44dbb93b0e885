use std::hint::black_box;

use grid_explorer::explore;

fn main() {
    divan::main();
}

/// An open square board with gold along the diagonal.
fn board(size: usize) -> String {
    let mut input = format!("{size} {size}\n");
    for y in 0..size {
        for x in 0..size {
            input.push(match (x, y) {
                (0, 0) => 'P',
                (x, y) if x == y => 'G',
                _ => '.',
            });
        }
        input.push('\n');
    }
    input
}

#[divan::bench(args = [64, 256, 1024])]
fn parse_and_flood_fill(bencher: divan::Bencher, size: usize) {
    bencher
        .with_inputs(|| board(size))
        .bench_local_values(|input| explore::process(black_box(&input)).unwrap());
}
